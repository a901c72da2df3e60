use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Title given to notes created without one.
pub const UNTITLED: &str = "Untitled";

pub type Metadata = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    /// Markdown source
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: Option<String>, content: String, metadata: Metadata) -> Self {
        let now = Utc::now();
        Self {
            id: new_note_id(),
            title: title.filter(|t| !t.is_empty()).unwrap_or_else(|| UNTITLED.to_string()),
            content,
            metadata,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Empty strings never overwrite, metadata is
    /// merged key by key, and `updated_at` is always refreshed.
    pub fn apply(&mut self, update: UpdateNote) {
        if let Some(title) = update.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(content) = update.content.filter(|c| !c.is_empty()) {
            self.content = content;
        }
        if let Some(metadata) = update.metadata {
            self.metadata.extend(metadata);
        }
        self.touch(Utc::now());
    }

    /// Refresh `updated_at`, never moving it before `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}

/// 128 random bits as 32 lowercase hex characters.
pub fn new_note_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Body of `POST /api/notes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNote {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Body of `PUT /api/notes/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNote {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}
