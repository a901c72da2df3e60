//! Response types for the note API.

use serde::{Deserialize, Serialize};

use crate::models::Note;

/// Response after creating a note: the note plus its share link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedNote {
    pub url: String,
    #[serde(flatten)]
    pub note: Note,
}

/// Builds share links for notes.
///
/// With a configured base the link is `{base}/note/{id}`; otherwise it is
/// derived from the request's `Host` and `X-Forwarded-Proto` headers.
#[derive(Debug, Clone, Default)]
pub struct ShareLinks {
    base: Option<String>,
}

impl ShareLinks {
    pub fn new(base: Option<String>) -> Self {
        Self {
            base: base.map(|b| b.trim_end_matches('/').to_string()),
        }
    }

    pub fn note_url(&self, id: &str, scheme: Option<&str>, host: Option<&str>) -> String {
        match (&self.base, host) {
            (Some(base), _) => format!("{}/note/{}", base, id),
            (None, Some(host)) => format!("{}://{}/note/{}", scheme.unwrap_or("http"), host, id),
            (None, None) => format!("/note/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_from_request_headers() {
        let links = ShareLinks::new(None);
        assert_eq!(
            links.note_url("abc", None, Some("notes.local:8080")),
            "http://notes.local:8080/note/abc"
        );
        assert_eq!(
            links.note_url("abc", Some("https"), Some("openmd.dev")),
            "https://openmd.dev/note/abc"
        );
        assert_eq!(links.note_url("abc", None, None), "/note/abc");
    }

    #[test]
    fn test_url_from_configured_base() {
        let links = ShareLinks::new(Some("https://md.example.com/".to_string()));
        assert_eq!(
            links.note_url("abc", Some("http"), Some("10.0.0.4")),
            "https://md.example.com/note/abc"
        );
    }
}
