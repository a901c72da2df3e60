use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap},
    response::Html,
    Json,
};
use tracing::info;

use super::types::CreatedNote;
use super::AppState;
use crate::error::{ApiError, NoteError, PageError};
use crate::models::{CreateNote, Note, UpdateNote};
use crate::render::{render_landing_page, render_note_page};

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, NoteError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| NoteError::Validation(e.body_text()))
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<CreateNote>, JsonRejection>,
) -> Result<Json<CreatedNote>, ApiError> {
    let note = state.store.create(json_body(payload)?)?;

    let url = state.links.note_url(
        &note.id,
        header_str(&headers, "x-forwarded-proto"),
        header_str(&headers, header::HOST.as_str()),
    );
    info!("Created note {} ({} bytes)", note.id, note.content.len());

    Ok(Json(CreatedNote { url, note }))
}

/// GET /api/notes/:id
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(state.store.get(&id)?))
}

/// PUT /api/notes/:id
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNote>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let note = state.store.update(&id, json_body(payload)?)?;
    info!("Updated note {}", note.id);
    Ok(Json(note))
}

/// GET /api/notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(state.store.list()?))
}

/// GET /note/:id
pub async fn note_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let note = state.store.get(&id)?;
    Ok(Html(render_note_page(&note)))
}

/// GET /
pub async fn landing_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    Ok(Html(render_landing_page(state.store.len()?)))
}
