//! In-memory note storage.
//!
//! Notes live for the lifetime of the process. Every operation takes the
//! single store lock, so each request's read-modify-write happens atomically.

use anyhow::anyhow;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{NoteError, NoteResult};
use crate::models::{CreateNote, Note, UpdateNote};

struct Entry {
    /// Insertion order, breaks `updated_at` ties in `list`
    seq: u64,
    note: Note,
}

#[derive(Default)]
struct Inner {
    notes: HashMap<String, Entry>,
    next_seq: u64,
}

#[derive(Default)]
pub struct NoteStore {
    inner: Mutex<Inner>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> NoteResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| NoteError::Internal(anyhow!("note store lock poisoned")))
    }

    pub fn create(&self, req: CreateNote) -> NoteResult<Note> {
        let content = req
            .content
            .filter(|c| !c.is_empty())
            .ok_or_else(NoteError::content_required)?;

        let note = Note::new(req.title, content, req.metadata.unwrap_or_default());

        let mut inner = self.lock()?;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.notes.insert(
            note.id.clone(),
            Entry {
                seq,
                note: note.clone(),
            },
        );

        Ok(note)
    }

    pub fn get(&self, id: &str) -> NoteResult<Note> {
        self.lock()?
            .notes
            .get(id)
            .map(|e| e.note.clone())
            .ok_or_else(NoteError::note_not_found)
    }

    pub fn update(&self, id: &str, req: UpdateNote) -> NoteResult<Note> {
        let mut inner = self.lock()?;
        let entry = inner.notes.get_mut(id).ok_or_else(NoteError::note_not_found)?;
        entry.note.apply(req);
        Ok(entry.note.clone())
    }

    /// All notes, most recently updated first.
    pub fn list(&self) -> NoteResult<Vec<Note>> {
        let inner = self.lock()?;
        let mut entries: Vec<&Entry> = inner.notes.values().collect();
        entries.sort_by(|a, b| {
            b.note
                .updated_at
                .cmp(&a.note.updated_at)
                .then(a.seq.cmp(&b.seq))
        });
        Ok(entries.into_iter().map(|e| e.note.clone()).collect())
    }

    pub fn len(&self) -> NoteResult<usize> {
        Ok(self.lock()?.notes.len())
    }

    pub fn is_empty(&self) -> NoteResult<bool> {
        Ok(self.len()? == 0)
    }
}
