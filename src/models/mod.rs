mod note;

pub use note::{new_note_id, CreateNote, Metadata, Note, UpdateNote, UNTITLED};
