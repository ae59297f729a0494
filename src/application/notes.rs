//! Notes use cases

use crate::application::RecordService;
use crate::domain::{Note, NotePatch};
use crate::error::Result;
use chrono::NaiveDateTime;

pub type NotesService = RecordService<Note>;

impl RecordService<Note> {
    pub fn add(&mut self, title: String, content: String, now: NaiveDateTime) -> Result<&Note> {
        self.repository.add(Note::new(title, content, now))
    }

    /// Overwrite the non-empty fields and refresh the timestamp
    pub fn edit(
        &mut self,
        id: u32,
        title: Option<String>,
        content: Option<String>,
        now: NaiveDateTime,
    ) -> Result<&Note> {
        self.repository.edit(
            id,
            NotePatch {
                title,
                content,
                edited_at: now,
            },
        )
    }
}
