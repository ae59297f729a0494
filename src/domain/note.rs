//! Notes: free-form text with a creation / last edit timestamp

use crate::domain::dates::format_timestamp;
use crate::domain::record::{overwrite, Patch, Record};
use crate::domain::EntityKind;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(alias = "note_id")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub timestamp: String,
}

impl Note {
    /// Create an unsaved note stamped with `now`; the repository assigns the id
    pub fn new(title: String, content: String, now: NaiveDateTime) -> Self {
        Note {
            id: 0,
            title,
            content,
            timestamp: format_timestamp(now),
        }
    }
}

impl Record for Note {
    const KIND: EntityKind = EntityKind::Notes;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Edit request for a note. Applying it always refreshes the timestamp.
#[derive(Debug, Clone)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub edited_at: NaiveDateTime,
}

impl Patch<Note> for NotePatch {
    fn apply(self, note: &mut Note) {
        overwrite(&mut note.title, self.title);
        overwrite(&mut note.content, self.content);
        note.timestamp = format_timestamp(self.edited_at);
    }
}
