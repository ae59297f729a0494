//! Entity kinds managed by the assistant

use std::fmt;

/// The four independent record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Notes,
    Tasks,
    Contacts,
    Finance,
}

impl EntityKind {
    /// Human-readable name of a single record of this kind
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Notes => "Note",
            EntityKind::Tasks => "Task",
            EntityKind::Contacts => "Contact",
            EntityKind::Finance => "Finance record",
        }
    }

    /// CLI subcommand that manages this kind
    pub fn command(&self) -> &'static str {
        match self {
            EntityKind::Notes => "notes",
            EntityKind::Tasks => "tasks",
            EntityKind::Contacts => "contacts",
            EntityKind::Finance => "finance",
        }
    }

    /// JSON store file name inside the data directory
    pub fn store_file_name(&self) -> &'static str {
        match self {
            EntityKind::Notes => "notes.json",
            EntityKind::Tasks => "tasks.json",
            EntityKind::Contacts => "contacts.json",
            EntityKind::Finance => "finance.json",
        }
    }

    /// Default CSV export file name inside the export directory
    pub fn export_file_name(&self) -> &'static str {
        match self {
            EntityKind::Notes => "notes_export.csv",
            EntityKind::Tasks => "tasks_export.csv",
            EntityKind::Contacts => "contacts_export.csv",
            EntityKind::Finance => "finance_export.csv",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}
