//! Address book contacts

use crate::domain::record::{non_empty, overwrite, overwrite_optional, Patch, Record};
use crate::domain::EntityKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(alias = "contact_id")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: String, phone: Option<String>, email: Option<String>) -> Self {
        Contact {
            id: 0,
            name,
            phone: non_empty(phone),
            email: non_empty(email),
        }
    }

    /// Case-insensitive match on the name, verbatim match on the phone
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
            || self
                .phone
                .as_deref()
                .is_some_and(|phone| phone.contains(query))
    }
}

impl Record for Contact {
    const KIND: EntityKind = EntityKind::Contacts;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Patch<Contact> for ContactPatch {
    fn apply(self, contact: &mut Contact) {
        overwrite(&mut contact.name, self.name);
        overwrite_optional(&mut contact.phone, self.phone);
        overwrite_optional(&mut contact.email, self.email);
    }
}
