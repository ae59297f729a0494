//! Contacts use cases

use crate::application::RecordService;
use crate::domain::{Contact, ContactPatch};
use crate::error::Result;

pub type ContactsService = RecordService<Contact>;

impl RecordService<Contact> {
    pub fn add(
        &mut self,
        name: String,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<&Contact> {
        self.repository.add(Contact::new(name, phone, email))
    }

    pub fn edit(&mut self, id: u32, patch: ContactPatch) -> Result<&Contact> {
        self.repository.edit(id, patch)
    }

    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.repository.search(query)
    }
}
