//! Shared record behavior for every entity kind

use crate::domain::EntityKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A persisted record with an integer identifier unique within its kind
pub trait Record: Clone + Debug + Serialize + DeserializeOwned {
    const KIND: EntityKind;

    fn id(&self) -> u32;

    fn set_id(&mut self, id: u32);
}

/// Partial update applied by `edit`.
///
/// Absent and empty values leave the field unchanged; a patch can never
/// clear a field.
pub trait Patch<R> {
    fn apply(self, record: &mut R);
}

/// Keep only values that carry content
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn overwrite(target: &mut String, value: Option<String>) {
    if let Some(v) = non_empty(value) {
        *target = v;
    }
}

pub(crate) fn overwrite_optional(target: &mut Option<String>, value: Option<String>) {
    if let Some(v) = non_empty(value) {
        *target = Some(v);
    }
}
