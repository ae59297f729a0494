//! Domain layer - Records, edits and pure calculations

pub mod calc;
pub mod contact;
pub mod dates;
pub mod finance;
pub mod kind;
pub mod note;
pub mod record;
pub mod task;

pub use contact::{Contact, ContactPatch};
pub use finance::{FinancePatch, FinanceRecord, FinanceSummary};
pub use kind::EntityKind;
pub use note::{Note, NotePatch};
pub use record::{Patch, Record};
pub use task::{Priority, Task, TaskPatch};
