//! assistant - Personal productivity CLI
//!
//! Keeps notes, tasks, contacts and finance records in per-kind JSON stores,
//! with CSV export/import and dated finance reports.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::AssistError;
