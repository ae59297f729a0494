//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod csv_bridge;
pub mod repository;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use csv_bridge::{CsvRecord, ExportOutcome};
pub use repository::{FinanceReport, Repository};
pub use storage::JsonStore;
pub use workspace::Workspace;
