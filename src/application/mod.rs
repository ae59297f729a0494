//! Application layer - Use cases and orchestration

pub mod contacts;
pub mod finance;
pub mod init;
pub mod manage_config;
pub mod notes;
pub mod records;
pub mod tasks;

pub use contacts::ContactsService;
pub use finance::FinanceService;
pub use manage_config::ConfigService;
pub use notes::NotesService;
pub use records::RecordService;
pub use tasks::TasksService;
