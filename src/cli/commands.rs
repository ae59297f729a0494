//! CLI command definitions

use crate::domain::Priority;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "assistant")]
#[command(about = "Personal assistant: notes, tasks, contacts and finances", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Manage notes
    Notes {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Manage tasks
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Manage contacts
    Contacts {
        #[command(subcommand)]
        action: ContactAction,
    },

    /// Manage income and expenses
    Finance {
        #[command(subcommand)]
        action: FinanceAction,
    },

    /// Evaluate an arithmetic expression (numbers, + - * /, parentheses)
    Calc {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteAction {
    /// Add a note
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        content: String,
    },
    /// List all notes
    List,
    /// Show one note
    View { id: u32 },
    /// Edit a note; omitted or empty values are left unchanged
    Edit {
        id: u32,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete { id: u32 },
    /// Export notes to CSV
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import notes from CSV
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Add a task
    Add {
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// high, medium or low
        #[arg(short, long, default_value = "low")]
        priority: Priority,
        /// Due date (DD-MM-YYYY)
        #[arg(long)]
        due: Option<String>,
    },
    /// List all tasks
    List,
    /// Show one task
    View { id: u32 },
    /// Mark a task as done
    Done { id: u32 },
    /// Edit a task; omitted or empty values are left unchanged
    Edit {
        id: u32,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        priority: Option<Priority>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete a task
    Delete { id: u32 },
    /// Export tasks to CSV
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import tasks from CSV
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum ContactAction {
    /// Add a contact
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// List all contacts
    List,
    /// Show one contact
    View { id: u32 },
    /// Find contacts by name or phone
    Search { query: String },
    /// Edit a contact; omitted or empty values are left unchanged
    Edit {
        id: u32,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a contact
    Delete { id: u32 },
    /// Export contacts to CSV
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import contacts from CSV
    Import { file: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum FinanceAction {
    /// Add a record: positive amounts are income, negative are expenses
    Add {
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(short, long)]
        category: String,
        /// Date (DD-MM-YYYY, default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List all records
    List,
    /// Show one record
    View { id: u32 },
    /// Edit a record; omitted or empty values are left unchanged
    Edit {
        id: u32,
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Summarize a period and save it as report_<START>_<END>.csv
    Report {
        /// First day (DD-MM-YYYY)
        start: String,
        /// Last day, inclusive (DD-MM-YYYY)
        end: String,
    },
    /// Delete a record
    Delete { id: u32 },
    /// Export records to CSV
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import records from CSV
    Import { file: PathBuf },
}
