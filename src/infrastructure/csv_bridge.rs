//! CSV interchange for record collections
//!
//! Column headers are the localized labels older exports used, so files
//! written by either version can be imported.

use crate::domain::finance::check_amount;
use crate::domain::{Contact, FinanceRecord, Note, Priority, Record, Task};
use crate::error::{AssistError, Result};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const STATUS_DONE: &str = "Выполнена";
const STATUS_OPEN: &str = "Не выполнена";

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// Empty collection: nothing was written
    Empty,
}

/// A record with a flat CSV representation
pub trait CsvRecord: Record {
    type Row: Serialize + DeserializeOwned;

    fn to_row(&self) -> Self::Row;

    /// Build an unsaved record from an imported row. `now` fills missing
    /// timestamps and dates.
    fn from_row(row: Self::Row, now: NaiveDateTime) -> Result<Self>;
}

fn serialize_amount<S: Serializer>(
    amount: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&amount.to_string())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NoteRow {
    #[serde(rename = "ID", default, skip_deserializing)]
    id: Option<u32>,
    #[serde(rename = "Заголовок")]
    title: String,
    #[serde(rename = "Содержимое", default)]
    content: String,
    #[serde(rename = "Дата", default)]
    timestamp: Option<String>,
}

impl CsvRecord for Note {
    type Row = NoteRow;

    fn to_row(&self) -> NoteRow {
        NoteRow {
            id: Some(self.id),
            title: self.title.clone(),
            content: self.content.clone(),
            timestamp: Some(self.timestamp.clone()),
        }
    }

    fn from_row(row: NoteRow, now: NaiveDateTime) -> Result<Self> {
        let mut note = Note::new(row.title, row.content, now);
        if let Some(timestamp) = row.timestamp.filter(|t| !t.is_empty()) {
            note.timestamp = timestamp;
        }
        Ok(note)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskRow {
    #[serde(rename = "ID", default, skip_deserializing)]
    id: Option<u32>,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Status", default)]
    status: String,
    #[serde(rename = "Priority", default)]
    priority: String,
    #[serde(rename = "Due Date", default)]
    due_date: Option<String>,
}

fn is_done_status(status: &str) -> bool {
    let status = status.trim();
    status == STATUS_DONE
        || status.eq_ignore_ascii_case("done")
        || status.eq_ignore_ascii_case("true")
}

impl CsvRecord for Task {
    type Row = TaskRow;

    fn to_row(&self) -> TaskRow {
        TaskRow {
            id: Some(self.id),
            title: self.title.clone(),
            description: self.description.clone(),
            status: if self.done { STATUS_DONE } else { STATUS_OPEN }.to_string(),
            priority: self.priority.to_string(),
            due_date: self.due_date.clone(),
        }
    }

    fn from_row(row: TaskRow, _now: NaiveDateTime) -> Result<Self> {
        let priority = if row.priority.trim().is_empty() {
            Priority::default()
        } else {
            row.priority.parse().map_err(AssistError::Validation)?
        };
        let mut task = Task::new(row.title, row.description, priority, row.due_date);
        task.done = is_done_status(&row.status);
        Ok(task)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactRow {
    #[serde(rename = "ID", default, skip_deserializing)]
    id: Option<u32>,
    #[serde(rename = "Имя", default)]
    name: String,
    #[serde(rename = "Телефон", default)]
    phone: Option<String>,
    #[serde(rename = "E-mail", default)]
    email: Option<String>,
}

impl CsvRecord for Contact {
    type Row = ContactRow;

    fn to_row(&self) -> ContactRow {
        ContactRow {
            id: Some(self.id),
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    fn from_row(row: ContactRow, _now: NaiveDateTime) -> Result<Self> {
        Ok(Contact::new(row.name, row.phone, row.email))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FinanceRow {
    #[serde(rename = "ID", default, skip_deserializing)]
    id: Option<u32>,
    #[serde(rename = "Сумма", default, serialize_with = "serialize_amount")]
    amount: f64,
    #[serde(rename = "Категория", default)]
    category: String,
    #[serde(rename = "Дата", default)]
    date: Option<String>,
    #[serde(rename = "Описание", default)]
    description: Option<String>,
}

impl CsvRecord for FinanceRecord {
    type Row = FinanceRow;

    fn to_row(&self) -> FinanceRow {
        FinanceRow {
            id: Some(self.id),
            amount: self.amount,
            category: self.category.clone(),
            date: Some(self.date.clone()),
            description: self.description.clone(),
        }
    }

    fn from_row(row: FinanceRow, now: NaiveDateTime) -> Result<Self> {
        check_amount(row.amount)?;
        Ok(FinanceRecord::new(
            row.amount,
            row.category,
            row.date,
            row.description,
            now.date(),
        ))
    }
}

/// Column layout of a finance report, date first
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Дата")]
    date: &'a str,
    #[serde(rename = "Сумма", serialize_with = "serialize_amount")]
    amount: f64,
    #[serde(rename = "Категория")]
    category: &'a str,
    #[serde(rename = "Описание")]
    description: Option<&'a str>,
}

fn create_writer(path: &Path) -> Result<csv::Writer<fs::File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(csv::Writer::from_path(path)?)
}

/// Write one row per record, in collection order
pub fn export<R: CsvRecord>(records: &[R], path: &Path) -> Result<ExportOutcome> {
    if records.is_empty() {
        info!(kind = %R::KIND, "nothing to export");
        return Ok(ExportOutcome::Empty);
    }

    let mut writer = create_writer(path)?;
    for record in records {
        writer.serialize(record.to_row())?;
    }
    writer.flush()?;

    debug!(kind = %R::KIND, rows = records.len(), path = %path.display(), "export written");
    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        rows: records.len(),
    })
}

/// Parse every row of `path` into unsaved records.
///
/// The whole file is read before anything is returned, so a malformed row
/// fails the import as a unit.
pub fn read<R: CsvRecord>(path: &Path, now: NaiveDateTime) -> Result<Vec<R>> {
    if !path.is_file() {
        return Err(AssistError::ImportFileNotFound(path.to_path_buf()));
    }

    let malformed = |source: csv::Error| AssistError::MalformedCsv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(malformed)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<R::Row>() {
        let row = row.map_err(malformed)?;
        records.push(R::from_row(row, now)?);
    }

    debug!(kind = %R::KIND, rows = records.len(), path = %path.display(), "import parsed");
    Ok(records)
}

/// Write the finance records selected for a report. An empty selection
/// still produces a file with just the header row.
pub fn write_report(records: &[FinanceRecord], path: &Path) -> Result<()> {
    let mut writer = create_writer(path)?;
    if records.is_empty() {
        writer.write_record(["ID", "Дата", "Сумма", "Категория", "Описание"])?;
    }
    for record in records {
        writer.serialize(ReportRow {
            id: record.id,
            date: &record.date,
            amount: record.amount,
            category: &record.category,
            description: record.description.as_deref(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
