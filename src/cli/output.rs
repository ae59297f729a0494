//! Output formatting utilities

use crate::domain::{Contact, EntityKind, FinanceRecord, Note, Task};
use crate::infrastructure::{ExportOutcome, FinanceReport};

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

fn plural(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Notes => "notes",
        EntityKind::Tasks => "tasks",
        EntityKind::Contacts => "contacts",
        EntityKind::Finance => "finance records",
    }
}

fn empty_list(kind: EntityKind) -> String {
    format!("No {} found", plural(kind))
}

/// Format a list of notes for display
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return empty_list(EntityKind::Notes);
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!("{}. {} ({})\n", note.id, note.title, note.timestamp));
    }
    output
}

pub fn format_note(note: &Note) -> String {
    format!(
        "Title: {}\nContent: {}\nUpdated: {}\n",
        note.title, note.content, note.timestamp
    )
}

fn task_line(task: &Task) -> String {
    format!(
        "{}. [{}] {} | priority: {} | due: {}\n",
        task.id,
        if task.done { "x" } else { " " },
        task.title,
        task.priority,
        or_dash(task.due_date.as_deref())
    )
}

pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return empty_list(EntityKind::Tasks);
    }
    tasks.iter().map(task_line).collect()
}

pub fn format_task(task: &Task) -> String {
    format!(
        "Title: {}\nDescription: {}\nStatus: {}\nPriority: {}\nDue: {}\n",
        task.title,
        task.description,
        if task.done { "done" } else { "open" },
        task.priority,
        or_dash(task.due_date.as_deref())
    )
}

fn contact_line(contact: &Contact) -> String {
    format!(
        "{}. {} | phone: {} | email: {}\n",
        contact.id,
        contact.name,
        or_dash(contact.phone.as_deref()),
        or_dash(contact.email.as_deref())
    )
}

/// Format contacts, e.g. a full listing or search results
pub fn format_contact_list<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> String {
    let output: String = contacts.into_iter().map(contact_line).collect();
    if output.is_empty() {
        return empty_list(EntityKind::Contacts);
    }
    output
}

pub fn format_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\nPhone: {}\nEmail: {}\n",
        contact.name,
        or_dash(contact.phone.as_deref()),
        or_dash(contact.email.as_deref())
    )
}

fn finance_line(record: &FinanceRecord) -> String {
    format!(
        "{}. {} | {} | {} | {}\n",
        record.id,
        record.date,
        record.amount,
        record.category,
        or_dash(record.description.as_deref())
    )
}

pub fn format_finance_list(records: &[FinanceRecord]) -> String {
    if records.is_empty() {
        return empty_list(EntityKind::Finance);
    }
    records.iter().map(finance_line).collect()
}

pub fn format_finance_record(record: &FinanceRecord) -> String {
    format!(
        "Date: {}\nAmount: {}\nCategory: {}\nDescription: {}\n",
        record.date,
        record.amount,
        record.category,
        or_dash(record.description.as_deref())
    )
}

pub fn format_report(report: &FinanceReport) -> String {
    format!(
        "Finance report {} .. {}\n\
        - Income: {:.2}\n\
        - Expenses: {:.2}\n\
        - Balance: {:.2}\n\
        Saved {} record(s) to {}\n",
        report.start,
        report.end,
        report.summary.income,
        report.summary.expenses,
        report.summary.balance,
        report.records.len(),
        report.path.display()
    )
}

pub fn format_export(kind: EntityKind, outcome: &ExportOutcome) -> String {
    match outcome {
        ExportOutcome::Written { path, rows } => {
            format!("Exported {} {} to {}", rows, plural(kind), path.display())
        }
        ExportOutcome::Empty => format!("No {} to export", plural(kind)),
    }
}

/// Calculator results drop the fraction when there is none
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
