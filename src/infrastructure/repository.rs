//! In-memory record repository backed by a JSON store

use crate::domain::finance::records_in_period;
use crate::domain::{
    dates, Contact, EntityKind, FinanceRecord, FinanceSummary, Patch, Record, Task,
};
use crate::error::{AssistError, Result};
use crate::infrastructure::csv_bridge;
use crate::infrastructure::JsonStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The authoritative copy of one kind's records for the process lifetime.
///
/// Every mutation rewrites the whole store.
#[derive(Debug)]
pub struct Repository<R: Record> {
    store: JsonStore,
    records: Vec<R>,
}

impl<R: Record> Repository<R> {
    /// Load all records, materializing an empty store if none exists
    pub fn open(store: JsonStore) -> Result<Self> {
        let records: Vec<R> = store.load(Vec::new())?;
        debug!(kind = %R::KIND, count = records.len(), path = %store.path().display(), "repository loaded");
        Ok(Repository { store, records })
    }

    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// All records in insertion order
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `max(existing ids) + 1`, starting at 1
    pub fn next_id(&self) -> Result<u32> {
        id_after(R::KIND, self.max_id())
    }

    fn max_id(&self) -> u32 {
        self.records.iter().map(Record::id).max().unwrap_or(0)
    }

    pub fn find_by_id(&self, id: u32) -> Result<&R> {
        self.position(id).map(|index| &self.records[index])
    }

    /// Append `record` under a freshly assigned id and persist.
    /// Any id already set on `record` is replaced.
    pub fn add(&mut self, mut record: R) -> Result<&R> {
        let id = self.next_id()?;
        record.set_id(id);
        self.records.push(record);
        self.persist()?;

        info!(kind = %R::KIND, id, "record added");
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn edit<P: Patch<R>>(&mut self, id: u32, patch: P) -> Result<&R> {
        let index = self.position(id)?;
        patch.apply(&mut self.records[index]);
        self.persist()?;

        info!(kind = %R::KIND, id, "record edited");
        Ok(&self.records[index])
    }

    /// Remove and return the record; the store is untouched when `id` is unknown
    pub fn delete(&mut self, id: u32) -> Result<R> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        self.persist()?;

        info!(kind = %R::KIND, id, "record deleted");
        Ok(removed)
    }

    /// Append imported records under fresh sequential ids and persist once
    pub fn import(&mut self, records: Vec<R>) -> Result<usize> {
        let count = records.len();
        let mut last = self.max_id();
        let mut numbered = Vec::with_capacity(count);
        for mut record in records {
            last = id_after(R::KIND, last)?;
            record.set_id(last);
            numbered.push(record);
        }
        self.records.extend(numbered);
        self.persist()?;

        info!(kind = %R::KIND, count, "records imported");
        Ok(count)
    }

    fn position(&self, id: u32) -> Result<usize> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(AssistError::NotFound { kind: R::KIND, id })
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.records)
    }
}

fn id_after(kind: EntityKind, id: u32) -> Result<u32> {
    id.checked_add(1).ok_or(AssistError::IdsExhausted(kind))
}

impl Repository<Task> {
    pub fn mark_done(&mut self, id: u32) -> Result<&Task> {
        let index = self.position(id)?;
        self.records[index].done = true;
        self.persist()?;

        info!(id, "task marked done");
        Ok(&self.records[index])
    }
}

impl Repository<Contact> {
    /// Contacts whose name contains `query` (any case) or whose phone contains it
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.records
            .iter()
            .filter(|contact| contact.matches(query))
            .collect()
    }
}

/// A generated finance report and the file it was saved to
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceReport {
    pub start: String,
    pub end: String,
    pub summary: FinanceSummary,
    pub records: Vec<FinanceRecord>,
    pub path: PathBuf,
}

impl Repository<FinanceRecord> {
    /// Summarize records dated within `[start, end]` and write them to
    /// `out_dir/report_<start>_<end>.csv`.
    ///
    /// Both bounds must be DD-MM-YYYY; otherwise nothing is written.
    pub fn generate_report(&self, start: &str, end: &str, out_dir: &Path) -> Result<FinanceReport> {
        let from = dates::parse_date(start)?;
        let to = dates::parse_date(end)?;

        let records = records_in_period(&self.records, from, to);
        let summary = FinanceSummary::from_records(&records);

        let path = out_dir.join(format!("report_{}_{}.csv", start, end));
        csv_bridge::write_report(&records, &path)?;

        info!(start, end, count = records.len(), path = %path.display(), "finance report written");
        Ok(FinanceReport {
            start: start.to_string(),
            end: end.to_string(),
            summary,
            records,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactPatch, Note, Priority, TaskPatch};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn open<R: Record>(temp: &TempDir, file: &str) -> Repository<R> {
        Repository::open(JsonStore::new(temp.path().join(file))).unwrap()
    }

    fn task(title: &str) -> Task {
        Task::new(title.into(), "desc".into(), Priority::Medium, Some("01-03-2024".into()))
    }

    fn finance(amount: f64, date: &str) -> FinanceRecord {
        FinanceRecord::new(
            amount,
            "general".into(),
            Some(date.into()),
            None,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_open_materializes_empty_store() {
        let temp = TempDir::new().unwrap();
        let repo: Repository<Note> = open(&temp, "notes.json");

        assert!(repo.is_empty());
        assert!(temp.path().join("notes.json").exists());
    }

    #[test]
    fn test_add_assigns_max_plus_one() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<Task> = open(&temp, "tasks.json");

        assert_eq!(repo.add(task("a")).unwrap().id, 1);
        assert_eq!(repo.add(task("b")).unwrap().id, 2);
        repo.delete(1).unwrap();

        let before = repo.len();
        let added = repo.add(task("c")).unwrap().id;
        assert_eq!(added, 3);
        assert_eq!(repo.len(), before + 1);
    }

    #[test]
    fn test_add_ignores_caller_id() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<Task> = open(&temp, "tasks.json");
        let mut preset = task("preset");
        preset.id = 99;

        assert_eq!(repo.add(preset).unwrap().id, 1);
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<Task> = open(&temp, "tasks.json");
        for title in ["z", "a", "m"] {
            repo.add(task(title)).unwrap();
        }

        let titles: Vec<&str> = repo.list().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_mutations_persist_for_next_open() {
        let temp = TempDir::new().unwrap();
        {
            let mut repo: Repository<Task> = open(&temp, "tasks.json");
            repo.add(task("a")).unwrap();
            repo.add(task("b")).unwrap();
            repo.mark_done(2).unwrap();
        }

        let reopened: Repository<Task> = open(&temp, "tasks.json");
        assert_eq!(reopened.len(), 2);
        assert!(reopened.find_by_id(2).unwrap().done);
        assert!(!reopened.find_by_id(1).unwrap().done);
    }

    fn assert_reopens_identical<R: Record + PartialEq>(temp: &TempDir, file: &str, records: Vec<R>) {
        let saved = {
            let mut repo: Repository<R> = open(temp, file);
            for record in records {
                repo.add(record).unwrap();
            }
            repo.list().to_vec()
        };

        let reopened: Repository<R> = open(temp, file);
        assert_eq!(reopened.list(), saved.as_slice());
    }

    #[test]
    fn test_notes_reopen_identical() {
        let temp = TempDir::new().unwrap();
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();

        assert_reopens_identical(
            &temp,
            "notes.json",
            vec![
                Note::new("Идея".into(), "Текст, с запятой".into(), at),
                Note::new("Empty".into(), String::new(), at),
            ],
        );
    }

    #[test]
    fn test_contacts_reopen_identical() {
        let temp = TempDir::new().unwrap();

        assert_reopens_identical(
            &temp,
            "contacts.json",
            vec![
                Contact::new("Anna".into(), Some("+7 900".into()), Some("a@x.io".into())),
                Contact::new("Boris".into(), None, None),
            ],
        );
    }

    #[test]
    fn test_finance_reopen_identical() {
        let temp = TempDir::new().unwrap();
        let mut with_note = finance(-12.75, "03-01-2024");
        with_note.description = Some("lunch".into());

        assert_reopens_identical(
            &temp,
            "finance.json",
            vec![finance(1234.56, "01-01-2024"), with_note, finance(0.1, "31-12-2023")],
        );
    }

    #[test]
    fn test_find_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let repo: Repository<Contact> = open(&temp, "contacts.json");

        match repo.find_by_id(5) {
            Err(AssistError::NotFound { kind, id }) => {
                assert_eq!(kind, crate::domain::EntityKind::Contacts);
                assert_eq!(id, 5);
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_twice_reports_not_found() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<Task> = open(&temp, "tasks.json");
        repo.add(task("a")).unwrap();
        repo.add(task("b")).unwrap();

        repo.delete(1).unwrap();
        let after_first = fs::read_to_string(repo.store_path()).unwrap();
        let second = repo.delete(1);

        assert!(matches!(second, Err(AssistError::NotFound { id: 1, .. })));
        assert_eq!(repo.len(), 1);
        assert_eq!(fs::read_to_string(repo.store_path()).unwrap(), after_first);
    }

    #[test]
    fn test_edit_preserves_unspecified_fields() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<Task> = open(&temp, "tasks.json");
        repo.add(task("a")).unwrap();

        let edited = repo
            .edit(
                1,
                TaskPatch {
                    title: Some("X".into()),
                    description: Some(String::new()),
                    ..TaskPatch::default()
                },
            )
            .unwrap()
            .clone();

        assert_eq!(edited.title, "X");
        assert_eq!(edited.description, "desc");
        assert_eq!(edited.priority, Priority::Medium);
        assert_eq!(edited.due_date.as_deref(), Some("01-03-2024"));
    }

    #[test]
    fn test_edit_unknown_id() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<Contact> = open(&temp, "contacts.json");

        let result = repo.edit(3, ContactPatch::default());
        assert!(matches!(result, Err(AssistError::NotFound { id: 3, .. })));
    }

    #[test]
    fn test_mark_done_unknown_id() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<Task> = open(&temp, "tasks.json");

        assert!(matches!(
            repo.mark_done(1),
            Err(AssistError::NotFound { id: 1, .. })
        ));
    }

    #[test]
    fn test_import_continues_after_max_id() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<Contact> = open(&temp, "contacts.json");
        repo.add(Contact::new("Anna".into(), None, None)).unwrap();
        repo.add(Contact::new("Boris".into(), None, None)).unwrap();

        let mut incoming = Contact::new("Clara".into(), None, None);
        incoming.id = 1;
        let count = repo
            .import(vec![incoming, Contact::new("Dmitri".into(), None, None)])
            .unwrap();

        assert_eq!(count, 2);
        let ids: Vec<u32> = repo.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_add_after_highest_id_fails_cleanly() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("contacts.json");
        let stored = r#"[{"id": 4294967295, "name": "Max"}]"#;
        fs::write(&path, stored).unwrap();
        let mut repo: Repository<Contact> = open(&temp, "contacts.json");

        let result = repo.add(Contact::new("Next".into(), None, None));

        assert!(matches!(
            result,
            Err(AssistError::IdsExhausted(crate::domain::EntityKind::Contacts))
        ));
        assert_eq!(repo.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), stored);
    }

    #[test]
    fn test_import_past_highest_id_appends_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        let stored = format!(r#"[{{"id": {}, "title": "Almost full"}}]"#, u32::MAX - 1);
        fs::write(&path, &stored).unwrap();
        let mut repo: Repository<Task> = open(&temp, "tasks.json");

        let result = repo.import(vec![task("fits"), task("overflows")]);

        assert!(matches!(result, Err(AssistError::IdsExhausted(_))));
        assert_eq!(repo.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), stored);
    }

    #[test]
    fn test_search_contacts() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<Contact> = open(&temp, "contacts.json");
        repo.add(Contact::new("Anna".into(), Some("111".into()), None)).unwrap();
        repo.add(Contact::new("Boris".into(), Some("222".into()), None)).unwrap();
        repo.add(Contact::new("Joanna".into(), None, None)).unwrap();

        let names: Vec<&str> = repo.search("ANNA").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Joanna"]);
        assert_eq!(repo.search("22").len(), 1);
    }

    #[test]
    fn test_generate_report_for_january() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<FinanceRecord> = open(&temp, "finance.json");
        repo.add(finance(100.0, "01-01-2024")).unwrap();
        repo.add(finance(-40.0, "15-01-2024")).unwrap();
        repo.add(finance(50.0, "01-02-2024")).unwrap();

        let report = repo
            .generate_report("01-01-2024", "31-01-2024", temp.path())
            .unwrap();

        assert_eq!(report.summary.income, 100.0);
        assert_eq!(report.summary.expenses, 40.0);
        assert_eq!(report.summary.balance, 60.0);
        assert_eq!(report.path, temp.path().join("report_01-01-2024_31-01-2024.csv"));

        let written = fs::read_to_string(&report.path).unwrap();
        assert!(written.contains("01-01-2024"));
        assert!(written.contains("15-01-2024"));
        assert!(!written.contains("01-02-2024"));
        assert_eq!(written.lines().count(), 3);
    }

    #[test]
    fn test_generate_report_rejects_bad_dates() {
        let temp = TempDir::new().unwrap();
        let mut repo: Repository<FinanceRecord> = open(&temp, "finance.json");
        repo.add(finance(100.0, "01-01-2024")).unwrap();
        let out = temp.path().join("reports");

        let result = repo.generate_report("2024/01/01", "31-01-2024", &out);

        assert!(matches!(result, Err(AssistError::Validation(_))));
        assert!(!out.exists());
    }
}
