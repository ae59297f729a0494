//! Operations shared by every record collection

use crate::error::Result;
use crate::infrastructure::{
    csv_bridge, CsvRecord, ExportOutcome, Repository, Workspace,
};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// A loaded collection plus the directory its exports go to
pub struct RecordService<R: CsvRecord> {
    pub(crate) repository: Repository<R>,
    export_dir: PathBuf,
}

impl<R: CsvRecord> RecordService<R> {
    pub fn new(repository: Repository<R>, export_dir: PathBuf) -> Self {
        RecordService {
            repository,
            export_dir,
        }
    }

    /// Load the collection of `R` from the workspace
    pub fn open(workspace: &Workspace) -> Result<Self> {
        let repository = workspace.open_repository::<R>()?;
        Ok(Self::new(repository, workspace.export_dir()))
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn list(&self) -> &[R] {
        self.repository.list()
    }

    pub fn view(&self, id: u32) -> Result<&R> {
        self.repository.find_by_id(id)
    }

    pub fn delete(&mut self, id: u32) -> Result<R> {
        self.repository.delete(id)
    }

    /// Export to `output`, or to the kind's default file in the export directory
    pub fn export(&self, output: Option<&Path>) -> Result<ExportOutcome> {
        let path = match output {
            Some(path) => path.to_path_buf(),
            None => self.export_dir.join(R::KIND.export_file_name()),
        };
        csv_bridge::export(self.repository.list(), &path)
    }

    /// Import every row of `source` under fresh ids; returns the row count.
    /// Nothing is appended unless the whole file parses.
    pub fn import(&mut self, source: &Path, now: NaiveDateTime) -> Result<usize> {
        let records = csv_bridge::read::<R>(source, now)?;
        self.repository.import(records)
    }
}
