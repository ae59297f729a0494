//! Finance use cases

use crate::application::RecordService;
use crate::domain::dates::parse_date;
use crate::domain::finance::check_amount;
use crate::domain::{FinancePatch, FinanceRecord};
use crate::error::Result;
use crate::infrastructure::FinanceReport;
use chrono::NaiveDate;

pub type FinanceService = RecordService<FinanceRecord>;

fn check_date(date: Option<&str>) -> Result<()> {
    match date {
        Some(date) if !date.is_empty() => parse_date(date).map(|_| ()),
        _ => Ok(()),
    }
}

impl RecordService<FinanceRecord> {
    /// Record income (positive) or an expense (negative). The date defaults to `today`.
    pub fn add(
        &mut self,
        amount: f64,
        category: String,
        date: Option<String>,
        description: Option<String>,
        today: NaiveDate,
    ) -> Result<&FinanceRecord> {
        check_amount(amount)?;
        check_date(date.as_deref())?;
        self.repository.add(FinanceRecord::new(
            amount,
            category,
            date,
            description,
            today,
        ))
    }

    pub fn edit(&mut self, id: u32, patch: FinancePatch) -> Result<&FinanceRecord> {
        if let Some(amount) = patch.amount {
            check_amount(amount)?;
        }
        check_date(patch.date.as_deref())?;
        self.repository.edit(id, patch)
    }

    /// Summarize `[start, end]` and save the selection next to the exports
    pub fn report(&self, start: &str, end: &str) -> Result<FinanceReport> {
        self.repository
            .generate_report(start, end, self.export_dir())
    }
}
