//! Income and expense records plus period summaries

use crate::domain::dates::{format_date, parse_date};
use crate::domain::record::{non_empty, overwrite, overwrite_optional, Patch, Record};
use crate::domain::EntityKind;
use crate::error::{AssistError, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A signed amount: positive is income, negative is an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    #[serde(alias = "record_id")]
    pub id: u32,
    pub amount: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default = "today")]
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn today() -> String {
    format_date(Local::now().date_naive())
}

/// Reject NaN and infinities, which JSON cannot represent
pub fn check_amount(amount: f64) -> Result<()> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(AssistError::Validation(format!(
            "amount must be a finite number, got {}",
            amount
        )))
    }
}

impl FinanceRecord {
    /// Create a record; a missing or empty date falls back to `today`
    pub fn new(
        amount: f64,
        category: String,
        date: Option<String>,
        description: Option<String>,
        today: NaiveDate,
    ) -> Self {
        FinanceRecord {
            id: 0,
            amount,
            category,
            date: non_empty(date).unwrap_or_else(|| format_date(today)),
            description: non_empty(description),
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

impl Record for FinanceRecord {
    const KIND: EntityKind = EntityKind::Finance;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Default)]
pub struct FinancePatch {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl Patch<FinanceRecord> for FinancePatch {
    fn apply(self, record: &mut FinanceRecord) {
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        overwrite(&mut record.category, self.category);
        overwrite(&mut record.date, self.date);
        overwrite_optional(&mut record.description, self.description);
    }
}

/// Totals over a set of records. `expenses` is a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinanceSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl FinanceSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a FinanceRecord>) -> Self {
        let mut income = 0.0;
        let mut expenses = 0.0;
        for record in records {
            if record.is_income() {
                income += record.amount;
            } else if record.is_expense() {
                expenses += -record.amount;
            }
        }
        FinanceSummary {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// Records dated within `[start, end]`, in collection order.
///
/// Records whose stored date cannot be parsed are skipped.
pub fn records_in_period(
    records: &[FinanceRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<FinanceRecord> {
    records
        .iter()
        .filter(|record| match parse_date(&record.date) {
            Ok(date) => start <= date && date <= end,
            Err(_) => {
                warn!(id = record.id, date = %record.date, "skipping record with unparseable date");
                false
            }
        })
        .cloned()
        .collect()
}
