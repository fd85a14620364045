use crate::ids::AccountNumber;
use crate::models::TransactionRecord;
use crate::Money;

use serde::Serialize;

/// Read-only view over one account: its (optionally filtered) records and current balance
#[derive(Debug, Clone, PartialEq)]
pub struct Statement<'a> {
    pub number: AccountNumber,
    pub branch: &'static str,
    pub balance: Money,
    pub records: Vec<&'a TransactionRecord>,
}

impl<'a> Statement<'a> {
    pub fn rows(&self) -> Vec<HistoryRow> {
        self.records.iter().map(|record| HistoryRow::from(*record)).collect()
    }
}

/// Flat, serializable form of a history record
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub date: String,
    pub kind: &'static str,
    pub amount: String,
}

impl From<&TransactionRecord> for HistoryRow {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            date: record.formatted_timestamp(),
            kind: record.kind.label(),
            amount: record.amount.to_string(),
        }
    }
}
