use super::{Transaction, TransactionKind};

use crate::Money;

use chrono::{DateTime, Local};

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub amount: Money,
    pub timestamp: DateTime<Local>,
}

impl TransactionRecord {
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Represents a WORM (Write Once, Read Many) log of the transactions committed to one account
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    records: Vec<TransactionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, transaction: &Transaction) -> &TransactionRecord {
        let index = self.records.len();

        self.records.push(TransactionRecord {
            kind: transaction.kind(),
            amount: transaction.amount(),
            timestamp: Local::now(),
        });

        &self.records[index]
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Returns every record in order, or only the ones whose kind matches `kind_filter`
    pub fn report(&self, kind_filter: Option<&str>) -> Vec<&TransactionRecord> {
        match kind_filter {
            None => self.records.iter().collect(),
            Some(filter) => self
                .records
                .iter()
                .filter(|record| record.kind.matches(filter))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
