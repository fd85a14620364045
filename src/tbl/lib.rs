pub mod ids;
pub mod ledger;
pub mod models;
mod money;
mod report;

pub use ledger::{Ledger, LedgerError};
pub use models::{Account, Client, Transaction, TransactionKind, TransactionRecord};
pub use money::{Money, MoneyError};
pub use report::{HistoryRow, Statement};

/// Application-level result. Business rules return their own typed errors instead.
pub type Result<T = ()> = anyhow::Result<T>;
