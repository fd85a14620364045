mod account;
mod client;
mod history;
mod transaction;

pub use account::{Account, AccountError, AccountKind, CheckingPolicy, BRANCH_CODE};
pub use client::{Client, ClientError};
pub use history::{History, TransactionRecord, TIMESTAMP_FORMAT};
pub use transaction::{Transaction, TransactionKind};
