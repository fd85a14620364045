use super::{Account, AccountError};

use crate::Money;

use std::fmt;

/// Tag stored in the history for every committed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        }
    }

    /// Case-insensitive comparison against a user supplied label
    pub fn matches(&self, label: &str) -> bool {
        self.label().eq_ignore_ascii_case(label.trim())
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.label());
    }
}

/// Transaction represents a requested change to an account's balance.
///
/// It is created for a single operation and never stored itself; only a successful
/// application leaves a trace, as a record in the account's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
}

impl Transaction {
    pub fn deposit(amount: Money) -> Self {
        Self::Deposit { amount }
    }

    pub fn withdrawal(amount: Money) -> Self {
        Self::Withdrawal { amount }
    }

    pub fn amount(&self) -> Money {
        match *self {
            Self::Deposit { amount } | Self::Withdrawal { amount } => amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Deposit { .. } => TransactionKind::Deposit,
            Self::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }

    /// Applies the balance change only. Recording is left to `Client::execute`.
    pub(crate) fn apply(&self, account: &mut Account) -> Result<(), AccountError> {
        match *self {
            Self::Deposit { amount } => account.deposit(amount),
            Self::Withdrawal { amount } => account.withdraw(amount),
        }
    }
}
