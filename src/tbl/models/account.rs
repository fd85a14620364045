use super::History;

use crate::ids::{AccountNumber, Cpf};
use crate::money::{Money, MoneyError};

use thiserror::Error;

/// Every account belongs to the same, single branch
pub const BRANCH_CODE: &str = "0001";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount {0}: value must be greater than zero")]
    NonPositiveAmount(Money),

    #[error("Insufficient balance: cannot withdraw {requested} when balance is {balance}")]
    InsufficientFunds { balance: Money, requested: Money },

    #[error("Withdrawal of {requested} exceeds the limit of {limit} per operation")]
    ExceedsWithdrawalLimit { limit: Money, requested: Money },

    #[error("Withdrawal limit reached: {0} withdrawals already performed")]
    WithdrawalLimitReached(u32),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Terms applied to newly opened checking accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    pub withdrawal_limit: Money,
    pub max_withdrawals: u32,
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self {
            withdrawal_limit: Money::from_units(500),
            max_withdrawals: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// `withdrawals_made` is a lifetime total, it is never reset
    Checking {
        withdrawal_limit: Money,
        max_withdrawals: u32,
        withdrawals_made: u32,
    },
}

/// Account holds a balance that never goes below zero.
///
/// The balance only moves through `deposit` and `withdraw`, which are reachable from outside
/// the crate exclusively via `Client::execute`, keeping the balance and the history in step.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    branch: &'static str,
    balance: Money,
    owner: Cpf,
    history: History,
    kind: AccountKind,
}

impl Account {
    pub fn new_checking(number: AccountNumber, owner: Cpf, policy: CheckingPolicy) -> Self {
        Self {
            number,
            branch: BRANCH_CODE,
            balance: Money::ZERO,
            owner,
            history: History::new(),
            kind: AccountKind::Checking {
                withdrawal_limit: policy.withdrawal_limit,
                max_withdrawals: policy.max_withdrawals,
                withdrawals_made: 0,
            },
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        self.branch
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn owner(&self) -> &Cpf {
        &self.owner
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub(crate) fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::NonPositiveAmount(amount));
        }

        self.balance = self.balance.add(amount)?;

        Ok(())
    }

    pub(crate) fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        match self.kind {
            AccountKind::Checking {
                withdrawal_limit,
                max_withdrawals,
                withdrawals_made,
            } => {
                if withdrawals_made >= max_withdrawals {
                    return Err(AccountError::WithdrawalLimitReached(withdrawals_made));
                }

                if amount > withdrawal_limit {
                    return Err(AccountError::ExceedsWithdrawalLimit {
                        limit: withdrawal_limit,
                        requested: amount,
                    });
                }
            }
        }

        self.withdraw_from_balance(amount)?;

        match &mut self.kind {
            AccountKind::Checking {
                withdrawals_made, ..
            } => *withdrawals_made += 1,
        }

        Ok(())
    }

    fn withdraw_from_balance(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::NonPositiveAmount(amount));
        }

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        self.balance = self.balance.sub(amount)?;

        Ok(())
    }
}
