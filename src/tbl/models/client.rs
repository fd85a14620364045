use super::{Account, AccountError, Transaction};

use crate::ids::{AccountNumber, Cpf};

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Account {0} does not belong to client {1}")]
    ForeignAccount(AccountNumber, Cpf),

    #[error("Transaction rejected: {0}")]
    Rejected(#[from] AccountError),
}

/// A natural person holding zero or more accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    cpf: Cpf,
    name: String,
    birth_date: NaiveDate,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(cpf: Cpf, name: String, birth_date: NaiveDate, address: String) -> Self {
        Self {
            cpf,
            name,
            birth_date,
            address,
            accounts: vec![],
        }
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Owned accounts, in the order they were opened
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn owns(&self, number: AccountNumber) -> bool {
        self.accounts.contains(&number)
    }

    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Applies `transaction` to `account` and, only when it succeeds, appends it to the account's
    /// history. This is the one path that changes a balance.
    pub fn execute(&self, account: &mut Account, transaction: Transaction) -> Result<(), ClientError> {
        if account.owner() != &self.cpf {
            return Err(ClientError::ForeignAccount(account.number(), self.cpf.clone()));
        }

        transaction.apply(account)?;

        let number = account.number();
        let record = account.history_mut().record(&transaction);
        log::debug!("Recorded {record:?} on account {number}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::{AccountKind, CheckingPolicy, TransactionKind};
    use crate::Money;

    const SOME_NUMBER: AccountNumber = AccountNumber(1);
    const OTHER_NUMBER: AccountNumber = AccountNumber(2);

    fn build_client(cpf: &str) -> Client {
        Client::new(
            Cpf::parse(cpf).unwrap(),
            "Maria Silva".to_string(),
            NaiveDate::from_ymd_opt(1990, 1, 31).unwrap(),
            "Rua A, 1 - Centro - Recife/PE".to_string(),
        )
    }

    fn build_account(client: &mut Client, number: AccountNumber) -> Account {
        client.add_account(number);
        Account::new_checking(number, client.cpf().clone(), CheckingPolicy::default())
    }

    fn history_of(account: &Account) -> Vec<(TransactionKind, Money)> {
        account
            .history()
            .records()
            .iter()
            .map(|r| (r.kind, r.amount))
            .collect()
    }

    #[test]
    fn add_account() {
        let mut client = build_client("12345678901");
        assert!(client.accounts().is_empty());

        client.add_account(SOME_NUMBER);
        client.add_account(OTHER_NUMBER);

        assert_eq!(client.accounts(), &[SOME_NUMBER, OTHER_NUMBER]);
        assert!(client.owns(OTHER_NUMBER));
        assert!(!client.owns(AccountNumber(3)));
    }

    #[test]
    fn execute_records_only_successful_transactions() {
        let mut client = build_client("12345678901");
        let mut account = build_account(&mut client, SOME_NUMBER);

        let attempts = [
            (Transaction::deposit(Money::from_units(100)), true),
            (Transaction::deposit(Money::ZERO), false),
            (Transaction::withdrawal(Money::from_units(101)), false),
            (Transaction::withdrawal(Money::from_units(40)), true),
            (Transaction::deposit(Money(-1)), false),
        ];

        for (tx, should_succeed) in attempts {
            let len_before = account.history().len();
            let res = client.execute(&mut account, tx);

            assert_eq!(res.is_ok(), should_succeed, "unexpected result for {tx:?}: {res:?}");
            assert_eq!(
                account.history().len(),
                len_before + usize::from(should_succeed)
            );
        }

        assert_eq!(account.balance(), Money::from_units(60));
        assert_eq!(
            history_of(&account),
            vec![
                (TransactionKind::Deposit, Money::from_units(100)),
                (TransactionKind::Withdrawal, Money::from_units(40)),
            ]
        );
    }

    #[test]
    fn deposit_then_withdraw_same_amount_round_trips() {
        let mut client = build_client("12345678901");
        let mut account = build_account(&mut client, SOME_NUMBER);
        let amount = Money::from_units(250);

        client.execute(&mut account, Transaction::deposit(amount)).unwrap();
        client.execute(&mut account, Transaction::withdrawal(amount)).unwrap();

        assert_eq!(account.balance(), Money::ZERO);
        assert_eq!(
            history_of(&account),
            vec![
                (TransactionKind::Deposit, amount),
                (TransactionKind::Withdrawal, amount),
            ]
        );
    }

    #[test]
    fn checking_account_scenario() {
        let mut client = build_client("12345678901");
        let mut account = build_account(&mut client, SOME_NUMBER);

        client
            .execute(&mut account, Transaction::deposit(Money::from_units(1000)))
            .unwrap();
        assert_eq!(account.balance(), Money::from_units(1000));
        assert_eq!(
            history_of(&account),
            vec![(TransactionKind::Deposit, Money::from_units(1000))]
        );

        let res = client.execute(&mut account, Transaction::withdrawal(Money::from_units(600)));
        assert_eq!(
            res,
            Err(ClientError::Rejected(AccountError::ExceedsWithdrawalLimit {
                limit: Money::from_units(500),
                requested: Money::from_units(600),
            }))
        );
        assert_eq!(account.balance(), Money::from_units(1000));
        assert_eq!(account.history().len(), 1);

        let five_hundred = Transaction::withdrawal(Money::from_units(500));

        assert_eq!(client.execute(&mut account, five_hundred), Ok(()));
        assert_eq!(client.execute(&mut account, five_hundred), Ok(()));
        assert_eq!(account.balance(), Money::ZERO);

        assert_eq!(
            client.execute(&mut account, five_hundred),
            Err(ClientError::Rejected(AccountError::InsufficientFunds {
                balance: Money::ZERO,
                requested: Money::from_units(500),
            }))
        );
        assert_eq!(account.history().len(), 3);
        assert_eq!(
            account.kind(),
            &AccountKind::Checking {
                withdrawal_limit: Money::from_units(500),
                max_withdrawals: 3,
                withdrawals_made: 2,
            }
        );
    }

    #[test]
    fn fail_to_execute_on_foreign_account() {
        let mut owner = build_client("12345678901");
        let stranger = build_client("10987654321");
        let mut account = build_account(&mut owner, SOME_NUMBER);

        let res = stranger.execute(&mut account, Transaction::deposit(Money::from_units(10)));

        assert_eq!(
            res,
            Err(ClientError::ForeignAccount(SOME_NUMBER, stranger.cpf().clone()))
        );
        assert_eq!(account.balance(), Money::ZERO);
        assert!(account.history().is_empty());
    }
}
