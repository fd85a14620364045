use crate::ids::{AccountNumber, Cpf};
use crate::models::{Account, CheckingPolicy, Client, ClientError, Transaction};
use crate::Statement;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error("A client with CPF {0} already exists")]
    DuplicateClient(Cpf),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// In-memory directory of every client and every account of the branch.
///
/// Accounts are kept in opening order, which is also the order of their numbers.
#[derive(Debug, Default)]
pub struct Ledger {
    policy: CheckingPolicy,
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CheckingPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> CheckingPolicy {
        self.policy
    }

    pub fn register_client(&mut self, client: Client) -> Result<&Client, LedgerError> {
        if self.find_client(client.cpf().as_str()).is_some() {
            return Err(LedgerError::DuplicateClient(client.cpf().clone()));
        }

        log::debug!("Registering client {}", client.cpf());

        let index = self.clients.len();
        self.clients.push(client);

        Ok(&self.clients[index])
    }

    /// A miss is a normal outcome, not an error
    pub fn find_client(&self, cpf: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.cpf().as_str() == cpf)
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Opens a checking account for the client, numbered right after the last opened account
    pub fn open_account(&mut self, cpf: &str) -> Result<AccountNumber, LedgerError> {
        let number = AccountNumber(self.accounts.len() as u32 + 1);

        let client = self
            .clients
            .iter_mut()
            .find(|client| client.cpf().as_str() == cpf)
            .ok_or_else(|| LedgerError::ClientNotFound(cpf.to_string()))?;

        let account = Account::new_checking(number, client.cpf().clone(), self.policy);

        client.add_account(number);
        self.accounts.push(account);

        log::debug!("Opened account {number} for client {cpf}");

        Ok(number)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn client_accounts(&self, client: &Client) -> Vec<&Account> {
        client
            .accounts()
            .iter()
            .filter_map(|number| self.account(*number))
            .collect()
    }

    pub fn holder(&self, account: &Account) -> Option<&Client> {
        self.find_client(account.owner().as_str())
    }

    /// Resolves the client and the account, then hands the transaction to `Client::execute`
    pub fn execute(
        &mut self,
        cpf: &str,
        number: AccountNumber,
        transaction: Transaction,
    ) -> Result<(), LedgerError> {
        let client = self
            .clients
            .iter()
            .find(|client| client.cpf().as_str() == cpf)
            .ok_or_else(|| LedgerError::ClientNotFound(cpf.to_string()))?;

        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or(LedgerError::AccountNotFound(number))?;

        log::debug!("Executing {transaction:?} on account {number} for client {cpf}");

        if let Err(e) = client.execute(account, transaction) {
            log::warn!("{e}");
            return Err(e.into());
        }

        Ok(())
    }

    /// Builds a read-only view of an account's history, optionally filtered by kind
    pub fn statement(
        &self,
        number: AccountNumber,
        kind_filter: Option<&str>,
    ) -> Result<Statement<'_>, LedgerError> {
        let account = self
            .account(number)
            .ok_or(LedgerError::AccountNotFound(number))?;

        Ok(Statement {
            number,
            branch: account.branch(),
            balance: account.balance(),
            records: account.history().report(kind_filter),
        })
    }
}
