use crate::{reader, writer};

use tbl::ids::{is_valid_cpf, AccountNumber, Cpf};
use tbl::{
    Client, Ledger, Money, Result, Statement, Transaction, TransactionKind, TransactionRecord,
};

use std::io::{BufRead, Write};

use chrono::NaiveDate;

const MENU: &str = "
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[r]\tTransaction report
[x]\tExport statement (CSV)
[q]\tQuit
=> ";

const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewClient,
    Report,
    Export,
    Quit,
}

impl Command {
    pub fn parse(option: &str) -> Option<Self> {
        let command = match option {
            "d" => Self::Deposit,
            "s" => Self::Withdraw,
            "e" => Self::Statement,
            "nc" => Self::NewAccount,
            "lc" => Self::ListAccounts,
            "nu" => Self::NewClient,
            "r" => Self::Report,
            "x" => Self::Export,
            "q" => Self::Quit,
            _ => return None,
        };

        Some(command)
    }
}

/// Text menu driving a `Ledger`.
///
/// Every failure short of an I/O error is reported to the user and the session carries on.
/// End of input ends the session like `q` does.
pub struct Shell<R, W> {
    input: R,
    output: W,
    ledger: Ledger,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, ledger: Ledger) -> Self {
        Self {
            input,
            output,
            ledger,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.output)
    }

    pub fn run(&mut self) -> Result {
        while let Some(option) = self.prompt(MENU)? {
            let command = match Command::parse(&option) {
                Some(command) => command,
                None => {
                    self.fail("Invalid operation, please select again.")?;
                    continue;
                }
            };

            log::debug!("Running command: {command:?}");

            match command {
                Command::Deposit => self.transact(TransactionKind::Deposit)?,
                Command::Withdraw => self.transact(TransactionKind::Withdrawal)?,
                Command::Statement => self.statement()?,
                Command::NewAccount => self.new_account()?,
                Command::ListAccounts => self.list_accounts()?,
                Command::NewClient => self.new_client()?,
                Command::Report => self.report()?,
                Command::Export => self.export()?,
                Command::Quit => break,
            }
        }

        log::debug!("Session finished");

        Ok(())
    }

    fn transact(&mut self, kind: TransactionKind) -> Result {
        let Some((cpf, number)) = self.select_client_account()? else {
            return Ok(());
        };

        let message = match kind {
            TransactionKind::Deposit => "Enter the deposit amount: ",
            TransactionKind::Withdrawal => "Enter the withdrawal amount: ",
        };

        let Some(amount) = self.prompt(message)? else {
            return Ok(());
        };

        let amount = match Money::parse(&amount) {
            Ok(amount) => amount,
            Err(e) => {
                log::warn!("{e}");
                return self.fail("Invalid value, please retry.");
            }
        };

        let transaction = match kind {
            TransactionKind::Deposit => Transaction::deposit(amount),
            TransactionKind::Withdrawal => Transaction::withdrawal(amount),
        };

        match self.ledger.execute(&cpf, number, transaction) {
            Ok(()) => self.say(&format!("{kind} completed successfully!")),
            Err(e) => self.fail(&format!("Operation failed! {e}")),
        }
    }

    fn statement(&mut self) -> Result {
        let Some((_, number)) = self.select_client_account()? else {
            return Ok(());
        };

        let statement = self.ledger.statement(number, None)?;
        let text = render_statement(&statement);

        write!(self.output, "{text}")?;

        Ok(())
    }

    fn report(&mut self) -> Result {
        let Some((_, number)) = self.select_client_account()? else {
            return Ok(());
        };

        let Some(filter) =
            self.prompt("Filter by transaction type (Deposit/Withdrawal) or Enter for all: ")?
        else {
            return Ok(());
        };

        let filter = Some(filter.as_str()).filter(|f| !f.is_empty());

        let statement = self.ledger.statement(number, filter)?;
        let text = render_report(&statement.records);

        write!(self.output, "{text}")?;

        Ok(())
    }

    fn export(&mut self) -> Result {
        let Some((_, number)) = self.select_client_account()? else {
            return Ok(());
        };

        let statement = self.ledger.statement(number, None)?;
        let csv = writer::statement_to_csv(&statement)?;

        write!(self.output, "\n{csv}")?;

        Ok(())
    }

    fn new_client(&mut self) -> Result {
        let Some(cpf) = self.prompt("Enter the CPF (numbers only): ")? else {
            return Ok(());
        };

        if !is_valid_cpf(&cpf) {
            return self.fail("Invalid CPF!");
        }

        if self.ledger.find_client(&cpf).is_some() {
            return self.fail("A client with this CPF already exists!");
        }

        let Some(name) = self.prompt("Enter the full name: ")? else {
            return Ok(());
        };

        let Some(birth_date) = self.prompt("Enter the date of birth (dd-mm-yyyy): ")? else {
            return Ok(());
        };

        let birth_date = match NaiveDate::parse_from_str(&birth_date, BIRTH_DATE_FORMAT) {
            Ok(date) => date,
            Err(e) => {
                log::warn!("Invalid birth date {birth_date:?}: {e}");
                return self.fail("Invalid date, please retry.");
            }
        };

        let Some(address) =
            self.prompt("Enter the address (street, number - district - city/state): ")?
        else {
            return Ok(());
        };

        let client = Client::new(Cpf::parse(&cpf)?, name, birth_date, address);

        let registered = self.ledger.register_client(client).map(|_| ());

        match registered {
            Ok(()) => self.say("Client created successfully!"),
            Err(e) => self.fail(&e.to_string()),
        }
    }

    fn new_account(&mut self) -> Result {
        let Some(cpf) = self.select_client()? else {
            return Ok(());
        };

        match self.ledger.open_account(&cpf) {
            Ok(number) => self.say(&format!("Account {number} created successfully!")),
            Err(e) => self.fail(&e.to_string()),
        }
    }

    fn list_accounts(&mut self) -> Result {
        let mut text = String::new();

        for account in self.ledger.accounts() {
            let holder = self.ledger.holder(account).map(Client::name).unwrap_or_default();

            text.push_str(&format!(
                "\nBranch:\t\t{}\nNumber:\t\t{}\nHolder:\t\t{}\nBalance:\tR$ {}\n",
                account.branch(),
                account.number(),
                holder,
                account.balance(),
            ));
        }

        if text.is_empty() {
            text.push_str("\nNo accounts registered.\n");
        }

        write!(self.output, "{text}")?;

        Ok(())
    }

    fn select_client(&mut self) -> Result<Option<String>> {
        let Some(cpf) = self.prompt("Enter the client's CPF: ")? else {
            return Ok(None);
        };

        if self.ledger.find_client(&cpf).is_none() {
            self.fail("Client not found!")?;
            return Ok(None);
        }

        Ok(Some(cpf))
    }

    /// Asks for a client, then for one of the client's accounts by its 1-based position
    fn select_client_account(&mut self) -> Result<Option<(String, AccountNumber)>> {
        let Some(cpf) = self.select_client()? else {
            return Ok(None);
        };

        let accounts: Vec<(AccountNumber, &'static str)> = match self.ledger.find_client(&cpf) {
            Some(client) => self
                .ledger
                .client_accounts(client)
                .into_iter()
                .map(|account| (account.number(), account.branch()))
                .collect(),
            None => vec![],
        };

        if accounts.is_empty() {
            self.fail("Client has no account!")?;
            return Ok(None);
        }

        writeln!(self.output, "\n=== Client accounts ===")?;
        for (idx, (number, branch)) in accounts.iter().enumerate() {
            writeln!(self.output, "[{}] Branch: {branch} | Number: {number}", idx + 1)?;
        }

        let Some(choice) = self.prompt("Choose the account by number: ")? else {
            return Ok(None);
        };

        let selected = choice
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|idx| accounts.get(idx));

        match selected {
            Some((number, _)) => Ok(Some((cpf, *number))),
            None => {
                self.fail("Invalid option!")?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        reader::prompt(&mut self.input, &mut self.output, message)
    }

    fn say(&mut self, message: &str) -> Result {
        writeln!(self.output, "\n=== {message} ===")?;
        Ok(())
    }

    fn fail(&mut self, message: &str) -> Result {
        writeln!(self.output, "\n@@@ {message} @@@")?;
        Ok(())
    }
}

fn format_record(record: &TransactionRecord) -> String {
    format!(
        "{} - {}: R$ {}",
        record.formatted_timestamp(),
        record.kind,
        record.amount
    )
}

fn render_statement(statement: &Statement) -> String {
    let mut text = String::from("\n================ STATEMENT ================\n");

    if statement.records.is_empty() {
        text.push_str("No transactions were made.\n");
    }

    for record in statement.records.iter() {
        text.push_str(&format_record(record));
        text.push('\n');
    }

    text.push_str(&format!("\nBalance:\tR$ {}\n", statement.balance));
    text.push_str("===========================================\n");

    text
}

fn render_report(records: &[&TransactionRecord]) -> String {
    let mut text = String::from("\n========== TRANSACTION REPORT ==========\n");

    for record in records {
        text.push_str(&format_record(record));
        text.push('\n');
    }

    text.push_str("========================================\n");

    text
}
