//! Console front end: reads menu choices and prompt answers line by line and writes the
//! dialogue to the given output. Kept in the library so the integration tests can drive it.

use std::io::{BufRead, Write};

use crate::{
    command::{Command, parse_amount},
    processor::{BankError, BankProcessor, in_memory_processor::InMemoryBank},
    user::{UserError, UserRegistration},
};
use anyhow::Result;
use printer::{print_accounts, print_menu, print_statement};
use rust_decimal::Decimal;
use tracing::debug;
pub mod printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub bank: InMemoryBank,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn new(input: R, output: &'w mut W) -> Self {
        Self {
            input,
            output,
            bank: InMemoryBank::default(),
        }
    }

    /// Runs until the operator quits or the input is exhausted.
    pub fn run(mut self) -> Result<()> {
        loop {
            print_menu(self.output)?;
            let Some(choice) = self.read_line()? else {
                debug!("input exhausted, leaving");
                break;
            };
            let cmd = match choice.parse::<Command>() {
                Ok(cmd) => cmd,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            debug!(code = cmd.code(), "dispatching");
            if !self.dispatch(cmd)? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `false` when the loop should stop.
    fn dispatch(&mut self, cmd: Command) -> Result<bool> {
        match cmd {
            Command::Deposit => {
                let Some(amount) = self.prompt_amount("Enter the deposit amount: ")? else {
                    return Ok(true);
                };
                match self.bank.deposit(amount) {
                    Ok(_) => writeln!(self.output, "\nDeposit completed successfully!")?,
                    Err(err) => self.report(&err)?,
                }
            }
            Command::Withdraw => {
                let prompt = format!(
                    "Enter the withdrawal amount (up to {:.2}): ",
                    self.bank.config().limits.per_withdrawal
                );
                let Some(amount) = self.prompt_amount(&prompt)? else {
                    return Ok(true);
                };
                match self.bank.withdraw(amount) {
                    Ok(_) => writeln!(self.output, "\nWithdrawal completed successfully!")?,
                    Err(err) => self.report(&err)?,
                }
            }
            Command::Statement => print_statement(self.output, self.bank.statement())?,
            Command::NewUser => self.new_user()?,
            Command::NewAccount => {
                let Some(national_id) = self.prompt("Enter the user's national id: ")? else {
                    return Ok(true);
                };
                match self.bank.open_account(&national_id).map(|_| ()) {
                    Ok(_) => writeln!(self.output, "\nAccount created successfully!")?,
                    Err(err) => self.report(&err)?,
                }
            }
            Command::ListAccounts => print_accounts(self.output, self.bank.accounts())?,
            Command::Quit => {
                writeln!(self.output, "\nGoodbye. See you soon!")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn new_user(&mut self) -> Result<()> {
        let Some(national_id) = self.prompt("Enter the national id (numbers only): ")? else {
            return Ok(());
        };
        // refuse early so the operator does not type the remaining fields for nothing
        if self.bank.find_user(&national_id).is_ok() {
            return self.report(&BankError::from(UserError::AlreadyExists));
        }
        let Some(full_name) = self.prompt("Enter the full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Enter the birth date (dd-mm-yyyy): ")? else {
            return Ok(());
        };
        let Some(address) =
            self.prompt("Enter the address (street, number, district, city/state): ")?
        else {
            return Ok(());
        };
        let registration = UserRegistration {
            national_id,
            full_name,
            birth_date,
            address,
        };
        match self.bank.register_user(registration).map(|_| ()) {
            Ok(_) => writeln!(self.output, "\nUser registered successfully!")?,
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn report(&mut self, err: &BankError) -> Result<()> {
        writeln!(self.output, "\nOperation failed! {err}")?;
        Ok(())
    }

    /// Malformed numbers are reported and yield `None`, same as exhausted input.
    fn prompt_amount(&mut self, text: &str) -> Result<Option<Decimal>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match parse_amount(&line) {
            Ok(amount) => Ok(Some(amount)),
            Err(err) => {
                writeln!(self.output, "\nOperation failed! {err}")?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
