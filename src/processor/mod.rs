use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountError},
    config::BankConfig,
    ledger::{Ledger, LedgerError},
    user::{User, UserError, UserRegistration},
};

pub mod in_memory_processor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),
    #[error(transparent)]
    UserErr(#[from] UserError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// Operations the console exposes over the bank state.
pub trait BankProcessor {
    fn config(&self) -> &BankConfig;

    /// Returns the new balance.
    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError>;

    /// Returns the new balance.
    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError>;

    /// Read only view used to render the statement.
    fn statement(&self) -> &Ledger;

    fn find_user(&self, national_id: &str) -> Result<&User, BankError>;

    fn register_user(&mut self, registration: UserRegistration) -> Result<&User, BankError>;

    /// Opens the account under the next free account number.
    fn open_account(&mut self, owner_national_id: &str) -> Result<&Account, BankError>;

    fn accounts(&self) -> &[Account];
}
