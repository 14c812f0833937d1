use thiserror::Error;

use crate::user::{User, UserRegistry};

pub const BRANCH_CODE: &str = "0001";

pub type AccountNumber = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub branch_code: String,
    pub account_number: AccountNumber,
    /// Users are never mutated, so the account keeps its own copy of the owner.
    pub owner: User,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("User not found, account creation cancelled!")]
    OwnerNotFound,
}

#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// The caller owns the account number sequence and must only advance it when this
    /// succeeds.
    pub fn open(
        &mut self,
        users: &UserRegistry,
        branch_code: &str,
        account_number: AccountNumber,
        owner_national_id: &str,
    ) -> Result<&Account, AccountError> {
        let owner = users
            .find(owner_national_id)
            .map_err(|_| AccountError::OwnerNotFound)?;
        self.accounts.push(Account {
            branch_code: branch_code.to_string(),
            account_number,
            owner: owner.clone(),
        });
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    pub fn list(&self) -> &[Account] {
        &self.accounts
    }
}
