use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    NewUser,
    NewAccount,
    ListAccounts,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid operation, please select the desired operation again.")]
    UnknownOption(String),
    #[error("`{input}` is not a valid amount")]
    MalformedAmount {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

impl Command {
    pub fn code(self) -> &'static str {
        match self {
            Command::Deposit => "d",
            Command::Withdraw => "s",
            Command::Statement => "e",
            Command::NewUser => "nu",
            Command::NewAccount => "nc",
            Command::ListAccounts => "lc",
            Command::Quit => "q",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "d" => Ok(Command::Deposit),
            "s" => Ok(Command::Withdraw),
            "e" => Ok(Command::Statement),
            "nu" => Ok(Command::NewUser),
            "nc" => Ok(Command::NewAccount),
            "lc" => Ok(Command::ListAccounts),
            "q" => Ok(Command::Quit),
            other => Err(CommandError::UnknownOption(other.to_string())),
        }
    }
}

/// Sign is kept as typed, rejecting non-positive amounts is up to the ledger.
pub fn parse_amount(input: &str) -> Result<Decimal, CommandError> {
    let input = input.trim();
    Decimal::from_str(input).map_err(|source| CommandError::MalformedAmount {
        input: input.to_string(),
        source,
    })
}
