use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::WithdrawalLimits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerEventKind {
    Deposited,
    Withdrawn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEvent {
    amount: Decimal,
    kind: LedgerEventKind,
}

impl LedgerEvent {
    /// Line appended to the statement log once the event is applied.
    pub fn log_line(&self) -> String {
        match self.kind {
            LedgerEventKind::Deposited => format!("Deposit: {:.2}", self.amount),
            LedgerEventKind::Withdrawn => format!("Withdrawal: {:.2}", self.amount),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("The amount provided is invalid.")]
    InvalidAmount,
    #[error("Insufficient balance.")]
    InsufficientFunds,
    #[error("The withdrawal amount exceeds the limit of {limit:.2}.")]
    ExceedsPerTransactionLimit { limit: Decimal },
    #[error("The maximum number of {limit} withdrawals has been exceeded.")]
    ExceedsDailyWithdrawalCount { limit: u32 },
    #[error("The deposit would take the balance past the largest supported amount.")]
    BalanceOverflow,
}

/// Single balance shared by every account opened during the run.
#[derive(Debug, Default)]
pub struct Ledger {
    balance: Decimal,
    withdrawal_count: u32,
    statement_log: Vec<String>,
}

impl Ledger {
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdrawal_count(&self) -> u32 {
        self.withdrawal_count
    }

    pub fn statement_log(&self) -> &[String] {
        &self.statement_log
    }

    pub fn apply(&mut self, event: &LedgerEvent) {
        match event.kind {
            LedgerEventKind::Deposited => {
                self.balance += event.amount;
            }
            LedgerEventKind::Withdrawn => {
                self.balance -= event.amount;
                self.withdrawal_count += 1;
            }
        }
        self.statement_log.push(event.log_line());
    }

    pub fn handle_deposit(&self, amount: Decimal) -> Result<LedgerEvent, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        // applying the event must not overflow
        if self.balance.checked_add(amount).is_none() {
            return Err(LedgerError::BalanceOverflow);
        }
        Ok(LedgerEvent {
            amount,
            kind: LedgerEventKind::Deposited,
        })
    }

    /// Guards are checked in order and the first one that fails wins.
    pub fn handle_withdrawal(
        &self,
        amount: Decimal,
        limits: &WithdrawalLimits,
    ) -> Result<LedgerEvent, LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        if amount > limits.per_withdrawal {
            return Err(LedgerError::ExceedsPerTransactionLimit {
                limit: limits.per_withdrawal,
            });
        }
        if self.withdrawal_count >= limits.daily_count {
            return Err(LedgerError::ExceedsDailyWithdrawalCount {
                limit: limits.daily_count,
            });
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        Ok(LedgerEvent {
            amount,
            kind: LedgerEventKind::Withdrawn,
        })
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        let evt = self.handle_deposit(amount)?;
        self.apply(&evt);
        Ok(self.balance)
    }

    /// Returns the new balance.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        limits: &WithdrawalLimits,
    ) -> Result<Decimal, LedgerError> {
        let evt = self.handle_withdrawal(amount, limits)?;
        self.apply(&evt);
        Ok(self.balance)
    }
}
