use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::{
    account::{Account, AccountNumber, AccountRegistry},
    config::BankConfig,
    ledger::Ledger,
    user::{User, UserRegistration, UserRegistry},
};

use super::{BankError, BankProcessor};

pub struct InMemoryBank {
    config: BankConfig,
    ledger: Ledger,
    users: UserRegistry,
    accounts: AccountRegistry,
    next_account_number: AccountNumber,
}

impl InMemoryBank {
    pub fn new(config: BankConfig) -> Self {
        Self {
            config,
            ledger: Ledger::default(),
            users: UserRegistry::default(),
            accounts: AccountRegistry::default(),
            next_account_number: 1,
        }
    }

    pub fn next_account_number(&self) -> AccountNumber {
        self.next_account_number
    }
}

impl Default for InMemoryBank {
    fn default() -> Self {
        Self::new(BankConfig::default())
    }
}

impl BankProcessor for InMemoryBank {
    fn config(&self) -> &BankConfig {
        &self.config
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        let balance = self.ledger.deposit(amount).inspect_err(|err| {
            warn!(%amount, %err, "deposit rejected");
        })?;
        debug!(%amount, %balance, "deposit applied");
        Ok(balance)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        let balance = self
            .ledger
            .withdraw(amount, &self.config.limits)
            .inspect_err(|err| {
                warn!(%amount, %err, "withdrawal rejected");
            })?;
        debug!(
            %amount,
            %balance,
            withdrawals = self.ledger.withdrawal_count(),
            "withdrawal applied"
        );
        Ok(balance)
    }

    fn statement(&self) -> &Ledger {
        &self.ledger
    }

    fn find_user(&self, national_id: &str) -> Result<&User, BankError> {
        Ok(self.users.find(national_id)?)
    }

    fn register_user(&mut self, registration: UserRegistration) -> Result<&User, BankError> {
        let user = self.users.register(registration).inspect_err(|err| {
            warn!(%err, "user registration rejected");
        })?;
        info!(national_id = %user.national_id, "user registered");
        Ok(user)
    }

    fn open_account(&mut self, owner_national_id: &str) -> Result<&Account, BankError> {
        let account = self
            .accounts
            .open(
                &self.users,
                &self.config.branch_code,
                self.next_account_number,
                owner_national_id,
            )
            .inspect_err(|err| {
                warn!(%err, "account opening rejected");
            })?;
        // the number is consumed only when the account was actually opened
        self.next_account_number += 1;
        info!(
            account_number = account.account_number,
            owner = %account.owner.national_id,
            "account opened"
        );
        Ok(account)
    }

    fn accounts(&self) -> &[Account] {
        self.accounts.list()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{account::AccountError, config::WithdrawalLimits, ledger::LedgerError};

    use super::*;

    fn registration(national_id: &str) -> UserRegistration {
        UserRegistration {
            national_id: national_id.to_string(),
            full_name: "Alan Turing".to_string(),
            birth_date: "23-06-1912".to_string(),
            address: "Wilmslow".to_string(),
        }
    }

    #[test]
    fn process_end_to_end_scenario() {
        let mut bank = InMemoryBank::default();
        assert_eq!(bank.deposit(dec!(1000.00)).unwrap(), dec!(1000.00));
        assert_eq!(bank.withdraw(dec!(500.00)).unwrap(), dec!(500.00));
        assert_eq!(bank.statement().withdrawal_count(), 1);

        let err = bank.withdraw(dec!(600.00)).unwrap_err();
        assert_eq!(err, BankError::LedgerErr(LedgerError::InsufficientFunds));
        assert_eq!(bank.statement().balance(), dec!(500.00));

        bank.deposit(dec!(1000.00)).unwrap();
        bank.withdraw(dec!(500.00)).unwrap();
        bank.withdraw(dec!(500.00)).unwrap();
        assert_eq!(bank.statement().withdrawal_count(), 3);
        let err = bank.withdraw(dec!(0.01)).unwrap_err();
        assert_eq!(
            err,
            BankError::LedgerErr(LedgerError::ExceedsDailyWithdrawalCount { limit: 3 })
        );
        assert_eq!(bank.statement().balance(), dec!(500.00));
        assert_eq!(
            bank.statement().statement_log(),
            &[
                "Deposit: 1000.00".to_string(),
                "Withdrawal: 500.00".to_string(),
                "Deposit: 1000.00".to_string(),
                "Withdrawal: 500.00".to_string(),
                "Withdrawal: 500.00".to_string(),
            ]
        );
    }

    #[test]
    fn overflowing_deposit_is_reported() {
        let mut bank = InMemoryBank::default();
        bank.deposit(Decimal::MAX).unwrap();
        let err = bank.deposit(dec!(1)).unwrap_err();
        assert_eq!(err, BankError::LedgerErr(LedgerError::BalanceOverflow));
        assert_eq!(bank.statement().balance(), Decimal::MAX);
    }

    #[test]
    fn failed_open_does_not_consume_account_number() {
        let mut bank = InMemoryBank::default();
        let err = bank.open_account("12345678900").unwrap_err();
        assert_eq!(err, BankError::AccountErr(AccountError::OwnerNotFound));
        assert_eq!(bank.next_account_number(), 1);

        bank.register_user(registration("123.456.789-00")).unwrap();
        let account = bank.open_account("12345678900").unwrap();
        assert_eq!(account.account_number, 1);
        assert_eq!(account.branch_code, "0001");
        assert_eq!(bank.open_account("123.456.789-00").unwrap().account_number, 2);
        assert_eq!(bank.next_account_number(), 3);
        assert_eq!(bank.accounts().len(), 2);
    }

    #[test]
    fn custom_config_limits() {
        let mut bank = InMemoryBank::new(BankConfig {
            branch_code: "0042".to_string(),
            limits: WithdrawalLimits {
                per_withdrawal: dec!(50),
                daily_count: 1,
            },
        });
        bank.deposit(dec!(200)).unwrap();
        assert!(matches!(
            bank.withdraw(dec!(60)).unwrap_err(),
            BankError::LedgerErr(LedgerError::ExceedsPerTransactionLimit { .. })
        ));
        bank.withdraw(dec!(50)).unwrap();
        assert!(matches!(
            bank.withdraw(dec!(10)).unwrap_err(),
            BankError::LedgerErr(LedgerError::ExceedsDailyWithdrawalCount { limit: 1 })
        ));

        bank.register_user(registration("1")).unwrap();
        assert_eq!(bank.open_account("1").unwrap().branch_code, "0042");
    }
}
