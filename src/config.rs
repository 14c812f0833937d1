use rust_decimal::Decimal;

use crate::account::BRANCH_CODE;

pub const MAX_WITHDRAWALS_PER_DAY: u32 = 3;
/// 500.00
pub const MAX_AMOUNT_PER_WITHDRAWAL: Decimal = Decimal::from_parts(50000, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalLimits {
    pub per_withdrawal: Decimal,
    pub daily_count: u32,
}

impl Default for WithdrawalLimits {
    fn default() -> Self {
        Self {
            per_withdrawal: MAX_AMOUNT_PER_WITHDRAWAL,
            daily_count: MAX_WITHDRAWALS_PER_DAY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BankConfig {
    pub branch_code: String,
    pub limits: WithdrawalLimits,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch_code: BRANCH_CODE.to_string(),
            limits: WithdrawalLimits::default(),
        }
    }
}
