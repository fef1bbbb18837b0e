use crate::error::ConfigError;
use crate::money::round_money;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const DEFAULT_INITIAL_BALANCE: Decimal = dec!(500.00);
pub const DEFAULT_MIN_WITHDRAWAL: Decimal = dec!(0.01);
pub const DEFAULT_ANNUAL_RATE: Decimal = dec!(0.12);

/// Fixed parameters of a session, handed to the account when it is opened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankConfig {
    pub initial_balance: Decimal,
    pub min_withdrawal: Decimal,
    /// Annual loan rate as a fraction, e.g. `0.12` for 12%.
    pub annual_rate: Decimal,
}

impl BankConfig {
    pub fn new(
        initial_balance: Decimal,
        min_withdrawal: Decimal,
        annual_rate: Decimal,
    ) -> Result<Self, ConfigError> {
        if initial_balance < Decimal::ZERO {
            return Err(ConfigError::NegativeInitialBalance(initial_balance));
        }
        if min_withdrawal <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveMinWithdrawal(min_withdrawal));
        }
        if annual_rate < Decimal::ZERO {
            return Err(ConfigError::NegativeAnnualRate(annual_rate));
        }

        Ok(Self {
            initial_balance: round_money(initial_balance),
            min_withdrawal: round_money(min_withdrawal),
            annual_rate,
        })
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            initial_balance: DEFAULT_INITIAL_BALANCE,
            min_withdrawal: DEFAULT_MIN_WITHDRAWAL,
            annual_rate: DEFAULT_ANNUAL_RATE,
        }
    }
}
