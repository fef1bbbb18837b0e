use crate::config::BankConfig;
use crate::error::AccountError;
use crate::loan::{self, LoanQuote};
use crate::money::round_money;

use rust_decimal::Decimal;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Account {
    holder: String,
    balance: Decimal,
    config: BankConfig,
}

/// Result of opening an account. Opening never fails: a negative initial
/// deposit is replaced by zero and reported in `clamped_from`.
#[derive(Debug, Clone)]
pub struct Opening {
    pub account: Account,
    pub clamped_from: Option<Decimal>,
}

impl Opening {
    pub fn was_clamped(&self) -> bool {
        self.clamped_from.is_some()
    }
}

impl Account {
    pub fn open(
        holder: impl Into<String>,
        initial_deposit: Decimal,
        config: BankConfig,
    ) -> Opening {
        let holder = holder.into();

        let (balance, clamped_from) = if initial_deposit < Decimal::ZERO {
            warn!(%holder, %initial_deposit, "negative initial deposit, opening at zero");
            (round_money(Decimal::ZERO), Some(initial_deposit))
        } else {
            (round_money(initial_deposit), None)
        };

        debug!(%holder, %balance, "account opened");

        Opening {
            account: Self {
                holder,
                balance,
                config,
            },
            clamped_from,
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Adds `amount` (rounded to 2 decimals) and returns the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        if amount <= Decimal::ZERO {
            warn!(%amount, "rejected deposit: amount must be positive");
            return Err(AccountError::InvalidAmount(amount));
        }

        let amount = round_money(amount);
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::AmountOverflow(amount))?;

        self.balance = round_money(balance);
        debug!(%amount, balance = %self.balance, "deposit applied");

        Ok(self.balance)
    }

    /// Rounds `amount` to 2 decimals, then removes it from the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        let amount = round_money(amount);

        if amount < self.config.min_withdrawal {
            warn!(
                %amount,
                minimum = %self.config.min_withdrawal,
                "rejected withdrawal: below minimum"
            );
            return Err(AccountError::InvalidAmount(amount));
        }

        if self.balance < amount {
            warn!(%amount, balance = %self.balance, "rejected withdrawal: insufficient funds");
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance = round_money(self.balance - amount);
        debug!(%amount, balance = %self.balance, "withdrawal applied");

        Ok(self.balance)
    }

    /// Quotes a loan at the configured annual rate. Does not touch the balance.
    pub fn quote_loan(&self, principal: Decimal, years: i64) -> Result<LoanQuote, AccountError> {
        let quote = loan::quote(principal, years, self.config.annual_rate).inspect_err(|e| {
            warn!(%principal, years, error = %e, "loan quote failed");
        })?;

        debug!(%principal, years, emi = %quote.monthly_installment, "loan quoted");

        Ok(quote)
    }
}
