use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid loan parameters: principal {principal}, years {years}")]
    InvalidLoanParams { principal: Decimal, years: i64 },

    #[error("Loan calculation has no solution (denominator is zero)")]
    DegenerateLoanMath,

    #[error("Loan amount or duration is too large to calculate")]
    LoanOutOfRange,

    #[error("Amount out of range: {0}")]
    AmountOverflow(Decimal),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Initial balance cannot be negative: {0}")]
    NegativeInitialBalance(Decimal),

    #[error("Minimum withdrawal must be positive: {0}")]
    NonPositiveMinWithdrawal(Decimal),

    #[error("Annual rate cannot be negative: {0}")]
    NegativeAnnualRate(Decimal),
}
