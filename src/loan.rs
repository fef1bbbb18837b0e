//! Fixed-rate loan amortization.
//!
//! A quote is a plain value computed from its inputs; nothing here reads or
//! changes account state.

use crate::error::AccountError;
use crate::money::round_money;

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: i64 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct LoanQuote {
    pub principal: Decimal,
    pub annual_rate: Decimal,
    pub years: i64,
    pub months: u64,
    /// Equated monthly installment, rounded to 2 decimals.
    pub monthly_installment: Decimal,
    /// Installment times the number of months.
    pub total_payable: Decimal,
    pub total_interest: Decimal,
}

/// Computes the EMI for `principal` over `years` at a fixed `annual_rate`:
///
/// `emi = P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r = annual_rate / 12`
/// and `n = years * 12`.
pub fn quote(
    principal: Decimal,
    years: i64,
    annual_rate: Decimal,
) -> Result<LoanQuote, AccountError> {
    if principal <= Decimal::ZERO || years <= 0 {
        return Err(AccountError::InvalidLoanParams { principal, years });
    }

    let months = years
        .checked_mul(MONTHS_PER_YEAR)
        .and_then(|n| u64::try_from(n).ok())
        .ok_or(AccountError::LoanOutOfRange)?;

    let monthly_rate = annual_rate / Decimal::from(MONTHS_PER_YEAR);
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(months)
        .ok_or(AccountError::LoanOutOfRange)?;

    let denominator = growth - Decimal::ONE;
    if denominator == Decimal::ZERO {
        return Err(AccountError::DegenerateLoanMath);
    }

    let numerator = principal
        .checked_mul(monthly_rate)
        .and_then(|n| n.checked_mul(growth))
        .ok_or(AccountError::LoanOutOfRange)?;
    let installment = numerator
        .checked_div(denominator)
        .map(round_money)
        .ok_or(AccountError::LoanOutOfRange)?;

    let principal = round_money(principal);
    let total_payable = installment
        .checked_mul(Decimal::from(months))
        .map(round_money)
        .ok_or(AccountError::LoanOutOfRange)?;
    let total_interest = total_payable
        .checked_sub(principal)
        .map(round_money)
        .ok_or(AccountError::LoanOutOfRange)?;

    Ok(LoanQuote {
        principal,
        annual_rate,
        years,
        months,
        monthly_installment: installment,
        total_payable,
        total_interest,
    })
}

/// Annual rate as a whole percentage, e.g. `0.12` becomes `12`.
pub fn rate_percent(annual_rate: Decimal) -> Decimal {
    (annual_rate * dec!(100)).round_dp(0).normalize()
}
