//! Terminal rendering of account results. Amounts are shown with a `₹` prefix
//! and exactly 2 decimals.

use crate::account::{Account, Opening};
use crate::error::AccountError;
use crate::loan::{rate_percent, LoanQuote};
use crate::money::round_money;

use rust_decimal::Decimal;
use std::io::{self, Write};

pub const RULE_WIDTH: usize = 50;

pub fn money(amount: Decimal) -> String {
    format!("₹{}", round_money(amount))
}

pub fn rule<W: Write>(writer: &mut W, ch: char) -> io::Result<()> {
    writeln!(writer, "{}", ch.to_string().repeat(RULE_WIDTH))
}

pub fn banner<W: Write>(writer: &mut W) -> io::Result<()> {
    rule(writer, '=')?;
    writeln!(writer, "      Welcome to the Banking App!")?;
    rule(writer, '=')
}

pub fn menu<W: Write>(writer: &mut W) -> io::Result<()> {
    rule(writer, '-')?;
    writeln!(writer, "Choose an operation:")?;
    writeln!(writer, "1: Deposit Money")?;
    writeln!(writer, "2: Withdraw Money")?;
    writeln!(writer, "3: Check Balance")?;
    writeln!(writer, "4: Take Loan (EMI Calculator)")?;
    writeln!(writer, "5: Exit Application")?;
    rule(writer, '-')
}

pub fn section<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    writeln!(writer, "\n--- {} ---", title)
}

pub fn opening<W: Write>(writer: &mut W, opening: &Opening) -> io::Result<()> {
    let account = &opening.account;
    if opening.was_clamped() {
        writeln!(
            writer,
            "Initial deposit cannot be negative. Setting balance to {} for {}.",
            money(Decimal::ZERO),
            account.holder()
        )?;
    }
    writeln!(
        writer,
        " Account created for {} with an initial balance of {}.",
        account.holder(),
        money(account.balance())
    )
}

pub fn balance<W: Write>(writer: &mut W, account: &Account) -> io::Result<()> {
    writeln!(
        writer,
        " Current balance for {}: {}",
        account.holder(),
        money(account.balance())
    )
}

pub fn deposit<W: Write>(
    writer: &mut W,
    account: &Account,
    amount: Decimal,
    result: &Result<Decimal, AccountError>,
) -> io::Result<()> {
    match result {
        Ok(_) => {
            writeln!(writer, "\n Deposit successful! Added {}.", money(amount))?;
            balance(writer, account)
        }
        Err(AccountError::InvalidAmount(_)) => {
            writeln!(writer, "\n Invalid deposit amount. Must be positive.")
        }
        Err(e) => failure(writer, e),
    }
}

pub fn withdrawal<W: Write>(
    writer: &mut W,
    account: &Account,
    amount: Decimal,
    result: &Result<Decimal, AccountError>,
) -> io::Result<()> {
    match result {
        Ok(_) => {
            writeln!(writer, "\n Withdrawal successful! Withdrew {}.", money(amount))?;
            balance(writer, account)
        }
        Err(AccountError::InvalidAmount(_)) => writeln!(
            writer,
            "\n Invalid withdrawal amount. Must be at least {}.",
            money(account.config().min_withdrawal)
        ),
        Err(AccountError::InsufficientFunds { requested, .. }) => {
            writeln!(
                writer,
                "\n Insufficient funds! You tried to withdraw {}.",
                money(*requested)
            )?;
            balance(writer, account)
        }
        Err(e) => failure(writer, e),
    }
}

pub fn loan<W: Write>(writer: &mut W, result: &Result<LoanQuote, AccountError>) -> io::Result<()> {
    match result {
        Ok(quote) => loan_quote(writer, quote),
        Err(AccountError::InvalidLoanParams { .. }) => writeln!(
            writer,
            "\n Invalid loan parameters. Both principal amount and duration must be positive."
        ),
        Err(AccountError::DegenerateLoanMath) => {
            writeln!(writer, "Error in loan calculation (denominator is zero).")
        }
        Err(AccountError::LoanOutOfRange) => writeln!(
            writer,
            "\n Loan amount or duration is too large to calculate."
        ),
        Err(e) => failure(writer, e),
    }
}

pub fn loan_quote<W: Write>(writer: &mut W, quote: &LoanQuote) -> io::Result<()> {
    writeln!(writer, "\n--- LOAN CALCULATION RESULT ---")?;
    writeln!(writer, "Loan Principal: {}", money(quote.principal))?;
    writeln!(writer, "Annual Interest Rate: {}%", rate_percent(quote.annual_rate))?;
    writeln!(
        writer,
        "Loan Duration: {} years ({} months)",
        quote.years, quote.months
    )?;
    writeln!(
        writer,
        "Your fixed monthly installment (EMI) will be: {}",
        money(quote.monthly_installment)
    )?;
    writeln!(writer, "Total amount payable: {}", money(quote.total_payable))?;
    writeln!(writer, "Total interest: {}", money(quote.total_interest))?;
    rule(writer, '-')
}

pub fn summary(account: &Account) -> String {
    format!(
        "Account Holder: {}, Balance: {}",
        account.holder(),
        money(account.balance())
    )
}

pub fn farewell<W: Write>(writer: &mut W, account: &Account) -> io::Result<()> {
    writeln!(writer, "\n=========================================")?;
    writeln!(
        writer,
        "Thank you for banking with us, {}! Have a great day.",
        account.holder()
    )?;
    writeln!(writer, "Final Account Summary: {}", summary(account))?;
    writeln!(writer, "=========================================")
}

fn failure<W: Write>(writer: &mut W, error: &AccountError) -> io::Result<()> {
    writeln!(writer, "\n Operation failed: {}", error)
}
