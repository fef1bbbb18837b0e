//! Line-oriented input: parse a raw line, validate the value, re-prompt until
//! something usable or a cancel token arrives.

use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

pub const CANCEL_TOKENS: [&str; 3] = ["q", "quit", "exit"];

const INVALID_NUMBER: &str = "Please enter a valid number.";
const AMOUNT_NOT_POSITIVE: &str = "Amount must be positive.";
const DURATION_NOT_POSITIVE: &str = "Duration must be a positive whole number.";

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("not a number: {0}")]
    NotANumber(String),

    #[error("not a whole number: {0}")]
    NotAWholeNumber(String),
}

#[derive(Debug, PartialEq)]
pub enum Parsed<T> {
    Value(T),
    Cancel,
    Invalid(ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountRule {
    Positive,
    NonNegative,
}

impl AmountRule {
    pub fn accepts(&self, amount: Decimal) -> bool {
        match self {
            AmountRule::Positive => amount > Decimal::ZERO,
            AmountRule::NonNegative => amount >= Decimal::ZERO,
        }
    }
}

pub fn is_cancel_token(raw: &str) -> bool {
    let raw = raw.trim();
    CANCEL_TOKENS
        .iter()
        .any(|token| raw.eq_ignore_ascii_case(token))
}

pub fn parse_amount(raw: &str) -> Parsed<Decimal> {
    let raw = raw.trim();
    if is_cancel_token(raw) {
        return Parsed::Cancel;
    }
    if raw.is_empty() {
        return Parsed::Invalid(ParseError::Empty);
    }

    match Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        Ok(amount) => Parsed::Value(amount),
        Err(_) => Parsed::Invalid(ParseError::NotANumber(raw.to_string())),
    }
}

pub fn parse_whole_number(raw: &str) -> Parsed<i64> {
    let raw = raw.trim();
    if is_cancel_token(raw) {
        return Parsed::Cancel;
    }
    if raw.is_empty() {
        return Parsed::Invalid(ParseError::Empty);
    }

    match raw.parse::<i64>() {
        Ok(value) => Parsed::Value(value),
        Err(_) => Parsed::Invalid(ParseError::NotAWholeNumber(raw.to_string())),
    }
}

/// Prompts on `output` and reads answers from `input`.
///
/// Every `Ok(None)` returned here means the user cancelled, either with a
/// cancel token or by closing the input stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt` and returns the next line, trimmed. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    pub fn amount(&mut self, prompt: &str, rule: AmountRule) -> io::Result<Option<Decimal>> {
        self.amount_inner(prompt, rule, None)
    }

    /// Like [`Prompter::amount`], but a blank line yields `default`.
    pub fn amount_or(
        &mut self,
        prompt: &str,
        rule: AmountRule,
        default: Decimal,
    ) -> io::Result<Option<Decimal>> {
        self.amount_inner(prompt, rule, Some(default))
    }

    fn amount_inner(
        &mut self,
        prompt: &str,
        rule: AmountRule,
        default: Option<Decimal>,
    ) -> io::Result<Option<Decimal>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match (parse_amount(&line), default) {
                (Parsed::Cancel, _) => return Ok(None),
                (Parsed::Invalid(ParseError::Empty), Some(default)) => return Ok(Some(default)),
                (Parsed::Invalid(e), _) => {
                    trace!(error = %e, "unparseable amount");
                    writeln!(self.output, "{}", INVALID_NUMBER)?;
                }
                (Parsed::Value(amount), _) if rule.accepts(amount) => return Ok(Some(amount)),
                (Parsed::Value(_), _) => writeln!(self.output, "{}", AMOUNT_NOT_POSITIVE)?,
            }
        }
    }

    pub fn whole_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match parse_whole_number(&line) {
                Parsed::Cancel => return Ok(None),
                Parsed::Invalid(e) => {
                    trace!(error = %e, "unparseable whole number");
                    writeln!(self.output, "{}", INVALID_NUMBER)?;
                }
                Parsed::Value(value) if value > 0 => return Ok(Some(value)),
                Parsed::Value(_) => writeln!(self.output, "{}", DURATION_NOT_POSITIVE)?,
            }
        }
    }
}
