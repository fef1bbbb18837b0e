use crate::account::Account;
use crate::config::BankConfig;
use crate::display;
use crate::input::{AmountRule, Prompter};

use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuChoice {
    Deposit,
    Withdraw,
    CheckBalance,
    Loan,
    Exit,
}

impl TryFrom<&str> for MenuChoice {
    type Error = String;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        match raw.trim() {
            "1" => Ok(MenuChoice::Deposit),
            "2" => Ok(MenuChoice::Withdraw),
            "3" => Ok(MenuChoice::CheckBalance),
            "4" => Ok(MenuChoice::Loan),
            "5" => Ok(MenuChoice::Exit),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEnd {
    SetupCancelled,
    Closed { holder: String, balance: Decimal },
}

/// One interactive session: opens a single account, then serves the menu
/// until the user exits.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: BankConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: BankConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            config,
        }
    }

    pub fn run(&mut self) -> io::Result<SessionEnd> {
        display::banner(self.prompter.output())?;

        let Some(mut account) = self.open_account()? else {
            writeln!(self.prompter.output(), "Application exiting during account setup.")?;
            info!("session ended during account setup");
            return Ok(SessionEnd::SetupCancelled);
        };

        loop {
            display::menu(self.prompter.output())?;

            let choice = match self.prompter.read_line("Enter your choice (1-5): ")? {
                Some(line) => MenuChoice::try_from(line.as_str()),
                None => Ok(MenuChoice::Exit),
            };

            match choice {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice, &mut account)?;
                }
                Err(raw) => {
                    debug!(%raw, "invalid menu choice");
                    writeln!(
                        self.prompter.output(),
                        " Invalid choice. Please enter a number between 1 and 5."
                    )?;
                }
            }
        }

        display::farewell(self.prompter.output(), &account)?;
        info!(holder = account.holder(), balance = %account.balance(), "session closed");

        Ok(SessionEnd::Closed {
            holder: account.holder().to_string(),
            balance: account.balance(),
        })
    }

    fn open_account(&mut self) -> io::Result<Option<Account>> {
        let Some(holder) = self
            .prompter
            .read_line("Welcome! Please enter your name to open an account: ")?
        else {
            return Ok(None);
        };

        display::section(self.prompter.output(), "ACCOUNT CREATION")?;
        let prompt = format!(
            "Enter initial deposit amount (0.00 or higher, blank for {}): ₹",
            display::money(self.config.initial_balance)
        );
        let Some(initial) =
            self.prompter
                .amount_or(&prompt, AmountRule::NonNegative, self.config.initial_balance)?
        else {
            return Ok(None);
        };

        let opening = Account::open(holder, initial, self.config);
        display::opening(self.prompter.output(), &opening)?;
        info!(holder = opening.account.holder(), "account opened");

        Ok(Some(opening.account))
    }

    fn dispatch(&mut self, choice: MenuChoice, account: &mut Account) -> io::Result<()> {
        match choice {
            MenuChoice::Deposit => {
                display::section(self.prompter.output(), "DEPOSIT")?;
                if let Some(amount) = self.prompter.amount(
                    "Enter amount to deposit (or 'q' to cancel): ₹",
                    AmountRule::Positive,
                )? {
                    let result = account.deposit(amount);
                    display::deposit(self.prompter.output(), account, amount, &result)?;
                }
            }
            MenuChoice::Withdraw => {
                display::section(self.prompter.output(), "WITHDRAW")?;
                if let Some(amount) = self.prompter.amount(
                    "Enter amount to withdraw (or 'q' to cancel): ₹",
                    AmountRule::Positive,
                )? {
                    let result = account.withdraw(amount);
                    display::withdrawal(self.prompter.output(), account, amount, &result)?;
                }
            }
            MenuChoice::CheckBalance => {
                display::section(self.prompter.output(), "BALANCE")?;
                display::balance(self.prompter.output(), account)?;
            }
            MenuChoice::Loan => {
                display::section(self.prompter.output(), "LOAN CALCULATION")?;
                let Some(principal) = self.prompter.amount(
                    "Enter the principal loan amount: ₹",
                    AmountRule::Positive,
                )?
                else {
                    return Ok(());
                };
                let Some(years) = self
                    .prompter
                    .whole_number("Enter loan duration in full years: ")?
                else {
                    return Ok(());
                };
                let result = account.quote_loan(principal, years);
                display::loan(self.prompter.output(), &result)?;
            }
            MenuChoice::Exit => {}
        }

        Ok(())
    }
}
