pub mod account;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod loan;
pub mod money;
pub mod session;

use crate::config::BankConfig;
use crate::session::{Session, SessionEnd};

use std::io::{BufRead, Write};

/// Runs one interactive session over the given streams.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: BankConfig,
) -> std::io::Result<SessionEnd> {
    Session::new(input, output, config).run()
}
