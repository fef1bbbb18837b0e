use ledgerly::config::BankConfig;
use ledgerly::run_session;
use ledgerly::session::SessionEnd;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Cursor;

fn run(script: &str) -> (SessionEnd, String) {
    run_with(script, BankConfig::default())
}

fn run_with(script: &str, config: BankConfig) -> (SessionEnd, String) {
    let mut output = Vec::new();
    let end = run_session(Cursor::new(script.as_bytes()), &mut output, config).unwrap();
    (end, String::from_utf8(output).unwrap())
}

fn closed(holder: &str, balance: Decimal) -> SessionEnd {
    SessionEnd::Closed {
        holder: holder.to_string(),
        balance,
    }
}

#[test]
fn test_deposit_withdraw_and_exit() {
    let (end, output) = run("Ravi\n500\n1\n250\n2\n1000\n2\n250\n3\n5\n");

    assert_eq!(end, closed("Ravi", dec!(500.00)));
    assert!(output.contains("Welcome to the Banking App!"));
    assert!(output.contains("Account created for Ravi with an initial balance of ₹500.00."));
    assert!(output.contains("Deposit successful! Added ₹250.00."));
    assert!(output.contains("Current balance for Ravi: ₹750.00"));
    assert!(output.contains("Insufficient funds! You tried to withdraw ₹1000.00."));
    assert!(output.contains("Withdrawal successful! Withdrew ₹250.00."));
    assert!(output.contains("Thank you for banking with us, Ravi! Have a great day."));
    assert!(output.contains("Final Account Summary: Account Holder: Ravi, Balance: ₹500.00"));
}

#[test]
fn test_setup_cancelled() {
    let (end, output) = run("Asha\nq\n");

    assert_eq!(end, SessionEnd::SetupCancelled);
    assert!(output.contains("Application exiting during account setup."));
    assert!(!output.contains("Choose an operation:"));
}

#[test]
fn test_setup_end_of_input_before_name() {
    let (end, _) = run("");
    assert_eq!(end, SessionEnd::SetupCancelled);
}

#[test]
fn test_initial_deposit_rejects_negative_then_accepts_zero() {
    let (end, output) = run("Asha\n-50\n0\n5\n");

    assert_eq!(end, closed("Asha", Decimal::ZERO));
    assert!(output.contains("Amount must be positive."));
    assert!(output.contains("Account created for Asha with an initial balance of ₹0.00."));
}

#[test]
fn test_blank_initial_deposit_uses_configured_default() {
    let config = BankConfig::new(dec!(1200), dec!(0.01), dec!(0.12)).unwrap();
    let (end, output) = run_with("Mira\n\n5\n", config);

    assert_eq!(end, closed("Mira", dec!(1200)));
    assert!(output.contains("blank for ₹1200.00"));
}

#[test]
fn test_loan_quote_leaves_balance() {
    let (end, output) = run("Ravi\n500\n4\n100000\n5\n5\n");

    assert_eq!(end, closed("Ravi", dec!(500)));
    assert!(output.contains("--- LOAN CALCULATION RESULT ---"));
    assert!(output.contains("Loan Duration: 5 years (60 months)"));
    assert!(output.contains("Your fixed monthly installment (EMI) will be: ₹2224.44"));
}

#[test]
fn test_loan_with_zero_rate_reports_degenerate_math() {
    let config = BankConfig::new(dec!(0), dec!(0.01), Decimal::ZERO).unwrap();
    let (_, output) = run_with("Ravi\n0\n4\n1000\n2\n5\n", config);

    assert!(output.contains("Error in loan calculation (denominator is zero)."));
}

#[test]
fn test_loan_cancelled_at_duration() {
    let (_, output) = run("Ravi\n500\n4\n1000\nexit\n5\n");

    assert!(!output.contains("LOAN CALCULATION RESULT"));
}

#[test]
fn test_invalid_inputs_reprompt() {
    let (end, output) = run("Ravi\nabc\n100\n7\n1\nlots\n-3\n0.5\n2\nQUIT\n5\n");

    assert_eq!(end, closed("Ravi", dec!(100.50)));
    assert!(output.contains("Please enter a valid number."));
    assert!(output.contains("Invalid choice. Please enter a number between 1 and 5."));
    assert!(output.contains("Amount must be positive."));
    assert!(!output.contains("Withdrawal successful!"));
}

#[test]
fn test_withdrawal_below_minimum_unit() {
    let (end, output) = run("Ravi\n10\n2\n0.001\n5\n");

    assert_eq!(end, closed("Ravi", dec!(10)));
    assert!(output.contains("Invalid withdrawal amount. Must be at least ₹0.01."));
}

#[test]
fn test_end_of_input_at_menu_closes_session() {
    let (end, output) = run("Ravi\n42.424\n1\n0.01\n");

    assert_eq!(end, closed("Ravi", dec!(42.43)));
    assert!(output.contains("Final Account Summary: Account Holder: Ravi, Balance: ₹42.43"));
}

#[test]
fn test_loan_too_large_to_total_keeps_session_alive() {
    let (end, output) = run("Ravi\n500\n4\n75000000000000000000000000000\n1\n3\n5\n");

    assert_eq!(end, closed("Ravi", dec!(500)));
    assert!(output.contains("Loan amount or duration is too large to calculate."));
    assert!(!output.contains("LOAN CALCULATION RESULT"));
    assert!(output.contains("Current balance for Ravi: ₹500.00"));
}

#[test]
fn test_loan_term_too_long_is_not_reported_as_zero_denominator() {
    let (_, output) = run("Ravi\n500\n4\n1000\n100000\n5\n");

    assert!(output.contains("Loan amount or duration is too large to calculate."));
    assert!(!output.contains("denominator is zero"));
}

#[test]
fn test_loan_prompts_use_historical_text() {
    let (_, output) = run("Ravi\n500\n4\nq\n5\n");

    assert!(output.contains("Enter the principal loan amount: ₹"));
    assert!(!output.contains("principal loan amount (or 'q' to cancel)"));
    assert!(!output.contains("LOAN CALCULATION RESULT"));
}
