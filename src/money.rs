use rust_decimal::Decimal;

/// Rounds to 2 decimal places (half to even) and pins the scale to exactly 2,
/// so `500` is stored as `500.00`.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    rounded
}
