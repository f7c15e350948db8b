//! Money helpers shared by the tip calculation: rounding, lenient bill
//! parsing and fixed two-digit formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

/// Rounds a money value to exactly two decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(12.344)), dec!(12.34));
/// assert_eq!(round_half_up(dec!(12.345)), dec!(12.35));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Trims whitespace and drops `,` thousands separators.
fn normalize_amount_text(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses free-form bill text into an amount, substituting zero for
/// anything that is not a non-negative decimal.
///
/// Never fails: blank text, garbage and negative amounts all yield
/// [`Decimal::ZERO`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::parse_bill_amount;
///
/// assert_eq!(parse_bill_amount("1,250.75"), dec!(1250.75));
/// assert_eq!(parse_bill_amount("twelve"), dec!(0));
/// ```
pub fn parse_bill_amount(text: &str) -> Decimal {
    let normalized = normalize_amount_text(text);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }

    match normalized.parse::<Decimal>() {
        Ok(amount) if amount.is_zero() => Decimal::ZERO,
        Ok(amount) if amount.is_sign_negative() => {
            warn!(input = %text, "negative bill amount; using 0");
            Decimal::ZERO
        }
        Ok(amount) => amount,
        Err(e) => {
            debug!(input = %text, "unparsable bill amount, using 0: {}", e);
            Decimal::ZERO
        }
    }
}

/// Formats an amount with exactly two fractional digits (`10` → `"10.00"`).
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}
