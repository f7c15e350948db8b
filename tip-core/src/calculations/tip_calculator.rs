//! Tip, total and category calculations for the calculator screen.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Parse bill text; blank, garbage or negative input becomes 0 |
//! | 2    | Tip: bill × (percentage ÷ 100), rounded to 2 places |
//! | 3    | Total: bill + tip, rounded to 2 places |
//! | 4    | Category from the percentage thresholds below |
//! | 5    | Color looked up from the category |
//!
//! A blank bill field short-circuits steps 2 and 3 to exactly zero, whatever
//! the slider says. A bill too large for the tip or total to be represented
//! is treated like unparsable text: every amount becomes zero.
//!
//! # Category thresholds
//!
//! | Percentage | Category |
//! |------------|----------|
//! | [0, 10)    | Poor |
//! | [10, 15)   | Acceptable |
//! | [15, 25)   | Good |
//! | [25, 30]   | Amazing |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{TipCategory, TipInput, TipPercentage, calculate};
//!
//! let input = TipInput::new("100", TipPercentage::new(dec!(10)).unwrap());
//! let breakdown = calculate(&input);
//!
//! assert_eq!(breakdown.tip, dec!(10.00));
//! assert_eq!(breakdown.total, dec!(110.00));
//! assert_eq!(breakdown.category, TipCategory::Acceptable);
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{parse_bill_amount, round_half_up};
use crate::{CategoryColor, TipBreakdown, TipCategory, TipInput, TipPercentage};

/// Lowest percentage rated [`TipCategory::Acceptable`].
pub const ACCEPTABLE_FROM: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
/// Lowest percentage rated [`TipCategory::Good`].
pub const GOOD_FROM: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
/// Lowest percentage rated [`TipCategory::Amazing`].
pub const AMAZING_FROM: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Computes the tip for free-form bill text.
///
/// Unparsable text counts as a zero bill; nothing is reported to the caller.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{TipPercentage, compute_tip};
///
/// let pct = TipPercentage::new(dec!(18)).unwrap();
///
/// assert_eq!(compute_tip("42.50", pct), dec!(7.65));
/// assert_eq!(compute_tip("n/a", pct), dec!(0));
/// ```
pub fn compute_tip(
    bill_text: &str,
    percentage: TipPercentage,
) -> Decimal {
    tip_for_amount(parse_bill_amount(bill_text), percentage)
}

/// Computes the tip for an already-parsed bill amount.
///
/// `None` when the product does not fit in a [`Decimal`].
fn checked_tip(
    bill: Decimal,
    percentage: TipPercentage,
) -> Option<Decimal> {
    bill.checked_mul(percentage.as_fraction()).map(round_half_up)
}

fn checked_total(
    bill: Decimal,
    tip: Decimal,
) -> Option<Decimal> {
    bill.checked_add(tip).map(round_half_up)
}

fn tip_for_amount(
    bill: Decimal,
    percentage: TipPercentage,
) -> Decimal {
    checked_tip(bill, percentage).unwrap_or_else(|| {
        warn!(%bill, %percentage, "tip overflows; using 0");
        Decimal::ZERO
    })
}

/// Adds the tip to the bill, rounded to two decimal places.
///
/// A sum too large to represent yields zero, the same as an unparsable bill.
pub fn compute_total(
    bill: Decimal,
    tip: Decimal,
) -> Decimal {
    checked_total(bill, tip).unwrap_or_else(|| {
        warn!(%bill, %tip, "total overflows; using 0");
        Decimal::ZERO
    })
}

/// Maps a percentage onto its qualitative [`TipCategory`].
///
/// Total over `[0, 30]` and non-decreasing as the percentage grows.
pub fn categorize(percentage: TipPercentage) -> TipCategory {
    let value = percentage.value();
    if value < ACCEPTABLE_FROM {
        TipCategory::Poor
    } else if value < GOOD_FROM {
        TipCategory::Acceptable
    } else if value < AMAZING_FROM {
        TipCategory::Good
    } else {
        TipCategory::Amazing
    }
}

/// Returns the display color for a category.
pub fn color_for(category: TipCategory) -> CategoryColor {
    match category {
        TipCategory::Poor => CategoryColor::RED,
        TipCategory::Acceptable => CategoryColor::AMBER,
        TipCategory::Good => CategoryColor::YELLOW_GREEN,
        TipCategory::Amazing => CategoryColor::GREEN,
    }
}

/// Recomputes every displayed value from the current input.
///
/// A blank bill forces tip and total to zero regardless of the percentage.
pub fn calculate(input: &TipInput) -> TipBreakdown {
    let category = categorize(input.percentage);
    let color = color_for(category);

    if input.is_bill_blank() {
        debug!(percentage = %input.percentage, "bill is blank; tip and total are zero");
        return TipBreakdown {
            bill: Decimal::ZERO,
            percentage: input.percentage,
            tip: Decimal::ZERO,
            total: Decimal::ZERO,
            category,
            color,
        };
    }

    let parsed = parse_bill_amount(&input.bill_text);
    let amounts = checked_tip(parsed, input.percentage)
        .and_then(|tip| Some((tip, checked_total(parsed, tip)?)));
    let (bill, tip, total) = match amounts {
        Some((tip, total)) => (parsed, tip, total),
        None => {
            warn!(bill = %parsed, percentage = %input.percentage, "bill too large; using 0");
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        }
    };

    debug!(
        bill = %bill,
        percentage = %input.percentage.value(),
        tip = %tip,
        total = %total,
        category = %category,
        "tip recalculated"
    );

    TipBreakdown {
        bill,
        percentage: input.percentage,
        tip,
        total,
        category,
        color,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    fn pct(value: Decimal) -> TipPercentage {
        TipPercentage::new(value).unwrap()
    }

    /// Initializes tracing subscriber for tests that exercise logged paths.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // compute_tip tests
    // =========================================================================

    #[test]
    fn compute_tip_applies_percentage() {
        assert_eq!(compute_tip("100", pct(dec!(10))), dec!(10.00));
    }

    #[test]
    fn compute_tip_rounds_to_cents() {
        // 33.33 × 0.15 = 4.9995
        assert_eq!(compute_tip("33.33", pct(dec!(15))), dec!(5.00));
        // 19.99 × 0.175 = 3.49825
        assert_eq!(compute_tip("19.99", pct(dec!(17.5))), dec!(3.50));
    }

    #[test]
    fn compute_tip_zero_percent_is_zero() {
        assert_eq!(compute_tip("50.5", pct(dec!(0))), dec!(0.00));
    }

    #[test]
    fn compute_tip_unparsable_bill_is_zero() {
        let _guard = init_test_tracing();

        assert_eq!(compute_tip("lunch", pct(dec!(20))), dec!(0));
    }

    #[test]
    fn compute_tip_matches_formula_across_range() {
        let bill = dec!(87.45);
        for tenths in 0..=300 {
            let p = Decimal::new(tenths, 1);
            let expected = round_half_up(bill * p / dec!(100));

            assert_eq!(compute_tip("87.45", pct(p)), expected, "at {p}%");
        }
    }

    #[test]
    fn compute_tip_never_negative_for_valid_input() {
        for tenths in 0..=300 {
            let tip = compute_tip("0.01", pct(Decimal::new(tenths, 1)));

            assert!(tip >= Decimal::ZERO);
        }
    }

    // =========================================================================
    // compute_total tests
    // =========================================================================

    #[test]
    fn compute_total_adds_tip_to_bill() {
        assert_eq!(compute_total(dec!(100), dec!(10.00)), dec!(110.00));
    }

    #[test]
    fn compute_total_rounds_long_bill() {
        assert_eq!(compute_total(dec!(10.005), dec!(1.50)), dec!(11.51));
    }

    #[test]
    fn compute_total_overflow_is_zero() {
        let _guard = init_test_tracing();

        assert_eq!(compute_total(Decimal::MAX, dec!(1)), Decimal::ZERO);
    }

    #[test]
    fn compute_tip_handles_largest_bill() {
        // Decimal::MAX × 0.3 still fits; only the total can overflow.
        let huge = Decimal::MAX.to_string();

        assert_eq!(compute_tip(&huge, pct(dec!(30))), round_half_up(Decimal::MAX * dec!(0.3)));
    }

    // =========================================================================
    // categorize tests
    // =========================================================================

    #[test]
    fn categorize_lower_edges() {
        assert_eq!(categorize(pct(dec!(0))), TipCategory::Poor);
        assert_eq!(categorize(pct(dec!(10))), TipCategory::Acceptable);
        assert_eq!(categorize(pct(dec!(15))), TipCategory::Good);
        assert_eq!(categorize(pct(dec!(25))), TipCategory::Amazing);
    }

    #[test]
    fn categorize_upper_edges_are_exclusive() {
        assert_eq!(categorize(pct(dec!(9.99))), TipCategory::Poor);
        assert_eq!(categorize(pct(dec!(14.99))), TipCategory::Acceptable);
        assert_eq!(categorize(pct(dec!(24))), TipCategory::Good);
        assert_eq!(categorize(pct(dec!(24.99))), TipCategory::Good);
        assert_eq!(categorize(pct(dec!(30))), TipCategory::Amazing);
    }

    #[test]
    fn categorize_is_monotonic() {
        let mut previous = TipCategory::Poor;
        for hundredths in 0..=3000 {
            let category = categorize(pct(Decimal::new(hundredths, 2)));

            assert!(category >= previous, "dropped at {hundredths}");
            previous = category;
        }
        assert_eq!(previous, TipCategory::Amazing);
    }

    // =========================================================================
    // color_for tests
    // =========================================================================

    #[test]
    fn color_for_uses_fixed_palette() {
        assert_eq!(color_for(TipCategory::Poor).rgb, 0xDC1E0B);
        assert_eq!(color_for(TipCategory::Acceptable).rgb, 0xDCA10B);
        assert_eq!(color_for(TipCategory::Good).rgb, 0xABF346);
        assert_eq!(color_for(TipCategory::Amazing).rgb, 0x35BA01);
    }

    #[test]
    fn color_for_is_one_to_one() {
        let colors: HashSet<u32> = TipCategory::ALL
            .into_iter()
            .map(|category| color_for(category).rgb)
            .collect();

        assert_eq!(colors.len(), TipCategory::ALL.len());
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_fills_every_field() {
        let input = TipInput::new("64", pct(dec!(20)));

        let result = calculate(&input);

        assert_eq!(
            result,
            TipBreakdown {
                bill: dec!(64),
                percentage: pct(dec!(20)),
                tip: dec!(12.80),
                total: dec!(76.80),
                category: TipCategory::Good,
                color: CategoryColor::YELLOW_GREEN,
            }
        );
    }

    #[test]
    fn calculate_blank_bill_overrides_slider() {
        let _guard = init_test_tracing();
        let input = TipInput::new("   ", pct(dec!(30)));

        let result = calculate(&input);

        assert_eq!(result.tip, Decimal::ZERO);
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.category, TipCategory::Amazing);
    }

    #[test]
    fn calculate_garbage_bill_yields_zero_totals() {
        let input = TipInput::new("ten bucks", pct(dec!(15)));

        let result = calculate(&input);

        assert_eq!(result.bill, Decimal::ZERO);
        assert_eq!(result.tip, Decimal::ZERO);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn calculate_overflowing_bill_yields_zero_totals() {
        let _guard = init_test_tracing();
        let input = TipInput::new("79228162514264337593543950335", pct(dec!(30)));

        let result = calculate(&input);

        assert_eq!(result.bill, Decimal::ZERO);
        assert_eq!(result.tip, Decimal::ZERO);
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.category, TipCategory::Amazing);
    }

    #[test]
    fn calculate_large_bill_keeps_total_equal_to_bill_plus_tip() {
        let input = TipInput::new("1000000000000000000000000", pct(dec!(30)));

        let result = calculate(&input);

        assert_eq!(result.tip, dec!(300000000000000000000000));
        assert_eq!(result.total, result.bill + result.tip);
    }

    #[test]
    fn calculate_total_consistent_with_tip() {
        let input = TipInput::new("123.45", pct(dec!(22.5)));

        let result = calculate(&input);

        assert_eq!(result.tip, compute_tip("123.45", pct(dec!(22.5))));
        assert_eq!(result.total, compute_total(result.bill, result.tip));
    }
}
