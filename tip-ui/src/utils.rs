use gpui::{Rgba, rgb};
use rust_decimal::Decimal;
use thiserror::Error;
use tip_core::{CategoryColor, TipPercentage, TipPercentageError};

/// Error returned when a `--percent` argument is not a usable tip percentage.
#[derive(Debug, Error)]
pub enum PercentArgError {
    #[error("'{input}' is not a number: {source}")]
    NotANumber {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error(transparent)]
    OutOfRange(#[from] TipPercentageError),
}

/// Parses a command-line percentage such as `18` or `17.5%`.
///
/// Unlike the slider, out-of-range values are rejected rather than clamped.
pub fn parse_percent_arg(s: &str) -> Result<TipPercentage, PercentArgError> {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let value: Decimal = trimmed.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid percentage: {}", e);
        PercentArgError::NotANumber {
            input: s.to_string(),
            source: e,
        }
    })?;
    Ok(TipPercentage::new(value)?)
}

/// Converts a core category color into a gpui color.
pub fn category_rgb(color: CategoryColor) -> Rgba {
    rgb(color.rgb)
}
