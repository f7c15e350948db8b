use std::fmt;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a [`TipPercentage`] from an unchecked value.
#[derive(Debug, Error, PartialEq)]
pub enum TipPercentageError {
    /// The value lies outside the closed range `[0, 30]`.
    #[error("tip percentage must be between {min} and {max}, got {value}")]
    OutOfRange {
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    /// The slider reported NaN or infinity.
    #[error("tip percentage must be a finite number, got {0}")]
    NotFinite(f32),
}

/// A tip percentage in the closed range `[0, 30]`.
///
/// The value is a percent, not a fraction: `15` means fifteen percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TipPercentage(Decimal);

impl TipPercentage {
    pub const MIN: Decimal = Decimal::ZERO;
    pub const MAX: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

    /// Zero percent, the slider's resting position.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Builds a percentage, rejecting anything outside `[0, 30]`.
    ///
    /// # Errors
    ///
    /// Returns [`TipPercentageError::OutOfRange`] when `value` is below
    /// [`TipPercentage::MIN`] or above [`TipPercentage::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tip_core::TipPercentage;
    ///
    /// assert!(TipPercentage::new(dec!(18)).is_ok());
    /// assert!(TipPercentage::new(dec!(31)).is_err());
    /// ```
    pub fn new(value: Decimal) -> Result<Self, TipPercentageError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(TipPercentageError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Builds a percentage, pinning out-of-range values to the nearest bound.
    pub fn clamped(value: Decimal) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Converts a raw slider position into a percentage.
    ///
    /// Slider positions are clamped to the range; only non-finite values are
    /// rejected.
    pub fn from_slider(position: f32) -> Result<Self, TipPercentageError> {
        let value =
            Decimal::try_from(position).map_err(|_| TipPercentageError::NotFinite(position))?;
        Ok(Self::clamped(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The percentage expressed as a multiplier (`15` becomes `0.15`).
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// The whole-number part of the percentage, as shown next to the slider.
    pub fn whole_percent(&self) -> u32 {
        // Bounded to [0, 30], so the conversion cannot fail.
        self.0.trunc().to_u32().unwrap_or_default()
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Decimal> for TipPercentage {
    type Error = TipPercentageError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TipPercentage> for Decimal {
    fn from(value: TipPercentage) -> Self {
        value.0
    }
}

impl fmt::Display for TipPercentage {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}%", self.whole_percent())
    }
}
