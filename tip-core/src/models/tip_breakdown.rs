use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{CategoryColor, TipCategory, TipPercentage};

/// Everything the calculator screen shows for one [`TipInput`](crate::TipInput).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipBreakdown {
    /// Parsed bill amount; zero when the text was blank or unparsable.
    pub bill: Decimal,
    pub percentage: TipPercentage,
    /// Tip rounded to two decimal places.
    pub tip: Decimal,
    /// Bill plus tip, rounded to two decimal places.
    pub total: Decimal,
    pub category: TipCategory,
    pub color: CategoryColor,
}

impl fmt::Display for TipBreakdown {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Bill:     {:.2}", self.bill)?;
        writeln!(f, "Tip rate: {}", self.percentage)?;
        writeln!(f, "Category: {} [{}]", self.category, self.color.hex())?;
        writeln!(f, "Tip:      {:.2}", self.tip)?;
        write!(f, "Total:    {:.2}", self.total)
    }
}
