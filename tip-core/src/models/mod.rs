mod tip_breakdown;
mod tip_category;
mod tip_input;
mod tip_percentage;

pub use tip_breakdown::TipBreakdown;
pub use tip_category::{CategoryColor, TipCategory};
pub use tip_input::TipInput;
pub use tip_percentage::{TipPercentage, TipPercentageError};
