pub mod calculations;
pub mod models;

pub use calculations::{calculate, categorize, color_for, compute_tip, compute_total};
pub use models::*;
