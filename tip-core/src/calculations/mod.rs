//! Calculation logic for the tip calculator screen.
//!
//! Every function here is pure: the same input always produces the same
//! output and nothing is cached between calls.

pub mod common;
pub mod tip_calculator;

pub use tip_calculator::{calculate, categorize, color_for, compute_tip, compute_total};
