pub mod tip_calculator;

use gpui::{Pixels, Size, px};

pub use tip_calculator::TipCalculatorView;

/// Initial window size. The window is centered on the primary display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::new(px(480.0), px(560.0))
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}
