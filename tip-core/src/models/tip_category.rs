use std::fmt;

use serde::Serialize;

/// Qualitative label describing how generous a tip percentage is.
///
/// Variants are declared in rank order, so the derived `Ord` compares
/// generosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TipCategory {
    Poor,
    Acceptable,
    Good,
    Amazing,
}

impl TipCategory {
    pub const ALL: [TipCategory; 4] = [
        TipCategory::Poor,
        TipCategory::Acceptable,
        TipCategory::Good,
        TipCategory::Amazing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Acceptable => "Acceptable",
            Self::Good => "Good",
            Self::Amazing => "Amazing",
        }
    }
}

impl fmt::Display for TipCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color attached to a [`TipCategory`], stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryColor {
    pub name: &'static str,
    pub rgb: u32,
}

impl CategoryColor {
    pub const RED: Self = Self::new("red", 0xDC1E0B);
    pub const AMBER: Self = Self::new("amber", 0xDCA10B);
    pub const YELLOW_GREEN: Self = Self::new("yellow-green", 0xABF346);
    pub const GREEN: Self = Self::new("green", 0x35BA01);

    const fn new(
        name: &'static str,
        rgb: u32,
    ) -> Self {
        Self { name, rgb }
    }

    /// Formats the color as a CSS-style hex string, e.g. `#DC1E0B`.
    pub fn hex(&self) -> String {
        format!("#{:06X}", self.rgb)
    }
}

impl fmt::Display for CategoryColor {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.hex())
    }
}
