use crate::TipPercentage;

/// Snapshot of the two user-controlled values on the calculator screen.
///
/// The bill stays as raw text; parsing (and the zero default for bad input)
/// happens inside the calculation so the UI never holds a stale number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipInput {
    pub bill_text: String,
    pub percentage: TipPercentage,
}

impl TipInput {
    pub fn new(
        bill_text: impl Into<String>,
        percentage: TipPercentage,
    ) -> Self {
        Self {
            bill_text: bill_text.into(),
            percentage,
        }
    }

    /// `true` when the bill field holds nothing but whitespace.
    pub fn is_bill_blank(&self) -> bool {
        self.bill_text.trim().is_empty()
    }
}
