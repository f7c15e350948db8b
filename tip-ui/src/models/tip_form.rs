use tip_core::{TipBreakdown, TipInput, TipPercentage, calculate};
use tracing::warn;

/// Local state of the calculator screen.
///
/// Owned by the view; every setter recomputes the breakdown so the read-outs
/// can never lag behind the inputs.
#[derive(Clone, Debug)]
pub struct TipFormModel {
    input: TipInput,
    breakdown: TipBreakdown,
}

impl Default for TipFormModel {
    fn default() -> Self {
        Self::new(TipInput::default())
    }
}

impl TipFormModel {
    pub fn new(input: TipInput) -> Self {
        let breakdown = calculate(&input);
        Self { input, breakdown }
    }

    pub fn input(&self) -> &TipInput {
        &self.input
    }

    pub fn breakdown(&self) -> &TipBreakdown {
        &self.breakdown
    }

    /// Replaces the bill text and recomputes.
    pub fn set_bill_text(
        &mut self,
        text: impl Into<String>,
    ) -> &TipBreakdown {
        self.input.bill_text = text.into();
        self.recalculate()
    }

    /// Moves the slider and recomputes.
    ///
    /// A non-finite position leaves the current percentage untouched.
    pub fn set_slider_position(
        &mut self,
        position: f32,
    ) -> &TipBreakdown {
        match TipPercentage::from_slider(position) {
            Ok(percentage) => self.input.percentage = percentage,
            Err(error) => warn!(%error, "ignoring slider position"),
        }
        self.recalculate()
    }

    fn recalculate(&mut self) -> &TipBreakdown {
        self.breakdown = calculate(&self.input);
        &self.breakdown
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tip_core::TipCategory;

    use super::*;

    #[test]
    fn default_form_shows_zeroes() {
        let form = TipFormModel::default();

        assert_eq!(form.breakdown().tip, Decimal::ZERO);
        assert_eq!(form.breakdown().total, Decimal::ZERO);
        assert_eq!(form.breakdown().category, TipCategory::Poor);
    }

    #[test]
    fn typing_a_bill_recomputes() {
        let mut form = TipFormModel::default();
        form.set_slider_position(15.0);

        let breakdown = form.set_bill_text("80");

        assert_eq!(breakdown.tip, dec!(12.00));
        assert_eq!(breakdown.total, dec!(92.00));
    }

    #[test]
    fn moving_the_slider_recomputes() {
        let mut form = TipFormModel::default();
        form.set_bill_text("200");

        let breakdown = form.set_slider_position(25.0).clone();

        assert_eq!(breakdown.tip, dec!(50.00));
        assert_eq!(breakdown.category, TipCategory::Amazing);
        assert_eq!(form.breakdown(), &breakdown);
    }

    #[test]
    fn clearing_the_bill_zeroes_totals() {
        let mut form = TipFormModel::default();
        form.set_bill_text("50");
        form.set_slider_position(20.0);

        let breakdown = form.set_bill_text("");

        assert_eq!(breakdown.tip, Decimal::ZERO);
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn nan_slider_keeps_previous_percentage() {
        let mut form = TipFormModel::default();
        form.set_slider_position(12.0);

        form.set_slider_position(f32::NAN);

        assert_eq!(form.input().percentage.value(), dec!(12));
    }
}
