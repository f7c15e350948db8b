use gpui::{
    App, AppContext, Context, Div, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Subscription, TextAlign, Window, div, px, rgb,
};
use gpui_component::{
    h_flex,
    input::{Input, InputEvent, InputState, MaskPattern},
    slider::{Slider, SliderEvent, SliderState},
    v_flex,
};
use tip_core::calculations::common::format_amount;
use tracing::{debug, info};

#[cfg(not(target_os = "linux"))]
use crate::{Quit, quit};
use crate::{models::TipFormModel, utils::category_rgb};

const PROFILE_URL: &str = "https://www.linkedin.com/in/chinmaymangela/";
const PROFILE_LABEL: &str = "MADE WITH \u{2764}\u{FE0F} BY CHINMAY";

/// The calculator screen: bill input, tip slider, category and read-outs.
pub struct TipCalculatorView {
    form: TipFormModel,
    bill: Entity<InputState>,
    slider: Entity<SliderState>,
    _subscriptions: Vec<Subscription>,
}

impl TipCalculatorView {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let bill = cx.new(|input_cx| {
            InputState::new(window, input_cx)
                .mask_pattern(MaskPattern::Number {
                    separator: Some(','),
                    fraction: Some(2),
                })
                .placeholder("Bill Amount")
        });

        let slider = cx.new(|_| {
            SliderState::new()
                .min(0.)
                .max(30.)
                .step(0.1)
                .default_value(0.)
        });

        let subscriptions = vec![
            cx.subscribe(&bill, |this, state, _: &InputEvent, cx| {
                let text = state.read(cx).value().to_string();
                this.form.set_bill_text(text);
                cx.notify();
            }),
            cx.subscribe(&slider, |this, state, _: &SliderEvent, cx| {
                let position = state.read(cx).value().start();
                this.form.set_slider_position(position);
                cx.notify();
            }),
            cx.on_window_closed(|_cx: &mut App| {
                info!("Window closed callback");
                #[cfg(not(target_os = "linux"))]
                quit(&Quit, _cx);
            }),
        ];

        info!("Tip calculator constructed");
        Self {
            form: TipFormModel::default(),
            bill,
            slider,
            _subscriptions: subscriptions,
        }
    }
}

impl Render for TipCalculatorView {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let breakdown = self.form.breakdown();
        debug!(tip = %breakdown.tip, total = %breakdown.total, "render");

        v_flex()
            .size_full()
            .justify_between()
            .pt_8()
            .pb(px(70.))
            .px_10()
            .child(
                v_flex()
                    .gap_8()
                    .child(make_labeled_row("Base").child(Input::new(&self.bill).flex_grow()))
                    .child(
                        make_labeled_row(breakdown.percentage.to_string()).child(
                            v_flex()
                                .flex_grow()
                                .gap_2()
                                .child(Slider::new(&self.slider))
                                .child(
                                    div()
                                        .text_color(category_rgb(breakdown.color))
                                        .child(breakdown.category.to_string()),
                                ),
                        ),
                    )
                    .child(make_readout_row("Tip", format_amount(breakdown.tip)))
                    .child(make_readout_row("Total", format_amount(breakdown.total))),
            )
            .child(make_profile_link())
    }
}

/// Right-aligned caption followed by whatever the caller adds.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex().items_center().gap_5().child(
        div()
            .min_w(px(60.))
            .text_align(TextAlign::Right)
            .child(label.into()),
    )
}

fn make_readout_row(
    label: impl Into<SharedString>,
    value: String,
) -> Div {
    make_labeled_row(label).child(div().child(value))
}

fn make_profile_link() -> impl IntoElement {
    h_flex().w_full().justify_center().child(
        div()
            .id("profile-link")
            .cursor_pointer()
            .text_color(rgb(0x808080))
            .child(PROFILE_LABEL)
            .on_click(|_, _, cx: &mut App| {
                info!(url = PROFILE_URL, "Opening profile link");
                cx.open_url(PROFILE_URL);
            }),
    )
}
