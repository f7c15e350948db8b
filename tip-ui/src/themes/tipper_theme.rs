use gpui::{App, Hsla, rgb};
use gpui_component::Theme;
use tracing::debug;

const ACCENT: u32 = 0x00FFFF;
const INACTIVE_TRACK: u32 = 0x808080;

fn hsla(hex: u32) -> Hsla {
    rgb(hex).into()
}

/// Applies the calculator's cyan accent to the gpui-component global theme.
///
/// Only the colors the calculator's widgets draw with are touched: the input
/// underline and caret, the focus ring, the slider, and links.
pub fn apply_tipper_theme(cx: &mut App) {
    let colors = &mut Theme::global_mut(cx).colors;

    colors.primary = hsla(ACCENT);
    colors.caret = hsla(ACCENT);
    colors.ring = hsla(ACCENT);
    colors.input = hsla(ACCENT);

    colors.slider_bar = hsla(ACCENT);
    colors.slider_thumb = hsla(ACCENT);
    colors.muted = hsla(INACTIVE_TRACK);

    colors.link = hsla(INACTIVE_TRACK);

    debug!("Tipper theme applied");
}
