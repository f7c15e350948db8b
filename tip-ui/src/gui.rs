use anyhow::Result;
use gpui::{
    AnyView, App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    components::{TipCalculatorView, WindowPreferences},
    quit,
    themes::apply_tipper_theme,
};

pub const APP_TITLE: &str = "Tip Calculator";

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);
    apply_tipper_theme(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: APP_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window, centered, wrapped in the gpui-component root
/// so inputs get focus handling and overlays.
pub fn open_main_window(
    app_cx: &mut App,
    preferences: WindowPreferences,
) -> Result<()> {
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(APP_TITLE.into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let view: AnyView = cx
            .new(|view_cx| TipCalculatorView::new(window, view_cx))
            .into();
        cx.new(|root_cx| Root::new(view, window, root_cx))
    })?;

    info!(?preferences, "Main window opened");
    Ok(())
}
