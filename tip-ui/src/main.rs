use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error, info};

use tip_core::calculate;
use tip_ui::{cli::Cli, logging, open_main_window, setup_app};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.logging_options())?;

    if let Some(input) = cli.headless_input() {
        debug!(?input, "running headless");
        let breakdown = calculate(&input);
        println!("{}", cli.render_report(&breakdown)?);
        return Ok(());
    }

    let preferences = cli.window_preferences();
    info!("Starting tip calculator window");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(error) = open_main_window(cx, preferences) {
                error!(?error, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
