use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gpui::px;
use tip_core::{TipBreakdown, TipInput, TipPercentage};

use crate::{components::WindowPreferences, logging::LoggingOptions, utils::parse_percent_arg};

/// Tip calculator.
///
/// With no amount arguments a window opens. Passing `--bill` or `--percent`
/// prints a single breakdown to stdout instead.
#[derive(Debug, Parser)]
#[command(name = "TipCalculator", version)]
pub struct Cli {
    /// Bill amount, e.g. `48.20` or `1,250`. Unparsable text counts as 0.
    #[arg(long)]
    pub bill: Option<String>,

    /// Tip percentage between 0 and 30, e.g. `18` or `17.5%`.
    #[arg(long, value_parser = parse_percent_arg)]
    pub percent: Option<TipPercentage>,

    /// Print the breakdown as JSON instead of a text report.
    #[arg(long)]
    pub json: bool,

    /// Log filter directive; overrides RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not log to stdout.
    #[arg(long, short)]
    pub quiet: bool,

    /// Initial window width in pixels.
    #[arg(long, default_value_t = 480.0)]
    pub width: f32,

    /// Initial window height in pixels.
    #[arg(long, default_value_t = 560.0)]
    pub height: f32,
}

impl Cli {
    /// The one-shot input when running without a window, if requested.
    pub fn headless_input(&self) -> Option<TipInput> {
        if self.bill.is_none() && self.percent.is_none() {
            return None;
        }
        Some(TipInput::new(
            self.bill.clone().unwrap_or_default(),
            self.percent.unwrap_or_default(),
        ))
    }

    /// Formats a headless result in the requested output style.
    pub fn render_report(
        &self,
        breakdown: &TipBreakdown,
    ) -> Result<String> {
        if self.json {
            serde_json::to_string_pretty(breakdown).context("failed to serialize tip breakdown")
        } else {
            Ok(breakdown.to_string())
        }
    }

    pub fn logging_options(&self) -> LoggingOptions {
        LoggingOptions {
            level: self.log_level.clone(),
            file: self.log_file.clone(),
            quiet: self.quiet,
        }
    }

    pub fn window_preferences(&self) -> WindowPreferences {
        WindowPreferences::new(px(self.width), px(self.height))
    }
}
