use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing::{Event, Level, Subscriber, debug};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

const DEFAULT_DIRECTIVE: &str = "info";

// --- Formatter ---

/// Single-line event format: local timestamp, padded level, `file:line`,
/// then the event fields. ANSI colors only when the writer supports them.
struct LocalTimeFormat;

impl<S, N> FormatEvent<S, N> for LocalTimeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
        } else {
            write!(writer, "{timestamp} ")?;
        }

        let color = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        if ansi {
            write!(writer, "{color}{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .rsplit_once("src/")
                .or_else(|| file.rsplit_once("src\\"))
                .map_or(file, |(_, rest)| rest);
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Options ---

/// Where and how much to log, as chosen on the command line.
#[derive(Debug, Clone, Default)]
pub struct LoggingOptions {
    /// Filter directive such as `debug` or `tip_core=trace`.
    /// Takes precedence over `RUST_LOG`.
    pub level: Option<String>,
    /// Append records to this file in addition to stdout.
    pub file: Option<PathBuf>,
    /// Suppress stdout output. File logging is unaffected.
    pub quiet: bool,
}

const LEVEL_NAMES: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Picks the filter directive: explicit option, then `RUST_LOG`, then `info`.
///
/// Blank values are skipped. A bare level name is lowercased; anything else
/// is passed through untouched so targets and field filters keep their case.
fn resolve_directive(
    explicit: Option<&str>,
    env: Option<&str>,
) -> String {
    fn non_blank(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|d| !d.is_empty())
    }
    let directive = non_blank(explicit)
        .or_else(|| non_blank(env))
        .unwrap_or(DEFAULT_DIRECTIVE);

    match LEVEL_NAMES
        .iter()
        .find(|level| level.eq_ignore_ascii_case(directive))
    {
        Some(level) => (*level).to_string(),
        None => directive.to_string(),
    }
}

fn build_filter(options: &LoggingOptions) -> Result<EnvFilter> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_directive(options.level.as_deref(), env.as_deref());
    EnvFilter::try_new(&directive)
        .map_err(|e| anyhow::anyhow!("invalid log level '{directive}': {e}"))
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

// --- Public API ---

/// Initializes logging. Call once at startup.
///
/// - Stdout: colored when attached to a terminal, plain when piped,
///   absent when `quiet` is set.
/// - File: plain text, appended, only when a path is given.
/// - Level: `options.level`, else `RUST_LOG`, else INFO.
///
/// A second call is a no-op.
pub fn init_logging(options: &LoggingOptions) -> Result<()> {
    let filter = build_filter(options)?;

    let stdout_layer = (!options.quiet).then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalTimeFormat)
            .with_ansi(io::stdout().is_terminal())
    });

    let file_layer = match &options.file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .event_format(LocalTimeFormat)
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    if tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        debug!(?options, "logging initialized");
    }
    Ok(())
}
