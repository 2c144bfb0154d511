use crate::stdout;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::env;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static LOGGER: PedanticLogger = PedanticLogger;

/// Environment variable that overrides the log level, e.g `TAGINFO_LOG=debug`.
pub const LOG_ENV: &str = "TAGINFO_LOG";

/// A custom logger that just works.
///
/// Stdout belongs to the report, so every record goes to stderr. Warnings and errors
/// are colored, everything else is dimmed.
pub struct PedanticLogger;

impl PedanticLogger {
    pub fn setup() {
        let level = level_from(env::var(LOG_ENV).ok().as_deref());

        // Only fails if a logger is already set, which is fine.
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

/// Parses a level name, falling back to `Warn` so that the report stays clean.
fn level_from(var: Option<&str>) -> LevelFilter {
    var.and_then(|var| var.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

impl Log for PedanticLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        let md = record.metadata();

        if !self.enabled(md) {
            return;
        }

        let module = record.module_path().unwrap_or_default();
        let mut spec = ColorSpec::new();

        match md.level() {
            Level::Error => spec.set_fg(Some(Color::Red)),
            Level::Warn => spec.set_fg(Some(Color::Red)).set_intense(true),
            _ => spec.set_dimmed(true),
        };

        let color = stdout::resolve_color(ColorChoice::Auto, io::stderr().is_terminal());
        let mut stderr = StandardStream::stderr(color);

        // A logger has no one to report its own failures to.
        stderr.set_color(&spec).ok();
        writeln![stderr, "{}: {}", module, record.args()].ok();
        stderr.reset().ok();
    }

    fn flush(&self) {}
}
