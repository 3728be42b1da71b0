// crates/logging/src/lib.rs
//! Diagnostic output for mmap-bench.
//!
//! Diagnostics always go to stderr (or a caller supplied writer); stdout is
//! left to the benchmark report.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Layer, fmt as tracing_fmt, layer::SubscriberExt};

mod flags;
mod formatter;
mod json_format;
mod util;

pub use flags::{DebugFlag, LogFormat, SubscriberConfig, SubscriberConfigBuilder};
pub use formatter::BenchFormatter;
pub use json_format::JsonFormatter;
pub use util::{human_bytes, rate_formatter};

fn level_for(verbose: u8, quiet: bool, debug: &[DebugFlag]) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if !debug.is_empty() && level < LevelFilter::DEBUG {
        LevelFilter::DEBUG
    } else {
        level
    }
}

fn filter_for(cfg: &SubscriberConfig) -> EnvFilter {
    let level = level_for(cfg.verbose, cfg.quiet, &cfg.debug);
    // Built from the config alone; the environment is never consulted.
    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy("");
    if !cfg.quiet {
        for flag in &cfg.debug {
            if let Ok(directive) = format!("{}=trace", flag.target()).parse() {
                filter = filter.add_directive(directive);
            }
        }
    }
    filter
}

/// Builds a subscriber that writes to `writer`.
pub fn subscriber_with_writer<W>(
    cfg: SubscriberConfig,
    writer: W,
) -> Box<dyn tracing::Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = filter_for(&cfg);
    let base = tracing_fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_level(false);
    let fmt_layer = match cfg.format {
        LogFormat::Json => base
            .event_format(JsonFormatter::new(cfg.timestamps))
            .boxed(),
        LogFormat::Text => base
            .event_format(BenchFormatter::new(cfg.timestamps))
            .boxed(),
    };
    Box::new(tracing_subscriber::registry().with(filter).with(fmt_layer))
}

/// Builds a subscriber that writes to stderr.
pub fn subscriber(cfg: SubscriberConfig) -> Box<dyn tracing::Subscriber + Send + Sync> {
    subscriber_with_writer(cfg, std::io::stderr)
}
