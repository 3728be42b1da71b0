// crates/logging/src/formatter.rs
use std::fmt;
use time::{OffsetDateTime, macros::format_description};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Plain text events: `LEVEL: message key=value ...`.
pub struct BenchFormatter {
    timestamps: bool,
}

impl BenchFormatter {
    pub fn new(timestamps: bool) -> Self {
        Self { timestamps }
    }
}

#[derive(Default)]
struct MsgVisitor {
    msg: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for MsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(value);
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            if !self.msg.is_empty() {
                self.msg.push(' ');
            }
            self.msg.push_str(&format!("{value:?}"));
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }
}

fn format_time() -> Option<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let fmt = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    now.format(&fmt).ok()
}

impl<S, N> FormatEvent<S, N> for BenchFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor::default();
        event.record(&mut visitor);
        if self.timestamps {
            if let Some(ts) = format_time() {
                write!(writer, "{ts} [{}] ", std::process::id())?;
            }
        }
        write!(writer, "{}: ", event.metadata().level())?;
        if visitor.msg.is_empty() {
            writer.write_str(event.metadata().target())?;
        } else {
            writer.write_str(&visitor.msg)?;
        }
        for (name, value) in &visitor.fields {
            write!(writer, " {name}={value}")?;
        }
        writer.write_char('\n')
    }
}
