//! Tracing subscriber setup: console formatter and initialisation.

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Format one console line for an event.
fn format_line(level: tracing::Level, target: &str, msg: &str) -> String {
    match level {
        tracing::Level::ERROR => format!("\x1b[31mERROR\x1b[0m {msg}"),
        tracing::Level::WARN => format!("\x1b[33mWARN\x1b[0m  {msg}"),
        tracing::Level::INFO if target == "nuzzle_gen::stage" => {
            format!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m")
        }
        tracing::Level::INFO if target == "nuzzle_gen::dry_run" => {
            format!("  \x1b[33m[DRY RUN]\x1b[0m {msg}")
        }
        tracing::Level::INFO => format!("  {msg}"),
        _ => format!("  \x1b[2m{msg}\x1b[0m"),
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits the generator's
/// console style: `==>` stage headers, indented info lines, coloured
/// warning and error prefixes.
struct ConsoleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        writeln!(
            writer,
            "{}",
            format_line(*metadata.level(), metadata.target(), &extractor.message)
        )
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Warnings and errors go to stderr, everything else to stdout. Debug events
/// are shown only when `verbose` is set; `NUZZLE_GEN_LOG` (an
/// [`EnvFilter`](tracing_subscriber::EnvFilter) directive) overrides both.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("NUZZLE_GEN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter)
        .with_writer(make_writer)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
