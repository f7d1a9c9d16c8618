//! Console logging plus a ring buffer of recent events.
//!
//! Console output goes through `WASMLayer`. The capture layer keeps the last
//! [`MAX_ENTRIES`] plume events so they can be pasted into a bug report via
//! the exported `recentLogs()`.
//!
//! The console level is a per-layer filter, so a quiet console (`logLevel:
//! "warn"`) still leaves DEBUG entries in the buffer.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// Maximum number of log entries to keep.
pub const MAX_ENTRIES: usize = 100;

/// Targets captured in the ring buffer.
const CAPTURED_PREFIXES: &[&str] = &["plume_"];

/// Minimum level to buffer from our crates.
const BUFFER_MIN_LEVEL: Level = Level::DEBUG;

thread_local! {
    static LOG_BUFFER: RefCell<VecDeque<String>> = RefCell::new(VecDeque::with_capacity(MAX_ENTRIES));
}

/// Install the global subscriber.
///
/// `requested` is the configured level name; when absent or unparseable
/// the console gets DEBUG in debug builds and INFO in release.
pub fn init(requested: Option<&str>) {
    let parsed = console_level(requested);
    // Unfiltered here: WASMLayer's own max level would disable events for
    // every layer, the capture layer included.
    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(Level::TRACE)
            .build(),
    );

    let reg = with_console(wasm_layer, parsed.unwrap_or_else(default_level));
    if tracing::subscriber::set_global_default(reg).is_err() {
        tracing::debug!("Subscriber already installed");
        return;
    }

    if let Some(requested) = requested.filter(|_| parsed.is_none()) {
        tracing::warn!(requested, "Unknown log level, using the default");
    }
}

/// Stack `console` (limited to `level`) and the capture layer on a registry.
fn with_console<L>(console: L, level: Level) -> impl Subscriber + Send + Sync + 'static
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    Registry::default()
        .with(console.with_filter(LevelFilter::from_level(level)))
        .with(LogCaptureLayer)
}

fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Parse a configured level name, case-insensitively.
pub fn console_level(requested: Option<&str>) -> Option<Level> {
    requested?.trim().parse().ok()
}

/// Buffers plume events for [`recent_logs`].
pub struct LogCaptureLayer;

impl<S: Subscriber> Layer<S> for LogCaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = metadata.level();
        let target = metadata.target();

        let is_ours = CAPTURED_PREFIXES.iter().any(|prefix| target.starts_with(prefix));
        if !is_ours || *level > BUFFER_MIN_LEVEL {
            return;
        }

        let mut entry = EntryVisitor::default();
        event.record(&mut entry);
        let formatted = entry.finish(level, target);

        LOG_BUFFER.with(|buf| {
            let mut buf = buf.borrow_mut();
            if buf.len() >= MAX_ENTRIES {
                buf.pop_front();
            }
            buf.push_back(formatted);
        });
    }
}

/// Collects an event's message and its `key=value` fields separately.
#[derive(Default)]
struct EntryVisitor {
    message: String,
    fields: String,
}

impl EntryVisitor {
    /// `[LEVEL] target: message key=value ...`
    fn finish(self, level: &Level, target: &str) -> String {
        format!("[{}] {}: {}{}", level.as_str(), target, self.message, self.fields)
    }
}

impl Visit for EntryVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let _ = match field.name() {
            "message" => write!(self.message, "{:?}", value),
            name => write!(self.fields, " {}={:?}", name, value),
        };
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let _ = match field.name() {
            "message" => write!(self.message, "{}", value),
            name => write!(self.fields, " {}={}", name, value),
        };
    }
}

/// All captured entries, oldest first, one per line.
pub fn recent_logs() -> String {
    LOG_BUFFER.with(|buf| buf.borrow().iter().cloned().collect::<Vec<_>>().join("\n"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn captured(f: impl FnOnce()) -> String {
        LOG_BUFFER.with(|buf| buf.borrow_mut().clear());
        let subscriber = Registry::default().with(LogCaptureLayer);
        tracing::subscriber::with_default(subscriber, f);
        recent_logs()
    }

    /// Stands in for the console: counts what reaches it.
    #[derive(Clone, Default)]
    struct CountingLayer(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountingLayer {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_formats_message_and_fields() {
        let logs = captured(|| tracing::info!(filename = "a.rs", bytes = 3, "Saved file"));
        assert_eq!(
            logs,
            "[INFO] plume_app::telemetry::tests: Saved file filename=a.rs bytes=3"
        );
    }

    #[test]
    fn test_skips_trace_and_foreign_targets() {
        let logs = captured(|| {
            tracing::trace!("too chatty");
            tracing::debug!(target: "wasm_bindgen", "not ours");
            tracing::debug!("kept");
        });
        assert_eq!(logs, "[DEBUG] plume_app::telemetry::tests: kept");
    }

    #[test]
    fn test_keeps_only_latest_entries() {
        let logs = captured(|| {
            for i in 0..MAX_ENTRIES + 20 {
                tracing::warn!("entry {}", i);
            }
        });
        let lines: Vec<_> = logs.lines().collect();
        assert_eq!(lines.len(), MAX_ENTRIES);
        assert!(lines[0].ends_with("entry 20"));
        assert!(lines[MAX_ENTRIES - 1].ends_with(&format!("entry {}", MAX_ENTRIES + 19)));
    }

    #[test]
    fn test_quiet_console_still_buffers_debug() {
        LOG_BUFFER.with(|buf| buf.borrow_mut().clear());
        let console = CountingLayer::default();
        let subscriber = with_console(console.clone(), Level::WARN);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("Rebuilt editor widget");
            tracing::warn!("Dropped editor change");
        });

        assert_eq!(console.0.load(Ordering::SeqCst), 1);
        assert_eq!(
            recent_logs(),
            "[DEBUG] plume_app::telemetry::tests: Rebuilt editor widget\n\
             [WARN] plume_app::telemetry::tests: Dropped editor change"
        );
    }

    #[test]
    fn test_console_level_parsing() {
        assert_eq!(console_level(Some("warn")), Some(Level::WARN));
        assert_eq!(console_level(Some(" TRACE ")), Some(Level::TRACE));
        assert_eq!(console_level(Some("loud")), None);
        assert_eq!(console_level(None), None);
    }
}
