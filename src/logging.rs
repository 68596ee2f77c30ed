//! Console Logger
//!
//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Short prefix for a record target: `portfolio_ui::pages::projects` -> `projects`.
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}", short_target(record.target()).to_uppercase(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_target() {
        assert_eq!(short_target("portfolio_ui::pages::projects"), "projects");
        assert_eq!(short_target("app"), "app");
    }

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .target("portfolio_ui::fetch")
                .args(format_args!("loaded {} rows", 3))
                .build(),
        );
        assert_eq!(line, "[FETCH] loaded 3 rows");
    }
}
