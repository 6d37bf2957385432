//! Log callback system.
//!
//! The crate never prints. Integrations that want to see re-scan decisions or
//! styling fallbacks install a callback once at startup.

use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
    }
}

/// Returns true if a log callback is installed.
#[must_use]
pub fn has_log_callback() -> bool {
    log_callback().lock().is_ok_and(|guard| guard.is_some())
}

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Emit a lazily formatted log message; `message` only runs when a callback
/// is installed.
pub(crate) fn emit_log_with(level: LogLevel, message: impl FnOnce() -> String) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, &message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_log_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = Arc::clone(&hits);
        set_log_callback(move |_level, msg| {
            if msg == "event-test-marker" {
                hits_clone.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert!(has_log_callback());
        emit_log(LogLevel::Info, "event-test-marker");
        emit_log_with(LogLevel::Debug, || "event-test-marker".to_string());
        assert!(hits.load(Ordering::SeqCst) >= 2);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
