//! Self-monitoring seam for measuring the filter's own cost.
//!
//! The engine never decides when measurements are recorded; it only opens
//! a scope per monitored call and guarantees the scope is released on
//! every exit path. What a scope records is up to the [`SelfMonitor`]
//! implementation behind it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tracing::trace;

/// Monitoring collaborator consumed by the monitored filter.
///
/// `is_enabled` is queried per call: self-monitoring toggles
/// independently of the obfuscation configuration.
pub trait SelfMonitor: Send + Sync {
    /// Whether duration measurements should currently be recorded.
    fn is_enabled(&self) -> bool;

    /// Open a duration measurement. Dropping the returned guard ends it.
    fn duration_scope(&self, label: &'static str) -> DurationScope;
}

type OnClose = Box<dyn FnOnce(&'static str, Duration) + Send>;

/// RAII guard for one duration measurement.
///
/// The measurement ends when the guard is dropped, which happens on every
/// exit path of the monitored call, panic unwind included.
pub struct DurationScope {
    label: &'static str,
    started: Instant,
    on_close: Option<OnClose>,
}

impl DurationScope {
    /// Scope that records nothing on drop.
    pub fn inert(label: &'static str) -> Self {
        Self {
            label,
            started: Instant::now(),
            on_close: None,
        }
    }

    /// Scope that invokes `on_close` with the elapsed time on drop.
    pub fn recording(label: &'static str, on_close: OnClose) -> Self {
        Self {
            label,
            started: Instant::now(),
            on_close: Some(on_close),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Drop for DurationScope {
    fn drop(&mut self) {
        if let Some(on_close) = self.on_close.take() {
            on_close(self.label, self.started.elapsed());
        }
    }
}

/// Monitor that is permanently disabled.
#[derive(Debug, Default)]
pub struct NoopSelfMonitor;

impl SelfMonitor for NoopSelfMonitor {
    fn is_enabled(&self) -> bool {
        false
    }

    fn duration_scope(&self, label: &'static str) -> DurationScope {
        DurationScope::inert(label)
    }
}

/// Monitor that emits duration measurements as `tracing` events.
///
/// Toggleable at runtime; disabled scopes are inert.
#[derive(Debug)]
pub struct LogSelfMonitor {
    enabled: AtomicBool,
}

impl LogSelfMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    /// Toggle measurement recording.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }
}

impl SelfMonitor for LogSelfMonitor {
    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn duration_scope(&self, label: &'static str) -> DurationScope {
        DurationScope::recording(
            label,
            Box::new(|label, elapsed| {
                trace!(
                    target: "sp_obfuscate::selfmon",
                    label,
                    elapsed_us = elapsed.as_micros() as u64,
                    "attribute filter timing"
                );
            }),
        )
    }
}
