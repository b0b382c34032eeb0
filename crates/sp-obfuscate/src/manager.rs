//! Filter ownership and hot-swap lifecycle.
//!
//! The manager owns the published filter and rebuilds it from every
//! configuration snapshot it is handed. Publication is a single
//! `ArcSwap::store` of a fully built filter: readers observe either the
//! previous complete filter or the next one, never an intermediate state.
//! The read path is lock-free; `update` is expected to be rare and may
//! race with itself (last store wins, each update builds independently).

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, warn};

use sp_config::ObfuscationConfig;

use crate::error::CompileError;
use crate::filter::{
    AttributeFilter, MonitoredFilter, PassthroughFilter, RuleBasedFilter, SharedFilter,
};
use crate::selfmon::{NoopSelfMonitor, SelfMonitor};

/// Lock-free cell holding the published filter.
type FilterCell = ArcSwap<SharedFilter>;

/// Owns the active attribute filter and republishes it on reconfiguration.
///
/// Construct one instance per process (or per test); the manager has no
/// implicit global state.
pub struct ObfuscationManager {
    active: Arc<FilterCell>,
    monitor: Arc<dyn SelfMonitor>,
}

impl ObfuscationManager {
    /// Create a manager publishing the passthrough filter, wired to the
    /// given monitoring collaborator.
    pub fn new(monitor: Arc<dyn SelfMonitor>) -> Self {
        let passthrough: SharedFilter = Arc::new(PassthroughFilter);
        Self {
            active: Arc::new(ArcSwap::from_pointee(passthrough)),
            monitor,
        }
    }

    /// Rebuild and republish the filter from a configuration snapshot.
    ///
    /// A compile failure publishes the passthrough filter (the whole rule
    /// set is discarded, not just the bad entry, and not replaced by the
    /// previous rules either) and returns the error. Obfuscation degrades
    /// to off rather than throwing back into the instrumented hot path.
    pub fn update(&self, config: &ObfuscationConfig) -> Result<(), CompileError> {
        match self.build(config) {
            Ok(filter) => {
                debug!(kind = %filter.kind(), "published obfuscation filter");
                self.active.store(Arc::new(filter));
                Ok(())
            }
            Err(err) => {
                warn!(
                    error = %err,
                    "obfuscation pattern failed to compile; disabling obfuscation"
                );
                let passthrough: SharedFilter = Arc::new(PassthroughFilter);
                self.active.store(Arc::new(passthrough));
                Err(err)
            }
        }
    }

    fn build(&self, config: &ObfuscationConfig) -> Result<SharedFilter, CompileError> {
        if !config.enabled {
            return Ok(Arc::new(PassthroughFilter));
        }

        let rule_based: SharedFilter = Arc::new(RuleBasedFilter::compile(&config.patterns)?);

        if self.monitor.is_enabled() {
            Ok(Arc::new(MonitoredFilter::new(
                rule_based,
                Arc::clone(&self.monitor),
            )))
        } else {
            Ok(rule_based)
        }
    }

    /// The currently published filter. Lock-free; callers must re-fetch
    /// per use rather than hold the handle across calls, so that
    /// reconfiguration is observed promptly.
    pub fn current(&self) -> SharedFilter {
        let guard = self.active.load();
        SharedFilter::clone(&guard)
    }

    /// A cloneable handle instrumentation call sites can keep.
    pub fn supplier(&self) -> FilterSupplier {
        FilterSupplier {
            active: Arc::clone(&self.active),
        }
    }
}

impl Default for ObfuscationManager {
    fn default() -> Self {
        Self::new(Arc::new(NoopSelfMonitor))
    }
}

/// Read-only view onto the published filter.
///
/// Cheap to clone and to call; each `get` observes the latest published
/// filter.
#[derive(Clone)]
pub struct FilterSupplier {
    active: Arc<FilterCell>,
}

impl FilterSupplier {
    /// The currently published filter.
    pub fn get(&self) -> SharedFilter {
        let guard = self.active.load();
        SharedFilter::clone(&guard)
    }
}
