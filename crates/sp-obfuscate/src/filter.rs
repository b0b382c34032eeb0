//! Attribute filter variants.
//!
//! [`AttributeFilter`] is the capability every instrumented call site
//! goes through. Three implementations exist: passthrough (identity),
//! rule-based (the actual engine), and a monitoring decorator that wraps
//! either of the others. All of them are immutable after construction and
//! total for well-formed string inputs.

use std::fmt;
use std::sync::Arc;

use sp_config::PatternSpec;

use crate::error::Result;
use crate::rule::ObfuscationRule;
use crate::selfmon::SelfMonitor;
use crate::sink::AttributeSink;

/// Shared, immutable filter handle.
pub type SharedFilter = Arc<dyn AttributeFilter>;

/// Which filter variant is behind an [`AttributeFilter`] handle.
///
/// Doubles as the self-monitoring label for the monitored variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Passthrough,
    RuleBased,
    Monitored,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Passthrough => "passthrough",
            FilterKind::RuleBased => "rule_based",
            FilterKind::Monitored => "monitored",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability applied to every span attribute before it is recorded.
pub trait AttributeFilter: Send + Sync {
    /// Write one attribute into `target`, masking the value if a rule fires.
    ///
    /// The key is always written unchanged; only the value is masked.
    fn put_attribute(&self, target: &mut dyn AttributeSink, key: &str, value: &str);

    /// The variant behind this filter.
    fn kind(&self) -> FilterKind;
}

/// Identity filter. Used when obfuscation is disabled and as the
/// fail-safe fallback when rule compilation fails.
#[derive(Debug, Default)]
pub struct PassthroughFilter;

impl AttributeFilter for PassthroughFilter {
    fn put_attribute(&self, target: &mut dyn AttributeSink, key: &str, value: &str) {
        target.put_attribute(key, value);
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Passthrough
    }
}

/// Filter evaluating an ordered set of compiled rules.
#[derive(Debug)]
pub struct RuleBasedFilter {
    rules: Vec<ObfuscationRule>,
}

impl RuleBasedFilter {
    /// Compile every pattern spec, in order.
    ///
    /// Fails as a whole on the first malformed spec; partial rule sets
    /// are never activated.
    pub fn compile(patterns: &[PatternSpec]) -> Result<Self> {
        let rules = patterns
            .iter()
            .map(ObfuscationRule::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl AttributeFilter for RuleBasedFilter {
    fn put_attribute(&self, target: &mut dyn AttributeSink, key: &str, value: &str) {
        // The first triggering rule decides the mask; no trigger means
        // the value passes through unchanged.
        match self.rules.iter().find(|rule| rule.matches(key, value)) {
            Some(rule) => target.put_attribute(key, &rule.apply(value)),
            None => target.put_attribute(key, value),
        }
    }

    fn kind(&self) -> FilterKind {
        FilterKind::RuleBased
    }
}

/// Decorator adding a duration measurement around another filter.
///
/// Never changes the obfuscation outcome. Whether a scope is opened is
/// queried per call, so toggling self-monitoring takes effect without a
/// filter rebuild.
pub struct MonitoredFilter {
    inner: SharedFilter,
    inner_kind: FilterKind,
    monitor: Arc<dyn SelfMonitor>,
}

impl MonitoredFilter {
    pub fn new(inner: SharedFilter, monitor: Arc<dyn SelfMonitor>) -> Self {
        let inner_kind = inner.kind();
        Self {
            inner,
            inner_kind,
            monitor,
        }
    }
}

impl AttributeFilter for MonitoredFilter {
    fn put_attribute(&self, target: &mut dyn AttributeSink, key: &str, value: &str) {
        if self.monitor.is_enabled() {
            let _scope = self.monitor.duration_scope(self.inner_kind.as_str());
            self.inner.put_attribute(target, key, value);
        } else {
            self.inner.put_attribute(target, key, value);
        }
    }

    fn kind(&self) -> FilterKind {
        FilterKind::Monitored
    }
}
