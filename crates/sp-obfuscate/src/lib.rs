//! Span attribute obfuscation engine with hot-swappable filters.
//!
//! Every attribute attached to every span passes through an
//! [`AttributeFilter`] before it reaches the span object. The filter is
//! rebuilt from declarative regex configuration and atomically republished
//! on reconfiguration, without interrupting in-flight instrumentation.
//!
//! # Key Properties
//!
//! - **Fail-safe degradation**: a rule set that fails to compile publishes
//!   the passthrough filter instead of a partial one. The hot path never
//!   throws back into instrumented application code.
//! - **Lock-free reads**: the published filter lives in an atomic cell;
//!   readers re-fetch it per use and never block writers.
//! - **Optional self-monitoring**: a decorator measures the filter's own
//!   cost, toggleable independently of the obfuscation configuration.
//!
//! # Example
//!
//! ```no_run
//! use sp_config::{ObfuscationConfig, PatternSpec};
//! use sp_obfuscate::{BufferSink, ObfuscationManager};
//!
//! let manager = ObfuscationManager::default();
//! manager.update(&ObfuscationConfig::new(vec![
//!     PatternSpec::new("password").check_key(true),
//! ])).unwrap();
//!
//! let supplier = manager.supplier();
//! let mut span = BufferSink::new();
//! supplier.get().put_attribute(&mut span, "db_password", "hunter2");
//! assert_eq!(span.get("db_password"), Some("***"));
//! ```

pub mod error;
pub mod filter;
pub mod manager;
pub mod rule;
pub mod selfmon;
pub mod sink;

pub use error::{CompileError, Result};
pub use filter::{
    AttributeFilter, FilterKind, MonitoredFilter, PassthroughFilter, RuleBasedFilter, SharedFilter,
};
pub use manager::{FilterSupplier, ObfuscationManager};
pub use rule::{ObfuscationRule, MASK_TOKEN};
pub use selfmon::{DurationScope, LogSelfMonitor, NoopSelfMonitor, SelfMonitor};
pub use sink::{AttributeSink, BufferSink};
