//! Receiver-consistency engine for Go.
//!
//! Walks the declarations of one compilation unit and reports every type
//! that is used through both pointer and value receivers:
//! - classifier: `*T` / `T` / unrecognized receiver shapes
//! - selector: which methods take part, by name
//! - constructor: optional folding of `NewT`-style constructor results
//! - walker + registry: per-unit usage record, in observation order
//! - aggregator: violations for types with mixed usage

pub mod types;
pub mod classifier;
pub mod selector;
pub mod constructor;
pub mod registry;
pub mod walker;
pub mod aggregator;
pub mod engine;

pub use engine::CheckEngine;
pub use types::{CheckResult, ConfigError, Finding, Violation};
