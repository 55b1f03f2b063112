//! # imprint-bench
//!
//! Benchmark suite for the imprint collision deformers.
//!
//! Provides 3 procedural scenarios, metric collection,
//! and CSV export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
