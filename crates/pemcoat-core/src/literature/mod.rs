//! The Literature Database Engine.
//!
//! An append-only collection of [`PerformanceRecord`](crate::core::models::PerformanceRecord)
//! with conjunctive queries, benchmarking against fixed industry targets,
//! descriptive statistics, and research-gap analysis. All read operations are
//! pure functions of the current collection.

pub mod benchmark;
pub mod database;
pub mod gaps;
pub mod query;
pub mod seed;
pub mod stats;

pub use benchmark::BenchmarkRow;
pub use database::LiteratureDatabase;
pub use gaps::ResearchGaps;
pub use query::QueryFilters;
pub use stats::SummaryStatistics;
