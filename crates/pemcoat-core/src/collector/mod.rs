//! The Candidate Aggregation Pipeline.
//!
//! Drives one search per configured chemical system against an external
//! material-search service, classifies each returned compound by thermodynamic
//! stability, and exposes aggregate statistics over the collected candidates.
//! A single system's failure never aborts a run.

pub mod client;
pub mod pipeline;
pub mod progress;
pub mod search;
pub mod systems;

pub use client::{ApiKey, ConfigError, MpClient};
pub use pipeline::{
    CandidateCollector, CollectOptions, CollectionRun, CollectorStatistics, SystemFailure,
};
pub use progress::{Progress, ProgressCallback, ProgressReporter};
pub use search::{MaterialDoc, MaterialSearch, SearchError};
