//! The two entity shapes shared by both engines.
//!
//! [`performance::PerformanceRecord`] is one published experimental measurement of
//! a coating's performance; [`candidate::CandidateRecord`] is one compound returned
//! by a stability/composition search, tagged by the aggregation pipeline.

pub mod candidate;
pub mod performance;

pub use candidate::{CandidateRecord, MaterialClass, is_stable_at};
pub use performance::{DataQuality, PerformanceDraft, PerformanceRecord, ValidationError};
