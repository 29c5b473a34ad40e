//! # PEMCoat Core Library
//!
//! A library for curating and screening anti-corrosion coating materials for
//! bipolar plates in PEM water electrolyzers.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`PerformanceRecord`,
//!   `CandidateRecord`), the schema-validation step for untyped input, and the
//!   delimited-table persistence utilities.
//!
//! - **[`literature`]: The Literature Database Engine.** An append-only store of
//!   experimentally measured coating performance from published papers, with
//!   conjunctive queries, benchmarking against industry targets, descriptive
//!   statistics, and research-gap analysis.
//!
//! - **[`collector`]: The Candidate Aggregation Pipeline.** Drives sequential
//!   searches against an external material-search service across fixed catalogues
//!   of chemical systems, classifies the results by thermodynamic stability, and
//!   exposes aggregate statistics.

pub mod collector;
pub mod core;
pub mod literature;
