//! Foundational layer: record models, schema validation, and table I/O.

pub mod io;
pub mod models;
