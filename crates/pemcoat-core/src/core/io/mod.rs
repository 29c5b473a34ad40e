//! Delimited-table persistence shared by both engines.

pub mod csv;

pub use csv::TableIoError;
