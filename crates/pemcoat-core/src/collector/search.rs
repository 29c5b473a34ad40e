use thiserror::Error;

/// A single chemical-system search failure.
///
/// These are non-fatal by contract: the collection loop converts them into a
/// warning and continues with the remaining systems. No retry is performed.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response from search service: {0}")]
    Malformed(String),

    #[error("Search service error: {0}")]
    Service(String),
}

/// One material document returned by the search service.
///
/// Field names follow the service's summary schema; `elements` preserves the
/// order returned by the search.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDoc {
    pub material_id: String,
    pub formula_pretty: String,
    pub composition: String,
    pub formation_energy_per_atom: f64,
    pub energy_above_hull: f64,
    pub band_gap: f64,
    pub density: f64,
    pub crystal_system: String,
    pub space_group: String,
    pub volume: f64,
    pub elements: Vec<String>,
    pub nelements: usize,
}

/// The external material-search collaborator.
///
/// Implementations take a chemical-system string (e.g. "Ti-O") and a
/// field-selection list and return the matching material documents. The
/// pipeline is generic over this trait so tests can substitute a mock service.
pub trait MaterialSearch {
    fn search_chemical_system(
        &self,
        chemical_system: &str,
        fields: &[&str],
    ) -> Result<Vec<MaterialDoc>, SearchError>;
}
