use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coating material class assigned by the aggregation pipeline, derived from
/// the catalogue a chemical system was queried under (not from the source data).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MaterialClass {
    Oxide,
    Nitride,
    Carbide,
}

impl fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MaterialClass::Oxide => "oxide",
            MaterialClass::Nitride => "nitride",
            MaterialClass::Carbide => "carbide",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MaterialClass {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "oxide" => Ok(MaterialClass::Oxide),
            "nitride" => Ok(MaterialClass::Nitride),
            "carbide" => Ok(MaterialClass::Carbide),
            _ => Err(()),
        }
    }
}

/// Stability rule: a compound is considered thermodynamically stable when its
/// energy above the convex hull does not exceed the threshold (eV/atom).
///
/// The boundary is inclusive. This is a pure function so that a collection run
/// with a different threshold re-derives the flag instead of mutating records.
#[inline]
pub fn is_stable_at(energy_above_hull: f64, threshold: f64) -> bool {
    energy_above_hull <= threshold
}

/// One chemical compound returned by a stability/composition search, tagged
/// with the pipeline's classification.
///
/// All source fields are required (the search service reports them for every
/// document); `material_class`, `chemical_system`, and `is_stable` are stamped
/// by the pipeline at collection time. The full candidate list is replaced on
/// every collection run, so stamped flags can never go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub material_id: String,
    pub formula: String,
    pub composition: String,
    pub formation_energy_per_atom: f64,
    pub energy_above_hull: f64,
    pub band_gap: f64,
    pub density: f64,
    pub crystal_system: String,
    pub space_group: String,
    pub volume: f64,
    /// Element symbols joined with '-', preserving the order returned by the search.
    pub elements: String,
    pub nelements: usize,
    pub material_class: MaterialClass,
    pub chemical_system: String,
    pub is_stable: bool,
}
