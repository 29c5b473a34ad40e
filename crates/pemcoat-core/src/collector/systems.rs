//! Fixed catalogues of chemical systems searched by the pipeline.

/// Conductive oxide systems, including ITO variants.
pub const CONDUCTIVE_OXIDES: [&str; 10] = [
    "Sn-O", "In-O", "Ir-O", "Ti-O", "Ru-O", "Nb-O", "Ta-O", "In-Sn-O", "Zr-O", "Hf-O",
];

/// Transition-metal nitride systems.
pub const NITRIDES: [&str; 11] = [
    "Ti-N", "Cr-N", "Zr-N", "Ta-N", "V-N", "Nb-N", "W-N", "Mo-N", "Al-N", "Hf-N", "Si-N",
];

/// Carbide systems.
pub const CARBIDES: [&str; 11] = [
    "Ti-C", "W-C", "Ta-C", "Cr-C", "Zr-C", "Nb-C", "V-C", "Mo-C", "Si-C", "Hf-C", "B-C",
];

/// Field-selection list sent with every summary search.
pub const SUMMARY_FIELDS: [&str; 11] = [
    "material_id",
    "formula_pretty",
    "composition",
    "formation_energy_per_atom",
    "energy_above_hull",
    "band_gap",
    "density",
    "symmetry",
    "volume",
    "elements",
    "nelements",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogues_contain_only_their_own_anion() {
        assert!(CONDUCTIVE_OXIDES.iter().all(|s| s.ends_with("-O")));
        assert!(NITRIDES.iter().all(|s| s.ends_with("-N")));
        assert!(CARBIDES.iter().all(|s| s.ends_with("-C")));
    }

    #[test]
    fn catalogues_have_no_duplicates() {
        for catalogue in [&CONDUCTIVE_OXIDES[..], &NITRIDES[..], &CARBIDES[..]] {
            let mut sorted = catalogue.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), catalogue.len());
        }
    }
}
