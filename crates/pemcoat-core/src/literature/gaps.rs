use crate::core::models::PerformanceRecord;

/// Validation bar for long-term durability data, in hours.
pub const LONG_TERM_TARGET_HOURS: f64 = 10_000.0;

/// Promising material classes checked against the collection.
pub const PROMISING_CLASSES: [&str; 8] = [
    "WC (tungsten carbide)",
    "TaC (tantalum carbide)",
    "Nb2O5",
    "IrO2",
    "RuO2",
    "Multilayer oxide/nitride",
    "Graphene-enhanced coatings",
    "MAX phase materials",
];

/// Fixed guidance attached to every gap report.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Expand literature search to find more long-duration test data (>10,000 hours)",
    "Collect ion leaching data (critical for membrane degradation prediction)",
    "Focus on cost-effective earth-abundant materials",
    "Find failure mode analysis and post-mortem characterization data",
];

/// Missing-data report over the literature collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchGaps {
    /// Records whose reported test duration falls short of the long-term bar.
    pub missing_long_term_data: usize,
    pub missing_cost_data: usize,
    pub missing_ion_leaching_data: usize,
    pub missing_degradation_rates: usize,
    pub untested_material_classes: Vec<String>,
    pub limited_long_term_validation: String,
    pub recommendations: Vec<&'static str>,
}

pub(crate) fn compute(entries: &[PerformanceRecord]) -> ResearchGaps {
    let below_target = entries
        .iter()
        .filter(|e| {
            e.test_duration_hours
                .is_some_and(|v| v < LONG_TERM_TARGET_HOURS)
        })
        .count();
    let at_or_above_target = entries
        .iter()
        .filter(|e| {
            e.test_duration_hours
                .is_some_and(|v| v >= LONG_TERM_TARGET_HOURS)
        })
        .count();

    ResearchGaps {
        missing_long_term_data: below_target,
        missing_cost_data: entries
            .iter()
            .filter(|e| e.cost_estimate_dollar_m2.is_none())
            .count(),
        missing_ion_leaching_data: entries
            .iter()
            .filter(|e| e.fe_release_ug_cm2_day.is_none())
            .count(),
        missing_degradation_rates: entries
            .iter()
            .filter(|e| e.voltage_increase_uv_hr.is_none())
            .count(),
        untested_material_classes: untested_classes(entries),
        limited_long_term_validation: format!(
            "{} out of {} entries have ≥10,000 hours",
            at_or_above_target,
            entries.len()
        ),
        recommendations: RECOMMENDATIONS.to_vec(),
    }
}

/// A promising class counts as tested when its name appears as a
/// case-insensitive substring of any material already in the collection.
///
/// This is a deliberate approximation inherited from the curation workflow: it
/// can both over-match ("Nb2O5" inside "Nb2O5-doped X") and under-match
/// (a tested "WC" coating never contains the full "WC (tungsten carbide)"
/// label).
fn untested_classes(entries: &[PerformanceRecord]) -> Vec<String> {
    let tested: Vec<String> = entries.iter().map(|e| e.material.to_lowercase()).collect();

    PROMISING_CLASSES
        .iter()
        .filter(|class| {
            let class_lower = class.to_lowercase();
            !tested.iter().any(|material| material.contains(&class_lower))
        })
        .map(|class| class.to_string())
        .collect()
}
