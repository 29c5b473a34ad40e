use crate::core::models::PerformanceRecord;

/// DOE/industry performance targets for bipolar plate coatings.
pub const CONTACT_RESISTANCE_TARGET_MOHM_CM2: f64 = 10.0;
pub const CORROSION_CURRENT_TARGET_UA_CM2: f64 = 1.0;
pub const TEST_DURATION_TARGET_HOURS: f64 = 2000.0;
pub const COST_TARGET_DOLLAR_M2: f64 = 10.0;

/// Pass/fail flags for one record against the fixed targets.
///
/// Flags are derived on every evaluation, never stored on the record. A record
/// missing the underlying metric fails that target: an unreported value never
/// counts as a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub doi: String,
    pub material: String,
    pub year: i32,
    pub meets_resistance_target: bool,
    pub meets_corrosion_target: bool,
    pub meets_duration_target: bool,
    pub meets_cost_target: bool,
    pub meets_all_targets: bool,
}

/// Evaluates a record against all four targets. Boundaries are inclusive.
pub fn evaluate(record: &PerformanceRecord) -> BenchmarkRow {
    let meets_resistance_target = record
        .contact_resistance_mohm_cm2
        .is_some_and(|v| v <= CONTACT_RESISTANCE_TARGET_MOHM_CM2);
    let meets_corrosion_target = record
        .corrosion_current_ua_cm2
        .is_some_and(|v| v <= CORROSION_CURRENT_TARGET_UA_CM2);
    let meets_duration_target = record
        .test_duration_hours
        .is_some_and(|v| v >= TEST_DURATION_TARGET_HOURS);
    let meets_cost_target = record
        .cost_estimate_dollar_m2
        .is_some_and(|v| v <= COST_TARGET_DOLLAR_M2);

    BenchmarkRow {
        doi: record.doi.clone(),
        material: record.material.clone(),
        year: record.year,
        meets_resistance_target,
        meets_corrosion_target,
        meets_duration_target,
        meets_cost_target,
        meets_all_targets: meets_resistance_target
            && meets_corrosion_target
            && meets_duration_target
            && meets_cost_target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PerformanceRecord {
        PerformanceRecord::new("10.1/x", "A", 2020, "T", "TiN", "SS316L")
    }

    #[test]
    fn record_with_no_metrics_fails_every_target() {
        let row = evaluate(&base());
        assert!(!row.meets_resistance_target);
        assert!(!row.meets_corrosion_target);
        assert!(!row.meets_duration_target);
        assert!(!row.meets_cost_target);
        assert!(!row.meets_all_targets);
    }

    #[test]
    fn resistance_boundary_is_inclusive() {
        let exactly = PerformanceRecord {
            contact_resistance_mohm_cm2: Some(10.0),
            ..base()
        };
        assert!(evaluate(&exactly).meets_resistance_target);

        let just_over = PerformanceRecord {
            contact_resistance_mohm_cm2: Some(10.0001),
            ..base()
        };
        assert!(!evaluate(&just_over).meets_resistance_target);
    }

    #[test]
    fn all_targets_flag_is_a_conjunction() {
        let mut entry = PerformanceRecord {
            contact_resistance_mohm_cm2: Some(8.0),
            corrosion_current_ua_cm2: Some(0.5),
            test_duration_hours: Some(3000.0),
            cost_estimate_dollar_m2: Some(9.0),
            ..base()
        };
        assert!(evaluate(&entry).meets_all_targets);

        entry.cost_estimate_dollar_m2 = Some(25.0);
        let row = evaluate(&entry);
        assert!(row.meets_resistance_target);
        assert!(!row.meets_cost_target);
        assert!(!row.meets_all_targets);
    }

    #[test]
    fn duration_target_is_a_minimum() {
        let entry = PerformanceRecord {
            test_duration_hours: Some(2000.0),
            ..base()
        };
        assert!(evaluate(&entry).meets_duration_target);

        let short = PerformanceRecord {
            test_duration_hours: Some(1999.9),
            ..base()
        };
        assert!(!evaluate(&short).meets_duration_target);
    }
}
