use crate::core::models::PerformanceRecord;
use std::collections::{BTreeMap, HashSet};

/// Descriptive aggregates over the literature collection.
///
/// Means and extremes are computed over reported values only; a statistic whose
/// underlying metric is reported by no record is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub total_entries: usize,
    pub year_min: i32,
    pub year_max: i32,
    pub materials_tested: usize,
    pub avg_test_duration_hours: Option<f64>,
    pub max_test_duration_hours: Option<f64>,
    pub avg_corrosion_current: Option<f64>,
    pub best_corrosion_current: Option<f64>,
    pub avg_contact_resistance: Option<f64>,
    pub best_contact_resistance: Option<f64>,
    pub avg_cost_estimate: Option<f64>,
    pub success_rating_distribution: BTreeMap<u8, usize>,
}

pub(crate) fn compute(entries: &[PerformanceRecord]) -> Option<SummaryStatistics> {
    if entries.is_empty() {
        return None;
    }

    let materials: HashSet<&str> = entries.iter().map(|e| e.material.as_str()).collect();

    let mut distribution = BTreeMap::new();
    for rating in entries.iter().filter_map(|e| e.success_rating) {
        *distribution.entry(rating).or_insert(0) += 1;
    }

    Some(SummaryStatistics {
        total_entries: entries.len(),
        year_min: entries.iter().map(|e| e.year).min().expect("non-empty"),
        year_max: entries.iter().map(|e| e.year).max().expect("non-empty"),
        materials_tested: materials.len(),
        avg_test_duration_hours: mean(entries.iter().filter_map(|e| e.test_duration_hours)),
        max_test_duration_hours: fold_max(entries.iter().filter_map(|e| e.test_duration_hours)),
        avg_corrosion_current: mean(entries.iter().filter_map(|e| e.corrosion_current_ua_cm2)),
        best_corrosion_current: fold_min(entries.iter().filter_map(|e| e.corrosion_current_ua_cm2)),
        avg_contact_resistance: mean(
            entries.iter().filter_map(|e| e.contact_resistance_mohm_cm2),
        ),
        best_contact_resistance: fold_min(
            entries.iter().filter_map(|e| e.contact_resistance_mohm_cm2),
        ),
        avg_cost_estimate: mean(entries.iter().filter_map(|e| e.cost_estimate_dollar_m2)),
        success_rating_distribution: distribution,
    })
}

pub(crate) fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

pub(crate) fn fold_min(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
}

pub(crate) fn fold_max(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
}
