use crate::core::models::PerformanceRecord;

/// Conjunctive filter set for literature queries.
///
/// Every filter left unset is ignored; a record matches only if it satisfies
/// all supplied filters. Records missing a value on a filtered numeric field
/// never match that filter (absence is "not reported", not a pass).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilters {
    pub material: Option<String>,
    pub substrate: Option<String>,
    pub min_test_duration: Option<f64>,
    pub max_corrosion_current: Option<f64>,
    pub max_contact_resistance: Option<f64>,
    pub min_success_rating: Option<u8>,
}

impl QueryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on the coating material name.
    pub fn material(mut self, substring: impl Into<String>) -> Self {
        self.material = Some(substring.into());
        self
    }

    /// Case-insensitive substring match on the substrate name.
    pub fn substrate(mut self, substring: impl Into<String>) -> Self {
        self.substrate = Some(substring.into());
        self
    }

    pub fn min_test_duration(mut self, hours: f64) -> Self {
        self.min_test_duration = Some(hours);
        self
    }

    pub fn max_corrosion_current(mut self, ua_cm2: f64) -> Self {
        self.max_corrosion_current = Some(ua_cm2);
        self
    }

    pub fn max_contact_resistance(mut self, mohm_cm2: f64) -> Self {
        self.max_contact_resistance = Some(mohm_cm2);
        self
    }

    pub fn min_success_rating(mut self, rating: u8) -> Self {
        self.min_success_rating = Some(rating);
        self
    }

    pub fn matches(&self, record: &PerformanceRecord) -> bool {
        if let Some(material) = &self.material {
            if !contains_ignore_case(&record.material, material) {
                return false;
            }
        }
        if let Some(substrate) = &self.substrate {
            if !contains_ignore_case(&record.substrate, substrate) {
                return false;
            }
        }
        if let Some(min) = self.min_test_duration {
            if !record.test_duration_hours.is_some_and(|v| v >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_corrosion_current {
            if !record.corrosion_current_ua_cm2.is_some_and(|v| v <= max) {
                return false;
            }
        }
        if let Some(max) = self.max_contact_resistance {
            if !record
                .contact_resistance_mohm_cm2
                .is_some_and(|v| v <= max)
            {
                return false;
            }
        }
        if let Some(min) = self.min_success_rating {
            if !record.success_rating.is_some_and(|r| r >= min) {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(material: &str, substrate: &str) -> PerformanceRecord {
        PerformanceRecord::new("10.1/x", "A", 2020, "T", material, substrate)
    }

    #[test]
    fn empty_filters_match_everything() {
        let filters = QueryFilters::new();
        assert!(filters.matches(&record("TiN", "SS316L")));
    }

    #[test]
    fn material_filter_is_case_insensitive_substring() {
        let filters = QueryFilters::new().material("tin");
        assert!(filters.matches(&record("N-doped TiN", "SS316L")));
        assert!(!filters.matches(&record("Nb2O5", "SS316L")));
    }

    #[test]
    fn substrate_filter_is_case_insensitive_substring() {
        let filters = QueryFilters::new().substrate("ss316");
        assert!(filters.matches(&record("TiN", "SS316L")));
        assert!(!filters.matches(&record("TiN", "Ti Grade 1")));
    }

    #[test]
    fn numeric_filters_never_match_absent_values() {
        let base = record("TiN", "SS316L");
        assert!(!QueryFilters::new().min_test_duration(100.0).matches(&base));
        assert!(
            !QueryFilters::new()
                .max_corrosion_current(10.0)
                .matches(&base)
        );
        assert!(
            !QueryFilters::new()
                .max_contact_resistance(100.0)
                .matches(&base)
        );
        assert!(!QueryFilters::new().min_success_rating(1).matches(&base));
    }

    #[test]
    fn numeric_filter_boundaries_are_inclusive() {
        let entry = PerformanceRecord {
            test_duration_hours: Some(2000.0),
            contact_resistance_mohm_cm2: Some(10.0),
            ..record("TiN", "SS316L")
        };
        assert!(
            QueryFilters::new()
                .min_test_duration(2000.0)
                .matches(&entry)
        );
        assert!(
            QueryFilters::new()
                .max_contact_resistance(10.0)
                .matches(&entry)
        );
        assert!(
            !QueryFilters::new()
                .max_contact_resistance(9.99)
                .matches(&entry)
        );
    }

    #[test]
    fn combined_filters_are_conjunctive() {
        let entry = PerformanceRecord {
            success_rating: Some(4),
            ..record("Ti4O7", "Ti Grade 1")
        };
        let both = QueryFilters::new().material("ti4o7").min_success_rating(4);
        assert!(both.matches(&entry));

        let mismatched = QueryFilters::new().material("ti4o7").min_success_rating(5);
        assert!(!mismatched.matches(&entry));
    }
}
