use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when constructing a record from untyped input.
///
/// Raised per record; batch importers catch these and convert them into a
/// skip-with-warning, never into a whole-import failure.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value '{value}' for field '{field}': expected {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Reviewer-assigned confidence in the reported measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataQuality {
    High,
    Medium,
    Low,
}

impl fmt::Display for DataQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataQuality::High => "high",
            DataQuality::Medium => "medium",
            DataQuality::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DataQuality {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(DataQuality::High),
            "medium" => Ok(DataQuality::Medium),
            "low" => Ok(DataQuality::Low),
            _ => Err(()),
        }
    }
}

/// One published experimental measurement of a coating's performance.
///
/// Units are baked into field names so that the on-disk column contract of the
/// exported table is self-describing. Absence of an optional value always means
/// "not reported", never zero.
///
/// Records are immutable once constructed; correcting an entry means removing
/// and re-adding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    // Paper provenance.
    pub doi: String,
    pub authors: String,
    pub year: i32,
    pub title: String,
    pub journal: Option<String>,

    // Coating description.
    pub material: String,
    pub substrate: String,
    pub thickness_nm: Option<f64>,
    pub deposition_method: Option<String>,

    // Measured performance.
    pub corrosion_current_ua_cm2: Option<f64>,
    pub contact_resistance_mohm_cm2: Option<f64>,
    pub test_duration_hours: Option<f64>,

    // Test conditions.
    pub electrolyte: Option<String>,
    pub temperature_c: Option<f64>,
    pub potential_v: Option<f64>,
    pub current_density_a_cm2: Option<f64>,

    // Degradation indicators.
    pub voltage_increase_uv_hr: Option<f64>,
    pub resistance_change_percent: Option<f64>,

    // Ion leaching (critical for membrane degradation).
    pub fe_release_ug_cm2_day: Option<f64>,
    pub cr_release_ug_cm2_day: Option<f64>,
    pub ni_release_ug_cm2_day: Option<f64>,

    // Economics.
    pub cost_estimate_dollar_m2: Option<f64>,
    pub scalability_notes: Option<String>,

    // Assessment.
    pub success_rating: Option<u8>,
    pub failure_mode: Option<String>,
    pub notes: Option<String>,

    // Metadata.
    pub entry_date: String,
    pub data_quality: Option<DataQuality>,
}

impl PerformanceRecord {
    /// Creates a record with the six mandatory fields set and everything else
    /// absent. `entry_date` defaults to the current local date.
    ///
    /// Optional fields are public, so callers fill them with struct-update
    /// syntax: `PerformanceRecord { thickness_nm: Some(500.0), ..base }`.
    pub fn new(
        doi: &str,
        authors: &str,
        year: i32,
        title: &str,
        material: &str,
        substrate: &str,
    ) -> Self {
        Self {
            doi: doi.to_string(),
            authors: authors.to_string(),
            year,
            title: title.to_string(),
            journal: None,
            material: material.to_string(),
            substrate: substrate.to_string(),
            thickness_nm: None,
            deposition_method: None,
            corrosion_current_ua_cm2: None,
            contact_resistance_mohm_cm2: None,
            test_duration_hours: None,
            electrolyte: None,
            temperature_c: None,
            potential_v: None,
            current_density_a_cm2: None,
            voltage_increase_uv_hr: None,
            resistance_change_percent: None,
            fe_release_ug_cm2_day: None,
            cr_release_ug_cm2_day: None,
            ni_release_ug_cm2_day: None,
            cost_estimate_dollar_m2: None,
            scalability_notes: None,
            success_rating: None,
            failure_mode: None,
            notes: None,
            entry_date: today(),
            data_quality: None,
        }
    }

    /// Builds a record from a field-name-to-value mapping, coercing each string
    /// value to its declared type.
    ///
    /// Empty values are treated as absent. Mandatory fields must be present and
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a mandatory field is missing, a value
    /// cannot be coerced, or an unknown field name is supplied.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let mut draft = PerformanceDraft::default();

        for (key, value) in fields {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "doi" => draft.doi = Some(value.to_string()),
                "authors" => draft.authors = Some(value.to_string()),
                "year" => draft.year = Some(parse_int(value, "year")?),
                "title" => draft.title = Some(value.to_string()),
                "journal" => draft.journal = Some(value.to_string()),
                "material" => draft.material = Some(value.to_string()),
                "substrate" => draft.substrate = Some(value.to_string()),
                "thickness_nm" => draft.thickness_nm = Some(parse_float(value, "thickness_nm")?),
                "deposition_method" => draft.deposition_method = Some(value.to_string()),
                "corrosion_current_ua_cm2" => {
                    draft.corrosion_current_ua_cm2 =
                        Some(parse_float(value, "corrosion_current_ua_cm2")?)
                }
                "contact_resistance_mohm_cm2" => {
                    draft.contact_resistance_mohm_cm2 =
                        Some(parse_float(value, "contact_resistance_mohm_cm2")?)
                }
                "test_duration_hours" => {
                    draft.test_duration_hours = Some(parse_float(value, "test_duration_hours")?)
                }
                "electrolyte" => draft.electrolyte = Some(value.to_string()),
                "temperature_c" => draft.temperature_c = Some(parse_float(value, "temperature_c")?),
                "potential_v" => draft.potential_v = Some(parse_float(value, "potential_v")?),
                "current_density_a_cm2" => {
                    draft.current_density_a_cm2 = Some(parse_float(value, "current_density_a_cm2")?)
                }
                "voltage_increase_uv_hr" => {
                    draft.voltage_increase_uv_hr =
                        Some(parse_float(value, "voltage_increase_uv_hr")?)
                }
                "resistance_change_percent" => {
                    draft.resistance_change_percent =
                        Some(parse_float(value, "resistance_change_percent")?)
                }
                "fe_release_ug_cm2_day" => {
                    draft.fe_release_ug_cm2_day = Some(parse_float(value, "fe_release_ug_cm2_day")?)
                }
                "cr_release_ug_cm2_day" => {
                    draft.cr_release_ug_cm2_day = Some(parse_float(value, "cr_release_ug_cm2_day")?)
                }
                "ni_release_ug_cm2_day" => {
                    draft.ni_release_ug_cm2_day = Some(parse_float(value, "ni_release_ug_cm2_day")?)
                }
                "cost_estimate_dollar_m2" => {
                    draft.cost_estimate_dollar_m2 =
                        Some(parse_float(value, "cost_estimate_dollar_m2")?)
                }
                "scalability_notes" => draft.scalability_notes = Some(value.to_string()),
                "success_rating" => {
                    draft.success_rating = Some(parse_rating(value)?);
                }
                "failure_mode" => draft.failure_mode = Some(value.to_string()),
                "notes" => draft.notes = Some(value.to_string()),
                "entry_date" => draft.entry_date = Some(value.to_string()),
                "data_quality" => {
                    draft.data_quality = Some(DataQuality::from_str(value).map_err(|_| {
                        ValidationError::InvalidValue {
                            field: "data_quality",
                            value: value.to_string(),
                            expected: "one of 'high', 'medium', 'low'",
                        }
                    })?)
                }
                other => return Err(ValidationError::UnknownField(other.to_string())),
            }
        }

        draft.try_into()
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn parse_float(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    value
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            expected: "a number",
        })
}

fn parse_int(value: &str, field: &'static str) -> Result<i32, ValidationError> {
    value
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            expected: "an integer",
        })
}

fn parse_rating(value: &str) -> Result<u8, ValidationError> {
    value
        .parse::<u8>()
        .map_err(|_| ValidationError::InvalidValue {
            field: "success_rating",
            value: value.to_string(),
            expected: "an integer",
        })
}

/// All-optional mirror of [`PerformanceRecord`], used as the explicit schema
/// validation step for untyped sources (delimited rows, field mappings).
///
/// A draft deserializes from a CSV row where any cell may be empty; conversion
/// into a [`PerformanceRecord`] enforces the mandatory-field invariant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PerformanceDraft {
    pub doi: Option<String>,
    pub authors: Option<String>,
    pub year: Option<i32>,
    pub title: Option<String>,
    pub journal: Option<String>,
    pub material: Option<String>,
    pub substrate: Option<String>,
    pub thickness_nm: Option<f64>,
    pub deposition_method: Option<String>,
    pub corrosion_current_ua_cm2: Option<f64>,
    pub contact_resistance_mohm_cm2: Option<f64>,
    pub test_duration_hours: Option<f64>,
    pub electrolyte: Option<String>,
    pub temperature_c: Option<f64>,
    pub potential_v: Option<f64>,
    pub current_density_a_cm2: Option<f64>,
    pub voltage_increase_uv_hr: Option<f64>,
    pub resistance_change_percent: Option<f64>,
    pub fe_release_ug_cm2_day: Option<f64>,
    pub cr_release_ug_cm2_day: Option<f64>,
    pub ni_release_ug_cm2_day: Option<f64>,
    pub cost_estimate_dollar_m2: Option<f64>,
    pub scalability_notes: Option<String>,
    pub success_rating: Option<u8>,
    pub failure_mode: Option<String>,
    pub notes: Option<String>,
    pub entry_date: Option<String>,
    pub data_quality: Option<DataQuality>,
}

impl TryFrom<PerformanceDraft> for PerformanceRecord {
    type Error = ValidationError;

    fn try_from(draft: PerformanceDraft) -> Result<Self, Self::Error> {
        Ok(PerformanceRecord {
            doi: draft.doi.ok_or(ValidationError::MissingField("doi"))?,
            authors: draft
                .authors
                .ok_or(ValidationError::MissingField("authors"))?,
            year: draft.year.ok_or(ValidationError::MissingField("year"))?,
            title: draft.title.ok_or(ValidationError::MissingField("title"))?,
            journal: draft.journal,
            material: draft
                .material
                .ok_or(ValidationError::MissingField("material"))?,
            substrate: draft
                .substrate
                .ok_or(ValidationError::MissingField("substrate"))?,
            thickness_nm: draft.thickness_nm,
            deposition_method: draft.deposition_method,
            corrosion_current_ua_cm2: draft.corrosion_current_ua_cm2,
            contact_resistance_mohm_cm2: draft.contact_resistance_mohm_cm2,
            test_duration_hours: draft.test_duration_hours,
            electrolyte: draft.electrolyte,
            temperature_c: draft.temperature_c,
            potential_v: draft.potential_v,
            current_density_a_cm2: draft.current_density_a_cm2,
            voltage_increase_uv_hr: draft.voltage_increase_uv_hr,
            resistance_change_percent: draft.resistance_change_percent,
            fe_release_ug_cm2_day: draft.fe_release_ug_cm2_day,
            cr_release_ug_cm2_day: draft.cr_release_ug_cm2_day,
            ni_release_ug_cm2_day: draft.ni_release_ug_cm2_day,
            cost_estimate_dollar_m2: draft.cost_estimate_dollar_m2,
            scalability_notes: draft.scalability_notes,
            success_rating: draft.success_rating,
            failure_mode: draft.failure_mode,
            notes: draft.notes,
            entry_date: draft.entry_date.unwrap_or_else(today),
            data_quality: draft.data_quality,
        })
    }
}
