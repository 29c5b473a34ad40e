use super::search::{MaterialDoc, MaterialSearch, SearchError};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Environment variable consulted when no explicit API key is supplied.
pub const API_KEY_ENV: &str = "MP_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.materialsproject.org";

/// Fatal configuration errors, raised at construction and never retried.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error(
        "Materials Project API key not found; pass one explicitly or set the \
         MP_API_KEY environment variable"
    )]
    MissingApiKey,
}

/// A resolved, non-empty search-service credential.
///
/// Resolution happens once at the boundary so the pipeline core stays free of
/// global state; a pipeline is never constructed with an unresolved credential.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps an explicit key, rejecting empty or whitespace-only values.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            Err(ConfigError::MissingApiKey)
        } else {
            Ok(Self(key))
        }
    }

    /// Resolves a credential from an explicit parameter or, failing that, the
    /// `MP_API_KEY` environment variable.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        match explicit {
            Some(key) => Self::new(key),
            None => match std::env::var(API_KEY_ENV) {
                Ok(key) => Self::new(key),
                Err(_) => Err(ConfigError::MissingApiKey),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The credential must never leak into logs or error output.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Thin client for the Materials Project summary endpoint.
///
/// Carries no pipeline logic; it only translates a chemical-system query into
/// one HTTP request and the response into [`MaterialDoc`]s.
#[derive(Debug)]
pub struct MpClient {
    http: reqwest::blocking::Client,
    api_key: ApiKey,
    base_url: String,
}

impl MpClient {
    pub fn new(api_key: ApiKey) -> Result<Self, SearchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("pemcoat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the endpoint base URL (used against a local test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl MaterialSearch for MpClient {
    fn search_chemical_system(
        &self,
        chemical_system: &str,
        fields: &[&str],
    ) -> Result<Vec<MaterialDoc>, SearchError> {
        let url = format!("{}/materials/summary/", self.base_url);
        let field_list = fields.join(",");

        let response = self
            .http
            .get(&url)
            .header("X-API-KEY", self.api_key.as_str())
            .query(&[("chemsys", chemical_system), ("_fields", &field_list)])
            .send()?
            .error_for_status()?;

        let body: SummaryResponse = response.json()?;
        Ok(body.data.into_iter().map(SummaryDoc::into_doc).collect())
    }
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    data: Vec<SummaryDoc>,
}

#[derive(Debug, Deserialize)]
struct SummaryDoc {
    material_id: String,
    formula_pretty: String,
    composition: serde_json::Value,
    formation_energy_per_atom: f64,
    energy_above_hull: f64,
    band_gap: f64,
    density: f64,
    symmetry: SummarySymmetry,
    volume: f64,
    elements: Vec<String>,
    nelements: usize,
}

#[derive(Debug, Deserialize)]
struct SummarySymmetry {
    crystal_system: String,
    symbol: String,
}

impl SummaryDoc {
    fn into_doc(self) -> MaterialDoc {
        let composition = composition_string(&self.composition, &self.elements);
        MaterialDoc {
            material_id: self.material_id,
            formula_pretty: self.formula_pretty,
            composition,
            formation_energy_per_atom: self.formation_energy_per_atom,
            energy_above_hull: self.energy_above_hull,
            band_gap: self.band_gap,
            density: self.density,
            crystal_system: self.symmetry.crystal_system,
            space_group: self.symmetry.symbol,
            volume: self.volume,
            elements: self.elements,
            nelements: self.nelements,
        }
    }
}

/// Renders the composition object as "El1 amount El2 amount ..." in element
/// order; falls back to raw JSON for unexpected shapes.
fn composition_string(composition: &serde_json::Value, elements: &[String]) -> String {
    match composition {
        serde_json::Value::Object(map) => elements
            .iter()
            .filter_map(|element| {
                map.get(element)
                    .and_then(|v| v.as_f64())
                    .map(|amount| format!("{}{}", element, amount))
            })
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
