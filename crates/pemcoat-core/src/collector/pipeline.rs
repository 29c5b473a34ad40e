use super::progress::{Progress, ProgressReporter};
use super::search::{MaterialDoc, MaterialSearch};
use super::systems::{CARBIDES, CONDUCTIVE_OXIDES, NITRIDES, SUMMARY_FIELDS};
use crate::core::io::csv::{self as table_io, TableIoError};
use crate::core::models::{CandidateRecord, MaterialClass, is_stable_at};
use crate::literature::stats::mean;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Default maximum energy above the hull (eV/atom) for a candidate to count as
/// stable.
pub const DEFAULT_STABILITY_THRESHOLD: f64 = 0.1;

/// Parameters of one collection run.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectOptions {
    pub stability_threshold: f64,
    pub include_oxides: bool,
    pub include_nitrides: bool,
    pub include_carbides: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            stability_threshold: DEFAULT_STABILITY_THRESHOLD,
            include_oxides: true,
            include_nitrides: true,
            include_carbides: true,
        }
    }
}

/// A chemical system whose search failed during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemFailure {
    pub chemical_system: String,
    pub material_class: MaterialClass,
    pub message: String,
}

/// Outcome of one collection run: the derived candidate table plus the
/// per-system failures that were tolerated along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionRun {
    pub candidates: Vec<CandidateRecord>,
    pub failures: Vec<SystemFailure>,
}

/// Aggregate statistics over the collected candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectorStatistics {
    pub total_materials: usize,
    pub stable_materials: usize,
    pub by_class: BTreeMap<MaterialClass, usize>,
    pub avg_formation_energy: f64,
    pub avg_band_gap: f64,
    pub avg_density: f64,
    pub hull_energy_min: f64,
    pub hull_energy_max: f64,
    pub hull_energy_mean: f64,
}

/// Aggregates coating candidates from an external material-search service.
///
/// The collector owns the candidate collection between runs; each call to
/// [`collect`](Self::collect) replaces it entirely. The search collaborator is
/// injected through [`MaterialSearch`], and credential resolution happens when
/// the concrete client is constructed, before the collector ever exists.
pub struct CandidateCollector<C: MaterialSearch> {
    client: C,
    candidates: Vec<CandidateRecord>,
}

impl<C: MaterialSearch> CandidateCollector<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            candidates: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[CandidateRecord] {
        &self.candidates
    }

    /// Runs one full collection pass over the included catalogues.
    ///
    /// One search per chemical system, in catalogue order, single attempt. A
    /// failing system is reported as a warning and recorded in the returned
    /// run; the remaining systems are still processed. With every inclusion
    /// flag false the service is never contacted and the run is empty.
    #[instrument(skip_all, name = "candidate_collection")]
    pub fn collect(&mut self, options: &CollectOptions, reporter: &ProgressReporter) -> CollectionRun {
        self.candidates.clear();

        let plan = build_search_plan(options);
        reporter.report(Progress::RunStart {
            total_systems: plan.len() as u64,
        });
        info!(
            systems = plan.len(),
            threshold = options.stability_threshold,
            "Starting candidate collection."
        );

        let mut failures = Vec::new();
        for (chemical_system, material_class) in plan {
            reporter.report(Progress::SystemStart {
                chemical_system: chemical_system.to_string(),
                material_class,
            });

            match self
                .client
                .search_chemical_system(chemical_system, &SUMMARY_FIELDS)
            {
                Ok(docs) => {
                    let found = docs.len();
                    let mut stable = 0;
                    for doc in docs {
                        let record = tag_candidate(
                            doc,
                            material_class,
                            chemical_system,
                            options.stability_threshold,
                        );
                        if record.is_stable {
                            stable += 1;
                        }
                        self.candidates.push(record);
                    }
                    reporter.report(Progress::SystemFinish { found, stable });
                }
                Err(e) => {
                    warn!(
                        chemical_system,
                        error = %e,
                        "Search failed; continuing with remaining systems."
                    );
                    reporter.report(Progress::SystemFailed {
                        chemical_system: chemical_system.to_string(),
                        message: e.to_string(),
                    });
                    failures.push(SystemFailure {
                        chemical_system: chemical_system.to_string(),
                        material_class,
                        message: e.to_string(),
                    });
                }
            }
        }

        reporter.report(Progress::RunFinish);
        info!(
            total = self.candidates.len(),
            failed_systems = failures.len(),
            "Candidate collection complete."
        );

        CollectionRun {
            candidates: self.to_table(),
            failures,
        }
    }

    /// Derives the tabular view: candidates sorted ascending by energy above
    /// the hull (most stable first). Recomputed on every call.
    pub fn to_table(&self) -> Vec<CandidateRecord> {
        let mut table = self.candidates.clone();
        table.sort_by(|a, b| a.energy_above_hull.total_cmp(&b.energy_above_hull));
        table
    }

    /// Aggregate statistics; `None` when nothing has been collected.
    pub fn summary_statistics(&self) -> Option<CollectorStatistics> {
        if self.candidates.is_empty() {
            return None;
        }

        let mut by_class = BTreeMap::new();
        for candidate in &self.candidates {
            *by_class.entry(candidate.material_class).or_insert(0) += 1;
        }

        let hull_energies: Vec<f64> = self
            .candidates
            .iter()
            .map(|c| c.energy_above_hull)
            .collect();

        Some(CollectorStatistics {
            total_materials: self.candidates.len(),
            stable_materials: self.candidates.iter().filter(|c| c.is_stable).count(),
            by_class,
            avg_formation_energy: mean(
                self.candidates.iter().map(|c| c.formation_energy_per_atom),
            )
            .expect("non-empty"),
            avg_band_gap: mean(self.candidates.iter().map(|c| c.band_gap)).expect("non-empty"),
            avg_density: mean(self.candidates.iter().map(|c| c.density)).expect("non-empty"),
            hull_energy_min: hull_energies.iter().copied().fold(f64::INFINITY, f64::min),
            hull_energy_max: hull_energies
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max),
            hull_energy_mean: mean(hull_energies.iter().copied()).expect("non-empty"),
        })
    }

    /// Exports the derived table to a CSV file, optionally restricted to
    /// stable candidates.
    pub fn save_to_csv<P: AsRef<Path>>(
        &self,
        path: P,
        stable_only: bool,
    ) -> Result<(), TableIoError> {
        let mut table = self.to_table();
        if stable_only {
            table.retain(|c| c.is_stable);
        }
        table_io::write_table(&table, &path)?;
        info!(
            candidates = table.len(),
            stable_only,
            path = %path.as_ref().display(),
            "Saved candidate table."
        );
        Ok(())
    }

    /// Loads candidates from a CSV file, replacing the current collection.
    /// Malformed rows are skipped with a warning. Returns the number loaded.
    pub fn load_from_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, TableIoError> {
        let rows = table_io::read_rows::<CandidateRecord, _>(&path)?;

        let mut loaded = Vec::new();
        for row in rows {
            match row {
                Ok(record) => loaded.push(record),
                Err(e) => warn!(error = %e, "Skipping unreadable candidate row."),
            }
        }

        info!(
            candidates = loaded.len(),
            path = %path.as_ref().display(),
            "Loaded candidate table."
        );
        self.candidates = loaded;
        Ok(self.candidates.len())
    }
}

/// Builds the ordered (system, class) search plan from the included
/// catalogues, preserving catalogue order then within-catalogue order.
fn build_search_plan(options: &CollectOptions) -> Vec<(&'static str, MaterialClass)> {
    let mut plan = Vec::new();
    if options.include_oxides {
        plan.extend(CONDUCTIVE_OXIDES.iter().map(|&s| (s, MaterialClass::Oxide)));
    }
    if options.include_nitrides {
        plan.extend(NITRIDES.iter().map(|&s| (s, MaterialClass::Nitride)));
    }
    if options.include_carbides {
        plan.extend(CARBIDES.iter().map(|&s| (s, MaterialClass::Carbide)));
    }
    plan
}

fn tag_candidate(
    doc: MaterialDoc,
    material_class: MaterialClass,
    chemical_system: &str,
    stability_threshold: f64,
) -> CandidateRecord {
    let is_stable = is_stable_at(doc.energy_above_hull, stability_threshold);
    CandidateRecord {
        material_id: doc.material_id,
        formula: doc.formula_pretty,
        composition: doc.composition,
        formation_energy_per_atom: doc.formation_energy_per_atom,
        energy_above_hull: doc.energy_above_hull,
        band_gap: doc.band_gap,
        density: doc.density,
        crystal_system: doc.crystal_system,
        space_group: doc.space_group,
        volume: doc.volume,
        elements: doc.elements.join("-"),
        nelements: doc.nelements,
        material_class,
        chemical_system: chemical_system.to_string(),
        is_stable,
    }
}
