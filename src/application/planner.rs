// Orchestration: validate, generate, build, solve, extract.

use std::time::Duration;

use tracing::info;

use crate::domain::catalog::{Catalog, CatalogError};
use crate::domain::pattern::PatternSet;
use crate::domain::solver_service::{MilpSolver, SolverError};
use crate::domain::value_objects::SolveStatus;

use super::model_builder::ModelBuilder;
use super::pattern_generator::PatternGenerator;
use super::solution_extractor::{CuttingPlan, SolutionExtractor};

/// Failure taxonomy of a planning run.
///
/// Infeasibility and timeout are typed results of their own so a caller
/// can tell "no plan exists under the current constraints" apart from a
/// solver crash.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    InvalidCatalog(#[from] CatalogError),

    /// No cutting pattern survived generation; every demand constraint
    /// would be trivially unsatisfiable, so no model is emitted.
    #[error("no feasible cutting patterns could be generated")]
    NoFeasiblePatterns,

    #[error("pattern references unknown plate type {0}")]
    UnknownPlateType(u32),

    #[error("no plan satisfies the demand, stock and balance constraints")]
    Infeasible,

    /// The solver hit the wall-clock ceiling without any incumbent.
    /// Handled like infeasibility by callers, kept distinct for
    /// diagnostics.
    #[error("solver hit the time limit without finding any feasible plan")]
    Timeout,

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Tuning knobs for generation and solving.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Try the swapped orientation of non-square pieces.
    pub allow_rotation: bool,
    /// Cap on patterns kept per plate type; excess enumeration is
    /// truncated and reported as a warning.
    pub max_patterns_per_plate: usize,
    /// Wall-clock ceiling handed to the solver.
    pub time_limit: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            allow_rotation: true,
            max_patterns_per_plate: 1000,
            time_limit: Duration::from_secs(300),
        }
    }
}

/// End-to-end cutting-stock planning over one catalogue.
///
/// Each run derives a fresh pattern list and model; nothing is shared
/// between runs.
pub struct CuttingStockPlanner<'a> {
    catalog: &'a Catalog,
    config: PlannerConfig,
}

impl<'a> CuttingStockPlanner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, PlannerConfig::default())
    }

    pub fn with_config(catalog: &'a Catalog, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Validate the catalogue and enumerate its patterns without solving.
    pub fn generate_patterns(&self) -> Result<PatternSet, PlanError> {
        self.catalog.validate()?;
        let set = PatternGenerator::new(
            self.catalog,
            self.config.allow_rotation,
            self.config.max_patterns_per_plate,
        )
        .generate();
        info!(
            patterns = set.len(),
            truncated_plates = set.truncated.len(),
            "pattern generation finished"
        );
        Ok(set)
    }

    /// Run the full pipeline against the given solver backend.
    pub fn plan(&self, solver: &dyn MilpSolver) -> Result<CuttingPlan, PlanError> {
        let set = self.generate_patterns()?;
        let model = ModelBuilder::new(self.catalog, &set.patterns).build()?;
        info!(
            variables = model.num_variables(),
            constraints = model.num_constraints(),
            solver = solver.name(),
            "model built, solving"
        );

        let outcome = solver.solve(&model, self.config.time_limit)?;
        info!(status = %outcome.status, elapsed_secs = outcome.elapsed.as_secs_f64(), "solve finished");

        match outcome.status {
            SolveStatus::Infeasible => Err(PlanError::Infeasible),
            SolveStatus::Timeout => Err(PlanError::Timeout),
            SolveStatus::Optimal | SolveStatus::Feasible => {
                SolutionExtractor::new(self.catalog, &set.patterns).extract(&outcome, set.truncated)
            }
        }
    }
}
