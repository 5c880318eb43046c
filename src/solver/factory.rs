use std::sync::Arc;

use crate::domain::solver_service::MilpSolver;
use crate::domain::value_objects::SolverBackend;
use crate::solver::{CoinCbcSolver, HighsSolver};

/// Factory for creating solver instances from a backend selection.
pub struct SolverFactory;

impl SolverFactory {
    pub fn create(backend: SolverBackend) -> Arc<dyn MilpSolver> {
        match backend {
            SolverBackend::Auto => Arc::new(HighsSolver::new()),
            SolverBackend::CoinCbc => Arc::new(CoinCbcSolver::new()),
            SolverBackend::Highs => Arc::new(HighsSolver::new()),
        }
    }

    /// The default backend (HiGHS).
    pub fn default_solver() -> Arc<dyn MilpSolver> {
        Arc::new(HighsSolver::new())
    }
}
