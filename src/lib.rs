// Domain layer: catalogue data, patterns, and the solver boundary
pub mod domain;

// Application layer: pattern generation, model building, plan extraction
pub mod application;

// Solver adapters: concrete implementations of MilpSolver
#[cfg(feature = "solvers")]
pub mod solver;

// Re-export commonly used types
pub use application::{
    CuttingPlan, CuttingStockPlanner, ModelBuilder, PatternGenerator, PatternUsage, PlanError,
    PlannerConfig, SolutionExtractor,
};
pub use domain::{
    Catalog, CatalogError, Constraint, ConstraintSense, MilpModel, MilpSolver, Objective, Pattern,
    PatternSet, Piece, PlateType, Priority, QualityLevel, SolveOutcome, SolveStatus, SolverBackend,
    SolverError, TruncationWarning, Variable,
};

#[cfg(feature = "solvers")]
pub use solver::{CoinCbcSolver, HighsSolver, SolverFactory};
