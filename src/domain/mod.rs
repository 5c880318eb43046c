// Domain module: catalogue data, patterns, and the solver boundary

pub mod catalog;
pub mod models;
pub mod pattern;
pub mod solver_service;
pub mod value_objects;

pub use catalog::{Catalog, CatalogError, Piece, PlateType};
pub use models::{Constraint, MilpModel, Objective, SolveOutcome, Variable};
pub use pattern::{Pattern, PatternSet, TruncationWarning};
pub use solver_service::{MilpSolver, SolverError};
pub use value_objects::{
    ConstraintSense, Priority, QualityLevel, SolveStatus, SolverBackend,
};
