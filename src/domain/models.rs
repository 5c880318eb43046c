// Model-internal data: what gets handed to a MILP backend and what comes back

use std::time::Duration;

use super::value_objects::{ConstraintSense, SolveStatus};

/// Non-negative integer decision variable.
///
/// In a cutting-stock model, one variable per pattern: how many plates are
/// cut according to it. The lower bound is zero; no upper bound is set
/// beyond what the constraints impose.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub lower_bound: f64,
    pub upper_bound: Option<f64>,
}

impl Variable {
    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower_bound: 0.0,
            upper_bound: None,
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: Option<f64>) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }
}

/// Linear objective over the decision variables, always minimized.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub coefficients: Vec<f64>,
}

impl Objective {
    pub fn minimize(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Linear constraint: `coefficients · x  <sense>  bound`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub coefficients: Vec<f64>,
    pub sense: ConstraintSense,
    pub bound: f64,
}

impl Constraint {
    pub fn at_least(name: impl Into<String>, coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            name: name.into(),
            coefficients,
            sense: ConstraintSense::GreaterOrEqual,
            bound,
        }
    }

    pub fn at_most(name: impl Into<String>, coefficients: Vec<f64>, bound: f64) -> Self {
        Self {
            name: name.into(),
            coefficients,
            sense: ConstraintSense::LessOrEqual,
            bound,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }
}

/// Complete integer program handed to a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct MilpModel {
    pub name: String,
    pub variables: Vec<Variable>,
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
}

impl MilpModel {
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

/// Assignment returned by a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub status: SolveStatus,
    /// Value per decision variable, indexed like `MilpModel::variables`.
    /// Empty when no incumbent exists.
    pub values: Vec<f64>,
    pub objective_value: f64,
    /// Wall-clock time the backend spent, reported by the backend itself.
    pub elapsed: Duration,
}

impl SolveOutcome {
    pub fn infeasible(elapsed: Duration) -> Self {
        Self {
            status: SolveStatus::Infeasible,
            values: Vec::new(),
            objective_value: 0.0,
            elapsed,
        }
    }

    pub fn timeout(elapsed: Duration) -> Self {
        Self {
            status: SolveStatus::Timeout,
            values: Vec::new(),
            objective_value: 0.0,
            elapsed,
        }
    }

    pub fn has_incumbent(&self) -> bool {
        self.status.has_incumbent()
    }
}
