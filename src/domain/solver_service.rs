// Boundary to the external MILP solver.
// Any conforming backend can be substituted as long as it honors this contract.

use std::time::Duration;

use super::models::{MilpModel, SolveOutcome};

/// Error types for the solver boundary. Backend failures are distinct from
/// model infeasibility, which travels through `SolveOutcome::status`.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("solver backend not available: {0}")]
    BackendUnavailable(String),

    #[error("solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Capability interface for MILP backends.
pub trait MilpSolver: Send + Sync {
    /// Solve the model within the wall-clock ceiling.
    ///
    /// The call blocks until the backend returns. On hitting the time
    /// limit a backend reports `Feasible` when it holds an incumbent and
    /// `Timeout` otherwise; a time-boxed incumbent is never reported as
    /// `Optimal`.
    fn solve(&self, model: &MilpModel, time_limit: Duration) -> Result<SolveOutcome>;

    /// Validate a model without solving it.
    fn validate(&self, model: &MilpModel) -> Result<()> {
        let mut errors = Vec::new();

        let num_vars = model.num_variables();
        if num_vars == 0 {
            errors.push("model has no variables".to_string());
        }

        if model.objective.num_variables() != num_vars {
            errors.push(format!(
                "objective has {} coefficients but model has {} variables",
                model.objective.num_variables(),
                num_vars
            ));
        }

        for (i, constraint) in model.constraints.iter().enumerate() {
            if constraint.num_variables() != num_vars {
                errors.push(format!(
                    "constraint {} '{}' has {} coefficients but model has {} variables",
                    i,
                    constraint.name,
                    constraint.num_variables(),
                    num_vars
                ));
            }
        }

        for (i, var) in model.variables.iter().enumerate() {
            if let Some(upper) = var.upper_bound {
                if var.lower_bound > upper {
                    errors.push(format!(
                        "variable {} '{}' has lower bound ({}) > upper bound ({})",
                        i, var.name, var.lower_bound, upper
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidModel(errors.join("; ")))
        }
    }

    /// Name of this solver backend.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Constraint, Objective, Variable};

    struct NoopSolver;

    impl MilpSolver for NoopSolver {
        fn solve(&self, _model: &MilpModel, _time_limit: Duration) -> Result<SolveOutcome> {
            Ok(SolveOutcome::infeasible(Duration::ZERO))
        }

        fn name(&self) -> &str {
            "noop"
        }
    }

    fn model(variables: usize, objective_len: usize, constraint_len: usize) -> MilpModel {
        MilpModel {
            name: "test".to_string(),
            variables: (0..variables)
                .map(|i| Variable::integer(format!("x_{i}")))
                .collect(),
            objective: Objective::minimize(vec![1.0; objective_len]),
            constraints: vec![Constraint::at_least(
                "row",
                vec![1.0; constraint_len],
                1.0,
            )],
        }
    }

    #[test]
    fn consistent_model_validates() {
        assert!(NoopSolver.validate(&model(3, 3, 3)).is_ok());
    }

    #[test]
    fn mismatched_objective_rejected() {
        let err = NoopSolver.validate(&model(3, 2, 3)).unwrap_err();
        assert!(matches!(err, SolverError::InvalidModel(_)));
    }

    #[test]
    fn mismatched_constraint_rejected() {
        let err = NoopSolver.validate(&model(3, 3, 4)).unwrap_err();
        assert!(matches!(err, SolverError::InvalidModel(_)));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let mut m = model(2, 2, 2);
        m.variables[1] = Variable::integer("x_1").with_bounds(5.0, Some(1.0));
        assert!(NoopSolver.validate(&m).is_err());
    }
}
