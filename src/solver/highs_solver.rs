// HiGHS adapter: translates the domain model to the HiGHS API.

use std::time::{Duration, Instant};

use highs::{HighsModelStatus, RowProblem, Sense};

use crate::domain::models::{MilpModel, SolveOutcome};
use crate::domain::solver_service::{MilpSolver, Result, SolverError};
use crate::domain::value_objects::{ConstraintSense, SolveStatus};

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MilpSolver for HighsSolver {
    fn solve(&self, model: &MilpModel, time_limit: Duration) -> Result<SolveOutcome> {
        self.validate(model)?;

        let start = Instant::now();

        // RowProblem: add variables first, then constraint rows.
        let mut pb = RowProblem::default();
        let mut cols = Vec::with_capacity(model.num_variables());
        for (i, def) in model.variables.iter().enumerate() {
            let obj_coeff = model.objective.coefficients.get(i).copied().unwrap_or(0.0);
            let upper = def.upper_bound.unwrap_or(f64::INFINITY);
            cols.push(pb.add_integer_column(obj_coeff, def.lower_bound..upper));
        }

        for constraint in &model.constraints {
            let mut terms = Vec::new();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 && i < cols.len() {
                    terms.push((cols[i], coeff));
                }
            }
            match constraint.sense {
                ConstraintSense::LessOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                ConstraintSense::Equal => {
                    pb.add_row(constraint.bound..=constraint.bound, &terms);
                }
                ConstraintSense::GreaterOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        let mut highs_model = pb.optimise(Sense::Minimise);
        highs_model.set_option("time_limit", time_limit.as_secs_f64());
        highs_model.set_option("output_flag", false);

        let solved = highs_model.solve();
        let elapsed = start.elapsed();

        match solved.status() {
            HighsModelStatus::Optimal => {
                let values = solved.get_solution().columns().to_vec();
                let objective_value = model
                    .objective
                    .coefficients
                    .iter()
                    .zip(&values)
                    .map(|(c, v)| c * v)
                    .sum();

                Ok(SolveOutcome {
                    status: SolveStatus::Optimal,
                    values,
                    objective_value,
                    elapsed,
                })
            }
            HighsModelStatus::Infeasible => Ok(SolveOutcome::infeasible(elapsed)),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Err(SolverError::ExecutionFailed("model is unbounded".to_string()))
            }
            // Any other terminal status after the deadline means the
            // search was cut off; an incumbent, if one exists, is not
            // retrievable through this interface, so report a timeout.
            _ if elapsed >= time_limit => Ok(SolveOutcome::timeout(elapsed)),
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
