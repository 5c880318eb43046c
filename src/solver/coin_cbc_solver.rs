// COIN-OR CBC adapter: translates the domain model to good_lp's CBC backend.

use std::time::{Duration, Instant};

use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolution, SolverModel, Variable as GoodLpVariable,
};

use crate::domain::models::{MilpModel, SolveOutcome};
use crate::domain::solver_service::{MilpSolver, Result, SolverError};
use crate::domain::value_objects::{ConstraintSense, SolveStatus};

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MilpSolver for CoinCbcSolver {
    fn solve(&self, model: &MilpModel, time_limit: Duration) -> Result<SolveOutcome> {
        self.validate(model)?;

        let start = Instant::now();

        let mut vars = variables!();
        let mut lp_variables: Vec<GoodLpVariable> = Vec::with_capacity(model.num_variables());
        for def in &model.variables {
            let upper = def.upper_bound.unwrap_or(f64::INFINITY);
            lp_variables.push(vars.add(variable().integer().min(def.lower_bound).max(upper)));
        }

        let mut objective: Expression = 0.into();
        for (i, &coeff) in model.objective.coefficients.iter().enumerate() {
            if coeff != 0.0 {
                objective += coeff * lp_variables[i];
            }
        }

        let mut lp_model = vars.minimise(objective).using(coin_cbc::coin_cbc);
        lp_model.set_parameter("log", "0");
        lp_model.set_parameter("sec", &time_limit.as_secs().to_string());

        for constraint in &model.constraints {
            let mut lhs: Expression = 0.into();
            for (i, &coeff) in constraint.coefficients.iter().enumerate() {
                if coeff != 0.0 {
                    lhs += coeff * lp_variables[i];
                }
            }
            lp_model = match constraint.sense {
                ConstraintSense::LessOrEqual => lp_model.with(lhs.leq(constraint.bound)),
                ConstraintSense::Equal => lp_model.with(lhs.eq(constraint.bound)),
                ConstraintSense::GreaterOrEqual => lp_model.with(lhs.geq(constraint.bound)),
            };
        }

        let solved = lp_model.solve();
        let elapsed = start.elapsed();

        match solved {
            Ok(sol) => {
                let values: Vec<f64> = lp_variables.iter().map(|&v| sol.value(v)).collect();
                let objective_value = model
                    .objective
                    .coefficients
                    .iter()
                    .zip(&values)
                    .map(|(c, v)| c * v)
                    .sum();

                // CBC hands back a time-boxed incumbent through the same
                // path as a proven optimum; the wall clock is the only
                // signal left at this interface.
                let status = if elapsed < time_limit {
                    SolveStatus::Optimal
                } else {
                    SolveStatus::Feasible
                };

                Ok(SolveOutcome {
                    status,
                    values,
                    objective_value,
                    elapsed,
                })
            }
            Err(ResolutionError::Infeasible) => Ok(SolveOutcome::infeasible(elapsed)),
            Err(ResolutionError::Unbounded) => {
                Err(SolverError::ExecutionFailed("model is unbounded".to_string()))
            }
            Err(_) if elapsed >= time_limit => Ok(SolveOutcome::timeout(elapsed)),
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }
}
