// Translates a pattern list into a complete integer program.

use std::collections::BTreeMap;

use crate::domain::catalog::{Catalog, PlateType};
use crate::domain::models::{Constraint, MilpModel, Objective, Variable};
use crate::domain::pattern::Pattern;

use super::planner::PlanError;

/// Objective weight on material cost. The dominant criterion.
pub const COST_WEIGHT: f64 = 100.0;
/// Objective weight on total waste area. A tie-breaker.
pub const WASTE_WEIGHT: f64 = 1.0;
/// Objective weight on the number of plates used.
pub const PLATE_COUNT_WEIGHT: f64 = 10.0;

/// Production ceiling relative to demand: no piece may be produced beyond
/// 110% of its demand.
pub const OVERPRODUCTION_FACTOR: f64 = 1.10;

/// Minimum share of total plate usage required from every plate type with
/// positive availability. Spreads usage across types; can force a plan
/// that costs more than the unconstrained optimum.
pub const MIN_TYPE_SHARE: f64 = 0.05;

/// Builds the integer program for a catalogue and its generated patterns.
///
/// One non-negative integer variable per pattern; a weighted
/// cost/waste/plate-count objective; and four explicit constraint
/// families (demand, availability, overproduction, diversification).
/// Quality compatibility needs no constraint: incompatible piece/plate
/// pairs never produced a pattern in the first place.
pub struct ModelBuilder<'a> {
    catalog: &'a Catalog,
    patterns: &'a [Pattern],
}

impl<'a> ModelBuilder<'a> {
    pub fn new(catalog: &'a Catalog, patterns: &'a [Pattern]) -> Self {
        Self { catalog, patterns }
    }

    pub fn build(&self) -> Result<MilpModel, PlanError> {
        if self.patterns.is_empty() {
            return Err(PlanError::NoFeasiblePatterns);
        }

        let plates_by_id: BTreeMap<u32, &PlateType> = self
            .catalog
            .plate_types
            .iter()
            .map(|p| (p.id, p))
            .collect();

        let variables: Vec<Variable> = (0..self.patterns.len())
            .map(|j| Variable::integer(format!("x_{j}")))
            .collect();

        let mut coefficients = Vec::with_capacity(self.patterns.len());
        for pattern in self.patterns {
            let plate = plates_by_id
                .get(&pattern.plate_type_id)
                .ok_or(PlanError::UnknownPlateType(pattern.plate_type_id))?;
            coefficients.push(
                COST_WEIGHT * plate.cost + WASTE_WEIGHT * pattern.waste + PLATE_COUNT_WEIGHT,
            );
        }
        let objective = Objective::minimize(coefficients);

        let mut constraints = Vec::new();

        // Demand satisfaction: every piece produced at least demand times.
        for piece in &self.catalog.pieces {
            constraints.push(Constraint::at_least(
                format!("demand_{}", piece.id),
                self.production_row(piece.id),
                f64::from(piece.demand),
            ));
        }

        // Plate availability: usage of each type within its stock limit.
        for plate in &self.catalog.plate_types {
            constraints.push(Constraint::at_most(
                format!("stock_{}", plate.id),
                self.plate_usage_row(plate.id),
                f64::from(plate.max_available),
            ));
        }

        // Overproduction cap: same production row, bounded from above.
        for piece in &self.catalog.pieces {
            constraints.push(Constraint::at_most(
                format!("overproduction_{}", piece.id),
                self.production_row(piece.id),
                OVERPRODUCTION_FACTOR * f64::from(piece.demand),
            ));
        }

        // Diversification: plates of each available type must carry at
        // least MIN_TYPE_SHARE of the total plate count. Rewritten as
        // (1 - s)·x_type - s·x_other >= 0.
        for plate in &self.catalog.plate_types {
            if plate.max_available == 0 {
                continue;
            }
            let coefficients = self
                .patterns
                .iter()
                .map(|p| {
                    if p.plate_type_id == plate.id {
                        1.0 - MIN_TYPE_SHARE
                    } else {
                        -MIN_TYPE_SHARE
                    }
                })
                .collect();
            constraints.push(Constraint::at_least(
                format!("balance_{}", plate.id),
                coefficients,
                0.0,
            ));
        }

        Ok(MilpModel {
            name: "cutting_stock_2d".to_string(),
            variables,
            objective,
            constraints,
        })
    }

    /// Pieces of `piece_id` produced per unit of each pattern variable.
    fn production_row(&self, piece_id: u32) -> Vec<f64> {
        self.patterns
            .iter()
            .map(|p| f64::from(p.count_of(piece_id)))
            .collect()
    }

    /// Plates of `plate_type_id` consumed per unit of each pattern variable.
    fn plate_usage_row(&self, plate_type_id: u32) -> Vec<f64> {
        self.patterns
            .iter()
            .map(|p| if p.plate_type_id == plate_type_id { 1.0 } else { 0.0 })
            .collect()
    }
}
