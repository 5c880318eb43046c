// Converts a solver assignment back into a production plan report.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::domain::catalog::{Catalog, PlateType};
use crate::domain::models::SolveOutcome;
use crate::domain::pattern::{Pattern, TruncationWarning};
use crate::domain::value_objects::SolveStatus;

use super::planner::PlanError;

/// Integer rounding tolerance: a pattern counts as used when its variable
/// value exceeds this threshold.
const USE_THRESHOLD: f64 = 0.5;

/// One pattern actually applied in the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternUsage {
    /// Index of the pattern in the generated list (stable variable index).
    pub pattern_index: usize,
    pub plate_type_id: u32,
    pub plate_type: String,
    pub plate_cost: f64,
    /// How many plates are cut according to this pattern.
    pub count: u32,
    /// Piece id to copies per plate.
    pub pieces: BTreeMap<u32, u32>,
    pub waste_per_plate: f64,
}

/// The production plan derived from a solved model.
///
/// Only ever built from an outcome that carries an incumbent; its status
/// is `Optimal` or `Feasible`, never anything else. A time-boxed plan is
/// clearly labeled feasible, not optimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuttingPlan {
    pub status: SolveStatus,
    pub objective_value: f64,
    pub total_cost: f64,
    pub total_waste: f64,
    pub total_plates: u32,
    /// Plates used per plate type id, including zero entries.
    pub plates_by_type: BTreeMap<u32, u32>,
    /// Units produced per piece id, including zero entries.
    pub pieces_produced: BTreeMap<u32, u32>,
    pub used_patterns: Vec<PatternUsage>,
    /// Wall-clock solve time reported by the solver, not measured here.
    pub solve_time: Duration,
    /// Generation truncations carried through to the consumer.
    pub warnings: Vec<TruncationWarning>,
}

/// Builds the plan report from final variable values.
pub struct SolutionExtractor<'a> {
    catalog: &'a Catalog,
    patterns: &'a [Pattern],
}

impl<'a> SolutionExtractor<'a> {
    pub fn new(catalog: &'a Catalog, patterns: &'a [Pattern]) -> Self {
        Self { catalog, patterns }
    }

    /// Aggregate the assignment into the plan report.
    ///
    /// The caller guarantees the outcome carries an incumbent; the
    /// planner returns typed infeasible/timeout errors before this runs.
    pub fn extract(
        &self,
        outcome: &SolveOutcome,
        warnings: Vec<TruncationWarning>,
    ) -> Result<CuttingPlan, PlanError> {
        debug_assert!(outcome.has_incumbent());

        let plates_by_id: BTreeMap<u32, &PlateType> = self
            .catalog
            .plate_types
            .iter()
            .map(|p| (p.id, p))
            .collect();

        let mut used_patterns = Vec::new();
        let mut total_cost = 0.0;
        let mut total_waste = 0.0;
        let mut total_plates = 0u32;
        let mut plates_by_type: BTreeMap<u32, u32> = self
            .catalog
            .plate_types
            .iter()
            .map(|p| (p.id, 0))
            .collect();
        let mut pieces_produced: BTreeMap<u32, u32> =
            self.catalog.pieces.iter().map(|p| (p.id, 0)).collect();

        for (j, pattern) in self.patterns.iter().enumerate() {
            let value = outcome.values.get(j).copied().unwrap_or(0.0);
            if value <= USE_THRESHOLD {
                continue;
            }
            let count = value.round() as u32;
            let plate = plates_by_id
                .get(&pattern.plate_type_id)
                .ok_or(PlanError::UnknownPlateType(pattern.plate_type_id))?;

            used_patterns.push(PatternUsage {
                pattern_index: j,
                plate_type_id: plate.id,
                plate_type: plate.name.clone(),
                plate_cost: plate.cost,
                count,
                pieces: pattern.pieces.clone(),
                waste_per_plate: pattern.waste,
            });

            total_cost += plate.cost * f64::from(count);
            total_waste += pattern.waste * f64::from(count);
            total_plates += count;
            *plates_by_type.entry(plate.id).or_insert(0) += count;

            for (&piece_id, &per_plate) in &pattern.pieces {
                *pieces_produced.entry(piece_id).or_insert(0) += per_plate * count;
            }
        }

        Ok(CuttingPlan {
            status: outcome.status,
            objective_value: outcome.objective_value,
            total_cost,
            total_waste,
            total_plates,
            plates_by_type,
            pieces_produced,
            used_patterns,
            solve_time: outcome.elapsed,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Piece, PlateType};
    use crate::domain::value_objects::{Priority, QualityLevel};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Piece {
                    id: 1,
                    name: "panel".to_string(),
                    width: 80.0,
                    height: 60.0,
                    demand: 5,
                    priority: Priority::Medium,
                },
                Piece {
                    id: 2,
                    name: "shelf".to_string(),
                    width: 30.0,
                    height: 20.0,
                    demand: 8,
                    priority: Priority::Low,
                },
            ],
            vec![
                PlateType {
                    id: 1,
                    name: "standard".to_string(),
                    width: 200.0,
                    height: 100.0,
                    cost: 50.0,
                    max_available: 10,
                    quality: QualityLevel::Standard,
                },
                PlateType {
                    id: 2,
                    name: "economy".to_string(),
                    width: 100.0,
                    height: 100.0,
                    cost: 20.0,
                    max_available: 4,
                    quality: QualityLevel::Economy,
                },
            ],
        )
    }

    fn patterns() -> Vec<Pattern> {
        vec![
            Pattern {
                plate_type_id: 1,
                pieces: BTreeMap::from([(1, 3)]),
                waste: 5600.0,
            },
            Pattern {
                plate_type_id: 1,
                pieces: BTreeMap::from([(1, 2), (2, 4)]),
                waste: 8000.0,
            },
            Pattern {
                plate_type_id: 2,
                pieces: BTreeMap::from([(2, 4)]),
                waste: 7600.0,
            },
        ]
    }

    fn outcome(status: SolveStatus, values: Vec<f64>) -> SolveOutcome {
        SolveOutcome {
            status,
            values,
            objective_value: 12_345.0,
            elapsed: Duration::from_millis(750),
        }
    }

    #[test]
    fn aggregates_used_patterns() {
        let catalog = catalog();
        let patterns = patterns();
        let extractor = SolutionExtractor::new(&catalog, &patterns);
        let plan = extractor
            .extract(&outcome(SolveStatus::Optimal, vec![1.0, 1.0, 1.0]), vec![])
            .unwrap();

        assert_eq!(plan.status, SolveStatus::Optimal);
        assert_eq!(plan.objective_value, 12_345.0);
        assert_eq!(plan.total_plates, 3);
        assert!((plan.total_cost - 120.0).abs() < 1e-9);
        assert!((plan.total_waste - 21_200.0).abs() < 1e-9);
        assert_eq!(plan.plates_by_type, BTreeMap::from([(1, 2), (2, 1)]));
        assert_eq!(plan.pieces_produced, BTreeMap::from([(1, 5), (2, 8)]));
        assert_eq!(plan.solve_time, Duration::from_millis(750));
        assert_eq!(plan.used_patterns.len(), 3);

        let first = &plan.used_patterns[0];
        assert_eq!(first.pattern_index, 0);
        assert_eq!(first.plate_type, "standard");
        assert_eq!(first.plate_cost, 50.0);
        assert_eq!(first.count, 1);
        assert_eq!(first.waste_per_plate, 5600.0);
    }

    #[test]
    fn production_stays_within_demand_window_and_stock() {
        let catalog = catalog();
        let patterns = patterns();
        let plan = SolutionExtractor::new(&catalog, &patterns)
            .extract(&outcome(SolveStatus::Optimal, vec![1.0, 1.0, 1.0]), vec![])
            .unwrap();

        for piece in &catalog.pieces {
            let produced = plan.pieces_produced[&piece.id];
            assert!(produced >= piece.demand);
            assert!(f64::from(produced) <= 1.10 * f64::from(piece.demand));
        }
        for plate in &catalog.plate_types {
            assert!(plan.plates_by_type[&plate.id] <= plate.max_available);
        }
    }

    #[test]
    fn values_at_or_below_threshold_are_unused() {
        let catalog = catalog();
        let patterns = patterns();
        let plan = SolutionExtractor::new(&catalog, &patterns)
            .extract(&outcome(SolveStatus::Optimal, vec![0.4, 2.2, 0.0]), vec![])
            .unwrap();

        assert_eq!(plan.used_patterns.len(), 1);
        assert_eq!(plan.used_patterns[0].pattern_index, 1);
        // 2.2 rounds to 2 plates of the combined pattern.
        assert_eq!(plan.used_patterns[0].count, 2);
        assert_eq!(plan.total_plates, 2);
        assert_eq!(plan.pieces_produced[&1], 4);
        assert_eq!(plan.pieces_produced[&2], 8);
    }

    #[test]
    fn unused_types_and_pieces_keep_zero_entries() {
        let catalog = catalog();
        let patterns = patterns();
        let plan = SolutionExtractor::new(&catalog, &patterns)
            .extract(&outcome(SolveStatus::Optimal, vec![2.0, 0.0, 0.0]), vec![])
            .unwrap();

        assert_eq!(plan.plates_by_type[&2], 0);
        assert_eq!(plan.pieces_produced[&2], 0);
    }

    /// A timeout with an incumbent arrives as a feasible outcome and the
    /// plan is labeled feasible, never optimal.
    #[test]
    fn time_boxed_incumbent_stays_labeled_feasible() {
        let catalog = catalog();
        let patterns = patterns();
        let plan = SolutionExtractor::new(&catalog, &patterns)
            .extract(&outcome(SolveStatus::Feasible, vec![1.0, 1.0, 1.0]), vec![])
            .unwrap();

        assert_eq!(plan.status, SolveStatus::Feasible);
        assert_ne!(plan.status, SolveStatus::Optimal);
    }

    #[test]
    fn truncation_warnings_are_carried_through() {
        let catalog = catalog();
        let patterns = patterns();
        let warnings = vec![TruncationWarning {
            plate_type_id: 1,
            generated: 1500,
            kept: 1000,
        }];
        let plan = SolutionExtractor::new(&catalog, &patterns)
            .extract(
                &outcome(SolveStatus::Optimal, vec![1.0, 1.0, 1.0]),
                warnings.clone(),
            )
            .unwrap();

        assert_eq!(plan.warnings, warnings);
    }
}
