// Combinatorial enumeration of feasible cutting patterns.
//
// For every plate type this produces every single-piece pattern and every
// two-piece side-by-side pattern that is geometrically feasible and
// compatible with the plate's quality tier, pruned by fixed heuristics:
// a waste ceiling on single-piece patterns, a small trial range on pair
// counts, and a per-plate cap on the total emitted patterns.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::domain::catalog::{Catalog, Piece, PlateType};
use crate::domain::pattern::{Pattern, PatternSet, TruncationWarning};

/// Waste ceiling for single-piece patterns: a pattern wasting at least
/// this fraction of the plate is discarded during enumeration. Fixed by
/// design, not configuration; it prunes the search space at the price of
/// silently excluding some feasible but wasteful layouts. Two-piece
/// patterns are exempt from it.
pub const MAX_WASTE_RATIO: f64 = 0.7;

/// Grid-count ceiling for a single-piece pattern, as a multiple of the
/// piece's demand. Cutting more than twice the demand from one plate is
/// never a useful candidate.
const DEMAND_CAP_FACTOR: u32 = 2;

/// Trial-count ceiling per piece in a two-piece pattern. The pair search
/// is deliberately not exhaustive.
const PAIR_COUNT_CAP: u32 = 4;

/// Enumerates cutting patterns for a catalogue.
pub struct PatternGenerator<'a> {
    catalog: &'a Catalog,
    allow_rotation: bool,
    max_patterns_per_plate: usize,
}

impl<'a> PatternGenerator<'a> {
    pub fn new(catalog: &'a Catalog, allow_rotation: bool, max_patterns_per_plate: usize) -> Self {
        Self {
            catalog,
            allow_rotation,
            max_patterns_per_plate,
        }
    }

    /// Generate the full pattern list across all plate types.
    ///
    /// Output order is deterministic for a fixed catalogue and
    /// configuration: plate types in catalogue order, patterns in
    /// enumeration order within each. When a plate type's enumeration
    /// exceeds the per-plate cap, the first-generated patterns are kept
    /// and the truncation is recorded as a warning.
    pub fn generate(&self) -> PatternSet {
        let mut patterns = Vec::new();
        let mut truncated = Vec::new();

        for plate in &self.catalog.plate_types {
            let mut plate_patterns = self.patterns_for_plate(plate);
            let generated = plate_patterns.len();

            if generated > self.max_patterns_per_plate {
                plate_patterns.truncate(self.max_patterns_per_plate);
                let warning = TruncationWarning {
                    plate_type_id: plate.id,
                    generated,
                    kept: plate_patterns.len(),
                };
                warn!(plate_type = plate.id, %warning, "pattern enumeration truncated");
                truncated.push(warning);
            }

            debug!(
                plate_type = plate.id,
                name = %plate.name,
                patterns = plate_patterns.len(),
                "patterns generated for plate type"
            );
            patterns.extend(plate_patterns);
        }

        PatternSet {
            patterns,
            truncated,
        }
    }

    fn patterns_for_plate(&self, plate: &PlateType) -> Vec<Pattern> {
        let mut out = Vec::new();

        for piece in &self.catalog.pieces {
            if !piece.priority.compatible_with(plate.quality) {
                continue;
            }
            self.single_piece_patterns(plate, piece, &mut out);
        }

        if self.catalog.pieces.len() > 1 {
            for (i, first) in self.catalog.pieces.iter().enumerate() {
                for second in &self.catalog.pieces[i + 1..] {
                    if !first.priority.compatible_with(plate.quality)
                        || !second.priority.compatible_with(plate.quality)
                    {
                        continue;
                    }
                    self.pair_patterns(plate, first, second, &mut out);
                }
            }
        }

        out
    }

    /// Grid patterns of a single piece: for each admissible orientation,
    /// one pattern per count from 1 up to the grid capacity (capped at
    /// twice the demand), subject to the waste ceiling.
    fn single_piece_patterns(&self, plate: &PlateType, piece: &Piece, out: &mut Vec<Pattern>) {
        let plate_area = plate.area();

        for (w, h) in self.single_orientations(piece) {
            if w > plate.width || h > plate.height {
                continue;
            }

            let nx = (plate.width / w).floor() as u64;
            let ny = (plate.height / h).floor() as u64;
            let demand_cap = u64::from(piece.demand) * u64::from(DEMAND_CAP_FACTOR);
            let max_count = (nx * ny).min(demand_cap) as u32;

            for n in 1..=max_count {
                let waste = plate_area - f64::from(n) * w * h;
                if waste / plate_area < MAX_WASTE_RATIO {
                    out.push(Pattern {
                        plate_type_id: plate.id,
                        pieces: BTreeMap::from([(piece.id, n)]),
                        waste,
                    });
                }
            }
        }
    }

    /// Two-piece patterns under a side-by-side horizontal layout: the
    /// rows of both pieces sit next to each other, so the combined width
    /// is the sum and the height the maximum. Trial counts are capped,
    /// every orientation combination is tried, and no waste filter is
    /// applied on this path.
    fn pair_patterns(
        &self,
        plate: &PlateType,
        first: &Piece,
        second: &Piece,
        out: &mut Vec<Pattern>,
    ) {
        let plate_area = plate.area();
        let first_max = PAIR_COUNT_CAP.min(first.demand);
        let second_max = PAIR_COUNT_CAP.min(second.demand);
        let first_orientations = self.pair_orientations(first);
        let second_orientations = self.pair_orientations(second);

        for n1 in 1..=first_max {
            for n2 in 1..=second_max {
                for &(w1, h1) in &first_orientations {
                    for &(w2, h2) in &second_orientations {
                        let total_w = f64::from(n1) * w1 + f64::from(n2) * w2;
                        let total_h = h1.max(h2);

                        if total_w <= plate.width && total_h <= plate.height {
                            let used = f64::from(n1) * w1 * h1 + f64::from(n2) * w2 * h2;
                            out.push(Pattern {
                                plate_type_id: plate.id,
                                pieces: BTreeMap::from([(first.id, n1), (second.id, n2)]),
                                waste: plate_area - used,
                            });
                        }
                    }
                }
            }
        }
    }

    /// Orientations tried for single-piece patterns: the natural one,
    /// plus the rotated one when rotation is enabled and the piece is not
    /// square.
    fn single_orientations(&self, piece: &Piece) -> Vec<(f64, f64)> {
        let mut orientations = vec![(piece.width, piece.height)];
        if self.allow_rotation && !piece.is_square() {
            orientations.push((piece.height, piece.width));
        }
        orientations
    }

    /// Orientations tried per piece in a two-piece pattern. Unlike the
    /// single-piece path there is no square check, so a square piece is
    /// enumerated in both (identical) orientations.
    fn pair_orientations(&self, piece: &Piece) -> Vec<(f64, f64)> {
        let mut orientations = vec![(piece.width, piece.height)];
        if self.allow_rotation {
            orientations.push((piece.height, piece.width));
        }
        orientations
    }
}
