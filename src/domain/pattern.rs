// Cutting patterns: the generator's output and the model's unit of decision

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One way of cutting a single plate of a given type into pieces.
///
/// Produced exclusively by the pattern generator and never mutated. Each
/// pattern later maps to exactly one non-negative integer decision
/// variable counting how many plates are cut this way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub plate_type_id: u32,
    /// Piece id to copies cut per plate. Never empty; every count >= 1.
    /// Ordered map so iteration, and therefore variable indexing, is
    /// deterministic.
    pub pieces: BTreeMap<u32, u32>,
    /// Plate area not consumed by any piece. Always >= 0.
    pub waste: f64,
}

impl Pattern {
    pub fn contains(&self, piece_id: u32) -> bool {
        self.pieces.contains_key(&piece_id)
    }

    /// Copies of the piece cut per plate, zero when the piece is absent.
    pub fn count_of(&self, piece_id: u32) -> u32 {
        self.pieces.get(&piece_id).copied().unwrap_or(0)
    }
}

/// A plate type whose enumeration stopped at the per-plate pattern cap.
/// Degrades solution quality but is not an error; surfaced in the final
/// plan as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationWarning {
    pub plate_type_id: u32,
    /// Patterns enumerated before the cap was applied.
    pub generated: usize,
    /// Patterns kept, in enumeration order.
    pub kept: usize,
}

impl fmt::Display for TruncationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "plate type {}: kept {} of {} generated patterns",
            self.plate_type_id, self.kept, self.generated
        )
    }
}

/// Output of pattern generation across all plate types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSet {
    pub patterns: Vec<Pattern>,
    pub truncated: Vec<TruncationWarning>,
}

impl PatternSet {
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
