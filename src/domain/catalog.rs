// Piece and plate catalogues: the immutable problem input

use serde::{Deserialize, Serialize};

use super::value_objects::{Priority, QualityLevel};

/// A rectangular item to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: u32,
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Required unit count. Unsigned, so negative demand is ruled out at
    /// the type level.
    pub demand: u32,
    pub priority: Priority,
}

impl Piece {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A raw-material rectangle available for purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateType {
    pub id: u32,
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Cost of one plate of this type.
    pub cost: f64,
    /// Stock limit: how many plates of this type may be used in total.
    pub max_available: u32,
    pub quality: QualityLevel,
}

impl PlateType {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Errors detected while validating a catalogue, before any generation runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("piece catalogue is empty")]
    NoPieces,

    #[error("plate catalogue is empty")]
    NoPlates,

    #[error("piece {id} has non-positive dimensions {width}x{height}")]
    BadPieceDimensions { id: u32, width: f64, height: f64 },

    #[error("plate type {id} has non-positive dimensions {width}x{height}")]
    BadPlateDimensions { id: u32, width: f64, height: f64 },

    #[error("duplicate piece id {0}")]
    DuplicatePieceId(u32),

    #[error("duplicate plate type id {0}")]
    DuplicatePlateId(u32),
}

/// The full problem input: every piece to produce and every plate type
/// available to cut from. Immutable once built; all downstream components
/// derive new data from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub pieces: Vec<Piece>,
    pub plate_types: Vec<PlateType>,
}

impl Catalog {
    pub fn new(pieces: Vec<Piece>, plate_types: Vec<PlateType>) -> Self {
        Self {
            pieces,
            plate_types,
        }
    }

    /// Reject configuration errors up front, before generation begins.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.pieces.is_empty() {
            return Err(CatalogError::NoPieces);
        }
        if self.plate_types.is_empty() {
            return Err(CatalogError::NoPlates);
        }

        let mut piece_ids = std::collections::BTreeSet::new();
        for piece in &self.pieces {
            // The negated comparison also rejects NaN dimensions.
            if !(piece.width > 0.0) || !(piece.height > 0.0) {
                return Err(CatalogError::BadPieceDimensions {
                    id: piece.id,
                    width: piece.width,
                    height: piece.height,
                });
            }
            if !piece_ids.insert(piece.id) {
                return Err(CatalogError::DuplicatePieceId(piece.id));
            }
        }

        let mut plate_ids = std::collections::BTreeSet::new();
        for plate in &self.plate_types {
            if !(plate.width > 0.0) || !(plate.height > 0.0) {
                return Err(CatalogError::BadPlateDimensions {
                    id: plate.id,
                    width: plate.width,
                    height: plate.height,
                });
            }
            if !plate_ids.insert(plate.id) {
                return Err(CatalogError::DuplicatePlateId(plate.id));
            }
        }

        Ok(())
    }

    pub fn piece(&self, id: u32) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn plate_type(&self, id: u32) -> Option<&PlateType> {
        self.plate_types.iter().find(|p| p.id == id)
    }
}
