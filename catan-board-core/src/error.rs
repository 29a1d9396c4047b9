//! Error types for board loading and manipulation

use crate::coords::HexCoordinate;

/// Errors raised while building or mutating a board
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("Unknown tile type: {0}")]
    UnknownTileType(String),

    #[error("Unknown port type: {0}")]
    UnknownPortType(String),

    #[error("Port record has no portLocations")]
    MissingPortLocations,

    #[error("Port needs exactly 2 locations, got {0}")]
    PortLocationCount(usize),

    #[error("Two tiles share coordinate {0}")]
    DuplicateCoordinate(HexCoordinate),

    #[error("No tile at {0}")]
    NoSuchTile(HexCoordinate),

    #[error("Malformed board data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
