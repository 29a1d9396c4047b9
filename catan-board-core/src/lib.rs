//! Catan board core - geometry and tile model
//!
//! This crate provides the board-side logic of a Catan-style map view:
//! - Hex geometry (cube coordinates projected onto the screen)
//! - Tile model with robber and port state
//! - Parsing of game-server tile records
//! - Pure tile → visual state rendering at any pan/zoom
//! - Board controller for robber placement
//! - Seeded standard board generation

pub mod board;
pub mod config;
pub mod coords;
pub mod error;
pub mod layout;
pub mod render;
pub mod tile;
pub mod wire;

// Re-exports for convenient access
pub use board::Board;
pub use config::{RenderConfig, Viewport};
pub use coords::{find_center, hex_to_cartesian, midpoint, Cartesian, HexCoordinate};
pub use error::BoardError;
pub use layout::standard_layout;
pub use render::{BadgeContent, BadgeLayout, NumberFace, PipRow, PortOverlay, VisualState};
pub use tile::{num_dots, GameActions, GameModeController, Port, PortKind, Tile, TileType};
pub use wire::{parse_records, parse_tile, TileRecord, VertexRecord};
