//! Board controller
//!
//! Owns every tile of a loaded board and drives robber placement.

use crate::config::{RenderConfig, Viewport};
use crate::coords::{HexCoordinate, HexKey};
use crate::error::{BoardError, Result};
use crate::render::VisualState;
use crate::tile::{GameActions, GameModeController, Tile};
use crate::wire::{parse_records, parse_tile, TileRecord};
use rustc_hash::FxHashMap;
use std::path::Path;

/// A loaded board
#[derive(Clone, Debug, Default)]
pub struct Board {
    tiles: Vec<Tile>,
    index: FxHashMap<HexKey, usize>,
    placing_robber: bool,
}

impl Board {
    /// Build from server records; coordinates must be unique
    pub fn from_records(records: &[TileRecord]) -> Result<Self> {
        let mut board = Board::default();
        for record in records {
            let tile = parse_tile(record)?;
            let coordinates = tile.coordinates();
            if board.index.insert(coordinates.key(), board.tiles.len()).is_some() {
                return Err(BoardError::DuplicateCoordinate(coordinates));
            }
            board.tiles.push(tile);
        }
        tracing::debug!(tiles = board.tiles.len(), "board built");
        Ok(board)
    }

    /// Build from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_records(&parse_records(json)?)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let board = Self::from_json(&content)?;
        tracing::info!("Loaded {} tiles from {}", board.len(), path.display());
        Ok(board)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in load order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, at: HexCoordinate) -> Option<&Tile> {
        self.index.get(&at.key()).map(|&i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, at: HexCoordinate) -> Option<&mut Tile> {
        let i = *self.index.get(&at.key())?;
        Some(&mut self.tiles[i])
    }

    /// Tile currently holding the robber
    pub fn robber_location(&self) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.has_robber())
    }

    /// Tiles the robber may move to
    pub fn robbable_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.is_robbable())
    }

    pub fn in_place_robber_mode(&self) -> bool {
        self.placing_robber
    }

    /// Highlight every robbable tile. Returns how many were highlighted.
    pub fn enter_place_robber_mode(&mut self) -> usize {
        self.placing_robber = true;
        let mut count = 0;
        for tile in self.tiles.iter_mut().filter(|t| t.is_robbable()) {
            tile.highlight();
            count += 1;
        }
        tracing::debug!(targets = count, "entered robber placement");
        count
    }

    /// Route a click on the badge at `at`
    ///
    /// Returns whether a robber move was dispatched.
    pub fn click(&mut self, at: HexCoordinate, actions: &mut dyn GameActions) -> bool {
        let Some(&i) = self.index.get(&at.key()) else {
            return false;
        };

        let mut exit = ExitRequest::default();
        let dispatched = self.tiles[i].click(actions, &mut exit);
        if exit.requested {
            self.exit_place_robber_mode();
        }
        dispatched
    }

    /// Apply a "robber moved" game event
    pub fn move_robber(&mut self, to: HexCoordinate) -> Result<()> {
        let target = *self
            .index
            .get(&to.key())
            .ok_or(BoardError::NoSuchTile(to))?;

        for tile in &mut self.tiles {
            tile.set_robber(false);
        }
        self.tiles[target].set_robber(true);
        if self.placing_robber {
            self.sync_highlights();
        }
        tracing::debug!("robber moved to {}", to);
        Ok(())
    }

    /// Highlight exactly the tiles that are currently robbable
    fn sync_highlights(&mut self) {
        for tile in &mut self.tiles {
            if tile.is_robbable() {
                tile.highlight();
            } else {
                tile.un_highlight();
            }
        }
    }

    /// Visual state of every tile, in load order
    pub fn render(&self, viewport: Viewport) -> Vec<VisualState> {
        self.render_with(viewport, &RenderConfig::default())
    }

    pub fn render_with(&self, viewport: Viewport, config: &RenderConfig) -> Vec<VisualState> {
        self.tiles
            .iter()
            .map(|t| t.render_with(viewport, config))
            .collect()
    }
}

impl GameModeController for Board {
    fn exit_place_robber_mode(&mut self) {
        self.placing_robber = false;
        let mut cleared = 0;
        for tile in &mut self.tiles {
            if tile.un_highlight() {
                cleared += 1;
            }
        }
        tracing::debug!(cleared, "left robber placement");
    }
}

/// Records a tile's request to leave placement mode while the board is borrowed
#[derive(Default)]
struct ExitRequest {
    requested: bool,
}

impl GameModeController for ExitRequest {
    fn exit_place_robber_mode(&mut self) {
        self.requested = true;
    }
}
