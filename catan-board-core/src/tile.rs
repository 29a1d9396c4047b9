//! Tile definitions and robber-placement behaviour

use crate::coords::HexCoordinate;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Terrain of a board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileType {
    Brick,
    Wood,
    Ore,
    Wheat,
    Sheep,
    Desert,
    Sea,
}

impl TileType {
    pub const ALL: [TileType; 7] = [
        TileType::Brick,
        TileType::Wood,
        TileType::Ore,
        TileType::Wheat,
        TileType::Sheep,
        TileType::Desert,
        TileType::Sea,
    ];

    /// Wire name, as sent by the game server
    pub fn as_str(self) -> &'static str {
        match self {
            TileType::Brick => "BRICK",
            TileType::Wood => "WOOD",
            TileType::Ore => "ORE",
            TileType::Wheat => "WHEAT",
            TileType::Sheep => "SHEEP",
            TileType::Desert => "DESERT",
            TileType::Sea => "SEA",
        }
    }

    /// Whether tiles of this type carry a dice number
    pub fn is_producing(self) -> bool {
        !matches!(self, TileType::Desert | TileType::Sea)
    }
}

impl FromStr for TileType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| BoardError::UnknownTileType(s.to_string()))
    }
}

/// Trade rate offered by a port
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortKind {
    Brick,
    Wood,
    Wheat,
    Ore,
    Sheep,
    Wildcard,
}

impl PortKind {
    pub const ALL: [PortKind; 6] = [
        PortKind::Brick,
        PortKind::Wood,
        PortKind::Wheat,
        PortKind::Ore,
        PortKind::Sheep,
        PortKind::Wildcard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PortKind::Brick => "BRICK",
            PortKind::Wood => "WOOD",
            PortKind::Wheat => "WHEAT",
            PortKind::Ore => "ORE",
            PortKind::Sheep => "SHEEP",
            PortKind::Wildcard => "WILDCARD",
        }
    }

    /// Icon asset name shown inside the port badge
    pub fn icon(self) -> &'static str {
        match self {
            PortKind::Brick => "brick",
            PortKind::Wood => "wood",
            PortKind::Wheat => "wheat",
            PortKind::Ore => "ore",
            PortKind::Sheep => "sheep",
            PortKind::Wildcard => "wildcard",
        }
    }
}

impl FromStr for PortKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PortKind::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| BoardError::UnknownPortType(s.to_string()))
    }
}

/// A port on one edge of a tile
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub kind: PortKind,
    /// The two board vertices bounding the port's edge
    pub locations: [HexCoordinate; 2],
}

/// Pip count for a dice number: 6 - |n - 7|
pub fn num_dots(number: i32) -> i32 {
    6 - (number - 7).abs()
}

/// Outbound game actions triggered from the board
pub trait GameActions {
    fn send_move_robber_action(&mut self, coordinates: HexCoordinate);
}

/// Controls the UI's robber-placement mode
pub trait GameModeController {
    fn exit_place_robber_mode(&mut self);
}

/// One board cell
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    coordinates: HexCoordinate,
    tile_type: TileType,
    number: Option<i32>,
    num_dots: i32,
    has_robber: bool,
    highlighted: bool,
    port: Option<Port>,
}

impl Tile {
    pub fn new(
        coordinates: HexCoordinate,
        tile_type: TileType,
        number: Option<i32>,
        has_robber: bool,
        port: Option<Port>,
    ) -> Self {
        let mut tile = Self {
            coordinates,
            tile_type,
            number: None,
            num_dots: 0,
            has_robber,
            highlighted: false,
            port,
        };
        tile.set_number(number);
        tile
    }

    pub fn coordinates(&self) -> HexCoordinate {
        self.coordinates
    }

    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    pub fn number(&self) -> Option<i32> {
        self.number
    }

    /// Set the dice number, recomputing the pip count
    ///
    /// Numbers outside 2..=12 are kept as given but never get negative pips.
    pub fn set_number(&mut self, number: Option<i32>) {
        self.number = number;
        self.num_dots = number.map(num_dots).unwrap_or(0).max(0);
    }

    pub fn num_dots(&self) -> i32 {
        self.num_dots
    }

    /// 6 and 8 are the most likely rolls
    pub fn is_hot(&self) -> bool {
        matches!(self.number, Some(6) | Some(8))
    }

    pub fn has_robber(&self) -> bool {
        self.has_robber
    }

    pub fn set_robber(&mut self, has_robber: bool) {
        self.has_robber = has_robber;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn port(&self) -> Option<&Port> {
        self.port.as_ref()
    }

    /// Whether the robber may be placed here
    pub fn is_robbable(&self) -> bool {
        !(self.tile_type == TileType::Sea || self.has_robber)
    }

    /// Mark this tile as a robber-placement target
    pub fn highlight(&mut self) {
        self.highlighted = true;
    }

    /// Clear the highlight. Returns false if the tile was not highlighted.
    pub fn un_highlight(&mut self) -> bool {
        if !self.highlighted {
            return false;
        }
        self.highlighted = false;
        true
    }

    /// Handle a click on this tile's badge
    ///
    /// Only a highlighted tile reacts: it requests the robber move to its
    /// coordinates and leaves placement mode. Returns whether it reacted.
    pub fn click(
        &self,
        actions: &mut dyn GameActions,
        mode: &mut dyn GameModeController,
    ) -> bool {
        if !self.highlighted {
            return false;
        }
        actions.send_move_robber_action(self.coordinates);
        mode.exit_place_robber_mode();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        moves: Vec<HexCoordinate>,
    }

    impl GameActions for Recorder {
        fn send_move_robber_action(&mut self, coordinates: HexCoordinate) {
            self.moves.push(coordinates);
        }
    }

    #[derive(Default)]
    struct Mode {
        exits: usize,
    }

    impl GameModeController for Mode {
        fn exit_place_robber_mode(&mut self) {
            self.exits += 1;
        }
    }

    fn land(number: i32) -> Tile {
        Tile::new(HexCoordinate::new(1.0, -1.0, 0.0), TileType::Wheat, Some(number), false, None)
    }

    #[test]
    fn test_num_dots() {
        assert_eq!(num_dots(2), 1);
        assert_eq!(num_dots(12), 1);
        assert_eq!(num_dots(6), 5);
        assert_eq!(num_dots(8), 5);
        assert_eq!(num_dots(7), 6);
        assert_eq!(num_dots(9), 4);
    }

    #[test]
    fn test_set_number_recomputes_dots() {
        let mut tile = land(8);
        assert_eq!(tile.num_dots(), 5);
        assert!(tile.is_hot());
        tile.set_number(Some(9));
        assert_eq!(tile.num_dots(), 4);
        assert!(!tile.is_hot());
        tile.set_number(None);
        assert_eq!(tile.num_dots(), 0);
    }

    #[test]
    fn test_out_of_range_number_has_no_negative_dots() {
        let mut tile = land(0);
        assert_eq!(tile.number(), Some(0));
        assert_eq!(tile.num_dots(), 0);
        tile.set_number(Some(15));
        assert_eq!(tile.num_dots(), 0);
    }

    #[test]
    fn test_is_robbable() {
        for tile_type in TileType::ALL {
            for has_robber in [false, true] {
                let tile = Tile::new(HexCoordinate::ORIGIN, tile_type, None, has_robber, None);
                let expected = tile_type != TileType::Sea && !has_robber;
                assert_eq!(tile.is_robbable(), expected, "{tile_type:?} robber={has_robber}");
            }
        }
    }

    #[test]
    fn test_un_highlight_is_idempotent() {
        let mut tile = land(5);
        tile.highlight();
        assert!(tile.is_highlighted());
        assert!(tile.un_highlight());
        assert!(!tile.un_highlight());
        assert!(!tile.is_highlighted());
    }

    #[test]
    fn test_click_highlighted_dispatches_once() {
        let mut tile = land(5);
        tile.highlight();
        let mut actions = Recorder::default();
        let mut mode = Mode::default();
        assert!(tile.click(&mut actions, &mut mode));
        assert_eq!(actions.moves, vec![tile.coordinates()]);
        assert_eq!(mode.exits, 1);
    }

    #[test]
    fn test_click_plain_tile_does_nothing() {
        let tile = land(5);
        let mut actions = Recorder::default();
        let mut mode = Mode::default();
        assert!(!tile.click(&mut actions, &mut mode));
        assert!(actions.moves.is_empty());
        assert_eq!(mode.exits, 0);
    }

    #[test]
    fn test_type_names_round_trip() {
        for t in TileType::ALL {
            assert_eq!(t.as_str().parse::<TileType>().unwrap(), t);
        }
        for p in PortKind::ALL {
            assert_eq!(p.as_str().parse::<PortKind>().unwrap(), p);
        }
        assert!(matches!(
            "LAVA".parse::<TileType>(),
            Err(BoardError::UnknownTileType(s)) if s == "LAVA"
        ));
        assert!(matches!("NONE".parse::<PortKind>(), Err(BoardError::UnknownPortType(_))));
    }
}
