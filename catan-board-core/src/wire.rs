//! Game-server tile records
//!
//! The server describes each tile with a JSON record; this module maps
//! those records onto `Tile` values.

use crate::coords::{find_center, HexCoordinate};
use crate::error::{BoardError, Result};
use crate::tile::{Port, PortKind, Tile, TileType};
use serde::{Deserialize, Serialize};

/// One tile as sent by the game server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub hex_coordinate: HexCoordinate,
    #[serde(rename = "type")]
    pub tile_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    #[serde(default)]
    pub has_robber: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_locations: Option<Vec<VertexRecord>>,
}

/// A board vertex, given as the three hexes that meet there
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub coord1: HexCoordinate,
    pub coord2: HexCoordinate,
    pub coord3: HexCoordinate,
}

impl VertexRecord {
    pub fn new(coord1: HexCoordinate, coord2: HexCoordinate, coord3: HexCoordinate) -> Self {
        Self { coord1, coord2, coord3 }
    }

    /// The vertex itself
    pub fn center(&self) -> HexCoordinate {
        find_center(self.coord1, self.coord2, self.coord3)
    }
}

/// Build a `Tile` from a server record
///
/// Unknown type names are rejected. A port needs exactly two vertices.
pub fn parse_tile(record: &TileRecord) -> Result<Tile> {
    let tile_type: TileType = record.tile_type.parse()?;
    let port = record.port_type.as_deref().map(|kind| parse_port(kind, record)).transpose()?;

    Ok(Tile::new(
        record.hex_coordinate,
        tile_type,
        record.number,
        record.has_robber,
        port,
    ))
}

fn parse_port(kind: &str, record: &TileRecord) -> Result<Port> {
    let kind: PortKind = kind.parse()?;
    let vertices = record
        .port_locations
        .as_deref()
        .ok_or(BoardError::MissingPortLocations)?;

    match vertices {
        [first, second] => Ok(Port {
            kind,
            locations: [first.center(), second.center()],
        }),
        other => Err(BoardError::PortLocationCount(other.len())),
    }
}

/// Parse a JSON array of tile records
pub fn parse_records(json: &str) -> Result<Vec<TileRecord>> {
    Ok(serde_json::from_str(json)?)
}
