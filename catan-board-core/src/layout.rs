//! Standard board generation
//!
//! Produces the classic 19-hex island with a sea ring and nine ports, as
//! server records so it loads through the same path as live data.

use crate::coords::{ring, spiral, HexCoordinate};
use crate::tile::{PortKind, TileType};
use crate::wire::{TileRecord, VertexRecord};
use rand::seq::SliceRandom;
use rand::Rng;

/// Land hexes lie within this distance of the centre
pub const LAND_RADIUS: u32 = 2;
/// The sea ring
pub const SEA_RADIUS: u32 = 3;

const TERRAIN: [(TileType, usize); 6] = [
    (TileType::Wood, 4),
    (TileType::Sheep, 4),
    (TileType::Wheat, 4),
    (TileType::Brick, 3),
    (TileType::Ore, 3),
    (TileType::Desert, 1),
];

const NUMBERS: [i32; 18] = [2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

const PORTS: [PortKind; 9] = [
    PortKind::Wildcard,
    PortKind::Wildcard,
    PortKind::Wildcard,
    PortKind::Wildcard,
    PortKind::Brick,
    PortKind::Wood,
    PortKind::Wheat,
    PortKind::Ore,
    PortKind::Sheep,
];

/// Generate a shuffled standard board
///
/// The desert gets no number and starts with the robber. Every second sea
/// hex carries a port facing its first land neighbour.
pub fn standard_layout<R: Rng>(rng: &mut R) -> Vec<TileRecord> {
    let mut terrain: Vec<TileType> = TERRAIN
        .iter()
        .flat_map(|&(tile_type, count)| std::iter::repeat(tile_type).take(count))
        .collect();
    terrain.shuffle(rng);

    let mut numbers = NUMBERS.to_vec();
    numbers.shuffle(rng);
    let mut numbers = numbers.into_iter();

    let mut ports = PORTS.to_vec();
    ports.shuffle(rng);
    let mut ports = ports.into_iter();

    let mut records = Vec::new();

    for (hex, tile_type) in spiral(LAND_RADIUS).into_iter().zip(terrain) {
        let number = if tile_type.is_producing() {
            numbers.next()
        } else {
            None
        };
        records.push(TileRecord {
            hex_coordinate: hex,
            tile_type: tile_type.as_str().to_string(),
            number,
            has_robber: tile_type == TileType::Desert,
            port_type: None,
            port_locations: None,
        });
    }

    for (i, hex) in ring(HexCoordinate::ORIGIN, SEA_RADIUS).into_iter().enumerate() {
        let port = if i % 2 == 0 { ports.next() } else { None };
        records.push(TileRecord {
            hex_coordinate: hex,
            tile_type: TileType::Sea.as_str().to_string(),
            number: None,
            has_robber: false,
            port_type: port.map(|kind| kind.as_str().to_string()),
            port_locations: port.map(|_| port_edge(hex).to_vec()),
        });
    }

    tracing::debug!(tiles = records.len(), "generated standard layout");
    records
}

fn is_land(hex: HexCoordinate) -> bool {
    hex.distance_to(HexCoordinate::ORIGIN) <= LAND_RADIUS as f64
}

/// The two vertices of the edge between a sea hex and its first land neighbour
fn port_edge(sea: HexCoordinate) -> [VertexRecord; 2] {
    let direction = (0..6).find(|&d| is_land(sea.neighbor(d))).unwrap_or(0);
    let land = sea.neighbor(direction);
    [
        VertexRecord::new(sea, land, sea.neighbor(direction + 5)),
        VertexRecord::new(sea, land, sea.neighbor(direction + 1)),
    ]
}
