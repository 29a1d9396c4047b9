//! Hex board geometry with cube coordinates
//!
//! Flat-top layout: the three cube axes project onto unit vectors 120° apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Tolerance used when checking the cube invariant
pub const CUBE_EPSILON: f64 = 1e-9;

/// Screen-space unit vector of the x axis
pub const X_UNIT_VEC: Cartesian = Cartesian::new(0.866_025_403_784_438_6, 0.5);
/// Screen-space unit vector of the y axis
pub const Y_UNIT_VEC: Cartesian = Cartesian::new(0.0, -1.0);
/// Screen-space unit vector of the z axis
pub const Z_UNIT_VEC: Cartesian = Cartesian::new(-0.866_025_403_784_438_6, 0.5);

/// Cube hex coordinates, x + y + z = 0
///
/// Components are reals: tile centres are integral, board vertices are thirds.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct HexCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl HexCoordinate {
    pub const ORIGIN: HexCoordinate = HexCoordinate::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Check the cube invariant x + y + z = 0
    pub fn is_cube(&self) -> bool {
        (self.x + self.y + self.z).abs() < CUBE_EPSILON
    }

    /// Distance between two hexes, in steps
    pub fn distance_to(&self, other: HexCoordinate) -> f64 {
        let d = *self - other;
        (d.x.abs() + d.y.abs() + d.z.abs()) / 2.0
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: usize) -> HexCoordinate {
        *self + DIRECTIONS[direction % 6]
    }

    /// Hashable identity of this coordinate (exact bit pattern, -0.0 folded into 0.0)
    pub fn key(&self) -> HexKey {
        HexKey([
            (self.x + 0.0).to_bits(),
            (self.y + 0.0).to_bits(),
            (self.z + 0.0).to_bits(),
        ])
    }
}

impl fmt::Display for HexCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for HexCoordinate {
    type Output = HexCoordinate;

    fn add(self, rhs: HexCoordinate) -> HexCoordinate {
        HexCoordinate::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for HexCoordinate {
    type Output = HexCoordinate;

    fn sub(self, rhs: HexCoordinate) -> HexCoordinate {
        HexCoordinate::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for HexCoordinate {
    type Output = HexCoordinate;

    fn mul(self, rhs: f64) -> HexCoordinate {
        HexCoordinate::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Exact hash key for a `HexCoordinate`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexKey([u64; 3]);

/// A point in board space (before pan/zoom) or screen space (after)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
}

impl Cartesian {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction vectors in cube coordinates (dx, dy, dz), in ring order
pub const DIRECTIONS: [HexCoordinate; 6] = [
    HexCoordinate::new(1.0, 0.0, -1.0),
    HexCoordinate::new(1.0, -1.0, 0.0),
    HexCoordinate::new(0.0, -1.0, 1.0),
    HexCoordinate::new(-1.0, 0.0, 1.0),
    HexCoordinate::new(-1.0, 1.0, 0.0),
    HexCoordinate::new(0.0, 1.0, -1.0),
];

/// Project a cube coordinate onto the plane
///
/// Linear in its argument; the cube invariant is not checked.
pub fn hex_to_cartesian(h: HexCoordinate) -> Cartesian {
    Cartesian::new(
        X_UNIT_VEC.x * h.x + Y_UNIT_VEC.x * h.y + Z_UNIT_VEC.x * h.z,
        X_UNIT_VEC.y * h.x + Y_UNIT_VEC.y * h.y + Z_UNIT_VEC.y * h.z,
    )
}

/// Component-wise mean of three coordinates
///
/// The three hexes meeting at a corner average to that corner.
pub fn find_center(c1: HexCoordinate, c2: HexCoordinate, c3: HexCoordinate) -> HexCoordinate {
    HexCoordinate::new(
        (c1.x + c2.x + c3.x) / 3.0,
        (c1.y + c2.y + c3.y) / 3.0,
        (c1.z + c2.z + c3.z) / 3.0,
    )
}

/// Component-wise mean of two coordinates
pub fn midpoint(a: HexCoordinate, b: HexCoordinate) -> HexCoordinate {
    HexCoordinate::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}

/// Hexes at exactly `radius` steps from `center`, walked in direction order
pub fn ring(center: HexCoordinate, radius: u32) -> Vec<HexCoordinate> {
    if radius == 0 {
        return vec![center];
    }
    let mut hexes = Vec::with_capacity(6 * radius as usize);
    let mut current = center + DIRECTIONS[4] * radius as f64;
    for direction in 0..6 {
        for _ in 0..radius {
            hexes.push(current);
            current = current.neighbor(direction);
        }
    }
    hexes
}

/// All hexes within `radius` of the origin, centre first then ring by ring
pub fn spiral(radius: u32) -> Vec<HexCoordinate> {
    (0..=radius)
        .flat_map(|r| ring(HexCoordinate::ORIGIN, r))
        .collect()
}
