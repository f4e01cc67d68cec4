use crate::lattice::{Coordinate, Triangle};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The 6 corners of a [Hexagon], going around the center
#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash)]
pub enum HexCorner {
    C0,
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl HexCorner {
    /// Offset from the hexagon's center to this corner. Every offset sums to
    /// zero, so corners share the center's component sum.
    pub fn to_vector(self) -> Coordinate {
        let (x, y, z) =
            (Coordinate::UNIT_X, Coordinate::UNIT_Y, Coordinate::UNIT_Z);
        match self {
            Self::C0 => z - y,
            Self::C1 => x - y,
            Self::C2 => x - z,
            Self::C3 => y - z,
            Self::C4 => y - x,
            Self::C5 => z - x,
        }
    }
}

/// The 6 triangles around one lattice vertex. The center is a vertex
/// coordinate (components summing to -1), and each of its 6 triangles has the
/// center as a corner.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "Hexagon {}", coordinate)]
pub struct Hexagon {
    coordinate: Coordinate,
}

impl Hexagon {
    pub const fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }

    /// The center vertex of this hexagon
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn corner(&self, corner: HexCorner) -> Coordinate {
        self.coordinate + corner.to_vector()
    }

    /// All 6 corners, in [HexCorner] order
    pub fn corners(&self) -> [Coordinate; 6] {
        [
            HexCorner::C0,
            HexCorner::C1,
            HexCorner::C2,
            HexCorner::C3,
            HexCorner::C4,
            HexCorner::C5,
        ]
        .map(|corner| self.corner(corner))
    }

    /// The 6 triangles that meet at the center, alternating flat and pointy
    pub fn triangles(&self) -> [Triangle; 6] {
        let (x, y, z) =
            (Coordinate::UNIT_X, Coordinate::UNIT_Y, Coordinate::UNIT_Z);
        [x + z, x, x + y, y, y + z, z]
            .map(|offset| Triangle::new(self.coordinate + offset))
    }
}
