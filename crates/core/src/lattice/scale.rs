use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A resolution of the lattice. Every scale is a uniform enlargement of the
/// tile lattice: a triangle at a given scale has edges [Scale::multiplier]
/// times as long as a tile's.
///
/// Multipliers are linear edge factors, not divisors of one another (a region
/// is 4 chunks wide, but 28 isn't 7²). Anything that moves between two scales
/// goes through Cartesian space, which is measured in tile edges, rather than
/// trying to nest one scale's lattice inside another's.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Scale {
    /// The finest resolution. Everything else is measured in tiles.
    Tile,
    Chunk,
    Region,
}

impl Scale {
    /// Edge length of one triangle at this scale, in tile edges. Strictly
    /// increases with coarseness.
    pub const fn multiplier(self) -> i32 {
        match self {
            Self::Tile => 1,
            Self::Chunk => 7,
            Self::Region => 28,
        }
    }

    /// [Self::multiplier] as a float, for Cartesian math
    pub fn edge_length(self) -> f64 {
        self.multiplier().into()
    }
}
