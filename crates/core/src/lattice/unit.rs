//! This sub-module contains the two point types of the lattice: integer
//! [Coordinate]s and continuous [CartesianPoint]s, plus the conversion
//! between them. See the parent module documentation for more info on the
//! coordinate system.

use crate::{lattice::Scale, util::SQRT_3};
use anyhow::{anyhow, Context};
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, Mul, MulAssign, Neg, Sub,
    SubAssign,
};
use log::trace;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An integer point in the triangular lattice. Triangle anchors, triangle
/// corners and hexagon centers are all coordinates; which one a coordinate
/// names is determined by the sum of its components (see
/// [Coordinate::sum]).
///
/// Coordinates are plain values. The stable identity of a coordinate is its
/// [Display] form, `[x, y, z]`.
///
/// Components are only supported up to [Coordinate::LIMIT] in magnitude, at
/// any scale. Past that, arithmetic follows the usual integer overflow rules
/// (a panic in debug builds) and [CartesianPoint::to_lattice] saturates at
/// the ends of `i32` instead of round-tripping.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Add,
    Sub,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}, {}]", x, y, z)]
pub struct Coordinate {
    x: i32,
    y: i32,
    z: i32,
}

impl Coordinate {
    pub const ZERO: Self = Self::new(0, 0, 0);
    /// Adding this to any coordinate doesn't move it in Cartesian space
    pub const ONE: Self = Self::new(1, 1, 1);
    pub const UNIT_X: Self = Self::new(1, 0, 0);
    pub const UNIT_Y: Self = Self::new(0, 1, 0);
    pub const UNIT_Z: Self = Self::new(0, 0, 1);
    /// Largest supported component magnitude. Grid offsets and scale
    /// conversions stay well inside `i32`, and the f64 round trip stays
    /// exact, for any coordinate within this bound.
    pub const LIMIT: i32 = 1 << 24;

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn z(&self) -> i32 {
        self.z
    }

    /// `x + y + z`. Triangle anchors sum to 0 (pointy) or 1 (flat); the
    /// corners of pointy triangles sum to -1.
    pub const fn sum(&self) -> i32 {
        self.x + self.y + self.z
    }

    pub const fn sums_to_zero(&self) -> bool {
        self.sum() == 0
    }

    pub const fn sums_to_one(&self) -> bool {
        self.sum() == 1
    }

    pub const fn sums_to_negative_one(&self) -> bool {
        self.sum() == -1
    }

    /// Stable string identity, `[x, y, z]`
    pub fn id(&self) -> String {
        self.to_string()
    }

    /// Position of this coordinate in world space, treating it as a lattice
    /// point at the given scale. The lattice lies flat in the `y = 0` plane.
    pub fn to_cartesian(self, scale: Scale) -> CartesianPoint {
        let lattice = Vector3::new(self.x, self.y, self.z).map(f64::from);
        let cartesian = lattice_basis() * lattice * scale.edge_length();
        cartesian.into()
    }

    /// Re-express this coordinate, read at scale `from`, as the coordinate at
    /// scale `to` that contains the same point in world space. Converting to
    /// the same scale is always the identity.
    pub fn convert(self, from: Scale, to: Scale) -> Self {
        if from == to {
            return self;
        }
        let converted = self.to_cartesian(from).to_lattice(to);
        trace!("Converted {} from {} to {}: {}", self, from, to, converted);
        converted
    }

    /// This coordinate read as a chunk, converted to the tile that shares
    /// its centroid
    pub fn tile(self) -> Self {
        self.convert(Scale::Chunk, Scale::Tile)
    }

    /// The chunk containing this tile coordinate
    pub fn chunk(self) -> Self {
        self.convert(Scale::Tile, Scale::Chunk)
    }

    /// Snap a tile coordinate to the anchor tile of the triangle containing
    /// it at the given scale. Every tile in a chunk snaps to the same tile,
    /// and snapping again changes nothing.
    pub fn snap(self, scale: Scale) -> Self {
        self.convert(Scale::Tile, scale).convert(scale, Scale::Tile)
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    /// Parse `x,y,z`, optionally wrapped in brackets as in the [Display]
    /// form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        let components = inner
            .split(',')
            .map(|component| {
                component.trim().parse::<i32>().with_context(|| {
                    format!("invalid coordinate component {:?}", component)
                })
            })
            .collect::<anyhow::Result<Vec<i32>>>()?;
        match components.as_slice() {
            &[x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(anyhow!(
                "Invalid coordinate {:?}; expected three components",
                s
            )),
        }
    }
}

/// Maps the three lattice axes onto the horizontal plane, one tile edge per
/// lattice step. The middle row is zero because the lattice carries no
/// elevation.
#[rustfmt::skip]
fn lattice_basis() -> Matrix3<f64> {
    Matrix3::new(
        0.5,           0.0,          -0.5,
        0.0,           0.0,          0.0,
        -SQRT_3 / 6.0, SQRT_3 / 3.0, -SQRT_3 / 6.0,
    )
}

/// A point in continuous world space. This is where lattice geometry ends up
/// before it gets handed to a mesh: triangle vertices, profile points, etc.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}, {}]", x, y, z)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation: `t = 0` is `self`, `t = 1` is `other`
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    pub fn distance_to(self, other: Self) -> f64 {
        let delta = other - self;
        (delta.x * delta.x + delta.y * delta.y + delta.z * delta.z).sqrt()
    }

    /// Find the lattice coordinate at the given scale whose triangle contains
    /// this point. This inverts [Coordinate::to_cartesian].
    ///
    /// The x and z components round down while y rounds up. A point sitting
    /// exactly on a boundary between triangles always resolves to the same
    /// one of them this way, and the rounding has to stay exactly like this
    /// for anchors to round-trip.
    pub fn to_lattice(self, scale: Scale) -> Coordinate {
        let edge_length = scale.edge_length();
        let xv = self.x + 0.5 * edge_length;
        let yv = self.z - SQRT_3 / 6.0 * edge_length;
        let zv = self.x - 0.5 * edge_length;

        let x = ((xv - SQRT_3 / 3.0 * yv) / edge_length).floor();
        let y = ((SQRT_3 * 2.0 / 3.0 * yv) / edge_length).ceil();
        let z = ((-zv - SQRT_3 / 3.0 * yv) / edge_length).floor();

        Coordinate::new(x as i32, y as i32, z as i32)
    }
}

impl From<Vector3<f64>> for CartesianPoint {
    fn from(vector: Vector3<f64>) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}
