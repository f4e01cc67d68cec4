//! This module holds the types and algorithms of the triangular lattice.
//!
//! ## Coordinate Systems
//!
//! Cantilever uses two coordinate systems: lattice coordinates, which name
//! cells and vertices, and Cartesian coordinates, which place them in world
//! space.
//!
//! ### Lattice Coordinates
//!
//! A lattice coordinate has three integer components, `x`, `y` and `z`, one
//! per lattice axis. The three axes are 120° apart on the ground plane, so
//! adding `(1, 1, 1)` to a coordinate doesn't move it anywhere. What the
//! coordinate refers to depends on the sum of its components:
//!
//! - `x + y + z = 0`: the anchor of a **pointy** triangle
//! - `x + y + z = 1`: the anchor of a **flat** triangle
//! - `x + y + z = -1`: a lattice vertex, i.e. a triangle corner or the
//!   center of a [Hexagon]
//!
//! Anchors sit at the centroid of their triangle. A triangle's corners are a
//! single step along each axis from its anchor; backwards for pointy
//! triangles, forwards for flat ones.
//!
//! ### Scales
//!
//! The same lattice exists at every [Scale], stretched by the scale's
//! multiplier. The chunk with anchor `(0, 0, 0)` covers the same ground as
//! 49 tile triangles, centered on the tile triangle `(0, 0, 0)`, and its
//! corners are tile vertices ([Triangle::handles] walks them). The raster
//! from [Triangle::triangulation] is a different, looser layout and does not
//! list exactly those 49 tiles. To move a coordinate between scales,
//! convert it to Cartesian space at one scale and back at the other
//! ([Coordinate::convert], [Coordinate::snap]).
//!
//! ### Cartesian Coordinates
//!
//! World space is three dimensional, with the lattice lying flat in the
//! `y = 0` plane. One tile edge is one unit long. Looking down from above,
//! the x axis of the lattice points away from a pointy triangle's `x` corner,
//! and so on for the other axes.
//!
//! ```text
//!        +z (world)
//!            ^
//!   (-1,0,0) |  (0,0,-1)
//!       *----+----*
//!        \   |   /
//!         \  o  /  ----> +x (world)
//!          \   /
//!           \ /
//!            *
//!         (0,-1,0)
//! ```
//!
//! Use [Coordinate::to_cartesian] and [CartesianPoint::to_lattice] to move
//! between the two.

mod grid;
mod hexagon;
mod profile;
mod scale;
mod triangle;
mod unit;

pub use self::{
    grid::{Handles, Triangulation},
    hexagon::{HexCorner, Hexagon},
    profile::{ProfilePoint, TriangleProfile},
    scale::Scale,
    triangle::{Orientation, Triangle, TriangleCorner},
    unit::{CartesianPoint, Coordinate},
};
