//! Cantilever is a triangular lattice geometry kit. This crate contains the
//! coordinate systems, triangle topology and multi-scale grid generation
//! that a terrain editor is built on. Meshing and drawing are implemented
//! elsewhere.
//!
//! ```
//! use cantilever::{Coordinate, Scale, Triangle};
//!
//! let chunk = Triangle::new(Coordinate::ZERO);
//! let triangulation = chunk.triangulation(Scale::Chunk);
//! assert_eq!(triangulation.triangles().len(), 49);
//! // From here you can mesh the tiles however you like.
//! ```
//!
//! See [Coordinate::to_cartesian] and [Coordinate::convert] for how lattice
//! coordinates map to world space and between scales.

mod lattice;
mod render;
mod util;

pub use crate::{
    lattice::{
        CartesianPoint, Coordinate, HexCorner, Hexagon, Handles, Orientation,
        ProfilePoint, Scale, Triangle, TriangleCorner, TriangleProfile,
        Triangulation,
    },
    render::{
        config::MaterialConfig,
        unit::{is_hex_color, Color},
        ColorPalette, MaterialKey, Materials,
    },
    util::{SILVER_RATIO, SQRT_3},
};
