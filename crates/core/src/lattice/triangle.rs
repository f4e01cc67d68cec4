use crate::lattice::{CartesianPoint, Coordinate, Scale};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Which way a triangle faces. This is a pure function of the triangle's
/// anchor, see [Triangle::orientation].
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[display(fmt = "pointy")]
    Pointy,
    #[display(fmt = "flat")]
    Flat,
}

/// The 3 corners of a triangle. Each corner is one step along a single axis
/// from the anchor.
#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash)]
pub enum TriangleCorner {
    /// One step along x
    C0,
    /// One step along z
    C1,
    /// One step along y
    C2,
}

/// A single cell of the triangular lattice. A triangle is nothing more than
/// its anchor coordinate; two triangles with the same anchor are the same
/// triangle.
///
/// Anchors whose components sum to 0 are pointy triangles, all others are
/// flat. Every offset used to walk the lattice from a triangle is mirrored
/// between the two orientations, and [Triangle::delta] is the sign that does
/// the mirroring.
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
#[display(fmt = "{}", coordinate)]
#[serde(transparent)]
pub struct Triangle {
    coordinate: Coordinate,
}

impl Triangle {
    pub const fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }

    /// The anchor coordinate that identifies this triangle
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub const fn orientation(&self) -> Orientation {
        if self.is_pointy() {
            Orientation::Pointy
        } else {
            Orientation::Flat
        }
    }

    pub const fn is_pointy(&self) -> bool {
        self.coordinate.sums_to_zero()
    }

    /// `-1` for pointy triangles, `1` for flat ones. Every offset formula in
    /// this module takes its sign from here, so all offsets computed for one
    /// triangle agree on orientation.
    pub const fn delta(&self) -> i32 {
        if self.is_pointy() {
            -1
        } else {
            1
        }
    }

    /// Get the location of a particular corner of this triangle
    pub fn corner(&self, corner: TriangleCorner) -> Coordinate {
        let delta = self.delta();
        let offset = match corner {
            TriangleCorner::C0 => Coordinate::new(delta, 0, 0),
            TriangleCorner::C1 => Coordinate::new(0, 0, delta),
            TriangleCorner::C2 => Coordinate::new(0, delta, 0),
        };
        self.coordinate + offset
    }

    /// All 3 corners, in [TriangleCorner] order
    pub fn corners(&self) -> [Coordinate; 3] {
        [
            self.corner(TriangleCorner::C0),
            self.corner(TriangleCorner::C1),
            self.corner(TriangleCorner::C2),
        ]
    }

    /// The corners, shifted so that a vertex shared by a pointy and a flat
    /// triangle gets the same coordinate from both. Pointy corners sum to -1
    /// and flat corners to 2, so the pointy ones get bumped by
    /// [Coordinate::ONE]; that doesn't move them in Cartesian space.
    pub fn corner_handles(&self) -> [Coordinate; 3] {
        let corners = self.corners();
        if self.is_pointy() {
            corners.map(|corner| corner + Coordinate::ONE)
        } else {
            corners
        }
    }

    /// The 3 triangles that share an edge with this one, in [TriangleCorner]
    /// order. Each is the reflection of a corner through the anchor.
    pub fn neighbours(&self) -> [Coordinate; 3] {
        self.corners().map(|corner| self.reflect(corner - self.coordinate))
    }

    /// The 3 triangles that share exactly one vertex with this one and sit
    /// diagonally across it, pointing the other way.
    pub fn diagonals(&self) -> [Coordinate; 3] {
        let d = self.delta();
        [
            Coordinate::new(d, d, -d),
            Coordinate::new(d, -d, d),
            Coordinate::new(-d, d, d),
        ]
        .map(|offset| self.reflect(offset))
    }

    /// The ring of 9 triangles around this one that aren't [Self::diagonals]
    /// but touch it along an edge or at a corner. Ordered to walk around the
    /// triangle.
    pub fn edges(&self) -> [Coordinate; 9] {
        let d = self.delta();
        [
            Coordinate::new(d, -d, 0),
            Coordinate::new(d, 0, 0),
            Coordinate::new(d, 0, -d),
            Coordinate::new(0, d, -d),
            Coordinate::new(0, d, 0),
            Coordinate::new(-d, d, 0),
            Coordinate::new(-d, 0, d),
            Coordinate::new(0, 0, d),
            Coordinate::new(0, -d, d),
        ]
        .map(|offset| self.reflect(offset))
    }

    /// Every triangle that touches this one: [Self::diagonals] followed by
    /// [Self::edges]. Always 12 entries.
    pub fn perimeter(&self) -> Vec<Coordinate> {
        self.diagonals()
            .iter()
            .chain(self.edges().iter())
            .copied()
            .collect()
    }

    /// Corners in Cartesian space at the given scale, in [TriangleCorner]
    /// order. These go straight into a mesh; nothing here checks whether
    /// they form a non-degenerate polygon.
    pub fn vertices(&self, scale: Scale) -> [CartesianPoint; 3] {
        self.corners().map(|corner| corner.to_cartesian(scale))
    }

    /// Average of [Self::vertices]
    pub fn centroid(&self, scale: Scale) -> CartesianPoint {
        let [a, b, c] = self.vertices(scale);
        (a + b + c) / 3.0
    }

    /// Anchor of the triangle on the far side of `offset`
    fn reflect(&self, offset: Coordinate) -> Coordinate {
        self.coordinate - offset
    }
}

impl From<Coordinate> for Triangle {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use serde_test::{assert_tokens, Token};
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    const POINTY: Triangle = Triangle::new(Coordinate::ZERO);
    const FLAT: Triangle = Triangle::new(Coordinate::UNIT_X);

    /// Do two triangles have at least one vertex in the same spot?
    fn touches(a: Triangle, b: Triangle) -> bool {
        a.vertices(Scale::Tile).iter().any(|va| {
            b.vertices(Scale::Tile)
                .iter()
                .any(|vb| va.distance_to(*vb) < 1e-9)
        })
    }

    #[test]
    fn test_orientation() {
        assert!(POINTY.is_pointy());
        assert_eq!(POINTY.orientation(), Orientation::Pointy);
        assert_eq!(POINTY.delta(), -1);

        assert!(!FLAT.is_pointy());
        assert_eq!(FLAT.orientation(), Orientation::Flat);
        assert_eq!(FLAT.delta(), 1);

        // Anything that doesn't sum to zero is flat
        let odd = Triangle::new(Coordinate::new(-1, 0, 0));
        assert_eq!(odd.orientation(), Orientation::Flat);
        assert_eq!(Orientation::Pointy.to_string(), "pointy");
    }

    #[test]
    fn test_corners() {
        assert_eq!(
            POINTY.corners(),
            [
                Coordinate::new(-1, 0, 0),
                Coordinate::new(0, 0, -1),
                Coordinate::new(0, -1, 0)
            ]
        );
        assert_eq!(
            FLAT.corners(),
            [
                Coordinate::new(2, 0, 0),
                Coordinate::new(1, 0, 1),
                Coordinate::new(1, 1, 0)
            ]
        );
        assert_eq!(
            TriangleCorner::iter()
                .map(|corner| POINTY.corner(corner))
                .collect::<Vec<_>>(),
            POINTY.corners().to_vec()
        );
    }

    #[test]
    fn test_corner_handles() {
        let pointy: HashSet<Coordinate> =
            POINTY.corner_handles().iter().copied().collect();
        let flat: HashSet<Coordinate> =
            FLAT.corner_handles().iter().copied().collect();
        // These two share an edge, so they share two vertices
        assert_eq!(pointy.intersection(&flat).count(), 2);
        assert!(pointy.iter().chain(flat.iter()).all(|c| c.sum() == 2));
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(
            POINTY.neighbours(),
            [
                Coordinate::UNIT_X,
                Coordinate::UNIT_Z,
                Coordinate::UNIT_Y
            ]
        );
        assert_eq!(
            FLAT.neighbours(),
            [
                Coordinate::ZERO,
                Coordinate::new(1, 0, -1),
                Coordinate::new(1, -1, 0)
            ]
        );

        for triangle in &[POINTY, FLAT] {
            for neighbour in triangle.neighbours().iter() {
                let neighbour = Triangle::new(*neighbour);
                assert_ne!(neighbour.orientation(), triangle.orientation());
                assert!(neighbour
                    .neighbours()
                    .contains(&triangle.coordinate()));
            }
        }
    }

    #[test]
    fn test_perimeter() {
        for triangle in &[POINTY, FLAT, Triangle::new(Coordinate::new(3, -5, 2))]
        {
            let perimeter = triangle.perimeter();
            assert_eq!(perimeter.len(), 12);
            assert_eq!(perimeter[..3], triangle.diagonals());
            assert_eq!(perimeter[3..], triangle.edges());

            let unique: HashSet<Coordinate> =
                perimeter.iter().copied().collect();
            assert_eq!(unique.len(), 12, "duplicates in {:?}", perimeter);
            assert!(!unique.contains(&triangle.coordinate()));

            for coordinate in perimeter {
                let other = Triangle::new(coordinate);
                assert!(
                    touches(*triangle, other),
                    "{} doesn't touch {}",
                    other,
                    triangle
                );
            }
            for neighbour in triangle.neighbours().iter() {
                assert!(unique.contains(neighbour));
            }
        }
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(
            POINTY.diagonals(),
            [
                Coordinate::new(1, 1, -1),
                Coordinate::new(1, -1, 1),
                Coordinate::new(-1, 1, 1)
            ]
        );
        for diagonal in POINTY.diagonals().iter() {
            assert_eq!(
                Triangle::new(*diagonal).orientation(),
                Orientation::Flat
            );
        }
    }

    #[test]
    fn test_vertices() {
        let [a, b, c] = POINTY.vertices(Scale::Tile);
        // Equilateral with unit edges
        assert_approx_eq!(a.distance_to(b), 1.0);
        assert_approx_eq!(b.distance_to(c), 1.0);
        assert_approx_eq!(c.distance_to(a), 1.0);

        let centroid = POINTY.centroid(Scale::Chunk);
        assert_approx_eq!(centroid.x, 0.0);
        assert_approx_eq!(centroid.z, 0.0);

        let [a, b, _] = FLAT.vertices(Scale::Region);
        assert_approx_eq!(a.distance_to(b), 28.0);
    }

    /// A triangle serializes as nothing more than its anchor
    #[test]
    fn test_serde() {
        assert_tokens(
            &Triangle::new(Coordinate::new(3, -5, 2)),
            &[
                Token::Struct {
                    name: "Coordinate",
                    len: 3,
                },
                Token::Str("x"),
                Token::I32(3),
                Token::Str("y"),
                Token::I32(-5),
                Token::Str("z"),
                Token::I32(2),
                Token::StructEnd,
            ],
        );
    }
}
