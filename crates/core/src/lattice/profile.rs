use crate::lattice::{CartesianPoint, Scale, Triangle, TriangleCorner};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The 15 points of a [TriangleProfile]. Laid out over the triangle like so,
/// with `p0`, `p1` and `p2` as the corners:
///
/// ```text
///   0       3       5       8       1
///
///       4       6       9       12
///
///           7       10      13
///
///               11      14
///
///                   2
/// ```
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfilePoint {
    P0,
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
    P10,
    P11,
    P12,
    P13,
    P14,
}

/// A fixed scaffold of points over one triangle: its corners, points at the
/// quarters of each edge, and the corners of the inner triangle joining the
/// edge midpoints. Every point comes from halving the distance between two
/// earlier points, starting from the corners.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriangleProfile {
    /// Indexed by [ProfilePoint]
    points: [CartesianPoint; 15],
}

impl TriangleProfile {
    pub fn new(triangle: &Triangle, scale: Scale) -> Self {
        let corner = |corner: TriangleCorner| {
            triangle.corner(corner).to_cartesian(scale)
        };
        let p0 = corner(TriangleCorner::C0);
        let p1 = corner(TriangleCorner::C1);
        let p2 = corner(TriangleCorner::C2);

        // Edge p0 -> p1
        let p5 = p0.lerp(p1, 0.5);
        let p3 = p0.lerp(p5, 0.5);
        let p8 = p5.lerp(p1, 0.5);

        // Edge p0 -> p2
        let p7 = p0.lerp(p2, 0.5);
        let p4 = p0.lerp(p7, 0.5);
        let p11 = p7.lerp(p2, 0.5);

        // Edge p1 -> p2
        let p13 = p1.lerp(p2, 0.5);
        let p12 = p1.lerp(p13, 0.5);
        let p14 = p13.lerp(p2, 0.5);

        // Inner triangle, between the three edge midpoints
        let p6 = p7.lerp(p5, 0.5);
        let p9 = p5.lerp(p13, 0.5);
        let p10 = p13.lerp(p7, 0.5);

        Self {
            points: [
                p0, p1, p2, p3, p4, p5, p6, p7, p8, p9, p10, p11, p12, p13,
                p14,
            ],
        }
    }

    pub fn vertex(&self, point: ProfilePoint) -> CartesianPoint {
        self.points[point as usize]
    }

    /// All 15 points, in [ProfilePoint] order
    pub fn points(&self) -> &[CartesianPoint; 15] {
        &self.points
    }

    /// Average of the three outer corners
    pub fn center(&self) -> CartesianPoint {
        (self.vertex(ProfilePoint::P0)
            + self.vertex(ProfilePoint::P1)
            + self.vertex(ProfilePoint::P2))
            / 3.0
    }
}

impl Triangle {
    /// Build the [TriangleProfile] of this triangle at the given scale
    pub fn profile(&self, scale: Scale) -> TriangleProfile {
        TriangleProfile::new(self, scale)
    }
}
