//! Multi-scale grids built from a single triangle: the raster of tile
//! coordinates laid over it ([Triangulation]) and the vertex grid used to
//! edit it ([Handles]).
//!
//! Neither grid is deduplicated. Two adjoining triangles each produce the
//! points along their shared edge, and it's up to the caller to merge them
//! (see [Handles::deduplicated]).

use crate::{
    lattice::{Coordinate, Scale, Triangle},
    util::SILVER_RATIO,
};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use log::debug;
use serde::{Deserialize, Serialize};

/// An ORDERED set of coordinates, used to deduplicate grids without
/// disturbing their order
type CoordinateIndexSet = IndexSet<Coordinate, FnvBuildHasher>;

/// The raster of tile coordinates laid over one coarser triangle. See
/// [Triangle::triangulation] for how closely it matches the coarse
/// triangle's footprint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangulation {
    /// Anchor of the triangle that was subdivided
    coordinate: Coordinate,
    scale: Scale,
    /// In raster order: column by column, and top to bottom within each
    /// column. Mesh stitching relies on this order.
    triangles: Vec<Triangle>,
}

impl Triangulation {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Move the triangle list out of this struct
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// The triangles with repeats dropped, keeping the first occurrence of
    /// each. The triangulation itself is left as-is.
    pub fn deduplicated(&self) -> Vec<Triangle> {
        let unique: CoordinateIndexSet = self
            .triangles
            .iter()
            .map(Triangle::coordinate)
            .collect();
        unique.into_iter().map(Triangle::new).collect()
    }
}

/// The grid of lattice vertices exposed for editing a triangle at some scale.
/// See [Triangle::handles].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handles {
    /// Anchor of the triangle the handles belong to, at [Self::scale]
    coordinate: Coordinate,
    scale: Scale,
    /// Tile-scale vertices, column-major with rows ascending
    coordinates: Vec<Coordinate>,
}

impl Handles {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Move the coordinate list out of this struct
    pub fn into_coordinates(self) -> Vec<Coordinate> {
        self.coordinates
    }

    /// The handles with repeats dropped, keeping the first occurrence of
    /// each. The handle list itself is left as-is.
    pub fn deduplicated(&self) -> Vec<Coordinate> {
        let unique: CoordinateIndexSet =
            self.coordinates.iter().copied().collect();
        unique.into_iter().collect()
    }
}

impl Triangle {
    /// Lay out `N²` tile coordinates over this triangle, where `N` is the
    /// scale's multiplier. Column `c` holds `2c + 1` entries, and the
    /// component sum alternates down the column.
    ///
    /// Offsets are taken from this triangle's own anchor and orientation,
    /// without converting it to tile scale first. The result is NOT an
    /// exact tiling of the coarse triangle: at chunk scale half the
    /// entries sum to -1 or 2 rather than being tile anchors, and some
    /// centroids fall outside the coarse triangle. Use [Self::handles] for
    /// a grid that lines up with the coarse corners.
    pub fn triangulation(&self, scale: Scale) -> Triangulation {
        let n = scale.multiplier();
        let size = n / 2;
        let half = size / 2;
        let pointy = self.is_pointy();

        let mut triangles = Vec::with_capacity((n * n) as usize);
        for column in 0..n {
            let rows = 2 * column + 1;
            for row in 0..rows {
                // ceil(row / 2) and ceil((row - 1) / 2), for row >= 0
                let i = (row + 1) / 2;
                let j = row / 2;
                let t = (half - column) + i;
                let u = half - j;

                let offset = if pointy {
                    Coordinate::new(-size + column, t, u)
                } else {
                    Coordinate::new(-u, -t, size - column)
                };
                triangles.push(Triangle::new(self.coordinate() + offset));
            }
        }

        debug!(
            "Triangulated {} at {} scale into {} triangles",
            self,
            scale,
            triangles.len()
        );
        Triangulation {
            coordinate: self.coordinate(),
            scale,
            triangles,
        }
    }

    /// Generate the `(N + 1)(N + 2) / 2` tile vertices covering this
    /// triangle, reading the anchor at the given scale. The outermost
    /// handles fall on the triangle's own corners.
    ///
    /// Unlike [Self::triangulation], orientation comes from the anchor
    /// converted down to tile scale, not from the anchor itself. Handles
    /// have to line up with the tile lattice no matter which scale they're
    /// generated for.
    pub fn handles(&self, scale: Scale) -> Handles {
        let n = scale.multiplier();
        let columns = n + 1;
        let origin = self.coordinate().convert(scale, Scale::Tile);
        let pointy = origin.sums_to_zero();
        let size = handle_grid_size(n);
        let half = size / 2;

        let mut coordinates =
            Vec::with_capacity(((n + 1) * (n + 2) / 2) as usize);
        for column in 0..columns {
            let rows = columns - column;
            for row in 0..rows {
                let s = half - column;
                let t = half - row;
                let u = -size + column + row;

                let offset = if pointy {
                    Coordinate::new(u, t, s)
                } else {
                    Coordinate::new(-u - 1, -t - 1, -s - 1)
                };
                coordinates.push(origin + offset);
            }
        }

        debug!(
            "Generated {} handles for {} at {} scale (tile origin {})",
            coordinates.len(),
            self,
            scale,
            origin
        );
        Handles {
            coordinate: self.coordinate(),
            scale,
            coordinates,
        }
    }
}

/// Distance, in tile steps, from a handle grid's origin out to its far
/// corner, for a triangle whose edges are `multiplier` tiles long
fn handle_grid_size(multiplier: i32) -> i32 {
    (f64::from(multiplier) / SILVER_RATIO.sqrt()).ceil() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::CartesianPoint;
    use std::collections::{BTreeMap, HashSet};
    use strum::IntoEnumIterator;

    #[test]
    fn test_handle_grid_size() {
        assert_eq!(handle_grid_size(Scale::Tile.multiplier()), 1);
        assert_eq!(handle_grid_size(Scale::Chunk.multiplier()), 5);
        assert_eq!(handle_grid_size(Scale::Region.multiplier()), 19);
    }

    #[test]
    fn test_triangulation_len() {
        for triangle in &[
            Triangle::new(Coordinate::ZERO),
            Triangle::new(Coordinate::UNIT_X),
        ] {
            assert_eq!(
                triangle.triangulation(Scale::Tile).triangles().len(),
                1
            );
            assert_eq!(
                triangle.triangulation(Scale::Chunk).triangles().len(),
                49
            );
            assert_eq!(
                triangle.triangulation(Scale::Region).triangles().len(),
                784
            );
        }
    }

    #[test]
    fn test_triangulation_tile() {
        // A tile triangle is already as fine as it gets
        for coordinate in &[Coordinate::ZERO, Coordinate::new(2, -1, 0)] {
            let triangle = Triangle::new(*coordinate);
            let triangulation = triangle.triangulation(Scale::Tile);
            assert_eq!(triangulation.triangles(), &[triangle]);
            assert_eq!(triangulation.coordinate(), *coordinate);
            assert_eq!(triangulation.scale(), Scale::Tile);
        }
    }

    #[test]
    fn test_triangulation_order() {
        let triangles = Triangle::new(Coordinate::ZERO)
            .triangulation(Scale::Chunk)
            .into_triangles();
        // size = 3, half = 1. First: column 0, row 0
        assert_eq!(triangles[0].coordinate(), Coordinate::new(-3, 1, 1));
        // Column 1 starts after 1 triangle
        assert_eq!(triangles[1].coordinate(), Coordinate::new(-2, 0, 1));
        assert_eq!(triangles[2].coordinate(), Coordinate::new(-2, 1, 1));
        // Last: column 6, row 12
        assert_eq!(triangles[48].coordinate(), Coordinate::new(3, 1, -5));

        let flat = Triangle::new(Coordinate::UNIT_X)
            .triangulation(Scale::Chunk)
            .into_triangles();
        assert_eq!(flat[0].coordinate(), Coordinate::new(0, -1, 3));
    }

    #[test]
    fn test_triangulation_deterministic() {
        let triangle = Triangle::new(Coordinate::new(4, -2, -1));
        for scale in Scale::iter() {
            assert_eq!(
                triangle.triangulation(scale),
                triangle.triangulation(scale)
            );
        }
    }

    #[test]
    fn test_handles_len() {
        for triangle in &[
            Triangle::new(Coordinate::ZERO),
            Triangle::new(Coordinate::UNIT_X),
        ] {
            for scale in Scale::iter() {
                let n = scale.multiplier() as usize;
                assert_eq!(
                    triangle.handles(scale).coordinates().len(),
                    (n + 1) * (n + 2) / 2
                );
            }
        }
    }

    #[test]
    fn test_handles_tile() {
        // At tile scale the handles are just the corners, in their sum -1
        // form
        for coordinate in &[Coordinate::ZERO, Coordinate::UNIT_X] {
            let triangle = Triangle::new(*coordinate);
            let handles: HashSet<Coordinate> = triangle
                .handles(Scale::Tile)
                .coordinates()
                .iter()
                .copied()
                .collect();
            let corners: HashSet<Coordinate> = triangle
                .corners()
                .iter()
                .map(|corner| {
                    if corner.sum() == 2 {
                        *corner - Coordinate::ONE
                    } else {
                        *corner
                    }
                })
                .collect();
            assert_eq!(handles, corners);
        }
    }

    #[test]
    fn test_handles_order() {
        let handles = Triangle::new(Coordinate::ZERO)
            .handles(Scale::Chunk)
            .into_coordinates();
        assert_eq!(handles[0], Coordinate::new(-5, 2, 2));
        assert_eq!(handles[1], Coordinate::new(-4, 1, 2));
        // Column 0 has 8 rows
        assert_eq!(handles[7], Coordinate::new(2, -5, 2));
        assert_eq!(handles[8], Coordinate::new(-4, 2, 1));
        assert_eq!(*handles.last().unwrap(), Coordinate::new(2, 2, -5));
    }

    #[test]
    fn test_handles_on_lattice_vertices() {
        for coordinate in &[
            Coordinate::ZERO,
            Coordinate::UNIT_X,
            Coordinate::new(2, -1, -1),
        ] {
            for scale in Scale::iter() {
                let handles = Triangle::new(*coordinate).handles(scale);
                for handle in handles.coordinates() {
                    assert!(
                        handle.sums_to_negative_one(),
                        "{} from {} at {} isn't a vertex",
                        handle,
                        coordinate,
                        scale
                    );
                }
            }
        }
    }

    #[test]
    fn test_handles_deduplicated() {
        let pointy = Triangle::new(Coordinate::ZERO).handles(Scale::Chunk);
        let flat = Triangle::new(Coordinate::UNIT_X).handles(Scale::Chunk);
        assert_eq!(pointy.deduplicated(), pointy.coordinates());

        // Two chunks sharing an edge produce the 8 handles along it twice
        let combined = Handles {
            coordinate: Coordinate::ZERO,
            scale: Scale::Chunk,
            coordinates: pointy
                .coordinates()
                .iter()
                .chain(flat.coordinates())
                .copied()
                .collect(),
        };
        let deduplicated = combined.deduplicated();
        assert_eq!(combined.coordinates().len(), 72);
        assert_eq!(deduplicated.len(), 64);
        assert_eq!(deduplicated[..36], pointy.coordinates()[..]);
    }

    #[test]
    fn test_triangulation_deduplicated() {
        let triangulation = Triangle::new(Coordinate::ZERO)
            .triangulation(Scale::Region);
        let deduplicated = triangulation.deduplicated();
        assert!(deduplicated.len() <= triangulation.triangles().len());
        assert_eq!(deduplicated[0], triangulation.triangles()[0]);
    }

    /// Is `point` inside (or on the edge of) the triangle `corners`, looking
    /// down onto the ground plane?
    fn contains(corners: [CartesianPoint; 3], point: CartesianPoint) -> bool {
        let side = |a: CartesianPoint, b: CartesianPoint| {
            (b.x - a.x) * (point.z - a.z) - (b.z - a.z) * (point.x - a.x)
        };
        let [a, b, c] = corners;
        let sides = [side(a, b), side(b, c), side(c, a)];
        let negative = sides.iter().any(|side| *side < -1e-9);
        let positive = sides.iter().any(|side| *side > 1e-9);
        !(negative && positive)
    }

    /// The raster doesn't exactly tile the coarse triangle. This pins down
    /// how far off it is, so a change to the layout has to be deliberate.
    #[test]
    fn test_triangulation_footprint() {
        let cases = [
            (Coordinate::ZERO, 13, vec![(-1, 28), (0, 21)]),
            (Coordinate::UNIT_X, 33, vec![(1, 21), (2, 28)]),
        ];
        for (coordinate, outside, sums) in cases.iter() {
            let chunk = Triangle::new(*coordinate);
            let triangulation = chunk.triangulation(Scale::Chunk);
            let footprint = chunk.vertices(Scale::Chunk);

            let mut sum_counts: BTreeMap<i32, usize> = BTreeMap::new();
            for triangle in triangulation.triangles() {
                *sum_counts.entry(triangle.coordinate().sum()).or_default() +=
                    1;
            }
            assert_eq!(
                sum_counts.into_iter().collect::<Vec<_>>(),
                *sums,
                "component sums of {}",
                chunk
            );

            let outside_count = triangulation
                .triangles()
                .iter()
                .filter(|triangle| {
                    !contains(footprint, triangle.centroid(Scale::Tile))
                })
                .count();
            assert_eq!(outside_count, *outside, "centroids outside {}", chunk);
            assert_eq!(triangulation.deduplicated().len(), 49);
        }
    }
}
