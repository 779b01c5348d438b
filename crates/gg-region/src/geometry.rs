//! Region boundary geometry: rings, polygons, and the vertex centroid.
//!
//! Boundary data arrives already decoded from its source file as lists of
//! (lat, lon) pairs; this crate never parses GeoJSON or any other format.
//! Winding direction of a ring carries no meaning — real-world boundary
//! files mix both orientations freely.

use gg_core::{GeoPoint, SpherePoint};

/// One closed boundary loop.  The last vertex connects implicitly back to
/// the first; do not duplicate it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring(Vec<GeoPoint>);

/// A ring needs at least this many vertices to enclose any area.
pub const MIN_RING_VERTICES: usize = 3;

impl Ring {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the ring has enough vertices to take part in containment.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.0.len() >= MIN_RING_VERTICES
    }
}

impl From<Vec<(f64, f64)>> for Ring {
    /// Build a ring from decoded `(lat, lon)` pairs, normalizing each.
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        Self(pairs.into_iter().map(|(lat, lon)| GeoPoint::new(lat, lon)).collect())
    }
}

/// A region's boundary: one outer ring, or several for regions made of
/// disjoint landmasses (islands, exclaves).  Holes are not represented.
///
/// Immutable once loaded for a round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionGeometry {
    Polygon(Ring),
    MultiPolygon(Vec<Ring>),
}

impl RegionGeometry {
    /// Iterate every outer ring regardless of variant.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        match self {
            RegionGeometry::Polygon(ring) => std::slice::from_ref(ring).iter(),
            RegionGeometry::MultiPolygon(rings) => rings.iter(),
        }
    }

    /// Iterate every boundary vertex across all rings.
    pub fn vertices(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.rings().flat_map(|r| r.points().iter().copied())
    }

    /// Total vertex count across all rings.
    pub fn vertex_count(&self) -> usize {
        self.rings().map(Ring::len).sum()
    }

    /// The representative center: arithmetic mean of all outer-ring
    /// vertices on the sphere, re-projected onto the surface.
    ///
    /// Deliberately a vertex centroid, not an area-weighted one — cheap,
    /// stable, and accurate enough for distance scoring.  Changing it to a
    /// "more correct" area centroid would shift every miss distance.
    ///
    /// Returns `None` only when the geometry has no vertices at all (the
    /// documented degraded mode; callers fall back to an externally
    /// supplied representative point).
    pub fn center(&self) -> Option<SpherePoint> {
        SpherePoint::mean(self.vertices().map(SpherePoint::from_geo))
    }

    /// Maximum great-circle distance from `center` to any boundary vertex,
    /// in km.  This is the region's "radius" used by the containment
    /// buffer heuristic; `0.0` for empty geometry.
    pub fn radius_km(&self, center: GeoPoint) -> f64 {
        self.vertices()
            .map(|v| center.distance_km(v))
            .fold(0.0, f64::max)
    }
}
