//! Point-in-region testing.
//!
//! # Layered test
//!
//! 1. **Parity** ([`geometry_contains`]) — ray casting in (lon, lat) space
//!    across every ring, OR semantics between rings.  Longitude deltas are
//!    taken the short way around so boundaries crossing the ±180° seam test
//!    correctly.
//! 2. **Vertex tolerance** ([`near_any_vertex`]) — boundary data is coarse
//!    and upstream coordinates are rounded; a guess a few tens of km from a
//!    boundary vertex counts as inside.
//! 3. **Centroid buffer** ([`within_centroid_buffer`]) — parity is
//!    unreliable when a region is small relative to its vertex spacing, so
//!    a guess inside the region's buffered radius is accepted, gated so it
//!    cannot swallow clearly-external guesses on large regions.
//!
//! Layers 2 and 3 are forgiveness heuristics for coarse data, kept as
//! separate named functions so they can be tuned or removed without
//! touching the parity test.  They run strictly after it, never instead of
//! it.

use gg_core::{GeoPoint, lon_delta};

use crate::geometry::{RegionGeometry, Ring};

/// Tunables for the tolerance layers.  The cutoff and ratios are inherited
/// game-feel values, not derived constants.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainmentConfig {
    /// A guess within this distance of any boundary vertex is inside.
    pub vertex_tolerance_km: f64,

    /// Regions with radius at or below this always get the centroid
    /// buffer; larger regions only when the guess is near the centroid.
    pub small_region_radius_km: f64,

    /// The buffer extends the region radius by this fraction.
    pub buffer_ratio: f64,

    /// For large regions, the buffer applies only when the guess is within
    /// this fraction of the radius from the centroid.
    pub near_centroid_ratio: f64,
}

impl Default for ContainmentConfig {
    fn default() -> Self {
        Self {
            vertex_tolerance_km: 50.0,
            small_region_radius_km: 300.0,
            buffer_ratio: 0.25,
            near_centroid_ratio: 0.5,
        }
    }
}

/// Primary test: edge-crossing parity over every ring of the geometry.
///
/// A hit in any ring of a `MultiPolygon` is a hit for the region.  Rings
/// with fewer than 3 vertices contribute nothing.  Never errors.
pub fn geometry_contains(point: GeoPoint, geometry: &RegionGeometry) -> bool {
    geometry.rings().any(|ring| ring_contains(point, ring))
}

/// Ray cast from `point` toward +longitude, counting edge crossings.
///
/// Edge longitudes are unwrapped relative to the test point along the
/// shorter arc, which makes the result invariant to where the ring sits
/// relative to the antimeridian and to any constant longitude shift.
fn ring_contains(point: GeoPoint, ring: &Ring) -> bool {
    let pts = ring.points();
    if !ring.is_usable() {
        return false;
    }

    let mut inside = false;
    let mut j = pts.len() - 1;
    for i in 0..pts.len() {
        let (vi, vj) = (pts[i], pts[j]);

        if (vi.lat > point.lat) != (vj.lat > point.lat) {
            // Longitudes relative to the test point, edge kept continuous.
            let xi = lon_delta(vi.lon, point.lon);
            let xj = xi + lon_delta(vj.lon, vi.lon);
            let t = (point.lat - vi.lat) / (vj.lat - vi.lat);
            if xi + t * (xj - xi) > 0.0 {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Tolerance layer: is the guess within `tolerance_km` of any boundary
/// vertex?
pub fn near_any_vertex(point: GeoPoint, geometry: &RegionGeometry, tolerance_km: f64) -> bool {
    geometry.vertices().any(|v| point.distance_km(v) <= tolerance_km)
}

/// Tolerance layer: is the guess inside the region's buffered radius?
///
/// `center_distance_km` is the guess-to-centroid distance and `radius_km`
/// the region's max vertex-to-centroid distance.  The buffer applies
/// unconditionally to small regions; for large ones only when the guess is
/// already close to the centroid, so a guess well outside a large country
/// is never absorbed.
pub fn within_centroid_buffer(
    center_distance_km: f64,
    radius_km: f64,
    cfg: &ContainmentConfig,
) -> bool {
    if center_distance_km >= radius_km * (1.0 + cfg.buffer_ratio) {
        return false;
    }
    radius_km <= cfg.small_region_radius_km
        || center_distance_km <= radius_km * cfg.near_centroid_ratio
}
