//! A single playable region with its derived per-round data.

use gg_core::{GeoPoint, RegionId, SpherePoint};

use crate::contains::{self, ContainmentConfig};
use crate::geometry::RegionGeometry;

/// A region as held for the duration of a round: immutable boundary data
/// plus the center and radius derived once at construction.
///
/// `geometry` may be absent (boundary file had nothing for this region);
/// the region then scores by distance to its `fallback` point only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    geometry: Option<RegionGeometry>,
    fallback: Option<GeoPoint>,
    center: Option<SpherePoint>,
    center_geo: Option<GeoPoint>,
    radius_km: f64,
    tolerances: ContainmentConfig,
}

impl Region {
    /// Build a region and derive its center and radius.
    pub fn new(
        id: RegionId,
        name: impl Into<String>,
        geometry: Option<RegionGeometry>,
        fallback: Option<GeoPoint>,
    ) -> Self {
        Self::with_tolerances(id, name, geometry, fallback, ContainmentConfig::default())
    }

    pub fn with_tolerances(
        id: RegionId,
        name: impl Into<String>,
        geometry: Option<RegionGeometry>,
        fallback: Option<GeoPoint>,
        tolerances: ContainmentConfig,
    ) -> Self {
        let center = geometry.as_ref().and_then(RegionGeometry::center);
        let center_geo = center.map(SpherePoint::to_geo);
        let radius_km = match (&geometry, center_geo) {
            (Some(g), Some(c)) => g.radius_km(c),
            _ => 0.0,
        };
        Self {
            id,
            name: name.into(),
            geometry,
            fallback,
            center,
            center_geo,
            radius_km,
            tolerances,
        }
    }

    pub fn geometry(&self) -> Option<&RegionGeometry> {
        self.geometry.as_ref()
    }

    /// The derived on-sphere center, if the geometry yielded one.  This is
    /// what the camera targets and the boundary highlight anchors to.
    pub fn center(&self) -> Option<SpherePoint> {
        self.center
    }

    /// Max vertex-to-centroid distance; `0.0` without usable geometry.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// The point misses are measured against: the derived center, or the
    /// externally supplied fallback when no center exists.  `None` means
    /// this region has no known location at all.
    pub fn target(&self) -> Option<GeoPoint> {
        self.center_geo.or(self.fallback)
    }

    /// Full layered containment test: parity, then vertex tolerance, then
    /// the centroid buffer.  `false` whenever there is no geometry.
    pub fn contains(&self, point: GeoPoint) -> bool {
        let Some(geometry) = &self.geometry else {
            return false;
        };

        if contains::geometry_contains(point, geometry) {
            return true;
        }
        if contains::near_any_vertex(point, geometry, self.tolerances.vertex_tolerance_km) {
            return true;
        }
        match self.center_geo {
            Some(center) => contains::within_centroid_buffer(
                point.distance_km(center),
                self.radius_km,
                &self.tolerances,
            ),
            None => false,
        }
    }
}
