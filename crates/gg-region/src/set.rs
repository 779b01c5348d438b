//! The region table and its spatial prefilter.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over per-region (lon, lat) bounding boxes.
//! It answers "which regions *might* contain this point" cheaply; the full
//! layered containment test then runs only on those candidates.  A region
//! straddling the ±180° seam gets a near-global box — the prefilter is
//! allowed to over-approximate, never to miss.

use rstar::{AABB, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use gg_core::{CoreError, CoreResult, GeoPoint, RegionId};

use crate::contains::ContainmentConfig;
use crate::error::{RegionError, RegionResult};
use crate::geometry::RegionGeometry;
use crate::region::Region;

// ── R-tree region entry ───────────────────────────────────────────────────────

/// Entry stored in the R-tree: a region's `[lon, lat]` bounding box.
#[derive(Clone)]
struct RegionEntry {
    bbox: AABB<[f64; 2]>,
    id: RegionId,
}

impl RTreeObject for RegionEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bbox
    }
}

fn bounding_box(geometry: &RegionGeometry) -> Option<AABB<[f64; 2]>> {
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    let mut wraps = false;

    for ring in geometry.rings() {
        let pts = ring.points();
        for (i, v) in pts.iter().enumerate() {
            min[0] = min[0].min(v.lon);
            min[1] = min[1].min(v.lat);
            max[0] = max[0].max(v.lon);
            max[1] = max[1].max(v.lat);

            // An edge whose raw longitude difference exceeds 180° takes
            // the short way across the seam.  The min/max over canonical
            // longitudes would then describe the *complement* of the
            // region's span, so widen to the full circle instead.
            let next = pts[(i + 1) % pts.len()];
            if (next.lon - v.lon).abs() > 180.0 {
                wraps = true;
            }
        }
    }

    if min[1] > max[1] {
        return None; // no vertices
    }
    if wraps {
        min[0] = -180.0;
        max[0] = 180.0;
    }
    Some(AABB::from_corners(min, max))
}

// ── RegionSet ─────────────────────────────────────────────────────────────────

/// All loaded regions, indexed by id, by name, and spatially.
///
/// Read-only after construction; lookups from many threads need no
/// synchronization.  Build one via [`RegionSetBuilder`].
pub struct RegionSet {
    regions: Vec<Region>,
    by_name: FxHashMap<String, RegionId>,
    spatial_idx: RTree<RegionEntry>,
}

impl RegionSet {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    /// Like [`get`](Self::get), but an absent id is an error.
    pub fn require(&self, id: RegionId) -> CoreResult<&Region> {
        self.get(id).ok_or(CoreError::RegionNotFound(id))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Region> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Ids of regions whose bounding box covers `point`.  Superset of the
    /// regions that actually contain it.
    pub fn candidates_at(&self, point: GeoPoint) -> Vec<RegionId> {
        self.spatial_idx
            .locate_in_envelope_intersecting(&AABB::from_point([point.lon, point.lat]))
            .map(|e| e.id)
            .collect()
    }

    /// The first region whose full containment test accepts `point`.
    pub fn region_containing(&self, point: GeoPoint) -> Option<&Region> {
        self.candidates_at(point)
            .into_iter()
            .filter_map(|id| self.get(id))
            .find(|r| r.contains(point))
    }
}

// ── RegionSetBuilder ──────────────────────────────────────────────────────────

/// Accumulate decoded regions, then call [`build`](Self::build).
///
/// The builder is the loading boundary: degenerate rings (< 3 vertices)
/// and empty MultiPolygons are rejected here so the round-time code never
/// sees them.  A region may still be added with no geometry at all — it
/// scores by distance to its fallback point.
pub struct RegionSetBuilder {
    specs: Vec<RawRegion>,
    tolerances: ContainmentConfig,
}

struct RawRegion {
    name: String,
    geometry: Option<RegionGeometry>,
    fallback: Option<GeoPoint>,
}

impl RegionSetBuilder {
    pub fn new() -> Self {
        Self {
            specs: Vec::new(),
            tolerances: ContainmentConfig::default(),
        }
    }

    /// Override the containment tolerances applied to every region.
    pub fn tolerances(mut self, cfg: ContainmentConfig) -> Self {
        self.tolerances = cfg;
        self
    }

    /// Add a region and return its id (sequential from 0).
    pub fn add_region(
        &mut self,
        name: impl Into<String>,
        geometry: Option<RegionGeometry>,
        fallback: Option<GeoPoint>,
    ) -> RegionResult<RegionId> {
        let name = name.into();
        if let Some(g) = &geometry {
            validate_geometry(&name, g)?;
        }
        let id = RegionId(self.specs.len() as u32);
        self.specs.push(RawRegion { name, geometry, fallback });
        Ok(id)
    }

    pub fn region_count(&self) -> usize {
        self.specs.len()
    }

    /// Consume the builder: derive every region's center and radius, then
    /// bulk-load the R-tree.
    ///
    /// Center derivation is independent per region; with the `parallel`
    /// feature it runs on Rayon's thread pool.
    pub fn build(self) -> RegionSet {
        let tolerances = self.tolerances;

        let derive = |(i, raw): (usize, RawRegion)| {
            Region::with_tolerances(
                RegionId(i as u32),
                raw.name,
                raw.geometry,
                raw.fallback,
                tolerances,
            )
        };

        #[cfg(feature = "parallel")]
        let regions: Vec<Region> = {
            use rayon::prelude::*;
            self.specs.into_par_iter().enumerate().map(derive).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let regions: Vec<Region> = self.specs.into_iter().enumerate().map(derive).collect();

        let by_name = regions
            .iter()
            .map(|r| (r.name.clone(), r.id))
            .collect::<FxHashMap<_, _>>();

        // Only regions with geometry can win a containment test; the rest
        // stay out of the index.
        let entries: Vec<RegionEntry> = regions
            .iter()
            .filter_map(|r| {
                let bbox = r.geometry().and_then(bounding_box)?;
                Some(RegionEntry { bbox, id: r.id })
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RegionSet { regions, by_name, spatial_idx }
    }
}

impl Default for RegionSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_geometry(name: &str, geometry: &RegionGeometry) -> RegionResult<()> {
    match geometry {
        RegionGeometry::MultiPolygon(rings) if rings.is_empty() => {
            return Err(RegionError::EmptyMultiPolygon { name: name.to_string() });
        }
        _ => {}
    }
    for ring in geometry.rings() {
        if !ring.is_usable() {
            return Err(RegionError::DegenerateRing {
                name: name.to_string(),
                vertices: ring.len(),
            });
        }
    }
    Ok(())
}
