//! Synthetic region fixtures for the scripted demo.

use anyhow::Result;

use gg_core::GeoPoint;
use gg_region::{RegionGeometry, RegionSet, RegionSetBuilder, Ring};

/// Four regions exercising each scoring path: a plain polygon, a
/// two-island multipolygon, a small atoll straddling the antimeridian, and
/// a region with no boundary data at all.  Rings are fed as decoded
/// `(lat, lon)` pairs, the same shape a boundary-file loader produces.
pub fn build_regions() -> Result<RegionSet> {
    let mut b = RegionSetBuilder::new();

    b.add_region(
        "Quadrania",
        Some(RegionGeometry::Polygon(Ring::from(vec![
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
        ]))),
        None,
    )?;

    b.add_region(
        "Twin Isles",
        Some(RegionGeometry::MultiPolygon(vec![
            Ring::from(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]),
            Ring::from(vec![(40.0, 120.0), (40.0, 121.0), (41.0, 121.0), (41.0, 120.0)]),
        ])),
        None,
    )?;

    b.add_region(
        "Meridian Atoll",
        Some(RegionGeometry::Polygon(Ring::from(vec![
            (-0.5, 179.5),
            (-0.5, -179.5),
            (0.5, -179.5),
            (0.5, 179.5),
        ]))),
        None,
    )?;

    b.add_region("Lost Plateau", None, Some(GeoPoint::new(0.0, 0.0)))?;

    Ok(b.build())
}
