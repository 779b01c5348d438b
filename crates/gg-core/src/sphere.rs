//! 3-D sphere points and the geo↔sphere coordinate transform.
//!
//! # Seam convention
//!
//! The rendered globe wraps its texture so that longitude −180° sits at the
//! back of the sphere; the transform therefore offsets longitude by 180°
//! and negates x.  [`SpherePoint::to_geo`] is the exact inverse of
//! [`SpherePoint::from_geo`] under that convention:
//!
//! ```text
//! θ = (lon − 180)°        x = −R·cos(lat)·cos(θ)
//!                         y =  R·sin(lat)
//!                         z =  R·cos(lat)·sin(θ)
//! ```
//!
//! # Invariant
//!
//! Every `SpherePoint` lies on the sphere of radius [`GLOBE_RADIUS`] within
//! floating-point tolerance.  The only constructors are [`from_geo`]
//! (exact) and [`mean`] (average then re-project); upstream code never
//! builds one from raw coordinates.
//!
//! [`from_geo`]: SpherePoint::from_geo
//! [`mean`]: SpherePoint::mean

use crate::geo::{GeoPoint, normalize_lon};

/// Radius of the virtual globe in scene units.
pub const GLOBE_RADIUS: f64 = 5.0;

/// Distance from the polar axis (as a fraction of the radius) below which a
/// point is treated as sitting on a pole and its longitude collapses to 0.
///
/// Corresponds to |lat| ≳ 89.994°; inside that band longitude is not
/// meaningful and `atan2` would amplify noise in x/z.
const POLE_AXIS_EPSILON: f64 = 1e-4;

/// Vectors shorter than this have no usable direction.  Well above the
/// ~1e-16 rounding residue left by cancelling antipodal points, far below
/// anything a real surface point produces.
const DEGENERATE_NORM: f64 = 1e-9;

/// A Cartesian point constrained to the surface of the render globe.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpherePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SpherePoint {
    /// Project a geographic coordinate onto the globe surface.
    ///
    /// Exact at the equator and prime meridian; no division anywhere, so no
    /// singularities.
    pub fn from_geo(geo: GeoPoint) -> Self {
        let phi = geo.lat.to_radians();
        let theta = (geo.lon - 180.0).to_radians();

        Self {
            x: -(GLOBE_RADIUS * phi.cos() * theta.cos()),
            y: GLOBE_RADIUS * phi.sin(),
            z: GLOBE_RADIUS * phi.cos() * theta.sin(),
        }
    }

    /// Inverse projection back to latitude/longitude.
    ///
    /// The input is normalized first, so points slightly off the surface
    /// (e.g. a pointer-ray hit offset by a marker height) land on the same
    /// coordinate as their surface projection.  The `asin` argument is
    /// clamped so floating-point overshoot resolves to the nearest pole,
    /// and within [`POLE_AXIS_EPSILON`] of the polar axis longitude is `0`
    /// by convention rather than computed.
    ///
    /// A zero-length vector has no direction; it maps to `(0, 0)`.
    pub fn to_geo(self) -> GeoPoint {
        let r = self.norm();
        if r < DEGENERATE_NORM {
            return GeoPoint::new(0.0, 0.0);
        }

        let lat = (self.y / r).clamp(-1.0, 1.0).asin().to_degrees();

        let axis_dist = (self.x * self.x + self.z * self.z).sqrt();
        let lon = if axis_dist < POLE_AXIS_EPSILON * r {
            0.0
        } else {
            normalize_lon(self.z.atan2(-self.x).to_degrees() + 180.0)
        };

        GeoPoint::new(lat, lon)
    }

    /// Euclidean length of the position vector.
    #[inline]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Re-project onto the globe surface (normalize, then scale to
    /// [`GLOBE_RADIUS`]).
    ///
    /// Returns `None` for a near-zero vector, which has no well-defined
    /// surface projection (e.g. the mean of two antipodal points).
    pub fn renormalized(self) -> Option<SpherePoint> {
        let r = self.norm();
        if r < DEGENERATE_NORM {
            return None;
        }
        let s = GLOBE_RADIUS / r;
        Some(Self { x: self.x * s, y: self.y * s, z: self.z * s })
    }

    /// Arithmetic mean of a set of sphere points, re-projected onto the
    /// surface.
    ///
    /// This is the canonical "averaging constructor": vertex centroids and
    /// interpolated path points are all built through here so the on-sphere
    /// invariant survives.  Returns `None` for an empty set or a degenerate
    /// (near-zero) mean vector.
    pub fn mean<I>(points: I) -> Option<SpherePoint>
    where
        I: IntoIterator<Item = SpherePoint>,
    {
        let (mut sx, mut sy, mut sz) = (0.0, 0.0, 0.0);
        let mut n = 0u64;
        for p in points {
            sx += p.x;
            sy += p.y;
            sz += p.z;
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let inv = 1.0 / n as f64;
        Self { x: sx * inv, y: sy * inv, z: sz * inv }.renormalized()
    }
}

impl std::fmt::Display for SpherePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.4}, {:.4}, {:.4}]", self.x, self.y, self.z)
    }
}
