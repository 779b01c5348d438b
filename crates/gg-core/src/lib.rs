//! `gg-core` — foundational types for the globe-guess scoring engine.
//!
//! This crate is a dependency of every other `gg-*` crate.  It intentionally
//! has no `gg-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, haversine distance, longitude normalization   |
//! | [`sphere`]| `SpherePoint`, geo↔sphere coordinate transforms           |
//! | [`ids`]   | `RegionId`                                                |
//! | [`error`] | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |

pub mod error;
pub mod geo;
pub mod ids;
pub mod sphere;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, lon_delta};
pub use ids::RegionId;
pub use sphere::{GLOBE_RADIUS, SpherePoint};
