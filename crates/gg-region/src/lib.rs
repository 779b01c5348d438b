//! `gg-region` — region boundary geometry and containment for globe-guess.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`geometry`] | `Ring`, `RegionGeometry`, vertex-centroid derivation     |
//! | [`contains`] | parity test, vertex tolerance, centroid-buffer heuristic |
//! | [`region`]   | `Region` with derived center/radius                      |
//! | [`set`]      | `RegionSet` (R-tree prefilter), `RegionSetBuilder`       |
//! | [`error`]    | `RegionError`, `RegionResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Derives region centers on Rayon's thread pool at build.    |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.         |

pub mod contains;
pub mod error;
pub mod geometry;
pub mod region;
pub mod set;


pub use contains::{ContainmentConfig, geometry_contains, near_any_vertex, within_centroid_buffer};
pub use error::{RegionError, RegionResult};
pub use geometry::{RegionGeometry, Ring};
pub use region::Region;
pub use set::{RegionSet, RegionSetBuilder};
