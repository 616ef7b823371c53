//! genremap_core - Trait-space to 3D mapping for the interactive genre map
//!
//! The whole pipeline runs once at dataset-load time:
//! 1. **Mapping**: each track's six trait values interpolate against the
//!    boundary polytope's axis endpoints to produce a raw 3D position
//! 2. **Region clouds**: each genre region samples a representative point
//!    cloud from its trait-space bounds through the same mapper
//! 3. **Normalization**: one uniform scale + translation fitted over the
//!    union recenters everything into the target visual volume
//!
//! The result is an immutable [`Dataset`] snapshot that the rendering layer
//! reads from; nothing mutates a position after normalization, so the
//! snapshot is safely shareable across any number of concurrent readers.

pub mod classify;
pub mod dataset;
pub mod mapping;
pub mod normalize;
pub mod polytope;
pub mod regions;
pub mod traits;

#[cfg(feature = "visualization")]
pub mod viz;

// Re-export key types for convenience
pub use classify::{Color, Family};
pub use dataset::{DataError, Dataset, TrackLinks, TrackNode, TrackRecord};
pub use mapping::{map_position, node_radius, Emphasis, MapConfig};
pub use normalize::NormalizationTransform;
pub use polytope::{AxisGroup, BoundaryVertex, VertexInfo};
pub use regions::Region;
pub use traits::{TraitBounds, TraitRange, TraitVector};
