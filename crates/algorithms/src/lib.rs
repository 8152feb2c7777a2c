//! # Brickfield Algorithms
//!
//! The two algorithmic stages of the brickfield pipeline:
//!
//! - **normalize**: raw grid table → canonical [`BlockSet`] with resolved
//!   colors, re-leveling, translation, clipping and exclusions
//! - **rasterize**: one stacking layer of a block set → fine elevation and
//!   color rasters with bevel, bump and edge-shading surface detail
//!
//! [`BlockSet`]: brickfield_core::BlockSet

pub mod maybe_rayon;
pub mod normalize;
pub mod rasterize;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::normalize::{
        normalize, ClipBounds, GridNormalizer, NormalizeParams, Offset3,
    };
    pub use crate::rasterize::{rasterize, LayerRasterizer, RasterLayer, RasterizeParams, RES};
    pub use brickfield_core::prelude::*;
}
