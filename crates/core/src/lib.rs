//! # Brickfield Core
//!
//! Core types, traits and I/O for the brickfield mosaic pipeline.
//!
//! This crate provides:
//! - `Raster<T>`: dense fine-pixel raster with a typed no-data sentinel
//! - `Rgb`: normalized color value sharing that sentinel convention
//! - `BlockRecord` / `BlockSet`: the canonical placed-block model
//! - `GridTable`: the raw user-authored grid input
//! - Algorithm traits for consistent API
//! - CSV I/O for the native interchange format

pub mod block;
pub mod color;
pub mod error;
pub mod io;
pub mod raster;
pub mod table;

pub use block::{BlockRecord, BlockSet, Bounds, ResolvedColor};
pub use color::Rgb;
pub use error::{Error, Result};
pub use raster::{Raster, RasterElement, RasterStatistics};
pub use table::{GridRow, GridTable};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::block::{BlockRecord, BlockSet, Bounds, ResolvedColor};
    pub use crate::color::Rgb;
    pub use crate::error::{Error, Result};
    pub use crate::raster::{Raster, RasterElement};
    pub use crate::table::{GridRow, GridTable};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in brickfield.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
