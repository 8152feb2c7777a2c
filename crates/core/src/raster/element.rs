//! Raster element trait for generic cell values

use crate::color::Rgb;
use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// The elevation matrix and the color matrix of a rasterized layer share one
/// no-data convention; this trait carries the per-type sentinel so both
/// rasters can be checked uniformly.
pub trait RasterElement: Copy + Clone + Debug + PartialEq + Send + Sync + 'static {
    /// The "no geometry here" sentinel for this type
    const NODATA: Self;

    /// Check if this value is the no-data sentinel
    fn is_nodata(&self) -> bool;
}

impl RasterElement for f64 {
    const NODATA: Self = f64::NAN;

    fn is_nodata(&self) -> bool {
        self.is_nan()
    }
}

impl RasterElement for f32 {
    const NODATA: Self = f32::NAN;

    fn is_nodata(&self) -> bool {
        self.is_nan()
    }
}

impl RasterElement for Rgb {
    const NODATA: Self = Rgb::NODATA;

    fn is_nodata(&self) -> bool {
        Rgb::is_nodata(self)
    }
}
