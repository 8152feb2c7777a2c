//! Display options forwarded to the external renderer.

use brickfield_core::Rgb;

/// Caller-chosen display parameters, passed through unmodified.
///
/// None of these influence rasterization; they travel alongside the raster
/// pair so the collaborator can set up its scene.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    /// Vertical exaggeration applied by the renderer.
    pub z_scale: f64,
    /// Camera azimuth in degrees (0 = North, clockwise).
    pub azimuth_deg: f64,
    /// Camera elevation in degrees above the horizon.
    pub elevation_deg: f64,
    /// Render a solid base slab under the model.
    pub solid_base: bool,
    /// Color of the base slab.
    pub base_color: Rgb,
    /// Scene background color.
    pub background: Rgb,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            z_scale: 1.0,
            azimuth_deg: 315.0,
            elevation_deg: 45.0,
            solid_base: true,
            base_color: Rgb::new(0.35, 0.35, 0.35),
            background: Rgb::new(1.0, 1.0, 1.0),
        }
    }
}
