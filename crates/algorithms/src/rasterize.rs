//! Layer rasterization
//!
//! Expands one stacking layer of a block set into a fine elevation raster
//! and a matching color raster, with the surface detail that makes a flat
//! slab read as studded bricks: a lowered groove along cell borders, a
//! raised circular bump per block, and darkened seams between neighbors.

use crate::maybe_rayon::*;
use brickfield_core::{Algorithm, BlockSet, Error, Raster, Result, Rgb};
use ndarray::Array2;
use std::collections::HashMap;

/// Fine pixels per coarse cell edge.
pub const RES: usize = 15;

/// Height units added per stacking layer.
const LAYER_HEIGHT: f64 = 3.0;
/// Residual elevation of the groove between adjacent blocks.
const GROOVE_DEPTH: f64 = 0.1;
/// Elevation gain inside the bump circle.
const BUMP_HEIGHT: f64 = 0.5;
/// Per-channel darkening inside the bump circle.
const BUMP_DARKEN: f64 = 0.1;
/// Shading factor on cell-border pixels.
const EDGE_SHADE: f64 = 0.75;

/// Raster pair for one stacking layer.
///
/// Both matrices have identical dimensions and identical no-data
/// positions: a pixel with no geometry is NaN in the elevation raster and
/// the NaN-channel sentinel in the color raster.
#[derive(Debug, Clone)]
pub struct RasterLayer {
    pub elevation: Raster<f64>,
    pub color: Raster<Rgb>,
}

impl RasterLayer {
    /// A degenerate layer with no pixels.
    pub fn empty() -> Self {
        Self {
            elevation: Raster::new(0, 0),
            color: Raster::new(0, 0),
        }
    }

    /// Dimensions as (rows, cols); both rasters agree by construction.
    pub fn shape(&self) -> (usize, usize) {
        self.elevation.shape()
    }

    pub fn is_empty(&self) -> bool {
        self.elevation.is_empty()
    }
}

/// Parameters for layer rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterizeParams {
    /// Stacking layer to rasterize.
    pub layer: i64,
}

impl Default for RasterizeParams {
    fn default() -> Self {
        Self { layer: 1 }
    }
}

/// Layer rasterization algorithm
#[derive(Debug, Clone, Default)]
pub struct LayerRasterizer;

impl Algorithm for LayerRasterizer {
    type Input = BlockSet;
    type Output = RasterLayer;
    type Params = RasterizeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "LayerRasterizer"
    }

    fn description(&self) -> &'static str {
        "Rasterize one stacking layer into elevation and color matrices"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        Ok(rasterize(&input, params.layer))
    }
}

/// Rasterize one stacking layer of a block set.
///
/// Every coarse cell expands to a `RES × RES` pixel block over the layer's
/// bounding box; allocation therefore grows quadratically with `RES`.
/// Output rows are mirrored so row 0 is the highest y, matching the
/// external renderer's convention. Per-pixel values depend only on the
/// owning cell, so rows are computed in parallel without changing
/// observable output.
pub fn rasterize(set: &BlockSet, layer: i64) -> RasterLayer {
    // Coarse cell -> resolved color (None = transparent record)
    let cells: HashMap<(i64, i64), Option<Rgb>> = set
        .layer_records(layer)
        .map(|r| ((r.x, r.y), r.color.as_ref().map(|c| c.rgb)))
        .collect();

    if cells.is_empty() {
        return RasterLayer::empty();
    }

    let min_x = cells.keys().map(|&(x, _)| x).min().unwrap();
    let max_x = cells.keys().map(|&(x, _)| x).max().unwrap();
    let min_y = cells.keys().map(|&(_, y)| y).min().unwrap();
    let max_y = cells.keys().map(|&(_, y)| y).max().unwrap();

    let w = (max_x - min_x + 1) as usize * RES;
    let h = (max_y - min_y + 1) as usize * RES;

    let base = LAYER_HEIGHT * (layer - 1) as f64 + LAYER_HEIGHT;
    let groove = GROOVE_DEPTH + LAYER_HEIGHT * (layer - 1) as f64;
    let bump_radius = RES as f64 / 3.0;
    // median fine-pixel offset of a RES x RES block (RES is odd)
    let center_offset = (RES as f64 - 1.0) / 2.0;

    let pixels: Vec<(f64, Rgb)> = (0..h)
        .into_par_iter()
        .flat_map(|row| {
            // row 0 is the top of the raster: mirror back to a fine y index
            let fy = h - 1 - row;
            let cy = min_y + (fy / RES) as i64;
            let oy = fy % RES;

            let mut line = Vec::with_capacity(w);
            for fx in 0..w {
                let cx = min_x + (fx / RES) as i64;
                let ox = fx % RES;

                let rgb = match cells.get(&(cx, cy)) {
                    Some(Some(rgb)) => *rgb,
                    // transparent record or no block: no geometry
                    _ => {
                        line.push((f64::NAN, Rgb::NODATA));
                        continue;
                    }
                };

                let border = ox == 0 || ox == RES - 1 || oy == 0 || oy == RES - 1;

                let dx = ox as f64 - center_offset;
                let dy = oy as f64 - center_offset;
                let bump = (dx * dx + dy * dy).sqrt() < bump_radius;

                let mut elevation = if border { groove } else { base };
                let mut color = rgb;
                if bump {
                    elevation += BUMP_HEIGHT;
                    color = color.darkened(BUMP_DARKEN);
                }
                if border {
                    color = color.scaled(EDGE_SHADE);
                }

                line.push((elevation, color));
            }
            line
        })
        .collect();

    let (elevation, color): (Vec<f64>, Vec<Rgb>) = pixels.into_iter().unzip();

    RasterLayer {
        elevation: Raster::from_array(
            Array2::from_shape_vec((h, w), elevation).expect("shape matches construction"),
        ),
        color: Raster::from_array(
            Array2::from_shape_vec((h, w), color).expect("shape matches construction"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickfield_core::{BlockRecord, ResolvedColor};

    fn block(layer: i64, x: i64, y: i64, rgb: Option<Rgb>) -> BlockRecord {
        BlockRecord {
            layer,
            x,
            y,
            code: 1,
            color: rgb.map(|rgb| ResolvedColor {
                name: "White".into(),
                rgb,
            }),
        }
    }

    fn white() -> Rgb {
        Rgb::new(0.8, 0.8, 0.8)
    }

    #[test]
    fn missing_layer_gives_degenerate_raster() {
        let set = BlockSet::new(vec![block(1, 1, 1, Some(white()))]);
        let raster = rasterize(&set, 7);
        assert!(raster.is_empty());
    }

    #[test]
    fn single_cell_expands_to_full_res_block() {
        let set = BlockSet::new(vec![block(1, 1, 1, Some(white()))]);
        let raster = rasterize(&set, 1);

        assert_eq!(raster.shape(), (RES, RES));
        assert_eq!(raster.elevation.nodata_count(), 0);
        assert_eq!(raster.color.nodata_count(), 0);
    }

    #[test]
    fn interior_pixels_sit_at_layer_baseline() {
        let set = BlockSet::new(vec![block(2, 1, 1, Some(white()))]);
        let raster = rasterize(&set, 2);

        // layer 2 baseline: 3*(2-1) + 3
        let center = RES / 2;
        assert_eq!(raster.elevation.get(1, center).unwrap(), 6.0);
    }

    #[test]
    fn border_pixels_drop_into_the_groove() {
        let set = BlockSet::new(vec![block(1, 1, 1, Some(white()))]);
        let raster = rasterize(&set, 1);

        for i in 0..RES {
            assert_eq!(raster.elevation.get(0, i).unwrap(), 0.1);
            assert_eq!(raster.elevation.get(RES - 1, i).unwrap(), 0.1);
            assert_eq!(raster.elevation.get(i, 0).unwrap(), 0.1);
            assert_eq!(raster.elevation.get(i, RES - 1).unwrap(), 0.1);
        }
    }

    #[test]
    fn bump_raises_a_circle_at_the_cell_center() {
        let set = BlockSet::new(vec![block(1, 1, 1, Some(white()))]);
        let raster = rasterize(&set, 1);

        let center = RES / 2;
        assert_eq!(raster.elevation.get(center, center).unwrap(), 3.5);
        // just outside the radius: plain baseline
        assert_eq!(raster.elevation.get(center, center + 5).unwrap(), 3.0);
        // bump pixels are darkened
        let c = raster.color.get(center, center).unwrap();
        assert!((c.r - 0.7).abs() < 1e-12);
    }

    #[test]
    fn bump_region_is_near_circular() {
        let set = BlockSet::new(vec![block(1, 1, 1, Some(white()))]);
        let raster = rasterize(&set, 1);

        let raised = raster
            .elevation
            .data()
            .iter()
            .filter(|&&e| e == 3.5)
            .count();
        // area of a radius-5 disc is ~78.5; grid quantization keeps it close
        assert!((60..=90).contains(&raised), "raised {raised} pixels");
    }

    #[test]
    fn border_pixels_are_shaded() {
        let set = BlockSet::new(vec![block(1, 1, 1, Some(white()))]);
        let raster = rasterize(&set, 1);

        let edge = raster.color.get(0, RES / 2).unwrap();
        assert!((edge.r - 0.8 * 0.75).abs() < 1e-12);
    }

    #[test]
    fn uniform_two_by_two_layer_matches_scenario() {
        let set = BlockSet::new(vec![
            block(1, 1, 1, Some(white())),
            block(1, 2, 1, Some(white())),
            block(1, 1, 2, Some(white())),
            block(1, 2, 2, Some(white())),
        ]);
        let raster = rasterize(&set, 1);
        assert_eq!(raster.shape(), (2 * RES, 2 * RES));

        for row in 0..2 * RES {
            for col in 0..2 * RES {
                let e = raster.elevation.get(row, col).unwrap();
                let border =
                    row % RES == 0 || row % RES == RES - 1 || col % RES == 0 || col % RES == RES - 1;
                if border {
                    assert_eq!(e, 0.1, "border pixel ({row}, {col})");
                } else {
                    assert!(
                        e == 3.0 || e == 3.5,
                        "interior pixel ({row}, {col}) has elevation {e}"
                    );
                }
            }
        }

        // one bump circle per cell
        let raised = raster
            .elevation
            .data()
            .iter()
            .filter(|&&e| e == 3.5)
            .count();
        assert!((4 * 60..=4 * 90).contains(&raised));
    }

    #[test]
    fn transparent_cells_propagate_the_sentinel_in_both_matrices() {
        let set = BlockSet::new(vec![
            block(1, 1, 1, Some(white())),
            block(1, 2, 1, None), // transparent record inside the bounding box
        ]);
        let raster = rasterize(&set, 1);

        assert_eq!(raster.shape(), (RES, 2 * RES));
        assert_eq!(raster.elevation.nodata_count(), RES * RES);
        assert_eq!(raster.color.nodata_count(), RES * RES);

        for row in 0..RES {
            for col in RES..2 * RES {
                assert!(raster.elevation.is_nodata_at(row, col).unwrap());
                assert!(raster.color.is_nodata_at(row, col).unwrap());
            }
        }
    }

    #[test]
    fn row_zero_is_the_highest_y() {
        // two cells stacked in y with different colors
        let red = Rgb::new(1.0, 0.0, 0.0);
        let blue = Rgb::new(0.0, 0.0, 1.0);
        let set = BlockSet::new(vec![
            block(1, 1, 1, Some(blue)),
            block(1, 1, 2, Some(red)),
        ]);
        let raster = rasterize(&set, 1);
        assert_eq!(raster.shape(), (2 * RES, RES));

        // interior, non-bump sample points
        let top = raster.color.get(1, 1).unwrap();
        let bottom = raster.color.get(2 * RES - 2, 1).unwrap();
        assert!(top.r > 0.5, "top rows should come from y=2 (red)");
        assert!(bottom.b > 0.5, "bottom rows should come from y=1 (blue)");
    }

    #[test]
    fn matrices_always_share_sentinel_positions() {
        let set = BlockSet::new(vec![
            block(1, 1, 1, Some(white())),
            block(1, 3, 2, Some(white())), // gap at (2, *) has no record at all
        ]);
        let raster = rasterize(&set, 1);

        let (rows, cols) = raster.shape();
        for row in 0..rows {
            for col in 0..cols {
                assert_eq!(
                    raster.elevation.is_nodata_at(row, col).unwrap(),
                    raster.color.is_nodata_at(row, col).unwrap(),
                    "sentinel mismatch at ({row}, {col})"
                );
            }
        }
    }
}
