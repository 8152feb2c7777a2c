//! Layer-to-RGBA preview compositing.
//!
//! A debugging surface, not the 3D pipeline: flattens one rasterized layer
//! into an RGBA pixel buffer (no-data pixels become fully transparent) and
//! writes it out as PNG.

use brickfield_algorithms::rasterize::RasterLayer;
use brickfield_core::{Error, Result};
use std::path::Path;

/// Convert a rasterized layer to an RGBA pixel buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4` in row-major order.
/// No-data pixels are fully transparent black.
pub fn layer_to_rgba(layer: &RasterLayer) -> Vec<u8> {
    let (rows, cols) = layer.shape();
    let mut rgba = vec![0u8; rows * cols * 4];

    for (i, val) in layer.color.data().iter().enumerate() {
        if val.is_nodata() {
            continue;
        }
        let [r, g, b] = val.to_u8();
        let offset = i * 4;
        rgba[offset] = r;
        rgba[offset + 1] = g;
        rgba[offset + 2] = b;
        rgba[offset + 3] = 255;
    }

    rgba
}

/// Write a rasterized layer as a PNG preview.
pub fn write_layer_png<P: AsRef<Path>>(path: P, layer: &RasterLayer) -> Result<()> {
    let (rows, cols) = layer.shape();
    let rgba = layer_to_rgba(layer);

    let img = image::RgbaImage::from_raw(cols as u32, rows as u32, rgba)
        .ok_or_else(|| Error::Other("RGBA buffer does not match raster shape".to_string()))?;
    img.save(path).map_err(|e| Error::Other(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickfield_algorithms::normalize::{normalize, NormalizeParams};
    use brickfield_algorithms::rasterize::{rasterize, RES};
    use brickfield_core::{GridRow, GridTable};
    use brickfield_palette::{resolve, ColorCatalog};

    fn one_cell_layer() -> RasterLayer {
        let table = GridTable::new(vec![GridRow::new("1", vec![Some(4), None])]);
        let colors = resolve(&ColorCatalog::builtin(), None).unwrap();
        let set = normalize(&table, &colors, &NormalizeParams::default()).unwrap();
        rasterize(&set, 1)
    }

    #[test]
    fn nodata_pixels_are_transparent() {
        let layer = one_cell_layer();
        let rgba = layer_to_rgba(&layer);

        assert_eq!(rgba.len(), RES * 2 * RES * 4);
        // first pixel of the raster belongs to the placed block
        assert_eq!(rgba[3], 255);
        // last pixel sits over the empty cell
        assert_eq!(rgba[rgba.len() - 1], 0);
    }

    #[test]
    fn png_export_round_trips_dimensions() {
        let layer = one_cell_layer();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layer.png");

        write_layer_png(&path, &layer).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width() as usize, 2 * RES);
        assert_eq!(img.height() as usize, RES);
    }
}
