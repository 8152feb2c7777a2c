//! Adapter between the block-set pipeline and an external heightfield
//! renderer.

use crate::options::DisplayOptions;
use brickfield_algorithms::rasterize::{rasterize, RasterLayer};
use brickfield_core::{BlockSet, Result};

/// External heightfield-rendering collaborator.
///
/// Implementors receive one raster pair per stacking layer. The matrices
/// are guaranteed to share dimensions and no-data positions; everything
/// visual beyond that is the implementor's concern.
pub trait HeightfieldRenderer {
    fn draw_layer(
        &mut self,
        layer: i64,
        raster: &RasterLayer,
        options: &DisplayOptions,
    ) -> Result<()>;
}

/// Rasterize the requested layers and forward each to the renderer.
///
/// `layers` defaults to every distinct layer present in the set, ascending.
pub fn render_model<R: HeightfieldRenderer>(
    set: &BlockSet,
    layers: Option<&[i64]>,
    options: &DisplayOptions,
    renderer: &mut R,
) -> Result<()> {
    let chosen: Vec<i64> = match layers {
        Some(layers) => layers.to_vec(),
        None => set.layers(),
    };

    for layer in chosen {
        let raster = rasterize(set, layer);
        debug_assert_eq!(raster.elevation.shape(), raster.color.shape());
        renderer.draw_layer(layer, &raster, options)?;
    }

    Ok(())
}
