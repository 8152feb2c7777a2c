//! # Brickfield Render
//!
//! The boundary between the rasterization pipeline and an external
//! heightfield renderer, plus a 2D RGBA preview compositor.
//!
//! The adapter owns exactly one contract: every layer handed to the
//! collaborator arrives as an elevation matrix and a color matrix of
//! matching dimensions with consistent no-data positions. Camera, lighting
//! and threading belong to the collaborator.

mod adapter;
mod options;
mod preview;

pub use adapter::{render_model, HeightfieldRenderer};
pub use options::DisplayOptions;
pub use preview::{layer_to_rgba, write_layer_png};
