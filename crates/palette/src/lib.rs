//! # Brickfield Palette
//!
//! Brick color catalog and guide resolution for brickfield.
//!
//! Provides the built-in catalog of brick colors (integer code, display
//! name, normalized RGB) plus the resolver that validates an optional
//! caller-supplied color guide and produces the value-to-RGB mapping used
//! by normalization. The main entry point is [`resolve`].
//!
//! ## Usage
//!
//! ```ignore
//! use brickfield_palette::{resolve, ColorCatalog};
//!
//! let catalog = ColorCatalog::builtin();
//! let colors = resolve(&catalog, None)?;
//! let red = colors.lookup(4);
//! ```

mod catalog;
mod resolver;

pub use catalog::{CatalogEntry, ColorCatalog};
pub use resolver::{resolve, ColorGuide, ColorMap, GuideEntry};
