//! Canonical placed-block model.
//!
//! A [`BlockSet`] is the normalized form of a user-authored grid table: one
//! [`BlockRecord`] per coarse `(layer, x, y)` coordinate, with the color
//! already resolved against the catalog. Absence of a record at a coordinate
//! means "no block there", which is not an error.

use crate::color::Rgb;
use std::collections::BTreeSet;

/// A color resolved against the catalog: display name plus normalized RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColor {
    pub name: String,
    pub rgb: Rgb,
}

/// One placed unit block at a coarse `(layer, x, y)` coordinate.
///
/// `color` is `None` for transparent records (code 0 or a code the color
/// mapping does not cover); those still occupy a coordinate but rasterize to
/// the no-data sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    /// Stacking tier, 1-based
    pub layer: i64,
    /// Coarse x position, 1-based
    pub x: i64,
    /// Coarse y position, 1-based
    pub y: i64,
    /// Raw color code from the grid table
    pub code: u32,
    pub color: Option<ResolvedColor>,
}

impl BlockRecord {
    /// Whether this record carries no resolved color.
    pub fn is_transparent(&self) -> bool {
        self.color.is_none()
    }
}

/// Min/max of layer, x and y actually present in a [`BlockSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_layer: i64,
    pub max_layer: i64,
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

/// Ordered, immutable collection of block records with derived bounds.
///
/// Invariant: every layer value present has at least one record with a
/// resolved color; normalization removes layers that end up fully
/// transparent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockSet {
    records: Vec<BlockRecord>,
    bounds: Option<Bounds>,
}

impl BlockSet {
    /// Build a set from records, deriving bounds.
    pub fn new(records: Vec<BlockRecord>) -> Self {
        let bounds = derive_bounds(&records);
        Self { records, bounds }
    }

    /// A set with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[BlockRecord] {
        &self.records
    }

    /// Derived bounds; `None` when the set is empty.
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct layer values present, ascending.
    pub fn layers(&self) -> Vec<i64> {
        let set: BTreeSet<i64> = self.records.iter().map(|r| r.layer).collect();
        set.into_iter().collect()
    }

    /// Records belonging to one stacking layer, in set order.
    pub fn layer_records(&self, layer: i64) -> impl Iterator<Item = &BlockRecord> {
        self.records.iter().filter(move |r| r.layer == layer)
    }
}

fn derive_bounds(records: &[BlockRecord]) -> Option<Bounds> {
    let first = records.first()?;
    let mut b = Bounds {
        min_layer: first.layer,
        max_layer: first.layer,
        min_x: first.x,
        max_x: first.x,
        min_y: first.y,
        max_y: first.y,
    };
    for r in &records[1..] {
        b.min_layer = b.min_layer.min(r.layer);
        b.max_layer = b.max_layer.max(r.layer);
        b.min_x = b.min_x.min(r.x);
        b.max_x = b.max_x.max(r.x);
        b.min_y = b.min_y.min(r.y);
        b.max_y = b.max_y.max(r.y);
    }
    Some(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(layer: i64, x: i64, y: i64) -> BlockRecord {
        BlockRecord {
            layer,
            x,
            y,
            code: 1,
            color: Some(ResolvedColor {
                name: "White".into(),
                rgb: Rgb::new(0.95, 0.95, 0.95),
            }),
        }
    }

    #[test]
    fn bounds_cover_all_records() {
        let set = BlockSet::new(vec![record(1, 1, 1), record(2, 4, 2), record(1, 2, 7)]);
        let b = set.bounds().unwrap();
        assert_eq!((b.min_layer, b.max_layer), (1, 2));
        assert_eq!((b.min_x, b.max_x), (1, 4));
        assert_eq!((b.min_y, b.max_y), (1, 7));
    }

    #[test]
    fn empty_set_has_no_bounds() {
        let set = BlockSet::empty();
        assert!(set.bounds().is_none());
        assert!(set.layers().is_empty());
    }

    #[test]
    fn layers_are_distinct_and_sorted() {
        let set = BlockSet::new(vec![record(3, 1, 1), record(1, 1, 1), record(3, 2, 1)]);
        assert_eq!(set.layers(), vec![1, 3]);
        assert_eq!(set.layer_records(3).count(), 2);
    }
}
