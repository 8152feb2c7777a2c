//! Raw grid tables as authored by the user.
//!
//! A grid table is the coarse description of a model: the first column holds
//! an arbitrary layer marker per row, the remaining columns are ordered x
//! positions holding color codes. Rows run top-to-bottom, so the first row
//! of a layer is its highest y.

use std::cmp::Ordering;

/// One table row: a layer marker plus ordered x cells.
///
/// `None` cells are empty (equivalent to color code 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub marker: String,
    pub cells: Vec<Option<u32>>,
}

impl GridRow {
    pub fn new<S: Into<String>>(marker: S, cells: Vec<Option<u32>>) -> Self {
        Self {
            marker: marker.into(),
            cells,
        }
    }
}

/// A raw grid table: ordered rows, positional columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridTable {
    pub rows: Vec<GridRow>,
}

impl GridTable {
    pub fn new(rows: Vec<GridRow>) -> Self {
        Self { rows }
    }

    /// Number of x columns: the widest row decides.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Natural ordering for layer markers.
///
/// Markers that both parse as numbers compare numerically; numeric markers
/// sort before non-numeric ones; anything else compares lexicographically.
pub fn compare_markers(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
