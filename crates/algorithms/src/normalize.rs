//! Grid normalization
//!
//! Turns a raw user-authored grid table into a canonical [`BlockSet`]:
//! layer markers become dense integer levels, rows become y positions,
//! colors are resolved against the run's mapping, and exclusion,
//! translation and clipping are applied in a fixed order.

use brickfield_core::table::compare_markers;
use brickfield_core::{Algorithm, BlockRecord, BlockSet, Error, GridTable, Result};
use brickfield_palette::ColorMap;
use std::collections::{HashMap, HashSet};

/// Coordinate offsets added to every record after exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset3 {
    pub layer: i64,
    pub x: i64,
    pub y: i64,
}

/// Upper clip bounds applied after translation; `None` = unbounded.
///
/// The lower bound is always 1 on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipBounds {
    pub max_level: Option<i64>,
    pub max_x: Option<i64>,
    pub max_y: Option<i64>,
}

/// Parameters for grid normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeParams {
    /// Re-map distinct layer markers to dense consecutive integers ordered
    /// by natural comparison (numeric-aware, lexicographic fallback). When
    /// false, markers must already name integer levels and are used
    /// literally.
    pub relevel: bool,
    /// Translation applied to (layer, x, y) after exclusion.
    pub offset: Offset3,
    /// Clipping applied after translation.
    pub clip: ClipBounds,
    /// Color codes to drop, matched against raw pre-translation codes.
    pub exclude_colors: Vec<u32>,
    /// Layer values to drop, matched against raw pre-translation levels.
    pub exclude_layers: Vec<i64>,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            relevel: true,
            offset: Offset3::default(),
            clip: ClipBounds::default(),
            exclude_colors: Vec::new(),
            exclude_layers: Vec::new(),
        }
    }
}

/// Grid normalization algorithm
#[derive(Debug, Clone, Default)]
pub struct GridNormalizer;

impl Algorithm for GridNormalizer {
    type Input = (GridTable, ColorMap);
    type Output = BlockSet;
    type Params = NormalizeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "GridNormalizer"
    }

    fn description(&self) -> &'static str {
        "Normalize a raw grid table into a canonical block set"
    }

    fn execute(&self, (table, colors): Self::Input, params: Self::Params) -> Result<Self::Output> {
        normalize(&table, &colors, &params)
    }
}

/// Normalize a raw grid table into a canonical [`BlockSet`].
///
/// Pipeline order is fixed: level assignment, empty-cell fill, y
/// derivation, flattening, color resolution, exclusion (raw values),
/// translation, clipping, then removal of layers left without a single
/// resolved color. Pure function: identical inputs always yield an
/// identical block set.
pub fn normalize(
    table: &GridTable,
    colors: &ColorMap,
    params: &NormalizeParams,
) -> Result<BlockSet> {
    if table.is_empty() {
        return Ok(BlockSet::empty());
    }

    let width = table.width();
    let level_of = assign_levels(table, params.relevel)?;

    // Rows per level, for y derivation (first row of a layer = highest y)
    let mut rows_in_layer: HashMap<i64, i64> = HashMap::new();
    for row in &table.rows {
        *rows_in_layer.entry(level_of[row.marker.as_str()]).or_insert(0) += 1;
    }

    let exclude_colors: HashSet<u32> = params.exclude_colors.iter().copied().collect();
    let exclude_layers: HashSet<i64> = params.exclude_layers.iter().copied().collect();

    let mut seen_in_layer: HashMap<i64, i64> = HashMap::new();
    let mut records = Vec::with_capacity(table.rows.len() * width);

    for row in &table.rows {
        let layer = level_of[row.marker.as_str()];
        let row_index = {
            let seen = seen_in_layer.entry(layer).or_insert(0);
            *seen += 1;
            *seen
        };
        let y = rows_in_layer[&layer] - row_index + 1;

        for x in 1..=width {
            // missing and empty cells are color code 0
            let code = row.cells.get(x - 1).copied().flatten().unwrap_or(0);

            if exclude_colors.contains(&code) || exclude_layers.contains(&layer) {
                continue;
            }

            records.push(BlockRecord {
                layer: layer + params.offset.layer,
                x: x as i64 + params.offset.x,
                y: y + params.offset.y,
                code,
                color: colors.lookup(code).cloned(),
            });
        }
    }

    // Clip to [1, max] on every axis
    let within = |v: i64, max: Option<i64>| v >= 1 && max.map_or(true, |m| v <= m);
    records.retain(|r| {
        within(r.layer, params.clip.max_level)
            && within(r.x, params.clip.max_x)
            && within(r.y, params.clip.max_y)
    });

    // Drop layers whose surviving records are all transparent
    let live_layers: HashSet<i64> = records
        .iter()
        .filter(|r| !r.is_transparent())
        .map(|r| r.layer)
        .collect();
    records.retain(|r| live_layers.contains(&r.layer));

    records.sort_by_key(|r| r.layer);

    Ok(BlockSet::new(records))
}

/// Map each row's marker to an integer level.
fn assign_levels(table: &GridTable, relevel: bool) -> Result<HashMap<&str, i64>> {
    let mut levels = HashMap::new();

    if relevel {
        let mut markers: Vec<&str> = table.rows.iter().map(|r| r.marker.as_str()).collect();
        markers.sort_by(|a, b| compare_markers(a, b));

        let mut next = 0i64;
        let mut prev: Option<&str> = None;
        for marker in markers {
            let same = prev.is_some_and(|p| compare_markers(p, marker).is_eq());
            if !same {
                next += 1;
            }
            levels.insert(marker, next);
            prev = Some(marker);
        }
    } else {
        for row in &table.rows {
            if !levels.contains_key(row.marker.as_str()) {
                let level = literal_level(&row.marker)?;
                levels.insert(row.marker.as_str(), level);
            }
        }
    }

    Ok(levels)
}

/// Parse a literal (non-releveled) marker as an integer level.
fn literal_level(marker: &str) -> Result<i64> {
    let t = marker.trim();
    if let Ok(v) = t.parse::<i64>() {
        return Ok(v);
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
        _ => Err(Error::LayerMarker {
            marker: marker.to_string(),
        }),
    }
}
