//! Color guide validation and value-to-RGB resolution.

use crate::catalog::ColorCatalog;
use brickfield_core::{Error, ResolvedColor, Result};
use std::collections::BTreeMap;

/// One caller-supplied guide entry: grid value plus catalog color name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideEntry {
    pub value: u32,
    pub name: String,
}

/// A caller-supplied color guide, typed once at this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorGuide {
    pub entries: Vec<GuideEntry>,
}

impl ColorGuide {
    pub fn new(entries: Vec<GuideEntry>) -> Self {
        Self { entries }
    }

    /// Convert a loosely-typed table into typed guide entries.
    ///
    /// Each row needs at least two columns: an integer `value` and a color
    /// `name`. A leading `value,name` header row is skipped. Every
    /// malformed row is reported; nothing is produced from a bad guide.
    pub fn parse(rows: &[Vec<String>]) -> Result<Self> {
        let mut entries = Vec::new();
        let mut issues = Vec::new();

        for (idx, row) in rows.iter().enumerate() {
            if idx == 0 && is_header(row) {
                continue;
            }
            if row.len() < 2 {
                issues.push(format!("row {}: fewer than two columns", idx + 1));
                continue;
            }
            match row[0].parse::<u32>() {
                Ok(value) => entries.push(GuideEntry {
                    value,
                    name: row[1].clone(),
                }),
                Err(_) => issues.push(format!(
                    "row {}: value {:?} is not an integer",
                    idx + 1,
                    row[0]
                )),
            }
        }

        if !issues.is_empty() {
            return Err(Error::config(issues));
        }
        Ok(Self { entries })
    }
}

fn is_header(row: &[String]) -> bool {
    row.len() >= 2
        && row[0].eq_ignore_ascii_case("value")
        && row[1].eq_ignore_ascii_case("name")
}

/// Value-to-color mapping for one run.
///
/// Lookup is pure: identical `(code, guide)` pairs always produce identical
/// RGB. Codes absent from the mapping are transparent downstream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorMap {
    map: BTreeMap<u32, ResolvedColor>,
}

impl ColorMap {
    /// Resolved color for a code, if the mapping covers it.
    pub fn lookup(&self, code: u32) -> Option<&ResolvedColor> {
        self.map.get(&code)
    }

    /// Number of mapped values.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Mapped values, ascending.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.map.keys().copied()
    }
}

/// Validate an optional guide against the catalog and produce the run's
/// value-to-RGB mapping.
///
/// Without a guide the catalog is used directly (value = catalog code).
/// With a guide, every name must match a catalog entry exactly; violations
/// fail with a single error naming all offending entries, and no partial
/// mapping is produced. A valid guide is left-joined against the catalog by
/// name; a guide value whose name recovers no RGB stays unmapped and is
/// treated as transparent downstream.
pub fn resolve(catalog: &ColorCatalog, guide: Option<&ColorGuide>) -> Result<ColorMap> {
    let mut map = BTreeMap::new();

    match guide {
        None => {
            for entry in catalog.entries() {
                map.insert(
                    entry.code,
                    ResolvedColor {
                        name: entry.name.to_string(),
                        rgb: entry.rgb(),
                    },
                );
            }
        }
        Some(guide) => {
            let unknown: Vec<String> = guide
                .entries
                .iter()
                .filter(|e| catalog.by_name(&e.name).is_none())
                .map(|e| format!("value {}: no catalog color named {:?}", e.value, e.name))
                .collect();
            if !unknown.is_empty() {
                return Err(Error::config(unknown));
            }

            for entry in &guide.entries {
                if let Some(cat) = catalog.by_name(&entry.name) {
                    map.insert(
                        entry.value,
                        ResolvedColor {
                            name: cat.name.to_string(),
                            rgb: cat.rgb(),
                        },
                    );
                }
            }
        }
    }

    Ok(ColorMap { map })
}
