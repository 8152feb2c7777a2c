//! Native CSV reading/writing
//!
//! Uses the `csv` crate for the native interchange format. Grid tables are
//! headerless: the first column is the layer marker, the remaining columns
//! are ordered x positions holding color codes (empty cell = no block).

use crate::block::BlockSet;
use crate::error::{Error, Result};
use crate::raster::Raster;
use crate::table::{GridRow, GridTable};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read a generic table as string records.
///
/// Rows may vary in length; every field arrives trimmed.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let file = File::open(path)?;
    read_table_from_reader(file)
}

/// Same as [`read_table`] but over any reader.
pub fn read_table_from_reader<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }
    Ok(rows)
}

/// Read a grid table from a headerless CSV file.
pub fn read_grid_table<P: AsRef<Path>>(path: P) -> Result<GridTable> {
    let file = File::open(path)?;
    read_grid_table_from_reader(file)
}

/// Same as [`read_grid_table`] but over any reader.
///
/// Non-integer color cells are rejected here, at the type-coercion
/// boundary; the normalization pipeline never sees them.
pub fn read_grid_table_from_reader<R: Read>(reader: R) -> Result<GridTable> {
    let raw = read_table_from_reader(reader)?;

    let mut rows = Vec::with_capacity(raw.len());
    for (row_idx, fields) in raw.iter().enumerate() {
        let mut fields = fields.iter();
        let marker = fields.next().cloned().unwrap_or_default();

        let mut cells = Vec::new();
        for (col_idx, field) in fields.enumerate() {
            if field.is_empty() {
                cells.push(None);
                continue;
            }
            let code: u32 = field.parse().map_err(|_| Error::Table {
                row: row_idx + 1,
                col: col_idx + 2,
                value: field.clone(),
            })?;
            cells.push(Some(code));
        }
        rows.push(GridRow::new(marker, cells));
    }

    Ok(GridTable::new(rows))
}

/// Write a block set as CSV for inspection.
///
/// Columns: layer, x, y, code, color name, r, g, b. Transparent records
/// leave the color columns empty.
pub fn write_block_set<P: AsRef<Path>>(path: P, set: &BlockSet) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["layer", "x", "y", "code", "color", "r", "g", "b"])?;

    for record in set.records() {
        let (name, r, g, b) = match &record.color {
            Some(c) => (
                c.name.clone(),
                format!("{:.6}", c.rgb.r),
                format!("{:.6}", c.rgb.g),
                format!("{:.6}", c.rgb.b),
            ),
            None => (String::new(), String::new(), String::new(), String::new()),
        };
        wtr.write_record([
            record.layer.to_string(),
            record.x.to_string(),
            record.y.to_string(),
            record.code.to_string(),
            name,
            r,
            g,
            b,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write an elevation raster as CSV; no-data cells are left empty.
pub fn write_raster_csv<P: AsRef<Path>>(path: P, raster: &Raster<f64>) -> Result<()> {
    let mut file = File::create(path)?;
    for row in 0..raster.rows() {
        let mut line = String::new();
        for col in 0..raster.cols() {
            if col > 0 {
                line.push(',');
            }
            let v = unsafe { raster.get_unchecked(row, col) };
            if !v.is_nan() {
                line.push_str(&format!("{v:.3}"));
            }
        }
        line.push('\n');
        file.write_all(line.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_table_round_trip_from_buffer() {
        let csv = "roof,1,2,\nbase,3,,0\n";
        let table = read_grid_table_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].marker, "roof");
        assert_eq!(table.rows[0].cells, vec![Some(1), Some(2), None]);
        assert_eq!(table.rows[1].cells, vec![Some(3), None, Some(0)]);
    }

    #[test]
    fn malformed_cell_is_rejected_at_boundary() {
        let csv = "1,1,x\n";
        let err = read_grid_table_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            Error::Table { row, col, value } => {
                assert_eq!((row, col), (1, 3));
                assert_eq!(value, "x");
            }
            other => panic!("expected Table error, got {other:?}"),
        }
    }

    #[test]
    fn block_set_file_round_trip() {
        use crate::block::{BlockRecord, BlockSet, ResolvedColor};
        use crate::color::Rgb;

        let set = BlockSet::new(vec![BlockRecord {
            layer: 1,
            x: 2,
            y: 3,
            code: 4,
            color: Some(ResolvedColor {
                name: "Bright red".into(),
                rgb: Rgb::new(0.8, 0.1, 0.1),
            }),
        }]);

        let tmp = tempfile::NamedTempFile::new().unwrap();
        write_block_set(tmp.path(), &set).unwrap();

        let rows = read_table(tmp.path()).unwrap();
        assert_eq!(rows[0][0], "layer");
        assert_eq!(&rows[1][..5], ["1", "2", "3", "4", "Bright red"]);
    }
}
