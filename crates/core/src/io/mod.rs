//! I/O for the CSV-backed native interchange format

mod native;

pub use native::{
    read_grid_table, read_grid_table_from_reader, read_table, read_table_from_reader,
    write_block_set, write_raster_csv,
};
