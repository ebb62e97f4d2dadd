//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use gridcalc_core::CellAddress;
use gridcalc_formula::Engine;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into the engine's grid
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        engine: &mut Engine,
        options: &CsvReadOptions,
    ) -> CsvResult<()> {
        let file = File::open(path)?;
        Self::read(file, engine, options)
    }

    /// Read CSV from a reader into the engine's grid
    ///
    /// Fields are written through the engine's `put` semantics starting at
    /// `options.start`, so `=`-prefixed fields evaluate as they land. Rows
    /// and columns past the grid edge are dropped, not an error.
    pub fn read<R: Read>(reader: R, engine: &mut Engine, options: &CsvReadOptions) -> CsvResult<()> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let rows = engine.sheet().rows();
        let cols = engine.sheet().cols();
        let mut row = options.start.row;
        let mut imported = 0u32;

        for result in csv_reader.records() {
            let record = result?;
            if row >= rows {
                break;
            }

            let mut col = options.start.col;
            for field in record.iter() {
                if col >= cols {
                    break;
                }
                engine.put_at(CellAddress::new(row, col), field)?;
                col += 1;
                imported += 1;
            }

            row += 1;
        }

        log::debug!("imported {} cells starting at {}", imported, options.start);
        Ok(())
    }
}
