//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use gridcalc_core::CellAddress;
use gridcalc_formula::Engine;

use crate::error::CsvResult;
use crate::options::CsvWriteOptions;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write the whole grid to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        engine: &Engine,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(engine, file, options)
    }

    /// Write the whole grid to a writer, row-major
    ///
    /// A formula cell exports its `=`-prefixed source, a literal cell its
    /// value; a later import reproduces the grid.
    pub fn write<W: Write>(engine: &Engine, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .from_writer(writer);

        let sheet = engine.sheet();
        for row in 0..sheet.rows() {
            let mut record = Vec::with_capacity(sheet.cols() as usize);
            for col in 0..sheet.cols() {
                let cell = sheet.cell(CellAddress::new(row, col))?;
                if cell.has_formula() {
                    record.push(format!("={}", cell.formula()));
                } else {
                    record.push(cell.value().to_string());
                }
            }
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CsvReadOptions;
    use crate::reader::CsvReader;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_evaluates_formulas() {
        let mut engine = Engine::new(10, 10).unwrap();
        let data = "1,2,=A1+B1\n,,=SUMME(A1:B1)\n";

        CsvReader::read(data.as_bytes(), &mut engine, &CsvReadOptions::default()).unwrap();

        assert_eq!(engine.get("A1").unwrap(), "1");
        assert_eq!(engine.get("C1").unwrap(), "3");
        assert_eq!(engine.get("C2").unwrap(), "3");
    }

    #[test]
    fn test_read_with_start_cell() {
        let mut engine = Engine::new(10, 10).unwrap();
        let options = CsvReadOptions {
            start: gridcalc_core::CellAddress::parse("B2").unwrap(),
            ..Default::default()
        };

        CsvReader::read("7,8\n9,10\n".as_bytes(), &mut engine, &options).unwrap();

        assert_eq!(engine.get("B2").unwrap(), "7");
        assert_eq!(engine.get("C2").unwrap(), "8");
        assert_eq!(engine.get("B3").unwrap(), "9");
        assert_eq!(engine.get("C3").unwrap(), "10");
        assert_eq!(engine.get("A1").unwrap(), "");
    }

    #[test]
    fn test_read_truncates_past_grid_edge() {
        let mut engine = Engine::new(2, 2).unwrap();
        let data = "1,2,3\n4,5\n6,7\n";

        CsvReader::read(data.as_bytes(), &mut engine, &CsvReadOptions::default()).unwrap();

        assert_eq!(engine.get("A1").unwrap(), "1");
        assert_eq!(engine.get("B1").unwrap(), "2");
        assert_eq!(engine.get("A2").unwrap(), "4");
        assert_eq!(engine.get("B2").unwrap(), "5");
    }

    #[test]
    fn test_write_exports_formula_source() {
        let mut engine = Engine::new(2, 2).unwrap();
        engine.put("A1", "5").unwrap();
        engine.put("B1", "=A1*2").unwrap();

        let mut out = Vec::new();
        CsvWriter::write(&engine, &mut out, &CsvWriteOptions::default()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "5,=A1*2\n,\n");
    }

    #[test]
    fn test_write_with_semicolon_delimiter() {
        let mut engine = Engine::new(1, 2).unwrap();
        engine.put("A1", "1").unwrap();
        engine.put("B1", "2").unwrap();

        let mut out = Vec::new();
        let options = CsvWriteOptions { delimiter: b';' };
        CsvWriter::write(&engine, &mut out, &options).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1;2\n");
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.csv");

        let mut engine = Engine::new(3, 3).unwrap();
        engine.put("A1", "1").unwrap();
        engine.put("A2", "2").unwrap();
        engine.put("C1", "=SUMME(A1:A2)").unwrap();
        engine.put("C2", "=1/0").unwrap();

        CsvWriter::write_file(&engine, &path, &CsvWriteOptions::default()).unwrap();

        let mut restored = Engine::new(3, 3).unwrap();
        CsvReader::read_file(&path, &mut restored, &CsvReadOptions::default()).unwrap();

        assert_eq!(restored.get("A1").unwrap(), "1");
        assert_eq!(restored.get("C1").unwrap(), "3");
        assert_eq!(restored.get("C2").unwrap(), "#DIV/0!");
        assert_eq!(
            restored
                .sheet()
                .formula(gridcalc_core::CellAddress::parse("C1").unwrap())
                .unwrap(),
            "SUMME(A1:A2)"
        );
    }
}
