//! CSV options

use gridcalc_core::CellAddress;

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Top-left cell where insertion begins (default: A1)
    pub start: CellAddress,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            start: CellAddress::new(0, 0),
        }
    }
}

/// Options for writing CSV files
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}
