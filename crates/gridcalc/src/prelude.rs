//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    // Addressing
    CellAddress,
    CellError,
    CellRange,

    // CSV
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,

    // Engine
    Engine,

    // Error types
    Error,
    FormulaError,
    Result,

    // Grid
    Sheet,
};
