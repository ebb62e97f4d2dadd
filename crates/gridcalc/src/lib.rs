//! # gridcalc
//!
//! A grid-based integer calculator: cells hold literal text or formulas,
//! and formulas evaluate eagerly against other cells, ranges, and a small
//! aggregate function library.
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut engine = Engine::new(10, 10).unwrap();
//!
//! engine.put("A1", "1").unwrap();
//! engine.put("A2", "2").unwrap();
//! engine.put("A3", "3").unwrap();
//!
//! engine.put("B1", "=A1+A2*A3").unwrap();
//! engine.put("C1", "=SUMME(A1:A3)").unwrap();
//!
//! assert_eq!(engine.get("B1").unwrap(), "7");
//! assert_eq!(engine.get("C1").unwrap(), "6");
//! ```

pub mod prelude;

// Re-export core types
pub use gridcalc_core::{
    Cell, CellAddress, CellError, CellRange, CellRangeIterator, Error, Result, Sheet, MAX_COLS,
    MAX_ROWS,
};

// Re-export the formula engine
pub use gridcalc_formula::{
    eval_rpn, to_rpn, tokenize, Engine, FormulaError, FormulaResult, Operator, Token,
};

// Re-export CSV types
pub use gridcalc_csv::{CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter};
