//! # gridcalc-formula
//!
//! Formula engine for gridcalc.
//!
//! This crate provides:
//! - Tokenization of formula bodies into typed tokens
//! - Infix-to-postfix conversion (shunting-yard) with immediate cell
//!   reference resolution
//! - Postfix evaluation over a signed 64-bit integer stack
//! - Range aggregate functions (SUMME, MIN, MAX, MITTELWERT)
//! - The [`Engine`] orchestrator that owns the grid and maps evaluation
//!   faults to display error codes
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_formula::Engine;
//!
//! let mut engine = Engine::new(10, 10).unwrap();
//! engine.put("A1", "5").unwrap();
//! engine.put("A2", "7").unwrap();
//! engine.put("B1", "=A1+A2").unwrap();
//! assert_eq!(engine.get("B1").unwrap(), "12");
//! ```

pub mod engine;
pub mod error;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod rpn;
pub mod token;

pub use engine::Engine;
pub use error::{FormulaError, FormulaResult};
pub use lexer::tokenize;
pub use parser::to_rpn;
pub use rpn::eval_rpn;
pub use token::{Operator, Token};
