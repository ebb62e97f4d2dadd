//! Engine orchestration
//!
//! The [`Engine`] owns the grid and drives evaluation: a `put` of formula
//! text runs the function layer or the tokenizer/parser/evaluator pipeline
//! and stores the outcome in the target cell before returning. Faults from
//! that pipeline become display error codes; only address resolution
//! failures escape to the caller.

use gridcalc_core::{CellAddress, CellError, Sheet};

use crate::error::{FormulaError, FormulaResult};
use crate::{functions, lexer, parser, rpn};

/// The formula engine
///
/// Owns its [`Sheet`] exclusively; all access goes through `put`/`get` or
/// the read-only [`Engine::sheet`] accessor. Evaluation is eager: a formula
/// is evaluated exactly once, at write time, and a cell referencing another
/// never re-evaluates when the referenced cell later changes.
#[derive(Debug)]
pub struct Engine {
    sheet: Sheet,
}

impl Engine {
    /// Create an engine with an empty grid
    ///
    /// Fails if `rows` is outside `[1, 99]` or `cols` outside `[1, 26]`.
    pub fn new(rows: u32, cols: u16) -> gridcalc_core::Result<Self> {
        Ok(Self {
            sheet: Sheet::new(rows, cols)?,
        })
    }

    /// The underlying grid, read-only
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Write a value or formula to a cell by address string
    ///
    /// Input starting with `=` is stored and evaluated as a formula;
    /// anything else is a literal. Fails only on a malformed or
    /// out-of-bounds address; formula faults are captured as in-cell
    /// display values, never returned.
    ///
    /// # Example
    /// ```rust
    /// use gridcalc_formula::Engine;
    ///
    /// let mut engine = Engine::new(10, 10).unwrap();
    /// engine.put("A1", "6").unwrap();
    /// engine.put("A2", "0").unwrap();
    /// engine.put("B1", "=A1/A2").unwrap();
    /// assert_eq!(engine.get("B1").unwrap(), "#DIV/0!");
    /// ```
    pub fn put(&mut self, address: &str, input: &str) -> gridcalc_core::Result<()> {
        let addr = CellAddress::parse(address)?;
        self.put_at(addr, input)
    }

    /// Write a value or formula to a cell by address
    pub fn put_at(&mut self, addr: CellAddress, input: &str) -> gridcalc_core::Result<()> {
        let input = input.trim();

        match input.strip_prefix('=') {
            None => self.sheet.write_literal(addr, input),
            Some(body) => {
                // Normalize: uppercase, all whitespace removed
                let source: String = body
                    .split_whitespace()
                    .collect::<String>()
                    .to_uppercase();

                self.sheet.write_formula(addr, &source)?;
                let value = match self.evaluate(&source) {
                    Ok(value) => value,
                    Err(err) => {
                        log::debug!("formula '{}' failed: {}", source, err);
                        let code = match err {
                            FormulaError::DivideByZero => CellError::Div0,
                            _ => CellError::Err,
                        };
                        code.as_str().to_string()
                    }
                };
                self.sheet.write_result(addr, &value)
            }
        }
    }

    /// Read a cell's display value by address string
    ///
    /// Fails only on a malformed or out-of-bounds address.
    pub fn get(&self, address: &str) -> gridcalc_core::Result<&str> {
        let addr = CellAddress::parse(address)?;
        self.sheet.value(addr)
    }

    fn evaluate(&self, body: &str) -> FormulaResult<String> {
        if body.is_empty() {
            return Ok(String::new());
        }

        if let Some(def) = functions::lookup(body) {
            let value = functions::evaluate(def, body, &self.sheet)?;
            return Ok(value.to_string());
        }

        let tokens = lexer::tokenize(body)?;
        let postfix = parser::to_rpn(&tokens, &self.sheet)?;
        let value = rpn::eval_rpn(&postfix)?;
        Ok(value.to_string())
    }
}
