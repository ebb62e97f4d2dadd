//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula tokenization, parsing, or evaluation
///
/// Everything here is caught by the engine and rendered as a display error
/// code; only [`FormulaError::DivideByZero`] maps to `#DIV/0!`, the rest to
/// `#ERR`.
#[derive(Debug, Error)]
pub enum FormulaError {
    /// A character or token that fits no category
    #[error("Unexpected token: '{0}'")]
    UnexpectedToken(String),

    /// Unbalanced parentheses
    #[error("Mismatched parentheses")]
    MismatchedParens,

    /// Operand/operator counts don't line up
    #[error("Malformed expression")]
    MalformedExpression,

    /// Integer division by zero
    #[error("Division by zero")]
    DivideByZero,

    /// A value that is not an optionally-signed decimal integer
    #[error("Not an integer: '{0}'")]
    NotANumber(String),

    /// A referenced cell cannot be used as an operand
    #[error("Reference error: {0}")]
    Ref(String),

    /// An aggregate over a range with no numeric values
    #[error("Empty range")]
    EmptyRange,

    /// A recognized function name with malformed call syntax
    #[error("Invalid function syntax: {0}")]
    InvalidFunction(String),

    /// Address or range resolution failure
    #[error(transparent)]
    Core(#[from] gridcalc_core::Error),
}
