//! Infix-to-postfix conversion (shunting-yard)
//!
//! Consumes the token stream, resolving cell references to numeric literals
//! against the sheet's current values as they pass through, and emits a
//! postfix sequence containing only numbers and operators.

use gridcalc_core::{CellAddress, Sheet};

use crate::error::{FormulaError, FormulaResult};
use crate::rpn::parse_int;
use crate::token::Token;

/// Convert a token sequence to postfix (RPN) order
///
/// Range and list separators are rejected here: they only have meaning
/// inside recognized function calls, which never reach this parser.
pub fn to_rpn(tokens: &[Token], sheet: &Sheet) -> FormulaResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::CellRef(name) => {
                output.push(Token::Number(resolve_ref(name, sheet)?));
            }
            Token::Number(text) => output.push(Token::Number(text.clone())),
            Token::Op(op) => {
                loop {
                    let pop = match ops.last() {
                        Some(Token::Op(top)) => {
                            top.precedence() > op.precedence()
                                || (top.precedence() == op.precedence()
                                    && !op.is_right_associative())
                        }
                        _ => false,
                    };
                    if !pop {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        output.push(top);
                    }
                }
                ops.push(Token::Op(*op));
            }
            Token::LeftParen => ops.push(Token::LeftParen),
            Token::RightParen => loop {
                match ops.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(FormulaError::MismatchedParens),
                }
            },
            Token::Colon => {
                return Err(FormulaError::UnexpectedToken(":".into()));
            }
            Token::Comma => {
                return Err(FormulaError::UnexpectedToken(",".into()));
            }
        }
    }

    while let Some(top) = ops.pop() {
        if matches!(top, Token::LeftParen) {
            return Err(FormulaError::MismatchedParens);
        }
        output.push(top);
    }

    Ok(output)
}

/// Resolve a cell reference to its numeric literal
///
/// An empty cell resolves to `"0"`. A cell holding an error code cannot be
/// an operand, and neither can non-integer text.
fn resolve_ref(name: &str, sheet: &Sheet) -> FormulaResult<String> {
    let addr = CellAddress::parse(name)?;
    let value = sheet
        .value(addr)
        .map_err(|_| FormulaError::Ref(name.to_string()))?
        .trim();

    if value.is_empty() {
        return Ok("0".to_string());
    }
    if value.starts_with('#') {
        return Err(FormulaError::Ref(name.to_string()));
    }

    parse_int(value)?;
    Ok(value.to_string())
}
