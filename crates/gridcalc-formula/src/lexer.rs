//! Formula tokenizer
//!
//! Scans a normalized formula body (marker stripped, uppercased, whitespace
//! removed) left to right into [`Token`]s. Every character must belong to a
//! token; anything else is an [`FormulaError::UnexpectedToken`].

use crate::error::{FormulaError, FormulaResult};
use crate::token::{Operator, Token};

/// Tokenize a normalized formula body
///
/// # Example
/// ```rust
/// use gridcalc_formula::{tokenize, Operator, Token};
///
/// let tokens = tokenize("A1+2").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::CellRef("A1".into()),
///         Token::Op(Operator::Add),
///         Token::Number("2".into()),
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> FormulaResult<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    Ok(tokens)
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn next_token(&mut self) -> FormulaResult<Option<Token>> {
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match c {
            '+' => self.single(Token::Op(Operator::Add)),
            '-' => self.single(Token::Op(Operator::Sub)),
            '*' => self.single(Token::Op(Operator::Mul)),
            '/' => self.single(Token::Op(Operator::Div)),
            '^' => self.single(Token::Op(Operator::Pow)),
            '(' => self.single(Token::LeftParen),
            ')' => self.single(Token::RightParen),
            ':' => self.single(Token::Colon),
            ',' => self.single(Token::Comma),
            _ if c.is_ascii_digit() => self.scan_number(),
            _ if c.is_ascii_alphabetic() => self.scan_reference()?,
            _ => return Err(FormulaError::UnexpectedToken(c.to_string())),
        };

        Ok(Some(token))
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    fn scan_number(&mut self) -> Token {
        let start = self.pos;
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }
        Token::Number(self.input[start..self.pos].to_string())
    }

    /// A letter run must be followed by a digit run: cell references are the
    /// only alphabetic tokens in expression context.
    fn scan_reference(&mut self) -> FormulaResult<Token> {
        let start = self.pos;
        while self.peek_char().map_or(false, |c| c.is_ascii_alphabetic()) {
            self.advance();
        }

        let digit_start = self.pos;
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.pos == digit_start {
            return Err(FormulaError::UnexpectedToken(
                self.input[start..self.pos].to_string(),
            ));
        }

        Ok(Token::CellRef(self.input[start..self.pos].to_string()))
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}
