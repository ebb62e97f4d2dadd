//! Cell address and range types

use crate::error::{Error, Result};
use crate::MAX_ROWS;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "B2")
///
/// Addresses combine a single column letter (A-Z) with a 1-based row number.
/// Multi-letter columns are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., Z=25)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// let addr = CellAddress::parse("b2").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        // Column letters
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letter in '{}'",
                s
            )));
        }
        if pos > 1 {
            return Err(Error::InvalidAddress(format!(
                "multi-letter column in '{}' (only A-Z supported)",
                s
            )));
        }

        let col = Self::letter_to_column(bytes[0] as char)?;

        // Row number
        let row_str = &s[pos..];
        if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Rows are 1-based in text, 0-based internally
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        let row = row - 1;

        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self { row, col })
    }

    /// Convert a column index to its letter (0 = A, 25 = Z)
    pub fn column_letter(col: u16) -> char {
        (b'A' + col as u8) as char
    }

    /// Convert a column letter to its index (A = 0, Z = 25)
    pub fn letter_to_column(letter: char) -> Result<u16> {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                letter
            )));
        }
        Ok(upper as u16 - 'A' as u16)
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_letter(self.col), self.row + 1)
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:B10"), inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range
    ///
    /// The range is normalized so that `start` is the top-left corner and
    /// `end` the bottom-right, whichever order the corners are given in.
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        let (start_row, end_row) = if a.row <= b.row {
            (a.row, b.row)
        } else {
            (b.row, a.row)
        };

        let (start_col, end_col) = if a.col <= b.col {
            (a.col, b.col)
        } else {
            (b.col, a.col)
        };

        Self {
            start: CellAddress::new(start_row, start_col),
            end: CellAddress::new(end_row, end_col),
        }
    }

    /// Parse a range from A1:B10 notation
    ///
    /// Both endpoints are required; a bare address is not a range.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        let colon_pos = s
            .find(':')
            .ok_or_else(|| Error::InvalidRange(format!("missing ':' in '{}'", s)))?;

        let start = CellAddress::parse(&s[..colon_pos])
            .map_err(|_| Error::InvalidRange(s.to_string()))?;
        let end = CellAddress::parse(&s[colon_pos + 1..])
            .map_err(|_| Error::InvalidRange(s.to_string()))?;

        Ok(Self::new(start, end))
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
        }
    }

    /// Format as an A1:B10 string
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current_row: u32,
    current_col: u16,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row > self.range.end.row {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.current_col);

        // Move to next cell
        self.current_col += 1;
        if self.current_col > self.range.end.col {
            self.current_col = self.range.start.col;
            self.current_row += 1;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.current_row > self.range.end.row {
            0
        } else {
            let full_rows = (self.range.end.row - self.current_row) as usize;
            let row_width = self.range.col_count() as usize;
            full_rows * row_width + (self.range.end.col - self.current_col + 1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellRangeIterator {}
