//! Range aggregate functions
//!
//! Formula bodies of the form `NAME(<range>)` for the fixed set of names
//! below are evaluated here instead of the expression parser. The only
//! argument shape is a single range; multiple arguments and nested
//! expressions are not supported.

use gridcalc_core::{CellRange, Sheet};

use crate::error::{FormulaError, FormulaResult};
use crate::rpn::parse_int;

/// Reduction over the numeric values collected from a range
type Reduce = fn(&[i64]) -> FormulaResult<i64>;

/// A range aggregate function
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    reduce: Reduce,
}

const FUNCTIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "SUMME",
        reduce: reduce_sum,
    },
    FunctionDef {
        name: "MIN",
        reduce: reduce_min,
    },
    FunctionDef {
        name: "MAX",
        reduce: reduce_max,
    },
    FunctionDef {
        name: "MITTELWERT",
        reduce: reduce_average,
    },
];

/// Find the function whose call syntax the body starts with
///
/// Matches `NAME(`, so `MINUTE(...)` is not mistaken for `MIN`.
pub fn lookup(body: &str) -> Option<&'static FunctionDef> {
    FUNCTIONS.iter().find(|def| {
        body.strip_prefix(def.name)
            .map_or(false, |rest| rest.starts_with('('))
    })
}

/// Evaluate `def` against the range argument inside `body`
pub fn evaluate(def: &FunctionDef, body: &str, sheet: &Sheet) -> FormulaResult<i64> {
    let inner = body
        .strip_prefix(def.name)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| FormulaError::InvalidFunction(body.to_string()))?;

    let range = CellRange::parse(inner.trim())?;
    let values = range_values(&range, sheet)?;
    (def.reduce)(&values)
}

/// Collect the numeric values of a range in row-major order
///
/// Empty cells are skipped and count neither toward the aggregate nor its
/// cardinality; any other non-integer value (error codes included) fails
/// the whole function.
fn range_values(range: &CellRange, sheet: &Sheet) -> FormulaResult<Vec<i64>> {
    sheet.check(range.start)?;
    sheet.check(range.end)?;

    let mut values = Vec::new();
    for addr in range.cells() {
        let text = sheet.value(addr)?.trim();
        if text.is_empty() {
            continue;
        }
        values.push(parse_int(text)?);
    }

    Ok(values)
}

fn reduce_sum(values: &[i64]) -> FormulaResult<i64> {
    Ok(values.iter().fold(0i64, |acc, v| acc.wrapping_add(*v)))
}

fn reduce_min(values: &[i64]) -> FormulaResult<i64> {
    values.iter().copied().min().ok_or(FormulaError::EmptyRange)
}

fn reduce_max(values: &[i64]) -> FormulaResult<i64> {
    values.iter().copied().max().ok_or(FormulaError::EmptyRange)
}

/// Integer mean, ties rounded half away from zero
fn reduce_average(values: &[i64]) -> FormulaResult<i64> {
    if values.is_empty() {
        return Err(FormulaError::EmptyRange);
    }

    let sum = values.iter().fold(0i64, |acc, v| acc.wrapping_add(*v));
    let count = values.len() as i64;

    let quot = sum / count;
    let rem = sum % count;
    if 2 * rem.abs() >= count {
        Ok(quot + rem.signum())
    } else {
        Ok(quot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcalc_core::CellAddress;
    use pretty_assertions::assert_eq;

    fn sheet_with(values: &[(&str, &str)]) -> Sheet {
        let mut sheet = Sheet::new(10, 10).unwrap();
        for (addr, value) in values {
            sheet
                .write_literal(CellAddress::parse(addr).unwrap(), value)
                .unwrap();
        }
        sheet
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("SUMME(A1:A3)").unwrap().name, "SUMME");
        assert_eq!(lookup("MIN(A1:A3)").unwrap().name, "MIN");
        assert_eq!(lookup("MAX(A1:A3)").unwrap().name, "MAX");
        assert_eq!(lookup("MITTELWERT(A1:A3)").unwrap().name, "MITTELWERT");

        // Name must be followed by the opening paren
        assert!(lookup("MINUTE(A1:A3)").is_none());
        assert!(lookup("MIN").is_none());
        assert!(lookup("A1+A2").is_none());
        assert!(lookup("SUM(A1:A3)").is_none());
    }

    fn eval(body: &str, sheet: &Sheet) -> FormulaResult<i64> {
        let def = lookup(body).expect("known function");
        evaluate(def, body, sheet)
    }

    #[test]
    fn test_sum() {
        let sheet = sheet_with(&[("A1", "1"), ("A2", "2"), ("A3", "3")]);
        assert_eq!(eval("SUMME(A1:A3)", &sheet).unwrap(), 6);
    }

    #[test]
    fn test_sum_of_empty_range_is_zero() {
        let sheet = sheet_with(&[]);
        assert_eq!(eval("SUMME(A1:A3)", &sheet).unwrap(), 0);
    }

    #[test]
    fn test_min_max() {
        let sheet = sheet_with(&[("A1", "123"), ("A2", "1"), ("B1", "-4")]);
        assert_eq!(eval("MIN(A1:B2)", &sheet).unwrap(), -4);
        assert_eq!(eval("MAX(A1:B2)", &sheet).unwrap(), 123);
    }

    #[test]
    fn test_min_max_average_fail_on_empty_range() {
        let sheet = sheet_with(&[]);
        assert!(matches!(
            eval("MIN(A1:A2)", &sheet),
            Err(FormulaError::EmptyRange)
        ));
        assert!(matches!(
            eval("MAX(A1:A2)", &sheet),
            Err(FormulaError::EmptyRange)
        ));
        assert!(matches!(
            eval("MITTELWERT(A1:A2)", &sheet),
            Err(FormulaError::EmptyRange)
        ));
    }

    #[test]
    fn test_empty_cells_are_skipped() {
        // A2 stays empty; it neither contributes nor counts
        let sheet = sheet_with(&[("A1", "1"), ("A3", "5")]);
        assert_eq!(eval("SUMME(A1:A3)", &sheet).unwrap(), 6);
        assert_eq!(eval("MITTELWERT(A1:A3)", &sheet).unwrap(), 3);
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        let sheet = sheet_with(&[("A1", "1"), ("A2", "2")]);
        assert_eq!(eval("MITTELWERT(A1:A2)", &sheet).unwrap(), 2);

        let sheet = sheet_with(&[("A1", "-1"), ("A2", "-2")]);
        assert_eq!(eval("MITTELWERT(A1:A2)", &sheet).unwrap(), -2);

        let sheet = sheet_with(&[("A1", "1"), ("A2", "2"), ("A3", "3")]);
        assert_eq!(eval("MITTELWERT(A1:A3)", &sheet).unwrap(), 2);

        // 13 / 3 rounds down to 4
        let sheet = sheet_with(&[("A1", "7"), ("A2", "3"), ("A3", "3")]);
        assert_eq!(eval("MITTELWERT(A1:A3)", &sheet).unwrap(), 4);
    }

    #[test]
    fn test_non_integer_value_fails() {
        let sheet = sheet_with(&[("A1", "1"), ("A2", "abc")]);
        assert!(matches!(
            eval("SUMME(A1:A2)", &sheet),
            Err(FormulaError::NotANumber(v)) if v == "abc"
        ));
    }

    #[test]
    fn test_error_code_value_fails() {
        let sheet = sheet_with(&[("A1", "1"), ("A2", "#DIV/0!")]);
        assert!(matches!(
            eval("SUMME(A1:A2)", &sheet),
            Err(FormulaError::NotANumber(_))
        ));
    }

    #[test]
    fn test_malformed_call_syntax() {
        let sheet = sheet_with(&[]);
        assert!(matches!(
            eval("SUMME(A1:A3", &sheet),
            Err(FormulaError::InvalidFunction(_))
        ));
        // A bare address is not a range argument
        assert!(matches!(eval("MAX(A1)", &sheet), Err(FormulaError::Core(_))));
        // Multiple arguments are not supported
        assert!(matches!(
            eval("SUMME(A1:A2,B1:B2)", &sheet),
            Err(FormulaError::Core(_))
        ));
    }

    #[test]
    fn test_range_outside_sheet_bounds() {
        let sheet = Sheet::new(5, 5).unwrap();
        assert!(matches!(
            eval("SUMME(A1:Z9)", &sheet),
            Err(FormulaError::Core(_))
        ));
    }

    #[test]
    fn test_range_corners_normalized() {
        let sheet = sheet_with(&[("A1", "1"), ("A2", "2"), ("A3", "3")]);
        assert_eq!(eval("SUMME(A3:A1)", &sheet).unwrap(), 6);
    }
}
