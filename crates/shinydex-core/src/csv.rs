//! Minimal CSV parsing for published spreadsheet exports.
//!
//! The exports are simple enough that a full CSV implementation is overkill:
//! the first line is a header, fields may be wrapped in double quotes to
//! protect embedded commas, and there is no escaped-quote convention. The
//! parser never fails; mismatched quotes just leave the quote state toggled
//! for the rest of the line.

use std::collections::HashMap;

/// One data row, keyed by trimmed header name.
///
/// Loaders should convert a `Row` into a typed record at the source boundary
/// instead of passing the raw mapping deeper into the system.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// Cell value for a header, or `""` when the column is missing.
    pub fn get(&self, name: &str) -> &str {
        self.cells.get(name).map(String::as_str).unwrap_or("")
    }

    /// Cell value as an owned string, or `None` when empty/missing.
    pub fn get_opt(&self, name: &str) -> Option<String> {
        let value = self.get(name);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// True iff the cell equals `"TRUE"` case-insensitively.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).eq_ignore_ascii_case("TRUE")
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            cells: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Parse CSV text into header-keyed rows.
///
/// Empty input (after trimming) yields no rows. Missing trailing cells map
/// to the empty string; carriage returns are stripped everywhere.
pub fn parse(text: &str) -> Vec<Row> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = text.split('\n');
    let headers: Vec<String> = match lines.next() {
        Some(header_line) => header_line
            .replace('\r', "")
            .split(',')
            .map(|h| h.trim().to_string())
            .collect(),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let values = split_line(line);
            let cells = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = values
                        .get(i)
                        .map(|v| v.replace('\r', "").trim().to_string())
                        .unwrap_or_default();
                    (header.clone(), value)
                })
                .collect();
            Row { cells }
        })
        .collect()
}

/// Split one line on commas, honoring double-quote pairs.
///
/// A quote character toggles quote state and is dropped from the output.
fn split_line(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                result.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    result.push(current);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let rows = parse("name,active,role\nAsh,TRUE,Leader\nMisty,FALSE,Member");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("name"), "Ash");
        assert_eq!(rows[0].get("role"), "Leader");
        assert_eq!(rows[1].get("name"), "Misty");
        assert!(!rows[1].flag("active"));
    }

    #[test]
    fn test_parse_quoted_comma() {
        let rows = parse("name,note\nAsh,\"hello, world\"");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("note"), "hello, world");
    }

    #[test]
    fn test_parse_round_trip_recovers_rows() {
        // Serialized 3 rows x 2 headers, one field with an embedded comma.
        let text = "a,b\n1,2\n\"3,5\",4\n5,6";
        let rows = parse(text);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].get("a"), "3,5");
        assert_eq!(rows[2].get("b"), "6");
    }

    #[test]
    fn test_parse_missing_trailing_cells() {
        let rows = parse("a,b,c\n1,2");
        assert_eq!(rows[0].get("b"), "2");
        assert_eq!(rows[0].get("c"), "");
    }

    #[test]
    fn test_parse_strips_carriage_returns_and_trims() {
        let rows = parse("name ,active\r\n  Ash , TRUE\r");
        assert_eq!(rows[0].get("name"), "Ash");
        assert!(rows[0].flag("active"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("  \n  ").is_empty());
    }

    #[test]
    fn test_parse_mismatched_quote_degrades() {
        // Unterminated quote swallows the rest of the line into one cell.
        let rows = parse("a,b\n\"1,2");
        assert_eq!(rows[0].get("a"), "1,2");
        assert_eq!(rows[0].get("b"), "");
    }

    #[test]
    fn test_row_get_missing_column() {
        let rows = parse("a\n1");
        assert_eq!(rows[0].get("nonexistent"), "");
        assert_eq!(rows[0].get_opt("nonexistent"), None);
    }

    #[test]
    fn test_flag_case_insensitive() {
        let rows = parse("active\ntrue\nTrue\nyes");
        assert!(rows[0].flag("active"));
        assert!(rows[1].flag("active"));
        assert!(!rows[2].flag("active"));
    }
}
