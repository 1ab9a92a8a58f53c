//! Utilities for writing A1-style cell references and quoted names.

/// Convert a 0-indexed column to its letter form (0 -> "A", 25 -> "Z", 26 -> "AA").
pub fn col_to_letter(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = u64::from(col) + 1; // 1-based
    while n > 0 {
        n -= 1;
        // n % 26 < 26, so the narrowing is lossless
        let offset = u8::try_from(n % 26).unwrap_or(0);
        letters.push(char::from(b'A' + offset));
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Quote a sheet title or column header for use inside a formula.
///
/// Names are wrapped in single quotes; embedded single quotes are doubled.
pub fn quote_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// A1 notation for the block starting at A1 that spans `rows` x `columns` cells,
/// e.g. `'Data'!A1:F3`. Zero extents are clamped to one cell.
pub fn a1_range(sheet_title: &str, rows: u32, columns: u32) -> String {
    let last_col = col_to_letter(columns.max(1) - 1);
    format!("{}!A1:{}{}", quote_name(sheet_title), last_col, rows.max(1))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "A")]
    #[test_case(5, "F")]
    #[test_case(25, "Z")]
    #[test_case(26, "AA")]
    #[test_case(701, "ZZ")]
    #[test_case(702, "AAA")]
    fn test_col_to_letter(col: u32, expected: &str) {
        assert_eq!(col_to_letter(col), expected);
    }

    #[test]
    fn test_col_to_letter_max_column() {
        assert_eq!(col_to_letter(u32::MAX), "MWLQKWV");
    }

    #[test]
    fn test_quote_name_doubles_quotes() {
        assert_eq!(quote_name("Unit Price"), "'Unit Price'");
        assert_eq!(quote_name("Bob's Data"), "'Bob''s Data'");
    }

    #[test]
    fn test_a1_range() {
        assert_eq!(a1_range("Data", 3, 6), "'Data'!A1:F3");
        assert_eq!(a1_range("Data", 0, 0), "'Data'!A1:A1");
    }
}
