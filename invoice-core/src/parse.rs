//! Parsing rules for untrusted text fields.
//!
//! Numeric form inputs never abort a mutation: missing, blank, or
//! unparsable text resolves to the field's default instead.

/// Parse a decimal field, falling back to `default` on missing, blank, or
/// unparsable input.
pub fn parse_f64_or(input: Option<&str>, default: f64) -> f64 {
    match input.map(str::trim) {
        Some(s) if !s.is_empty() => s.parse().unwrap_or(default),
        _ => default,
    }
}

/// Parse a non-negative integer field with the same fallback contract.
///
/// Negative input fails the `u32` parse and resolves to `default`, keeping
/// quantities in line with the other numeric fields instead of erroring.
pub fn parse_quantity_or(input: Option<&str>, default: u32) -> u32 {
    match input.map(str::trim) {
        Some(s) if !s.is_empty() => s.parse().unwrap_or(default),
        _ => default,
    }
}

/// Trim a text field, dropping it entirely when absent or blank.
pub fn non_blank(input: Option<String>) -> Option<String> {
    input
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trim a text field, treating absence as empty.
pub fn trimmed(input: Option<String>) -> String {
    input.map(|s| s.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_accepts_valid_input() {
        assert_eq!(parse_f64_or(Some("2.50"), 0.0), 2.5);
        assert_eq!(parse_f64_or(Some("  7 "), 0.0), 7.0);
    }

    #[test]
    fn parse_f64_falls_back_on_bad_input() {
        assert_eq!(parse_f64_or(Some("abc"), 0.0), 0.0);
        assert_eq!(parse_f64_or(Some(""), 3.0), 3.0);
        assert_eq!(parse_f64_or(Some("   "), 3.0), 3.0);
        assert_eq!(parse_f64_or(None, 1.5), 1.5);
    }

    #[test]
    fn parse_quantity_falls_back_on_bad_input() {
        assert_eq!(parse_quantity_or(Some("3"), 1), 3);
        assert_eq!(parse_quantity_or(Some("three"), 1), 1);
        assert_eq!(parse_quantity_or(Some("-2"), 1), 1);
        assert_eq!(parse_quantity_or(Some("2.5"), 1), 1);
        assert_eq!(parse_quantity_or(None, 1), 1);
    }

    #[test]
    fn non_blank_trims_and_filters() {
        assert_eq!(non_blank(Some("  Widget  ".to_string())), Some("Widget".to_string()));
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn trimmed_treats_absence_as_empty() {
        assert_eq!(trimmed(Some("  note ".to_string())), "note");
        assert_eq!(trimmed(None), "");
    }
}
