//! Year extraction from free-form date strings

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// First standalone four-digit year anywhere in the string
    static ref YEAR_REGEX: Regex = Regex::new(r"\b(1[0-9]{3}|2[0-9]{3})\b").unwrap();
}

/// Extract a 4-digit year from the date formats the library stores
/// ("2020-03-01", "March 2020", "2020", "2020-03-01 00:00:00").
pub fn extract_year(date: &str) -> Option<String> {
    YEAR_REGEX.find(date).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year_iso() {
        assert_eq!(extract_year("2020-03-01").as_deref(), Some("2020"));
    }

    #[test]
    fn test_extract_year_textual() {
        assert_eq!(extract_year("March 2020").as_deref(), Some("2020"));
        assert_eq!(extract_year("1998").as_deref(), Some("1998"));
    }

    #[test]
    fn test_extract_year_none() {
        assert_eq!(extract_year("in press"), None);
        assert_eq!(extract_year(""), None);
        // three-digit run inside a longer number is not a year
        assert_eq!(extract_year("12345"), None);
    }
}
