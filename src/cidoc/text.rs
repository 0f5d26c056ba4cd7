//! Whitespace normalization for free text taken from TEI elements.

/// Collapses runs of whitespace (newlines included) into single spaces and
/// trims both ends.
///
/// ```
/// use teicidoc::cidoc::normalize_string;
///
/// assert_eq!(normalize_string("  Gulbransson,\n      Olaf "), "Gulbransson, Olaf");
/// ```
pub fn normalize_string(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        let raw = "\n        Gulbransson,\n\t   Olaf\n    ";
        assert_eq!(normalize_string(raw), "Gulbransson, Olaf");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_string(""), "");
        assert_eq!(normalize_string(" \n\t "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["a  b", " x\ny ", "", "single", "Tom\u{a0} Jerry"] {
            let once = normalize_string(raw);
            assert_eq!(normalize_string(&once), once);
        }
    }
}
