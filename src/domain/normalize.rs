use unicode_normalization::UnicodeNormalization;

/// Canonical form of a free-text field before it is hashed.
///
/// NFKC first, so full-width and compatibility characters fold into their
/// plain forms, then whitespace is trimmed and every run of whitespace
/// (including CR, LF and tab) becomes a single space, then lower-case.
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let composed: String = input.nfkc().collect();
    let collapsed = composed.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed.to_lowercase()
}

/// Same as [`normalize`], for optional fields. Absent means empty.
pub fn normalize_opt(input: Option<&str>) -> String {
    input.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
        assert_eq!(normalize_opt(None), "");
    }

    #[test]
    fn test_whitespace_and_case() {
        assert_eq!(normalize("  Crimson  RED\n"), normalize("crimson red"));
        assert_eq!(normalize("  Crimson  RED\n"), "crimson red");
        assert_eq!(normalize("a\r\n\tb"), "a b");
        assert_eq!(normalize("Hello \t  World"), "hello world");
    }

    #[test]
    fn test_full_width_folds_to_ascii() {
        assert_eq!(normalize("ＡＬＩＣＥ"), "alice");
        assert_eq!(normalize("Ａｌｉｃｅ\u{3000}Ｓｍｉｔｈ"), "alice smith");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "  Crimson  RED\n",
            "ＡＢＣ　ｄｅｆ",
            "김 민 준",
            "\u{FB01}re",
            "Straße",
            "",
            "tab\tand\nnewline",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
