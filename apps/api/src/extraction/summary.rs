use std::sync::LazyLock;

use regex::Regex;

const MAX_SUMMARY_CHARS: usize = 500;

static LEADING_BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[•●◦▪▸►\-*][^\S\n]*").expect("summary bullet pattern should compile")
});

/// Summary text with per-line bullets removed, capped at 500 characters.
pub fn extract_summary(section: Option<&str>) -> String {
    let Some(section) = section else {
        return String::new();
    };
    let cleaned = LEADING_BULLET.replace_all(section, "");
    cleaned.trim().chars().take(MAX_SUMMARY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_removed_per_line() {
        let summary = extract_summary(Some("• Backend engineer\n- Loves Rust"));
        assert_eq!(summary, "Backend engineer\nLoves Rust");
    }

    #[test]
    fn test_truncated_to_limit() {
        let long = "a".repeat(800);
        assert_eq!(extract_summary(Some(&long)).chars().count(), 500);
    }

    #[test]
    fn test_missing_section_is_empty() {
        assert_eq!(extract_summary(None), "");
    }
}
