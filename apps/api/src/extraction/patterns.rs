//! Shared compiled patterns and small text helpers used across extractors.
//!
//! Every pattern is compiled once, on first use, and is read-only afterwards.

use std::sync::LazyLock;

use regex::Regex;

/// Glyphs treated as list bullets at the start of a line.
pub const BULLET_CHARS: &[char] = &['•', '●', '◦', '▪', '▸', '►', '-', '*'];

/// Joiner for multi-line descriptions.
pub const DESCRIPTION_JOINER: &str = " | ";

pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").expect("email pattern should compile")
});

pub static WHOLE_LINE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.+-]+@[\w-]+\.[\w.-]+$").expect("email line pattern should compile")
});

pub static URL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://|www\.)").expect("url prefix pattern should compile")
});

static PHONE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?\d[\d\s\-().]+$").expect("phone shape pattern should compile")
});

/// Four-digit year in the 1900s or 2000s, unanchored.
pub static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:19|20)\d{2}").expect("year pattern should compile"));

/// Year optionally wrapped in parentheses, for stripping out of names.
pub static PAREN_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(?\s*(?:19|20)\d{2}\s*\)?").expect("paren year pattern should compile")
});

pub static TRAILING_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[()]+$").expect("trailing parens pattern should compile"));

pub static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(.*\)$").expect("parenthesized pattern should compile"));

const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

/// A date or date range: `Jan 2020 - Present`, `03/2019 to 2021`, `2018`.
pub static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    let term = format!(r"(?:{MONTH}[\s,]*(?:19|20)\d{{2}}|(?:0?[1-9]|1[0-2])/(?:19|20)\d{{2}}|(?:19|20)\d{{2}})");
    let end = format!(r"(?:{MONTH}[\s,]*(?:19|20)\d{{2}}|(?:0?[1-9]|1[0-2])/(?:19|20)\d{{2}}|(?:19|20)\d{{2}}|present|current|now|ongoing)");
    Regex::new(&format!(r"(?i){term}(?:\s*[-–—to]+\s*{end})?"))
        .expect("date range pattern should compile")
});

const DEGREE_ALTERNATIVES: &[&str] = &[
    r"(?:Bachelor|B\.?S\.?|B\.?A\.?|B\.?Sc\.?|B\.?E\.?|B\.?Tech\.?|B\.?Com\.?|BBA|BCA)",
    r"(?:Master|M\.?S\.?|M\.?A\.?|M\.?Sc\.?|M\.?E\.?|M\.?Tech\.?|M\.?Com\.?|MBA|MCA|M\.?Phil)",
    r"(?:Doctor(?:ate)?|Ph\.?D\.?|D\.?Phil)",
    r"(?:Associate|A\.?S\.?|A\.?A\.?)",
    r"(?:Diploma|Certificate|Certification)",
    r"(?:High\s*School|Secondary|HSC|SSC|Intermediate|GED|A-Level|O-Level|GCSE)",
];

/// Combined degree-name matcher, case-insensitive and unanchored.
pub static DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", DEGREE_ALTERNATIVES.join("|")))
        .expect("degree pattern should compile")
});

/// True when the whole string is a phone number with at least seven digits.
pub fn is_phone_shaped(s: &str) -> bool {
    PHONE_SHAPE.is_match(s) && digit_count(s) >= 7
}

pub fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Strips any run of leading bullet glyphs, then surrounding whitespace.
pub fn strip_bullet(s: &str) -> &str {
    s.trim_start_matches(BULLET_CHARS).trim()
}

pub fn starts_with_bullet(s: &str) -> bool {
    s.starts_with(BULLET_CHARS)
}

/// At least one cased character and no lowercase ones ("CI/CD", "AWS").
pub fn is_all_upper(s: &str) -> bool {
    s.chars().any(|c| c.is_uppercase()) && !s.chars().any(|c| c.is_lowercase())
}

pub fn has_upper(s: &str) -> bool {
    s.chars().any(|c| c.is_uppercase())
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Trims whitespace plus any of `extra` from the end of `s`.
pub fn trim_end_with<'a>(s: &'a str, extra: &[char]) -> &'a str {
    s.trim_end_matches(|c: char| c.is_whitespace() || extra.contains(&c))
}
