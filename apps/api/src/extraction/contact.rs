//! Contact extraction: email, phone, profile URLs, location and full name.
//!
//! All extractors read the raw document; none of them depend on segmentation
//! except the name scan, which skips lines that are section headers.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::patterns::{
    is_all_upper, is_phone_shaped, title_case, EMAIL, PARENTHESIZED, URL_PREFIX,
    WHOLE_LINE_EMAIL,
};
use crate::extraction::sections::match_header;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

pub fn extract_contact(text: &str) -> ContactInfo {
    let email = extract_email(text);
    let phone = extract_phone(text);
    ContactInfo {
        full_name: extract_name(text, &email, &phone),
        location: extract_location(text),
        linkedin: extract_linkedin(text),
        github: extract_github(text),
        email,
        phone,
    }
}

// ============================================================================
// Email, phone, profile links
// ============================================================================

static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // International or parenthesized area code: +44 20 7946 0958, (555) 123-4567
        Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{2,4}\)?[-.\s]?\d{3,4}[-.\s]?\d{3,4}")
            .expect("phone pattern should compile"),
        // Bare digit run
        Regex::new(r"\b\d{10,11}\b").expect("phone digits pattern should compile"),
        // 555-123-4567
        Regex::new(r"\b\d{3}[-.\s]\d{3}[-.\s]\d{4}\b")
            .expect("dashed phone pattern should compile"),
    ]
});

static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[\w-]+")
        .expect("linkedin pattern should compile")
});

static GITHUB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[\w-]+")
        .expect("github pattern should compile")
});

pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-like match whose digit count is within 7..=15. Each pattern
/// contributes only its first match.
pub fn extract_phone(text: &str) -> String {
    PHONE_PATTERNS
        .iter()
        .filter_map(|re| re.find(text))
        .map(|m| m.as_str().trim())
        .find(|phone| {
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            (7..=15).contains(&digits)
        })
        .map(str::to_string)
        .unwrap_or_default()
}

pub fn extract_linkedin(text: &str) -> String {
    LINKEDIN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn extract_github(text: &str) -> String {
    GITHUB
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

// ============================================================================
// Location
// ============================================================================

/// Job-title words that look like the tail of a city name ("Senior Engineer, CA").
static NON_LOCATION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "specialist", "developer", "engineer", "manager", "analyst", "designer", "consultant",
        "director", "administrator", "coordinator", "architect", "assistant", "associate",
        "executive", "supervisor", "technician", "intern", "lead", "senior", "junior", "officer",
        "representative", "professor", "teacher", "instructor", "programmer", "scientist",
        "researcher", "strategist", "accountant", "auditor", "editor", "writer", "producer",
        "operator", "mechanic", "plumber", "student", "graduate", "candidate", "expert",
        "trainer", "tutor", "volunteer", "freelancer", "contractor", "advisor", "advocate",
    ]
    .into_iter()
    .collect()
});

static COUNTRIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "pakistan", "india", "bangladesh", "sri lanka", "nepal", "afghanistan",
        "united states", "usa", "u.s.a.", "united kingdom", "uk", "u.k.", "canada",
        "australia", "new zealand", "germany", "france", "italy", "spain", "portugal",
        "netherlands", "belgium", "switzerland", "austria", "sweden", "norway", "denmark",
        "finland", "ireland", "poland", "czech republic", "romania", "hungary", "greece",
        "turkey", "russia", "ukraine", "china", "japan", "south korea", "singapore",
        "malaysia", "indonesia", "philippines", "thailand", "vietnam", "taiwan", "hong kong",
        "brazil", "mexico", "argentina", "colombia", "chile", "peru", "egypt", "nigeria",
        "south africa", "kenya", "ghana", "morocco", "saudi arabia", "uae",
        "united arab emirates", "qatar", "kuwait", "oman", "bahrain", "jordan", "lebanon",
        "iraq", "iran", "israel",
    ]
    .into_iter()
    .collect()
});

static US_STATES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
        "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
        "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
        "VA", "WA", "WV", "WI", "WY", "DC",
    ]
    .into_iter()
    .collect()
});

static LOCATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:location|address|city|based\s+in|residing\s+in)[:\s]+([^\n]+)")
        .expect("location label pattern should compile")
});

static CITY_STATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:\s[A-Z][a-z]+)*),?\s*([A-Z]{2})\b")
        .expect("city/state pattern should compile")
});

/// Segments that are contact data rather than places.
static NON_PLACE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@|http|www\.|\.com").expect("non-place pattern should compile")
});

static PHONE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?\d[\d\s\-().]{5,}$").expect("phone segment pattern should compile")
});

static NOT_A_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@|http|\d{5,}|\+\d").expect("region guard pattern should compile")
});

const LABEL_WINDOW: usize = 2000;
const PIPE_WINDOW: usize = 1200;
const PIPE_LINES: usize = 12;
const CITY_STATE_WINDOW: usize = 800;
const MAX_LOCATION_CHARS: usize = 100;

/// Three-strategy cascade; the first strategy that yields a value wins.
pub fn extract_location(text: &str) -> String {
    location_from_label(text)
        .or_else(|| location_from_segments(text))
        .or_else(|| location_from_city_state(text))
        .unwrap_or_default()
}

fn location_from_label(text: &str) -> Option<String> {
    let caps = LOCATION_LABEL.captures(prefix_chars(text, LABEL_WINDOW))?;
    let value: String = caps[1].trim().chars().take(MAX_LOCATION_CHARS).collect();
    let value = value.split('|').next().unwrap_or_default();
    let value = EMAIL.replace_all(value, "");
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn location_from_segments(text: &str) -> Option<String> {
    for line in prefix_chars(text, PIPE_WINDOW).split('\n').take(PIPE_LINES) {
        let segments: Vec<&str> = line.split('|').map(str::trim).collect();
        for (i, segment) in segments.iter().enumerate() {
            let seg = segment.trim_end_matches(',').trim();
            if seg.chars().count() < 2
                || NON_PLACE_SEGMENT.is_match(seg)
                || PHONE_SEGMENT.is_match(seg)
                || PARENTHESIZED.is_match(seg)
            {
                continue;
            }

            if COUNTRIES.contains(seg.to_lowercase().as_str()) {
                if i > 0 {
                    let prev = segments[i - 1].trim_end_matches(',').trim();
                    if !prev.is_empty() && !NOT_A_REGION.is_match(prev) {
                        return Some(format!("{prev}, {seg}"));
                    }
                }
                return Some(seg.to_string());
            }

            // "City, Region, Country" inside a single segment
            let parts: Vec<&str> = seg.split(',').map(str::trim).filter(|p| !p.is_empty()).collect();
            if parts.len() >= 2
                && parts
                    .iter()
                    .any(|p| COUNTRIES.contains(p.to_lowercase().as_str()))
            {
                return Some(seg.to_string());
            }
        }
    }
    None
}

fn location_from_city_state(text: &str) -> Option<String> {
    let window = prefix_chars(text, CITY_STATE_WINDOW);
    for caps in CITY_STATE.captures_iter(window) {
        let (Some(city), Some(state)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if !US_STATES.contains(state.as_str()) {
            continue;
        }
        let last_word = city
            .as_str()
            .split_whitespace()
            .last()
            .unwrap_or_default()
            .to_lowercase();
        if NON_LOCATION_WORDS.contains(last_word.as_str()) {
            continue;
        }
        // "MS-Excel", "MS-Word"
        if window[state.end()..].starts_with('-') {
            continue;
        }
        return Some(format!("{}, {}", city.as_str(), state.as_str()));
    }
    None
}

/// The longest prefix of `text` holding at most `n` characters.
fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ============================================================================
// Full name
// ============================================================================

static ALPHA_NAME_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z'-]+$").expect("name word pattern should compile")
});

static NON_NAME_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@|http|www\.|\.com|\d{5,}|\+\d").expect("non-name pattern should compile")
});

const NAME_LINES: usize = 8;
const NAME_EDGE_CHARS: &[char] = &[' ', ',', '|', '•', '·'];

/// Scans the first non-blank lines for something shaped like a person's
/// name. `email` and `phone` are the already-detected values, stripped from
/// candidates before evaluation.
pub fn extract_name(text: &str, email: &str, phone: &str) -> String {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(NAME_LINES);

    for line in lines {
        if match_header(line).is_some() {
            continue;
        }

        if line.contains('|') {
            let found = line
                .split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|seg| strip_contact(seg, email, phone))
                .filter(|c| {
                    c.chars().count() >= 3
                        && !NON_NAME_SEGMENT.is_match(c)
                        && !PARENTHESIZED.is_match(c)
                })
                .find(|c| is_name(c));
            if let Some(name) = found {
                return format_name(&name);
            }
            continue;
        }

        if WHOLE_LINE_EMAIL.is_match(line) || URL_PREFIX.is_match(line) || is_phone_shaped(line) {
            continue;
        }

        let candidate = strip_contact(line, email, phone);
        if is_name(&candidate) {
            return format_name(&candidate);
        }
    }
    String::new()
}

fn strip_contact(segment: &str, email: &str, phone: &str) -> String {
    let mut candidate = segment.to_string();
    if !email.is_empty() {
        candidate = candidate.replace(email, "").trim().to_string();
    }
    if !phone.is_empty() {
        candidate = candidate.replace(phone, "").trim().to_string();
    }
    candidate.trim_matches(NAME_EDGE_CHARS).to_string()
}

/// 2–5 words, at least two purely alphabetic, each of those capitalised.
fn is_name(candidate: &str) -> bool {
    let words: Vec<&str> = candidate.split_whitespace().collect();
    if !(2..=5).contains(&words.len()) {
        return false;
    }
    let alpha: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| ALPHA_NAME_WORD.is_match(w))
        .collect();
    alpha.len() >= 2
        && alpha
            .iter()
            .all(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
}

/// ALL-CAPS names become Title Case; anything else is returned unchanged.
fn format_name(candidate: &str) -> String {
    let alpha: Vec<&str> = candidate
        .split_whitespace()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .collect();
    if !alpha.is_empty() && alpha.iter().all(|w| is_all_upper(w)) {
        candidate
            .split_whitespace()
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Jane Doe\njane@x.com | (555) 123-4567 | New York, NY\n";

    #[test]
    fn test_extract_email_and_phone() {
        assert_eq!(extract_email(HEADER), "jane@x.com");
        let phone = extract_phone(HEADER);
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(digits, "5551234567");
    }

    #[test]
    fn test_phone_rejects_short_digit_runs() {
        assert_eq!(extract_phone("Room 12 345"), "");
    }

    #[test]
    fn test_phone_upper_digit_bound() {
        let phone = extract_phone("1234567890123456");
        assert_eq!(phone, "123456789012345");
        assert_eq!(phone.chars().filter(|c| c.is_ascii_digit()).count(), 15);
    }

    #[test]
    fn test_phone_first_pattern_takes_priority() {
        assert_eq!(extract_phone("ID 12345678, call 5551234567"), "12345678");
    }

    #[test]
    fn test_phone_international_format() {
        assert_eq!(extract_phone("Tel: +44 20 7946 0958"), "+44 20 7946 0958");
    }

    #[test]
    fn test_profile_links() {
        let text = "Links: https://www.LinkedIn.com/in/jane-doe and github.com/janedoe";
        assert_eq!(extract_linkedin(text), "https://www.LinkedIn.com/in/jane-doe");
        assert_eq!(extract_github(text), "github.com/janedoe");
        assert_eq!(extract_github("no links here"), "");
    }

    #[test]
    fn test_location_from_label() {
        let text = "John Roe\nLocation: Austin, Texas | john@roe.dev\n";
        assert_eq!(extract_location(text), "Austin, Texas");
    }

    #[test]
    fn test_location_label_strips_email() {
        assert_eq!(
            extract_location("Address: jane@x.com Springfield, IL"),
            "Springfield, IL"
        );
    }

    #[test]
    fn test_location_based_in() {
        assert_eq!(
            extract_location("Engineer based in Lisbon, Portugal"),
            "Lisbon, Portugal"
        );
        assert_eq!(
            extract_location("Designer residing in Accra, Ghana"),
            "Accra, Ghana"
        );
    }

    #[test]
    fn test_location_label_outside_window_ignored() {
        let text = format!("{}\nLocation: Berlin, Germany", "x".repeat(LABEL_WINDOW));
        assert_eq!(extract_location(&text), "");
        let text = format!("{}\nLocation: Berlin, Germany", "x".repeat(10));
        assert_eq!(extract_location(&text), "Berlin, Germany");
    }

    #[test]
    fn test_location_country_segment_uses_previous_segment() {
        let text = "Ali Khan\nali@k.pk | Lahore | Pakistan | +92 300 1234567\n";
        assert_eq!(extract_location(text), "Lahore, Pakistan");
    }

    #[test]
    fn test_location_comma_joined_country() {
        let text = "Ana Silva\nana@s.io | Porto, Norte, Portugal\n";
        assert_eq!(extract_location(text), "Porto, Norte, Portugal");
    }

    #[test]
    fn test_location_city_state() {
        assert_eq!(extract_location(HEADER), "New York, NY");
    }

    #[test]
    fn test_location_rejects_job_title_city() {
        assert_eq!(extract_location("Senior Engineer, CA based team"), "");
    }

    #[test]
    fn test_location_rejects_ms_excel() {
        assert_eq!(extract_location("MS-Excel expert"), "");
        assert_eq!(extract_location("Proficient MS-Excel user"), "");
    }

    #[test]
    fn test_location_rejects_unknown_state_code() {
        assert_eq!(extract_location("Springfield, ZZ"), "");
    }

    #[test]
    fn test_name_simple() {
        assert_eq!(extract_name(HEADER, "jane@x.com", "(555) 123-4567"), "Jane Doe");
    }

    #[test]
    fn test_name_skips_section_header() {
        let text = "Experience\nJohn Smith\n";
        assert_eq!(extract_name(text, "", ""), "John Smith");
    }

    #[test]
    fn test_name_all_caps_is_title_cased() {
        let text = "MARIA JOSE GARCIA\nmaria@g.com\n";
        assert_eq!(extract_name(text, "maria@g.com", ""), "Maria Jose Garcia");
    }

    #[test]
    fn test_name_from_pipe_segment() {
        let text = "sam@lee.io | Sam Lee | Backend Developer\n";
        assert_eq!(extract_name(text, "sam@lee.io", ""), "Sam Lee");
    }

    #[test]
    fn test_name_mixed_case_passes_through() {
        let text = "Ronald McDonald-Smith\n";
        assert_eq!(extract_name(text, "", ""), "Ronald McDonald-Smith");
    }

    #[test]
    fn test_name_absent_yields_empty() {
        let text = "curriculum vitae\n12345\nhttps://example.com\n";
        assert_eq!(extract_name(text, "", ""), "");
    }

    #[test]
    fn test_extract_contact_aggregates_fields() {
        let info = extract_contact(HEADER);
        assert_eq!(info.full_name, "Jane Doe");
        assert_eq!(info.email, "jane@x.com");
        assert_eq!(info.location, "New York, NY");
        assert!(info.linkedin.is_empty());
    }
}
