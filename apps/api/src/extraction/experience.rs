//! Experience extraction: a line-by-line state machine over the experience
//! section. A dated line opens a new position; following lines become its
//! description bullets.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::patterns::{
    is_all_upper, is_phone_shaped, strip_bullet, DATE_RANGE, DESCRIPTION_JOINER, EMAIL,
    PARENTHESIZED, TRAILING_PARENS, URL_PREFIX,
};
use crate::models::resume::ExperienceEntry;

const MAX_ENTRIES: usize = 20;
const MAX_DATED_LINE_CHARS: usize = 200;

static EDGE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s|,\-–—()]+|[\s|,\-–—()]+$").expect("edge separator pattern should compile")
});

static EMPTY_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("empty parens pattern should compile"));

/// Title/company split for dated lines. A bare hyphen only splits when
/// spaced, so "Front-End Developer" stays whole.
static DATED_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+at\s+|\s*[–—|@]+\s*|\s+-\s+|\s*,\s+").expect("dated split pattern should compile")
});

static UNDATED_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[–—|@]+\s*|\s+-\s+").expect("undated split pattern should compile")
});

/// Scanner state between lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    Idle,
    Open(ExperienceEntry),
}

/// Extracts up to 20 positions from the experience section.
pub fn extract_experience(section: Option<&str>) -> Vec<ExperienceEntry> {
    let Some(section) = section else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut cursor = Cursor::Idle;
    for line in section.lines() {
        let (next, finished) = step(cursor, line);
        entries.extend(finished);
        cursor = next;
    }
    if let Cursor::Open(entry) = cursor {
        entries.push(entry);
    }

    entries.truncate(MAX_ENTRIES);
    tracing::debug!(count = entries.len(), "extracted experience");
    entries
}

/// Advances the scanner by one line, returning the new state and the entry
/// closed by this line, if any.
pub fn step(cursor: Cursor, line: &str) -> (Cursor, Option<ExperienceEntry>) {
    let line = line.trim();
    if line.is_empty() || is_contact_line(line) {
        return (cursor, None);
    }

    if let Some(date) = DATE_RANGE.find(line) {
        if line.chars().count() < MAX_DATED_LINE_CHARS {
            let closed = match cursor {
                Cursor::Open(entry) => Some(entry),
                Cursor::Idle => None,
            };
            let remainder = format!("{}{}", &line[..date.start()], &line[date.end()..]);
            return (open_dated(&remainder, date.as_str().trim()), closed);
        }
    }

    match cursor {
        Cursor::Open(mut entry) => {
            let bullet = strip_bullet(line);
            if !bullet.is_empty() {
                if !entry.description.is_empty() {
                    entry.description.push_str(DESCRIPTION_JOINER);
                }
                entry.description.push_str(bullet);
            }
            (Cursor::Open(entry), None)
        }
        Cursor::Idle => (open_undated(line), None),
    }
}

fn open_dated(remainder: &str, duration: &str) -> Cursor {
    let remainder = EDGE_SEPARATORS.replace_all(remainder, "");
    let remainder = EMPTY_PARENS.replace_all(&remainder, "");
    let remainder = remainder.trim();

    let mut parts = DATED_SPLIT.splitn(remainder, 2);
    let job_title = strip_trailing_parens(parts.next().unwrap_or_default());
    let company = strip_trailing_parens(parts.next().unwrap_or_default());

    let title = if job_title.is_empty() { remainder } else { job_title };
    if !is_valid_job_title(title) {
        // Dated, but the title is noise: drop rather than keep garbage.
        return Cursor::Idle;
    }
    Cursor::Open(ExperienceEntry {
        job_title: title.to_string(),
        company: company.to_string(),
        duration: duration.to_string(),
        description: String::new(),
    })
}

fn open_undated(line: &str) -> Cursor {
    let mut parts = UNDATED_SPLIT.splitn(line, 2);
    let title = parts.next().unwrap_or_default().trim();
    if !is_valid_job_title(title) {
        return Cursor::Idle;
    }
    Cursor::Open(ExperienceEntry {
        job_title: title.to_string(),
        company: parts.next().unwrap_or_default().trim().to_string(),
        duration: String::new(),
        description: String::new(),
    })
}

fn strip_trailing_parens(s: &str) -> &str {
    let s = s.trim();
    match TRAILING_PARENS.find(s) {
        Some(m) => s[..m.start()].trim(),
        None => s,
    }
}

/// Email, phone number or bare URL.
fn is_contact_line(line: &str) -> bool {
    EMAIL.is_match(line) || is_phone_shaped(line) || URL_PREFIX.is_match(line)
}

/// Plausibility filter for job titles. Approximate by nature: a single
/// ALL-CAPS word is treated as a stray name fragment.
pub fn is_valid_job_title(s: &str) -> bool {
    if s.chars().count() < 2 {
        return false;
    }
    if s.chars().all(|c| c.is_ascii_digit()) || is_phone_shaped(s) || EMAIL.is_match(s) {
        return false;
    }
    let words: Vec<&str> = s.split_whitespace().collect();
    if let [word] = words.as_slice() {
        if word.chars().count() > 1 && word.chars().all(char::is_alphabetic) && is_all_upper(word) {
            return false;
        }
    }
    if s.matches('|').count() >= 3 {
        return false;
    }
    !PARENTHESIZED.is_match(s)
}
