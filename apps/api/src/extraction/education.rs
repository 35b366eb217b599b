//! Education extraction, driven by the combined degree-name pattern.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::patterns::{trim_end_with, DEGREE, PAREN_YEAR, TRAILING_PARENS, YEAR};
use crate::models::resume::EducationEntry;

const MAX_ENTRIES: usize = 10;
const SEPARATOR_TAIL: &[char] = &['-', '–', '|', ','];

static DEGREE_LINE_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[-–—|]+\s*|\s*,\s+").expect("degree line split pattern should compile")
});

static FIELD_OF_STUDY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:in|of)\s+(.+?)(?:\s*[-–,|]\s*|\s*$)")
        .expect("field of study pattern should compile")
});

static INSTITUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)university|college|institute|school|academy")
        .expect("institution pattern should compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    Idle,
    Open(EducationEntry),
}

/// Extracts up to 10 education entries from the education section.
pub fn extract_education(section: Option<&str>) -> Vec<EducationEntry> {
    let Some(section) = section else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut cursor = Cursor::Idle;
    for line in section.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if DEGREE.is_match(line) {
            if let Cursor::Open(entry) = std::mem::replace(&mut cursor, Cursor::Idle) {
                entries.push(entry);
            }
            cursor = Cursor::Open(degree_entry(line));
            continue;
        }
        cursor = match cursor {
            Cursor::Open(mut entry) if entry.school.is_empty() => {
                fill_school(&mut entry, line);
                Cursor::Open(entry)
            }
            Cursor::Idle if INSTITUTION.is_match(line) => Cursor::Open(EducationEntry {
                school: line.to_string(),
                year: first_year(line),
                ..Default::default()
            }),
            other => other,
        };
    }
    if let Cursor::Open(entry) = cursor {
        entries.push(entry);
    }

    let entries: Vec<EducationEntry> = entries
        .into_iter()
        .filter(|e| !e.degree.is_empty() || !e.school.is_empty())
        .map(dedupe_degree)
        .take(MAX_ENTRIES)
        .collect();
    tracing::debug!(count = entries.len(), "extracted education");
    entries
}

/// Builds an entry from a line containing a degree name, e.g.
/// `"B.S. in Computer Science - MIT (2018)"`.
fn degree_entry(line: &str) -> EducationEntry {
    let mut degree_part = line;
    let mut school = String::new();

    let mut parts = DEGREE_LINE_SPLIT.split(line);
    if let (Some(first), Some(second)) = (parts.next(), parts.next()) {
        degree_part = first.trim();
        let candidate = strip_year(second);
        if !candidate.is_empty() {
            school = candidate;
        }
    }

    let field = FIELD_OF_STUDY
        .captures(degree_part)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    EducationEntry {
        degree: strip_year(degree_part),
        school,
        field,
        year: first_year(line),
    }
}

/// Treats a follow-up line as the school name, pulling out a year if present.
fn fill_school(entry: &mut EducationEntry, line: &str) {
    let Some(year) = YEAR.find(line) else {
        entry.school = line.to_string();
        return;
    };
    if entry.year.is_empty() {
        entry.year = year.as_str().to_string();
    }
    let before = trim_end_with(line[..year.start()].trim(), SEPARATOR_TAIL);
    entry.school = if before.is_empty() {
        strip_year(line)
    } else {
        before.to_string()
    };
}

fn first_year(line: &str) -> String {
    YEAR.find(line)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn strip_year(s: &str) -> String {
    let without = PAREN_YEAR.replace_all(s, "");
    let without = without.trim();
    TRAILING_PARENS.replace(without, "").trim().to_string()
}

/// Removes the school name and year from the degree text when they were
/// captured there too.
fn dedupe_degree(mut entry: EducationEntry) -> EducationEntry {
    if !entry.degree.is_empty() && !entry.school.is_empty() {
        entry.degree = clean_tail(&entry.degree.replace(&entry.school, ""));
    }
    if !entry.degree.is_empty() && !entry.year.is_empty() {
        entry.degree = clean_tail(&entry.degree.replace(&entry.year, ""));
    }
    entry
}

fn clean_tail(s: &str) -> String {
    trim_end_with(s.trim(), SEPARATOR_TAIL).to_string()
}
