//! Section segmentation: splits raw résumé text into named blocks by header lines.

use std::sync::LazyLock;

use regex::Regex;

/// Closed set of logical résumé sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    Header,
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
    Languages,
    Interests,
    References,
    Publications,
    Volunteer,
}

impl SectionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTag::Header => "header",
            SectionTag::Summary => "summary",
            SectionTag::Skills => "skills",
            SectionTag::Experience => "experience",
            SectionTag::Education => "education",
            SectionTag::Projects => "projects",
            SectionTag::Certifications => "certifications",
            SectionTag::Languages => "languages",
            SectionTag::Interests => "interests",
            SectionTag::References => "references",
            SectionTag::Publications => "publications",
            SectionTag::Volunteer => "volunteer",
        }
    }
}

/// Header alternatives per tag, tested in this order. Each is matched
/// against the whole cleaned line.
const HEADER_PATTERNS: &[(SectionTag, &[&str])] = &[
    (
        SectionTag::Experience,
        &[
            r"(?:work|professional|employment|career)\s*(?:experience|history)",
            r"experience",
            r"work\s*history",
            r"employment",
            r"career\s*(?:summary|history|profile)",
            r"professional\s*background",
            r"relevant\s*experience",
            r"internships?",
        ],
    ),
    (
        SectionTag::Education,
        &[
            r"education(?:al)?\s*(?:background|qualifications?|history)?",
            r"academic\s*(?:background|qualifications?|history|record)",
            r"schooling",
            r"degrees?",
            r"qualifications?",
        ],
    ),
    (
        SectionTag::Skills,
        &[
            r"(?:technical|key|core|relevant|professional)?\s*skills?",
            r"(?:areas?\s+of\s+)?expertise",
            r"competenc(?:ies|e)",
            r"technologies",
            r"tech\s*stack",
            r"tools?\s*(?:&|and)\s*technologies",
            r"proficiencies",
            r"capabilities",
        ],
    ),
    (
        SectionTag::Projects,
        &[
            r"(?:key|notable|personal|academic|selected)?\s*projects?",
            r"portfolio",
            r"(?:personal|side)\s*projects?",
        ],
    ),
    (
        SectionTag::Certifications,
        &[
            r"certifications?\s*(?:&|and)?\s*(?:licenses|awards|achievements)?",
            r"licenses?\s*(?:&|and)?\s*certifications?",
            r"professional\s*certifications?",
            r"awards?\s*(?:&|and)?\s*(?:certifications?|achievements?)",
            r"achievements?\s*(?:&|and)?\s*(?:awards?|certifications?)?",
            r"honors?\s*(?:&|and)?\s*awards?",
        ],
    ),
    (
        SectionTag::Summary,
        &[
            r"(?:professional|career|executive)?\s*summary",
            r"(?:professional|career)?\s*objective",
            r"about\s*(?:me)?",
            r"profile",
            r"personal\s*statement",
            r"introduction",
        ],
    ),
    (
        SectionTag::Languages,
        &[r"languages?\s*(?:spoken|known|proficiency)?"],
    ),
    (
        SectionTag::Interests,
        &[r"interests?", r"hobbies", r"extracurricular"],
    ),
    (SectionTag::References, &[r"references?"]),
    (
        SectionTag::Publications,
        &[r"publications?", r"papers?", r"research"],
    ),
    (
        SectionTag::Volunteer,
        &[
            r"volunteer(?:ing)?\s*(?:experience|work)?",
            r"community\s*(?:service|involvement)",
        ],
    ),
];

/// One anchored, case-insensitive matcher per tag.
static HEADER_MATCHERS: LazyLock<Vec<(SectionTag, Regex)>> = LazyLock::new(|| {
    HEADER_PATTERNS
        .iter()
        .map(|(tag, alternatives)| {
            let pattern = format!("(?i)^(?:{})$", alternatives.join("|"));
            let re = Regex::new(&pattern).expect("section header pattern should compile");
            (*tag, re)
        })
        .collect()
});

const HEADER_TRAILING: &[char] = &[':', '-', '–', '—', '=', '|', '_', '*', '#'];
const MAX_HEADER_CHARS: usize = 60;

/// Returns the tag whose header library full-matches `line`, if any.
///
/// The line is trimmed, stripped of trailing punctuation, and must be
/// shorter than 60 characters.
pub fn match_header(line: &str) -> Option<SectionTag> {
    let clean = line
        .trim()
        .trim_end_matches(HEADER_TRAILING)
        .trim()
        .to_lowercase();
    if clean.is_empty() || clean.chars().count() >= MAX_HEADER_CHARS {
        return None;
    }
    HEADER_MATCHERS
        .iter()
        .find(|(_, re)| re.is_match(&clean))
        .map(|(tag, _)| *tag)
}

/// Ordered mapping from section tag to its text block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    blocks: Vec<(SectionTag, String)>,
}

impl SectionMap {
    pub fn get(&self, tag: SectionTag) -> Option<&str> {
        self.blocks
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, block)| block.as_str())
    }

    pub fn contains(&self, tag: SectionTag) -> bool {
        self.get(tag).is_some()
    }

    /// Tags in order of first appearance.
    pub fn tags(&self) -> impl Iterator<Item = SectionTag> + '_ {
        self.blocks.iter().map(|(t, _)| *t)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Stores a trimmed block; blank blocks are dropped and a repeated tag
    /// is appended to its existing block.
    fn commit(&mut self, tag: SectionTag, lines: &[&str]) {
        let block = lines.join("\n");
        let block = block.trim();
        if block.is_empty() {
            return;
        }
        match self.blocks.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, existing)) => {
                existing.push_str("\n\n");
                existing.push_str(block);
            }
            None => self.blocks.push((tag, block.to_string())),
        }
    }
}

/// Splits `text` into sections. Text before the first recognised header
/// belongs to [`SectionTag::Header`].
pub fn segment(text: &str) -> SectionMap {
    let mut sections = SectionMap::default();
    let mut current = SectionTag::Header;
    let mut lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            lines.push("");
            continue;
        }
        match match_header(line) {
            Some(tag) => {
                sections.commit(current, &lines);
                current = tag;
                lines.clear();
            }
            None => lines.push(line),
        }
    }
    sections.commit(current, &lines);

    tracing::trace!(
        sections = ?sections.tags().map(|t| t.as_str()).collect::<Vec<_>>(),
        "segmented resume"
    );
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_variants_match() {
        assert_eq!(match_header("WORK EXPERIENCE:"), Some(SectionTag::Experience));
        assert_eq!(match_header("  Technical Skills  "), Some(SectionTag::Skills));
        assert_eq!(match_header("Education ---"), Some(SectionTag::Education));
        assert_eq!(
            match_header("Licenses & Certifications"),
            Some(SectionTag::Certifications)
        );
        assert_eq!(match_header("## Projects"), None);
        assert_eq!(match_header("Projects ##"), Some(SectionTag::Projects));
    }

    #[test]
    fn test_body_text_with_keyword_is_not_header() {
        assert_eq!(match_header("experience with Python"), None);
        assert_eq!(match_header("Skills: Python, Rust"), None);
    }

    #[test]
    fn test_padding_is_trimmed_before_length_check() {
        let line = format!("experience{}", " ".repeat(60));
        assert_eq!(match_header(&line), Some(SectionTag::Experience));
    }

    #[test]
    fn test_long_line_is_never_header() {
        // Matches the experience pattern, but only after the length gate.
        let long = format!("professional{}experience", " ".repeat(50));
        assert_eq!(match_header(&long), None);
        assert_eq!(match_header(&"a".repeat(70)), None);
    }

    #[test]
    fn test_segment_assigns_leading_text_to_header() {
        let text = "Jane Doe\njane@x.com\n\nSKILLS\nPython, Rust\n\nEXPERIENCE\nEngineer 2020\n- Built things";
        let sections = segment(text);
        assert_eq!(sections.get(SectionTag::Header), Some("Jane Doe\njane@x.com"));
        assert_eq!(sections.get(SectionTag::Skills), Some("Python, Rust"));
        assert_eq!(
            sections.get(SectionTag::Experience),
            Some("Engineer 2020\n- Built things")
        );
        let order: Vec<_> = sections.tags().collect();
        assert_eq!(
            order,
            vec![SectionTag::Header, SectionTag::Skills, SectionTag::Experience]
        );
    }

    #[test]
    fn test_segment_keeps_inner_blank_lines() {
        let text = "Experience\nEngineer 2020\n\nAnalyst 2018\n";
        let sections = segment(text);
        assert_eq!(
            sections.get(SectionTag::Experience),
            Some("Engineer 2020\n\nAnalyst 2018")
        );
    }

    #[test]
    fn test_empty_sections_are_not_stored() {
        let sections = segment("Summary\n\nSkills\nGo");
        assert!(!sections.contains(SectionTag::Summary));
        assert!(!sections.contains(SectionTag::Header));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_repeated_header_appends_block() {
        let sections = segment("Projects\nAlpha\nSkills\nRust\nProjects\nBeta");
        assert_eq!(sections.get(SectionTag::Projects), Some("Alpha\n\nBeta"));
        let order: Vec<_> = sections.tags().collect();
        assert_eq!(order, vec![SectionTag::Projects, SectionTag::Skills]);
    }
}
