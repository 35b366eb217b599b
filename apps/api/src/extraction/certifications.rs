use crate::extraction::patterns::strip_bullet;

const MAX_CERTIFICATIONS: usize = 20;

/// One certification per non-trivial line of the certifications section.
pub fn extract_certifications(section: Option<&str>) -> Vec<String> {
    let Some(section) = section else {
        return Vec::new();
    };
    section
        .lines()
        .map(|line| strip_bullet(line.trim()))
        .filter(|line| line.chars().count() > 3)
        .map(str::to_string)
        .take(MAX_CERTIFICATIONS)
        .collect()
}
