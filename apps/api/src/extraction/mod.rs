// Rule-based résumé extraction engine.
// Pipeline: sections → contact/fields → score → advice. Pure and deterministic;
// every lookup table is a process-wide static built on first use.

pub mod advisory;
pub mod backend;
pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod patterns;
pub mod projects;
pub mod scoring;
pub mod sections;
pub mod skills;
pub mod summary;

use crate::models::resume::ParsedResume;

use self::sections::SectionTag;

/// Parses plain résumé text into a structured, scored record.
///
/// Never fails: blank input yields [`ParsedResume::empty`], and any field the
/// heuristics cannot find is left empty.
pub fn parse(text: &str) -> ParsedResume {
    if text.trim().is_empty() {
        return ParsedResume::empty();
    }

    let sections = sections::segment(text);
    let contact = contact::extract_contact(text);

    let mut resume = ParsedResume {
        full_name: contact.full_name,
        email: contact.email,
        phone: contact.phone,
        location: contact.location,
        linkedin: contact.linkedin,
        github: contact.github,
        summary: summary::extract_summary(sections.get(SectionTag::Summary)),
        skills: skills::extract_skills(text, sections.get(SectionTag::Skills)),
        experience: experience::extract_experience(sections.get(SectionTag::Experience)),
        education: education::extract_education(sections.get(SectionTag::Education)),
        projects: projects::extract_projects(sections.get(SectionTag::Projects)),
        certifications: certifications::extract_certifications(
            sections.get(SectionTag::Certifications),
        ),
        ..Default::default()
    };

    let (score, breakdown) = scoring::compute_score(&resume);
    resume.score = score;
    resume.score_breakdown = breakdown;
    resume.strengths = advisory::generate_strengths(&resume);
    resume.improvements = advisory::generate_improvements(&resume);

    tracing::debug!(
        sections = sections.len(),
        skills = resume.skills.len(),
        experience = resume.experience.len(),
        education = resume.education.len(),
        score = resume.score,
        "parsed resume"
    );
    resume
}
