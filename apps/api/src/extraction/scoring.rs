//! Quality score: five independently capped, additive dimensions.

use crate::extraction::patterns::DEGREE;
use crate::models::resume::{ParsedResume, ScoreBreakdown};

pub const MAX_SCORE: u32 = 100;
const MAX_CONTACT: u32 = 15;
const MAX_STRUCTURE: u32 = 15;

/// Overall score (capped at 100) and its per-dimension breakdown.
pub fn compute_score(resume: &ParsedResume) -> (u32, ScoreBreakdown) {
    let breakdown = ScoreBreakdown {
        skills: skills_points(resume.skills.len()),
        experience: experience_points(resume),
        education: education_points(resume),
        contact: contact_points(resume),
        structure: structure_points(resume),
    };
    (breakdown.total().min(MAX_SCORE), breakdown)
}

/// True if any education entry names a recognised degree.
pub fn has_formal_degree(resume: &ParsedResume) -> bool {
    resume.education.iter().any(|e| DEGREE.is_match(&e.degree))
}

pub fn has_experience_descriptions(resume: &ParsedResume) -> bool {
    resume.experience.iter().any(|e| !e.description.is_empty())
}

fn skills_points(count: usize) -> u32 {
    match count {
        n if n >= 10 => 25,
        n if n >= 5 => 20,
        n if n >= 3 => 15,
        n if n >= 1 => 10,
        _ => 0,
    }
}

fn experience_points(resume: &ParsedResume) -> u32 {
    match resume.experience.len() {
        0 => 0,
        1 if has_experience_descriptions(resume) => 18,
        1 => 12,
        2 => 20,
        _ => 25,
    }
}

fn education_points(resume: &ParsedResume) -> u32 {
    if resume.education.is_empty() {
        0
    } else if has_formal_degree(resume) {
        20
    } else {
        12
    }
}

fn contact_points(resume: &ParsedResume) -> u32 {
    let points = [
        (&resume.full_name, 4),
        (&resume.email, 4),
        (&resume.phone, 3),
        (&resume.location, 2),
        (&resume.linkedin, 2),
    ]
    .into_iter()
    .filter(|(field, _)| !field.is_empty())
    .map(|(_, points)| points)
    .sum::<u32>();
    points.min(MAX_CONTACT)
}

fn structure_points(resume: &ParsedResume) -> u32 {
    let mut points = 0;
    if !resume.summary.is_empty() {
        points += 8;
    }
    if !resume.projects.is_empty() {
        points += 4;
    }
    if !resume.certifications.is_empty() {
        points += 3;
    }
    points.min(MAX_STRUCTURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, ProjectEntry};

    fn job(description: &str) -> ExperienceEntry {
        ExperienceEntry {
            job_title: "Engineer".to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn skills(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("skill{i}")).collect()
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let (score, breakdown) = compute_score(&ParsedResume::default());
        assert_eq!(score, 0);
        assert_eq!(breakdown, ScoreBreakdown::default());
    }

    #[test]
    fn test_skill_tiers() {
        assert_eq!(skills_points(0), 0);
        assert_eq!(skills_points(1), 10);
        assert_eq!(skills_points(3), 15);
        assert_eq!(skills_points(5), 20);
        assert_eq!(skills_points(9), 20);
        assert_eq!(skills_points(10), 25);
    }

    #[test]
    fn test_experience_tiers() {
        let mut resume = ParsedResume {
            experience: vec![job("")],
            ..Default::default()
        };
        assert_eq!(experience_points(&resume), 12);
        resume.experience = vec![job("Shipped it")];
        assert_eq!(experience_points(&resume), 18);
        resume.experience = vec![job(""), job("")];
        assert_eq!(experience_points(&resume), 20);
        resume.experience = vec![job(""), job(""), job("")];
        assert_eq!(experience_points(&resume), 25);
    }

    #[test]
    fn test_education_requires_degree_for_full_points() {
        let mut resume = ParsedResume {
            education: vec![EducationEntry {
                school: "Springfield College".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(education_points(&resume), 12);
        resume.education[0].degree = "Bachelor of Arts".to_string();
        assert_eq!(education_points(&resume), 20);
    }

    #[test]
    fn test_contact_and_structure_points() {
        let resume = ParsedResume {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555 123 4567".to_string(),
            location: "Boston, MA".to_string(),
            linkedin: "linkedin.com/in/jane".to_string(),
            summary: "Engineer".to_string(),
            projects: vec![ProjectEntry::default()],
            certifications: vec!["CKA exam".to_string()],
            ..Default::default()
        };
        assert_eq!(contact_points(&resume), 15);
        assert_eq!(structure_points(&resume), 15);
    }

    #[test]
    fn test_score_is_sum_of_breakdown() {
        let resume = ParsedResume {
            skills: skills(4),
            experience: vec![job("Did things")],
            email: "a@b.co".to_string(),
            ..Default::default()
        };
        let (score, breakdown) = compute_score(&resume);
        assert_eq!(score, 15 + 18 + 4);
        assert_eq!(score, breakdown.total());
    }

    #[test]
    fn test_full_resume_hits_cap() {
        let resume = ParsedResume {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555 123 4567".to_string(),
            location: "Boston, MA".to_string(),
            linkedin: "linkedin.com/in/jane".to_string(),
            summary: "Engineer".to_string(),
            skills: skills(12),
            experience: vec![job("a"), job("b"), job("c")],
            education: vec![EducationEntry {
                degree: "MSc".to_string(),
                ..Default::default()
            }],
            projects: vec![ProjectEntry::default()],
            certifications: vec!["CKA exam".to_string()],
            ..Default::default()
        };
        let (score, breakdown) = compute_score(&resume);
        assert_eq!(breakdown.total(), 100);
        assert_eq!(score, MAX_SCORE);
    }
}
