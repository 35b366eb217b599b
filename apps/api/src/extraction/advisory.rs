//! Strengths and improvement suggestions derived from a scored résumé.

use crate::extraction::scoring::{has_experience_descriptions, has_formal_degree};
use crate::models::resume::ParsedResume;

const MAX_MESSAGES: usize = 8;

/// Skills that suggest the candidate writes code worth linking to.
const CODING_SKILLS: &[&str] = &["python", "javascript", "java", "c++", "react", "node.js"];

pub fn generate_strengths(resume: &ParsedResume) -> Vec<String> {
    let mut strengths = Vec::new();
    let skills = resume.skills.len();
    let jobs = resume.experience.len();

    if skills >= 10 {
        strengths.push(format!("Strong technical profile with {skills} identified skills"));
    } else if skills >= 5 {
        strengths.push(format!("Good skill diversity with {skills} skills listed"));
    }

    if jobs >= 3 {
        strengths.push(format!("Solid work history with {jobs} positions"));
    } else if jobs >= 1 {
        strengths.push("Has relevant work experience".to_string());
    }

    if has_experience_descriptions(resume) {
        strengths.push("Experience entries include detailed descriptions".to_string());
    }
    if has_formal_degree(resume) {
        strengths.push("Has formal educational qualifications".to_string());
    }
    if !resume.summary.is_empty() {
        strengths.push("Includes a professional summary".to_string());
    }
    if !resume.certifications.is_empty() {
        strengths.push(format!(
            "Has {} certification(s)",
            resume.certifications.len()
        ));
    }
    if !resume.projects.is_empty() {
        strengths.push(format!("Showcases {} project(s)", resume.projects.len()));
    }
    if !resume.linkedin.is_empty() {
        strengths.push("LinkedIn profile linked".to_string());
    }
    if !resume.github.is_empty() {
        strengths.push("GitHub profile linked — shows code portfolio".to_string());
    }

    strengths.truncate(MAX_MESSAGES);
    strengths
}

pub fn generate_improvements(resume: &ParsedResume) -> Vec<String> {
    let mut improvements: Vec<&str> = Vec::new();

    if resume.skills.len() < 5 {
        improvements.push("Add more technical skills — aim for at least 8-10 relevant skills");
    }
    if resume.experience.is_empty() {
        improvements
            .push("Add work experience — even internships, freelance, or volunteer work counts");
    } else if !has_experience_descriptions(resume) {
        improvements.push(
            "Add descriptions to work experience with specific achievements and metrics",
        );
    }
    if resume.education.is_empty() {
        improvements.push("Include education background, even self-taught courses or bootcamps");
    }
    if resume.summary.is_empty() {
        improvements.push(
            "Add a professional summary at the top (2-3 sentences about your value proposition)",
        );
    }
    if resume.email.is_empty() {
        improvements.push("Include your email address for recruiters to contact you");
    }
    if resume.phone.is_empty() {
        improvements.push("Add a phone number for easy contact");
    }
    if resume.linkedin.is_empty() {
        improvements.push("Add your LinkedIn profile URL");
    }
    if resume.github.is_empty() && writes_code(resume) {
        improvements.push("Add a GitHub link to showcase your coding projects");
    }
    if resume.projects.is_empty() {
        improvements.push("Add a Projects section to demonstrate hands-on experience");
    }
    if resume.certifications.is_empty() {
        improvements.push("Consider adding relevant certifications to stand out");
    }

    improvements
        .into_iter()
        .take(MAX_MESSAGES)
        .map(str::to_string)
        .collect()
}

fn writes_code(resume: &ParsedResume) -> bool {
    resume
        .skills
        .iter()
        .any(|s| CODING_SKILLS.contains(&s.to_lowercase().as_str()))
}
