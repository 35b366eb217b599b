use serde::{Deserialize, Serialize};

/// One position from the experience section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub duration: String,
    /// Bullet lines joined by `" | "`.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub field: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
}

/// Per-dimension contributions to the overall quality score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub contact: u32,
    pub structure: u32,
}

impl ScoreBreakdown {
    /// Raw additive sum, before the 100 cap.
    pub fn total(&self) -> u32 {
        self.skills + self.experience + self.education + self.contact + self.structure
    }
}

/// Full structured output of a résumé parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<String>,
    pub score: u32,
    pub score_breakdown: ScoreBreakdown,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl ParsedResume {
    /// Fixed record returned for blank input.
    pub fn empty() -> Self {
        Self {
            strengths: vec!["Upload a resume to see analysis".to_string()],
            improvements: vec!["No text found in the uploaded file".to_string()],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_resume_serializes_camel_case() {
        let resume = ParsedResume {
            full_name: "Jane Doe".to_string(),
            experience: vec![ExperienceEntry {
                job_title: "Engineer".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&resume).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["experience"][0]["jobTitle"], "Engineer");
        assert!(json.get("scoreBreakdown").is_some());
    }

    #[test]
    fn test_breakdown_total_sums_dimensions() {
        let breakdown = ScoreBreakdown {
            skills: 25,
            experience: 20,
            education: 12,
            contact: 15,
            structure: 8,
        };
        assert_eq!(breakdown.total(), 80);
    }

    #[test]
    fn test_empty_record_carries_upload_hints() {
        let empty = ParsedResume::empty();
        assert_eq!(empty.score, 0);
        assert!(empty.skills.is_empty());
        assert_eq!(empty.strengths, vec!["Upload a resume to see analysis"]);
        assert_eq!(empty.improvements, vec!["No text found in the uploaded file"]);
    }
}
