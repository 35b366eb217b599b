use crate::extraction::patterns::{starts_with_bullet, strip_bullet, DESCRIPTION_JOINER};
use crate::models::resume::ProjectEntry;

const MAX_PROJECTS: usize = 15;
const MAX_NAME_CHARS: usize = 80;

/// Extracts projects: a short, non-bulleted line names a project and the
/// bulleted or long lines after it describe it.
pub fn extract_projects(section: Option<&str>) -> Vec<ProjectEntry> {
    let Some(section) = section else {
        return Vec::new();
    };

    let mut projects = Vec::new();
    let mut current: Option<ProjectEntry> = None;

    for line in section.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let is_heading = !starts_with_bullet(line) && line.chars().count() < MAX_NAME_CHARS;
        if is_heading {
            projects.extend(current.take());
            current = Some(ProjectEntry {
                name: line.to_string(),
                description: String::new(),
            });
        } else if let Some(project) = current.as_mut() {
            let detail = strip_bullet(line);
            if !detail.is_empty() {
                if !project.description.is_empty() {
                    project.description.push_str(DESCRIPTION_JOINER);
                }
                project.description.push_str(detail);
            }
        } else {
            current = Some(ProjectEntry {
                name: line.chars().take(MAX_NAME_CHARS).collect(),
                description: String::new(),
            });
        }
    }
    projects.extend(current);

    projects.truncate(MAX_PROJECTS);
    tracing::debug!(count = projects.len(), "extracted projects");
    projects
}
