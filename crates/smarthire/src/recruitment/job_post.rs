//! Job post form: draft state, validation, and skill suggestions.

use serde::{Deserialize, Serialize};

use super::domain::JobType;

/// Skills offered by the job post form's picker, in display order.
pub const AVAILABLE_SKILLS: [&str; 20] = [
    "React",
    "JavaScript",
    "TypeScript",
    "Node.js",
    "Python",
    "Java",
    "HTML",
    "CSS",
    "Git",
    "AWS",
    "Docker",
    "SQL",
    "MongoDB",
    "Express",
    "Vue.js",
    "Angular",
    "Redux",
    "GraphQL",
    "REST APIs",
    "Agile",
];

/// Unsubmitted job post as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDraft {
    pub title: String,
    pub department: String,
    pub location: String,
    pub job_type: JobType,
    pub experience: String,
    pub salary: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill in all required fields")]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// A draft that passed validation, with blank list entries removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidJobPost(JobDraft);

impl ValidJobPost {
    pub fn into_inner(self) -> JobDraft {
        self.0
    }

    pub fn draft(&self) -> &JobDraft {
        &self.0
    }
}

impl JobDraft {
    /// Add a skill unless it is blank or already selected.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|existing| existing == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|existing| existing != skill);
        self.skills.len() != before
    }

    /// Title, location, description, and at least one skill are required.
    pub fn validate(self) -> Result<ValidJobPost, ValidationError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.skills.iter().all(|skill| skill.trim().is_empty()) {
            missing.push("skills");
        }
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let mut draft = self;
        draft.title = draft.title.trim().to_string();
        draft.location = draft.location.trim().to_string();
        draft.responsibilities = drop_blank(draft.responsibilities);
        draft.requirements = drop_blank(draft.requirements);
        draft.benefits = drop_blank(draft.benefits);
        draft.skills = drop_blank(draft.skills);
        Ok(ValidJobPost(draft))
    }
}

fn drop_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Available skills containing `input` (case-insensitive) that are not yet selected.
pub fn skill_suggestions(input: &str, selected: &[String]) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    AVAILABLE_SKILLS
        .into_iter()
        .filter(|skill| skill.to_lowercase().contains(&needle))
        .filter(|skill| !selected.iter().any(|chosen| chosen == skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> JobDraft {
        JobDraft {
            title: "Platform Engineer".to_string(),
            location: "Remote".to_string(),
            description: "Own the deployment pipeline.".to_string(),
            responsibilities: vec!["Run CI".to_string(), "  ".to_string()],
            requirements: vec![String::new()],
            skills: vec!["Docker".to_string()],
            ..JobDraft::default()
        }
    }

    #[test]
    fn validation_lists_every_missing_field() {
        let err = JobDraft::default().validate().expect_err("empty draft");
        assert_eq!(err.missing, vec!["title", "location", "description", "skills"]);
        assert_eq!(err.to_string(), "Please fill in all required fields");
    }

    #[test]
    fn valid_draft_drops_blank_list_items() {
        let post = complete_draft().validate().expect("valid draft").into_inner();
        assert_eq!(post.responsibilities, vec!["Run CI"]);
        assert!(post.requirements.is_empty());
        assert_eq!(post.job_type, JobType::FullTime);
    }

    #[test]
    fn skills_are_added_once() {
        let mut draft = JobDraft::default();
        assert!(draft.add_skill("React"));
        assert!(!draft.add_skill("React"));
        assert!(!draft.add_skill("   "));
        assert!(draft.remove_skill("React"));
        assert!(!draft.remove_skill("React"));
    }

    #[test]
    fn suggestions_exclude_selected_skills() {
        let selected = vec!["JavaScript".to_string()];
        assert_eq!(skill_suggestions("java", &selected), vec!["Java"]);
        assert_eq!(skill_suggestions("", &[]).len(), AVAILABLE_SKILLS.len());
        assert!(skill_suggestions("cobol", &[]).is_empty());
    }
}
