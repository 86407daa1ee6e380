//! Hiring-stage vocabulary and timeline rendering.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company-side status of an application.
///
/// Any status may follow any other; the timeline only reflects where an
/// application currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[serde(rename = "Resume Submitted", alias = "New Application")]
    ResumeSubmitted,
    #[serde(rename = "Contacted")]
    Contacted,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    #[serde(rename = "Interview Completed")]
    InterviewCompleted,
    #[serde(rename = "Hired")]
    Hired,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl ApplicationStatus {
    /// Selector order used by the candidate list.
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::ResumeSubmitted,
        ApplicationStatus::Contacted,
        ApplicationStatus::InterviewScheduled,
        ApplicationStatus::InterviewCompleted,
        ApplicationStatus::Hired,
        ApplicationStatus::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::ResumeSubmitted => "Resume Submitted",
            ApplicationStatus::Contacted => "Contacted",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::InterviewCompleted => "Interview Completed",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Case-insensitive lookup; "New Application" is an alias of "Resume Submitted".
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("New Application") {
            return Some(ApplicationStatus::ResumeSubmitted);
        }
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(raw))
    }

    pub const fn candidate_status(self) -> CandidateStatus {
        match self {
            ApplicationStatus::ResumeSubmitted => CandidateStatus::Applied,
            ApplicationStatus::Contacted => CandidateStatus::UnderReview,
            ApplicationStatus::InterviewScheduled | ApplicationStatus::InterviewCompleted => {
                CandidateStatus::InterviewScheduled
            }
            ApplicationStatus::Hired => CandidateStatus::Hired,
            ApplicationStatus::Rejected => CandidateStatus::NotSelected,
        }
    }

    pub const fn style_class(self) -> &'static str {
        match self {
            ApplicationStatus::ResumeSubmitted => "bg-blue-100 text-blue-800",
            ApplicationStatus::Contacted => "bg-yellow-100 text-yellow-800",
            ApplicationStatus::InterviewScheduled => "bg-purple-100 text-purple-800",
            ApplicationStatus::InterviewCompleted => "bg-indigo-100 text-indigo-800",
            ApplicationStatus::Hired => "bg-green-100 text-green-800",
            ApplicationStatus::Rejected => "bg-red-100 text-red-800",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status wording shown to candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[serde(rename = "Applied")]
    Applied,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    #[serde(rename = "Hired")]
    Hired,
    #[serde(rename = "Not Selected")]
    NotSelected,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CandidateStatus::Applied => "Applied",
            CandidateStatus::UnderReview => "Under Review",
            CandidateStatus::InterviewScheduled => "Interview Scheduled",
            CandidateStatus::Hired => "Hired",
            CandidateStatus::NotSelected => "Not Selected",
        }
    }

    pub const fn style_class(self) -> &'static str {
        match self {
            CandidateStatus::InterviewScheduled | CandidateStatus::Hired => {
                "bg-green-100 text-green-800"
            }
            CandidateStatus::UnderReview => "bg-yellow-100 text-yellow-800",
            CandidateStatus::Applied => "bg-blue-100 text-blue-800",
            CandidateStatus::NotSelected => "bg-gray-100 text-gray-800",
        }
    }
}

/// One line of an application's status log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub status: ApplicationStatus,
    pub date: NaiveDate,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("stage '{0}' is not part of the pipeline")]
    UnknownStage(String),
    #[error("a pipeline needs at least one stage")]
    Empty,
}

/// Rendering state of one stage in a progress indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    pub position: usize,
    pub stage: String,
    pub completed: bool,
    pub is_current: bool,
}

/// Fixed ordered list of stage names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPipeline {
    stages: Vec<String>,
}

impl StatusPipeline {
    pub fn new<I, S>(stages: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stages: Vec<String> = stages.into_iter().map(Into::into).collect();
        if stages.is_empty() {
            return Err(PipelineError::Empty);
        }
        Ok(Self { stages })
    }

    /// Stages tracked on the company side.
    pub fn company() -> Self {
        Self {
            stages: [
                ApplicationStatus::ResumeSubmitted,
                ApplicationStatus::Contacted,
                ApplicationStatus::InterviewScheduled,
                ApplicationStatus::InterviewCompleted,
                ApplicationStatus::Hired,
            ]
            .iter()
            .map(|status| status.label().to_string())
            .collect(),
        }
    }

    /// Stages shown to candidates.
    pub fn candidate() -> Self {
        Self {
            stages: [
                CandidateStatus::Applied,
                CandidateStatus::UnderReview,
                CandidateStatus::InterviewScheduled,
            ]
            .iter()
            .map(|status| status.label().to_string())
            .collect(),
        }
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn position(&self, stage: &str) -> Option<usize> {
        self.stages.iter().position(|candidate| candidate == stage)
    }

    /// Stages up to and including `current` are completed; only `current` is current.
    /// A stage missing from the pipeline is an error rather than an empty timeline.
    pub fn timeline(&self, current: &str) -> Result<Vec<TimelineStep>, PipelineError> {
        let current_index = self
            .position(current)
            .ok_or_else(|| PipelineError::UnknownStage(current.to_string()))?;

        Ok(self
            .stages
            .iter()
            .enumerate()
            .map(|(index, stage)| TimelineStep {
                position: index + 1,
                stage: stage.clone(),
                completed: index <= current_index,
                is_current: index == current_index,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_marks_prior_stages_completed() {
        let pipeline = StatusPipeline::new(["A", "B", "C", "D", "E"]).expect("pipeline");
        let steps = pipeline.timeline("C").expect("known stage");

        let completed: Vec<bool> = steps.iter().map(|step| step.completed).collect();
        let current: Vec<bool> = steps.iter().map(|step| step.is_current).collect();
        assert_eq!(completed, vec![true, true, true, false, false]);
        assert_eq!(current, vec![false, false, true, false, false]);
        assert_eq!(steps[2].position, 3);
    }

    #[test]
    fn unknown_stage_fails_fast() {
        let pipeline = StatusPipeline::company();
        assert_eq!(
            pipeline.timeline("Rejected"),
            Err(PipelineError::UnknownStage("Rejected".to_string()))
        );
        assert_eq!(
            StatusPipeline::new(Vec::<String>::new()),
            Err(PipelineError::Empty)
        );
    }

    #[test]
    fn company_pipeline_ends_in_hired() {
        let pipeline = StatusPipeline::company();
        let steps = pipeline.timeline("Hired").expect("hired is a stage");
        assert!(steps.iter().all(|step| step.completed));
        assert_eq!(pipeline.stages().len(), 5);
        assert_eq!(pipeline.position("Contacted"), Some(1));
    }

    #[test]
    fn candidate_pipeline_uses_candidate_vocabulary() {
        let pipeline = StatusPipeline::candidate();
        let label = ApplicationStatus::Contacted.candidate_status().label();
        let steps = pipeline.timeline(label).expect("under review is a stage");
        assert_eq!(
            steps.iter().filter(|step| step.completed).count(),
            2,
            "applied and under review are complete"
        );
    }

    #[test]
    fn parse_accepts_labels_and_alias() {
        assert_eq!(
            ApplicationStatus::parse("new application"),
            Some(ApplicationStatus::ResumeSubmitted)
        );
        assert_eq!(
            ApplicationStatus::parse("Interview Completed"),
            Some(ApplicationStatus::InterviewCompleted)
        );
        assert_eq!(ApplicationStatus::parse("Ghosted"), None);
        let parsed: ApplicationStatus =
            serde_json::from_str("\"New Application\"").expect("alias deserializes");
        assert_eq!(parsed, ApplicationStatus::ResumeSubmitted);
    }
}
