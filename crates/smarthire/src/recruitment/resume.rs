//! Resume upload: file-type gate, mock skill extraction, and job matching.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::domain::{CandidateId, JobId, JobPosting};
use super::matching::{MatchScore, MatchTier, SkillOverlap};
use super::task::{ProcessingTask, TaskObserver, TaskState};

/// Metadata for the single file picked in the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    #[serde(default)]
    pub size_bytes: u64,
}

impl ResumeUpload {
    /// Size in megabytes with two decimals, as shown next to the file name.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please upload a PDF file")]
    UnsupportedType { content_type: String },
    #[error("no file selected")]
    MissingFile,
}

/// Only `application/pdf` is accepted; parameters such as `; charset=` are ignored.
pub fn validate_upload(upload: &ResumeUpload) -> Result<(), UploadError> {
    if upload.file_name.trim().is_empty() {
        return Err(UploadError::MissingFile);
    }
    let accepted = upload
        .content_type
        .parse::<mime::Mime>()
        .map(|parsed| parsed.essence_str() == mime::APPLICATION_PDF.essence_str())
        .unwrap_or(false);
    if accepted {
        Ok(())
    } else {
        Err(UploadError::UnsupportedType {
            content_type: upload.content_type.clone(),
        })
    }
}

/// Source of skills for an uploaded resume.
pub trait SkillExtractor: Send + Sync {
    fn extract(&self, upload: &ResumeUpload) -> Result<Vec<String>, String>;
}

/// Returns the same skill list for every file.
#[derive(Debug, Clone)]
pub struct FixedSkillExtractor {
    skills: Vec<String>,
}

impl FixedSkillExtractor {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for FixedSkillExtractor {
    fn default() -> Self {
        Self::new(["React", "TypeScript", "JavaScript", "Node.js", "HTML", "Git"])
    }
}

impl SkillExtractor for FixedSkillExtractor {
    fn extract(&self, _upload: &ResumeUpload) -> Result<Vec<String>, String> {
        Ok(self.skills.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobMatch {
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub match_score: MatchScore,
    pub tier: MatchTier,
    pub tier_class: &'static str,
    pub required_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub can_apply: bool,
}

impl JobMatch {
    /// `declared` wins over the computed overlap percentage.
    pub fn build(job: &JobPosting, skills: &[String], declared: Option<MatchScore>) -> Self {
        let overlap = SkillOverlap::between(skills, &job.required_skills);
        let match_score = declared.unwrap_or_else(|| overlap.percentage());
        let tier = match_score.tier();
        Self {
            job_id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            match_score,
            tier,
            tier_class: tier.style_class(),
            required_skills: job.required_skills.clone(),
            matching_skills: overlap.matching,
            missing_skills: overlap.missing,
            can_apply: match_score.can_apply(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeAnalysis {
    pub candidate_id: CandidateId,
    pub file_name: String,
    pub extracted_skills: Vec<String>,
    pub matches: Vec<JobMatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UploadTaskId(pub u64);

/// Settled uploads kept around for late polls; older ones are evicted on insert.
pub const SETTLED_UPLOADS_RETAINED: usize = 16;

/// Live resume-processing tasks, addressable by id.
#[derive(Clone, Default)]
pub struct UploadRegistry {
    tasks: Arc<Mutex<HashMap<UploadTaskId, ProcessingTask<ResumeAnalysis>>>>,
    next_id: Arc<AtomicU64>,
}

impl UploadRegistry {
    pub fn insert(&self, task: ProcessingTask<ResumeAnalysis>) -> UploadTaskId {
        let id = UploadTaskId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let mut tasks = self.lock();
        evict_settled(&mut tasks, SETTLED_UPLOADS_RETAINED);
        tasks.insert(id, task);
        id
    }

    pub fn state(&self, id: UploadTaskId) -> Option<TaskState<ResumeAnalysis>> {
        self.lock().get(&id).map(ProcessingTask::state)
    }

    pub fn cancel(&self, id: UploadTaskId) -> Option<bool> {
        self.lock().get_mut(&id).map(ProcessingTask::cancel)
    }

    pub fn observe(&self, id: UploadTaskId) -> Option<TaskObserver<ResumeAnalysis>> {
        self.lock().get(&id).map(ProcessingTask::observer)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(
        &self,
    ) -> std::sync::MutexGuard<'_, HashMap<UploadTaskId, ProcessingTask<ResumeAnalysis>>> {
        self.tasks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Drop the oldest settled tasks until at most `retain` remain; pending tasks are never evicted.
fn evict_settled(
    tasks: &mut HashMap<UploadTaskId, ProcessingTask<ResumeAnalysis>>,
    retain: usize,
) {
    let mut settled: Vec<UploadTaskId> = tasks
        .iter()
        .filter(|(_, task)| task.is_settled())
        .map(|(id, _)| *id)
        .collect();
    if settled.len() <= retain {
        return;
    }
    settled.sort_unstable();
    let excess = settled.len() - retain;
    for id in settled.into_iter().take(excess) {
        tasks.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn upload(content_type: &str) -> ResumeUpload {
        ResumeUpload {
            file_name: "john-doe.pdf".to_string(),
            content_type: content_type.to_string(),
            size_bytes: 2_621_440,
        }
    }

    #[test]
    fn only_pdf_uploads_are_accepted() {
        assert!(validate_upload(&upload("application/pdf")).is_ok());
        assert!(validate_upload(&upload("Application/PDF")).is_ok());
        let err = validate_upload(&upload(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ))
        .expect_err("docx rejected");
        assert_eq!(err.to_string(), "Please upload a PDF file");
        assert!(validate_upload(&upload("not a mime")).is_err());
    }

    #[test]
    fn missing_file_name_is_rejected() {
        let mut empty = upload("application/pdf");
        empty.file_name = "  ".to_string();
        assert_eq!(validate_upload(&empty), Err(UploadError::MissingFile));
    }

    #[test]
    fn size_label_uses_megabytes() {
        assert_eq!(upload("application/pdf").size_label(), "2.50 MB");
    }

    #[test]
    fn fixed_extractor_returns_resume_skills() {
        let skills = FixedSkillExtractor::default()
            .extract(&upload("application/pdf"))
            .expect("extraction succeeds");
        assert_eq!(
            skills,
            vec!["React", "TypeScript", "JavaScript", "Node.js", "HTML", "Git"]
        );
    }

    fn finished_task() -> ProcessingTask<ResumeAnalysis> {
        ProcessingTask::spawn(Duration::ZERO, || Err("unreadable".to_string()))
    }

    #[tokio::test]
    async fn settled_uploads_are_evicted_oldest_first() {
        let registry = UploadRegistry::default();
        let mut ids = Vec::new();
        for _ in 0..SETTLED_UPLOADS_RETAINED + 10 {
            let id = registry.insert(finished_task());
            let mut observer = registry.observe(id).expect("registered");
            observer.wait().await;
            ids.push(id);
        }

        assert!(registry.len() <= SETTLED_UPLOADS_RETAINED + 1);
        assert!(registry.state(ids[0]).is_none());
        assert!(matches!(
            registry.state(ids[ids.len() - 1]),
            Some(TaskState::Failed(_))
        ));
    }

    #[tokio::test]
    async fn pending_uploads_are_never_evicted() {
        let registry = UploadRegistry::default();
        let pending = registry.insert(ProcessingTask::spawn(Duration::from_secs(60), || {
            Err("never runs".to_string())
        }));
        for _ in 0..SETTLED_UPLOADS_RETAINED + 5 {
            let id = registry.insert(finished_task());
            registry.observe(id).expect("registered").wait().await;
        }

        assert_eq!(registry.state(pending), Some(TaskState::Pending));
    }
}
