//! Recruitment workflows: job matching, hiring pipeline, resume intake, and HR team management.

pub mod domain;
pub mod job_post;
pub mod matching;
pub mod memory;
pub mod pipeline;
pub mod repository;
pub mod resume;
pub mod router;
mod seed;
pub mod service;
pub mod task;
pub mod team;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, CandidateId, CandidateProfile, HrMember, HrRole, JobId,
    JobPosting, JobType, MemberId, MembershipStatus, Permission, PostingStatus,
};
pub use job_post::{skill_suggestions, JobDraft, ValidationError, AVAILABLE_SKILLS};
pub use matching::{
    ensure_can_apply, ApplyError, InvalidScore, MatchScore, MatchTier, SkillOverlap,
    APPLY_THRESHOLD,
};
pub use memory::InMemoryRepository;
pub use pipeline::{
    ApplicationStatus, CandidateStatus, PipelineError, StatusHistoryEntry, StatusPipeline,
    TimelineStep,
};
pub use repository::{RecruitmentRepository, RepositoryError};
pub use resume::{
    validate_upload, FixedSkillExtractor, JobMatch, ResumeAnalysis, ResumeUpload,
    SkillExtractor, UploadError, UploadTaskId,
};
pub use router::recruitment_router;
pub use service::{
    CandidateDashboard, CandidateListView, CompanyDashboard, RecruitmentService, RoleSelection,
    ServiceError, StatusTrackerView, TrackerFilter,
};
pub use task::{ProcessingTask, TaskState};
pub use team::{InviteError, InviteKind, TeamStats};
