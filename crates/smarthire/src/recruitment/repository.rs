use super::domain::{
    Application, ApplicationId, CandidateId, CandidateProfile, HrMember, JobId, JobPosting,
    MemberId,
};
use super::matching::MatchScore;

/// Single storage seam for every page; swap the in-memory seed for a real source here.
pub trait RecruitmentRepository: Send + Sync {
    fn list_jobs(&self) -> Result<Vec<JobPosting>, RepositoryError>;
    fn get_job(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError>;
    fn insert_job(&self, job: JobPosting) -> Result<JobPosting, RepositoryError>;

    fn list_candidates(&self) -> Result<Vec<CandidateProfile>, RepositoryError>;
    fn get_candidate(&self, id: &CandidateId) -> Result<Option<CandidateProfile>, RepositoryError>;

    fn list_applications(&self) -> Result<Vec<Application>, RepositoryError>;
    fn get_application(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
    fn insert_application(&self, application: Application)
        -> Result<Application, RepositoryError>;
    fn update_application(&self, application: Application) -> Result<(), RepositoryError>;

    /// Score recorded for a (candidate, job) pair, if one was declared.
    fn declared_score(
        &self,
        candidate: &CandidateId,
        job: &JobId,
    ) -> Result<Option<MatchScore>, RepositoryError>;

    /// Jobs offered to a candidate after a resume upload, best first.
    fn resume_matches(&self, candidate: &CandidateId) -> Result<Vec<JobId>, RepositoryError>;

    fn list_team(&self) -> Result<Vec<HrMember>, RepositoryError>;
    fn insert_member(&self, member: HrMember) -> Result<HrMember, RepositoryError>;
    fn remove_member(&self, id: &MemberId) -> Result<HrMember, RepositoryError>;

    fn applications_for_job(&self, job: &JobId) -> Result<Vec<Application>, RepositoryError> {
        Ok(self
            .list_applications()?
            .into_iter()
            .filter(|application| &application.job_id == job)
            .collect())
    }

    fn applications_for_candidate(
        &self,
        candidate: &CandidateId,
    ) -> Result<Vec<Application>, RepositoryError> {
        Ok(self
            .list_applications()?
            .into_iter()
            .filter(|application| &application.candidate_id == candidate)
            .collect())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
