use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::config::PlatformConfig;
use crate::notifications::{Severity, ToastQueue};
use crate::recruitment::domain::{
    Application, ApplicationId, CandidateId, CandidateProfile, HrMember, JobId, JobPosting,
    MemberId,
};
use crate::recruitment::matching::MatchScore;
use crate::recruitment::repository::{RecruitmentRepository, RepositoryError};
use crate::recruitment::{recruitment_router, InMemoryRepository, RecruitmentService};
use crate::session::SessionStore;

pub(super) type TestService = RecruitmentService<InMemoryRepository, ToastQueue>;

pub(super) fn platform_config(resume_processing: Duration) -> PlatformConfig {
    PlatformConfig {
        resume_processing,
        toast_ttl: Duration::from_secs(60),
        ..PlatformConfig::default()
    }
}

pub(super) fn build_service() -> (TestService, Arc<InMemoryRepository>, Arc<ToastQueue>) {
    build_service_with(platform_config(Duration::from_millis(10)))
}

pub(super) fn build_service_with(
    config: PlatformConfig,
) -> (TestService, Arc<InMemoryRepository>, Arc<ToastQueue>) {
    let repository = Arc::new(InMemoryRepository::seeded());
    let toasts = Arc::new(ToastQueue::new(config.toast_ttl));
    let service = RecruitmentService::new(
        repository.clone(),
        toasts.clone(),
        SessionStore::new(),
        config,
    );
    (service, repository, toasts)
}

pub(super) fn router_with_service(service: TestService) -> axum::Router {
    recruitment_router(Arc::new(service))
}

pub(super) fn john() -> CandidateId {
    CandidateId("cand-1".to_string())
}

pub(super) fn job(id: &str) -> JobId {
    JobId(id.to_string())
}

pub(super) fn application(id: &str) -> ApplicationId {
    ApplicationId(id.to_string())
}

/// Messages queued so far, oldest first.
pub(super) fn messages(toasts: &ToastQueue) -> Vec<(String, Severity)> {
    toasts
        .snapshot()
        .into_iter()
        .map(|toast| (toast.message, toast.severity))
        .collect()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}

pub(super) struct UnavailableRepository;

fn offline<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::Unavailable("database offline".to_string()))
}

impl RecruitmentRepository for UnavailableRepository {
    fn list_jobs(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        offline()
    }

    fn get_job(&self, _id: &JobId) -> Result<Option<JobPosting>, RepositoryError> {
        offline()
    }

    fn insert_job(&self, _job: JobPosting) -> Result<JobPosting, RepositoryError> {
        offline()
    }

    fn list_candidates(&self) -> Result<Vec<CandidateProfile>, RepositoryError> {
        offline()
    }

    fn get_candidate(&self, _id: &CandidateId) -> Result<Option<CandidateProfile>, RepositoryError> {
        offline()
    }

    fn list_applications(&self) -> Result<Vec<Application>, RepositoryError> {
        offline()
    }

    fn get_application(&self, _id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        offline()
    }

    fn insert_application(
        &self,
        _application: Application,
    ) -> Result<Application, RepositoryError> {
        offline()
    }

    fn update_application(&self, _application: Application) -> Result<(), RepositoryError> {
        offline()
    }

    fn declared_score(
        &self,
        _candidate: &CandidateId,
        _job: &JobId,
    ) -> Result<Option<MatchScore>, RepositoryError> {
        offline()
    }

    fn resume_matches(&self, _candidate: &CandidateId) -> Result<Vec<JobId>, RepositoryError> {
        offline()
    }

    fn list_team(&self) -> Result<Vec<HrMember>, RepositoryError> {
        offline()
    }

    fn insert_member(&self, _member: HrMember) -> Result<HrMember, RepositoryError> {
        offline()
    }

    fn remove_member(&self, _id: &MemberId) -> Result<HrMember, RepositoryError> {
        offline()
    }
}
