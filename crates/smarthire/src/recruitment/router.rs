use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ApplicationId, CandidateId, JobId, JobType, MemberId};
use super::job_post::{JobDraft, AVAILABLE_SKILLS};
use super::pipeline::ApplicationStatus;
use super::repository::RecruitmentRepository;
use super::resume::{ResumeUpload, UploadTaskId};
use super::service::{RecruitmentService, TrackerFilter};
use super::team::InviteKind;
use crate::error::AppError;
use crate::notifications::{Notifier, ToastId, ToastQueue};
use crate::routing::{nav_links, AppRoute};
use crate::session::LoginRole;

type SharedService<R> = Arc<RecruitmentService<R, ToastQueue>>;

/// Page routes plus the JSON actions behind their buttons and forms.
pub fn recruitment_router<R>(service: SharedService<R>) -> Router
where
    R: RecruitmentRepository + 'static,
{
    Router::new()
        .route("/", get(landing_handler::<R>))
        .route("/candidate/dashboard", get(candidate_dashboard_handler::<R>))
        .route("/candidate/resume-upload", get(resume_upload_page::<R>))
        .route("/candidate/job/:id", get(job_detail_handler::<R>))
        .route("/company/dashboard", get(company_dashboard_handler::<R>))
        .route("/company/post-job", get(post_job_page))
        .route("/company/candidates/:jobId", get(candidate_list_handler::<R>))
        .route(
            "/company/candidates/:jobId/export",
            get(export_candidates_handler::<R>),
        )
        .route("/company/manage-hr", get(team_handler::<R>))
        .route("/company/status-tracker", get(status_tracker_handler::<R>))
        .route("/api/session", get(session_handler::<R>))
        .route("/api/session/login", post(login_handler::<R>))
        .route("/api/session/logout", post(logout_handler::<R>))
        .route("/api/session/select-role", post(select_role_handler::<R>))
        .route("/api/notifications", get(notifications_handler::<R>))
        .route("/api/notifications/:id", delete(dismiss_handler::<R>))
        .route("/api/jobs", post(post_job_handler::<R>))
        .route("/api/jobs/:id/apply", post(apply_handler::<R>))
        .route("/api/skills/suggestions", get(suggestions_handler::<R>))
        .route("/api/resume", post(upload_handler::<R>))
        .route(
            "/api/resume/:task_id",
            get(upload_status_handler::<R>).delete(cancel_upload_handler::<R>),
        )
        .route(
            "/api/applications/:id/status",
            post(update_status_handler::<R>),
        )
        .route("/api/applications/:id/contact", post(contact_handler::<R>))
        .route(
            "/api/applications/:id/interview",
            post(schedule_interview_handler::<R>),
        )
        .route("/api/team/invitations", post(invite_handler::<R>))
        .route("/api/team/:id", delete(remove_member_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidateQuery {
    candidate: Option<String>,
}

impl CandidateQuery {
    fn resolve<R, N>(self, service: &RecruitmentService<R, N>) -> CandidateId
    where
        R: RecruitmentRepository + 'static,
        N: Notifier + 'static,
    {
        self.candidate
            .filter(|id| !id.trim().is_empty())
            .map(CandidateId)
            .unwrap_or_else(|| service.demo_candidate())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CompanyQuery {
    company: Option<String>,
}

pub(crate) async fn landing_handler<R>(State(service): State<SharedService<R>>) -> Response
where
    R: RecruitmentRepository + 'static,
{
    let view = service.landing();
    let nav = nav_links(view.user.as_ref().map(|user| user.role));
    Json(json!({ "page": view, "nav": nav })).into_response()
}

pub(crate) async fn candidate_dashboard_handler<R>(
    State(service): State<SharedService<R>>,
    Query(query): Query<CandidateQuery>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let candidate = query.resolve(service.as_ref());
    Ok(Json(service.candidate_dashboard(&candidate)?).into_response())
}

pub(crate) async fn resume_upload_page<R>(
    State(service): State<SharedService<R>>,
    Query(query): Query<CandidateQuery>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    let candidate = query.resolve(service.as_ref());
    let processing_ms =
        u64::try_from(service.config().resume_processing.as_millis()).unwrap_or(u64::MAX);
    Json(json!({
        "candidate_id": candidate,
        "accepted_types": [mime::APPLICATION_PDF.essence_str()],
        "processing_ms": processing_ms,
        "upload_action": "/api/resume",
    }))
    .into_response()
}

pub(crate) async fn job_detail_handler<R>(
    State(service): State<SharedService<R>>,
    Path(job_id): Path<String>,
    Query(query): Query<CandidateQuery>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let candidate = query.resolve(service.as_ref());
    Ok(Json(service.job_detail(&JobId(job_id), &candidate)?).into_response())
}

pub(crate) async fn company_dashboard_handler<R>(
    State(service): State<SharedService<R>>,
    Query(query): Query<CompanyQuery>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let company = query
        .company
        .filter(|company| !company.trim().is_empty())
        .unwrap_or_else(|| service.current_company());
    Ok(Json(service.company_dashboard(&company)?).into_response())
}

pub(crate) async fn post_job_page() -> Response {
    let draft = JobDraft {
        responsibilities: vec![String::new()],
        requirements: vec![String::new()],
        benefits: vec![String::new()],
        ..JobDraft::default()
    };
    let job_types = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];
    Json(json!({
        "available_skills": AVAILABLE_SKILLS,
        "job_types": job_types,
        "draft": draft,
    }))
    .into_response()
}

pub(crate) async fn candidate_list_handler<R>(
    State(service): State<SharedService<R>>,
    Path(job_id): Path<String>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    Ok(Json(service.candidate_list(&JobId(job_id))?).into_response())
}

pub(crate) async fn export_candidates_handler<R>(
    State(service): State<SharedService<R>>,
    Path(job_id): Path<String>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let disposition = format!("attachment; filename=\"candidates-{job_id}.csv\"");
    let body = service.export_candidates_csv(&JobId(job_id))?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

pub(crate) async fn team_handler<R>(
    State(service): State<SharedService<R>>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    Ok(Json(service.team()?).into_response())
}

pub(crate) async fn status_tracker_handler<R>(
    State(service): State<SharedService<R>>,
    Query(filter): Query<TrackerFilter>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    Ok(Json(service.status_tracker(&filter)?).into_response())
}

pub(crate) async fn session_handler<R>(State(service): State<SharedService<R>>) -> Response
where
    R: RecruitmentRepository + 'static,
{
    let user = service.session().current();
    let nav = nav_links(user.as_ref().map(|user| user.role));
    Json(json!({ "user": user, "nav": nav })).into_response()
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: LoginRole,
}

pub(crate) async fn login_handler<R>(
    State(service): State<SharedService<R>>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let user = service.login(&request.email, &request.password, request.role)?;
    let redirect = AppRoute::dashboard_for(user.role).path();
    Ok(Json(json!({ "user": user, "redirect": redirect })).into_response())
}

pub(crate) async fn logout_handler<R>(State(service): State<SharedService<R>>) -> StatusCode
where
    R: RecruitmentRepository + 'static,
{
    service.logout();
    StatusCode::NO_CONTENT
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SelectRoleRequest {
    pub role: LoginRole,
}

pub(crate) async fn select_role_handler<R>(
    State(service): State<SharedService<R>>,
    Json(request): Json<SelectRoleRequest>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    Json(service.select_role(request.role)).into_response()
}

pub(crate) async fn notifications_handler<R>(State(service): State<SharedService<R>>) -> Response
where
    R: RecruitmentRepository + 'static,
{
    Json(service.notifier().active(Utc::now())).into_response()
}

pub(crate) async fn dismiss_handler<R>(
    State(service): State<SharedService<R>>,
    Path(id): Path<u64>,
) -> StatusCode
where
    R: RecruitmentRepository + 'static,
{
    if service.notifier().dismiss(ToastId(id)) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

pub(crate) async fn post_job_handler<R>(
    State(service): State<SharedService<R>>,
    Json(draft): Json<JobDraft>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let job = service.post_job(draft)?;
    let redirect = AppRoute::CompanyDashboard.path();
    Ok((
        StatusCode::CREATED,
        Json(json!({ "job": job, "redirect": redirect })),
    )
        .into_response())
}

pub(crate) async fn apply_handler<R>(
    State(service): State<SharedService<R>>,
    Path(job_id): Path<String>,
    Query(query): Query<CandidateQuery>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let candidate = query.resolve(service.as_ref());
    let application = service.apply(&JobId(job_id), &candidate)?;
    Ok((StatusCode::CREATED, Json(application)).into_response())
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SuggestionQuery {
    #[serde(default)]
    input: String,
    /// Comma-separated skills already picked.
    #[serde(default)]
    selected: String,
}

pub(crate) async fn suggestions_handler<R>(
    State(service): State<SharedService<R>>,
    Query(query): Query<SuggestionQuery>,
) -> Response
where
    R: RecruitmentRepository + 'static,
{
    let selected: Vec<String> = query
        .selected
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect();
    Json(service.skill_suggestions(&query.input, &selected)).into_response()
}

pub(crate) async fn upload_handler<R>(
    State(service): State<SharedService<R>>,
    Query(query): Query<CandidateQuery>,
    Json(upload): Json<ResumeUpload>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let candidate = query.resolve(service.as_ref());
    let task_id = service.upload_resume(&candidate, upload)?;
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "task_id": task_id,
            "status_url": format!("/api/resume/{}", task_id.0),
        })),
    )
        .into_response())
}

pub(crate) async fn upload_status_handler<R>(
    State(service): State<SharedService<R>>,
    Path(task_id): Path<u64>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    Ok(Json(service.upload_status(UploadTaskId(task_id))?).into_response())
}

pub(crate) async fn cancel_upload_handler<R>(
    State(service): State<SharedService<R>>,
    Path(task_id): Path<u64>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let cancelled = service.cancel_upload(UploadTaskId(task_id))?;
    Ok(Json(json!({ "cancelled": cancelled })).into_response())
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatusChangeRequest {
    pub status: ApplicationStatus,
    #[serde(default)]
    pub note: Option<String>,
}

pub(crate) async fn update_status_handler<R>(
    State(service): State<SharedService<R>>,
    Path(application_id): Path<String>,
    Json(request): Json<StatusChangeRequest>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let application = service.update_status(
        &ApplicationId(application_id),
        request.status,
        request.note,
    )?;
    Ok(Json(application).into_response())
}

pub(crate) async fn contact_handler<R>(
    State(service): State<SharedService<R>>,
    Path(application_id): Path<String>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    Ok(Json(service.contact(&ApplicationId(application_id))?).into_response())
}

pub(crate) async fn schedule_interview_handler<R>(
    State(service): State<SharedService<R>>,
    Path(application_id): Path<String>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    Ok(Json(service.schedule_interview(&ApplicationId(application_id))?).into_response())
}

#[derive(Debug, Deserialize, Serialize)]
pub struct InviteRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub kind: InviteKind,
}

pub(crate) async fn invite_handler<R>(
    State(service): State<SharedService<R>>,
    Json(request): Json<InviteRequest>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    let member = service.invite(&request.email, request.kind)?;
    Ok((StatusCode::CREATED, Json(member)).into_response())
}

pub(crate) async fn remove_member_handler<R>(
    State(service): State<SharedService<R>>,
    Path(member_id): Path<String>,
) -> Result<Response, AppError>
where
    R: RecruitmentRepository + 'static,
{
    Ok(Json(service.remove_member(&MemberId(member_id))?).into_response())
}
