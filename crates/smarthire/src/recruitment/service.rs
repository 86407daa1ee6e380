use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{
    Application, ApplicationId, CandidateId, CandidateProfile, HrMember, JobId, JobPosting,
    MemberId, PostingStatus,
};
use super::job_post::{self, JobDraft, ValidationError};
use super::matching::{ensure_can_apply, ApplyError, MatchScore, MatchTier};
use super::pipeline::{
    ApplicationStatus, CandidateStatus, PipelineError, StatusHistoryEntry, StatusPipeline,
    TimelineStep,
};
use super::repository::{RecruitmentRepository, RepositoryError};
use super::resume::{
    validate_upload, FixedSkillExtractor, JobMatch, ResumeAnalysis, ResumeUpload,
    SkillExtractor, UploadError, UploadRegistry, UploadTaskId,
};
use super::task::{ProcessingTask, TaskState};
use super::team::{self, InviteError, InviteKind, TeamStats};
use crate::config::PlatformConfig;
use crate::notifications::{Notifier, Severity};
use crate::routing::AppRoute;
use crate::session::{LoginError, LoginRole, SessionStore, User};

const RECOMMENDATION_FLOOR: u8 = 80;
const SCORE_TOO_LOW: &str = "Your match score is too low to apply for this position";
const POSTING_CLOSED: &str = "This position is no longer accepting applications";
const RESUME_PROCESSED: &str = "Resume uploaded and processed successfully!";

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

fn next_job_id() -> JobId {
    let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobId(format!("job-{id:06}"))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Page operations over the repository, session, and toast queue.
pub struct RecruitmentService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    session: SessionStore,
    config: PlatformConfig,
    extractor: Arc<dyn SkillExtractor>,
    uploads: UploadRegistry,
}

impl<R, N> RecruitmentService<R, N>
where
    R: RecruitmentRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(
        repository: Arc<R>,
        notifier: Arc<N>,
        session: SessionStore,
        config: PlatformConfig,
    ) -> Self {
        Self::with_extractor(
            repository,
            notifier,
            session,
            config,
            Arc::new(FixedSkillExtractor::default()),
        )
    }

    pub fn with_extractor(
        repository: Arc<R>,
        notifier: Arc<N>,
        session: SessionStore,
        config: PlatformConfig,
        extractor: Arc<dyn SkillExtractor>,
    ) -> Self {
        Self {
            repository,
            notifier,
            session,
            config,
            extractor,
            uploads: UploadRegistry::default(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn notifier(&self) -> &Arc<N> {
        &self.notifier
    }

    /// Candidate the candidate-facing pages render for.
    pub fn demo_candidate(&self) -> CandidateId {
        CandidateId(self.config.demo_candidate_id.clone())
    }

    /// Company of the signed-in company-side user, or the configured demo company.
    pub fn current_company(&self) -> String {
        self.session
            .current()
            .filter(|user| user.role.is_company_side())
            .map(|user| user.name)
            .unwrap_or_else(|| self.config.demo_company.clone())
    }

    pub fn landing(&self) -> LandingView {
        LandingView {
            headline: "Find Your Perfect Hire. Or Your Perfect Role.",
            stats: vec![
                LandingStat::new("10K+", "Jobs Posted"),
                LandingStat::new("50K+", "Candidates"),
                LandingStat::new("95%", "Success Rate"),
                LandingStat::new("24/7", "Support"),
            ],
            features: vec![
                Feature::new(
                    "AI-Powered Matching",
                    "Advanced algorithms match candidates with perfect job opportunities based on skills, experience, and culture fit.",
                ),
                Feature::new(
                    "Instant Screening",
                    "Automated resume screening and candidate evaluation saves time and improves hiring efficiency.",
                ),
                Feature::new(
                    "Team Collaboration",
                    "Enable your HR team to collaborate seamlessly on candidate evaluation and hiring decisions.",
                ),
            ],
            roles: [LoginRole::Candidate, LoginRole::Company]
                .into_iter()
                .map(|role| RoleTarget {
                    role,
                    dashboard: AppRoute::dashboard_for(role.into()).path(),
                })
                .collect(),
            user: self.session.current(),
        }
    }

    /// Authenticated users go straight to a dashboard; everyone else is asked to log in.
    pub fn select_role(&self, role: LoginRole) -> RoleSelection {
        if self.session.is_authenticated() {
            RoleSelection::Navigate {
                path: AppRoute::dashboard_for(role.into()).path(),
            }
        } else {
            RoleSelection::LoginRequired { role }
        }
    }

    pub fn login(&self, email: &str, password: &str, role: LoginRole) -> Result<User, ServiceError> {
        Ok(self.session.login(email, password, role)?)
    }

    pub fn logout(&self) {
        self.session.logout();
    }

    pub fn candidate_dashboard(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<CandidateDashboard, ServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let applications = self.repository.applications_for_candidate(candidate_id)?;
        let pipeline = StatusPipeline::candidate();

        let mut applied = Vec::with_capacity(applications.len());
        for application in &applications {
            let job = self.job(&application.job_id)?;
            let status = application.status.candidate_status();
            let tier = application.match_score.tier();
            applied.push(AppliedJob {
                application_id: application.id.clone(),
                job_id: job.id.clone(),
                title: job.title,
                company: job.company,
                location: job.location,
                salary: job.salary,
                applied_on: application.applied_on,
                status,
                status_class: status.style_class(),
                match_score: application.match_score,
                tier,
                tier_class: tier.style_class(),
                timeline: pipeline.timeline(status.label()).ok(),
            });
        }

        let mut recommended = Vec::new();
        for job in self.repository.list_jobs()? {
            if job.status != PostingStatus::Active
                || applications.iter().any(|application| application.job_id == job.id)
            {
                continue;
            }
            let analysis = self.analyse(&candidate, &job)?;
            if analysis.match_score.value() >= RECOMMENDATION_FLOOR {
                recommended.push(analysis);
            }
        }
        recommended.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        let stats = CandidateStats::tally(&applications);
        Ok(CandidateDashboard {
            candidate,
            applied,
            recommended,
            stats,
        })
    }

    pub fn job_detail(
        &self,
        job_id: &JobId,
        candidate_id: &CandidateId,
    ) -> Result<JobDetailView, ServiceError> {
        let job = self.job(job_id)?;
        let candidate = self.candidate(candidate_id)?;
        let analysis = self.analyse(&candidate, &job)?;
        let application_status = self
            .repository
            .applications_for_candidate(candidate_id)?
            .into_iter()
            .find(|application| &application.job_id == job_id)
            .map(|application| application.status.candidate_status());

        Ok(JobDetailView {
            job,
            analysis,
            application_status,
        })
    }

    /// Submit an application; refused for closed postings and below the apply threshold.
    pub fn apply(
        &self,
        job_id: &JobId,
        candidate_id: &CandidateId,
    ) -> Result<Application, ServiceError> {
        let job = self.job(job_id)?;
        if job.status == PostingStatus::Closed {
            warn!(job_id = %job_id.0, candidate_id = %candidate_id.0, "application to closed posting refused");
            self.notifier.notify(POSTING_CLOSED, Severity::Error);
            return Err(ApplyError::PostingClosed {
                job_id: job_id.0.clone(),
            }
            .into());
        }
        let candidate = self.candidate(candidate_id)?;
        let analysis = self.analyse(&candidate, &job)?;

        if let Err(err) = ensure_can_apply(analysis.match_score) {
            warn!(job_id = %job_id.0, candidate_id = %candidate_id.0, score = analysis.match_score.value(), "application refused");
            self.notifier.notify(SCORE_TOO_LOW, Severity::Error);
            return Err(err.into());
        }

        let applied_on = today();
        let application = Application {
            id: next_application_id(),
            candidate_id: candidate_id.clone(),
            job_id: job_id.clone(),
            match_score: analysis.match_score,
            status: ApplicationStatus::ResumeSubmitted,
            applied_on,
            history: vec![StatusHistoryEntry {
                status: ApplicationStatus::ResumeSubmitted,
                date: applied_on,
                note: "Application received".to_string(),
            }],
        };
        let stored = self.repository.insert_application(application)?;

        info!(application_id = %stored.id.0, job_id = %job_id.0, "application submitted");
        self.notifier
            .notify("Application submitted successfully!", Severity::Success);
        Ok(stored)
    }

    /// Validate the upload and start background processing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn upload_resume(
        &self,
        candidate_id: &CandidateId,
        upload: ResumeUpload,
    ) -> Result<UploadTaskId, ServiceError> {
        if let Err(err) = validate_upload(&upload) {
            self.notifier.notify(&err.to_string(), Severity::Error);
            return Err(err.into());
        }
        self.candidate(candidate_id)?;

        let repository = Arc::clone(&self.repository);
        let notifier = Arc::clone(&self.notifier);
        let extractor = Arc::clone(&self.extractor);
        let candidate_id = candidate_id.clone();
        let file_name = upload.file_name.clone();

        let task = ProcessingTask::spawn(self.config.resume_processing, move || {
            let outcome = analyse_resume(repository.as_ref(), extractor.as_ref(), &candidate_id, &upload);
            match &outcome {
                Ok(analysis) => {
                    info!(candidate_id = %candidate_id.0, skills = analysis.extracted_skills.len(), "resume processed");
                    notifier.notify(RESUME_PROCESSED, Severity::Success);
                }
                Err(reason) => {
                    warn!(candidate_id = %candidate_id.0, %reason, "resume processing failed");
                    notifier.notify("Failed to process resume", Severity::Error);
                }
            }
            outcome
        });

        let id = self.uploads.insert(task);
        info!(task_id = id.0, file = %file_name, "resume upload accepted");
        Ok(id)
    }

    pub fn upload_status(&self, id: UploadTaskId) -> Result<TaskState<ResumeAnalysis>, ServiceError> {
        self.uploads
            .state(id)
            .ok_or_else(|| ServiceError::not_found("upload", id.0.to_string()))
    }

    pub fn cancel_upload(&self, id: UploadTaskId) -> Result<bool, ServiceError> {
        self.uploads
            .cancel(id)
            .ok_or_else(|| ServiceError::not_found("upload", id.0.to_string()))
    }

    /// Upload tasks still held for polling.
    pub fn tracked_uploads(&self) -> usize {
        self.uploads.len()
    }

    pub async fn wait_for_upload(
        &self,
        id: UploadTaskId,
    ) -> Result<TaskState<ResumeAnalysis>, ServiceError> {
        let mut observer = self
            .uploads
            .observe(id)
            .ok_or_else(|| ServiceError::not_found("upload", id.0.to_string()))?;
        Ok(observer.wait().await)
    }

    pub fn company_dashboard(&self, company: &str) -> Result<CompanyDashboard, ServiceError> {
        let jobs: Vec<JobPosting> = self
            .repository
            .list_jobs()?
            .into_iter()
            .filter(|job| job.company == company)
            .collect();
        let applications: Vec<Application> = self
            .repository
            .list_applications()?
            .into_iter()
            .filter(|application| jobs.iter().any(|job| job.id == application.job_id))
            .collect();

        let job_posts = jobs
            .iter()
            .map(|job| JobPostSummary {
                job_id: job.id.clone(),
                title: job.title.clone(),
                department: job.department.clone(),
                location: job.location.clone(),
                posted_on: job.posted_on,
                status: job.status,
                views: job.views,
                applications: applications
                    .iter()
                    .filter(|application| application.job_id == job.id)
                    .count(),
            })
            .collect();

        let mut top_candidates = Vec::with_capacity(applications.len());
        for application in &applications {
            let candidate = self.candidate(&application.candidate_id)?;
            let job_title = jobs
                .iter()
                .find(|job| job.id == application.job_id)
                .map(|job| job.title.clone())
                .unwrap_or_default();
            let tier = application.match_score.tier();
            top_candidates.push(TopCandidate {
                application_id: application.id.clone(),
                candidate_id: candidate.id,
                name: candidate.name,
                email: candidate.email,
                job_title,
                match_score: application.match_score,
                tier,
                tier_class: tier.style_class(),
                status: application.status,
            });
        }
        top_candidates.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        let stats = CompanyStats {
            total_jobs: jobs.len(),
            active_jobs: jobs
                .iter()
                .filter(|job| job.status == PostingStatus::Active)
                .count(),
            total_candidates: applications.len(),
            new_applications: applications
                .iter()
                .filter(|application| application.status == ApplicationStatus::ResumeSubmitted)
                .count(),
        };

        Ok(CompanyDashboard {
            company: company.to_string(),
            stats,
            job_posts,
            top_candidates,
        })
    }

    /// Publish a job post under [`Self::current_company`].
    pub fn post_job(&self, draft: JobDraft) -> Result<JobPosting, ServiceError> {
        let post = match draft.validate() {
            Ok(post) => post.into_inner(),
            Err(err) => {
                self.notifier.notify(&err.to_string(), Severity::Error);
                return Err(err.into());
            }
        };

        let company = self.current_company();
        let job = JobPosting {
            id: next_job_id(),
            title: post.title,
            company,
            department: post.department,
            location: post.location,
            job_type: post.job_type,
            experience: post.experience,
            salary: post.salary,
            required_skills: post.skills,
            description: post.description,
            responsibilities: post.responsibilities,
            requirements: post.requirements,
            benefits: post.benefits,
            posted_on: today(),
            status: PostingStatus::Active,
            views: 0,
        };
        let stored = self.repository.insert_job(job)?;

        info!(job_id = %stored.id.0, title = %stored.title, "job posted");
        self.notifier
            .notify("Job posted successfully!", Severity::Success);
        Ok(stored)
    }

    pub fn skill_suggestions(&self, input: &str, selected: &[String]) -> Vec<&'static str> {
        job_post::skill_suggestions(input, selected)
    }

    pub fn candidate_list(&self, job_id: &JobId) -> Result<CandidateListView, ServiceError> {
        let job = self.job(job_id)?;
        let applications = self.repository.applications_for_job(job_id)?;

        let mut candidates = Vec::with_capacity(applications.len());
        for application in &applications {
            let profile = self.candidate(&application.candidate_id)?;
            candidates.push(CandidateRow::new(application, profile));
        }

        let count = |status: ApplicationStatus| {
            applications
                .iter()
                .filter(|application| application.status == status)
                .count()
        };
        let stats = CandidateListStats {
            total: applications.len(),
            new: count(ApplicationStatus::ResumeSubmitted),
            interviews: count(ApplicationStatus::InterviewScheduled),
            hired: count(ApplicationStatus::Hired),
        };

        Ok(CandidateListView {
            job_id: job.id,
            job_title: job.title,
            candidates,
            stats,
            statuses: ApplicationStatus::ALL.to_vec(),
        })
    }

    /// Any status may follow any other; every change is logged.
    pub fn update_status(
        &self,
        application_id: &ApplicationId,
        status: ApplicationStatus,
        note: Option<String>,
    ) -> Result<Application, ServiceError> {
        let mut application = self.application(application_id)?;
        let previous = application.status;
        let note = note
            .filter(|note| !note.trim().is_empty())
            .unwrap_or_else(|| format!("Status changed to {status}"));
        application.transition(status, today(), note);
        self.repository.update_application(application.clone())?;

        info!(application_id = %application_id.0, from = %previous, to = %status, "application status changed");
        self.notifier.notify(
            &format!("Candidate status updated to {status}"),
            Severity::Success,
        );
        Ok(application)
    }

    pub fn contact(&self, application_id: &ApplicationId) -> Result<CandidateProfile, ServiceError> {
        let application = self.application(application_id)?;
        let candidate = self.candidate(&application.candidate_id)?;
        self.notifier.notify(
            &format!("Contacting {} at {}", candidate.name, candidate.email),
            Severity::Info,
        );
        Ok(candidate)
    }

    pub fn schedule_interview(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Application, ServiceError> {
        let application = self.application(application_id)?;
        let candidate = self.candidate(&application.candidate_id)?;
        self.notifier.notify(
            &format!("Interview scheduled with {}", candidate.name),
            Severity::Success,
        );
        self.update_status(
            application_id,
            ApplicationStatus::InterviewScheduled,
            Some("Interview scheduled".to_string()),
        )
    }

    /// Candidate list for a job as CSV, one row per application.
    pub fn export_candidates_csv(&self, job_id: &JobId) -> Result<String, ServiceError> {
        let view = self.candidate_list(job_id)?;
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "name",
                "email",
                "phone",
                "experience",
                "location",
                "match_score",
                "status",
                "applied_on",
                "skills",
            ])
            .map_err(ServiceError::export)?;
        for row in &view.candidates {
            let score = row.match_score.value().to_string();
            let applied_on = row.applied_on.to_string();
            let skills = row.skills.join("; ");
            writer
                .write_record([
                    row.name.as_str(),
                    row.email.as_str(),
                    row.phone.as_str(),
                    row.experience.as_str(),
                    row.location.as_str(),
                    score.as_str(),
                    row.status.label(),
                    applied_on.as_str(),
                    skills.as_str(),
                ])
                .map_err(ServiceError::export)?;
        }
        let bytes = writer.into_inner().map_err(ServiceError::export)?;
        String::from_utf8(bytes).map_err(ServiceError::export)
    }

    pub fn team(&self) -> Result<TeamView, ServiceError> {
        let members = self.repository.list_team()?;
        let stats = TeamStats::tally(&members);
        Ok(TeamView { members, stats })
    }

    pub fn invite(&self, email: &str, kind: InviteKind) -> Result<HrMember, ServiceError> {
        let member = match team::invitation(email, kind, today()) {
            Ok(member) => member,
            Err(err) => {
                self.notifier.notify(&err.to_string(), Severity::Error);
                return Err(err.into());
            }
        };
        let stored = self.repository.insert_member(member)?;

        info!(member_id = %stored.id.0, role = stored.role.label(), "hr invitation sent");
        self.notifier.notify(
            &format!("Invitation sent to {}", stored.email),
            Severity::Success,
        );
        Ok(stored)
    }

    pub fn remove_member(&self, member_id: &MemberId) -> Result<HrMember, ServiceError> {
        let removed = self.repository.remove_member(member_id).map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::not_found("team member", &member_id.0),
            other => other.into(),
        })?;

        info!(member_id = %member_id.0, "hr member removed");
        self.notifier.notify(
            &format!("{} removed from HR team", removed.name),
            Severity::Success,
        );
        Ok(removed)
    }

    /// Applications matching `filter`, each with its position in the company pipeline.
    pub fn status_tracker(&self, filter: &TrackerFilter) -> Result<StatusTrackerView, ServiceError> {
        let status = match filter.status.trim() {
            "" | "all" => None,
            raw => Some(
                ApplicationStatus::parse(raw)
                    .ok_or_else(|| PipelineError::UnknownStage(raw.to_string()))?,
            ),
        };
        let job = match filter.job.trim() {
            "" | "all" => None,
            raw => Some(JobId(raw.to_string())),
        };
        let needle = filter.search.trim().to_lowercase();

        let jobs = self.repository.list_jobs()?;
        let pipeline = StatusPipeline::company();
        let mut rows = Vec::new();

        for application in self.repository.list_applications()? {
            if job.as_ref().is_some_and(|job| job != &application.job_id)
                || status.is_some_and(|status| status != application.status)
            {
                continue;
            }
            let candidate = self.candidate(&application.candidate_id)?;
            if !needle.is_empty()
                && !candidate.name.to_lowercase().contains(&needle)
                && !candidate.email.to_lowercase().contains(&needle)
            {
                continue;
            }

            let job_title = jobs
                .iter()
                .find(|job| job.id == application.job_id)
                .map(|job| job.title.clone())
                .unwrap_or_default();
            let timeline = match pipeline.timeline(application.status.label()) {
                Ok(steps) => Some(steps),
                Err(PipelineError::UnknownStage(_)) => None,
                Err(other) => return Err(other.into()),
            };

            rows.push(TrackerRow {
                application_id: application.id,
                candidate_id: candidate.id,
                name: candidate.name,
                email: candidate.email,
                job_id: application.job_id,
                job_title,
                status: application.status,
                status_class: application.status.style_class(),
                match_score: application.match_score,
                history: application.history,
                timeline,
            });
        }

        let company = self.current_company();
        let job_options = jobs
            .into_iter()
            .filter(|job| rows.iter().any(|row| row.job_id == job.id) || job.company == company)
            .map(|job| JobOption {
                id: job.id,
                title: job.title,
            })
            .collect();

        Ok(StatusTrackerView {
            stages: pipeline.stages().to_vec(),
            jobs: job_options,
            rows,
        })
    }

    fn analyse(
        &self,
        candidate: &CandidateProfile,
        job: &JobPosting,
    ) -> Result<JobMatch, ServiceError> {
        let declared = self.repository.declared_score(&candidate.id, &job.id)?;
        Ok(JobMatch::build(job, &candidate.skills, declared))
    }

    fn job(&self, id: &JobId) -> Result<JobPosting, ServiceError> {
        self.repository
            .get_job(id)?
            .ok_or_else(|| ServiceError::not_found("job", &id.0))
    }

    fn candidate(&self, id: &CandidateId) -> Result<CandidateProfile, ServiceError> {
        self.repository
            .get_candidate(id)?
            .ok_or_else(|| ServiceError::not_found("candidate", &id.0))
    }

    fn application(&self, id: &ApplicationId) -> Result<Application, ServiceError> {
        self.repository
            .get_application(id)?
            .ok_or_else(|| ServiceError::not_found("application", &id.0))
    }
}

fn analyse_resume<R>(
    repository: &R,
    extractor: &dyn SkillExtractor,
    candidate_id: &CandidateId,
    upload: &ResumeUpload,
) -> Result<ResumeAnalysis, String>
where
    R: RecruitmentRepository + ?Sized,
{
    let skills = extractor.extract(upload)?;
    let mut matches = Vec::new();
    for job_id in repository
        .resume_matches(candidate_id)
        .map_err(|err| err.to_string())?
    {
        let Some(job) = repository.get_job(&job_id).map_err(|err| err.to_string())? else {
            continue;
        };
        let declared = repository
            .declared_score(candidate_id, &job_id)
            .map_err(|err| err.to_string())?;
        matches.push(JobMatch::build(&job, &skills, declared));
    }

    Ok(ResumeAnalysis {
        candidate_id: candidate_id.clone(),
        file_name: upload.file_name.clone(),
        extracted_skills: skills,
        matches,
    })
}

/// Error raised by page operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    NotPermitted(#[from] ApplyError),
    #[error(transparent)]
    Invite(#[from] InviteError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
    #[error("candidate export failed: {0}")]
    Export(String),
}

impl ServiceError {
    fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            kind,
            id: id.into(),
        }
    }

    fn export(err: impl std::fmt::Display) -> Self {
        ServiceError::Export(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingStat {
    pub value: &'static str,
    pub label: &'static str,
}

impl LandingStat {
    fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

impl Feature {
    fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleTarget {
    pub role: LoginRole,
    pub dashboard: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingView {
    pub headline: &'static str,
    pub stats: Vec<LandingStat>,
    pub features: Vec<Feature>,
    pub roles: Vec<RoleTarget>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RoleSelection {
    Navigate { path: String },
    LoginRequired { role: LoginRole },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedJob {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub applied_on: NaiveDate,
    pub status: CandidateStatus,
    pub status_class: &'static str,
    pub match_score: MatchScore,
    pub tier: MatchTier,
    pub tier_class: &'static str,
    /// `None` once the application has left the candidate pipeline (hired or not selected).
    pub timeline: Option<Vec<TimelineStep>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CandidateStats {
    pub applications: usize,
    pub interviews: usize,
    pub average_score: u8,
}

impl CandidateStats {
    fn tally(applications: &[Application]) -> Self {
        let interviews = applications
            .iter()
            .filter(|application| {
                application.status.candidate_status() == CandidateStatus::InterviewScheduled
            })
            .count();
        let total: usize = applications
            .iter()
            .map(|application| usize::from(application.match_score.value()))
            .sum();
        let average_score = total
            .checked_div(applications.len())
            .and_then(|average| u8::try_from(average).ok())
            .unwrap_or(0);
        Self {
            applications: applications.len(),
            interviews,
            average_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateDashboard {
    pub candidate: CandidateProfile,
    pub applied: Vec<AppliedJob>,
    pub recommended: Vec<JobMatch>,
    pub stats: CandidateStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDetailView {
    pub job: JobPosting,
    pub analysis: JobMatch,
    pub application_status: Option<CandidateStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompanyStats {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub total_candidates: usize,
    pub new_applications: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPostSummary {
    pub job_id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    pub posted_on: NaiveDate,
    pub status: PostingStatus,
    pub views: u32,
    pub applications: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCandidate {
    pub application_id: ApplicationId,
    pub candidate_id: CandidateId,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub match_score: MatchScore,
    pub tier: MatchTier,
    pub tier_class: &'static str,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyDashboard {
    pub company: String,
    pub stats: CompanyStats,
    pub job_posts: Vec<JobPostSummary>,
    pub top_candidates: Vec<TopCandidate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRow {
    pub application_id: ApplicationId,
    pub candidate_id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub location: String,
    pub skills: Vec<String>,
    pub match_score: MatchScore,
    pub tier: MatchTier,
    pub tier_class: &'static str,
    pub status: ApplicationStatus,
    pub status_class: &'static str,
    pub applied_on: NaiveDate,
}

impl CandidateRow {
    fn new(application: &Application, profile: CandidateProfile) -> Self {
        let tier = application.match_score.tier();
        Self {
            application_id: application.id.clone(),
            candidate_id: profile.id,
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            experience: profile.experience,
            location: profile.location,
            skills: profile.skills,
            match_score: application.match_score,
            tier,
            tier_class: tier.style_class(),
            status: application.status,
            status_class: application.status.style_class(),
            applied_on: application.applied_on,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CandidateListStats {
    pub total: usize,
    pub new: usize,
    pub interviews: usize,
    pub hired: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateListView {
    pub job_id: JobId,
    pub job_title: String,
    pub candidates: Vec<CandidateRow>,
    pub stats: CandidateListStats,
    pub statuses: Vec<ApplicationStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamView {
    pub members: Vec<HrMember>,
    pub stats: TeamStats,
}

/// Status tracker filters; `"all"` or blank disables a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerFilter {
    pub job: String,
    pub status: String,
    pub search: String,
}

impl Default for TrackerFilter {
    fn default() -> Self {
        Self {
            job: "all".to_string(),
            status: "all".to_string(),
            search: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobOption {
    pub id: JobId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerRow {
    pub application_id: ApplicationId,
    pub candidate_id: CandidateId,
    pub name: String,
    pub email: String,
    pub job_id: JobId,
    pub job_title: String,
    pub status: ApplicationStatus,
    pub status_class: &'static str,
    pub match_score: MatchScore,
    pub history: Vec<StatusHistoryEntry>,
    /// `None` for statuses outside the pipeline, such as Rejected.
    pub timeline: Option<Vec<TimelineStep>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusTrackerView {
    pub stages: Vec<String>,
    pub jobs: Vec<JobOption>,
    pub rows: Vec<TrackerRow>,
}
