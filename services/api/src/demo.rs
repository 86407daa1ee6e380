use crate::infra::{parse_millis, seeded_service};
use clap::Args;
use smarthire::config::PlatformConfig;
use smarthire::error::AppError;
use smarthire::recruitment::{
    ApplicationStatus, JobId, JobMatch, ResumeUpload, ServiceError, StatusTrackerView, TaskState,
    TrackerFilter,
};
use smarthire::routing::{nav_links, AppRoute};
use smarthire::session::{LoginRole, Role};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Resume file to upload; its content type is guessed from the extension.
    #[arg(long)]
    pub(crate) resume: Option<PathBuf>,
    /// Simulated resume processing delay in milliseconds.
    #[arg(long, value_parser = parse_millis, default_value_t = 250)]
    pub(crate) processing_ms: u64,
    /// Skip the company-side pipeline walkthrough.
    #[arg(long)]
    pub(crate) skip_pipeline: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TrackerArgs {
    /// Job id to filter by, or "all".
    #[arg(long, default_value = "all")]
    pub(crate) job: String,
    /// Status label to filter by, or "all".
    #[arg(long, default_value = "all")]
    pub(crate) status: String,
    /// Case-insensitive match against candidate name or email.
    #[arg(long, default_value = "")]
    pub(crate) search: String,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        resume,
        processing_ms,
        skip_pipeline,
    } = args;

    let platform = PlatformConfig {
        resume_processing: Duration::from_millis(processing_ms),
        ..PlatformConfig::default()
    };
    let (service, toasts) = seeded_service(platform);

    let landing = service.landing();
    println!("SmartHire demo: {}", landing.headline);

    let user = service.login("john.doe@email.com", "demo", LoginRole::Candidate)?;
    println!("\nSigned in as {} <{}>", user.name, user.email);

    let upload = match resume {
        Some(path) => resume_from_path(&path)?,
        None => ResumeUpload {
            file_name: "john-doe-resume.pdf".to_string(),
            content_type: mime_guess::mime::APPLICATION_PDF.to_string(),
            size_bytes: 245_760,
        },
    };
    println!(
        "Uploading {} ({}, {})",
        upload.file_name,
        upload.content_type,
        upload.size_label()
    );

    let candidate = service.demo_candidate();
    let task = match service.upload_resume(&candidate, upload) {
        Ok(task) => task,
        Err(err) => {
            println!("  Upload rejected: {}", err);
            return Ok(());
        }
    };

    let analysis = match service.wait_for_upload(task).await? {
        TaskState::Succeeded(analysis) => analysis,
        TaskState::Failed(reason) => {
            println!("  Resume processing failed: {}", reason);
            return Ok(());
        }
        TaskState::Cancelled | TaskState::Pending => {
            println!("  Resume processing did not finish");
            return Ok(());
        }
    };
    println!("  Extracted skills: {}", analysis.extracted_skills.join(", "));
    println!("  Job matches:");
    for job in &analysis.matches {
        println!(
            "    - {} @ {}: {} ({}) {}",
            job.title,
            job.company,
            job.match_score,
            job.tier.label(),
            if job.can_apply { "open" } else { "apply disabled" }
        );
    }

    if let Some(weak) = analysis.matches.iter().find(|job| !job.can_apply) {
        match service.apply(&weak.job_id, &candidate) {
            Ok(application) => println!("\nUnexpectedly applied: {}", application.id.0),
            Err(err) => println!("\nApplying to {} refused: {}", weak.title, err),
        }
    }

    let already_applied: Vec<JobId> = service
        .candidate_dashboard(&candidate)?
        .applied
        .into_iter()
        .map(|job| job.job_id)
        .collect();
    let application = match best_open_match(&analysis.matches, &already_applied) {
        Some(best) => match service.apply(&best.job_id, &candidate) {
            Ok(application) => {
                println!(
                    "Applied to {} as {} (score {})",
                    best.title, application.id.0, application.match_score
                );
                Some(application)
            }
            Err(ServiceError::Repository(err)) => {
                println!("Application to {} not stored: {}", best.title, err);
                None
            }
            Err(err) => return Err(err.into()),
        },
        None => None,
    };

    let dashboard = service.candidate_dashboard(&candidate)?;
    println!(
        "Candidate dashboard: {} applications | {} interviews | {}% average match",
        dashboard.stats.applications, dashboard.stats.interviews, dashboard.stats.average_score
    );

    if let (false, Some(application)) = (skip_pipeline, application) {
        service.logout();
        let company = service.login("talent@techcorp.com", "demo", LoginRole::Company)?;
        println!("\nSigned in as {} ({})", company.name, company.role.label());

        service.contact(&application.id)?;
        service.update_status(&application.id, ApplicationStatus::Contacted, None)?;
        service.schedule_interview(&application.id)?;

        let tracker = service.status_tracker(&TrackerFilter {
            job: application.job_id.0.clone(),
            ..TrackerFilter::default()
        })?;
        render_tracker(&tracker);
    }

    println!("\nNotifications raised during the demo:");
    for toast in toasts.snapshot() {
        println!("  [{:?}] {}", toast.severity, toast.message);
    }

    Ok(())
}

pub(crate) fn run_tracker(args: TrackerArgs) -> Result<(), AppError> {
    let TrackerArgs { job, status, search } = args;
    let (service, _) = seeded_service(PlatformConfig::default());
    let tracker = service.status_tracker(&TrackerFilter {
        job,
        status,
        search,
    })?;
    render_tracker(&tracker);
    Ok(())
}

pub(crate) fn print_routes() {
    println!("Pages:");
    for template in AppRoute::TEMPLATES {
        let audience = AppRoute::parse(template)
            .and_then(|route| route.audience())
            .map(Role::label)
            .unwrap_or("public");
        println!("  {:<28} {}", template, audience);
    }

    for role in [Role::Candidate, Role::Company] {
        let links: Vec<String> = nav_links(Some(role))
            .into_iter()
            .map(|link| format!("{} ({})", link.label, link.path))
            .collect();
        println!("Navigation for {}: {}", role.label(), links.join(", "));
    }
}

fn best_open_match<'a>(matches: &'a [JobMatch], applied: &[JobId]) -> Option<&'a JobMatch> {
    matches
        .iter()
        .filter(|job| job.can_apply && !applied.contains(&job.job_id))
        .max_by_key(|job| job.match_score)
}

fn render_tracker(tracker: &StatusTrackerView) {
    println!("\nStatus tracker ({} rows)", tracker.rows.len());
    for row in &tracker.rows {
        println!(
            "- {} <{}> for {}: {} [{}]",
            row.name, row.email, row.job_title, row.status, row.match_score
        );
        match &row.timeline {
            Some(timeline) => {
                let steps: Vec<String> = timeline
                    .iter()
                    .map(|step| {
                        let marker = if step.is_current {
                            ">"
                        } else if step.completed {
                            "x"
                        } else {
                            " "
                        };
                        format!("[{}] {}", marker, step.stage)
                    })
                    .collect();
                println!("    {}", steps.join(" "));
            }
            None => println!("    (off pipeline)"),
        }
        if let Some(latest) = row.history.last() {
            println!("    last update {}: {}", latest.date, latest.note);
        }
    }
}

fn resume_from_path(path: &Path) -> Result<ResumeUpload, AppError> {
    let metadata = std::fs::metadata(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(ResumeUpload {
        file_name,
        content_type,
        size_bytes: metadata.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthire::recruitment::MatchScore;

    fn job_match(id: &str, score: u8, can_apply: bool) -> JobMatch {
        JobMatch {
            job_id: JobId(id.to_string()),
            title: format!("Role {id}"),
            company: "TechCorp Inc.".to_string(),
            location: "Remote".to_string(),
            salary: "$100k".to_string(),
            match_score: MatchScore::clamped(score),
            tier: MatchScore::clamped(score).tier(),
            tier_class: "",
            required_skills: Vec::new(),
            matching_skills: Vec::new(),
            missing_skills: Vec::new(),
            can_apply,
        }
    }

    #[test]
    fn best_open_match_skips_disabled_and_applied_jobs() {
        let matches = vec![
            job_match("job-1", 92, false),
            job_match("job-2", 78, true),
            job_match("job-3", 85, true),
        ];
        assert_eq!(
            best_open_match(&matches, &[]).map(|job| job.job_id.0.as_str()),
            Some("job-3")
        );
        let applied = [JobId("job-3".to_string())];
        assert_eq!(
            best_open_match(&matches, &applied).map(|job| job.job_id.0.as_str()),
            Some("job-2")
        );
        assert!(best_open_match(&matches[..1], &[]).is_none());
    }

    #[test]
    fn resume_type_is_guessed_from_the_extension() {
        let dir = std::env::temp_dir().join(format!("smarthire-demo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let pdf = dir.join("cv.pdf");
        let doc = dir.join("cv.docx");
        std::fs::write(&pdf, b"%PDF-1.7").unwrap();
        std::fs::write(&doc, b"PK").unwrap();

        let upload = resume_from_path(&pdf).unwrap();
        assert_eq!(upload.file_name, "cv.pdf");
        assert_eq!(upload.content_type, "application/pdf");
        assert_eq!(upload.size_bytes, 8);

        let upload = resume_from_path(&doc).unwrap();
        assert_ne!(upload.content_type, "application/pdf");

        assert!(resume_from_path(&dir.join("missing.pdf")).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn demo_runs_against_seeded_data() {
        let args = DemoArgs {
            processing_ms: 1,
            ..DemoArgs::default()
        };
        run_demo(args).await.expect("demo completes");
    }

    #[test]
    fn tracker_rejects_unknown_status() {
        let err = run_tracker(TrackerArgs {
            job: "all".to_string(),
            status: "Ghosted".to_string(),
            search: String::new(),
        })
        .expect_err("unknown stage");
        assert_eq!(err.status_code(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}
