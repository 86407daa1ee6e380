//! Page routes and the per-role navigation menu.

use std::fmt;

use serde::Serialize;

use crate::session::Role;

/// Every page the platform serves, with its URL parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    CandidateDashboard,
    ResumeUpload,
    JobDetail { job_id: String },
    CompanyDashboard,
    PostJob,
    CandidateList { job_id: String },
    ManageHr,
    StatusTracker,
}

impl AppRoute {
    /// Path templates in axum syntax, in menu order.
    pub const TEMPLATES: [&'static str; 9] = [
        "/",
        "/candidate/dashboard",
        "/candidate/resume-upload",
        "/candidate/job/:id",
        "/company/dashboard",
        "/company/post-job",
        "/company/candidates/:jobId",
        "/company/manage-hr",
        "/company/status-tracker",
    ];

    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let route = match segments.as_slice() {
            [] => AppRoute::Landing,
            ["candidate", "dashboard"] => AppRoute::CandidateDashboard,
            ["candidate", "resume-upload"] => AppRoute::ResumeUpload,
            ["candidate", "job", id] => AppRoute::JobDetail {
                job_id: (*id).to_string(),
            },
            ["company", "dashboard"] => AppRoute::CompanyDashboard,
            ["company", "post-job"] => AppRoute::PostJob,
            ["company", "candidates", job_id] => AppRoute::CandidateList {
                job_id: (*job_id).to_string(),
            },
            ["company", "manage-hr"] => AppRoute::ManageHr,
            ["company", "status-tracker"] => AppRoute::StatusTracker,
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Landing => "/".to_string(),
            AppRoute::CandidateDashboard => "/candidate/dashboard".to_string(),
            AppRoute::ResumeUpload => "/candidate/resume-upload".to_string(),
            AppRoute::JobDetail { job_id } => format!("/candidate/job/{job_id}"),
            AppRoute::CompanyDashboard => "/company/dashboard".to_string(),
            AppRoute::PostJob => "/company/post-job".to_string(),
            AppRoute::CandidateList { job_id } => format!("/company/candidates/{job_id}"),
            AppRoute::ManageHr => "/company/manage-hr".to_string(),
            AppRoute::StatusTracker => "/company/status-tracker".to_string(),
        }
    }

    /// Which side of the platform a page belongs to; `None` for public pages.
    pub fn audience(&self) -> Option<Role> {
        match self {
            AppRoute::Landing => None,
            AppRoute::CandidateDashboard | AppRoute::ResumeUpload | AppRoute::JobDetail { .. } => {
                Some(Role::Candidate)
            }
            _ => Some(Role::Company),
        }
    }

    pub fn dashboard_for(role: Role) -> Self {
        if role.is_company_side() {
            AppRoute::CompanyDashboard
        } else {
            AppRoute::CandidateDashboard
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: String,
}

/// Navigation entries for the signed-in role; anonymous visitors get none.
pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    let entries: Vec<(&'static str, AppRoute)> = match role {
        None => Vec::new(),
        Some(Role::Candidate) => vec![
            ("Dashboard", AppRoute::CandidateDashboard),
            ("Resume Upload", AppRoute::ResumeUpload),
        ],
        Some(Role::Company | Role::Hr) => vec![
            ("Dashboard", AppRoute::CompanyDashboard),
            ("Post Job", AppRoute::PostJob),
            ("Manage HR", AppRoute::ManageHr),
            ("Status Tracker", AppRoute::StatusTracker),
        ],
    };

    entries
        .into_iter()
        .map(|(label, route)| NavLink {
            label,
            path: route.path(),
        })
        .collect()
}
