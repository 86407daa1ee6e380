use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::matching::MatchScore;
use super::pipeline::{ApplicationStatus, StatusHistoryEntry};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostingStatus {
    Active,
    Closed,
}

impl PostingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PostingStatus::Active => "Active",
            PostingStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Internship")]
    Internship,
}

/// A published job advert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub department: String,
    pub location: String,
    pub job_type: JobType,
    pub experience: String,
    /// Display range such as "$120K - $150K".
    pub salary: String,
    pub required_skills: Vec<String>,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub posted_on: NaiveDate,
    pub status: PostingStatus,
    pub views: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub headline: String,
    pub experience: String,
    pub location: String,
    pub skills: Vec<String>,
}

/// A candidate's application to one job, with its status log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub candidate_id: CandidateId,
    pub job_id: JobId,
    pub match_score: MatchScore,
    pub status: ApplicationStatus,
    pub applied_on: NaiveDate,
    pub history: Vec<StatusHistoryEntry>,
}

impl Application {
    /// Set any status and log it. Repeating the current status still logs.
    pub fn transition(&mut self, status: ApplicationStatus, date: NaiveDate, note: impl Into<String>) {
        self.status = status;
        self.history.push(StatusHistoryEntry {
            status,
            date,
            note: note.into(),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HrRole {
    #[serde(rename = "Head HR")]
    HeadHr,
    #[serde(rename = "HR Manager")]
    HrManager,
    #[serde(rename = "HR Coordinator")]
    HrCoordinator,
    #[serde(rename = "HR Assistant")]
    HrAssistant,
}

impl HrRole {
    pub const fn label(self) -> &'static str {
        match self {
            HrRole::HeadHr => "Head HR",
            HrRole::HrManager => "HR Manager",
            HrRole::HrCoordinator => "HR Coordinator",
            HrRole::HrAssistant => "HR Assistant",
        }
    }

    pub const fn is_head(self) -> bool {
        matches!(self, HrRole::HeadHr)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    Active,
    Pending,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "View Candidates")]
    ViewCandidates,
    #[serde(rename = "Contact Candidates")]
    ContactCandidates,
    #[serde(rename = "Manage Jobs")]
    ManageJobs,
    #[serde(rename = "Manage Team")]
    ManageTeam,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrMember {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: HrRole,
    pub joined_on: NaiveDate,
    pub status: MembershipStatus,
    pub permissions: Vec<Permission>,
}
