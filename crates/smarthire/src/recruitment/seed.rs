//! Demo dataset: the jobs, candidates, applications, and HR team the pages start with.

use chrono::NaiveDate;

use super::domain::{
    Application, ApplicationId, CandidateId, CandidateProfile, HrMember, HrRole, JobId,
    JobPosting, JobType, MemberId, MembershipStatus, Permission, PostingStatus,
};
use super::matching::MatchScore;
use super::pipeline::{ApplicationStatus, StatusHistoryEntry};

pub(crate) struct SeedData {
    pub jobs: Vec<JobPosting>,
    pub candidates: Vec<CandidateProfile>,
    pub applications: Vec<Application>,
    pub scores: Vec<(CandidateId, JobId, MatchScore)>,
    pub resume_matches: Vec<(CandidateId, Vec<JobId>)>,
    pub team: Vec<HrMember>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn score(value: u8) -> MatchScore {
    MatchScore::clamped(value)
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    company: &str,
    department: &str,
    location: &str,
    salary: &str,
    skills: &[&str],
    posted_on: NaiveDate,
    status: PostingStatus,
    views: u32,
) -> JobPosting {
    JobPosting {
        id: JobId(id.to_string()),
        title: title.to_string(),
        company: company.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        job_type: JobType::FullTime,
        experience: "3+ years".to_string(),
        salary: salary.to_string(),
        required_skills: strings(skills),
        description: format!(
            "{company} is hiring a {title} to join the {department} team in {location}."
        ),
        responsibilities: Vec::new(),
        requirements: Vec::new(),
        benefits: Vec::new(),
        posted_on,
        status,
        views,
    }
}

fn senior_frontend_developer() -> JobPosting {
    let mut job = listing(
        "job-1",
        "Senior Frontend Developer",
        "TechCorp Inc.",
        "Engineering",
        "San Francisco, CA",
        "$120K - $150K",
        &["React", "TypeScript", "JavaScript", "CSS", "HTML", "Git"],
        date(2025, 1, 10),
        PostingStatus::Active,
        234,
    );
    job.experience = "5+ years".to_string();
    job.description = "We are looking for a Senior Frontend Developer to join our dynamic team. \
        You will be responsible for developing user-facing web applications and ensuring great \
        user experience. In this role, you will work closely with our design and backend teams \
        to implement responsive, accessible, and performant web applications using modern \
        JavaScript frameworks."
        .to_string();
    job.responsibilities = strings(&[
        "Develop new user-facing features using React.js",
        "Build reusable components and front-end libraries",
        "Translate designs and wireframes into high-quality code",
        "Optimize components for maximum performance across devices",
        "Collaborate with team members and stakeholders",
        "Participate in code reviews and maintain code quality",
    ]);
    job.requirements = strings(&[
        "5+ years of experience in frontend development",
        "Strong proficiency in JavaScript, including DOM manipulation",
        "Thorough understanding of React.js and its core principles",
        "Experience with popular React.js workflows (Redux, Flux)",
        "Familiarity with RESTful APIs and modern authorization mechanisms",
        "Experience with code versioning tools such as Git",
    ]);
    job.benefits = strings(&[
        "Competitive salary and equity package",
        "Health, dental, and vision insurance",
        "Flexible work arrangements",
        "Professional development budget",
        "401(k) with company matching",
        "Unlimited PTO policy",
    ]);
    job
}

fn jobs() -> Vec<JobPosting> {
    vec![
        senior_frontend_developer(),
        listing(
            "job-2",
            "Backend Engineer",
            "TechCorp Inc.",
            "Engineering",
            "Remote",
            "$110K - $140K",
            &["Node.js", "SQL", "Docker", "AWS"],
            date(2025, 1, 8),
            PostingStatus::Active,
            189,
        ),
        listing(
            "job-3",
            "Product Manager",
            "TechCorp Inc.",
            "Product",
            "New York, NY",
            "$130K - $160K",
            &["Agile", "SQL"],
            date(2025, 1, 5),
            PostingStatus::Closed,
            156,
        ),
        listing(
            "job-4",
            "Full Stack Developer",
            "StartupXYZ",
            "Engineering",
            "Remote",
            "$90K - $110K",
            &["React", "Node.js", "MongoDB", "Express"],
            date(2025, 1, 6),
            PostingStatus::Active,
            98,
        ),
        listing(
            "job-5",
            "React Developer",
            "WebSolutions",
            "Engineering",
            "New York, NY",
            "$80K - $100K",
            &["React", "Redux", "Jest", "Webpack"],
            date(2025, 1, 4),
            PostingStatus::Active,
            76,
        ),
        listing(
            "job-6",
            "Full Stack Engineer",
            "InnovateLab",
            "Engineering",
            "New York, NY",
            "$100K - $130K",
            &["React", "Node.js", "Python", "SQL"],
            date(2025, 1, 3),
            PostingStatus::Active,
            121,
        ),
        listing(
            "job-7",
            "Senior Software Engineer",
            "MegaCorp",
            "Platform",
            "Seattle, WA",
            "$140K - $170K",
            &["React", "TypeScript", "AWS"],
            date(2025, 1, 9),
            PostingStatus::Active,
            310,
        ),
        listing(
            "job-8",
            "Frontend Architect",
            "DesignTech",
            "Design Systems",
            "Austin, TX",
            "$130K - $160K",
            &["React", "Vue.js", "GraphQL"],
            date(2025, 1, 7),
            PostingStatus::Active,
            204,
        ),
    ]
}

fn candidate(
    id: &str,
    name: &str,
    phone: &str,
    headline: &str,
    experience: &str,
    location: &str,
    skills: &[&str],
) -> CandidateProfile {
    let email = format!("{}@email.com", name.to_ascii_lowercase().replace(' ', "."));
    CandidateProfile {
        id: CandidateId(id.to_string()),
        name: name.to_string(),
        email,
        phone: phone.to_string(),
        headline: headline.to_string(),
        experience: experience.to_string(),
        location: location.to_string(),
        skills: strings(skills),
    }
}

fn candidates() -> Vec<CandidateProfile> {
    vec![
        candidate(
            "cand-1",
            "John Doe",
            "+1 (555) 123-4567",
            "Frontend Developer",
            "5 years",
            "San Francisco, CA",
            &["React", "TypeScript", "JavaScript", "Node.js", "HTML", "Git"],
        ),
        candidate(
            "cand-2",
            "Sarah Smith",
            "+1 (555) 234-5678",
            "Backend Engineer",
            "7 years",
            "New York, NY",
            &["React", "Node.js", "MongoDB", "AWS"],
        ),
        candidate(
            "cand-3",
            "Mike Johnson",
            "+1 (555) 345-6789",
            "Full Stack Developer",
            "4 years",
            "Austin, TX",
            &["React", "Vue.js", "Python", "Docker"],
        ),
        candidate(
            "cand-4",
            "Emily Davis",
            "+1 (555) 456-7890",
            "Web Developer",
            "3 years",
            "Seattle, WA",
            &["JavaScript", "HTML", "CSS"],
        ),
    ]
}

fn history(entries: &[(ApplicationStatus, NaiveDate, &str)]) -> Vec<StatusHistoryEntry> {
    entries
        .iter()
        .map(|(status, date, note)| StatusHistoryEntry {
            status: *status,
            date: *date,
            note: (*note).to_string(),
        })
        .collect()
}

fn application(
    id: &str,
    candidate: &str,
    job: &str,
    match_score: u8,
    entries: &[(ApplicationStatus, NaiveDate, &str)],
) -> Application {
    let log = history(entries);
    let status = log
        .last()
        .map(|entry| entry.status)
        .unwrap_or(ApplicationStatus::ResumeSubmitted);
    let applied_on = log
        .first()
        .map(|entry| entry.date)
        .unwrap_or_default();
    Application {
        id: ApplicationId(id.to_string()),
        candidate_id: CandidateId(candidate.to_string()),
        job_id: JobId(job.to_string()),
        match_score: score(match_score),
        status,
        applied_on,
        history: log,
    }
}

fn applications() -> Vec<Application> {
    use ApplicationStatus::*;

    vec![
        application(
            "app-1",
            "cand-1",
            "job-1",
            87,
            &[
                (ResumeSubmitted, date(2025, 1, 10), "Application received"),
                (Contacted, date(2025, 1, 12), "Initial phone screening"),
                (InterviewScheduled, date(2025, 1, 15), "Technical interview scheduled"),
            ],
        ),
        application(
            "app-2",
            "cand-1",
            "job-4",
            72,
            &[
                (ResumeSubmitted, date(2025, 1, 8), "Application received"),
                (Contacted, date(2025, 1, 9), "Recruiter reviewing portfolio"),
            ],
        ),
        application(
            "app-3",
            "cand-1",
            "job-6",
            65,
            &[(ResumeSubmitted, date(2025, 1, 5), "Application received")],
        ),
        application(
            "app-4",
            "cand-2",
            "job-2",
            92,
            &[
                (ResumeSubmitted, date(2025, 1, 8), "Application received"),
                (Contacted, date(2025, 1, 9), "Phone screening passed"),
                (InterviewScheduled, date(2025, 1, 11), "On-site interview scheduled"),
                (InterviewCompleted, date(2025, 1, 14), "All interviews completed"),
                (Hired, date(2025, 1, 16), "Offer accepted"),
            ],
        ),
        application(
            "app-5",
            "cand-3",
            "job-1",
            78,
            &[
                (ResumeSubmitted, date(2025, 1, 5), "Application received"),
                (Contacted, date(2025, 1, 7), "Initial phone screening scheduled"),
            ],
        ),
        application(
            "app-6",
            "cand-4",
            "job-1",
            65,
            &[
                (ResumeSubmitted, date(2025, 1, 3), "Application received"),
                (Rejected, date(2025, 1, 6), "Not enough React experience"),
            ],
        ),
        application(
            "app-7",
            "cand-2",
            "job-1",
            92,
            &[(ResumeSubmitted, date(2025, 1, 8), "Application received")],
        ),
    ]
}

fn scores() -> Vec<(CandidateId, JobId, MatchScore)> {
    [
        ("cand-1", "job-1", 87),
        ("cand-1", "job-4", 72),
        ("cand-1", "job-5", 45),
        ("cand-1", "job-6", 65),
        ("cand-1", "job-7", 92),
        ("cand-1", "job-8", 84),
        ("cand-2", "job-1", 92),
        ("cand-2", "job-2", 92),
        ("cand-3", "job-1", 78),
        ("cand-4", "job-1", 65),
    ]
    .into_iter()
    .map(|(candidate, job, value)| {
        (
            CandidateId(candidate.to_string()),
            JobId(job.to_string()),
            score(value),
        )
    })
    .collect()
}

fn member(
    id: &str,
    name: &str,
    role: HrRole,
    joined_on: NaiveDate,
    status: MembershipStatus,
    permissions: &[Permission],
) -> HrMember {
    let email = format!(
        "{}@techcorp.com",
        name.to_ascii_lowercase().replace(' ', ".")
    );
    HrMember {
        id: MemberId(id.to_string()),
        name: name.to_string(),
        email,
        role,
        joined_on,
        status,
        permissions: permissions.to_vec(),
    }
}

fn team() -> Vec<HrMember> {
    use Permission::*;

    vec![
        member(
            "hr-1",
            "Alice Johnson",
            HrRole::HeadHr,
            date(2023, 1, 15),
            MembershipStatus::Active,
            &[ViewCandidates, ContactCandidates, ManageJobs, ManageTeam],
        ),
        member(
            "hr-2",
            "Bob Smith",
            HrRole::HrManager,
            date(2023, 6, 20),
            MembershipStatus::Active,
            &[ViewCandidates, ContactCandidates, ManageJobs],
        ),
        member(
            "hr-3",
            "Carol Davis",
            HrRole::HrCoordinator,
            date(2024, 3, 10),
            MembershipStatus::Active,
            &[ViewCandidates, ContactCandidates],
        ),
        member(
            "hr-4",
            "David Brown",
            HrRole::HrAssistant,
            date(2024, 8, 5),
            MembershipStatus::Pending,
            &[ViewCandidates],
        ),
    ]
}

pub(crate) fn demo() -> SeedData {
    let resume_matches = vec![(
        CandidateId("cand-1".to_string()),
        vec![
            JobId("job-1".to_string()),
            JobId("job-4".to_string()),
            JobId("job-5".to_string()),
        ],
    )];

    SeedData {
        jobs: jobs(),
        candidates: candidates(),
        applications: applications(),
        scores: scores(),
        resume_matches,
        team: team(),
    }
}
