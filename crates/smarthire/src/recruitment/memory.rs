use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{
    Application, ApplicationId, CandidateId, CandidateProfile, HrMember, JobId, JobPosting,
    MemberId,
};
use super::matching::MatchScore;
use super::repository::{RecruitmentRepository, RepositoryError};
use super::seed;

#[derive(Default)]
struct Tables {
    jobs: Vec<JobPosting>,
    candidates: Vec<CandidateProfile>,
    applications: Vec<Application>,
    scores: HashMap<(CandidateId, JobId), MatchScore>,
    resume_matches: HashMap<CandidateId, Vec<JobId>>,
    team: Vec<HrMember>,
}

/// Process-local repository. Vectors keep insertion order so listings are stable.
#[derive(Default, Clone)]
pub struct InMemoryRepository {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryRepository {
    /// Repository preloaded with the demo jobs, candidates, applications, and HR team.
    pub fn seeded() -> Self {
        let data = seed::demo();
        let tables = Tables {
            jobs: data.jobs,
            candidates: data.candidates,
            applications: data.applications,
            scores: data
                .scores
                .into_iter()
                .map(|(candidate, job, score)| ((candidate, job), score))
                .collect(),
            resume_matches: data.resume_matches.into_iter().collect(),
            team: data.team,
        };
        Self {
            tables: Arc::new(Mutex::new(tables)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        self.tables
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }
}

impl RecruitmentRepository for InMemoryRepository {
    fn list_jobs(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        Ok(self.lock()?.jobs.clone())
    }

    fn get_job(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError> {
        Ok(self.lock()?.jobs.iter().find(|job| &job.id == id).cloned())
    }

    fn insert_job(&self, job: JobPosting) -> Result<JobPosting, RepositoryError> {
        let mut tables = self.lock()?;
        if tables.jobs.iter().any(|existing| existing.id == job.id) {
            return Err(RepositoryError::Conflict);
        }
        tables.jobs.push(job.clone());
        Ok(job)
    }

    fn list_candidates(&self) -> Result<Vec<CandidateProfile>, RepositoryError> {
        Ok(self.lock()?.candidates.clone())
    }

    fn get_candidate(&self, id: &CandidateId) -> Result<Option<CandidateProfile>, RepositoryError> {
        Ok(self
            .lock()?
            .candidates
            .iter()
            .find(|candidate| &candidate.id == id)
            .cloned())
    }

    fn list_applications(&self) -> Result<Vec<Application>, RepositoryError> {
        Ok(self.lock()?.applications.clone())
    }

    fn get_application(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Ok(self
            .lock()?
            .applications
            .iter()
            .find(|application| &application.id == id)
            .cloned())
    }

    fn insert_application(
        &self,
        application: Application,
    ) -> Result<Application, RepositoryError> {
        let mut tables = self.lock()?;
        let duplicate = tables.applications.iter().any(|existing| {
            existing.id == application.id
                || (existing.candidate_id == application.candidate_id
                    && existing.job_id == application.job_id)
        });
        if duplicate {
            return Err(RepositoryError::Conflict);
        }
        tables.applications.push(application.clone());
        Ok(application)
    }

    fn update_application(&self, application: Application) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let slot = tables
            .applications
            .iter_mut()
            .find(|existing| existing.id == application.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = application;
        Ok(())
    }

    fn declared_score(
        &self,
        candidate: &CandidateId,
        job: &JobId,
    ) -> Result<Option<MatchScore>, RepositoryError> {
        Ok(self
            .lock()?
            .scores
            .get(&(candidate.clone(), job.clone()))
            .copied())
    }

    fn resume_matches(&self, candidate: &CandidateId) -> Result<Vec<JobId>, RepositoryError> {
        Ok(self
            .lock()?
            .resume_matches
            .get(candidate)
            .cloned()
            .unwrap_or_default())
    }

    fn list_team(&self) -> Result<Vec<HrMember>, RepositoryError> {
        Ok(self.lock()?.team.clone())
    }

    fn insert_member(&self, member: HrMember) -> Result<HrMember, RepositoryError> {
        let mut tables = self.lock()?;
        let duplicate = tables.team.iter().any(|existing| {
            existing.id == member.id || existing.email.eq_ignore_ascii_case(&member.email)
        });
        if duplicate {
            return Err(RepositoryError::Conflict);
        }
        tables.team.push(member.clone());
        Ok(member)
    }

    fn remove_member(&self, id: &MemberId) -> Result<HrMember, RepositoryError> {
        let mut tables = self.lock()?;
        let index = tables
            .team
            .iter()
            .position(|member| &member.id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(tables.team.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_repository_exposes_unified_dataset() {
        let repository = InMemoryRepository::seeded();
        assert_eq!(repository.list_jobs().expect("jobs").len(), 8);
        assert_eq!(repository.list_candidates().expect("candidates").len(), 4);
        assert_eq!(repository.list_team().expect("team").len(), 4);

        let john = CandidateId("cand-1".to_string());
        let applied = repository
            .applications_for_candidate(&john)
            .expect("applications");
        assert_eq!(applied.len(), 3);

        let react_dev = JobId("job-5".to_string());
        assert_eq!(
            repository
                .declared_score(&john, &react_dev)
                .expect("score lookup")
                .map(MatchScore::value),
            Some(45)
        );
        assert_eq!(
            repository.resume_matches(&john).expect("matches").len(),
            3
        );
    }

    #[test]
    fn duplicate_applications_conflict() {
        let repository = InMemoryRepository::seeded();
        let existing = repository
            .get_application(&ApplicationId("app-1".to_string()))
            .expect("lookup")
            .expect("seeded application");
        let mut copy = existing.clone();
        copy.id = ApplicationId("app-99".to_string());

        assert!(matches!(
            repository.insert_application(copy),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn update_and_remove_require_existing_records() {
        let repository = InMemoryRepository::default();
        let missing = MemberId("hr-404".to_string());
        assert!(matches!(
            repository.remove_member(&missing),
            Err(RepositoryError::NotFound)
        ));
        assert!(repository.list_jobs().expect("jobs").is_empty());
    }
}
