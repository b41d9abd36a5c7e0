//! Application lifecycle service
//!
//! This module owns job application submission and retrieval. Submission
//! is gated by anti-self-dealing rules and duplicate prevention; the
//! store-level `(job, user)` uniqueness constraint remains the final
//! authority against races, with the explicit existence check providing a
//! friendlier error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use platform_jobs::JobApplication;
use platform_policy::rules;

use crate::error::{ServiceError, ServiceResult};
use crate::repository::{CompanyRepository, JobApplicationRepository, JobRepository};

/// Input for submitting a job application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitApplication {
    /// The job being applied to
    pub job_id: Uuid,

    /// Optional cover letter text
    pub cover_letter: Option<String>,

    /// Optional resume URL
    pub resume_url: Option<String>,
}

/// Lifecycle service for job applications.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use platform_services::applications::{ApplicationService, SubmitApplication};
/// use platform_services::memory::{
///     MemoryApplicationStore, MemoryCompanyStore, MemoryJobStore,
/// };
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), platform_services::ServiceError> {
/// let service = ApplicationService::new(
///     Arc::new(MemoryApplicationStore::new()),
///     Arc::new(MemoryJobStore::new()),
///     Arc::new(MemoryCompanyStore::new()),
/// );
///
/// let applicant = Uuid::now_v7();
/// let application = service
///     .apply(applicant, SubmitApplication {
///         job_id: Uuid::now_v7(),
///         cover_letter: Some("I would love to join".to_string()),
///         resume_url: None,
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ApplicationService {
    applications: Arc<dyn JobApplicationRepository>,
    jobs: Arc<dyn JobRepository>,
    companies: Arc<dyn CompanyRepository>,
}

impl ApplicationService {
    /// Create a new application service over the given collaborators.
    pub fn new(
        applications: Arc<dyn JobApplicationRepository>,
        jobs: Arc<dyn JobRepository>,
        companies: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            applications,
            jobs,
            companies,
        }
    }

    /// Submit an application to a job.
    ///
    /// Denials carry the rule that failed (own job, or staff of the owning
    /// company). A repeat submission fails with
    /// [`ServiceError::Conflict`]; under a race the store constraint
    /// guarantees exactly one submission wins.
    pub async fn apply(
        &self,
        actor_id: Uuid,
        input: SubmitApplication,
    ) -> ServiceResult<JobApplication> {
        let job = self
            .jobs
            .find_by_id(input.job_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("job"))?;

        let company = self.companies.find_by_id(job.company_id).await?;
        let membership = match &company {
            Some(company) => self.companies.find_member(company.id, actor_id).await?,
            None => None,
        };

        if let Err(reason) =
            rules::can_apply_to_job(actor_id, &job, company.as_ref(), membership.as_ref()).require()
        {
            warn!(job_id = %job.id, actor = %actor_id, rule = reason.as_str(), "application denied");
            return Err(reason.into());
        }

        if self
            .applications
            .find_by_job_and_user(job.id, actor_id)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(format!(
                "user {actor_id} has already applied to job {}",
                job.id
            )));
        }

        let mut application = JobApplication::new(job.id, actor_id);
        application.cover_letter = input.cover_letter;
        application.resume_url = input.resume_url;

        let application = self.applications.create(application).await?;
        debug!(application_id = %application.id, job_id = %job.id, applicant = %actor_id,
            "application submitted");
        Ok(application)
    }

    /// List the applications submitted to a job.
    ///
    /// Visible to the job author and to anyone with job-management rights
    /// on the owning company.
    pub async fn list_for_job(
        &self,
        actor_id: Uuid,
        job_id: Uuid,
    ) -> ServiceResult<Vec<JobApplication>> {
        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("job"))?;

        let company = self.companies.find_by_id(job.company_id).await?;
        let membership = match &company {
            Some(company) => self.companies.find_member(company.id, actor_id).await?,
            None => None,
        };

        if let Err(reason) =
            rules::can_view_job_applications(actor_id, &job, company.as_ref(), membership.as_ref())
                .require()
        {
            warn!(job_id = %job.id, actor = %actor_id, rule = reason.as_str(), "application listing denied");
            return Err(reason.into());
        }

        Ok(self.applications.find_by_job(job.id).await?)
    }

    /// List the actor's own applications. Always allowed for oneself.
    pub async fn list_for_user(&self, actor_id: Uuid) -> ServiceResult<Vec<JobApplication>> {
        Ok(self.applications.find_by_user(actor_id).await?)
    }
}
