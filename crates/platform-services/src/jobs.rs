//! Job lifecycle service
//!
//! This module owns creation, update, and deletion of job postings. Job
//! creation is gated twice: the owning company must be domain-verified (a
//! hard business gate independent of role), and the actor must hold
//! job-management rights. For mutations of an existing job the original
//! author retains rights even if later demoted.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use platform_company::{slug, Company, Membership};
use platform_jobs::{Job, JobFilter, JobPatch};
use platform_policy::{rules, DenialReason};

use crate::collaborators::TopicResolver;
use crate::error::{ServiceError, ServiceResult};
use crate::repository::{CompanyRepository, JobRepository};

/// Input for creating a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// The owning company (must resolve)
    pub company_id: Uuid,

    /// Job title; also the slug candidate
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional compensation description
    pub compensation: Option<String>,

    /// Topic tag names, resolved or created before the job persists
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Lifecycle service for job postings.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use platform_services::jobs::{CreateJob, JobService};
/// use platform_services::memory::{MemoryCompanyStore, MemoryJobStore, MemoryTopicResolver};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), platform_services::ServiceError> {
/// let service = JobService::new(
///     Arc::new(MemoryJobStore::new()),
///     Arc::new(MemoryCompanyStore::new()),
///     Arc::new(MemoryTopicResolver::new()),
/// );
///
/// let actor = Uuid::now_v7();
/// let job = service
///     .create(actor, CreateJob {
///         company_id: Uuid::now_v7(),
///         title: "Senior Rust Engineer".to_string(),
///         description: None,
///         compensation: None,
///         topics: vec!["rust".to_string()],
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct JobService {
    jobs: Arc<dyn JobRepository>,
    companies: Arc<dyn CompanyRepository>,
    topics: Arc<dyn TopicResolver>,
}

impl JobService {
    /// Create a new job service over the given collaborators.
    pub fn new(
        jobs: Arc<dyn JobRepository>,
        companies: Arc<dyn CompanyRepository>,
        topics: Arc<dyn TopicResolver>,
    ) -> Self {
        Self {
            jobs,
            companies,
            topics,
        }
    }

    /// Create a job posting for a company.
    ///
    /// Fails with [`ServiceError::NotFound`] if the company does not
    /// resolve, and with a forbidden error naming
    /// [`DenialReason::CompanyUnverified`] while the company is
    /// unverified, regardless of the actor's role (including the owner).
    /// The job slug is allocated in the job namespace, separate from
    /// company slugs.
    pub async fn create(&self, actor_id: Uuid, input: CreateJob) -> ServiceResult<Job> {
        let company = self
            .companies
            .find_by_id(input.company_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("company"))?;

        if !company.can_post_jobs() {
            warn!(company_id = %company.id, actor = %actor_id,
                rule = DenialReason::CompanyUnverified.as_str(), "job creation denied");
            return Err(DenialReason::CompanyUnverified.into());
        }

        let membership = self.companies.find_member(company.id, actor_id).await?;
        if let Err(reason) =
            rules::can_post_or_manage_jobs(actor_id, &company, membership.as_ref()).require()
        {
            warn!(company_id = %company.id, actor = %actor_id, rule = reason.as_str(), "job creation denied");
            return Err(reason.into());
        }

        let mut topic_ids = Vec::with_capacity(input.topics.len());
        for name in &input.topics {
            topic_ids.push(self.topics.resolve_or_create(name).await?);
        }

        let jobs = Arc::clone(&self.jobs);
        let slug = slug::allocate(&input.title, move |candidate| {
            let jobs = Arc::clone(&jobs);
            async move { matches!(jobs.find_by_slug(&candidate).await, Ok(Some(_))) }
        })
        .await?;

        let mut job = Job::new(company.id, actor_id, input.title, slug).with_topics(topic_ids);
        job.description = input.description;
        job.compensation = input.compensation;

        let job = self.jobs.create(job).await?;
        debug!(job_id = %job.id, company_id = %company.id, author = %actor_id, "job created");
        Ok(job)
    }

    /// Apply a field-level patch to a job.
    ///
    /// Authorized for the original author or anyone with current
    /// job-management rights on the owning company.
    pub async fn update(&self, actor_id: Uuid, job_id: Uuid, patch: JobPatch) -> ServiceResult<Job> {
        let (mut job, company, membership) = self.load_for_mutation(actor_id, job_id).await?;
        self.authorize_mutation(actor_id, &job, &company, membership.as_ref())?;

        job.apply_patch(patch);
        Ok(self.jobs.update(job).await?)
    }

    /// Delete a job.
    ///
    /// Authorized like [`Self::update`].
    pub async fn delete(&self, actor_id: Uuid, job_id: Uuid) -> ServiceResult<()> {
        let (job, company, membership) = self.load_for_mutation(actor_id, job_id).await?;
        self.authorize_mutation(actor_id, &job, &company, membership.as_ref())?;

        self.jobs.delete(job.id).await?;
        debug!(job_id = %job.id, actor = %actor_id, "job deleted");
        Ok(())
    }

    /// List jobs matching a filter.
    pub async fn list(&self, filter: &JobFilter) -> ServiceResult<Vec<Job>> {
        Ok(self.jobs.find_all(filter).await?)
    }

    async fn load_for_mutation(
        &self,
        actor_id: Uuid,
        job_id: Uuid,
    ) -> ServiceResult<(Job, Company, Option<Membership>)> {
        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("job"))?;

        let company = self
            .companies
            .find_by_id(job.company_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("company"))?;

        let membership = self.companies.find_member(company.id, actor_id).await?;
        Ok((job, company, membership))
    }

    /// The author keeps mutation rights regardless of current role; anyone
    /// else needs current job-management rights on the company.
    fn authorize_mutation(
        &self,
        actor_id: Uuid,
        job: &Job,
        company: &Company,
        membership: Option<&Membership>,
    ) -> ServiceResult<()> {
        if actor_id == job.author_id {
            return Ok(());
        }

        rules::can_post_or_manage_jobs(actor_id, company, membership)
            .require()
            .map_err(|reason| {
                warn!(job_id = %job.id, actor = %actor_id, rule = reason.as_str(), "job mutation denied");
                reason.into()
            })
    }
}
