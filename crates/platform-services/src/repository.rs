//! Repository interfaces
//!
//! This module defines the persistence abstractions the lifecycle services
//! are written against. Implementations own the authoritative uniqueness
//! constraints (company/job slugs per namespace, one membership per
//! `(company, user)`, one application per `(job, user)`) and must surface
//! violations as [`RepositoryError::Conflict`] so services can map them to
//! a distinguishable conflict error rather than a generic failure.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use platform_company::{Company, CompanyRole, Membership};
use platform_jobs::{Job, JobApplication, JobFilter};

/// Repository error types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A uniqueness constraint was violated
    #[error("uniqueness violation: {0}")]
    Conflict(String),

    /// The targeted record does not exist
    #[error("record not found")]
    NotFound,

    /// The store itself failed
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence interface for companies and their memberships.
///
/// Membership operations live on the company repository because a
/// membership never exists outside its company aggregate; the
/// implementation is the single store answering "what role does user X
/// hold in company Y".
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Persist a new company together with its founding owner membership.
    ///
    /// Both records are committed or rolled back together: a failure of
    /// either half must not leave an orphan. A slug collision fails with
    /// [`RepositoryError::Conflict`].
    async fn create(
        &self,
        company: Company,
        owner_membership: Membership,
    ) -> RepositoryResult<Company>;

    /// Find a company by ID.
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Company>>;

    /// Find a company by slug.
    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Company>>;

    /// Persist an updated company. Fails with [`RepositoryError::NotFound`]
    /// if the company does not exist.
    async fn update(&self, company: Company) -> RepositoryResult<Company>;

    /// Add a membership. A duplicate `(company, user)` pair fails with
    /// [`RepositoryError::Conflict`].
    async fn add_member(&self, membership: Membership) -> RepositoryResult<Membership>;

    /// Find a user's membership in a company.
    async fn find_member(
        &self,
        company_id: Uuid,
        user_id: Uuid,
    ) -> RepositoryResult<Option<Membership>>;

    /// Overwrite the role of an existing membership.
    async fn update_member_role(
        &self,
        company_id: Uuid,
        user_id: Uuid,
        role: CompanyRole,
    ) -> RepositoryResult<Membership>;

    /// Remove a membership.
    async fn remove_member(&self, company_id: Uuid, user_id: Uuid) -> RepositoryResult<()>;

    /// List the companies a user manages (owner or recruiter), together
    /// with the role held.
    async fn find_companies_managed_by(
        &self,
        user_id: Uuid,
    ) -> RepositoryResult<Vec<(Company, CompanyRole)>>;
}

/// Persistence interface for job postings.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Persist a new job. A slug collision in the job namespace fails with
    /// [`RepositoryError::Conflict`].
    async fn create(&self, job: Job) -> RepositoryResult<Job>;

    /// Find a job by ID.
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Job>>;

    /// Find a job by slug.
    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Job>>;

    /// Persist an updated job.
    async fn update(&self, job: Job) -> RepositoryResult<Job>;

    /// Delete a job.
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;

    /// List jobs matching a filter.
    async fn find_all(&self, filter: &JobFilter) -> RepositoryResult<Vec<Job>>;
}

/// Persistence interface for job applications.
#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
    /// Persist a new application. A duplicate `(job, user)` pair fails
    /// with [`RepositoryError::Conflict`]; this constraint is the final
    /// authority against racing submissions.
    async fn create(&self, application: JobApplication) -> RepositoryResult<JobApplication>;

    /// Find the application a user submitted to a job, if any.
    async fn find_by_job_and_user(
        &self,
        job_id: Uuid,
        user_id: Uuid,
    ) -> RepositoryResult<Option<JobApplication>>;

    /// List all applications submitted by a user.
    async fn find_by_user(&self, user_id: Uuid) -> RepositoryResult<Vec<JobApplication>>;

    /// List all applications submitted to a job.
    async fn find_by_job(&self, job_id: Uuid) -> RepositoryResult<Vec<JobApplication>>;
}
