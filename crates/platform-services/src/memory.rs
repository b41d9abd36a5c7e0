//! In-memory store implementations
//!
//! This module provides in-memory implementations of every repository and
//! collaborator interface. They are suitable for single-process use and
//! testing; production deployments plug in database-backed
//! implementations behind the same traits.
//!
//! The stores enforce the same uniqueness constraints a real database
//! would (slug per namespace, one membership per `(company, user)`, one
//! application per `(job, user)`) and surface violations as
//! [`RepositoryError::Conflict`], making them faithful stand-ins for the
//! conflict-signal contract the services rely on.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use platform_company::{Company, CompanyRole, Membership};
use platform_jobs::{Job, JobApplication, JobFilter};

use crate::collaborators::{BlobError, BlobResult, BlobStore, TopicResolver};
use crate::repository::{
    CompanyRepository, JobApplicationRepository, JobRepository, RepositoryError, RepositoryResult,
};

/// Company and membership tables guarded by a single lock.
///
/// One lock covers both tables so that company creation and the founding
/// owner membership commit atomically, matching the transactional
/// invariant of the persistence contract.
#[derive(Debug, Default)]
struct CompanyTables {
    companies: HashMap<Uuid, Company>,
    members: HashMap<(Uuid, Uuid), Membership>,
}

/// In-memory company repository.
#[derive(Debug, Default)]
pub struct MemoryCompanyStore {
    inner: Arc<RwLock<CompanyTables>>,
}

impl MemoryCompanyStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for MemoryCompanyStore {
    async fn create(
        &self,
        company: Company,
        owner_membership: Membership,
    ) -> RepositoryResult<Company> {
        let mut tables = self.inner.write().await;

        if tables.companies.values().any(|c| c.slug == company.slug) {
            return Err(RepositoryError::Conflict(format!(
                "company slug already taken: {}",
                company.slug
            )));
        }

        let member_key = (owner_membership.company_id, owner_membership.user_id);
        if tables.members.contains_key(&member_key) {
            return Err(RepositoryError::Conflict(format!(
                "membership already exists for user {}",
                owner_membership.user_id
            )));
        }

        tables.companies.insert(company.id, company.clone());
        tables.members.insert(member_key, owner_membership);
        Ok(company)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Company>> {
        Ok(self.inner.read().await.companies.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Company>> {
        Ok(self
            .inner
            .read()
            .await
            .companies
            .values()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn update(&self, company: Company) -> RepositoryResult<Company> {
        let mut tables = self.inner.write().await;
        if !tables.companies.contains_key(&company.id) {
            return Err(RepositoryError::NotFound);
        }
        tables.companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn add_member(&self, membership: Membership) -> RepositoryResult<Membership> {
        let mut tables = self.inner.write().await;
        let key = (membership.company_id, membership.user_id);
        if tables.members.contains_key(&key) {
            return Err(RepositoryError::Conflict(format!(
                "membership already exists for user {}",
                membership.user_id
            )));
        }
        tables.members.insert(key, membership.clone());
        Ok(membership)
    }

    async fn find_member(
        &self,
        company_id: Uuid,
        user_id: Uuid,
    ) -> RepositoryResult<Option<Membership>> {
        Ok(self
            .inner
            .read()
            .await
            .members
            .get(&(company_id, user_id))
            .cloned())
    }

    async fn update_member_role(
        &self,
        company_id: Uuid,
        user_id: Uuid,
        role: CompanyRole,
    ) -> RepositoryResult<Membership> {
        let mut tables = self.inner.write().await;
        let membership = tables
            .members
            .get_mut(&(company_id, user_id))
            .ok_or(RepositoryError::NotFound)?;
        membership.role = role;
        Ok(membership.clone())
    }

    async fn remove_member(&self, company_id: Uuid, user_id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.inner.write().await;
        tables
            .members
            .remove(&(company_id, user_id))
            .ok_or(RepositoryError::NotFound)?;
        Ok(())
    }

    async fn find_companies_managed_by(
        &self,
        user_id: Uuid,
    ) -> RepositoryResult<Vec<(Company, CompanyRole)>> {
        let tables = self.inner.read().await;
        let mut managed = Vec::new();

        for company in tables.companies.values() {
            let role = tables
                .members
                .get(&(company.id, user_id))
                .map(|m| m.role)
                .or_else(|| (company.owner_id == user_id).then_some(CompanyRole::Owner));

            if let Some(role) = role {
                if role.can_post_jobs() {
                    managed.push((company.clone(), role));
                }
            }
        }

        managed.sort_by(|(a, _), (b, _)| a.created_at.cmp(&b.created_at));
        Ok(managed)
    }
}

/// In-memory job repository.
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl MemoryJobStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for MemoryJobStore {
    async fn create(&self, job: Job) -> RepositoryResult<Job> {
        let mut jobs = self.jobs.write().await;
        if jobs.values().any(|j| j.slug == job.slug) {
            return Err(RepositoryError::Conflict(format!(
                "job slug already taken: {}",
                job.slug
            )));
        }
        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Job>> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepositoryResult<Option<Job>> {
        Ok(self
            .jobs
            .read()
            .await
            .values()
            .find(|j| j.slug == slug)
            .cloned())
    }

    async fn update(&self, job: Job) -> RepositoryResult<Job> {
        let mut jobs = self.jobs.write().await;
        if !jobs.contains_key(&job.id) {
            return Err(RepositoryError::NotFound);
        }
        jobs.insert(job.id, job.clone());
        Ok(job)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        self.jobs
            .write()
            .await
            .remove(&id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(())
    }

    async fn find_all(&self, filter: &JobFilter) -> RepositoryResult<Vec<Job>> {
        let jobs = self.jobs.read().await;
        let mut matching: Vec<Job> = jobs.values().filter(|j| filter.matches(j)).cloned().collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matching)
    }
}

/// In-memory job application repository.
///
/// The `(job, user)` uniqueness check happens under the write lock, so two
/// racing submissions resolve to exactly one success and one conflict.
#[derive(Debug, Default)]
pub struct MemoryApplicationStore {
    applications: Arc<RwLock<HashMap<Uuid, JobApplication>>>,
}

impl MemoryApplicationStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobApplicationRepository for MemoryApplicationStore {
    async fn create(&self, application: JobApplication) -> RepositoryResult<JobApplication> {
        let mut applications = self.applications.write().await;
        if applications
            .values()
            .any(|a| a.job_id == application.job_id && a.user_id == application.user_id)
        {
            return Err(RepositoryError::Conflict(format!(
                "user {} has already applied to job {}",
                application.user_id, application.job_id
            )));
        }
        applications.insert(application.id, application.clone());
        Ok(application)
    }

    async fn find_by_job_and_user(
        &self,
        job_id: Uuid,
        user_id: Uuid,
    ) -> RepositoryResult<Option<JobApplication>> {
        Ok(self
            .applications
            .read()
            .await
            .values()
            .find(|a| a.job_id == job_id && a.user_id == user_id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> RepositoryResult<Vec<JobApplication>> {
        let applications = self.applications.read().await;
        let mut found: Vec<JobApplication> = applications
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(found)
    }

    async fn find_by_job(&self, job_id: Uuid) -> RepositoryResult<Vec<JobApplication>> {
        let applications = self.applications.read().await;
        let mut found: Vec<JobApplication> = applications
            .values()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(found)
    }
}

/// In-memory blob store keyed by the URLs it hands out.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryBlobStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blobs currently stored.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }

    /// Whether a blob exists for `url`.
    pub async fn contains(&self, url: &str) -> bool {
        self.blobs.read().await.contains_key(url)
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(&self, content: Vec<u8>, path: &str) -> BlobResult<String> {
        if path.is_empty() {
            return Err(BlobError::Unavailable("empty blob path".to_string()));
        }
        let url = format!("memory://{path}");
        self.blobs.write().await.insert(url.clone(), content);
        Ok(url)
    }

    async fn delete(&self, url: &str) -> BlobResult<()> {
        self.blobs.write().await.remove(url);
        Ok(())
    }
}

/// In-memory topic resolver keyed by normalized topic name.
#[derive(Debug, Default)]
pub struct MemoryTopicResolver {
    topics: Arc<RwLock<HashMap<String, Uuid>>>,
}

impl MemoryTopicResolver {
    /// Create a new empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known topics.
    pub async fn len(&self) -> usize {
        self.topics.read().await.len()
    }
}

#[async_trait]
impl TopicResolver for MemoryTopicResolver {
    async fn resolve_or_create(&self, name: &str) -> RepositoryResult<Uuid> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return Err(RepositoryError::Unavailable(
                "empty topic name".to_string(),
            ));
        }

        let mut topics = self.topics.write().await;
        Ok(*topics.entry(key).or_insert_with(Uuid::now_v7))
    }
}
