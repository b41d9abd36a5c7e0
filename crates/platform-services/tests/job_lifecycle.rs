//! End-to-end tests for the job lifecycle.
//!
//! These tests exercise the job service against the in-memory stores:
//! the verification gate, role checks, topic resolution, slug namespaces,
//! and the author's retained mutation rights.

use std::sync::Arc;

use uuid::Uuid;

use platform_company::CompanyRole;
use platform_jobs::{JobFilter, JobPatch};
use platform_policy::DenialReason;
use platform_services::company::{CompanyService, CreateCompany, MemberAction};
use platform_services::jobs::{CreateJob, JobService};
use platform_services::memory::{
    MemoryBlobStore, MemoryCompanyStore, MemoryJobStore, MemoryTopicResolver,
};
use platform_services::ServiceError;

/// Test fixture wiring the company and job services to shared stores.
struct TestFixture {
    topics: Arc<MemoryTopicResolver>,
    company_service: CompanyService,
    job_service: JobService,
}

impl TestFixture {
    fn new() -> Self {
        let companies = Arc::new(MemoryCompanyStore::new());
        let topics = Arc::new(MemoryTopicResolver::new());
        let company_service =
            CompanyService::new(companies.clone(), Arc::new(MemoryBlobStore::new()));
        let job_service = JobService::new(
            Arc::new(MemoryJobStore::new()),
            companies,
            topics.clone(),
        );
        Self {
            topics,
            company_service,
            job_service,
        }
    }

    /// Create a company and return `(owner_id, company_id)`.
    async fn company(&self, name: &str) -> (Uuid, Uuid) {
        let owner = Uuid::now_v7();
        let company = self
            .company_service
            .create(
                owner,
                CreateCompany {
                    name: name.to_string(),
                    description: None,
                    website_url: None,
                },
            )
            .await
            .unwrap();
        (owner, company.id)
    }

    /// Create a domain-verified company and return `(owner_id, company_id)`.
    async fn verified_company(&self, name: &str) -> (Uuid, Uuid) {
        let (owner, company_id) = self.company(name).await;
        self.company_service
            .verify_domain(owner, company_id, &format!("owner@{}.com", name.to_lowercase()))
            .await
            .unwrap();
        (owner, company_id)
    }

    async fn add_member(&self, owner: Uuid, company_id: Uuid, role: CompanyRole) -> Uuid {
        let user = Uuid::now_v7();
        self.company_service
            .manage_member(
                owner,
                company_id,
                user,
                MemberAction::Add { role: Some(role) },
            )
            .await
            .unwrap();
        user
    }
}

fn job_input(company_id: Uuid, title: &str) -> CreateJob {
    CreateJob {
        company_id,
        title: title.to_string(),
        description: None,
        compensation: None,
        topics: Vec::new(),
    }
}

#[tokio::test]
async fn unverified_company_cannot_post_jobs_even_as_owner() {
    let fixture = TestFixture::new();
    let (owner, company_id) = fixture.company("Acme").await;

    let err = fixture
        .job_service
        .create(owner, job_input(company_id, "Engineer"))
        .await
        .unwrap_err();

    assert_eq!(err.denial_reason(), Some(DenialReason::CompanyUnverified));
    assert_eq!(err.error_code(), "COMPANY_UNVERIFIED");
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn create_against_missing_company_is_not_found() {
    let fixture = TestFixture::new();
    let err = fixture
        .job_service
        .create(Uuid::now_v7(), job_input(Uuid::now_v7(), "Engineer"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "company" }));
}

#[tokio::test]
async fn owner_and_recruiter_may_post_plain_member_may_not() {
    let fixture = TestFixture::new();
    let (owner, company_id) = fixture.verified_company("Acme").await;

    let job = fixture
        .job_service
        .create(owner, job_input(company_id, "Backend Engineer"))
        .await
        .unwrap();
    assert_eq!(job.author_id, owner);
    assert!(job.is_active);

    let recruiter = fixture
        .add_member(owner, company_id, CompanyRole::Recruiter)
        .await;
    fixture
        .job_service
        .create(recruiter, job_input(company_id, "Frontend Engineer"))
        .await
        .unwrap();

    let member = fixture
        .add_member(owner, company_id, CompanyRole::Member)
        .await;
    let err = fixture
        .job_service
        .create(member, job_input(company_id, "Designer"))
        .await
        .unwrap_err();
    assert_eq!(err.denial_reason(), Some(DenialReason::CannotManageJobs));
}

#[tokio::test]
async fn topics_are_resolved_before_the_job_persists() {
    let fixture = TestFixture::new();
    let (owner, company_id) = fixture.verified_company("Acme").await;

    let mut input = job_input(company_id, "Engineer");
    input.topics = vec!["Rust".to_string(), "Backend".to_string()];
    let first = fixture.job_service.create(owner, input).await.unwrap();
    assert_eq!(first.topic_ids.len(), 2);
    assert_eq!(fixture.topics.len().await, 2);

    // The same topic name resolves to the same ID on the next job.
    let mut input = job_input(company_id, "Another Engineer");
    input.topics = vec!["rust".to_string()];
    let second = fixture.job_service.create(owner, input).await.unwrap();
    assert_eq!(second.topic_ids[0], first.topic_ids[0]);
    assert_eq!(fixture.topics.len().await, 2);
}

#[tokio::test]
async fn job_slugs_live_in_their_own_namespace() {
    let fixture = TestFixture::new();
    let (owner, company_id) = fixture.verified_company("Acme").await;

    // The job title matches the company name; no cross-namespace collision.
    let job = fixture
        .job_service
        .create(owner, job_input(company_id, "Acme"))
        .await
        .unwrap();
    assert_eq!(job.slug, "acme");

    // A second job with the same title collides within the job namespace.
    let second = fixture
        .job_service
        .create(owner, job_input(company_id, "Acme"))
        .await
        .unwrap();
    assert_ne!(second.slug, "acme");
    assert!(second.slug.starts_with("acme-"));
}

#[tokio::test]
async fn author_retains_mutation_rights_after_demotion() {
    let fixture = TestFixture::new();
    let (owner, company_id) = fixture.verified_company("Acme").await;
    let recruiter = fixture
        .add_member(owner, company_id, CompanyRole::Recruiter)
        .await;

    let job = fixture
        .job_service
        .create(recruiter, job_input(company_id, "Engineer"))
        .await
        .unwrap();

    // Demote the author to a plain member.
    fixture
        .company_service
        .manage_member(
            owner,
            company_id,
            recruiter,
            MemberAction::UpdateRole {
                role: CompanyRole::Member,
            },
        )
        .await
        .unwrap();

    // The author still holds mutation rights over their own posting.
    let updated = fixture
        .job_service
        .update(
            recruiter,
            job.id,
            JobPatch {
                title: Some("Senior Engineer".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Senior Engineer");
}

#[tokio::test]
async fn current_managers_may_mutate_jobs_they_did_not_author() {
    let fixture = TestFixture::new();
    let (owner, company_id) = fixture.verified_company("Acme").await;
    let recruiter = fixture
        .add_member(owner, company_id, CompanyRole::Recruiter)
        .await;

    let job = fixture
        .job_service
        .create(recruiter, job_input(company_id, "Engineer"))
        .await
        .unwrap();

    let updated = fixture
        .job_service
        .update(
            owner,
            job.id,
            JobPatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!updated.is_active);
}

#[tokio::test]
async fn outsiders_may_not_mutate_or_delete_jobs() {
    let fixture = TestFixture::new();
    let (owner, company_id) = fixture.verified_company("Acme").await;
    let job = fixture
        .job_service
        .create(owner, job_input(company_id, "Engineer"))
        .await
        .unwrap();

    let stranger = Uuid::now_v7();
    let err = fixture
        .job_service
        .update(stranger, job.id, JobPatch::default())
        .await
        .unwrap_err();
    assert_eq!(err.denial_reason(), Some(DenialReason::CannotManageJobs));

    let err = fixture
        .job_service
        .delete(stranger, job.id)
        .await
        .unwrap_err();
    assert_eq!(err.denial_reason(), Some(DenialReason::CannotManageJobs));
}

#[tokio::test]
async fn delete_removes_the_job() {
    let fixture = TestFixture::new();
    let (owner, company_id) = fixture.verified_company("Acme").await;
    let job = fixture
        .job_service
        .create(owner, job_input(company_id, "Engineer"))
        .await
        .unwrap();

    fixture.job_service.delete(owner, job.id).await.unwrap();

    let err = fixture
        .job_service
        .delete(owner, job.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "job" }));
}

#[tokio::test]
async fn list_applies_the_filter() {
    let fixture = TestFixture::new();
    let (owner, company_id) = fixture.verified_company("Acme").await;
    let (other_owner, other_company_id) = fixture.verified_company("Globex").await;

    fixture
        .job_service
        .create(owner, job_input(company_id, "Rust Engineer"))
        .await
        .unwrap();
    let closed = fixture
        .job_service
        .create(owner, job_input(company_id, "Go Engineer"))
        .await
        .unwrap();
    fixture
        .job_service
        .update(
            owner,
            closed.id,
            JobPatch {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    fixture
        .job_service
        .create(other_owner, job_input(other_company_id, "Rust Engineer"))
        .await
        .unwrap();

    let all_for_company = fixture
        .job_service
        .list(&JobFilter {
            company_id: Some(company_id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(all_for_company.len(), 2);

    let active_rust = fixture
        .job_service
        .list(&JobFilter {
            active_only: true,
            title_contains: Some("rust".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(active_rust.len(), 2);
    assert!(active_rust.iter().all(|j| j.is_active));
}
