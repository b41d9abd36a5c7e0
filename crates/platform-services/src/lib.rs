//! # Platform Lifecycle Services
//!
//! This crate provides the lifecycle services of the Lattice platform:
//! the components owning create/update/delete operations, and their
//! authorization, for the company, job, and application aggregates.
//!
//! ## Overview
//!
//! The platform-services crate handles:
//! - **CompanyService**: Creation, update, domain verification, logos,
//!   membership management
//! - **JobService**: Job posting gated by company verification and role
//! - **ApplicationService**: Application submission and retrieval
//! - **Repositories**: Persistence interfaces with a distinguishable
//!   conflict signal, plus in-memory reference implementations
//! - **Collaborators**: Blob storage and topic resolution interfaces
//!
//! ## Architecture
//!
//! ```text
//! Caller (controller layer, out of scope)
//!   └─ Lifecycle service
//!        ├─ loads aggregates via repository traits
//!        ├─ evaluates platform-policy rules
//!        └─ mutates and returns the aggregate or a typed error
//! ```
//!
//! All operations are synchronous request/response calls with no
//! background tasks. Races between independent requests are resolved by
//! the stores' uniqueness constraints; the services map those conflict
//! signals to [`ServiceError::Conflict`] and never retry. Retry policy
//! belongs to the caller, as does timeout policy for the repository and
//! blob-store interfaces.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use platform_services::company::{CompanyService, CreateCompany};
//! use platform_services::jobs::{CreateJob, JobService};
//! use platform_services::memory::{
//!     MemoryBlobStore, MemoryCompanyStore, MemoryJobStore, MemoryTopicResolver,
//! };
//! use uuid::Uuid;
//!
//! # async fn example() -> Result<(), platform_services::ServiceError> {
//! let companies = Arc::new(MemoryCompanyStore::new());
//! let company_service =
//!     CompanyService::new(companies.clone(), Arc::new(MemoryBlobStore::new()));
//! let job_service = JobService::new(
//!     Arc::new(MemoryJobStore::new()),
//!     companies,
//!     Arc::new(MemoryTopicResolver::new()),
//! );
//!
//! let founder = Uuid::now_v7();
//! let company = company_service
//!     .create(founder, CreateCompany {
//!         name: "Acme Corp".to_string(),
//!         description: None,
//!         website_url: None,
//!     })
//!     .await?;
//!
//! // Jobs require a domain-verified company.
//! company_service
//!     .verify_domain(founder, company.id, "founder@acme.com")
//!     .await?;
//!
//! job_service
//!     .create(founder, CreateJob {
//!         company_id: company.id,
//!         title: "Senior Rust Engineer".to_string(),
//!         description: None,
//!         compensation: None,
//!         topics: vec!["rust".to_string()],
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `memory`: In-memory store implementations (enabled by default)

pub mod applications;
pub mod collaborators;
pub mod company;
pub mod error;
pub mod jobs;
#[cfg(feature = "memory")]
pub mod memory;
pub mod repository;

// Re-export main types for convenience
pub use applications::{ApplicationService, SubmitApplication};
pub use collaborators::{BlobError, BlobResult, BlobStore, TopicResolver};
pub use company::{CompanyService, CreateCompany, LogoUpload, MemberAction};
pub use error::{ServiceError, ServiceResult};
pub use jobs::{CreateJob, JobService};
pub use repository::{
    CompanyRepository, JobApplicationRepository, JobRepository, RepositoryError, RepositoryResult,
};
