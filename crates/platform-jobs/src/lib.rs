//! # Platform Jobs
//!
//! This crate provides the job posting and job application domain model
//! for the Lattice collaboration platform.
//!
//! ## Overview
//!
//! The platform-jobs crate handles:
//! - **Jobs**: Postings owned by a company and authored by a member
//! - **Applications**: One application per user per job, status-tracked
//! - **Filters**: Listing criteria for job queries
//!
//! ## Architecture
//!
//! ```text
//! Company (platform-company)
//!   └─ Job (author: user)
//!        └─ JobApplication (applicant: user, status state machine)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use platform_jobs::{ApplicationStatus, Job, JobApplication};
//! use uuid::Uuid;
//!
//! let company_id = Uuid::now_v7();
//! let author_id = Uuid::now_v7();
//! let job = Job::new(company_id, author_id, "Senior Rust Engineer", "senior-rust-engineer");
//!
//! let applicant_id = Uuid::now_v7();
//! let application = JobApplication::new(job.id, applicant_id);
//! assert_eq!(application.status, ApplicationStatus::Pending);
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `platform-company`: Owning companies and the verification gate
//! - `platform-policy`: Authorization decisions over jobs and applications
//! - `platform-services`: Lifecycle services and persistence interfaces

pub mod application;
pub mod job;

// Re-export main types for convenience
pub use application::{ApplicationStatus, JobApplication};
pub use job::{Job, JobFilter, JobPatch};
