//! # Platform Authorization Policy
//!
//! This crate provides the authorization policy for the Lattice platform:
//! one authoritative definition of each rule gating company, job, and
//! application operations.
//!
//! ## Overview
//!
//! The platform-policy crate handles:
//! - **Rules**: Pure decision functions over already-loaded aggregates
//! - **Decisions**: Allow/deny outcomes that name the rule that failed
//!
//! Policy functions perform no I/O and take no hidden dependencies, so
//! every rule is unit testable in isolation from persistence. The same
//! "owner or recruiter" style checks that would otherwise be repeated
//! inline across services live here exactly once.
//!
//! ## Usage
//!
//! ```rust
//! use platform_company::{Company, CompanyRole, Membership};
//! use platform_policy::{rules, PolicyDecision};
//! use uuid::Uuid;
//!
//! let owner_id = Uuid::now_v7();
//! let company = Company::new("Acme Corp", "acme-corp", owner_id);
//!
//! // The founding owner may always manage the company.
//! assert!(rules::can_manage_company(owner_id, &company, None).is_allowed());
//!
//! // A recruiter may post jobs but not manage members.
//! let recruiter = Membership::new(company.id, Uuid::now_v7(), CompanyRole::Recruiter);
//! assert!(rules::can_post_or_manage_jobs(recruiter.user_id, &company, Some(&recruiter))
//!     .is_allowed());
//! assert!(!rules::can_manage_members(recruiter.user_id, &company, Some(&recruiter))
//!     .is_allowed());
//! ```
//!
//! ## Integration with platform-services
//!
//! Lifecycle services load the relevant aggregates through their
//! repositories, evaluate the policy, and map denials into forbidden
//! errors that carry the failed rule for auditability.

pub mod decision;
pub mod rules;

// Re-export main types for convenience
pub use decision::{DenialReason, PolicyDecision};
pub use rules::{
    can_apply_to_job, can_manage_company, can_manage_members, can_post_or_manage_jobs,
    can_view_job_applications,
};
