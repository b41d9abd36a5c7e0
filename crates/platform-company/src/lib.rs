//! # Platform Company Management
//!
//! This crate provides the company and membership domain model for the
//! Lattice collaboration platform.
//!
//! ## Overview
//!
//! The platform-company crate handles:
//! - **Companies**: Organizational tenant entities with a verification tier
//! - **Memberships**: User-company relationships with a fixed role set
//! - **Roles**: Owner / Recruiter / Member hierarchy
//! - **Slugs**: URL-safe unique identifiers with collision suffixing
//!
//! ## Architecture
//!
//! ```text
//! User
//!   └─ Membership ─→ Company
//!                      ├─ Verification Tier (gates job posting)
//!                      └─ Jobs (platform-jobs)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use platform_company::{Company, CompanyRole, Membership};
//! use uuid::Uuid;
//!
//! // Create a company
//! let owner_id = Uuid::now_v7();
//! let company = Company::new("Acme Corp", "acme-corp", owner_id);
//!
//! // The founding owner membership is persisted atomically with the company
//! let owner_membership = Membership::founding_owner(company.id, owner_id);
//!
//! // Add a recruiter
//! let user_id = Uuid::now_v7();
//! let membership = Membership::new(company.id, user_id, CompanyRole::Recruiter);
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `platform-policy`: Authorization decisions over companies and memberships
//! - `platform-jobs`: Job postings owned by companies
//! - `platform-services`: Lifecycle services and persistence interfaces

pub mod company;
pub mod membership;
pub mod roles;
pub mod slug;

// Re-export main types for convenience
pub use company::{Company, CompanyPatch, CompanySummary, VerificationTier};
pub use membership::Membership;
pub use roles::CompanyRole;
pub use slug::SlugError;
