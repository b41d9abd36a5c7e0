//! Membership domain models
//!
//! This module provides the membership entity that links users to companies.
//! A membership defines a user's role within a company and is unique per
//! `(company_id, user_id)` pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::CompanyRole;

/// Company membership linking a user to a company.
///
/// This represents a user's membership in a company, including their role
/// and when they joined. The `(company_id, user_id)` pair is unique; the
/// storage layer enforces this as a hard constraint.
///
/// The founding owner of a company always holds an implicit Owner
/// membership created atomically with the company itself, and that
/// membership can never be removed while the user remains the owner.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use platform_company::{CompanyRole, Membership};
///
/// let company_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let membership = Membership::new(company_id, user_id, CompanyRole::Recruiter);
/// assert_eq!(membership.role, CompanyRole::Recruiter);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    /// Unique membership ID
    pub id: Uuid,

    /// Company ID
    pub company_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Role within the company
    pub role: CompanyRole,

    /// When the user joined
    pub joined_at: DateTime<Utc>,

    /// Who added this user (if applicable)
    pub added_by: Option<Uuid>,
}

impl Membership {
    /// Creates a new company membership.
    ///
    /// The membership is created with:
    /// - A newly generated UUID v7 ID
    /// - Current timestamp for joined_at
    ///
    /// # Arguments
    ///
    /// * `company_id` - The company ID
    /// * `user_id` - The user ID
    /// * `role` - The user's role in the company
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use platform_company::{CompanyRole, Membership};
    ///
    /// let membership = Membership::new(Uuid::now_v7(), Uuid::now_v7(), CompanyRole::Member);
    /// assert!(membership.added_by.is_none());
    /// ```
    pub fn new(company_id: Uuid, user_id: Uuid, role: CompanyRole) -> Self {
        Self {
            id: Uuid::now_v7(),
            company_id,
            user_id,
            role,
            joined_at: Utc::now(),
            added_by: None,
        }
    }

    /// Creates the founding owner membership for a company.
    ///
    /// This is the membership persisted atomically with a new company.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use platform_company::{CompanyRole, Membership};
    ///
    /// let membership = Membership::founding_owner(Uuid::now_v7(), Uuid::now_v7());
    /// assert_eq!(membership.role, CompanyRole::Owner);
    /// ```
    pub fn founding_owner(company_id: Uuid, owner_id: Uuid) -> Self {
        Self::new(company_id, owner_id, CompanyRole::Owner)
    }

    /// Set who added this user to the company.
    ///
    /// # Arguments
    ///
    /// * `adder_id` - The user ID of who added this user
    pub fn with_adder(mut self, adder_id: Uuid) -> Self {
        self.added_by = Some(adder_id);
        self
    }
}
