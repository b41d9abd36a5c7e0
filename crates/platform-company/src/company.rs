//! Company domain models
//!
//! This module provides the core Company entity for multi-tenant company
//! management. Companies are the organizational entities that own job
//! postings and carry memberships.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::roles::CompanyRole;

/// Verification tier for a company.
///
/// The tier expresses how much trust the platform places in a company and
/// gates its job-posting capability: only `DomainVerified` companies may
/// post jobs. The transition from `Unverified` to `DomainVerified` is
/// one-directional; there is no downgrade path.
///
/// # Examples
///
/// ```
/// use platform_company::VerificationTier;
///
/// let tier = VerificationTier::Unverified;
/// assert!(!tier.can_post_jobs());
/// assert!(VerificationTier::DomainVerified.can_post_jobs());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VerificationTier {
    /// No verification performed yet
    Unverified,

    /// A company email domain has been verified
    DomainVerified,
}

impl VerificationTier {
    /// Check whether this tier permits job posting.
    ///
    /// # Returns
    ///
    /// `true` only for `DomainVerified`
    pub fn can_post_jobs(&self) -> bool {
        matches!(self, VerificationTier::DomainVerified)
    }

    /// Get string representation of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::DomainVerified => "domain_verified",
        }
    }
}

impl Default for VerificationTier {
    fn default() -> Self {
        Self::Unverified
    }
}

/// A company represents an organizational tenant in the platform.
///
/// Users can belong to multiple companies with different roles. Each
/// company has a unique slug, a founding owner, and a verification tier
/// that gates whether it may post jobs.
///
/// # Architecture
///
/// ```text
/// Company
///   ├─ Members (via Membership)
///   ├─ Jobs (via platform-jobs)
///   └─ Verification Tier
/// ```
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use platform_company::{Company, VerificationTier};
///
/// let owner_id = Uuid::now_v7();
/// let company = Company::new("Acme Corp", "acme-corp", owner_id);
/// assert_eq!(company.name, "Acme Corp");
/// assert_eq!(company.verification_tier, VerificationTier::Unverified);
/// assert!(!company.is_verified);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier for the company
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// URL-friendly slug (unique across the platform, immutable once assigned)
    pub slug: String,

    /// Optional description
    pub description: Option<String>,

    /// Logo URL for branding
    pub logo_url: Option<String>,

    /// Primary website URL
    pub website_url: Option<String>,

    /// Verification tier gating job posting
    pub verification_tier: VerificationTier,

    /// The email domain that was verified, if any
    pub verified_domain: Option<String>,

    /// Derived-but-stored flag mirroring the verification tier
    pub is_verified: bool,

    /// Owner user ID (the user who created the company, immutable)
    pub owner_id: Uuid,

    /// When the company was created
    pub created_at: DateTime<Utc>,

    /// When the company was last updated
    pub updated_at: DateTime<Utc>,

    /// Custom metadata for extensibility
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Company {
    /// Creates a new unverified company.
    ///
    /// The company is created with:
    /// - A newly generated UUID v7 ID
    /// - Unverified tier
    /// - Current timestamp for created_at and updated_at
    ///
    /// The caller is responsible for persisting the implicit OWNER
    /// membership for `owner_id` atomically with the company itself.
    ///
    /// # Arguments
    ///
    /// * `name` - The company name
    /// * `slug` - URL-friendly slug (must be unique)
    /// * `owner_id` - The user ID who owns this company
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use platform_company::Company;
    ///
    /// let owner_id = Uuid::now_v7();
    /// let company = Company::new("Acme Corp", "acme-corp", owner_id);
    /// ```
    pub fn new(name: impl Into<String>, slug: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            logo_url: None,
            website_url: None,
            verification_tier: VerificationTier::Unverified,
            verified_domain: None,
            is_verified: false,
            owner_id,
            created_at: now,
            updated_at: now,
            metadata: HashMap::new(),
        }
    }

    /// Check whether this company may post jobs.
    ///
    /// Posting is a hard business gate tied to the verification tier,
    /// independent of any actor's role.
    pub fn can_post_jobs(&self) -> bool {
        self.verification_tier.can_post_jobs()
    }

    /// Mark this company as domain-verified.
    ///
    /// The transition is monotonic: a second call with a different domain
    /// does not revert the tier but does update `verified_domain`.
    ///
    /// # Arguments
    ///
    /// * `domain` - The verified email domain (text after `@`)
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use platform_company::{Company, VerificationTier};
    ///
    /// let mut company = Company::new("Acme", "acme", Uuid::now_v7());
    /// company.mark_domain_verified("acme.com");
    /// assert_eq!(company.verification_tier, VerificationTier::DomainVerified);
    /// assert_eq!(company.verified_domain.as_deref(), Some("acme.com"));
    /// assert!(company.is_verified);
    /// ```
    pub fn mark_domain_verified(&mut self, domain: impl Into<String>) {
        self.verification_tier = VerificationTier::DomainVerified;
        self.verified_domain = Some(domain.into());
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Apply a field-level patch to this company.
    ///
    /// Only the fields present in the patch are overwritten. The slug and
    /// owner are immutable and cannot be patched.
    pub fn apply_patch(&mut self, patch: CompanyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(website_url) = patch.website_url {
            self.website_url = website_url;
        }
        self.updated_at = Utc::now();
    }
}

/// Field-level patch for updating a company.
///
/// Each field is optional; `None` leaves the current value untouched,
/// while `Some(None)` on a nullable field clears it. Input validation
/// happens before the patch reaches the lifecycle layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyPatch {
    /// New display name
    pub name: Option<String>,

    /// New description (`Some(None)` clears it)
    pub description: Option<Option<String>>,

    /// New website URL (`Some(None)` clears it)
    pub website_url: Option<Option<String>>,
}

/// Summary of a company for list displays.
///
/// This is a lightweight representation of a company that includes the
/// requesting user's role where relevant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySummary {
    /// Company ID
    pub id: Uuid,

    /// Company name
    pub name: String,

    /// Slug
    pub slug: String,

    /// Logo URL
    pub logo_url: Option<String>,

    /// Verification tier
    pub verification_tier: VerificationTier,

    /// User's role in this company
    pub user_role: CompanyRole,
}

impl CompanySummary {
    /// Build a summary of `company` as seen by a user holding `role`.
    pub fn for_role(company: &Company, role: CompanyRole) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            slug: company.slug.clone(),
            logo_url: company.logo_url.clone(),
            verification_tier: company.verification_tier,
            user_role: role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_creation() {
        let owner_id = Uuid::now_v7();
        let company = Company::new("Acme Corp", "acme-corp", owner_id);

        assert_eq!(company.name, "Acme Corp");
        assert_eq!(company.slug, "acme-corp");
        assert_eq!(company.owner_id, owner_id);
        assert_eq!(company.verification_tier, VerificationTier::Unverified);
        assert!(!company.is_verified);
        assert!(company.verified_domain.is_none());
    }

    #[test]
    fn test_unverified_company_cannot_post_jobs() {
        let company = Company::new("Acme", "acme", Uuid::now_v7());
        assert!(!company.can_post_jobs());
    }

    #[test]
    fn test_domain_verification_is_monotonic() {
        let mut company = Company::new("Acme", "acme", Uuid::now_v7());

        company.mark_domain_verified("acme.com");
        assert_eq!(company.verification_tier, VerificationTier::DomainVerified);
        assert_eq!(company.verified_domain.as_deref(), Some("acme.com"));
        assert!(company.can_post_jobs());

        // Re-verifying with a different domain keeps the tier but updates
        // the stored domain.
        company.mark_domain_verified("acme.io");
        assert_eq!(company.verification_tier, VerificationTier::DomainVerified);
        assert_eq!(company.verified_domain.as_deref(), Some("acme.io"));
        assert!(company.is_verified);
    }

    #[test]
    fn test_apply_patch() {
        let mut company = Company::new("Acme", "acme", Uuid::now_v7());
        company.description = Some("old".to_string());

        company.apply_patch(CompanyPatch {
            name: Some("Acme Corp".to_string()),
            description: Some(None),
            website_url: Some(Some("https://acme.com".to_string())),
        });

        assert_eq!(company.name, "Acme Corp");
        assert!(company.description.is_none());
        assert_eq!(company.website_url.as_deref(), Some("https://acme.com"));
        // The slug never changes through a patch.
        assert_eq!(company.slug, "acme");
    }
}
