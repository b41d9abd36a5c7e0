//! Company role definitions
//!
//! This module defines the fixed role set a user can hold within a company,
//! along with the capability checks associated with each role.

use serde::{Deserialize, Serialize};

/// User role within a company.
///
/// Roles are hierarchical, with each role inheriting the capabilities of
/// lower roles. The hierarchy is: Member < Recruiter < Owner. The role set
/// is fixed and small by design; there are no custom roles.
///
/// # Capability Model
///
/// - **Member**: Plain affiliation, no elevated rights
/// - **Recruiter**: Can post and manage job listings
/// - **Owner**: Full company control including membership management
///
/// # Examples
///
/// ```
/// use platform_company::CompanyRole;
///
/// let role = CompanyRole::Recruiter;
/// assert!(role.can_post_jobs());
/// assert!(!role.can_manage_members());
///
/// let owner = CompanyRole::Owner;
/// assert!(owner.can_manage_members());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CompanyRole {
    /// Plain affiliation with no elevated rights
    Member = 1,

    /// Can post and manage job listings
    Recruiter = 2,

    /// Full company control
    Owner = 3,
}

impl CompanyRole {
    /// Check if this role can post and manage job listings.
    ///
    /// # Returns
    ///
    /// `true` for Recruiter and Owner roles
    pub fn can_post_jobs(&self) -> bool {
        *self >= CompanyRole::Recruiter
    }

    /// Check if this role can manage company members.
    ///
    /// This includes adding, removing, and changing member roles.
    /// Recruiters may post jobs but may not manage members.
    ///
    /// # Returns
    ///
    /// `true` only for the Owner role
    pub fn can_manage_members(&self) -> bool {
        *self >= CompanyRole::Owner
    }

    /// Check if this role can manage the company itself.
    ///
    /// This includes editing the company profile and settings.
    ///
    /// # Returns
    ///
    /// `true` only for the Owner role
    pub fn can_manage_company(&self) -> bool {
        *self >= CompanyRole::Owner
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(CompanyRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use platform_company::CompanyRole;
    ///
    /// assert_eq!(CompanyRole::parse("recruiter"), Some(CompanyRole::Recruiter));
    /// assert_eq!(CompanyRole::parse("OWNER"), Some(CompanyRole::Owner));
    /// assert_eq!(CompanyRole::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "member" => Some(Self::Member),
            "recruiter" => Some(Self::Recruiter),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use platform_company::CompanyRole;
    ///
    /// assert_eq!(CompanyRole::Recruiter.as_str(), "recruiter");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Recruiter => "recruiter",
            Self::Owner => "owner",
        }
    }

    /// Get a human-readable display name for the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use platform_company::CompanyRole;
    ///
    /// assert_eq!(CompanyRole::Owner.display_name(), "Owner");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Recruiter => "Recruiter",
            Self::Owner => "Owner",
        }
    }
}

impl Default for CompanyRole {
    fn default() -> Self {
        Self::Member
    }
}
