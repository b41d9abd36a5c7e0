//! # Policy decisions
//!
//! Core decision types for the authorization policy. Every rule evaluates
//! to a [`PolicyDecision`]; denials carry the specific rule that failed so
//! forbidden errors stay auditable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The rule that caused an authorization denial.
///
/// Each variant names one authoritative rule. Lifecycle services embed the
/// reason in their forbidden errors so callers can log and render it
/// without re-deriving the rule.
///
/// # Examples
///
/// ```
/// use platform_policy::DenialReason;
///
/// let reason = DenialReason::CannotManageMembers;
/// assert_eq!(reason.as_str(), "CANNOT_MANAGE_MEMBERS");
/// assert_eq!(reason.to_string(), "only the company owner may manage members");
/// ```
#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Company management requires ownership
    #[error("only the company owner may manage the company")]
    NotCompanyOwner,

    /// Job management requires owner or recruiter role
    #[error("only the company owner or a recruiter may post or manage jobs")]
    CannotManageJobs,

    /// Membership management requires ownership (stricter than job management)
    #[error("only the company owner may manage members")]
    CannotManageMembers,

    /// The job author may not apply to their own posting
    #[error("the job author cannot apply to their own job")]
    OwnJobApplication,

    /// Company staff may not apply to their company's postings
    #[error("company owners and recruiters cannot apply to jobs at their own company")]
    CompanyStaffApplication,

    /// Viewing applications requires authorship or job-management rights
    #[error("only the job author or company job managers may view applications")]
    CannotViewApplications,

    /// Job posting requires a domain-verified company, regardless of role
    #[error("the company must be domain-verified before jobs can be posted")]
    CompanyUnverified,
}

impl DenialReason {
    /// Get the stable rule code for API responses and audit logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotCompanyOwner => "NOT_COMPANY_OWNER",
            Self::CannotManageJobs => "CANNOT_MANAGE_JOBS",
            Self::CannotManageMembers => "CANNOT_MANAGE_MEMBERS",
            Self::OwnJobApplication => "OWN_JOB_APPLICATION",
            Self::CompanyStaffApplication => "COMPANY_STAFF_APPLICATION",
            Self::CannotViewApplications => "CANNOT_VIEW_APPLICATIONS",
            Self::CompanyUnverified => "COMPANY_UNVERIFIED",
        }
    }
}

/// Outcome of a policy evaluation.
///
/// # Examples
///
/// ```
/// use platform_policy::{DenialReason, PolicyDecision};
///
/// let decision = PolicyDecision::Deny(DenialReason::CannotManageJobs);
/// assert!(!decision.is_allowed());
/// assert_eq!(decision.require(), Err(DenialReason::CannotManageJobs));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyDecision {
    /// The actor may perform the action
    Allow,

    /// The actor may not perform the action, for the stated rule
    Deny(DenialReason),
}

impl PolicyDecision {
    /// Check whether the decision permits the action.
    pub fn is_allowed(&self) -> bool {
        matches!(self, PolicyDecision::Allow)
    }

    /// Convert the decision into a result, surfacing the failed rule.
    pub fn require(self) -> Result<(), DenialReason> {
        match self {
            PolicyDecision::Allow => Ok(()),
            PolicyDecision::Deny(reason) => Err(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_decision() {
        assert!(PolicyDecision::Allow.is_allowed());
        assert_eq!(PolicyDecision::Allow.require(), Ok(()));
    }

    #[test]
    fn test_deny_decision_carries_reason() {
        let decision = PolicyDecision::Deny(DenialReason::OwnJobApplication);
        assert!(!decision.is_allowed());
        assert_eq!(decision.require(), Err(DenialReason::OwnJobApplication));
    }

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(DenialReason::NotCompanyOwner.as_str(), "NOT_COMPANY_OWNER");
        assert_eq!(
            DenialReason::CompanyUnverified.as_str(),
            "COMPANY_UNVERIFIED"
        );
    }
}
