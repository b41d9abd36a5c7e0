//! # Authorization rules
//!
//! The authoritative decision functions gating every mutating operation on
//! companies, jobs, and applications. Each function is pure: it takes
//! already-loaded aggregates, performs no I/O, and is trivially unit
//! testable with literal fixtures.
//!
//! A missing membership is treated as the member-equivalent everywhere
//! (no elevated rights), never as an error.

use uuid::Uuid;

use platform_company::{Company, CompanyRole, Membership};
use platform_jobs::Job;

use crate::decision::{DenialReason, PolicyDecision};

/// Resolve the effective role of an actor given an optional membership.
///
/// No membership means no elevated rights, i.e. the default Member role.
fn effective_role(membership: Option<&Membership>) -> CompanyRole {
    membership.map(|m| m.role).unwrap_or_default()
}

/// May `actor_id` manage the company itself (profile, settings)?
///
/// Allowed for the founding owner (`company.owner_id`) or a member holding
/// the Owner role.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use platform_company::Company;
/// use platform_policy::rules;
///
/// let owner_id = Uuid::now_v7();
/// let company = Company::new("Acme", "acme", owner_id);
///
/// assert!(rules::can_manage_company(owner_id, &company, None).is_allowed());
/// assert!(!rules::can_manage_company(Uuid::now_v7(), &company, None).is_allowed());
/// ```
pub fn can_manage_company(
    actor_id: Uuid,
    company: &Company,
    membership: Option<&Membership>,
) -> PolicyDecision {
    if actor_id == company.owner_id || effective_role(membership).can_manage_company() {
        PolicyDecision::Allow
    } else {
        PolicyDecision::Deny(DenialReason::NotCompanyOwner)
    }
}

/// May `actor_id` post and manage jobs for the company?
///
/// Allowed for the founding owner or a member holding the Owner or
/// Recruiter role. Intentionally laxer than [`can_manage_company`].
pub fn can_post_or_manage_jobs(
    actor_id: Uuid,
    company: &Company,
    membership: Option<&Membership>,
) -> PolicyDecision {
    if actor_id == company.owner_id || effective_role(membership).can_post_jobs() {
        PolicyDecision::Allow
    } else {
        PolicyDecision::Deny(DenialReason::CannotManageJobs)
    }
}

/// May `actor_id` manage company members?
///
/// Allowed for the founding owner or a member holding the Owner role.
/// Stricter than job management: recruiters may not manage members.
pub fn can_manage_members(
    actor_id: Uuid,
    company: &Company,
    membership: Option<&Membership>,
) -> PolicyDecision {
    if actor_id == company.owner_id || effective_role(membership).can_manage_members() {
        PolicyDecision::Allow
    } else {
        PolicyDecision::Deny(DenialReason::CannotManageMembers)
    }
}

/// May `actor_id` apply to the job?
///
/// Anti-self-dealing rules:
/// - the job author may not apply to their own posting
/// - when the owning company is known, its founding owner and any member
///   holding the Owner or Recruiter role may not apply either
///
/// Everyone else may apply.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use platform_company::Company;
/// use platform_jobs::Job;
/// use platform_policy::rules;
///
/// let owner_id = Uuid::now_v7();
/// let company = Company::new("Acme", "acme", owner_id);
/// let job = Job::new(company.id, owner_id, "Engineer", "engineer");
///
/// let outsider = Uuid::now_v7();
/// assert!(rules::can_apply_to_job(outsider, &job, Some(&company), None).is_allowed());
/// assert!(!rules::can_apply_to_job(owner_id, &job, Some(&company), None).is_allowed());
/// ```
pub fn can_apply_to_job(
    actor_id: Uuid,
    job: &Job,
    company: Option<&Company>,
    membership: Option<&Membership>,
) -> PolicyDecision {
    if actor_id == job.author_id {
        return PolicyDecision::Deny(DenialReason::OwnJobApplication);
    }

    if let Some(company) = company {
        if actor_id == company.owner_id || effective_role(membership).can_post_jobs() {
            return PolicyDecision::Deny(DenialReason::CompanyStaffApplication);
        }
    }

    PolicyDecision::Allow
}

/// May `actor_id` view the applications submitted to the job?
///
/// Allowed for the job author, or for anyone with job-management rights on
/// the owning company when it is known.
pub fn can_view_job_applications(
    actor_id: Uuid,
    job: &Job,
    company: Option<&Company>,
    membership: Option<&Membership>,
) -> PolicyDecision {
    if actor_id == job.author_id {
        return PolicyDecision::Allow;
    }

    if let Some(company) = company {
        if can_post_or_manage_jobs(actor_id, company, membership).is_allowed() {
            return PolicyDecision::Allow;
        }
    }

    PolicyDecision::Deny(DenialReason::CannotViewApplications)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Uuid, Company) {
        let owner_id = Uuid::now_v7();
        let company = Company::new("Acme", "acme", owner_id);
        (owner_id, company)
    }

    fn member(company: &Company, role: CompanyRole) -> Membership {
        Membership::new(company.id, Uuid::now_v7(), role)
    }

    #[test]
    fn test_owner_id_always_manages_company() {
        let (owner_id, company) = fixture();
        assert!(can_manage_company(owner_id, &company, None).is_allowed());
    }

    #[test]
    fn test_owner_role_manages_company() {
        let (_, company) = fixture();
        let membership = member(&company, CompanyRole::Owner);
        assert!(can_manage_company(membership.user_id, &company, Some(&membership)).is_allowed());
    }

    #[test]
    fn test_recruiter_cannot_manage_company() {
        let (_, company) = fixture();
        let membership = member(&company, CompanyRole::Recruiter);
        assert_eq!(
            can_manage_company(membership.user_id, &company, Some(&membership)),
            PolicyDecision::Deny(DenialReason::NotCompanyOwner)
        );
    }

    #[test]
    fn test_missing_membership_has_no_elevated_rights() {
        let (_, company) = fixture();
        let stranger = Uuid::now_v7();

        assert!(!can_manage_company(stranger, &company, None).is_allowed());
        assert!(!can_post_or_manage_jobs(stranger, &company, None).is_allowed());
        assert!(!can_manage_members(stranger, &company, None).is_allowed());
    }

    #[test]
    fn test_recruiter_manages_jobs_but_not_members() {
        let (_, company) = fixture();
        let membership = member(&company, CompanyRole::Recruiter);

        assert!(
            can_post_or_manage_jobs(membership.user_id, &company, Some(&membership)).is_allowed()
        );
        assert_eq!(
            can_manage_members(membership.user_id, &company, Some(&membership)),
            PolicyDecision::Deny(DenialReason::CannotManageMembers)
        );
    }

    #[test]
    fn test_plain_member_cannot_manage_jobs() {
        let (_, company) = fixture();
        let membership = member(&company, CompanyRole::Member);
        assert_eq!(
            can_post_or_manage_jobs(membership.user_id, &company, Some(&membership)),
            PolicyDecision::Deny(DenialReason::CannotManageJobs)
        );
    }

    #[test]
    fn test_author_cannot_apply_to_own_job() {
        let (owner_id, company) = fixture();
        let job = Job::new(company.id, owner_id, "Engineer", "engineer");

        assert_eq!(
            can_apply_to_job(owner_id, &job, Some(&company), None),
            PolicyDecision::Deny(DenialReason::OwnJobApplication)
        );
    }

    #[test]
    fn test_company_staff_cannot_apply() {
        let (owner_id, company) = fixture();
        let author = Uuid::now_v7();
        let job = Job::new(company.id, author, "Engineer", "engineer");

        // The founding owner is staff even without an explicit membership.
        assert_eq!(
            can_apply_to_job(owner_id, &job, Some(&company), None),
            PolicyDecision::Deny(DenialReason::CompanyStaffApplication)
        );

        let recruiter = member(&company, CompanyRole::Recruiter);
        assert_eq!(
            can_apply_to_job(recruiter.user_id, &job, Some(&company), Some(&recruiter)),
            PolicyDecision::Deny(DenialReason::CompanyStaffApplication)
        );
    }

    #[test]
    fn test_plain_member_and_outsider_may_apply() {
        let (_, company) = fixture();
        let job = Job::new(company.id, Uuid::now_v7(), "Engineer", "engineer");

        let outsider = Uuid::now_v7();
        assert!(can_apply_to_job(outsider, &job, Some(&company), None).is_allowed());

        let membership = member(&company, CompanyRole::Member);
        assert!(
            can_apply_to_job(membership.user_id, &job, Some(&company), Some(&membership))
                .is_allowed()
        );
    }

    #[test]
    fn test_apply_without_company_context() {
        let job = Job::new(Uuid::now_v7(), Uuid::now_v7(), "Engineer", "engineer");
        let applicant = Uuid::now_v7();
        assert!(can_apply_to_job(applicant, &job, None, None).is_allowed());
    }

    #[test]
    fn test_view_applications_author_and_managers() {
        let (owner_id, company) = fixture();
        let author = Uuid::now_v7();
        let job = Job::new(company.id, author, "Engineer", "engineer");

        assert!(can_view_job_applications(author, &job, Some(&company), None).is_allowed());
        assert!(can_view_job_applications(owner_id, &job, Some(&company), None).is_allowed());

        let recruiter = member(&company, CompanyRole::Recruiter);
        assert!(can_view_job_applications(
            recruiter.user_id,
            &job,
            Some(&company),
            Some(&recruiter)
        )
        .is_allowed());

        let outsider = Uuid::now_v7();
        assert_eq!(
            can_view_job_applications(outsider, &job, Some(&company), None),
            PolicyDecision::Deny(DenialReason::CannotViewApplications)
        );
    }
}
