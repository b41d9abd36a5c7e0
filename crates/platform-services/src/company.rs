//! Company lifecycle service
//!
//! This module owns creation, update, domain verification, logo handling,
//! and membership mutation for the company aggregate. Every mutating
//! operation loads current state, asks the authorization policy whether
//! the actor may act, and only then performs the mutation.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use platform_company::{
    slug, Company, CompanyPatch, CompanyRole, CompanySummary, Membership,
};
use platform_policy::rules;

use crate::collaborators::BlobStore;
use crate::error::{ServiceError, ServiceResult};
use crate::repository::CompanyRepository;

/// Characters used for random blob identifiers.
const BLOB_ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const BLOB_ID_LEN: usize = 16;

/// Input for creating a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompany {
    /// Company name; also the slug candidate
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional website URL
    pub website_url: Option<String>,
}

/// Membership mutation requested through [`CompanyService::manage_member`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum MemberAction {
    /// Add a new member; the role defaults to Member when unspecified
    Add { role: Option<CompanyRole> },

    /// Overwrite an existing member's role
    UpdateRole { role: CompanyRole },

    /// Remove a member (the owner can never be removed through this path)
    Remove,
}

/// Logo file handed to [`CompanyService::upload_logo`].
#[derive(Debug, Clone)]
pub struct LogoUpload {
    /// Raw file content
    pub content: Vec<u8>,

    /// File extension without the leading dot (e.g. "png")
    pub extension: String,
}

/// Lifecycle service for the company aggregate.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use platform_services::company::{CompanyService, CreateCompany};
/// use platform_services::memory::{MemoryBlobStore, MemoryCompanyStore};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), platform_services::ServiceError> {
/// let service = CompanyService::new(
///     Arc::new(MemoryCompanyStore::new()),
///     Arc::new(MemoryBlobStore::new()),
/// );
///
/// let founder = Uuid::now_v7();
/// let company = service
///     .create(founder, CreateCompany {
///         name: "Acme Corp".to_string(),
///         description: None,
///         website_url: None,
///     })
///     .await?;
/// assert_eq!(company.slug, "acme-corp");
/// # Ok(())
/// # }
/// ```
pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl CompanyService {
    /// Create a new company service over the given collaborators.
    pub fn new(companies: Arc<dyn CompanyRepository>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { companies, blobs }
    }

    /// Create a company owned by `actor_id`.
    ///
    /// The slug is allocated against the company namespace only; on
    /// collision a random suffix is appended. The company and the founding
    /// owner membership are persisted in one transaction, so neither can
    /// exist without the other. A missed double collision surfaces as
    /// [`ServiceError::Conflict`] from the store.
    pub async fn create(&self, actor_id: Uuid, input: CreateCompany) -> ServiceResult<Company> {
        let companies = Arc::clone(&self.companies);
        let slug = slug::allocate(&input.name, move |candidate| {
            let companies = Arc::clone(&companies);
            async move { matches!(companies.find_by_slug(&candidate).await, Ok(Some(_))) }
        })
        .await?;

        let mut company = Company::new(input.name, slug, actor_id);
        company.description = input.description;
        company.website_url = input.website_url;

        let owner_membership = Membership::founding_owner(company.id, actor_id);
        let company = self.companies.create(company, owner_membership).await?;

        debug!(company_id = %company.id, slug = %company.slug, owner = %actor_id, "company created");
        Ok(company)
    }

    /// Apply a field-level patch to a company.
    ///
    /// Requires company-management rights (owner only).
    pub async fn update(
        &self,
        actor_id: Uuid,
        company_id: Uuid,
        patch: CompanyPatch,
    ) -> ServiceResult<Company> {
        let mut company = self.load_company(company_id).await?;
        let membership = self.companies.find_member(company_id, actor_id).await?;

        if let Err(reason) = rules::can_manage_company(actor_id, &company, membership.as_ref()).require() {
            warn!(company_id = %company_id, actor = %actor_id, rule = reason.as_str(), "company update denied");
            return Err(reason.into());
        }

        company.apply_patch(patch);
        Ok(self.companies.update(company).await?)
    }

    /// Add, re-role, or remove a member.
    ///
    /// Requires membership-management rights (owner only; recruiters may
    /// not manage members). Removing the founding owner is rejected with
    /// [`ServiceError::InvalidOperation`] regardless of actor. Changing
    /// the owner's role is allowed but audited; blocking it is a product
    /// decision that has not been taken.
    ///
    /// Returns the resulting membership, or `None` for a removal.
    pub async fn manage_member(
        &self,
        actor_id: Uuid,
        company_id: Uuid,
        target_user_id: Uuid,
        action: MemberAction,
    ) -> ServiceResult<Option<Membership>> {
        let company = self.load_company(company_id).await?;
        let membership = self.companies.find_member(company_id, actor_id).await?;

        if let Err(reason) = rules::can_manage_members(actor_id, &company, membership.as_ref()).require() {
            warn!(company_id = %company_id, actor = %actor_id, rule = reason.as_str(), "member management denied");
            return Err(reason.into());
        }

        match action {
            MemberAction::Add { role } => {
                let role = role.unwrap_or_default();
                let membership =
                    Membership::new(company_id, target_user_id, role).with_adder(actor_id);
                let membership = self.companies.add_member(membership).await?;
                debug!(company_id = %company_id, user = %target_user_id, role = role.as_str(), "member added");
                Ok(Some(membership))
            }
            MemberAction::UpdateRole { role } => {
                if target_user_id == company.owner_id {
                    warn!(company_id = %company_id, actor = %actor_id, role = role.as_str(),
                        "owner membership role changed");
                }
                let membership = self
                    .companies
                    .update_member_role(company_id, target_user_id, role)
                    .await
                    .map_err(|err| match err {
                        crate::repository::RepositoryError::NotFound => {
                            ServiceError::not_found("membership")
                        }
                        other => other.into(),
                    })?;
                Ok(Some(membership))
            }
            MemberAction::Remove => {
                if target_user_id == company.owner_id {
                    return Err(ServiceError::InvalidOperation(
                        "the company owner cannot be removed".to_string(),
                    ));
                }
                self.companies
                    .remove_member(company_id, target_user_id)
                    .await
                    .map_err(|err| match err {
                        crate::repository::RepositoryError::NotFound => {
                            ServiceError::not_found("membership")
                        }
                        other => other.into(),
                    })?;
                debug!(company_id = %company_id, user = %target_user_id, "member removed");
                Ok(None)
            }
        }
    }

    /// Verify a company email domain and advance the verification tier.
    ///
    /// Authorized with the job-management policy (owner or recruiter),
    /// intentionally laxer than full company management. The domain is the
    /// text after `@`; a missing or empty domain fails with
    /// [`ServiceError::InvalidInput`]. The tier transition is monotonic: a
    /// later call with a different email keeps the tier and updates the
    /// stored domain.
    pub async fn verify_domain(
        &self,
        actor_id: Uuid,
        company_id: Uuid,
        email: &str,
    ) -> ServiceResult<Company> {
        let mut company = self.load_company(company_id).await?;
        let membership = self.companies.find_member(company_id, actor_id).await?;

        if let Err(reason) =
            rules::can_post_or_manage_jobs(actor_id, &company, membership.as_ref()).require()
        {
            warn!(company_id = %company_id, actor = %actor_id, rule = reason.as_str(), "domain verification denied");
            return Err(reason.into());
        }

        let domain = email
            .split_once('@')
            .map(|(_, domain)| domain.trim().to_lowercase())
            .filter(|domain| !domain.is_empty())
            .ok_or_else(|| {
                ServiceError::InvalidInput(format!("email {email:?} has no domain part"))
            })?;

        company.mark_domain_verified(domain);
        let company = self.companies.update(company).await?;

        debug!(company_id = %company_id, domain = ?company.verified_domain, "domain verified");
        Ok(company)
    }

    /// Upload a new logo, replacing any previous one.
    ///
    /// Authorized like [`Self::verify_domain`] (owner or recruiter). An
    /// existing logo blob is deleted before the new reference is
    /// persisted. The blob path is `companies/{date}/{random_id}.{ext}`;
    /// the identifier is random, so collisions are not checked.
    pub async fn upload_logo(
        &self,
        actor_id: Uuid,
        company_id: Uuid,
        upload: LogoUpload,
    ) -> ServiceResult<Company> {
        let mut company = self.load_company(company_id).await?;
        let membership = self.companies.find_member(company_id, actor_id).await?;

        if let Err(reason) =
            rules::can_post_or_manage_jobs(actor_id, &company, membership.as_ref()).require()
        {
            warn!(company_id = %company_id, actor = %actor_id, rule = reason.as_str(), "logo upload denied");
            return Err(reason.into());
        }

        let extension = upload.extension.trim_start_matches('.').to_lowercase();
        if extension.is_empty() {
            return Err(ServiceError::InvalidInput(
                "logo file has no extension".to_string(),
            ));
        }

        if let Some(old_url) = company.logo_url.take() {
            self.blobs.delete(&old_url).await?;
        }

        let path = format!(
            "companies/{}/{}.{}",
            Utc::now().format("%Y/%m/%d"),
            random_blob_id(),
            extension
        );
        let url = self.blobs.upload(upload.content, &path).await?;

        company.logo_url = Some(url);
        company.updated_at = Utc::now();
        Ok(self.companies.update(company).await?)
    }

    /// Remove the company logo, deleting the underlying blob.
    ///
    /// Authorized like [`Self::verify_domain`] (owner or recruiter).
    pub async fn remove_logo(&self, actor_id: Uuid, company_id: Uuid) -> ServiceResult<Company> {
        let mut company = self.load_company(company_id).await?;
        let membership = self.companies.find_member(company_id, actor_id).await?;

        if let Err(reason) =
            rules::can_post_or_manage_jobs(actor_id, &company, membership.as_ref()).require()
        {
            warn!(company_id = %company_id, actor = %actor_id, rule = reason.as_str(), "logo removal denied");
            return Err(reason.into());
        }

        if let Some(old_url) = company.logo_url.take() {
            self.blobs.delete(&old_url).await?;
            company.updated_at = Utc::now();
        }

        Ok(self.companies.update(company).await?)
    }

    /// List the companies a user manages, as lightweight summaries.
    pub async fn list_managed_by(&self, user_id: Uuid) -> ServiceResult<Vec<CompanySummary>> {
        let managed = self.companies.find_companies_managed_by(user_id).await?;
        Ok(managed
            .iter()
            .map(|(company, role)| CompanySummary::for_role(company, *role))
            .collect())
    }

    async fn load_company(&self, company_id: Uuid) -> ServiceResult<Company> {
        self.companies
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("company"))
    }
}

/// Generate a 16-character lowercase alphanumeric blob identifier.
fn random_blob_id() -> String {
    let mut rng = rand::thread_rng();
    (0..BLOB_ID_LEN)
        .map(|_| BLOB_ID_CHARSET[rng.gen_range(0..BLOB_ID_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_blob_id_shape() {
        let id = random_blob_id();
        assert_eq!(id.len(), BLOB_ID_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
