//! Job posting domain models
//!
//! This module provides the Job entity: a posting owned by a company and
//! authored by one of its members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job posting owned by a company.
///
/// A job always references an existing company at creation time, and
/// `company_id` is immutable after creation. The author may differ from
/// the company owner (e.g., a recruiter) and retains mutation rights over
/// the posting even if later demoted.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use platform_jobs::Job;
///
/// let company_id = Uuid::now_v7();
/// let author_id = Uuid::now_v7();
/// let job = Job::new(company_id, author_id, "Senior Rust Engineer", "senior-rust-engineer");
/// assert!(job.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier for the job
    pub id: Uuid,

    /// URL-friendly slug (unique across all jobs)
    pub slug: String,

    /// Owning company (immutable after creation)
    pub company_id: Uuid,

    /// The user who created the posting
    pub author_id: Uuid,

    /// Job title
    pub title: String,

    /// Job description
    pub description: Option<String>,

    /// Compensation description (free-form, e.g. a range)
    pub compensation: Option<String>,

    /// Topic tags resolved through the topic resolver
    #[serde(default)]
    pub topic_ids: Vec<Uuid>,

    /// Whether the posting is open for applications
    pub is_active: bool,

    /// When the job was created
    pub created_at: DateTime<Utc>,

    /// When the job was last updated
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Creates a new active job posting.
    ///
    /// The job is created with:
    /// - A newly generated UUID v7 ID
    /// - Active status
    /// - Current timestamp for created_at and updated_at
    ///
    /// # Arguments
    ///
    /// * `company_id` - The owning company
    /// * `author_id` - The user creating the posting
    /// * `title` - Job title
    /// * `slug` - URL-friendly slug (must be unique among jobs)
    pub fn new(
        company_id: Uuid,
        author_id: Uuid,
        title: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            slug: slug.into(),
            company_id,
            author_id,
            title: title.into(),
            description: None,
            compensation: None,
            topic_ids: Vec::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the job description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the compensation description.
    pub fn with_compensation(mut self, compensation: impl Into<String>) -> Self {
        self.compensation = Some(compensation.into());
        self
    }

    /// Set the resolved topic tags.
    pub fn with_topics(mut self, topic_ids: Vec<Uuid>) -> Self {
        self.topic_ids = topic_ids;
        self
    }

    /// Apply a field-level patch to this job.
    ///
    /// Only the fields present in the patch are overwritten. The slug,
    /// company, and author are immutable and cannot be patched.
    pub fn apply_patch(&mut self, patch: JobPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(compensation) = patch.compensation {
            self.compensation = compensation;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }
}

/// Field-level patch for updating a job.
///
/// Each field is optional; `None` leaves the current value untouched,
/// while `Some(None)` on a nullable field clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPatch {
    /// New title
    pub title: Option<String>,

    /// New description (`Some(None)` clears it)
    pub description: Option<Option<String>>,

    /// New compensation description (`Some(None)` clears it)
    pub compensation: Option<Option<String>>,

    /// Open or close the posting
    pub is_active: Option<bool>,
}

/// Filter for job listings.
///
/// All criteria are optional and combine conjunctively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFilter {
    /// Restrict to a single company
    pub company_id: Option<Uuid>,

    /// Only return active postings
    pub active_only: bool,

    /// Case-insensitive substring match on the title
    pub title_contains: Option<String>,
}

impl JobFilter {
    /// Check whether `job` satisfies this filter.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(company_id) = self.company_id {
            if job.company_id != company_id {
                return false;
            }
        }
        if self.active_only && !job.is_active {
            return false;
        }
        if let Some(ref needle) = self.title_contains {
            if !job
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_creation() {
        let company_id = Uuid::now_v7();
        let author_id = Uuid::now_v7();
        let job = Job::new(company_id, author_id, "Senior Rust Engineer", "senior-rust-engineer")
            .with_description("Build the platform core")
            .with_compensation("$150k-$190k");

        assert_eq!(job.company_id, company_id);
        assert_eq!(job.author_id, author_id);
        assert!(job.is_active);
        assert_eq!(job.description.as_deref(), Some("Build the platform core"));
    }

    #[test]
    fn test_apply_patch() {
        let mut job = Job::new(Uuid::now_v7(), Uuid::now_v7(), "Engineer", "engineer");

        job.apply_patch(JobPatch {
            title: Some("Staff Engineer".to_string()),
            description: None,
            compensation: Some(Some("$200k".to_string())),
            is_active: Some(false),
        });

        assert_eq!(job.title, "Staff Engineer");
        assert_eq!(job.compensation.as_deref(), Some("$200k"));
        assert!(!job.is_active);
        assert_eq!(job.slug, "engineer");
    }

    #[test]
    fn test_filter_matches() {
        let company_id = Uuid::now_v7();
        let mut job = Job::new(company_id, Uuid::now_v7(), "Senior Rust Engineer", "sre");

        let filter = JobFilter {
            company_id: Some(company_id),
            active_only: true,
            title_contains: Some("rust".to_string()),
        };
        assert!(filter.matches(&job));

        job.is_active = false;
        assert!(!filter.matches(&job));

        let other_company = JobFilter {
            company_id: Some(Uuid::now_v7()),
            ..Default::default()
        };
        assert!(!other_company.matches(&job));
    }
}
