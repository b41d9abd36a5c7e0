//! Job application domain models
//!
//! This module provides the JobApplication entity and its status state
//! machine. Applications are unique per `(job_id, user_id)` pair and are
//! never deleted; only status transitions are allowed after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a job application.
///
/// `Pending` is the sole entry state. Further transitions are an open
/// extension point with a defined legal-transition table rather than a
/// free-text field:
///
/// ```text
/// Pending ──→ Reviewed ──→ Accepted
///                  └─────→ Rejected
/// ```
///
/// `Accepted` and `Rejected` are terminal.
///
/// # Examples
///
/// ```
/// use platform_jobs::ApplicationStatus;
///
/// assert!(ApplicationStatus::Pending.can_transition_to(ApplicationStatus::Reviewed));
/// assert!(!ApplicationStatus::Accepted.can_transition_to(ApplicationStatus::Pending));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Submitted, awaiting review
    Pending,

    /// Reviewed but not yet decided
    Reviewed,

    /// Accepted (terminal)
    Accepted,

    /// Rejected (terminal)
    Rejected,
}

impl ApplicationStatus {
    /// Check whether a transition to `next` is legal.
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Reviewed)
                | (Self::Reviewed, Self::Accepted)
                | (Self::Reviewed, Self::Rejected)
        )
    }

    /// Check whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Get string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A user's application to a job posting.
///
/// At most one application exists per `(job_id, user_id)` pair. The
/// storage layer enforces this as a hard constraint as the second line of
/// defense against races; lifecycle-level checks only provide a friendlier
/// error.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use platform_jobs::{ApplicationStatus, JobApplication};
///
/// let application = JobApplication::new(Uuid::now_v7(), Uuid::now_v7());
/// assert_eq!(application.status, ApplicationStatus::Pending);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    /// Unique identifier for the application
    pub id: Uuid,

    /// The job applied to
    pub job_id: Uuid,

    /// The applicant
    pub user_id: Uuid,

    /// Current status (starts at Pending)
    pub status: ApplicationStatus,

    /// Optional cover letter text
    pub cover_letter: Option<String>,

    /// Optional resume URL
    pub resume_url: Option<String>,

    /// When the application was submitted
    pub created_at: DateTime<Utc>,
}

impl JobApplication {
    /// Creates a new pending application.
    ///
    /// # Arguments
    ///
    /// * `job_id` - The job being applied to
    /// * `user_id` - The applicant
    pub fn new(job_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            job_id,
            user_id,
            status: ApplicationStatus::Pending,
            cover_letter: None,
            resume_url: None,
            created_at: Utc::now(),
        }
    }

    /// Set the cover letter.
    pub fn with_cover_letter(mut self, cover_letter: impl Into<String>) -> Self {
        self.cover_letter = Some(cover_letter.into());
        self
    }

    /// Set the resume URL.
    pub fn with_resume_url(mut self, resume_url: impl Into<String>) -> Self {
        self.resume_url = Some(resume_url.into());
        self
    }

    /// Attempt a status transition, returning whether it was applied.
    ///
    /// Illegal transitions leave the application untouched.
    pub fn transition_to(&mut self, next: ApplicationStatus) -> bool {
        if self.status.can_transition_to(next) {
            self.status = next;
            true
        } else {
            false
        }
    }
}
