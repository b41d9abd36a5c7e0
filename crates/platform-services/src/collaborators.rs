//! External collaborator interfaces
//!
//! This module defines the non-repository collaborators the lifecycle
//! services consume: blob storage for logos and the topic resolver for
//! job tags. Both are shapes only; transport and storage details belong
//! to the implementations.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::repository::RepositoryResult;

/// Blob store error types.
#[derive(Debug, Error)]
pub enum BlobError {
    /// The referenced blob does not exist
    #[error("blob not found: {0}")]
    NotFound(String),

    /// The blob store itself failed
    #[error("blob store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for blob store operations.
pub type BlobResult<T> = Result<T, BlobError>;

/// Abstract blob storage for uploaded files (logos, resumes).
///
/// Callers own timeout policy; the core makes exactly the calls it
/// documents and never retries.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload `content` under `path`, returning the public URL.
    async fn upload(&self, content: Vec<u8>, path: &str) -> BlobResult<String>;

    /// Delete the blob behind `url`. Deleting an unknown URL is a no-op.
    async fn delete(&self, url: &str) -> BlobResult<()>;
}

/// Resolves topic tag names to IDs, creating missing topics on the fly.
#[async_trait]
pub trait TopicResolver: Send + Sync {
    /// Resolve `name` to a topic ID, creating the topic if it is new.
    async fn resolve_or_create(&self, name: &str) -> RepositoryResult<Uuid>;
}
