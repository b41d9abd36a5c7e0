//! Slug allocation
//!
//! This module turns entity names into URL-safe unique identifiers.
//! Normalization produces a lowercase, hyphenated, ASCII-safe token; on
//! collision a short random suffix is appended.
//!
//! Allocation is best-effort: the suffixed candidate is not re-checked for
//! a second collision. The storage layer's uniqueness constraint remains
//! the authority, and a missed double collision surfaces as a conflict from
//! the persistence call rather than being retried here. Company slugs and
//! job slugs live in separate namespaces; the caller supplies the existence
//! check scoped to the right one.

use std::future::Future;

use rand::Rng;
use thiserror::Error;

/// Length of the random collision suffix.
const SUFFIX_LEN: usize = 5;

/// Characters used for the collision suffix.
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Slug allocation error types.
#[derive(Debug, Error)]
pub enum SlugError {
    /// The candidate name normalizes to an empty slug
    #[error("name {0:?} normalizes to an empty slug")]
    EmptyName(String),
}

/// Normalize a candidate name into a lowercase, hyphenated, ASCII slug.
///
/// Non-ASCII and non-alphanumeric characters are dropped, runs of
/// separators collapse to a single hyphen, and leading/trailing hyphens
/// are trimmed.
///
/// # Errors
///
/// Returns [`SlugError::EmptyName`] if nothing survives normalization.
///
/// # Examples
///
/// ```
/// use platform_company::slug;
///
/// assert_eq!(slug::normalize("Acme Corp").unwrap(), "acme-corp");
/// assert_eq!(slug::normalize("  Rust -- Jobs!  ").unwrap(), "rust-jobs");
/// assert!(slug::normalize("???").is_err());
/// ```
pub fn normalize(name: &str) -> Result<String, SlugError> {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        return Err(SlugError::EmptyName(name.to_string()));
    }

    Ok(slug)
}

/// Allocate a slug for `name`, resolving a collision with a random suffix.
///
/// The `exists` callback answers whether a candidate slug is already taken
/// in the target namespace (company and job slugs are separate namespaces).
/// When the normalized name collides, a 5-character lowercase alphanumeric
/// suffix is appended and the result is returned **without** a second
/// existence check; the store's uniqueness constraint is the final
/// authority and callers own any retry.
///
/// # Errors
///
/// Returns [`SlugError::EmptyName`] if `name` normalizes to nothing.
///
/// # Examples
///
/// ```
/// use platform_company::slug;
///
/// # async fn example() -> Result<(), slug::SlugError> {
/// let slug = slug::allocate("Acme Corp", |_| async { false }).await?;
/// assert_eq!(slug, "acme-corp");
/// # Ok(())
/// # }
/// ```
pub async fn allocate<F, Fut>(name: &str, exists: F) -> Result<String, SlugError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = bool>,
{
    let base = normalize(name)?;

    if exists(base.clone()).await {
        return Ok(format!("{}-{}", base, random_suffix()));
    }

    Ok(base)
}

/// Generate a 5-character lowercase alphanumeric suffix.
fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("Acme Corp").unwrap(), "acme-corp");
        assert_eq!(normalize("acme").unwrap(), "acme");
        assert_eq!(normalize("Senior Rust Engineer (Remote)").unwrap(),
            "senior-rust-engineer-remote");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("a  --  b").unwrap(), "a-b");
        assert_eq!(normalize("--edge--").unwrap(), "edge");
    }

    #[test]
    fn test_normalize_drops_non_ascii() {
        assert_eq!(normalize("Café Münchén 42").unwrap(), "caf-mnchn-42");
    }

    #[test]
    fn test_normalize_empty_name_fails() {
        assert!(matches!(normalize(""), Err(SlugError::EmptyName(_))));
        assert!(matches!(normalize("   "), Err(SlugError::EmptyName(_))));
        assert!(matches!(normalize("!!!"), Err(SlugError::EmptyName(_))));
    }

    #[tokio::test]
    async fn test_allocate_without_collision() {
        let slug = allocate("Acme Corp", |_| async { false }).await.unwrap();
        assert_eq!(slug, "acme-corp");
    }

    #[tokio::test]
    async fn test_allocate_with_collision_appends_suffix() {
        let slug = allocate("Acme Corp", |_| async { true }).await.unwrap();

        assert_ne!(slug, "acme-corp");
        assert!(slug.starts_with("acme-corp-"));

        let suffix = slug.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_allocate_empty_name_fails_fast() {
        let called = std::sync::atomic::AtomicBool::new(false);
        let result = allocate(" !! ", |_| {
            called.store(true, std::sync::atomic::Ordering::SeqCst);
            async { false }
        })
        .await;

        assert!(matches!(result, Err(SlugError::EmptyName(_))));
        assert!(!called.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn test_random_suffix_shape() {
        for _ in 0..32 {
            let suffix = random_suffix();
            assert_eq!(suffix.len(), SUFFIX_LEN);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}
