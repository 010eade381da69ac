//! Constants used throughout the HealthScope core crate.
//!
//! This module contains all storage-key, default-value, and formatting constants
//! to ensure consistency across the codebase and make maintenance easier.

/// Storage-slot key under which the full story collection is persisted.
///
/// The key is part of the persisted-data contract: collections written under it
/// by earlier deployments must keep loading unchanged.
pub const STORAGE_KEY: &str = "healthscope_stories";

/// Default directory for story data storage when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "healthscope_data";

/// Default passphrase for the editor gate when no explicit passphrase is configured.
pub const DEFAULT_EDITOR_PASSPHRASE: &str = "rwq234";

/// Author credited on a story published without an author name.
pub const DEFAULT_AUTHOR: &str = "HealthScope Contributor";

/// Read-time label applied to a story published without one.
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// Number of leading title characters used to derive a missing excerpt.
pub const EXCERPT_PREVIEW_CHARS: usize = 100;

/// Base URL for generated cover images; the story id is appended as the seed.
pub const COVER_IMAGE_URL_BASE: &str = "https://picsum.photos/seed";

/// Publication date format: short month, unpadded day, full year (e.g. `Aug 5, 2026`).
pub const PUBLICATION_DATE_FORMAT: &str = "%b %-d, %Y";
