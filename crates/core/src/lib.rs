//! # HealthScope Core
//!
//! Core business logic for the HealthScope story catalog.
//!
//! This crate contains the content model and the pipeline around it:
//! - An append-only, newest-first story collection persisted wholesale to a
//!   single key-value slot ([`StoryStore`], [`persist`])
//! - Embed-markup rendering of story content into display segments
//!   ([`MarkupService`])
//! - The publication flow from raw form fields to a finished story
//!   ([`PublishService`])
//! - The editor content buffer and the (non-security) editor gate
//!
//! **No UI concerns**: presentational rendering, styling, and prompting belong
//! to the consumer (for example the `healthscope` CLI).

pub mod author;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod gate;
pub mod markup;
pub mod persist;
pub mod store;
pub mod story;

pub use author::{PublishService, StoryDraft, StoryIdGenerator};
pub use config::CoreConfig;
pub use editor::ContentBuffer;
pub use error::{StoryError, StoryResult};
pub use gate::EditorGate;
pub use markup::{MarkupService, MediaKind, Segment};
pub use persist::{FileSlot, KeyValueSlot, MemorySlot};
pub use store::StoryStore;
pub use story::{Category, CategoryFilter, Story, StoryId};
