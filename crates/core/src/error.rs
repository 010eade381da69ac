//! Error types for the HealthScope core crate.

#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("a story with id '{0}' already exists")]
    DuplicateStoryId(String),
    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to read storage slot: {0}")]
    SlotRead(std::io::Error),
    #[error("failed to write storage slot: {0}")]
    SlotWrite(std::io::Error),
    #[error("failed to serialize stories: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize stories: {0}")]
    Deserialization(serde_json::Error),
    #[error("unknown category: '{0}'")]
    UnknownCategory(String),
}

pub type StoryResult<T> = std::result::Result<T, StoryError>;
