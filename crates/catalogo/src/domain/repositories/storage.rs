use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    SerializeError(#[from] serde_json::Error),
    #[error("other error: {0}")]
    Other(String),
}

/// Synchronous string key-value store, the shape of browser local storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
