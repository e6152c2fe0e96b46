use thiserror::Error;

/// Error returned by a champion data collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to retrieve champion role statistics")]
    RoleStatsRetrieval(#[source] BoxError),
    #[error("failed to retrieve champion directory")]
    DirectoryRetrieval(#[source] BoxError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
