use announcement::AnnouncementError;

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// The record violates an invariant the composer relies on. Nothing is rendered.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("calendar conversion failed for {0}")]
    Calendar(String),

    #[error(transparent)]
    Announcement(#[from] AnnouncementError),
}

pub type ComposeResult<T> = std::result::Result<T, ComposeError>;
