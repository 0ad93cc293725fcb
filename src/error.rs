use thiserror::Error;

/// Fatal failure of a whole tick.
///
/// Everything else that can go wrong during a tick is recorded in the
/// [`TickReport`](crate::TickReport) and logged, never returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TickError {
    /// The time zone database has no entries at all, so no identifier can
    /// ever resolve.
    #[error("time zone database is unavailable: {message}")]
    DatabaseUnavailable { message: String },
}

impl TickError {
    pub fn database_unavailable(message: impl Into<String>) -> Self {
        Self::DatabaseUnavailable {
            message: message.into(),
        }
    }
}

/// A notification could not be handed to the receiving endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DispatchError {
    #[error("request to notification endpoint failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("notification endpoint rejected the request with status {status}")]
    Status { status: u16 },
}

/// Invalid matcher or notifier settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("window width must be between 1 and 60 minutes, got {0}")]
    WindowWidth(u8),

    #[error("trigger hour must be between 0 and 23, got {0}")]
    Hour(u8),

    #[error("invalid notification endpoint '{endpoint}': {message}")]
    Endpoint { endpoint: String, message: String },

    #[error("cannot build HTTP client: {0}")]
    Client(String),
}

/// Invalid custom zone table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("zone group label '{0}' appears more than once")]
    DuplicateLabel(String),

    #[error("zone group label must not be empty")]
    EmptyLabel,
}
