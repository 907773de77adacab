use crate::id::LocationId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or loading a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The content document could not be parsed.
    #[error("invalid world content: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two locations share the same id.
    #[error("duplicate location id: \"{0}\"")]
    DuplicateLocation(LocationId),

    /// The declared start location is not defined.
    #[error("start location \"{0}\" is not defined")]
    UnknownStart(LocationId),

    /// A location id could not be resolved.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),
}
