use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or assembling a world.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The map file could not be read.
    #[error("could not read map file {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The map file is not valid JSON or is missing required fields.
    #[error("invalid map file: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is neither a room array nor a map object.
    #[error("invalid map file: expected an array of rooms or an object with a \"rooms\" array")]
    UnexpectedShape,

    /// The map declares no rooms at all.
    #[error("map contains no rooms")]
    EmptyMap,

    /// Two rooms share the same name.
    #[error("duplicate room name: \"{0}\"")]
    DuplicateRoom(String),

    /// An exit points at a room that does not exist.
    #[error("room \"{room}\" has exit \"{direction}\" leading to unknown room {target}")]
    DanglingExit {
        /// Room declaring the exit.
        room: String,
        /// Direction of the exit.
        direction: String,
        /// The unresolved target, as written in the map.
        target: String,
    },

    /// The requested start room does not exist.
    #[error("start room not found: \"{0}\"")]
    UnknownStartRoom(String),

    /// A room declares both a `lock` and a legacy `pointstoenter` field.
    #[error("room \"{0}\" declares both `lock` and `pointstoenter`")]
    ConflictingLocks(String),
}
