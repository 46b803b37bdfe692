//! Error kind enumeration for categorizing store errors.

/// Categorization of store errors.
///
/// This enum provides a stable interface for matching on error types, so a
/// REST layer in front of the store can choose a status code without looking
/// at error messages.
///
/// ## Caller Responsibility
///
/// | ErrorKind       | Caused by        | Action                          |
/// |-----------------|------------------|---------------------------------|
/// | `AlreadyExists` | Caller input     | Pick another name / email       |
/// | `NotFound`      | Caller input     | Entity doesn't exist            |
/// | `InvalidInput`  | Caller input     | Fix the request payload         |
/// | `StorageIo`     | Environment      | Check the snapshot file path    |
/// | `Serialization` | Snapshot content | Repair or reset the snapshot    |
///
/// The store never retries on its own. For `StorageIo` raised while
/// persisting, the change has been applied in memory for this process but
/// its durability is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An entity with the same natural key (name or email) already exists.
    ///
    /// HTTP: 400 Bad Request
    #[error("already exists")]
    AlreadyExists,

    /// The addressed entity identifier does not exist.
    ///
    /// HTTP: 404 Not Found
    #[error("not found")]
    NotFound,

    /// A required field is missing or empty.
    ///
    /// HTTP: 400 Bad Request
    #[error("invalid input")]
    InvalidInput,

    /// Reading or writing the snapshot file failed.
    ///
    /// HTTP: 500 Internal Server Error
    #[error("storage I/O error")]
    StorageIo,

    /// The snapshot could not be parsed or encoded.
    ///
    /// HTTP: 500 Internal Server Error
    #[error("serialization error")]
    Serialization,
}

impl ErrorKind {
    /// Returns `true` if the error was caused by the caller's input rather
    /// than by the storage environment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rebac_admin::ErrorKind;
    ///
    /// assert!(ErrorKind::AlreadyExists.is_client_error());
    /// assert!(!ErrorKind::StorageIo.is_client_error());
    /// ```
    #[inline]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::AlreadyExists | ErrorKind::NotFound | ErrorKind::InvalidInput
        )
    }

    /// Returns the default HTTP status code for this error kind.
    ///
    /// A natural-key collision is reported as a bad request, the same way the
    /// admin API reports any other rejected create payload.
    #[inline]
    pub fn http_status_code(&self) -> u16 {
        match self {
            ErrorKind::AlreadyExists | ErrorKind::InvalidInput => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::StorageIo | ErrorKind::Serialization => 500,
        }
    }
}
