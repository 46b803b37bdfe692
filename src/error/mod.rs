//! Error types for the store.
//!
//! Every fallible operation returns [`Error`], whose [`kind()`](Error::kind)
//! distinguishes the five failure categories without string inspection:
//!
//! | ErrorKind       | Raised when                                        |
//! |-----------------|----------------------------------------------------|
//! | `AlreadyExists` | natural-key collision on create                    |
//! | `NotFound`      | update/patch addressed an unknown identifier       |
//! | `InvalidInput`  | a required field is missing on create              |
//! | `StorageIo`     | the snapshot file could not be read or written     |
//! | `Serialization` | the snapshot file is not valid JSON for the schema |
//!
//! ## Key Invariant
//!
//! Lookups signal absence with `Ok(None)`, not `Err`. Only operations that
//! must act on an existing entity (`update_*`, `patch_*`) fail with
//! [`ErrorKind::NotFound`].
//!
//! ```rust,ignore
//! // get_group() - absence is Ok(None)
//! let group = db.get_group("admins")?;
//!
//! // patch_group_roles() - absence is Err(NotFound)
//! db.patch_group_roles("missing", &["viewer"], &[])?;
//! ```

mod core;
mod kind;

pub use self::core::Error;
pub use kind::ErrorKind;

/// A specialized `Result` type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
