//! Crate-wide result alias

use super::errors::ForgeError;

/// Shorthand for fallible export operations
///
/// Everything below the CLI returns this alias; `anyhow` only appears at
/// the binary boundary.
///
/// # Examples
///
/// ```
/// use iconforge::domain::result::Result;
/// use iconforge::domain::errors::ForgeError;
///
/// fn check_parallel_limit(limit: usize) -> Result<usize> {
///     if limit == 0 {
///         return Err(ForgeError::Configuration(
///             "parallel_icons must be at least 1".to_string(),
///         ));
///     }
///     Ok(limit)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ForgeError>;
