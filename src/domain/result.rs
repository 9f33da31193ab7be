//! Result type alias for member-anon

use super::errors::AnonError;

/// Result type alias for member-anon operations
///
/// # Examples
///
/// ```
/// use member_anon::domain::result::Result;
/// use member_anon::domain::errors::AnonError;
///
/// fn failing_function() -> Result<()> {
///     Err(AnonError::Shape("members is not an object".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AnonError>;
