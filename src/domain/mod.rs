//! Domain models and types for member-anon.
//!
//! The domain layer provides:
//! - **Document model** ([`Document`], [`Member`]) with up-front shape checks
//! - **Error type** ([`AnonError`])
//! - **Result type alias** ([`Result`])
//!
//! ```rust
//! use member_anon::domain::Document;
//!
//! # fn example() -> member_anon::domain::Result<()> {
//! let doc = Document::from_json_str(r#"{"members": {"a": {"id": 1, "name": "X"}}}"#)?;
//! assert_eq!(doc.member_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod errors;
pub mod result;

pub use document::{Document, Member, ID_FIELD, MEMBERS_KEY, NAME_FIELD};
pub use errors::AnonError;
pub use result::Result;
