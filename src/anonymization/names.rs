//! Synthetic name generation

use fake::faker::name::en::{FirstName, Name};
use fake::Fake;
use rand::Rng;

/// Which kind of name a replacement id gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// First and last name
    Full,
    /// First name only
    First,
}

impl NameKind {
    /// Even ids get a full name, odd ids a first name
    pub fn for_id(id: u32) -> Self {
        if id % 2 == 0 {
            NameKind::Full
        } else {
            NameKind::First
        }
    }
}

/// Generates a synthetic English name for the given replacement id
pub fn synthetic_name<R: Rng + ?Sized>(id: u32, rng: &mut R) -> String {
    match NameKind::for_id(id) {
        NameKind::Full => Name().fake_with_rng(rng),
        NameKind::First => FirstName().fake_with_rng(rng),
    }
}
