use serde::{Deserialize, Serialize};

/// Maximum stored length of a single identity field, in characters.
pub const MAX_FIELD_LEN: usize = 99;

/// A name/email pair representing a user.
///
/// Both fields are owned and immutable after construction. No format
/// validation is applied; over-long inputs are bounded, not rejected.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Identity {
    name: String,
    email: String,
}

impl Identity {
    /// Creates an identity, silently truncating each field to
    /// [`MAX_FIELD_LEN`] characters.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: bounded(name.into()),
            email: bounded(email.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Formats the identity as `"name <email>"`. Pure, no side effects.
    pub fn summary(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// Truncates on a character boundary so multi-byte input stays valid UTF-8.
fn bounded(mut field: String) -> String {
    if let Some((idx, _)) = field.char_indices().nth(MAX_FIELD_LEN) {
        field.truncate(idx);
    }
    field
}
