//! Username Value Object
//!
//! The username is the user's public display handle. It is shown next to
//! events and comments and denormalized into them at write time.
//!
//! ## 不変条件
//! - 正規化（NFKC + trim）後に空でないこと
//! - 長さ: 1〜30文字（正規化後）
//! - 制御文字を含まないこと
//! - 一意性は canonical（小文字化した形）で判定する

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for a username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 30;

/// Error returned when username validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    /// Username is empty after normalization
    #[error("Username cannot be empty")]
    Empty,

    /// Username is too long
    #[error("Username is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    /// Username contains a control character
    #[error("Username contains invalid control characters")]
    InvalidCharacter,
}

/// Validated, normalized username
///
/// # Storage
/// - `original`: the user's input (trimmed, NFKC normalized, preserves case)
/// - `canonical`: lowercase form for uniqueness checks
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username {
    /// Original user input (preserves case)
    original: String,
    /// Canonical form (lowercase) for uniqueness
    canonical: String,
}

impl Username {
    /// Create a new Username from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, UsernameError> {
        let original: String = input.as_ref().nfkc().collect::<String>().trim().to_string();

        if original.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = original.chars().count();
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                length,
                max: USERNAME_MAX_LENGTH,
            });
        }

        if original.chars().any(|c| c.is_control()) {
            return Err(UsernameError::InvalidCharacter);
        }

        let canonical = original.to_lowercase();
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Get the original username (preserves case)
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the canonical (lowercase) form used for uniqueness
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Display alias for the original form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(original: &str) -> Self {
        Self {
            original: original.to_string(),
            canonical: original.to_lowercase(),
        }
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Username")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.original
    }
}
