//! Value Objects shared by the client and the server.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::error::ValueObjectError;

/// Maximum length of a [`Name`] in characters.
pub const NAME_MAX_LENGTH: usize = 100;

/// Characters a [`Name`] must never contain.
pub const NAME_FORBIDDEN_CHARACTERS: [char; 3] = [',', '=', '\n'];

/// Display identifier of a user or a channel.
///
/// A `Name` is never empty. Once constructed it is guaranteed to satisfy every
/// validation rule, so code receiving a `Name` does not re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    ///
    /// # Arguments
    ///
    /// * `name` - The raw name string
    ///
    /// # Returns
    ///
    /// A Result containing the Name or an error if validation fails
    pub fn new(name: impl Into<String>) -> Result<Self, ValueObjectError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValueObjectError::NameEmpty);
        }
        let len = name.chars().count();
        if len > NAME_MAX_LENGTH {
            return Err(ValueObjectError::NameTooLong {
                max: NAME_MAX_LENGTH,
                actual: len,
            });
        }
        if let Some(c) = name.chars().find(|c| NAME_FORBIDDEN_CHARACTERS.contains(c)) {
            return Err(ValueObjectError::NameForbiddenCharacter(c));
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Name {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Name {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Channel identifier value object.
///
/// Stable for the whole lifetime of a channel: renaming a channel never
/// changes its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(Uuid);

impl ChannelId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ChannelId {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValueObjectError::ChannelIdEmpty);
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ValueObjectError::ChannelIdInvalidFormat(s.to_string()))
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
