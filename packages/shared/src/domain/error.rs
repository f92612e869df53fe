//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Name validation error
    #[error("Name cannot be empty")]
    NameEmpty,

    /// Name too long error
    #[error("Name cannot exceed {max} characters (got {actual})")]
    NameTooLong { max: usize, actual: usize },

    /// Name contains a character reserved by the protocol
    #[error("Name cannot contain {0:?}")]
    NameForbiddenCharacter(char),

    /// ChannelId validation error
    #[error("ChannelId cannot be empty")]
    ChannelIdEmpty,

    /// ChannelId invalid format error (not a valid UUID format)
    #[error("ChannelId must be a valid UUID format (got: {0})")]
    ChannelIdInvalidFormat(String),
}
