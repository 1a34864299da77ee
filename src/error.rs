//! Error types for filename validation and sanitization.
//!
//! Two families are kept apart:
//!
//! - [`ValidationError`] describes a property of the *name* (empty, too long,
//!   bad characters, reserved). [`is_valid_filename`](crate::is_valid_filename)
//!   folds these into `false`.
//! - [`ConfigError`] describes caller misuse (unknown platform alias, bad
//!   length bounds). It is never folded away.
//!
//! [`Error`] wraps both for the top-level functions.

use std::fmt;

use crate::platform::Platform;

/// Result type for the top-level filename operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Machine-readable kind of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorReason {
    NullName,
    InvalidType,
    InvalidLength,
    InvalidCharacter,
    ReservedName,
}

impl ErrorReason {
    /// Stable identifier, suitable for logs and wire formats.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NullName => "NULL_NAME",
            Self::InvalidType => "INVALID_TYPE",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::InvalidCharacter => "INVALID_CHARACTER",
            Self::ReservedName => "RESERVED_NAME",
        }
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name failed validation.
///
/// Each variant carries enough detail to build a precise message without
/// re-inspecting the name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The name is empty (or absent).
    #[error("null name, reason={}", ErrorReason::NullName)]
    NullName,

    /// The input is not text, e.g. a path that is not valid Unicode.
    #[error("invalid type: {reason}, reason={}", ErrorReason::InvalidType)]
    InvalidType { reason: String },

    /// The name length in code points is outside `min..=max`.
    #[error(
        "invalid length: length={actual}, min={min}, max={max}, reason={}",
        ErrorReason::InvalidLength
    )]
    InvalidLength { actual: usize, min: usize, max: usize },

    /// The name contains characters illegal on the target platform.
    ///
    /// `offending_chars` lists each distinct character once, in order of
    /// first appearance.
    #[error(
        "invalid char found: invalid-chars=({}), value={value:?}, reason={}",
        format_chars(.offending_chars),
        ErrorReason::InvalidCharacter
    )]
    InvalidCharacter {
        offending_chars: Vec<char>,
        value: String,
    },

    /// The name, or its part before the first `.`, is a reserved name.
    #[error(
        "reserved name: reserved-name={name:?}, reusable={reusable}, value={value:?}, reason={}",
        ErrorReason::ReservedName
    )]
    ReservedName {
        name: String,
        reusable: bool,
        value: String,
    },
}

impl ValidationError {
    /// Machine-readable kind of this error.
    #[must_use]
    pub const fn reason(&self) -> ErrorReason {
        match self {
            Self::NullName => ErrorReason::NullName,
            Self::InvalidType { .. } => ErrorReason::InvalidType,
            Self::InvalidLength { .. } => ErrorReason::InvalidLength,
            Self::InvalidCharacter { .. } => ErrorReason::InvalidCharacter,
            Self::ReservedName { .. } => ErrorReason::ReservedName,
        }
    }
}

fn format_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("{:?}", c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Caller misuse: the request itself is malformed, not the name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Platform alias is not one of the known ones.
    #[error("unknown platform: {0:?}")]
    UnknownPlatform(String),

    /// `max_len` must be at least 1.
    #[error("max_len must be greater than zero")]
    ZeroMaxLen,

    /// `min_len` is larger than `max_len`.
    #[error("min_len ({min}) must not exceed max_len ({max})")]
    MinExceedsMax { min: usize, max: usize },

    /// The replacement text would itself produce an invalid name.
    #[error("replacement text {replacement:?} contains characters forbidden on {platform}")]
    ForbiddenReplacement {
        replacement: String,
        platform: Platform,
    },
}

/// Errors returned by the top-level filename functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Sanitizing a non-empty input left nothing usable.
    #[error("sanitization produced no usable name from {original:?}")]
    EmptyAfterSanitize { original: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_character_display_escapes_control_chars() {
        let err = ValidationError::InvalidCharacter {
            offending_chars: vec!['\r'],
            value: "asdf\rsdf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"invalid char found: invalid-chars=('\r'), value="asdf\rsdf", reason=INVALID_CHARACTER"#
        );
    }

    #[test]
    fn test_invalid_character_display_lists_all_chars() {
        let err = ValidationError::InvalidCharacter {
            offending_chars: vec![':', '*'],
            value: "a:b*c".to_string(),
        };
        assert!(err.to_string().contains("invalid-chars=(':', '*')"));
    }

    #[test]
    fn test_reason_matches_variant() {
        assert_eq!(ValidationError::NullName.reason(), ErrorReason::NullName);
        assert_eq!(
            ValidationError::InvalidLength {
                actual: 3,
                min: 5,
                max: 255
            }
            .reason(),
            ErrorReason::InvalidLength
        );
        assert_eq!(
            ValidationError::ReservedName {
                name: "CON".to_string(),
                reusable: false,
                value: "con".to_string(),
            }
            .reason()
            .to_string(),
            "RESERVED_NAME"
        );
    }

    #[test]
    fn test_error_wraps_transparently() {
        let err: Error = ValidationError::NullName.into();
        assert_eq!(err.to_string(), "null name, reason=NULL_NAME");

        let err: Error = ConfigError::ZeroMaxLen.into();
        assert_eq!(err.to_string(), "max_len must be greater than zero");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::MinExceedsMax { min: 100, max: 1 }.to_string(),
            "min_len (100) must not exceed max_len (1)"
        );
        assert_eq!(
            ConfigError::UnknownPlatform("beos".to_string()).to_string(),
            r#"unknown platform: "beos""#
        );
        assert_eq!(
            ConfigError::ForbiddenReplacement {
                replacement: "/".to_string(),
                platform: Platform::Linux,
            }
            .to_string(),
            r#"replacement text "/" contains characters forbidden on linux"#
        );
    }
}
