//! Strict filename validation.
//!
//! [`FilenameValidator`] is a pure decision function over a resolved
//! platform and length bounds. Checks run in a fixed order and the first
//! failure wins:
//!
//! 1. empty name
//! 2. length in code points against `min_len..=max_len`
//! 3. forbidden and control characters
//! 4. reserved names (whole name, then the part before the first `.`)
//! 5. trailing space or period, where the platform forbids them
//!
//! # Examples
//!
//! ```
//! use fsname::{FilenameValidator, Platform, ValidationError};
//!
//! let validator = FilenameValidator::new(Platform::Windows, 1, None)?;
//! assert!(validator.validate("report.txt").is_ok());
//! assert!(matches!(
//!     validator.validate("con.txt"),
//!     Err(ValidationError::ReservedName { .. })
//! ));
//! # Ok::<(), fsname::ConfigError>(())
//! ```

use tracing::debug;

use crate::error::{ConfigError, ValidationError};
use crate::platform::Platform;
use crate::rules::RuleSet;

/// Validates names against one platform's rules.
#[derive(Debug, Clone)]
pub struct FilenameValidator {
    rules: &'static RuleSet,
    min_len: usize,
    max_len: usize,
}

impl FilenameValidator {
    /// Creates a validator.
    ///
    /// `max_len` defaults to the platform's limit and is clamped to it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroMaxLen`] if `max_len` is zero,
    /// [`ConfigError::MinExceedsMax`] if `min_len > max_len`.
    pub fn new(
        platform: Platform,
        min_len: usize,
        max_len: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let rules = platform.rules();
        let max_len = match max_len {
            Some(0) => return Err(ConfigError::ZeroMaxLen),
            Some(max_len) => max_len.min(rules.default_max_len()),
            None => rules.default_max_len(),
        };
        check_bounds(min_len, max_len)?;
        Ok(Self {
            rules,
            min_len,
            max_len,
        })
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.rules.platform()
    }

    #[must_use]
    pub fn rules(&self) -> &'static RuleSet {
        self.rules
    }

    #[must_use]
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Checks `name`, returning the first violation found.
    ///
    /// # Errors
    ///
    /// The [`ValidationError`] describing the first failed check.
    pub fn validate(&self, name: &str) -> Result<(), ValidationError> {
        let result = self.check(name);
        if let Err(err) = &result {
            debug!(
                platform = %self.platform(),
                name = %name.escape_debug(),
                reason = %err.reason(),
                "Filename rejected"
            );
        }
        result
    }

    /// Same as [`validate`](Self::validate), without the rejection event.
    pub(crate) fn check(&self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::NullName);
        }

        let actual = name.chars().count();
        if actual < self.min_len || actual > self.max_len {
            return Err(ValidationError::InvalidLength {
                actual,
                min: self.min_len,
                max: self.max_len,
            });
        }

        let offending = self.offending_chars(name);
        if !offending.is_empty() {
            return Err(ValidationError::InvalidCharacter {
                offending_chars: offending,
                value: name.to_string(),
            });
        }

        if let Some(reserved) = self.rules.reserved_match(name) {
            return Err(ValidationError::ReservedName {
                name: reserved.to_string(),
                reusable: false,
                value: name.to_string(),
            });
        }

        if let Some(last) = name.chars().last()
            && self.rules.is_forbidden_trailing(last)
        {
            return Err(ValidationError::InvalidCharacter {
                offending_chars: vec![last],
                value: name.to_string(),
            });
        }

        Ok(())
    }

    /// Distinct forbidden characters in order of first appearance.
    fn offending_chars(&self, name: &str) -> Vec<char> {
        let mut found = Vec::new();
        for c in name.chars() {
            if self.rules.is_forbidden(c) && !found.contains(&c) {
                found.push(c);
            }
        }
        found
    }
}

/// Rejects length bounds that no name could satisfy.
pub(crate) fn check_bounds(min_len: usize, max_len: usize) -> Result<(), ConfigError> {
    if max_len == 0 {
        return Err(ConfigError::ZeroMaxLen);
    }
    if min_len > max_len {
        return Err(ConfigError::MinExceedsMax {
            min: min_len,
            max: max_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(platform: Platform) -> FilenameValidator {
        FilenameValidator::new(platform, 1, None).unwrap()
    }

    // =========================================================================
    // CONFIGURATION TESTS
    // =========================================================================

    #[test]
    fn test_bounds() {
        assert_eq!(
            FilenameValidator::new(Platform::Linux, 1, Some(0)).unwrap_err(),
            ConfigError::ZeroMaxLen
        );
        assert_eq!(
            FilenameValidator::new(Platform::Linux, 100, Some(1)).unwrap_err(),
            ConfigError::MinExceedsMax { min: 100, max: 1 }
        );
        assert_eq!(
            FilenameValidator::new(Platform::Linux, 256, None).unwrap_err(),
            ConfigError::MinExceedsMax { min: 256, max: 255 }
        );
        let v = FilenameValidator::new(Platform::Linux, 10, Some(10)).unwrap();
        assert!(v.validate("eq min max").is_ok());
    }

    #[test]
    fn test_default_max_len() {
        assert_eq!(validator(Platform::Windows).max_len(), 255);
        assert_eq!(validator(Platform::MacOs).max_len(), 255);
    }

    #[test]
    fn test_max_len_clamped_to_platform_limit() {
        let v = FilenameValidator::new(Platform::Linux, 1, Some(10_000)).unwrap();
        assert_eq!(v.max_len(), 255);
        assert_eq!(
            v.validate(&"a".repeat(5000)),
            Err(ValidationError::InvalidLength {
                actual: 5000,
                min: 1,
                max: 255
            })
        );
        let v = FilenameValidator::new(Platform::Linux, 1, Some(2)).unwrap();
        assert_eq!(v.max_len(), 2);
    }

    // =========================================================================
    // ORDERING TESTS
    // =========================================================================

    #[test]
    fn test_empty_is_null_name() {
        for platform in Platform::ALL {
            assert_eq!(validator(platform).validate(""), Err(ValidationError::NullName));
        }
    }

    #[test]
    fn test_length_checked_before_characters() {
        let v = FilenameValidator::new(Platform::Windows, 1, Some(3)).unwrap();
        assert_eq!(
            v.validate("a:b:c"),
            Err(ValidationError::InvalidLength {
                actual: 5,
                min: 1,
                max: 3
            })
        );
    }

    #[test]
    fn test_characters_checked_before_reserved() {
        assert!(matches!(
            validator(Platform::Windows).validate("con:"),
            Err(ValidationError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_reserved_checked_before_trailing() {
        assert!(matches!(
            validator(Platform::Windows).validate("con."),
            Err(ValidationError::ReservedName { .. })
        ));
        assert!(matches!(
            validator(Platform::Windows).validate(".."),
            Err(ValidationError::ReservedName { .. })
        ));
    }

    // =========================================================================
    // LENGTH TESTS
    // =========================================================================

    #[test]
    fn test_length_boundary() {
        let v = validator(Platform::Universal);
        assert!(v.validate(&"a".repeat(255)).is_ok());
        assert_eq!(
            v.validate(&"a".repeat(256)),
            Err(ValidationError::InvalidLength {
                actual: 256,
                min: 1,
                max: 255
            })
        );
    }

    #[test]
    fn test_length_counts_code_points() {
        // 3 bytes per char in UTF-8, still 255 code points.
        let v = validator(Platform::Linux);
        assert!(v.validate(&"あ".repeat(255)).is_ok());
    }

    #[test]
    fn test_min_len() {
        let v = FilenameValidator::new(Platform::Linux, 5, None).unwrap();
        assert!(v.validate("valid").is_ok());
        assert_eq!(
            v.validate("ab"),
            Err(ValidationError::InvalidLength {
                actual: 2,
                min: 5,
                max: 255
            })
        );
    }

    // =========================================================================
    // CHARACTER TESTS
    // =========================================================================

    #[test]
    fn test_offending_chars_distinct_in_order() {
        assert_eq!(
            validator(Platform::Windows).validate("a*b:c*d"),
            Err(ValidationError::InvalidCharacter {
                offending_chars: vec!['*', ':'],
                value: "a*b:c*d".to_string(),
            })
        );
    }

    #[test]
    fn test_windows_only_chars() {
        for c in [':', '*', '?', '"', '<', '>', '|', '\\'] {
            let name = format!("A{c}B");
            assert!(validator(Platform::Windows).validate(&name).is_err(), "{name}");
            assert!(validator(Platform::Universal).validate(&name).is_err(), "{name}");
            assert!(validator(Platform::Linux).validate(&name).is_ok(), "{name}");
            assert!(validator(Platform::MacOs).validate(&name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_slash_and_control_chars_everywhere() {
        for platform in Platform::ALL {
            let v = validator(platform);
            assert!(v.validate("a/b").is_err());
            assert!(v.validate("a\0b").is_err());
            assert!(v.validate("a\x7fb").is_err());
            assert!(v.validate("asdf\rsdf").is_err());
        }
    }

    #[test]
    fn test_multibyte_names() {
        for platform in Platform::ALL {
            let v = validator(platform);
            assert!(v.validate("新しいテキスト ドキュメント.txt").is_ok());
            assert!(v.validate("新規 Microsoft Excel Worksheet.xlsx").is_ok());
        }
    }

    // =========================================================================
    // RESERVED NAME TESTS
    // =========================================================================

    #[test]
    fn test_reserved_name_details() {
        assert_eq!(
            validator(Platform::Windows).validate("Con.txt"),
            Err(ValidationError::ReservedName {
                name: "CON".to_string(),
                reusable: false,
                value: "Con.txt".to_string(),
            })
        );
    }

    #[test]
    fn test_device_names_valid_on_posix() {
        for platform in [Platform::Linux, Platform::MacOs] {
            assert!(validator(platform).validate("CON").is_ok());
            assert!(validator(platform).validate("nul.txt").is_ok());
        }
    }

    #[test]
    fn test_directory_references_reserved_everywhere() {
        for platform in Platform::ALL {
            for name in [".", ".."] {
                let err = validator(platform).validate(name).unwrap_err();
                assert!(
                    matches!(err, ValidationError::ReservedName { reusable: false, .. }),
                    "{platform} {name}"
                );
            }
        }
    }

    #[test]
    fn test_ntfs_metadata_names_allowed() {
        for platform in Platform::ALL {
            for name in ["$Mft", "$MftMirr", "$LogFile", "$Volume", "$Bitmap", "$Extend"] {
                assert!(validator(platform).validate(name).is_ok(), "{platform} {name}");
            }
        }
    }

    // =========================================================================
    // TRAILING CHARACTER TESTS
    // =========================================================================

    #[test]
    fn test_trailing_period_and_space() {
        for name in ["name.", "name "] {
            assert!(validator(Platform::Windows).validate(name).is_err(), "{name:?}");
            assert!(validator(Platform::Universal).validate(name).is_err(), "{name:?}");
            assert!(validator(Platform::Linux).validate(name).is_ok(), "{name:?}");
            assert!(validator(Platform::MacOs).validate(name).is_ok(), "{name:?}");
        }
        assert_eq!(
            validator(Platform::Windows).validate("name."),
            Err(ValidationError::InvalidCharacter {
                offending_chars: vec!['.'],
                value: "name.".to_string(),
            })
        );
    }

    #[test]
    fn test_leading_period_allowed() {
        for platform in Platform::ALL {
            assert!(validator(platform).validate(".gitignore").is_ok());
        }
    }
}
