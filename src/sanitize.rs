//! Filename sanitization.
//!
//! [`FilenameSanitizer`] repairs a name so that it passes
//! [`FilenameValidator`] under the same platform and bounds:
//!
//! 1. Surrounding whitespace is trimmed.
//! 2. Forbidden and control characters are replaced, one code point at a time.
//! 3. Trailing spaces and periods are stripped where the platform forbids them.
//! 4. A reserved base name gets a `_` suffix (`con.txt` becomes `con_.txt`).
//! 5. The result is truncated to `max_len` code points.
//!
//! Steps 3 to 5 repeat until the name stops changing, because truncation can
//! expose a new trailing period or a reserved name (`CONSOLE` cut to 3).
//!
//! # Examples
//!
//! ```
//! use fsname::{FilenameSanitizer, Platform};
//!
//! let sanitizer = FilenameSanitizer::new(Platform::Windows, 1, None, "-")?;
//! assert_eq!(sanitizer.sanitize("A:B")?, "A-B");
//! assert_eq!(sanitizer.sanitize("con")?, "con_");
//! assert_eq!(sanitizer.sanitize("name. ")?, "name");
//! # Ok::<(), fsname::Error>(())
//! ```

use tracing::{debug, warn};

use crate::error::{ConfigError, Error, ValidationError};
use crate::platform::Platform;
use crate::rules::{RESERVED_SUFFIX, RuleSet};
use crate::validate::FilenameValidator;

/// Repairs names for one platform's rules.
#[derive(Debug, Clone)]
pub struct FilenameSanitizer {
    validator: FilenameValidator,
    replacement: String,
}

impl FilenameSanitizer {
    /// Creates a sanitizer.
    ///
    /// # Errors
    ///
    /// Any bound error from [`FilenameValidator::new`], or
    /// [`ConfigError::ForbiddenReplacement`] if `replacement` contains a
    /// character the platform forbids.
    pub fn new(
        platform: Platform,
        min_len: usize,
        max_len: Option<usize>,
        replacement: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let validator = FilenameValidator::new(platform, min_len, max_len)?;
        let replacement = replacement.into();
        if replacement.chars().any(|c| validator.rules().is_forbidden(c)) {
            return Err(ConfigError::ForbiddenReplacement {
                replacement,
                platform,
            });
        }
        Ok(Self {
            validator,
            replacement,
        })
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.validator.platform()
    }

    /// Reserved names this sanitizer disambiguates.
    #[must_use]
    pub fn reserved_names(&self) -> &'static [&'static str] {
        self.rules().reserved_names()
    }

    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.validator.max_len()
    }

    fn rules(&self) -> &'static RuleSet {
        self.validator.rules()
    }

    /// Returns a repaired copy of `name`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NullName`] if `name` is empty.
    /// - [`Error::EmptyAfterSanitize`] if nothing usable remains.
    /// - [`ValidationError::InvalidLength`] if the repaired name is shorter
    ///   than `min_len`; sanitization never pads.
    pub fn sanitize(&self, name: &str) -> Result<String, Error> {
        if name.is_empty() {
            return Err(ValidationError::NullName.into());
        }

        let replaced = self.replace_forbidden(name.trim());
        let sanitized = self.settle(replaced);

        if sanitized.is_empty() {
            warn!(
                platform = %self.platform(),
                name = %name.escape_debug(),
                "Sanitization left no usable name"
            );
            return Err(Error::EmptyAfterSanitize {
                original: name.to_string(),
            });
        }

        self.validator.check(&sanitized)?;

        if sanitized != name {
            debug!(
                platform = %self.platform(),
                original = %name.escape_debug(),
                sanitized = %sanitized,
                "Sanitized filename"
            );
        }
        Ok(sanitized)
    }

    fn replace_forbidden(&self, name: &str) -> String {
        let rules = self.rules();
        let mut out = String::with_capacity(name.len());
        for c in name.chars() {
            if rules.is_forbidden(c) {
                out.push_str(&self.replacement);
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Applies trimming, disambiguation and truncation until stable.
    fn settle(&self, mut name: String) -> String {
        loop {
            let truncated = truncate_chars(&name, self.max_len()).trim();
            // Before the tail trim, or "." and ".." would vanish on Windows.
            let next = self.disambiguate(truncated);
            let next = self.disambiguate(self.trim_tail(&next));
            if next == name {
                return name;
            }
            name = next;
        }
    }

    fn disambiguate(&self, name: &str) -> String {
        match self.rules().reserved_match(name) {
            Some(reserved) => insert_suffix(name, reserved, self.max_len()),
            None => name.to_string(),
        }
    }

    /// Strips surrounding whitespace, plus trailing spaces and periods where
    /// the platform forbids them.
    fn trim_tail<'a>(&self, name: &'a str) -> &'a str {
        let mut current = name.trim();
        if self.rules().trailing_chars_trimmed() {
            loop {
                let next = current.trim_end_matches([' ', '.']).trim();
                if next.len() == current.len() {
                    break;
                }
                current = next;
            }
        }
        current
    }
}

/// Longest prefix of `s` with at most `max` code points.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Inserts [`RESERVED_SUFFIX`] right after the reserved base of `name`.
///
/// The base is shortened when the suffixed name would exceed `max_len`, so
/// the suffix always survives.
fn insert_suffix(name: &str, reserved: &str, max_len: usize) -> String {
    // Whole-name matches (".", "..", "CON") have no extension to preserve.
    let (base, rest) = if name.eq_ignore_ascii_case(reserved) {
        (name, "")
    } else {
        name.split_at(reserved.len())
    };

    let suffix_len = RESERVED_SUFFIX.chars().count();
    let keep = base.chars().count().min(max_len.saturating_sub(suffix_len));

    let mut out = String::with_capacity(name.len() + RESERVED_SUFFIX.len());
    out.push_str(truncate_chars(base, keep));
    out.push_str(RESERVED_SUFFIX);
    out.push_str(rest);
    truncate_chars(&out, max_len).to_string()
}
