//! Caller-facing options for the top-level functions.
//!
//! [`FilenameOptions`] carries the optional arguments of
//! [`validate_filename`](crate::validate_filename) and friends: platform
//! selector, length bounds, and replacement text. It deserializes from TOML
//! (see [`config`](crate::config)) with the same defaults as
//! [`FilenameOptions::default`].

use serde::Deserialize;

use crate::error::ConfigError;
use crate::platform::{CurrentHost, HostPlatform, PlatformSelector};
use crate::sanitize::FilenameSanitizer;
use crate::validate::{FilenameValidator, check_bounds};

/// Default minimum name length.
pub const DEFAULT_MIN_LEN: usize = 1;

/// Options shared by validation and sanitization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilenameOptions {
    /// Target platform, `auto` by default.
    pub platform: PlatformSelector,
    pub min_len: usize,
    /// `None` means the platform default.
    pub max_len: Option<usize>,
    /// Text substituted for each forbidden character during sanitization.
    pub replacement_text: String,
}

impl Default for FilenameOptions {
    fn default() -> Self {
        Self {
            platform: PlatformSelector::Auto,
            min_len: DEFAULT_MIN_LEN,
            max_len: None,
            replacement_text: String::new(),
        }
    }
}

impl FilenameOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn platform(mut self, platform: impl Into<PlatformSelector>) -> Self {
        self.platform = platform.into();
        self
    }

    #[must_use]
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    #[must_use]
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    #[must_use]
    pub fn replacement_text(mut self, text: impl Into<String>) -> Self {
        self.replacement_text = text.into();
        self
    }

    /// Checks the parts of the options that do not depend on the platform.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for an explicit zero `max_len` or `min_len > max_len`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.max_len {
            Some(max_len) => check_bounds(self.min_len, max_len),
            None => Ok(()),
        }
    }

    /// Validator for these options, resolving `auto` against the build host.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for invalid bounds.
    pub fn validator(&self) -> Result<FilenameValidator, ConfigError> {
        self.validator_with_host(&CurrentHost)
    }

    /// Validator for these options, resolving `auto` against `host`.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for invalid bounds.
    pub fn validator_with_host(
        &self,
        host: &dyn HostPlatform,
    ) -> Result<FilenameValidator, ConfigError> {
        FilenameValidator::new(self.platform.resolve(host), self.min_len, self.max_len)
    }

    /// Sanitizer for these options, resolving `auto` against the build host.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for invalid bounds or a forbidden replacement text.
    pub fn sanitizer(&self) -> Result<FilenameSanitizer, ConfigError> {
        self.sanitizer_with_host(&CurrentHost)
    }

    /// Sanitizer for these options, resolving `auto` against `host`.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] for invalid bounds or a forbidden replacement text.
    pub fn sanitizer_with_host(
        &self,
        host: &dyn HostPlatform,
    ) -> Result<FilenameSanitizer, ConfigError> {
        FilenameSanitizer::new(
            self.platform.resolve(host),
            self.min_len,
            self.max_len,
            self.replacement_text.clone(),
        )
    }
}
