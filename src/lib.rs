//! Platform-aware filename validation and sanitization.
//!
//! Turns arbitrary, possibly attacker-supplied strings into names that are
//! safe to create as a file or directory on a chosen platform.
//!
//! # Overview
//!
//! - [`rules`] - per-platform forbidden characters, reserved names, limits
//! - [`platform`] - platform selection, including `auto` via [`HostPlatform`]
//! - [`FilenameValidator`] - reject-on-violation checks
//! - [`FilenameSanitizer`] - repair-in-place
//! - [`config`] - loading [`FilenameOptions`] from TOML
//!
//! # Key Functions
//!
//! - [`validate_filename`] - first violation as a typed error
//! - [`is_valid_filename`] - the same check as a boolean
//! - [`sanitize_filename`] - a repaired name that passes validation
//!
//! # Examples
//!
//! ```
//! use fsname::{FilenameOptions, Platform, is_valid_filename, sanitize_filename};
//!
//! let windows = FilenameOptions::new().platform(Platform::Windows);
//!
//! assert!(!is_valid_filename("con.txt", &windows)?);
//! assert_eq!(sanitize_filename("con.txt", &windows)?, "con_.txt");
//!
//! let dashed = windows.clone().replacement_text("-");
//! assert_eq!(sanitize_filename("A:B", &dashed)?, "A-B");
//! # Ok::<(), fsname::Error>(())
//! ```

pub mod config;
mod error;
mod input;
mod options;
pub mod platform;
pub mod rules;
mod sanitize;
mod validate;


pub use error::{ConfigError, Error, ErrorReason, Result, ValidationError};
pub use input::FileNameInput;
pub use options::{DEFAULT_MIN_LEN, FilenameOptions};
pub use platform::{CurrentHost, FixedHost, HostPlatform, Platform, PlatformSelector};
pub use rules::RuleSet;
pub use sanitize::FilenameSanitizer;
pub use validate::FilenameValidator;

/// Validates `name` under `options`.
///
/// `auto` resolves against the platform this crate was built for.
///
/// # Errors
///
/// - [`Error::Config`] if the options are inconsistent.
/// - [`Error::Validation`] with the first violation found.
///
/// # Examples
///
/// ```
/// use fsname::{Error, FilenameOptions, ValidationError, validate_filename};
///
/// let options = FilenameOptions::new().min_len(5);
/// assert!(matches!(
///     validate_filename("ab", &options),
///     Err(Error::Validation(ValidationError::InvalidLength { actual: 2, min: 5, .. }))
/// ));
/// ```
pub fn validate_filename<N>(name: &N, options: &FilenameOptions) -> Result<()>
where
    N: FileNameInput + ?Sized,
{
    let validator = options.validator()?;
    let name = name.to_name()?;
    validator.validate(&name)?;
    Ok(())
}

/// Returns whether `name` is valid under `options`.
///
/// Validation failures become `false`; misuse does not.
///
/// # Errors
///
/// [`ConfigError`] if the options are inconsistent.
pub fn is_valid_filename<N>(
    name: &N,
    options: &FilenameOptions,
) -> std::result::Result<bool, ConfigError>
where
    N: FileNameInput + ?Sized,
{
    match validate_filename(name, options) {
        Ok(()) => Ok(true),
        Err(Error::Config(err)) => Err(err),
        Err(_) => Ok(false),
    }
}

/// Returns a repaired copy of `name` that passes [`validate_filename`] with
/// the same options.
///
/// Text comes back as [`String`], paths as [`PathBuf`](std::path::PathBuf).
///
/// # Errors
///
/// - [`Error::Config`] if the options are inconsistent.
/// - [`Error::Validation`] if `name` is empty or not Unicode text, or if the
///   result stays shorter than `min_len`.
/// - [`Error::EmptyAfterSanitize`] if nothing usable remains.
pub fn sanitize_filename<N>(name: &N, options: &FilenameOptions) -> Result<N::Output>
where
    N: FileNameInput + ?Sized,
{
    let sanitizer = options.sanitizer()?;
    let name = name.to_name()?;
    let sanitized = sanitizer.sanitize(&name)?;
    Ok(N::from_sanitized(sanitized))
}
