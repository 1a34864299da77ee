//! Accepted input representations.
//!
//! Names arrive as text or as path-like wrappers. [`FileNameInput`] turns
//! each into text for checking (failing with
//! [`InvalidType`](ValidationError::InvalidType) when a wrapper is not valid
//! Unicode) and rebuilds the same representation after sanitization.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::ValidationError;

/// Something that can be validated or sanitized as a filename.
pub trait FileNameInput {
    /// Representation returned by sanitization.
    type Output;

    /// The name as text.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidType`] if the value is not Unicode text,
    /// [`ValidationError::NullName`] if it is absent.
    fn to_name(&self) -> Result<Cow<'_, str>, ValidationError>;

    /// Wraps a sanitized name back into the input's representation.
    fn from_sanitized(name: String) -> Self::Output;
}

impl FileNameInput for str {
    type Output = String;

    fn to_name(&self) -> Result<Cow<'_, str>, ValidationError> {
        Ok(Cow::Borrowed(self))
    }

    fn from_sanitized(name: String) -> String {
        name
    }
}

impl FileNameInput for String {
    type Output = String;

    fn to_name(&self) -> Result<Cow<'_, str>, ValidationError> {
        Ok(Cow::Borrowed(self.as_str()))
    }

    fn from_sanitized(name: String) -> String {
        name
    }
}

impl FileNameInput for OsStr {
    type Output = OsString;

    fn to_name(&self) -> Result<Cow<'_, str>, ValidationError> {
        self.to_str()
            .map(Cow::Borrowed)
            .ok_or_else(|| ValidationError::InvalidType {
                reason: format!("{self:?} is not valid Unicode"),
            })
    }

    fn from_sanitized(name: String) -> OsString {
        OsString::from(name)
    }
}

impl FileNameInput for OsString {
    type Output = OsString;

    fn to_name(&self) -> Result<Cow<'_, str>, ValidationError> {
        self.as_os_str().to_name()
    }

    fn from_sanitized(name: String) -> OsString {
        OsString::from(name)
    }
}

impl FileNameInput for Path {
    type Output = PathBuf;

    fn to_name(&self) -> Result<Cow<'_, str>, ValidationError> {
        self.as_os_str().to_name()
    }

    fn from_sanitized(name: String) -> PathBuf {
        PathBuf::from(name)
    }
}

impl FileNameInput for PathBuf {
    type Output = PathBuf;

    fn to_name(&self) -> Result<Cow<'_, str>, ValidationError> {
        self.as_os_str().to_name()
    }

    fn from_sanitized(name: String) -> PathBuf {
        PathBuf::from(name)
    }
}

/// `None` is an absent name.
impl<T: FileNameInput + ?Sized> FileNameInput for Option<&T> {
    type Output = T::Output;

    fn to_name(&self) -> Result<Cow<'_, str>, ValidationError> {
        match self {
            Some(value) => value.to_name(),
            None => Err(ValidationError::NullName),
        }
    }

    fn from_sanitized(name: String) -> T::Output {
        T::from_sanitized(name)
    }
}
