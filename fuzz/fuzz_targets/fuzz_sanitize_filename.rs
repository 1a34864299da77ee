//! Fuzz target for `FilenameSanitizer::sanitize`.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic
//! 2. Every sanitized name passes validation with the same settings
//! 3. Sanitizing a sanitized name changes nothing
//! 4. Errors match the input that caused them
//!
//! Run with: `cargo +nightly fuzz run fuzz_sanitize_filename`

#![no_main]

use arbitrary::Arbitrary;
use fsname::{Error, FilenameSanitizer, FilenameValidator, Platform, ValidationError};
use libfuzzer_sys::fuzz_target;

/// Structured input covering every platform and bound.
#[derive(Arbitrary, Debug)]
struct SanitizeInput {
    name: String,
    platform: u8,
    /// Zero means the platform default.
    max_len: u8,
    replacement: String,
    /// Whether to wrap the name in a Windows device name.
    inject_reserved: bool,
}

impl SanitizeInput {
    fn platform(&self) -> Platform {
        Platform::ALL[usize::from(self.platform) % Platform::ALL.len()]
    }

    fn max_len(&self) -> Option<usize> {
        (self.max_len > 0).then_some(usize::from(self.max_len))
    }

    fn build(&self) -> String {
        if self.inject_reserved {
            format!("CON.{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

fuzz_target!(|data: SanitizeInput| {
    let platform = data.platform();
    let max_len = data.max_len();
    let name = data.build();

    // Replacements containing forbidden chars are rejected up front
    let Ok(sanitizer) = FilenameSanitizer::new(platform, 1, max_len, data.replacement.as_str())
    else {
        return;
    };
    let validator = FilenameValidator::new(platform, 1, max_len)
        .expect("validator accepts the sanitizer's bounds");

    match sanitizer.sanitize(&name) {
        Ok(sanitized) => {
            // INVARIANT 1: Output always validates
            assert_eq!(
                validator.validate(&sanitized),
                Ok(()),
                "sanitized {:?} from {:?} on {}",
                sanitized,
                name,
                platform
            );

            // INVARIANT 2: Output respects the bound
            assert!(
                sanitized.chars().count() <= sanitizer.max_len(),
                "sanitized {:?} exceeds {}",
                sanitized,
                sanitizer.max_len()
            );

            // INVARIANT 3: Idempotent
            let again = sanitizer
                .sanitize(&sanitized)
                .expect("sanitized names sanitize again");
            assert_eq!(again, sanitized, "not idempotent for input {:?}", name);
        }
        Err(Error::Validation(ValidationError::NullName)) => {
            assert!(name.is_empty(), "NullName for non-empty input {:?}", name);
        }
        Err(Error::EmptyAfterSanitize { original }) => {
            assert_eq!(original, name);
        }
        Err(other) => panic!("unexpected error {other:?} for input {name:?}"),
    }
});
