//! Fuzz target for `FilenameValidator::validate`.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic
//! 2. Anything valid under `Universal` is valid on every platform
//! 3. Rejections report what is actually in the input
//!
//! Run with: `cargo +nightly fuzz run fuzz_validate_filename`

#![no_main]

use fsname::{FilenameValidator, Platform, ValidationError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &str| {
    let universal_ok = FilenameValidator::new(Platform::Universal, 1, None)
        .expect("default bounds are valid")
        .validate(name)
        .is_ok();

    for platform in Platform::ALL {
        let validator = FilenameValidator::new(platform, 1, None).expect("default bounds are valid");
        let result = validator.validate(name);

        // INVARIANT 1: Universal is the most restrictive rule set
        if universal_ok {
            assert_eq!(result, Ok(()), "{:?} valid on universal but not {}", name, platform);
        }

        match result {
            Ok(()) | Err(ValidationError::InvalidType { .. }) => {}
            Err(ValidationError::NullName) => {
                assert!(name.is_empty(), "NullName for {:?}", name);
            }
            Err(ValidationError::InvalidLength { actual, min, max }) => {
                // INVARIANT 2: Length is counted in code points
                assert_eq!(actual, name.chars().count());
                assert!(actual < min || actual > max);
            }
            Err(ValidationError::InvalidCharacter { offending_chars, value }) => {
                // INVARIANT 3: Every reported char occurs in the name
                assert_eq!(value, name);
                assert!(!offending_chars.is_empty());
                for c in offending_chars {
                    assert!(name.contains(c), "{:?} not in {:?}", c, name);
                }
            }
            Err(ValidationError::ReservedName { name: reserved, reusable, value }) => {
                // INVARIANT 4: The reserved name is the input or its base
                assert!(!reusable);
                assert_eq!(value, name);
                let base = name.split('.').next().unwrap_or(name);
                assert!(
                    reserved.eq_ignore_ascii_case(name) || reserved.eq_ignore_ascii_case(base),
                    "{:?} reported for {:?}",
                    reserved,
                    name
                );
            }
        }
    }
});
