//! Per-platform naming rules.
//!
//! One immutable [`RuleSet`] per concrete [`Platform`], built at compile time
//! and shared by every caller.
//!
//! # Sources
//!
//! - Windows: the Win32 "Naming Files, Paths, and Namespaces" rules. Names may
//!   not contain `\ / : * ? " < > |` or control characters, may not end in a
//!   space or period, and may not use a device name (`CON`, `COM1`, ...) even
//!   with an extension.
//! - Linux / macOS: only `/` and NUL are illegal at the filesystem level. All
//!   ASCII control characters are still rejected here because they break
//!   shells, terminals, and most tooling.
//! - Universal: the union of the above.
//!
//! NTFS metadata files (`$Mft`, `$Bitmap`, ...) live in the volume root only,
//! so they are not treated as reserved.

use crate::platform::Platform;

/// Default maximum name length, in code points.
pub const DEFAULT_MAX_LEN: usize = 255;

/// Suffix appended to a reserved base name during sanitization.
pub const RESERVED_SUFFIX: &str = "_";

const WINDOWS_FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

const POSIX_FORBIDDEN_CHARS: &[char] = &['/'];

/// Reserved names on every platform.
const DIRECTORY_REFERENCES: &[&str] = &[".", ".."];

/// Reserved device names on Windows (matched case-insensitively).
///
/// Windows treats these as devices regardless of extension, so `con.txt`
/// is as unusable as `CON`.
pub const WINDOWS_RESERVED_NAMES: &[&str] = &[
    ".", "..", "CON", "PRN", "AUX", "CLOCK$", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6",
    "COM7", "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

static WINDOWS: RuleSet = RuleSet {
    platform: Platform::Windows,
    forbidden_chars: WINDOWS_FORBIDDEN_CHARS,
    reserved_names: WINDOWS_RESERVED_NAMES,
    trailing_chars_trimmed: true,
    default_max_len: DEFAULT_MAX_LEN,
};

static LINUX: RuleSet = RuleSet {
    platform: Platform::Linux,
    forbidden_chars: POSIX_FORBIDDEN_CHARS,
    reserved_names: DIRECTORY_REFERENCES,
    trailing_chars_trimmed: false,
    default_max_len: DEFAULT_MAX_LEN,
};

static MACOS: RuleSet = RuleSet {
    platform: Platform::MacOs,
    forbidden_chars: POSIX_FORBIDDEN_CHARS,
    reserved_names: DIRECTORY_REFERENCES,
    trailing_chars_trimmed: false,
    default_max_len: DEFAULT_MAX_LEN,
};

// Windows is already the superset of the POSIX rules.
static UNIVERSAL: RuleSet = RuleSet {
    platform: Platform::Universal,
    forbidden_chars: WINDOWS_FORBIDDEN_CHARS,
    reserved_names: WINDOWS_RESERVED_NAMES,
    trailing_chars_trimmed: true,
    default_max_len: DEFAULT_MAX_LEN,
};

/// Naming rules for one concrete platform.
#[derive(Debug, PartialEq, Eq)]
pub struct RuleSet {
    platform: Platform,
    forbidden_chars: &'static [char],
    reserved_names: &'static [&'static str],
    trailing_chars_trimmed: bool,
    default_max_len: usize,
}

impl RuleSet {
    /// Rule set for a concrete platform.
    #[must_use]
    pub fn for_platform(platform: Platform) -> &'static Self {
        match platform {
            Platform::Windows => &WINDOWS,
            Platform::Linux => &LINUX,
            Platform::MacOs => &MACOS,
            Platform::Universal => &UNIVERSAL,
        }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Printable characters illegal anywhere in a name.
    ///
    /// Control characters are not listed; see [`is_control_char`].
    #[must_use]
    pub fn forbidden_chars(&self) -> &'static [char] {
        self.forbidden_chars
    }

    /// Reserved base names, in canonical (upper) case.
    #[must_use]
    pub fn reserved_names(&self) -> &'static [&'static str] {
        self.reserved_names
    }

    /// Whether a trailing space or period makes a name invalid.
    #[must_use]
    pub fn trailing_chars_trimmed(&self) -> bool {
        self.trailing_chars_trimmed
    }

    #[must_use]
    pub fn default_max_len(&self) -> usize {
        self.default_max_len
    }

    /// Whether `c` may not appear in a name on this platform.
    #[must_use]
    pub fn is_forbidden(&self, c: char) -> bool {
        is_control_char(c) || self.forbidden_chars.contains(&c)
    }

    /// Whether `c` may not end a name on this platform.
    #[must_use]
    pub fn is_forbidden_trailing(&self, c: char) -> bool {
        self.trailing_chars_trimmed && matches!(c, ' ' | '.')
    }

    /// Finds the reserved name `name` collides with, if any.
    ///
    /// The whole name is checked first (this is what catches `.` and `..`),
    /// then the part before the first `.`: `con.tar.gz` matches `CON`.
    #[must_use]
    pub fn reserved_match(&self, name: &str) -> Option<&'static str> {
        let lookup = |candidate: &str| {
            self.reserved_names
                .iter()
                .copied()
                .find(|reserved| reserved.eq_ignore_ascii_case(candidate))
        };

        lookup(name).or_else(|| match name.split_once('.') {
            Some((base, _)) if !base.is_empty() => lookup(base),
            _ => None,
        })
    }
}

/// ASCII control characters (0x00-0x1F and 0x7F), illegal on every platform.
#[must_use]
pub fn is_control_char(c: char) -> bool {
    c.is_ascii_control()
}
