//! Target platform selection.
//!
//! A [`Platform`] names one row of the rule table. Callers usually pass a
//! [`PlatformSelector`], which may also be [`PlatformSelector::Auto`]; auto
//! resolution asks a [`HostPlatform`] which operating system family to use.
//! The host lookup is injected so the rule engine never reads process-global
//! state on its own.
//!
//! # Examples
//!
//! ```
//! use fsname::{Platform, PlatformSelector};
//!
//! let selector: PlatformSelector = "Windows".parse()?;
//! assert_eq!(selector, PlatformSelector::Platform(Platform::Windows));
//!
//! // "posix" is an alias for the Linux rules.
//! assert_eq!("posix".parse::<Platform>()?, Platform::Linux);
//! # Ok::<(), fsname::ConfigError>(())
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::rules::RuleSet;

/// A concrete target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Platform {
    Windows,
    Linux,
    #[serde(rename = "macos")]
    MacOs,
    /// Conservative superset: valid here means valid everywhere.
    Universal,
}

impl Platform {
    /// All concrete platforms.
    pub const ALL: [Self; 4] = [Self::Windows, Self::Linux, Self::MacOs, Self::Universal];

    /// Naming rules for this platform.
    #[must_use]
    pub fn rules(self) -> &'static RuleSet {
        RuleSet::for_platform(self)
    }

    /// Canonical lowercase alias.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Universal => "universal",
        }
    }

    /// Maps a host OS family report to a platform.
    ///
    /// Unrecognized reports fall back to [`Platform::Linux`], the most
    /// permissive rule set.
    #[must_use]
    pub fn from_host_report(report: &str) -> Self {
        let normalized = report.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "windows" => Self::Windows,
            "darwin" | "macos" => Self::MacOs,
            "linux" => Self::Linux,
            _ => {
                warn!(
                    host_os = %report,
                    fallback = Self::Linux.as_str(),
                    "Unrecognized host platform, falling back to linux rules"
                );
                Self::Linux
            },
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "linux" | "posix" => Ok(Self::Linux),
            "macos" => Ok(Self::MacOs),
            "universal" => Ok(Self::Universal),
            _ => Err(ConfigError::UnknownPlatform(s.to_string())),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Platform as requested by a caller, possibly `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PlatformSelector {
    /// Use the platform reported by the host.
    #[default]
    Auto,
    Platform(Platform),
}

impl PlatformSelector {
    /// Resolves to a concrete platform, consulting `host` only for `Auto`.
    #[must_use]
    pub fn resolve(self, host: &dyn HostPlatform) -> Platform {
        match self {
            Self::Platform(platform) => platform,
            Self::Auto => Platform::from_host_report(&host.os_family()),
        }
    }
}

impl From<Platform> for PlatformSelector {
    fn from(platform: Platform) -> Self {
        Self::Platform(platform)
    }
}

impl FromStr for PlatformSelector {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        s.parse().map(Self::Platform)
    }
}

impl TryFrom<String> for PlatformSelector {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PlatformSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Platform(platform) => f.write_str(platform.as_str()),
        }
    }
}

/// Reports the operating system family of the host.
///
/// Expected answers are short family names such as `"windows"`, `"linux"`,
/// or `"darwin"`. The answer may be wrong; unknown values resolve to Linux.
pub trait HostPlatform {
    fn os_family(&self) -> Cow<'_, str>;
}

/// The host this crate was compiled for.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentHost;

impl HostPlatform for CurrentHost {
    fn os_family(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::env::consts::OS)
    }
}

/// A host that always reports the same family. Useful in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedHost(pub &'static str);

impl HostPlatform for FixedHost {
    fn os_family(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0)
    }
}
