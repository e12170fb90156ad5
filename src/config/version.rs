//! Shopify API version handling.
//!
//! Shopify ships a new stable Admin API version every quarter, named after
//! its release month (`2025-01`, `2025-04`, `2025-07`, `2025-10`, ...). The
//! version is part of every request path: `/admin/api/{version}/...`.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Shopify Admin API version.
///
/// Stable versions order chronologically and `Unstable` sorts after all of
/// them.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_07);
/// assert_eq!(version.to_string(), "2025-07");
/// assert!(ApiVersion::V2025_04 < ApiVersion::Unstable);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// A quarterly stable release.
    Stable {
        /// Release year.
        year: u16,
        /// Release month: 1, 4, 7 or 10.
        month: u8,
    },
    /// The unstable preview version.
    Unstable,
}

impl ApiVersion {
    /// API version 2025-01.
    pub const V2025_01: Self = Self::Stable {
        year: 2025,
        month: 1,
    };
    /// API version 2025-04.
    pub const V2025_04: Self = Self::Stable {
        year: 2025,
        month: 4,
    };
    /// API version 2025-07.
    pub const V2025_07: Self = Self::Stable {
        year: 2025,
        month: 7,
    };
    /// API version 2025-10.
    pub const V2025_10: Self = Self::Stable {
        year: 2025,
        month: 10,
    };
    /// API version 2026-01.
    pub const V2026_01: Self = Self::Stable {
        year: 2026,
        month: 1,
    };
    /// API version 2026-04.
    pub const V2026_04: Self = Self::Stable {
        year: 2026,
        month: 4,
    };

    /// Returns the newest stable version this crate's schemas were written
    /// against.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2026_04
    }

    /// Returns `true` for quarterly releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Stable { .. })
    }

    /// Returns `true` if this release falls outside Shopify's twelve month
    /// support window, measured from [`ApiVersion::latest`].
    ///
    /// ```rust
    /// use shopify_rest::ApiVersion;
    ///
    /// assert!(ApiVersion::V2025_01.is_deprecated());
    /// assert!(!ApiVersion::latest().is_deprecated());
    /// assert!(!ApiVersion::Unstable.is_deprecated());
    /// ```
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        match (self, Self::latest()) {
            (
                Self::Stable { year, month },
                Self::Stable {
                    year: latest_year,
                    month: latest_month,
                },
            ) => {
                let months = |y: u16, m: u8| u32::from(y) * 12 + u32::from(m);
                months(latest_year, latest_month).saturating_sub(months(*year, *month)) >= 12
            }
            _ => false,
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unstable" {
            return Ok(Self::Unstable);
        }

        let invalid = || ConfigError::InvalidApiVersion { version: s.clone() };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().all(|b| b.is_ascii_digit()) || !month.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        if !matches!(month, 1 | 4 | 7 | 10) {
            return Err(invalid());
        }

        Ok(Self::Stable { year, month })
    }
}
