//! Recognized UTM parameter set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the five standardized marketing attribution query keys.
///
/// The set is fixed at compile time; `ALL` fixes the enumeration order
/// used everywhere fields are injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtmParam {
    UtmSource,
    UtmMedium,
    UtmCampaign,
    UtmTerm,
    UtmContent,
}

impl UtmParam {
    /// All recognized parameters, in injection order.
    pub const ALL: [UtmParam; 5] = [
        UtmParam::UtmSource,
        UtmParam::UtmMedium,
        UtmParam::UtmCampaign,
        UtmParam::UtmTerm,
        UtmParam::UtmContent,
    ];

    /// The bare query-string key, also used as the session key and the
    /// injected field's label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UtmSource => "utm_source",
            Self::UtmMedium => "utm_medium",
            Self::UtmCampaign => "utm_campaign",
            Self::UtmTerm => "utm_term",
            Self::UtmContent => "utm_content",
        }
    }
}

impl fmt::Display for UtmParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UtmParam {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UtmParam::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::UnknownParam(s.to_string()))
    }
}
