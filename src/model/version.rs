use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::transform::error::{TransformError, invalid_version};

/// Management model version of a host, `major.minor.micro`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl ModelVersion {
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl FromStr for ModelVersion {
    type Err = TransformError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.trim().split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid_version(format!(
                "model version '{raw}' must be major.minor[.micro]"
            )));
        }

        let component = |part: &str| {
            part.parse::<u32>().map_err(|_| {
                invalid_version(format!(
                    "model version '{raw}' has non-numeric component '{part}'"
                ))
            })
        };

        Ok(Self {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            micro: parts.get(2).copied().map(component).transpose()?.unwrap_or(0),
        })
    }
}

impl TryFrom<String> for ModelVersion {
    type Error = TransformError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<ModelVersion> for String {
    fn from(version: ModelVersion) -> Self {
        version.to_string()
    }
}
