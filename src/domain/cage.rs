use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cage {
    pub id: i64,
    #[serde(rename = "cage_name")]
    pub name: String,
    #[serde(rename = "cage_status")]
    pub status: CageStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CageDraft {
    pub name: String,
    pub status: CageStatus,
}

/// Informational only; placement does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CageStatus {
    Active,
    Down,
}

impl CageStatus {
    pub const ALL: [CageStatus; 2] = [CageStatus::Active, CageStatus::Down];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Down => "DOWN",
        }
    }
}

impl fmt::Display for CageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cage status '{0}'")]
pub struct UnknownCageStatus(pub String);

impl FromStr for CageStatus {
    type Err = UnknownCageStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CageStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownCageStatus(value.to_string()))
    }
}
