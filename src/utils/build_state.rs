use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commit build status as understood by the 2.0 statuses API.
///
/// The wire token is the upper-case variant name (`SUCCESSFUL`, not
/// `successful`); "pending" is sent as `INPROGRESS`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildState {
    #[serde(rename = "INPROGRESS")]
    InProgress,
    #[serde(rename = "SUCCESSFUL")]
    Successful,
    #[serde(rename = "FAILED")]
    Failed,
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BuildState::InProgress => write!(f, "INPROGRESS"),
            BuildState::Successful => write!(f, "SUCCESSFUL"),
            BuildState::Failed => write!(f, "FAILED"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown build state: {0}")]
pub struct ParseBuildStateError(String);

impl FromStr for BuildState {
    type Err = ParseBuildStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INPROGRESS" | "IN_PROGRESS" | "PENDING" => Ok(BuildState::InProgress),
            "SUCCESSFUL" => Ok(BuildState::Successful),
            "FAILED" => Ok(BuildState::Failed),
            _ => Err(ParseBuildStateError(s.to_string())),
        }
    }
}
