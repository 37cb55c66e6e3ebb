use crate::constants::{approval_codes, date_codes};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Lifecycle states for a scheduled occurrence of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventDateState {
    /// Initial state when the date is created with its event
    Planned,
    /// Execution has started and expense evidence may be attached
    Executing,
    /// Completion evidence recorded; restorable back to Executing
    Finished,
    /// Permanently excluded from all eligibility computations
    Cancelled,
}

impl EventDateState {
    /// Check if this is a terminal state (no further transitions allowed).
    /// Finished is NOT terminal as a restore action can reopen it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn is_planned(&self) -> bool {
        matches!(self, Self::Planned)
    }

    pub fn is_executing(&self) -> bool {
        matches!(self, Self::Executing)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this date blocks its event from being offered for execution
    pub fn blocks_execution(&self) -> bool {
        matches!(self, Self::Executing | Self::Finished)
    }

    /// Map from the backend's integer wire code
    pub fn from_code(code: i32) -> Result<Self, String> {
        match code {
            date_codes::PLANNED => Ok(Self::Planned),
            date_codes::EXECUTING => Ok(Self::Executing),
            date_codes::FINISHED => Ok(Self::Finished),
            date_codes::CANCELLED => Ok(Self::Cancelled),
            _ => Err(format!("Invalid event date status code: {code}")),
        }
    }

    /// Map to the backend's integer wire code
    pub fn as_code(&self) -> i32 {
        match self {
            Self::Planned => date_codes::PLANNED,
            Self::Executing => date_codes::EXECUTING,
            Self::Finished => date_codes::FINISHED,
            Self::Cancelled => date_codes::CANCELLED,
        }
    }
}

impl fmt::Display for EventDateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planned => write!(f, "planned"),
            Self::Executing => write!(f, "executing"),
            Self::Finished => write!(f, "finished"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for EventDateState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "executing" => Ok(Self::Executing),
            "finished" => Ok(Self::Finished),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid event date state: {s}")),
        }
    }
}

impl Default for EventDateState {
    fn default() -> Self {
        Self::Planned
    }
}

// The backend speaks integer codes, so (de)serialization goes through the
// canonical mapping and rejects unknown codes at the boundary.
impl Serialize for EventDateState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_code())
    }
}

impl<'de> Deserialize<'de> for EventDateState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i32::deserialize(deserializer)?;
        Self::from_code(code).map_err(serde::de::Error::custom)
    }
}

/// Decision states for a review pass over an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalState {
    /// Review in progress; execution is not yet permitted
    UnderReview,
    /// The event may enter execution
    Approved,
    /// The event was declined
    Rejected,
}

impl ApprovalState {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    /// Map from the backend's integer wire code
    pub fn from_code(code: i32) -> Result<Self, String> {
        match code {
            approval_codes::UNDER_REVIEW => Ok(Self::UnderReview),
            approval_codes::APPROVED => Ok(Self::Approved),
            approval_codes::REJECTED => Ok(Self::Rejected),
            _ => Err(format!("Invalid approval status code: {code}")),
        }
    }

    /// Map to the backend's integer wire code
    pub fn as_code(&self) -> i32 {
        match self {
            Self::UnderReview => approval_codes::UNDER_REVIEW,
            Self::Approved => approval_codes::APPROVED,
            Self::Rejected => approval_codes::REJECTED,
        }
    }
}

impl fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderReview => write!(f, "under_review"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ApprovalState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under_review" => Ok(Self::UnderReview),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("Invalid approval state: {s}")),
        }
    }
}

impl Default for ApprovalState {
    fn default() -> Self {
        Self::UnderReview
    }
}

impl Serialize for ApprovalState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_code())
    }
}

impl<'de> Deserialize<'de> for ApprovalState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i32::deserialize(deserializer)?;
        Self::from_code(code).map_err(serde::de::Error::custom)
    }
}
