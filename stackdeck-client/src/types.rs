use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Service whose status drives the start/stop action for a stack.
///
/// Stacks that do not contain this service fall back to their first service
/// in name order.
pub const PRIMARY_SERVICE: &str = "minecraft_server";

// ============ Identifiers ============

/// Validated stack identifier: a positive integer.
///
/// Construction goes through [`StackId::parse`] (or `TryFrom<u32>`), so a
/// value of this type always holds a non-zero id. Serialized as a plain
/// integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StackId(u32);

impl StackId {
    /// Parse user input into a stack id.
    ///
    /// Input must be present, numeric and a positive integer. Surrounding
    /// whitespace is tolerated; empty, non-numeric, zero and negative inputs
    /// are rejected with [`ClientError::InvalidStackId`].
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        let trimmed = input.trim();
        trimmed
            .parse::<u32>()
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or_else(|| ClientError::InvalidStackId {
                input: input.to_string(),
            })
    }

    /// The raw numeric id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for StackId {
    type Error = ClientError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(ClientError::InvalidStackId {
                input: value.to_string(),
            });
        }
        Ok(Self(value))
    }
}

impl From<StackId> for u32 {
    fn from(id: StackId) -> Self {
        id.0
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============ Stack records ============

/// Status of one service within a stack.
///
/// The port is present only while the service is active and listening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Status label reported by the server, e.g. `"running"` or `"stopped"`.
    pub status: String,
    /// Listening port, present iff the service is active.
    #[serde(default)]
    pub port: Option<u16>,
}

impl ServiceStatus {
    /// Whether the service is in the stopped state.
    pub fn is_stopped(&self) -> bool {
        self.status == "stopped"
    }
}

/// One stack as reported by the list endpoint.
///
/// The id is assigned by the server and immutable; the client never
/// constructs stacks, only reflects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    /// Server-assigned identifier, unique within a listing.
    pub stack_id: StackId,
    /// Externally visible network address, when the server could determine it.
    #[serde(default)]
    pub wan_ip: Option<String>,
    /// Named services and their statuses, ordered by name.
    pub services: BTreeMap<String, ServiceStatus>,
}

impl Stack {
    /// The service whose status drives the stack's start/stop action.
    ///
    /// Prefers [`PRIMARY_SERVICE`]; falls back to the first service by name.
    pub fn primary_service(&self) -> Option<(&str, &ServiceStatus)> {
        self.services
            .get_key_value(PRIMARY_SERVICE)
            .or_else(|| self.services.iter().next())
            .map(|(k, v)| (k.as_str(), v))
    }

    /// The status update that toggles this stack: start when the primary
    /// service is stopped, stop otherwise.
    pub fn toggle_target(&self) -> DesiredState {
        match self.primary_service() {
            Some((_, status)) if status.is_stopped() => DesiredState::Running,
            _ => DesiredState::Stopped,
        }
    }
}

// ============ Requests & responses ============

/// Target state for a status-update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredState {
    /// Start the stack's services.
    Running,
    /// Stop the stack's services.
    Stopped,
}

impl DesiredState {
    /// Verb form for user-facing messages ("start" / "stop").
    pub fn verb(self) -> &'static str {
        match self {
            Self::Running => "start",
            Self::Stopped => "stop",
        }
    }

    /// Past-tense verb form ("started" / "stopped").
    pub fn past_verb(self) -> &'static str {
        match self {
            Self::Running => "started",
            Self::Stopped => "stopped",
        }
    }
}

/// Body of a PATCH `/stacks/{id}/status` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// The state the stack should move to.
    pub status: DesiredState,
}

/// Response of a successful create request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedStack {
    /// Identifier of the newly created stack.
    pub stack_id: StackId,
    /// Human-readable confirmation from the server.
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{message}` envelope used by error responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    /// Human-readable message.
    pub message: String,
}
