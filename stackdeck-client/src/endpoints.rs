use url::Url;

use crate::error::ClientError;
use crate::types::StackId;

/// Endpoint table for the stack API.
///
/// An explicit configuration value handed to [`StackClient`](crate::StackClient)
/// at construction; there is no implicit global. All paths live under
/// `/api/v1`.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:8080`.
    base: String,
}

impl Endpoints {
    /// Build an endpoint table from a base URL.
    ///
    /// The input must parse as an absolute URL; a trailing slash is accepted
    /// and normalized away.
    pub fn new(base: &str) -> Result<Self, ClientError> {
        Url::parse(base).map_err(|_| ClientError::InvalidBaseUrl {
            input: base.to_string(),
        })?;
        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// POST target for creating a stack.
    pub fn create(&self) -> String {
        format!("{}/api/v1/stacks", self.base)
    }

    /// GET target for listing stacks.
    pub fn list(&self) -> String {
        format!("{}/api/v1/stacks", self.base)
    }

    /// DELETE target for a single stack.
    pub fn stack(&self, id: StackId) -> String {
        format!("{}/api/v1/stacks/{id}", self.base)
    }

    /// PATCH target for a stack's status sub-resource.
    pub fn stack_status(&self, id: StackId) -> String {
        format!("{}/api/v1/stacks/{id}/status", self.base)
    }
}
