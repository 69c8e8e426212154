//! HTTP client for the stack API.
//!
//! Request execution follows one uniform flow: send, map transport failures,
//! read the body as text, then interpret status + body through pure helper
//! functions. The helpers carry all response semantics and are unit-testable
//! without a server.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::endpoints::Endpoints;
use crate::error::{ClientError, GENERIC_SERVER_ERROR, Result};
use crate::types::{ApiMessage, CreatedStack, DesiredState, Stack, StackId, StatusUpdate};

/// Client for the stack-management API.
///
/// Holds a connection pool and the endpoint table. Cloning is cheap; clones
/// share the pool.
#[derive(Debug, Clone)]
pub struct StackClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl StackClient {
    /// Create a client for the given endpoint table.
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints,
        }
    }

    /// Request creation of a new stack.
    ///
    /// The server assigns the id; it is returned together with the server's
    /// confirmation message.
    pub async fn create_stack(&self) -> Result<CreatedStack> {
        let url = self.endpoints.create();
        let (status, body) = execute(self.http.post(&url), "POST", &url).await?;
        interpret_payload(status, &body)
    }

    /// Fetch the current stack listing.
    pub async fn list_stacks(&self) -> Result<Vec<Stack>> {
        let url = self.endpoints.list();
        let (status, body) = execute(self.http.get(&url), "GET", &url).await?;
        interpret_payload(status, &body)
    }

    /// Move a stack to the given state (start or stop its services).
    ///
    /// The server answers 204 No Content on success.
    pub async fn set_stack_status(&self, id: StackId, state: DesiredState) -> Result<()> {
        let url = self.endpoints.stack_status(id);
        let request = self.http.patch(&url).json(&StatusUpdate { status: state });
        let (status, body) = execute(request, "PATCH", &url).await?;
        interpret_no_content(status, &body)
    }

    /// Delete a stack. Irreversible; callers are expected to confirm first.
    pub async fn delete_stack(&self, id: StackId) -> Result<()> {
        let url = self.endpoints.stack(id);
        let (status, body) = execute(self.http.delete(&url), "DELETE", &url).await?;
        interpret_no_content(status, &body)
    }
}

/// Send a request and return `(status, body)`.
///
/// Transport failures map to [`ClientError::Timeout`] or
/// [`ClientError::Network`]; nothing here panics.
async fn execute(request: RequestBuilder, method: &str, url: &str) -> Result<(u16, String)> {
    log::debug!("{method} {url}");

    let response = request.send().await.map_err(|e| {
        log::error!("{method} {url} failed: {e}");
        if e.is_timeout() {
            ClientError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ClientError::Network {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("Response Status: {status}");

    let body = response.text().await.map_err(|e| {
        log::error!("{method} {url}: failed to read response body: {e}");
        ClientError::Network {
            detail: format!("failed to read response body: {e}"),
        }
    })?;

    Ok((status, body))
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret a response that must carry a typed payload.
fn interpret_payload<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !is_success(status) {
        return Err(api_error(status, body));
    }

    serde_json::from_str(body).map_err(|e| {
        log::error!("failed to decode response: {e}");
        log::error!("raw response: {body}");
        ClientError::Parse {
            detail: e.to_string(),
        }
    })
}

/// Interpret a response where success carries no meaningful payload
/// (204 No Content, or a 200 with a `{message}` body we don't need).
fn interpret_no_content(status: u16, body: &str) -> Result<()> {
    if is_success(status) {
        return Ok(());
    }
    Err(api_error(status, body))
}

/// Build the API error for a non-2xx response, extracting the `{message}`
/// field when present and falling back to a generic message otherwise.
fn api_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ApiMessage>(body)
        .map(|m| m.message)
        .unwrap_or_else(|_| GENERIC_SERVER_ERROR.to_string());
    log::error!("API error ({status}): {message}");
    ClientError::Api { status, message }
}
