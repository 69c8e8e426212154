//! # stackdeck-client
//!
//! Typed HTTP client for the stackdeck stack-management API.
//!
//! A *stack* is a managed group of services (a game server and its SFTP
//! companion) identified by a single positive integer ID. The server exposes
//! a small CRUD surface under `/api/v1`; this crate wraps it with typed
//! requests, a uniform error taxonomy and explicit endpoint configuration.
//!
//! ## Endpoints
//!
//! | Operation     | Method | Path                          | Success                      |
//! |---------------|--------|-------------------------------|------------------------------|
//! | Create stack  | POST   | `/api/v1/stacks`              | `{stack_id, message}`        |
//! | List stacks   | GET    | `/api/v1/stacks`              | JSON array of stack records  |
//! | Update status | PATCH  | `/api/v1/stacks/{id}/status`  | 204 No Content               |
//! | Delete stack  | DELETE | `/api/v1/stacks/{id}`         | `{message}` or 204           |
//!
//! Failures carry a JSON `{message}` body; a missing or unparsable message
//! falls back to a generic error string.
//!
//! ## TLS Backend
//!
//! - **`rustls`** *(default)* — Use rustls. Recommended for cross-compilation.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stackdeck_client::{Endpoints, StackClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoints = Endpoints::new("http://127.0.0.1:8080")?;
//!     let client = StackClient::new(endpoints);
//!
//!     let created = client.create_stack().await?;
//!     println!("created stack {}", created.stack_id);
//!
//!     for stack in client.list_stacks().await? {
//!         println!("{stack:?}");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
mod error;
mod types;

pub use client::StackClient;
pub use endpoints::Endpoints;
pub use error::{ClientError, GENERIC_REQUEST_ERROR, GENERIC_SERVER_ERROR, Result};
pub use types::{
    ApiMessage, CreatedStack, DesiredState, PRIMARY_SERVICE, ServiceStatus, Stack, StackId,
    StatusUpdate,
};
