//! Portico HTTP module: API types and the typed session client
//!
//! The backend session is cookie-based; state-changing requests echo the
//! anti-forgery cookie value in a request header. The client compiles for
//! both wasm32 (browser fetch) and native targets (integration tests).

pub mod client;
pub mod types;

pub use client::error::{ClientError, FieldError, ValidationErrors};
pub use client::{ApiClient, ApiClientBuilder};
