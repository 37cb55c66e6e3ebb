//! # Backend API Client
//!
//! HTTP client for the authoritative POA backend. Every mutation is a
//! single awaited request; on success the caller refetches, on failure the
//! backend's response body is surfaced verbatim. No retries anywhere.

pub mod error;
pub mod poa_api_client;

pub use error::{ClientError, ClientResult};
pub use poa_api_client::{PoaApiClient, PoaApiConfig};
