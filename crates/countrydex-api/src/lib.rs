//! Countrydex API Client
//!
//! Browser-side HTTP client for the public countries API. Requests go out
//! through `gloo-net`; body decoding is a pure function so the reply-shape
//! handling is natively testable.

pub mod client;
pub mod error;

pub use client::{CountriesClient, decode_countries};
pub use error::{ApiError, Result};
