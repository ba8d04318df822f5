//! # Keystone HTTP Client
//!
//! Transport for form submissions: each request carries the form's fields as
//! multipart (or URL-encoded) data and asks for a JSON response.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keystone_http_client::{FormRequest, HttpClient, HttpClientConfig, Transport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(HttpClientConfig::default())?;
//!
//!     let response = client
//!         .send(
//!             FormRequest::post("https://forms.example.org/f/contact")
//!                 .field("name", "Ada")
//!                 .field("email", "ada@example.org"),
//!         )
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! The [`Transport`] trait is the seam callers depend on, so tests can swap
//! in an in-process implementation.

mod client;
mod config;
mod error;
mod request;
mod response;
mod transport;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::{BodyEncoding, FormRequest};
pub use response::Response;
pub use transport::Transport;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, Method, StatusCode, header};
