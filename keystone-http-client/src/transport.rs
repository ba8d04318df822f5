//! The seam between form submission and the network.

use crate::{FormRequest, Response, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Sends a form submission and returns whatever response came back.
///
/// An `Err` means no response arrived at all. Non-2xx responses are `Ok`
/// and left to the caller to interpret.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: FormRequest) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: FormRequest) -> Result<Response> {
        (**self).send(request).await
    }
}
