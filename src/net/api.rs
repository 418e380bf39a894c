//! REST client for the `equipamento` resource.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unsupported`] since the
//! collection is only reachable from the browser.
//!
//! No retry, no timeout, no auth headers: a request that fails is reported
//! to the caller once and the caller decides what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{EquipmentPayload, EquipmentRecord};

/// Base path used when no override is compiled in.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Error raised by a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body did not decode as the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Network I/O is only available in the browser.
    #[error("not available outside the browser")]
    Unsupported,
}

/// REST client bound to a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Api {
    base: String,
}

impl Default for Api {
    /// Base URL from the `EQUIPBOARD_API_BASE` compile-time override, or
    /// [`DEFAULT_BASE_URL`].
    fn default() -> Self {
        Self::new(option_env!("EQUIPBOARD_API_BASE").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl Api {
    /// Create a client for the given base URL. Trailing slashes are trimmed
    /// so endpoint paths join cleanly.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn collection_url(&self) -> String {
        format!("{}/equipamento", self.base)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/equipamento/{id}", self.base)
    }

    /// Fetch the full equipment collection.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn fetch_equipment(&self) -> Result<Vec<EquipmentRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.collection_url())
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<Vec<EquipmentRecord>>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unsupported)
        }
    }

    /// Create a new record. The server assigns the id and returns the
    /// stored record.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn create_equipment(
        &self,
        payload: &EquipmentPayload,
    ) -> Result<EquipmentRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.collection_url())
                .json(payload)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<EquipmentRecord>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unsupported)
        }
    }

    /// Replace the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn update_equipment(
        &self,
        id: i64,
        payload: &EquipmentPayload,
    ) -> Result<EquipmentRecord, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.record_url(id))
                .json(payload)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<EquipmentRecord>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, payload);
            Err(ApiError::Unsupported)
        }
    }

    /// Delete the record with the given id. Success is any 2xx status; no
    /// body is read.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn delete_equipment(&self, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.record_url(id))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unsupported)
        }
    }
}
