//! HTTP layer: request execution and status mapping.
//!
//! This is the ONLY place for status code handling. client/mod.rs never
//! interprets status codes.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use tracing::debug;
use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::types::{CreateOutcome, FeatureTypeEnvelope, FeatureTypeLink, FeatureTypesResponse};

use super::helpers::truncate_body;

/// Outcome of a listing request (404 means nothing has been published yet).
#[derive(Debug)]
pub(crate) enum ListOutcome {
    Missing,
    Listed(Vec<FeatureTypeLink>),
}

/// Request body variants.
#[derive(Debug)]
pub(crate) enum Payload<'a> {
    Empty,
    Zip(Vec<u8>),
    Json(&'a FeatureTypeEnvelope),
}

/// HTTP backend (holds the reqwest client with auth already in its default
/// headers, plus the platform base URL).
#[derive(Debug, Clone)]
pub(crate) struct HttpBackend {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: Url,
}

impl HttpBackend {
    /// Send a request that must answer 2xx.
    pub(crate) async fn expect_success(
        &self,
        method: Method,
        url: Url,
        payload: Payload<'_>,
    ) -> ClientResult<reqwest::Response> {
        let response = self.send(method, url, payload).await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(status_error(response).await)
        }
    }

    /// POST a feature type; 409 => Conflict, 2xx => Created.
    pub(crate) async fn create(
        &self,
        url: Url,
        envelope: &FeatureTypeEnvelope,
    ) -> ClientResult<CreateOutcome> {
        let response = self.send(Method::POST, url, Payload::Json(envelope)).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(CreateOutcome::Created);
        }
        if status == StatusCode::CONFLICT {
            debug!("feature type already exists (409)");
            return Ok(CreateOutcome::Conflict);
        }
        Err(status_error(response).await)
    }

    /// GET the feature-type listing; 404 => Missing.
    pub(crate) async fn list(&self, url: Url) -> ClientResult<ListOutcome> {
        let response = self.send(Method::GET, url, Payload::Empty).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("feature type listing not found (404), treating as empty");
            return Ok(ListOutcome::Missing);
        }
        if !status.is_success() {
            return Err(status_error(response).await);
        }

        let parsed: FeatureTypesResponse =
            response.json().await.map_err(|e| ClientError::InvalidResponse {
                message: format!("failed to parse feature type listing: {}", e),
            })?;
        Ok(ListOutcome::Listed(parsed.into_links()))
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        payload: Payload<'_>,
    ) -> ClientResult<reqwest::Response> {
        debug!(method = %method, url = %url, "sending request");

        let request = self.client.request(method, url);
        let request = match payload {
            Payload::Empty => request,
            Payload::Zip(bytes) => request.header(CONTENT_TYPE, "application/zip").body(bytes),
            Payload::Json(envelope) => request.json(envelope),
        };

        Ok(request.send().await?)
    }
}

async fn status_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let body = response
        .text()
        .await
        .map(|b| truncate_body(&b))
        .unwrap_or_else(|_| status.to_string());
    ClientError::Status {
        status: status.as_u16(),
        body,
    }
}
