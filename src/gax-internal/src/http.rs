// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Sends JSON requests over HTTP/1.1 and decodes the responses.

use crate::observability::{HttpSpanInfo, record_response};
use crate::options::{ClientConfig, InstrumentationClientInfo};
use auth::credentials::Credentials;
use bytes::Bytes;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::error::rpc::Status;
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{Aip194Strict, PollingErrorPolicy};
use gax::response::{Parts, Response};
use http::HeaderMap;
use reqwest::StatusCode;
use reqwest::header::{HeaderValue, USER_AGENT};
use std::sync::Arc;
use tracing::Instrument;

/// The HTTP client shared by all the request stubs of one service client.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    http: reqwest::Client,
    credentials: Credentials,
    endpoint: String,
    error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    instrumentation: Option<&'static InstrumentationClientInfo>,
    tracing: bool,
}

/// The body for requests that have none.
#[derive(serde::Serialize)]
pub struct NoBody;

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let credentials = match config.cred {
            Some(c) => c,
            None => auth::credentials::Builder::default()
                .build()
                .map_err(BuilderError::cred)?,
        };
        let http = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            http,
            credentials,
            endpoint: config
                .endpoint
                .unwrap_or_else(|| default_endpoint.to_string()),
            error_policy: config.polling_error_policy,
            backoff_policy: config.polling_backoff_policy,
            instrumentation: None,
            tracing,
        })
    }

    pub fn with_instrumentation(mut self, info: &'static InstrumentationClientInfo) -> Self {
        self.instrumentation = Some(info);
        self
    }

    /// Starts a request for `path`, relative to the service endpoint.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.http.request(method, format!("{}{path}", self.endpoint))
    }

    /// Sends the request and decodes the JSON response into `O`.
    pub async fn execute<I, O>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        if let Some(agent) = options.user_agent() {
            let value = HeaderValue::from_str(agent).map_err(Error::ser)?;
            builder = builder.header(USER_AGENT, value);
        }
        if let Some(timeout) = options.attempt_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let headers = self
            .credentials
            .headers()
            .await
            .map_err(Error::authentication)?;
        let request = builder.headers(headers).build().map_err(Error::ser)?;
        let response = self.send(request).await?;
        decode(response).await
    }

    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let result = if self.tracing {
            let span = HttpSpanInfo::from_request(&request, self.instrumentation).create_span();
            let result = self.http.execute(request).instrument(span.clone()).await;
            record_response(&span, &result);
            result
        } else {
            self.http.execute(request).await
        };
        result.map_err(|e| {
            if e.is_timeout() {
                Error::timeout(e)
            } else {
                Error::io(e)
            }
        })
    }

    /// The request option, or the client option, or [Aip194Strict].
    pub fn get_polling_error_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingErrorPolicy> {
        options
            .polling_error_policy()
            .or(self.error_policy.as_ref())
            .cloned()
            .unwrap_or_else(|| Arc::new(Aip194Strict))
    }

    /// The request option, or the client option, or [ExponentialBackoff].
    pub fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .or(self.backoff_policy.as_ref())
            .cloned()
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

async fn decode<O>(response: reqwest::Response) -> Result<Response<O>>
where
    O: serde::de::DeserializeOwned + Default,
{
    let code = response.status();
    let (parts, body) = http::Response::from(response).into_parts();
    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();
    if !code.is_success() {
        return Err(to_error(code.as_u16(), parts.headers, body));
    }
    // 204 responses have no body, not even `{}`.
    let value = if code == StatusCode::NO_CONTENT && body.is_empty() {
        O::default()
    } else {
        serde_json::from_slice(&body).map_err(Error::deser)?
    };
    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        value,
    ))
}

// Compute Engine and Cloud TPU describe most errors with a `google.rpc.Status`
// payload. Proxies and load balancers may return anything.
fn to_error(status_code: u16, headers: HeaderMap, body: Bytes) -> Error {
    match Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    }
}
