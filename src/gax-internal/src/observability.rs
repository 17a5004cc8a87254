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

//! Tracing spans for HTTP requests.
//!
//! The attribute names follow the [OpenTelemetry Semantic Conventions for
//! HTTP], so any `tracing` subscriber bridging to OpenTelemetry can export
//! them unchanged.
//!
//! [OpenTelemetry Semantic Conventions for HTTP]: https://opentelemetry.io/docs/specs/semconv/http/http-spans/

use crate::options::InstrumentationClientInfo;
use tracing::Span;
use tracing::field::Empty;

const KEY_OTEL_KIND: &str = "otel.kind";
const KEY_OTEL_NAME: &str = "otel.name";
const KEY_OTEL_STATUS: &str = "otel.status";
const KEY_RPC_SYSTEM: &str = "rpc.system";
const KEY_HTTP_REQUEST_METHOD: &str = "http.request.method";
const KEY_HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
const KEY_SERVER_ADDRESS: &str = "server.address";
const KEY_SERVER_PORT: &str = "server.port";
const KEY_URL_FULL: &str = "url.full";
const KEY_ERROR_TYPE: &str = "error.type";
const KEY_GCP_CLIENT_SERVICE: &str = "gcp.client.service";
const KEY_GCP_CLIENT_VERSION: &str = "gcp.client.version";
const KEY_GCP_CLIENT_ARTIFACT: &str = "gcp.client.artifact";

/// The attributes of a tracing span for one HTTP request.
#[derive(Debug, Clone)]
pub(crate) struct HttpSpanInfo {
    otel_name: String,
    http_request_method: String,
    server_address: String,
    server_port: i64,
    url_full: String,
    gcp_client_service: Option<&'static str>,
    gcp_client_version: Option<&'static str>,
    gcp_client_artifact: Option<&'static str>,
}

impl HttpSpanInfo {
    pub(crate) fn from_request(
        request: &reqwest::Request,
        instrumentation: Option<&'static InstrumentationClientInfo>,
    ) -> Self {
        let url = request.url();
        let method = request.method();
        Self {
            otel_name: method.to_string(),
            http_request_method: method.to_string(),
            server_address: url.host_str().map(String::from).unwrap_or_default(),
            server_port: url.port_or_known_default().map(|p| p as i64).unwrap_or(0),
            url_full: url.to_string(),
            gcp_client_service: instrumentation.map(|i| i.service_name),
            gcp_client_version: instrumentation.map(|i| i.client_version),
            gcp_client_artifact: instrumentation.map(|i| i.client_artifact),
        }
    }

    /// Creates a new span. The response attributes are recorded later, see
    /// [record_response].
    pub(crate) fn create_span(&self) -> Span {
        tracing::info_span!(
            "http_request",
            { KEY_OTEL_NAME } = self.otel_name,
            { KEY_OTEL_KIND } = "Client",
            { KEY_RPC_SYSTEM } = "http",
            { KEY_HTTP_REQUEST_METHOD } = self.http_request_method,
            { KEY_SERVER_ADDRESS } = self.server_address,
            { KEY_SERVER_PORT } = self.server_port,
            { KEY_URL_FULL } = self.url_full,
            { KEY_GCP_CLIENT_SERVICE } = self.gcp_client_service,
            { KEY_GCP_CLIENT_VERSION } = self.gcp_client_version,
            { KEY_GCP_CLIENT_ARTIFACT } = self.gcp_client_artifact,
            { KEY_HTTP_RESPONSE_STATUS_CODE } = Empty,
            { KEY_ERROR_TYPE } = Empty,
            { KEY_OTEL_STATUS } = Empty,
        )
    }
}

/// Records the outcome of the HTTP request in `span`.
pub(crate) fn record_response(span: &Span, result: &Result<reqwest::Response, reqwest::Error>) {
    match result {
        Ok(response) => {
            let status = response.status();
            span.record(KEY_HTTP_RESPONSE_STATUS_CODE, status.as_u16() as i64);
            if status.is_success() {
                span.record(KEY_OTEL_STATUS, "Ok");
            } else {
                span.record(KEY_OTEL_STATUS, "Error");
                span.record(KEY_ERROR_TYPE, status.as_str());
            }
        }
        Err(err) => {
            let name = match err {
                e if e.is_timeout() => "TIMEOUT",
                e if e.is_connect() => "CONNECTION_ERROR",
                e if e.is_request() => "REQUEST_ERROR",
                _ => "UNKNOWN",
            };
            span.record(KEY_OTEL_STATUS, "Error");
            span.record(KEY_ERROR_TYPE, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tracing::{Subscriber, span};
    use tracing_subscriber::{Layer, layer::Context};

    const INFO: InstrumentationClientInfo = InstrumentationClientInfo {
        service_name: "compute",
        client_version: "1.2.3",
        client_artifact: "lro-samples-compute-v1",
        default_host: "compute.googleapis.com",
    };

    // Stores the attributes of each span, including the values recorded after
    // the span is created.
    #[derive(Clone, Default)]
    struct TestLayer {
        spans: Arc<Mutex<HashMap<span::Id, HashMap<String, String>>>>,
    }

    impl<S> Layer<S> for TestLayer
    where
        S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, _ctx: Context<'_, S>) {
            let mut span_map = HashMap::new();
            attrs.record(&mut TestVisitor(&mut span_map));
            self.spans.lock().unwrap().insert(id.clone(), span_map);
        }

        fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
            let mut spans = self.spans.lock().unwrap();
            let span_map = spans.entry(id.clone()).or_default();
            values.record(&mut TestVisitor(span_map));
        }
    }

    struct TestVisitor<'a>(&'a mut HashMap<String, String>);

    impl tracing::field::Visit for TestVisitor<'_> {
        fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    #[test]
    fn create_span_attributes() {
        let layer = TestLayer::default();
        use tracing_subscriber::prelude::*;
        let subscriber = tracing_subscriber::registry().with(layer.clone());

        let id = tracing::subscriber::with_default(subscriber, || {
            let request = reqwest::Request::new(
                Method::POST,
                "https://compute.googleapis.com/compute/v1/projects/p/zones/z/disks"
                    .parse()
                    .unwrap(),
            );
            let span = HttpSpanInfo::from_request(&request, Some(&INFO)).create_span();
            span.id().unwrap()
        });

        let spans = layer.spans.lock().unwrap();
        let attributes = spans.get(&id).expect("span not found");
        assert_eq!(attributes.len(), 10, "{attributes:?}");
        assert_eq!(attributes.get(KEY_OTEL_NAME).unwrap(), "POST");
        assert_eq!(attributes.get(KEY_OTEL_KIND).unwrap(), "Client");
        assert_eq!(attributes.get(KEY_RPC_SYSTEM).unwrap(), "http");
        assert_eq!(attributes.get(KEY_HTTP_REQUEST_METHOD).unwrap(), "POST");
        assert_eq!(
            attributes.get(KEY_SERVER_ADDRESS).unwrap(),
            "compute.googleapis.com"
        );
        assert_eq!(attributes.get(KEY_SERVER_PORT).unwrap(), "443");
        assert_eq!(
            attributes.get(KEY_URL_FULL).unwrap(),
            "https://compute.googleapis.com/compute/v1/projects/p/zones/z/disks"
        );
        assert_eq!(attributes.get(KEY_GCP_CLIENT_SERVICE).unwrap(), "compute");
        assert_eq!(attributes.get(KEY_GCP_CLIENT_VERSION).unwrap(), "1.2.3");
        assert_eq!(
            attributes.get(KEY_GCP_CLIENT_ARTIFACT).unwrap(),
            "lro-samples-compute-v1"
        );
    }

    #[test]
    fn create_span_without_instrumentation() {
        let layer = TestLayer::default();
        use tracing_subscriber::prelude::*;
        let subscriber = tracing_subscriber::registry().with(layer.clone());

        let id = tracing::subscriber::with_default(subscriber, || {
            let request =
                reqwest::Request::new(Method::GET, "http://localhost:8080/".parse().unwrap());
            let span = HttpSpanInfo::from_request(&request, None).create_span();
            span.id().unwrap()
        });

        let spans = layer.spans.lock().unwrap();
        let attributes = spans.get(&id).expect("span not found");
        assert_eq!(attributes.len(), 7, "{attributes:?}");
        assert_eq!(attributes.get(KEY_SERVER_PORT).unwrap(), "8080");
        assert!(attributes.get(KEY_GCP_CLIENT_SERVICE).is_none());
        assert!(attributes.get(KEY_HTTP_RESPONSE_STATUS_CODE).is_none());
    }

    #[test]
    fn record_http_error() -> anyhow::Result<()> {
        let layer = TestLayer::default();
        use tracing_subscriber::prelude::*;
        let subscriber = tracing_subscriber::registry().with(layer.clone());

        let response: reqwest::Response = http::Response::builder()
            .status(404)
            .body("not found")?
            .into();
        let id = tracing::subscriber::with_default(subscriber, || {
            let request =
                reqwest::Request::new(Method::GET, "http://localhost:8080/".parse().unwrap());
            let span = HttpSpanInfo::from_request(&request, None).create_span();
            record_response(&span, &Ok(response));
            span.id().unwrap()
        });

        let spans = layer.spans.lock().unwrap();
        let attributes = spans.get(&id).expect("span not found");
        assert_eq!(attributes.get(KEY_HTTP_RESPONSE_STATUS_CODE).unwrap(), "404");
        assert_eq!(attributes.get(KEY_OTEL_STATUS).unwrap(), "Error");
        assert_eq!(attributes.get(KEY_ERROR_TYPE).unwrap(), "404");
        Ok(())
    }
}
