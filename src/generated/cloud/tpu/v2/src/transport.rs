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

use crate::Result;
use gaxi::path_parameter::required;
use gaxi::query_parameter::QueryParameter;

fn api_client_header() -> reqwest::header::HeaderValue {
    reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER)
}

/// Implements [Tpu](super::stub::Tpu) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Tpu {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Tpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Tpu")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Tpu {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::Tpu for Tpu {
    async fn get_node(
        &self,
        req: crate::model::GetNodeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Node>> {
        let path = format!(
            "/v2/{}",
            required(&req.name, "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn start_node(
        &self,
        req: crate::model::StartNodeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/v2/{}:start",
            required(&req.name, "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, Some(serde_json::json!({})), options).await
    }

    async fn create_queued_resource(
        &self,
        req: crate::model::CreateQueuedResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/v2/{}/queuedResources",
            required(&req.parent, "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.queued_resource_id.add(builder, "queuedResourceId");
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, req.queued_resource, options).await
    }

    async fn get_queued_resource(
        &self,
        req: crate::model::GetQueuedResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueuedResource>> {
        let path = format!(
            "/v2/{}",
            required(&req.name, "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn delete_queued_resource(
        &self,
        req: crate::model::DeleteQueuedResourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/v2/{}",
            required(&req.name, "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        let builder = req.force.add(builder, "force");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/v2/{}",
            required(&req.name, "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}
