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

/// Implements [Disks](super::stub::Disks) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Disks {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Disks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Disks")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Disks {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::Disks for Disks {
    async fn insert(
        &self,
        req: crate::model::disks::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        let builder = req.source_image.add(builder, "sourceImage");
        self.inner.execute(builder, req.body, options).await
    }
    async fn get(
        &self,
        req: crate::model::disks::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Disk>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks/{}",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
            required(&req.disk, "disk")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
    async fn delete(
        &self,
        req: crate::model::disks::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks/{}",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
            required(&req.disk, "disk")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
    async fn start_async_replication(
        &self,
        req: crate::model::disks::StartAsyncReplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/disks/{}/startAsyncReplication",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
            required(&req.disk, "disk")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, req.body, options).await
    }
    async fn get_operation(
        &self,
        req: crate::model::zone_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/operations/{}",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
            required(&req.operation, "operation")?,
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

/// Implements [RegionDisks](super::stub::RegionDisks) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct RegionDisks {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for RegionDisks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("RegionDisks")
            .field("inner", &self.inner)
            .finish()
    }
}

impl RegionDisks {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::RegionDisks for RegionDisks {
    async fn start_async_replication(
        &self,
        req: crate::model::region_disks::StartAsyncReplicationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/disks/{}/startAsyncReplication",
            required(&req.project, "project")?,
            required(&req.region, "region")?,
            required(&req.disk, "disk")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, req.body, options).await
    }
    async fn get_operation(
        &self,
        req: crate::model::region_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/operations/{}",
            required(&req.project, "project")?,
            required(&req.region, "region")?,
            required(&req.operation, "operation")?,
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

/// Implements [Reservations](super::stub::Reservations) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Reservations {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Reservations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Reservations")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Reservations {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::Reservations for Reservations {
    async fn insert(
        &self,
        req: crate::model::reservations::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/reservations",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, req.body, options).await
    }
    async fn get(
        &self,
        req: crate::model::reservations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Reservation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/reservations/{}",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
            required(&req.reservation, "reservation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
    async fn delete(
        &self,
        req: crate::model::reservations::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/reservations/{}",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
            required(&req.reservation, "reservation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
    async fn get_operation(
        &self,
        req: crate::model::zone_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/operations/{}",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
            required(&req.operation, "operation")?,
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

/// Implements [InstanceTemplates](super::stub::InstanceTemplates) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct InstanceTemplates {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for InstanceTemplates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("InstanceTemplates")
            .field("inner", &self.inner)
            .finish()
    }
}

impl InstanceTemplates {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::InstanceTemplates for InstanceTemplates {
    async fn insert(
        &self,
        req: crate::model::instance_templates::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/instanceTemplates",
            required(&req.project, "project")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, req.body, options).await
    }
    async fn get(
        &self,
        req: crate::model::instance_templates::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::InstanceTemplate>> {
        let path = format!(
            "/compute/v1/projects/{}/global/instanceTemplates/{}",
            required(&req.project, "project")?,
            required(&req.instance_template, "instance_template")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
    async fn delete(
        &self,
        req: crate::model::instance_templates::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/instanceTemplates/{}",
            required(&req.project, "project")?,
            required(&req.instance_template, "instance_template")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
    async fn get_operation(
        &self,
        req: crate::model::global_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/operations/{}",
            required(&req.project, "project")?,
            required(&req.operation, "operation")?,
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

/// Implements [RegionInstanceTemplates](super::stub::RegionInstanceTemplates) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct RegionInstanceTemplates {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for RegionInstanceTemplates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("RegionInstanceTemplates")
            .field("inner", &self.inner)
            .finish()
    }
}

impl RegionInstanceTemplates {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::RegionInstanceTemplates for RegionInstanceTemplates {
    async fn insert(
        &self,
        req: crate::model::region_instance_templates::InsertRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/instanceTemplates",
            required(&req.project, "project")?,
            required(&req.region, "region")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, req.body, options).await
    }
    async fn get(
        &self,
        req: crate::model::region_instance_templates::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::InstanceTemplate>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/instanceTemplates/{}",
            required(&req.project, "project")?,
            required(&req.region, "region")?,
            required(&req.instance_template, "instance_template")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
    async fn delete(
        &self,
        req: crate::model::region_instance_templates::DeleteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/instanceTemplates/{}",
            required(&req.project, "project")?,
            required(&req.region, "region")?,
            required(&req.instance_template, "instance_template")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        let builder = req.request_id.add(builder, "requestId");
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
    async fn get_operation(
        &self,
        req: crate::model::region_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/operations/{}",
            required(&req.project, "project")?,
            required(&req.region, "region")?,
            required(&req.operation, "operation")?,
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

/// Implements [ZoneOperations](super::stub::ZoneOperations) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct ZoneOperations {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for ZoneOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("ZoneOperations")
            .field("inner", &self.inner)
            .finish()
    }
}

impl ZoneOperations {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::ZoneOperations for ZoneOperations {
    async fn get(
        &self,
        req: crate::model::zone_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/zones/{}/operations/{}",
            required(&req.project, "project")?,
            required(&req.zone, "zone")?,
            required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
}

/// Implements [RegionOperations](super::stub::RegionOperations) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct RegionOperations {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for RegionOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("RegionOperations")
            .field("inner", &self.inner)
            .finish()
    }
}

impl RegionOperations {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::RegionOperations for RegionOperations {
    async fn get(
        &self,
        req: crate::model::region_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/regions/{}/operations/{}",
            required(&req.project, "project")?,
            required(&req.region, "region")?,
            required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
}

/// Implements [GlobalOperations](super::stub::GlobalOperations) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct GlobalOperations {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for GlobalOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("GlobalOperations")
            .field("inner", &self.inner)
            .finish()
    }
}

impl GlobalOperations {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST)
            .await?
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self { inner })
    }
}

impl super::stub::GlobalOperations for GlobalOperations {
    async fn get(
        &self,
        req: crate::model::global_operations::GetRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Operation>> {
        let path = format!(
            "/compute/v1/projects/{}/global/operations/{}",
            required(&req.project, "project")?,
            required(&req.operation, "operation")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("alt", "json")])
            .header(gaxi::api_header::X_GOOG_API_CLIENT, api_client_header());
        self.inner.execute(builder, None::<gaxi::http::NoBody>, options).await
    }
}
