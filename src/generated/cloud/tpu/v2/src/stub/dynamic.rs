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

/// A dyn-compatible, crate-private version of [super::Tpu].
#[async_trait::async_trait]
pub trait Tpu: std::fmt::Debug + Send + Sync {
    async fn get_node(
        &self,
        req: crate::model::GetNodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Node>>;

    async fn start_node(
        &self,
        req: crate::model::StartNodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Operation>>;

    async fn create_queued_resource(
        &self,
        req: crate::model::CreateQueuedResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Operation>>;

    async fn get_queued_resource(
        &self,
        req: crate::model::GetQueuedResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueuedResource>>;

    async fn delete_queued_resource(
        &self,
        req: crate::model::DeleteQueuedResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Operation>>;

    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Operation>>;

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy>;

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy>;
}

/// All implementations of [super::Tpu] also implement [Tpu].
#[async_trait::async_trait]
impl<T: super::Tpu> Tpu for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn get_node(
        &self,
        req: crate::model::GetNodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Node>> {
        T::get_node(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_node(
        &self,
        req: crate::model::StartNodeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Operation>> {
        T::start_node(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_queued_resource(
        &self,
        req: crate::model::CreateQueuedResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Operation>> {
        T::create_queued_resource(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_queued_resource(
        &self,
        req: crate::model::GetQueuedResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueuedResource>> {
        T::get_queued_resource(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_queued_resource(
        &self,
        req: crate::model::DeleteQueuedResourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Operation>> {
        T::delete_queued_resource(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Operation>> {
        T::get_operation(self, req, options).await
    }

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        T::get_polling_error_policy(self, options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        T::get_polling_backoff_policy(self, options)
    }
}
