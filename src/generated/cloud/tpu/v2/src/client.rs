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
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Cloud TPU API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use lro_samples_tpu_v2::client::Tpu;
/// let client = Tpu::builder().build().await?;
/// // use `client` to make requests to the Cloud TPU API.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Manages TPU nodes and other resources
///
/// TPU API v2
///
/// # Configuration
///
/// To configure `Tpu` use the `with_*` methods in the type returned
/// by [builder()][Tpu::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://tpu.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the credentials file
///   named by `GOOGLE_APPLICATION_CREDENTIALS`.
///
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Tpu` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Tpu` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Tpu {
    inner: std::sync::Arc<dyn super::stub::dynamic::Tpu>,
}

impl Tpu {
    /// Returns a builder for [Tpu].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_tpu_v2::client::Tpu;
    /// let client = Tpu::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::tpu::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::tpu::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Tpu + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::Tpu::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Gets the details of a node.
    pub fn get_node(&self) -> super::builder::tpu::GetNode {
        super::builder::tpu::GetNode::new(self.inner.clone())
    }

    /// Starts a node.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn start_node(&self) -> super::builder::tpu::StartNode {
        super::builder::tpu::StartNode::new(self.inner.clone())
    }

    /// Creates a QueuedResource TPU instance.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn create_queued_resource(&self) -> super::builder::tpu::CreateQueuedResource {
        super::builder::tpu::CreateQueuedResource::new(self.inner.clone())
    }

    /// Gets details of a queued resource.
    pub fn get_queued_resource(&self) -> super::builder::tpu::GetQueuedResource {
        super::builder::tpu::GetQueuedResource::new(self.inner.clone())
    }

    /// Deletes a QueuedResource TPU instance.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn delete_queued_resource(&self) -> super::builder::tpu::DeleteQueuedResource {
        super::builder::tpu::DeleteQueuedResource::new(self.inner.clone())
    }

    /// Gets the latest state of a long-running operation.
    pub fn get_operation(&self) -> super::builder::tpu::GetOperation {
        super::builder::tpu::GetOperation::new(self.inner.clone())
    }
}
