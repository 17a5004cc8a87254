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

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use lro_samples_compute_v1::client::Disks;
/// let client = Disks::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for the disks resource.
///
/// # Configuration
///
/// To configure `Disks` use the `with_*` methods in the type returned
/// by [builder()][Disks::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
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
/// `Disks` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Disks` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Disks {
    inner: std::sync::Arc<dyn super::stub::dynamic::Disks>,
}

impl Disks {
    /// Returns a builder for [Disks].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::client::Disks;
    /// let client = Disks::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::disks::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::disks::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Disks + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::Disks::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Creates a persistent disk in the specified project using the data in the request.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn insert(&self) -> super::builder::disks::Insert {
        super::builder::disks::Insert::new(self.inner.clone())
    }

    /// Returns the specified persistent disk.
    pub fn get(&self) -> super::builder::disks::Get {
        super::builder::disks::Get::new(self.inner.clone())
    }

    /// Deletes the specified persistent disk.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn delete(&self) -> super::builder::disks::Delete {
        super::builder::disks::Delete::new(self.inner.clone())
    }

    /// Starts asynchronous replication. Must be invoked on the primary disk.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn start_async_replication(&self) -> super::builder::disks::StartAsyncReplication {
        super::builder::disks::StartAsyncReplication::new(self.inner.clone())
    }

    /// Retrieves the specified operation resource.
    pub fn get_operation(&self) -> super::builder::disks::GetOperation {
        super::builder::disks::GetOperation::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use lro_samples_compute_v1::client::RegionDisks;
/// let client = RegionDisks::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for the regionDisks resource.
///
/// # Configuration
///
/// To configure `RegionDisks` use the `with_*` methods in the type returned
/// by [builder()][RegionDisks::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
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
/// `RegionDisks` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `RegionDisks` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct RegionDisks {
    inner: std::sync::Arc<dyn super::stub::dynamic::RegionDisks>,
}

impl RegionDisks {
    /// Returns a builder for [RegionDisks].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::client::RegionDisks;
    /// let client = RegionDisks::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::region_disks::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::region_disks::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::RegionDisks + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::RegionDisks::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Starts asynchronous replication. Must be invoked on the primary disk.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn start_async_replication(&self) -> super::builder::region_disks::StartAsyncReplication {
        super::builder::region_disks::StartAsyncReplication::new(self.inner.clone())
    }

    /// Retrieves the specified operation resource.
    pub fn get_operation(&self) -> super::builder::region_disks::GetOperation {
        super::builder::region_disks::GetOperation::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use lro_samples_compute_v1::client::Reservations;
/// let client = Reservations::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for the reservations resource.
///
/// # Configuration
///
/// To configure `Reservations` use the `with_*` methods in the type returned
/// by [builder()][Reservations::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
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
/// `Reservations` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Reservations` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Reservations {
    inner: std::sync::Arc<dyn super::stub::dynamic::Reservations>,
}

impl Reservations {
    /// Returns a builder for [Reservations].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::client::Reservations;
    /// let client = Reservations::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::reservations::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::reservations::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Reservations + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::Reservations::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Creates a new reservation.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn insert(&self) -> super::builder::reservations::Insert {
        super::builder::reservations::Insert::new(self.inner.clone())
    }

    /// Retrieves information about the specified reservation.
    pub fn get(&self) -> super::builder::reservations::Get {
        super::builder::reservations::Get::new(self.inner.clone())
    }

    /// Deletes the specified reservation.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn delete(&self) -> super::builder::reservations::Delete {
        super::builder::reservations::Delete::new(self.inner.clone())
    }

    /// Retrieves the specified operation resource.
    pub fn get_operation(&self) -> super::builder::reservations::GetOperation {
        super::builder::reservations::GetOperation::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use lro_samples_compute_v1::client::InstanceTemplates;
/// let client = InstanceTemplates::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for the instanceTemplates resource.
///
/// # Configuration
///
/// To configure `InstanceTemplates` use the `with_*` methods in the type returned
/// by [builder()][InstanceTemplates::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
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
/// `InstanceTemplates` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `InstanceTemplates` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct InstanceTemplates {
    inner: std::sync::Arc<dyn super::stub::dynamic::InstanceTemplates>,
}

impl InstanceTemplates {
    /// Returns a builder for [InstanceTemplates].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::client::InstanceTemplates;
    /// let client = InstanceTemplates::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::instance_templates::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::instance_templates::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::InstanceTemplates + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::InstanceTemplates::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Creates an instance template in the specified project using the data that is included in the request.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn insert(&self) -> super::builder::instance_templates::Insert {
        super::builder::instance_templates::Insert::new(self.inner.clone())
    }

    /// Returns the specified instance template.
    pub fn get(&self) -> super::builder::instance_templates::Get {
        super::builder::instance_templates::Get::new(self.inner.clone())
    }

    /// Deletes the specified instance template.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn delete(&self) -> super::builder::instance_templates::Delete {
        super::builder::instance_templates::Delete::new(self.inner.clone())
    }

    /// Retrieves the specified operation resource.
    pub fn get_operation(&self) -> super::builder::instance_templates::GetOperation {
        super::builder::instance_templates::GetOperation::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use lro_samples_compute_v1::client::RegionInstanceTemplates;
/// let client = RegionInstanceTemplates::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for the regionInstanceTemplates resource.
///
/// # Configuration
///
/// To configure `RegionInstanceTemplates` use the `with_*` methods in the type returned
/// by [builder()][RegionInstanceTemplates::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
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
/// `RegionInstanceTemplates` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `RegionInstanceTemplates` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct RegionInstanceTemplates {
    inner: std::sync::Arc<dyn super::stub::dynamic::RegionInstanceTemplates>,
}

impl RegionInstanceTemplates {
    /// Returns a builder for [RegionInstanceTemplates].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::client::RegionInstanceTemplates;
    /// let client = RegionInstanceTemplates::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::region_instance_templates::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::region_instance_templates::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::RegionInstanceTemplates + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::RegionInstanceTemplates::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Creates an instance template in the specified project and region using the data in the request.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn insert(&self) -> super::builder::region_instance_templates::Insert {
        super::builder::region_instance_templates::Insert::new(self.inner.clone())
    }

    /// Returns the specified regional instance template.
    pub fn get(&self) -> super::builder::region_instance_templates::Get {
        super::builder::region_instance_templates::Get::new(self.inner.clone())
    }

    /// Deletes the specified regional instance template.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a long-running Operation.
    /// Use `poller()` on the returned builder to wait for the operation to
    /// complete, or `send()` to only submit the request.
    pub fn delete(&self) -> super::builder::region_instance_templates::Delete {
        super::builder::region_instance_templates::Delete::new(self.inner.clone())
    }

    /// Retrieves the specified operation resource.
    pub fn get_operation(&self) -> super::builder::region_instance_templates::GetOperation {
        super::builder::region_instance_templates::GetOperation::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use lro_samples_compute_v1::client::ZoneOperations;
/// let client = ZoneOperations::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for the zoneOperations resource.
///
/// # Configuration
///
/// To configure `ZoneOperations` use the `with_*` methods in the type returned
/// by [builder()][ZoneOperations::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
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
/// `ZoneOperations` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `ZoneOperations` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct ZoneOperations {
    inner: std::sync::Arc<dyn super::stub::dynamic::ZoneOperations>,
}

impl ZoneOperations {
    /// Returns a builder for [ZoneOperations].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::client::ZoneOperations;
    /// let client = ZoneOperations::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::zone_operations::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::zone_operations::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ZoneOperations + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::ZoneOperations::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Retrieves the specified zone-specific Operations resource.
    pub fn get(&self) -> super::builder::zone_operations::Get {
        super::builder::zone_operations::Get::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use lro_samples_compute_v1::client::RegionOperations;
/// let client = RegionOperations::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for the regionOperations resource.
///
/// # Configuration
///
/// To configure `RegionOperations` use the `with_*` methods in the type returned
/// by [builder()][RegionOperations::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
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
/// `RegionOperations` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `RegionOperations` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct RegionOperations {
    inner: std::sync::Arc<dyn super::stub::dynamic::RegionOperations>,
}

impl RegionOperations {
    /// Returns a builder for [RegionOperations].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::client::RegionOperations;
    /// let client = RegionOperations::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::region_operations::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::region_operations::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::RegionOperations + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::RegionOperations::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Retrieves the specified region-specific Operations resource.
    pub fn get(&self) -> super::builder::region_operations::Get {
        super::builder::region_operations::Get::new(self.inner.clone())
    }
}

/// Implements a client for the Compute Engine API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use lro_samples_compute_v1::client::GlobalOperations;
/// let client = GlobalOperations::builder().build().await?;
/// // use `client` to make requests to the Compute Engine API.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for the globalOperations resource.
///
/// # Configuration
///
/// To configure `GlobalOperations` use the `with_*` methods in the type returned
/// by [builder()][GlobalOperations::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://compute.googleapis.com`). Applications using regional
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
/// `GlobalOperations` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `GlobalOperations` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct GlobalOperations {
    inner: std::sync::Arc<dyn super::stub::dynamic::GlobalOperations>,
}

impl GlobalOperations {
    /// Returns a builder for [GlobalOperations].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::client::GlobalOperations;
    /// let client = GlobalOperations::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::global_operations::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::global_operations::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::GlobalOperations + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = super::transport::GlobalOperations::new(config).await?;
        Ok(Self {
            inner: std::sync::Arc::new(inner),
        })
    }

    /// Retrieves the specified Operations resource.
    pub fn get(&self) -> super::builder::global_operations::Get {
        super::builder::global_operations::Get::new(self.inner.clone())
    }
}
