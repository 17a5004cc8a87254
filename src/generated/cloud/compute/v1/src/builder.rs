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

pub mod disks {
    use crate::Result;

    /// A builder for [Disks][crate::client::Disks].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::*;
    /// # use builder::disks::ClientBuilder;
    /// # use client::Disks;
    /// let builder : ClientBuilder = Disks::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Disks;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Disks;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Disks] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Disks>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Disks>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Disks::insert][crate::client::Disks::insert] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::disks::Insert;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Insert {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Insert(RequestBuilder<crate::model::disks::InsertRequest>);

    impl Insert {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Disks>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::disks::InsertRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [insert][crate::client::Disks::insert].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .insert(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `insert`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let zone = self.0.request.zone.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                let zone = zone.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_zone(zone)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::disks::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::disks::InsertRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::disks::InsertRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::disks::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [source_image][crate::model::disks::InsertRequest::source_image].
        pub fn set_source_image<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_image = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [source_image][crate::model::disks::InsertRequest::source_image].
        pub fn set_or_clear_source_image<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.source_image = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::disks::InsertRequest::body].
        pub fn set_body<T: Into<crate::model::Disk>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::disks::InsertRequest::body].
        pub fn set_or_clear_body<T: Into<crate::model::Disk>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Insert {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Disks::get][crate::client::Disks::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::disks::GetRequest>);

    impl Get {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Disks>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::disks::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Disk> {
            (*self.0.stub)
                .get(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::disks::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::disks::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [disk][crate::model::disks::GetRequest::disk].
        ///
        /// This is a **required** field for requests.
        pub fn set_disk<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.disk = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Disks::delete][crate::client::Disks::delete] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::disks::Delete;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Delete {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Delete(RequestBuilder<crate::model::disks::DeleteRequest>);

    impl Delete {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Disks>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::disks::DeleteRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [delete][crate::client::Disks::delete].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .delete(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let zone = self.0.request.zone.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                let zone = zone.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_zone(zone)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::disks::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::disks::DeleteRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [disk][crate::model::disks::DeleteRequest::disk].
        ///
        /// This is a **required** field for requests.
        pub fn set_disk<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.disk = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::disks::DeleteRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::disks::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Disks::start_async_replication][crate::client::Disks::start_async_replication] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::disks::StartAsyncReplication;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> StartAsyncReplication {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct StartAsyncReplication(RequestBuilder<crate::model::disks::StartAsyncReplicationRequest>);

    impl StartAsyncReplication {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Disks>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::disks::StartAsyncReplicationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [start_async_replication][crate::client::Disks::start_async_replication].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .start_async_replication(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `start_async_replication`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let zone = self.0.request.zone.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                let zone = zone.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_zone(zone)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::disks::StartAsyncReplicationRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::disks::StartAsyncReplicationRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [disk][crate::model::disks::StartAsyncReplicationRequest::disk].
        ///
        /// This is a **required** field for requests.
        pub fn set_disk<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.disk = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::disks::StartAsyncReplicationRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::disks::StartAsyncReplicationRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::disks::StartAsyncReplicationRequest::body].
        pub fn set_body<T: Into<crate::model::DisksStartAsyncReplicationRequest>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::disks::StartAsyncReplicationRequest::body].
        pub fn set_or_clear_body<T: Into<crate::model::DisksStartAsyncReplicationRequest>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for StartAsyncReplication {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Disks::get_operation][crate::client::Disks::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<crate::model::zone_operations::GetRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Disks>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::zone_operations::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .get_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::zone_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::zone_operations::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [operation][crate::model::zone_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.operation = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod region_disks {
    use crate::Result;

    /// A builder for [RegionDisks][crate::client::RegionDisks].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::*;
    /// # use builder::region_disks::ClientBuilder;
    /// # use client::RegionDisks;
    /// let builder : ClientBuilder = RegionDisks::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::RegionDisks;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = RegionDisks;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::RegionDisks] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionDisks>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionDisks>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [RegionDisks::start_async_replication][crate::client::RegionDisks::start_async_replication] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::region_disks::StartAsyncReplication;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> StartAsyncReplication {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct StartAsyncReplication(RequestBuilder<crate::model::region_disks::StartAsyncReplicationRequest>);

    impl StartAsyncReplication {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionDisks>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::region_disks::StartAsyncReplicationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [start_async_replication][crate::client::RegionDisks::start_async_replication].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .start_async_replication(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `start_async_replication`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let region = self.0.request.region.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                let region = region.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_region(region)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::region_disks::StartAsyncReplicationRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_disks::StartAsyncReplicationRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [disk][crate::model::region_disks::StartAsyncReplicationRequest::disk].
        ///
        /// This is a **required** field for requests.
        pub fn set_disk<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.disk = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::region_disks::StartAsyncReplicationRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::region_disks::StartAsyncReplicationRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::region_disks::StartAsyncReplicationRequest::body].
        pub fn set_body<T: Into<crate::model::RegionDisksStartAsyncReplicationRequest>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::region_disks::StartAsyncReplicationRequest::body].
        pub fn set_or_clear_body<T: Into<crate::model::RegionDisksStartAsyncReplicationRequest>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for StartAsyncReplication {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [RegionDisks::get_operation][crate::client::RegionDisks::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<crate::model::region_operations::GetRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionDisks>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::region_operations::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .get_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::region_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_operations::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [operation][crate::model::region_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.operation = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod reservations {
    use crate::Result;

    /// A builder for [Reservations][crate::client::Reservations].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::*;
    /// # use builder::reservations::ClientBuilder;
    /// # use client::Reservations;
    /// let builder : ClientBuilder = Reservations::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Reservations;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Reservations;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Reservations] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Reservations>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Reservations>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Reservations::insert][crate::client::Reservations::insert] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::reservations::Insert;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Insert {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Insert(RequestBuilder<crate::model::reservations::InsertRequest>);

    impl Insert {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Reservations>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::reservations::InsertRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [insert][crate::client::Reservations::insert].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .insert(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `insert`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let zone = self.0.request.zone.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                let zone = zone.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_zone(zone)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::reservations::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::reservations::InsertRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::reservations::InsertRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::reservations::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::reservations::InsertRequest::body].
        pub fn set_body<T: Into<crate::model::Reservation>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::reservations::InsertRequest::body].
        pub fn set_or_clear_body<T: Into<crate::model::Reservation>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Insert {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Reservations::get][crate::client::Reservations::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::reservations::GetRequest>);

    impl Get {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Reservations>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::reservations::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Reservation> {
            (*self.0.stub)
                .get(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::reservations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::reservations::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [reservation][crate::model::reservations::GetRequest::reservation].
        ///
        /// This is a **required** field for requests.
        pub fn set_reservation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.reservation = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Reservations::delete][crate::client::Reservations::delete] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::reservations::Delete;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Delete {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Delete(RequestBuilder<crate::model::reservations::DeleteRequest>);

    impl Delete {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Reservations>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::reservations::DeleteRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [delete][crate::client::Reservations::delete].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .delete(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let zone = self.0.request.zone.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                let zone = zone.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_zone(zone)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::reservations::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::reservations::DeleteRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [reservation][crate::model::reservations::DeleteRequest::reservation].
        ///
        /// This is a **required** field for requests.
        pub fn set_reservation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.reservation = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::reservations::DeleteRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::reservations::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Reservations::get_operation][crate::client::Reservations::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<crate::model::zone_operations::GetRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::Reservations>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::zone_operations::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .get_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::zone_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::zone_operations::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [operation][crate::model::zone_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.operation = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod instance_templates {
    use crate::Result;

    /// A builder for [InstanceTemplates][crate::client::InstanceTemplates].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::*;
    /// # use builder::instance_templates::ClientBuilder;
    /// # use client::InstanceTemplates;
    /// let builder : ClientBuilder = InstanceTemplates::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::InstanceTemplates;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = InstanceTemplates;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::InstanceTemplates] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::InstanceTemplates>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::InstanceTemplates>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [InstanceTemplates::insert][crate::client::InstanceTemplates::insert] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::instance_templates::Insert;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Insert {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Insert(RequestBuilder<crate::model::instance_templates::InsertRequest>);

    impl Insert {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::InstanceTemplates>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::instance_templates::InsertRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [insert][crate::client::InstanceTemplates::insert].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .insert(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `insert`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::instance_templates::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instance_templates::InsertRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instance_templates::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::instance_templates::InsertRequest::body].
        pub fn set_body<T: Into<crate::model::InstanceTemplate>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::instance_templates::InsertRequest::body].
        pub fn set_or_clear_body<T: Into<crate::model::InstanceTemplate>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Insert {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [InstanceTemplates::get][crate::client::InstanceTemplates::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::instance_templates::GetRequest>);

    impl Get {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::InstanceTemplates>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::instance_templates::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::InstanceTemplate> {
            (*self.0.stub)
                .get(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::instance_templates::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [instance_template][crate::model::instance_templates::GetRequest::instance_template].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_template<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_template = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [InstanceTemplates::delete][crate::client::InstanceTemplates::delete] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::instance_templates::Delete;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Delete {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Delete(RequestBuilder<crate::model::instance_templates::DeleteRequest>);

    impl Delete {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::InstanceTemplates>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::instance_templates::DeleteRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [delete][crate::client::InstanceTemplates::delete].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .delete(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::instance_templates::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [instance_template][crate::model::instance_templates::DeleteRequest::instance_template].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_template<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_template = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::instance_templates::DeleteRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::instance_templates::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [InstanceTemplates::get_operation][crate::client::InstanceTemplates::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<crate::model::global_operations::GetRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::InstanceTemplates>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::global_operations::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .get_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::global_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [operation][crate::model::global_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.operation = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod region_instance_templates {
    use crate::Result;

    /// A builder for [RegionInstanceTemplates][crate::client::RegionInstanceTemplates].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::*;
    /// # use builder::region_instance_templates::ClientBuilder;
    /// # use client::RegionInstanceTemplates;
    /// let builder : ClientBuilder = RegionInstanceTemplates::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::RegionInstanceTemplates;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = RegionInstanceTemplates;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::RegionInstanceTemplates] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionInstanceTemplates>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionInstanceTemplates>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [RegionInstanceTemplates::insert][crate::client::RegionInstanceTemplates::insert] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::region_instance_templates::Insert;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Insert {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Insert(RequestBuilder<crate::model::region_instance_templates::InsertRequest>);

    impl Insert {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionInstanceTemplates>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::region_instance_templates::InsertRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [insert][crate::client::RegionInstanceTemplates::insert].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .insert(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `insert`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let region = self.0.request.region.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                let region = region.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_region(region)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::region_instance_templates::InsertRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_instance_templates::InsertRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::region_instance_templates::InsertRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::region_instance_templates::InsertRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }

        /// Sets the value of [body][crate::model::region_instance_templates::InsertRequest::body].
        pub fn set_body<T: Into<crate::model::InstanceTemplate>>(mut self, v: T) -> Self {
            self.0.request.body = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [body][crate::model::region_instance_templates::InsertRequest::body].
        pub fn set_or_clear_body<T: Into<crate::model::InstanceTemplate>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.body = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Insert {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [RegionInstanceTemplates::get][crate::client::RegionInstanceTemplates::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::region_instance_templates::GetRequest>);

    impl Get {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionInstanceTemplates>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::region_instance_templates::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::InstanceTemplate> {
            (*self.0.stub)
                .get(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::region_instance_templates::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_instance_templates::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [instance_template][crate::model::region_instance_templates::GetRequest::instance_template].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_template<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_template = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [RegionInstanceTemplates::delete][crate::client::RegionInstanceTemplates::delete] calls.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::builder::region_instance_templates::Delete;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> Delete {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Delete(RequestBuilder<crate::model::region_instance_templates::DeleteRequest>);

    impl Delete {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionInstanceTemplates>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::region_instance_templates::DeleteRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// information on [delete][crate::client::RegionInstanceTemplates::delete].
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .delete(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Creates a [Poller][lro::Poller] to work with `delete`.
        pub fn poller(self) -> impl lro::Poller<crate::model::Operation, crate::model::Operation> {
            let polling_error_policy = self.0.stub.get_polling_error_policy(&self.0.options);
            let polling_backoff_policy = self.0.stub.get_polling_backoff_policy(&self.0.options);
            let project = self.0.request.project.clone();
            let region = self.0.request.region.clone();
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let query = move |name: String| {
                let stub = stub.clone();
                let options = options.clone();
                let project = project.clone();
                let region = region.clone();
                async {
                    GetOperation::new(stub)
                        .set_project(project)
                        .set_region(region)
                        .set_operation(name)
                        .with_options(options)
                        .send()
                        .await
                }
            };

            let start = move || async { self.send().await };

            lro::internal::new_discovery_poller(
                polling_error_policy,
                polling_backoff_policy,
                start,
                query,
            )
        }

        /// Sets the value of [project][crate::model::region_instance_templates::DeleteRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_instance_templates::DeleteRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [instance_template][crate::model::region_instance_templates::DeleteRequest::instance_template].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_template<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.instance_template = v.into();
            self
        }

        /// Sets the value of [request_id][crate::model::region_instance_templates::DeleteRequest::request_id].
        pub fn set_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.request_id = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [request_id][crate::model::region_instance_templates::DeleteRequest::request_id].
        pub fn set_or_clear_request_id<T: Into<std::string::String>>(mut self, v: std::option::Option<T>) -> Self {
            self.0.request.request_id = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Delete {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [RegionInstanceTemplates::get_operation][crate::client::RegionInstanceTemplates::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<crate::model::region_operations::GetRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionInstanceTemplates>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::region_operations::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .get_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::region_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_operations::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [operation][crate::model::region_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.operation = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod zone_operations {
    use crate::Result;

    /// A builder for [ZoneOperations][crate::client::ZoneOperations].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::*;
    /// # use builder::zone_operations::ClientBuilder;
    /// # use client::ZoneOperations;
    /// let builder : ClientBuilder = ZoneOperations::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::ZoneOperations;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ZoneOperations;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::ZoneOperations] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::ZoneOperations>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZoneOperations>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [ZoneOperations::get][crate::client::ZoneOperations::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::zone_operations::GetRequest>);

    impl Get {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::ZoneOperations>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::zone_operations::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .get(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::zone_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [zone][crate::model::zone_operations::GetRequest::zone].
        ///
        /// This is a **required** field for requests.
        pub fn set_zone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.zone = v.into();
            self
        }

        /// Sets the value of [operation][crate::model::zone_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.operation = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod region_operations {
    use crate::Result;

    /// A builder for [RegionOperations][crate::client::RegionOperations].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::*;
    /// # use builder::region_operations::ClientBuilder;
    /// # use client::RegionOperations;
    /// let builder : ClientBuilder = RegionOperations::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::RegionOperations;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = RegionOperations;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::RegionOperations] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionOperations>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionOperations>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [RegionOperations::get][crate::client::RegionOperations::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::region_operations::GetRequest>);

    impl Get {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::RegionOperations>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::region_operations::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .get(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::region_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [region][crate::model::region_operations::GetRequest::region].
        ///
        /// This is a **required** field for requests.
        pub fn set_region<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [operation][crate::model::region_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.operation = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod global_operations {
    use crate::Result;

    /// A builder for [GlobalOperations][crate::client::GlobalOperations].
    ///
    /// ```
    /// # async fn sample() -> gax::client_builder::Result<()> {
    /// # use lro_samples_compute_v1::*;
    /// # use builder::global_operations::ClientBuilder;
    /// # use client::GlobalOperations;
    /// let builder : ClientBuilder = GlobalOperations::builder();
    /// let client = builder
    ///     .with_endpoint("https://compute.googleapis.com")
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::GlobalOperations;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = GlobalOperations;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::GlobalOperations] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::GlobalOperations>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::GlobalOperations>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [GlobalOperations::get][crate::client::GlobalOperations::get] calls.
    #[derive(Clone, Debug)]
    pub struct Get(RequestBuilder<crate::model::global_operations::GetRequest>);

    impl Get {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::GlobalOperations>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::global_operations::GetRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Operation> {
            (*self.0.stub)
                .get(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::global_operations::GetRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [operation][crate::model::global_operations::GetRequest::operation].
        ///
        /// This is a **required** field for requests.
        pub fn set_operation<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.operation = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Get {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
