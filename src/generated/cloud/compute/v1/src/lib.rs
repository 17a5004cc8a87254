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

//! Google Cloud Client Libraries for Rust - Compute Engine API
//!
//! This crate contains a subset of the Compute Engine clients: zonal and
//! regional disks, reservations, global and regional instance templates, and
//! the three operation services used to poll their long-running operations.
//!
//! Compute Engine operations are not [AIP-151] operations. The
//! `poller()` method on each mutating request builder returns a
//! [Poller][lro::Poller] that re-reads the operation from the zonal, regional,
//! or global operations service until its `status` is `DONE`. A `DONE`
//! operation carrying an `error` payload is reported as a failed operation.
//!
//! [AIP-151]: https://google.aip.dev/151

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

/// Traits to mock the clients in this library.
pub mod stub;

/// Helpers to inspect failed operations.
pub mod errors;

mod operation;
pub(crate) mod transport;

const DEFAULT_HOST: &str = "https://compute.googleapis.com";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub(crate) static X_GOOG_API_CLIENT_HEADER: std::sync::LazyLock<String> =
        std::sync::LazyLock::new(|| {
            let ac = gaxi::api_header::XGoogApiClient {
                name: NAME,
                version: VERSION,
                library_type: gaxi::api_header::GAPIC,
            };
            ac.rest_header_value()
        });

    pub(crate) static INSTRUMENTATION_CLIENT_INFO: gaxi::options::InstrumentationClientInfo =
        gaxi::options::InstrumentationClientInfo {
            service_name: "compute",
            client_version: VERSION,
            client_artifact: NAME,
            default_host: "compute.googleapis.com",
        };
}
