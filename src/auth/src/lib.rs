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

//! Credentials for the Compute Engine and Cloud TPU clients.
//!
//! The service clients need to authenticate each request. This crate loads
//! the credentials file named by the `GOOGLE_APPLICATION_CREDENTIALS`
//! environment variable, exchanges it for [access tokens], and produces the
//! HTTP headers attached to each request.
//!
//! Two types of credentials files are supported:
//! - [Service account keys], with `"type": "service_account"`.
//! - [Authorized user credentials], as created by
//!   `gcloud auth application-default login`, with `"type": "authorized_user"`.
//!
//! [access tokens]: https://cloud.google.com/docs/authentication/token-types
//! [Service account keys]: https://cloud.google.com/iam/docs/service-account-creds#key-types
//! [Authorized user credentials]: https://cloud.google.com/docs/authentication/application-default-credentials#personal

pub mod build_errors;
pub mod credentials;
pub(crate) mod token;
pub(crate) mod token_cache;

/// The result type for credential operations.
pub(crate) type Result<T> = std::result::Result<T, gax::error::CredentialsError>;
