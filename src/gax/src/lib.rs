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

//! Helpers shared by the Compute Engine and Cloud TPU clients.
//!
//! This crate contains the error types, the polling policies for long-running
//! operations, and the per-request options used by the service clients in this
//! workspace.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the service clients.
pub mod error;

pub mod options;

/// Configure a client before it is created.
pub mod client_builder;

pub mod exponential_backoff;
pub mod polling_backoff_policy;
pub mod polling_error_policy;
pub mod polling_state;
pub mod response;
