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

//! Samples showing how to start and wait for long-running operations in
//! Compute Engine and Cloud TPU.
//!
//! Each sample starts one operation, waits for it, and prints one status line
//! to the provided writer. Failures, including operations that complete with
//! an error, are returned to the caller.
//!
//! Samples that wait on an operation take a `timeout`. With `None` they poll
//! until the operation completes. With `Some(d)` they stop waiting after `d`
//! and return an error where [gax::error::Error::is_timeout] is true. The
//! operation is never cancelled.

pub mod compute;
pub mod config;
pub mod location;
pub mod tpu;

use lro::Poller;
use std::time::Duration;

/// Polls until the operation completes, or until `timeout` expires if set.
pub(crate) async fn wait<P, R, M>(poller: P, timeout: Option<Duration>) -> gax::Result<R>
where
    P: Poller<R, M>,
{
    match timeout {
        Some(t) => poller.until_done_with_timeout(t).await,
        None => poller.until_done().await,
    }
}
