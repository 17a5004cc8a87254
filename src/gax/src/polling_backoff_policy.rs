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

//! How long to wait between polls of a long-running operation.
//!
//! Compute Engine operations usually complete in a few seconds, Cloud TPU
//! operations can take several minutes. The clients use an
//! [ExponentialBackoff][crate::exponential_backoff::ExponentialBackoff] by
//! default, applications can replace it per client or per request.

use crate::polling_state::PollingState;
use std::sync::Arc;
use std::time::Duration;

/// Computes the delay before the next `GetOperation` request.
pub trait PollingBackoffPolicy: Send + Sync + std::fmt::Debug {
    /// The delay before the poll numbered `state.attempt_count`.
    fn wait_period(&self, state: &PollingState) -> Duration;
}

/// A fixed delay between polls.
///
/// Mostly useful in tests, where the polling loop should not wait.
///
/// # Example
/// ```
/// # use lro_samples_gax::polling_backoff_policy::*;
/// # use lro_samples_gax::polling_state::PollingState;
/// # use std::time::Duration;
/// let policy = FixedDelay(Duration::from_millis(5));
/// assert_eq!(policy.wait_period(&PollingState::default()), Duration::from_millis(5));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedDelay(pub Duration);

impl PollingBackoffPolicy for FixedDelay {
    fn wait_period(&self, _state: &PollingState) -> Duration {
        self.0
    }
}

/// Accepts any backoff policy in the client and request option setters.
#[derive(Clone)]
pub struct PollingBackoffPolicyArg(pub(crate) Arc<dyn PollingBackoffPolicy>);

impl<T> From<T> for PollingBackoffPolicyArg
where
    T: PollingBackoffPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingBackoffPolicy>> for PollingBackoffPolicyArg {
    fn from(value: Arc<dyn PollingBackoffPolicy>) -> Self {
        Self(value)
    }
}
