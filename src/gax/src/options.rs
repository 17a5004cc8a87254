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

//! Options for a single request.
//!
//! Each client method returns a request builder. Besides the request fields,
//! the builder accepts the options in this module through the
//! [RequestOptionsBuilder] trait. Options set on a request take precedence
//! over the options set when the client was created.
//!
//! # Example
//! ```no_run
//! # use lro_samples_gax::options::RequestOptionsBuilder;
//! # use lro_samples_gax::polling_backoff_policy::FixedDelay;
//! # use lro_samples_gax::polling_error_policy::LimitedAttemptCount;
//! # use std::time::Duration;
//! fn tune<B: RequestOptionsBuilder>(builder: B) -> B {
//!     builder
//!         .with_attempt_timeout(Duration::from_secs(30))
//!         .with_polling_error_policy(LimitedAttemptCount::new(5))
//!         .with_polling_backoff_policy(FixedDelay(Duration::from_secs(2)))
//! }
//! ```

use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// The options for one request, as seen by the transport.
///
/// Mocks receive this value in each stub call, tests can inspect it to verify
/// the application configured the request as expected.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    polling: Polling,
}

#[derive(Clone, Debug, Default)]
struct Polling {
    errors: Option<Arc<dyn PollingErrorPolicy>>,
    backoff: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl RequestOptions {
    /// The prefix for the `user-agent` header, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// The timeout for each HTTP request.
    ///
    /// This does not limit how long the application waits for a long-running
    /// operation to complete. Use the poller's `until_done_with_timeout()` for
    /// that.
    pub fn attempt_timeout(&self) -> Option<Duration> {
        self.attempt_timeout
    }

    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// The polling error policy for this request, if it overrides the client's.
    pub fn polling_error_policy(&self) -> Option<&Arc<dyn PollingErrorPolicy>> {
        self.polling.errors.as_ref()
    }

    pub fn set_polling_error_policy<V: Into<PollingErrorPolicyArg>>(&mut self, v: V) {
        self.polling.errors = Some(v.into().0);
    }

    /// The polling backoff policy for this request, if it overrides the
    /// client's.
    pub fn polling_backoff_policy(&self) -> Option<&Arc<dyn PollingBackoffPolicy>> {
        self.polling.backoff.as_ref()
    }

    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(&mut self, v: V) {
        self.polling.backoff = Some(v.into().0);
    }
}

/// Setters for the [RequestOptions] of a request builder.
pub trait RequestOptionsBuilder: internal::RequestBuilder + Sized {
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_error_policy(v);
        self
    }

    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_backoff_policy(v);
        self
    }
}

impl<T: internal::RequestBuilder> RequestOptionsBuilder for T {}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! Implementation details for the service clients, not for applications.
    use super::RequestOptions;

    /// Gives [super::RequestOptionsBuilder] access to the options of a
    /// request builder.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polling_backoff_policy::FixedDelay;
    use crate::polling_error_policy::{AlwaysContinue, LimitedAttemptCount};
    use crate::polling_state::PollingState;

    #[derive(Debug, Default)]
    struct InsertDisk {
        options: RequestOptions,
    }

    impl internal::RequestBuilder for InsertDisk {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    #[test]
    fn defaults_are_unset() {
        let options = RequestOptions::default();
        assert!(options.user_agent().is_none(), "{options:?}");
        assert!(options.attempt_timeout().is_none(), "{options:?}");
        assert!(options.polling_error_policy().is_none(), "{options:?}");
        assert!(options.polling_backoff_policy().is_none(), "{options:?}");
    }

    #[test]
    fn setters() {
        let mut options = RequestOptions::default();
        options.set_user_agent("cloud-samples/1.0");
        options.set_attempt_timeout(Duration::from_secs(45));
        options.set_polling_backoff_policy(FixedDelay(Duration::from_millis(250)));
        assert_eq!(options.user_agent(), Some("cloud-samples/1.0"));
        assert_eq!(options.attempt_timeout(), Some(Duration::from_secs(45)));
        let backoff = options
            .polling_backoff_policy()
            .map(|p| p.wait_period(&PollingState::default()));
        assert_eq!(backoff, Some(Duration::from_millis(250)));
    }

    #[test]
    fn last_setter_wins() {
        let mut builder = InsertDisk::default()
            .with_polling_error_policy(AlwaysContinue)
            .with_attempt_timeout(Duration::from_secs(1))
            .with_polling_error_policy(LimitedAttemptCount::new(2))
            .with_attempt_timeout(Duration::from_secs(9));
        let options = internal::RequestBuilder::request_options(&mut builder);
        assert_eq!(options.attempt_timeout(), Some(Duration::from_secs(9)));
        let fmt = format!("{:?}", options.polling_error_policy());
        assert!(fmt.contains("LimitedAttemptCount"), "{fmt}");
    }
}
