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

//! Policies that decide what to do when polling an operation fails.
//!
//! Compute Engine and Cloud TPU operations are polled until they reach a
//! terminal state. A poll may fail for reasons unrelated to the operation: the
//! service is briefly unavailable, the connection drops, the token expired.
//! These policies classify such failures and may bound the polling loop.
//!
//! The policies never apply to the request that starts the operation, and
//! never apply to an operation that completed with an error. Neither of those
//! are polling failures.
//!
//! # Example
//! ```
//! # use lro_samples_gax::polling_error_policy::*;
//! use std::time::Duration;
//! // Stop after 10 minutes or 40 polls, whichever comes first.
//! let policy = Aip194Strict
//!     .with_time_limit(Duration::from_secs(10 * 60))
//!     .with_attempt_limit(40);
//! ```
//!
//! Use [ClientBuilder::with_polling_error_policy] to change the policy for
//! all the requests made by a client, or
//! [RequestOptionsBuilder::with_polling_error_policy] for a single request.
//!
//! [ClientBuilder::with_polling_error_policy]: crate::client_builder::ClientBuilder::with_polling_error_policy
//! [RequestOptionsBuilder::with_polling_error_policy]: crate::options::RequestOptionsBuilder::with_polling_error_policy

use crate::error::Error;
use crate::error::rpc::Code;
use crate::polling_state::PollingState;
use std::sync::Arc;
use std::time::Duration;

/// What to do after a failed poll.
#[derive(Debug)]
pub enum PollDecision {
    /// The failure may go away, poll again after the backoff period.
    Continue(Error),
    /// The failure is permanent, stop polling.
    Stop(Error),
    /// The failure may go away, but the policy limits were reached.
    Exhausted(Error),
}

impl PollDecision {
    /// Returns true if the polling loop should continue.
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Returns true if the error is permanent.
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop(_))
    }

    /// Returns true if the policy limits were reached.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    /// Returns the error that triggered the decision.
    pub fn into_error(self) -> Error {
        match self {
            Self::Continue(e) | Self::Stop(e) | Self::Exhausted(e) => e,
        }
    }

    // Converts `Continue` into `Exhausted` once a limit is reached.
    fn limited(self, limit_reached: bool) -> Self {
        match self {
            Self::Continue(e) if limit_reached => Self::Exhausted(e),
            d => d,
        }
    }
}

/// Classifies polling failures and bounds the polling loop.
///
/// # Example
/// ```
/// # use lro_samples_gax::error::Error;
/// # use lro_samples_gax::polling_error_policy::{PollDecision, PollingErrorPolicy};
/// # use lro_samples_gax::polling_state::PollingState;
/// // Keeps polling through any error, at most 20 times.
/// #[derive(Debug)]
/// struct Stubborn;
/// impl PollingErrorPolicy for Stubborn {
///     fn on_error(&self, state: &PollingState, error: Error) -> PollDecision {
///         if state.attempt_count >= 20 {
///             return PollDecision::Exhausted(error);
///         }
///         PollDecision::Continue(error)
///     }
/// }
/// ```
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Decides what to do after `error`, the result of the last poll.
    fn on_error(&self, state: &PollingState, error: Error) -> PollDecision;

    /// Called after each poll that found the operation still running.
    ///
    /// Returns an error to stop the polling loop.
    fn on_in_progress(&self, _state: &PollingState, _operation_name: &str) -> Option<Error> {
        None
    }
}

/// Holds a [PollingErrorPolicy] in client and request options.
#[derive(Clone)]
pub struct PollingErrorPolicyArg(pub(crate) Arc<dyn PollingErrorPolicy>);

impl<T> From<T> for PollingErrorPolicyArg
where
    T: PollingErrorPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingErrorPolicy>> for PollingErrorPolicyArg {
    fn from(value: Arc<dyn PollingErrorPolicy>) -> Self {
        Self(value)
    }
}

/// Adds limits to any [PollingErrorPolicy].
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Stops polling once `maximum_duration` has elapsed since the operation
    /// started.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Stops polling after `maximum_attempts` polls.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// Continues polling only on the failures [AIP-194] considers safe to retry.
///
/// Those are `UNAVAILABLE` (HTTP 503), I/O errors, and failures that happen
/// before the request is sent, such as a transient failure to refresh the
/// access token. Everything else stops the loop.
///
/// The policy sets no limits, combine it with [PollingErrorPolicyExt].
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl PollingErrorPolicy for Aip194Strict {
    fn on_error(&self, _state: &PollingState, error: Error) -> PollDecision {
        let transient = error.is_transient_and_before_rpc()
            || error.is_io()
            || match error.status() {
                Some(status) => status.code == Code::Unavailable,
                None => {
                    error.http_status_code() == Some(http::StatusCode::SERVICE_UNAVAILABLE.as_u16())
                }
            };
        if transient {
            PollDecision::Continue(error)
        } else {
            PollDecision::Stop(error)
        }
    }
}

/// Continues polling after any failure.
///
/// The policy sets no limits, combine it with [PollingErrorPolicyExt].
#[derive(Clone, Debug)]
pub struct AlwaysContinue;

impl PollingErrorPolicy for AlwaysContinue {
    fn on_error(&self, _state: &PollingState, error: Error) -> PollDecision {
        PollDecision::Continue(error)
    }
}

/// Limits the time spent polling an operation.
///
/// Reaching the limit is an [exhausted][Error::is_exhausted] error. Waiting
/// with a timeout is different, see `Poller::until_done_with_timeout`.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Limits [Aip194Strict] to `maximum_duration`.
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(Aip194Strict, maximum_duration)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    /// Limits `inner` to `maximum_duration`.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn limit_reached(&self, state: &PollingState) -> bool {
        state.elapsed() >= self.maximum_duration
    }
}

impl<P> PollingErrorPolicy for LimitedElapsedTime<P>
where
    P: PollingErrorPolicy + 'static,
{
    fn on_error(&self, state: &PollingState, error: Error) -> PollDecision {
        self.inner
            .on_error(state, error)
            .limited(self.limit_reached(state))
    }

    fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Option<Error> {
        self.inner
            .on_in_progress(state, operation_name)
            .or_else(|| {
                self.limit_reached(state).then(|| {
                    Error::exhausted(Exhausted::new(
                        operation_name,
                        "elapsed time",
                        format!("{:?}", state.elapsed()),
                        format!("{:?}", self.maximum_duration),
                    ))
                })
            })
    }
}

/// Limits the number of polls for an operation.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Limits [Aip194Strict] to `maximum_attempts`.
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(Aip194Strict, maximum_attempts)
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    /// Limits `inner` to `maximum_attempts`.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> PollingErrorPolicy for LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    fn on_error(&self, state: &PollingState, error: Error) -> PollDecision {
        self.inner
            .on_error(state, error)
            .limited(state.attempt_count >= self.maximum_attempts)
    }

    fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Option<Error> {
        self.inner
            .on_in_progress(state, operation_name)
            .or_else(|| {
                (state.attempt_count >= self.maximum_attempts).then(|| {
                    Error::exhausted(Exhausted::new(
                        operation_name,
                        "attempt count",
                        state.attempt_count.to_string(),
                        self.maximum_attempts.to_string(),
                    ))
                })
            })
    }
}

/// The error reported when a polling policy stops the loop.
#[derive(Debug)]
pub struct Exhausted {
    operation_name: String,
    reason: Reason,
}

#[derive(Debug)]
enum Reason {
    Limit {
        name: &'static str,
        value: String,
        limit: String,
    },
    LastError(Error),
}

impl Exhausted {
    pub fn new(
        operation_name: &str,
        limit_name: &'static str,
        value: String,
        limit: String,
    ) -> Self {
        Self {
            operation_name: operation_name.to_string(),
            reason: Reason::Limit {
                name: limit_name,
                value,
                limit,
            },
        }
    }

    /// The policy limits were reached while `last_error` was still transient.
    ///
    /// `last_error` becomes the [source][std::error::Error::source].
    pub fn after_error(operation_name: &str, last_error: Error) -> Self {
        Self {
            operation_name: operation_name.to_string(),
            reason: Reason::LastError(last_error),
        }
    }

    /// The name of the operation that was being polled.
    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            Reason::Limit { name, value, limit } => write!(
                f,
                "stopped polling {}, the {name} ({value}) reached the policy limit ({limit})",
                self.operation_name
            ),
            Reason::LastError(e) => write!(
                f,
                "stopped polling {}, the policy limit was reached after: {e}",
                self.operation_name
            ),
        }
    }
}

impl std::error::Error for Exhausted {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            Reason::Limit { .. } => None,
            Reason::LastError(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use crate::error::rpc::Status;
    use http::HeaderMap;
    use test_case::test_case;

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    fn not_found() -> Error {
        Error::service(Status::default().set_code(Code::NotFound))
    }

    fn http(code: u16) -> Error {
        Error::http(code, HeaderMap::new(), bytes::Bytes::from_static(b"body"))
    }

    #[test]
    fn decision() {
        let d = PollDecision::Continue(unavailable());
        assert!(d.is_continue() && !d.is_stop() && !d.is_exhausted(), "{d:?}");
        let d = PollDecision::Stop(not_found());
        assert!(!d.is_continue() && d.is_stop() && !d.is_exhausted(), "{d:?}");
        let d = PollDecision::Exhausted(unavailable());
        assert!(!d.is_continue() && !d.is_stop() && d.is_exhausted(), "{d:?}");
        let e = d.into_error();
        assert_eq!(e.status().map(|s| s.code), Some(Code::Unavailable));

        assert!(PollDecision::Continue(unavailable()).limited(true).is_exhausted());
        assert!(PollDecision::Continue(unavailable()).limited(false).is_continue());
        assert!(PollDecision::Stop(not_found()).limited(true).is_stop());
    }

    #[test]
    fn exhausted_after_error() {
        use std::error::Error as _;
        let e = Exhausted::after_error("operation-001", unavailable());
        assert_eq!(e.operation_name(), "operation-001");
        let fmt = e.to_string();
        assert!(fmt.contains("operation-001"), "{fmt}");
        let source = e.source().and_then(|s| s.downcast_ref::<Error>());
        assert_eq!(
            source.and_then(|s| s.status()).map(|s| s.code),
            Some(Code::Unavailable),
            "{e:?}"
        );

        let e = Exhausted::new("operation-001", "attempt count", "3".into(), "3".into());
        assert!(e.source().is_none(), "{e:?}");
        assert!(e.to_string().contains("attempt count (3)"), "{e}");
    }

    #[test]
    fn arg_conversions() {
        let _ = PollingErrorPolicyArg::from(LimitedAttemptCount::new(3));
        let policy: Arc<dyn PollingErrorPolicy> = Arc::new(AlwaysContinue);
        let _ = PollingErrorPolicyArg::from(policy);
    }

    #[test_case(unavailable(), true)]
    #[test_case(not_found(), false)]
    #[test_case(http(503), true)]
    #[test_case(http(404), false)]
    #[test_case(Error::io("connection reset"), true)]
    #[test_case(Error::authentication(CredentialsError::from_msg(true, "retry")), true)]
    #[test_case(Error::authentication(CredentialsError::from_msg(false, "bad key")), false)]
    #[test_case(Error::deser("bad json"), false)]
    fn aip194_strict(error: Error, want_continue: bool) {
        let state = PollingState::default();
        let d = Aip194Strict.on_error(&state, error);
        assert_eq!(d.is_continue(), want_continue, "{d:?}");
        assert_eq!(d.is_stop(), !want_continue, "{d:?}");
        assert!(Aip194Strict.on_in_progress(&state, "op").is_none());
    }

    #[test]
    fn always_continue() {
        let state = PollingState::default();
        assert!(AlwaysContinue.on_error(&state, not_found()).is_continue());
        assert!(AlwaysContinue.on_in_progress(&state, "op").is_none());
    }

    #[test]
    fn limited_attempt_count() {
        let p = LimitedAttemptCount::new(3);
        let at = |n| PollingState::default().with_attempt_count(n);
        assert!(p.on_error(&at(2), unavailable()).is_continue());
        assert!(p.on_error(&at(3), unavailable()).is_exhausted());
        assert!(p.on_error(&at(1), not_found()).is_stop());

        assert!(p.on_in_progress(&at(2), "operation-123").is_none());
        let err = p.on_in_progress(&at(3), "operation-123");
        assert!(matches!(&err, Some(e) if e.is_exhausted()), "{err:?}");
        let msg = err.map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("attempt count"), "{msg}");
        assert!(msg.contains("operation-123"), "{msg}");
    }

    #[tokio::test(start_paused = true)]
    async fn limited_elapsed_time() {
        let p = LimitedElapsedTime::new(Duration::from_secs(30));
        let state = PollingState::default();
        assert!(p.on_error(&state, unavailable()).is_continue());
        assert!(p.on_in_progress(&state, "op").is_none());

        tokio::time::advance(Duration::from_secs(30)).await;
        assert!(p.on_error(&state, unavailable()).is_exhausted());
        assert!(p.on_error(&state, not_found()).is_stop());
        let err = p.on_in_progress(&state, "op");
        assert!(matches!(&err, Some(e) if e.is_exhausted()), "{err:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn combined_limits() {
        let p = AlwaysContinue
            .with_time_limit(Duration::from_secs(60))
            .with_attempt_limit(5);
        let at = |n| PollingState::default().with_attempt_count(n);
        assert!(p.on_error(&at(1), not_found()).is_continue());
        assert!(p.on_error(&at(5), not_found()).is_exhausted());
        let state = at(1);
        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(p.on_error(&state, not_found()).is_exhausted());
        assert!(p.on_in_progress(&state, "op").is_some());
    }
}
