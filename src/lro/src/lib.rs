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

//! Types and functions to make long-running operations easier to use.
//!
//! Mutating calls in Compute Engine and Cloud TPU do not complete
//! synchronously. The service returns an operation handle, and the caller
//! polls that handle until it reaches a terminal state. This crate normalizes
//! the different operation types returned by each service into a single
//! polling contract.
//!
//! The main entry point is the [Poller] trait. The client libraries return an
//! `impl Poller<R, M>` from the `poller()` function of each request builder.
//! The first call to [poll()][Poller::poll] submits the request, and the
//! following calls query the status of the operation.
//!
//! # Example
//! ```
//! # use lro_samples_lro::{Poller, PollingResult};
//! # use std::time::Duration;
//! async fn wait<P: Poller<String, ()>>(poller: P) -> lro_samples_lro::Result<String> {
//!     // Gives up waiting after 3 minutes. The operation is not cancelled.
//!     poller.until_done_with_timeout(Duration::from_secs(180)).await
//! }
//! ```

use std::future::Future;
use std::time::Duration;

pub use gax::Result;
pub use gax::error::Error;
pub use gax::polling_backoff_policy::PollingBackoffPolicy;
pub use gax::polling_error_policy::PollingErrorPolicy;
use gax::error::rpc::Status;

#[doc(hidden)]
pub mod internal;

/// The result of polling a Long-Running Operation (LRO).
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the LRO completes
///   successfully.
/// * `M` - the metadata type. While operations are in progress the LRO may
///   return values of this type.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// The operation is still in progress.
    InProgress(Option<M>),
    /// The operation completed. This includes the result.
    Completed(Result<R>),
    /// An error trying to poll the LRO.
    ///
    /// Not all errors indicate that the operation failed. For example, this
    /// may fail because it was not possible to connect to Google Cloud. Such
    /// transient errors may disappear in the next polling attempt.
    ///
    /// Other errors will never recover. For example, a service error with a
    /// `NOT_FOUND` or `PERMISSION_DENIED` code will never recover.
    PollingError(Error),
}

/// The local view of a long-running operation.
///
/// ```text
/// NotSubmitted -> Submitted -> Polling -> { DoneOk, DoneError, TimedOut }
/// ```
///
/// The terminal states never transition again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OperationState {
    /// The request has not been sent.
    NotSubmitted,
    /// The service accepted the request and returned an operation handle.
    Submitted,
    /// At least one status query returned an operation still in progress.
    Polling,
    /// The operation completed without an error payload.
    DoneOk,
    /// The submission failed, the operation completed with an error payload,
    /// or the polling policy gave up.
    DoneError,
    /// The local wait expired. The operation may still complete remotely.
    TimedOut,
}

impl OperationState {
    /// Returns true if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::DoneOk | Self::DoneError | Self::TimedOut)
    }
}

impl std::fmt::Display for OperationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NotSubmitted => "NOT_SUBMITTED",
            Self::Submitted => "SUBMITTED",
            Self::Polling => "POLLING",
            Self::DoneOk => "DONE_OK",
            Self::DoneError => "DONE_ERROR",
            Self::TimedOut => "TIMED_OUT",
        };
        f.write_str(name)
    }
}

/// The status reported by the service for an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeStatus {
    Pending,
    Done,
    Error,
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pending => "PENDING",
            Self::Done => "DONE",
            Self::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// A service-independent snapshot of an operation.
///
/// The service produces this information, the local code only observes it.
/// An operation with an error payload has [OutcomeStatus::Error], even if the
/// service also marked it as done.
///
/// # Example
/// ```
/// # use lro_samples_lro::{OperationOutcome, OutcomeStatus};
/// let outcome = OperationOutcome::default();
/// assert_eq!(outcome.status, OutcomeStatus::Pending);
/// assert!(outcome.check().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct OperationOutcome {
    pub status: OutcomeStatus,
    pub error: Option<Status>,
    /// The time the operation completed, in RFC 3339 format, if the service
    /// reports it.
    pub end_time: Option<String>,
}

impl OperationOutcome {
    /// Returns true if the operation reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status != OutcomeStatus::Pending
    }

    /// Returns true if the operation completed without an error payload.
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Done
    }

    /// Converts the error payload, if any, into an [Error].
    ///
    /// The returned error satisfies [Error::is_operation_failed].
    pub fn check(&self) -> Result<()> {
        match &self.error {
            None => Ok(()),
            Some(status) => Err(Error::operation(status.clone())),
        }
    }
}

impl Default for OperationOutcome {
    fn default() -> Self {
        Self {
            status: OutcomeStatus::Pending,
            error: None,
            end_time: None,
        }
    }
}

impl<O: internal::DiscoveryOperation> From<&O> for OperationOutcome {
    fn from(value: &O) -> Self {
        let error = value.status();
        let status = match (&error, value.done()) {
            (Some(_), _) => OutcomeStatus::Error,
            (None, true) => OutcomeStatus::Done,
            (None, false) => OutcomeStatus::Pending,
        };
        Self {
            status,
            error,
            end_time: value.end_time().cloned(),
        }
    }
}

/// The error returned when the local wait for an operation expires.
///
/// The operation is not cancelled. It may still complete, successfully or
/// not, after this error is returned.
#[derive(thiserror::Error, Debug)]
#[error("operation {name} did not complete within {timeout:?}, it was not cancelled")]
pub struct Timeout {
    name: String,
    timeout: Duration,
}

impl Timeout {
    pub(crate) fn new(name: String, timeout: Duration) -> Self {
        Self { name, timeout }
    }

    /// The name of the operation, empty if the request was never accepted.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The timeout that expired.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// The trait implemented by LRO helpers.
///
/// # Parameters
/// * `R` - the response type, that is, the type of response included when the
///   long-running operation completes successfully.
/// * `M` - the metadata type, that is, the type returned by the service when
///   the long-running operation is still in progress.
pub trait Poller<R, M>: Send + sealed::Poller {
    /// Query the current status of the long-running operation.
    ///
    /// The first call submits the request. Returns `None` once the operation
    /// completed.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send;

    /// Poll the long-running operation until it completes.
    ///
    /// There is no local deadline, the polling error policy decides when to
    /// stop querying an operation that never completes.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;

    /// Poll the long-running operation until it completes or `timeout` expires.
    ///
    /// On expiration this returns an error where [Error::is_timeout] is true.
    /// The operation is left running on the service.
    fn until_done_with_timeout(self, timeout: Duration) -> impl Future<Output = Result<R>> + Send;

    /// The local state of the operation.
    fn state(&self) -> OperationState;

    /// Convert a poller to a [Stream][futures::stream::Stream].
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin;
}

mod sealed {
    pub trait Poller {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use test_case::test_case;

    #[derive(Debug, Default)]
    struct Fake {
        done: bool,
        error: Option<Status>,
        end_time: Option<String>,
    }

    impl internal::DiscoveryOperation for Fake {
        fn done(&self) -> bool {
            self.done
        }
        fn name(&self) -> Option<&String> {
            None
        }
        fn status(&self) -> Option<Status> {
            self.error.clone()
        }
        fn end_time(&self) -> Option<&String> {
            self.end_time.as_ref()
        }
    }

    fn not_found() -> Status {
        Status::default()
            .set_code(Code::NotFound)
            .set_message("node not found")
    }

    #[test_case(false, None, OutcomeStatus::Pending)]
    #[test_case(true, None, OutcomeStatus::Done)]
    #[test_case(true, Some(not_found()), OutcomeStatus::Error)]
    #[test_case(false, Some(not_found()), OutcomeStatus::Error)]
    fn outcome_status(done: bool, error: Option<Status>, want: OutcomeStatus) {
        let op = Fake {
            done,
            error,
            ..Fake::default()
        };
        let outcome = OperationOutcome::from(&op);
        assert_eq!(outcome.status, want, "{op:?}");
        assert_eq!(outcome.is_terminal(), want != OutcomeStatus::Pending);
        assert_eq!(outcome.is_success(), want == OutcomeStatus::Done);
    }

    #[test]
    fn outcome_error_payload_is_failure_even_when_done() {
        let op = Fake {
            done: true,
            error: Some(not_found()),
            end_time: Some("2025-01-02T03:04:05Z".into()),
        };
        let outcome = OperationOutcome::from(&op);
        assert_eq!(outcome.end_time.as_deref(), Some("2025-01-02T03:04:05Z"));
        let err = outcome.check().unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
        assert_eq!(err.status(), Some(&not_found()));
    }

    #[test]
    fn outcome_check_success() {
        let op = Fake {
            done: true,
            ..Fake::default()
        };
        let outcome = OperationOutcome::from(&op);
        assert!(outcome.check().is_ok(), "{outcome:?}");
        assert_eq!(outcome.status.to_string(), "DONE");
    }

    #[test_case(OperationState::NotSubmitted, false, "NOT_SUBMITTED")]
    #[test_case(OperationState::Submitted, false, "SUBMITTED")]
    #[test_case(OperationState::Polling, false, "POLLING")]
    #[test_case(OperationState::DoneOk, true, "DONE_OK")]
    #[test_case(OperationState::DoneError, true, "DONE_ERROR")]
    #[test_case(OperationState::TimedOut, true, "TIMED_OUT")]
    fn operation_state(state: OperationState, terminal: bool, display: &str) {
        assert_eq!(state.is_terminal(), terminal);
        assert_eq!(state.to_string(), display);
    }

    #[test]
    fn timeout_display() {
        let t = Timeout::new("operation-123".into(), Duration::from_secs(3));
        assert_eq!(t.name(), "operation-123");
        assert_eq!(t.timeout(), Duration::from_secs(3));
        let fmt = t.to_string();
        assert!(fmt.contains("operation-123"), "{fmt}");
        assert!(fmt.contains("not cancelled"), "{fmt}");
    }
}
