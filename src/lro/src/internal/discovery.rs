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

//! Polling loop for services with their own operation type.
//!
//! Compute Engine returns a service-specific `Operation` message. It reports
//! completion with a `status` enum, and failures with an `error` field that is
//! not a `google.rpc.Status`. Each client implements [DiscoveryOperation] to
//! expose those fields, and this module drives the loop.
//!
//! The AIP-151 poller in the sibling module wraps the same loop.

use crate::{
    Error, OperationState, Poller, PollingBackoffPolicy, PollingErrorPolicy, PollingResult, Result,
    Timeout,
};
use gax::error::rpc::Status;
use gax::polling_error_policy::Exhausted;
use gax::polling_state::PollingState;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Exposes the polling-relevant fields of a service operation type.
pub trait DiscoveryOperation {
    /// True once the service stops working on the operation, with or without
    /// an error.
    fn done(&self) -> bool;

    /// The name used to query the operation again. Without a name the
    /// operation cannot be polled.
    fn name(&self) -> Option<&String>;

    /// The error payload, converted to a [Status]. An operation with an error
    /// payload failed, even if [done()][DiscoveryOperation::done] is false.
    fn status(&self) -> Option<Status>;

    /// When the operation completed, if the service reports it.
    fn end_time(&self) -> Option<&String> {
        None
    }
}

/// Creates a poller for a [DiscoveryOperation].
///
/// `start` sends the request, it is called at most once. `query` fetches the
/// operation by name.
pub fn new_discovery_poller<S, SF, Q, QF, O>(
    polling_error_policy: Arc<dyn PollingErrorPolicy>,
    polling_backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<O, O>
where
    O: DiscoveryOperation + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<O>> + Send + 'static,
    Q: FnMut(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<O>> + Send + 'static,
{
    DiscoveryPoller::new(polling_error_policy, polling_backoff_policy, start, query)
}

// The name to query next, if any, and what to report to the caller.
type Step<O> = (Option<String>, PollingResult<O, O>);

pub(crate) struct DiscoveryPoller<S, Q> {
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: Option<S>,
    query: Q,
    next: Option<String>,
    // Outlives `next`, used in logs and timeout errors.
    last_name: String,
    polling: PollingState,
    state: OperationState,
}

impl<S, Q> DiscoveryPoller<S, Q> {
    pub(crate) fn new(
        error_policy: Arc<dyn PollingErrorPolicy>,
        backoff_policy: Arc<dyn PollingBackoffPolicy>,
        start: S,
        query: Q,
    ) -> Self {
        Self {
            error_policy,
            backoff_policy,
            start: Some(start),
            query,
            next: None,
            last_name: String::new(),
            polling: PollingState::default(),
            state: OperationState::NotSubmitted,
        }
    }

    pub(crate) fn lro_state(&self) -> OperationState {
        self.state
    }

    fn advance<O>(&mut self, (next, result): Step<O>) -> PollingResult<O, O> {
        if let Some(name) = &next {
            self.last_name.clone_from(name);
        }
        self.next = next;
        self.state = match &result {
            PollingResult::Completed(Ok(_)) => OperationState::DoneOk,
            PollingResult::Completed(Err(_)) => OperationState::DoneError,
            PollingResult::InProgress(_) if self.state == OperationState::NotSubmitted => {
                OperationState::Submitted
            }
            PollingResult::InProgress(_) => OperationState::Polling,
            PollingResult::PollingError(_) => self.state,
        };
        tracing::debug!(
            operation = %self.last_name,
            attempt_count = self.polling.attempt_count,
            state = %self.state,
            "polled long-running operation"
        );
        result
    }

    pub(crate) async fn wait<O, SF, QF>(&mut self) -> Result<O>
    where
        O: DiscoveryOperation + Send,
        S: FnOnce() -> SF + Send + Sync,
        SF: Future<Output = Result<O>> + Send + 'static,
        Q: FnMut(String) -> QF + Send + Sync + Clone,
        QF: Future<Output = Result<O>> + Send + 'static,
    {
        while let Some(result) = self.poll().await {
            if let PollingResult::Completed(r) = result {
                return r;
            }
            tokio::time::sleep(self.backoff_policy.wait_period(&self.polling)).await;
        }
        Err(Error::other(
            "the operation already completed, its result was returned by a previous poll()",
        ))
    }

    pub(crate) async fn wait_for<O, SF, QF>(&mut self, timeout: Duration) -> Result<O>
    where
        O: DiscoveryOperation + Send,
        S: FnOnce() -> SF + Send + Sync,
        SF: Future<Output = Result<O>> + Send + 'static,
        Q: FnMut(String) -> QF + Send + Sync + Clone,
        QF: Future<Output = Result<O>> + Send + 'static,
    {
        if let Ok(result) = tokio::time::timeout(timeout, self.wait()).await {
            return result;
        }
        // Dropping the `wait()` future stops the local loop. Nothing is sent
        // to the service.
        self.state = OperationState::TimedOut;
        self.next = None;
        tracing::warn!(
            operation = %self.last_name,
            ?timeout,
            "gave up waiting for long-running operation"
        );
        Err(Error::timeout(Timeout::new(self.last_name.clone(), timeout)))
    }
}

impl<S, Q> crate::sealed::Poller for DiscoveryPoller<S, Q> {}

impl<O, S, SF, Q, QF> Poller<O, O> for DiscoveryPoller<S, Q>
where
    O: DiscoveryOperation + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<O>> + Send + 'static,
    Q: FnMut(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<O>> + Send + 'static,
{
    async fn poll(&mut self) -> Option<PollingResult<O, O>> {
        if let Some(start) = self.start.take() {
            let step = on_submitted(start().await);
            return Some(self.advance(step));
        }
        let name = self.next.take()?;
        self.polling.attempt_count += 1;
        let result = (self.query)(name.clone()).await;
        let step = on_queried(self.error_policy.as_ref(), &self.polling, name, result);
        Some(self.advance(step))
    }

    async fn until_done(mut self) -> Result<O> {
        self.wait().await
    }

    async fn until_done_with_timeout(mut self, timeout: Duration) -> Result<O> {
        self.wait_for(timeout).await
    }

    fn state(&self) -> OperationState {
        self.state
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<O, O>> + Unpin {
        Box::pin(futures::stream::unfold(self, |mut poller| async move {
            let item = poller.poll().await?;
            Some((item, poller))
        }))
    }
}

fn finished<O>(result: Result<O>) -> Step<O> {
    (None, PollingResult::Completed(result))
}

// An error payload takes precedence over the `done` flag.
fn observe<O: DiscoveryOperation>(operation: O) -> Step<O> {
    if let Some(status) = operation.status() {
        return finished(Err(Error::operation(status)));
    }
    if operation.done() {
        return finished(Ok(operation));
    }
    match operation.name().cloned() {
        Some(name) => (Some(name), PollingResult::InProgress(Some(operation))),
        None => finished(Err(Error::deser(
            "the operation is still running but has no name to poll",
        ))),
    }
}

fn on_submitted<O: DiscoveryOperation>(result: Result<O>) -> Step<O> {
    match result {
        Ok(operation) => observe(operation),
        Err(e) => finished(Err(Error::submission(e))),
    }
}

fn on_queried<O: DiscoveryOperation>(
    policy: &dyn PollingErrorPolicy,
    state: &PollingState,
    name: String,
    result: Result<O>,
) -> Step<O> {
    let operation = match result {
        Ok(o) => o,
        Err(e) => {
            let decision = policy.on_error(state, e);
            return if decision.is_continue() {
                (Some(name), PollingResult::PollingError(decision.into_error()))
            } else if decision.is_exhausted() {
                let exhausted = Exhausted::after_error(&name, decision.into_error());
                finished(Err(Error::exhausted(exhausted)))
            } else {
                finished(Err(decision.into_error()))
            };
        }
    };
    match observe(operation) {
        (Some(name), in_progress) => match policy.on_in_progress(state, &name) {
            None => (Some(name), in_progress),
            Some(e) => finished(Err(e)),
        },
        done => done,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use gax::polling_backoff_policy::FixedDelay;
    use gax::polling_error_policy::{Aip194Strict, AlwaysContinue, PollingErrorPolicyExt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default, PartialEq)]
    struct FakeOperation {
        done: bool,
        name: Option<String>,
        error: Option<Status>,
        disk_size_gb: Option<i64>,
    }

    impl DiscoveryOperation for FakeOperation {
        fn done(&self) -> bool {
            self.done
        }
        fn name(&self) -> Option<&String> {
            self.name.as_ref()
        }
        fn status(&self) -> Option<Status> {
            self.error.clone()
        }
    }

    fn running(name: &str) -> FakeOperation {
        FakeOperation {
            name: Some(name.to_string()),
            ..FakeOperation::default()
        }
    }

    fn finished_with(disk_size_gb: i64) -> FakeOperation {
        FakeOperation {
            done: true,
            disk_size_gb: Some(disk_size_gb),
            ..FakeOperation::default()
        }
    }

    fn not_found() -> Status {
        Status::default()
            .set_code(Code::NotFound)
            .set_message("disk `missing` was not found")
    }

    fn unavailable() -> Error {
        Error::service(
            Status::default()
                .set_code(Code::Unavailable)
                .set_message("try again"),
        )
    }

    fn no_wait() -> Arc<dyn PollingBackoffPolicy> {
        Arc::new(FixedDelay(Duration::ZERO))
    }

    // Used where the test expects the poller to never query the operation.
    fn no_query(name: String) -> std::future::Ready<Result<FakeOperation>> {
        unreachable!("unexpected query for {name}")
    }

    #[tokio::test]
    async fn completes_after_polling() {
        let start = || async { Ok(running("operation-001")) };
        let query = |name: String| async move {
            assert_eq!(name, "operation-001");
            Ok(finished_with(100))
        };
        let mut poller = DiscoveryPoller::new(Arc::new(AlwaysContinue), no_wait(), start, query);
        let got = poller.wait().await;
        assert!(
            matches!(got, Ok(FakeOperation { disk_size_gb: Some(100), .. })),
            "{got:?}"
        );
        assert_eq!(poller.lro_state(), OperationState::DoneOk);
    }

    #[tokio::test]
    async fn transient_query_errors_are_retried() {
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();
        let start = || async { Ok(running("operation-001")) };
        let query = move |_: String| {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                match attempt {
                    0 => Err(unavailable()),
                    _ => Ok(finished_with(10)),
                }
            }
        };
        let got = new_discovery_poller(Arc::new(Aip194Strict), no_wait(), start, query)
            .until_done()
            .await;
        assert!(got.is_ok(), "{got:?}");
        assert_eq!(queries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn permanent_query_error_stops() {
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();
        let start = || async { Ok(running("operation-001")) };
        let query = move |_: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::service(not_found())) }
        };
        let got: Result<FakeOperation> =
            new_discovery_poller(Arc::new(Aip194Strict), no_wait(), start, query)
                .until_done()
                .await;
        let err = got.unwrap_err();
        assert_eq!(err.status(), Some(&not_found()), "{err:?}");
        assert!(!err.is_operation_failed(), "{err:?}");
        assert_eq!(queries.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn error_payload_fails_even_when_done() {
        let start = || async { Ok(running("operation-001")) };
        let query = |name: String| async move {
            Ok(FakeOperation {
                done: true,
                name: Some(name),
                error: Some(not_found()),
                ..FakeOperation::default()
            })
        };
        let mut poller = DiscoveryPoller::new(Arc::new(AlwaysContinue), no_wait(), start, query);
        let err = poller.wait().await.unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
        assert_eq!(err.status(), Some(&not_found()), "{err:?}");
        assert_eq!(poller.lro_state(), OperationState::DoneError);
    }

    #[tokio::test]
    async fn error_payload_fails_while_running() {
        let start = || async {
            Ok(FakeOperation {
                error: Some(not_found()),
                ..running("operation-001")
            })
        };
        let got = new_discovery_poller(Arc::new(AlwaysContinue), no_wait(), start, no_query)
            .until_done()
            .await;
        assert!(
            matches!(got, Err(ref e) if e.is_operation_failed()),
            "{got:?}"
        );
    }

    #[tokio::test]
    async fn submission_failure() {
        let start = || async { Err(unavailable()) };
        let mut poller = DiscoveryPoller::new(Arc::new(AlwaysContinue), no_wait(), start, no_query);
        let err = poller.wait().await.unwrap_err();
        assert!(err.is_submission(), "{err:?}");
        assert!(!err.is_operation_failed(), "{err:?}");
        assert_eq!(poller.lro_state(), OperationState::DoneError);
    }

    #[tokio::test]
    async fn done_on_submission_is_not_polled() {
        let start = || async { Ok(finished_with(20)) };
        let got = new_discovery_poller(Arc::new(AlwaysContinue), no_wait(), start, no_query)
            .until_done()
            .await;
        assert!(
            matches!(got, Ok(FakeOperation { disk_size_gb: Some(20), .. })),
            "{got:?}"
        );
    }

    #[tokio::test]
    async fn running_without_name() {
        let start = || async { Ok(FakeOperation::default()) };
        let got = new_discovery_poller(Arc::new(AlwaysContinue), no_wait(), start, no_query)
            .until_done()
            .await;
        assert!(
            matches!(got, Err(ref e) if e.is_deserialization()),
            "{got:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_leaves_operation_running() -> anyhow::Result<()> {
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();
        let start = || async { Ok(running("operation-slow")) };
        let query = move |name: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok(running(&name)) }
        };
        let mut poller = DiscoveryPoller::new(
            Arc::new(AlwaysContinue),
            Arc::new(FixedDelay(Duration::from_secs(1))),
            start,
            query,
        );
        let err = poller.wait_for(Duration::from_secs(10)).await.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert_eq!(poller.lro_state(), OperationState::TimedOut);

        let timeout = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<Timeout>())
            .ok_or_else(|| anyhow::anyhow!("missing timeout details in {err:?}"))?;
        assert_eq!(timeout.name(), "operation-slow");
        assert_eq!(timeout.timeout(), Duration::from_secs(10));

        let sent = queries.load(Ordering::SeqCst);
        assert!(sent > 0, "{sent}");
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(queries.load(Ordering::SeqCst), sent);
        let next = Poller::<FakeOperation, FakeOperation>::poll(&mut poller).await;
        assert!(next.is_none(), "{next:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn completes_before_timeout() {
        let start = || async { Ok(running("operation-001")) };
        let query = |_: String| async { Ok(finished_with(30)) };
        let got = new_discovery_poller(Arc::new(AlwaysContinue), no_wait(), start, query)
            .until_done_with_timeout(Duration::from_secs(180))
            .await;
        assert!(
            matches!(got, Ok(FakeOperation { disk_size_gb: Some(30), .. })),
            "{got:?}"
        );
    }

    #[tokio::test]
    async fn resubmitting_sends_again() {
        let submissions = Arc::new(AtomicUsize::new(0));
        for _ in 0..2 {
            let counter = submissions.clone();
            let start = move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok(finished_with(10)) }
            };
            let got = new_discovery_poller(Arc::new(AlwaysContinue), no_wait(), start, no_query)
                .until_done()
                .await;
            assert!(got.is_ok(), "{got:?}");
        }
        assert_eq!(submissions.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn state_follows_each_poll() {
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();
        let start = || async { Ok(running("operation-001")) };
        let query = move |name: String| {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                match attempt {
                    0 => Ok(running(&name)),
                    _ => Ok(finished_with(10)),
                }
            }
        };
        let mut poller = new_discovery_poller(Arc::new(AlwaysContinue), no_wait(), start, query);
        let mut states = vec![poller.state()];
        while let Some(result) = poller.poll().await {
            assert!(!matches!(result, PollingResult::PollingError(_)), "{result:?}");
            states.push(poller.state());
        }
        assert_eq!(
            states,
            vec![
                OperationState::NotSubmitted,
                OperationState::Submitted,
                OperationState::Polling,
                OperationState::DoneOk,
            ]
        );
        let again = poller.until_done().await;
        assert!(again.is_err(), "{again:?}");
    }

    #[tokio::test]
    async fn attempt_limit_exhausts() {
        let start = || async { Ok(running("operation-001")) };
        let query = |name: String| async move { Ok(running(&name)) };
        let got = new_discovery_poller(
            Arc::new(Aip194Strict.with_attempt_limit(3)),
            no_wait(),
            start,
            query,
        )
        .until_done()
        .await;
        assert!(matches!(got, Err(ref e) if e.is_exhausted()), "{got:?}");
    }

    #[tokio::test]
    async fn attempt_limit_exhausts_on_errors() {
        use std::error::Error as _;
        let start = || async { Ok(running("operation-001")) };
        let query = |_: String| async move { Err::<FakeOperation, _>(unavailable()) };
        let got = new_discovery_poller(
            Arc::new(Aip194Strict.with_attempt_limit(3)),
            no_wait(),
            start,
            query,
        )
        .until_done()
        .await;
        let err = got.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        let last = err
            .source()
            .and_then(|e| e.source())
            .and_then(|e| e.downcast_ref::<Error>());
        assert_eq!(
            last.and_then(|e| e.status()).map(|s| s.code),
            Some(Code::Unavailable),
            "{err:?}"
        );
    }

    #[test]
    fn poll_error_keeps_the_name() {
        let state = PollingState::default();
        let (next, result) = on_queried::<FakeOperation>(
            &AlwaysContinue,
            &state,
            "operation-001".to_string(),
            Err(unavailable()),
        );
        assert_eq!(next.as_deref(), Some("operation-001"));
        assert!(matches!(result, PollingResult::PollingError(_)), "{result:?}");

        let (next, result) = on_queried::<FakeOperation>(
            &Aip194Strict,
            &state,
            "operation-001".to_string(),
            Err(Error::service(not_found())),
        );
        assert!(next.is_none(), "{next:?}");
        assert!(
            matches!(result, PollingResult::Completed(Err(_))),
            "{result:?}"
        );
    }

    #[cfg(feature = "unstable-stream")]
    #[tokio::test]
    async fn into_stream() {
        use futures::StreamExt;
        let start = || async { Ok(running("operation-001")) };
        let query = |_: String| async { Ok(finished_with(40)) };
        let results: Vec<_> =
            new_discovery_poller(Arc::new(AlwaysContinue), no_wait(), start, query)
                .into_stream()
                .collect()
                .await;
        assert_eq!(results.len(), 2, "{results:?}");
        assert!(
            matches!(results[0], PollingResult::InProgress(Some(_))),
            "{results:?}"
        );
        assert!(
            matches!(
                results[1],
                PollingResult::Completed(Ok(FakeOperation {
                    disk_size_gb: Some(40),
                    ..
                }))
            ),
            "{results:?}"
        );
    }
}
