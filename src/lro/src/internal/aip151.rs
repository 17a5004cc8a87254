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

//! Pollers for services returning `google.longrunning.Operation`.
//!
//! These operations carry the final result, or the error, in the operation
//! itself. The response and metadata are JSON objects tagged with an `@type`
//! field, and are decoded once the polling loop completes.

use super::discovery::{DiscoveryOperation, DiscoveryPoller};
use crate::{
    Error, OperationState, Poller, PollingBackoffPolicy, PollingErrorPolicy, PollingResult, Result,
};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

/// An operation that includes its result when it completes.
pub trait Aip151Operation: DiscoveryOperation {
    /// The response, set only if the operation completed successfully.
    fn response(&self) -> Option<&serde_json::Value>;

    /// The service-specific metadata, if any.
    fn metadata(&self) -> Option<&serde_json::Value>;
}

/// Creates a poller that decodes the response and metadata of the operation.
///
/// This is intended as an implementation detail of the generated clients.
/// Applications should have no need to create or use this function.
pub fn new_poller<R, M, O, S, SF, Q, QF>(
    polling_error_policy: Arc<dyn PollingErrorPolicy>,
    polling_backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<R, M>
where
    R: DeserializeOwned + Send,
    M: DeserializeOwned + Send,
    O: Aip151Operation + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: std::future::Future<Output = Result<O>> + Send + 'static,
    Q: FnMut(String) -> QF + Send + Sync + Clone,
    QF: std::future::Future<Output = Result<O>> + Send + 'static,
{
    Aip151Poller {
        inner: DiscoveryPoller::new(polling_error_policy, polling_backoff_policy, start, query),
        types: PhantomData,
    }
}

struct Aip151Poller<S, Q, R, M> {
    inner: DiscoveryPoller<S, Q>,
    types: PhantomData<fn() -> (R, M)>,
}

impl<S, Q, R, M> crate::sealed::Poller for Aip151Poller<S, Q, R, M> {}

impl<R, M, O, S, SF, Q, QF> Poller<R, M> for Aip151Poller<S, Q, R, M>
where
    R: DeserializeOwned + Send,
    M: DeserializeOwned + Send,
    O: Aip151Operation + Send,
    S: FnOnce() -> SF + Send + Sync,
    SF: std::future::Future<Output = Result<O>> + Send + 'static,
    Q: FnMut(String) -> QF + Send + Sync + Clone,
    QF: std::future::Future<Output = Result<O>> + Send + 'static,
{
    async fn poll(&mut self) -> Option<PollingResult<R, M>> {
        let result: PollingResult<O, O> = self.inner.poll().await?;
        let result = match result {
            PollingResult::InProgress(o) => {
                PollingResult::InProgress(o.as_ref().and_then(as_metadata))
            }
            PollingResult::Completed(r) => PollingResult::Completed(r.and_then(as_result)),
            PollingResult::PollingError(e) => PollingResult::PollingError(e),
        };
        Some(result)
    }

    async fn until_done(mut self) -> Result<R> {
        self.inner.wait().await.and_then(as_result)
    }

    async fn until_done_with_timeout(mut self, timeout: Duration) -> Result<R> {
        self.inner.wait_for(timeout).await.and_then(as_result)
    }

    fn state(&self) -> OperationState {
        self.inner.lro_state()
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin {
        Box::pin(futures::stream::unfold(self, |mut poller| async move {
            let item = poller.poll().await?;
            Some((item, poller))
        }))
    }
}

fn as_result<O, R>(operation: O) -> Result<R>
where
    O: Aip151Operation,
    R: DeserializeOwned,
{
    // The polling loop already converted any error payload.
    match operation.response() {
        Some(v) => serde_json::from_value(v.clone()).map_err(Error::deser),
        None => Err(Error::deser("neither result nor error set in LRO result")),
    }
}

fn as_metadata<O, M>(operation: &O) -> Option<M>
where
    O: Aip151Operation,
    M: DeserializeOwned,
{
    operation
        .metadata()
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
    use gax::polling_error_policy::AlwaysContinue;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Node {
        name: String,
        #[serde(default)]
        state: String,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Metadata {
        #[serde(default)]
        verb: String,
    }

    #[derive(Debug, Default)]
    struct TestOperation {
        name: String,
        done: bool,
        error: Option<Status>,
        response: Option<serde_json::Value>,
        metadata: Option<serde_json::Value>,
    }

    impl DiscoveryOperation for TestOperation {
        fn done(&self) -> bool {
            self.done
        }
        fn name(&self) -> Option<&String> {
            Some(&self.name)
        }
        fn status(&self) -> Option<Status> {
            self.error.clone()
        }
    }

    impl Aip151Operation for TestOperation {
        fn response(&self) -> Option<&serde_json::Value> {
            self.response.as_ref()
        }
        fn metadata(&self) -> Option<&serde_json::Value> {
            self.metadata.as_ref()
        }
    }

    fn in_progress() -> TestOperation {
        TestOperation {
            name: "projects/p/locations/us-central1-b/operations/op-1".into(),
            metadata: Some(json!({"@type": "type.googleapis.com/google.cloud.tpu.v2.OperationMetadata", "verb": "start"})),
            ..TestOperation::default()
        }
    }

    #[tokio::test]
    async fn until_done_decodes_response() {
        let start = || async move { Ok(in_progress()) };
        let query = |name: String| async move {
            Ok(TestOperation {
                name,
                done: true,
                response: Some(json!({
                    "@type": "type.googleapis.com/google.cloud.tpu.v2.Node",
                    "name": "projects/p/locations/us-central1-b/nodes/n",
                    "state": "READY",
                })),
                ..TestOperation::default()
            })
        };
        let got = new_poller::<Node, Metadata, _, _, _, _, _>(
            Arc::new(AlwaysContinue),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done()
        .await;
        let node = got.unwrap();
        assert_eq!(node.name, "projects/p/locations/us-central1-b/nodes/n");
        assert_eq!(node.state, "READY");
    }

    #[tokio::test]
    async fn until_done_error_payload() {
        let start = || async move { Ok(in_progress()) };
        let query = |name: String| async move {
            Ok(TestOperation {
                name,
                done: true,
                error: Some(
                    Status::default()
                        .set_code(Code::NotFound)
                        .set_message("node not found"),
                ),
                ..TestOperation::default()
            })
        };
        let mut poller = new_poller::<Node, Metadata, _, _, _, _, _>(
            Arc::new(AlwaysContinue),
            Arc::new(test_backoff()),
            start,
            query,
        );
        let p = poller.poll().await;
        assert!(
            matches!(&p, Some(PollingResult::InProgress(Some(m))) if m.verb == "start"),
            "{p:?}"
        );
        let p = poller.poll().await;
        assert!(
            matches!(&p, Some(PollingResult::Completed(Err(e))) if e.is_operation_failed()),
            "{p:?}"
        );
        assert_eq!(poller.state(), OperationState::DoneError);
    }

    #[tokio::test]
    async fn until_done_missing_response() {
        let start = || async move {
            Ok(TestOperation {
                name: "op-1".into(),
                done: true,
                ..TestOperation::default()
            })
        };
        let query = async |_name| -> Result<TestOperation> {
            panic!();
        };
        let got = new_poller::<Node, Metadata, _, _, _, _, _>(
            Arc::new(AlwaysContinue),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done()
        .await;
        assert!(
            matches!(got, Err(ref e) if e.is_deserialization()),
            "{got:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn until_done_with_timeout() {
        let start = || async move { Ok(in_progress()) };
        let query = |_name: String| async move { Ok(in_progress()) };
        let got = new_poller::<Node, Metadata, _, _, _, _, _>(
            Arc::new(AlwaysContinue),
            Arc::new(test_backoff()),
            start,
            query,
        )
        .until_done_with_timeout(Duration::from_secs(5))
        .await;
        assert!(matches!(got, Err(ref e) if e.is_timeout()), "{got:?}");
    }

    #[test]
    fn metadata_mismatch_is_ignored() {
        let op = TestOperation {
            metadata: Some(json!({"verb": 42})),
            ..TestOperation::default()
        };
        let got = as_metadata::<_, Metadata>(&op);
        assert!(got.is_none(), "{got:?}");
    }

    #[test]
    fn response_mismatch_is_an_error() {
        let op = TestOperation {
            done: true,
            response: Some(json!({"name": 42})),
            ..TestOperation::default()
        };
        let got = as_result::<_, Node>(op);
        assert!(
            matches!(got, Err(ref e) if e.is_deserialization()),
            "{got:?}"
        );
    }

    fn test_backoff() -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .build()
            .expect("hard-coded values should succeed")
    }
}
