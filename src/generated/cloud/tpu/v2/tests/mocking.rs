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

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use gax::response::Response;
    use lro::{OperationState, Poller, PollingResult};
    use lro_samples_tpu_v2::client::Tpu;
    use lro_samples_tpu_v2::model::{
        GetOperationRequest, Operation, OperationMetadata, StartNodeRequest,
    };
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        Tpu {}
        impl lro_samples_tpu_v2::stub::Tpu for Tpu {
            async fn start_node(&self, req: StartNodeRequest, _options: RequestOptions) -> gax::Result<Response<Operation>>;
            async fn get_operation(&self, req: GetOperationRequest, _options: RequestOptions) -> gax::Result<Response<Operation>>;
        }
    }

    fn metadata(verb: &str) -> serde_json::Value {
        json!({
            "@type": "type.googleapis.com/google.cloud.tpu.v2.OperationMetadata",
            "verb": verb,
        })
    }

    #[tokio::test(start_paused = true)]
    async fn poll_reports_metadata_and_state() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockTpu::new();
        mock.expect_start_node()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == "projects/p/locations/z/nodes/n1")
            .returning(|_, _| {
                Ok(Response::from(
                    Operation::new().set_name("op-1").set_metadata(metadata("start")),
                ))
            });
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == "op-1")
            .returning(|_, _| {
                Ok(Response::from(
                    Operation::new()
                        .set_name("op-1")
                        .set_done(true)
                        .set_response(json!({"name": "projects/p/locations/z/nodes/n1"})),
                ))
            });

        let client = Tpu::from_stub(mock);
        let mut poller = client
            .start_node()
            .set_name("projects/p/locations/z/nodes/n1")
            .poller();
        assert_eq!(poller.state(), OperationState::NotSubmitted);

        let p = poller.poll().await;
        match p {
            Some(PollingResult::InProgress(Some(OperationMetadata { verb, .. }))) => {
                assert_eq!(verb, "start");
            }
            _ => panic!("unexpected polling result {p:?}"),
        }
        assert_eq!(poller.state(), OperationState::Submitted);

        let p = poller.poll().await;
        match p {
            Some(PollingResult::Completed(Ok(node))) => {
                assert_eq!(node.name, "projects/p/locations/z/nodes/n1");
            }
            _ => panic!("unexpected polling result {p:?}"),
        }
        assert_eq!(poller.state(), OperationState::DoneOk);
        assert!(poller.poll().await.is_none());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_leaves_operation_running() -> TestResult {
        let mut mock = MockTpu::new();
        mock.expect_start_node()
            .once()
            .returning(|_, _| Ok(Response::from(Operation::new().set_name("op-1"))));
        mock.expect_get_operation()
            .returning(|_, _| Ok(Response::from(Operation::new().set_name("op-1"))));

        let client = Tpu::from_stub(mock);
        let err = client
            .start_node()
            .set_name("projects/p/locations/z/nodes/n1")
            .poller()
            .until_done_with_timeout(std::time::Duration::from_secs(60))
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        let timeout = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<lro::Timeout>())
            .expect("timeout errors carry the operation name");
        assert_eq!(timeout.name(), "op-1");
        Ok(())
    }
}
