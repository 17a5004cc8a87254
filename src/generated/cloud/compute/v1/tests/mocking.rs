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
    use gax::error::rpc::Code;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use lro::Poller;
    use lro_samples_compute_v1::client::RegionDisks;
    use lro_samples_compute_v1::model::operation::{self, Status};
    use lro_samples_compute_v1::model::{Operation, region_disks, region_operations};

    type TestResult = anyhow::Result<()>;

    static_assertions::assert_impl_all!(RegionDisks: Clone, std::fmt::Debug, Send, Sync);

    mockall::mock! {
        #[derive(Debug)]
        RegionDisks {}
        impl lro_samples_compute_v1::stub::RegionDisks for RegionDisks {
            async fn start_async_replication(&self, req: region_disks::StartAsyncReplicationRequest, _options: RequestOptions) -> gax::Result<Response<Operation>>;
            async fn get_operation(&self, req: region_operations::GetRequest, _options: RequestOptions) -> gax::Result<Response<Operation>>;
        }
    }

    fn running(name: &str) -> Operation {
        Operation::new().set_name(name).set_status(Status::Running)
    }

    #[tokio::test(start_paused = true)]
    async fn poll_uses_the_request_scope() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockRegionDisks::new();
        mock.expect_start_async_replication()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.project == "p" && r.region == "us-central1" && r.disk == "d1")
            .returning(|_, _| Ok(Response::from(running("op-1"))));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.project == "p" && r.region == "us-central1" && r.operation == "op-1")
            .returning(|_, _| Ok(Response::from(running("op-1"))));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    running("op-1").set_status(Status::Done).set_end_time("2025-01-01T00:00:00Z"),
                ))
            });

        let client = RegionDisks::from_stub(mock);
        let mut poller = client
            .start_async_replication()
            .set_project("p")
            .set_region("us-central1")
            .set_disk("d1")
            .poller();
        let mut results = Vec::new();
        while let Some(p) = poller.poll().await {
            results.push(p);
        }
        assert_eq!(results.len(), 3, "{results:?}");
        match results.pop() {
            Some(lro::PollingResult::Completed(Ok(op))) => {
                assert_eq!(op.outcome().end_time.as_deref(), Some("2025-01-01T00:00:00Z"));
            }
            r => panic!("unexpected result {r:?}"),
        }
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn done_with_error_payload_fails() -> TestResult {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockRegionDisks::new();
        mock.expect_start_async_replication()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Response::from(running("op-1"))));
        mock.expect_get_operation()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _| {
                let error = operation::Error::new().set_errors([operation::error::Errors::new()
                    .set_code("INVALID_ARGUMENT")
                    .set_message("secondary disk is not in a paired region")]);
                Ok(Response::from(
                    running("op-1").set_status(Status::Done).set_error(error),
                ))
            });

        let client = RegionDisks::from_stub(mock);
        let err = client
            .start_async_replication()
            .set_project("p")
            .set_region("us-central1")
            .set_disk("d1")
            .poller()
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
        let status = err.status().expect("operation errors have a status");
        assert_eq!(status.code, Code::InvalidArgument);
        assert_eq!(status.message, "secondary disk is not in a paired region");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_with_timeout_does_not_cancel() -> TestResult {
        let mut mock = MockRegionDisks::new();
        mock.expect_start_async_replication()
            .once()
            .returning(|_, _| Ok(Response::from(running("op-1"))));
        mock.expect_get_operation()
            .returning(|_, _| Ok(Response::from(running("op-1"))));

        let client = RegionDisks::from_stub(mock);
        let err = client
            .start_async_replication()
            .set_project("p")
            .set_region("us-central1")
            .set_disk("d1")
            .poller()
            .until_done_with_timeout(std::time::Duration::from_secs(30))
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }
}
