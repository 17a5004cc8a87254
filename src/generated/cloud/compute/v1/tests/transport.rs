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
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use lro::Poller;
    use lro_samples_compute_v1::client::{Disks, RegionDisks, Reservations};
    use lro_samples_compute_v1::model::{
        RegionDisksStartAsyncReplicationRequest, Reservation, operation::Status,
    };
    use serde_json::json;
    use std::time::Duration;

    type TestResult = anyhow::Result<()>;

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    fn fast_backoff() -> gax::exponential_backoff::ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    #[tokio::test]
    async fn region_disks_start_async_replication() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/compute/v1/projects/test-project/regions/us-central1/disks/primary/startAsyncReplication"
                ),
                request::query(url_decoded(contains(("alt", "json")))),
                request::headers(contains(("x-goog-api-client", any()))),
                request::body(json_decoded(eq(json!({
                    "asyncSecondaryDisk": "projects/test-project/regions/us-east1/disks/secondary"
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "operation-123",
                "status": "RUNNING",
                "operationType": "startAsyncReplication",
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/compute/v1/projects/test-project/regions/us-central1/operations/operation-123",
            ))
            .times(2)
            .respond_with(cycle![
                json_encoded(json!({"name": "operation-123", "status": "RUNNING", "progress": 50})),
                json_encoded(json!({
                    "name": "operation-123",
                    "status": "DONE",
                    "progress": 100,
                    "endTime": "2025-01-02T03:04:05.000-08:00",
                })),
            ]),
        );

        let client = RegionDisks::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_polling_backoff_policy(fast_backoff())
            .build()
            .await?;
        let operation = client
            .start_async_replication()
            .set_project("test-project")
            .set_region("us-central1")
            .set_disk("primary")
            .set_body(
                RegionDisksStartAsyncReplicationRequest::new().set_async_secondary_disk(
                    "projects/test-project/regions/us-east1/disks/secondary",
                ),
            )
            .poller()
            .until_done()
            .await?;
        assert_eq!(operation.status, Some(Status::Done));
        assert_eq!(
            operation.end_time.as_deref(),
            Some("2025-01-02T03:04:05.000-08:00")
        );
        assert!(operation.outcome().is_success(), "{operation:?}");
        Ok(())
    }

    #[tokio::test]
    async fn request_id_is_sent_as_query_parameter() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "DELETE",
                    "/compute/v1/projects/test-project/zones/us-central1-a/disks/d1"
                ),
                request::query(url_decoded(contains(("requestId", "req-0001")))),
            ])
            .respond_with(json_encoded(json!({"name": "operation-456", "status": "DONE"}))),
        );

        let client = Disks::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        let operation = client
            .delete()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .set_disk("d1")
            .set_request_id("req-0001")
            .send()
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operation-456"));
        Ok(())
    }

    #[tokio::test]
    async fn done_with_error_is_a_failure() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/compute/v1/projects/test-project/zones/us-central1-a/reservations",
            ))
            .respond_with(json_encoded(json!({"name": "operation-789", "status": "PENDING"}))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/compute/v1/projects/test-project/zones/us-central1-a/operations/operation-789",
            ))
            .respond_with(json_encoded(json!({
                "name": "operation-789",
                "status": "DONE",
                "httpErrorStatusCode": 404,
                "httpErrorMessage": "NOT FOUND",
                "error": {
                    "errors": [{
                        "code": "RESOURCE_NOT_FOUND",
                        "message": "The resource 'projects/test-project/global/instanceTemplates/missing' was not found",
                    }]
                }
            }))),
        );

        let client = Reservations::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_polling_backoff_policy(fast_backoff())
            .build()
            .await?;
        let err = client
            .insert()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .set_body(Reservation::new().set_name("r1"))
            .poller()
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
        let status = err.status().expect("a failed operation carries a status");
        assert_eq!(status.code, Code::NotFound);
        assert!(status.message.contains("was not found"), "{status:?}");
        Ok(())
    }

    #[tokio::test]
    async fn submission_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/compute/v1/projects/test-project/regions/us-central1/disks/primary/startAsyncReplication",
            ))
            .respond_with(status_code(403).body(
                json!({"error": {"code": 403, "status": "PERMISSION_DENIED", "message": "denied"}})
                    .to_string(),
            )),
        );

        let client = RegionDisks::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        let err = client
            .start_async_replication()
            .set_project("test-project")
            .set_region("us-central1")
            .set_disk("primary")
            .poller()
            .until_done()
            .await
            .unwrap_err();
        assert!(err.is_submission(), "{err:?}");
        assert!(!err.is_operation_failed(), "{err:?}");
        assert_eq!(
            err.status().map(|s| s.code),
            Some(Code::PermissionDenied)
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_path_parameter() -> TestResult {
        let client = Disks::builder()
            .with_endpoint("http://127.0.0.1:1")
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        let err = client
            .get()
            .set_project("test-project")
            .set_zone("us-central1-a")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
