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
    use lro_samples_tpu_v2::client::Tpu;
    use lro_samples_tpu_v2::model::{Node, QueuedResource, node, queued_resource};
    use serde_json::json;
    use std::time::Duration;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    const NODE: &str = "projects/test-project/locations/europe-west4-a/nodes/test-node";
    const OPERATION: &str = "projects/test-project/locations/europe-west4-a/operations/op-1";

    async fn new_client(server: &Server) -> anyhow::Result<Tpu> {
        let client = Tpu::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_polling_backoff_policy(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(1))
                    .clamp(),
            )
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn start_node() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v2/{NODE}:start")),
                request::headers(contains(("x-goog-api-client", any()))),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({
                "name": OPERATION,
                "metadata": {
                    "@type": "type.googleapis.com/google.cloud.tpu.v2.OperationMetadata",
                    "target": NODE,
                    "verb": "start",
                },
            }))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", format!("/v2/{OPERATION}")))
                .respond_with(json_encoded(json!({
                    "name": OPERATION,
                    "done": true,
                    "metadata": {
                        "@type": "type.googleapis.com/google.cloud.tpu.v2.OperationMetadata",
                        "endTime": "2025-01-02T03:04:05Z",
                    },
                    "response": {
                        "@type": "type.googleapis.com/google.cloud.tpu.v2.Node",
                        "name": NODE,
                        "state": "READY",
                    },
                }))),
        );

        let client = new_client(&server).await?;
        let node = client.start_node().set_name(NODE).poller().until_done().await?;
        assert_eq!(node.name, NODE);
        assert_eq!(node.state, Some(node::State::Ready));
        Ok(())
    }

    #[tokio::test]
    async fn start_missing_node() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", format!("/v2/{NODE}:start")))
                .respond_with(json_encoded(json!({"name": OPERATION}))),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", format!("/v2/{OPERATION}")))
                .respond_with(json_encoded(json!({
                    "name": OPERATION,
                    "done": true,
                    "error": {"code": 5, "message": "node test-node was not found"},
                }))),
        );

        let client = new_client(&server).await?;
        let mut poller = client.start_node().set_name(NODE).poller();
        let err = poller.until_done().await.unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
        let status = err.status().expect("failed operations have a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "node test-node was not found");
        Ok(())
    }

    #[tokio::test]
    async fn create_queued_resource() -> TestResult {
        let server = Server::run();
        let parent = "projects/test-project/locations/europe-west4-a";
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v2/{parent}/queuedResources")),
                request::query(url_decoded(contains(("queuedResourceId", "qr-1")))),
                request::body(json_decoded(eq(json!({
                    "tpu": {"nodeSpec": [{
                        "parent": parent,
                        "nodeId": "test-node",
                        "node": {
                            "acceleratorType": "v2-8",
                            "runtimeVersion": "tpu-vm-tf-2.14.1",
                            "metadata": {"startup-script": "echo hello"},
                        },
                    }]}
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": OPERATION,
                "done": true,
                "response": {"name": format!("{parent}/queuedResources/qr-1")},
            }))),
        );

        let client = new_client(&server).await?;
        let resource = client
            .create_queued_resource()
            .set_parent(parent)
            .set_queued_resource_id("qr-1")
            .set_queued_resource(QueuedResource::new().set_tpu(
                queued_resource::Tpu::new().set_node_spec([queued_resource::tpu::NodeSpec::new()
                    .set_parent(parent)
                    .set_node_id("test-node")
                    .set_node(
                        Node::new()
                            .set_accelerator_type("v2-8")
                            .set_runtime_version("tpu-vm-tf-2.14.1")
                            .set_metadata([("startup-script", "echo hello")]),
                    )]),
            ))
            .poller()
            .until_done()
            .await?;
        assert_eq!(resource.name, format!("{parent}/queuedResources/qr-1"));
        Ok(())
    }

    #[test_case(true, "true"; "forced")]
    #[test_case(false, "false"; "not forced")]
    #[tokio::test]
    async fn delete_queued_resource(force: bool, want: &str) -> TestResult {
        let server = Server::run();
        let name = "projects/test-project/locations/europe-west4-a/queuedResources/qr-1";
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", format!("/v2/{name}")),
                request::query(url_decoded(contains(("force", want.to_string())))),
            ])
            .respond_with(json_encoded(json!({
                "name": OPERATION,
                "done": true,
                "response": {"@type": "type.googleapis.com/google.protobuf.Empty"},
            }))),
        );

        let client = new_client(&server).await?;
        client
            .delete_queued_resource()
            .set_name(name)
            .set_force(force)
            .poller()
            .until_done()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_queued_resource_not_found() -> TestResult {
        let server = Server::run();
        let name = "projects/test-project/locations/europe-west4-a/queuedResources/qr-1";
        server.expect(
            Expectation::matching(request::method_path("GET", format!("/v2/{name}")))
                .respond_with(status_code(404).body(
                    json!({"error": {"code": 404, "status": "NOT_FOUND", "message": "not found"}})
                        .to_string(),
                )),
        );

        let client = new_client(&server).await?;
        let err = client
            .get_queued_resource()
            .set_name(name)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        Ok(())
    }
}
