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

//! The Cloud TPU v2 resources used by the samples.
//!
//! Only the fields needed to start nodes and to manage queued resources are
//! modeled. Unknown fields in responses are ignored.

#![allow(rustdoc::redundant_explicit_links)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A TPU instance.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Node {
    /// Output only. Immutable. The name of the TPU, in the
    /// `projects/{project}/locations/{zone}/nodes/{node}` format.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// The type of hardware accelerators associated with this node, e.g.
    /// `v2-8`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub accelerator_type: String,

    /// The runtime version running in the node, e.g. `tpu-vm-tf-2.14.1`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub runtime_version: String,

    /// Output only. The current state for the TPU node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<node::State>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub health_description: String,

    /// Network configurations for the TPU node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_config: Option<NetworkConfig>,

    /// Output only. The time when the node was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    /// Resource labels to represent user-provided metadata.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Custom metadata to apply to the TPU node, e.g. a `startup-script`.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Node::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Node::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [accelerator_type][Node::accelerator_type].
    pub fn set_accelerator_type<T: Into<String>>(mut self, v: T) -> Self {
        self.accelerator_type = v.into();
        self
    }

    /// Sets the value of [runtime_version][Node::runtime_version].
    pub fn set_runtime_version<T: Into<String>>(mut self, v: T) -> Self {
        self.runtime_version = v.into();
        self
    }

    /// Sets the value of [state][Node::state].
    pub fn set_state<T: Into<node::State>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [network_config][Node::network_config].
    pub fn set_network_config<T: Into<NetworkConfig>>(mut self, v: T) -> Self {
        self.network_config = Some(v.into());
        self
    }

    /// Sets the value of [labels][Node::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [metadata][Node::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Defines additional types related to [Node].
pub mod node {
    use super::*;

    /// Represents the different states of a TPU node during its lifecycle.
    #[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        StateUnspecified,
        Creating,
        Ready,
        Restarting,
        Reimaging,
        Deleting,
        Repairing,
        Stopped,
        Stopping,
        Starting,
        Preempted,
        Terminated,
        Hiding,
        Hidden,
        Unhiding,
        /// A value not known to this version of the library.
        #[serde(other)]
        Unknown,
    }
}

/// Network related configurations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub subnetwork: String,

    /// Indicates that external IP addresses would be associated with the TPU
    /// workers.
    pub enable_external_ips: bool,
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [network][NetworkConfig::network].
    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [subnetwork][NetworkConfig::subnetwork].
    pub fn set_subnetwork<T: Into<String>>(mut self, v: T) -> Self {
        self.subnetwork = v.into();
        self
    }

    /// Sets the value of [enable_external_ips][NetworkConfig::enable_external_ips].
    pub fn set_enable_external_ips<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_external_ips = v.into();
        self
    }
}

/// A QueuedResource represents a request for resources that will be placed in
/// a queue and fulfilled when the necessary resources are available.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueuedResource {
    /// Output only. Immutable. The name of the queued resource.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Output only. The time when the queued resource was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    /// Defines a TPU resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tpu: Option<queued_resource::Tpu>,

    /// Output only. State of the queued resource request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<QueuedResourceState>,
}

impl QueuedResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][QueuedResource::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [tpu][QueuedResource::tpu].
    pub fn set_tpu<T: Into<queued_resource::Tpu>>(mut self, v: T) -> Self {
        self.tpu = Some(v.into());
        self
    }

    /// Sets the value of [state][QueuedResource::state].
    pub fn set_state<T: Into<QueuedResourceState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// Defines additional types related to [QueuedResource].
pub mod queued_resource {
    use super::*;

    /// Details of the TPU resource(s) being requested.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Tpu {
        /// The TPU node(s) being requested.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub node_spec: Vec<tpu::NodeSpec>,
    }

    impl Tpu {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [node_spec][Tpu::node_spec].
        pub fn set_node_spec<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<tpu::NodeSpec>,
        {
            self.node_spec = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    /// Defines additional types related to [Tpu].
    pub mod tpu {
        use super::*;

        /// Details of the TPU node(s) being requested.
        #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct NodeSpec {
            /// The parent resource name, `projects/{project}/locations/{zone}`.
            #[serde(skip_serializing_if = "String::is_empty")]
            pub parent: String,

            /// The unqualified resource name.
            #[serde(skip_serializing_if = "String::is_empty")]
            pub node_id: String,

            /// The node.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub node: Option<Node>,
        }

        impl NodeSpec {
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [parent][NodeSpec::parent].
            pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
                self.parent = v.into();
                self
            }

            /// Sets the value of [node_id][NodeSpec::node_id].
            pub fn set_node_id<T: Into<String>>(mut self, v: T) -> Self {
                self.node_id = v.into();
                self
            }

            /// Sets the value of [node][NodeSpec::node].
            pub fn set_node<T: Into<Node>>(mut self, v: T) -> Self {
                self.node = Some(v.into());
                self
            }
        }
    }
}

/// QueuedResourceState defines the details of the QueuedResource request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueuedResourceState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<queued_resource_state::State>,
}

impl QueuedResourceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [state][QueuedResourceState::state].
    pub fn set_state<T: Into<queued_resource_state::State>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// Defines additional types related to [QueuedResourceState].
pub mod queued_resource_state {
    use super::*;

    /// Output only. The state of the queued resource request.
    #[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        StateUnspecified,
        Creating,
        Accepted,
        Provisioning,
        Failed,
        Deleting,
        Active,
        Suspending,
        Suspended,
        WaitingForResources,
        /// A value not known to this version of the library.
        #[serde(other)]
        Unknown,
    }
}

/// Metadata describing an [Operation].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    /// The time the operation finished running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Target of the operation, for example
    /// `projects/project-1/locations/us-central1-a/nodes/node-1`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target: String,

    /// Name of the verb executed by the operation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub verb: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub status_detail: String,

    /// Specifies if cancellation was requested for the operation.
    pub cancel_requested: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_version: String,
}

impl OperationMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [end_time][OperationMetadata::end_time].
    pub fn set_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [target][OperationMetadata::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = v.into();
        self
    }

    /// Sets the value of [verb][OperationMetadata::verb].
    pub fn set_verb<T: Into<String>>(mut self, v: T) -> Self {
        self.verb = v.into();
        self
    }
}

/// A generic empty message, returned by operations without a result.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Empty {}

impl Empty {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A long-running operation, in the `google.longrunning.Operation` format.
///
/// When `done` is true exactly one of `error` or `response` is set. The
/// `response` and `metadata` fields are JSON objects with an `@type` field
/// naming their schema.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, in the
    /// `projects/{project}/locations/{zone}/operations/{operation}` format.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Service-specific metadata, typically an [OperationMetadata].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// If the value is `false`, the operation is still in progress.
    pub done: bool,

    /// The error result of the operation in case of failure or cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<gax::error::rpc::Status>,

    /// The normal response of the operation in case of success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metadata][Operation::metadata].
    pub fn set_metadata<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done<T: Into<bool>>(mut self, v: T) -> Self {
        self.done = v.into();
        self
    }

    /// Sets the value of [error][Operation::error].
    pub fn set_error<T: Into<gax::error::rpc::Status>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }

    /// Sets the value of [response][Operation::response].
    pub fn set_response<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.response = Some(v.into());
        self
    }
}

/// The request message for [Tpu::get_node][crate::client::Tpu::get_node].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetNodeRequest {
    /// The resource name, `projects/{project}/locations/{zone}/nodes/{node}`.
    pub name: String,
}

/// The request message for [Tpu::start_node][crate::client::Tpu::start_node].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct StartNodeRequest {
    /// The resource name, `projects/{project}/locations/{zone}/nodes/{node}`.
    pub name: String,
}

/// The request message for
/// [Tpu::create_queued_resource][crate::client::Tpu::create_queued_resource].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateQueuedResourceRequest {
    /// The parent resource name, `projects/{project}/locations/{zone}`.
    pub parent: String,
    /// The unqualified resource name. Should follow the `^[A-Za-z0-9_.~+%-]+$`
    /// regex format.
    pub queued_resource_id: String,
    /// Idempotent request UUID. The client never sets this on its own.
    pub request_id: Option<String>,
    pub queued_resource: Option<QueuedResource>,
}

/// The request message for
/// [Tpu::get_queued_resource][crate::client::Tpu::get_queued_resource].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetQueuedResourceRequest {
    pub name: String,
}

/// The request message for
/// [Tpu::delete_queued_resource][crate::client::Tpu::delete_queued_resource].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteQueuedResourceRequest {
    pub name: String,
    pub request_id: Option<String>,
    /// If set to true, all running nodes belonging to this queued resource
    /// will be deleted first and then the queued resource will be deleted.
    pub force: bool,
}

/// The request message for [Tpu::get_operation][crate::client::Tpu::get_operation].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetOperationRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn node_from_json() -> TestResult {
        let got = serde_json::from_value::<Node>(json!({
            "name": "projects/p/locations/europe-west4-a/nodes/n1",
            "acceleratorType": "v2-8",
            "runtimeVersion": "tpu-vm-tf-2.14.1",
            "state": "READY",
            "networkConfig": {"network": "default", "enableExternalIps": true},
            "metadata": {"startup-script": "#!/bin/bash\necho hello"},
            "unknownField": 42,
        }))?;
        assert_eq!(got.name, "projects/p/locations/europe-west4-a/nodes/n1");
        assert_eq!(got.state, Some(node::State::Ready));
        assert!(
            matches!(&got.network_config, Some(c) if c.enable_external_ips),
            "{got:?}"
        );
        assert_eq!(
            got.metadata.get("startup-script").map(String::as_str),
            Some("#!/bin/bash\necho hello")
        );
        Ok(())
    }

    #[test]
    fn unknown_state() -> TestResult {
        let got = serde_json::from_value::<Node>(json!({"state": "SOME_NEW_STATE"}))?;
        assert_eq!(got.state, Some(node::State::Unknown));
        Ok(())
    }

    #[test]
    fn queued_resource_to_json() -> TestResult {
        let resource = QueuedResource::new().set_tpu(
            queued_resource::Tpu::new().set_node_spec([queued_resource::tpu::NodeSpec::new()
                .set_parent("projects/p/locations/europe-west4-a")
                .set_node_id("n1")
                .set_node(
                    Node::new()
                        .set_accelerator_type("v2-8")
                        .set_runtime_version("tpu-vm-tf-2.14.1")
                        .set_metadata([("startup-script", "echo hello")]),
                )]),
        );
        let got = serde_json::to_value(&resource)?;
        let want = json!({
            "tpu": {
                "nodeSpec": [{
                    "parent": "projects/p/locations/europe-west4-a",
                    "nodeId": "n1",
                    "node": {
                        "acceleratorType": "v2-8",
                        "runtimeVersion": "tpu-vm-tf-2.14.1",
                        "metadata": {"startup-script": "echo hello"},
                    }
                }]
            }
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn operation_from_json() -> TestResult {
        let operation = serde_json::from_value::<Operation>(json!({
            "name": "projects/p/locations/z/operations/op-1",
            "done": true,
            "error": {"code": 5, "message": "node not found"},
        }))?;
        assert!(operation.done);
        assert!(
            matches!(&operation.error, Some(s) if s.code == gax::error::rpc::Code::NotFound),
            "{operation:?}"
        );
        assert!(operation.response.is_none(), "{operation:?}");
        Ok(())
    }
}
