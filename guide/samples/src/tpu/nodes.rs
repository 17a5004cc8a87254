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

// [START tpu_vm_start]
use std::io::Write;
use std::time::Duration;
use tpu::client::Tpu;
use tpu::model::Node;

/// Starts a stopped TPU VM and returns the node once it is running.
///
/// Starting a node that does not exist fails, the operation completes with a
/// `NOT_FOUND` error.
pub async fn start_tpu_vm(
    client: &Tpu,
    project_id: &str,
    zone: &str,
    node: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<Node> {
    let poller = client
        .start_node()
        .set_name(super::node_name(project_id, zone, node))
        .poller();
    let node = crate::wait(poller, timeout).await?;
    writeln!(out, "TPU VM started: {}", node.name)?;

    Ok(node)
}
// [END tpu_vm_start]
