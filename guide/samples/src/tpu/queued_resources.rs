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

use std::io::Write;
use std::time::Duration;
use tpu::client::Tpu;
use tpu::model::QueuedResource;

fn queued_resource_name(project_id: &str, zone: &str, queued_resource_id: &str) -> String {
    format!("projects/{project_id}/locations/{zone}/queuedResources/{queued_resource_id}")
}

// [START tpu_queued_resources_startup_script]
use anyhow::Context;
use std::path::Path;
use tpu::model::Node;
use tpu::model::queued_resource::{Tpu as TpuSpec, tpu::NodeSpec};

/// Queues a request for a TPU node that runs a startup script on boot.
///
/// `tpu_type` is the accelerator type, for example `v2-8`, and `version` the
/// TPU software version, for example `tpu-vm-tf-2.14.1`. The contents of the
/// file at `startup_script` become the node's `startup-script` metadata.
#[allow(clippy::too_many_arguments)]
pub async fn create_queued_resource_with_startup_script(
    client: &Tpu,
    project_id: &str,
    zone: &str,
    queued_resource_id: &str,
    node_id: &str,
    tpu_type: &str,
    version: &str,
    startup_script: &Path,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<QueuedResource> {
    let script = tokio::fs::read_to_string(startup_script)
        .await
        .with_context(|| format!("cannot read startup script {}", startup_script.display()))?;
    let parent = format!("projects/{project_id}/locations/{zone}");
    let node = Node::new()
        .set_accelerator_type(tpu_type)
        .set_runtime_version(version)
        .set_metadata([("startup-script", script)]);
    let queued_resource = QueuedResource::new().set_tpu(
        TpuSpec::new().set_node_spec([NodeSpec::new()
            .set_parent(&parent)
            .set_node_id(node_id)
            .set_node(node)]),
    );

    let poller = client
        .create_queued_resource()
        .set_parent(parent)
        .set_queued_resource_id(queued_resource_id)
        .set_queued_resource(queued_resource)
        .poller();
    let created = crate::wait(poller, timeout).await?;
    writeln!(out, "Queued Resource created: {}", created.name)?;

    Ok(created)
}
// [END tpu_queued_resources_startup_script]

// [START tpu_queued_resources_delete_force]
/// Deletes a queued resource, and any node it created.
pub async fn delete_force_queued_resource(
    client: &Tpu,
    project_id: &str,
    zone: &str,
    queued_resource_id: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<()> {
    let name = queued_resource_name(project_id, zone, queued_resource_id);
    let poller = client
        .delete_queued_resource()
        .set_name(&name)
        .set_force(true)
        .poller();
    crate::wait(poller, timeout).await?;
    writeln!(out, "Deleted Queued Resource: {name}")?;

    Ok(())
}
// [END tpu_queued_resources_delete_force]

// [START tpu_queued_resources_get]
/// Fetches a queued resource.
pub async fn get_queued_resource(
    client: &Tpu,
    project_id: &str,
    zone: &str,
    queued_resource_id: &str,
) -> anyhow::Result<QueuedResource> {
    let queued_resource = client
        .get_queued_resource()
        .set_name(queued_resource_name(project_id, zone, queued_resource_id))
        .send()
        .await?;
    Ok(queued_resource)
}
// [END tpu_queued_resources_get]
