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

use super::TEMPLATE_TIMEOUT;
use crate::location::region_from_zone;
use compute::client::{InstanceTemplates, RegionInstanceTemplates};
use compute::model::{
    AttachedDisk, AttachedDiskInitializeParams, InstanceProperties, InstanceTemplate,
    NetworkInterface,
};
use lro::Poller;
use std::io::Write;
use std::time::Duration;

const MACHINE_TYPE: &str = "n1-standard-1";
const SOURCE_IMAGE: &str = "projects/debian-cloud/global/images/family/debian-11";
const DISK_TYPE: &str = "pd-balanced";
const DISK_SIZE_GB: i64 = 100;

fn boot_disk() -> AttachedDisk {
    AttachedDisk::new()
        .set_boot(true)
        .set_auto_delete(true)
        .set_initialize_params(
            AttachedDiskInitializeParams::new()
                .set_source_image(SOURCE_IMAGE)
                .set_disk_type(DISK_TYPE)
                .set_disk_size_gb(DISK_SIZE_GB),
        )
}

// [START compute_template_create]
/// Creates a global instance template using the `default` network.
pub async fn create_global_template(
    client: &InstanceTemplates,
    project_id: &str,
    name: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<()> {
    let template = InstanceTemplate::new().set_name(name).set_properties(
        InstanceProperties::new()
            .set_machine_type(MACHINE_TYPE)
            .set_disks([boot_disk()])
            .set_network_interfaces([NetworkInterface::new().set_network("global/networks/default")]),
    );

    let operation = client
        .insert()
        .set_project(project_id)
        .set_body(template)
        .poller()
        .until_done_with_timeout(timeout.unwrap_or(TEMPLATE_TIMEOUT))
        .await?;
    writeln!(
        out,
        "Instance Template Operation Status {name}: {}",
        operation.outcome().status
    )?;

    Ok(())
}
// [END compute_template_create]

// [START compute_regional_template_create]
/// Creates a regional instance template in the region containing `zone`.
///
/// The template uses the `default` subnetwork of that region.
pub async fn create_regional_template(
    client: &RegionInstanceTemplates,
    project_id: &str,
    zone: &str,
    name: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<()> {
    let region = region_from_zone(zone)?;
    let template = InstanceTemplate::new().set_name(name).set_properties(
        InstanceProperties::new()
            .set_machine_type(MACHINE_TYPE)
            .set_disks([boot_disk()])
            .set_network_interfaces([NetworkInterface::new()
                .set_network("global/networks/default")
                .set_subnetwork(format!(
                    "projects/{project_id}/regions/{region}/subnetworks/default"
                ))]),
    );

    let operation = client
        .insert()
        .set_project(project_id)
        .set_region(region)
        .set_body(template)
        .poller()
        .until_done_with_timeout(timeout.unwrap_or(TEMPLATE_TIMEOUT))
        .await?;
    writeln!(
        out,
        "Instance Template Operation Status: {}",
        operation.outcome().status
    )?;

    Ok(())
}
// [END compute_regional_template_create]

// [START compute_template_delete]
/// Deletes a global instance template.
pub async fn delete_global_template(
    client: &InstanceTemplates,
    project_id: &str,
    name: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<()> {
    let operation = client
        .delete()
        .set_project(project_id)
        .set_instance_template(name)
        .poller()
        .until_done_with_timeout(timeout.unwrap_or(TEMPLATE_TIMEOUT))
        .await?;
    writeln!(
        out,
        "Instance template deletion operation status for {name}: {}",
        operation.outcome().status
    )?;

    Ok(())
}
// [END compute_template_delete]

// [START compute_regional_template_delete]
/// Deletes a regional instance template from the region containing `zone`.
pub async fn delete_regional_template(
    client: &RegionInstanceTemplates,
    project_id: &str,
    zone: &str,
    name: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<()> {
    let region = region_from_zone(zone)?;
    let operation = client
        .delete()
        .set_project(project_id)
        .set_region(region)
        .set_instance_template(name)
        .poller()
        .until_done_with_timeout(timeout.unwrap_or(TEMPLATE_TIMEOUT))
        .await?;
    writeln!(
        out,
        "Instance template deletion operation status for {name}: {}",
        operation.outcome().status
    )?;

    Ok(())
}
// [END compute_regional_template_delete]
