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

// [START compute_disk_start_replication]
use compute::client::RegionDisks;
use compute::model::RegionDisksStartAsyncReplicationRequest;
use lro::Poller;
use std::io::Write;
use std::time::Duration;

/// Starts replicating a regional disk to `secondary_disk`.
///
/// The secondary disk is a full resource path, for example
/// `projects/my-project/regions/europe-west4/disks/my-secondary`. An operation
/// that completes with an error is returned as an error, and nothing is
/// printed.
pub async fn start_async_replication(
    client: &RegionDisks,
    project_id: &str,
    region: &str,
    disk: &str,
    secondary_disk: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<()> {
    let operation = client
        .start_async_replication()
        .set_project(project_id)
        .set_region(region)
        .set_disk(disk)
        .set_body(
            RegionDisksStartAsyncReplicationRequest::new().set_async_secondary_disk(secondary_disk),
        )
        .poller()
        .until_done()
        .await?;
    tracing::info!("replication operation completed: {operation:?}");
    writeln!(out, "Async replication started successfully.")?;

    Ok(())
}
// [END compute_disk_start_replication]

// [START compute_disk_start_zonal_replication]
/// Starts replicating a zonal disk to `secondary_disk`.
pub async fn start_zonal_async_replication(
    client: &compute::client::Disks,
    project_id: &str,
    zone: &str,
    disk: &str,
    secondary_disk: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<()> {
    use compute::model::DisksStartAsyncReplicationRequest;

    let poller = client
        .start_async_replication()
        .set_project(project_id)
        .set_zone(zone)
        .set_disk(disk)
        .set_body(DisksStartAsyncReplicationRequest::new().set_async_secondary_disk(secondary_disk))
        .poller();
    crate::wait(poller, timeout).await?;
    writeln!(out, "Async replication started successfully.")?;

    Ok(())
}
// [END compute_disk_start_zonal_replication]

// [START compute_disk_delete]
/// Deletes a zonal disk.
pub async fn delete_disk(
    client: &compute::client::Disks,
    project_id: &str,
    zone: &str,
    name: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<()> {
    let poller = client
        .delete()
        .set_project(project_id)
        .set_zone(zone)
        .set_disk(name)
        .poller();
    crate::wait(poller, timeout).await?;
    writeln!(out, "Deleted disk: {name}")?;

    Ok(())
}
// [END compute_disk_delete]
