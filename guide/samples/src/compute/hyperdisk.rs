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

// [START compute_hyperdisk_create]
use compute::client::Disks;
use compute::model::Disk;
use std::time::Duration;

/// Creates a `hyperdisk-balanced` disk and returns it once it exists.
///
/// `iops` and `throughput` set the provisioned performance of the disk, the
/// throughput is in MiB per second.
#[allow(clippy::too_many_arguments)]
pub async fn create_hyperdisk(
    client: &Disks,
    project_id: &str,
    zone: &str,
    name: &str,
    size_gb: i64,
    iops: i64,
    throughput: i64,
    timeout: Option<Duration>,
) -> anyhow::Result<Disk> {
    let disk = Disk::new()
        .set_name(name)
        .set_zone(zone)
        .set_type(format!("zones/{zone}/diskTypes/hyperdisk-balanced"))
        .set_size_gb(size_gb)
        .set_provisioned_iops(iops)
        .set_provisioned_throughput(throughput);

    let poller = client
        .insert()
        .set_project(project_id)
        .set_zone(zone)
        .set_body(disk)
        .poller();
    crate::wait(poller, timeout).await?;

    let disk = client
        .get()
        .set_project(project_id)
        .set_zone(zone)
        .set_disk(name)
        .send()
        .await?;
    Ok(disk)
}
// [END compute_hyperdisk_create]
