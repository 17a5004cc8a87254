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

// [START compute_reservation_create_template]
use compute::client::Reservations;
use compute::model::{AllocationSpecificSKUReservation, Reservation};
use std::io::Write;
use std::time::Duration;

/// Reserves `vm_count` VMs shaped like an existing instance template.
///
/// `template_uri` is the full or partial URL of the template, for example
/// `projects/my-project/global/instanceTemplates/my-template` or
/// `projects/my-project/regions/us-central1/instanceTemplates/my-template`.
#[allow(clippy::too_many_arguments)]
pub async fn create_reservation_for_instance_template(
    client: &Reservations,
    project_id: &str,
    name: &str,
    template_uri: &str,
    vm_count: i64,
    zone: &str,
    timeout: Option<Duration>,
    out: &mut (impl Write + Send),
) -> anyhow::Result<()> {
    let reservation = Reservation::new()
        .set_name(name)
        .set_zone(zone)
        .set_specific_reservation(
            AllocationSpecificSKUReservation::new()
                .set_count(vm_count)
                .set_source_instance_template(template_uri),
        );

    let poller = client
        .insert()
        .set_project(project_id)
        .set_zone(zone)
        .set_body(reservation)
        .poller();
    let operation = crate::wait(poller, timeout).await?;
    writeln!(
        out,
        "Reservation created. Operation Status: {}",
        operation.outcome().status
    )?;

    Ok(())
}
// [END compute_reservation_create_template]

// [START compute_reservation_delete]
/// Deletes a reservation.
pub async fn delete_reservation(
    client: &Reservations,
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
        .set_reservation(name)
        .poller();
    crate::wait(poller, timeout).await?;
    writeln!(out, "Deleted reservation: {name}")?;

    Ok(())
}
// [END compute_reservation_delete]
