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

//! Runs one sample against a real project.
//!
//! ```text
//! cloud-samples --project my-project start-tpu-vm --zone us-central1-b --node my-node
//! ```

use auth::credentials::Credentials;
use clap::Parser;
use lro_samples::config::{PROJECT_ENV, SampleConfig};
use lro_samples::{compute as samples_compute, tpu as samples_tpu};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cloud-samples", version, about, long_about = None)]
struct Cli {
    /// The project used by the samples.
    #[arg(long, env = PROJECT_ENV)]
    project: Option<String>,

    /// Stops waiting for the operation after this many seconds. The remote
    /// operation keeps running.
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Starts asynchronous replication of a regional disk.
    StartReplication {
        #[arg(long)]
        region: String,
        #[arg(long)]
        disk: String,
        /// The full path of the secondary disk.
        #[arg(long)]
        secondary_disk: String,
    },
    /// Starts asynchronous replication of a zonal disk.
    StartZonalReplication {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        disk: String,
        /// The full path of the secondary disk.
        #[arg(long)]
        secondary_disk: String,
    },
    /// Creates a hyperdisk-balanced disk.
    CreateHyperdisk {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = 10)]
        size_gb: i64,
        #[arg(long, default_value_t = 3000)]
        iops: i64,
        /// The provisioned throughput in MiB per second.
        #[arg(long, default_value_t = 140)]
        throughput: i64,
    },
    /// Deletes a zonal disk.
    DeleteDisk {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        name: String,
    },
    /// Creates a global instance template.
    CreateGlobalTemplate {
        #[arg(long)]
        name: String,
    },
    /// Creates a regional instance template.
    CreateRegionalTemplate {
        /// Any zone in the template's region.
        #[arg(long)]
        zone: String,
        #[arg(long)]
        name: String,
    },
    /// Deletes a global instance template.
    DeleteGlobalTemplate {
        #[arg(long)]
        name: String,
    },
    /// Deletes a regional instance template.
    DeleteRegionalTemplate {
        /// Any zone in the template's region.
        #[arg(long)]
        zone: String,
        #[arg(long)]
        name: String,
    },
    /// Creates a reservation from an instance template.
    CreateReservation {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        template_uri: String,
        #[arg(long, default_value_t = 3)]
        vm_count: i64,
    },
    /// Deletes a reservation.
    DeleteReservation {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        name: String,
    },
    /// Starts a stopped TPU VM.
    StartTpuVm {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        node: String,
    },
    /// Creates a queued resource whose node runs a startup script.
    CreateQueuedResource {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        queued_resource_id: String,
        #[arg(long)]
        node_id: String,
        #[arg(long, default_value = "v2-8")]
        tpu_type: String,
        /// The TPU software version.
        #[arg(long, default_value = "tpu-vm-tf-2.14.1")]
        runtime_version: String,
        /// A file with the script the node runs when it boots.
        #[arg(long, value_name = "PATH")]
        startup_script: PathBuf,
    },
    /// Deletes a queued resource and its nodes.
    DeleteQueuedResource {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        queued_resource_id: String,
    },
    /// Prints a queued resource.
    GetQueuedResource {
        #[arg(long)]
        zone: String,
        #[arg(long)]
        queued_resource_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SampleConfig::from_lookup(|name| {
        if name == PROJECT_ENV {
            return cli.project.clone();
        }
        std::env::var(name).ok()
    })?;
    let credentials = config.credentials()?;
    tracing::debug!("running {:?} in project {}", cli.command, config.project_id);

    let timeout = cli.timeout.map(Duration::from_secs);
    run(cli.command, &config, credentials, timeout).await
}

async fn run(
    command: Command,
    config: &SampleConfig,
    credentials: Credentials,
    timeout: Option<Duration>,
) -> anyhow::Result<()> {
    let project_id = config.project_id.as_str();
    let mut out = std::io::stdout();
    match command {
        Command::StartReplication {
            region,
            disk,
            secondary_disk,
        } => {
            let client = compute::client::RegionDisks::builder()
                .with_credentials(credentials)
                .build()
                .await?;
            samples_compute::disks::start_async_replication(
                &client,
                project_id,
                &region,
                &disk,
                &secondary_disk,
                timeout,
                &mut out,
            )
            .await?;
        }
        Command::StartZonalReplication {
            zone,
            disk,
            secondary_disk,
        } => {
            let client = disks(credentials).await?;
            samples_compute::disks::start_zonal_async_replication(
                &client,
                project_id,
                &zone,
                &disk,
                &secondary_disk,
                timeout,
                &mut out,
            )
            .await?;
        }
        Command::CreateHyperdisk {
            zone,
            name,
            size_gb,
            iops,
            throughput,
        } => {
            let client = disks(credentials).await?;
            let disk = samples_compute::hyperdisk::create_hyperdisk(
                &client, project_id, &zone, &name, size_gb, iops, throughput, timeout,
            )
            .await?;
            writeln!(out, "Hyperdisk created: {disk:?}")?;
        }
        Command::DeleteDisk { zone, name } => {
            let client = disks(credentials).await?;
            samples_compute::disks::delete_disk(
                &client, project_id, &zone, &name, timeout, &mut out,
            )
            .await?;
        }
        Command::CreateGlobalTemplate { name } => {
            let client = global_templates(credentials).await?;
            samples_compute::instance_templates::create_global_template(
                &client, project_id, &name, timeout, &mut out,
            )
            .await?;
        }
        Command::CreateRegionalTemplate { zone, name } => {
            let client = regional_templates(credentials).await?;
            samples_compute::instance_templates::create_regional_template(
                &client, project_id, &zone, &name, timeout, &mut out,
            )
            .await?;
        }
        Command::DeleteGlobalTemplate { name } => {
            let client = global_templates(credentials).await?;
            samples_compute::instance_templates::delete_global_template(
                &client, project_id, &name, timeout, &mut out,
            )
            .await?;
        }
        Command::DeleteRegionalTemplate { zone, name } => {
            let client = regional_templates(credentials).await?;
            samples_compute::instance_templates::delete_regional_template(
                &client, project_id, &zone, &name, timeout, &mut out,
            )
            .await?;
        }
        Command::CreateReservation {
            zone,
            name,
            template_uri,
            vm_count,
        } => {
            let client = reservations(credentials).await?;
            samples_compute::reservations::create_reservation_for_instance_template(
                &client,
                project_id,
                &name,
                &template_uri,
                vm_count,
                &zone,
                timeout,
                &mut out,
            )
            .await?;
        }
        Command::DeleteReservation { zone, name } => {
            let client = reservations(credentials).await?;
            samples_compute::reservations::delete_reservation(
                &client, project_id, &zone, &name, timeout, &mut out,
            )
            .await?;
        }
        Command::StartTpuVm { zone, node } => {
            let client = tpu_client(credentials).await?;
            samples_tpu::start_tpu_vm(&client, project_id, &zone, &node, timeout, &mut out)
                .await?;
        }
        Command::CreateQueuedResource {
            zone,
            queued_resource_id,
            node_id,
            tpu_type,
            runtime_version,
            startup_script,
        } => {
            let client = tpu_client(credentials).await?;
            samples_tpu::create_queued_resource_with_startup_script(
                &client,
                project_id,
                &zone,
                &queued_resource_id,
                &node_id,
                &tpu_type,
                &runtime_version,
                &startup_script,
                timeout,
                &mut out,
            )
            .await?;
        }
        Command::DeleteQueuedResource {
            zone,
            queued_resource_id,
        } => {
            let client = tpu_client(credentials).await?;
            samples_tpu::delete_force_queued_resource(
                &client,
                project_id,
                &zone,
                &queued_resource_id,
                timeout,
                &mut out,
            )
            .await?;
        }
        Command::GetQueuedResource {
            zone,
            queued_resource_id,
        } => {
            let client = tpu_client(credentials).await?;
            let queued_resource =
                samples_tpu::get_queued_resource(&client, project_id, &zone, &queued_resource_id)
                    .await?;
            writeln!(out, "{queued_resource:?}")?;
        }
    }
    Ok(())
}

async fn disks(credentials: Credentials) -> anyhow::Result<compute::client::Disks> {
    let client = compute::client::Disks::builder()
        .with_credentials(credentials)
        .build()
        .await?;
    Ok(client)
}

async fn global_templates(
    credentials: Credentials,
) -> anyhow::Result<compute::client::InstanceTemplates> {
    let client = compute::client::InstanceTemplates::builder()
        .with_credentials(credentials)
        .build()
        .await?;
    Ok(client)
}

async fn regional_templates(
    credentials: Credentials,
) -> anyhow::Result<compute::client::RegionInstanceTemplates> {
    let client = compute::client::RegionInstanceTemplates::builder()
        .with_credentials(credentials)
        .build()
        .await?;
    Ok(client)
}

async fn reservations(credentials: Credentials) -> anyhow::Result<compute::client::Reservations> {
    let client = compute::client::Reservations::builder()
        .with_credentials(credentials)
        .build()
        .await?;
    Ok(client)
}

async fn tpu_client(credentials: Credentials) -> anyhow::Result<tpu::client::Tpu> {
    let client = tpu::client::Tpu::builder()
        .with_credentials(credentials)
        .build()
        .await?;
    Ok(client)
}
