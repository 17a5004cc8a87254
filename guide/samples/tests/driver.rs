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

#[cfg(all(test, feature = "run-integration-tests"))]
mod driver {
    use lro_samples::config::SampleConfig;
    use lro_samples::{compute as samples, tpu as tpu_samples};
    use rand::{Rng, distr::Alphanumeric};
    use std::io::Write;

    const RANDOM_ID_LENGTH: usize = 16;

    fn random_id(prefix: &str) -> String {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_ID_LENGTH)
            .map(|c| char::from(c).to_ascii_lowercase())
            .collect();
        format!("{prefix}-{suffix}")
    }

    fn zone() -> String {
        std::env::var("GOOGLE_CLOUD_TEST_ZONE").unwrap_or("us-central1-a".to_string())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn hyperdisk() -> anyhow::Result<()> {
        let config = SampleConfig::from_env()?;
        let client = compute::client::Disks::builder()
            .with_credentials(config.credentials()?)
            .build()
            .await?;
        let zone = zone();
        let name = random_id("hyperdisk");

        let disk = samples::hyperdisk::create_hyperdisk(
            &client,
            &config.project_id,
            &zone,
            &name,
            10,
            3000,
            140,
            None,
        )
        .await?;
        assert_eq!(disk.name.as_deref(), Some(name.as_str()));
        samples::disks::delete_disk(
            &client,
            &config.project_id,
            &zone,
            &name,
            None,
            &mut std::io::stdout(),
        )
        .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn templates_and_reservations() -> anyhow::Result<()> {
        let config = SampleConfig::from_env()?;
        let project_id = config.project_id.as_str();
        let zone = zone();
        let mut out = std::io::stdout();

        let templates = compute::client::InstanceTemplates::builder()
            .with_credentials(config.credentials()?)
            .build()
            .await?;
        let template = random_id("template");
        samples::instance_templates::create_global_template(
            &templates, project_id, &template, None, &mut out,
        )
        .await?;

        let reservations = compute::client::Reservations::builder()
            .with_credentials(config.credentials()?)
            .build()
            .await?;
        let reservation = random_id("reservation");
        samples::reservations::create_reservation_for_instance_template(
            &reservations,
            project_id,
            &reservation,
            &format!("projects/{project_id}/global/instanceTemplates/{template}"),
            1,
            &zone,
            None,
            &mut out,
        )
        .await?;
        samples::reservations::delete_reservation(
            &reservations,
            project_id,
            &zone,
            &reservation,
            None,
            &mut out,
        )
        .await?;
        samples::instance_templates::delete_global_template(
            &templates, project_id, &template, None, &mut out,
        )
        .await?;

        let regional = compute::client::RegionInstanceTemplates::builder()
            .with_credentials(config.credentials()?)
            .build()
            .await?;
        let template = random_id("template");
        samples::instance_templates::create_regional_template(
            &regional, project_id, &zone, &template, None, &mut out,
        )
        .await?;
        samples::instance_templates::delete_regional_template(
            &regional, project_id, &zone, &template, None, &mut out,
        )
        .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn start_missing_tpu_vm() -> anyhow::Result<()> {
        let config = SampleConfig::from_env()?;
        let client = tpu::client::Tpu::builder()
            .with_credentials(config.credentials()?)
            .build()
            .await?;
        let mut out = Vec::new();
        let result = tpu_samples::start_tpu_vm(
            &client,
            &config.project_id,
            "europe-west4-a",
            &random_id("missing"),
            None,
            &mut out,
        )
        .await;
        assert!(result.is_err(), "{result:?}");
        assert!(out.is_empty());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn queued_resources() -> anyhow::Result<()> {
        const ZONE: &str = "europe-west4-a";
        let config = SampleConfig::from_env()?;
        let client = tpu::client::Tpu::builder()
            .with_credentials(config.credentials()?)
            .build()
            .await?;
        let mut out = std::io::stdout();
        let id = random_id("queued-resource");
        let mut script = tempfile::NamedTempFile::new()?;
        script.write_all(b"#!/bin/bash\necho \"Hello World\" > /var/log/hello.log\n")?;

        tpu_samples::create_queued_resource_with_startup_script(
            &client,
            &config.project_id,
            ZONE,
            &id,
            &random_id("node"),
            "v2-8",
            "tpu-vm-tf-2.14.1",
            script.path(),
            None,
            &mut out,
        )
        .await?;
        let got = tpu_samples::get_queued_resource(&client, &config.project_id, ZONE, &id).await?;
        assert!(got.name.ends_with(&id), "{got:?}");
        tpu_samples::delete_force_queued_resource(
            &client,
            &config.project_id,
            ZONE,
            &id,
            None,
            &mut out,
        )
        .await?;
        Ok(())
    }
}
