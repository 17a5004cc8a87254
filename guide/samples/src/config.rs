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

//! The configuration shared by all the samples.
//!
//! The samples read the project and the credentials file from the environment
//! once, at startup. Everything else is passed explicitly.

use gax::error::Error;
use std::path::PathBuf;

/// The environment variable naming the project used by the samples.
pub const PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";

/// The environment variable naming the credentials file.
pub use auth::credentials::CREDENTIALS_ENV;

/// Errors detected while loading the configuration.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("missing or empty environment variable `{0}`")]
    MissingVariable(&'static str),
}

/// The project and credentials used by the samples.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleConfig {
    pub project_id: String,
    pub credentials_file: PathBuf,
}

impl SampleConfig {
    pub fn new<P, C>(project_id: P, credentials_file: C) -> Self
    where
        P: Into<String>,
        C: Into<PathBuf>,
    {
        Self {
            project_id: project_id.into(),
            credentials_file: credentials_file.into(),
        }
    }

    /// Loads the configuration from `GOOGLE_CLOUD_PROJECT` and
    /// `GOOGLE_APPLICATION_CREDENTIALS`.
    ///
    /// # Example
    /// ```no_run
    /// # use lro_samples::config::SampleConfig;
    /// let config = SampleConfig::from_env()?;
    /// println!("running samples in {}", config.project_id);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn from_env() -> gax::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration using `lookup` to find each variable.
    ///
    /// Empty values are treated as missing. The error names the first
    /// missing variable.
    pub fn from_lookup<F>(lookup: F) -> gax::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::configuration(ConfigError::MissingVariable(name)))
        };
        let credentials_file = get(CREDENTIALS_ENV)?;
        let project_id = get(PROJECT_ENV)?;
        Ok(Self::new(project_id, credentials_file))
    }

    /// Loads the credentials named by this configuration.
    ///
    /// A file that cannot be read or parsed is a configuration error too.
    pub fn credentials(&self) -> gax::Result<auth::credentials::Credentials> {
        auth::credentials::Builder::default()
            .with_credentials_file(&self.credentials_file)
            .build()
            .map_err(Error::configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use std::collections::HashMap;
    use std::error::Error as _;
    use test_case::test_case;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn from_lookup() -> anyhow::Result<()> {
        let config = SampleConfig::from_lookup(lookup(&[
            (CREDENTIALS_ENV, "/etc/creds.json"),
            (PROJECT_ENV, "my-project"),
        ]))?;
        assert_eq!(config, SampleConfig::new("my-project", "/etc/creds.json"));
        Ok(())
    }

    #[test_case(&[(PROJECT_ENV, "my-project")], CREDENTIALS_ENV; "missing credentials")]
    #[test_case(&[(CREDENTIALS_ENV, "/etc/creds.json")], PROJECT_ENV; "missing project")]
    #[test_case(&[(CREDENTIALS_ENV, ""), (PROJECT_ENV, "my-project")], CREDENTIALS_ENV; "empty credentials")]
    #[test_case(&[(CREDENTIALS_ENV, "/etc/creds.json"), (PROJECT_ENV, "")], PROJECT_ENV; "empty project")]
    #[test_case(&[], CREDENTIALS_ENV; "empty environment")]
    fn missing(vars: &[(&str, &str)], want: &'static str) {
        let err = SampleConfig::from_lookup(lookup(vars)).unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<ConfigError>())
            .expect("configuration errors wrap a ConfigError");
        assert_eq!(source, &ConfigError::MissingVariable(want));
    }

    #[test]
    #[serial_test::serial]
    fn from_env() -> anyhow::Result<()> {
        let _c = ScopedEnv::set(CREDENTIALS_ENV, "/etc/creds.json");
        let _p = ScopedEnv::set(PROJECT_ENV, "env-project");
        let config = SampleConfig::from_env()?;
        assert_eq!(config.project_id, "env-project");
        assert_eq!(config.credentials_file, PathBuf::from("/etc/creds.json"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env_missing_project() {
        let _c = ScopedEnv::set(CREDENTIALS_ENV, "/etc/creds.json");
        let _p = ScopedEnv::remove(PROJECT_ENV);
        let err = SampleConfig::from_env().unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
    }

    #[test]
    fn credentials_file_not_found() {
        let config = SampleConfig::new("my-project", "/does/not/exist/creds.json");
        let err = config.credentials().unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
    }
}
