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

//! Client configuration shared by the Compute Engine and Cloud TPU clients.

pub use auth::credentials::Credentials;

/// The configuration consumed by [ReqwestClient][crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

/// Set to `true` to enable request spans in all clients.
pub(crate) const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// Describes a client crate in spans and headers.
///
/// Each client crate defines one `static` value and passes it to
/// [ReqwestClient::with_instrumentation][crate::http::ReqwestClient::with_instrumentation].
#[derive(Copy, Clone, Debug)]
pub struct InstrumentationClientInfo {
    /// The short service name, `compute` or `tpu`.
    pub service_name: &'static str,
    pub client_version: &'static str,
    /// The crate name.
    pub client_artifact: &'static str,
    /// The service hostname, without a scheme.
    pub default_host: &'static str,
}

/// Returns true if request spans are enabled, either in `config` or through
/// `GOOGLE_CLOUD_RUST_LOGGING=true`.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    config.tracing || matches!(std::env::var(LOGGING_VAR).as_deref(), Ok("true"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    #[test_case(None, false)]
    #[test_case(Some("true"), true)]
    #[test_case(Some("TRUE"), false)]
    #[test_case(Some("1"), false)]
    #[test_case(Some(""), false)]
    #[serial_test::serial]
    fn from_environment(value: Option<&str>, want: bool) {
        let _e = match value {
            None => ScopedEnv::remove(LOGGING_VAR),
            Some(v) => ScopedEnv::set(LOGGING_VAR, v),
        };
        assert_eq!(tracing_enabled(&ClientConfig::default()), want);
    }

    #[test]
    #[serial_test::serial]
    fn from_config() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig {
            tracing: true,
            ..ClientConfig::default()
        };
        assert!(tracing_enabled(&config));
    }
}
