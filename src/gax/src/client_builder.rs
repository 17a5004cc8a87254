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

//! Builders for the service clients.
//!
//! Each client type has a `builder()` function returning a [ClientBuilder].
//! The samples use it to set the credentials loaded from the environment,
//! tests use it to point the client at a local server.

use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A client could not be created.
///
/// Both cases are configuration problems: no request was sent.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot load the default credentials, set GOOGLE_APPLICATION_CREDENTIALS or use with_credentials(): {0}")]
    DefaultCredentials(#[source] BoxError),
    #[error("cannot create the HTTP client: {0}")]
    Transport(#[source] BoxError),
}

impl Error {
    /// The client was built without credentials, and the default credentials
    /// are not available.
    pub fn is_default_credentials(&self) -> bool {
        matches!(self, Self::DefaultCredentials(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self::DefaultCredentials(source.into())
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self::Transport(source.into())
    }
}

/// Configures and creates a service client.
///
/// # Example
/// ```ignore
/// let client = compute::client::RegionDisks::builder()
///     .with_credentials(credentials)
///     .with_polling_backoff_policy(FixedDelay(Duration::from_secs(5)))
///     .build()
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    factory: F,
    config: internal::ClientConfig<Cr>,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sends the requests to `v` instead of the service's default host.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Creates a `tracing` span for each request, including each poll of a
    /// long-running operation.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Uses these credentials instead of the default credentials.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// The default polling error policy for all the requests of this client.
    pub fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_error_policy = Some(v.into().0);
        self
    }

    /// The default polling backoff policy for all the requests of this client.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_backoff_policy = Some(v.into().0);
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    use super::*;

    /// Creates the client from the accumulated configuration.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
        pub polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    }

    // A derive would require `Cr: Default`.
    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                polling_error_policy: None,
                polling_backoff_policy: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polling_backoff_policy::FixedDelay;
    use crate::polling_error_policy::AlwaysContinue;
    use std::error::Error as _;
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq)]
    struct ApiKey(&'static str);

    // The "client" is the configuration it was built with.
    struct Recorder;
    impl internal::ClientFactory for Recorder {
        type Client = internal::ClientConfig<ApiKey>;
        type Credentials = ApiKey;
        async fn build(self, config: internal::ClientConfig<ApiKey>) -> Result<Self::Client> {
            Ok(config)
        }
    }

    fn builder() -> ClientBuilder<Recorder, ApiKey> {
        internal::new_builder(Recorder)
    }

    #[tokio::test]
    async fn defaults() -> anyhow::Result<()> {
        let config = builder().build().await?;
        assert!(config.endpoint.is_none(), "{config:?}");
        assert!(config.cred.is_none(), "{config:?}");
        assert!(!config.tracing, "{config:?}");
        assert!(config.polling_error_policy.is_none(), "{config:?}");
        assert!(config.polling_backoff_policy.is_none(), "{config:?}");
        Ok(())
    }

    #[tokio::test]
    async fn every_setter() -> anyhow::Result<()> {
        let config = builder()
            .with_endpoint("http://127.0.0.1:8080")
            .with_credentials(ApiKey("test-only"))
            .with_tracing()
            .with_polling_error_policy(AlwaysContinue)
            .with_polling_backoff_policy(FixedDelay(Duration::from_secs(5)))
            .build()
            .await?;
        assert_eq!(config.endpoint.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(config.cred, Some(ApiKey("test-only")));
        assert!(config.tracing, "{config:?}");
        assert!(config.polling_error_policy.is_some(), "{config:?}");
        let delay = config
            .polling_backoff_policy
            .map(|p| p.wait_period(&crate::polling_state::PollingState::default()));
        assert_eq!(delay, Some(Duration::from_secs(5)));
        Ok(())
    }

    #[test]
    fn errors() {
        let io = || std::io::Error::other("no TLS roots");

        let error = Error::cred(io());
        assert!(error.is_default_credentials(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("GOOGLE_APPLICATION_CREDENTIALS"), "{error}");
        assert!(error.source().is_some(), "{error:?}");

        let error = Error::transport(io());
        assert!(error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("no TLS roots"), "{error}");
    }
}
