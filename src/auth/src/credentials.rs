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

//! Types and functions to work with Google Cloud authentication credentials.
//!
//! The samples load credentials from the file named by the
//! `GOOGLE_APPLICATION_CREDENTIALS` environment variable. Use [Builder] to
//! load that file, or one of the builders in the [service_account] and
//! [user_account] modules to create credentials from a JSON value.

pub mod anonymous;
pub mod service_account;
pub mod user_account;

use crate::build_errors::Error as BuilderError;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use std::sync::Arc;

/// The environment variable naming the credentials file.
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

pub(crate) const QUOTA_PROJECT_KEY: &str = "x-goog-user-project";

pub(crate) const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// The result type for the [CredentialsProvider] functions.
pub type Result<T> = std::result::Result<T, gax::error::CredentialsError>;

/// The result of a [Builder::build] call.
pub type BuildResult<T> = std::result::Result<T, BuilderError>;

/// An implementation of [CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, [Credentials][credentials-link] are "digital object that
/// provide proof of identity", the archetype may be a username and password
/// combination, but a private RSA key may be a better example.
///
/// Applications rarely need to create instances of this type. The exception
/// might be when testing application code, where the application is mocking
/// the client library behavior.
///
/// [credentials-link]: https://cloud.google.com/docs/authentication#credentials
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to attach to each request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Produces the authentication headers for each request.
///
/// Implement this trait to provide custom credentials, mostly in tests.
#[async_trait::async_trait]
pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
    /// Asynchronously constructs the auth headers.
    ///
    /// Different auth tokens are sent via different headers. The
    /// [Credentials] constructs the headers (and header values) that should
    /// be sent with a request.
    async fn headers(&self) -> Result<HeaderMap>;
}

/// A builder for [Credentials] loaded from the environment.
///
/// # Example
/// ```no_run
/// # use lro_samples_auth::credentials::Builder;
/// let credentials = Builder::default().build()?;
/// # Ok::<(), lro_samples_auth::build_errors::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    credentials_file: Option<std::path::PathBuf>,
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Reads the credentials from `path` instead of the path in
    /// `GOOGLE_APPLICATION_CREDENTIALS`.
    pub fn with_credentials_file<P: Into<std::path::PathBuf>>(mut self, path: P) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Sets the [scopes] requested for the access tokens.
    ///
    /// [scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the [quota project] for the credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<S: Into<String>>(mut self, quota_project_id: S) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Loads the credentials file and returns a [Credentials] instance.
    ///
    /// # Errors
    /// Returns an error if no credentials file is configured, if the file
    /// cannot be read or parsed, or if its `type` field is not supported.
    pub fn build(self) -> BuildResult<Credentials> {
        let path = match self.credentials_file {
            Some(p) => p,
            None => std::env::var_os(CREDENTIALS_ENV)
                .filter(|v| !v.is_empty())
                .map(std::path::PathBuf::from)
                .ok_or_else(|| BuilderError::missing_environment(CREDENTIALS_ENV))?,
        };
        tracing::debug!("loading credentials from {}", path.display());
        let contents =
            std::fs::read_to_string(&path).map_err(|e| BuilderError::loading(&path, e))?;
        let json =
            serde_json::from_str::<serde_json::Value>(&contents).map_err(BuilderError::parsing)?;
        build_from_json(json, self.scopes, self.quota_project_id)
    }
}

fn build_from_json(
    json: serde_json::Value,
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
) -> BuildResult<Credentials> {
    let cred_type = json
        .get("type")
        .ok_or_else(|| BuilderError::parsing("no `type` field found."))?
        .as_str()
        .ok_or_else(|| BuilderError::parsing("`type` field is not a string."))?;
    match cred_type {
        "service_account" => {
            let mut builder = service_account::Builder::new(json);
            if let Some(s) = scopes {
                builder = builder.with_scopes(s);
            }
            if let Some(q) = quota_project_id {
                builder = builder.with_quota_project_id(q);
            }
            builder.build()
        }
        "authorized_user" => {
            let mut builder = user_account::Builder::new(json);
            if let Some(s) = scopes {
                builder = builder.with_scopes(s);
            }
            if let Some(q) = quota_project_id {
                builder = builder.with_quota_project_id(q);
            }
            builder.build()
        }
        _ => Err(BuilderError::unknown_type(format!(
            "unsupported credentials type `{cred_type}`"
        ))),
    }
}

pub(crate) fn build_bearer_headers(
    token: &crate::token::Token,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("{} {}", token.token_type, token.token))
        .map_err(|e| gax::error::CredentialsError::new(false, e))?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(AUTHORIZATION, value);
    if let Some(project) = quota_project_id {
        let value = HeaderValue::from_str(project)
            .map_err(|e| gax::error::CredentialsError::new(false, e))?;
        headers.insert(HeaderName::from_static(QUOTA_PROJECT_KEY), value);
    }
    Ok(headers)
}
