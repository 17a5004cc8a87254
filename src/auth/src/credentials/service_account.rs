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

//! [Service Account] credentials.
//!
//! The credentials file contains an RSA private key. These credentials sign a
//! JWT assertion with that key and exchange the assertion for an access token
//! at the OAuth2 token endpoint, as described in [RFC 7523].
//!
//! Treat service account keys as any other secret. Do not store them where
//! unauthorized persons or programs may read them.
//!
//! [RFC 7523]: https://datatracker.ietf.org/doc/html/rfc7523
//! [Service Account]: https://cloud.google.com/iam/docs/service-account-creds

use crate::Result;
use crate::build_errors::Error as BuilderError;
use crate::credentials::{
    BuildResult, Credentials, CredentialsProvider, DEFAULT_SCOPE, build_bearer_headers,
};
use crate::token::{Token, TokenProvider, fetch};
use crate::token_cache::TokenCache;
use gax::error::CredentialsError;
use http::HeaderMap;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::Value;
use std::time::Duration;
use time::OffsetDateTime;

const OAUTH2_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const JWT_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME: Duration = Duration::from_secs(3600);

/// A builder for `service_account` [Credentials].
///
/// # Example
/// ```no_run
/// # use lro_samples_auth::credentials::service_account::Builder;
/// let contents = std::fs::read_to_string("service-account.json").unwrap();
/// let key: serde_json::Value = serde_json::from_str(&contents).unwrap();
/// let credentials = Builder::new(key).build()?;
/// # Ok::<(), lro_samples_auth::build_errors::Error>(())
/// ```
pub struct Builder {
    service_account_key: Value,
    scopes: Option<Vec<String>>,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Creates a new builder from a [service account key] JSON value.
    ///
    /// [service account key]: https://cloud.google.com/iam/docs/keys-create-delete#creating
    pub fn new(service_account_key: Value) -> Self {
        Self {
            service_account_key,
            scopes: None,
            quota_project_id: None,
        }
    }

    /// Sets the [scopes] for these credentials.
    ///
    /// Defaults to `https://www.googleapis.com/auth/cloud-platform`.
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

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<S: Into<String>>(mut self, quota_project_id: S) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    /// Returns an error if the JSON value is missing required fields, or if
    /// the private key is not a valid PEM-encoded RSA key.
    pub fn build(self) -> BuildResult<Credentials> {
        let key = serde_json::from_value::<ServiceAccountKey>(self.service_account_key)
            .map_err(BuilderError::parsing)?;
        let encoding_key =
            EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(BuilderError::parsing)?;
        let quota_project_id = self.quota_project_id.or(key.quota_project_id);
        let token_provider = ServiceAccountTokenProvider {
            client_email: key.client_email,
            private_key_id: key.private_key_id,
            encoding_key,
            token_uri: key.token_uri.unwrap_or_else(|| OAUTH2_ENDPOINT.to_string()),
            scopes: self
                .scopes
                .map(|s| s.join(" "))
                .unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
        };
        Ok(Credentials::from(ServiceAccountCredentials {
            token_provider: TokenCache::new(token_provider),
            quota_project_id,
        }))
    }
}

#[derive(serde::Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key_id: String,
    private_key: String,
    #[serde(default)]
    token_uri: Option<String>,
    #[serde(default)]
    quota_project_id: Option<String>,
}

#[derive(serde::Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

struct ServiceAccountTokenProvider {
    client_email: String,
    private_key_id: String,
    encoding_key: EncodingKey,
    token_uri: String,
    scopes: String,
}

impl std::fmt::Debug for ServiceAccountTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountTokenProvider")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("encoding_key", &"[censored]")
            .field("token_uri", &self.token_uri)
            .field("scopes", &self.scopes)
            .finish()
    }
}

impl ServiceAccountTokenProvider {
    fn assertion(&self, now: OffsetDateTime) -> Result<String> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(self.private_key_id.clone());
        let iat = now.unix_timestamp();
        let claims = Claims {
            iss: &self.client_email,
            scope: &self.scopes,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME.as_secs() as i64,
        };
        jsonwebtoken::encode(&header, &claims, &self.encoding_key)
            .map_err(|e| CredentialsError::new(false, e))
    }
}

#[async_trait::async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn token(&self) -> Result<Token> {
        let assertion = self.assertion(OffsetDateTime::now_utc())?;
        let builder = reqwest::Client::new()
            .post(self.token_uri.as_str())
            .form(&[("grant_type", JWT_GRANT_TYPE), ("assertion", &assertion)]);
        fetch(builder).await
    }
}

#[derive(Debug)]
struct ServiceAccountCredentials<T>
where
    T: TokenProvider,
{
    token_provider: T,
    quota_project_id: Option<String>,
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for ServiceAccountCredentials<T>
where
    T: TokenProvider,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        build_bearer_headers(&token, &self.quota_project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{AUTHORIZATION, HeaderValue};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use rsa::RsaPrivateKey;
    use rsa::pkcs8::{EncodePrivateKey, LineEnding};
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    fn generate_pkcs8_private_key() -> anyhow::Result<String> {
        let mut rng = rsa::rand_core::OsRng;
        let key = RsaPrivateKey::new(&mut rng, 2048)?;
        Ok(key.to_pkcs8_pem(LineEnding::LF)?.to_string())
    }

    fn service_account_key(token_uri: Option<String>) -> anyhow::Result<Value> {
        let mut value = json!({
            "type": "service_account",
            "client_email": "test-client-email",
            "private_key_id": "test-private-key-id",
            "private_key": generate_pkcs8_private_key()?,
            "project_id": "test-project-id",
        });
        if let Some(uri) = token_uri {
            value["token_uri"] = json!(uri);
        }
        Ok(value)
    }

    #[test]
    fn missing_fields() {
        let err = Builder::new(json!({"type": "service_account"}))
            .build()
            .unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
    }

    #[test]
    fn invalid_private_key() {
        let err = Builder::new(json!({
            "type": "service_account",
            "client_email": "test-client-email",
            "private_key_id": "test-private-key-id",
            "private_key": "not a PEM key",
        }))
        .build()
        .unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
    }

    #[test]
    fn debug_censors_key() -> TestResult {
        let key = service_account_key(None)?;
        let pem = key["private_key"].as_str().unwrap_or_default().to_string();
        let credentials = Builder::new(key).build()?;
        let fmt = format!("{credentials:?}");
        assert!(fmt.contains("test-client-email"), "{fmt}");
        assert!(!fmt.contains(&pem), "{fmt}");
        Ok(())
    }

    #[test]
    fn assertion_header_and_claims() -> TestResult {
        let provider = ServiceAccountTokenProvider {
            client_email: "test-client-email".into(),
            private_key_id: "test-private-key-id".into(),
            encoding_key: EncodingKey::from_rsa_pem(generate_pkcs8_private_key()?.as_bytes())?,
            token_uri: "https://test.invalid/token".into(),
            scopes: DEFAULT_SCOPE.into(),
        };
        let now = OffsetDateTime::now_utc();
        let assertion = provider.assertion(now)?;
        let header = jsonwebtoken::decode_header(&assertion)?;
        assert_eq!(header.alg, Algorithm::RS256);
        assert_eq!(header.kid.as_deref(), Some("test-private-key-id"));
        // A JWT has three sections: header, claims, and signature.
        assert_eq!(assertion.split('.').count(), 3, "{assertion}");
        Ok(())
    }

    #[tokio::test]
    async fn headers_success() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/token"),
                request::body(url_decoded(contains(("grant_type", JWT_GRANT_TYPE)))),
                request::body(url_decoded(contains(("assertion", any())))),
            ])
            .times(1)
            .respond_with(json_encoded(json!({
                "access_token": "test-access-token",
                "expires_in": 3600,
                "token_type": "Bearer",
            }))),
        );

        let credentials = Builder::new(service_account_key(Some(
            server.url("/token").to_string(),
        ))?)
        .build()?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-access-token"))
        );
        // Cached, the server expects exactly one request.
        let _ = credentials.headers().await?;
        Ok(())
    }

    #[tokio::test]
    async fn headers_transient_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token"))
                .respond_with(status_code(503)),
        );
        let credentials = Builder::new(service_account_key(Some(
            server.url("/token").to_string(),
        ))?)
        .build()?;
        let err = credentials.headers().await.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        Ok(())
    }
}
