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

use crate::Result;
use gax::error::CredentialsError;
use std::time::Duration;
use tokio::time::Instant;

/// Represents an auth token.
#[derive(Clone, PartialEq)]
pub(crate) struct Token {
    /// The actual token string.
    pub token: String,

    /// The type of the token, typically `Bearer`.
    pub token_type: String,

    /// The instant at which the token expires. `None` if the token does not
    /// expire.
    pub expires_at: Option<Instant>,
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[async_trait::async_trait]
pub(crate) trait TokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Sends a token request to an OAuth2 token endpoint and parses the response.
pub(crate) async fn fetch(builder: reqwest::RequestBuilder) -> Result<Token> {
    let response = builder
        .send()
        .await
        .map_err(|e| CredentialsError::new(true, e))?;
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| CredentialsError::new(is_transient(status), e))?;
        return Err(CredentialsError::from_msg(
            is_transient(status),
            format!("failed to fetch token, status={status}, body={body}"),
        ));
    }
    let response = response.json::<TokenResponse>().await.map_err(|e| {
        let transient = !e.is_decode();
        CredentialsError::new(transient, e)
    })?;
    Ok(Token {
        token: response.access_token,
        token_type: response.token_type,
        expires_at: response
            .expires_in
            .map(|d| Instant::now() + Duration::from_secs(d)),
    })
}

pub(crate) fn is_transient(c: http::StatusCode) -> bool {
    matches!(
        c,
        http::StatusCode::REQUEST_TIMEOUT
            | http::StatusCode::TOO_MANY_REQUESTS
            | http::StatusCode::INTERNAL_SERVER_ERROR
            | http::StatusCode::BAD_GATEWAY
            | http::StatusCode::SERVICE_UNAVAILABLE
            | http::StatusCode::GATEWAY_TIMEOUT
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn debug() {
        let token = Token {
            token: "token-test-only".into(),
            token_type: "Bearer".into(),
            expires_at: None,
        };
        let got = format!("{token:?}");
        assert!(!got.contains("token-test-only"), "{got}");
        assert!(got.contains("[censored]"), "{got}");
        assert!(got.contains("Bearer"), "{got}");
    }

    #[test_case(http::StatusCode::SERVICE_UNAVAILABLE, true)]
    #[test_case(http::StatusCode::TOO_MANY_REQUESTS, true)]
    #[test_case(http::StatusCode::INTERNAL_SERVER_ERROR, true)]
    #[test_case(http::StatusCode::UNAUTHORIZED, false)]
    #[test_case(http::StatusCode::BAD_REQUEST, false)]
    fn transient(code: http::StatusCode, want: bool) {
        assert_eq!(is_transient(code), want);
    }

    #[tokio::test]
    async fn fetch_success() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token")).respond_with(
                json_encoded(json!({
                    "access_token": "test-access-token",
                    "expires_in": 3600,
                    "token_type": "Bearer",
                })),
            ),
        );
        let now = Instant::now();
        let builder = reqwest::Client::new().post(server.url("/token").to_string());
        let token = fetch(builder).await?;
        assert_eq!(token.token, "test-access-token");
        assert_eq!(token.token_type, "Bearer");
        assert!(
            token
                .expires_at
                .is_some_and(|e| e >= now + Duration::from_secs(3600)),
            "{token:?}"
        );
        Ok(())
    }

    #[test_case(503, true)]
    #[test_case(401, false)]
    #[tokio::test]
    async fn fetch_http_error(code: u16, want_transient: bool) -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token"))
                .respond_with(status_code(code).body("test-only-body")),
        );
        let builder = reqwest::Client::new().post(server.url("/token").to_string());
        let err = fetch(builder).await.unwrap_err();
        assert_eq!(err.is_transient(), want_transient, "{err:?}");
        assert!(err.to_string().contains("test-only-body"), "{err}");
        Ok(())
    }

    #[tokio::test]
    async fn fetch_malformed_response() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/token"))
                .respond_with(json_encoded(json!({"unexpected": "field"}))),
        );
        let builder = reqwest::Client::new().post(server.url("/token").to_string());
        let err = fetch(builder).await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }
}
