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
use crate::token::{Token, TokenProvider};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

// Refresh tokens slightly before they expire, a request started with an almost
// expired token may be rejected.
const EXPIRATION_SLACK: Duration = Duration::from_secs(10);

/// Caches the token returned by a provider until it is about to expire.
///
/// Concurrent callers wait on the same refresh. Errors are not cached, the
/// next call starts a new refresh.
#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    token: Mutex<Option<Token>>,
    inner: T,
}

// Returns true if the token expires within `EXPIRATION_SLACK`.
fn expired(token: &Token) -> bool {
    token
        .expires_at
        .is_some_and(|e| e <= Instant::now() + EXPIRATION_SLACK)
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(inner: T) -> TokenCache<T> {
        TokenCache {
            token: Mutex::new(None),
            inner,
        }
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        let mut guard = self.token.lock().await;
        if let Some(token) = guard.as_ref().filter(|t| !expired(t)) {
            return Ok(token.clone());
        }
        tracing::debug!("refreshing access token");
        let token = self.inner.token().await?;
        *guard = Some(token.clone());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::CredentialsError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, Ordering};

    static TOKEN_VALID_DURATION: Duration = Duration::from_secs(3600);

    #[derive(Debug)]
    struct FakeTokenProvider {
        calls: Arc<AtomicI32>,
        result: Result<Token>,
    }

    impl FakeTokenProvider {
        fn new(result: Result<Token>) -> (Self, Arc<AtomicI32>) {
            let calls = Arc::new(AtomicI32::new(0));
            (
                Self {
                    calls: calls.clone(),
                    result,
                },
                calls,
            )
        }
    }

    #[async_trait::async_trait]
    impl TokenProvider for FakeTokenProvider {
        async fn token(&self) -> Result<Token> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn test_token(expires_at: Option<Instant>) -> Token {
        Token {
            token: "test-token".to_string(),
            token_type: "Bearer".to_string(),
            expires_at,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn initial_token_success() -> anyhow::Result<()> {
        let expected = test_token(Some(Instant::now() + TOKEN_VALID_DURATION));
        let (provider, calls) = FakeTokenProvider::new(Ok(expected.clone()));
        let cache = TokenCache::new(provider);

        let actual = cache.token().await?;
        assert_eq!(actual, expected);

        // Verify that we use the cached token instead of making a new request.
        let actual = cache.token().await?;
        assert_eq!(actual, expected);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn token_without_expiration() -> anyhow::Result<()> {
        let expected = test_token(None);
        let (provider, calls) = FakeTokenProvider::new(Ok(expected.clone()));
        let cache = TokenCache::new(provider);
        cache.token().await?;
        tokio::time::advance(TOKEN_VALID_DURATION * 100).await;
        let actual = cache.token().await?;
        assert_eq!(actual, expected);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn expired_token_refresh() -> anyhow::Result<()> {
        let expected = test_token(Some(Instant::now() + TOKEN_VALID_DURATION));
        let (provider, calls) = FakeTokenProvider::new(Ok(expected.clone()));
        let cache = TokenCache::new(provider);
        cache.token().await?;

        tokio::time::advance(TOKEN_VALID_DURATION - EXPIRATION_SLACK / 2).await;
        cache.token().await?;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let (provider, calls) =
            FakeTokenProvider::new(Err(CredentialsError::from_msg(true, "test-only")));
        let cache = TokenCache::new(provider);
        let err = cache.token().await.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        let err = cache.token().await.unwrap_err();
        assert!(err.to_string().contains("test-only"), "{err}");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
