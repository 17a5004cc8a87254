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

use std::sync::Arc;

/// The credentials could not produce the authentication headers.
///
/// Loading the credentials file happens when the client is built, these
/// errors happen later, when exchanging the credentials for an access token.
/// Some are transient, for example, the token endpoint was unavailable. Others
/// are permanent, for example, the service account key was revoked.
///
/// # Example
/// ```
/// # use lro_samples_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(true, "token endpoint returned 503");
/// assert!(err.is_transient());
/// assert!(err.to_string().contains("503"));
/// ```
#[derive(thiserror::Error, Clone, Debug)]
#[error("cannot obtain an access token, {}: {cause}", retry_hint(.transient))]
pub struct CredentialsError {
    transient: bool,
    #[source]
    cause: Cause,
}

#[derive(thiserror::Error, Clone, Debug)]
enum Cause {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

fn retry_hint(transient: &bool) -> &'static str {
    if *transient {
        "the request may succeed if retried"
    } else {
        "retrying will not help"
    }
}

impl CredentialsError {
    /// Wraps `source`. Set `is_transient` if the same request may succeed
    /// later.
    pub fn new<T>(is_transient: bool, source: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Self {
            transient: is_transient,
            cause: Cause::Source(Arc::new(source)),
        }
    }

    /// Creates an error described only by `message`.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            transient: is_transient,
            cause: Cause::Message(message.into()),
        }
    }

    pub fn is_transient(&self) -> bool {
        self.transient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case(true, "may succeed")]
    #[test_case(false, "will not help")]
    fn wraps_source(transient: bool, hint: &str) {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "oauth2 endpoint");
        let got = CredentialsError::new(transient, io);
        assert_eq!(got.is_transient(), transient, "{got:?}");
        assert!(got.source().is_some(), "{got:?}");
        let msg = got.to_string();
        assert!(msg.contains("oauth2 endpoint"), "{msg}");
        assert!(msg.contains(hint), "{msg}");
    }

    #[test]
    fn message_only() {
        let got = CredentialsError::from_msg(false, "invalid_grant");
        assert!(!got.is_transient(), "{got:?}");
        let msg = got.to_string();
        assert!(msg.starts_with("cannot obtain an access token"), "{msg}");
        assert!(msg.ends_with("invalid_grant"), "{msg}");
    }

    #[test]
    fn clones_share_the_source() {
        let got = CredentialsError::new(true, std::io::Error::other("timeout"));
        let clone = got.clone();
        assert_eq!(clone.to_string(), got.to_string());
        assert_eq!(clone.is_transient(), got.is_transient());
    }
}
