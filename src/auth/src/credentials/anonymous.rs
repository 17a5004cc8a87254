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

//! Credentials that add no headers.
//!
//! The transport tests use them with a local HTTP server, where no
//! authentication is needed.

use crate::Result;
use crate::credentials::{Credentials, CredentialsProvider};
use http::HeaderMap;

/// Creates credentials that send no `authorization` header.
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder;

impl Builder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(self) -> Credentials {
        Credentials::from(NoAuth)
    }
}

#[derive(Debug)]
struct NoAuth;

#[async_trait::async_trait]
impl CredentialsProvider for NoAuth {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_headers() -> anyhow::Result<()> {
        let credentials = Builder::new().build();
        for _ in 0..2 {
            let headers = credentials.headers().await?;
            assert_eq!(headers, HeaderMap::default());
        }
        assert!(format!("{credentials:?}").contains("NoAuth"));
        Ok(())
    }
}
