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

//! Telemetry header helpers.

/// The name of the header identifying the client library.
pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";

/// Service clients create one static instance of this struct and use it to
/// lazy initialize (via [std::sync::LazyLock]) the `x-goog-api-client` header
/// value.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

pub const GAPIC: &str = "gapic";
pub const GCCL: &str = "gccl";

const GAX_VERSION: &str = env!("CARGO_PKG_VERSION");

impl XGoogApiClient {
    /// Format the struct as needed for the `x-goog-api-client` header.
    pub fn rest_header_value(&self) -> String {
        format!(
            "gl-rust gax/{GAX_VERSION} rest/{GAX_VERSION}-reqwest {}/{}",
            self.library_type, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(' ')
            .filter_map(|v| v.split_once('/'))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn format_rest() {
        let header = XGoogApiClient {
            name: "unused",
            version: "1.2.3",
            library_type: GCCL,
        };
        let formatted = header.rest_header_value();
        assert!(formatted.starts_with("gl-rust "), "{formatted}");
        let fields = breakdown(&formatted);

        assert_eq!(fields.get(GCCL).map(String::as_str), Some("1.2.3"));
        assert_eq!(fields.get("gax").map(String::as_str), Some(GAX_VERSION));
        let rest = fields.get("rest");
        assert!(
            rest.is_some_and(|v| v.ends_with("-reqwest")),
            "{fields:?}"
        );
        assert!(fields.get(GAPIC).is_none(), "{fields:?}");
    }
}
