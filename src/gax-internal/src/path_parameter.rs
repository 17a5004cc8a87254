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

//! Handling of missing path parameters.
//!
//! Parameters used to build the request path (the project, zone, region,
//! resource name) are required. The clients return an error before sending
//! the request when one is empty.

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns `value` if it is not empty, otherwise a binding error naming the
/// parameter.
///
/// # Example
/// ```
/// # use lro_samples_gax_internal::path_parameter::required;
/// assert_eq!(required("my-project", "project").ok(), Some("my-project"));
/// assert!(required("", "project").is_err());
/// ```
pub fn required<'a>(value: &'a str, name: &str) -> gax::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test]
    fn required() {
        assert_eq!(super::required("us-central1-a", "zone").ok(), Some("us-central1-a"));
        let e = super::required("", "zone").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert!(format!("{e}").contains("zone"), "{e}");
    }
}
