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

//! Helpers to work with Compute Engine and Cloud TPU locations.

/// The error returned for malformed zone names.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("`{0}` is not a valid zone name, expected `{{region}}-{{suffix}}` as in `us-central1-a`")]
    MalformedZone(String),
}

/// Returns the region containing `zone`.
///
/// Zone names are the region name followed by a `-{suffix}`. This function
/// drops the last suffix, and fails if there is nothing to drop on either
/// side.
///
/// # Example
/// ```
/// # use lro_samples::location::region_from_zone;
/// assert_eq!(region_from_zone("us-central1-a")?, "us-central1");
/// assert_eq!(region_from_zone("europe-west4-a")?, "europe-west4");
/// assert!(region_from_zone("uscentral1").is_err());
/// # Ok::<(), lro_samples::location::Error>(())
/// ```
pub fn region_from_zone(zone: &str) -> Result<&str, Error> {
    match zone.rsplit_once('-') {
        Some((region, suffix)) if !region.is_empty() && !suffix.is_empty() => Ok(region),
        _ => Err(Error::MalformedZone(zone.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("us-central1-a", "us-central1")]
    #[test_case("southamerica-east1-b", "southamerica-east1")]
    #[test_case("europe-west4-a", "europe-west4")]
    #[test_case("a-b", "a")]
    fn valid(zone: &str, want: &str) {
        assert_eq!(region_from_zone(zone), Ok(want));
    }

    #[test_case("")]
    #[test_case("uscentral1")]
    #[test_case("us-central1-")]
    #[test_case("-a")]
    #[test_case("-")]
    fn malformed(zone: &str) {
        let got = region_from_zone(zone);
        assert_eq!(got, Err(Error::MalformedZone(zone.to_string())));
        let msg = got.unwrap_err().to_string();
        assert!(msg.contains("not a valid zone name"), "{msg}");
    }
}
