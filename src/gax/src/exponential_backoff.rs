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

//! Exponentially growing delays between polls.
//!
//! The first poll waits for the initial delay, each following poll waits
//! `scaling` times longer than the previous one, up to the maximum delay.
//!
//! # Example
//! ```
//! # use lro_samples_gax::exponential_backoff::ExponentialBackoffBuilder;
//! # use std::time::Duration;
//! let policy = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(500))
//!     .with_maximum_delay(Duration::from_secs(30))
//!     .with_scaling(1.5)
//!     .build()?;
//! # Ok::<(), lro_samples_gax::exponential_backoff::Error>(())
//! ```

use crate::polling_backoff_policy::PollingBackoffPolicy;
use crate::polling_state::PollingState;
use std::ops::RangeInclusive;
use std::time::Duration;

const DEFAULT_INITIAL: Duration = Duration::from_secs(1);
const DEFAULT_MAXIMUM: Duration = Duration::from_secs(60);
const DEFAULT_SCALING: f64 = 2.0;

const SCALING_RANGE: RangeInclusive<f64> = 1.0..=32.0;
const MAXIMUM_RANGE: RangeInclusive<Duration> =
    Duration::from_secs(1)..=Duration::from_secs(24 * 60 * 60);
const MIN_INITIAL: Duration = Duration::from_millis(1);

/// Invalid parameters in an [ExponentialBackoffBuilder].
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("the backoff scaling factor must be at least 1.0, got {0}")]
    ScalingTooSmall(f64),
    #[error("the initial backoff delay must not be zero")]
    ZeroInitialDelay,
    #[error("the maximum backoff delay ({maximum:?}) is shorter than the initial delay ({initial:?})")]
    MaximumBelowInitial { initial: Duration, maximum: Duration },
}

/// Configures an [ExponentialBackoff].
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial: Duration,
    maximum: Duration,
    scaling: f64,
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL,
            maximum: DEFAULT_MAXIMUM,
            scaling: DEFAULT_SCALING,
        }
    }
}

impl ExponentialBackoffBuilder {
    /// Starts from a one second delay, doubling up to one minute.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial = v.into();
        self
    }

    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum = v.into();
        self
    }

    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Returns the policy, or an error if the parameters make no sense.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling.is_nan() || self.scaling < 1.0 {
            return Err(Error::ScalingTooSmall(self.scaling));
        }
        if self.initial.is_zero() {
            return Err(Error::ZeroInitialDelay);
        }
        if self.maximum < self.initial {
            return Err(Error::MaximumBelowInitial {
                initial: self.initial,
                maximum: self.maximum,
            });
        }
        Ok(ExponentialBackoff {
            initial: self.initial,
            maximum: self.maximum,
            scaling: self.scaling,
        })
    }

    /// Returns the policy, moving any out of range parameter to the closest
    /// valid value.
    ///
    /// The scaling factor ends up in `[1.0, 32.0]`, the maximum delay in
    /// `[1s, 24h]`, and the initial delay in `[1ms, maximum]`.
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = if self.scaling.is_nan() {
            DEFAULT_SCALING
        } else {
            self.scaling
                .clamp(*SCALING_RANGE.start(), *SCALING_RANGE.end())
        };
        let maximum = self
            .maximum
            .clamp(*MAXIMUM_RANGE.start(), *MAXIMUM_RANGE.end());
        let initial = self.initial.clamp(MIN_INITIAL, maximum);
        ExponentialBackoff {
            initial,
            maximum,
            scaling,
        }
    }
}

/// The default polling backoff policy for all clients.
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialBackoff {
    initial: Duration,
    maximum: Duration,
    scaling: f64,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::default().clamp()
    }
}

impl ExponentialBackoff {
    fn delay(&self, attempt: u32) -> Duration {
        // The first poll (and the zero-th, if a caller asks) use the initial
        // delay unchanged.
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let factor = self.scaling.powi(exponent);
        let limit = self.maximum.div_duration_f64(self.initial);
        if factor.is_finite() && factor < limit {
            self.initial.mul_f64(factor)
        } else {
            self.maximum
        }
    }
}

impl PollingBackoffPolicy for ExponentialBackoff {
    fn wait_period(&self, state: &PollingState) -> Duration {
        self.delay(state.attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn wait(policy: &ExponentialBackoff, attempt: u32) -> Duration {
        policy.wait_period(&PollingState::default().with_attempt_count(attempt))
    }

    #[test]
    fn build_rejects_bad_parameters() {
        let got = ExponentialBackoffBuilder::new().with_scaling(0.9).build();
        assert_eq!(got, Err(Error::ScalingTooSmall(0.9)));

        let got = ExponentialBackoffBuilder::new()
            .with_scaling(f64::NAN)
            .build();
        assert!(matches!(got, Err(Error::ScalingTooSmall(_))), "{got:?}");

        let got = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .build();
        assert_eq!(got, Err(Error::ZeroInitialDelay));

        let got = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(30))
            .with_maximum_delay(Duration::from_secs(10))
            .build();
        assert_eq!(
            got,
            Err(Error::MaximumBelowInitial {
                initial: Duration::from_secs(30),
                maximum: Duration::from_secs(10),
            })
        );
    }

    #[test]
    fn default_matches_builder() -> anyhow::Result<()> {
        let built = ExponentialBackoffBuilder::new().build()?;
        assert_eq!(built, ExponentialBackoff::default());
        Ok(())
    }

    #[test_case(Duration::from_secs(1), Duration::MAX, 0.25; "scaling too small")]
    #[test_case(Duration::from_secs(1), Duration::MAX, 1e9; "scaling too large")]
    #[test_case(Duration::from_secs(1), Duration::ZERO, 4.0; "maximum too small")]
    #[test_case(Duration::from_secs(90), Duration::ZERO, 4.0; "initial above maximum")]
    #[test_case(Duration::ZERO, Duration::from_secs(5), 4.0; "initial zero")]
    #[test_case(Duration::from_secs(1), Duration::from_secs(5), f64::NAN; "scaling nan")]
    fn clamp_stays_in_range(initial: Duration, maximum: Duration, scaling: f64) {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(initial)
            .with_maximum_delay(maximum)
            .with_scaling(scaling)
            .clamp();
        assert!(SCALING_RANGE.contains(&policy.scaling), "{policy:?}");
        assert!(MAXIMUM_RANGE.contains(&policy.maximum), "{policy:?}");
        assert!(
            (MIN_INITIAL..=policy.maximum).contains(&policy.initial),
            "{policy:?}"
        );
    }

    #[test]
    fn grows_until_maximum() -> anyhow::Result<()> {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(100))
            .with_maximum_delay(Duration::from_millis(350))
            .with_scaling(3.0)
            .build()?;
        assert_eq!(wait(&policy, 0), Duration::from_millis(100));
        assert_eq!(wait(&policy, 1), Duration::from_millis(100));
        assert_eq!(wait(&policy, 2), Duration::from_millis(300));
        assert_eq!(wait(&policy, 3), Duration::from_millis(350));
        assert_eq!(wait(&policy, u32::MAX), Duration::from_millis(350));
        Ok(())
    }

    #[test]
    fn constant_when_scaling_is_one() -> anyhow::Result<()> {
        let policy = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(2))
            .with_maximum_delay(Duration::from_secs(10))
            .with_scaling(1.0)
            .build()?;
        for attempt in [1, 5, 1000] {
            assert_eq!(wait(&policy, attempt), Duration::from_secs(2));
        }
        Ok(())
    }
}
