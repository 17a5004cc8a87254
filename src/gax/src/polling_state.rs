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

//! The state of a polling loop.
//!
//! Polling policies use this state to decide if the loop should continue, and
//! how long to wait before the next attempt.

use tokio::time::Instant;

/// The state of a polling loop, shared with the polling policies.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct PollingState {
    /// When the polling loop started.
    pub start: Instant,
    /// The number of polling attempts. This does not include the request that
    /// started the operation.
    pub attempt_count: u32,
}

impl PollingState {
    /// Sets the value for [start][PollingState::start].
    pub fn with_start(mut self, v: Instant) -> Self {
        self.start = v;
        self
    }

    /// Sets the value for [attempt_count][PollingState::attempt_count].
    pub fn with_attempt_count(mut self, v: u32) -> Self {
        self.attempt_count = v;
        self
    }

    /// The time elapsed since the polling loop started.
    pub fn elapsed(&self) -> std::time::Duration {
        Instant::now().saturating_duration_since(self.start)
    }
}

impl Default for PollingState {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            attempt_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn elapsed() {
        let state = PollingState::default();
        assert_eq!(state.attempt_count, 0);
        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(state.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn setters() {
        let now = Instant::now();
        let state = PollingState::default()
            .with_start(now)
            .with_attempt_count(7);
        assert_eq!(state.start, now);
        assert_eq!(state.attempt_count, 7);
    }
}
