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

//! Compute Engine samples.

pub mod disks;
pub mod hyperdisk;
pub mod instance_templates;
pub mod reservations;

use std::time::Duration;

/// How long the instance template samples wait when the caller sets no
/// timeout.
pub const TEMPLATE_TIMEOUT: Duration = Duration::from_secs(3 * 60);
