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

//! Cloud TPU samples.

mod nodes;
mod queued_resources;

pub use nodes::start_tpu_vm;
pub use queued_resources::{
    create_queued_resource_with_startup_script, delete_force_queued_resource, get_queued_resource,
};

/// Returns the resource name of a TPU node.
pub fn node_name(project_id: &str, zone: &str, node: &str) -> String {
    format!("projects/{project_id}/locations/{zone}/nodes/{node}")
}
