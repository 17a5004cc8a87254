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

use crate::model::Operation;
use gax::error::rpc::Status;

impl lro::internal::DiscoveryOperation for Operation {
    fn name(&self) -> Option<&String> {
        Some(&self.name).filter(|n| !n.is_empty())
    }
    fn done(&self) -> bool {
        self.done
    }
    fn status(&self) -> Option<Status> {
        self.error.clone()
    }
    fn end_time(&self) -> Option<&String> {
        match self.metadata.as_ref()?.get("endTime")? {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl lro::internal::Aip151Operation for Operation {
    fn response(&self) -> Option<&serde_json::Value> {
        self.response.as_ref()
    }
    fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }
}

impl Operation {
    /// Returns a service-independent snapshot of the operation.
    pub fn outcome(&self) -> lro::OperationOutcome {
        lro::OperationOutcome::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use lro::OutcomeStatus;
    use lro::internal::{Aip151Operation as _, DiscoveryOperation as _};
    use serde_json::json;

    #[test]
    fn discovery_operation() {
        let operation = Operation::new();
        assert!(operation.name().is_none(), "{operation:?}");
        assert!(!operation.done(), "{operation:?}");
        assert!(operation.status().is_none(), "{operation:?}");
        assert!(operation.end_time().is_none(), "{operation:?}");

        let operation = Operation::new().set_name("op-1").set_metadata(json!({
            "@type": "type.googleapis.com/google.cloud.tpu.v2.OperationMetadata",
            "endTime": "2025-01-02T03:04:05Z",
        }));
        assert_eq!(operation.name().map(String::as_str), Some("op-1"));
        assert_eq!(
            operation.end_time().map(String::as_str),
            Some("2025-01-02T03:04:05Z")
        );
        assert!(operation.metadata().is_some(), "{operation:?}");
        assert!(operation.response().is_none(), "{operation:?}");

        let operation = Operation::new().set_metadata(json!({"endTime": 42}));
        assert!(operation.end_time().is_none(), "{operation:?}");
    }

    #[test]
    fn outcome() {
        let operation = Operation::new().set_name("op-1");
        assert_eq!(operation.outcome().status, OutcomeStatus::Pending);

        let operation = Operation::new()
            .set_done(true)
            .set_response(json!({"name": "projects/p/locations/z/nodes/n1"}));
        assert_eq!(operation.outcome().status, OutcomeStatus::Done);
        assert!(operation.outcome().check().is_ok(), "{operation:?}");

        let operation = Operation::new().set_done(true).set_error(
            Status::default()
                .set_code(Code::NotFound)
                .set_message("node not found"),
        );
        let outcome = operation.outcome();
        assert_eq!(outcome.status, OutcomeStatus::Error);
        let err = outcome.check().unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
        assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound));
    }
}
