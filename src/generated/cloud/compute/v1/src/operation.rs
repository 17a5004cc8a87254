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

use crate::model::{ErrorInfo, Help, HelpLink, LocalizedMessage, Operation, operation::Error};
use gax::error::rpc::{self, Code, Status, StatusDetails};

impl lro::internal::DiscoveryOperation for Operation {
    fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }
    fn done(&self) -> bool {
        self.status == Some(crate::model::operation::Status::Done)
    }
    fn status(&self) -> Option<Status> {
        if let Some(error) = self.error.as_ref() {
            let status = Status::from(error);
            // Some failures only report the HTTP status.
            if status.code == Code::Unknown {
                if let Some(code) = self.http_error_code() {
                    return Some(status.set_code(code));
                }
            }
            return Some(status);
        }
        let code = self.http_error_code()?;
        let status = Status::default().set_code(code);
        Some(
            self.http_error_message
                .iter()
                .fold(status, |s, m| s.set_message(m)),
        )
    }
    fn end_time(&self) -> Option<&String> {
        self.end_time.as_ref()
    }
}

impl Operation {
    /// Returns a service-independent snapshot of the operation.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::model::{Operation, operation::Status};
    /// let op = Operation::new().set_status(Status::Done);
    /// assert_eq!(op.outcome().status.to_string(), "DONE");
    /// ```
    pub fn outcome(&self) -> lro::OperationOutcome {
        lro::OperationOutcome::from(self)
    }

    fn http_error_code(&self) -> Option<Code> {
        let code = self.http_error_status_code?;
        u16::try_from(code).ok().map(Code::from_http_status)
    }
}

#[doc(hidden)]
impl From<&Error> for Status {
    fn from(value: &Error) -> Self {
        let code = value
            .errors
            .iter()
            .filter_map(|e| e.code.as_ref())
            .filter_map(|c| Code::try_from(c.as_str()).ok())
            .take(1)
            .next();
        // Compute may report several errors for one operation, keep all the
        // messages.
        let message = value
            .errors
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect::<Vec<_>>()
            .join("; ");
        let details: Vec<StatusDetails> = value
            .errors
            .iter()
            .flat_map(|e| e.error_details.iter())
            .flat_map(|d| {
                [
                    d.error_info.clone().map(StatusDetails::from),
                    d.help.clone().map(StatusDetails::from),
                    d.localized_message.clone().map(StatusDetails::from),
                ]
                .into_iter()
                .flatten()
            })
            .collect();

        let status = Status::default().set_details(details).set_message(message);
        code.into_iter().fold(status, |s, c| s.set_code(c))
    }
}

#[doc(hidden)]
impl From<ErrorInfo> for StatusDetails {
    fn from(value: ErrorInfo) -> Self {
        Self::ErrorInfo(value.into())
    }
}

#[doc(hidden)]
impl From<ErrorInfo> for rpc::ErrorInfo {
    fn from(value: ErrorInfo) -> Self {
        let result = Self::new().set_metadata(value.metadatas);
        let result = value
            .domain
            .into_iter()
            .fold(result, |r, v| r.set_domain(v));
        value
            .reason
            .into_iter()
            .fold(result, |r, v| r.set_reason(v))
    }
}

#[doc(hidden)]
impl From<Help> for StatusDetails {
    fn from(value: Help) -> Self {
        Self::Help(value.into())
    }
}

#[doc(hidden)]
impl From<Help> for rpc::Help {
    fn from(value: Help) -> Self {
        Self::new().set_links(value.links)
    }
}

#[doc(hidden)]
impl From<HelpLink> for rpc::HelpLink {
    fn from(value: HelpLink) -> Self {
        let result = Self::new();
        let result = value
            .description
            .into_iter()
            .fold(result, |r, v| r.set_description(v));
        value.url.into_iter().fold(result, |r, v| r.set_url(v))
    }
}

#[doc(hidden)]
impl From<LocalizedMessage> for StatusDetails {
    fn from(value: LocalizedMessage) -> Self {
        Self::LocalizedMessage(value.into())
    }
}

#[doc(hidden)]
impl From<LocalizedMessage> for rpc::LocalizedMessage {
    fn from(value: LocalizedMessage) -> Self {
        let result = Self::new();
        let result = value
            .locale
            .into_iter()
            .fold(result, |r, v| r.set_locale(v));
        value
            .message
            .into_iter()
            .fold(result, |r, v| r.set_message(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::operation::error::{Errors, errors::ErrorDetails};
    use crate::model::operation::Status as OperationStatus;
    use lro::OutcomeStatus;
    use test_case::test_case;

    #[test]
    fn discovery_operation() {
        use lro::internal::DiscoveryOperation as _;

        let operation = Operation::new();
        assert!(operation.name().is_none(), "{operation:?}");
        assert!(!operation.done(), "{operation:?}");
        assert!(operation.status().is_none(), "{operation:?}");
        assert!(operation.end_time().is_none(), "{operation:?}");

        let operation = Operation::new()
            .set_name("abc-123")
            .set_status(crate::model::operation::Status::Running);
        assert_eq!(
            operation.name().map(String::as_str),
            Some("abc-123"),
            "{operation:?}"
        );
        assert!(!operation.done(), "{operation:?}");
        assert!(operation.status().is_none(), "{operation:?}");

        let operation = Operation::new()
            .set_status(crate::model::operation::Status::Done)
            .set_end_time("2025-01-02T03:04:05Z");
        assert!(operation.done(), "{operation:?}");
        assert!(operation.status().is_none(), "{operation:?}");
        assert_eq!(
            operation.end_time().map(String::as_str),
            Some("2025-01-02T03:04:05Z")
        );

        let operation = Operation::new().set_error(
            Error::new().set_errors([Errors::new()
                .set_code("UNAVAILABLE")
                .set_message("try-again")]),
        );
        assert!(!operation.done(), "{operation:?}");
        assert!(
            matches!(operation.status(), Some(s) if s.code == Code::Unavailable && s.message == "try-again"),
            "{operation:?}"
        );
    }

    #[test]
    fn http_error_only() {
        use lro::internal::DiscoveryOperation as _;

        let operation = Operation::new()
            .set_status(crate::model::operation::Status::Done)
            .set_http_error_status_code(404)
            .set_http_error_message("NOT FOUND");
        let status = operation.status();
        assert!(
            matches!(status, Some(ref s) if s.code == Code::NotFound && s.message == "NOT FOUND"),
            "{status:?}"
        );

        let operation = Operation::new()
            .set_status(crate::model::operation::Status::Done)
            .set_http_error_status_code(403)
            .set_error(Error::new().set_errors([Errors::new()
                .set_code("QUOTA_EXCEEDED")
                .set_message("quota exceeded")]));
        let status = operation.status();
        assert!(
            matches!(status, Some(ref s) if s.code == Code::PermissionDenied && s.message == "quota exceeded"),
            "{status:?}"
        );
    }

    #[test]
    fn outcome() {
        let op = Operation::new().set_status(crate::model::operation::Status::Pending);
        assert_eq!(op.outcome().status, OutcomeStatus::Pending);

        let op = Operation::new()
            .set_status(crate::model::operation::Status::Done)
            .set_end_time("2025-01-02T03:04:05Z");
        let outcome = op.outcome();
        assert_eq!(outcome.status, OutcomeStatus::Done);
        assert_eq!(outcome.end_time.as_deref(), Some("2025-01-02T03:04:05Z"));

        let op = Operation::new()
            .set_status(crate::model::operation::Status::Done)
            .set_error(Error::new().set_errors([Errors::new()
                .set_code("NOT_FOUND")
                .set_message("disk not found")]));
        let outcome = op.outcome();
        assert_eq!(outcome.status, OutcomeStatus::Error);
        let err = outcome.check().unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
    }

    #[test]
    fn status_from_error() {
        let input = Error::new();
        let got = Status::from(&input);
        assert_eq!(got, Status::default());

        let input = Error::new().set_errors([
            Errors::new().set_code("INTERNAL"),
            Errors::new().set_code("UNAVAILABLE"),
        ]);
        let got = Status::from(&input);
        assert_eq!(got, Status::default().set_code(Code::Internal));

        let input = Error::new().set_errors([
            Errors::new().set_code("RESOURCE_NOT_FOUND"),
            Errors::new().set_code("NOT_FOUND"),
        ]);
        let got = Status::from(&input);
        assert_eq!(got, Status::default().set_code(Code::NotFound));

        let input = Error::new().set_errors([
            Errors::new().set_message("message0"),
            Errors::new().set_message("message1"),
        ]);
        let got = Status::from(&input);
        assert_eq!(got, Status::default().set_message("message0; message1"));

        let input = Error::new().set_errors([
            Errors::new().set_error_details([
                ErrorDetails::new().set_error_info(ErrorInfo::new().set_domain("e0"))
            ]),
            Errors::new().set_error_details([ErrorDetails::new()
                .set_error_info(ErrorInfo::new().set_domain("e1"))
                .set_help(Help::new().set_links([HelpLink::new().set_description("helplink1")]))
                .set_localized_message(LocalizedMessage::new().set_message("localized1"))]),
        ]);
        let got = Status::from(&input);
        assert!(
            matches!(got.details.first(), Some(StatusDetails::ErrorInfo(e)) if e.domain == "e0"),
            "{got:?}"
        );
        assert!(
            matches!(got.details.get(1), Some(StatusDetails::ErrorInfo(e)) if e.domain == "e1"),
            "{got:?}"
        );
        assert!(
            matches!(got.details.get(2), Some(StatusDetails::Help(h)) if h.links.len() == 1),
            "{got:?}"
        );
        assert!(
            matches!(got.details.get(3), Some(StatusDetails::LocalizedMessage(m)) if m.message == "localized1"),
            "{got:?}"
        );
        assert_eq!(got.details.len(), 4, "{got:?}");
    }

    #[test]
    fn error_info_from() {
        let input = ErrorInfo::new();
        let got = rpc::ErrorInfo::from(input);
        assert_eq!(got, rpc::ErrorInfo::new());

        let input = ErrorInfo::new()
            .set_domain("domain")
            .set_reason("reason")
            .set_metadatas([("k0", "v0"), ("k1", "v1")]);
        let got = rpc::ErrorInfo::from(input);
        let want = rpc::ErrorInfo::new()
            .set_domain("domain")
            .set_reason("reason")
            .set_metadata([("k0", "v0"), ("k1", "v1")]);
        assert_eq!(got, want);
    }

    #[test]
    fn help_link_from() {
        let input = HelpLink::new().set_description("d").set_url("u");
        let got = rpc::HelpLink::from(input);
        assert_eq!(got, rpc::HelpLink::new().set_description("d").set_url("u"));
    }

    #[test]
    fn localized_message_from() {
        let input = LocalizedMessage::new().set_locale("en-US").set_message("m");
        let got = rpc::LocalizedMessage::from(input);
        assert_eq!(
            got,
            rpc::LocalizedMessage::new().set_locale("en-US").set_message("m")
        );
    }

    #[test_case(None, false)]
    #[test_case(Some(OperationStatus::Pending), false)]
    #[test_case(Some(OperationStatus::Running), false)]
    #[test_case(Some(OperationStatus::Done), true)]
    #[test_case(Some(OperationStatus::Unknown), false)]
    fn done(status: Option<OperationStatus>, want: bool) {
        use lro::internal::DiscoveryOperation as _;
        let operation = Operation::new().set_or_clear_status(status);
        assert_eq!(operation.done(), want, "{operation:?}");
    }
}
