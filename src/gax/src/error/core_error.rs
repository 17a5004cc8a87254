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

use super::CredentialsError;
use super::rpc::Status;
use bytes::Bytes;
use http::HeaderMap;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The error type for the service clients and the samples.
///
/// The samples branch on four predicates:
/// - [is_submission][Error::is_submission]: the mutation was never accepted,
///   there is no operation to wait for.
/// - [is_operation_failed][Error::is_operation_failed]: the operation reached
///   a terminal state with an error payload.
/// - [is_timeout][Error::is_timeout]: the local wait expired. The operation
///   was not cancelled and may still complete.
/// - [is_configuration][Error::is_configuration]: the local setup is
///   incomplete, nothing was sent.
///
/// The other predicates describe how sending a single request failed.
///
/// # Example
/// ```
/// # use lro_samples_gax::error::Error;
/// # use lro_samples_gax::error::rpc::{Code, Status};
/// let error = Error::operation(Status::default().set_code(Code::NotFound));
/// assert!(error.is_operation_failed());
/// assert_eq!(error.status().map(|s| s.code), Some(Code::NotFound));
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(Box<Repr>);

#[derive(thiserror::Error, Debug)]
enum Repr {
    #[error("cannot submit the request: {0}")]
    Submission(#[source] Error),
    #[error("the operation failed with code {} and message: {}", .0.code, .0.message)]
    Operation(Status),
    #[error("deadline exceeded: {0}")]
    Timeout(#[source] BoxError),
    #[error("invalid configuration: {0}")]
    Configuration(#[source] BoxError),
    #[error("{0}")]
    Exhausted(#[source] BoxError),
    #[error("the service returned code {} and message: {}", .status.code, .status.message)]
    Service {
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    },
    #[error("the server returned HTTP {status_code}: {}", String::from_utf8_lossy(.payload))]
    Http {
        status_code: u16,
        headers: HeaderMap,
        payload: Bytes,
    },
    #[error("cannot reach the service: {0}")]
    Io(#[source] BoxError),
    #[error("cannot authenticate the request: {0}")]
    Authentication(#[source] CredentialsError),
    #[error("cannot build the request path: {0}")]
    Binding(#[source] BoxError),
    #[error("cannot serialize the request: {0}")]
    Serialization(#[source] BoxError),
    #[error("cannot deserialize the response: {0}")]
    Deserialization(#[source] BoxError),
    #[error("{0}")]
    Other(#[source] BoxError),
}

impl From<Repr> for Error {
    fn from(value: Repr) -> Self {
        Self(Box::new(value))
    }
}

impl Error {
    /// An error returned by the service for a single request.
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// An operation that completed with an error payload.
    ///
    /// The service may have applied part of the mutation, the status details
    /// say which.
    pub fn operation(status: Status) -> Self {
        Repr::Operation(status).into()
    }

    pub fn is_operation_failed(&self) -> bool {
        matches!(*self.0, Repr::Operation(_))
    }

    /// Wraps the error returned by the request that should have created an
    /// operation.
    pub fn submission(source: Error) -> Self {
        Repr::Submission(source).into()
    }

    /// The service rejected the mutation, or it could not be sent. The
    /// wrapped error has the details, [status()][Error::status] and the
    /// `http_*` accessors look through it.
    pub fn is_submission(&self) -> bool {
        matches!(*self.0, Repr::Submission(_))
    }

    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Repr::Timeout(source.into()).into()
    }

    /// A request, or the wait for an operation, ran past its deadline.
    ///
    /// Expiring the wait does **not** cancel the operation. Its outcome is
    /// unknown.
    pub fn is_timeout(&self) -> bool {
        matches!(*self.0, Repr::Timeout(_))
    }

    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Repr::Configuration(source.into()).into()
    }

    /// The local configuration is incomplete or invalid. Detected before any
    /// request is sent.
    pub fn is_configuration(&self) -> bool {
        matches!(*self.0, Repr::Configuration(_))
    }

    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Repr::Exhausted(source.into()).into()
    }

    /// The polling policy stopped the loop before the operation completed.
    pub fn is_exhausted(&self) -> bool {
        matches!(*self.0, Repr::Exhausted(_))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Repr::Deserialization(source.into()).into()
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(*self.0, Repr::Deserialization(_))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Repr::Serialization(source.into()).into()
    }

    pub fn is_serialization(&self) -> bool {
        matches!(*self.0, Repr::Serialization(_))
    }

    /// The status reported by the service, or by the failed operation.
    pub fn status(&self) -> Option<&Status> {
        match &*self.0 {
            Repr::Service { status, .. } | Repr::Operation(status) => Some(status),
            Repr::Submission(inner) => inner.status(),
            _ => None,
        }
    }

    pub fn http_status_code(&self) -> Option<u16> {
        match &*self.0 {
            Repr::Service { status_code, .. } => *status_code,
            Repr::Http { status_code, .. } => Some(*status_code),
            Repr::Submission(inner) => inner.http_status_code(),
            _ => None,
        }
    }

    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &*self.0 {
            Repr::Service { headers, .. } => headers.as_ref(),
            Repr::Http { headers, .. } => Some(headers),
            Repr::Submission(inner) => inner.http_headers(),
            _ => None,
        }
    }

    /// The response body, for errors the service did not describe with a
    /// [Status].
    pub fn http_payload(&self) -> Option<&Bytes> {
        match &*self.0 {
            Repr::Http { payload, .. } => Some(payload),
            Repr::Submission(inner) => inner.http_payload(),
            _ => None,
        }
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        Repr::Service {
            status,
            status_code,
            headers,
        }
        .into()
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Repr::Binding(source.into()).into()
    }

    /// A path parameter, such as the zone or the disk name, was empty.
    pub fn is_binding(&self) -> bool {
        matches!(*self.0, Repr::Binding(_))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: CredentialsError) -> Self {
        Repr::Authentication(source).into()
    }

    pub fn is_authentication(&self) -> bool {
        matches!(*self.0, Repr::Authentication(_))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: Bytes) -> Self {
        Repr::Http {
            status_code,
            headers,
            payload,
        }
        .into()
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Repr::Io(source.into()).into()
    }

    /// No response was received.
    pub fn is_io(&self) -> bool {
        matches!(*self.0, Repr::Io(_))
    }

    /// The request failed below the service, with or without a response.
    pub fn is_transport(&self) -> bool {
        matches!(*self.0, Repr::Io(_) | Repr::Http { .. })
    }

    #[doc(hidden)]
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Repr::Other(source.into()).into()
    }

    // Credentials that failed with a transient error never reached the
    // service, the request is safe to send again.
    pub(crate) fn is_transient_and_before_rpc(&self) -> bool {
        matches!(&*self.0, Repr::Authentication(e) if e.is_transient())
    }
}
