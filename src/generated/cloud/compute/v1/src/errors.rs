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

//! Errors reported by completed Compute Engine operations.

use crate::model::Operation;

impl Operation {
    /// Returns the operation, or its error if the operation failed.
    ///
    /// An operation failed if it carries an error payload, or an HTTP error
    /// status, even if its status is `DONE`.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::model::Operation;
    /// # use lro_samples_compute_v1::model::operation::{Error, Status, error::Errors};
    /// let op = Operation::new()
    ///     .set_status(Status::Done)
    ///     .set_error(Error::new().set_errors([Errors::new().set_code("RESOURCE_NOT_FOUND")]));
    /// assert!(op.to_result().is_err());
    /// ```
    pub fn to_result(self) -> std::result::Result<Self, OperationError> {
        if self.error.is_some()
            || self.http_error_status_code.is_some()
            || self.http_error_message.is_some()
        {
            let error = OperationError::new();
            let error = self.error.into_iter().fold(error, |e, v| e.set_details(v));
            let error = self
                .http_error_status_code
                .into_iter()
                .fold(error, |e, v| e.set_status_code(v));
            let error = self
                .http_error_message
                .into_iter()
                .fold(error, |e, v| e.set_message(v));
            return Err(error);
        }
        Ok(self)
    }
}

/// The details of a failed long-running operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OperationError {
    /// The HTTP error message.
    pub message: Option<String>,

    /// The HTTP error status code.
    pub status_code: Option<i32>,

    /// The errors generated while processing the operation.
    pub details: Option<crate::model::operation::Error>,
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the long-running operation failed with {self:?}")
    }
}

impl std::error::Error for OperationError {}

impl OperationError {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [message][Self::message] field.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::errors::OperationError;
    /// let error = OperationError::new().set_message("useful in mocks");
    /// ```
    pub fn set_message<V: Into<String>>(mut self, v: V) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Set the [status_code][Self::status_code] field.
    pub fn set_status_code(mut self, v: i32) -> Self {
        self.status_code = Some(v);
        self
    }

    /// Set the [details][Self::details] field.
    ///
    /// # Example
    /// ```
    /// # use lro_samples_compute_v1::errors::OperationError;
    /// use lro_samples_compute_v1::model::operation::{Error, error::Errors};
    /// let error = OperationError::new().set_details(
    ///     Error::new().set_errors([
    ///         Errors::new()
    ///             .set_code("MOCK_ERROR_CODE")
    ///             .set_location("some_field")
    ///             .set_message("a mocked error"),
    ///         ]),
    /// );
    /// ```
    pub fn set_details<V: Into<crate::model::operation::Error>>(mut self, v: V) -> Self {
        self.details = Some(v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::operation::{Error, Status, error::Errors};

    #[test]
    fn to_result() {
        let input = Operation::new().set_status(Status::Done);
        let got = input.clone().to_result();
        assert_eq!(got, Ok(input));

        let details = Error::new().set_errors([Errors::new().set_code("RESOURCE_NOT_FOUND")]);
        let input = Operation::new()
            .set_status(Status::Done)
            .set_error(details.clone());
        let got = input.to_result();
        assert_eq!(got, Err(OperationError::new().set_details(details)));

        let input = Operation::new()
            .set_http_error_status_code(404)
            .set_http_error_message("NOT FOUND");
        let got = input.to_result();
        let want = OperationError::new()
            .set_status_code(404)
            .set_message("NOT FOUND");
        assert_eq!(got, Err(want));
    }

    #[test]
    fn display() {
        let error = OperationError::new().set_message("NOT FOUND");
        let fmt = error.to_string();
        assert!(fmt.contains("NOT FOUND"), "{fmt}");
    }
}
