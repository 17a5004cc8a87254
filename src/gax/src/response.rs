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

//! The value returned by each stub call.
//!
//! Request builders unwrap the body, so applications only see this type when
//! they mock a stub:
//!
//! ```
//! # use lro_samples_gax::Result;
//! # use lro_samples_gax::response::Response;
//! #[derive(Default)]
//! struct Operation {
//!     name: Option<String>,
//! }
//!
//! fn pending_operation() -> Result<Response<Operation>> {
//!     let op = Operation { name: Some("operation-123".into()) };
//!     Ok(Response::from(op))
//! }
//! ```

use http::HeaderMap;

/// A decoded response body and the HTTP headers it arrived with.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// A response without headers, mostly for mocks.
    pub fn from(body: T) -> Self {
        Self::from_parts(Parts::default(), body)
    }

    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    pub fn into_body(self) -> T {
        self.body
    }
}

/// Everything in a response except the body.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    pub headers: HeaderMap,
}

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_headers<V: Into<HeaderMap>>(mut self, v: V) -> Self {
        self.headers = v.into();
        self
    }
}
