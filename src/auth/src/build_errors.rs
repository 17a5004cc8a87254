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

//! Errors loading the credentials used by the samples.

use std::path::{Path, PathBuf};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error returned by the [Credentials] builders.
///
/// The samples treat any of these as a configuration problem: the process
/// cannot run until the environment or the credentials file is fixed.
///
/// [Credentials]: crate::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(Kind);

#[derive(thiserror::Error, Debug)]
enum Kind {
    #[error("the {0} environment variable is not set or is empty")]
    MissingEnvironment(&'static str),
    #[error("cannot read the credentials file {}: {source}", path.display())]
    Loading {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
    #[error("invalid credentials: {0}")]
    Parsing(#[source] BoxError),
    #[error("{0}, only `service_account` and `authorized_user` credentials are supported")]
    UnknownType(String),
}

impl Error {
    /// `GOOGLE_APPLICATION_CREDENTIALS` is not set and no file was given to
    /// the builder.
    pub fn is_missing_environment(&self) -> bool {
        matches!(self.0, Kind::MissingEnvironment(_))
    }

    /// The credentials file could not be read.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, Kind::Loading { .. })
    }

    /// The credentials file is not valid JSON, or is missing required fields.
    pub fn is_parsing(&self) -> bool {
        matches!(self.0, Kind::Parsing(_))
    }

    /// The `type` field names credentials the samples cannot use.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.0, Kind::UnknownType(_))
    }

    /// The file that could not be read, if that was the problem.
    pub fn path(&self) -> Option<&Path> {
        match &self.0 {
            Kind::Loading { path, .. } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn missing_environment(name: &'static str) -> Self {
        Self(Kind::MissingEnvironment(name))
    }

    pub(crate) fn loading<T: Into<BoxError>>(path: &Path, source: T) -> Self {
        Self(Kind::Loading {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }

    pub(crate) fn parsing<T: Into<BoxError>>(source: T) -> Self {
        Self(Kind::Parsing(source.into()))
    }

    pub(crate) fn unknown_type<T: Into<String>>(message: T) -> Self {
        Self(Kind::UnknownType(message.into()))
    }
}
