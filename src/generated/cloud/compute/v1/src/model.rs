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

//! The messages used by the Compute Engine clients in this crate.
//!
//! Only the fields used by the samples, and the fields needed to interpret an
//! operation, are modeled. Unknown fields in responses are ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents an Operation resource.
///
/// Mutating methods in Compute Engine return an `Operation`. The operation is
/// complete when [status][Operation::status] is [Done][operation::Status::Done].
/// A completed operation may carry an [error][Operation::error], in which case
/// the mutation failed, possibly after partially applying it.
///
/// Zonal operations live under `projects/{project}/zones/{zone}/operations`,
/// regional operations under `projects/{project}/regions/{region}/operations`,
/// and global operations under `projects/{project}/global/operations`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The name of the operation, unique within its scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The type of operation, such as `insert` or `delete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<operation::Status>,

    /// An optional textual description of the current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    /// The errors encountered while processing the operation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<operation::Error>,

    /// The HTTP error status code returned for a failed operation, e.g. `404`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error_status_code: Option<i32>,

    /// The HTTP error message returned for a failed operation, e.g. `NOT FOUND`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error_message: Option<String>,

    /// An optional progress indicator, from 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,

    /// The time the operation was requested, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// The time the operation completed, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// The URL of the resource the operation modifies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// The URL of the zone for zonal operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    /// The URL of the region for regional operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [operation_type][Operation::operation_type].
    pub fn set_operation_type<T: Into<String>>(mut self, v: T) -> Self {
        self.operation_type = Some(v.into());
        self
    }

    /// Sets the value of [status][Operation::status].
    pub fn set_status<T: Into<operation::Status>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets or clears the value of [status][Operation::status].
    pub fn set_or_clear_status<T: Into<operation::Status>>(mut self, v: Option<T>) -> Self {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error][Operation::error].
    pub fn set_error<T: Into<operation::Error>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }

    /// Sets or clears the value of [error][Operation::error].
    pub fn set_or_clear_error<T: Into<operation::Error>>(mut self, v: Option<T>) -> Self {
        self.error = v.map(|x| x.into());
        self
    }

    /// Sets the value of [http_error_status_code][Operation::http_error_status_code].
    pub fn set_http_error_status_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.http_error_status_code = Some(v.into());
        self
    }

    /// Sets the value of [http_error_message][Operation::http_error_message].
    pub fn set_http_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.http_error_message = Some(v.into());
        self
    }

    /// Sets the value of [progress][Operation::progress].
    pub fn set_progress<T: Into<i32>>(mut self, v: T) -> Self {
        self.progress = Some(v.into());
        self
    }

    /// Sets the value of [end_time][Operation::end_time].
    pub fn set_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [target_link][Operation::target_link].
    pub fn set_target_link<T: Into<String>>(mut self, v: T) -> Self {
        self.target_link = Some(v.into());
        self
    }

    /// Sets the value of [zone][Operation::zone].
    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }

    /// Sets the value of [region][Operation::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    use super::*;

    /// The status of an operation.
    #[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Status {
        Pending,
        Running,
        Done,
        /// A value not known to this version of the library.
        #[serde(other)]
        Unknown,
    }

    impl Status {
        /// The name of the value, as it appears on the wire.
        pub fn name(&self) -> &str {
            match self {
                Self::Pending => "PENDING",
                Self::Running => "RUNNING",
                Self::Done => "DONE",
                Self::Unknown => "UNKNOWN",
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    /// The errors generated while processing an operation.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Error {
        pub errors: Vec<error::Errors>,
    }

    impl Error {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [errors][Error::errors].
        pub fn set_errors<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<error::Errors>,
        {
            self.errors = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    /// Defines additional types related to [Error].
    pub mod error {
        use super::*;

        /// A single error in an operation.
        #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Errors {
            /// The error type identifier, e.g. `RESOURCE_NOT_FOUND`.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub code: Option<String>,

            /// The field in the request that caused the error, if any.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub location: Option<String>,

            #[serde(skip_serializing_if = "Option::is_none")]
            pub message: Option<String>,

            pub error_details: Vec<errors::ErrorDetails>,
        }

        impl Errors {
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [code][Errors::code].
            pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
                self.code = Some(v.into());
                self
            }

            /// Sets the value of [location][Errors::location].
            pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
                self.location = Some(v.into());
                self
            }

            /// Sets the value of [message][Errors::message].
            pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
                self.message = Some(v.into());
                self
            }

            /// Sets the value of [error_details][Errors::error_details].
            pub fn set_error_details<T, V>(mut self, v: T) -> Self
            where
                T: IntoIterator<Item = V>,
                V: Into<errors::ErrorDetails>,
            {
                self.error_details = v.into_iter().map(|i| i.into()).collect();
                self
            }
        }

        /// Defines additional types related to [Errors].
        pub mod errors {
            use super::*;

            #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
            #[serde(default, rename_all = "camelCase")]
            #[non_exhaustive]
            pub struct ErrorDetails {
                #[serde(skip_serializing_if = "Option::is_none")]
                pub error_info: Option<crate::model::ErrorInfo>,
                #[serde(skip_serializing_if = "Option::is_none")]
                pub help: Option<crate::model::Help>,
                #[serde(skip_serializing_if = "Option::is_none")]
                pub localized_message: Option<crate::model::LocalizedMessage>,
            }

            impl ErrorDetails {
                pub fn new() -> Self {
                    Self::default()
                }

                /// Sets the value of [error_info][ErrorDetails::error_info].
                pub fn set_error_info<T: Into<crate::model::ErrorInfo>>(mut self, v: T) -> Self {
                    self.error_info = Some(v.into());
                    self
                }

                /// Sets the value of [help][ErrorDetails::help].
                pub fn set_help<T: Into<crate::model::Help>>(mut self, v: T) -> Self {
                    self.help = Some(v.into());
                    self
                }

                /// Sets the value of [localized_message][ErrorDetails::localized_message].
                pub fn set_localized_message<T: Into<crate::model::LocalizedMessage>>(
                    mut self,
                    v: T,
                ) -> Self {
                    self.localized_message = Some(v.into());
                    self
                }
            }
        }
    }
}

/// Describes the cause of the error with structured details.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub metadatas: HashMap<String, String>,
}

impl ErrorInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [domain][ErrorInfo::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    /// Sets the value of [reason][ErrorInfo::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = Some(v.into());
        self
    }

    /// Sets the value of [metadatas][ErrorInfo::metadatas].
    pub fn set_metadatas<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadatas = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Provides links to documentation or for performing an out of band action.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Help {
    pub links: Vec<HelpLink>,
}

impl Help {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [links][Help::links].
    pub fn set_links<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<HelpLink>,
    {
        self.links = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HelpLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl HelpLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [description][HelpLink::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [url][HelpLink::url].
    pub fn set_url<T: Into<String>>(mut self, v: T) -> Self {
        self.url = Some(v.into());
        self
    }
}

/// Provides a localized error message that is safe to return to the user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocalizedMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LocalizedMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [locale][LocalizedMessage::locale].
    pub fn set_locale<T: Into<String>>(mut self, v: T) -> Self {
        self.locale = Some(v.into());
        self
    }

    /// Sets the value of [message][LocalizedMessage::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

/// Represents a Persistent Disk resource.
///
/// Disks may be zonal or regional. Regional disks replicate synchronously
/// across two zones. Either kind may be the primary of an asynchronous
/// replication pair.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Disk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The size of the disk, in GB.
    #[serde(skip_serializing_if = "Option::is_none", with = "int64")]
    pub size_gb: Option<i64>,

    /// The URL of the disk type, e.g.
    /// `zones/us-central1-a/diskTypes/hyperdisk-balanced`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    /// The number of I/O operations per second the disk can handle.
    #[serde(skip_serializing_if = "Option::is_none", with = "int64")]
    pub provisioned_iops: Option<i64>,

    /// The throughput, in MiB per second, the disk can handle.
    #[serde(skip_serializing_if = "Option::is_none", with = "int64")]
    pub provisioned_throughput: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// The zones where a regional disk is replicated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replica_zones: Vec<String>,

    /// The status of disk creation, e.g. `CREATING`, `READY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl Disk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Disk::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][Disk::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [size_gb][Disk::size_gb].
    pub fn set_size_gb<T: Into<i64>>(mut self, v: T) -> Self {
        self.size_gb = Some(v.into());
        self
    }

    /// Sets the value of [type][Disk::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [provisioned_iops][Disk::provisioned_iops].
    pub fn set_provisioned_iops<T: Into<i64>>(mut self, v: T) -> Self {
        self.provisioned_iops = Some(v.into());
        self
    }

    /// Sets the value of [provisioned_throughput][Disk::provisioned_throughput].
    pub fn set_provisioned_throughput<T: Into<i64>>(mut self, v: T) -> Self {
        self.provisioned_throughput = Some(v.into());
        self
    }

    /// Sets the value of [zone][Disk::zone].
    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }

    /// Sets the value of [region][Disk::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets the value of [replica_zones][Disk::replica_zones].
    pub fn set_replica_zones<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.replica_zones = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [status][Disk::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [labels][Disk::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The body of a request to start asynchronous replication for a zonal disk.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisksStartAsyncReplicationRequest {
    /// The secondary disk, as a URL or a partial path such as
    /// `projects/{project}/zones/{zone}/disks/{disk}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_secondary_disk: Option<String>,
}

impl DisksStartAsyncReplicationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [async_secondary_disk][DisksStartAsyncReplicationRequest::async_secondary_disk].
    pub fn set_async_secondary_disk<T: Into<String>>(mut self, v: T) -> Self {
        self.async_secondary_disk = Some(v.into());
        self
    }
}

/// The body of a request to start asynchronous replication for a regional disk.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegionDisksStartAsyncReplicationRequest {
    /// The secondary disk, as a URL or a partial path such as
    /// `projects/{project}/regions/{region}/disks/{disk}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub async_secondary_disk: Option<String>,
}

impl RegionDisksStartAsyncReplicationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [async_secondary_disk][RegionDisksStartAsyncReplicationRequest::async_secondary_disk].
    pub fn set_async_secondary_disk<T: Into<String>>(mut self, v: T) -> Self {
        self.async_secondary_disk = Some(v.into());
        self
    }
}

/// Represents a reservation resource.
///
/// A reservation ensures that capacity is held in a specific zone even if the
/// reserved VMs are not running.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Reservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    /// The reservation for instances with specific machine shapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_reservation: Option<AllocationSpecificSKUReservation>,

    /// If true, only VMs that target this reservation by name can consume it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_reservation_required: Option<bool>,

    /// The status of the reservation, e.g. `CREATING`, `READY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

impl Reservation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Reservation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][Reservation::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [zone][Reservation::zone].
    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }

    /// Sets the value of [specific_reservation][Reservation::specific_reservation].
    pub fn set_specific_reservation<T: Into<AllocationSpecificSKUReservation>>(
        mut self,
        v: T,
    ) -> Self {
        self.specific_reservation = Some(v.into());
        self
    }

    /// Sets the value of [specific_reservation_required][Reservation::specific_reservation_required].
    pub fn set_specific_reservation_required<T: Into<bool>>(mut self, v: T) -> Self {
        self.specific_reservation_required = Some(v.into());
        self
    }
}

/// Defines the VMs held by a specific reservation.
///
/// The VM properties come from an instance template, given by
/// [source_instance_template][AllocationSpecificSKUReservation::source_instance_template].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AllocationSpecificSKUReservation {
    /// The number of resources that are allocated.
    #[serde(skip_serializing_if = "Option::is_none", with = "int64")]
    pub count: Option<i64>,

    /// The number of allocated resources currently in use.
    #[serde(skip_serializing_if = "Option::is_none", with = "int64")]
    pub in_use_count: Option<i64>,

    /// The instance template used to define the reserved VMs, e.g.
    /// `projects/{project}/global/instanceTemplates/{name}` or
    /// `projects/{project}/regions/{region}/instanceTemplates/{name}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_instance_template: Option<String>,
}

impl AllocationSpecificSKUReservation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [count][AllocationSpecificSKUReservation::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets the value of [source_instance_template][AllocationSpecificSKUReservation::source_instance_template].
    pub fn set_source_instance_template<T: Into<String>>(mut self, v: T) -> Self {
        self.source_instance_template = Some(v.into());
        self
    }
}

/// Represents an Instance Template resource.
///
/// Global instance templates may be used in any region. Regional instance
/// templates are restricted to the region where they are created.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The instance properties for this template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<InstanceProperties>,

    /// The URL of the region, only set for regional templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

impl InstanceTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][InstanceTemplate::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][InstanceTemplate::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [properties][InstanceTemplate::properties].
    pub fn set_properties<T: Into<InstanceProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceProperties {
    /// The machine type, e.g. `n1-standard-1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<AttachedDisk>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub network_interfaces: Vec<NetworkInterface>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl InstanceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [machine_type][InstanceProperties::machine_type].
    pub fn set_machine_type<T: Into<String>>(mut self, v: T) -> Self {
        self.machine_type = Some(v.into());
        self
    }

    /// Sets the value of [disks][InstanceProperties::disks].
    pub fn set_disks<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AttachedDisk>,
    {
        self.disks = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [network_interfaces][InstanceProperties::network_interfaces].
    pub fn set_network_interfaces<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<NetworkInterface>,
    {
        self.network_interfaces = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [labels][InstanceProperties::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// An instance-attached disk resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachedDisk {
    /// Indicates that this is a boot disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot: Option<bool>,

    /// Specifies whether the disk is deleted when the instance is deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<bool>,

    /// Parameters for a new disk created alongside the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialize_params: Option<AttachedDiskInitializeParams>,
}

impl AttachedDisk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [boot][AttachedDisk::boot].
    pub fn set_boot<T: Into<bool>>(mut self, v: T) -> Self {
        self.boot = Some(v.into());
        self
    }

    /// Sets the value of [auto_delete][AttachedDisk::auto_delete].
    pub fn set_auto_delete<T: Into<bool>>(mut self, v: T) -> Self {
        self.auto_delete = Some(v.into());
        self
    }

    /// Sets the value of [initialize_params][AttachedDisk::initialize_params].
    pub fn set_initialize_params<T: Into<AttachedDiskInitializeParams>>(mut self, v: T) -> Self {
        self.initialize_params = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachedDiskInitializeParams {
    /// The source image, e.g. `projects/debian-cloud/global/images/family/debian-11`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", with = "int64")]
    pub disk_size_gb: Option<i64>,

    /// The disk type, e.g. `pd-balanced`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<String>,
}

impl AttachedDiskInitializeParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [source_image][AttachedDiskInitializeParams::source_image].
    pub fn set_source_image<T: Into<String>>(mut self, v: T) -> Self {
        self.source_image = Some(v.into());
        self
    }

    /// Sets the value of [disk_size_gb][AttachedDiskInitializeParams::disk_size_gb].
    pub fn set_disk_size_gb<T: Into<i64>>(mut self, v: T) -> Self {
        self.disk_size_gb = Some(v.into());
        self
    }

    /// Sets the value of [disk_type][AttachedDiskInitializeParams::disk_type].
    pub fn set_disk_type<T: Into<String>>(mut self, v: T) -> Self {
        self.disk_type = Some(v.into());
        self
    }
}

/// A network interface resource attached to an instance.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkInterface {
    /// The network, e.g. `global/networks/default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// The subnetwork, e.g. `regions/us-central1/subnetworks/default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnetwork: Option<String>,
}

impl NetworkInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [network][NetworkInterface::network].
    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = Some(v.into());
        self
    }

    /// Sets the value of [subnetwork][NetworkInterface::subnetwork].
    pub fn set_subnetwork<T: Into<String>>(mut self, v: T) -> Self {
        self.subnetwork = Some(v.into());
        self
    }
}

/// Request messages for the [Disks][crate::client::Disks] client.
pub mod disks {
    use super::*;

    /// The request message for [Disks::insert][crate::client::Disks::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        pub project: String,
        pub zone: String,
        /// An optional request ID, used by the service to ignore duplicate
        /// requests. The client never sets this on its own.
        pub request_id: Option<String>,
        /// The source image used to create the disk, if any.
        pub source_image: Option<String>,
        pub body: Option<Disk>,
    }

    /// The request message for [Disks::get][crate::client::Disks::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub project: String,
        pub zone: String,
        pub disk: String,
    }

    /// The request message for [Disks::delete][crate::client::Disks::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        pub project: String,
        pub zone: String,
        pub disk: String,
        pub request_id: Option<String>,
    }

    /// The request message for
    /// [Disks::start_async_replication][crate::client::Disks::start_async_replication].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct StartAsyncReplicationRequest {
        pub project: String,
        pub zone: String,
        /// The name of the primary disk.
        pub disk: String,
        pub request_id: Option<String>,
        pub body: Option<DisksStartAsyncReplicationRequest>,
    }
}

/// Request messages for the [RegionDisks][crate::client::RegionDisks] client.
pub mod region_disks {
    use super::*;

    /// The request message for
    /// [RegionDisks::start_async_replication][crate::client::RegionDisks::start_async_replication].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct StartAsyncReplicationRequest {
        pub project: String,
        pub region: String,
        /// The name of the primary disk.
        pub disk: String,
        pub request_id: Option<String>,
        pub body: Option<RegionDisksStartAsyncReplicationRequest>,
    }
}

/// Request messages for the [Reservations][crate::client::Reservations] client.
pub mod reservations {
    use super::*;

    /// The request message for [Reservations::insert][crate::client::Reservations::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        pub project: String,
        pub zone: String,
        pub request_id: Option<String>,
        pub body: Option<Reservation>,
    }

    /// The request message for [Reservations::get][crate::client::Reservations::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub project: String,
        pub zone: String,
        pub reservation: String,
    }

    /// The request message for [Reservations::delete][crate::client::Reservations::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        pub project: String,
        pub zone: String,
        pub reservation: String,
        pub request_id: Option<String>,
    }
}

/// Request messages for the [InstanceTemplates][crate::client::InstanceTemplates] client.
pub mod instance_templates {
    use super::*;

    /// The request message for
    /// [InstanceTemplates::insert][crate::client::InstanceTemplates::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        pub project: String,
        pub request_id: Option<String>,
        pub body: Option<InstanceTemplate>,
    }

    /// The request message for
    /// [InstanceTemplates::get][crate::client::InstanceTemplates::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub project: String,
        pub instance_template: String,
    }

    /// The request message for
    /// [InstanceTemplates::delete][crate::client::InstanceTemplates::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        pub project: String,
        pub instance_template: String,
        pub request_id: Option<String>,
    }
}

/// Request messages for the
/// [RegionInstanceTemplates][crate::client::RegionInstanceTemplates] client.
pub mod region_instance_templates {
    use super::*;

    /// The request message for
    /// [RegionInstanceTemplates::insert][crate::client::RegionInstanceTemplates::insert].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct InsertRequest {
        pub project: String,
        pub region: String,
        pub request_id: Option<String>,
        pub body: Option<InstanceTemplate>,
    }

    /// The request message for
    /// [RegionInstanceTemplates::get][crate::client::RegionInstanceTemplates::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub project: String,
        pub region: String,
        pub instance_template: String,
    }

    /// The request message for
    /// [RegionInstanceTemplates::delete][crate::client::RegionInstanceTemplates::delete].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct DeleteRequest {
        pub project: String,
        pub region: String,
        pub instance_template: String,
        pub request_id: Option<String>,
    }
}

/// Request messages for the [ZoneOperations][crate::client::ZoneOperations] client.
pub mod zone_operations {
    /// The request message for
    /// [ZoneOperations::get][crate::client::ZoneOperations::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub project: String,
        pub zone: String,
        pub operation: String,
    }
}

/// Request messages for the [RegionOperations][crate::client::RegionOperations] client.
pub mod region_operations {
    /// The request message for
    /// [RegionOperations::get][crate::client::RegionOperations::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub project: String,
        pub region: String,
        pub operation: String,
    }
}

/// Request messages for the [GlobalOperations][crate::client::GlobalOperations] client.
pub mod global_operations {
    /// The request message for
    /// [GlobalOperations::get][crate::client::GlobalOperations::get].
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        pub project: String,
        pub operation: String,
    }
}

// Compute encodes 64-bit integers as JSON strings. Accept numbers too.
mod int64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<i64>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(v) => s.serialize_str(&v.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(i64),
            String(String),
        }
        match Option::<Wire>::deserialize(d)? {
            None => Ok(None),
            Some(Wire::Number(n)) => Ok(Some(n)),
            Some(Wire::String(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operation_from_json() -> anyhow::Result<()> {
        let input = json!({
            "kind": "compute#operation",
            "id": "1234567890",
            "name": "operation-1700000000000-abc",
            "operationType": "startAsyncReplication",
            "status": "DONE",
            "progress": 100,
            "endTime": "2025-01-02T03:04:05.000-08:00",
            "region": "https://www.googleapis.com/compute/v1/projects/p/regions/us-central1",
            "error": {
                "errors": [{
                    "code": "RESOURCE_NOT_FOUND",
                    "message": "The resource 'projects/p/regions/us-central1/disks/d' was not found",
                    "errorDetails": [{
                        "errorInfo": {
                            "reason": "RESOURCE_NOT_FOUND",
                            "domain": "compute.googleapis.com",
                            "metadatas": {"resource": "d"}
                        }
                    }]
                }]
            },
            "httpErrorStatusCode": 404,
            "httpErrorMessage": "NOT FOUND"
        });
        let got = serde_json::from_value::<Operation>(input)?;
        assert_eq!(got.name.as_deref(), Some("operation-1700000000000-abc"));
        assert_eq!(got.status, Some(operation::Status::Done));
        assert_eq!(got.progress, Some(100));
        assert_eq!(got.http_error_status_code, Some(404));
        assert_eq!(
            got.end_time.as_deref(),
            Some("2025-01-02T03:04:05.000-08:00")
        );
        let errors = got.error.map(|e| e.errors).unwrap_or_default();
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert_eq!(errors[0].code.as_deref(), Some("RESOURCE_NOT_FOUND"));
        let info = errors[0].error_details[0].error_info.as_ref();
        assert_eq!(
            info.and_then(|i| i.metadatas.get("resource")).map(String::as_str),
            Some("d")
        );
        Ok(())
    }

    #[test]
    fn operation_unknown_status() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Operation>(json!({"status": "SUSPENDED"}))?;
        assert_eq!(got.status, Some(operation::Status::Unknown));
        assert_eq!(operation::Status::Running.to_string(), "RUNNING");
        Ok(())
    }

    #[test]
    fn disk_int64_fields() -> anyhow::Result<()> {
        let disk = Disk::new()
            .set_name("hyperdisk-1")
            .set_size_gb(100)
            .set_provisioned_iops(3000)
            .set_provisioned_throughput(140)
            .set_type("zones/us-central1-a/diskTypes/hyperdisk-balanced");
        let got = serde_json::to_value(&disk)?;
        let want = json!({
            "name": "hyperdisk-1",
            "sizeGb": "100",
            "provisionedIops": "3000",
            "provisionedThroughput": "140",
            "type": "zones/us-central1-a/diskTypes/hyperdisk-balanced",
        });
        assert_eq!(got, want);

        let got = serde_json::from_value::<Disk>(json!({"sizeGb": 10, "provisionedIops": "3000"}))?;
        assert_eq!(got.size_gb, Some(10));
        assert_eq!(got.provisioned_iops, Some(3000));

        let got = serde_json::from_value::<Disk>(json!({"sizeGb": "ten"}));
        assert!(got.is_err(), "{got:?}");
        Ok(())
    }

    #[test]
    fn reservation_body() -> anyhow::Result<()> {
        let reservation = Reservation::new()
            .set_name("my-reservation")
            .set_specific_reservation(
                AllocationSpecificSKUReservation::new()
                    .set_count(3)
                    .set_source_instance_template(
                        "projects/p/global/instanceTemplates/my-template",
                    ),
            );
        let got = serde_json::to_value(&reservation)?;
        let want = json!({
            "name": "my-reservation",
            "specificReservation": {
                "count": "3",
                "sourceInstanceTemplate": "projects/p/global/instanceTemplates/my-template",
            },
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn instance_template_body() -> anyhow::Result<()> {
        let template = InstanceTemplate::new().set_name("t").set_properties(
            InstanceProperties::new()
                .set_machine_type("n1-standard-1")
                .set_disks([AttachedDisk::new()
                    .set_boot(true)
                    .set_auto_delete(true)
                    .set_initialize_params(
                        AttachedDiskInitializeParams::new()
                            .set_disk_size_gb(100)
                            .set_disk_type("pd-balanced"),
                    )])
                .set_network_interfaces([NetworkInterface::new().set_network("global/networks/default")]),
        );
        let got = serde_json::to_value(&template)?;
        let want = json!({
            "name": "t",
            "properties": {
                "machineType": "n1-standard-1",
                "disks": [{
                    "boot": true,
                    "autoDelete": true,
                    "initializeParams": {"diskSizeGb": "100", "diskType": "pd-balanced"},
                }],
                "networkInterfaces": [{"network": "global/networks/default"}],
            },
        });
        assert_eq!(got, want);
        Ok(())
    }
}
