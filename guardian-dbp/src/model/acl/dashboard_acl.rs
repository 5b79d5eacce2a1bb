/*
    Copyright 2025 MydriaTech AB

    Licensed under the Apache License 2.0 with Free world makers exception
    1.0.0 (the "License"); you may not use this file except in compliance with
    the License. You should have obtained a copy of the License with the source
    or binary distribution in file named

        LICENSE-Apache-2.0-with-FWM-Exception-1.0.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

//! Access control list item of the legacy permission model.

use crate::model::BuiltInRole;
use crate::model::PermissionLevel;
use serde::Serialize;

/// Access control list item of the legacy permission model.
///
/// Exactly one of `user_id`, `team_id` or `role` identifies the subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAcl {
    /// Organization identifier.
    pub org_id: i64,
    /// Dashboard or folder identifier.
    pub dashboard_id: i64,
    /// User the permission applies to.
    pub user_id: Option<i64>,
    /// Team the permission applies to.
    pub team_id: Option<i64>,
    /// Built-in role the permission applies to.
    pub role: Option<BuiltInRole>,
    /// Granted level.
    pub permission: PermissionLevel,
    /// Time of creation in epoch microseconds.
    pub created: u64,
    /// Time of last change in epoch microseconds.
    pub updated: u64,
}
