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

//! Access control entry describing a granted permission.

use crate::model::BuiltInRole;
use crate::model::PermissionLevel;
use serde::Serialize;

/// Access control entry (ACE) describing a permission granted on a dashboard
/// or folder.
///
/// This is a listing for display and audit. Authorization decisions are not
/// derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAclInfo {
    /// Organization identifier.
    pub org_id: i64,
    /// Dashboard or folder identifier.
    pub dashboard_id: i64,
    /// Parent folder identifier.
    pub folder_id: i64,
    /// Time of creation in epoch microseconds.
    pub created: u64,
    /// Time of last change in epoch microseconds.
    pub updated: u64,
    /// User the entry was granted to or `0`.
    pub user_id: i64,
    /// Login of the user the entry was granted to.
    pub user_login: String,
    /// Email of the user the entry was granted to.
    pub user_email: String,
    /// Team the entry was granted to or `0`.
    pub team_id: i64,
    /// Email of the team the entry was granted to.
    pub team_email: String,
    /// Name of the team the entry was granted to.
    pub team: String,
    /// Built-in role the entry was granted to.
    pub role: Option<BuiltInRole>,
    /// Granted level.
    pub permission: PermissionLevel,
    /// Granted level as a name. Empty for [PermissionLevel::Unknown].
    pub permission_name: String,
    /// Unique external identifier of the resource.
    pub uid: String,
    /// Title of the resource.
    pub title: String,
    /// Slug of the resource.
    pub slug: String,
    /// `true` if the resource is a folder.
    pub is_folder: bool,
    /// Relative URL of the resource.
    pub url: String,
    /// `true` if the entry was inherited from a parent folder.
    pub inherited: bool,
}
