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

//! Resource permission service interface.

use guardian_dbp::GuardianError;
use guardian_dbp::model::ResourcePermission;

/// Lists the permissions granted on resources of one kind.
#[async_trait::async_trait]
pub trait ResourcePermissionService: Send + Sync {
    /// Return all permissions granted on the resource `resource_id` in the
    /// organization `org_id`, managed or not.
    async fn get_permissions(
        &self,
        org_id: i64,
        resource_id: &str,
    ) -> Result<Vec<ResourcePermission>, GuardianError>;

    /// Return the name of the permission whose actions are exactly the
    /// granted actions of `permission`, or an empty string if there is none.
    fn map_actions(&self, permission: &ResourcePermission) -> String;
}
