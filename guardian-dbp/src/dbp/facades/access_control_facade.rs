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

//! Database facade for granted permissions.

use crate::GuardianError;
use crate::model::Permission;
use crate::model::PermissionSubject;
use crate::model::ResourcePermission;
use crate::model::SignedInUser;

/// Database facade for granted permissions.
#[async_trait::async_trait]
pub trait AccessControlFacade: Send + Sync {
    /// Return every permission granted in the organization with exactly the
    /// `scope`, regardless of subject.
    async fn get_resource_permissions(
        &self,
        org_id: i64,
        scope: &str,
    ) -> Result<Vec<ResourcePermission>, GuardianError>;

    /// Return all permissions that apply to the `user` in the user's
    /// organization, through the user, the user's teams or the user's role.
    async fn get_user_permissions(
        &self,
        user: &SignedInUser,
    ) -> Result<Vec<Permission>, GuardianError>;

    /// Replace the actions explicitly granted to the `subject` within the
    /// `scope`. An empty `actions` removes the grant.
    ///
    /// Return the stored grant, if any.
    async fn set_resource_permission(
        &self,
        org_id: i64,
        subject: &PermissionSubject,
        scope: &str,
        actions: &[String],
    ) -> Result<Option<ResourcePermission>, GuardianError>;

    /// Add `permissions` to the non-managed role `role_name` assigned to the
    /// `subject`.
    async fn grant_role(
        &self,
        org_id: i64,
        role_name: &str,
        subject: &PermissionSubject,
        permissions: &[Permission],
    ) -> Result<(), GuardianError>;
}
