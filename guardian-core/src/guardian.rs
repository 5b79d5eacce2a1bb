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

//! Dashboard and folder guardians.

mod accesscontrol_guardian;
mod permission_level_map;

pub use self::accesscontrol_guardian::*;
pub use self::permission_level_map::*;
use guardian_dbp::GuardianError;
use guardian_dbp::model::PermissionLevel;
use guardian_dbp::model::acl::DashboardAcl;
use guardian_dbp::model::acl::DashboardAclInfo;

/// Decides what a user may do with one dashboard or folder.
///
/// An `Err` means that no decision could be reached and must not be treated
/// as a denial or an approval.
#[async_trait::async_trait]
pub trait DashboardGuardian: Send + Sync {
    /// Return `true` if the user may create new dashboards or folders.
    async fn can_create(&self) -> Result<bool, GuardianError>;

    /// Return `true` if the user may save the resource. For a guardian of a
    /// resource that does not exist yet, this is the same as
    /// [Self::can_create].
    async fn can_save(&self) -> Result<bool, GuardianError>;

    /// Return `true` if the user may edit the resource.
    async fn can_edit(&self) -> Result<bool, GuardianError>;

    /// Return `true` if the user may view the resource.
    async fn can_view(&self) -> Result<bool, GuardianError>;

    /// Return `true` if the user may manage permissions of the resource.
    async fn can_admin(&self) -> Result<bool, GuardianError>;

    /// Return `true` if the user may delete the resource.
    async fn can_delete(&self) -> Result<bool, GuardianError>;

    /// Return `true` if the user may replace the access control list of the
    /// resource with `update_permissions`.
    async fn check_permission_before_update(
        &self,
        permission: PermissionLevel,
        update_permissions: &[DashboardAcl],
    ) -> Result<bool, GuardianError>;

    /// Return the explicitly granted permissions on the resource.
    async fn get_acl(&self) -> Result<Vec<DashboardAclInfo>, GuardianError>;

    /// Like [Self::get_acl], but with entries that are shadowed by an
    /// inherited entry of at least the same level removed.
    async fn get_acl_without_duplicates(&self) -> Result<Vec<DashboardAclInfo>, GuardianError>;

    /// Return entries that exist but are not shown to users.
    async fn get_hidden_acl(&self) -> Result<Vec<DashboardAcl>, GuardianError>;

    /// Return `true` if the user holds at least the `permission` level
    /// through the access control list.
    async fn has_permission(&self, permission: PermissionLevel) -> Result<bool, GuardianError>;
}
