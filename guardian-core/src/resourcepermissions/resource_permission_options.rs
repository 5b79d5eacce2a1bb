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

//! Named permissions and the actions they grant.

use crate::ac::*;
use guardian_dbp::model::ResourceKind;

/// Describes the permissions that can be granted on resources of one kind.
#[derive(Clone, Debug)]
pub struct ResourcePermissionOptions {
    resource: ResourceKind,
    permissions_to_actions: Vec<(String, Vec<String>)>,
}

impl ResourcePermissionOptions {
    /// Return a new instance.
    ///
    /// `permissions_to_actions` is searched in order when mapping granted
    /// actions back to a permission name.
    pub fn new(resource: ResourceKind, permissions_to_actions: &[(&str, &[&str])]) -> Self {
        Self {
            resource,
            permissions_to_actions: permissions_to_actions
                .iter()
                .map(|(permission, actions)| {
                    (
                        permission.to_string(),
                        actions.iter().map(|action| action.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Permissions on dashboards.
    pub fn dashboards() -> Self {
        const VIEW: &[&str] = &[ACTION_DASHBOARDS_READ];
        const EDIT: &[&str] = &[
            ACTION_DASHBOARDS_READ,
            ACTION_DASHBOARDS_WRITE,
            ACTION_DASHBOARDS_DELETE,
            ACTION_DASHBOARDS_EDIT,
        ];
        const ADMIN: &[&str] = &[
            ACTION_DASHBOARDS_READ,
            ACTION_DASHBOARDS_WRITE,
            ACTION_DASHBOARDS_DELETE,
            ACTION_DASHBOARDS_EDIT,
            ACTION_DASHBOARDS_PERMISSIONS_READ,
            ACTION_DASHBOARDS_PERMISSIONS_WRITE,
        ];
        Self::new(
            ResourceKind::Dashboard,
            &[("View", VIEW), ("Edit", EDIT), ("Admin", ADMIN)],
        )
    }

    /// Permissions on folders.
    ///
    /// Folder permissions include the dashboard actions, so that they apply
    /// to every dashboard in the folder.
    pub fn folders() -> Self {
        const VIEW: &[&str] = &[ACTION_FOLDERS_READ, ACTION_DASHBOARDS_READ];
        const EDIT: &[&str] = &[
            ACTION_FOLDERS_READ,
            ACTION_FOLDERS_WRITE,
            ACTION_FOLDERS_DELETE,
            ACTION_FOLDERS_EDIT,
            ACTION_DASHBOARDS_READ,
            ACTION_DASHBOARDS_WRITE,
            ACTION_DASHBOARDS_DELETE,
            ACTION_DASHBOARDS_EDIT,
            ACTION_DASHBOARDS_CREATE,
        ];
        const ADMIN: &[&str] = &[
            ACTION_FOLDERS_READ,
            ACTION_FOLDERS_WRITE,
            ACTION_FOLDERS_DELETE,
            ACTION_FOLDERS_EDIT,
            ACTION_FOLDERS_PERMISSIONS_READ,
            ACTION_FOLDERS_PERMISSIONS_WRITE,
            ACTION_DASHBOARDS_READ,
            ACTION_DASHBOARDS_WRITE,
            ACTION_DASHBOARDS_DELETE,
            ACTION_DASHBOARDS_EDIT,
            ACTION_DASHBOARDS_CREATE,
            ACTION_DASHBOARDS_PERMISSIONS_READ,
            ACTION_DASHBOARDS_PERMISSIONS_WRITE,
        ];
        Self::new(
            ResourceKind::Folder,
            &[("View", VIEW), ("Edit", EDIT), ("Admin", ADMIN)],
        )
    }

    /// Kind of resource the permissions apply to.
    pub fn resource(&self) -> ResourceKind {
        self.resource
    }

    /// Actions granted by the named `permission`.
    pub fn actions_for(&self, permission: &str) -> Option<&[String]> {
        self.permissions_to_actions
            .iter()
            .find(|(name, _)| name == permission)
            .map(|(_, actions)| actions.as_slice())
    }

    /// Name of the first permission granting exactly the `actions`.
    pub fn permission_for(&self, actions: &[String]) -> Option<&str> {
        self.permissions_to_actions
            .iter()
            .find(|(_, permission_actions)| {
                permission_actions.len() == actions.len()
                    && permission_actions
                        .iter()
                        .all(|action| actions.contains(action))
            })
            .map(|(name, _)| name.as_str())
    }
}
