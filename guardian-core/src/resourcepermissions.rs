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

//! Listing and granting of permissions on dashboards and folders.

mod resource_permission_options;
mod resource_permission_service;
mod resource_permission_service_local;

pub use self::resource_permission_options::*;
pub use self::resource_permission_service::*;
pub use self::resource_permission_service_local::*;
use guardian_dbp::model::ResourceKind;
use std::sync::Arc;

/// The [ResourcePermissionService] of each [ResourceKind].
#[derive(Clone)]
pub struct ResourcePermissionServices {
    dashboards: Arc<dyn ResourcePermissionService>,
    folders: Arc<dyn ResourcePermissionService>,
}

impl ResourcePermissionServices {
    /// Return a new instance.
    pub fn new(
        dashboards: Arc<dyn ResourcePermissionService>,
        folders: Arc<dyn ResourcePermissionService>,
    ) -> Self {
        Self {
            dashboards,
            folders,
        }
    }

    /// Return the service responsible for resources of `kind`.
    pub fn for_kind(&self, kind: ResourceKind) -> &Arc<dyn ResourcePermissionService> {
        match kind {
            ResourceKind::Dashboard => &self.dashboards,
            ResourceKind::Folder => &self.folders,
        }
    }
}
