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

//! Access control.
//!
//! Authorization questions are phrased as an [Evaluator] expression over
//! actions and scopes and answered by a [PolicyEvaluator].

mod evaluator;
mod policy_evaluator;
mod policy_evaluator_local;
mod scope;

pub use self::evaluator::*;
pub use self::policy_evaluator::*;
pub use self::policy_evaluator_local::*;
pub use self::scope::*;

/// Create dashboards. Not bound to a resource scope.
pub const ACTION_DASHBOARDS_CREATE: &str = "dashboards:create";
/// View a dashboard.
pub const ACTION_DASHBOARDS_READ: &str = "dashboards:read";
/// Save changes to a dashboard.
pub const ACTION_DASHBOARDS_WRITE: &str = "dashboards:write";
/// Edit a dashboard in the browser.
pub const ACTION_DASHBOARDS_EDIT: &str = "dashboards:edit";
/// Delete a dashboard.
pub const ACTION_DASHBOARDS_DELETE: &str = "dashboards:delete";
/// List permissions granted on a dashboard.
pub const ACTION_DASHBOARDS_PERMISSIONS_READ: &str = "dashboards.permissions:read";
/// Change permissions granted on a dashboard.
pub const ACTION_DASHBOARDS_PERMISSIONS_WRITE: &str = "dashboards.permissions:write";

/// Create folders. Not bound to a resource scope.
pub const ACTION_FOLDERS_CREATE: &str = "folders:create";
/// View a folder.
pub const ACTION_FOLDERS_READ: &str = "folders:read";
/// Save changes to a folder.
pub const ACTION_FOLDERS_WRITE: &str = "folders:write";
/// Edit a folder.
pub const ACTION_FOLDERS_EDIT: &str = "folders:edit";
/// Delete a folder.
pub const ACTION_FOLDERS_DELETE: &str = "folders:delete";
/// List permissions granted on a folder.
pub const ACTION_FOLDERS_PERMISSIONS_READ: &str = "folders.permissions:read";
/// Change permissions granted on a folder.
pub const ACTION_FOLDERS_PERMISSIONS_WRITE: &str = "folders.permissions:write";
