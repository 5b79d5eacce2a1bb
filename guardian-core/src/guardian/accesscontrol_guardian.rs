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

//! Guardian backed by the access control policy evaluator.

use super::DashboardGuardian;
use super::PermissionLevelMap;
use crate::ac::*;
use crate::resourcepermissions::ResourcePermissionService;
use crate::resourcepermissions::ResourcePermissionServices;
use guardian_dbp::GuardianError;
use guardian_dbp::dbp::facades::DashboardFacade;
use guardian_dbp::model::Dashboard;
use guardian_dbp::model::PermissionLevel;
use guardian_dbp::model::PermissionSubject;
use guardian_dbp::model::ResourcePermission;
use guardian_dbp::model::SignedInUser;
use guardian_dbp::model::acl::DashboardAcl;
use guardian_dbp::model::acl::DashboardAclInfo;
use std::sync::Arc;
use tokio::sync::OnceCell;

/** [DashboardGuardian] that asks a [PolicyEvaluator].

Created per request for one user and one dashboard or folder. A
`dashboard_id` of `0` represents a dashboard or folder that is about to be
created.

The dashboard is loaded on first use and kept for the lifetime of the
guardian. A failed load is not kept, so the next check will try again.

Dashboards are checked against their own scope first and the scope of their
folder second. Folders are only ever checked against their own scope.
*/
pub struct AccessControlDashboardGuardian<'a> {
    user: &'a SignedInUser,
    dashboard_id: i64,
    dashboard: OnceCell<Dashboard>,
    dashboard_facade: Arc<dyn DashboardFacade>,
    policy_evaluator: Arc<dyn PolicyEvaluator>,
    permission_services: ResourcePermissionServices,
    permission_levels: PermissionLevelMap,
    root_path: String,
}

impl<'a> AccessControlDashboardGuardian<'a> {
    /// Return a new instance.
    pub fn new(
        user: &'a SignedInUser,
        dashboard_id: i64,
        dashboard_facade: &Arc<dyn DashboardFacade>,
        policy_evaluator: &Arc<dyn PolicyEvaluator>,
        permission_services: &ResourcePermissionServices,
    ) -> Self {
        Self {
            user,
            dashboard_id,
            dashboard: OnceCell::new(),
            dashboard_facade: Arc::clone(dashboard_facade),
            policy_evaluator: Arc::clone(policy_evaluator),
            permission_services: permission_services.clone(),
            permission_levels: PermissionLevelMap::default(),
            root_path: String::new(),
        }
    }

    /// Replace the table used to translate permission names into levels.
    pub fn with_permission_level_map(mut self, permission_levels: PermissionLevelMap) -> Self {
        self.permission_levels = permission_levels;
        self
    }

    /// Set the path prefix of resource URLs in listed entries.
    pub fn with_root_path(mut self, root_path: &str) -> Self {
        self.root_path = root_path.to_owned();
        self
    }

    /// Load the dashboard unless it already has been loaded.
    async fn load_dashboard(&self) -> Result<&Dashboard, GuardianError> {
        self.dashboard
            .get_or_try_init(|| {
                self.dashboard_facade
                    .get_dashboard(self.dashboard_id, self.user.org_id())
            })
            .await
    }

    async fn evaluate(&self, evaluator: Evaluator) -> Result<bool, GuardianError> {
        self.policy_evaluator.evaluate(self.user, evaluator).await
    }

    /// Allowed to create either a folder or a dashboard.
    fn create_evaluator() -> Evaluator {
        Evaluator::Any(vec![
            Evaluator::unscoped(ACTION_FOLDERS_CREATE),
            Evaluator::unscoped(ACTION_DASHBOARDS_CREATE),
        ])
    }

    /// Folder action on the folder itself or dashboard action on the
    /// dashboard or its folder.
    fn resource_evaluator(
        dashboard: &Dashboard,
        folder_action: &str,
        dashboard_action: &str,
    ) -> Evaluator {
        if dashboard.is_folder() {
            Evaluator::permission(folder_action, &folder_scope(dashboard.id()))
        } else {
            Evaluator::Any(vec![
                Evaluator::permission(dashboard_action, &dashboard_scope(dashboard.id())),
                Evaluator::permission(dashboard_action, &folder_scope(dashboard.folder_id())),
            ])
        }
    }

    /// Both permission read and write actions within `scope`.
    fn permissions_evaluator(read_action: &str, write_action: &str, scope: &str) -> Evaluator {
        Evaluator::All(vec![
            Evaluator::permission(read_action, scope),
            Evaluator::permission(write_action, scope),
        ])
    }

    fn admin_evaluator(dashboard: &Dashboard) -> Evaluator {
        if dashboard.is_folder() {
            Self::permissions_evaluator(
                ACTION_FOLDERS_PERMISSIONS_READ,
                ACTION_FOLDERS_PERMISSIONS_WRITE,
                &folder_scope(dashboard.id()),
            )
        } else {
            Evaluator::Any(vec![
                Self::permissions_evaluator(
                    ACTION_DASHBOARDS_PERMISSIONS_READ,
                    ACTION_DASHBOARDS_PERMISSIONS_WRITE,
                    &dashboard_scope(dashboard.id()),
                ),
                Self::permissions_evaluator(
                    ACTION_DASHBOARDS_PERMISSIONS_READ,
                    ACTION_DASHBOARDS_PERMISSIONS_WRITE,
                    &folder_scope(dashboard.folder_id()),
                ),
            ])
        }
    }

    async fn evaluate_on_resource(
        &self,
        folder_action: &str,
        dashboard_action: &str,
    ) -> Result<bool, GuardianError> {
        let dashboard = self.load_dashboard().await?;
        self.evaluate(Self::resource_evaluator(
            dashboard,
            folder_action,
            dashboard_action,
        ))
        .await
    }

    /// Translate a granted permission into an access control entry.
    fn to_acl_info(
        &self,
        dashboard: &Dashboard,
        service: &dyn ResourcePermissionService,
        permission: &ResourcePermission,
    ) -> DashboardAclInfo {
        let level = self.permission_levels.level(&service.map_actions(permission));
        let mut acl_info = DashboardAclInfo {
            org_id: dashboard.org_id(),
            dashboard_id: dashboard.id(),
            folder_id: dashboard.folder_id(),
            created: permission.created(),
            updated: permission.updated(),
            user_id: 0,
            user_login: String::new(),
            user_email: String::new(),
            team_id: 0,
            team_email: String::new(),
            team: String::new(),
            role: None,
            permission: level,
            permission_name: level.to_string(),
            uid: dashboard.uid().to_owned(),
            title: dashboard.title().to_owned(),
            slug: dashboard.slug().to_owned(),
            is_folder: dashboard.is_folder(),
            url: dashboard.url(&self.root_path),
            inherited: false,
        };
        match permission.subject() {
            PermissionSubject::User {
                user_id,
                login,
                email,
            } => {
                acl_info.user_id = *user_id;
                acl_info.user_login = login.to_owned();
                acl_info.user_email = email.to_owned();
            }
            PermissionSubject::Team {
                team_id,
                name,
                email,
            } => {
                acl_info.team_id = *team_id;
                acl_info.team = name.to_owned();
                acl_info.team_email = email.to_owned();
            }
            PermissionSubject::BuiltInRole(role) => acl_info.role = Some(*role),
        }
        acl_info
    }
}

#[async_trait::async_trait]
impl<'a> DashboardGuardian for AccessControlDashboardGuardian<'a> {
    async fn can_create(&self) -> Result<bool, GuardianError> {
        self.evaluate(Self::create_evaluator()).await
    }

    async fn can_save(&self) -> Result<bool, GuardianError> {
        if self.dashboard_id == 0 {
            return self.can_create().await;
        }
        self.evaluate_on_resource(ACTION_FOLDERS_WRITE, ACTION_DASHBOARDS_WRITE)
            .await
    }

    async fn can_edit(&self) -> Result<bool, GuardianError> {
        self.evaluate_on_resource(ACTION_FOLDERS_EDIT, ACTION_DASHBOARDS_EDIT)
            .await
    }

    async fn can_view(&self) -> Result<bool, GuardianError> {
        self.evaluate_on_resource(ACTION_FOLDERS_READ, ACTION_DASHBOARDS_READ)
            .await
    }

    async fn can_admin(&self) -> Result<bool, GuardianError> {
        let dashboard = self.load_dashboard().await?;
        self.evaluate(Self::admin_evaluator(dashboard)).await
    }

    async fn can_delete(&self) -> Result<bool, GuardianError> {
        self.evaluate_on_resource(ACTION_FOLDERS_DELETE, ACTION_DASHBOARDS_DELETE)
            .await
    }

    async fn check_permission_before_update(
        &self,
        _permission: PermissionLevel,
        _update_permissions: &[DashboardAcl],
    ) -> Result<bool, GuardianError> {
        // Permission changes are authorized by the policy evaluator instead.
        Ok(true)
    }

    async fn get_acl(&self) -> Result<Vec<DashboardAclInfo>, GuardianError> {
        let dashboard = self.load_dashboard().await?;
        let service = self.permission_services.for_kind(dashboard.kind());
        let permissions = service
            .get_permissions(dashboard.org_id(), &dashboard.id().to_string())
            .await?;
        Ok(permissions
            .iter()
            .filter(|permission| permission.is_managed())
            .map(|permission| self.to_acl_info(dashboard, service.as_ref(), permission))
            .collect())
    }

    async fn get_acl_without_duplicates(&self) -> Result<Vec<DashboardAclInfo>, GuardianError> {
        // Nothing is inherited, so there is nothing to deduplicate.
        self.get_acl().await
    }

    async fn get_hidden_acl(&self) -> Result<Vec<DashboardAcl>, GuardianError> {
        Ok(vec![])
    }

    async fn has_permission(&self, _permission: PermissionLevel) -> Result<bool, GuardianError> {
        Ok(false)
    }
}
