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

//! Built-in resource permission service.

use super::ResourcePermissionOptions;
use super::ResourcePermissionService;
use crate::ac::resource_scope;
use guardian_dbp::GuardianError;
use guardian_dbp::GuardianErrorKind;
use guardian_dbp::dbp::DatabaseProvider;
use guardian_dbp::dbp::facades::AccessControlFacade;
use guardian_dbp::dbp::facades::DatabaseProviderFacades;
use guardian_dbp::model::BuiltInRole;
use guardian_dbp::model::PermissionSubject;
use guardian_dbp::model::ResourcePermission;
use std::sync::Arc;

/// Built-in [ResourcePermissionService] implementation using app persistence.
pub struct ResourcePermissionServiceLocal {
    access_control_facade: Arc<dyn AccessControlFacade>,
    options: ResourcePermissionOptions,
}

impl ResourcePermissionServiceLocal {
    /// Return a new instance.
    pub fn new(dbp: &Arc<DatabaseProvider>, options: ResourcePermissionOptions) -> Arc<Self> {
        Arc::new(Self {
            access_control_facade: dbp.access_control_facade(),
            options,
        })
    }

    /// Grant the named `permission` on the resource to the `subject`,
    /// replacing any previously granted permission. An empty `permission`
    /// revokes the grant.
    pub async fn set_permission(
        &self,
        org_id: i64,
        resource_id: &str,
        subject: &PermissionSubject,
        permission: &str,
    ) -> Result<Option<ResourcePermission>, GuardianError> {
        let actions: &[String] = if permission.is_empty() {
            &[]
        } else {
            self.options.actions_for(permission).ok_or_else(|| {
                GuardianErrorKind::InvalidPermission.error_with_msg(format!(
                    "'{permission}' is not a {:?} permission.",
                    self.options.resource()
                ))
            })?
        };
        let scope = resource_scope(self.options.resource(), resource_id);
        log::debug!(
            "Setting permission '{permission}' on '{scope}' for '{}'.",
            subject.managed_role_name()
        );
        self.access_control_facade
            .set_resource_permission(org_id, subject, &scope, actions)
            .await
    }

    /// See [Self::set_permission].
    pub async fn set_user_permission(
        &self,
        org_id: i64,
        resource_id: &str,
        user_id: i64,
        login: &str,
        email: &str,
        permission: &str,
    ) -> Result<Option<ResourcePermission>, GuardianError> {
        let subject = PermissionSubject::User {
            user_id,
            login: login.to_owned(),
            email: email.to_owned(),
        };
        self.set_permission(org_id, resource_id, &subject, permission)
            .await
    }

    /// See [Self::set_permission].
    pub async fn set_team_permission(
        &self,
        org_id: i64,
        resource_id: &str,
        team_id: i64,
        name: &str,
        email: &str,
        permission: &str,
    ) -> Result<Option<ResourcePermission>, GuardianError> {
        let subject = PermissionSubject::Team {
            team_id,
            name: name.to_owned(),
            email: email.to_owned(),
        };
        self.set_permission(org_id, resource_id, &subject, permission)
            .await
    }

    /// See [Self::set_permission].
    pub async fn set_built_in_role_permission(
        &self,
        org_id: i64,
        resource_id: &str,
        role: BuiltInRole,
        permission: &str,
    ) -> Result<Option<ResourcePermission>, GuardianError> {
        self.set_permission(
            org_id,
            resource_id,
            &PermissionSubject::BuiltInRole(role),
            permission,
        )
        .await
    }
}

#[async_trait::async_trait]
impl ResourcePermissionService for ResourcePermissionServiceLocal {
    async fn get_permissions(
        &self,
        org_id: i64,
        resource_id: &str,
    ) -> Result<Vec<ResourcePermission>, GuardianError> {
        let scope = resource_scope(self.options.resource(), resource_id);
        self.access_control_facade
            .get_resource_permissions(org_id, &scope)
            .await
            .map_err(|e| {
                GuardianErrorKind::ListingFailure
                    .error_with_msg(format!("Unable to list permissions on '{scope}': {e}"))
            })
    }

    fn map_actions(&self, permission: &ResourcePermission) -> String {
        self.options
            .permission_for(permission.actions())
            .unwrap_or_default()
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_dbp::dbp::facades::DashboardFacade;
    use guardian_dbp::model::Dashboard;
    use guardian_dbp::model::Permission;
    use guardian_dbp::model::SignedInUser;
    use guardian_dbp_mem::InMemoryDatabaseProvider;

    /// Storage where every access fails.
    struct UnavailableStorage;

    #[async_trait::async_trait]
    impl AccessControlFacade for UnavailableStorage {
        async fn get_resource_permissions(
            &self,
            _org_id: i64,
            _scope: &str,
        ) -> Result<Vec<ResourcePermission>, GuardianError> {
            Err(GuardianErrorKind::StorageFailure.error_with_msg("unavailable"))
        }

        async fn get_user_permissions(
            &self,
            _user: &SignedInUser,
        ) -> Result<Vec<Permission>, GuardianError> {
            unimplemented!()
        }

        async fn set_resource_permission(
            &self,
            _org_id: i64,
            _subject: &PermissionSubject,
            _scope: &str,
            _actions: &[String],
        ) -> Result<Option<ResourcePermission>, GuardianError> {
            unimplemented!()
        }

        async fn grant_role(
            &self,
            _org_id: i64,
            _role_name: &str,
            _subject: &PermissionSubject,
            _permissions: &[Permission],
        ) -> Result<(), GuardianError> {
            unimplemented!()
        }
    }

    #[async_trait::async_trait]
    impl DashboardFacade for UnavailableStorage {
        async fn get_dashboard(
            &self,
            _dashboard_id: i64,
            _org_id: i64,
        ) -> Result<Dashboard, GuardianError> {
            unimplemented!()
        }

        async fn save_dashboard(&self, _dashboard: Dashboard) -> Result<(), GuardianError> {
            unimplemented!()
        }
    }

    struct UnavailableFacades(Arc<UnavailableStorage>);

    impl DatabaseProviderFacades for UnavailableFacades {
        fn access_control_facade(&self) -> Arc<dyn AccessControlFacade> {
            Arc::clone(&self.0) as Arc<dyn AccessControlFacade>
        }

        fn dashboard_facade(&self) -> Arc<dyn DashboardFacade> {
            Arc::clone(&self.0) as Arc<dyn DashboardFacade>
        }
    }

    #[tokio::test]
    async fn storage_failures_are_listing_failures() {
        let dbp = Arc::new(DatabaseProvider::new(Arc::new(UnavailableFacades(Arc::new(
            UnavailableStorage,
        )))));
        let dashboards =
            ResourcePermissionServiceLocal::new(&dbp, ResourcePermissionOptions::dashboards());
        let e = dashboards.get_permissions(1, "42").await.unwrap_err();
        assert_eq!(e.kind(), &GuardianErrorKind::ListingFailure);
        assert!(e.to_string().contains("dashboards:id:42"));
    }

    #[tokio::test]
    async fn granted_permissions_map_back_to_names() -> Result<(), GuardianError> {
        let dbp = Arc::new(InMemoryDatabaseProvider::new().await.as_database_provider());
        let folders =
            ResourcePermissionServiceLocal::new(&dbp, ResourcePermissionOptions::folders());
        folders
            .set_user_permission(1, "7", 10, "alice", "alice@example.com", "Edit")
            .await?;
        folders
            .set_built_in_role_permission(1, "7", BuiltInRole::Viewer, "View")
            .await?;
        dbp.access_control_facade()
            .grant_role(
                1,
                "custom:folder:auditor",
                &PermissionSubject::BuiltInRole(BuiltInRole::Viewer),
                &[Permission::new("folders.permissions:read", "folders:id:7")],
            )
            .await?;
        let permissions = folders.get_permissions(1, "7").await?;
        let names = permissions
            .iter()
            .map(|permission| (permission.is_managed(), folders.map_actions(permission)))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                (true, "Edit".to_string()),
                (true, "View".to_string()),
                (false, String::new()),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_permission_names_are_rejected() -> Result<(), GuardianError> {
        let dbp = Arc::new(InMemoryDatabaseProvider::new().await.as_database_provider());
        let dashboards =
            ResourcePermissionServiceLocal::new(&dbp, ResourcePermissionOptions::dashboards());
        let e = dashboards
            .set_team_permission(1, "42", 3, "ops", "", "Owner")
            .await
            .unwrap_err();
        assert_eq!(e.kind(), &GuardianErrorKind::InvalidPermission);
        dashboards
            .set_team_permission(1, "42", 3, "ops", "", "Admin")
            .await?;
        assert_eq!(dashboards.get_permissions(1, "42").await?.len(), 1);
        let revoked = dashboards
            .set_team_permission(1, "42", 3, "ops", "", "")
            .await?;
        assert!(revoked.is_none());
        assert!(dashboards.get_permissions(1, "42").await?.is_empty());
        Ok(())
    }
}
