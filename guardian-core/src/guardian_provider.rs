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

//! Wiring of guardians and their collaborators.

use crate::ac::PolicyEvaluator;
use crate::ac::PolicyEvaluatorLocal;
use crate::conf::AppConfig;
use crate::guardian::AccessControlDashboardGuardian;
use crate::resourcepermissions::ResourcePermissionOptions;
use crate::resourcepermissions::ResourcePermissionServiceLocal;
use crate::resourcepermissions::ResourcePermissionServices;
use guardian_dbp::GuardianError;
use guardian_dbp::GuardianErrorKind;
use guardian_dbp::dbp::DatabaseProvider;
use guardian_dbp::dbp::facades::DashboardFacade;
use guardian_dbp::dbp::facades::DatabaseProviderFacades;
use guardian_dbp::model::SignedInUser;
use guardian_dbp_mem::InMemoryDatabaseProvider;
use std::sync::Arc;

/** Guardian provider.

Owns the shared collaborators of guardians and creates a new guardian for
each request.
*/
pub struct GuardianProvider {
    /// The database provider
    dbp: Arc<DatabaseProvider>,
    dashboard_facade: Arc<dyn DashboardFacade>,
    policy_evaluator: Arc<dyn PolicyEvaluator>,
    dashboard_permissions: Arc<ResourcePermissionServiceLocal>,
    folder_permissions: Arc<ResourcePermissionServiceLocal>,
    permission_services: ResourcePermissionServices,
    root_path: String,
}

impl GuardianProvider {
    /// Return a new instance.
    pub async fn new(app_config: &AppConfig) -> Result<Arc<Self>, GuardianError> {
        // Setup persistence from config.
        let dbp = match app_config.backend.implementation() {
            "mem" => {
                let inmem_provider = InMemoryDatabaseProvider::new().await;
                Arc::new(inmem_provider.as_database_provider())
            }
            unknown_provider => {
                return Err(GuardianErrorKind::ConfigurationError.error_with_msg(format!(
                    "Unknown database provider type '{unknown_provider}'."
                )));
            }
        };
        let policy_evaluator = PolicyEvaluatorLocal::new(&dbp);
        let dashboard_permissions =
            ResourcePermissionServiceLocal::new(&dbp, ResourcePermissionOptions::dashboards());
        let folder_permissions =
            ResourcePermissionServiceLocal::new(&dbp, ResourcePermissionOptions::folders());
        let permission_services = ResourcePermissionServices::new(
            Arc::clone(&dashboard_permissions) as _,
            Arc::clone(&folder_permissions) as _,
        );
        log::info!("Guardian dependencies have been created.");
        Ok(Arc::new(Self {
            dashboard_facade: dbp.dashboard_facade(),
            dbp,
            policy_evaluator,
            dashboard_permissions,
            folder_permissions,
            permission_services,
            root_path: app_config.web.root_path().to_owned(),
        }))
    }

    /// The database provider guardians read from.
    pub fn database_provider(&self) -> &Arc<DatabaseProvider> {
        &self.dbp
    }

    /// Service for granting and listing permissions on dashboards.
    pub fn dashboard_permissions(&self) -> &Arc<ResourcePermissionServiceLocal> {
        &self.dashboard_permissions
    }

    /// Service for granting and listing permissions on folders.
    pub fn folder_permissions(&self) -> &Arc<ResourcePermissionServiceLocal> {
        &self.folder_permissions
    }

    /// Return a guardian deciding what `user` may do with the dashboard or
    /// folder `dashboard_id`. Use `0` when the resource is about to be
    /// created.
    pub fn guardian_for<'a>(
        &self,
        user: &'a SignedInUser,
        dashboard_id: i64,
    ) -> AccessControlDashboardGuardian<'a> {
        AccessControlDashboardGuardian::new(
            user,
            dashboard_id,
            &self.dashboard_facade,
            &self.policy_evaluator,
            &self.permission_services,
        )
        .with_root_path(&self.root_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guardian::DashboardGuardian;
    use config::Config;
    use config::File;
    use config::FileFormat;
    use guardian_dbp::model::BuiltInRole;
    use guardian_dbp::model::Dashboard;
    use guardian_dbp::model::Permission;
    use guardian_dbp::model::PermissionLevel;
    use guardian_dbp::model::PermissionSubject;

    fn init_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    async fn seeded_provider() -> Result<Arc<GuardianProvider>, GuardianError> {
        let app_config = AppConfig::from_builder(
            "guardian",
            Config::builder().add_source(File::from_str(
                r#"{ "web": { "rootpath": "/grafana" } }"#,
                FileFormat::Json,
            )),
        )?;
        let provider = GuardianProvider::new(&app_config).await?;
        let dbp = provider.database_provider();
        let dashboards = dbp.dashboard_facade();
        dashboards
            .save_dashboard(Dashboard::new_folder(1, 7, "f7", "Operations"))
            .await?;
        dashboards
            .save_dashboard(Dashboard::new_dashboard(1, 42, "d42", "CPU usage", 7))
            .await?;
        dashboards
            .save_dashboard(Dashboard::new_dashboard(1, 43, "d43", "Costs", 0))
            .await?;
        dbp.access_control_facade()
            .grant_role(
                1,
                "fixed:dashboards:creator",
                &PermissionSubject::BuiltInRole(BuiltInRole::Editor),
                &[Permission::new("dashboards:create", "")],
            )
            .await?;
        provider
            .folder_permissions()
            .set_team_permission(1, "7", 3, "ops", "ops@example.com", "Edit")
            .await?;
        provider
            .dashboard_permissions()
            .set_user_permission(1, "43", 11, "bob", "bob@example.com", "Admin")
            .await?;
        Ok(provider)
    }

    #[tokio::test]
    async fn folder_grants_cascade_to_dashboards() -> Result<(), GuardianError> {
        init_logger();
        let provider = seeded_provider().await?;
        let ops_member = SignedInUser::new(1, 10, "alice", BuiltInRole::Viewer).with_teams(&[3]);
        let in_folder = provider.guardian_for(&ops_member, 42);
        assert!(in_folder.can_view().await?);
        assert!(in_folder.can_edit().await?);
        assert!(in_folder.can_save().await?);
        assert!(!in_folder.can_admin().await?);
        let folder = provider.guardian_for(&ops_member, 7);
        assert!(folder.can_delete().await?);
        assert!(!folder.can_admin().await?);
        let outside = provider.guardian_for(&ops_member, 43);
        assert!(!outside.can_view().await?);
        // Folder editors may create dashboards within their folder.
        assert!(provider.guardian_for(&ops_member, 0).can_save().await?);
        Ok(())
    }

    #[tokio::test]
    async fn managed_grants_are_listed() -> Result<(), GuardianError> {
        init_logger();
        let provider = seeded_provider().await?;
        let bob = SignedInUser::new(1, 11, "bob", BuiltInRole::Viewer);
        let guardian = provider.guardian_for(&bob, 43);
        assert!(guardian.can_admin().await?);
        assert!(!guardian.can_create().await?);
        let acl = guardian.get_acl().await?;
        assert_eq!(acl.len(), 1);
        assert_eq!(acl[0].user_login, "bob");
        assert_eq!(acl[0].permission, PermissionLevel::Admin);
        assert_eq!(acl[0].url, "/grafana/d/d43/costs");
        let folder_acl = provider.guardian_for(&bob, 7).get_acl().await?;
        assert_eq!(folder_acl.len(), 1);
        assert_eq!(folder_acl[0].team, "ops");
        assert_eq!(folder_acl[0].permission, PermissionLevel::Edit);
        let missing = provider.guardian_for(&bob, 99).can_view().await.unwrap_err();
        assert_eq!(missing.kind(), &GuardianErrorKind::DashboardNotFound);
        Ok(())
    }

    #[tokio::test]
    async fn organization_wide_role_grants_apply_to_every_dashboard() -> Result<(), GuardianError> {
        init_logger();
        let provider = seeded_provider().await?;
        provider
            .database_provider()
            .access_control_facade()
            .grant_role(
                1,
                "fixed:dashboards:reader",
                &PermissionSubject::BuiltInRole(BuiltInRole::Viewer),
                &[Permission::new("dashboards:read", "")],
            )
            .await?;
        let viewer = SignedInUser::new(1, 12, "carol", BuiltInRole::Viewer);
        assert!(provider.guardian_for(&viewer, 42).can_view().await?);
        assert!(provider.guardian_for(&viewer, 43).can_view().await?);
        assert!(!provider.guardian_for(&viewer, 42).can_edit().await?);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_grants_for_one_subject_are_stored_once() -> Result<(), GuardianError> {
        init_logger();
        let provider = seeded_provider().await?;
        let bob = SignedInUser::new(1, 11, "bob", BuiltInRole::Viewer);
        for round in 0..50 {
            let permission = if round % 2 == 0 { "View" } else { "Edit" };
            let tasks = (0..8)
                .map(|_| {
                    let provider = Arc::clone(&provider);
                    tokio::spawn(async move {
                        provider
                            .dashboard_permissions()
                            .set_user_permission(1, "42", 10, "alice", "", permission)
                            .await
                    })
                })
                .collect::<Vec<_>>();
            for task in tasks {
                task.await.unwrap()?;
            }
            let acl = provider.guardian_for(&bob, 42).get_acl().await?;
            assert_eq!(acl.len(), 1, "round {round}");
            provider
                .dashboard_permissions()
                .set_user_permission(1, "42", 10, "alice", "", "")
                .await?;
        }
        Ok(())
    }

    #[tokio::test]
    async fn unknown_backends_are_rejected() {
        let app_config = AppConfig::from_builder(
            "guardian",
            Config::builder().add_source(File::from_str(
                r#"{ "backend": { "implementation": "cassandra" } }"#,
                FileFormat::Json,
            )),
        )
        .unwrap();
        let e = GuardianProvider::new(&app_config).await.err().unwrap();
        assert_eq!(e.kind(), &GuardianErrorKind::ConfigurationError);
    }
}
