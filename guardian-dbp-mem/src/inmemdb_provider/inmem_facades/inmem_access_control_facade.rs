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

//! Ephemeral in-memory implementation of [AccessControlFacade].

use crate::InMemoryDatabaseProvider;
use crate::inmemdb_provider::PermissionKey;
use guardian_dbp::GuardianError;
use guardian_dbp::dbp::facades::AccessControlFacade;
use guardian_dbp::model::Permission;
use guardian_dbp::model::PermissionSubject;
use guardian_dbp::model::ResourcePermission;
use guardian_dbp::model::SignedInUser;
use guardian_dbp::time::get_timestamp_micros;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Ephemeral in-memory implementation of [AccessControlFacade].
pub struct InMemAccessControlFacade {
    inmem_provider: Arc<InMemoryDatabaseProvider>,
}

impl InMemAccessControlFacade {
    /// Return a new instance.
    pub fn new(inmem_provider: &Arc<InMemoryDatabaseProvider>) -> Self {
        Self {
            inmem_provider: Arc::clone(inmem_provider),
        }
    }

    /// Store `actions` for the role, subject and scope. Existing identifier
    /// and creation time are retained when the entry already exists.
    fn upsert<F>(
        &self,
        org_id: i64,
        role_name: &str,
        subject: &PermissionSubject,
        scope: &str,
        actions: F,
    ) -> ResourcePermission
    where
        F: Fn(Option<&ResourcePermission>) -> Vec<String>,
    {
        let key = PermissionKey::new(org_id, role_name, subject, scope);
        self.inmem_provider.upsert_permission(key, |existing| {
            let now = get_timestamp_micros();
            let (id, created) = existing
                .map(|existing| (existing.id(), existing.created()))
                .unwrap_or_else(|| (self.inmem_provider.next_permission_id(), now));
            ResourcePermission::new(
                id,
                role_name,
                actions(existing),
                scope,
                subject.clone(),
                created,
                now,
            )
        })
    }
}

#[async_trait::async_trait]
impl AccessControlFacade for InMemAccessControlFacade {
    async fn get_resource_permissions(
        &self,
        org_id: i64,
        scope: &str,
    ) -> Result<Vec<ResourcePermission>, GuardianError> {
        let mut permissions = self
            .inmem_provider
            .permissions
            .iter()
            .filter(|entry| entry.value().org_id == org_id)
            .map(|entry| entry.value().permission.clone())
            .filter(|permission| permission.scope() == scope)
            .collect::<Vec<_>>();
        // Oldest grant first.
        permissions.sort_by_key(ResourcePermission::id);
        Ok(permissions)
    }

    async fn get_user_permissions(
        &self,
        user: &SignedInUser,
    ) -> Result<Vec<Permission>, GuardianError> {
        let permissions = self
            .inmem_provider
            .permissions
            .iter()
            .filter(|entry| entry.value().org_id == user.org_id())
            .filter(|entry| entry.value().permission.subject().applies_to(user))
            .flat_map(|entry| {
                entry
                    .value()
                    .permission
                    .to_permissions()
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "Found {} permissions for '{user}'.",
                permissions.len()
            );
        }
        Ok(permissions)
    }

    async fn set_resource_permission(
        &self,
        org_id: i64,
        subject: &PermissionSubject,
        scope: &str,
        actions: &[String],
    ) -> Result<Option<ResourcePermission>, GuardianError> {
        let role_name = subject.managed_role_name();
        if actions.is_empty() {
            let key = PermissionKey::new(org_id, &role_name, subject, scope);
            if self.inmem_provider.remove_permission(&key) {
                log::debug!("Removed '{role_name}' grant on '{scope}'.");
            }
            return Ok(None);
        }
        let actions = actions
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        Ok(Some(self.upsert(org_id, &role_name, subject, scope, |_| {
            actions.clone()
        })))
    }

    async fn grant_role(
        &self,
        org_id: i64,
        role_name: &str,
        subject: &PermissionSubject,
        permissions: &[Permission],
    ) -> Result<(), GuardianError> {
        let scopes = permissions
            .iter()
            .map(Permission::scope)
            .collect::<BTreeSet<_>>();
        for scope in scopes {
            self.upsert(org_id, role_name, subject, scope, |existing| {
                existing
                    .iter()
                    .flat_map(|existing| existing.actions().iter().map(String::as_str))
                    .chain(
                        permissions
                            .iter()
                            .filter(|permission| permission.scope() == scope)
                            .map(Permission::action),
                    )
                    .map(str::to_owned)
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            });
        }
        log::debug!("Granted {} permissions through '{role_name}'.", permissions.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_dbp::dbp::facades::DatabaseProviderFacades;
    use guardian_dbp::model::BuiltInRole;

    fn user_subject(user_id: i64) -> PermissionSubject {
        PermissionSubject::User {
            user_id,
            login: format!("user{user_id}"),
            email: format!("user{user_id}@example.com"),
        }
    }

    #[tokio::test]
    async fn managed_grants_are_replaced_and_removed() -> Result<(), GuardianError> {
        let dbp = InMemoryDatabaseProvider::new().await.as_database_provider();
        let facade = dbp.access_control_facade();
        let subject = user_subject(10);
        let first = facade
            .set_resource_permission(
                1,
                &subject,
                "dashboards:id:42",
                &["dashboards:read".to_string()],
            )
            .await?
            .unwrap();
        let second = facade
            .set_resource_permission(
                1,
                &subject,
                "dashboards:id:42",
                &["dashboards:write".to_string(), "dashboards:read".to_string()],
            )
            .await?
            .unwrap();
        assert_eq!(first.id(), second.id());
        assert_eq!(first.created(), second.created());
        assert_eq!(second.actions(), ["dashboards:read", "dashboards:write"]);
        let listed = facade.get_resource_permissions(1, "dashboards:id:42").await?;
        assert_eq!(listed, vec![second]);
        assert!(
            facade
                .get_resource_permissions(2, "dashboards:id:42")
                .await?
                .is_empty()
        );
        let removed = facade
            .set_resource_permission(1, &subject, "dashboards:id:42", &[])
            .await?;
        assert!(removed.is_none());
        assert!(
            facade
                .get_resource_permissions(1, "dashboards:id:42")
                .await?
                .is_empty()
        );
        Ok(())
    }

    #[tokio::test]
    async fn user_permissions_include_roles_and_teams() -> Result<(), GuardianError> {
        let dbp = InMemoryDatabaseProvider::new().await.as_database_provider();
        let facade = dbp.access_control_facade();
        facade
            .grant_role(
                1,
                "fixed:dashboards:creator",
                &PermissionSubject::BuiltInRole(BuiltInRole::Editor),
                &[Permission::new("dashboards:create", "")],
            )
            .await?;
        facade
            .set_resource_permission(
                1,
                &PermissionSubject::Team {
                    team_id: 3,
                    name: "ops".to_string(),
                    email: String::new(),
                },
                "folders:id:7",
                &["folders:read".to_string()],
            )
            .await?;
        facade
            .set_resource_permission(
                1,
                &user_subject(11),
                "dashboards:id:1",
                &["dashboards:read".to_string()],
            )
            .await?;
        let editor = SignedInUser::new(1, 10, "user10", BuiltInRole::Editor).with_teams(&[3]);
        let mut permissions = facade.get_user_permissions(&editor).await?;
        permissions.sort_by(|a, b| a.action().cmp(b.action()));
        assert_eq!(
            permissions,
            vec![
                Permission::new("dashboards:create", ""),
                Permission::new("folders:read", "folders:id:7"),
            ]
        );
        let viewer = SignedInUser::new(1, 12, "user12", BuiltInRole::Viewer);
        assert!(facade.get_user_permissions(&viewer).await?.is_empty());
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writes_keep_one_entry_per_subject_and_scope() -> Result<(), GuardianError>
    {
        let dbp = InMemoryDatabaseProvider::new().await.as_database_provider();
        let facade = dbp.access_control_facade();
        for round in 0..50 {
            let tasks = (0..8)
                .map(|i| {
                    let facade = Arc::clone(&facade);
                    tokio::spawn(async move {
                        let action = format!("dashboards:action{i}");
                        facade
                            .set_resource_permission(
                                1,
                                &user_subject(10),
                                "dashboards:id:42",
                                &[action.clone()],
                            )
                            .await?;
                        facade
                            .grant_role(
                                1,
                                "fixed:dashboards:reader",
                                &PermissionSubject::BuiltInRole(BuiltInRole::Viewer),
                                &[Permission::new(&action, "dashboards:id:42")],
                            )
                            .await
                    })
                })
                .collect::<Vec<_>>();
            for task in tasks {
                task.await.unwrap()?;
            }
            let listed = facade.get_resource_permissions(1, "dashboards:id:42").await?;
            assert_eq!(listed.len(), 2, "round {round}");
            let role_grant = listed
                .iter()
                .find(|permission| permission.role_name() == "fixed:dashboards:reader")
                .unwrap();
            // Role grants merge, so no concurrent write may be lost.
            assert_eq!(role_grant.actions().len(), 8, "round {round}");
            facade
                .set_resource_permission(1, &user_subject(10), "dashboards:id:42", &[])
                .await?;
            assert_eq!(
                facade
                    .get_resource_permissions(1, "dashboards:id:42")
                    .await?
                    .len(),
                1
            );
        }
        Ok(())
    }
}
