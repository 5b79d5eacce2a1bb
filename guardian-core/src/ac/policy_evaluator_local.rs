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

//! Built-in policy evaluator.

use super::Evaluator;
use super::PolicyEvaluator;
use guardian_dbp::GuardianError;
use guardian_dbp::dbp::DatabaseProvider;
use guardian_dbp::dbp::facades::AccessControlFacade;
use guardian_dbp::dbp::facades::DatabaseProviderFacades;
use guardian_dbp::model::SignedInUser;
use std::collections::HashMap;
use std::sync::Arc;

/// Built-in [PolicyEvaluator] implementation using app persistence.
///
/// The effective permissions of a user are all permissions granted to the
/// user, to any team the user is a member of, or to the user's organization
/// role or a lower role.
pub struct PolicyEvaluatorLocal {
    access_control_facade: Arc<dyn AccessControlFacade>,
}

impl PolicyEvaluatorLocal {
    /// Return a new instance.
    pub fn new(dbp: &Arc<DatabaseProvider>) -> Arc<Self> {
        Arc::new(Self {
            access_control_facade: dbp.access_control_facade(),
        })
    }

    /// Granted scopes by action for the `user`.
    async fn granted_scopes_by_action(
        &self,
        user: &SignedInUser,
    ) -> Result<HashMap<String, Vec<String>>, GuardianError> {
        let mut ret = HashMap::<String, Vec<String>>::new();
        for permission in self.access_control_facade.get_user_permissions(user).await? {
            ret.entry(permission.action().to_owned())
                .or_default()
                .push(permission.scope().to_owned());
        }
        Ok(ret)
    }
}

#[async_trait::async_trait]
impl PolicyEvaluator for PolicyEvaluatorLocal {
    async fn evaluate(
        &self,
        user: &SignedInUser,
        evaluator: Evaluator,
    ) -> Result<bool, GuardianError> {
        let granted = self.granted_scopes_by_action(user).await?;
        let decision = evaluator.evaluate(&granted);
        if log::log_enabled!(log::Level::Trace) {
            let outcome = if decision { "Granted" } else { "Denied" };
            log::trace!("{outcome} '{user}' {evaluator}.");
        }
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ac::ACTION_DASHBOARDS_READ;
    use crate::ac::dashboard_scope;
    use crate::ac::folder_scope;
    use guardian_dbp::model::BuiltInRole;
    use guardian_dbp::model::Permission;
    use guardian_dbp::model::PermissionSubject;
    use guardian_dbp_mem::InMemoryDatabaseProvider;

    fn init_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    #[tokio::test]
    async fn evaluates_against_stored_grants() -> Result<(), GuardianError> {
        init_logger();
        let dbp = Arc::new(InMemoryDatabaseProvider::new().await.as_database_provider());
        dbp.access_control_facade()
            .grant_role(
                1,
                "fixed:dashboards:reader",
                &PermissionSubject::BuiltInRole(BuiltInRole::Viewer),
                &[Permission::new(ACTION_DASHBOARDS_READ, "folders:id:7")],
            )
            .await?;
        let policy_evaluator = PolicyEvaluatorLocal::new(&dbp);
        let in_folder = Evaluator::Any(vec![
            Evaluator::permission(ACTION_DASHBOARDS_READ, &dashboard_scope(42)),
            Evaluator::permission(ACTION_DASHBOARDS_READ, &folder_scope(7)),
        ]);
        let editor = SignedInUser::new(1, 10, "editor", BuiltInRole::Editor);
        assert!(policy_evaluator.evaluate(&editor, in_folder.clone()).await?);
        let other_org = SignedInUser::new(2, 10, "editor", BuiltInRole::Editor);
        assert!(!policy_evaluator.evaluate(&other_org, in_folder).await?);
        let elsewhere = Evaluator::permission(ACTION_DASHBOARDS_READ, &dashboard_scope(43));
        assert!(!policy_evaluator.evaluate(&editor, elsewhere).await?);
        Ok(())
    }

    #[tokio::test]
    async fn organization_wide_grants_cover_every_resource() -> Result<(), GuardianError> {
        init_logger();
        let dbp = Arc::new(InMemoryDatabaseProvider::new().await.as_database_provider());
        dbp.access_control_facade()
            .grant_role(
                1,
                "fixed:dashboards:reader",
                &PermissionSubject::BuiltInRole(BuiltInRole::Viewer),
                &[Permission::new(ACTION_DASHBOARDS_READ, "")],
            )
            .await?;
        let policy_evaluator = PolicyEvaluatorLocal::new(&dbp);
        let viewer = SignedInUser::new(1, 10, "viewer", BuiltInRole::Viewer);
        let on_dashboard = Evaluator::permission(ACTION_DASHBOARDS_READ, &dashboard_scope(42));
        assert!(policy_evaluator.evaluate(&viewer, on_dashboard.clone()).await?);
        let on_folder = Evaluator::permission(ACTION_DASHBOARDS_READ, &folder_scope(7));
        assert!(policy_evaluator.evaluate(&viewer, on_folder).await?);
        let other_org = SignedInUser::new(2, 10, "viewer", BuiltInRole::Viewer);
        assert!(!policy_evaluator.evaluate(&other_org, on_dashboard).await?);
        Ok(())
    }
}
