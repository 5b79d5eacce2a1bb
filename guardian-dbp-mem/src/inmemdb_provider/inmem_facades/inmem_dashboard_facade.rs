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

//! Ephemeral in-memory implementation of [DashboardFacade].

use crate::InMemoryDatabaseProvider;
use guardian_dbp::GuardianError;
use guardian_dbp::GuardianErrorKind;
use guardian_dbp::dbp::facades::DashboardFacade;
use guardian_dbp::model::Dashboard;
use std::sync::Arc;

/// Ephemeral in-memory implementation of [DashboardFacade].
pub struct InMemDashboardFacade {
    inmem_provider: Arc<InMemoryDatabaseProvider>,
}

impl InMemDashboardFacade {
    /// Return a new instance.
    pub fn new(inmem_provider: &Arc<InMemoryDatabaseProvider>) -> Self {
        Self {
            inmem_provider: Arc::clone(inmem_provider),
        }
    }
}

#[async_trait::async_trait]
impl DashboardFacade for InMemDashboardFacade {
    async fn get_dashboard(
        &self,
        dashboard_id: i64,
        org_id: i64,
    ) -> Result<Dashboard, GuardianError> {
        self.inmem_provider
            .dashboards
            .get(&(org_id, dashboard_id))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                GuardianErrorKind::DashboardNotFound.error_with_msg(format!(
                    "No dashboard or folder with id {dashboard_id} in organization {org_id}."
                ))
            })
    }

    async fn save_dashboard(&self, dashboard: Dashboard) -> Result<(), GuardianError> {
        if dashboard.id() == 0 {
            return Err(GuardianErrorKind::StorageFailure
                .error_with_msg("Dashboard identifier 0 is reserved for new dashboards."));
        }
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "Saving '{}' with id {} in organization {}.",
                dashboard.title(),
                dashboard.id(),
                dashboard.org_id()
            );
        }
        self.inmem_provider
            .dashboards
            .insert((dashboard.org_id(), dashboard.id()), dashboard);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardian_dbp::dbp::facades::DatabaseProviderFacades;

    #[tokio::test]
    async fn dashboards_are_scoped_by_organization() -> Result<(), GuardianError> {
        let dbp = InMemoryDatabaseProvider::new().await.as_database_provider();
        let facade = dbp.dashboard_facade();
        facade
            .save_dashboard(Dashboard::new_dashboard(1, 42, "d42", "CPU", 7))
            .await?;
        assert_eq!(facade.get_dashboard(42, 1).await?.folder_id(), 7);
        let not_found = facade.get_dashboard(42, 2).await.unwrap_err();
        assert_eq!(not_found.kind(), &GuardianErrorKind::DashboardNotFound);
        let reserved = facade
            .save_dashboard(Dashboard::new_folder(1, 0, "f0", "New"))
            .await
            .unwrap_err();
        assert_eq!(reserved.kind(), &GuardianErrorKind::StorageFailure);
        Ok(())
    }
}
