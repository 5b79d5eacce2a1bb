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

//! Ephemeral in-memory specific database code.

mod inmem_access_control_facade;
mod inmem_dashboard_facade;

pub use self::inmem_access_control_facade::*;
pub use self::inmem_dashboard_facade::*;
use super::InMemoryDatabaseProvider;
use guardian_dbp::dbp::facades::*;
use std::sync::Arc;

/// Ephemeral in-memory specific database code.
pub struct InMemProviderFacades {
    access_control_facade: Arc<InMemAccessControlFacade>,
    dashboard_facade: Arc<InMemDashboardFacade>,
}

impl InMemProviderFacades {
    /// Return a new instance.
    pub fn new(inmem_provider: &Arc<InMemoryDatabaseProvider>) -> Self {
        Self {
            access_control_facade: Arc::new(InMemAccessControlFacade::new(inmem_provider)),
            dashboard_facade: Arc::new(InMemDashboardFacade::new(inmem_provider)),
        }
    }
}

impl DatabaseProviderFacades for InMemProviderFacades {
    fn access_control_facade(&self) -> Arc<dyn AccessControlFacade> {
        Arc::clone(&self.access_control_facade) as Arc<dyn AccessControlFacade>
    }

    fn dashboard_facade(&self) -> Arc<dyn DashboardFacade> {
        Arc::clone(&self.dashboard_facade) as Arc<dyn DashboardFacade>
    }
}
