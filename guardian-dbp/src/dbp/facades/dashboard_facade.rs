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

//! Database facade for dashboard and folder metadata.

use crate::GuardianError;
use crate::model::Dashboard;

/// Database facade for dashboard and folder metadata.
#[async_trait::async_trait]
pub trait DashboardFacade: Send + Sync {
    /// Return the dashboard or folder `dashboard_id` in the organization
    /// `org_id`.
    ///
    /// Fails with [crate::GuardianErrorKind::DashboardNotFound] when there is
    /// no such resource.
    async fn get_dashboard(&self, dashboard_id: i64, org_id: i64)
    -> Result<Dashboard, GuardianError>;

    /// Insert or replace the dashboard or folder.
    async fn save_dashboard(&self, dashboard: Dashboard) -> Result<(), GuardianError>;
}
