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

//! Ephemeral in-memory implementation of [DatabaseProvider].

mod inmem_facades;

use self::inmem_facades::InMemProviderFacades;
use crossbeam_skiplist::SkipMap;
use guardian_dbp::dbp::DatabaseProvider;
use guardian_dbp::model::Dashboard;
use guardian_dbp::model::PermissionSubject;
use guardian_dbp::model::ResourcePermission;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Identity of a granted permission. There is at most one entry per role,
/// subject and scope in an organization.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct PermissionKey {
    org_id: i64,
    role_name: String,
    subject: PermissionSubject,
    scope: String,
}

impl PermissionKey {
    fn new(org_id: i64, role_name: &str, subject: &PermissionSubject, scope: &str) -> Self {
        Self {
            org_id,
            role_name: role_name.to_owned(),
            subject: subject.clone(),
            scope: scope.to_owned(),
        }
    }
}

/// A granted permission and the write that stored it.
struct InMemPermission {
    org_id: i64,
    revision: u64,
    permission: ResourcePermission,
}

/// Ephemeral in-memory implementation of [DatabaseProvider].
pub struct InMemoryDatabaseProvider {
    /// Dashboards and folders by organization and identifier.
    dashboards: SkipMap<(i64, i64), Dashboard>,
    /// Granted permissions by organization, role, subject and scope.
    permissions: SkipMap<PermissionKey, InMemPermission>,
    permission_id_sequence: AtomicI64,
    revision_sequence: AtomicU64,
}

impl InMemoryDatabaseProvider {
    /// Return a new instance.
    pub async fn new() -> Arc<Self> {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("Using in-mem db provider.");
        }
        Arc::new(Self {
            dashboards: SkipMap::default(),
            permissions: SkipMap::default(),
            permission_id_sequence: AtomicI64::new(1),
            revision_sequence: AtomicU64::new(1),
        })
    }

    /// Get [DatabaseProvider] instance.
    pub fn as_database_provider(self: &Arc<Self>) -> DatabaseProvider {
        DatabaseProvider::new(Arc::new(InMemProviderFacades::new(self)))
    }

    /// Allocate an identifier for a new permission.
    fn next_permission_id(&self) -> i64 {
        self.permission_id_sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Replace the permission stored under `key` with the one `update`
    /// derives from it.
    ///
    /// The replacement only happens if no other write to the same key got
    /// there first. Otherwise `update` is applied again to the newer entry.
    fn upsert_permission<F>(&self, key: PermissionKey, update: F) -> ResourcePermission
    where
        F: Fn(Option<&ResourcePermission>) -> ResourcePermission,
    {
        loop {
            let current = self.permissions.get(&key);
            let current_revision = current.as_ref().map(|entry| entry.value().revision);
            let permission = update(current.as_ref().map(|entry| &entry.value().permission));
            let revision = self.revision_sequence.fetch_add(1, Ordering::Relaxed);
            let stored = self.permissions.compare_insert(
                key.clone(),
                InMemPermission {
                    org_id: key.org_id,
                    revision,
                    permission: permission.clone(),
                },
                |existing| Some(existing.revision) == current_revision,
            );
            if stored.value().revision == revision {
                return permission;
            }
            if log::log_enabled!(log::Level::Trace) {
                log::trace!(
                    "Concurrent write to '{}' grant of {:?} on '{}'. Retrying.",
                    key.role_name,
                    key.subject,
                    key.scope
                );
            }
        }
    }

    /// Remove the permission stored under `key`.
    fn remove_permission(&self, key: &PermissionKey) -> bool {
        self.permissions.remove(key).is_some()
    }
}
