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

//! Scope derivation.

use guardian_dbp::model::ResourceKind;

/// Join scope parts with `:`. E.g. `["dashboards", "id", "42"]` becomes
/// `dashboards:id:42`.
pub fn scope(parts: &[&str]) -> String {
    parts.join(":")
}

/// Scope of the resource of `kind` identified by `resource_id`.
pub fn resource_scope(kind: ResourceKind, resource_id: &str) -> String {
    scope(&[kind.scope_prefix(), "id", resource_id])
}

/// Scope of the dashboard `dashboard_id`.
pub fn dashboard_scope(dashboard_id: i64) -> String {
    resource_scope(ResourceKind::Dashboard, &dashboard_id.to_string())
}

/// Scope of the folder `folder_id`.
pub fn folder_scope(folder_id: i64) -> String {
    resource_scope(ResourceKind::Folder, &folder_id.to_string())
}

/// Return `true` if a `granted` scope covers the `requested` scope.
///
/// An empty granted scope covers the whole organization. A granted scope
/// ending in `*` covers every scope starting with what precedes the `*`.
pub fn scope_matches(granted: &str, requested: &str) -> bool {
    if granted.is_empty() {
        return true;
    }
    match granted.strip_suffix('*') {
        Some(prefix) => requested.starts_with(prefix),
        None => granted == requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scopes_are_derived_from_kind_and_id() {
        assert_eq!(dashboard_scope(42), "dashboards:id:42");
        assert_eq!(folder_scope(7), "folders:id:7");
        assert_eq!(scope(&["dashboards", "uid", "abc"]), "dashboards:uid:abc");
    }

    #[test]
    fn wildcards_match_prefixes() {
        assert!(scope_matches("dashboards:id:42", "dashboards:id:42"));
        assert!(!scope_matches("dashboards:id:4", "dashboards:id:42"));
        assert!(scope_matches("dashboards:*", "dashboards:id:42"));
        assert!(scope_matches("dashboards:id:*", "dashboards:id:42"));
        assert!(!scope_matches("folders:*", "dashboards:id:42"));
        assert!(scope_matches("*", "folders:id:7"));
    }

    #[test]
    fn empty_grants_cover_the_organization() {
        assert!(scope_matches("", "dashboards:id:42"));
        assert!(scope_matches("", "folders:id:7"));
        assert!(!scope_matches("dashboards:id:42", ""));
    }
}
