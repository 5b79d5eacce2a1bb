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

//! Granted permissions as stored by the persistence backend.

use super::BuiltInRole;
use super::SignedInUser;

/// Prefix of role names that hold explicitly granted resource permissions.
const MANAGED_ROLE_PREFIX: &str = "managed:";

/// An action allowed within a scope.
///
/// An empty scope means the action is granted for the whole organization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permission {
    action: String,
    scope: String,
}

impl Permission {
    /// Return a new instance.
    pub fn new(action: &str, scope: &str) -> Self {
        Self {
            action: action.to_owned(),
            scope: scope.to_owned(),
        }
    }

    /// Allowed action. E.g. `dashboards:read`.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Scope the action is allowed within. E.g. `dashboards:id:42`.
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

/// Who a permission was granted to.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PermissionSubject {
    /// A single user.
    User {
        /// User identifier.
        user_id: i64,
        /// User login.
        login: String,
        /// User email address.
        email: String,
    },
    /// All members of a team.
    Team {
        /// Team identifier.
        team_id: i64,
        /// Team name.
        name: String,
        /// Team email address.
        email: String,
    },
    /// Every user holding the role (or a role that includes it).
    BuiltInRole(BuiltInRole),
}

impl PermissionSubject {
    /// Return `true` if permissions granted to this subject apply to `user`.
    pub fn applies_to(&self, user: &SignedInUser) -> bool {
        match self {
            Self::User { user_id, .. } => *user_id == user.user_id(),
            Self::Team { team_id, .. } => user.teams().contains(team_id),
            Self::BuiltInRole(role) => user.org_role().includes(role),
        }
    }

    /// Name of the role that holds the explicitly granted resource
    /// permissions of this subject.
    pub fn managed_role_name(&self) -> String {
        match self {
            Self::User { user_id, .. } => {
                format!("{MANAGED_ROLE_PREFIX}users:{user_id}:permissions")
            }
            Self::Team { team_id, .. } => {
                format!("{MANAGED_ROLE_PREFIX}teams:{team_id}:permissions")
            }
            Self::BuiltInRole(role) => format!(
                "{MANAGED_ROLE_PREFIX}builtins:{}:permissions",
                role.as_str().to_lowercase()
            ),
        }
    }
}

/// Set of actions granted to one subject on one scope through a role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePermission {
    id: i64,
    role_name: String,
    actions: Vec<String>,
    scope: String,
    subject: PermissionSubject,
    created: u64,
    updated: u64,
}

impl ResourcePermission {
    /// Return a new instance. Timestamps are in epoch microseconds.
    pub fn new(
        id: i64,
        role_name: &str,
        actions: Vec<String>,
        scope: &str,
        subject: PermissionSubject,
        created: u64,
        updated: u64,
    ) -> Self {
        Self {
            id,
            role_name: role_name.to_owned(),
            actions,
            scope: scope.to_owned(),
            subject,
            created,
            updated,
        }
    }

    /// Storage identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Name of the role the actions were granted through.
    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    /// Granted actions.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Scope the actions are granted within.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Who the actions were granted to.
    pub fn subject(&self) -> &PermissionSubject {
        &self.subject
    }

    /// Time of creation in epoch microseconds.
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Time of last change in epoch microseconds.
    pub fn updated(&self) -> u64 {
        self.updated
    }

    /// Return `true` if the permission was explicitly granted on the resource
    /// as opposed to being part of a fixed or inherited role.
    pub fn is_managed(&self) -> bool {
        self.role_name.starts_with(MANAGED_ROLE_PREFIX)
    }

    /// Expand into one [Permission] per action.
    pub fn to_permissions(&self) -> impl Iterator<Item = Permission> + '_ {
        self.actions
            .iter()
            .map(|action| Permission::new(action, &self.scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managed_role_names_are_recognized() {
        let team = PermissionSubject::Team {
            team_id: 3,
            name: "ops".to_string(),
            email: String::new(),
        };
        let managed = ResourcePermission::new(
            1,
            &team.managed_role_name(),
            vec!["dashboards:read".to_string()],
            "dashboards:id:42",
            team,
            0,
            0,
        );
        assert_eq!(managed.role_name(), "managed:teams:3:permissions");
        assert!(managed.is_managed());
        let fixed = ResourcePermission::new(
            2,
            "fixed:dashboards:creator",
            vec!["dashboards:create".to_string()],
            "",
            PermissionSubject::BuiltInRole(BuiltInRole::Editor),
            0,
            0,
        );
        assert!(!fixed.is_managed());
        assert_eq!(
            fixed.to_permissions().collect::<Vec<_>>(),
            vec![Permission::new("dashboards:create", "")]
        );
    }

    #[test]
    fn subjects_apply_through_teams_and_roles() {
        let user = SignedInUser::new(1, 10, "alice", BuiltInRole::Editor).with_teams(&[3]);
        let same_user = PermissionSubject::User {
            user_id: 10,
            login: "alice".to_string(),
            email: String::new(),
        };
        assert!(same_user.applies_to(&user));
        assert!(
            PermissionSubject::Team {
                team_id: 3,
                name: "ops".to_string(),
                email: String::new()
            }
            .applies_to(&user)
        );
        assert!(PermissionSubject::BuiltInRole(BuiltInRole::Viewer).applies_to(&user));
        assert!(!PermissionSubject::BuiltInRole(BuiltInRole::Admin).applies_to(&user));
    }
}
