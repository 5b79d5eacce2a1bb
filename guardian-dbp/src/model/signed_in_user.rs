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

//! Authenticated caller.

use super::BuiltInRole;
use std::fmt;

/// An authenticated user acting within one organization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedInUser {
    org_id: i64,
    user_id: i64,
    login: String,
    org_role: BuiltInRole,
    teams: Vec<i64>,
}

impl fmt::Display for SignedInUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user;{};{};{}", self.org_id, self.user_id, self.login)
    }
}

impl SignedInUser {
    /// Return a new instance without any team memberships.
    pub fn new(org_id: i64, user_id: i64, login: &str, org_role: BuiltInRole) -> Self {
        Self {
            org_id,
            user_id,
            login: login.to_owned(),
            org_role,
            teams: vec![],
        }
    }

    /// Return this instance with the team memberships replaced.
    pub fn with_teams(mut self, teams: &[i64]) -> Self {
        self.teams = teams.to_vec();
        self
    }

    /// Organization the user is signed in to.
    pub fn org_id(&self) -> i64 {
        self.org_id
    }

    /// Numeric user identifier.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Role held in the organization.
    pub fn org_role(&self) -> BuiltInRole {
        self.org_role
    }

    /// Identifiers of the teams the user is a member of.
    pub fn teams(&self) -> &[i64] {
        &self.teams
    }
}
