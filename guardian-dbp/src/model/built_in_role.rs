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

//! Organization roles every signed in user holds.

use serde::Serialize;
use std::fmt;

/// Built-in organization role.
///
/// Roles are ordered so that a higher role includes every lower role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BuiltInRole {
    /// Read only access.
    Viewer,
    /// May create and change content.
    Editor,
    /// Organization administrator.
    Admin,
}

impl BuiltInRole {
    /// Return the role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "Viewer",
            Self::Editor => "Editor",
            Self::Admin => "Admin",
        }
    }

    /// Return `true` if holding this role implies holding `other`.
    pub fn includes(&self, other: &BuiltInRole) -> bool {
        self >= other
    }
}

impl fmt::Display for BuiltInRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_roles_include_lower() {
        assert!(BuiltInRole::Admin.includes(&BuiltInRole::Viewer));
        assert!(BuiltInRole::Editor.includes(&BuiltInRole::Editor));
        assert!(!BuiltInRole::Viewer.includes(&BuiltInRole::Editor));
        assert_eq!(BuiltInRole::Editor.to_string(), "Editor");
    }
}
