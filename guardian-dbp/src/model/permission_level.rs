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

//! Coarse permission levels shown in access control lists.

use serde::Serialize;
use serde::Serializer;
use std::fmt;

/// Permission level of an access control entry.
///
/// [Self::Unknown] marks a granted set of actions that does not correspond to
/// any of the named levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PermissionLevel {
    /// Unrecognized combination of actions.
    #[default]
    Unknown,
    /// May view.
    View,
    /// May view and change.
    Edit,
    /// May view, change and manage permissions.
    Admin,
}

impl PermissionLevel {
    /// Numeric representation used in serialized access control lists.
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::View => 1,
            Self::Edit => 2,
            Self::Admin => 4,
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => Ok(()),
            Self::View => f.write_str("View"),
            Self::Edit => f.write_str("Edit"),
            Self::Admin => f.write_str("Admin"),
        }
    }
}

impl Serialize for PermissionLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}
