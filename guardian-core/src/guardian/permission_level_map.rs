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

//! Translation of permission names into levels.

use guardian_dbp::model::PermissionLevel;

/// Immutable lookup table from permission names to [PermissionLevel].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionLevelMap {
    levels: Vec<(String, PermissionLevel)>,
}

impl Default for PermissionLevelMap {
    fn default() -> Self {
        Self::new(&[
            ("View", PermissionLevel::View),
            ("Edit", PermissionLevel::Edit),
            ("Admin", PermissionLevel::Admin),
        ])
    }
}

impl PermissionLevelMap {
    /// Return a new instance.
    pub fn new(levels: &[(&str, PermissionLevel)]) -> Self {
        Self {
            levels: levels
                .iter()
                .map(|(name, level)| (name.to_string(), *level))
                .collect(),
        }
    }

    /// Level of the permission `name` or [PermissionLevel::Unknown].
    pub fn level(&self, name: &str) -> PermissionLevel {
        self.levels
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, level)| *level)
            .unwrap_or(PermissionLevel::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_names_are_unknown() {
        let map = PermissionLevelMap::default();
        assert_eq!(map.level("View"), PermissionLevel::View);
        assert_eq!(map.level("Admin"), PermissionLevel::Admin);
        assert_eq!(map.level("view"), PermissionLevel::Unknown);
        assert_eq!(map.level(""), PermissionLevel::Unknown);
        let custom = PermissionLevelMap::new(&[("Viewer", PermissionLevel::View)]);
        assert_eq!(custom.level("Viewer"), PermissionLevel::View);
        assert_eq!(custom.level("View"), PermissionLevel::Unknown);
    }
}
