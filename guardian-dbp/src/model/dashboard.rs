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

//! Dashboard and folder metadata.

use serde::Serialize;

/// Distinguishes the two kinds of resources a guardian protects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    /// A folder holding dashboards.
    Folder,
    /// A dashboard, possibly inside a folder.
    Dashboard,
}

impl ResourceKind {
    /// The first part of scopes that identify a resource of this kind.
    pub fn scope_prefix(&self) -> &'static str {
        match self {
            Self::Folder => "folders",
            Self::Dashboard => "dashboards",
        }
    }
}

/// Metadata of a dashboard or a folder.
///
/// Dashboards in the root ("General") folder and all folders have a
/// `folder_id` of `0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    id: i64,
    uid: String,
    org_id: i64,
    folder_id: i64,
    is_folder: bool,
    title: String,
    slug: String,
}

impl Dashboard {
    /// Return a new dashboard placed in the folder `folder_id`.
    pub fn new_dashboard(org_id: i64, id: i64, uid: &str, title: &str, folder_id: i64) -> Self {
        Self {
            id,
            uid: uid.to_owned(),
            org_id,
            folder_id,
            is_folder: false,
            title: title.to_owned(),
            slug: Self::slugify(title),
        }
    }

    /// Return a new folder.
    pub fn new_folder(org_id: i64, id: i64, uid: &str, title: &str) -> Self {
        Self {
            id,
            uid: uid.to_owned(),
            org_id,
            folder_id: 0,
            is_folder: true,
            title: title.to_owned(),
            slug: Self::slugify(title),
        }
    }

    /// Numeric identifier, unique within the organization.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Unique external identifier.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Organization the resource belongs to.
    pub fn org_id(&self) -> i64 {
        self.org_id
    }

    /// Identifier of the parent folder.
    pub fn folder_id(&self) -> i64 {
        self.folder_id
    }

    /// Return `true` if this is a folder.
    pub fn is_folder(&self) -> bool {
        self.is_folder
    }

    /// Kind of resource.
    pub fn kind(&self) -> ResourceKind {
        if self.is_folder {
            ResourceKind::Folder
        } else {
            ResourceKind::Dashboard
        }
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// URL friendly version of the title.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Relative URL of the resource below the application's `root_path`.
    pub fn url(&self, root_path: &str) -> String {
        let root_path = root_path.trim_end_matches('/');
        match self.kind() {
            ResourceKind::Folder => format!("{root_path}/dashboards/f/{}/{}", self.uid, self.slug),
            ResourceKind::Dashboard => format!("{root_path}/d/{}/{}", self.uid, self.slug),
        }
    }

    /// Lower case the title and collapse every run of other characters than
    /// ASCII alphanumerics into a single `-`.
    fn slugify(title: &str) -> String {
        title
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_depends_on_kind() {
        let folder = Dashboard::new_folder(1, 7, "f7", "Team Ops");
        assert_eq!(folder.kind(), ResourceKind::Folder);
        assert_eq!(folder.folder_id(), 0);
        assert_eq!(folder.url(""), "/dashboards/f/f7/team-ops");
        let dashboard = Dashboard::new_dashboard(1, 42, "d42", "  CPU / Memory usage!", 7);
        assert_eq!(dashboard.kind(), ResourceKind::Dashboard);
        assert_eq!(dashboard.slug(), "cpu-memory-usage");
        assert_eq!(dashboard.url("/grafana/"), "/grafana/d/d42/cpu-memory-usage");
    }
}
