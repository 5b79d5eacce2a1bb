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

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod dbp;
pub mod model {
    //! Dashboard, identity and permission objects.

    pub mod acl {
        //! Access control list objects returned by guardians.

        mod dashboard_acl;
        mod dashboard_acl_info;

        pub use self::dashboard_acl::DashboardAcl;
        pub use self::dashboard_acl_info::DashboardAclInfo;
    }
    mod built_in_role;
    mod dashboard;
    mod permission_level;
    mod resource_permission;
    mod signed_in_user;

    pub use self::built_in_role::BuiltInRole;
    pub use self::dashboard::Dashboard;
    pub use self::dashboard::ResourceKind;
    pub use self::permission_level::PermissionLevel;
    pub use self::resource_permission::Permission;
    pub use self::resource_permission::PermissionSubject;
    pub use self::resource_permission::ResourcePermission;
    pub use self::signed_in_user::SignedInUser;
}
pub mod time;
mod guardian_error;

pub use self::guardian_error::GuardianError;
pub use self::guardian_error::GuardianErrorKind;
