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

//! Guardian errors.

use std::error::Error;
use std::fmt;

/// Cause of error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardianErrorKind {
    /// General failure. See message for details.
    Unspecified,
    /// The requested dashboard or folder does not exist in the organization.
    DashboardNotFound,
    /// The persistence backend failed.
    StorageFailure,
    /// The policy evaluator was unable to reach a decision.
    EvaluationFailure,
    /// Listing of granted permissions failed.
    ListingFailure,
    /// Unknown permission name. E.g. something other than `View`, `Edit` or
    /// `Admin`.
    InvalidPermission,
    /// Invalid application configuration.
    ConfigurationError,
}

impl GuardianErrorKind {
    /// Create a new instance with an error message.
    pub fn error_with_msg<S: AsRef<str>>(self, msg: S) -> GuardianError {
        GuardianError {
            kind: self,
            msg: Some(msg.as_ref().to_string()),
        }
    }

    /// Create a new instance without an error message.
    pub fn error(self) -> GuardianError {
        GuardianError {
            kind: self,
            msg: None,
        }
    }
}

impl fmt::Display for GuardianErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/** Guardian error.

Create a new instance via [GuardianErrorKind].
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardianError {
    kind: GuardianErrorKind,
    msg: Option<String>,
}

impl GuardianError {
    /// Return the type of error.
    pub fn kind(&self) -> &GuardianErrorKind {
        &self.kind
    }
}

impl fmt::Display for GuardianError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(msg) = &self.msg {
            write!(f, "{} {}", self.kind, msg)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl AsRef<GuardianError> for GuardianError {
    fn as_ref(&self) -> &GuardianError {
        self
    }
}

impl Error for GuardianError {}
