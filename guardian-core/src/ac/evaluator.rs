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

//! Boolean permission expressions.

use super::scope_matches;
use std::collections::HashMap;
use std::fmt;

/// A boolean expression over (action, scope) permission checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluator {
    /// Satisfied when the action is granted within the scope.
    ///
    /// Without a scope the action only has to be granted somewhere.
    Permission {
        /// Required action.
        action: String,
        /// Required scope.
        scope: Option<String>,
    },
    /// Satisfied when every child is satisfied.
    All(Vec<Evaluator>),
    /// Satisfied when at least one child is satisfied.
    Any(Vec<Evaluator>),
}

impl Evaluator {
    /// Require `action` within `scope`.
    pub fn permission(action: &str, scope: &str) -> Self {
        Self::Permission {
            action: action.to_owned(),
            scope: Some(scope.to_owned()),
        }
    }

    /// Require `action` without a resource scope.
    pub fn unscoped(action: &str) -> Self {
        Self::Permission {
            action: action.to_owned(),
            scope: None,
        }
    }

    /// Evaluate against the granted scopes by action.
    pub fn evaluate(&self, granted: &HashMap<String, Vec<String>>) -> bool {
        match self {
            Self::Permission { action, scope } => {
                granted
                    .get(action)
                    .is_some_and(|granted_scopes| match scope {
                        None => true,
                        Some(scope) => granted_scopes
                            .iter()
                            .any(|granted_scope| scope_matches(granted_scope, scope)),
                    })
            }
            Self::All(evaluators) => evaluators.iter().all(|e| e.evaluate(granted)),
            Self::Any(evaluators) => evaluators.iter().any(|e| e.evaluate(granted)),
        }
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permission {
                action,
                scope: Some(scope),
            } => write!(f, "{action} on {scope}"),
            Self::Permission {
                action,
                scope: None,
            } => write!(f, "{action}"),
            Self::All(evaluators) => write_list(f, "all", evaluators),
            Self::Any(evaluators) => write_list(f, "any", evaluators),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, name: &str, evaluators: &[Evaluator]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, evaluator) in evaluators.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{evaluator}")?;
    }
    f.write_str(")")
}
