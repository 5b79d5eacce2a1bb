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

//! Policy evaluator interface.

use super::Evaluator;
use guardian_dbp::GuardianError;
use guardian_dbp::model::SignedInUser;

/// The policy evaluator is responsible for finding out if a [SignedInUser]
/// satisfies an [Evaluator] expression.
#[async_trait::async_trait]
pub trait PolicyEvaluator: Sync + Send {
    /// Return `true` if the `user` satisfies the `evaluator`.
    ///
    /// An error means that no decision could be reached, which is different
    /// from a denial.
    async fn evaluate(
        &self,
        user: &SignedInUser,
        evaluator: Evaluator,
    ) -> Result<bool, GuardianError>;
}
