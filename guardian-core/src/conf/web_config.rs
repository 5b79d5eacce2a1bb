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

//! Parsing of configuration for how resources are addressed on the web.

use config::ConfigBuilder;
use config::ConfigError;
use config::builder::BuilderState;
use serde::Deserialize;
use serde::Serialize;

use super::AppConfigDefaults;

/// Configuration for how resources are addressed on the web.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WebConfig {
    /// Path prefix when served from a sub path.
    rootpath: String,
}

impl AppConfigDefaults for WebConfig {
    /// Provide defaults for this part of the configuration
    fn set_defaults<T: BuilderState>(
        config_builder: ConfigBuilder<T>,
        prefix: &str,
    ) -> Result<ConfigBuilder<T>, ConfigError> {
        config_builder.set_default(prefix.to_string() + "." + "rootpath", "")
    }
}

impl WebConfig {
    /// Path prefix of resource URLs without trailing slash. Defaults to the
    /// empty string.
    pub fn root_path(&self) -> &str {
        self.rootpath.trim_end_matches('/')
    }
}
