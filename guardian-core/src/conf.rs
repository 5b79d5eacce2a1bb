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

//! Parsing of application configuration.

mod backend_config;
mod web_config;

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use config::builder::BuilderState;
use config::builder::DefaultState;
use guardian_dbp::GuardianError;
use guardian_dbp::GuardianErrorKind;
use serde::Deserialize;
use serde::Serialize;

pub use self::backend_config::BackendConfig;
pub use self::web_config::WebConfig;

/// Package name reported by Cargo at build time.
const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Static trait for tracking implementations.
trait AppConfigDefaults {
    fn set_defaults<T: BuilderState>(
        config_builder: ConfigBuilder<T>,
        prefix: &str,
    ) -> Result<ConfigBuilder<T>, ConfigError>;
}

/**
Application configration root.

The application name defaults to the Rust package name, but can be overridden
with the environment variable `APP_NAME`.

Configuration will be loaded from

1. the file `{application name}.json` in the current working directory.
2. environment variable overrides in the form
   `{APPLICATION_NAME}_MODULE_CONFIGKEYWITHOUTSPACES`
 */
#[derive(Debug, Deserialize, Serialize)]
pub struct AppConfig {
    /// Configuration for persistence backend.
    pub backend: BackendConfig,
    /// Configuration of how resources are addressed on the web.
    pub web: WebConfig,

    /// Lower case application name. Ignored when loading configuration.
    #[serde(skip_deserializing)]
    app_name: String,
}

impl AppConfig {
    /// The application name defaults to the Rust package name, but can be
    /// overridden with the environment variable `APP_NAME`.
    fn read_app_name_lowercase(cargo_pkg_name: &str) -> String {
        std::env::var("APP_NAME")
            .map_err(|e| {
                log::debug!(
                    "Environment variable APP_NAME: {e:?} -> Default app name '{cargo_pkg_name}' will be used."
                );
            })
            .ok()
            .map(|value| value.to_lowercase())
            .unwrap_or(cargo_pkg_name.to_owned())
    }

    /// Lower case application name.
    pub fn app_name_lowercase(&self) -> &str {
        &self.app_name
    }

    /** Creates a new instance pre-populated with defaults, an optional
    configurations file and environment variable overrides.

    Use `env!("CARGO_PKG_NAME")` as `cargo_pkg_name`.
    */
    pub fn new(cargo_pkg_name: &str) -> Result<Self, GuardianError> {
        let app_name = Self::read_app_name_lowercase(cargo_pkg_name);
        let config_filename = app_name.to_owned() + ".json";
        let config_env_prefix = &app_name.to_uppercase();
        let conf_file = std::env::current_dir()
            .map_err(|e| {
                GuardianErrorKind::ConfigurationError
                    .error_with_msg(format!("Unable to resolve working directory: {e}"))
            })?
            .join(config_filename);
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Will load '{}' configuration if present.",
                conf_file.display()
            );
        }
        let config_builder = Config::builder()
            .add_source(File::from(conf_file).required(false))
            .add_source(
                Environment::with_prefix(config_env_prefix)
                    .separator("_")
                    .list_separator(","),
            );
        Self::from_builder(&app_name, config_builder)
    }

    /// Apply defaults to the sources of the `config_builder` and deserialize
    /// the result.
    pub fn from_builder(
        app_name: &str,
        config_builder: ConfigBuilder<DefaultState>,
    ) -> Result<Self, GuardianError> {
        let mut app_config: AppConfig = Self::with_defaults(config_builder)
            .and_then(ConfigBuilder::<DefaultState>::build)
            .and_then(Config::try_deserialize)
            .map_err(|e| {
                GuardianErrorKind::ConfigurationError
                    .error_with_msg(format!("Unable to load configuration: {e}"))
            })?;
        app_config.app_name = app_name.to_owned();
        log::info!("Running with configuration: {app_config:?}");
        if log::log_enabled!(log::Level::Trace) {
            log::trace!(
                "Running with configuration: {}",
                serde_json::to_string(&app_config).unwrap_or_default()
            );
        }
        Ok(app_config)
    }

    fn with_defaults(
        config_builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let config_builder = BackendConfig::set_defaults(config_builder, "backend")?;
        WebConfig::set_defaults(config_builder, "web")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            web: WebConfig::default(),
            app_name: CARGO_PKG_NAME.to_owned(),
        }
    }
}
