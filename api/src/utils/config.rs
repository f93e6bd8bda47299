use std::{
	env,
	fmt::{Display, Formatter},
	net::SocketAddr,
	path::Path,
};

use config::{Config, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The address the server listens on, unless configured otherwise
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Reads the configuration of the server. Debug builds always run in the
/// development environment, release builds read the environment from
/// `APP_ENV` and default to production.
#[instrument]
pub fn parse_config() -> Result<AppConfig, ConfigError> {
	trace!("Reading config data...");

	let env = if cfg!(debug_assertions) {
		"dev".to_string()
	} else {
		env::var("APP_ENV").unwrap_or_else(|_| "prod".into())
	};

	config_for(&env)
}

/// Builds the configuration for the given environment name, reading the
/// files in `config/` and the `APP_*` environment variables
fn config_for(env: &str) -> Result<AppConfig, ConfigError> {
	load_config(Path::new("config"), env, None)
}

/// Builds the configuration for the given environment name. Values are read
/// from `<config_dir>/<env>.toml` (if present), then overridden by `APP_*`
/// variables, e.g. `APP_BIND_ADDR`. The variables are taken from `overrides`
/// if given, otherwise from the process environment.
fn load_config(
	config_dir: &Path,
	env: &str,
	overrides: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
	let (file, environment) = match env {
		"prod" | "production" => ("prod", "production"),
		"dev" | "development" => ("dev", "development"),
		_ => {
			return Err(ConfigError::Message(format!(
				"Unknown running environment `{env}`"
			)));
		}
	};

	Config::builder()
		.set_default("bind_addr", DEFAULT_BIND_ADDR)?
		.set_default("environment", environment)?
		.add_source(File::with_name(&config_dir.join(file).to_string_lossy()).required(false))
		.add_source(
			Environment::with_prefix("APP")
				.prefix_separator("_")
				.separator("__")
				.source(overrides),
		)
		.build()?
		.try_deserialize()
}

/// The configuration of the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
	/// The address to listen for connections on
	pub bind_addr: SocketAddr,
	/// The environment the server is running in
	pub environment: RunningEnvironment,
}

/// The environment the server runs in. Decides how verbose the logs are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunningEnvironment {
	/// Running locally, with verbose logs
	Development,
	/// Running in production
	Production,
}

impl Display for RunningEnvironment {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			formatter,
			"{}",
			match self {
				RunningEnvironment::Development => "Development",
				RunningEnvironment::Production => "Production",
			}
		)
	}
}
