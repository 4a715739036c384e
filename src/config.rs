// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knus::Decode;
use miette::{IntoDiagnostic, Result};
use tokio::fs::read_to_string;

const DEFAULT_LOG_FILTER: &str = "info";

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(config_path, &config_file_contents)
}

/// Parses the contents of a KDL configuration file. The file name is only used in error reports.
pub fn parse_config_document(file_name: &str, contents: &str) -> Result<ConfigData> {
	let config = knus::parse(file_name, contents)?;
	Ok(config)
}

#[derive(Debug, Decode)]
pub struct ConfigData {
	#[knus(child)]
	pub database: DatabaseConfig,
	#[knus(child)]
	pub web: WebConfig,
	/// Default tracing filter directives; `RUST_LOG` takes precedence when set
	#[knus(child, unwrap(argument), default = DEFAULT_LOG_FILTER.to_string())]
	pub log_filter: String,
}

#[derive(Debug, Decode)]
pub struct DatabaseConfig {
	#[knus(child, unwrap(argument))]
	pub host: String,
	#[knus(child, unwrap(argument), default)]
	pub port: Option<u16>,
	#[knus(child, unwrap(argument))]
	pub username: String,
	#[knus(child, unwrap(argument))]
	pub password: String,
	#[knus(child, unwrap(argument))]
	pub database: String,
}

#[derive(Debug, Decode)]
pub struct WebConfig {
	/// The address and port on which the web server listens
	#[knus(child, unwrap(argument))]
	pub bind_addr: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	const FULL_CONFIG: &str = r#"
database {
	host "db.internal"
	port 5433
	username "formwright"
	password "hunter2"
	database "forms"
}
web {
	bind_addr "0.0.0.0:8080"
}
log_filter "debug"
"#;

	#[test]
	fn parses_full_config() {
		let config = parse_config_document("config.kdl", FULL_CONFIG).unwrap();

		assert_eq!(config.database.host, "db.internal");
		assert_eq!(config.database.port, Some(5433));
		assert_eq!(config.database.username, "formwright");
		assert_eq!(config.database.password, "hunter2");
		assert_eq!(config.database.database, "forms");
		assert_eq!(config.web.bind_addr, "0.0.0.0:8080");
		assert_eq!(config.log_filter, "debug");
	}

	#[test]
	fn optional_values_have_defaults() {
		let config = parse_config_document(
			"config.kdl",
			r#"
database {
	host "localhost"
	username "formwright"
	password "hunter2"
	database "forms"
}
web {
	bind_addr "127.0.0.1:3000"
}
"#,
		)
		.unwrap();

		assert_eq!(config.database.port, None);
		assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
	}

	#[test]
	fn missing_values_are_errors() {
		assert!(parse_config_document("config.kdl", r#"database { host "localhost"; }"#).is_err());
		assert!(
			parse_config_document(
				"config.kdl",
				r#"database { host "h"; username "u"; password "p"; database "d"; }"#,
			)
			.is_err()
		);
	}

	#[test]
	fn port_must_fit() {
		let config = FULL_CONFIG.replace("5433", "70000");
		assert!(parse_config_document("config.kdl", &config).is_err());
	}
}
