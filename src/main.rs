// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use formwright::config::parse_config;
	use formwright::database::{connect_db, run_embedded_migrations};
	use formwright::web::server::run_server;
	use std::sync::Arc;
	use tracing_subscriber::EnvFilter;

	let config = Arc::new(parse_config("config.kdl").await?);

	let log_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
	tracing_subscriber::fmt().with_env_filter(log_filter).init();

	let db_connection_pool = connect_db(&config)?;
	run_embedded_migrations(&db_connection_pool)?;

	run_server(config, db_connection_pool).await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The binary only does anything when built with the server; the client side starts from `hydrate`.
}
