#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! The server for the RoleReady admin console. Renders the console on the
//! server, serves the static assets and hosts the server functions.

use anyhow::Context;
use tracing::{Dispatch, Level};
use tracing_subscriber::{
	filter::LevelFilter,
	fmt::{format::FmtSpan, Layer as FmtLayer},
	layer::SubscriberExt,
	prelude::*,
};

/// The application state and the server lifecycle
mod app;
/// All the routes served by the server
mod routes;
/// The utility functions and types used across the crate
mod utils;

/// The prelude module contains all the commonly used types and traits that are
/// used across the crate.
pub mod prelude {
	pub use tracing::{debug, error, info, instrument, trace, warn};

	pub use crate::{app::AppState, utils::*};
}

use prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let config = utils::parse_config().context("unable to parse config")?;

	tracing_log::LogTracer::init().context("unable to forward log records")?;
	tracing::dispatcher::set_global_default(Dispatch::new(
		tracing_subscriber::registry().with(
			FmtLayer::new()
				.with_span_events(FmtSpan::NONE)
				.event_format(
					tracing_subscriber::fmt::format()
						.with_ansi(true)
						.with_file(false)
						.without_time()
						.compact(),
				)
				.with_filter(
					tracing_subscriber::filter::Targets::new()
						.with_target(env!("CARGO_PKG_NAME"), LevelFilter::TRACE)
						.with_target("frontend", LevelFilter::TRACE)
						.with_target("components", LevelFilter::TRACE)
						.with_target("models", LevelFilter::TRACE)
						.with_target("leptos_axum", LevelFilter::INFO),
				)
				.with_filter(LevelFilter::from_level(
					if config.environment == RunningEnvironment::Development {
						Level::TRACE
					} else {
						Level::DEBUG
					},
				)),
		),
	))
	.context("unable to set global default subscriber")?;

	info!(
		"Configuration read. Running environment set to {}",
		config.environment
	);

	app::start_server(config).await
}
