use anyhow::Context;
use axum::extract::FromRef;
use leptos::LeptosOptions;
use tokio::net::TcpListener;

use crate::{prelude::*, routes};

/// The state shared by every route of the server
#[derive(Clone)]
pub struct AppState {
	/// The configuration the server was started with
	pub config: AppConfig,
	/// The leptos site options, such as the site root and the output name
	pub leptos_options: LeptosOptions,
}

impl FromRef<AppState> for LeptosOptions {
	fn from_ref(state: &AppState) -> Self {
		state.leptos_options.clone()
	}
}

/// Starts the server, and runs it until a shutdown signal is received
#[instrument(skip(config))]
pub async fn start_server(config: AppConfig) -> anyhow::Result<()> {
	let leptos_options = leptos::get_configuration(None)
		.await
		.context("unable to read leptos configuration")?
		.leptos_options;
	let state = AppState {
		config,
		leptos_options,
	};

	let bind_addr = state.config.bind_addr;
	let router = routes::setup_routes(&state);
	let listener = TcpListener::bind(bind_addr)
		.await
		.with_context(|| format!("unable to listen on {bind_addr}"))?;

	info!("Listening for connections on {}", bind_addr);
	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown_signal())
		.await
		.context("error running server")?;
	info!("Server stopped");

	Ok(())
}

/// Resolves once the process is asked to stop
async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		error!("Unable to listen for the shutdown signal: {}", err);
		std::future::pending::<()>().await;
	}
	info!("Shutdown signal received");
}
