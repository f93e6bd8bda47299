use axum::{
	body::Body,
	extract::State,
	http::{Request, StatusCode},
	response::{IntoResponse, Response as AxumResponse},
	routing::post,
	Router,
};
use leptos::LeptosOptions;
use leptos_axum::LeptosRoutes;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::prelude::*;

/// Sets up the routes of the console: the server rendered pages, the server
/// functions, and the static assets as a fallback
#[instrument(skip(state))]
pub fn setup_routes(state: &AppState) -> Router {
	let routes = leptos_axum::generate_route_list(frontend::render);
	debug!("Serving {} page routes", routes.len());

	Router::new()
		.route(
			"/api/*fn_name",
			post(leptos_axum::handle_server_fns).get(leptos_axum::handle_server_fns),
		)
		.leptos_routes(state, routes, frontend::render)
		.fallback(serve_file)
		.with_state(state.clone())
}

/// Serves a file from the site root. If there is no such file, the app is
/// rendered instead, where the router falls back to the not found page.
async fn serve_file(State(options): State<LeptosOptions>, req: Request<Body>) -> AxumResponse {
	let file_request = match Request::builder()
		.uri(req.uri().clone())
		.body(Body::empty())
	{
		Ok(file_request) => file_request,
		Err(err) => {
			error!("Unable to build file request for {}: {}", req.uri(), err);
			return StatusCode::INTERNAL_SERVER_ERROR.into_response();
		}
	};

	let response = match ServeDir::new(&*options.site_root)
		.oneshot(file_request)
		.await
	{
		Ok(response) => response.into_response(),
		Err(err) => match err {},
	};

	if response.status() != StatusCode::NOT_FOUND {
		trace!("File found: {}", req.uri());
		return response;
	}

	debug!("File not found: {}", req.uri());
	let render = leptos_axum::render_app_to_stream(options, frontend::render);
	let mut response = render(req).await.into_response();
	*response.status_mut() = StatusCode::NOT_FOUND;
	response
}
