// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Serves the support app until the server fails.
pub async fn run_server(config: &ConfigData) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let leptos_options = web_config.leptos_options;
	let routes = generate_route_list(App);

	let app_state = AppState { leptos_options };

	let app = Router::new()
		.leptos_routes_with_context(
			&app_state,
			routes,
			{
				let app_state = app_state.clone();
				move || provide_context(app_state.clone())
			},
			{
				let leptos_options = app_state.leptos_options.clone();
				move || shell(leptos_options.clone())
			},
		)
		.fallback(static_file_or_app)
		.layer(TraceLayer::new_for_http())
		.with_state(app_state);

	let site_addr = &config.web.bind_addr;
	tracing::info!("Listening on http://{}", site_addr);
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	let serve_result = axum::serve(listener, app.into_make_service()).await.into_diagnostic();
	if let Err(error) = &serve_result {
		tracing::error!(source = ?error, "Web server failed to run");
	}
	serve_result
}

/// Serves a file from the site root, or renders the app (and so its not-found page) when there's no such file.
async fn static_file_or_app(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	let site_root = state.leptos_options.site_root.clone();
	let file_response = match serve_site_file(uri, &site_root).await {
		Ok(response) => response,
		Err(status) => return status.into_response(),
	};

	if file_response.status() == StatusCode::OK {
		return file_response;
	}

	let render_app = render_app_to_stream(App);
	render_app(request).await.into_response()
}

async fn serve_site_file(uri: Uri, site_root: &str) -> Result<Response, StatusCode> {
	let file_request = Request::builder()
		.uri(uri)
		.body(Body::empty())
		.map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

	ServeDir::new(site_root)
		.oneshot(file_request)
		.await
		.map(IntoResponse::into_response)
		.map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
