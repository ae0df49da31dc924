/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod access;
pub mod endpoints;
pub mod error;

use axum::handler::Handler;
use axum::routing::{MethodRouter, get};
use axum::{Router, middleware};
use http::Method;
use space_core::permission::Operation;
use space_core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

fn public_get<H, T>(
    state: &Arc<ServerState>,
    operation: Operation,
    handler: H,
) -> MethodRouter<Arc<ServerState>>
where
    H: Handler<T, Arc<ServerState>>,
    T: 'static,
{
    get(handler).route_layer(middleware::from_fn_with_state(
        (Arc::clone(state), operation),
        access::enforce_access,
    ))
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS]);

    Router::new()
        .route(
            "/anchor/{anchor}/",
            public_get(&state, Operation::AnchorSettings, endpoints::anchors::get_anchor),
        )
        .route(
            "/workspaces/{slug}/anchor/{anchor}/projects/",
            public_get(
                &state,
                Operation::AnchorProjects,
                endpoints::anchors::get_anchor_projects,
            ),
        )
        .route(
            "/workspaces/{slug}/projects/{project_id}/anchor/",
            public_get(
                &state,
                Operation::ProjectAnchor,
                endpoints::anchors::get_project_anchor,
            ),
        )
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!(address = %server_url, "Listening for public deploy board requests");

    axum::serve(listener, app).await
}
