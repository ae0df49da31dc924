/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebError;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use space_core::permission::Operation;
use space_core::types::ServerState;
use std::sync::Arc;

/// Applies the configured access policy of `operation` before the handler
/// runs.
pub async fn enforce_access(
    State((state, operation)): State<(Arc<ServerState>, Operation)>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let policy = state.cli.access_policy(operation);

    if !policy.permits() {
        tracing::debug!(%operation, ?policy, "Rejected request to disabled operation");
        return Err(WebError::operation_disabled());
    }

    Ok(next.run(req).await)
}
