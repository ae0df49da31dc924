/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::{Path, State};
use space_core::database::{
    get_deploy_board_by_anchor, get_deploy_board_for_workspace_project,
    list_public_projects_for_anchor,
};
use space_core::input::parse_project_id;
use space_core::types::*;
use std::sync::Arc;

pub async fn get_anchor(
    state: State<Arc<ServerState>>,
    Path(anchor): Path<String>,
) -> WebResult<Json<DeployBoardSettings>> {
    let deploy_board = get_deploy_board_by_anchor(state.0.clone(), &anchor).await?;

    Ok(Json(deploy_board.into()))
}

/// The workspace slug is part of the route only; the workspace is taken from
/// the deploy board behind the anchor.
pub async fn get_anchor_projects(
    state: State<Arc<ServerState>>,
    Path((_workspace, anchor)): Path<(String, String)>,
) -> WebResult<Json<PublicProjectList>> {
    let projects = list_public_projects_for_anchor(state.0.clone(), &anchor).await?;

    Ok(Json(projects))
}

pub async fn get_project_anchor(
    state: State<Arc<ServerState>>,
    Path((workspace, project)): Path<(String, String)>,
) -> WebResult<Json<DeployBoardSettings>> {
    let project_id =
        parse_project_id(&project).ok_or_else(|| WebError::not_found("Deploy board"))?;

    let deploy_board =
        get_deploy_board_for_workspace_project(state.0.clone(), &workspace, project_id).await?;

    Ok(Json(deploy_board.into()))
}
