/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{NaiveDate, NaiveDateTime};
use entity::deploy_board::EntityKind;
use entity::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::json;
use space_core::permission::AccessPolicy;
use space_core::types::*;
use std::sync::Arc;
use uuid::Uuid;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        max_database_connections: 100,
        report_errors: false,
        sentry_dsn: None,
        anchor_settings_access: AccessPolicy::AllowAny,
        anchor_projects_access: AccessPolicy::AllowAny,
        project_anchor_access: AccessPolicy::AllowAny,
    }
}

pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub fn create_server_with(cli: Cli, db: DatabaseConnection) -> TestServer {
    let state = Arc::new(ServerState { db, cli });
    TestServer::new(web::create_router(state)).unwrap()
}

pub fn create_server(db: DatabaseConnection) -> TestServer {
    create_server_with(create_mock_cli(), db)
}

pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn project_board(anchor: &str, workspace: Uuid, project: Uuid) -> deploy_board::Model {
    deploy_board::Model {
        id: Uuid::new_v4(),
        anchor: anchor.to_owned(),
        entity_name: EntityKind::Project,
        entity_identifier: Some(project),
        project: Some(project),
        workspace,
        is_comments_enabled: true,
        is_reactions_enabled: true,
        is_votes_enabled: false,
        is_activity_enabled: true,
        is_disabled: false,
        intake: None,
        view_props: json!({"list": true, "kanban": true}),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn project(workspace: Uuid, identifier: &str) -> project::Model {
    project::Model {
        id: Uuid::new_v4(),
        workspace,
        identifier: identifier.to_owned(),
        name: format!("Project {}", identifier),
        description: "Shared with the public".to_owned(),
        emoji: Some("128640".to_owned()),
        icon_prop: None,
        cover_image: None,
        created_at: fixed_time(),
    }
}
