/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use super::permission::AccessPolicy;
use chrono::NaiveDateTime;
use clap::Parser;
use entity::deploy_board::EntityKind;
use entity::*;
use sea_orm::{DatabaseConnection, FromQueryResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "Space", display_name = "Space", bin_name = "space-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "SPACE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "SPACE_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "SPACE_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "SPACE_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "SPACE_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "SPACE_MAX_DATABASE_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "100")]
    pub max_database_connections: u32,
    #[arg(long, env = "SPACE_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "SPACE_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
    #[arg(long, env = "SPACE_ANCHOR_SETTINGS_ACCESS", value_enum, default_value_t = AccessPolicy::AllowAny)]
    pub anchor_settings_access: AccessPolicy,
    #[arg(long, env = "SPACE_ANCHOR_PROJECTS_ACCESS", value_enum, default_value_t = AccessPolicy::AllowAny)]
    pub anchor_projects_access: AccessPolicy,
    #[arg(long, env = "SPACE_PROJECT_ANCHOR_ACCESS", value_enum, default_value_t = AccessPolicy::AllowAny)]
    pub project_anchor_access: AccessPolicy,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

/// Public projection of a deploy board, shared by every endpoint that
/// returns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployBoardSettings {
    pub id: Uuid,
    pub anchor: String,
    pub entity_name: EntityKind,
    pub entity_identifier: Option<Uuid>,
    pub project: Option<Uuid>,
    pub workspace: Uuid,
    pub is_comments_enabled: bool,
    pub is_reactions_enabled: bool,
    pub is_votes_enabled: bool,
    pub is_activity_enabled: bool,
    pub is_disabled: bool,
    pub intake: Option<Uuid>,
    pub view_props: Value,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<MDeployBoard> for DeployBoardSettings {
    fn from(board: MDeployBoard) -> Self {
        DeployBoardSettings {
            id: board.id,
            anchor: board.anchor,
            entity_name: board.entity_name,
            entity_identifier: board.entity_identifier,
            project: board.project,
            workspace: board.workspace,
            is_comments_enabled: board.is_comments_enabled,
            is_reactions_enabled: board.is_reactions_enabled,
            is_votes_enabled: board.is_votes_enabled,
            is_activity_enabled: board.is_activity_enabled,
            is_disabled: board.is_disabled,
            intake: board.intake,
            view_props: board.view_props,
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct PublicProject {
    pub id: Uuid,
    pub identifier: String,
    pub name: String,
    pub description: String,
    pub emoji: Option<String>,
    pub icon_prop: Option<Value>,
    pub cover_image: Option<String>,
}

pub type PublicProjectList = Vec<PublicProject>;

pub type EDeployBoard = deploy_board::Entity;
pub type EProject = project::Entity;
pub type EWorkspace = workspace::Entity;

pub type MDeployBoard = deploy_board::Model;
pub type MProject = project::Model;
pub type MWorkspace = workspace::Model;

pub type ADeployBoard = deploy_board::ActiveModel;
pub type AProject = project::ActiveModel;
pub type AWorkspace = workspace::ActiveModel;

pub type CDeployBoard = deploy_board::Column;
pub type CProject = project::Column;
pub type CWorkspace = workspace::Column;

pub type RDeployBoard = deploy_board::Relation;
pub type RProject = project::Relation;
pub type RWorkspace = workspace::Relation;
