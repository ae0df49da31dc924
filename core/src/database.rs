/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use entity::deploy_board::EntityKind;
use migration::Migrator;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveEnum, ColumnTrait, Condition, ConnectOptions, Database, DatabaseConnection, DbErr,
    EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use sea_orm_migration::MigratorTrait;
use std::fmt;
use std::sync::Arc;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::consts::{DATABASE_MIN_CONNECTIONS, DATABASE_TIMEOUT, UNIQUE_LOOKUP_LIMIT};
use super::input::load_secret;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        load_secret(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(cli.max_database_connections)
        .min_connections(DATABASE_MIN_CONNECTIONS.min(cli.max_database_connections))
        .connect_timeout(DATABASE_TIMEOUT)
        .acquire_timeout(DATABASE_TIMEOUT);

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

#[derive(Debug)]
pub enum LookupError {
    NotFound(&'static str),
    /// More than one row matched a lookup that must be unique.
    MultipleResults(&'static str),
    Database(DbErr),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound(resource) => write!(f, "{} not found", resource),
            LookupError::MultipleResults(resource) => {
                write!(f, "{} lookup matched more than one row", resource)
            }
            LookupError::Database(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for LookupError {
    fn from(err: DbErr) -> Self {
        LookupError::Database(err)
    }
}

/// Reduces the rows of a lookup that must be unique to its single row.
pub fn expect_one<T>(rows: Vec<T>, resource: &'static str) -> Result<T, LookupError> {
    let mut rows = rows.into_iter();

    match (rows.next(), rows.next()) {
        (Some(row), None) => Ok(row),
        (None, _) => Err(LookupError::NotFound(resource)),
        (Some(_), Some(_)) => Err(LookupError::MultipleResults(resource)),
    }
}

async fn fetch_unique<E>(
    query: Select<E>,
    db: &DatabaseConnection,
    resource: &'static str,
) -> Result<E::Model, LookupError>
where
    E: EntityTrait,
{
    let rows = query.limit(UNIQUE_LOOKUP_LIMIT).all(db).await?;
    expect_one(rows, resource)
}

pub async fn get_deploy_board_by_anchor(
    state: Arc<ServerState>,
    anchor: &str,
) -> Result<MDeployBoard, LookupError> {
    let query = EDeployBoard::find().filter(CDeployBoard::Anchor.eq(anchor));
    fetch_unique(query, &state.db, "Deploy board").await
}

pub async fn get_project_deploy_board_by_anchor(
    state: Arc<ServerState>,
    anchor: &str,
) -> Result<MDeployBoard, LookupError> {
    let query = EDeployBoard::find().filter(
        Condition::all()
            .add(CDeployBoard::Anchor.eq(anchor))
            .add(CDeployBoard::EntityName.eq(EntityKind::Project)),
    );
    fetch_unique(query, &state.db, "Deploy board").await
}

/// Projects of `workspace` that are published under `anchor`. A project only
/// qualifies when a project deploy board row with this exact anchor points
/// at it.
pub fn public_projects_query(workspace: Uuid, anchor: &str) -> Select<EProject> {
    let is_public = Query::select()
        .expr(Expr::val(1))
        .from(entity::deploy_board::Entity)
        .and_where(Expr::col((entity::deploy_board::Entity, CDeployBoard::Anchor)).eq(anchor))
        .and_where(
            Expr::col((entity::deploy_board::Entity, CDeployBoard::EntityName))
                .eq(EntityKind::Project.to_value()),
        )
        .and_where(
            Expr::col((entity::deploy_board::Entity, CDeployBoard::Project))
                .equals((entity::project::Entity, CProject::Id)),
        )
        .to_owned();

    EProject::find()
        .select_only()
        .columns([
            CProject::Id,
            CProject::Identifier,
            CProject::Name,
            CProject::Description,
            CProject::Emoji,
            CProject::IconProp,
            CProject::CoverImage,
        ])
        .filter(CProject::Workspace.eq(workspace))
        .filter(Expr::exists(is_public))
        .order_by_asc(CProject::Id)
}

pub async fn list_public_projects_for_anchor(
    state: Arc<ServerState>,
    anchor: &str,
) -> Result<PublicProjectList, LookupError> {
    let deploy_board = get_project_deploy_board_by_anchor(Arc::clone(&state), anchor).await?;

    Ok(public_projects_query(deploy_board.workspace, anchor)
        .into_model::<PublicProject>()
        .all(&state.db)
        .await?)
}

pub async fn get_deploy_board_for_workspace_project(
    state: Arc<ServerState>,
    workspace_slug: &str,
    project_id: Uuid,
) -> Result<MDeployBoard, LookupError> {
    let query = EDeployBoard::find()
        .join(JoinType::InnerJoin, RDeployBoard::Workspace.def())
        .filter(
            Condition::all()
                .add(CWorkspace::Slug.eq(workspace_slug))
                .add(CDeployBoard::Project.eq(project_id)),
        );
    fetch_unique(query, &state.db, "Deploy board").await
}
