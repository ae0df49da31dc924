/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260105_000000_create_table_workspace;
mod m20260105_000100_create_table_project;
mod m20260105_000200_create_table_deploy_board;
mod m20260112_000000_add_deploy_board_project_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000000_create_table_workspace::Migration),
            Box::new(m20260105_000100_create_table_project::Migration),
            Box::new(m20260105_000200_create_table_deploy_board::Migration),
            Box::new(m20260112_000000_add_deploy_board_project_index::Migration),
        ]
    }
}
