/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Backs the workspace + project lookup and the public project filter
        manager
            .create_index(
                Index::create()
                    .name("idx-deploy_board-workspace-project")
                    .table(Alias::new("deploy_board"))
                    .col(Alias::new("workspace"))
                    .col(Alias::new("project"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-deploy_board-workspace-project")
                    .table(Alias::new("deploy_board"))
                    .to_owned(),
            )
            .await
    }
}
