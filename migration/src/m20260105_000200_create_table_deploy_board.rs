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
        manager
            .create_table(
                Table::create()
                    .table(DeployBoard::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeployBoard::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DeployBoard::Anchor)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(DeployBoard::EntityName)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DeployBoard::EntityIdentifier).uuid())
                    .col(ColumnDef::new(DeployBoard::Project).uuid())
                    .col(ColumnDef::new(DeployBoard::Workspace).uuid().not_null())
                    .col(
                        ColumnDef::new(DeployBoard::IsCommentsEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DeployBoard::IsReactionsEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DeployBoard::IsVotesEnabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(DeployBoard::IsActivityEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(DeployBoard::IsDisabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(DeployBoard::Intake).uuid())
                    .col(
                        ColumnDef::new(DeployBoard::ViewProps)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeployBoard::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeployBoard::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-deploy_board-workspace")
                            .from(DeployBoard::Table, DeployBoard::Workspace)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-deploy_board-project")
                            .from(DeployBoard::Table, DeployBoard::Project)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx-deploy_board-entity")
                            .col(DeployBoard::EntityName)
                            .col(DeployBoard::EntityIdentifier)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeployBoard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DeployBoard {
    Table,
    Id,
    Anchor,
    EntityName,
    EntityIdentifier,
    Project,
    Workspace,
    IsCommentsEnabled,
    IsReactionsEnabled,
    IsVotesEnabled,
    IsActivityEnabled,
    IsDisabled,
    Intake,
    ViewProps,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Workspace {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    Id,
}
