use sea_orm_migration::prelude::*;

use crate::m20241001_000003_create_registration_table::Registration;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedback::RegistrationId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Feedback::Rating)
                            .integer()
                            .null()
                            .check(Expr::col(Feedback::Rating).between(1, 5)),
                    )
                    .col(ColumnDef::new(Feedback::Comments).string().null())
                    .foreign_key(
                        ForeignKeyCreateStatement::new()
                            .name("fk_feedback_registration_id")
                            .from(Feedback::Table, Feedback::RegistrationId)
                            .to(Registration::Table, Registration::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Feedback {
    Table,
    RegistrationId,
    Rating,
    Comments,
}
