use sea_orm_migration::prelude::*;

use crate::m20241001_000003_create_registration_table::Registration;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Registration::Table)
                    .name("idx_registration_event_id_student_id")
                    .col(Registration::EventId)
                    .col(Registration::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Registration::Table)
                    .name("idx_registration_event_id_student_id")
                    .to_owned(),
            )
            .await
    }
}
