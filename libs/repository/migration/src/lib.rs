pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_event_table;
mod m20241001_000002_create_student_table;
mod m20241001_000003_create_registration_table;
mod m20241001_000004_create_attendance_table;
mod m20241001_000005_create_feedback_table;
mod m20241001_000006_create_unique_index_at_registration;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_event_table::Migration),
            Box::new(m20241001_000002_create_student_table::Migration),
            Box::new(m20241001_000003_create_registration_table::Migration),
            Box::new(m20241001_000004_create_attendance_table::Migration),
            Box::new(m20241001_000005_create_feedback_table::Migration),
            Box::new(
                m20241001_000006_create_unique_index_at_registration::Migration,
            ),
        ]
    }
}
