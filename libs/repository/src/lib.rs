use attendance::AttendanceRepository;
use event::EventRepository;
use feedback::FeedbackRepository;
use migration::Migrator;
use migration::MigratorTrait;
use registration::RegistrationRepository;
use report::ReportRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use student::StudentRepository;

mod active_models;
pub mod attendance;
mod credential;
pub mod event;
pub mod feedback;
pub mod registration;
pub mod report;
mod response;
pub mod student;

pub use response::Response;
use response::IntoResponse;

#[derive(Clone, Debug)]
pub struct Repository {
    pub event: EventRepository,
    pub student: StudentRepository,
    pub registration: RegistrationRepository,
    pub attendance: AttendanceRepository,
    pub feedback: FeedbackRepository,
    pub report: ReportRepository,
    db: DatabaseConnection,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error("in password hashing: {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Incorrect password")]
    InvalidCredentials,
}

#[derive(Clone, Copy, Debug)]
pub struct PoolOptions {
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 5,
            min_connections: 1,
        }
    }
}

impl Repository {
    pub async fn new(db_url: &str, pool: PoolOptions) -> Response<Self> {
        let db = init_db(db_url, pool).await?;

        Ok(Self {
            event: EventRepository::new(db.clone()),
            student: StudentRepository::new(db.clone()),
            registration: RegistrationRepository::new(db.clone()),
            attendance: AttendanceRepository::new(db.clone()),
            feedback: FeedbackRepository::new(db.clone()),
            report: ReportRepository::new(db.clone()),
            db,
        })
    }

    pub async fn ping(&self) -> Response<()> {
        self.db.ping().await.into_response("in database ping")
    }
}

async fn init_db(
    db_url: &str,
    pool: PoolOptions,
) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(pool.max_connections)
        .min_connections(pool.min_connections)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}
