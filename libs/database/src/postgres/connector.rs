use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{info, instrument};

use super::PostgresConfig;
use crate::common::{RetryConfig, retry_with_backoff};

/// Connect with explicit connection options.
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Connected to PostgreSQL");
    Ok(db)
}

/// Connect using the pool settings in `config`.
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Connect, retrying with exponential backoff while the server is unreachable.
///
/// When `retry` is `None` the policy is derived from `config.max_retries`.
///
/// ```ignore
/// let config = PostgresConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, None).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry: Option<RetryConfig>,
) -> Result<DatabaseConnection, DbErr> {
    let retry = retry.unwrap_or_else(|| config.retry_config());
    let options = config.into_connect_options();

    retry_with_backoff("postgres connect", &retry, || {
        connect_with_options(options.clone())
    })
    .await
}

/// Apply every pending migration from `M`.
#[instrument(skip(db))]
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running pending migrations");
    M::up(db, None).await?;
    info!("Migrations are up to date");
    Ok(())
}
