use std::error::Error;

use anyhow::Context;
use diesel::{r2d2::{ConnectionManager, CustomizeConnection}, PgConnection, RunQueryDsl};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::{Pool, PooledConnection};

use crate::configuration::DatabaseSettings;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn error_fmt_chain(f: &mut std::fmt::Formatter<'_>, source: &Option<impl Error>) -> std::fmt::Result{
    if let Some(error) = source{
        write!(f, "\n\tCaused By:\n\t")?;
        write!(f, "{:?}", &error)?;
        error_fmt_chain(f, &error.source())
    } else {
        Ok(())
    }
}

// Applied to every connection handed out by the pool, so no single
// statement can hold a connection past the deadline
#[derive(Debug, Clone, Copy)]
pub struct StatementTimeout(pub u64);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for StatementTimeout {
    fn on_acquire(&self, conn: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        diesel::sql_query(format!("SET statement_timeout = {}", self.0))
            .execute(conn)
            .map(|_| ())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

#[tracing::instrument(
    "Building database connection pool",
    skip_all,
    fields(database = %settings.name)
)]
pub fn build_pool(settings: &DatabaseSettings) -> Result<DbPool, anyhow::Error>{
    let manager = ConnectionManager::<PgConnection>::new(settings.get_database_table_url());

    Pool::builder()
        .max_size(settings.max_connections)
        .min_idle(Some(settings.min_idle.min(settings.max_connections)))
        .max_lifetime(Some(settings.max_lifetime()))
        .idle_timeout(Some(settings.idle_timeout()))
        .connection_timeout(settings.connect_timeout())
        .connection_customizer(Box::new(StatementTimeout(settings.statement_timeout_ms)))
        .build(manager)
        .context("Failed to build connection pool")
}

#[tracing::instrument(
    "Running pending migrations",
    skip_all
)]
pub fn run_migrations(pool: &DbPool) -> Result<(), anyhow::Error>{
    let mut conn = pool.get()
                    .context("Failed to get connection from pool")?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    Ok(())
}
