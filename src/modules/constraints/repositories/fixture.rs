use crate::config::DatabaseConfig;
use crate::core::{HarnessError, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use sqlx::{Connection, PgConnection};
use std::panic::AssertUnwindSafe;

/// The one database connection a test owns
///
/// Auto-commit throughout: an expected violation fails only its own
/// statement and leaves the connection usable for the next probe.
pub struct DbFixture {
    conn: PgConnection,
}

impl DbFixture {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let conn = config.connect().await?;
        tracing::debug!("database fixture acquired");
        Ok(Self { conn })
    }

    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    pub async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(HarnessError::DatabaseUnavailable)?;
        tracing::debug!("database fixture released");
        Ok(())
    }
}

/// Run `f` against a fresh fixture and close it afterwards
///
/// The connection is closed whether `f` returns, fails or panics; a panic is
/// resumed after the close so the test still reports it.
///
/// # Example
/// ```no_run
/// # use esim_harness::{DatabaseConfig, constraints::with_db_fixture};
/// # use futures_util::FutureExt;
/// # async fn run() -> esim_harness::Result<()> {
/// let one: i32 = with_db_fixture(&DatabaseConfig::from_env(), |db| {
///     async move {
///         Ok(sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(db.conn()).await?)
///     }
///     .boxed()
/// })
/// .await?;
/// assert_eq!(one, 1);
/// # Ok(())
/// # }
/// ```
pub async fn with_db_fixture<T, F>(config: &DatabaseConfig, f: F) -> Result<T>
where
    F: for<'c> FnOnce(&'c mut DbFixture) -> BoxFuture<'c, Result<T>>,
{
    let mut fixture = DbFixture::connect(config).await?;
    let outcome = AssertUnwindSafe(f(&mut fixture)).catch_unwind().await;
    let closed = fixture.close().await;

    match outcome {
        Err(panic) => {
            if let Err(e) = closed {
                tracing::warn!(error = %e, "database fixture failed to close after panic");
            }
            std::panic::resume_unwind(panic)
        }
        Ok(result) => {
            let value = result?;
            closed?;
            Ok(value)
        }
    }
}
