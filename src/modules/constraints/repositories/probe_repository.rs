use crate::modules::constraints::models::{OrderRow, ProbeRecords};
use sqlx::postgres::PgQueryResult;
use sqlx::PgConnection;
use uuid::Uuid;

/// Raw statements the probes issue against `users`, `my_packages` and `user_orders`
///
/// Errors are returned untouched: an integrity violation here is usually the
/// outcome a probe is looking for.
pub struct ProbeRepository;

impl ProbeRepository {
    pub async fn insert_order(
        conn: &mut PgConnection,
        row: &OrderRow,
    ) -> sqlx::Result<PgQueryResult> {
        sqlx::query("INSERT INTO user_orders (user_id, package_id, status) VALUES ($1, $2, $3)")
            .bind(row.user_id)
            .bind(row.package_id)
            .bind(row.status.as_deref())
            .execute(conn)
            .await
    }

    /// Remove a row an insert probe expected to be refused but was not
    pub async fn delete_order(
        conn: &mut PgConnection,
        row: &OrderRow,
    ) -> sqlx::Result<PgQueryResult> {
        sqlx::query(
            r#"
            DELETE FROM user_orders
            WHERE user_id IS NOT DISTINCT FROM $1
              AND package_id IS NOT DISTINCT FROM $2
              AND status IS NOT DISTINCT FROM $3
            "#,
        )
        .bind(row.user_id)
        .bind(row.package_id)
        .bind(row.status.as_deref())
        .execute(conn)
        .await
    }

    pub async fn insert_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> sqlx::Result<PgQueryResult> {
        sqlx::query("INSERT INTO users (id, email) VALUES ($1, $2)")
            .bind(user_id)
            .bind(ProbeRecords::probe_email(user_id))
            .execute(conn)
            .await
    }

    pub async fn insert_package(
        conn: &mut PgConnection,
        package_id: Uuid,
        country_name: &str,
    ) -> sqlx::Result<PgQueryResult> {
        sqlx::query(
            "INSERT INTO my_packages (id, name, country_name, data_amount) VALUES ($1, $2, $3, $4)",
        )
        .bind(package_id)
        .bind(ProbeRecords::probe_package_name(package_id))
        .bind(country_name)
        .bind(1_i32)
        .execute(conn)
        .await
    }

    pub async fn delete_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> sqlx::Result<PgQueryResult> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(conn)
            .await
    }

    pub async fn count_orders_for_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_orders WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(conn)
            .await
    }

    /// Delete everything `records` tracks, dependents first.
    ///
    /// Each statement runs on its own, so one failure does not stop the rest;
    /// failures are logged rather than returned.
    pub async fn cleanup(conn: &mut PgConnection, records: &ProbeRecords) {
        if records.is_empty() {
            return;
        }

        let statements: [(&str, &[Uuid]); 3] = [
            ("DELETE FROM user_orders WHERE user_id = ANY($1)", &records.users),
            ("DELETE FROM users WHERE id = ANY($1)", &records.users),
            ("DELETE FROM my_packages WHERE id = ANY($1)", &records.packages),
        ];

        for (statement, ids) in statements {
            if ids.is_empty() {
                continue;
            }
            if let Err(e) = sqlx::query(statement).bind(ids).execute(&mut *conn).await {
                tracing::warn!(statement, error = %e, "probe cleanup failed; rows may remain");
            }
        }
    }
}
