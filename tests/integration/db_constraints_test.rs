// Integration test for the orders schema's integrity constraints
//
// Talks to PostgreSQL directly (TEST_DB_URL). Each probe inserts rows the
// engine must refuse, or deletes a user and counts what is left; nothing goes
// through the HTTP API. Probes remove whatever rows they manage to create.
// The NOT NULL columns are checked twice: once with dangling ids and once
// against a real user and package, so a foreign key error cannot stand in
// for the missing NOT NULL.

#[path = "../helpers/mod.rs"]
mod helpers;

use esim_harness::assertions::ConstraintKind;
use esim_harness::constraints::{
    null_column_inserts, standard_probes, with_db_fixture, CascadeDeleteProbe, ConstraintProbe,
    InsertOrderProbe, NullColumnInsert, OrderColumn, ProbeObservation, ProbeOutcome,
};
use esim_harness::HarnessError;
use futures_util::FutureExt;
use helpers::*;

async fn run_probe<P>(probe: P) -> Result<ProbeOutcome, HarnessError>
where
    P: ConstraintProbe + 'static,
{
    let config = test_db_config()?;
    with_db_fixture(&config, move |db| async move { probe.run(db).await }.boxed()).await
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_not_null_user_id() -> Result<(), HarnessError> {
    let outcome = run_probe(InsertOrderProbe::null_user_id()).await?;
    assert_eq!(outcome.observed, ProbeObservation::Violation(ConstraintKind::NotNull));
    assert_probe(&outcome);
    Ok(())
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_not_null_package_id() -> Result<(), HarnessError> {
    let outcome = run_probe(InsertOrderProbe::null_package_id()).await?;
    assert_probe(&outcome);
    Ok(())
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_not_null_status() -> Result<(), HarnessError> {
    let outcome = run_probe(InsertOrderProbe::null_status()).await?;
    assert_probe(&outcome);
    Ok(())
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_status_check_constraint() -> Result<(), HarnessError> {
    let outcome = run_probe(InsertOrderProbe::invalid_status()).await?;
    assert_eq!(outcome.observed, ProbeObservation::Violation(ConstraintKind::Check));
    assert_probe(&outcome);
    Ok(())
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_foreign_key_constraints() -> Result<(), HarnessError> {
    let outcome = run_probe(InsertOrderProbe::dangling_references()).await?;
    assert_probe(&outcome);
    Ok(())
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_cascade_delete_user_orders() -> Result<(), HarnessError> {
    let outcome = run_probe(CascadeDeleteProbe::new()).await?;
    assert_eq!(outcome.observed, ProbeObservation::RowsRemaining(0));
    assert_probe(&outcome);
    Ok(())
}

async fn assert_null_refused(column: OrderColumn) -> Result<(), HarnessError> {
    let outcome = run_probe(NullColumnInsert::new(column)).await?;
    assert_eq!(outcome.observed, ProbeObservation::Violation(ConstraintKind::NotNull));
    assert_probe(&outcome);
    Ok(())
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_null_user_id_with_real_package() -> Result<(), HarnessError> {
    assert_null_refused(OrderColumn::UserId).await
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_null_package_id_with_real_user() -> Result<(), HarnessError> {
    assert_null_refused(OrderColumn::PackageId).await
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_null_status_with_real_user_and_package() -> Result<(), HarnessError> {
    assert_null_refused(OrderColumn::Status).await
}

/// Each null-column insert creates its own user and package and removes them
#[tokio::test]
#[ignore = "Requires test database"]
async fn test_null_column_inserts_leave_no_orders_behind() -> Result<(), HarnessError> {
    let config = test_db_config()?;

    let remaining = with_db_fixture(&config, |db| {
        async move {
            for insert in null_column_inserts() {
                insert.run(db).await?;
            }
            let remaining = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM user_orders WHERE user_id IS NULL OR package_id IS NULL",
            )
            .fetch_one(db.conn())
            .await?;
            Ok(remaining)
        }
        .boxed()
    })
    .await?;

    assert_eq!(remaining, 0);
    Ok(())
}

/// Expected violations must not leave the shared connection unusable
#[tokio::test]
#[ignore = "Requires test database"]
async fn test_all_probes_share_one_connection() -> Result<(), HarnessError> {
    let config = test_db_config()?;

    let outcomes = with_db_fixture(&config, |db| {
        async move {
            let mut outcomes = Vec::new();
            for probe in standard_probes() {
                outcomes.push(probe.run(db).await?);
            }
            Ok(outcomes)
        }
        .boxed()
    })
    .await?;

    assert_eq!(outcomes.len(), standard_probes().len());
    for outcome in &outcomes {
        assert_probe(outcome);
    }
    Ok(())
}
