use crate::core::{HarnessError, Result};
use crate::modules::assertions::ConstraintKind;
use crate::modules::constraints::models::{
    OrderColumn, OrderRow, ProbeExpectation, ProbeObservation, ProbeOutcome, ProbeRecords,
};
use crate::modules::constraints::repositories::{DbFixture, ProbeRepository};
use async_trait::async_trait;
use uuid::Uuid;

/// One engine-level integrity check
///
/// `run` returns `Ok` with whatever the engine did; only SQL errors that are
/// not a classified violation (missing table, lost connection) become `Err`.
#[async_trait]
pub trait ConstraintProbe: Send + Sync {
    fn name(&self) -> &str;

    fn expectation(&self) -> ProbeExpectation;

    async fn run(&self, db: &mut DbFixture) -> Result<ProbeOutcome>;
}

/// Insert `row` and report what the engine did with it.
///
/// An accepted row is deleted again before returning.
async fn insert_and_classify(
    db: &mut DbFixture,
    name: &str,
    row: &OrderRow,
) -> Result<ProbeObservation> {
    match ProbeRepository::insert_order(db.conn(), row).await {
        Ok(_) => {
            if let Err(e) = ProbeRepository::delete_order(db.conn(), row).await {
                tracing::warn!(probe = name, error = %e, "failed to remove accepted probe row");
            }
            Ok(ProbeObservation::Accepted)
        }
        Err(err) => match ConstraintKind::of_error(&err) {
            Some(kind) => Ok(ProbeObservation::Violation(kind)),
            None => Err(HarnessError::Database(err)),
        },
    }
}

fn finish(name: &str, expected: ProbeExpectation, observed: ProbeObservation) -> ProbeOutcome {
    let outcome = ProbeOutcome {
        probe: name.to_string(),
        expected,
        observed,
    };
    tracing::info!(
        probe = %outcome.probe,
        expected = %outcome.expected,
        observed = %outcome.observed,
        "probe finished"
    );
    outcome
}

/// Insert one `user_orders` row and expect the engine to refuse it
pub struct InsertOrderProbe {
    name: String,
    row: OrderRow,
    expected: ConstraintKind,
}

impl InsertOrderProbe {
    pub fn new(name: impl Into<String>, row: OrderRow, expected: ConstraintKind) -> Self {
        Self {
            name: name.into(),
            row,
            expected,
        }
    }

    pub fn null_user_id() -> Self {
        Self::null_column(OrderColumn::UserId)
    }

    pub fn null_package_id() -> Self {
        Self::null_column(OrderColumn::PackageId)
    }

    pub fn null_status() -> Self {
        Self::null_column(OrderColumn::Status)
    }

    fn null_column(column: OrderColumn) -> Self {
        Self::new(
            format!("not_null_{}", column.name()),
            OrderRow::dangling().without(column),
            ConstraintKind::NotNull,
        )
    }

    pub fn invalid_status() -> Self {
        Self::new(
            "status_check",
            OrderRow::dangling().with_status("invalid_status"),
            ConstraintKind::Check,
        )
    }

    pub fn dangling_references() -> Self {
        Self::new("foreign_keys", OrderRow::dangling(), ConstraintKind::ForeignKey)
    }

    pub fn row(&self) -> &OrderRow {
        &self.row
    }
}

#[async_trait]
impl ConstraintProbe for InsertOrderProbe {
    fn name(&self) -> &str {
        &self.name
    }

    fn expectation(&self) -> ProbeExpectation {
        ProbeExpectation::Violation(self.expected)
    }

    async fn run(&self, db: &mut DbFixture) -> Result<ProbeOutcome> {
        let observed = insert_and_classify(db, &self.name, &self.row).await?;
        Ok(finish(&self.name, self.expectation(), observed))
    }
}

/// Insert an order whose other columns point at rows that exist, with
/// `column` set to NULL
///
/// Only a NOT NULL constraint can refuse the row.
pub struct NullColumnInsert {
    name: String,
    column: OrderColumn,
    country_name: String,
}

impl NullColumnInsert {
    pub fn new(column: OrderColumn) -> Self {
        Self {
            name: format!("not_null_{}_with_valid_references", column.name()),
            column,
            country_name: "AL".to_string(),
        }
    }

    pub fn column(&self) -> OrderColumn {
        self.column
    }

    async fn exercise(
        &self,
        db: &mut DbFixture,
        records: &mut ProbeRecords,
    ) -> Result<ProbeObservation> {
        let user_id = Uuid::new_v4();
        ProbeRepository::insert_user(db.conn(), user_id).await?;
        records.users.push(user_id);

        let package_id = Uuid::new_v4();
        ProbeRepository::insert_package(db.conn(), package_id, &self.country_name).await?;
        records.packages.push(package_id);

        let row = OrderRow::referencing(user_id, package_id).without(self.column);
        insert_and_classify(db, &self.name, &row).await
    }
}

#[async_trait]
impl ConstraintProbe for NullColumnInsert {
    fn name(&self) -> &str {
        &self.name
    }

    fn expectation(&self) -> ProbeExpectation {
        ProbeExpectation::Violation(ConstraintKind::NotNull)
    }

    async fn run(&self, db: &mut DbFixture) -> Result<ProbeOutcome> {
        let mut records = ProbeRecords::default();
        let observed = self.exercise(db, &mut records).await;
        ProbeRepository::cleanup(db.conn(), &records).await;
        Ok(finish(&self.name, self.expectation(), observed?))
    }
}

/// One `NullColumnInsert` per NOT NULL column of `user_orders`
pub fn null_column_inserts() -> Vec<NullColumnInsert> {
    OrderColumn::ALL.into_iter().map(NullColumnInsert::new).collect()
}

/// Deleting a user must take its orders with it
pub struct CascadeDeleteProbe {
    country_name: String,
}

impl CascadeDeleteProbe {
    pub fn new() -> Self {
        Self {
            country_name: "AL".to_string(),
        }
    }

    async fn exercise(&self, db: &mut DbFixture, records: &mut ProbeRecords) -> Result<i64> {
        let user_id = Uuid::new_v4();
        ProbeRepository::insert_user(db.conn(), user_id).await?;
        records.users.push(user_id);

        let package_id = Uuid::new_v4();
        ProbeRepository::insert_package(db.conn(), package_id, &self.country_name).await?;
        records.packages.push(package_id);

        let row = OrderRow::referencing(user_id, package_id);
        ProbeRepository::insert_order(db.conn(), &row).await?;

        ProbeRepository::delete_user(db.conn(), user_id).await?;
        let remaining = ProbeRepository::count_orders_for_user(db.conn(), user_id).await?;
        Ok(remaining)
    }
}

impl Default for CascadeDeleteProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConstraintProbe for CascadeDeleteProbe {
    fn name(&self) -> &str {
        "cascade_delete_user_orders"
    }

    fn expectation(&self) -> ProbeExpectation {
        ProbeExpectation::RowsRemaining(0)
    }

    async fn run(&self, db: &mut DbFixture) -> Result<ProbeOutcome> {
        let mut records = ProbeRecords::default();
        let remaining = self.exercise(db, &mut records).await;
        // runs whatever `exercise` returned; the package never cascades
        ProbeRepository::cleanup(db.conn(), &records).await;

        let observed = ProbeObservation::RowsRemaining(remaining?);
        Ok(finish(self.name(), self.expectation(), observed))
    }
}

/// The NOT NULL, CHECK, FOREIGN KEY and cascade probes, in run order
pub fn standard_probes() -> Vec<Box<dyn ConstraintProbe>> {
    vec![
        Box::new(InsertOrderProbe::null_user_id()),
        Box::new(InsertOrderProbe::null_package_id()),
        Box::new(InsertOrderProbe::null_status()),
        Box::new(InsertOrderProbe::invalid_status()),
        Box::new(InsertOrderProbe::dangling_references()),
        Box::new(CascadeDeleteProbe::new()),
    ]
}
