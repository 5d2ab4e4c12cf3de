// Database constraint probe module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    OrderColumn, OrderRow, ProbeExpectation, ProbeObservation, ProbeOutcome, ProbeRecords,
};
pub use repositories::{with_db_fixture, DbFixture, ProbeRepository};
pub use services::{
    null_column_inserts, standard_probes, CascadeDeleteProbe, ConstraintProbe,
    InsertOrderProbe, NullColumnInsert,
};
