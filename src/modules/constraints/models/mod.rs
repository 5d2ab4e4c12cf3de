pub mod probe;
pub mod probe_record;

pub use probe::{OrderColumn, OrderRow, ProbeExpectation, ProbeObservation, ProbeOutcome};
pub use probe_record::ProbeRecords;
