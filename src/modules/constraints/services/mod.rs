pub mod constraint_probe;

pub use constraint_probe::{
    null_column_inserts, standard_probes, CascadeDeleteProbe, ConstraintProbe,
    InsertOrderProbe, NullColumnInsert,
};
