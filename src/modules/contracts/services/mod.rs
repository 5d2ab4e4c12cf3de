pub mod contract_table;
pub mod contract_verifier;

pub use contract_table::ContractTable;
pub use contract_verifier::ContractVerifier;
