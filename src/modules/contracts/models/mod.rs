pub mod contract_case;
pub mod resource;
pub mod verdict;

pub use contract_case::{ContractCase, FieldRule, FieldViolation, ValidationOutcome};
pub use resource::{AdminGate, Resource};
pub use verdict::{CaseVerdict, ContractReport};
