// Schema contract module

pub mod models;
pub mod services;

pub use models::{AdminGate, CaseVerdict, ContractCase, ContractReport, Resource, ValidationOutcome};
pub use services::{ContractTable, ContractVerifier};
