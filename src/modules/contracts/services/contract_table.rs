use crate::core::{HarnessError, Result};
use crate::modules::contracts::models::{ContractCase, FieldRule, Resource};
use jsonschema::Draft;
use std::collections::{BTreeMap, HashSet};

const STANDARD_TABLE: &str = include_str!("../../../../contracts/schema_contract_table.yaml");

/// Resource name -> ordered contract cases
#[derive(Debug, Clone, PartialEq)]
pub struct ContractTable {
    resources: BTreeMap<Resource, Vec<ContractCase>>,
}

impl ContractTable {
    /// The table shipped in `contracts/schema_contract_table.yaml`, validated
    pub fn standard() -> Result<Self> {
        let table = Self::from_yaml(STANDARD_TABLE)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        let resources: BTreeMap<Resource, Vec<ContractCase>> = serde_yaml::from_str(source)?;
        Ok(Self { resources })
    }

    pub fn cases(&self, resource: Resource) -> &[ContractCase] {
        self.resources
            .get(&resource)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Resource, &[ContractCase])> {
        self.resources
            .iter()
            .map(|(resource, cases)| (*resource, cases.as_slice()))
    }

    /// Check the table's own shape.
    ///
    /// Every resource needs a valid payload, an empty payload and at least one
    /// payload with a wrong type or bad value. Invalid cases must name the rule
    /// they break; valid cases must name none.
    pub fn validate(&self) -> Result<()> {
        for resource in Resource::ALL {
            let cases = self.cases(resource);
            if cases.is_empty() {
                return Err(HarnessError::invalid_table(format!("{} has no cases", resource)));
            }

            if !cases.iter().any(|case| case.valid) {
                return Err(HarnessError::invalid_table(format!(
                    "{} has no valid payload",
                    resource
                )));
            }

            if !cases.iter().any(ContractCase::is_empty_payload) {
                return Err(HarnessError::invalid_table(format!(
                    "{} has no empty payload",
                    resource
                )));
            }

            let has_bad_value = cases.iter().any(|case| {
                case.violations
                    .iter()
                    .any(|violation| violation.rule != FieldRule::Missing)
            });
            if !has_bad_value {
                return Err(HarnessError::invalid_table(format!(
                    "{} has no wrong-type or out-of-range payload",
                    resource
                )));
            }

            let mut labels = HashSet::new();
            for case in cases {
                if !labels.insert(case.label.as_str()) {
                    return Err(HarnessError::invalid_table(format!(
                        "{} repeats label '{}'",
                        resource, case.label
                    )));
                }
                if case.valid != case.violations.is_empty() {
                    return Err(HarnessError::invalid_table(format!(
                        "{} / {}: invalid cases must list violations, valid cases none",
                        resource, case.label
                    )));
                }
            }
        }

        Ok(())
    }

    /// Cases whose expected validity disagrees with the documented request schema.
    pub fn schema_mismatches(&self) -> Result<Vec<String>> {
        let mut mismatches = Vec::new();

        for (resource, cases) in self.iter() {
            let validator = jsonschema::options()
                .with_draft(Draft::Draft202012)
                .build(&resource.request_schema())
                .map_err(|e| {
                    let message = format!("{} schema does not compile: {}", resource, e);
                    HarnessError::invalid_table(message)
                })?;

            for case in cases {
                let schema_valid = validator.is_valid(&case.payload);
                if schema_valid != case.valid {
                    mismatches.push(format!(
                        "{} / {}: table says valid={}, schema says valid={}",
                        resource, case.label, case.valid, schema_valid
                    ));
                }
            }
        }

        Ok(mismatches)
    }
}
