// Test Data Factory
//
// Catalog fixtures the live API is known to hold, and unique values for
// payloads that must not collide between runs.

use uuid::Uuid;

/// A package id together with the storefront country it belongs to
#[derive(Debug, Clone, Copy)]
pub struct CatalogPackage {
    pub id: &'static str,
    pub country_code: &'static str,
}

/// Test data factory for live scenarios
pub struct TestDataFactory;

impl TestDataFactory {
    /// Country codes the catalog filter is checked against
    pub const FILTER_COUNTRIES: [&'static str; 2] = ["DE", "AL"];

    pub const ALBANIA_1GB: CatalogPackage = CatalogPackage {
        id: "albania-1gb",
        country_code: "AL",
    };

    pub const GERMANY_1GB: CatalogPackage = CatalogPackage {
        id: "germany-1gb",
        country_code: "DE",
    };

    /// Admin account of the local development backend
    pub const ADMIN_USERNAME: &'static str = "egde";
    pub const ADMIN_PASSWORD: &'static str = "Elbasan2016!";

    /// Random identifier with TEST prefix
    ///
    /// # Example
    /// ```ignore
    /// let id = TestDataFactory::random_external_id();
    /// assert!(id.starts_with("TEST-"));
    /// ```
    pub fn random_external_id() -> String {
        format!("TEST-{}", Uuid::new_v4())
    }
}
