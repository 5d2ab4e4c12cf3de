use crate::modules::scenarios::models::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Where a resource's admin bearer check runs relative to body validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminGate {
    Open,
    /// 401/403 means the body was never looked at
    BeforeValidation,
    /// 401/403 means the body already passed validation
    AfterValidation,
}

/// A request body the API validates before acting on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    CreateOrder,
    CreatePackage,
    UpdatePackage,
    UpdateOrderStatus,
    CancelOrder,
    SavePackage,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::CreateOrder,
        Resource::CreatePackage,
        Resource::UpdatePackage,
        Resource::UpdateOrderStatus,
        Resource::CancelOrder,
        Resource::SavePackage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::CreateOrder => "create_order",
            Resource::CreatePackage => "create_package",
            Resource::UpdatePackage => "update_package",
            Resource::UpdateOrderStatus => "update_order_status",
            Resource::CancelOrder => "cancel_order",
            Resource::SavePackage => "save_package",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Resource::UpdatePackage | Resource::UpdateOrderStatus => Method::Put,
            _ => Method::Post,
        }
    }

    /// Path template; `{id}` stands for the targeted order or package
    pub fn path_template(&self) -> &'static str {
        match self {
            Resource::CreateOrder => "/api/orders",
            Resource::CreatePackage => "/api/packages",
            Resource::UpdatePackage => "/api/packages/{id}",
            Resource::UpdateOrderStatus => "/api/orders/{id}/status",
            Resource::CancelOrder => "/api/orders/{id}/cancel",
            Resource::SavePackage => "/api/admin/save-package",
        }
    }

    pub fn path(&self, id: &str) -> String {
        self.path_template().replace("{id}", id)
    }

    pub fn requires_csrf(&self) -> bool {
        matches!(self, Resource::SavePackage)
    }

    pub fn admin_gate(&self) -> AdminGate {
        match self {
            Resource::CreatePackage | Resource::UpdatePackage | Resource::SavePackage => {
                AdminGate::BeforeValidation
            }
            Resource::UpdateOrderStatus | Resource::CancelOrder => AdminGate::AfterValidation,
            Resource::CreateOrder => AdminGate::Open,
        }
    }

    /// Whether requests carry the admin bearer token when one is configured
    pub fn requires_admin(&self) -> bool {
        self.admin_gate() != AdminGate::Open
    }

    /// JSON schema of the documented request rules
    ///
    /// Used offline to keep the contract table honest; the live verdict
    /// always comes from the server.
    pub fn request_schema(&self) -> Value {
        match self {
            Resource::CreateOrder => json!({
                "type": "object",
                "required": ["packageId", "userEmail", "country_code"],
                "properties": {
                    "packageId": { "type": "string", "minLength": 1 },
                    "userEmail": { "type": "string", "pattern": EMAIL_PATTERN },
                    "userName": { "type": "string" },
                    "userId": { "type": "string" },
                    "country_code": { "type": "string", "minLength": 2, "maxLength": 2 },
                    "name": { "type": "string" },
                    "surname": { "type": "string" }
                }
            }),
            Resource::CreatePackage => json!({
                "type": "object",
                "required": ["name", "price", "dataAmount", "days", "country", "operator", "type"],
                "properties": package_properties()
            }),
            Resource::UpdatePackage => {
                let mut properties = package_properties();
                properties["validity"] = json!({ "type": ["string", "number"] });
                json!({ "type": "object", "properties": properties })
            }
            Resource::UpdateOrderStatus => json!({
                "type": "object",
                "required": ["status"],
                "properties": {
                    "status": { "type": "string", "minLength": 1 },
                    "notes": { "type": "string" }
                }
            }),
            Resource::CancelOrder => json!({ "type": "object" }),
            Resource::SavePackage => json!({
                "type": "object",
                "required": [
                    "name", "country_name", "country_code", "data_amount", "days", "base_price"
                ],
                "properties": {
                    "name": { "type": "string", "minLength": 1 },
                    "country_name": { "type": "string", "minLength": 1 },
                    "country_code": { "type": "string", "minLength": 2, "maxLength": 4 },
                    "data_amount": { "type": "number", "minimum": 0 },
                    "days": { "type": "number", "minimum": 0 },
                    "base_price": { "type": "number", "exclusiveMinimum": 0 },
                    "sale_price": { "type": "number", "exclusiveMinimum": 0 },
                    "profit": { "type": "number" },
                    "reseller_id": { "type": ["string", "null"] },
                    "region": { "type": "string" },
                    "visible": { "type": "boolean" },
                    "show_on_frontend": { "type": "boolean" },
                    "location_slug": { "type": "string" },
                    "homepage_order": { "type": "number" },
                    "features": { "type": "object" }
                }
            }),
        }
    }
}

fn package_properties() -> Value {
    json!({
        "name": { "type": "string", "minLength": 1 },
        "description": { "type": "string" },
        "price": { "type": "number", "exclusiveMinimum": 0 },
        "dataAmount": { "type": "number", "minimum": 0 },
        "days": { "type": "number", "minimum": 0 },
        "country": { "type": "string", "minLength": 1 },
        "operator": { "type": "string", "minLength": 1 },
        "type": { "type": "string", "minLength": 1 }
    })
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
