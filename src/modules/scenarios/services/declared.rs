// Declared scenarios for the public and admin API surfaces
//
// Each constructor returns one immutable Scenario. The expected status sets are
// the documented contract; several members mean the server may pick any of them.

use crate::modules::assertions::{BodyContract, StatusSet};
use crate::modules::csrf::CSRF_HEADER;
use crate::modules::scenarios::models::{RequestSpec, Scenario};
use serde_json::{json, Value};

pub const CSRF_TOKEN_PATH: &str = "/api/admin/csrf-token";
pub const SAVE_PACKAGE_PATH: &str = "/api/admin/save-package";
pub const PACKAGES_PATH: &str = "/api/packages";
pub const CHECKOUT_PATH: &str = "/api/checkout";

/// Token value no server could have issued
pub const MALFORMED_CSRF_TOKEN: &str = "invalid-csrf-token";

/// A save-package body that passes input validation
pub fn sample_save_package_payload() -> Value {
    json!({
        "name": "Greece 5GB 30 days",
        "country_name": "Greece",
        "country_code": "GR",
        "data_amount": 5.0,
        "days": 30,
        "base_price": 10.0
    })
}

/// Guest checkout body for `package_id` bought on the `country_code` storefront
pub fn checkout_payload(package_id: &str, country_code: &str) -> Value {
    json!({
        "packageId": package_id,
        "country_code": country_code,
        "email": "test@example.com",
        "name": "Test",
        "surname": "User"
    })
}

pub fn csrf_token_issuance() -> Scenario {
    Scenario::new(
        "csrf_token_issuance",
        RequestSpec::get(CSRF_TOKEN_PATH),
        StatusSet::OK,
    )
    .expecting_body(BodyContract::CsrfToken)
}

/// Issuance is unauthenticated: a session cookie must not change the answer
pub fn csrf_token_issuance_with_session_cookie() -> Scenario {
    Scenario::new(
        "csrf_token_issuance_with_session_cookie",
        RequestSpec::get(CSRF_TOKEN_PATH).cookie("session", "dummy"),
        StatusSet::OK,
    )
    .expecting_body(BodyContract::CsrfToken)
}

pub fn csrf_token_rejects_post() -> Scenario {
    Scenario::new(
        "csrf_token_rejects_post",
        RequestSpec::post(CSRF_TOKEN_PATH),
        StatusSet::NOT_FOUND_OR_NOT_ALLOWED,
    )
}

pub fn save_package_without_csrf_token() -> Scenario {
    Scenario::new(
        "save_package_without_csrf_token",
        RequestSpec::post(SAVE_PACKAGE_PATH).json(sample_save_package_payload()),
        StatusSet::CSRF_REJECTION,
    )
}

pub fn save_package_with_malformed_csrf_token() -> Scenario {
    Scenario::new(
        "save_package_with_malformed_csrf_token",
        RequestSpec::post(SAVE_PACKAGE_PATH)
            .header(CSRF_HEADER, MALFORMED_CSRF_TOKEN)
            .json(sample_save_package_payload()),
        StatusSet::CSRF_REJECTION,
    )
}

pub fn packages_filtered_by_country(country_code: &str) -> Scenario {
    Scenario::new(
        format!("packages_filtered_by_country_{}", country_code),
        RequestSpec::get(PACKAGES_PATH).query("country_code", country_code),
        StatusSet::OK,
    )
    .expecting_body(BodyContract::PackageList {
        country_code: country_code.to_string(),
    })
}

/// Package and storefront agree: checkout proceeds
pub fn checkout_matching_country(package_id: &str, country_code: &str) -> Scenario {
    Scenario::new(
        format!("checkout_matching_country_{}_{}", package_id, country_code),
        RequestSpec::post(CHECKOUT_PATH).json(checkout_payload(package_id, country_code)),
        StatusSet::OK,
    )
}

/// Package from another country: rejected before any payment is attempted
pub fn checkout_mismatched_country(package_id: &str, country_code: &str) -> Scenario {
    Scenario::new(
        format!("checkout_mismatched_country_{}_{}", package_id, country_code),
        RequestSpec::post(CHECKOUT_PATH).json(checkout_payload(package_id, country_code)),
        StatusSet::BAD_REQUEST,
    )
}

pub fn checkout_without_package_id(country_code: &str) -> Scenario {
    let mut payload = checkout_payload("", country_code);
    if let Some(fields) = payload.as_object_mut() {
        fields.remove("packageId");
    }
    Scenario::new(
        format!("checkout_without_package_id_{}", country_code),
        RequestSpec::post(CHECKOUT_PATH).json(payload),
        StatusSet::BAD_REQUEST,
    )
}

/// Every scenario of the suite, with the fixtures the live catalog is known to hold
pub fn declared_scenarios() -> Vec<Scenario> {
    vec![
        csrf_token_issuance(),
        csrf_token_issuance_with_session_cookie(),
        csrf_token_rejects_post(),
        save_package_without_csrf_token(),
        save_package_with_malformed_csrf_token(),
        packages_filtered_by_country("DE"),
        packages_filtered_by_country("AL"),
        checkout_matching_country("albania-1gb", "AL"),
        checkout_mismatched_country("germany-1gb", "AL"),
        checkout_without_package_id("AL"),
    ]
}
