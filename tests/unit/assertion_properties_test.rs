// Unit tests for the assertion layer
//
// Property checks over the pure verdict functions: status-set membership,
// the country filter, CSRF token bodies, validation outcomes and Set-Cookie
// parsing. No network or database is involved.

use esim_harness::assertions::{
    check_country_filter, decode_csrf_token, decode_package_list, BodyContract, StatusSet,
};
use esim_harness::contracts::{AdminGate, ValidationOutcome};
use esim_harness::scenarios::models::parse_set_cookie;
use esim_harness::AssertionFailure;
use proptest::prelude::*;
use serde_json::{json, Value};

fn country_code() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["AL", "DE", "GR", "FR", "al", "D", "DEU", ""])
        .prop_map(str::to_string)
}

fn admin_gate() -> impl Strategy<Value = AdminGate> {
    prop::sample::select(vec![
        AdminGate::Open,
        AdminGate::BeforeValidation,
        AdminGate::AfterValidation,
    ])
}

fn package_list(codes: &[String]) -> Value {
    let data: Vec<Value> = codes
        .iter()
        .enumerate()
        .map(|(index, code)| json!({"id": format!("pkg-{}", index), "country_code": code}))
        .collect();
    json!({ "data": data })
}

proptest! {
    #[test]
    fn test_country_filter_passes_iff_every_code_matches(
        requested in country_code(),
        codes in prop::collection::vec(country_code(), 0..12)
    ) {
        let body = package_list(&codes);
        let list = decode_package_list("filter", Some(&body)).unwrap();
        let result = check_country_filter("filter", &requested, &list);

        let all_match = codes.iter().all(|code| code == &requested);
        prop_assert_eq!(result.is_ok(), all_match);

        if let Err(AssertionFailure::CountryMismatch { offending, .. }) = result {
            let mismatched = codes.iter().filter(|code| *code != &requested).count();
            prop_assert_eq!(offending.len(), mismatched);
        }
    }

    #[test]
    fn test_status_set_membership(
        codes in prop::collection::btree_set(100u16..600, 1..6),
        actual in 100u16..600
    ) {
        let set = StatusSet::from_codes(codes.iter().copied()).unwrap();
        prop_assert_eq!(set.contains(actual), codes.contains(&actual));
        prop_assert_eq!(set.check("membership", actual, "{}").is_ok(), codes.contains(&actual));
    }

    #[test]
    fn test_validation_outcome_from_status(status in 100u16..600, gate in admin_gate()) {
        let outcome = ValidationOutcome::from_status(status, gate);
        let expected = match status {
            400 | 422 => ValidationOutcome::Rejected,
            429 | 500.. => ValidationOutcome::Blocked,
            401 | 403 if gate == AdminGate::AfterValidation => ValidationOutcome::Accepted,
            401 | 403 => ValidationOutcome::Blocked,
            _ => ValidationOutcome::Accepted,
        };
        prop_assert_eq!(outcome, expected);
    }

    #[test]
    fn test_string_csrf_token_is_accepted(token in "[A-Za-z0-9_-]{0,64}") {
        let body = json!({ "csrfToken": token.clone() });
        let decoded = decode_csrf_token("csrf", Some(&body)).unwrap();
        prop_assert_eq!(decoded.csrf_token, Some(token));
    }

    #[test]
    fn test_numeric_csrf_token_is_rejected(token in any::<i64>()) {
        let body = json!({ "csrfToken": token });
        prop_assert!(decode_csrf_token("csrf", Some(&body)).is_err());
    }

    #[test]
    fn test_set_cookie_keeps_only_the_pair(
        name in "[A-Za-z_][A-Za-z0-9_]{0,15}",
        value in "[A-Za-z0-9=._-]{0,32}"
    ) {
        let header = format!("{}={}; Path=/; HttpOnly; SameSite=Strict", name, value);
        prop_assert_eq!(parse_set_cookie(&header), Some((name, value)));
    }
}

#[test]
fn test_null_csrf_token_is_accepted() {
    let body = json!({"csrfToken": null});
    let decoded = decode_csrf_token("csrf", Some(&body)).unwrap();
    assert_eq!(decoded.csrf_token, None);
}

#[test]
fn test_csrf_token_requires_the_field() {
    assert!(decode_csrf_token("csrf", Some(&json!({}))).is_err());
    assert!(decode_csrf_token("csrf", None).is_err());
}

#[test]
fn test_empty_package_list_passes_the_filter() {
    let contract = BodyContract::PackageList {
        country_code: "AL".to_string(),
    };
    assert!(contract.check("empty", Some(&json!({"data": []}))).is_ok());
}

#[test]
fn test_country_filter_is_case_sensitive() {
    let contract = BodyContract::PackageList {
        country_code: "DE".to_string(),
    };
    let body = json!({"data": [{"id": 1, "country_code": "de"}]});
    let failure = contract.check("case", Some(&body)).unwrap_err();
    assert!(failure.to_string().contains("1=de"), "{failure}");
}

#[test]
fn test_status_set_rejects_unlisted_code() {
    let failure = StatusSet::NOT_FOUND_OR_NOT_ALLOWED
        .check("post_to_get_only", 200, r#"{"csrfToken":"x"}"#)
        .unwrap_err();
    let message = failure.to_string();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("200"), "{message}");
}
