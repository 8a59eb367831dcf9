//! End-to-end checks for the documented sanitizer/validator contracts.

use fieldguard::host::DefaultHost;
use fieldguard::sanitize::{self, AmountConfig};
use fieldguard::validate::{self, PasswordPolicy};
use serde_json::json;

#[test]
fn amount_output_shape_is_fixed_precision() {
    for decimals in 0u8..=4 {
        let cfg = AmountConfig {
            decimals,
            allow_negative: true,
            ..Default::default()
        };
        for raw in ["0", "12.345", "-9.999", "1,000.5", "garbage"] {
            let out = sanitize::amount(raw, &cfg);
            let body = out.strip_prefix('-').unwrap_or(&out);
            if decimals == 0 {
                assert!(
                    body.chars().all(|c| c.is_ascii_digit()),
                    "bad shape: {out:?}"
                );
            } else {
                let (int_part, frac_part) = body.split_once('.').expect("missing decimal point");
                assert!(!int_part.is_empty() && int_part.chars().all(|c| c.is_ascii_digit()));
                assert_eq!(frac_part.len(), usize::from(decimals), "bad shape: {out:?}");
                assert!(frac_part.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }
}

#[test]
fn amount_is_idempotent() {
    let cfg = AmountConfig::default();
    for raw in ["1,234.567", "-3.999", "", "0.005", "99"] {
        let once = sanitize::amount(raw, &cfg);
        assert_eq!(sanitize::amount(&once, &cfg), once);
    }
}

#[test]
fn object_ids_are_unique_positive_and_ordered() {
    let input = ["5", "3", "5", "0", "-1", "3", "8", "nonsense"];
    let out = sanitize::object_ids(input);

    assert_eq!(out, vec![5, 3, 8]);
    assert!(out.iter().all(|&id| id > 0));

    let mut deduped = out.clone();
    deduped.dedup();
    assert_eq!(deduped, out);
}

#[test]
fn range_always_lands_in_bounds() {
    for raw in ["-100", "0", "3.5", "7", "100", "junk"] {
        let v = sanitize::range_default_zero(raw, 1.0, 9.0);
        assert!((1.0..=9.0).contains(&v), "{raw} escaped bounds: {v}");
    }
    // in-range values pass through unchanged
    assert_eq!(sanitize::range_default_zero("3.5", 1.0, 9.0), 3.5);
}

#[test]
fn luhn_known_vectors() {
    assert!(validate::credit_card("4532015112830366"));
    assert!(!validate::credit_card("4532015112830367"));
}

#[test]
fn password_known_vectors() {
    let policy = PasswordPolicy::default();
    assert!(validate::strong_password("MyPass123!", &policy));
    assert!(!validate::strong_password("weak", &policy));
}

#[test]
fn required_fields_reports_missing_in_request_order() {
    let data = match json!({"name": "John", "email": "john@example.com"}) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    assert_eq!(
        validate::required_fields(&data, &["name", "email", "phone"]),
        vec!["phone"]
    );
}

#[test]
fn comma_list_documented_behavior() {
    assert_eq!(
        sanitize::comma_list("item1, item2, item3", &DefaultHost),
        vec!["item1", "item2", "item3"]
    );
    assert_eq!(sanitize::comma_list("a, ,a,b", &DefaultHost), vec!["a", "b"]);
}

#[test]
fn list_is_deterministic_and_order_preserving() {
    let input = "beta\nalpha\nbeta\ngamma\n\nalpha";
    let first = sanitize::list(input, '\n', None, &DefaultHost);
    let second = sanitize::list(input, '\n', None, &DefaultHost);

    assert_eq!(first, second);
    assert_eq!(first, vec!["beta", "alpha", "gamma"]);
}

#[test]
fn list_with_validator_is_deterministic() {
    let no_digits: &dyn Fn(&str) -> bool = &|s| !s.chars().any(|c| c.is_ascii_digit());
    let input = "one, two2, three, one";
    let first = sanitize::list(input, ',', Some(no_digits), &DefaultHost);
    let second = sanitize::list(input, ',', Some(no_digits), &DefaultHost);

    assert_eq!(first, second);
    assert_eq!(first, vec!["one", "three"]);
}
