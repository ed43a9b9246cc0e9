//! Integration tests for building, joining and collecting validation outcomes.

use std::collections::HashMap;

use inquest::rules::{Email, Iban, MaxLen, MinLen, NumberMin, Required};
use inquest::{
    collect, field, group, is_validation_error, join, Code, Failure, Map, Rejection, Slice,
    Verdict, Violation,
};
use serde_json::json;

fn fail(code: &'static str) -> impl Fn(&str) -> Verdict {
    move |_| Err(Violation::new(code).into())
}

#[derive(Debug, thiserror::Error)]
#[error("connection reset")]
struct ConnectionReset;

#[test]
fn test_field_all_pass_returns_ok() {
    let result = field("email", &"john@example.com", &[&Required, &Email, &MaxLen(64)]);
    assert!(result.is_ok());
}

#[test]
fn test_field_preserves_violation_order() {
    let errors = collect(field("name", "", &[&fail("a"), &fail("b")]));

    assert_eq!(errors.len(), 1);
    let codes: Vec<_> = errors[0].violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["a", "b"]);
}

#[test]
fn test_join_merges_same_exact_path() {
    let errors = collect(join([
        field("x", "", &[&fail("fail")]),
        field("x", "", &[&fail("fail2")]),
    ]));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].exact_path, "x");
    assert_eq!(errors[0].violations.len(), 2);
}

#[test]
fn test_join_keeps_declaration_order() {
    let errors = collect(join([
        field("a", "", &[&fail("f")]),
        field("b", "", &[&fail("g")]),
    ]));

    let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, vec!["a", "b"]);
}

#[test]
fn test_slice_paths() {
    let totals: Vec<i64> = vec![1, 10, 3];
    let errors = collect(Slice::new("data", &totals).items("total", &[&NumberMin(5)]));

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.path == "data.*.total"));
    assert_eq!(errors[0].exact_path, "data.0.total");
    assert_eq!(errors[1].exact_path, "data.2.total");
    assert_eq!(errors[0].args.get("index"), Some(&json!(0)));
    assert_eq!(errors[1].args.get("index"), Some(&json!(2)));
}

#[test]
fn test_map_paths() {
    let data = HashMap::from([
        ("first".to_string(), "John".to_string()),
        ("second".to_string(), String::new()),
    ]);
    let errors = collect(Map::new("data", &data).values("name", &[&Required]));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "data.name");
    assert_eq!(errors[0].exact_path, "data.second.name");
    assert_eq!(errors[0].args.get("key"), Some(&json!("second")));
}

#[test]
fn test_map_missing_key() {
    let items = HashMap::from([("k".to_string(), "v".to_string())]);
    let errors = collect(Map::new("items", &items).key("email", "missing", &[&Email]));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].violations.len(), 1);
    assert_eq!(errors[0].violations[0].code, Code::UnknownField);
    assert_eq!(errors[0].args.get("key"), Some(&json!("missing")));
}

#[test]
fn test_fatal_error_is_returned_unwrapped() {
    let reset = |_: &str| -> Verdict { Err(Rejection::fatal(ConnectionReset)) };

    let result = join([
        field("a", "", &[&fail("a")]),
        group("b", field("c", "", &[&fail("c"), &reset, &fail("d")])),
        field("e", "", &[&fail("e")]),
    ]);

    match result {
        Err(Failure::Fatal(fatal)) => {
            assert!(fatal.is::<ConnectionReset>());
            assert!(collect(Err(Failure::Fatal(fatal))).is_empty());
        }
        other => panic!("expected fatal, got {:?}", other),
    }
}

#[test]
fn test_fatal_error_identity() {
    let reset = |_: &str| -> Verdict { Err(Rejection::fatal(ConnectionReset)) };
    let result = field("name", "", &[&fail("required"), &reset]);

    match result {
        Err(Failure::Fatal(fatal)) => {
            assert!(fatal.downcast_ref::<ConnectionReset>().is_some());
            assert_eq!(fatal.to_string(), "connection reset");
            let inner = fatal.into_inner();
            assert!(inner.downcast::<ConnectionReset>().is_ok());
        }
        other => panic!("expected fatal, got {:?}", other),
    }
}

#[test]
fn test_is_validation_error_through_wrappers() {
    #[derive(Debug, thiserror::Error)]
    #[error("handler failed")]
    struct Handler(#[source] Service);

    #[derive(Debug, thiserror::Error)]
    #[error("service failed")]
    struct Service(#[source] Failure);

    let invalid_iban = || field("iban", &"invalid", &[&Iban]).unwrap_err();
    assert!(is_validation_error(&invalid_iban()));
    assert!(is_validation_error(&Service(invalid_iban())));
    assert!(is_validation_error(&Handler(Service(invalid_iban()))));

    assert!(!is_validation_error(&ConnectionReset));
    assert!(!is_validation_error(&Handler(Service(Failure::fatal(ConnectionReset)))));
}

#[test]
fn test_nested_structs() {
    struct Address {
        street: String,
        city: String,
    }

    struct Customer {
        name: String,
        addresses: Vec<Address>,
    }

    fn address(address: &Address) -> Verdict {
        join([
            field("street", &address.street, &[&Required]),
            field("city", &address.city, &[&Required, &MinLen(2)]),
        ])?;
        Ok(())
    }

    let customer = Customer {
        name: "Jane".into(),
        addresses: vec![
            Address {
                street: "Main".into(),
                city: "A".into(),
            },
            Address {
                street: String::new(),
                city: "Utrecht".into(),
            },
        ],
    };

    let result = group(
        "customer",
        join([
            field("name", &customer.name, &[&Required]),
            Slice::new("addresses", &customer.addresses).items("", &[&address]),
        ]),
    );

    let errors = collect(result);
    let paths: Vec<_> = errors
        .iter()
        .map(|e| (e.path.as_str(), e.exact_path.as_str()))
        .collect();
    assert_eq!(
        paths,
        vec![
            ("customer.addresses.*.city", "customer.addresses.0.city"),
            ("customer.addresses.*.street", "customer.addresses.1.street"),
        ]
    );
    assert_eq!(errors[0].violations[0].code, Code::StringMin);
    assert_eq!(errors[1].args.get("index"), Some(&json!(1)));
}
