//! Data-driven tests over the JSON fixtures in `tests/data/`.

use once_cell::sync::Lazy;
use polcalc_core::{CompileErrorKind, build, compile};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct ValidCase {
    formula: String,
    vars: Vec<f64>,
    result: f64,
}

#[derive(Debug, Deserialize)]
struct InvalidCase {
    formula: String,
    kind: String,
    position: usize,
}

fn load<T: DeserializeOwned>(name: &str) -> Vec<T> {
    let path = format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name);
    let text = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{path}: {e}"));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("{path}: {e}"))
}

static VALID: Lazy<Vec<ValidCase>> = Lazy::new(|| load("valid.json"));
static INVALID: Lazy<Vec<InvalidCase>> = Lazy::new(|| load("invalid.json"));

fn kind_named(name: &str) -> CompileErrorKind {
    match name {
        "UnexpectedEndOfExpression" => CompileErrorKind::UnexpectedEndOfExpression,
        "UnexpectedContinuationOfExpression" => {
            CompileErrorKind::UnexpectedContinuationOfExpression
        }
        "InvalidTerm" => CompileErrorKind::InvalidTerm,
        other => panic!("unknown error kind in fixture: {other}"),
    }
}

#[test]
fn valid_formulas_evaluate() {
    assert!(!VALID.is_empty());
    for case in VALID.iter() {
        let calc = build(&case.formula, |i| case.vars[i])
            .unwrap_or_else(|e| panic!("{:?}: {e}", case.formula));
        assert_eq!(calc.evaluate(), case.result, "{}", case.formula);
    }
}

#[test]
fn valid_formulas_are_stable_across_compilations() {
    for case in VALID.iter() {
        let first = build(&case.formula, |i| case.vars[i]).unwrap();
        let second = build(&case.formula, |i| case.vars[i]).unwrap();
        assert_eq!(
            first.evaluate().to_bits(),
            second.evaluate().to_bits(),
            "{}",
            case.formula
        );
        assert_eq!(first.evaluate().to_bits(), first.evaluate().to_bits());
    }
}

#[test]
fn valid_formulas_reference_only_supplied_vars() {
    for case in VALID.iter() {
        let expr = compile(&case.formula).unwrap();
        if let Some(max) = expr.max_variable_index() {
            assert!(max < case.vars.len(), "{}", case.formula);
        }
    }
}

#[test]
fn invalid_formulas_report_kind_and_position() {
    assert!(!INVALID.is_empty());
    for case in INVALID.iter() {
        let err = compile(&case.formula)
            .expect_err(&format!("{:?} should not compile", case.formula));
        assert_eq!(
            (err.kind, err.position),
            (kind_named(&case.kind), case.position),
            "{:?}",
            case.formula
        );
    }
}
