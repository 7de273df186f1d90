//! Property tests for rule evaluation

use proptest::prelude::*;

use crate::eval::evaluator::evaluate;
use crate::eval::functions::FunctionRegistry;
use crate::eval::record::{record_from, Record, RecordValue};
use crate::rule::{combine, compile};
use crate::store::{decode, encode};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate numeric catalog attributes
fn numeric_attribute_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("age"), Just("salary"), Just("experience")]
}

/// Generate department names
fn department_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Sales"),
        Just("Marketing"),
        Just("Engineering"),
        Just("Support"),
    ]
}

/// Generate a full record covering every catalog attribute
fn record_strategy() -> impl Strategy<Value = Record> {
    (
        0..=80i64,        // age
        0..=200_000i64,   // salary
        0..=40i64,        // experience
        department_strategy(),
    )
        .prop_map(|(age, salary, experience, department)| {
            let mut record = record_from(vec![
                ("age", age),
                ("salary", salary),
                ("experience", experience),
            ]);
            record.insert(
                "department".to_string(),
                RecordValue::Text(department.to_string()),
            );
            record
        })
}

/// Generate an ordering condition together with its expected outcome model
fn ordering_condition_strategy() -> impl Strategy<Value = (String, &'static str, i64, bool)> {
    (
        numeric_attribute_strategy(),
        prop_oneof![Just(">"), Just("<")],
        -100..=250_000i64,
    )
        .prop_map(|(attr, op, threshold)| {
            (format!("{} {} {}", attr, op, threshold), attr, threshold, op == ">")
        })
}

fn numeric_field(record: &Record, attr: &str) -> i64 {
    match record.get(attr) {
        Some(RecordValue::Int(i)) => *i,
        other => panic!("Expected integer for {}, got {:?}", attr, other),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 1: Ordering comparisons agree with the numeric model
    #[test]
    fn prop_ordering_matches_model(
        (rule, attr, threshold, is_greater) in ordering_condition_strategy(),
        record in record_strategy(),
    ) {
        let tree = compile(&rule).unwrap();
        let functions = FunctionRegistry::new();
        let result = evaluate(&tree, &record, &functions).unwrap();

        let value = numeric_field(&record, attr);
        let expected = if is_greater {
            (value as f64) > (threshold as f64)
        } else {
            (value as f64) < (threshold as f64)
        };
        prop_assert_eq!(result, expected, "Rule: {}, value: {}", rule, value);
    }

    /// Property 2: Equality is string-cast equality on the canonical form
    #[test]
    fn prop_equality_matches_string_model(
        expected_department in department_strategy(),
        record in record_strategy(),
    ) {
        let rule = format!("department = {}", expected_department);
        let tree = compile(&rule).unwrap();
        let functions = FunctionRegistry::new();
        let result = evaluate(&tree, &record, &functions).unwrap();

        let stored = record.get("department").unwrap().to_string();
        prop_assert_eq!(result, stored == expected_department);
    }

    /// Property 3: An AND chain evaluates like the conjunction of its parts
    #[test]
    fn prop_and_chain_is_conjunction(
        parts in prop::collection::vec(ordering_condition_strategy(), 1..=4),
        record in record_strategy(),
    ) {
        let rule = parts
            .iter()
            .map(|(cond, _, _, _)| cond.clone())
            .collect::<Vec<_>>()
            .join(" AND ");
        let tree = compile(&rule).unwrap();
        let functions = FunctionRegistry::new();
        let result = evaluate(&tree, &record, &functions).unwrap();

        let expected = parts.iter().all(|(_, attr, threshold, is_greater)| {
            let value = numeric_field(&record, attr) as f64;
            if *is_greater { value > *threshold as f64 } else { value < *threshold as f64 }
        });
        prop_assert_eq!(result, expected, "Rule: {}", rule);
    }

    /// Property 4: Combining rules is equivalent to requiring each one
    #[test]
    fn prop_combine_is_conjunction(
        parts in prop::collection::vec(ordering_condition_strategy(), 1..=4),
        record in record_strategy(),
    ) {
        let rules: Vec<String> = parts.iter().map(|(cond, _, _, _)| cond.clone()).collect();
        let combined = combine(&rules).unwrap().unwrap();
        let functions = FunctionRegistry::new();
        let combined_result = evaluate(&combined, &record, &functions).unwrap();

        let mut each = true;
        for rule in &rules {
            let tree = compile(rule).unwrap();
            each &= evaluate(&tree, &record, &functions).unwrap();
        }
        prop_assert_eq!(combined_result, each);
    }

    /// Property 5: Serialization round-trips to an identical tree with
    /// identical evaluation behavior
    #[test]
    fn prop_round_trip_preserves_evaluation(
        parts in prop::collection::vec(ordering_condition_strategy(), 1..=4),
        record in record_strategy(),
    ) {
        let rule = parts
            .iter()
            .map(|(cond, _, _, _)| cond.clone())
            .collect::<Vec<_>>()
            .join(" OR ");
        let tree = compile(&rule).unwrap();
        let decoded = decode(&encode(&tree).unwrap()).unwrap();
        prop_assert_eq!(&tree, &decoded);

        let functions = FunctionRegistry::new();
        prop_assert_eq!(
            evaluate(&tree, &record, &functions).unwrap(),
            evaluate(&decoded, &record, &functions).unwrap()
        );
    }

    /// Property 6: Evaluating a compiled rule never panics, even when the
    /// record is missing attributes
    #[test]
    fn prop_evaluate_never_panics(
        (rule, _, _, _) in ordering_condition_strategy(),
        age in 0..=80i64,
    ) {
        let tree = compile(&rule).unwrap();
        let functions = FunctionRegistry::new();
        let record = record_from(vec![("age", age)]);
        let _ = evaluate(&tree, &record, &functions);
    }
}
