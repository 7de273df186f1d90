//! Benchmark for rule compilation and evaluation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rule_engine_core::rule::cache::{clear_cache, get_or_compile};
use rule_engine_core::{compile, evaluate, record_from, FunctionRegistry, Record, RecordValue};

fn sample_rules() -> Vec<&'static str> {
    vec![
        "age > 30",
        "age > 30 AND salary > 50000",
        "department = Sales OR department = Marketing",
        "age > 25 AND salary > 40000 AND experience > 5",
        "age < 65 AND department = Sales OR experience > 10",
    ]
}

fn sample_record() -> Record {
    let mut record = record_from(vec![
        ("age", 35i64),
        ("salary", 60000i64),
        ("experience", 8i64),
    ]);
    record.insert(
        "department".to_string(),
        RecordValue::Text("Sales".to_string()),
    );
    record
}

fn benchmark_compilation(c: &mut Criterion) {
    let rules = sample_rules();

    c.bench_function("rule_compilation_cold", |b| {
        b.iter(|| {
            clear_cache();
            for rule in &rules {
                let _ = black_box(get_or_compile(rule));
            }
        })
    });

    c.bench_function("rule_compilation_cached", |b| {
        // Warm up cache
        for rule in &rules {
            let _ = get_or_compile(rule);
        }

        b.iter(|| {
            for rule in &rules {
                let _ = black_box(get_or_compile(rule));
            }
        })
    });
}

fn benchmark_evaluation(c: &mut Criterion) {
    let rules = sample_rules();
    let trees: Vec<_> = rules.iter().map(|r| compile(r).unwrap()).collect();
    let record = sample_record();
    let functions = FunctionRegistry::new();

    c.bench_function("rule_evaluation", |b| {
        b.iter(|| {
            for tree in &trees {
                let _ = black_box(evaluate(tree, &record, &functions));
            }
        })
    });
}

criterion_group!(benches, benchmark_compilation, benchmark_evaluation);
criterion_main!(benches);
