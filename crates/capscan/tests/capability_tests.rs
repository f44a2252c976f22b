//! Tests for capability detection end to end

use capscan::analyzer::pruner;
use capscan::parser::Parser;
use capscan::Analyzer;

/// Parse and collect, without pruning.
fn collect(source: &str) -> Vec<&'static str> {
    let (module, interner) = Parser::new(source).unwrap().parse().unwrap();
    Analyzer::new().collect(&module, &interner).entries().to_vec()
}

/// Parse, collect, and prune.
fn analyze(source: &str) -> Vec<&'static str> {
    let (module, interner) = Parser::new(source).unwrap().parse().unwrap();
    let mut set = Analyzer::new().collect(&module, &interner);
    pruner::prune(&mut set);
    set.entries().to_vec()
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_literals_record_their_constructors() {
    assert_eq!(analyze("var n = 1; var s = \"\"; var a = [];"), vec!["Number", "String", "Array"]);
}

// ============================================================================
// Destructuring and pruning
// ============================================================================

#[test]
fn test_destructured_method_falls_without_its_constructor() {
    assert_eq!(collect("const { repeat } = String;"), vec!["String.prototype.repeat"]);
    assert!(analyze("const { repeat } = String;").is_empty());
}

#[test]
fn test_destructured_method_survives_with_a_string_literal() {
    assert_eq!(
        analyze("const { repeat } = String; var greeting = \"hi\";"),
        vec!["String.prototype.repeat", "String"]
    );
}

// ============================================================================
// Iteration protocol
// ============================================================================

#[test]
fn test_iterator_key_call_orders_symbol_last() {
    let entries = collect("obj[Symbol.iterator]();");
    assert_eq!(entries.len(), 15);
    assert_eq!(entries[0], "Symbol.iterator");
    assert_eq!(entries.last(), Some(&"Symbol"));
}

#[test]
fn test_iterator_key_call_prunes_to_the_symbol_pair() {
    assert_eq!(analyze("obj[Symbol.iterator]();"), vec!["Symbol.iterator", "Symbol"]);
}

#[test]
fn test_for_of_orders_symbol_first() {
    assert_eq!(analyze("for (const item of items) {}"), vec!["Symbol", "Symbol.iterator"]);
}

#[test]
fn test_delegation_alone_keeps_nothing_of_the_protocol() {
    assert_eq!(analyze("function* relay(up) { yield* up; }"), vec!["Function"]);
}

#[test]
fn test_iteration_over_a_recorded_collection_keeps_its_entry() {
    let source = r#"
        var registry = new Map();
        function* drain(queue) { yield* queue; }
        for (const task of registry) { task.run(); }
        const { includes } = Array;
    "#;
    assert_eq!(
        analyze(source),
        vec![
            "Map",
            "Function",
            "Symbol.iterator",
            "Map.prototype[@@iterator]",
            "Symbol",
        ]
    );
}

// ============================================================================
// Static methods
// ============================================================================

#[test]
fn test_math_statics_never_survive_pruning() {
    assert_eq!(collect("Math.trunc(9.5);"), vec!["Math.trunc", "Number"]);
    assert_eq!(analyze("Math.trunc(9.5);"), vec!["Number"]);
}

#[test]
fn test_number_statics_survive_through_numeric_literals() {
    assert_eq!(
        analyze("if (Number.isNaN(total)) { count = 0; }"),
        vec!["Number.isNaN", "Number"]
    );
}

#[test]
fn test_object_statics_survive_through_object_literals() {
    assert_eq!(analyze("Object.keys({});"), vec!["Object.keys", "Object"]);
}

#[test]
fn test_promise_statics_survive_through_the_promise_global() {
    assert_eq!(
        analyze("Promise.allSettled(jobs);"),
        vec!["Promise.allSettled", "Promise"]
    );
}

// ============================================================================
// Globals
// ============================================================================

#[test]
fn test_atomics_implies_shared_memory() {
    assert_eq!(
        analyze("Atomics.add(counters, 0, 1);"),
        vec!["Atomics", "SharedArrayBuffer", "Number"]
    );
}

#[test]
fn test_array_buffer_needs_an_array_entry_to_survive() {
    assert!(analyze("new ArrayBuffer(len);").is_empty());
    assert_eq!(
        analyze("var seed = []; new ArrayBuffer(len);"),
        vec!["Array", "ArrayBuffer"]
    );
}

// ============================================================================
// Shadowing
// ============================================================================

#[test]
fn test_local_bindings_shadow_globals() {
    assert_eq!(
        analyze("function run(Promise) { return new Promise(go); } new Promise(go);"),
        vec!["Function", "Promise"]
    );
}

#[test]
fn test_hoisted_vars_shadow_before_their_declaration() {
    assert_eq!(analyze("use(Symbol); var Symbol = 1;"), vec!["Number"]);
}
