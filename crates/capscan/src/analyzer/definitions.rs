//! Capability tables for ES2015+ built-ins.
//!
//! Maps source-level names to the runtime capability identifiers they imply.
//! Three tables mirror the three ways a built-in is reached:
//!
//! - [`global_capabilities`]: free identifiers (`Symbol`, `new Promise(...)`)
//! - [`static_method`]: methods on constructor objects (`Array.from`)
//! - [`instance_method`]: prototype methods recognized by bare name
//!   (`s.repeat(3)`, `arr.flat()`)
//!
//! An instance-method name cannot be attributed to a receiver type
//! statically, so a name shared by several prototypes maps to every
//! plausible owner. The pruner later drops owners whose constructor never
//! appears in the set; [`CONSTRUCTOR_CATALOG`] lists the constructors it
//! cross-checks, in pass order.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Constructors the pruner cross-checks, in the order passes run.
///
/// Matching is by textual prefix, so a pass can affect more than its own
/// constructor: with `Array` absent, `ArrayBuffer` entries are removed too.
pub const CONSTRUCTOR_CATALOG: [&str; 37] = [
    "Int8Array",
    "Uint8Array",
    "Uint8ClampedArray",
    "Int16Array",
    "Uint16Array",
    "Int32Array",
    "Uint32Array",
    "Float32Array",
    "Float64Array",
    "Array",
    "ArrayBuffer",
    "Boolean",
    "DataView",
    "Date",
    "Error",
    "EvalError",
    "Function",
    "JSON",
    "Map",
    "Math",
    "Object",
    "Number",
    "Promise",
    "Proxy",
    "RangeError",
    "ReferenceError",
    "Reflect",
    "RegExp",
    "Set",
    "SharedArrayBuffer",
    "String",
    "Symbol",
    "SyntaxError",
    "TypeError",
    "URIError",
    "WeakMap",
    "WeakSet",
];

/// Capabilities implied by iterating a value: the well-known symbol plus the
/// `@@iterator` method of every built-in iterable.
///
/// `for...of` implies the full list. The explicit key forms
/// (`coll[Symbol.iterator]()`, `Symbol.iterator in coll`, `yield*`) imply
/// everything except the leading bare `Symbol` entry; when the key is
/// spelled out, the member expression itself accounts for `Symbol`.
pub const ITERATION_PROTOCOL: [&str; 15] = [
    "Symbol",
    "Symbol.iterator",
    "Int8Array.prototype[@@iterator]",
    "Uint8Array.prototype[@@iterator]",
    "Uint8ClampedArray.prototype[@@iterator]",
    "Int16Array.prototype[@@iterator]",
    "Uint16Array.prototype[@@iterator]",
    "Int32Array.prototype[@@iterator]",
    "Uint32Array.prototype[@@iterator]",
    "Float32Array.prototype[@@iterator]",
    "Float64Array.prototype[@@iterator]",
    "Array.prototype[@@iterator]",
    "String.prototype[@@iterator]",
    "Map.prototype[@@iterator]",
    "Set.prototype[@@iterator]",
];

// ============================================================================
// Globals
// ============================================================================

/// Globals introduced by ES2015 and later. Pre-ES6 globals (`String`,
/// `Object`, `Math`, ...) are absent: referencing them proves nothing
/// about required capabilities.
const GLOBAL_TABLE: &[(&str, &[&str])] = &[
    ("Symbol", &["Symbol"]),
    ("Promise", &["Promise"]),
    ("Proxy", &["Proxy"]),
    ("Reflect", &["Reflect"]),
    ("Map", &["Map"]),
    ("Set", &["Set"]),
    ("WeakMap", &["WeakMap"]),
    ("WeakSet", &["WeakSet"]),
    ("ArrayBuffer", &["ArrayBuffer"]),
    ("SharedArrayBuffer", &["SharedArrayBuffer"]),
    ("DataView", &["DataView"]),
    ("Int8Array", &["Int8Array"]),
    ("Uint8Array", &["Uint8Array"]),
    ("Uint8ClampedArray", &["Uint8ClampedArray"]),
    ("Int16Array", &["Int16Array"]),
    ("Uint16Array", &["Uint16Array"]),
    ("Int32Array", &["Int32Array"]),
    ("Uint32Array", &["Uint32Array"]),
    ("Float32Array", &["Float32Array"]),
    ("Float64Array", &["Float64Array"]),
    // Atomics operations require shared memory.
    ("Atomics", &["Atomics", "SharedArrayBuffer"]),
];

// ============================================================================
// Static methods
// ============================================================================

const STATIC_METHOD_TABLE: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Array",
        &[
            ("from", &["Array.from"]),
            ("of", &["Array.of"]),
            ("isArray", &["Array.isArray"]),
        ],
    ),
    (
        "Object",
        &[
            ("assign", &["Object.assign"]),
            ("entries", &["Object.entries"]),
            ("values", &["Object.values"]),
            ("keys", &["Object.keys"]),
            ("is", &["Object.is"]),
            ("fromEntries", &["Object.fromEntries"]),
            ("getOwnPropertySymbols", &["Object.getOwnPropertySymbols"]),
        ],
    ),
    (
        "String",
        &[
            ("raw", &["String.raw"]),
            ("fromCodePoint", &["String.fromCodePoint"]),
        ],
    ),
    (
        "Number",
        &[
            ("isFinite", &["Number.isFinite"]),
            ("isInteger", &["Number.isInteger"]),
            ("isNaN", &["Number.isNaN"]),
            ("isSafeInteger", &["Number.isSafeInteger"]),
            ("parseFloat", &["Number.parseFloat"]),
            ("parseInt", &["Number.parseInt"]),
        ],
    ),
    (
        "Math",
        &[
            ("trunc", &["Math.trunc"]),
            ("sign", &["Math.sign"]),
            ("cbrt", &["Math.cbrt"]),
            ("clz32", &["Math.clz32"]),
            ("hypot", &["Math.hypot"]),
            ("log2", &["Math.log2"]),
            ("log10", &["Math.log10"]),
            ("fround", &["Math.fround"]),
        ],
    ),
    (
        "Promise",
        &[
            ("allSettled", &["Promise.allSettled"]),
            ("any", &["Promise.any"]),
        ],
    ),
    ("Date", &[("now", &["Date.now"])]),
    (
        "Symbol",
        &[
            ("iterator", &["Symbol.iterator"]),
            ("asyncIterator", &["Symbol.asyncIterator"]),
            ("for", &["Symbol.for"]),
            ("match", &["Symbol.match"]),
            ("replace", &["Symbol.replace"]),
            ("search", &["Symbol.search"]),
            ("split", &["Symbol.split"]),
            ("hasInstance", &["Symbol.hasInstance"]),
            ("isConcatSpreadable", &["Symbol.isConcatSpreadable"]),
            ("species", &["Symbol.species"]),
            ("toPrimitive", &["Symbol.toPrimitive"]),
            ("toStringTag", &["Symbol.toStringTag"]),
            ("unscopables", &["Symbol.unscopables"]),
        ],
    ),
];

// ============================================================================
// Instance methods
// ============================================================================

const INSTANCE_METHOD_TABLE: &[(&str, &[&str])] = &[
    // String.prototype
    ("repeat", &["String.prototype.repeat"]),
    ("startsWith", &["String.prototype.startsWith"]),
    ("endsWith", &["String.prototype.endsWith"]),
    ("padStart", &["String.prototype.padStart"]),
    ("padEnd", &["String.prototype.padEnd"]),
    ("trimStart", &["String.prototype.trimStart"]),
    ("trimEnd", &["String.prototype.trimEnd"]),
    ("codePointAt", &["String.prototype.codePointAt"]),
    ("matchAll", &["String.prototype.matchAll"]),
    // Array.prototype
    ("fill", &["Array.prototype.fill"]),
    ("find", &["Array.prototype.find"]),
    ("findIndex", &["Array.prototype.findIndex"]),
    ("copyWithin", &["Array.prototype.copyWithin"]),
    ("flat", &["Array.prototype.flat"]),
    ("flatMap", &["Array.prototype.flatMap"]),
    // Promise.prototype
    ("finally", &["Promise.prototype.finally"]),
    // Names shared across prototypes map to every plausible owner.
    (
        "includes",
        &["String.prototype.includes", "Array.prototype.includes"],
    ),
    ("at", &["String.prototype.at", "Array.prototype.at"]),
    (
        "entries",
        &[
            "Array.prototype.entries",
            "Map.prototype.entries",
            "Set.prototype.entries",
        ],
    ),
    (
        "keys",
        &[
            "Array.prototype.keys",
            "Map.prototype.keys",
            "Set.prototype.keys",
        ],
    ),
    (
        "values",
        &[
            "Array.prototype.values",
            "Map.prototype.values",
            "Set.prototype.values",
        ],
    ),
];

// ============================================================================
// Lookup
// ============================================================================

static GLOBALS: LazyLock<FxHashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| GLOBAL_TABLE.iter().copied().collect());

static STATIC_METHODS: LazyLock<
    FxHashMap<&'static str, FxHashMap<&'static str, &'static [&'static str]>>,
> = LazyLock::new(|| {
    STATIC_METHOD_TABLE
        .iter()
        .map(|&(owner, methods)| (owner, methods.iter().copied().collect()))
        .collect()
});

static INSTANCE_METHODS: LazyLock<FxHashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| INSTANCE_METHOD_TABLE.iter().copied().collect());

/// Capabilities implied by referencing the global `name`, if any.
pub fn global_capabilities(name: &str) -> Option<&'static [&'static str]> {
    GLOBALS.get(name).copied()
}

/// Capabilities implied by accessing `owner.member` where `owner` is a
/// constructor object.
pub fn static_method(owner: &str, member: &str) -> Option<&'static [&'static str]> {
    STATIC_METHODS.get(owner)?.get(member).copied()
}

/// Capabilities implied by accessing a property named `name` on an unknown
/// receiver.
pub fn instance_method(name: &str) -> Option<&'static [&'static str]> {
    INSTANCE_METHODS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_globals_cover_es2015_names_only() {
        assert_eq!(global_capabilities("Symbol"), Some(&["Symbol"][..]));
        assert_eq!(global_capabilities("Promise"), Some(&["Promise"][..]));
        assert_eq!(global_capabilities("Uint8ClampedArray").map(|c| c.len()), Some(1));
        // Pre-ES6 globals prove nothing.
        assert_eq!(global_capabilities("String"), None);
        assert_eq!(global_capabilities("Object"), None);
        assert_eq!(global_capabilities("Math"), None);
        assert_eq!(global_capabilities("Date"), None);
    }

    #[test]
    fn test_atomics_implies_shared_memory() {
        assert_eq!(
            global_capabilities("Atomics"),
            Some(&["Atomics", "SharedArrayBuffer"][..])
        );
    }

    #[test]
    fn test_static_method_lookup() {
        assert_eq!(static_method("Array", "from"), Some(&["Array.from"][..]));
        assert_eq!(
            static_method("Symbol", "iterator"),
            Some(&["Symbol.iterator"][..])
        );
        assert_eq!(static_method("Math", "trunc"), Some(&["Math.trunc"][..]));
        // Pre-ES6 statics are not tracked.
        assert_eq!(static_method("Array", "slice"), None);
        assert_eq!(static_method("JSON", "stringify"), None);
        assert_eq!(static_method("missing", "from"), None);
    }

    #[test]
    fn test_instance_method_lookup() {
        assert_eq!(
            instance_method("repeat"),
            Some(&["String.prototype.repeat"][..])
        );
        assert_eq!(
            instance_method("includes"),
            Some(&["String.prototype.includes", "Array.prototype.includes"][..])
        );
        assert_eq!(instance_method("entries").map(|c| c.len()), Some(3));
        // Pre-ES6 prototype methods are not tracked.
        assert_eq!(instance_method("forEach"), None);
        assert_eq!(instance_method("slice"), None);
    }

    #[test]
    fn test_iteration_protocol_shape() {
        assert_eq!(ITERATION_PROTOCOL[0], "Symbol");
        assert_eq!(ITERATION_PROTOCOL[1], "Symbol.iterator");
        assert_eq!(ITERATION_PROTOCOL[14], "Set.prototype[@@iterator]");
        assert!(ITERATION_PROTOCOL[2..]
            .iter()
            .all(|entry| entry.ends_with(".prototype[@@iterator]")));
    }

    #[test]
    fn test_catalog_order_checks_typed_arrays_first() {
        assert_eq!(CONSTRUCTOR_CATALOG[0], "Int8Array");
        assert_eq!(CONSTRUCTOR_CATALOG[9], "Array");
        assert_eq!(CONSTRUCTOR_CATALOG[10], "ArrayBuffer");
        assert_eq!(CONSTRUCTOR_CATALOG[36], "WeakSet");
    }
}
