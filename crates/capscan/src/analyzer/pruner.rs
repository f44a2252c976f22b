//! Post-collection pruning
//!
//! A recorded method only matters if its constructor is reachable, so one
//! ordered pass over the constructor catalog removes every entry prefixed
//! by a constructor the set never recorded. Matching is purely textual:
//! with `Array` absent, `ArrayBuffer` entries disappear too, and each
//! removal feeds the passes after it.

use crate::analyzer::definitions::CONSTRUCTOR_CATALOG;
use crate::analyzer::recorder::CapabilitySet;

/// Drop entries whose constructor never appeared in the set.
pub fn prune(set: &mut CapabilitySet) {
    for constructor in CONSTRUCTOR_CATALOG {
        if !set.contains(constructor) {
            set.retain(|capability| !capability.starts_with(constructor));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::prune;
    use crate::analyzer::Analyzer;
    use crate::parser::Parser;

    fn pruned(source: &str) -> Vec<&'static str> {
        let (module, interner) = Parser::new(source).unwrap().parse().unwrap();
        let mut set = Analyzer::new().collect(&module, &interner);
        prune(&mut set);
        set.entries().to_vec()
    }

    #[test]
    fn test_methods_survive_with_their_constructor() {
        assert_eq!(
            pruned("var count = Number.parseInt(raw, 10);"),
            vec!["Number.parseInt", "Number"]
        );
    }

    #[test]
    fn test_methods_fall_without_their_constructor() {
        assert!(pruned("Math.trunc(n);").is_empty());
        assert!(pruned("Date.now();").is_empty());
    }

    #[test]
    fn test_for_of_prunes_down_to_the_symbol_pair() {
        assert_eq!(
            pruned("for (x of xs) {}"),
            vec!["Symbol", "Symbol.iterator"]
        );
    }

    #[test]
    fn test_delegation_alone_loses_the_whole_protocol() {
        // yield* never records a bare Symbol, so Symbol.iterator and every
        // @@iterator entry fall with it; Function survives on its own.
        assert_eq!(
            pruned("function* relay(up) { yield* up; }"),
            vec!["Function"]
        );
    }

    #[test]
    fn test_array_buffer_falls_under_the_array_prefix() {
        assert!(pruned("new ArrayBuffer(len);").is_empty());
        assert_eq!(
            pruned("var seed = []; new ArrayBuffer(len);"),
            vec!["Array", "ArrayBuffer"]
        );
    }

    #[test]
    fn test_unprefixed_entries_always_survive() {
        assert_eq!(
            pruned("var tag = Symbol.for(\"tag\");"),
            vec!["Symbol.for", "Symbol", "String"]
        );
    }

    #[test]
    fn test_pruning_is_idempotent() {
        let (module, interner) = Parser::new("var seed = []; xs.flat();").unwrap().parse().unwrap();
        let mut set = Analyzer::new().collect(&module, &interner);
        prune(&mut set);
        let once = set.entries().to_vec();
        prune(&mut set);
        assert_eq!(set.entries(), once.as_slice());
    }
}
