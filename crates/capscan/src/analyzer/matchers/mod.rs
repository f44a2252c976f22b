//! Matcher registry
//!
//! Each matcher lives in its own module with the shapes it recognizes and
//! the capabilities those shapes imply. `all_matchers` is the registry the
//! analyzer runs with.

pub mod delegated_yield;
pub mod destructuring;
pub mod for_of;
pub mod globals;
pub mod iterator_key;
pub mod literals;
pub mod members;

use crate::analyzer::matcher::Matcher;

/// Build the full matcher registry in registration order.
pub fn all_matchers() -> Vec<Box<dyn Matcher>> {
    vec![
        // Iteration protocol
        Box::new(for_of::ForOfIteration),
        Box::new(iterator_key::IteratorKeyCall),
        Box::new(iterator_key::IteratorKeyTest),
        Box::new(delegated_yield::DelegatedYield),
        // Globals and built-in members
        Box::new(globals::GlobalReferences),
        Box::new(members::MemberAccess),
        Box::new(destructuring::GlobalDestructuring),
        // Core constructors
        Box::new(literals::LiteralForms),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_registry_size() {
        assert_eq!(all_matchers().len(), 8);
    }

    #[test]
    fn test_matcher_names_are_unique() {
        let matchers = all_matchers();
        let names: FxHashSet<&str> = matchers.iter().map(|m| m.meta().name).collect();
        assert_eq!(names.len(), matchers.len());
    }
}
