//! Parser guards to prevent infinite loops and stack overflow

use super::ParseError;
use crate::parser::token::Span;

/// Maximum iterations for any parser loop before bailing out
const MAX_LOOP_ITERATIONS: usize = 10_000;

/// Maximum nesting depth before rejecting parse
///
/// NOTE: Recursive descent burns several native frames per level of source
/// nesting (statement -> expression -> primary -> statement again), and
/// debug-build test threads run on small stacks. The counter ticks more
/// than once per source level, but even so the limit covers nesting far
/// beyond anything hand-written or bundled JavaScript reaches while
/// staying well clear of a native stack overflow.
pub const MAX_PARSE_DEPTH: usize = 100;

/// Default span for errors without location
#[inline]
fn default_span() -> Span {
    Span::new(0, 0, 0, 0)
}

/// Guard against infinite loops in parser
///
/// Tracks iteration count and returns error if exceeded.
///
/// # Example
///
/// ```ignore
/// let mut guard = LoopGuard::new("parse_arguments");
/// while !done {
///     guard.check()?;
///     // ... parse something ...
/// }
/// ```
pub struct LoopGuard {
    name: &'static str,
    count: usize,
    max: usize,
}

impl LoopGuard {
    /// Create a new loop guard with default limit
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            count: 0,
            max: MAX_LOOP_ITERATIONS,
        }
    }

    /// Create a loop guard with custom limit
    #[inline]
    pub fn with_limit(name: &'static str, max: usize) -> Self {
        Self { name, count: 0, max }
    }

    /// Check iteration count, return error if exceeded
    #[inline]
    pub fn check(&mut self) -> Result<(), ParseError> {
        self.count += 1;
        if self.count > self.max {
            return Err(ParseError::parser_limit_exceeded(
                format!("Loop '{}' exceeded {} iterations", self.name, self.max),
                default_span(),
            ));
        }
        Ok(())
    }

    /// Reset counter (for nested loops)
    #[inline]
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_guard_under_limit() {
        let mut guard = LoopGuard::with_limit("test", 10);
        for _ in 0..10 {
            assert!(guard.check().is_ok());
        }
    }

    #[test]
    fn test_loop_guard_exceeds_limit() {
        let mut guard = LoopGuard::with_limit("test", 10);
        for _ in 0..10 {
            let _ = guard.check();
        }
        // 11th iteration should fail
        assert!(guard.check().is_err());
    }

    #[test]
    fn test_loop_guard_reset() {
        let mut guard = LoopGuard::with_limit("test", 5);
        for _ in 0..5 {
            let _ = guard.check();
        }
        guard.reset();
        // Should work again after reset
        assert!(guard.check().is_ok());
    }
}
