//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;

impl Parser<'_> {
    #[inline]
    pub(super) fn ensure_progress(&self) {
        assert!(
            self.debug_fuel.get() != 0,
            "parser is stuck: too many lookaheads without consuming a token"
        );
        self.debug_fuel.set(self.debug_fuel.get() - 1);
    }

    /// Every rule frame must be released by the time a root rule returns.
    #[inline]
    pub(super) fn assert_balanced(&self) {
        assert!(
            self.pins.is_empty() && self.depth == 0,
            "broken parser invariant: {} rule frames left open",
            self.depth
        );
    }
}
