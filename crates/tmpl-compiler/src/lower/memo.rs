//! Handler memoization
//!
//! Event handlers are wrapped in the runtime's bind primitive together with a
//! slot index so the runtime can hand back the same function object on every
//! render. Slots are numbered from zero in traversal order. One context lives
//! for exactly one top-level compile and is shared, never reset, by the nested
//! lowerings of slot content that compile triggers.

use crate::ast::Expression;
use crate::runtime::Runtime;

/// Per-compile handler slot allocator
#[derive(Debug, Default)]
pub struct MemoContext {
    next_slot: u32,
}

impl MemoContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `handler` in a memoized bind call with a fresh slot
    pub fn memoize(&mut self, handler: Expression, runtime: &Runtime<'_>) -> Expression {
        let slot = self.next_slot;
        self.next_slot += 1;
        log::trace!("memoized handler in slot {}", slot);
        runtime.bind(handler, slot)
    }

    /// Number of slots handed out so far
    pub fn slots_used(&self) -> u32 {
        self.next_slot
    }
}
