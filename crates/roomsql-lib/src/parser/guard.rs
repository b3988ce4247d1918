//! Re-entry guard for rules that recurse without consuming input.

use super::rule::Rule;

/// Stack of active `(rule, position)` frames.
///
/// A rule only ever starts at or after the position of the rule that called
/// it, so the frames sharing the current position form the top of the stack.
#[derive(Debug)]
pub(super) struct ReentryGuard {
    frames: Vec<(Rule, usize)>,
    limit: u32,
}

impl ReentryGuard {
    pub(super) fn new(limit: u32) -> Self {
        Self {
            frames: Vec::new(),
            limit,
        }
    }

    /// Pushes a frame, or returns `false` when `rule` is already active at
    /// `pos` as many times as the limit allows.
    pub(super) fn enter(&mut self, rule: Rule, pos: usize) -> bool {
        let active = self
            .frames
            .iter()
            .rev()
            .take_while(|&&(_, at)| at == pos)
            .filter(|&&(r, _)| r == rule)
            .count();
        if active as u32 >= self.limit {
            return false;
        }
        self.frames.push((rule, pos));
        true
    }

    pub(super) fn exit(&mut self) {
        self.frames.pop();
    }

    pub(super) fn clear(&mut self) {
        self.frames.clear();
    }

    #[cfg(test)]
    pub(super) fn depth(&self) -> usize {
        self.frames.len()
    }
}
