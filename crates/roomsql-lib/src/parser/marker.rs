//! Parse events and the markers that delimit them.
//!
//! Rules never touch the tree builder directly. They append events, and a
//! marker remembers where its node starts in the event list. Rolling a marker
//! back truncates the list, so a failed attempt leaves no trace.

use super::core::Parser;
use super::cst::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Event {
    /// Slot of an open marker, or of a marker dropped without a label.
    Tombstone,
    Start {
        kind: SyntaxKind,
        /// Event index of a node that wraps this one; set by [`CompletedMarker::precede`].
        forward_parent: Option<usize>,
    },
    Token {
        kind: SyntaxKind,
    },
    Finish,
}

/// An open parse region.
///
/// Must be completed, abandoned or rolled back before being dropped.
#[must_use]
#[derive(Debug)]
pub(crate) struct Marker {
    event: usize,
    pos: usize,
    diagnostics: usize,
    /// The completed node this marker was opened to wrap, if any.
    preceded: Option<usize>,
    closed: bool,
}

impl Marker {
    /// Wraps everything parsed since the marker was opened in a `kind` node.
    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.closed = true;
        let slot = &mut p.events[self.event];
        debug_assert!(matches!(slot, Event::Tombstone));
        *slot = Event::Start {
            kind,
            forward_parent: None,
        };
        p.events.push(Event::Finish);
        CompletedMarker { event: self.event }
    }

    /// Closes the region without a node; its children splice into the parent.
    pub(crate) fn abandon(mut self, p: &mut Parser<'_>) {
        self.closed = true;
        self.detach(p);
        if self.event == p.events.len() - 1 {
            p.events.pop();
        }
    }

    /// Undoes everything parsed since the marker was opened.
    pub(crate) fn rollback(mut self, p: &mut Parser<'_>) {
        self.closed = true;
        p.events.truncate(self.event);
        p.pos = self.pos;
        p.diagnostics.truncate(self.diagnostics);
        self.detach(p);
    }

    /// Unlinks the node this marker was going to wrap.
    fn detach(&self, p: &mut Parser<'_>) {
        if let Some(child) = self.preceded
            && let Event::Start { forward_parent, .. } = &mut p.events[child]
        {
            *forward_parent = None;
        }
    }

    /// Commits with `kind` (or splices when `None`) on success, rolls back otherwise.
    /// Returns `success` unchanged so calls chain inside boolean rule bodies.
    pub(crate) fn done(self, p: &mut Parser<'_>, kind: Option<SyntaxKind>, success: bool) -> bool {
        match (success, kind) {
            (false, _) => self.rollback(p),
            (true, Some(kind)) => {
                self.complete(p, kind);
            }
            (true, None) => self.abandon(p),
        }
        success
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.closed && !std::thread::panicking() {
            panic!("Marker must be completed, abandoned or rolled back");
        }
    }
}

/// A node that has been closed but can still be wrapped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompletedMarker {
    event: usize,
}

impl CompletedMarker {
    /// Opens a marker whose node will enclose this one, even though its start
    /// event comes later in the list.
    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let mut m = p.open();
        if let Event::Start { forward_parent, .. } = &mut p.events[self.event] {
            *forward_parent = Some(m.event);
        }
        m.preceded = Some(self.event);
        m
    }
}

impl Parser<'_> {
    /// Opens a marker at the current position.
    pub(crate) fn open(&mut self) -> Marker {
        let event = self.events.len();
        self.events.push(Event::Tombstone);
        Marker {
            event,
            pos: self.pos,
            diagnostics: self.diagnostics.len(),
            preceded: None,
            closed: false,
        }
    }
}
