//! Traversal trace recording and rendering
//!
//! Records phase and cell events emitted during an observed traversal so
//! they can be rendered or checked after the fact, keeping all diagnostics
//! out of the algorithm itself.

use bitvec::prelude::*;
use std::fmt::Write;

use crate::algorithm::observer::{Phase, TraversalObserver};

/// Single recorded traversal event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// A leg of a pass began
    PhaseStarted {
        /// Which leg
        phase: Phase,
    },
    /// A cell was appended to the output
    CellVisited {
        /// Row of the visited cell
        row: usize,
        /// Column of the visited cell
        col: usize,
    },
}

/// Captures traversal events for later inspection
///
/// Implements [`TraversalObserver`] so it can be passed straight into an
/// observed traversal. Events are kept in emission order.
#[derive(Debug, Clone, Default)]
pub struct TraceCapture {
    events: Vec<TraceEvent>,
}

impl TraversalObserver for TraceCapture {
    fn phase_started(&mut self, phase: Phase) {
        self.events.push(TraceEvent::PhaseStarted { phase });
    }

    fn cell_visited(&mut self, row: usize, col: usize) {
        self.events.push(TraceEvent::CellVisited { row, col });
    }
}

impl TraceCapture {
    /// Create an empty capture
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Create a capture sized for a known cell count
    ///
    /// Reserves room for one event per cell plus the phase markers each
    /// pass emits.
    pub fn with_capacity(cell_count: usize) -> Self {
        Self {
            events: Vec::with_capacity(cell_count * 2),
        }
    }

    /// All recorded events in emission order
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Render the capture as one event per line
    ///
    /// Phase starts render as their `#1`..`#4` markers and visits as
    /// `row col` coordinate pairs.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            match event {
                TraceEvent::PhaseStarted { phase } => {
                    let _ = writeln!(out, "{}", phase.marker());
                }
                TraceEvent::CellVisited { row, col } => {
                    let _ = writeln!(out, "{row} {col}");
                }
            }
        }
        out
    }

    /// Check that the visits cover a `rows` x `cols` grid exactly once each
    ///
    /// Fails on out-of-bounds coordinates, repeat visits, and unvisited
    /// cells alike.
    pub fn covers_exactly(&self, rows: usize, cols: usize) -> bool {
        let mut visited = bitvec![0; rows * cols];
        let mut count = 0usize;

        for event in &self.events {
            if let TraceEvent::CellVisited { row, col } = event {
                if *row >= rows || *col >= cols {
                    return false;
                }
                let index = row * cols + col;
                if visited.get(index).as_deref() == Some(&true) {
                    return false;
                }
                visited.set(index, true);
                count += 1;
            }
        }

        count == rows * cols
    }
}
