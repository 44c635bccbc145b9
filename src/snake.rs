use std::collections::VecDeque;

use crate::config::{GridSize, INITIAL_PENDING_GROWTH};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a one-step overrun past any edge stays
/// representable and detectable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighboring position one cell along `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Mutable snake state: body segments, heading, and owed growth.
///
/// A fresh snake is a single segment at the grid center heading left, with
/// three ticks of growth owed, so it reaches length 4 over the first ticks.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    pending_growth: u32,
}

impl Snake {
    /// Creates a snake in its initial state for the given bounds.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        let mut body = VecDeque::new();
        body.push_front(center(bounds));

        Self {
            body,
            heading: Direction::Left,
            pending_growth: INITIAL_PENDING_GROWTH,
        }
    }

    /// Creates a snake from explicit body segments (front is head), with no
    /// growth owed.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            heading,
            pending_growth: 0,
        }
    }

    /// Sets the heading unless `direction` is the exact opposite of the
    /// current one. Reversals are silently ignored, not errors: the head
    /// would otherwise run straight into the second segment.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.heading.opposite() {
            return;
        }

        self.heading = direction;
    }

    /// Moves the head one cell along the current heading.
    ///
    /// Returns `false` and leaves all state untouched when the next head
    /// cell would fall outside `bounds` (boundary death, no wraparound).
    /// Otherwise the new head is pushed; the tail is retained while growth
    /// is owed and popped once it is not.
    pub fn advance(&mut self, bounds: GridSize) -> bool {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        let next_head = self.head().stepped(self.heading);
        if !next_head.is_within_bounds(bounds) {
            return false;
        }

        self.body.push_front(next_head);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }

        true
    }

    /// Adds one tick of owed growth, consumed by subsequent [`advance`]
    /// calls rather than applied instantly.
    ///
    /// [`advance`]: Snake::advance
    pub fn grow(&mut self) {
        self.pending_growth += 1;
    }

    /// Returns true if the head overlaps any non-head segment. Meaningful
    /// on the post-move body, after [`advance`](Snake::advance).
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Restores the initial state in place: one segment at the grid center,
    /// heading left, three ticks of growth owed.
    pub fn reset(&mut self, bounds: GridSize) {
        self.body.clear();
        self.body.push_front(center(bounds));
        self.heading = Direction::Left;
        self.pending_growth = INITIAL_PENDING_GROWTH;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.heading
    }

    /// Returns the number of ticks on which the tail will be retained.
    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }
}

fn center(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}
