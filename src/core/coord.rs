//! Board geometry: coordinates, axes, and axis sets.
//!
//! ## Coordinate
//!
//! A cell position `(x, y)`. Coordinates order lexicographically (x first,
//! then y), which is the order the board iterates its cells in and the order
//! the claim selector falls back on for residual ties.
//!
//! ## Axis
//!
//! The four line directions a triple can lie on. Each axis has a unit step;
//! walking "negative" along an axis means subtracting that step.

use serde::{Deserialize, Serialize};

/// A cell position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u16,
    pub y: u16,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate by a signed step.
    ///
    /// Returns `None` if either component would go negative or overflow.
    /// Upper board bounds are checked by the board, not here.
    #[must_use]
    pub fn offset(self, dx: i16, dy: i16) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Step one cell along `axis` in the given direction.
    #[must_use]
    pub fn step(self, axis: Axis, direction: Direction) -> Option<Self> {
        let (dx, dy) = axis.delta();
        let sign = direction.sign();
        self.offset(dx * sign, dy * sign)
    }
}

impl From<(u16, u16)> for Coordinate {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of travel along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Against the axis step (e.g. decreasing x on `Horizontal`).
    Negative,
    /// With the axis step.
    Positive,
}

impl Direction {
    /// Both directions, negative first.
    pub const BOTH: [Direction; 2] = [Direction::Negative, Direction::Positive];

    const fn sign(self) -> i16 {
        match self {
            Direction::Negative => -1,
            Direction::Positive => 1,
        }
    }
}

/// A line direction on which three coordinates can be collinear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Along x.
    Horizontal,
    /// Along y.
    Vertical,
    /// x and y increase together.
    DiagonalMain,
    /// x increases while y decreases.
    DiagonalAnti,
}

impl Axis {
    /// All axes in declaration order.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalMain,
        Axis::DiagonalAnti,
    ];

    /// Unit step `(dx, dy)` in the positive direction.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalMain => (1, 1),
            Axis::DiagonalAnti => (1, -1),
        }
    }

    /// The two neighbors of `center` along this axis, negative side first.
    #[must_use]
    pub fn neighbors(self, center: Coordinate) -> Option<(Coordinate, Coordinate)> {
        Some((
            center.step(self, Direction::Negative)?,
            center.step(self, Direction::Positive)?,
        ))
    }

    const fn bit(self) -> u8 {
        match self {
            Axis::Horizontal => 1,
            Axis::Vertical => 1 << 1,
            Axis::DiagonalMain => 1 << 2,
            Axis::DiagonalAnti => 1 << 3,
        }
    }
}

/// A set of axes, stored as a bitmask.
///
/// Iterates in `Axis::ALL` order regardless of insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisSet(u8);

impl AxisSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add an axis. Returns `true` if it was not already present.
    pub fn insert(&mut self, axis: Axis) -> bool {
        let fresh = !self.contains(axis);
        self.0 |= axis.bit();
        fresh
    }

    #[must_use]
    pub const fn contains(self, axis: Axis) -> bool {
        self.0 & axis.bit() != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the axes in the set.
    pub fn iter(self) -> impl Iterator<Item = Axis> {
        Axis::ALL.into_iter().filter(move |&a| self.contains(a))
    }
}

impl FromIterator<Axis> for AxisSet {
    fn from_iter<I: IntoIterator<Item = Axis>>(iter: I) -> Self {
        let mut set = Self::new();
        for axis in iter {
            set.insert(axis);
        }
        set
    }
}
