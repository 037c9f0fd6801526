//! Cell values and their classification.
//!
//! A grid stores plain `i32` values. Their meaning is fixed:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0`   | empty, passable |
//! | `1`   | obstacle, permanent and immovable |
//! | `>=2` | movable token; the value is an opaque identity |
//! | `<0`  | undefined input, handled by [`CellPolicy`] |

use std::fmt;

/// Value of an empty cell.
pub const EMPTY: i32 = 0;

/// Value of a permanent obstacle.
pub const OBSTACLE: i32 = 1;

/// Smallest value denoting a movable token.
pub const MIN_TOKEN: i32 = 2;

/// Returns `true` if `value` denotes an empty cell.
#[inline]
pub const fn is_empty(value: i32) -> bool {
    value == EMPTY
}

/// Returns `true` if `value` denotes a movable token.
#[inline]
pub const fn is_movable(value: i32) -> bool {
    value >= MIN_TOKEN
}

/// Classified view of a raw cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Passable.
    Empty,
    /// Occupied, immovable, permanent.
    Obstacle,
    /// Movable token carrying its identity value (always `>= 2`).
    Token(i32),
    /// A negative value. Not part of the cell vocabulary.
    Undefined(i32),
}

impl Cell {
    /// Classify a raw cell value.
    pub const fn classify(value: i32) -> Self {
        match value {
            EMPTY => Self::Empty,
            OBSTACLE => Self::Obstacle,
            v if v >= MIN_TOKEN => Self::Token(v),
            v => Self::Undefined(v),
        }
    }

    /// The raw value this cell was classified from.
    pub const fn value(self) -> i32 {
        match self {
            Self::Empty => EMPTY,
            Self::Obstacle => OBSTACLE,
            Self::Token(v) | Self::Undefined(v) => v,
        }
    }

    /// Returns `true` for [`Cell::Token`].
    pub const fn is_movable(self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Returns `true` for anything that blocks a falling token.
    ///
    /// Undefined values count as occupied; whether they are admitted at
    /// all is decided by [`CellPolicy`] before settling starts.
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::classify(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Obstacle => write!(f, "obstacle"),
            Self::Token(v) => write!(f, "token {v}"),
            Self::Undefined(v) => write!(f, "undefined value {v}"),
        }
    }
}

/// Treatment of cell values outside `{0, 1, >=2}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellPolicy {
    /// Refuse the whole grid before any cell is touched.
    #[default]
    Reject,
    /// Treat negative values as obstacles: never moved, never
    /// overwritten, and they support tokens resting on them.
    TreatAsObstacle,
}

impl TryFrom<i32> for CellPolicy {
    type Error = i32;

    /// ABI code: `0` = Reject, `1` = TreatAsObstacle.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Reject),
            1 => Ok(Self::TreatAsObstacle),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classify_vocabulary() {
        assert_eq!(Cell::classify(0), Cell::Empty);
        assert_eq!(Cell::classify(1), Cell::Obstacle);
        assert_eq!(Cell::classify(2), Cell::Token(2));
        assert_eq!(Cell::classify(i32::MAX), Cell::Token(i32::MAX));
        assert_eq!(Cell::classify(-1), Cell::Undefined(-1));
    }

    #[test]
    fn undefined_blocks_but_never_moves() {
        let c = Cell::classify(-7);
        assert!(c.is_occupied());
        assert!(!c.is_movable());
    }

    #[test]
    fn policy_codes() {
        assert_eq!(CellPolicy::try_from(0), Ok(CellPolicy::Reject));
        assert_eq!(CellPolicy::try_from(1), Ok(CellPolicy::TreatAsObstacle));
        assert_eq!(CellPolicy::try_from(2), Err(2));
        assert_eq!(CellPolicy::default(), CellPolicy::Reject);
    }

    proptest! {
        #[test]
        fn classify_round_trips_value(v in any::<i32>()) {
            prop_assert_eq!(Cell::classify(v).value(), v);
        }

        #[test]
        fn helpers_agree_with_classify(v in any::<i32>()) {
            let c = Cell::classify(v);
            prop_assert_eq!(is_movable(v), c.is_movable());
            prop_assert_eq!(is_empty(v), c == Cell::Empty);
        }
    }
}
