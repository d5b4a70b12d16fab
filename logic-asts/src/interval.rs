//! Time intervals bounding modal operators, and the horizons they induce.
//!
//! An [`Interval`] is a pair of optional non-negative bounds with `start < end` whenever both are
//! present; a missing bound is open. A [`Horizon`] is the amount of future (or distance) a
//! formula looks ahead: either a natural number or unbounded.
use std::fmt;
use std::ops::Add;

use crate::error::ValidationError;

/// Optional `[start, end]` bounds attached to modal operators.
///
/// Example
/// ```
/// use logic_asts::interval::{Horizon, Interval};
///
/// let bounded = Interval::new(Some(0), Some(5)).unwrap();
/// assert_eq!(bounded.to_string(), "[0,5]");
/// assert_eq!(bounded.upper(), Horizon::Bounded(5));
///
/// assert!(Interval::new(Some(3), Some(3)).is_err());
/// assert!(Interval::new(Some(-1), None).is_err());
/// assert_eq!(Interval::new(Some(2), None).unwrap().upper(), Horizon::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval {
    start: Option<u64>,
    end: Option<u64>,
}

impl Interval {
    /// Both bounds open.
    pub const UNBOUNDED: Interval = Interval {
        start: None,
        end: None,
    };

    /// Validate and build an interval.
    ///
    /// Checks run in order: negative bound, point interval, reversed bounds.
    pub fn new(start: Option<i64>, end: Option<i64>) -> Result<Self, ValidationError> {
        let start = start.map(Self::bound).transpose()?;
        let end = end.map(Self::bound).transpose()?;

        if let (Some(start), Some(end)) = (start, end) {
            if start == end {
                return Err(ValidationError::PointInterval { bound: start });
            }
            if start > end {
                return Err(ValidationError::ReversedInterval { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// `[start, end]` with both bounds present.
    #[inline]
    pub fn bounded(start: u64, end: u64) -> Result<Self, ValidationError> {
        if start == end {
            return Err(ValidationError::PointInterval { bound: start });
        }
        if start > end {
            return Err(ValidationError::ReversedInterval { start, end });
        }
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    fn bound(value: i64) -> Result<u64, ValidationError> {
        u64::try_from(value).map_err(|_| ValidationError::NegativeBound { bound: value })
    }

    #[inline]
    pub fn start(&self) -> Option<u64> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<u64> {
        self.end
    }

    /// Whether neither bound is present.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Upper bound as a horizon; a missing end is unbounded.
    #[inline]
    pub fn upper(&self) -> Horizon {
        self.end.map_or(Horizon::Unbounded, Horizon::Bounded)
    }

    /// Horizon of an optional interval: no interval at all means unbounded.
    #[inline]
    pub fn upper_of(interval: Option<&Interval>) -> Horizon {
        interval.map_or(Horizon::Unbounded, Interval::upper)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        write!(f, ",")?;
        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }
        write!(f, "]")
    }
}

/// Look-ahead of a formula: a natural number or unbounded.
///
/// Ordered with every bounded value below [`Horizon::Unbounded`]; addition saturates at
/// `Unbounded`.
///
/// ```
/// use logic_asts::interval::Horizon;
///
/// assert_eq!(Horizon::Bounded(2) + Horizon::Bounded(3), Horizon::Bounded(5));
/// assert_eq!(Horizon::Bounded(2) + Horizon::Unbounded, Horizon::Unbounded);
/// assert!(Horizon::Bounded(u64::MAX) < Horizon::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Horizon {
    Bounded(u64),
    Unbounded,
}

impl Horizon {
    pub const ZERO: Horizon = Horizon::Bounded(0);

    #[inline]
    pub fn is_bounded(self) -> bool {
        matches!(self, Horizon::Bounded(_))
    }

    /// The finite value, if any.
    #[inline]
    pub fn bounded(self) -> Option<u64> {
        match self {
            Horizon::Bounded(value) => Some(value),
            Horizon::Unbounded => None,
        }
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Horizon::ZERO
    }
}

impl From<u64> for Horizon {
    fn from(value: u64) -> Self {
        Horizon::Bounded(value)
    }
}

impl Add for Horizon {
    type Output = Horizon;

    fn add(self, rhs: Horizon) -> Horizon {
        match (self, rhs) {
            // Overflow counts as unbounded
            (Horizon::Bounded(lhs), Horizon::Bounded(rhs)) => lhs
                .checked_add(rhs)
                .map_or(Horizon::Unbounded, Horizon::Bounded),
            _ => Horizon::Unbounded,
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Horizon::Bounded(value) => write!(f, "{value}"),
            Horizon::Unbounded => write!(f, "inf"),
        }
    }
}
