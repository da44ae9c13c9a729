//! Half-open time ranges on a single day and overlap detection.

use std::fmt::Display;

use qtty::{Quantity, Unit};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntervalError {
    #[error("Interval start must be before its end (start {start}, end {end})")]
    NotIncreasing { start: f64, end: f64 },

    #[error("Interval bounds cannot be NaN")]
    NaN,
}

/// Range `[start, end)` on one day axis.
///
/// Two ranges that only share a boundary instant do not overlap, so
/// back-to-back blocks are legal neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<U: Unit> {
    start: Quantity<U>,
    end: Quantity<U>,
}

impl<U: Unit> Interval<U> {
    /// Creates interval `[start, end)`; empty or reversed bounds are rejected.
    pub fn try_new(start: Quantity<U>, end: Quantity<U>) -> Result<Self, IntervalError> {
        if start.value().is_nan() || end.value().is_nan() {
            return Err(IntervalError::NaN);
        }
        if start.value() >= end.value() {
            return Err(IntervalError::NotIncreasing {
                start: start.value(),
                end: end.value(),
            });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> Quantity<U> {
        self.start
    }

    pub const fn end(&self) -> Quantity<U> {
        self.end
    }

    pub fn duration(&self) -> Quantity<U> {
        self.end - self.start
    }

    /// Returns true if `position` ∈ `[start, end)`.
    pub const fn contains(&self, position: Quantity<U>) -> bool {
        self.start.value() <= position.value() && position.value() < self.end.value()
    }

    /// Checks if this interval shares a positive-length stretch with `other`.
    pub fn overlaps(&self, other: &Interval<U>) -> bool {
        overlap(self, other).is_some()
    }

    pub fn intersection(&self, other: &Interval<U>) -> Option<Interval<U>> {
        overlap(self, other)?;
        let start = if self.start.value() > other.start.value() {
            self.start
        } else {
            other.start
        };
        let end = if self.end.value() < other.end.value() {
            self.end
        } else {
            other.end
        };
        Some(Interval { start, end })
    }
}

/// Length of the stretch shared by `a` and `b`.
///
/// Computes `min(ends) - max(starts)`. A negative or zero difference means no
/// overlap, which makes touching intervals compatible.
pub fn overlap<U: Unit>(a: &Interval<U>, b: &Interval<U>) -> Option<Quantity<U>> {
    let latest_start = if a.start.value() >= b.start.value() {
        a.start
    } else {
        b.start
    };
    let earliest_end = if a.end.value() <= b.end.value() {
        a.end
    } else {
        b.end
    };
    let delta = earliest_end - latest_start;
    (delta.value() > 0.0).then_some(delta)
}

impl<U: Unit> Display for Interval<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.0}, {:.0})", self.start.value(), self.end.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Second;

    fn hm(hour: u32, minute: u32) -> f64 {
        f64::from(hour * 3600 + minute * 60)
    }

    fn iv(start: (u32, u32), end: (u32, u32)) -> Interval<Second> {
        Interval::try_new(
            Quantity::new(hm(start.0, start.1)),
            Quantity::new(hm(end.0, end.1)),
        )
        .unwrap()
    }

    #[test]
    fn test_interval_creation() {
        let interval =
            Interval::try_new(Quantity::<Second>::new(0.0), Quantity::<Second>::new(100.0)).unwrap();
        assert_eq!(interval.duration().value(), 100.0);
        assert_eq!(interval.start().value(), 0.0);
        assert_eq!(interval.end().value(), 100.0);
    }

    #[test]
    fn test_try_new_rejects_empty_and_reversed() {
        let q = Quantity::<Second>::new;
        assert_eq!(
            Interval::try_new(q(10.0), q(10.0)),
            Err(IntervalError::NotIncreasing {
                start: 10.0,
                end: 10.0
            })
        );
        assert!(Interval::try_new(q(20.0), q(10.0)).is_err());
        assert_eq!(Interval::try_new(q(f64::NAN), q(10.0)), Err(IntervalError::NaN));
    }

    #[test]
    fn test_contains_is_half_open() {
        let interval = iv((9, 0), (9, 50));
        assert!(interval.contains(Quantity::new(hm(9, 0))));
        assert!(interval.contains(Quantity::new(hm(9, 49))));
        assert!(!interval.contains(Quantity::new(hm(9, 50))));
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        let first = iv((9, 0), (9, 50));
        let second = iv((9, 50), (10, 40));
        assert_eq!(overlap(&first, &second), None);
        assert_eq!(overlap(&second, &first), None);
        assert!(!first.overlaps(&second));
    }

    #[test]
    fn test_strict_overlap_is_measured_in_seconds() {
        let first = iv((9, 0), (9, 50));
        let second = iv((9, 30), (10, 20));
        assert_eq!(overlap(&first, &second).map(|d| d.value()), Some(1200.0));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let samples = [
            iv((8, 0), (8, 50)),
            iv((8, 30), (9, 20)),
            iv((8, 50), (9, 40)),
            iv((7, 0), (12, 0)),
            iv((13, 0), (14, 15)),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(
                    overlap(a, b).map(|d| d.value()),
                    overlap(b, a).map(|d| d.value())
                );
            }
        }
    }

    #[test]
    fn test_containment_overlap_is_inner_length() {
        let outer = iv((7, 0), (12, 0));
        let inner = iv((9, 0), (9, 50));
        assert_eq!(overlap(&outer, &inner).map(|d| d.value()), Some(3000.0));
        assert_eq!(outer.intersection(&inner), Some(inner));
    }

    #[test]
    fn test_disjoint_intersection_is_none() {
        assert_eq!(iv((8, 0), (9, 0)).intersection(&iv((10, 0), (11, 0))), None);
    }
}
