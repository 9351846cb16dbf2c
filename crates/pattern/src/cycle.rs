//! Repeating ON/OFF pattern over base periods.

use crate::error::PatternError;

/// A repeating boolean pattern selecting which base periods exist.
///
/// The pattern is anchored at raw index 0 and repeats forever. `compress`
/// maps a raw index (every base period addressable) to the dense index in
/// which only ON periods exist; `expand` is its exact inverse on ON points.
///
/// Two cycles are equal when their patterns are equal.
///
/// # Example
///
/// ```
/// use kalends_pattern::Cycle;
///
/// // Day 0 (0000-01-01) is a Saturday: skip Saturdays and Sundays.
/// let work_week = Cycle::new([false, false, true, true, true, true, true]).unwrap();
/// assert_eq!(work_week.compress(2).unwrap(), 0);
/// assert_eq!(work_week.expand(0).unwrap(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle {
    pattern: Vec<bool>,
    /// Compressed offset of each position, or -1 where the pattern is OFF.
    map: Vec<i64>,
    /// Position of each compressed offset.
    inverse: Vec<i64>,
}

impl Cycle {
    /// Creates a cycle from its ON/OFF pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyCycle`] for an empty pattern and
    /// [`PatternError::InactiveCycle`] when no position is ON.
    pub fn new(pattern: impl Into<Vec<bool>>) -> Result<Self, PatternError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(PatternError::EmptyCycle);
        }
        let mut map = Vec::with_capacity(pattern.len());
        let mut inverse = Vec::new();
        for (position, &on) in pattern.iter().enumerate() {
            if on {
                map.push(inverse.len() as i64);
                inverse.push(position as i64);
            } else {
                map.push(-1);
            }
        }
        if inverse.is_empty() {
            return Err(PatternError::InactiveCycle {
                length: pattern.len(),
            });
        }
        Ok(Self {
            pattern,
            map,
            inverse,
        })
    }

    /// Returns the ON/OFF pattern.
    pub fn pattern(&self) -> &[bool] {
        &self.pattern
    }

    /// Returns the number of positions in one repetition.
    pub fn length(&self) -> usize {
        self.pattern.len()
    }

    /// Returns the number of ON positions in one repetition.
    pub fn compressed_length(&self) -> usize {
        self.inverse.len()
    }

    /// Returns `true` if at least one position is OFF. An all-ON cycle maps
    /// every index to itself.
    pub fn is_effective(&self) -> bool {
        self.compressed_length() < self.length()
    }

    /// Maps a raw index to its dense index.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::NegativeTime`] for a negative index and
    /// [`PatternError::OffCycle`] when the index falls on an OFF position.
    pub fn compress(&self, time: i64) -> Result<i64, PatternError> {
        if time < 0 {
            return Err(PatternError::NegativeTime { time });
        }
        let length = self.length() as i64;
        let cycles = time / length;
        let offset = self.map[(time % length) as usize];
        if offset < 0 {
            return Err(PatternError::OffCycle { time });
        }
        // compressed_length <= length, so this is at most `time`
        Ok(cycles * self.compressed_length() as i64 + offset)
    }

    /// Maps a dense index back to its raw index.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::NegativeTime`] for a negative index and
    /// [`PatternError::Overflow`] when the raw index exceeds `i64`.
    pub fn expand(&self, time: i64) -> Result<i64, PatternError> {
        if time < 0 {
            return Err(PatternError::NegativeTime { time });
        }
        let compressed_length = self.compressed_length() as i64;
        let cycles = time / compressed_length;
        let position = self.inverse[(time % compressed_length) as usize];
        cycles
            .checked_mul(self.length() as i64)
            .and_then(|t| t.checked_add(position))
            .ok_or(PatternError::Overflow {
                operation: "cycle expansion",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_week() -> Cycle {
        Cycle::new([false, false, true, true, true, true, true]).unwrap()
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Cycle::new(Vec::new()).unwrap_err(), PatternError::EmptyCycle);
    }

    #[test]
    fn rejects_all_off() {
        assert_eq!(
            Cycle::new([false, false]).unwrap_err(),
            PatternError::InactiveCycle { length: 2 }
        );
    }

    #[test]
    fn lengths() {
        let c = work_week();
        assert_eq!(c.length(), 7);
        assert_eq!(c.compressed_length(), 5);
        assert!(c.is_effective());
        assert!(!Cycle::new([true, true]).unwrap().is_effective());
    }

    #[test]
    fn compress_work_week() {
        let c = work_week();
        assert_eq!(c.compress(2).unwrap(), 0);
        assert_eq!(c.compress(6).unwrap(), 4);
        assert_eq!(c.compress(9).unwrap(), 5);
        assert_eq!(c.compress(0).unwrap_err(), PatternError::OffCycle { time: 0 });
        assert_eq!(c.compress(8).unwrap_err(), PatternError::OffCycle { time: 8 });
    }

    #[test]
    fn expand_work_week() {
        let c = work_week();
        assert_eq!(c.expand(0).unwrap(), 2);
        assert_eq!(c.expand(4).unwrap(), 6);
        assert_eq!(c.expand(5).unwrap(), 9);
    }

    #[test]
    fn negative_times_rejected() {
        let c = work_week();
        assert_eq!(
            c.compress(-1).unwrap_err(),
            PatternError::NegativeTime { time: -1 }
        );
        assert_eq!(
            c.expand(-3).unwrap_err(),
            PatternError::NegativeTime { time: -3 }
        );
    }

    #[test]
    fn inverse_over_several_repetitions() {
        let c = Cycle::new([true, false, true, true, false]).unwrap();
        for t in 0..100 {
            if let Ok(dense) = c.compress(t) {
                assert_eq!(c.expand(dense).unwrap(), t);
            }
        }
        for dense in 0..60 {
            assert_eq!(c.compress(c.expand(dense).unwrap()).unwrap(), dense);
        }
    }

    #[test]
    fn expand_overflow() {
        let c = Cycle::new([false, true]).unwrap();
        assert!(matches!(
            c.expand(i64::MAX),
            Err(PatternError::Overflow { .. })
        ));
    }

    #[test]
    fn equality_by_pattern() {
        assert_eq!(work_week(), work_week());
        assert_ne!(work_week(), Cycle::new([true, true, false]).unwrap());
    }
}
