use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    iter,
    marker::PhantomData,
    ops::{Add, Div, Sub},
    time::Duration,
};

use serde::{Serialize, Serializer};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A time granularity with a fixed number of nanoseconds per tick.
///
/// Implementors are zero-sized markers; the unit is picked at compile time
/// through the type parameter of [`crate::Timer`] and [`crate::BenchTimer`].
pub trait DurationUnit:
    Copy + Clone + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Nanoseconds in one tick of this unit.
    const NANOS: u128;

    /// Suffix used when displaying a [`Ticks`] value.
    const SUFFIX: &'static str;
}

macro_rules! define_duration_unit {
    ($(#[$meta:meta])* $name:ident, $nanos:expr, $suffix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl DurationUnit for $name {
            const NANOS: u128 = $nanos;
            const SUFFIX: &'static str = $suffix;
        }
    };
}

define_duration_unit!(Nanoseconds, 1, "ns");
define_duration_unit!(Microseconds, 1_000, "µs");
define_duration_unit!(Milliseconds, 1_000_000, "ms");
define_duration_unit!(Seconds, NANOS_PER_SEC, "s");
define_duration_unit!(Minutes, 60 * NANOS_PER_SEC, "min");
define_duration_unit!(Hours, 3_600 * NANOS_PER_SEC, "h");
define_duration_unit!(Days, 86_400 * NANOS_PER_SEC, "d");
define_duration_unit!(Weeks, 604_800 * NANOS_PER_SEC, "w");
define_duration_unit!(
    /// Average Gregorian month, 30.436875 days.
    Months,
    2_629_746 * NANOS_PER_SEC,
    "mo"
);
define_duration_unit!(
    /// Average Gregorian year, 365.2425 days.
    Years,
    31_556_952 * NANOS_PER_SEC,
    "y"
);

/// A whole number of `U` ticks.
pub struct Ticks<U: DurationUnit> {
    count: u64,
    _unit: PhantomData<U>,
}

impl<U: DurationUnit> Ticks<U> {
    pub const ZERO: Ticks<U> = Ticks::new(0);

    pub const fn new(count: u64) -> Self {
        Self {
            count,
            _unit: PhantomData,
        }
    }

    /// Converts `duration` to whole ticks, truncating any remainder.
    pub fn from_duration(duration: Duration) -> Self {
        Self::saturating(duration.as_nanos() / U::NANOS)
    }

    /// Converts `duration` to the nearest whole tick, ties to even.
    pub fn rounded(duration: Duration) -> Self {
        let nanos = duration.as_nanos();
        let quotient = nanos / U::NANOS;
        let remainder = nanos % U::NANOS;

        let round_up = match (remainder * 2).cmp(&U::NANOS) {
            Ordering::Greater => true,
            Ordering::Equal => quotient % 2 == 1,
            Ordering::Less => false,
        };

        Self::saturating(if round_up { quotient + 1 } else { quotient })
    }

    fn saturating(count: u128) -> Self {
        Self::new(u64::try_from(count).unwrap_or(u64::MAX))
    }

    pub const fn count(&self) -> u64 {
        self.count
    }

    pub fn as_duration(&self) -> Duration {
        let nanos = u128::from(self.count) * U::NANOS;
        match u64::try_from(nanos / NANOS_PER_SEC) {
            Ok(secs) => Duration::new(secs, (nanos % NANOS_PER_SEC) as u32),
            Err(_) => Duration::MAX,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.count == 0
    }
}

// Manual impls keep the bounds on `U` down to `DurationUnit`.

impl<U: DurationUnit> Clone for Ticks<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: DurationUnit> Copy for Ticks<U> {}

impl<U: DurationUnit> Default for Ticks<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: DurationUnit> PartialEq for Ticks<U> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl<U: DurationUnit> Eq for Ticks<U> {}

impl<U: DurationUnit> PartialOrd for Ticks<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: DurationUnit> Ord for Ticks<U> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count)
    }
}

impl<U: DurationUnit> Hash for Ticks<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
    }
}

impl<U: DurationUnit> Debug for Ticks<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticks({}{})", self.count, U::SUFFIX)
    }
}

impl<U: DurationUnit> Display for Ticks<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, U::SUFFIX)
    }
}

impl<U: DurationUnit> Serialize for Ticks<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.count)
    }
}

impl<U: DurationUnit> From<Duration> for Ticks<U> {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

impl<U: DurationUnit> Add for Ticks<U> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.count.saturating_add(other.count))
    }
}

impl<U: DurationUnit> Sub for Ticks<U> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.count.saturating_sub(other.count))
    }
}

impl<U: DurationUnit> Div<u64> for Ticks<U> {
    type Output = Self;

    fn div(self, divisor: u64) -> Self::Output {
        Self::new(self.count / divisor)
    }
}

impl<U: DurationUnit> iter::Sum for Ticks<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, ticks| acc + ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_duration_truncates() {
        let ticks = Ticks::<Milliseconds>::from_duration(Duration::from_micros(2_999));
        assert_eq!(ticks.count(), 2);

        let ticks = Ticks::<Seconds>::from_duration(Duration::from_millis(999));
        assert!(ticks.is_zero());
    }

    #[test]
    fn test_rounded_ties_to_even() {
        assert_eq!(
            Ticks::<Milliseconds>::rounded(Duration::from_micros(2_500)).count(),
            2
        );
        assert_eq!(
            Ticks::<Milliseconds>::rounded(Duration::from_micros(3_500)).count(),
            4
        );
        assert_eq!(
            Ticks::<Milliseconds>::rounded(Duration::from_micros(3_501)).count(),
            4
        );
        assert_eq!(
            Ticks::<Milliseconds>::rounded(Duration::from_micros(3_499)).count(),
            3
        );
    }

    #[test]
    fn test_coarse_units() {
        let week = Duration::from_secs(7 * 86_400);
        assert_eq!(Ticks::<Days>::from_duration(week).count(), 7);
        assert_eq!(Ticks::<Weeks>::from_duration(week).count(), 1);
        assert_eq!(Ticks::<Hours>::from_duration(week).count(), 168);
        assert_eq!(
            Ticks::<Minutes>::from_duration(Duration::from_secs(119)).count(),
            1
        );

        let year = Duration::from_secs(31_556_952);
        assert_eq!(Ticks::<Years>::from_duration(year).count(), 1);
        assert_eq!(Ticks::<Months>::from_duration(year).count(), 12);
    }

    #[test]
    fn test_as_duration() {
        assert_eq!(
            Ticks::<Microseconds>::new(1_500).as_duration(),
            Duration::from_micros(1_500)
        );
        assert_eq!(
            Ticks::<Hours>::new(2).as_duration(),
            Duration::from_secs(7_200)
        );
        assert_eq!(Ticks::<Years>::new(u64::MAX).as_duration(), Duration::MAX);
    }

    #[test]
    fn test_saturates_on_overflow() {
        let ticks = Ticks::<Nanoseconds>::from_duration(Duration::MAX);
        assert_eq!(ticks.count(), u64::MAX);
        assert_eq!((ticks + Ticks::new(1)).count(), u64::MAX);
        assert!((Ticks::<Nanoseconds>::ZERO - ticks).is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let total: Ticks<Milliseconds> =
            [1, 2, 3, 4].into_iter().map(Ticks::<Milliseconds>::new).sum();
        assert_eq!(total.count(), 10);
        assert_eq!((total / 4).count(), 2);
        assert_eq!((total - Ticks::new(3)).count(), 7);
    }

    #[test]
    fn test_serializes_as_count() {
        let json = serde_json::to_string(&Ticks::<Milliseconds>::new(250)).unwrap();
        assert_eq!(json, "250");
    }

    #[test]
    fn test_display() {
        assert_eq!(Ticks::<Milliseconds>::new(42).to_string(), "42ms");
        assert_eq!(Ticks::<Microseconds>::new(7).to_string(), "7µs");
        assert_eq!(Ticks::<Minutes>::new(3).to_string(), "3min");
    }
}
