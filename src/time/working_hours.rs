use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

/// Creates a `WorkingHours` from hours and minutes, checked at compile time.
///
/// ```
/// # use month_sheet::working_hours;
/// let hours = working_hours!(5:30);
/// assert_eq!(hours.as_hours(), 5.5);
/// ```
#[macro_export]
macro_rules! working_hours {
    ($hours:literal : $mins:literal) => {{
        // sheets are filled in half-hour steps
        static_assertions::const_assert!($mins == 0 || $mins == 30);

        $crate::time::WorkingHours::from_half_hours($hours * 2 + $mins / 30)
    }};
}

/// An amount of working time, stored as a whole number of half-hour units.
///
/// This is the granularity a time sheet is filled in at: every value that
/// can appear on a sheet is a multiple of half an hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkingHours {
    half_hours: u16,
}

impl WorkingHours {
    #[must_use]
    pub const fn from_half_hours(half_hours: u16) -> Self {
        Self { half_hours }
    }

    #[must_use]
    pub const fn as_half_hours(&self) -> u16 {
        self.half_hours
    }

    #[must_use]
    pub fn as_hours(&self) -> f64 {
        f64::from(self.half_hours) / 2.0
    }

    /// Snaps the given hours to the nearest half-hour increment.
    ///
    /// Float to int casts saturate, so non-finite and out-of-range
    /// values collapse to the representable bounds.
    #[must_use]
    pub fn rounded(hours: f64) -> Self {
        Self {
            half_hours: (hours * 2.0).round() as u16,
        }
    }
}

impl Add for WorkingHours {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            half_hours: self.half_hours + rhs.half_hours,
        }
    }
}

impl AddAssign for WorkingHours {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for WorkingHours {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, hours| acc + hours)
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // always exactly one fractional digit, so 6 units are "3.0"
        write!(f, "{}.{}", self.half_hours / 2, self.half_hours % 2 * 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(working_hours!(0:00).to_string(), "0.0");
        assert_eq!(working_hours!(0:30).to_string(), "0.5");
        assert_eq!(working_hours!(5:30).to_string(), "5.5");
        assert_eq!(working_hours!(6:00).to_string(), "6.0");
        assert_eq!(working_hours!(115:30).to_string(), "115.5");
    }

    #[test]
    fn test_as_hours() {
        assert_eq!(working_hours!(0:00).as_hours(), 0.0);
        assert_eq!(working_hours!(0:30).as_hours(), 0.5);
        assert_eq!(working_hours!(8:00).as_hours(), 8.0);
        assert_eq!(working_hours!(7:30).as_hours(), 7.5);
    }

    #[test]
    fn test_rounded() {
        // .25 above a half hour rounds up, .2 below rounds down
        assert_eq!(WorkingHours::rounded(2.3), working_hours!(2:30));
        assert_eq!(WorkingHours::rounded(2.1), working_hours!(2:00));
        assert_eq!(WorkingHours::rounded(2.5), working_hours!(2:30));
        assert_eq!(WorkingHours::rounded(2.7), working_hours!(2:30));
        assert_eq!(WorkingHours::rounded(2.8), working_hours!(3:00));
        assert_eq!(WorkingHours::rounded(7.7), working_hours!(7:30));
        assert_eq!(WorkingHours::rounded(8.0), working_hours!(8:00));

        // garbage collapses to zero instead of panicking
        assert_eq!(WorkingHours::rounded(-3.0), working_hours!(0:00));
        assert_eq!(WorkingHours::rounded(f64::NAN), working_hours!(0:00));
    }

    #[test]
    fn test_sum() {
        let total: WorkingHours = [
            working_hours!(5:30),
            working_hours!(6:00),
            working_hours!(0:30),
        ]
        .into_iter()
        .sum();

        assert_eq!(total, working_hours!(12:00));

        let mut accumulated = WorkingHours::default();
        accumulated += working_hours!(1:30);
        accumulated += working_hours!(2:00);
        assert_eq!(accumulated, working_hours!(3:30));
    }

    #[test]
    fn test_ordering() {
        assert!(working_hours!(5:30) < working_hours!(6:00));
        assert!(working_hours!(8:00) > working_hours!(7:30));
        assert_eq!(working_hours!(4:00), WorkingHours::from_half_hours(8));
    }
}
