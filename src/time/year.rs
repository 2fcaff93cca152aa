use derive_more::Display;

use crate::time::{Date, Month, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    /// Choose the date 0000/01/01 as a base date, because it does not make sense to got past this date.
    const BASE_DATE: (Self, Month, usize, WeekDay) =
        (Self(0), Month::January, 1, WeekDay::Saturday);

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        !self.is_common_year() && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let (year_ref, month_ref, day_ref, week_day_ref) = Self::BASE_DATE;

        // calculate the days elapsed between Self::BASE_DATE and self
        let days = self.days_since(year_ref)
            + (month_ref.as_usize()..month.as_usize())
                .map(|month| self.number_of_days_in_month(Month::new(month)))
                .sum::<usize>()
            + (day - day_ref);

        week_day_ref + days
    }

    /// Returns the number of days that have passed since `other`.
    ///
    /// `(other + self.days_since(other)) == self`
    fn days_since(&self, other: Self) -> usize {
        debug_assert!(self.as_usize() >= other.as_usize());

        (other.as_usize()..self.as_usize())
            .map(|year| Year::new(year).days())
            .sum()
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Iterates over all days of the provided month, in order.
    pub fn days_in(&self, month: Month) -> impl Iterator<Item = Date> {
        let days = self.number_of_days_in_month(month);
        let year = *self;

        (1..=days).map(move |day| Date::new(year, month, day).expect("date should be valid"))
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
