use core::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::time::{Date, InvalidMonth, Month, WeekDay, Year};

/// Returns the business days (monday to friday) of the month, in
/// chronological order.
#[must_use]
pub fn business_days(year: Year, month: Month) -> Vec<Date> {
    year.days_in(month)
        .filter(|date| date.is_business_day())
        .collect()
}

/// The days of the month on which leave was taken, parsed from a
/// comma-separated list like `"1,10,15"`.
///
/// Days are kept in first-occurrence order and duplicates are dropped,
/// so `"1,15,1,30"` contains the days 1, 15 and 30. An empty input is
/// allowed and means that no leave days are known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveDays {
    days: Vec<usize>,
}

impl LeaveDays {
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn contains(&self, day: usize) -> bool {
        self.days.contains(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.days.iter().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{input}\" is not a valid list of leave days. Expected format: \"1,10,15\"")]
pub struct InvalidLeaveDays {
    input: String,
}

impl FromStr for LeaveDays {
    type Err = InvalidLeaveDays;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let mut days = Vec::new();

        if string.trim().is_empty() {
            return Ok(Self { days });
        }

        for part in string.split(',') {
            let day = part.trim().parse::<usize>().map_err(|_| InvalidLeaveDays {
                input: string.to_string(),
            })?;

            if !days.contains(&day) {
                days.push(day);
            }
        }

        Ok(Self { days })
    }
}

/// The reconciled leave input: how many leave days were taken and, when
/// known, on which days of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveSpec {
    count: usize,
    days: Option<LeaveDays>,
}

impl LeaveSpec {
    /// Reconciles the two ways of specifying leave.
    ///
    /// When both a count and explicit days are given they have to agree
    /// and when only the days are given the count is derived from them.
    pub fn reconcile(
        count: Option<usize>,
        days: Option<LeaveDays>,
    ) -> Result<Self, ResolveError> {
        match (count, days) {
            (None, None) => Err(ResolveError::MissingLeaveSpec),
            (Some(count), None) => Ok(Self { count, days: None }),
            (None, Some(days)) => Ok(Self {
                count: days.len(),
                days: Some(days),
            }),
            (Some(count), Some(days)) => {
                if count != days.len() {
                    return Err(ResolveError::LeaveCountMismatch {
                        count,
                        days: days.len(),
                    });
                }

                Ok(Self {
                    count,
                    days: Some(days),
                })
            }
        }
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn days(&self) -> Option<&LeaveDays> {
        self.days.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    InvalidMonth(#[from] InvalidMonth),
    #[error("either the number of leave days or a list of leave days must be provided")]
    MissingLeaveSpec,
    #[error("leave count ({count}) does not match the number of leave days provided ({days})")]
    LeaveCountMismatch { count: usize, days: usize },
    #[error("leave day {day} is not a valid day in {} {year}", .month.name())]
    InvalidLeaveDay {
        day: usize,
        month: Month,
        year: Year,
    },
    #[error("leave day {day} ({week_day:?}) falls on a weekend in {} {year}", .month.name())]
    WeekendLeaveDay {
        day: usize,
        week_day: WeekDay,
        month: Month,
        year: Year,
    },
    #[error(
        "no working days are left after taking {leave_count} leave days \
         out of {business_days} business days"
    )]
    NoWorkingDays {
        business_days: usize,
        leave_count: usize,
    },
}

/// Resolves the days of the month that are available for work: every
/// business day that is not a leave day.
///
/// When the leave days are known by date they are removed from the
/// business days. When only their number is known, the last business
/// days of the month are treated as leave, so the sheet covers the
/// start of the month.
pub fn resolve_working_days(
    year: Year,
    month: usize,
    leave: &LeaveSpec,
) -> Result<Vec<Date>, ResolveError> {
    let month = Month::try_from(month)?;
    let mut working_days = business_days(year, month);
    let business_day_count = working_days.len();

    debug!(
        "{} {} has {} business days",
        month.name(),
        year,
        business_day_count
    );

    match leave.days() {
        Some(days) if !days.is_empty() => {
            for day in days.iter() {
                let date = Date::new(year, month, day)
                    .map_err(|_| ResolveError::InvalidLeaveDay { day, month, year })?;

                if !date.is_business_day() {
                    return Err(ResolveError::WeekendLeaveDay {
                        day,
                        week_day: date.week_day(),
                        month,
                        year,
                    });
                }
            }

            working_days.retain(|date| !days.contains(date.day()));
        }
        _ => {
            // only the number of leave days is known, so the last
            // business days of the month become the leave
            let remaining = business_day_count
                .checked_sub(leave.count())
                .unwrap_or_default();
            working_days.truncate(remaining);
        }
    }

    if working_days.is_empty() {
        return Err(ResolveError::NoWorkingDays {
            business_days: business_day_count,
            leave_count: leave.count(),
        });
    }

    Ok(working_days)
}
