use log::debug;
use thiserror::Error;

use crate::sheet::{SheetEntry, TimeSheet};
use crate::time::{Date, WorkingHours};

/// How far the doubled total may be from a whole number of half-hour
/// units before it is rejected. Inputs like 15.999 are meant as 16.0.
const HALF_HOUR_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocateError {
    #[error("cannot allocate hours without any working days")]
    NoWorkingDays,
    #[error(
        "cannot distribute {total_hours} hours: \
         exceeds the maximum possible {capacity} hours by {excess}"
    )]
    HoursExceedCapacity {
        total_hours: f64,
        capacity: f64,
        excess: f64,
    },
    #[error("a total of {hours} hours cannot be split into half-hour increments")]
    TotalNotHalfHourMultiple { hours: f64 },
    #[error(
        "{hours} hours are not enough for {working_days} working days, \
         every day needs at least half an hour"
    )]
    ZeroHourDay { hours: f64, working_days: usize },
    #[error("allocated {hours} hours on {date}, which exceeds the daily maximum of {max_hours}")]
    MaxHoursExceeded {
        date: Date,
        hours: WorkingHours,
        max_hours: WorkingHours,
    },
}

/// Distributes `total_hours` over the given working days.
///
/// Every day receives a multiple of half an hour, no day receives more
/// than `max_hours` (snapped to the nearest half hour) or nothing at all
/// and the assigned values add up to exactly the requested total. The
/// days must be in chronological order and the sheet preserves it.
///
/// The result only depends on the inputs, repeated calls return the
/// same sheet.
pub fn allocate(
    working_days: Vec<Date>,
    total_hours: f64,
    max_hours: f64,
) -> Result<TimeSheet, AllocateError> {
    let day_count = working_days.len();
    if day_count == 0 {
        return Err(AllocateError::NoWorkingDays);
    }

    let max_hours = WorkingHours::rounded(max_hours);
    let capacity = day_count as f64 * max_hours.as_hours();
    if total_hours > capacity {
        return Err(AllocateError::HoursExceedCapacity {
            total_hours,
            capacity,
            excess: total_hours - capacity,
        });
    }

    // from here on everything is exact integer arithmetic on half-hour
    // units, the only rounding is the tolerance applied to the input
    let doubled = total_hours * 2.0;
    let rounded = doubled.round();
    if !total_hours.is_finite()
        || rounded > f64::from(u16::MAX)
        || (doubled - rounded).abs() > HALF_HOUR_TOLERANCE
    {
        return Err(AllocateError::TotalNotHalfHourMultiple { hours: total_hours });
    }

    if rounded < day_count as f64 {
        return Err(AllocateError::ZeroHourDay {
            hours: total_hours,
            working_days: day_count,
        });
    }

    let units = rounded as usize;
    let base = units / day_count;
    let remainder = units % day_count;

    debug!(
        "distributing {} half-hour units over {} days: {} per day and {} extra",
        units, day_count, base, remainder
    );

    let mut assigned = vec![base; day_count];
    // hand out the leftover units one per day, spread evenly over the
    // month instead of piling up at the start
    for extra in 0..remainder {
        assigned[extra * day_count / remainder] += 1;
    }

    let max_units = usize::from(max_hours.as_half_hours());
    let mut entries = Vec::with_capacity(day_count);

    for (date, day_units) in working_days.into_iter().zip(assigned) {
        let hours = WorkingHours::from_half_hours(day_units as u16);

        if day_units > max_units {
            return Err(AllocateError::MaxHoursExceeded {
                date,
                hours,
                max_hours,
            });
        }

        entries.push(SheetEntry::new(date, hours));
    }

    Ok(TimeSheet::new(entries))
}
