pub mod allocator;
pub mod calendar;
pub mod sheet;
pub mod time;

use log::info;
use thiserror::Error;

pub use crate::allocator::AllocateError;
pub use crate::calendar::{LeaveDays, LeaveSpec, ResolveError};
pub use crate::sheet::TimeSheet;

use crate::time::Year;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Allocate(#[from] AllocateError),
}

/// Generates the time sheet for a month: distributes `total_hours` over
/// its business days, skipping the leave days, with no day receiving
/// more than `max_hours`.
///
/// The leave days can be given as a count, as explicit days of the
/// month or as both, in which case they have to agree.
pub fn generate_time_sheet(
    year: Year,
    month: usize,
    leave_count: Option<usize>,
    leave_days: Option<LeaveDays>,
    total_hours: f64,
    max_hours: f64,
) -> Result<TimeSheet, GenerateError> {
    let leave = LeaveSpec::reconcile(leave_count, leave_days)?;
    let working_days = calendar::resolve_working_days(year, month, &leave)?;

    info!(
        "distributing {} hours over {} working days",
        total_hours,
        working_days.len()
    );

    let sheet = allocator::allocate(working_days, total_hours, max_hours)?;

    info!("allocated {} hours in total", sheet.total());

    Ok(sheet)
}
