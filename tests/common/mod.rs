use month_sheet::calendar::LeaveDays;
use month_sheet::time::Year;
use month_sheet::{generate_time_sheet, GenerateError, TimeSheet};

/// Generates a sheet the way the command line does, with the leave days
/// coming in as the raw flag value.
#[allow(dead_code)]
pub fn generate(
    total_hours: f64,
    max_hours: f64,
    leave_count: Option<usize>,
    leave_days: Option<&str>,
    month: usize,
    year: usize,
) -> Result<TimeSheet, GenerateError> {
    let leave_days = leave_days.map(|days| {
        days.parse::<LeaveDays>()
            .expect("leave days should be a valid list")
    });

    generate_time_sheet(
        Year::new(year),
        month,
        leave_count,
        leave_days,
        total_hours,
        max_hours,
    )
}

#[must_use]
#[allow(dead_code)]
pub fn dates(sheet: &TimeSheet) -> Vec<String> {
    sheet
        .entries()
        .iter()
        .map(|entry| entry.date().to_string())
        .collect()
}

#[must_use]
#[allow(dead_code)]
pub fn hours(sheet: &TimeSheet) -> Vec<f64> {
    sheet
        .entries()
        .iter()
        .map(|entry| entry.hours().as_hours())
        .collect()
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");
}
