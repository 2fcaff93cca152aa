use core::fmt;

use crate::time::{Date, WorkingHours};

/// A single line of a time sheet: the hours worked on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetEntry {
    date: Date,
    hours: WorkingHours,
}

impl SheetEntry {
    #[must_use]
    pub const fn new(date: Date, hours: WorkingHours) -> Self {
        Self { date, hours }
    }

    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn hours(&self) -> WorkingHours {
        self.hours
    }
}

/// A finished time sheet: one entry per working day, in chronological
/// order, adding up to the requested monthly total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSheet {
    entries: Vec<SheetEntry>,
}

const SEPARATOR: &str = "-------------------";

impl TimeSheet {
    #[must_use]
    pub fn new(entries: Vec<SheetEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[SheetEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sum of all assigned hours.
    #[must_use]
    pub fn total(&self) -> WorkingHours {
        self.entries.iter().map(|entry| entry.hours()).sum()
    }
}

impl fmt::Display for TimeSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time Sheet:")?;
        writeln!(f, "{}", SEPARATOR)?;

        for entry in &self.entries {
            writeln!(f, "{}: {} hours", entry.date(), entry.hours())?;
        }

        writeln!(f, "{}", SEPARATOR)?;
        write!(f, "Total: {} hours", self.total())
    }
}
