use chrono::{Local, NaiveDateTime};

/// e.g. "Tuesday, 04 March 2025"
const DATE_FORMAT: &str = "%A, %d %B %Y";
/// e.g. "02:05:09 PM"
const TIME_FORMAT: &str = "%I:%M:%S %p";

/// The two lines the overlay shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayText {
    pub date: String,
    pub time: String,
}

impl DisplayText {
    pub fn at(instant: &NaiveDateTime) -> Self {
        Self {
            date: instant.format(DATE_FORMAT).to_string(),
            time: instant.format(TIME_FORMAT).to_string(),
        }
    }

    /// Formats the host's local wall clock.
    pub fn now() -> Self {
        Self::at(&Local::now().naive_local())
    }
}
