use std::ops::Deref;
use std::str::FromStr;

use hifitime::efmt::{Format, Formatter};
use hifitime::Epoch;

/// UTC instant used for scene and band timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time(Epoch);

impl AsRef<Epoch> for Time {
    fn as_ref(&self) -> &Epoch {
        &self.0
    }
}

impl Deref for Time {
    type Target = Epoch;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Time {
    pub fn now() -> Self {
        Time(Epoch::now().expect("failed to get system time"))
    }

    pub fn from_epoch(epoch: Epoch) -> Self {
        Time(epoch)
    }

    /// Create [Time] from a UTC calendar date and time.
    pub fn from_gregorian_utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Time(Epoch::from_gregorian_utc(
            year, month, day, hour, minute, second, 0,
        ))
    }

    /// Format ourself using the provided format string.
    ///
    /// See [hifitime::efmt::Format].
    pub fn format_utc(&self, fmt: &str) -> String {
        let fmt = Format::from_str(fmt).unwrap();
        let formatter = Formatter::to_time_scale(self.0, fmt, hifitime::TimeScale::UTC);
        format!("{formatter}")
    }
}
