//! Null sentinels for identifiers, dates and times.
//!
//! The sentinels are chosen to sit outside the space of values that normal
//! construction produces: year 1000 is never a business date, and the
//! all-zero UUID is the reserved nil UUID. Time is the exception: the null
//! time is midnight, which is also a legitimate wall-clock value, so callers
//! that care must track absence on the date side.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Character a null TUID is made of.
pub const TUID_EMPTY_CHAR: char = '0';

/// Width of every TUID, null or not.
pub const TUID_LENGTH: usize = 24;

/// [`TUID_EMPTY_CHAR`] repeated [`TUID_LENGTH`] times.
pub const NULL_TUID: &str = "000000000000000000000000";

/// The nil UUID in canonical 8-4-4-4-12 layout.
pub const NULL_UUID: &str = "00000000-0000-0000-0000-000000000000";

pub const NULL_DATE: Date = Date {
    year: 1000,
    month: 1,
    day: 1,
};

pub const NULL_TIME: Time = Time {
    hour: 0,
    minute: 0,
    second: 0,
    millisecond: 0,
    microsecond: 0,
};

pub const NULL_DATETIME: DateTime = DateTime::new(NULL_DATE, NULL_TIME);

/// Calendar date as a plain triple. No calendar rules are applied here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub const fn is_null(&self) -> bool {
        self.year == NULL_DATE.year && self.month == NULL_DATE.month && self.day == NULL_DATE.day
    }

    /// Positive year, month in 1..=12, day in 1..=31. Month lengths and leap
    /// years are left to a real calendar.
    pub const fn has_valid_ranges(&self) -> bool {
        self.year > 0 && self.month >= 1 && self.month <= 12 && self.day >= 1 && self.day <= 31
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Wall-clock time with microsecond resolution split into its parts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub microsecond: u32,
}

impl Time {
    pub const fn new(
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        microsecond: u32,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            microsecond,
        }
    }

    pub const fn is_null(&self) -> bool {
        self.hour == 0
            && self.minute == 0
            && self.second == 0
            && self.millisecond == 0
            && self.microsecond == 0
    }

    /// Every field inside its natural range.
    pub const fn is_valid(&self) -> bool {
        self.hour <= 23
            && self.minute <= 59
            && self.second <= 59
            && self.millisecond <= 999
            && self.microsecond <= 999
    }

    /// Sub-second part in nanoseconds. `None` unless both sub-second fields
    /// are within 0..=999.
    pub const fn subsec_nanos(&self) -> Option<u32> {
        if self.millisecond > 999 || self.microsecond > 999 {
            return None;
        }
        Some(self.millisecond * 1_000_000 + self.microsecond * 1_000)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}{:03}",
            self.hour, self.minute, self.second, self.millisecond, self.microsecond
        )
    }
}

/// Date and time fields flattened into one structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub microsecond: u32,
}

impl DateTime {
    pub const fn new(date: Date, time: Time) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: time.hour,
            minute: time.minute,
            second: time.second,
            millisecond: time.millisecond,
            microsecond: time.microsecond,
        }
    }

    pub const fn date(&self) -> Date {
        Date::new(self.year, self.month, self.day)
    }

    pub const fn time(&self) -> Time {
        Time::new(
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
            self.microsecond,
        )
    }

    pub const fn is_null(&self) -> bool {
        self.date().is_null() && self.time().is_null()
    }
}

impl From<(Date, Time)> for DateTime {
    fn from((date, time): (Date, Time)) -> Self {
        Self::new(date, time)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date(), self.time())
    }
}

// ---------------------------
// Compile-time sentinel checks
// ---------------------------

const fn is_run_of(s: &str, byte: u8) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != byte {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(NULL_TUID.len() == TUID_LENGTH);
const _: () = assert!(is_run_of(NULL_TUID, TUID_EMPTY_CHAR as u8));
const _: () = assert!(NULL_UUID.len() == 36);
const _: () = assert!(NULL_DATE.has_valid_ranges());
const _: () = assert!(NULL_TIME.is_valid());
