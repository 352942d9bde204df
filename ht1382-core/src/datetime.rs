//! Calendar date and time of day as kept by the chip

use crate::error::Parameter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Year the two-digit `year` field counts from
pub const BASE_YEAR: u16 = 2000;

/// Date and time in plain decimal fields
///
/// Only per-field ranges are checked; no calendar rules (month lengths,
/// leap years) are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateTime {
    /// Seconds (0-59)
    pub second: u8,
    /// Minutes (0-59)
    pub minute: u8,
    /// Hours (0-23)
    pub hour: u8,
    /// Day of week (1-7)
    pub weekday: u8,
    /// Day of month (1-31)
    pub day: u8,
    /// Month (1-12)
    pub month: u8,
    /// Years since 2000 (0-99)
    pub year: u8,
}

impl DateTime {
    /// Create a date/time; fields are not validated until written
    pub const fn new(
        second: u8,
        minute: u8,
        hour: u8,
        weekday: u8,
        day: u8,
        month: u8,
        year: u8,
    ) -> Self {
        Self {
            second,
            minute,
            hour,
            weekday,
            day,
            month,
            year,
        }
    }

    /// Check every field against its range
    ///
    /// Returns the first offending field, in register order.
    pub const fn validate(&self) -> Result<(), Parameter> {
        if self.second > 59 {
            return Err(Parameter::Second);
        }
        if self.minute > 59 {
            return Err(Parameter::Minute);
        }
        if self.hour > 23 {
            return Err(Parameter::Hour);
        }
        if self.weekday == 0 || self.weekday > 7 {
            return Err(Parameter::WeekDay);
        }
        if self.day == 0 || self.day > 31 {
            return Err(Parameter::Day);
        }
        if self.month == 0 || self.month > 12 {
            return Err(Parameter::Month);
        }
        if self.year > 99 {
            return Err(Parameter::Year);
        }
        Ok(())
    }

    /// Four-digit year
    pub const fn full_year(&self) -> u16 {
        BASE_YEAR + self.year as u16
    }
}
