use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

const TIME_FORMAT: &str = "%I:%M:%S %p";
const DATE_FORMAT: &str = "%B %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    pub current_time: String,
    pub current_date: String,
}

impl ClockState {
    pub fn now() -> Self {
        Self::at(&Local::now())
    }

    pub fn at<Tz>(instant: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            current_time: instant.format(TIME_FORMAT).to_string(),
            current_date: instant.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn refresh(&mut self) {
        *self = Self::now();
    }
}
