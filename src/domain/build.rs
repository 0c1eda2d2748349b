use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use uuid::Uuid;

use super::version::VersionInfo;
use crate::error::{Result, StampError};

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Text that opens the documentation summary line
pub const SUMMARY_PREFIX: &str = "Most recent build:";

/// Values computed for one stamping run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildState {
    pub build_number: i64,
    pub build_date: String,
    pub build_time: String,
    pub build_id: String,
    /// Only read when a documentation file is stamped as well
    pub version: Option<VersionInfo>,
}

impl BuildState {
    /// Documentation summary line for this build, `None` without version data
    pub fn summary_line(&self) -> Option<String> {
        self.version.as_ref().map(|version| {
            summary_line(
                version,
                self.build_number,
                &self.build_date,
                &self.build_time,
            )
        })
    }
}

/// English name for a 1-based month number
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(index).copied()
}

/// "D Month YYYY", e.g. "1 January 2024"
pub fn format_build_date(date: NaiveDate) -> String {
    // chrono months are always 1..=12
    let month = month_name(date.month()).unwrap_or_default();
    format!("{} {} {}", date.day(), month, date.year())
}

/// "HH:MM", both zero-padded
pub fn format_build_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Canonical hyphenated form of a build identifier
pub fn format_build_id(id: Uuid, uppercase: bool) -> String {
    let text = id.hyphenated().to_string();
    if uppercase {
        text.to_uppercase()
    } else {
        text
    }
}

/// Previous build number plus the increment
pub fn next_build_number(previous: i64, increment: i64) -> Result<i64> {
    previous.checked_add(increment).ok_or_else(|| {
        StampError::parse(format!(
            "Build number {} + {} does not fit in 64 bits",
            previous, increment
        ))
    })
}

/// Bolded build summary for the documentation file
pub fn summary_line(version: &VersionInfo, build_number: i64, date: &str, time: &str) -> String {
    format!(
        "{} **Version {}, Build {}, Build date: {}, {}**",
        SUMMARY_PREFIX, version, build_number, date, time
    )
}
