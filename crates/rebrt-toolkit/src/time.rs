use crate::ToolError;
use chrono::NaiveDate;
use std::fmt;

/// Discord timestamp formatting styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    /// `t`, 16:20
    ShortTime,
    /// `T`, 16:20:30
    LongTime,
    /// `f`, 20 April 2021 16:20
    ShortDateTime,
    /// `F`, Tuesday, 20 April 2021 16:20
    LongDateTime,
    /// `R`, 2 months ago
    Relative,
}

impl TimestampStyle {
    pub fn flag(&self) -> char {
        match self {
            TimestampStyle::ShortTime => 't',
            TimestampStyle::LongTime => 'T',
            TimestampStyle::ShortDateTime => 'f',
            TimestampStyle::LongDateTime => 'F',
            TimestampStyle::Relative => 'R',
        }
    }
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

/// UTC date and time -> `<t:unix:style>` markup
pub fn discord_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    style: TimestampStyle,
) -> Result<String, ToolError> {
    let unix = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or(ToolError::InvalidDate)?
        .and_utc()
        .timestamp();
    Ok(format!("<t:{unix}:{style}>"))
}

/// Convert `hour` at UTC`source` to the hour at UTC`target`
///
/// The source offset is subtracted to get UTC and the target offset added
/// back, so converting eastward moves the clock forward. `hour + source - target`
/// would run the other way and is wrong for every pair of differing offsets.
pub fn convert_timezone(hour: i64, source: i64, target: i64) -> String {
    let converted = hour - source + target;
    let day = match converted.div_euclid(24) {
        0 => "the same day",
        d if d > 0 => "the next day",
        _ => "the previous day",
    };
    format!("{} of {}", converted.rem_euclid(24), day)
}
