//! Clock-time phrasing.
//!
//! Arabic notices avoid AM/PM letters. A 12-hour time is followed by a word naming the part of the
//! day, chosen from the minute of the day.

use chrono::{NaiveTime, Timelike};

/// Part of the day a clock time falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPeriod {
    /// 04:00 to 05:59
    Dawn,
    /// 06:00 to 11:59
    Morning,
    /// 12:00 to 14:59
    Noon,
    /// 15:00 to 16:59
    Afternoon,
    /// 17:00 to 20:59
    Evening,
    /// 21:00 to 03:59
    Night,
}

impl DayPeriod {
    pub fn of(time: NaiveTime) -> Self {
        match minute_of_day(time) {
            240..=359 => DayPeriod::Dawn,
            360..=719 => DayPeriod::Morning,
            720..=899 => DayPeriod::Noon,
            900..=1019 => DayPeriod::Afternoon,
            1020..=1259 => DayPeriod::Evening,
            _ => DayPeriod::Night,
        }
    }

    pub fn arabic(self) -> &'static str {
        match self {
            DayPeriod::Dawn => "فجرًا",
            DayPeriod::Morning => "صباحًا",
            DayPeriod::Noon => "ظهرًا",
            DayPeriod::Afternoon => "عصرًا",
            DayPeriod::Evening => "مساءً",
            DayPeriod::Night => "ليلًا",
        }
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// `h:mm` on a 12-hour dial; midnight shows as 12.
pub fn twelve_hour(time: NaiveTime) -> String {
    let hour = match time.hour() {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{hour}:{:02}", time.minute())
}

/// `h:mm period`, e.g. "2:00 ظهرًا".
pub fn clock_phrase(time: NaiveTime) -> String {
    format!("{} {}", twelve_hour(time), DayPeriod::of(time).arabic())
}

/// `h:mm صباحًا|مساءً`, the two-way split used on donation notices.
pub fn meridiem_phrase(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let period = if is_pm { "مساءً" } else { "صباحًا" };
    format!("{hour}:{:02} {period}", time.minute())
}

/// `h:mm ص|م` joined by a no-break space, as on the prayer-times card.
pub fn short_meridiem_phrase(time: NaiveTime) -> String {
    let (is_pm, _) = time.hour12();
    let period = if is_pm { "م" } else { "ص" };
    format!("{}\u{a0}{period}", twelve_hour(time))
}
