//! Gregorian and Hijri date phrasing.
//!
//! Hijri dates follow the Umm al-Qura calendar, the one printed on Bahraini and Saudi notices.
//! Conversion goes through `icu_calendar`, which carries precomputed month lengths for the
//! Umm al-Qura years.

use crate::constants::{GREGORIAN_MONTHS, HIJRI_MONTHS};
use crate::error::{ComposeError, ComposeResult};
use announcement::Weekday;
use chrono::{Datelike, NaiveDate};
use icu_calendar::islamic::IslamicUmmAlQura;
use icu_calendar::Date;

/// A date in the Umm al-Qura calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HijriDate {
    pub year: i32,
    /// 1 (محرم) to 12 (ذو الحجة).
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// # Errors
    ///
    /// Returns [`ComposeError::Calendar`] if the date is outside the range the calendar library
    /// accepts.
    pub fn from_gregorian(date: NaiveDate) -> ComposeResult<Self> {
        let month = u8::try_from(date.month()).map_err(|_| calendar_error(date, "month"))?;
        let day = u8::try_from(date.day()).map_err(|_| calendar_error(date, "day"))?;
        let iso = Date::try_new_iso_date(date.year(), month, day)
            .map_err(|e| calendar_error(date, &e.to_string()))?;
        let hijri = iso.to_calendar(IslamicUmmAlQura::new());

        Ok(Self {
            year: hijri.year().number,
            month: hijri.month().ordinal,
            day: hijri.day_of_month().0,
        })
    }

    pub fn month_name(self) -> &'static str {
        HIJRI_MONTHS[(self.month as usize).saturating_sub(1) % 12]
    }
}

fn calendar_error(date: NaiveDate, reason: &str) -> ComposeError {
    ComposeError::Calendar(format!("{date}: {reason}"))
}

/// Arabic name of the Gregorian weekday of `date`.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    Weekday::from(date.weekday()).arabic_name()
}

/// "{d} {month} {y}هـ"
pub fn hijri_phrase(date: NaiveDate) -> ComposeResult<String> {
    let hijri = HijriDate::from_gregorian(date)?;
    Ok(format!("{} {} {}هـ", hijri.day, hijri.month_name(), hijri.year))
}

/// "{d} {month} {y}م"
pub fn gregorian_phrase(date: NaiveDate) -> String {
    format!(
        "{} {} {}م",
        date.day(),
        GREGORIAN_MONTHS[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_starts_follow_umm_al_qura() {
        let cases = [
            (ymd(2023, 7, 19), (1445, 1, 1)),
            (ymd(2024, 3, 11), (1445, 9, 1)),
            (ymd(2024, 7, 7), (1446, 1, 1)),
            (ymd(2025, 3, 1), (1446, 9, 1)),
            (ymd(2025, 6, 26), (1447, 1, 1)),
        ];
        for (date, (y, m, d)) in cases {
            let hijri = HijriDate::from_gregorian(date).unwrap();
            assert_eq!((hijri.year, hijri.month, hijri.day), (y, m, d), "{date}");
        }
    }

    #[test]
    fn day_before_new_year_is_in_dhu_al_hijja() {
        let hijri = HijriDate::from_gregorian(ymd(2024, 7, 6)).unwrap();
        assert_eq!((hijri.year, hijri.month), (1445, 12));
        assert_eq!(hijri.month_name(), "ذو الحجة");
    }

    #[test]
    fn weekday_names() {
        assert_eq!(weekday_name(ymd(2024, 7, 7)), "الأحد");
        assert_eq!(weekday_name(ymd(2024, 3, 11)), "الاثنين");
        assert_eq!(weekday_name(ymd(2025, 3, 1)), "السبت");
    }

    #[test]
    fn date_phrases() {
        assert_eq!(hijri_phrase(ymd(2024, 3, 11)).unwrap(), "1 رمضان 1445هـ");
        assert_eq!(hijri_phrase(ymd(2024, 7, 7)).unwrap(), "1 محرم 1446هـ");
        assert_eq!(hijri_phrase(ymd(2025, 6, 26)).unwrap(), "1 محرم 1447هـ");
        assert_eq!(gregorian_phrase(ymd(2024, 3, 11)), "11 مارس 2024م");
    }
}
