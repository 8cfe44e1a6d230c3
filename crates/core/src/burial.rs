//! Burial clause.

use crate::calendar::{gregorian_phrase, hijri_phrase, weekday_name};
use crate::clock::clock_phrase;
use crate::constants::{BURIAL_COMPLETED, BURIAL_DEFERRED, BURIAL_TIME_INTRO, ENDOWMENT_SUFFIX};
use crate::error::ComposeResult;
use crate::markup::{Emphasis, Markup};
use announcement::{BurialInfo, BurialTime, GraveLocation};

/// Location as displayed; the endowment suffix is dropped.
pub fn display_location(location: &str) -> &str {
    let trimmed = location.trim();
    trimmed.strip_suffix(ENDOWMENT_SUFFIX).unwrap_or(trimmed)
}

pub fn compose_burial(markup: Markup, burial: &BurialInfo) -> ComposeResult<String> {
    let text = match burial {
        BurialInfo::Deferred => BURIAL_DEFERRED.to_string(),
        BurialInfo::Completed => BURIAL_COMPLETED.to_string(),
        BurialInfo::Scheduled {
            date,
            location,
            grave,
            time,
        } => {
            let mut text = format!(
                "الدفن يوم {} بتاريخ {} الموافق {} في {}",
                markup.span(Emphasis::Detail, weekday_name(*date)),
                markup.span(Emphasis::Detail, &hijri_phrase(*date)?),
                markup.span(Emphasis::Detail, &gregorian_phrase(*date)),
                markup.span(Emphasis::Detail, display_location(location)),
            );

            if let Some(GraveLocation { number, plot }) = grave {
                text.push_str(&format!(
                    " قبر رقم {} قطعة {}",
                    markup.span(Emphasis::Detail, number.trim()),
                    markup.span(Emphasis::Detail, plot.trim())
                ));
            }

            let time = match time {
                BurialTime::AfterPrayer(label) => match label.trim() {
                    "" => String::new(),
                    label => markup.span(Emphasis::Detail, label),
                },
                BurialTime::Manual(clock) => format!(
                    "{BURIAL_TIME_INTRO} {}",
                    markup.span(Emphasis::Detail, &clock_phrase(*clock))
                ),
            };
            if !time.is_empty() {
                text.push(' ');
                text.push_str(&time);
            }

            text
        }
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn scheduled(location: &str, grave: Option<GraveLocation>, time: BurialTime) -> BurialInfo {
        BurialInfo::Scheduled {
            date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            location: location.into(),
            grave,
            time,
        }
    }

    #[test]
    fn terminal_states() {
        assert_eq!(
            compose_burial(Markup::Plain, &BurialInfo::Deferred).unwrap(),
            "سيتم تحديد تفاصيل الدفن لاحقًا إن شاء الله"
        );
        assert_eq!(compose_burial(Markup::Plain, &BurialInfo::Completed).unwrap(), "تم الدفن");
    }

    #[test]
    fn scheduled_with_manual_time() {
        let burial = scheduled(
            "مقبرة الحد للأوقاف السنية",
            None,
            BurialTime::Manual(NaiveTime::from_hms_opt(14, 0, 0).unwrap()),
        );
        assert_eq!(
            compose_burial(Markup::Plain, &burial).unwrap(),
            "الدفن يوم الاثنين بتاريخ 1 رمضان 1445هـ الموافق 11 مارس 2024م في مقبرة الحد وقت الدفن 2:00 ظهرًا"
        );
    }

    #[test]
    fn scheduled_with_grave_and_prayer() {
        let burial = scheduled(
            "مقبرة المحرق",
            Some(GraveLocation {
                number: "15".into(),
                plot: "3".into(),
            }),
            BurialTime::AfterPrayer("بعد صلاة العصر".into()),
        );
        let text = compose_burial(Markup::Plain, &burial).unwrap();
        assert!(text.ends_with("في مقبرة المحرق قبر رقم 15 قطعة 3 بعد صلاة العصر"));
    }

    #[test]
    fn location_suffix_only_stripped_at_end() {
        assert_eq!(display_location("مقبرة الحد للأوقاف السنية"), "مقبرة الحد");
        assert_eq!(display_location("مقبرة الحد"), "مقبرة الحد");
    }

    #[test]
    fn html_emphasises_date_parts() {
        let burial = scheduled("مقبرة الحد", None, BurialTime::AfterPrayer("بعد صلاة الظهر".into()));
        let text = compose_burial(Markup::Html, &burial).unwrap();
        assert!(text.starts_with("الدفن يوم <span class=\"memorial-emphasis\">الاثنين</span>"));
        assert!(text.contains("<span class=\"memorial-emphasis\">1 رمضان 1445هـ</span>"));
    }

    #[test]
    fn after_prayer_time_is_emphasised_like_clock_time() {
        let burial = scheduled("مقبرة الحد", None, BurialTime::AfterPrayer("بعد صلاة العصر".into()));
        let text = compose_burial(Markup::Html, &burial).unwrap();
        assert!(text.ends_with(" <span class=\"memorial-emphasis\">بعد صلاة العصر</span>"));

        let manual = scheduled(
            "مقبرة الحد",
            None,
            BurialTime::Manual(NaiveTime::from_hms_opt(16, 30, 0).unwrap()),
        );
        let text = compose_burial(Markup::Html, &manual).unwrap();
        assert!(text.contains("وقت الدفن <span class=\"memorial-emphasis\">"));
    }

    #[test]
    fn new_year_burial_uses_umm_al_qura_date() {
        let burial = BurialInfo::Scheduled {
            date: NaiveDate::from_ymd_opt(2025, 6, 26).unwrap(),
            location: "مقبرة المحرق".into(),
            grave: None,
            time: BurialTime::AfterPrayer("بعد صلاة الظهر".into()),
        };
        let text = compose_burial(Markup::Plain, &burial).unwrap();
        assert!(text.starts_with("الدفن يوم الخميس بتاريخ 1 محرم 1447هـ الموافق 26 يونيو 2025م"));
    }
}
