//! Condolence-reception clause.
//!
//! Days that share exactly the same rendered hours are merged into one group, so a schedule of
//! "Saturday 4-6, Sunday 4-6, Monday after Maghrib" reads as two groups rather than three.

use crate::clock::clock_phrase;
use crate::constants::{
    AFTER_PRAYER, AND, CLOCK_INTRO, CONDOLENCE_MEN, CONDOLENCE_SCHEDULE_INTRO, CONDOLENCE_WOMEN,
    PRAYER,
};
use crate::markup::{Emphasis, Markup};
use announcement::{Condolence, Reception, ReceptionDay, TimePoint, TimeRange, Weekday};

/// Which audience a reception is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Men,
    Women,
}

impl Audience {
    fn heading(self) -> &'static str {
        match self {
            Audience::Men => CONDOLENCE_MEN,
            Audience::Women => CONDOLENCE_WOMEN,
        }
    }
}

fn format_time_point(point: &TimePoint) -> String {
    match point {
        TimePoint::Manual(clock) => format!("{CLOCK_INTRO} {}", clock_phrase(*clock)),
        TimePoint::Prayer(label) => {
            let label = label.trim();
            if label.contains(PRAYER) {
                label.to_string()
            } else {
                format!("{AFTER_PRAYER} {label}")
            }
        }
    }
}

/// "من {start} حتى {end}" between two prayers, "من {start} الى {end}" otherwise.
pub fn format_range(range: &TimeRange) -> String {
    let start = format_time_point(&range.start);
    let end = format_time_point(&range.end);
    if range.start.is_prayer() && range.end.is_prayer() {
        format!("من {start} حتى {}", end.replacen("بعد ", "", 1))
    } else {
        format!("من {start} الى {end}")
    }
}

/// "يوم d", "يومي d1 و d2" or "أيام d1 و d2 و … و dn".
pub fn format_day_list(markup: Markup, days: &[Weekday]) -> String {
    let names: Vec<String> = days
        .iter()
        .map(|d| markup.span(Emphasis::Detail, d.arabic_name()))
        .collect();
    let lead = match names.len() {
        1 => "يوم",
        2 => "يومي",
        _ => "أيام",
    };
    format!("{lead} {}", names.join(AND))
}

struct HoursGroup {
    signature: String,
    intervals: Vec<String>,
    days: Vec<Weekday>,
}

/// `" و ذلك في …"` for a schedule, or `None` when the schedule is empty.
pub fn compose_schedule(markup: Markup, schedule: &[ReceptionDay]) -> Option<String> {
    let mut groups: Vec<HoursGroup> = Vec::new();

    for entry in schedule {
        let intervals: Vec<String> = entry.ranges.iter().map(format_range).collect();
        let signature = intervals.join("|");

        match groups.iter_mut().find(|g| g.signature == signature) {
            Some(group) => {
                if !group.days.contains(&entry.weekday) {
                    group.days.push(entry.weekday);
                }
            }
            None => groups.push(HoursGroup {
                signature,
                intervals,
                days: vec![entry.weekday],
            }),
        }
    }

    if groups.is_empty() {
        return None;
    }

    let rendered: Vec<String> = groups
        .into_iter()
        .map(|mut group| {
            group.days.sort_by_key(|d| d.week_index());
            let days = format_day_list(markup, &group.days);
            if group.intervals.is_empty() {
                days
            } else {
                format!("{days} {}", markup.text(&group.intervals.join(AND)))
            }
        })
        .collect();

    Some(format!("{CONDOLENCE_SCHEDULE_INTRO}{}", rendered.join(AND)))
}

/// One audience's line, or `None` when there is neither a location nor a schedule.
pub fn compose_reception(markup: Markup, audience: Audience, reception: &Reception) -> Option<String> {
    if reception.is_empty() {
        return None;
    }

    let mut line = audience.heading().to_string();
    if let Some(location) = reception.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        line.push_str(" في ");
        line.push_str(&markup.span(Emphasis::Detail, location));
    }
    if let Some(schedule) = compose_schedule(markup, &reception.schedule) {
        line.push_str(&schedule);
    }
    Some(line)
}

/// Men's line then women's line, newline separated.
pub fn compose_condolence(markup: Markup, condolence: &Condolence) -> Option<String> {
    let lines: Vec<String> = [
        (Audience::Men, condolence.men.as_ref()),
        (Audience::Women, condolence.women.as_ref()),
    ]
    .into_iter()
    .filter_map(|(audience, reception)| {
        reception.and_then(|r| compose_reception(markup, audience, r))
    })
    .collect();

    (!lines.is_empty()).then(|| lines.join("\n"))
}
