//! Submission wire models and translation helpers.
//!
//! Responsibilities:
//! - Define a strict wire model for the five notice categories (YAML or JSON)
//! - Translate wire structs into typed domain records, applying the form's validation rules
//! - Translate domain records back into wire YAML
//!
//! Notes:
//! - Enum-like fields are kept as strings on the wire so that both English tags and the Arabic
//!   labels of the form are accepted, and so unknown values produce a specific error instead of a
//!   generic serde mismatch
//! - A scheduled burial "خارج البحرين" (outside Bahrain) carries the real place in
//!   `custom_location`

use crate::notices::{
    last_third_of_night, BloodDonationData, BloodType, CondolenceThanksData, DonationContact,
    PrayerRequestData, PrayerTimesData,
};
use crate::record::{
    AnnouncementRecord, BurialInfo, BurialTime, Condolence, Contact, Gender, GraveLocation,
    Reception, ReceptionDay, Relative, RelationshipKind, RelativeGroup, TimePoint, TimeRange,
    Weekday,
};
use crate::validation::{validate_age, validate_contacts, validate_person_name};
use crate::{AnnouncementError, AnnouncementResult};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tawasul_types::{NonEmptyText, PersonalId, PhoneNumber};

/// Burial location value meaning "outside Bahrain"; the actual place is in `custom_location`.
const OUTSIDE_BAHRAIN: &str = "خارج البحرين";

const CLOCK_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Public domain-level types
// ============================================================================

/// Notice categories offered by the public form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmissionCategory {
    DeathAnnouncement,
    BloodDonation,
    CondolenceThanks,
    PrayerRequest,
    PrayerTimes,
}

impl SubmissionCategory {
    pub fn to_wire(self) -> &'static str {
        match self {
            SubmissionCategory::DeathAnnouncement => "death_announcement",
            SubmissionCategory::BloodDonation => "blood_donation",
            SubmissionCategory::CondolenceThanks => "condolence_thanks",
            SubmissionCategory::PrayerRequest => "prayer_request",
            SubmissionCategory::PrayerTimes => "prayer_times",
        }
    }

    /// Title of the category as shown in the form.
    pub fn arabic_name(self) -> &'static str {
        match self {
            SubmissionCategory::DeathAnnouncement => "تبليغ وفاة",
            SubmissionCategory::BloodDonation => "طلب تبرع بالدم",
            SubmissionCategory::CondolenceThanks => "شكر وتقدير",
            SubmissionCategory::PrayerRequest => "طلب دعاء للمرضى",
            SubmissionCategory::PrayerTimes => "مواقيت الصلاة",
        }
    }
}

/// A validated submission of any category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionData {
    DeathAnnouncement(AnnouncementRecord),
    BloodDonation(BloodDonationData),
    CondolenceThanks(CondolenceThanksData),
    PrayerRequest(PrayerRequestData),
    PrayerTimes(PrayerTimesData),
}

impl SubmissionData {
    pub fn category(&self) -> SubmissionCategory {
        match self {
            SubmissionData::DeathAnnouncement(_) => SubmissionCategory::DeathAnnouncement,
            SubmissionData::BloodDonation(_) => SubmissionCategory::BloodDonation,
            SubmissionData::CondolenceThanks(_) => SubmissionCategory::CondolenceThanks,
            SubmissionData::PrayerRequest(_) => SubmissionCategory::PrayerRequest,
            SubmissionData::PrayerTimes(_) => SubmissionCategory::PrayerTimes,
        }
    }
}

// ============================================================================
// Public Submission operations
// ============================================================================

/// Submission parsing and rendering.
///
/// This is a zero-sized type used for namespacing submission operations.
pub struct Submission;

impl Submission {
    /// Parse a submission from YAML text.
    ///
    /// Uses `serde_path_to_error` to report the path of the failing field when the YAML does not
    /// match the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`AnnouncementError`] if:
    /// - the YAML does not match the wire schema (including unknown keys),
    /// - an enum-like field has an unknown value,
    /// - a validation rule fails (name length, age range, contact count, grave details, ...).
    pub fn parse_yaml(yaml_text: &str) -> AnnouncementResult<SubmissionData> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        let wire = deserialize_wire(deserializer)?;
        wire_to_domain(wire)
    }

    /// Parse a submission from JSON text. Same rules as [`Submission::parse_yaml`].
    pub fn parse_json(json_text: &str) -> AnnouncementResult<SubmissionData> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);
        let wire = deserialize_wire(&mut deserializer)?;
        deserializer.end()?;
        wire_to_domain(wire)
    }

    /// Parse a submission from an already-decoded JSON value (e.g. an HTTP request body).
    pub fn from_json_value(value: serde_json::Value) -> AnnouncementResult<SubmissionData> {
        let wire = deserialize_wire(value)?;
        wire_to_domain(wire)
    }

    /// Load a submission from a file; `.json` files are parsed as JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`AnnouncementError::Io`] if the file cannot be read, otherwise the same errors as
    /// the parse functions.
    pub fn load(path: &Path) -> AnnouncementResult<SubmissionData> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!("loading submission from {}", path.display());
        if is_json {
            Self::parse_json(&text)
        } else {
            Self::parse_yaml(&text)
        }
    }

    /// Render a submission as wire YAML.
    ///
    /// # Errors
    ///
    /// Returns [`AnnouncementError::Translation`] if serialisation fails.
    pub fn render_yaml(data: &SubmissionData) -> AnnouncementResult<String> {
        let wire = domain_to_wire(data);
        serde_yaml::to_string(&wire).map_err(|e| {
            AnnouncementError::Translation(format!("Failed to serialize submission: {e}"))
        })
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "category", rename_all = "snake_case")]
enum SubmissionWire {
    DeathAnnouncement(DeathAnnouncementWire),
    BloodDonation(BloodDonationWire),
    CondolenceThanks(CondolenceThanksWire),
    PrayerRequest(PrayerRequestWire),
    PrayerTimes(PrayerTimesWire),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct DeathAnnouncementWire {
    name: String,
    gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    occupation: Option<String>,
    burial: BurialWire,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    condolence: Option<CondolenceWire>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    relatives: Vec<RelativeGroupWire>,
    contacts: Vec<ContactWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct BurialWire {
    mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grave_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grave_plot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<TimeWire>,
}

/// A time value: `kind` selects between a clock time and a prayer label.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct TimeWire {
    kind: String,
    value: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct CondolenceWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    men: Option<ReceptionWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    women: Option<ReceptionWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ReceptionWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    schedule: Vec<ReceptionDayWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ReceptionDayWire {
    day: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ranges: Vec<RangeWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct RangeWire {
    from: TimeWire,
    to: TimeWire,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct RelativeGroupWire {
    relationship: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    names: Vec<RelativeWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct RelativeWire {
    name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    deceased: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ContactWire {
    name: String,
    phone: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct BloodDonationWire {
    name: String,
    gender: String,
    personal_id: String,
    blood_types: Vec<String>,
    location: String,
    date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    times: Vec<ClockRangeWire>,
    contacts: Vec<DonationContactWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ClockRangeWire {
    from: String,
    to: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct DonationContactWire {
    description: String,
    number: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct CondolenceThanksWire {
    family_name: String,
    deceased_name: String,
    gender: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PrayerRequestWire {
    patient_name: String,
}

/// Clock times are `HH:MM`; `last_third` is derived from maghrib and fajr when absent.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PrayerTimesWire {
    date: String,
    fajr: String,
    sunrise: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_third: Option<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn deserialize_wire<'de, D>(deserializer: D) -> AnnouncementResult<SubmissionWire>
where
    D: serde::Deserializer<'de>,
    D::Error: std::fmt::Display,
{
    serde_path_to_error::deserialize::<_, SubmissionWire>(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        let path = if path.is_empty() || path == "." {
            "<root>"
        } else {
            path.as_str()
        };
        AnnouncementError::Translation(format!("Submission schema mismatch at {path}: {source}"))
    })
}

fn wire_to_domain(wire: SubmissionWire) -> AnnouncementResult<SubmissionData> {
    let data = match wire {
        SubmissionWire::DeathAnnouncement(w) => {
            SubmissionData::DeathAnnouncement(death_announcement_to_domain(w)?)
        }
        SubmissionWire::BloodDonation(w) => SubmissionData::BloodDonation(blood_donation_to_domain(w)?),
        SubmissionWire::CondolenceThanks(w) => SubmissionData::CondolenceThanks(CondolenceThanksData {
            family_name: validate_person_name("family_name", &w.family_name)?,
            deceased_name: validate_person_name("deceased_name", &w.deceased_name)?,
            gender: Gender::parse(&w.gender)?,
        }),
        SubmissionWire::PrayerRequest(w) => SubmissionData::PrayerRequest(PrayerRequestData {
            patient_name: validate_person_name("patient_name", &w.patient_name)?,
        }),
        SubmissionWire::PrayerTimes(w) => SubmissionData::PrayerTimes(prayer_times_to_domain(w)?),
    };

    tracing::debug!("parsed {} submission", data.category().to_wire());
    Ok(data)
}

fn death_announcement_to_domain(w: DeathAnnouncementWire) -> AnnouncementResult<AnnouncementRecord> {
    let contacts: Vec<Contact> = w
        .contacts
        .into_iter()
        .map(|c| Contact {
            name: c.name.trim().to_string(),
            phone: c.phone.trim().to_string(),
        })
        .collect();
    validate_contacts(&contacts)?;

    let relatives = w
        .relatives
        .into_iter()
        .map(relative_group_to_domain)
        .collect::<AnnouncementResult<Vec<_>>>()?;

    let condolence = match w.condolence {
        Some(c) => Condolence {
            men: c.men.map(reception_to_domain).transpose()?,
            women: c.women.map(reception_to_domain).transpose()?,
        },
        None => Condolence::default(),
    };

    Ok(AnnouncementRecord {
        deceased_name: validate_person_name("name", &w.name)?,
        gender: Gender::parse(&w.gender)?,
        age: validate_age(w.age)?,
        occupation: w.occupation.and_then(|o| NonEmptyText::new(o).ok()),
        burial: burial_to_domain(w.burial)?,
        condolence,
        relatives,
        contacts,
    })
}

fn burial_to_domain(w: BurialWire) -> AnnouncementResult<BurialInfo> {
    match w.mode.trim() {
        "deferred" => Ok(BurialInfo::Deferred),
        "completed" => Ok(BurialInfo::Completed),
        "scheduled" => {
            let date = w
                .date
                .as_deref()
                .ok_or_else(|| {
                    AnnouncementError::InvalidInput("scheduled burial requires a date".into())
                })
                .and_then(parse_date)?;

            let location = non_blank(w.location).ok_or_else(|| {
                AnnouncementError::InvalidInput("scheduled burial requires a location".into())
            })?;
            let location = if location == OUTSIDE_BAHRAIN {
                non_blank(w.custom_location).ok_or_else(|| {
                    AnnouncementError::InvalidInput(
                        "burial outside Bahrain requires custom_location".into(),
                    )
                })?
            } else {
                location
            };

            let grave = match (non_blank(w.grave_number), non_blank(w.grave_plot)) {
                (Some(number), Some(plot)) => Some(GraveLocation { number, plot }),
                (None, None) => None,
                _ => return Err(AnnouncementError::IncompleteGrave),
            };

            let time = w.time.ok_or_else(|| {
                AnnouncementError::InvalidInput("scheduled burial requires a time".into())
            })?;
            let time = match time_point_to_domain(&time)? {
                TimePoint::Manual(t) => BurialTime::Manual(t),
                TimePoint::Prayer(label) => BurialTime::AfterPrayer(label),
            };

            Ok(BurialInfo::Scheduled {
                date,
                location,
                grave,
                time,
            })
        }
        other => Err(AnnouncementError::UnknownBurialMode(other.to_string())),
    }
}

fn time_point_to_domain(w: &TimeWire) -> AnnouncementResult<TimePoint> {
    let value = w.value.trim();
    match w.kind.trim() {
        "manual" | "وقت محدد" => parse_clock(value).map(TimePoint::Manual),
        "prayer" | "after_prayer" | "بعد صلاة" => {
            if value.is_empty() {
                return Err(AnnouncementError::InvalidInput(
                    "prayer time requires a prayer name".into(),
                ));
            }
            Ok(TimePoint::Prayer(value.to_string()))
        }
        other => Err(AnnouncementError::UnknownTimeKind(other.to_string())),
    }
}

fn reception_to_domain(w: ReceptionWire) -> AnnouncementResult<Reception> {
    let schedule = w
        .schedule
        .into_iter()
        .map(|day| {
            let ranges = day
                .ranges
                .iter()
                .map(|r| {
                    Ok(TimeRange {
                        start: time_point_to_domain(&r.from)?,
                        end: time_point_to_domain(&r.to)?,
                    })
                })
                .collect::<AnnouncementResult<Vec<_>>>()?;
            Ok(ReceptionDay {
                weekday: Weekday::parse(&day.day)?,
                ranges,
            })
        })
        .collect::<AnnouncementResult<Vec<_>>>()?;

    Ok(Reception {
        location: non_blank(w.location),
        schedule,
    })
}

fn relative_group_to_domain(w: RelativeGroupWire) -> AnnouncementResult<RelativeGroup> {
    let kind = RelationshipKind::parse(&w.relationship, w.label.as_deref())?;
    let members = w
        .names
        .into_iter()
        .map(|n| Relative {
            name: n.name,
            is_deceased: n.deceased,
        })
        .collect();
    Ok(RelativeGroup { kind, members })
}

fn blood_donation_to_domain(w: BloodDonationWire) -> AnnouncementResult<BloodDonationData> {
    let blood_types = w
        .blood_types
        .iter()
        .map(|b| BloodType::parse(b))
        .collect::<AnnouncementResult<Vec<_>>>()?;
    if blood_types.is_empty() {
        return Err(AnnouncementError::InvalidInput(
            "at least one blood type is required".into(),
        ));
    }

    let time_ranges = w
        .times
        .iter()
        .map(|r| Ok((parse_clock(&r.from)?, parse_clock(&r.to)?)))
        .collect::<AnnouncementResult<Vec<_>>>()?;

    let contacts = w
        .contacts
        .into_iter()
        .map(|c| {
            Ok(DonationContact {
                description: NonEmptyText::new(&c.description)?,
                number: PhoneNumber::new(&c.number)?,
            })
        })
        .collect::<AnnouncementResult<Vec<_>>>()?;
    if contacts.is_empty() {
        return Err(AnnouncementError::InvalidInput(
            "at least one contact number is required".into(),
        ));
    }

    Ok(BloodDonationData {
        patient_name: validate_person_name("name", &w.name)?,
        gender: Gender::parse(&w.gender)?,
        personal_id: PersonalId::new(&w.personal_id)?,
        blood_types,
        location: NonEmptyText::new(&w.location).map_err(|_| {
            AnnouncementError::InvalidInput("donation location is required".into())
        })?,
        date: parse_date(&w.date)?,
        time_ranges,
        contacts,
    })
}

fn prayer_times_to_domain(w: PrayerTimesWire) -> AnnouncementResult<PrayerTimesData> {
    let fajr = parse_clock(&w.fajr)?;
    let maghrib = parse_clock(&w.maghrib)?;
    let last_third = match non_blank(w.last_third) {
        Some(value) => parse_clock(&value)?,
        None => last_third_of_night(maghrib, fajr),
    };

    Ok(PrayerTimesData {
        date: parse_date(&w.date)?,
        fajr,
        sunrise: parse_clock(&w.sunrise)?,
        dhuhr: parse_clock(&w.dhuhr)?,
        asr: parse_clock(&w.asr)?,
        maghrib,
        isha: parse_clock(&w.isha)?,
        last_third,
    })
}

fn parse_clock(value: &str) -> AnnouncementResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT)
        .map_err(|_| AnnouncementError::InvalidClockTime(value.trim().to_string()))
}

fn parse_date(value: &str) -> AnnouncementResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| AnnouncementError::InvalidDate(value.trim().to_string()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn domain_to_wire(data: &SubmissionData) -> SubmissionWire {
    match data {
        SubmissionData::DeathAnnouncement(r) => {
            SubmissionWire::DeathAnnouncement(death_announcement_to_wire(r))
        }
        SubmissionData::BloodDonation(d) => SubmissionWire::BloodDonation(BloodDonationWire {
            name: d.patient_name.to_string(),
            gender: d.gender.to_wire().into(),
            personal_id: d.personal_id.to_string(),
            blood_types: d.blood_types.iter().map(|b| b.label().to_string()).collect(),
            location: d.location.to_string(),
            date: d.date.format(DATE_FORMAT).to_string(),
            times: d
                .time_ranges
                .iter()
                .map(|(from, to)| ClockRangeWire {
                    from: from.format(CLOCK_FORMAT).to_string(),
                    to: to.format(CLOCK_FORMAT).to_string(),
                })
                .collect(),
            contacts: d
                .contacts
                .iter()
                .map(|c| DonationContactWire {
                    description: c.description.to_string(),
                    number: c.number.to_string(),
                })
                .collect(),
        }),
        SubmissionData::CondolenceThanks(d) => {
            SubmissionWire::CondolenceThanks(CondolenceThanksWire {
                family_name: d.family_name.to_string(),
                deceased_name: d.deceased_name.to_string(),
                gender: d.gender.to_wire().into(),
            })
        }
        SubmissionData::PrayerRequest(d) => SubmissionWire::PrayerRequest(PrayerRequestWire {
            patient_name: d.patient_name.to_string(),
        }),
        SubmissionData::PrayerTimes(d) => {
            let clock = |t: NaiveTime| t.format(CLOCK_FORMAT).to_string();
            SubmissionWire::PrayerTimes(PrayerTimesWire {
                date: d.date.format(DATE_FORMAT).to_string(),
                fajr: clock(d.fajr),
                sunrise: clock(d.sunrise),
                dhuhr: clock(d.dhuhr),
                asr: clock(d.asr),
                maghrib: clock(d.maghrib),
                isha: clock(d.isha),
                last_third: Some(clock(d.last_third)),
            })
        }
    }
}

fn death_announcement_to_wire(r: &AnnouncementRecord) -> DeathAnnouncementWire {
    let condolence = (r.condolence.men.is_some() || r.condolence.women.is_some()).then(|| {
        CondolenceWire {
            men: r.condolence.men.as_ref().map(reception_to_wire),
            women: r.condolence.women.as_ref().map(reception_to_wire),
        }
    });

    DeathAnnouncementWire {
        name: r.deceased_name.to_string(),
        gender: r.gender.to_wire().into(),
        age: r.age,
        occupation: r.occupation.as_ref().map(|o| o.to_string()),
        burial: burial_to_wire(&r.burial),
        condolence,
        relatives: r
            .relatives
            .iter()
            .map(|g| {
                let (tag, label) = g.kind.to_wire();
                RelativeGroupWire {
                    relationship: tag.into(),
                    label: label.map(str::to_string),
                    names: g
                        .members
                        .iter()
                        .map(|m| RelativeWire {
                            name: m.name.clone(),
                            deceased: m.is_deceased,
                        })
                        .collect(),
                }
            })
            .collect(),
        contacts: r
            .contacts
            .iter()
            .map(|c| ContactWire {
                name: c.name.clone(),
                phone: c.phone.clone(),
            })
            .collect(),
    }
}

fn burial_to_wire(b: &BurialInfo) -> BurialWire {
    let mut wire = BurialWire {
        mode: b.mode_to_wire().into(),
        date: None,
        location: None,
        custom_location: None,
        grave_number: None,
        grave_plot: None,
        time: None,
    };

    if let BurialInfo::Scheduled {
        date,
        location,
        grave,
        time,
    } = b
    {
        wire.date = Some(date.format(DATE_FORMAT).to_string());
        wire.location = Some(location.clone());
        wire.grave_number = grave.as_ref().map(|g| g.number.clone());
        wire.grave_plot = grave.as_ref().map(|g| g.plot.clone());
        wire.time = Some(match time {
            BurialTime::Manual(t) => time_point_to_wire(&TimePoint::Manual(*t)),
            BurialTime::AfterPrayer(label) => TimeWire {
                kind: "after_prayer".into(),
                value: label.clone(),
            },
        });
    }

    wire
}

fn time_point_to_wire(t: &TimePoint) -> TimeWire {
    match t {
        TimePoint::Manual(clock) => TimeWire {
            kind: "manual".into(),
            value: clock.format(CLOCK_FORMAT).to_string(),
        },
        TimePoint::Prayer(label) => TimeWire {
            kind: "prayer".into(),
            value: label.clone(),
        },
    }
}

fn reception_to_wire(r: &Reception) -> ReceptionWire {
    ReceptionWire {
        location: r.location.clone(),
        schedule: r
            .schedule
            .iter()
            .map(|day| ReceptionDayWire {
                day: day.weekday.to_wire().into(),
                ranges: day
                    .ranges
                    .iter()
                    .map(|range| RangeWire {
                        from: time_point_to_wire(&range.start),
                        to: time_point_to_wire(&range.end),
                    })
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"category: death_announcement
name: فاطمة علي
gender: انثى
age: 2
burial:
  mode: scheduled
  date: "2024-03-11"
  location: مقبرة الحد للأوقاف السنية
  grave_number: "12"
  grave_plot: "4"
  time:
    kind: manual
    value: "14:00"
condolence:
  men:
    location: مجلس العائلة
    schedule:
      - day: الأحد
        ranges:
          - from: { kind: prayer, value: العصر }
            to: { kind: prayer, value: العشاء }
relatives:
  - relationship: الزوج
    names:
      - name: خالد
        deceased: true
  - relationship: أخرى
    label: خالة
    names:
      - name: مريم
contacts:
  - name: أحمد
    phone: "33445566"
"#;

    fn expect_record(data: SubmissionData) -> AnnouncementRecord {
        match data {
            SubmissionData::DeathAnnouncement(r) => r,
            other => panic!("expected death announcement, got {other:?}"),
        }
    }

    #[test]
    fn parses_sample_with_arabic_labels() {
        let record = expect_record(Submission::parse_yaml(SAMPLE).expect("parse yaml"));

        assert_eq!(record.deceased_name.as_str(), "فاطمة علي");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.age, Some(2));
        assert_eq!(record.relatives[0].kind, RelationshipKind::Spouse);
        assert!(record.relatives[0].members[0].is_deceased);
        assert_eq!(record.relatives[1].kind, RelationshipKind::Custom("خالة".into()));

        match &record.burial {
            BurialInfo::Scheduled { grave, time, .. } => {
                assert_eq!(grave.as_ref().map(|g| g.plot.as_str()), Some("4"));
                assert_eq!(
                    *time,
                    BurialTime::Manual(NaiveTime::from_hms_opt(14, 0, 0).unwrap())
                );
            }
            other => panic!("expected scheduled burial, got {other:?}"),
        }

        let men = record.condolence.men.expect("men reception");
        assert_eq!(men.schedule[0].weekday, Weekday::Sunday);
        assert!(men.schedule[0].ranges[0].start.is_prayer());
    }

    #[test]
    fn render_then_parse_preserves_record() {
        let parsed = Submission::parse_yaml(SAMPLE).expect("parse yaml");
        let rendered = Submission::render_yaml(&parsed).expect("render yaml");
        let reparsed = Submission::parse_yaml(&rendered).expect("reparse yaml");
        assert_eq!(parsed, reparsed);
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = SAMPLE.replace("age: 2", "age: 2\nnickname: fatoom");
        let err = Submission::parse_yaml(&input).expect_err("should reject unknown key");
        match err {
            AnnouncementError::Translation(msg) => assert!(msg.contains("nickname")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let err = Submission::parse_yaml("category: wedding\nname: x\n").expect_err("category");
        assert!(matches!(err, AnnouncementError::Translation(msg) if msg.contains("wedding")));
    }

    #[test]
    fn rejects_invalid_gender() {
        let input = SAMPLE.replace("gender: انثى", "gender: other");
        let err = Submission::parse_yaml(&input).expect_err("invalid gender");
        assert!(matches!(err, AnnouncementError::InvalidGender(v) if v == "other"));
    }

    #[test]
    fn rejects_unknown_relationship() {
        let input = SAMPLE.replace("relationship: الزوج", "relationship: العم");
        let err = Submission::parse_yaml(&input).expect_err("unknown relationship");
        assert!(matches!(err, AnnouncementError::UnknownRelationship(v) if v == "العم"));
    }

    #[test]
    fn rejects_unknown_time_kind() {
        let input = SAMPLE.replace("kind: manual", "kind: sunset");
        let err = Submission::parse_yaml(&input).expect_err("unknown time kind");
        assert!(matches!(err, AnnouncementError::UnknownTimeKind(v) if v == "sunset"));
    }

    #[test]
    fn rejects_grave_number_without_plot() {
        let input = SAMPLE.replace("  grave_plot: \"4\"\n", "");
        let err = Submission::parse_yaml(&input).expect_err("incomplete grave");
        assert!(matches!(err, AnnouncementError::IncompleteGrave));
    }

    #[test]
    fn rejects_invalid_clock_time() {
        let input = SAMPLE.replace("value: \"14:00\"", "value: \"25:99\"");
        let err = Submission::parse_yaml(&input).expect_err("invalid clock");
        assert!(matches!(err, AnnouncementError::InvalidClockTime(v) if v == "25:99"));
    }

    #[test]
    fn outside_bahrain_uses_custom_location() {
        let input = SAMPLE.replace(
            "location: مقبرة الحد للأوقاف السنية",
            "location: خارج البحرين\n  custom_location: مكة المكرمة",
        );
        let record = expect_record(Submission::parse_yaml(&input).expect("parse"));
        match record.burial {
            BurialInfo::Scheduled { location, .. } => assert_eq!(location, "مكة المكرمة"),
            other => panic!("expected scheduled burial, got {other:?}"),
        }

        let missing = SAMPLE.replace("location: مقبرة الحد للأوقاف السنية", "location: خارج البحرين");
        let err = Submission::parse_yaml(&missing).expect_err("custom location required");
        assert!(matches!(err, AnnouncementError::InvalidInput(msg) if msg.contains("custom_location")));
    }

    #[test]
    fn deferred_burial_needs_no_details() {
        let input = r#"category: death_announcement
name: محمد
gender: ذكر
burial:
  mode: deferred
contacts:
  - name: علي
    phone: "39998877"
"#;
        let record = expect_record(Submission::parse_yaml(input).expect("parse"));
        assert_eq!(record.burial, BurialInfo::Deferred);
        assert!(record.relatives.is_empty());
        assert_eq!(record.condolence, Condolence::default());
    }

    #[test]
    fn parses_json_value() {
        let value = serde_json::json!({
            "category": "prayer_request",
            "patient_name": "سارة"
        });
        let data = Submission::from_json_value(value).expect("parse json value");
        assert_eq!(data.category(), SubmissionCategory::PrayerRequest);
    }

    #[test]
    fn parses_blood_donation_json() {
        let input = r#"{
            "category": "blood_donation",
            "name": "يوسف",
            "gender": "male",
            "personal_id": "850101234",
            "blood_types": ["O+", "o-"],
            "location": "بنك الدم بمجمع السلمانية الطبي",
            "date": "2025-03-01",
            "times": [{"from": "07:30", "to": "13:00"}],
            "contacts": [{"description": "أبو يوسف", "number": "36667777"}]
        }"#;
        match Submission::parse_json(input).expect("parse json") {
            SubmissionData::BloodDonation(d) => {
                assert_eq!(d.blood_types, vec![BloodType::OPositive, BloodType::ONegative]);
                assert_eq!(d.time_ranges.len(), 1);
                assert_eq!(d.personal_id.as_str(), "850101234");
            }
            other => panic!("expected blood donation, got {other:?}"),
        }
    }

    #[test]
    fn blood_donation_rejects_bad_personal_id() {
        let input = r#"{"category": "blood_donation", "name": "يوسف", "gender": "male",
            "personal_id": "12", "blood_types": ["A+"], "location": "السلمانية",
            "date": "2025-03-01", "contacts": [{"description": "x", "number": "36667777"}]}"#;
        let err = Submission::parse_json(input).expect_err("bad id");
        assert!(matches!(err, AnnouncementError::InvalidInput(msg) if msg.contains("9 digits")));
    }

    #[test]
    fn load_reads_json_and_yaml_files() {
        let dir = tempfile::tempdir().expect("tempdir");

        let yaml_path = dir.path().join("notice.yaml");
        std::fs::write(&yaml_path, SAMPLE).expect("write yaml");
        let data = Submission::load(&yaml_path).expect("load yaml");
        assert_eq!(data.category(), SubmissionCategory::DeathAnnouncement);

        let json_path = dir.path().join("notice.json");
        let mut file = std::fs::File::create(&json_path).expect("create json");
        write!(
            file,
            r#"{{"category": "condolence_thanks", "family_name": "آل محمود", "deceased_name": "حسن", "gender": "male"}}"#
        )
        .expect("write json");
        let data = Submission::load(&json_path).expect("load json");
        assert_eq!(data.category(), SubmissionCategory::CondolenceThanks);

        let missing = Submission::load(&dir.path().join("missing.yaml")).expect_err("missing file");
        assert!(matches!(missing, AnnouncementError::Io(_)));
    }

    const PRAYER_TIMES: &str = r#"category: prayer_times
date: "2024-07-07"
fajr: "03:17"
sunrise: "04:47"
dhuhr: "11:43"
asr: "15:08"
maghrib: "18:38"
isha: "20:08"
"#;

    #[test]
    fn prayer_times_derive_last_third() {
        match Submission::parse_yaml(PRAYER_TIMES).expect("parse prayer times") {
            SubmissionData::PrayerTimes(d) => {
                assert_eq!(d.date, NaiveDate::from_ymd_opt(2024, 7, 7).unwrap());
                assert_eq!(d.isha, NaiveTime::from_hms_opt(20, 8, 0).unwrap());
                // 18:38 to 03:17 is 519 minutes; two thirds is 346.
                assert_eq!(d.last_third, NaiveTime::from_hms_opt(0, 24, 0).unwrap());
            }
            other => panic!("expected prayer times, got {other:?}"),
        }
    }

    #[test]
    fn prayer_times_keep_given_last_third_and_round_trip() {
        let input = format!("{PRAYER_TIMES}last_third: \"00:30\"\n");
        let data = Submission::parse_yaml(&input).expect("parse");
        assert_eq!(data.category().arabic_name(), "مواقيت الصلاة");
        match &data {
            SubmissionData::PrayerTimes(d) => {
                assert_eq!(d.last_third, NaiveTime::from_hms_opt(0, 30, 0).unwrap())
            }
            other => panic!("expected prayer times, got {other:?}"),
        }

        let yaml = Submission::render_yaml(&data).expect("render");
        assert_eq!(Submission::parse_yaml(&yaml).expect("reparse"), data);
    }

    #[test]
    fn prayer_times_reject_bad_clock() {
        let input = PRAYER_TIMES.replace("\"15:08\"", "\"3pm\"");
        let err = Submission::parse_yaml(&input).expect_err("bad clock");
        assert!(matches!(err, AnnouncementError::InvalidClockTime(v) if v == "3pm"));
    }
}
