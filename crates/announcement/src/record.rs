//! Domain types for a death announcement.
//!
//! These are the typed carriers the composer works on. They are built by the wire translation in
//! [`crate::submission`] or directly by library callers; either way they are read-only once
//! constructed.
//!
//! Enum-valued fields accept two vocabularies at the boundary: the English tag used by API
//! clients and the Arabic label shown in the public form.

use crate::{AnnouncementError, AnnouncementResult};
use chrono::{NaiveDate, NaiveTime};
use tawasul_types::NonEmptyText;

// ============================================================================
// Gender
// ============================================================================

/// Gender of a person named on a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a gender from a wire tag or form label.
    ///
    /// # Errors
    ///
    /// Returns [`AnnouncementError::InvalidGender`] for anything other than the known spellings.
    pub fn parse(input: &str) -> AnnouncementResult<Self> {
        match input.trim() {
            "male" | "ذكر" => Ok(Gender::Male),
            "female" | "انثى" | "أنثى" => Ok(Gender::Female),
            other => Err(AnnouncementError::InvalidGender(other.to_string())),
        }
    }

    pub fn to_wire(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

// ============================================================================
// Relatives
// ============================================================================

/// Relationship of a group of relatives to the deceased.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// Husband of a deceased woman.
    Spouse,
    Son,
    Daughter,
    FullBrother,
    FullSister,
    Brother,
    Sister,
    /// Brother-in-law (نسيب) of a deceased man.
    InLaw,
    /// User-labelled relationship with the same rendering rules as the built-in groups.
    Custom(String),
    /// Relationship with no dedicated phrasing; rendered as a flat `label: names` list.
    Other(String),
}

impl RelationshipKind {
    /// Parse a relationship from its wire tag or Arabic form label.
    ///
    /// `custom`/`أخرى` and `other` carry a user-supplied label, which must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`AnnouncementError::UnknownRelationship`] for unknown tags and
    /// [`AnnouncementError::InvalidInput`] when a labelled kind has no label.
    pub fn parse(tag: &str, label: Option<&str>) -> AnnouncementResult<Self> {
        let label = label.map(str::trim).filter(|l| !l.is_empty());
        let needs_label = |kind: fn(String) -> RelationshipKind| {
            label.map(|l| kind(l.to_string())).ok_or_else(|| {
                AnnouncementError::InvalidInput(format!(
                    "relationship '{}' requires a label",
                    tag.trim()
                ))
            })
        };

        match tag.trim() {
            "spouse" | "الزوج" => Ok(RelationshipKind::Spouse),
            "son" | "الابن" => Ok(RelationshipKind::Son),
            "daughter" | "البنت" => Ok(RelationshipKind::Daughter),
            // Older form builds used the reversed word order for full siblings.
            "full_brother" | "الأخ الشقيق" | "الشقيق الأخ" => Ok(RelationshipKind::FullBrother),
            "full_sister" | "الأخت الشقيقة" | "الشقيق الأخت" => {
                Ok(RelationshipKind::FullSister)
            }
            "brother" | "الأخ" => Ok(RelationshipKind::Brother),
            "sister" | "الأخت" => Ok(RelationshipKind::Sister),
            "in_law" | "النسيب" => Ok(RelationshipKind::InLaw),
            "custom" | "أخرى" => needs_label(RelationshipKind::Custom),
            "other" => needs_label(RelationshipKind::Other),
            other => Err(AnnouncementError::UnknownRelationship(other.to_string())),
        }
    }

    /// Wire tag and, for labelled kinds, the label.
    pub fn to_wire(&self) -> (&'static str, Option<&str>) {
        match self {
            RelationshipKind::Spouse => ("spouse", None),
            RelationshipKind::Son => ("son", None),
            RelationshipKind::Daughter => ("daughter", None),
            RelationshipKind::FullBrother => ("full_brother", None),
            RelationshipKind::FullSister => ("full_sister", None),
            RelationshipKind::Brother => ("brother", None),
            RelationshipKind::Sister => ("sister", None),
            RelationshipKind::InLaw => ("in_law", None),
            RelationshipKind::Custom(label) => ("custom", Some(label.as_str())),
            RelationshipKind::Other(label) => ("other", Some(label.as_str())),
        }
    }

    /// Gender of the people in a group of this kind.
    ///
    /// The form collects no per-relative gender; it is implied by the relationship. Labelled
    /// kinds are treated as male, matching how the form has always phrased them.
    pub fn member_gender(&self) -> Gender {
        match self {
            RelationshipKind::Daughter | RelationshipKind::FullSister | RelationshipKind::Sister => {
                Gender::Female
            }
            _ => Gender::Male,
        }
    }
}

/// A single named relative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relative {
    /// Name as typed; blank names are ignored by the composer.
    pub name: String,
    /// Whether this relative has themselves passed away.
    pub is_deceased: bool,
}

impl Relative {
    pub fn living(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_deceased: false,
        }
    }

    pub fn deceased(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_deceased: true,
        }
    }

    /// Trimmed name, or `None` if the name is blank.
    pub fn display_name(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Relatives sharing one relationship to the deceased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelativeGroup {
    pub kind: RelationshipKind,
    pub members: Vec<Relative>,
}

impl RelativeGroup {
    pub fn new(kind: RelationshipKind, members: Vec<Relative>) -> Self {
        Self { kind, members }
    }

    /// True when at least one member has a non-blank name.
    pub fn has_named_member(&self) -> bool {
        self.members.iter().any(|m| m.display_name().is_some())
    }
}

// ============================================================================
// Burial
// ============================================================================

/// Grave identification in a cemetery; number and plot always travel together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraveLocation {
    pub number: String,
    pub plot: String,
}

/// When a scheduled burial takes place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BurialTime {
    /// Clock time entered by hand.
    Manual(NaiveTime),
    /// Anchored to a prayer, e.g. "بعد صلاة العصر"; shown verbatim.
    AfterPrayer(String),
}

/// Burial state of the announcement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BurialInfo {
    /// Details will be announced later.
    Deferred,
    /// The burial has already taken place.
    Completed,
    Scheduled {
        date: NaiveDate,
        location: String,
        grave: Option<GraveLocation>,
        time: BurialTime,
    },
}

impl BurialInfo {
    pub fn mode_to_wire(&self) -> &'static str {
        match self {
            BurialInfo::Deferred => "deferred",
            BurialInfo::Completed => "completed",
            BurialInfo::Scheduled { .. } => "scheduled",
        }
    }
}

// ============================================================================
// Condolence reception
// ============================================================================

/// Day of the week, in the order used for condolence schedules (Saturday first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Position in the local week, السبت = 0 … الجمعة = 6.
    pub fn week_index(self) -> usize {
        self as usize
    }

    pub fn arabic_name(self) -> &'static str {
        match self {
            Weekday::Saturday => "السبت",
            Weekday::Sunday => "الأحد",
            Weekday::Monday => "الاثنين",
            Weekday::Tuesday => "الثلاثاء",
            Weekday::Wednesday => "الأربعاء",
            Weekday::Thursday => "الخميس",
            Weekday::Friday => "الجمعة",
        }
    }

    pub fn to_wire(self) -> &'static str {
        match self {
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }

    /// Parse an Arabic day name or an English day name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AnnouncementError::UnknownWeekday`] for anything else.
    pub fn parse(input: &str) -> AnnouncementResult<Self> {
        let trimmed = input.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.arabic_name() == trimmed || d.to_wire().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AnnouncementError::UnknownWeekday(trimmed.to_string()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
        }
    }
}

/// One end of a reception time range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimePoint {
    Manual(NaiveTime),
    /// Named prayer, e.g. "العصر" or "بعد صلاة المغرب".
    Prayer(String),
}

impl TimePoint {
    pub fn is_prayer(&self) -> bool {
        matches!(self, TimePoint::Prayer(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub start: TimePoint,
    pub end: TimePoint,
}

/// Reception hours on one weekday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceptionDay {
    pub weekday: Weekday,
    pub ranges: Vec<TimeRange>,
}

/// Where and when one audience (men or women) is received for condolences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reception {
    pub location: Option<String>,
    pub schedule: Vec<ReceptionDay>,
}

impl Reception {
    /// True when there is nothing to show for this audience.
    pub fn is_empty(&self) -> bool {
        self.location
            .as_deref()
            .map_or(true, |l| l.trim().is_empty())
            && self.schedule.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Condolence {
    pub men: Option<Reception>,
    pub women: Option<Reception>,
}

// ============================================================================
// Record
// ============================================================================

/// Contact person listed at the bottom of the card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// Everything needed to compose a death announcement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnouncementRecord {
    pub deceased_name: NonEmptyText,
    pub gender: Gender,
    /// Age in years; the form accepts 1–150.
    pub age: Option<u16>,
    /// Occupation or social status line shown under the name.
    pub occupation: Option<NonEmptyText>,
    pub burial: BurialInfo,
    pub condolence: Condolence,
    pub relatives: Vec<RelativeGroup>,
    pub contacts: Vec<Contact>,
}

impl AnnouncementRecord {
    /// Minimal record with deferred burial and no optional sections.
    pub fn new(deceased_name: NonEmptyText, gender: Gender) -> Self {
        Self {
            deceased_name,
            gender,
            age: None,
            occupation: None,
            burial: BurialInfo::Deferred,
            condolence: Condolence::default(),
            relatives: Vec::new(),
            contacts: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_accepts_tags_and_form_labels() {
        assert_eq!(Gender::parse("male").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("ذكر").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("انثى").unwrap(), Gender::Female);
        assert_eq!(Gender::parse(" أنثى ").unwrap(), Gender::Female);
    }

    #[test]
    fn gender_rejects_unknown_value() {
        let err = Gender::parse("unknown").expect_err("should reject");
        assert!(matches!(err, AnnouncementError::InvalidGender(v) if v == "unknown"));
    }

    #[test]
    fn relationship_parses_legacy_full_sibling_labels() {
        assert_eq!(
            RelationshipKind::parse("الشقيق الأخ", None).unwrap(),
            RelationshipKind::FullBrother
        );
        assert_eq!(
            RelationshipKind::parse("الأخت الشقيقة", None).unwrap(),
            RelationshipKind::FullSister
        );
    }

    #[test]
    fn custom_relationship_requires_label() {
        let err = RelationshipKind::parse("أخرى", Some("  ")).expect_err("blank label");
        assert!(matches!(err, AnnouncementError::InvalidInput(msg) if msg.contains("label")));

        let kind = RelationshipKind::parse("custom", Some("ابن العم")).unwrap();
        assert_eq!(kind, RelationshipKind::Custom("ابن العم".into()));
        assert_eq!(kind.to_wire(), ("custom", Some("ابن العم")));
    }

    #[test]
    fn unknown_relationship_is_rejected() {
        let err = RelationshipKind::parse("cousin", None).expect_err("unknown");
        assert!(matches!(err, AnnouncementError::UnknownRelationship(v) if v == "cousin"));
    }

    #[test]
    fn member_gender_follows_relationship() {
        assert_eq!(RelationshipKind::Son.member_gender(), Gender::Male);
        assert_eq!(RelationshipKind::Daughter.member_gender(), Gender::Female);
        assert_eq!(RelationshipKind::Spouse.member_gender(), Gender::Male);
        assert_eq!(
            RelationshipKind::Custom("خال".into()).member_gender(),
            Gender::Male
        );
    }

    #[test]
    fn weekday_order_starts_on_saturday() {
        assert_eq!(Weekday::Saturday.week_index(), 0);
        assert_eq!(Weekday::Friday.week_index(), 6);
        assert!(Weekday::Saturday < Weekday::Sunday);
    }

    #[test]
    fn weekday_parses_arabic_and_english() {
        assert_eq!(Weekday::parse("الثلاثاء").unwrap(), Weekday::Tuesday);
        assert_eq!(Weekday::parse("Thursday").unwrap(), Weekday::Thursday);
        assert!(matches!(
            Weekday::parse("funday"),
            Err(AnnouncementError::UnknownWeekday(_))
        ));
    }

    #[test]
    fn weekday_from_chrono() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(Weekday::from(chrono::Datelike::weekday(&date)), Weekday::Monday);
    }

    #[test]
    fn relative_display_name_skips_blank() {
        assert_eq!(Relative::living("  علي ").display_name(), Some("علي"));
        assert_eq!(Relative::deceased("   ").display_name(), None);
        let group = RelativeGroup::new(RelationshipKind::Son, vec![Relative::living(" ")]);
        assert!(!group.has_named_member());
    }

    #[test]
    fn reception_is_empty_without_location_or_schedule() {
        assert!(Reception::default().is_empty());
        let reception = Reception {
            location: Some("مأتم".into()),
            schedule: Vec::new(),
        };
        assert!(!reception.is_empty());
    }
}
