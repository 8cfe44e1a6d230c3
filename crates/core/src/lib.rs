//! # Tawasul Core
//!
//! Text composition for Tawasul notices.
//!
//! This crate turns validated records from the `announcement` crate into Arabic notice text:
//! - death announcements (age and gender agreement, relatives, burial, condolence schedule)
//! - blood-donation requests, condolence thanks, prayer requests and the prayer-times card
//! - top/bottom placement of announcement sections on the card
//!
//! Composition is pure: no I/O, no shared state, and identical input always yields identical
//! output.
//!
//! **No API concerns**: parsing submissions belongs in `announcement`; HTTP and CLI surfaces live
//! in `api-rest` and `tawasul-cli`.

pub mod burial;
pub mod calendar;
pub mod card;
pub mod clock;
pub mod condolence;
pub mod config;
pub mod constants;
pub mod error;
pub mod markup;
pub mod notices;
pub mod phrases;
pub mod placement;
pub mod relatives;

pub use card::{Announcement, Section, SectionKind};
pub use config::ComposerConfig;
pub use error::{ComposeError, ComposeResult};
pub use markup::Markup;
pub use notices::NoticeText;
pub use placement::CardLayout;

use announcement::validation::{AGE_RANGE, MAX_CONTACTS};
use announcement::{
    AnnouncementRecord, BurialInfo, Contact, RelationshipKind, Submission, SubmissionData,
};
use std::path::Path;
use constants::{AGE_INTRO, CONTACTS_PREFIX, RELATIVES_PREFIX};
use markup::Emphasis;

/// Result of composing any submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposedNotice {
    Announcement(Announcement),
    Notice(NoticeText),
}

impl ComposedNotice {
    pub fn text(&self) -> String {
        match self {
            ComposedNotice::Announcement(a) => a.text(),
            ComposedNotice::Notice(n) => n.text(),
        }
    }

    /// Card placement; only death announcements are split between top and bottom.
    pub fn layout(&self) -> Option<CardLayout> {
        match self {
            ComposedNotice::Announcement(a) => Some(a.layout()),
            ComposedNotice::Notice(_) => None,
        }
    }
}

/// Composes notice text - no parsing or I/O.
#[derive(Clone, Debug, Default)]
pub struct TextComposer {
    config: ComposerConfig,
}

impl TextComposer {
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    pub fn markup(&self) -> Markup {
        self.config.markup()
    }

    /// Compose a death announcement.
    ///
    /// Optional data that is missing simply leaves its clause out.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::MalformedRecord`] if the record breaks an invariant that upstream
    /// validation should have enforced (age outside 1-150, more than four contacts, an empty
    /// custom relationship label, half-filled grave details). Nothing is rendered in that case.
    pub fn compose(&self, record: &AnnouncementRecord) -> ComposeResult<Announcement> {
        check_record(record)?;
        let markup = self.markup();

        let mut sections = Vec::new();
        if let Some(relatives) =
            relatives::compose_relatives(markup, record.gender, &record.relatives)
        {
            sections.push(Section {
                kind: SectionKind::Relatives,
                text: format!("{RELATIVES_PREFIX}{relatives}"),
            });
        }
        sections.push(Section {
            kind: SectionKind::Burial,
            text: burial::compose_burial(markup, &record.burial)?,
        });
        if let Some(condolence) = condolence::compose_condolence(markup, &record.condolence) {
            sections.push(Section {
                kind: SectionKind::Condolence,
                text: condolence,
            });
        }
        if let Some(contacts) = compose_contacts(markup, &record.contacts) {
            sections.push(Section {
                kind: SectionKind::Contacts,
                text: contacts,
            });
        }

        Ok(Announcement {
            transition: phrases::transition_phrase(record.gender).to_string(),
            age: record.age.map(|age| {
                format!(
                    "{AGE_INTRO} {}",
                    markup.span(Emphasis::Detail, &phrases::age_phrase(age))
                )
            }),
            name: markup.span(Emphasis::Name, record.deceased_name.as_str()),
            occupation: record
                .occupation
                .as_ref()
                .map(|o| markup.text(o.as_str())),
            sections,
        })
    }

    /// Compose any submission category.
    pub fn compose_submission(&self, data: &SubmissionData) -> ComposeResult<ComposedNotice> {
        let markup = self.markup();
        let composed = match data {
            SubmissionData::DeathAnnouncement(record) => {
                ComposedNotice::Announcement(self.compose(record)?)
            }
            SubmissionData::BloodDonation(d) => {
                ComposedNotice::Notice(notices::compose_blood_donation(markup, d)?)
            }
            SubmissionData::CondolenceThanks(d) => {
                ComposedNotice::Notice(notices::compose_condolence_thanks(markup, d))
            }
            SubmissionData::PrayerRequest(d) => {
                ComposedNotice::Notice(notices::compose_prayer_request(markup, d))
            }
            SubmissionData::PrayerTimes(d) => {
                ComposedNotice::Notice(notices::compose_prayer_times(markup, d)?)
            }
        };

        tracing::debug!("composed {} notice", data.category().to_wire());
        Ok(composed)
    }

    /// Load a submission file (see [`Submission::load`]) and compose it.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Announcement`] if the file cannot be read or parsed, otherwise the
    /// same errors as [`TextComposer::compose_submission`].
    pub fn compose_file(&self, path: &Path) -> ComposeResult<ComposedNotice> {
        let data = Submission::load(path)?;
        self.compose_submission(&data)
    }
}

fn check_record(record: &AnnouncementRecord) -> ComposeResult<()> {
    if let Some(age) = record.age {
        if !AGE_RANGE.contains(&age) {
            return Err(ComposeError::MalformedRecord(format!(
                "age {age} is outside {}-{}",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            )));
        }
    }

    if record.contacts.len() > MAX_CONTACTS {
        return Err(ComposeError::MalformedRecord(format!(
            "{} contacts given, at most {MAX_CONTACTS} allowed",
            record.contacts.len()
        )));
    }

    for group in &record.relatives {
        if let RelationshipKind::Custom(label) | RelationshipKind::Other(label) = &group.kind {
            if label.trim().is_empty() {
                return Err(ComposeError::MalformedRecord(
                    "relationship label is empty".into(),
                ));
            }
        }
    }

    if let BurialInfo::Scheduled {
        grave: Some(grave), ..
    } = &record.burial
    {
        if grave.number.trim().is_empty() || grave.plot.trim().is_empty() {
            return Err(ComposeError::MalformedRecord(
                "grave number and plot must both be present".into(),
            ));
        }
    }

    Ok(())
}

/// "أرقام التواصل: name phone - name phone", skipping half-filled entries.
fn compose_contacts(markup: Markup, contacts: &[Contact]) -> Option<String> {
    let entries: Vec<String> = contacts
        .iter()
        .filter(|c| !c.name.trim().is_empty() && !c.phone.trim().is_empty())
        .map(|c| markup.text(&format!("{} {}", c.name.trim(), c.phone.trim())))
        .collect();
    (!entries.is_empty()).then(|| format!("{CONTACTS_PREFIX}{}", entries.join(" - ")))
}
