//! Input validation rules applied at the submission boundary.
//!
//! These mirror the checks the public form performs before submitting. They run again here
//! because API clients can bypass the form.

use crate::record::Contact;
use crate::{AnnouncementError, AnnouncementResult};
use tawasul_types::{NonEmptyText, PhoneNumber};

/// Youngest and oldest age the form accepts.
pub const AGE_RANGE: std::ops::RangeInclusive<u16> = 1..=150;

/// A death announcement lists between one and four contact numbers.
pub const MAX_CONTACTS: usize = 4;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;

/// Validates a person's name (deceased, patient, family).
///
/// # Errors
///
/// Returns [`AnnouncementError::InvalidInput`] if the name is blank, shorter than two or longer
/// than a hundred characters, or contains markup.
pub fn validate_person_name(field: &str, name: &str) -> AnnouncementResult<NonEmptyText> {
    let text = NonEmptyText::new(name)
        .map_err(|_| AnnouncementError::InvalidInput(format!("{field} is required")))?;

    let len = text.char_len();
    if len < NAME_MIN_CHARS {
        return Err(AnnouncementError::InvalidInput(format!(
            "{field} must be at least {NAME_MIN_CHARS} characters"
        )));
    }
    if len > NAME_MAX_CHARS {
        return Err(AnnouncementError::InvalidInput(format!(
            "{field} exceeds maximum length of {NAME_MAX_CHARS} characters"
        )));
    }
    if text.as_str().contains(['<', '>']) {
        return Err(AnnouncementError::InvalidInput(format!(
            "{field} contains disallowed characters"
        )));
    }

    Ok(text)
}

/// Validates an optional age.
///
/// # Errors
///
/// Returns [`AnnouncementError::InvalidInput`] when the age falls outside [`AGE_RANGE`].
pub fn validate_age(age: Option<u16>) -> AnnouncementResult<Option<u16>> {
    match age {
        Some(a) if !AGE_RANGE.contains(&a) => Err(AnnouncementError::InvalidInput(format!(
            "age must be between {} and {}, got {a}",
            AGE_RANGE.start(),
            AGE_RANGE.end()
        ))),
        other => Ok(other),
    }
}

/// Validates the contact list of a death announcement.
///
/// # Errors
///
/// Returns [`AnnouncementError::InvalidInput`] if there are no contacts, more than
/// [`MAX_CONTACTS`], or any entry lacks a name or an 8-digit phone number.
pub fn validate_contacts(contacts: &[Contact]) -> AnnouncementResult<()> {
    if contacts.is_empty() {
        return Err(AnnouncementError::InvalidInput(
            "at least one contact number is required".into(),
        ));
    }
    if contacts.len() > MAX_CONTACTS {
        return Err(AnnouncementError::InvalidInput(format!(
            "no more than {MAX_CONTACTS} contact numbers are allowed"
        )));
    }

    for (i, contact) in contacts.iter().enumerate() {
        if contact.name.trim().is_empty() {
            return Err(AnnouncementError::InvalidInput(format!(
                "contact {} is missing a name",
                i + 1
            )));
        }
        PhoneNumber::new(&contact.phone).map_err(|e| {
            AnnouncementError::InvalidInput(format!("contact {} phone: {e}", i + 1))
        })?;
    }

    Ok(())
}
