//! Small gender- and number-agreeing phrases.

use crate::constants::{
    BENEDICTION_FEMALE, BENEDICTION_MALE, BENEDICTION_PLURAL, TRANSITION_FEMALE, TRANSITION_MALE,
};
use announcement::Gender;

/// Age in years with the correct Arabic counted-noun form.
///
/// | age     | phrase      |
/// |---------|-------------|
/// | 1       | عام         |
/// | 2       | عامين       |
/// | 3..=10  | `n` أعوام   |
/// | 11..    | `n` عامًا   |
pub fn age_phrase(age: u16) -> String {
    match age {
        1 => "عام".to_string(),
        2 => "عامين".to_string(),
        3..=10 => format!("{age} أعوام"),
        _ => format!("{age} عامًا"),
    }
}

/// "Passed into the mercy of God", agreeing with the deceased's gender.
pub fn transition_phrase(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => TRANSITION_MALE,
        Gender::Female => TRANSITION_FEMALE,
    }
}

/// Benediction for a single deceased person.
pub fn singular_benediction(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => BENEDICTION_MALE,
        Gender::Female => BENEDICTION_FEMALE,
    }
}

/// Benediction closing a group, given the genders of its deceased members.
///
/// `None` when nobody in the group is deceased.
pub fn group_benediction(deceased: &[Gender]) -> Option<&'static str> {
    match deceased {
        [] => None,
        [single] => Some(singular_benediction(*single)),
        _ => Some(BENEDICTION_PLURAL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_phrases_follow_counting_rules() {
        let cases = [
            (1, "عام"),
            (2, "عامين"),
            (3, "3 أعوام"),
            (10, "10 أعوام"),
            (11, "11 عامًا"),
            (50, "50 عامًا"),
        ];
        for (age, expected) in cases {
            assert_eq!(age_phrase(age), expected, "age {age}");
        }
    }

    #[test]
    fn transition_agrees_with_gender() {
        assert_eq!(transition_phrase(Gender::Male), "انتقل إلى رحمة الله تعالى");
        assert_eq!(transition_phrase(Gender::Female), "انتقلت إلى رحمة الله تعالى");
    }

    #[test]
    fn group_benediction_by_count() {
        assert_eq!(group_benediction(&[]), None);
        assert_eq!(group_benediction(&[Gender::Male]), Some("رحمه الله"));
        assert_eq!(group_benediction(&[Gender::Female]), Some("رحمها الله"));
        assert_eq!(
            group_benediction(&[Gender::Female, Gender::Female]),
            Some("رحمهم الله")
        );
    }
}
