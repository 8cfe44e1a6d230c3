//! The composed death announcement.
//!
//! An [`Announcement`] is the card's text: a header (transition phrase, age line, name,
//! occupation) followed by up to four sections in a fixed order.

use crate::placement::{place, CardLayout};

/// Card sections, in the order they are composed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Relatives,
    Burial,
    Condolence,
    Contacts,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Relatives => "relatives",
            SectionKind::Burial => "burial",
            SectionKind::Condolence => "condolence",
            SectionKind::Contacts => "contacts",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub transition: String,
    /// "عن عمر يناهز …", present only when an age was given.
    pub age: Option<String>,
    pub name: String,
    pub occupation: Option<String>,
    pub sections: Vec<Section>,
}

impl Announcement {
    /// Header lines in display order, skipping the absent ones.
    pub fn header_lines(&self) -> Vec<&str> {
        let mut lines = vec![self.transition.as_str()];
        lines.extend(self.age.as_deref());
        lines.push(self.name.as_str());
        lines.extend(self.occupation.as_deref());
        lines
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Full text: header lines then sections, newline separated.
    pub fn text(&self) -> String {
        let mut lines: Vec<&str> = self.header_lines();
        lines.extend(self.sections.iter().map(|s| s.text.as_str()));
        lines.join("\n")
    }

    /// Split the sections between the top and bottom of the card.
    pub fn layout(&self) -> CardLayout {
        place(&self.sections, self.age.is_some(), self.occupation.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(age: Option<&str>, occupation: Option<&str>) -> Announcement {
        Announcement {
            transition: "انتقل إلى رحمة الله تعالى".into(),
            age: age.map(str::to_string),
            name: "علي".into(),
            occupation: occupation.map(str::to_string),
            sections: vec![
                Section {
                    kind: SectionKind::Burial,
                    text: "تم الدفن".into(),
                },
                Section {
                    kind: SectionKind::Contacts,
                    text: "أرقام التواصل: حسن 33445566".into(),
                },
            ],
        }
    }

    #[test]
    fn text_joins_header_and_sections() {
        let a = announcement(Some("عن عمر يناهز 50 عامًا"), None);
        assert_eq!(
            a.text(),
            "انتقل إلى رحمة الله تعالى\nعن عمر يناهز 50 عامًا\nعلي\nتم الدفن\nأرقام التواصل: حسن 33445566"
        );
    }

    #[test]
    fn layout_uses_header_lines() {
        let a = announcement(Some("عن عمر يناهز 50 عامًا"), Some("معلم متقاعد"));
        let layout = a.layout();
        assert_eq!(layout.top.len(), 1);
        assert_eq!(layout.bottom[0].kind, SectionKind::Contacts);
        assert!(a.section(SectionKind::Relatives).is_none());
    }
}
