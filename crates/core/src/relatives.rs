//! Relatives clause.
//!
//! Every relationship class goes through [`format_name_group`]; classes differ only in their
//! title and in whether they apply to the deceased's gender. Spouses and the flat fallback list
//! have their own small formatters.

use crate::constants::{AND, BENEDICTION_MALE, PLURAL_TITLE_SUFFIX};
use crate::markup::{Emphasis, Markup};
use crate::phrases::group_benediction;
use announcement::{Gender, RelationshipKind, RelativeGroup};
use std::collections::BTreeMap;

/// A named relative together with the gender implied by their relationship.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupMember<'a> {
    pub name: &'a str,
    pub is_deceased: bool,
    pub gender: Gender,
}

/// Relationship classes with dedicated phrasing, in the order their clauses appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum RelativeClass {
    Spouse,
    Children,
    FullSiblings,
    Siblings,
    InLaws,
}

impl RelativeClass {
    fn of(kind: &RelationshipKind) -> Option<Self> {
        match kind {
            RelationshipKind::Spouse => Some(RelativeClass::Spouse),
            RelationshipKind::Son | RelationshipKind::Daughter => Some(RelativeClass::Children),
            RelationshipKind::FullBrother | RelationshipKind::FullSister => {
                Some(RelativeClass::FullSiblings)
            }
            RelationshipKind::Brother | RelationshipKind::Sister => Some(RelativeClass::Siblings),
            RelationshipKind::InLaw => Some(RelativeClass::InLaws),
            RelationshipKind::Custom(_) | RelationshipKind::Other(_) => None,
        }
    }

    /// Husbands are listed for a deceased woman, brothers-in-law for a deceased man.
    fn applies_to(self, deceased: Gender) -> bool {
        match self {
            RelativeClass::Spouse => deceased == Gender::Female,
            RelativeClass::InLaws => deceased == Gender::Male,
            _ => true,
        }
    }

    /// Title describing the deceased's relation to the group ("father of", "brother of", ...).
    fn title(self, deceased: Gender) -> &'static str {
        match (self, deceased) {
            (RelativeClass::Spouse, _) => "حرم",
            (RelativeClass::Children, Gender::Male) => "والد",
            (RelativeClass::Children, Gender::Female) => "والدة",
            (RelativeClass::FullSiblings, Gender::Male) => "شقيق",
            (RelativeClass::FullSiblings, Gender::Female) => "شقيقة",
            (RelativeClass::Siblings, Gender::Male) => "أخ",
            (RelativeClass::Siblings, Gender::Female) => "أخت",
            (RelativeClass::InLaws, _) => "نسيب",
        }
    }
}

/// Members of one class, males ahead of females.
#[derive(Default)]
struct ClassMembers<'a> {
    males: Vec<GroupMember<'a>>,
    females: Vec<GroupMember<'a>>,
}

impl<'a> ClassMembers<'a> {
    fn push(&mut self, member: GroupMember<'a>) {
        match member.gender {
            Gender::Male => self.males.push(member),
            Gender::Female => self.females.push(member),
        }
    }

    fn into_ordered(self) -> Vec<GroupMember<'a>> {
        let mut members = self.males;
        members.extend(self.females);
        members
    }
}

/// Render one group as `{title} {names}{benediction}`.
///
/// Living names come first, each in its own name span, followed by the deceased names inside a
/// single parenthesised span. The benediction is chosen from the number of deceased members and,
/// for a single one, that member's gender. Returns `None` when no member has a name.
pub fn format_name_group(
    markup: Markup,
    title: &str,
    members: &[GroupMember<'_>],
) -> Option<String> {
    let named: Vec<&GroupMember<'_>> = members
        .iter()
        .filter(|m| !m.name.trim().is_empty())
        .collect();
    if named.is_empty() {
        return None;
    }

    let (deceased, living): (Vec<&GroupMember<'_>>, Vec<&GroupMember<'_>>) =
        named.iter().copied().partition(|m| m.is_deceased);

    let mut parts: Vec<String> = living
        .iter()
        .map(|m| markup.span(Emphasis::Name, m.name.trim()))
        .collect();
    if !deceased.is_empty() {
        let names: Vec<&str> = deceased.iter().map(|m| m.name.trim()).collect();
        parts.push(markup.span(Emphasis::Name, &format!("({})", names.join(AND))));
    }

    let title = if named.len() > 1 {
        format!("{title} {PLURAL_TITLE_SUFFIX}")
    } else {
        title.to_string()
    };

    let genders: Vec<Gender> = deceased.iter().map(|m| m.gender).collect();
    let benediction = group_benediction(&genders)
        .map(|b| format!(" {b}"))
        .unwrap_or_default();

    Some(format!(
        "{} {}{}",
        markup.span(Emphasis::RelationshipTitle, &title),
        parts.join(AND),
        benediction
    ))
}

/// Husbands of a deceased woman. A deceased husband carries his own benediction and switches the
/// title to أرملة (widow).
fn format_spouses(markup: Markup, members: &[GroupMember<'_>]) -> Option<String> {
    if members.is_empty() {
        return None;
    }

    let names: Vec<String> = members
        .iter()
        .map(|m| {
            if m.is_deceased {
                format!(
                    "{} {BENEDICTION_MALE}",
                    markup.span(Emphasis::Name, &format!("({})", m.name))
                )
            } else {
                markup.span(Emphasis::Name, m.name)
            }
        })
        .collect();

    let title = if members.iter().any(|m| m.is_deceased) {
        "أرملة"
    } else {
        RelativeClass::Spouse.title(Gender::Female)
    };

    Some(format!(
        "{} {}",
        markup.span(Emphasis::RelationshipTitle, title),
        names.join(AND)
    ))
}

/// `{label}: name (رحمه الله), name2`
fn format_fallback(markup: Markup, label: &str, members: &[GroupMember<'_>]) -> String {
    let names: Vec<String> = members
        .iter()
        .map(|m| {
            if m.is_deceased {
                format!("{} ({BENEDICTION_MALE})", markup.text(m.name))
            } else {
                markup.text(m.name)
            }
        })
        .collect();
    format!("{}: {}", markup.text(label), names.join(", "))
}

/// Compose the full relatives clause, or `None` when no group has a named member.
///
/// Clause order depends only on the relationship: spouse, children, full siblings, siblings,
/// in-laws, custom groups in input order, then one block with all fallback groups.
pub fn compose_relatives(
    markup: Markup,
    deceased_gender: Gender,
    groups: &[RelativeGroup],
) -> Option<String> {
    let mut classes: BTreeMap<RelativeClass, ClassMembers<'_>> = BTreeMap::new();
    let mut custom: Vec<(&str, Vec<GroupMember<'_>>)> = Vec::new();
    let mut fallback: Vec<(&str, Vec<GroupMember<'_>>)> = Vec::new();

    for group in groups {
        if !group.has_named_member() {
            tracing::debug!("dropping relative group {:?} with no names", group.kind);
            continue;
        }

        let gender = group.kind.member_gender();
        let members = group.members.iter().filter_map(|m| {
            m.display_name().map(|name| GroupMember {
                name,
                is_deceased: m.is_deceased,
                gender,
            })
        });

        match &group.kind {
            RelationshipKind::Custom(label) => custom.push((label.trim(), members.collect())),
            RelationshipKind::Other(label) => fallback.push((label.trim(), members.collect())),
            kind => {
                let Some(class) = RelativeClass::of(kind) else {
                    continue;
                };
                if !class.applies_to(deceased_gender) {
                    tracing::debug!(
                        "skipping {:?} relatives for a {} deceased",
                        kind,
                        deceased_gender.to_wire()
                    );
                    continue;
                }
                let entry = classes.entry(class).or_default();
                for member in members {
                    entry.push(member);
                }
            }
        }
    }

    let mut clauses: Vec<String> = Vec::new();
    for (class, members) in classes {
        let members = members.into_ordered();
        let clause = match class {
            RelativeClass::Spouse => format_spouses(markup, &members),
            _ => format_name_group(markup, class.title(deceased_gender), &members),
        };
        clauses.extend(clause);
    }

    for (label, members) in &custom {
        clauses.extend(format_name_group(markup, label, members));
    }

    if !fallback.is_empty() {
        let block: Vec<String> = fallback
            .iter()
            .map(|(label, members)| format_fallback(markup, label, members))
            .collect();
        clauses.push(block.join(AND));
    }

    (!clauses.is_empty()).then(|| clauses.join(AND))
}
