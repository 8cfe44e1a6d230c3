//! Top/bottom placement of card sections.
//!
//! The card header has room for a fixed amount of text. Age and occupation lines each take a
//! slot, so the more of them are present the fewer sections fit under the name.

use crate::card::Section;

/// Sections split between the top region (under the name) and the bottom region of the card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardLayout {
    pub top: Vec<Section>,
    pub bottom: Vec<Section>,
}

/// Number of sections placed on top: 3 with neither age nor occupation, 2 with one, 1 with both.
pub fn top_section_count(has_age: bool, has_occupation: bool) -> usize {
    match (has_age, has_occupation) {
        (false, false) => 3,
        (true, true) => 1,
        _ => 2,
    }
}

pub fn place(sections: &[Section], has_age: bool, has_occupation: bool) -> CardLayout {
    let split = top_section_count(has_age, has_occupation).min(sections.len());
    let (top, bottom) = sections.split_at(split);
    CardLayout {
        top: top.to_vec(),
        bottom: bottom.to_vec(),
    }
}
