//! Domain types for the shorter notices: blood donation, condolence thanks, prayer request and
//! the daily prayer-times card.

use crate::record::Gender;
use crate::{AnnouncementError, AnnouncementResult};
use chrono::{NaiveDate, NaiveTime};
use tawasul_types::{NonEmptyText, PersonalId, PhoneNumber};

/// ABO/Rh blood group requested from donors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BloodType {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodType {
    pub fn parse(input: &str) -> AnnouncementResult<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "A+" => Ok(BloodType::APositive),
            "A-" => Ok(BloodType::ANegative),
            "B+" => Ok(BloodType::BPositive),
            "B-" => Ok(BloodType::BNegative),
            "AB+" => Ok(BloodType::AbPositive),
            "AB-" => Ok(BloodType::AbNegative),
            "O+" => Ok(BloodType::OPositive),
            "O-" => Ok(BloodType::ONegative),
            other => Err(AnnouncementError::InvalidInput(format!(
                "unknown blood type: {other}"
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

/// Contact line on a blood-donation card ("description number").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonationContact {
    pub description: NonEmptyText,
    pub number: PhoneNumber,
}

/// A request for blood donors on behalf of a patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloodDonationData {
    pub patient_name: NonEmptyText,
    pub gender: Gender,
    pub personal_id: PersonalId,
    pub blood_types: Vec<BloodType>,
    pub location: NonEmptyText,
    pub date: NaiveDate,
    /// Donation windows as (from, to) clock times.
    pub time_ranges: Vec<(NaiveTime, NaiveTime)>,
    pub contacts: Vec<DonationContact>,
}

/// Family thanks for condolences received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CondolenceThanksData {
    pub family_name: NonEmptyText,
    pub deceased_name: NonEmptyText,
    pub gender: Gender,
}

/// Request for supplication for a sick person.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrayerRequestData {
    pub patient_name: NonEmptyText,
}

/// A row of the prayer-times card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    /// Start of the last third of the night.
    LastThird,
}

impl Prayer {
    /// Row order on the card.
    pub const CARD_ORDER: [Prayer; 7] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
        Prayer::LastThird,
    ];

    pub fn arabic_name(self) -> &'static str {
        match self {
            Prayer::Fajr => "الفجر",
            Prayer::Sunrise => "الشروق",
            Prayer::Dhuhr => "الظهر",
            Prayer::Asr => "العصر",
            Prayer::Maghrib => "المغرب",
            Prayer::Isha => "العشاء",
            Prayer::LastThird => "الثلث الأخير",
        }
    }
}

/// Prayer times for one day in Bahrain (Umm al-Qura method, Manama).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrayerTimesData {
    pub date: NaiveDate,
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
    pub last_third: NaiveTime,
}

impl PrayerTimesData {
    pub fn time_of(&self, prayer: Prayer) -> NaiveTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::LastThird => self.last_third,
        }
    }

    /// Rows in card order.
    pub fn rows(&self) -> impl Iterator<Item = (Prayer, NaiveTime)> + '_ {
        Prayer::CARD_ORDER
            .into_iter()
            .map(move |prayer| (prayer, self.time_of(prayer)))
    }
}

/// Start of the last third of the night running from `maghrib` to the next `fajr`, rounded to
/// the nearest minute.
pub fn last_third_of_night(maghrib: NaiveTime, fajr: NaiveTime) -> NaiveTime {
    let mut night = fajr.signed_duration_since(maghrib).num_minutes();
    if night < 0 {
        night += 24 * 60;
    }
    maghrib + chrono::Duration::minutes((2 * night + 1) / 3)
}
