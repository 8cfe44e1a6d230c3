//! Fixed vocabulary used throughout the composer.
//!
//! Keeping every phrase in one place keeps the wording consistent between the death announcement
//! and the shorter notices that reuse parts of it.

/// Conjunction used between names, clauses and day names.
pub const AND: &str = " و ";

/// Appended to a relationship title when the group has more than one member.
pub const PLURAL_TITLE_SUFFIX: &str = "كل من";

pub const TRANSITION_MALE: &str = "انتقل إلى رحمة الله تعالى";
pub const TRANSITION_FEMALE: &str = "انتقلت إلى رحمة الله تعالى";

/// Introduces the age clause on the card.
pub const AGE_INTRO: &str = "عن عمر يناهز";

pub const BENEDICTION_MALE: &str = "رحمه الله";
pub const BENEDICTION_FEMALE: &str = "رحمها الله";
pub const BENEDICTION_PLURAL: &str = "رحمهم الله";

pub const BURIAL_DEFERRED: &str = "سيتم تحديد تفاصيل الدفن لاحقًا إن شاء الله";
pub const BURIAL_COMPLETED: &str = "تم الدفن";
pub const BURIAL_TIME_INTRO: &str = "وقت الدفن";

/// Suffix of the Sunni endowment cemetery names, dropped before display.
pub const ENDOWMENT_SUFFIX: &str = " للأوقاف السنية";

pub const CONDOLENCE_MEN: &str = "التعازي للرجال";
pub const CONDOLENCE_WOMEN: &str = "التعازي للنساء";
pub const CONDOLENCE_SCHEDULE_INTRO: &str = " و ذلك في ";
pub const CLOCK_INTRO: &str = "الساعة";
pub const AFTER_PRAYER: &str = "بعد صلاة";
pub const PRAYER: &str = "صلاة";

pub const RELATIVES_PREFIX: &str = "الأقارب: ";
pub const CONTACTS_PREFIX: &str = "أرقام التواصل: ";

pub const HIJRI_MONTHS: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

pub const GREGORIAN_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];
