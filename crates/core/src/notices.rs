//! Composers for the shorter notices.
//!
//! Each produces a [`NoticeText`]: an ordered list of lines with fixed wording around the
//! submitted names, dates and numbers.

use crate::calendar::{gregorian_phrase, hijri_phrase, weekday_name};
use crate::clock::{meridiem_phrase, short_meridiem_phrase};
use crate::constants::AND;
use crate::error::ComposeResult;
use crate::markup::{Emphasis, Markup};
use announcement::{
    BloodDonationData, CondolenceThanksData, Gender, PrayerRequestData, PrayerTimesData,
};

const DONATION_CONDITIONS_HEADING: &str = "شروط و متطلبات التبرع:";
const DONATION_CONDITIONS_BEFORE_TYPES: [&str; 3] = [
    "الرجاء احضار البطاقة الذكية عند الحضور",
    "أن يكون عمر المتبرع من 18-65 سنة",
    "الحاجة الى 15 متبرعين (رجال فقط) بصحة جيدة",
];
const DONATION_CONDITIONS_AFTER_TYPES: [&str; 2] = [
    "لم يخضعوا للحجامة خلال 3 شهور الماضية",
    "الابتعاد عن الماكولات المشبعة بالدهون",
];
const DONATION_NOTE: &str = "ملاحظة هامة يرجى من الاخوة المتبرعين لبس الملابس الفضفاضة الواسعة في منطقة الكتف للإخوة العاملين لأخذ العينة الدم بسهولة.";

const THANKS_HEADING: &str = "شكر على التعزية";
const THANKS_GRATITUDE: &str = "سيكون تقديم واجب العزاء بالحضور أو الإتصال أو عبر قنوات التواصل الاجتماعي من مملكة البحرين وخارجها ، ونلتمس العذر لمن حالت دونه الظروف. سائلين المولى عز وجل أن يتغمد فقيدنا بواسع رحمته ورضوانه، وأن يسكنه فسيح جناته، وأن يكتب للجميع الأجر والثواب، وأن لا يريهم مكروها في عزيز لديهم. وجزاكم الله خيرا";

const SUPPLICATION_OPENING: &str = "اللَّهُمَّ رَبَّ النَّاسِ أَذْهِبِ البَأْسَ ، اشْفِ عبدك";
const SUPPLICATION_CLOSING: &str =
    "وَأَنتَ الشَّافِي، لاَ شِفَاءَ إِلَّا شِفَاؤُكَ، شِفَاءً لاَ يُغَادِرُ سَقَمًا";

/// Composed text of a notice, one entry per line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeText {
    pub lines: Vec<String>,
}

impl NoticeText {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn compose_blood_donation(markup: Markup, data: &BloodDonationData) -> ComposeResult<NoticeText> {
    let prefix = match data.gender {
        Gender::Male => "لأخيكم",
        Gender::Female => "لأختكم",
    };

    let mut lines = vec![format!(
        "ندعوكم للتبرع {prefix} {} في {} يحمل البطاقة السكانية {}",
        markup.span(Emphasis::Name, data.patient_name.as_str()),
        markup.span(Emphasis::Detail, data.location.as_str()),
        markup.span(Emphasis::Detail, data.personal_id.as_str()),
    )];

    let mut when = format!(
        "و ذلك يوم {} بتاريخ {} الموافق {}مـ",
        markup.span(Emphasis::Detail, weekday_name(data.date)),
        markup.span(Emphasis::Detail, &hijri_phrase(data.date)?),
        markup.span(Emphasis::Detail, &data.date.format("%Y-%m-%d").to_string()),
    );
    let ranges: Vec<String> = data
        .time_ranges
        .iter()
        .map(|(from, to)| format!("من {} إلى {}", meridiem_phrase(*from), meridiem_phrase(*to)))
        .collect();
    if !ranges.is_empty() {
        when.push_str(" في الفترة ");
        when.push_str(&ranges.join(AND));
    }
    lines.push(when);

    let blood_types: Vec<&str> = data.blood_types.iter().map(|b| b.label()).collect();
    let types_condition = format!(
        "الحاجة الى فصيلة دم ({})",
        markup.text(&blood_types.join(" / "))
    );
    let conditions = DONATION_CONDITIONS_BEFORE_TYPES
        .iter()
        .map(|c| c.to_string())
        .chain(std::iter::once(types_condition))
        .chain(DONATION_CONDITIONS_AFTER_TYPES.iter().map(|c| c.to_string()));

    lines.push(DONATION_CONDITIONS_HEADING.to_string());
    lines.extend(conditions.enumerate().map(|(i, c)| format!("{}. {c}", i + 1)));
    lines.push(DONATION_NOTE.to_string());

    let contacts: Vec<String> = data
        .contacts
        .iter()
        .map(|c| format!("{} {}", markup.text(c.description.as_str()), c.number))
        .collect();
    lines.push(format!("للتواصل: {}", contacts.join(AND)));

    Ok(NoticeText { lines })
}

pub fn compose_condolence_thanks(markup: Markup, data: &CondolenceThanksData) -> NoticeText {
    let departed = match data.gender {
        Gender::Male => "لفقيدنا المرحوم",
        Gender::Female => "لفقيدتنا المرحومة",
    };

    NoticeText {
        lines: vec![
            THANKS_HEADING.to_string(),
            format!(
                "تتقدم عائلة {}",
                markup.span(Emphasis::Name, data.family_name.as_str())
            ),
            format!(
                "بجزيل الشكر والامتنان والتقدير والعرفان إلى كل من حضر الصلاة والدفن {departed} بإذن الله"
            ),
            markup.span(Emphasis::Name, data.deceased_name.as_str()),
            THANKS_GRATITUDE.to_string(),
        ],
    }
}

pub fn compose_prayer_request(markup: Markup, data: &PrayerRequestData) -> NoticeText {
    NoticeText {
        lines: vec![
            SUPPLICATION_OPENING.to_string(),
            markup.span(Emphasis::Name, data.patient_name.as_str()),
            SUPPLICATION_CLOSING.to_string(),
        ],
    }
}

/// Hijri date, then weekday and Gregorian date, then one "{prayer} {h:mm ص|م}" row per prayer.
pub fn compose_prayer_times(markup: Markup, data: &PrayerTimesData) -> ComposeResult<NoticeText> {
    let mut lines = vec![
        markup.span(Emphasis::Detail, &hijri_phrase(data.date)?),
        markup.span(
            Emphasis::Detail,
            &format!("{}، {}", weekday_name(data.date), gregorian_phrase(data.date)),
        ),
    ];
    lines.extend(data.rows().map(|(prayer, time)| {
        format!(
            "{} {}",
            prayer.arabic_name(),
            markup.span(Emphasis::Detail, &short_meridiem_phrase(time))
        )
    }));

    Ok(NoticeText { lines })
}
