//! Validated text primitives shared by the Tawasul crates.
//!
//! Form fields arrive as free text. The types here are the narrow set of values whose shape is
//! checked once at the boundary and then trusted everywhere else.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input was not made of exactly the expected number of ASCII digits
    #[error("expected exactly {expected} digits, got {input:?}")]
    Digits { expected: usize, input: String },
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction, so names typed
/// with stray spaces in the form compare and render identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the text.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A fixed-width run of ASCII digits, such as a local phone number or a personal id.
///
/// `N` is the required number of digits. Surrounding whitespace is trimmed; anything else
/// (spaces inside, `+` prefixes, Arabic-Indic digits) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString<const N: usize>(String);

/// Bahraini mobile/landline number (8 digits).
pub type PhoneNumber = DigitString<8>;

/// Bahraini personal (CPR) number (9 digits).
pub type PersonalId = DigitString<9>;

impl<const N: usize> DigitString<N> {
    /// # Errors
    ///
    /// Returns `TextError::Empty` for blank input and `TextError::Digits` for anything that is
    /// not exactly `N` ASCII digits.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if trimmed.len() != N || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TextError::Digits {
                expected: N,
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> std::fmt::Display for DigitString<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const N: usize> serde::Serialize for DigitString<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de, const N: usize> serde::Deserialize<'de> for DigitString<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DigitString::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  محمد  ").unwrap();
        assert_eq!(text.as_str(), "محمد");
        assert_eq!(text.char_len(), 4);
    }

    #[test]
    fn non_empty_text_rejects_whitespace() {
        assert_eq!(NonEmptyText::new("   "), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
    }

    #[test]
    fn non_empty_text_deserialize_rejects_blank() {
        let err = serde_json::from_str::<NonEmptyText>("\"  \"").unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn phone_number_requires_eight_digits() {
        assert!(PhoneNumber::new("33445566").is_ok());
        assert!(matches!(
            PhoneNumber::new("3344556"),
            Err(TextError::Digits { expected: 8, .. })
        ));
        assert!(PhoneNumber::new("3344 5566").is_err());
        assert!(PhoneNumber::new("+97333445566").is_err());
    }

    #[test]
    fn personal_id_requires_nine_digits() {
        let id = PersonalId::new(" 850101234 ").unwrap();
        assert_eq!(id.to_string(), "850101234");
        assert!(PersonalId::new("85010123a").is_err());
    }
}
