//! Composer runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the composer. Nothing
//! in this crate reads environment variables while composing.

use crate::markup::Markup;
use crate::{ComposeError, ComposeResult};

/// Composer configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerConfig {
    markup: Markup,
}

impl ComposerConfig {
    pub fn new(markup: Markup) -> Self {
        Self { markup }
    }

    /// Markup used when a caller does not ask for a specific one.
    pub fn markup(&self) -> Markup {
        self.markup
    }

    /// Copy of this configuration with a different markup.
    pub fn with_markup(&self, markup: Markup) -> Self {
        Self { markup }
    }
}

/// Parse the markup mode from an optional string value (typically `TAWASUL_MARKUP`).
///
/// If `value` is `None` or empty/whitespace, returns [`Markup::Html`].
pub fn markup_from_env_value(value: Option<String>) -> ComposeResult<Markup> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(Markup::default()),
        Some(v) => Markup::parse(&v).ok_or_else(|| {
            ComposeError::InvalidConfig(format!(
                "TAWASUL_MARKUP must be 'html' or 'plain', got '{v}'"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_defaults_to_html_when_unset() {
        assert_eq!(markup_from_env_value(None).unwrap(), Markup::Html);
        assert_eq!(markup_from_env_value(Some("  ".into())).unwrap(), Markup::Html);
    }

    #[test]
    fn markup_parses_plain() {
        assert_eq!(
            markup_from_env_value(Some("Plain".into())).unwrap(),
            Markup::Plain
        );
    }

    #[test]
    fn markup_rejects_unknown_value() {
        let err = markup_from_env_value(Some("rtf".into())).expect_err("should reject");
        assert!(matches!(err, ComposeError::InvalidConfig(msg) if msg.contains("rtf")));
    }
}
