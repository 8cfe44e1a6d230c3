//! Inline emphasis markup for composed text.
//!
//! The rendering layer lays composed text into a card, emphasising names, relationship titles and
//! dates. [`Markup::Html`] produces `<span class="...">` fragments; [`Markup::Plain`] produces the
//! bare text for terminals and plain-text channels.
//!
//! User-supplied text is always passed through [`Markup::text`] or [`Markup::span`], so in HTML
//! mode it is escaped before it reaches the output.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Markup {
    #[default]
    Html,
    Plain,
}

/// What an emphasised fragment is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Name,
    RelationshipTitle,
    /// Dates, day names and locations.
    Detail,
}

impl Emphasis {
    fn css_class(self) -> &'static str {
        match self {
            Emphasis::Name => "memorial-name",
            Emphasis::RelationshipTitle => "memorial-relationship-title",
            Emphasis::Detail => "memorial-emphasis",
        }
    }
}

impl Markup {
    /// Parse `html` or `plain` (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "html" => Some(Markup::Html),
            "plain" | "text" => Some(Markup::Plain),
            _ => None,
        }
    }

    pub fn to_wire(self) -> &'static str {
        match self {
            Markup::Html => "html",
            Markup::Plain => "plain",
        }
    }

    /// Wrap `text` in an emphasis span (escaped), or return it unchanged in plain mode.
    pub fn span(self, emphasis: Emphasis, text: &str) -> String {
        match self {
            Markup::Html => format!(
                "<span class=\"{}\">{}</span>",
                emphasis.css_class(),
                escape_html(text)
            ),
            Markup::Plain => text.to_string(),
        }
    }

    /// User text outside any span.
    pub fn text(self, text: &str) -> String {
        match self {
            Markup::Html => escape_html(text),
            Markup::Plain => text.to_string(),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_span_escapes_user_text() {
        let out = Markup::Html.span(Emphasis::Name, "<b>علي</b> & \"x\"");
        assert_eq!(
            out,
            "<span class=\"memorial-name\">&lt;b&gt;علي&lt;/b&gt; &amp; &quot;x&quot;</span>"
        );
    }

    #[test]
    fn plain_span_is_bare_text() {
        assert_eq!(Markup::Plain.span(Emphasis::Detail, "الأحد"), "الأحد");
        assert_eq!(Markup::Plain.text("a<b"), "a<b");
    }

    #[test]
    fn parse_accepts_known_values() {
        assert_eq!(Markup::parse(" HTML "), Some(Markup::Html));
        assert_eq!(Markup::parse("plain"), Some(Markup::Plain));
        assert_eq!(Markup::parse("markdown"), None);
        assert_eq!(Markup::default(), Markup::Html);
    }
}
