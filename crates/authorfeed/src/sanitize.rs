use std::borrow::Cow;

/// Applied to every piece of remote content before it is interpolated into markup.
pub trait Sanitizer: Send + Sync {
    fn sanitize<'a>(&self, raw: &'a str) -> Cow<'a, str>;
}

/// Passes content through untouched. This is the default: author names,
/// handles and post text are trusted as served by the AppView.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Sanitizer for Identity {
    fn sanitize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(raw)
    }
}

/// Escapes the characters that are significant in HTML text and attribute values.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlEscape;

impl Sanitizer for HtmlEscape {
    fn sanitize<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if !raw.contains(['&', '<', '>', '"', '\'']) {
            return Cow::Borrowed(raw);
        }

        let mut escaped = String::with_capacity(raw.len() + 16);
        for c in raw.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    }
}
