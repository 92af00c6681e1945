//! Writer for the textual property-list notation used by `project.pbxproj`.
//!
//! Output is unindented: every assignment, list item and closing delimiter
//! sits on its own line.

use std::borrow::Cow;

/// Render a value as a bare word or a quoted string.
///
/// Bare words are non-empty and contain only ASCII alphanumerics, `_`, `.`
/// and `/`.
pub fn literal(value: &str) -> Cow<'_, str> {
    let bare = !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'/'));
    if bare {
        return Cow::Borrowed(value);
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if matches!(ch, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Append-only text builder for descriptor sections.
#[derive(Debug, Default)]
pub struct PlistWriter {
    out: String,
}

impl PlistWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw line (a newline is appended).
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// `key = value;`
    pub fn assign(&mut self, key: &str, value: impl AsRef<str>) -> &mut Self {
        let value = literal(value.as_ref());
        self.line(&format!("{key} = {value};"))
    }

    /// `key = (` followed by one `item,` line per item and `);`.
    pub fn list<I, S>(&mut self, key: &str, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.line(&format!("{key} = ("));
        for item in items {
            let item = literal(item.as_ref());
            self.line(&format!("{item},"));
        }
        self.line(");")
    }

    /// `key = {`, the body written by `body`, then `};`.
    pub fn dict(&mut self, key: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(&format!("{key} = {{"));
        body(self);
        self.line("};")
    }

    /// Single-line dictionary: `key = {a = 1; b = 2; };`.
    pub fn inline_dict(&mut self, key: &str, fields: &[(&str, &str)]) -> &mut Self {
        let mut text = format!("{key} = {{");
        for (field, value) in fields {
            text.push_str(&format!("{field} = {}; ", literal(value)));
        }
        text.push_str("};");
        self.line(&text)
    }

    /// `/* Begin <name> section */`, the body, `/* End <name> section */`.
    pub fn section(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(&format!("/* Begin {name} section */"));
        body(self);
        self.line(&format!("/* End {name} section */"))
    }

    pub fn finish(self) -> String {
        self.out
    }
}
