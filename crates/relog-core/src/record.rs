//! Parsed records and template rendering.
//!
//! A [`Record`] is one line's fields as an insertion-ordered `key → Value`
//! map. Insertion order matters: it decides the order in which fields not
//! referenced by the template are appended after the rendered line.
//!
//! Templates contain `{name}` / `{name:spec}` placeholders between arbitrary
//! literal text. The spec part is interpreted by [`FieldFormat`]; a field
//! referenced but absent from the record renders as the empty string.

use crate::error::FormatError;
use crate::format::FieldFormat;
use crate::value::Value;
use indexmap::IndexMap;

/// One parsed line: an ordered mapping of field name to [`Value`].
///
/// Keys are unique; assigning an existing key overwrites its value (last
/// assignment on a line wins) without changing its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Record {
        Record::default()
    }

    /// Insert or overwrite a field.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render this record through a template.
    ///
    /// Each `{name}` / `{name:spec}` placeholder is replaced by the named
    /// field's text (empty if absent) run through its format specifier.
    /// Braces that do not form a placeholder pass through literally.
    ///
    /// With `extra_indent` set, every field the template does not reference
    /// is appended after the rendered line in insertion order, each as a new
    /// line padded to the indent width: `"\n<indent spaces><key>: <value>"`.
    /// With `None`, unreferenced fields are dropped.
    ///
    /// # Example
    /// ```
    /// use relog_core::parse;
    ///
    /// let records = parse("level=info msg=\"hello world\"").unwrap();
    /// let line = records[0].render("[{level:U1}] {msg}", None).unwrap();
    /// assert_eq!(line, "[I] hello world");
    /// ```
    pub fn render(
        &self,
        template: &str,
        extra_indent: Option<usize>,
    ) -> Result<String, FormatError> {
        let mut out = String::new();
        let mut referenced: Vec<&str> = Vec::new();

        let mut rest = template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let placeholder = after
                .find('}')
                .and_then(|close| split_placeholder(&after[..close]).map(|p| (close, p)));
            match placeholder {
                Some((close, (name, spec))) => {
                    if !referenced.contains(&name) {
                        referenced.push(name);
                    }
                    let text = match self.get(name) {
                        Some(value) => value.to_string(),
                        None => String::new(),
                    };
                    match spec {
                        Some(spec) => out.push_str(&FieldFormat::parse(spec)?.apply(&text)),
                        None => out.push_str(&text),
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    // Not a placeholder: emit the brace and rescan after it.
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);

        if let Some(indent) = extra_indent {
            for (key, value) in self.iter() {
                if !referenced.contains(&key) {
                    out.push('\n');
                    out.push_str(&format!("{:indent$}{}: {}", "", key, value));
                }
            }
        }

        Ok(out)
    }

    /// Literal `{key}` → value-text replacement for every field, with no
    /// format specifiers and no extra-field appendix. A deliberately simpler
    /// path than [`Record::render`] for trivial templates.
    pub fn render_simple(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (key, value) in self.iter() {
            out = out.replace(&format!("{{{key}}}"), &value.to_string());
        }
        out
    }
}

/// Split placeholder innards into `(name, spec)`. Returns `None` when the
/// content is not a valid placeholder (empty or non-identifier name), in
/// which case the braces are literal text. An empty spec (`{name:}`) behaves
/// like no spec at all.
fn split_placeholder(inner: &str) -> Option<(&str, Option<&str>)> {
    let (name, spec) = match inner.split_once(':') {
        Some((name, "")) => (name, None),
        Some((name, spec)) => (name, Some(spec)),
        None => (inner, None),
    };
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name, spec))
}
