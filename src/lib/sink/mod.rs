//! The per-render metadata store that a page serializes into `<meta>` elements.

use itertools::Itertools;

use crate::utils::escape_attr;

/// Attribute a metadata key is published under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Namespace {
    /// `<meta property="...">`, used by Open Graph.
    Property,
    /// `<meta name="...">`
    Name,
}

impl Namespace {
    pub fn attribute(self) -> &'static str {
        match self {
            Namespace::Property => "property",
            Namespace::Name => "name",
        }
    }
}

/// Key/value metadata owned by the host for the duration of one page render.
pub trait MetadataSink {
    /// Current value for `key`, or `""` when it was never set.
    fn get(&self, key: &str, namespace: Namespace) -> &str;

    fn set(&mut self, key: &str, value: &str, namespace: Namespace);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaEntry {
    pub namespace: Namespace,
    pub key: String,
    pub value: String,
}

/// In-memory sink keeping entries in first-insertion order.
#[derive(Clone, Debug, Default)]
pub struct MetaStore {
    entries: Vec<MetaEntry>,
}

impl MetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str, namespace: Namespace) -> bool {
        self.position(key, namespace).is_some()
    }

    fn position(&self, key: &str, namespace: Namespace) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.namespace == namespace && e.key == key)
    }

    /// Render every non-empty entry as a `<meta>` element, one per line.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .filter(|e| !e.value.is_empty())
            .map(|e| {
                format!(
                    r#"<meta {}="{}" content="{}">"#,
                    e.namespace.attribute(),
                    escape_attr(&e.key),
                    escape_attr(&e.value)
                )
            })
            .join("\n")
    }
}

impl MetadataSink for MetaStore {
    fn get(&self, key: &str, namespace: Namespace) -> &str {
        self.position(key, namespace)
            .map(|idx| self.entries[idx].value.as_str())
            .unwrap_or_default()
    }

    fn set(&mut self, key: &str, value: &str, namespace: Namespace) {
        match self.position(key, namespace) {
            Some(idx) => self.entries[idx].value = value.to_string(),
            None => self.entries.push(MetaEntry {
                namespace,
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }
}
