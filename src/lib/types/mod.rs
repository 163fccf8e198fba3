//! Shared data types for metadata assembly.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

use crate::utils::strip_tags;

/// Text with every markup tag removed. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlainText(String);

impl PlainText {
    pub fn sanitize(raw: &str) -> Self {
        Self(strip_tags(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlainText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absolute URL of the shared preview image. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Qualify a rendered image path against the site root.
    ///
    /// Anything from the first `#` on is discarded, then leading `/`.
    /// Paths that are already absolute `http(s)` URLs (any case) are kept as
    /// they are. A blank root cannot qualify a relative path, so it yields
    /// `None`.
    pub fn resolve(rendered: &str, root: &str) -> Option<Self> {
        let path = rendered.split('#').next().unwrap_or_default().trim();

        if has_http_scheme(path) {
            return Some(Self(path.to_string()));
        }

        let path = path.trim_start_matches('/');
        let root = root.trim().trim_end_matches('/');
        if path.is_empty() || root.is_empty() {
            return None;
        }

        Some(Self(format!("{root}/{path}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn has_http_scheme(path: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        path.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests;
