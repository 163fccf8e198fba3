/// HTML-escape text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// HTML-escape attribute values (same rules as text for this codebase).
pub fn escape_attr(s: &str) -> String {
    escape_text(s)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Text,
    Tag,
    Quoted(char),
    Comment,
}

/// Remove markup tags and comments, keeping the text between them.
///
/// A `<` only opens a tag when something other than whitespace follows it.
/// Quoted attribute values may contain `>`. An unterminated tag or comment
/// swallows the remainder of the input.
pub fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut state = Scan::Text;
    let mut chars = raw.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match state {
            Scan::Text => {
                if ch != '<' {
                    out.push(ch);
                    continue;
                }
                match chars.peek() {
                    Some((_, next)) if !next.is_whitespace() => {
                        state = if raw[idx..].starts_with("<!--") {
                            Scan::Comment
                        } else {
                            Scan::Tag
                        };
                    }
                    _ => out.push(ch),
                }
            }
            Scan::Tag => match ch {
                '"' | '\'' => state = Scan::Quoted(ch),
                '>' => state = Scan::Text,
                _ => {}
            },
            Scan::Quoted(quote) => {
                if ch == quote {
                    state = Scan::Tag;
                }
            }
            Scan::Comment => {
                if ch == '>' && raw[..idx].ends_with("--") {
                    state = Scan::Text;
                }
            }
        }
    }

    out
}
