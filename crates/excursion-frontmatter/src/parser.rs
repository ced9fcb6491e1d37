//! Frontmatter block extraction and line scanning.

use crate::{FieldMap, FieldValue};

/// Extract the frontmatter block from a document.
///
/// The block is the text between an opening `---` marker line, which must be
/// the very first line of the document, and the next line starting with
/// `---`. Both markers are excluded.
///
/// # Example
///
/// ```rust
/// use excursion_frontmatter::extract_block;
///
/// assert_eq!(extract_block("---\ntitle: x\n---\nbody"), Some("title: x"));
/// assert_eq!(extract_block("no frontmatter"), None);
/// ```
pub fn extract_block(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("---\n")?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

/// Parse the frontmatter block of a document into a field map.
///
/// Scanning is best-effort: a document without a frontmatter block yields an
/// empty map, and malformed lines inside the block are skipped. This
/// function never fails.
///
/// # Example
///
/// ```rust
/// use excursion_frontmatter::parse;
///
/// let fields = parse("---\nvenue: NeurIPS 2017\n---\n");
/// assert_eq!(fields.scalar("venue"), Some("NeurIPS 2017"));
/// ```
pub fn parse(text: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    let Some(block) = extract_block(text) else {
        return fields;
    };

    let mut state = State::Idle;
    for line in block.split('\n') {
        state = step(state, line, &mut fields);
    }
    commit_pending(state, &mut fields);

    fields
}

/// Scanner state: at most one list may be open at a time.
enum State {
    /// Not inside a list.
    Idle,
    /// Accumulating items after a `key: [` opener.
    BracketList { key: String, items: Vec<String> },
    /// Accumulating items after a bare `key:` opener.
    BlockList { key: String, items: Vec<String> },
}

/// The shape of a single frontmatter line.
///
/// Classification is independent of scanner state; the rules are tried in
/// declaration order and the first match wins.
enum LineClass {
    /// `key: ["a", "b"]`
    InlineList { key: String, items: Vec<String> },
    /// `key: [`
    BracketOpen { key: String },
    /// A line that is exactly `]`.
    BracketClose,
    /// `"item"` with an optional trailing comma.
    QuotedItem { value: String },
    /// `key:` with nothing after the colon.
    BlockOpen { key: String },
    /// An indented `- item` line.
    DashItem { value: String },
    /// `key: "value"` with the closing quote ending the line.
    QuotedScalar { key: String, value: String },
    /// `key: value`
    BareScalar { key: String, value: String },
    /// Anything else; ignored.
    Other,
}

fn classify(line: &str) -> LineClass {
    if let Some((key, rest)) = split_key(line) {
        if let Some(items) = inline_list(rest) {
            return LineClass::InlineList {
                key: key.to_string(),
                items,
            };
        }
        if rest.trim_start() == "[" {
            return LineClass::BracketOpen {
                key: key.to_string(),
            };
        }
        if rest.chars().all(char::is_whitespace) {
            return LineClass::BlockOpen {
                key: key.to_string(),
            };
        }
        if let Some(value) = quoted_scalar(rest) {
            return LineClass::QuotedScalar {
                key: key.to_string(),
                value,
            };
        }
        return LineClass::BareScalar {
            key: key.to_string(),
            value: rest.trim_start().to_string(),
        };
    }

    if line == "]" {
        return LineClass::BracketClose;
    }
    if let Some(value) = quoted_item(line) {
        return LineClass::QuotedItem { value };
    }
    if let Some(value) = dash_item(line) {
        return LineClass::DashItem { value };
    }
    LineClass::Other
}

/// Advance the scanner by one line.
fn step(state: State, line: &str, fields: &mut FieldMap) -> State {
    match classify(line) {
        LineClass::InlineList { key, items } => {
            // An open list is discarded, not committed
            fields.insert(key, FieldValue::List(items));
            State::Idle
        }
        LineClass::BracketOpen { key } => State::BracketList {
            key,
            items: Vec::new(),
        },
        LineClass::BlockOpen { key } => State::BlockList {
            key,
            items: Vec::new(),
        },
        LineClass::BracketClose => match state {
            // Commits even an empty list, in either list style
            State::BracketList { key, items } | State::BlockList { key, items } => {
                fields.insert(key, FieldValue::List(items));
                State::Idle
            }
            State::Idle => State::Idle,
        },
        LineClass::QuotedItem { value } | LineClass::DashItem { value } => push_item(state, value),
        LineClass::QuotedScalar { key, value } | LineClass::BareScalar { key, value } => {
            commit_pending(state, fields);
            fields.insert(key, FieldValue::Scalar(value));
            State::Idle
        }
        LineClass::Other => state,
    }
}

/// Append an item to the open list; outside a list the item is dropped.
fn push_item(state: State, value: String) -> State {
    match state {
        State::BracketList { key, mut items } => {
            items.push(value);
            State::BracketList { key, items }
        }
        State::BlockList { key, mut items } => {
            items.push(value);
            State::BlockList { key, items }
        }
        State::Idle => State::Idle,
    }
}

/// Commit an open list if it has accumulated at least one item.
fn commit_pending(state: State, fields: &mut FieldMap) {
    match state {
        State::BracketList { key, items } | State::BlockList { key, items } => {
            if !items.is_empty() {
                fields.insert(key, FieldValue::List(items));
            }
        }
        State::Idle => {}
    }
}

/// Split `key: rest` where the key is ASCII word characters starting at
/// column zero, immediately followed by a colon.
fn split_key(line: &str) -> Option<(&str, &str)> {
    let end = line.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))?;
    if end == 0 {
        return None;
    }
    let rest = line[end..].strip_prefix(':')?;
    Some((&line[..end], rest))
}

/// Match the remainder of an inline list line: `["a", "b"]`.
///
/// The opening bracket must be followed directly by a quote and the closing
/// bracket must end the line. The body between the outermost quotes is split
/// on the exact separator `", "`; items are trimmed and empty items dropped.
fn inline_list(rest: &str) -> Option<Vec<String>> {
    let body = rest.trim_start().strip_prefix("[\"")?;
    let body = body.strip_suffix(']')?;
    let body = body.trim_end().strip_suffix('"')?;
    Some(
        body.split("\", \"")
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

/// Match the remainder of a quoted scalar line: `"value"`.
///
/// The closing quote must be the last character of the line; the value is
/// everything between the first and last quote.
fn quoted_scalar(rest: &str) -> Option<String> {
    let value = rest.trim_start().strip_prefix('"')?;
    let value = value.strip_suffix('"')?;
    Some(value.to_string())
}

/// Match a quoted list item line: `"item"` with an optional trailing comma.
fn quoted_item(line: &str) -> Option<String> {
    let inner = line.trim_start().strip_prefix('"')?;
    let inner = inner.trim_end();
    let inner = inner.strip_suffix(',').unwrap_or(inner).trim_end();
    let inner = inner.strip_suffix('"')?;
    Some(inner.to_string())
}

/// Match a dash list item line: `- item`, indented.
///
/// Requires at least one leading whitespace character and whitespace after
/// the dash. One leading and one trailing quote are stripped independently,
/// each only when at least one other character remains.
fn dash_item(line: &str) -> Option<String> {
    let stripped = line.trim_start();
    if stripped.len() == line.len() {
        return None;
    }
    let after_dash = stripped.strip_prefix('-')?;
    let value = after_dash.trim_start();
    if value.len() == after_dash.len() || value.is_empty() {
        return None;
    }
    let mut value = value.trim_end();
    if value.len() > 1 {
        value = value.strip_prefix('"').unwrap_or(value);
    }
    if value.len() > 1 {
        value = value.strip_suffix('"').unwrap_or(value);
    }
    Some(value.to_string())
}
