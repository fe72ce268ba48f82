//! Per-line classification of inventory text.
//!
//! Classification uses only the line's own text. A bare word is ambiguous on
//! its own: it is a child-group reference inside a `[group:children]` section
//! and a host with no variables everywhere else. The classifier tags it
//! [`Line::Bare`] and leaves the decision to the section state machine.

use crate::codec::token::{find_inline_comment, tokenize};
use once_cell::sync::Lazy;
use regex::Regex;

/// How lines under an open `[group...]` header are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Bare `[name]` header.
    Hosts,
    /// `[name:children]`
    Children,
    /// `[name:vars]`
    Vars,
}

/// Syntactic role of one physical line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Empty,
    /// Whole trimmed line, `#` included.
    Comment(String),
    Group {
        name: String,
        kind: SectionKind,
    },
    /// A `key=value` assignment as found in `:vars` sections.
    Variable {
        key: String,
        value: String,
    },
    /// Single bare token: child reference or host without variables.
    Bare {
        name: String,
        inline_comment: Option<String>,
    },
    Host {
        tokens: Vec<String>,
        inline_comment: Option<String>,
    },
}

static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]:]+)(?::(children|vars))?\]$").unwrap());

static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*=").unwrap());

/// Classify one physical line (no trailing newline).
pub fn classify(line: &str) -> Line {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Line::Empty;
    }

    if trimmed.starts_with('#') {
        return Line::Comment(trimmed.to_string());
    }

    if let Some(caps) = GROUP_RE.captures(trimmed) {
        let kind = match caps.get(2).map(|m| m.as_str()) {
            Some("children") => SectionKind::Children,
            Some("vars") => SectionKind::Vars,
            _ => SectionKind::Hosts,
        };
        return Line::Group {
            name: caps[1].to_string(),
            kind,
        };
    }

    let (content, inline_comment) = match find_inline_comment(trimmed) {
        Some(idx) => (
            trimmed[..idx].trim_end(),
            Some(trimmed[idx..].to_string()),
        ),
        None => (trimmed, None),
    };

    if VARIABLE_RE.is_match(content) {
        // The match guarantees a '=' with no space before it.
        if let Some((key, value)) = content.split_once('=') {
            return Line::Variable {
                key: key.to_string(),
                value: value.to_string(),
            };
        }
    }

    if !content.contains('=') && !content.contains(char::is_whitespace) {
        return Line::Bare {
            name: content.to_string(),
            inline_comment,
        };
    }

    Line::Host {
        tokens: tokenize(content),
        inline_comment,
    }
}
