//! Quote-aware tokenization for host and variable lines.
//!
//! Single- and double-quoted runs are atomic: an unquoted space separates
//! tokens, a space inside an open quote does not. The two quote styles are
//! independent, so `"it's"` stays one double-quoted run and `'say "hi"'` one
//! single-quoted run. Quote characters and backslashes are kept in the token
//! text; nothing here interprets values.

/// Locate the byte index of an inline comment opener, if any.
///
/// A `#` opens a comment only when it is outside both quote styles and the
/// character immediately before it is a space. That keeps
/// `comment="Test #1 Server"` intact while still catching
/// `host1 ansible_host=10.0.0.1 # note`.
pub fn find_inline_comment(line: &str) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;
    let mut prev: Option<char> = None;

    for (idx, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            prev = Some(ch);
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '#' if !in_single && !in_double && prev == Some(' ') => return Some(idx),
            _ => {}
        }
        prev = Some(ch);
    }

    None
}

/// Split a line into whitespace-separated tokens, quoted runs atomic.
///
/// Quote characters are retained in the token text; stripping happens later
/// and only for specific known fields.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;

    for ch in line.chars() {
        if escaped {
            buf.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => {
                escaped = true;
                buf.push(ch);
            }
            '\'' if !in_double => {
                in_single = !in_single;
                buf.push(ch);
            }
            '"' if !in_single => {
                in_double = !in_double;
                buf.push(ch);
            }
            ' ' | '\t' if !in_single && !in_double => {
                if !buf.is_empty() {
                    tokens.push(std::mem::take(&mut buf));
                }
            }
            _ => buf.push(ch),
        }
    }

    if !buf.is_empty() {
        tokens.push(buf);
    }

    tokens
}

/// Strip one matching pair of surrounding quote characters, if present.
pub fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if first == bytes[bytes.len() - 1] && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
