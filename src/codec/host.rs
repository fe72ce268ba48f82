//! Mapping of a tokenized host line into a [`Host`].

use crate::codec::token::unquote;
use crate::types::model::Host;
use tracing::debug;

/// Build a [`Host`] from the token list of one host line.
///
/// The first token is the identity; every following token is a `key=value`
/// pair. Known keys land in typed fields, everything else is preserved
/// verbatim in `raw_variables`. A token with no `=` is malformed and skipped.
pub fn host_from_tokens(
    tokens: Vec<String>,
    inline_comment: Option<String>,
    line_number: usize,
) -> Host {
    let mut iter = tokens.into_iter();
    let mut host = Host::new(iter.next().unwrap_or_default());
    host.line_number = line_number;
    host.inline_comment = inline_comment;

    for token in iter {
        match token.split_once('=') {
            Some((key, value)) if !key.is_empty() => apply_variable(&mut host, key, value),
            // No '=' or an empty key: malformed, never stored.
            _ => {
                debug!(line = line_number, token = %token, "skipping malformed host token");
            }
        }
    }

    host
}

/// Static name-to-field dispatch for host variables.
fn apply_variable(host: &mut Host, key: &str, value: &str) {
    match key {
        "ansible_host" => host.ansible_host = Some(value.to_string()),
        "ansible_connection" => host.ansible_connection = Some(value.to_string()),
        "ansible_port" => host.ansible_port = parse_port(value),
        "ansible_user" => host.ansible_user = Some(value.to_string()),
        "ansible_winrm_transport" => host.ansible_winrm_transport = Some(value.to_string()),
        "ansible_winrm_server_cert_validation" => {
            host.ansible_winrm_server_cert_validation = Some(value.to_string())
        }
        "ext_connection_type" => host.ext_connection_type = Some(value.to_string()),
        "ext_credential_id" => host.ext_credential_id = Some(value.to_string()),
        "ext_credential_strategy" => host.ext_credential_strategy = Some(value.to_string()),
        "ext_domain" => host.ext_domain = Some(value.to_string()),
        "ext_port" => host.ext_port = parse_port(value),
        "ext_display_name" => host.ext_display_name = Some(unquote(value).to_string()),
        "ext_identity_file" => host.ext_identity_file = Some(value.to_string()),
        "ext_proxy_jump" => host.ext_proxy_jump = Some(value.to_string()),
        "ext_tags" => host.ext_tags = Some(value.to_string()),
        "comment" => host.comment = Some(unquote(value).to_string()),
        _ => {
            host.raw_variables.insert(key.to_string(), value.to_string());
        }
    }
}

/// Unparsable or empty numeric values mean "unset", never zero or an error.
fn parse_port(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn host(line: &str) -> Host {
        let tokens = crate::codec::token::tokenize(line);
        host_from_tokens(tokens, None, 1)
    }

    #[test]
    fn test_name_only() {
        let h = host("onlyname");
        assert_eq!(h.name, "onlyname");
        assert_eq!(h.ansible_host, None);
        assert!(h.raw_variables.is_empty());
    }

    #[test]
    fn test_known_ansible_fields() {
        let h = host("web1 ansible_host=10.0.0.1 ansible_user=deploy ansible_connection=ssh");
        assert_eq!(h.ansible_host.as_deref(), Some("10.0.0.1"));
        assert_eq!(h.ansible_user.as_deref(), Some("deploy"));
        assert_eq!(h.ansible_connection.as_deref(), Some("ssh"));
        assert!(h.raw_variables.is_empty());
    }

    #[test]
    fn test_port_parsing_defaults_to_unset() {
        assert_eq!(host("h ansible_port=2222").ansible_port, Some(2222));
        assert_eq!(host("h ansible_port=abc").ansible_port, None);
        assert_eq!(host("h ansible_port=").ansible_port, None);
        assert_eq!(host("h ext_port=3389").ext_port, Some(3389));
        assert_eq!(host("h ext_port=99999").ext_port, None);
    }

    #[test]
    fn test_display_name_and_comment_are_unquoted() {
        let h = host(r#"h ext_display_name="Build Server" comment='legacy box'"#);
        assert_eq!(h.ext_display_name.as_deref(), Some("Build Server"));
        assert_eq!(h.comment.as_deref(), Some("legacy box"));
    }

    #[test]
    fn test_unknown_variables_keep_quotes_verbatim() {
        let h = host(r#"h var1='a b' var2="c d" plain=1"#);
        assert_eq!(h.raw_variables.get("var1").map(String::as_str), Some("'a b'"));
        assert_eq!(
            h.raw_variables.get("var2").map(String::as_str),
            Some("\"c d\"")
        );
        assert_eq!(h.raw_variables.get("plain").map(String::as_str), Some("1"));
        // Insertion order is preserved.
        let keys: Vec<_> = h.raw_variables.keys().cloned().collect();
        assert_eq!(keys, vec!["var1", "var2", "plain"]);
    }

    #[test]
    fn test_malformed_token_is_skipped() {
        let h = host("h ansible_host=10.0.0.1 stray");
        assert_eq!(h.ansible_host.as_deref(), Some("10.0.0.1"));
        assert!(h.raw_variables.is_empty());
    }

    #[test]
    fn test_empty_key_token_is_skipped() {
        let h = host("h =value ansible_user=ops");
        assert_eq!(h.ansible_user.as_deref(), Some("ops"));
        assert!(!h.raw_variables.contains_key(""));
        assert!(h.raw_variables.is_empty());
    }

    #[test]
    fn test_value_with_equals_splits_on_first() {
        let h = host("h key=a=b");
        assert_eq!(h.raw_variables.get("key").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_line_number_and_inline_comment() {
        let h = host_from_tokens(
            vec!["web1".to_string(), "x=1".to_string()],
            Some("# note".to_string()),
            42,
        );
        assert_eq!(h.line_number, 42);
        assert_eq!(h.inline_comment.as_deref(), Some("# note"));
    }
}
