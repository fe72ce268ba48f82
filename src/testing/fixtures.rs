//! Canned inventory texts for unit tests.

/// A small but representative inventory: header comments, ungrouped host,
/// hosts with typed and raw variables, children and vars sections.
pub const SAMPLE_INVENTORY: &str = r#"# Managed hosts
# Edit with care

bastion ansible_host=203.0.113.10 ansible_user=ops

[web]
w1 ansible_host=10.0.0.1 ansible_port=2222 custom='a b' # primary
w2 ansible_host=10.0.0.2 ext_display_name="Web Two"

[web:vars]
http_port=80
proxy_timeout=5s

[db]
d1 ansible_connection=winrm ansible_winrm_transport=ntlm

[all:children]
web
db
"#;

/// Inventory exercising quoting and comment edge cases.
pub const QUOTING_INVENTORY: &str = r#"h1 comment="Test #1 Server" var1='a b' var2="c d"
h2 ansible_host=10.0.0.1 # trailing note
"#;
