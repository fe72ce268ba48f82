//! Deterministic model-to-text pass, the inverse of parsing.
//!
//! The output is not a pretty-printer: it reproduces the parsed meaning, not
//! the original byte layout. Retained raw variables are emitted exactly as
//! stored, quotes and all.

use crate::types::model::{Group, Host, Inventory};

/// Serialize an inventory to text with `\n` line endings.
///
/// The model need not come from [`parse`](crate::codec::parse::parse);
/// programmatically built inventories serialize the same way.
pub fn serialize(inventory: &Inventory) -> String {
    let mut out = String::new();

    write_comment_block(&mut out, &inventory.header_comments);
    write_comment_block(&mut out, &inventory.ungrouped_comments);

    if !inventory.ungrouped_hosts.is_empty() {
        for host in &inventory.ungrouped_hosts {
            out.push_str(&host_line(host));
            out.push('\n');
        }
        out.push('\n');
    }

    for group in &inventory.groups {
        write_group(&mut out, group);
    }

    // Collapse the trailing blank line of the last block.
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn write_comment_block(out: &mut String, comments: &[String]) {
    if comments.is_empty() {
        return;
    }
    for comment in comments {
        out.push_str(comment);
        out.push('\n');
    }
    out.push('\n');
}

fn write_group(out: &mut String, group: &Group) {
    for comment in &group.comments {
        out.push_str(comment);
        out.push('\n');
    }

    if !group.hosts.is_empty() {
        out.push_str(&format!("[{}]\n", group.name));
        for host in &group.hosts {
            out.push_str(&host_line(host));
            out.push('\n');
        }
        out.push('\n');
    } else if group.is_empty() {
        // A header with no body still names the group; dropping it would
        // lose the group on the next parse.
        out.push_str(&format!("[{}]\n\n", group.name));
    }

    if !group.children.is_empty() {
        out.push_str(&format!("[{}:children]\n", group.name));
        for child in &group.children {
            out.push_str(child);
            out.push('\n');
        }
        out.push('\n');
    }

    if !group.vars.is_empty() {
        out.push_str(&format!("[{}:vars]\n", group.name));
        for (key, value) in &group.vars {
            out.push_str(&format!("{key}={value}\n"));
        }
        out.push('\n');
    }
}

/// Render one host entry: identity, typed fields in fixed order (Ansible
/// fields first, then `ext_` fields), raw variables in stored order, inline
/// comment last.
fn host_line(host: &Host) -> String {
    let mut parts: Vec<String> = vec![host.name.clone()];

    push_field(&mut parts, "ansible_host", &host.ansible_host);
    push_field(&mut parts, "ansible_connection", &host.ansible_connection);
    if let Some(port) = host.ansible_port {
        parts.push(format!("ansible_port={port}"));
    }
    push_field(&mut parts, "ansible_user", &host.ansible_user);
    push_field(
        &mut parts,
        "ansible_winrm_transport",
        &host.ansible_winrm_transport,
    );
    push_field(
        &mut parts,
        "ansible_winrm_server_cert_validation",
        &host.ansible_winrm_server_cert_validation,
    );

    push_field(&mut parts, "ext_connection_type", &host.ext_connection_type);
    push_field(&mut parts, "ext_credential_id", &host.ext_credential_id);
    push_field(
        &mut parts,
        "ext_credential_strategy",
        &host.ext_credential_strategy,
    );
    push_field(&mut parts, "ext_domain", &host.ext_domain);
    if let Some(port) = host.ext_port {
        parts.push(format!("ext_port={port}"));
    }
    if let Some(display_name) = &host.ext_display_name {
        parts.push(format!("ext_display_name=\"{display_name}\""));
    }
    push_field(&mut parts, "ext_identity_file", &host.ext_identity_file);
    push_field(&mut parts, "ext_proxy_jump", &host.ext_proxy_jump);
    push_field(&mut parts, "ext_tags", &host.ext_tags);

    if let Some(comment) = &host.comment {
        parts.push(format!("comment=\"{comment}\""));
    }

    for (key, value) in &host.raw_variables {
        parts.push(format!("{key}={value}"));
    }

    let mut line = parts.join(" ");
    if let Some(inline) = &host.inline_comment {
        line.push(' ');
        line.push_str(inline);
    }
    line
}

fn push_field(parts: &mut Vec<String>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        parts.push(format!("{key}={value}"));
    }
}
