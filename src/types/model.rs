use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One host entry from an inventory file.
///
/// A fixed set of well-known variables is lifted into typed fields; every
/// other `key=value` pair on the line is kept verbatim (quotes included) in
/// [`raw_variables`](Host::raw_variables) so that an edit-and-save cycle
/// never loses or rewrites values the codec does not understand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Host {
    /// Identity token: FQDN, short name, or IP literal.
    pub name: String,

    // Well-known Ansible connection variables.
    pub ansible_host: Option<String>,
    pub ansible_connection: Option<String>,
    pub ansible_port: Option<u16>,
    pub ansible_user: Option<String>,
    pub ansible_winrm_transport: Option<String>,
    pub ansible_winrm_server_cert_validation: Option<String>,

    // Application variables, `ext_` prefix.
    pub ext_connection_type: Option<String>,
    pub ext_credential_id: Option<String>,
    pub ext_credential_strategy: Option<String>,
    pub ext_domain: Option<String>,
    pub ext_port: Option<u16>,
    pub ext_display_name: Option<String>,
    pub ext_identity_file: Option<String>,
    pub ext_proxy_jump: Option<String>,
    pub ext_tags: Option<String>,

    /// Value of a `comment="..."` variable, surrounding quotes stripped.
    pub comment: Option<String>,
    /// Trailing `# ...` annotation, stored including the `#`.
    pub inline_comment: Option<String>,

    /// Unrecognized variables, literal value text, insertion order.
    pub raw_variables: IndexMap<String, String>,

    /// 1-based source line, diagnostic only.
    pub line_number: usize,
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Effective address to connect to: `ansible_host` when set, otherwise
    /// the identity token.
    pub fn address(&self) -> &str {
        self.ansible_host.as_deref().unwrap_or(&self.name)
    }
}

/// A named group: its hosts, child-group references, and `:vars` section.
///
/// Children are back-references by name, never owning pointers; a consumer
/// resolves them against [`Inventory::groups`] on demand. A child named
/// before its own `[name]` header is legal and stays unresolved here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub hosts: Vec<Host>,
    /// Child group names from a `[name:children]` section, deduplicated.
    pub children: Vec<String>,
    /// `[name:vars]` assignments, literal values, insertion order.
    pub vars: IndexMap<String, String>,
    /// Comment lines seen while this group's sections were open.
    pub comments: Vec<String>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty() && self.children.is_empty() && self.vars.is_empty()
    }
}

/// The full parsed representation of one inventory file.
///
/// Groups keep file order; a host may appear in several groups and is not
/// deduplicated. The union of `ungrouped_hosts` and every group's `hosts` is
/// the complete host set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub groups: Vec<Group>,
    /// Hosts appearing before any `[group]` header.
    pub ungrouped_hosts: Vec<Host>,
    /// Comment block at the very top of the file.
    pub header_comments: Vec<String>,
    /// Comments after the header block closed but before any group opened.
    pub ungrouped_comments: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.name == name)
    }

    /// All hosts, ungrouped first, then per group in file order.
    pub fn all_hosts(&self) -> impl Iterator<Item = &Host> {
        self.ungrouped_hosts
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.hosts.iter()))
    }

    pub fn host_count(&self) -> usize {
        self.all_hosts().count()
    }

    /// Equality over parsed meaning: ignores source line numbers and the
    /// placement of free-standing comment lines, both of which may legally
    /// shift across a serialize/re-parse cycle. Host-attached comments and
    /// inline comments still count.
    pub fn structurally_equal(&self, other: &Self) -> bool {
        fn hosts_eq(a: &[Host], b: &[Host]) -> bool {
            a.len() == b.len()
                && a.iter().zip(b).all(|(x, y)| {
                    let mut x = x.clone();
                    let mut y = y.clone();
                    x.line_number = 0;
                    y.line_number = 0;
                    x == y
                })
        }

        hosts_eq(&self.ungrouped_hosts, &other.ungrouped_hosts)
            && self.groups.len() == other.groups.len()
            && self.groups.iter().zip(&other.groups).all(|(a, b)| {
                a.name == b.name
                    && a.children == b.children
                    && a.vars == b.vars
                    && hosts_eq(&a.hosts, &b.hosts)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_address_falls_back_to_name() {
        let mut host = Host::new("web1");
        assert_eq!(host.address(), "web1");

        host.ansible_host = Some("10.0.0.1".to_string());
        assert_eq!(host.address(), "10.0.0.1");
    }

    #[test]
    fn test_group_is_empty() {
        let mut group = Group::new("web");
        assert!(group.is_empty());

        group.children.push("db".to_string());
        assert!(!group.is_empty());
    }

    #[test]
    fn test_inventory_lookup_and_counts() {
        let mut inventory = Inventory::new();
        inventory.ungrouped_hosts.push(Host::new("solo"));

        let mut web = Group::new("web");
        web.hosts.push(Host::new("w1"));
        web.hosts.push(Host::new("w2"));
        inventory.groups.push(web);

        assert_eq!(inventory.host_count(), 3);
        assert_eq!(inventory.group("web").unwrap().hosts.len(), 2);
        assert!(inventory.group("db").is_none());

        inventory.group_mut("web").unwrap().hosts.push(Host::new("w3"));
        assert_eq!(inventory.host_count(), 4);
    }

    #[test]
    fn test_structural_equality_ignores_line_numbers_and_comments() {
        let mut a = Inventory::new();
        let mut b = Inventory::new();

        let mut host_a = Host::new("h");
        host_a.line_number = 3;
        let mut host_b = Host::new("h");
        host_b.line_number = 7;

        a.ungrouped_hosts.push(host_a);
        b.ungrouped_hosts.push(host_b);
        a.header_comments.push("# only in a".to_string());

        assert!(a.structurally_equal(&b));
        assert_ne!(a, b);

        b.ungrouped_hosts[0].ansible_host = Some("10.0.0.1".to_string());
        assert!(!a.structurally_equal(&b));
    }
}
