//! Section state machine: one forward pass over classified lines.

use crate::codec::host::host_from_tokens;
use crate::codec::line::{classify, Line, SectionKind};
use crate::types::model::{Group, Host, Inventory};
use tracing::debug;

/// Parse the full contents of one inventory file.
///
/// Never fails: lines that fit no pattern degrade to best-effort host
/// entries. `\n` and `\r\n` endings are treated uniformly.
pub fn parse(text: &str) -> Inventory {
    let mut state = ParserState::new();
    for (idx, line) in text.lines().enumerate() {
        state.consume(line, idx + 1);
    }
    state.inventory
}

/// State = (current group handle, section kind, header-open flag).
///
/// The current group is an index into the growing group list, not a
/// reference, so the machine and the list never fight over ownership.
struct ParserState {
    inventory: Inventory,
    current: Option<usize>,
    section: SectionKind,
    in_header: bool,
}

impl ParserState {
    fn new() -> Self {
        Self {
            inventory: Inventory::new(),
            current: None,
            section: SectionKind::Hosts,
            in_header: true,
        }
    }

    fn consume(&mut self, line: &str, line_number: usize) {
        match classify(line) {
            Line::Empty => {
                // A blank line closes the header block once it holds anything.
                if self.in_header && !self.inventory.header_comments.is_empty() {
                    self.in_header = false;
                }
            }
            Line::Comment(text) => self.comment(text),
            Line::Group { name, kind } => self.open_group(name, kind),
            Line::Variable { key, value } => self.assign(key, value, line_number),
            Line::Bare {
                name,
                inline_comment,
            } => self.bare(name, inline_comment, line_number),
            Line::Host {
                tokens,
                inline_comment,
            } => {
                self.in_header = false;
                let host = host_from_tokens(tokens, inline_comment, line_number);
                self.route_host(host);
            }
        }
    }

    fn comment(&mut self, text: String) {
        match self.current {
            Some(idx) => self.inventory.groups[idx].comments.push(text),
            None if self.in_header => self.inventory.header_comments.push(text),
            None => self.inventory.ungrouped_comments.push(text),
        }
    }

    fn open_group(&mut self, name: String, kind: SectionKind) {
        self.in_header = false;
        // A repeated [name] header reopens the existing group.
        let idx = match self.inventory.groups.iter().position(|g| g.name == name) {
            Some(idx) => idx,
            None => {
                self.inventory.groups.push(Group::new(name));
                self.inventory.groups.len() - 1
            }
        };
        self.current = Some(idx);
        self.section = kind;
    }

    fn assign(&mut self, key: String, value: String, line_number: usize) {
        self.in_header = false;
        match self.current {
            Some(idx) if self.section == SectionKind::Vars => {
                // Last write wins; first insertion fixes the position.
                self.inventory.groups[idx].vars.insert(key, value);
            }
            _ => {
                debug!(line = line_number, key = %key, "ignoring assignment outside a :vars section");
            }
        }
    }

    /// A bare token is a child reference only inside an open `:children`
    /// section; everywhere else it is a host with no variables.
    fn bare(&mut self, name: String, inline_comment: Option<String>, line_number: usize) {
        self.in_header = false;
        match self.current {
            Some(idx) if self.section == SectionKind::Children => {
                let children = &mut self.inventory.groups[idx].children;
                if !children.contains(&name) {
                    children.push(name);
                }
            }
            _ => {
                let mut host = Host::new(name);
                host.line_number = line_number;
                host.inline_comment = inline_comment;
                self.route_host(host);
            }
        }
    }

    fn route_host(&mut self, host: Host) {
        match self.current {
            Some(idx) if self.section == SectionKind::Hosts => {
                self.inventory.groups[idx].hosts.push(host)
            }
            _ => self.inventory.ungrouped_hosts.push(host),
        }
    }
}
