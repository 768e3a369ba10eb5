//! Group header classification
//!
//! A header line is one of the `[Desktop Entry]` group, a
//! `[Desktop Action <id>]` group, or an extension group kept opaquely.

use crate::error::{DesktopEntryError, Result};

/// The mandatory top-level header
pub const DESKTOP_ENTRY_HEADER: &str = "[Desktop Entry]";

/// Prefix of every action group header; the identifier starts right after it
pub const ACTION_HEADER_PREFIX: &str = "[Desktop Action ";

/// Group name prefix that routes a header to action validation
const ACTION_GROUP_NAME: &str = "Desktop Action";

/// Expected shape of a group header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// `[Desktop Entry]`
    DesktopEntry,
    /// `[Desktop Action <id>]`
    Action,
}

/// A classified group header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupHeader {
    /// The `[Desktop Entry]` group
    DesktopEntry,
    /// An action group with its identifier
    Action(String),
    /// Any other group, by name
    Extension(String),
}

/// Checks that `header` has the exact shape required for `kind`
pub fn validate_group(kind: GroupKind, header: &str, line: usize) -> Result<()> {
    let valid = match kind {
        GroupKind::DesktopEntry => header == DESKTOP_ENTRY_HEADER,
        GroupKind::Action => header.starts_with(ACTION_HEADER_PREFIX) && header.ends_with(']'),
    };
    if valid {
        return Ok(());
    }

    Err(match kind {
        GroupKind::DesktopEntry => DesktopEntryError::MissingHeader {
            line,
            found: header.to_string(),
        },
        GroupKind::Action => DesktopEntryError::InvalidActionHeader {
            line,
            header: header.to_string(),
        },
    })
}

/// Classifies a trimmed line starting with `[`
pub fn classify_header(header: &str, line: usize) -> Result<GroupHeader> {
    let malformed = |reason| DesktopEntryError::MalformedGroupHeader {
        line,
        header: header.to_string(),
        reason,
    };

    if header.len() < 2 || !header.ends_with(']') {
        return Err(malformed("missing closing bracket"));
    }
    let name = &header[1..header.len() - 1];
    if name.is_empty() {
        return Err(malformed("empty group name"));
    }
    if name.contains(['[', ']']) {
        return Err(malformed("brackets inside group name"));
    }

    if header == DESKTOP_ENTRY_HEADER {
        return Ok(GroupHeader::DesktopEntry);
    }

    if name.starts_with(ACTION_GROUP_NAME) {
        validate_group(GroupKind::Action, header, line)?;
        let id = &header[ACTION_HEADER_PREFIX.len()..header.len() - 1];
        if id.trim().is_empty() {
            return Err(DesktopEntryError::InvalidActionHeader {
                line,
                header: header.to_string(),
            });
        }
        return Ok(GroupHeader::Action(id.to_string()));
    }

    Ok(GroupHeader::Extension(name.to_string()))
}
