//! The parsed desktop entry record

use crate::error::FieldError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw key/value table of one group, in file order
pub type KeyValueTable = IndexMap<String, String>;

/// Action tables keyed by action identifier
pub type ActionTable = IndexMap<String, KeyValueTable>;

/// Kind of launchable item named by the `Type` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// A program that can be launched
    Application,
    /// A link to a URL
    Link,
    /// A directory or menu folder
    Directory,
}

impl EntryType {
    /// Returns the value as it appears after `Type=`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "Application",
            Self::Link => "Link",
            Self::Directory => "Directory",
        }
    }
}

impl FromStr for EntryType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Application" => Ok(Self::Application),
            "Link" => Ok(Self::Link),
            "Directory" => Ok(Self::Directory),
            _ => Err(FieldError::InvalidType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated `[Desktop Entry]` and its action groups
///
/// String fields are empty when the key was absent. Values are stored as
/// written, with list keys decoded into their elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesktopEntry {
    pub name: String,
    pub generic_name: String,
    pub comment: String,
    pub icon: String,
    pub exec: String,
    pub path: String,
    /// Raw `Type` value; always one of [`crate::VALID_TYPES`] once parsed
    #[serde(rename = "type")]
    pub entry_type: String,
    pub no_display: bool,
    pub terminal: bool,
    pub categories: Vec<String>,
    pub mime_types: Vec<String>,
    pub keywords: Vec<String>,
    /// `[Desktop Action <id>]` groups keyed by `<id>`
    pub actions: ActionTable,
    /// Unrecognized `[Desktop Entry]` keys, case preserved
    pub extra_fields: KeyValueTable,
    /// Groups that are neither the entry nor an action, keyed by group name
    pub extension_groups: IndexMap<String, KeyValueTable>,
}

impl DesktopEntry {
    /// Creates an empty entry with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the typed `Type` value, if it is set and valid
    pub fn entry_kind(&self) -> Option<EntryType> {
        self.entry_type.parse().ok()
    }

    /// Returns true if this entry describes an application
    pub fn is_application(&self) -> bool {
        self.entry_kind() == Some(EntryType::Application)
    }

    /// Returns the key/value table of the given action
    pub fn action(&self, id: &str) -> Option<&KeyValueTable> {
        self.actions.get(id)
    }

    /// Returns the action identifiers in file order
    pub fn action_ids(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    /// Returns an unrecognized top-level value by its exact key
    pub fn extra_field(&self, key: &str) -> Option<&str> {
        self.extra_fields.get(key).map(String::as_str)
    }
}
