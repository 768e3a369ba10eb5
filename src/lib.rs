//! # Desktop Entry Parser
//!
//! A streaming parser and validator for freedesktop `.desktop` entry files.
//!
//! ## Overview
//!
//! A desktop entry is an INI-like document describing one launchable item:
//! a mandatory `[Desktop Entry]` group, optional `[Desktop Action <id>]`
//! groups, `key=value` lines with `;`-separated list values, and `#`
//! comments. This crate reads such a document in fixed-size chunks, checks
//! it against the format's structural and semantic rules, and returns a
//! typed [`DesktopEntry`], or a [`DesktopEntryError`] naming the first
//! violation. An invalid entry is never returned.
//!
//! ## Key Features
//!
//! - **Streaming**: input is read in fixed-size chunks; lines that straddle
//!   a chunk boundary are stitched back together
//! - **Validation**: `Type` enumeration, `Exec` field codes, key character
//!   set, required keys, and the `Application` requires `Exec` rule
//! - **Actions**: each `[Desktop Action <id>]` group keeps its own table
//! - **Serde Integration**: parsed entries serialize with `serde`
//!
//! ## Basic Usage
//!
//! ```rust
//! use desktop_entry::from_str;
//!
//! let text = "\
//! [Desktop Entry]
//! Name=Text Editor
//! Type=Application
//! Exec=editor %F
//! Categories=Utility;TextEditor;
//!
//! [Desktop Action new-window]
//! Name=New Window
//! Exec=editor --new-window
//! ";
//!
//! let entry = from_str(text)?;
//! assert_eq!(entry.name, "Text Editor");
//! assert_eq!(entry.categories, ["Utility", "TextEditor", ""]);
//! assert_eq!(entry.actions["new-window"]["Name"], "New Window");
//! # Ok::<(), desktop_entry::DesktopEntryError>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use desktop_entry::{DesktopEntryParser, DuplicateKeyBehavior, ParserConfig};
//!
//! let parser = DesktopEntryParser::with_config(
//!     ParserConfig::new()
//!         .with_chunk_size(512)
//!         .with_duplicate_key_behavior(DuplicateKeyBehavior::Error),
//! );
//!
//! let result = parser.parse_str("[Desktop Entry]\nName=A\nName=B\nType=Link\n");
//! assert!(result.is_err());
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use desktop_entry::{from_str, DesktopEntryError, FieldError};
//!
//! match from_str("[Desktop Entry]\nName=X\nType=Application\nExec=foo %x\n") {
//!     Err(DesktopEntryError::InvalidField { line, key, source }) => {
//!         assert_eq!(line, 4);
//!         assert_eq!(key, "Exec");
//!         assert!(matches!(source, FieldError::UnknownFieldCode { code: 'x', .. }));
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

pub mod entry;
pub mod error;
pub mod list;
pub mod parser;
pub mod scanner;
pub mod section;
pub mod validate;


use std::io::Read;
use std::path::Path;
use std::str::FromStr;

// Re-export main types and functions
pub use entry::{ActionTable, DesktopEntry, EntryType, KeyValueTable};
pub use error::{DesktopEntryError, FieldError, Result};
pub use list::{ListValue, decode_list};
pub use parser::{
    DesktopEntryParser, DuplicateKeyBehavior, FieldSet, ParserConfig, ParserState, Section,
};
pub use scanner::{Line, LineReader, find_line_end};
pub use section::{GroupHeader, GroupKind, classify_header, validate_group};
pub use validate::{
    EXEC_FIELD_CODES, VALID_TYPES, validate_exec, validate_locale_string, validate_type,
};

/// Parses the desktop entry file at `path` with the default configuration
///
/// The file handle is closed before this returns, on success and on error.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<DesktopEntry> {
    DesktopEntryParser::new().parse_file(path)
}

/// Parses a desktop entry from any byte source with the default configuration
pub fn from_reader<R: Read>(reader: R) -> Result<DesktopEntry> {
    DesktopEntryParser::new().parse(reader)
}

/// Parses a desktop entry from a string with the default configuration
pub fn from_str(input: &str) -> Result<DesktopEntry> {
    DesktopEntryParser::new().parse_str(input)
}

impl FromStr for DesktopEntry {
    type Err = DesktopEntryError;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}
