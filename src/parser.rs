//! Desktop entry parser
//!
//! This module drives the line reader over a byte source, tracks which group
//! is active, routes key-value lines into the entry, and performs the
//! required-key and cross-field checks once the input is exhausted.

use crate::entry::{DesktopEntry, KeyValueTable};
use crate::error::{DesktopEntryError, FieldError, Result};
use crate::list::decode_list;
use crate::scanner::{DEFAULT_CHUNK_SIZE, Line, LineReader};
use crate::section::{GroupHeader, GroupKind, classify_header, validate_group};
use crate::validate::{validate_exec, validate_locale_string, validate_type};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lines starting with this character are comments
pub const COMMENT_MARKER: char = '#';

/// Behavior when a key is repeated within one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKeyBehavior {
    /// Return an error when duplicate keys are found
    Error,
    /// Use the last value (override previous values)
    Override,
}

/// Configuration options for the parser
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Size of each read from the source, in bytes
    pub chunk_size: usize,
    /// Maximum logical line length to prevent memory exhaustion
    pub max_line_length: usize,
    /// Behavior when duplicate keys are encountered
    pub duplicate_key_behavior: DuplicateKeyBehavior,
}

impl ParserConfig {
    /// Creates a new parser configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read chunk size (at least one byte)
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Sets the maximum logical line length
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Sets the duplicate key behavior
    pub fn with_duplicate_key_behavior(mut self, behavior: DuplicateKeyBehavior) -> Self {
        self.duplicate_key_behavior = behavior;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_line_length: 64 * 1024,
            duplicate_key_behavior: DuplicateKeyBehavior::Override,
        }
    }
}

/// Recognized `[Desktop Entry]` keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKey {
    Name,
    GenericName,
    NoDisplay,
    Comment,
    Icon,
    Exec,
    Path,
    Terminal,
    Type,
    Categories,
    MimeTypes,
    Keywords,
}

/// Lower-case key names and the field each one sets
const RECOGNIZED_KEYS: [(&str, FieldKey); 12] = [
    ("name", FieldKey::Name),
    ("genericname", FieldKey::GenericName),
    ("nodisplay", FieldKey::NoDisplay),
    ("comment", FieldKey::Comment),
    ("icon", FieldKey::Icon),
    ("exec", FieldKey::Exec),
    ("path", FieldKey::Path),
    ("terminal", FieldKey::Terminal),
    ("type", FieldKey::Type),
    ("categories", FieldKey::Categories),
    ("mimetypes", FieldKey::MimeTypes),
    ("keywords", FieldKey::Keywords),
];

/// Keys that must appear in `[Desktop Entry]`, with their reported names
const REQUIRED_KEYS: [(FieldKey, &str); 2] = [(FieldKey::Name, "Name"), (FieldKey::Type, "Type")];

impl FieldKey {
    /// Looks up a key case-insensitively
    fn lookup(key: &str) -> Option<Self> {
        RECOGNIZED_KEYS
            .iter()
            .find(|(name, _)| key.eq_ignore_ascii_case(name))
            .map(|&(_, field)| field)
    }
}

/// Bitfield of recognized keys seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet(u16);

impl FieldSet {
    /// Creates an empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    const fn of(field: FieldKey) -> Self {
        Self(1 << field as u16)
    }

    const fn contains(self, field: FieldKey) -> bool {
        self.0 & Self::of(field).0 != 0
    }

    fn insert(&mut self, field: FieldKey) {
        self.0 |= Self::of(field).0;
    }

    /// Returns the number of distinct recognized keys seen
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if no recognized key has been seen
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Group whose keys are currently being read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// `[Desktop Entry]`
    Entry,
    /// `[Desktop Action <id>]`
    Action(String),
    /// Any other group
    Extension(String),
}

/// Parse state threaded through every line step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserState {
    /// Active group
    pub section: Section,
    /// Recognized `[Desktop Entry]` keys seen so far
    pub seen: FieldSet,
}

impl ParserState {
    /// State right after the `[Desktop Entry]` header
    pub fn new() -> Self {
        Self {
            section: Section::Entry,
            seen: FieldSet::empty(),
        }
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

/// Streaming desktop entry parser
#[derive(Debug, Clone, Default)]
pub struct DesktopEntryParser {
    config: ParserConfig,
}

impl DesktopEntryParser {
    /// Creates a parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with a custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Opens and parses the file at `path`
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<DesktopEntry> {
        let file = File::open(path)?;
        self.parse(file)
    }

    /// Parses an in-memory document
    pub fn parse_str(&self, input: &str) -> Result<DesktopEntry> {
        self.parse(input.as_bytes())
    }

    /// Parses a desktop entry from any byte source
    pub fn parse<R: Read>(&self, reader: R) -> Result<DesktopEntry> {
        let mut lines = LineReader::with_chunk_size(reader, self.config.chunk_size)
            .with_max_line_length(self.config.max_line_length);

        let mut state = self.read_header(&mut lines)?;
        let mut entry = DesktopEntry::new();

        while let Some(line) = lines.next_line()? {
            let text = line_text(&line)?;
            state = self.step(state, &mut entry, text, line.number)?;
        }

        self.finish(state, entry)
    }

    /// Skips leading blank and comment lines, then requires `[Desktop Entry]`
    fn read_header<R: Read>(&self, lines: &mut LineReader<R>) -> Result<ParserState> {
        while let Some(line) = lines.next_line()? {
            let text = line_text(&line)?;
            let text = if line.number == 1 {
                text.strip_prefix('\u{feff}').unwrap_or(text)
            } else {
                text
            };
            let trimmed = text.trim();
            if is_trivial(trimmed) {
                continue;
            }
            validate_group(GroupKind::DesktopEntry, trimmed, line.number)?;
            return Ok(ParserState::new());
        }

        Err(DesktopEntryError::MissingDesktopEntryGroup)
    }

    /// Applies one line to the entry and returns the updated state
    pub fn step(
        &self,
        state: ParserState,
        entry: &mut DesktopEntry,
        text: &str,
        line: usize,
    ) -> Result<ParserState> {
        let trimmed = text.trim();
        if is_trivial(trimmed) {
            return Ok(state);
        }
        if trimmed.starts_with('[') {
            return enter_group(state, entry, trimmed, line);
        }

        let (key, value) = split_key_value(trimmed, line)?;
        self.assign(state, entry, key, value, line)
    }

    fn assign(
        &self,
        mut state: ParserState,
        entry: &mut DesktopEntry,
        key: &str,
        value: &str,
        line: usize,
    ) -> Result<ParserState> {
        match &state.section {
            Section::Entry => match FieldKey::lookup(key) {
                Some(field) => {
                    if state.seen.contains(field) {
                        self.check_duplicate(key, line)?;
                    }
                    assign_field(entry, field, key, value, line)?;
                    state.seen.insert(field);
                }
                None => self.insert_raw(&mut entry.extra_fields, key, value, line)?,
            },
            Section::Action(id) => {
                let table = entry.actions.entry(id.clone()).or_default();
                self.insert_raw(table, key, value, line)?;
            }
            Section::Extension(name) => {
                let table = entry.extension_groups.entry(name.clone()).or_default();
                self.insert_raw(table, key, value, line)?;
            }
        }
        Ok(state)
    }

    fn insert_raw(
        &self,
        table: &mut KeyValueTable,
        key: &str,
        value: &str,
        line: usize,
    ) -> Result<()> {
        if table.contains_key(key) {
            self.check_duplicate(key, line)?;
        }
        table.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn check_duplicate(&self, key: &str, line: usize) -> Result<()> {
        match self.config.duplicate_key_behavior {
            DuplicateKeyBehavior::Override => Ok(()),
            DuplicateKeyBehavior::Error => Err(DesktopEntryError::DuplicateKey {
                line,
                key: key.to_string(),
            }),
        }
    }

    /// Runs the end-of-input checks and releases the entry
    pub fn finish(&self, state: ParserState, entry: DesktopEntry) -> Result<DesktopEntry> {
        for (field, name) in REQUIRED_KEYS {
            if !state.seen.contains(field) {
                return Err(DesktopEntryError::MissingRequiredKey(name));
            }
        }
        if entry.is_application() && entry.exec.is_empty() {
            return Err(DesktopEntryError::ApplicationWithoutExec);
        }
        Ok(entry)
    }
}

fn line_text<'a>(line: &Line<'a>) -> Result<&'a str> {
    std::str::from_utf8(line.bytes)
        .map_err(|_| DesktopEntryError::InvalidUtf8 { line: line.number })
}

fn is_trivial(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

fn enter_group(
    mut state: ParserState,
    entry: &mut DesktopEntry,
    header: &str,
    line: usize,
) -> Result<ParserState> {
    let duplicate = |name: &str| DesktopEntryError::DuplicateGroup {
        line,
        name: name.to_string(),
    };

    state.section = match classify_header(header, line)? {
        GroupHeader::DesktopEntry => return Err(duplicate("Desktop Entry")),
        GroupHeader::Action(id) => {
            if entry.actions.contains_key(&id) {
                return Err(duplicate(&header[1..header.len() - 1]));
            }
            entry.actions.insert(id.clone(), KeyValueTable::new());
            Section::Action(id)
        }
        GroupHeader::Extension(name) => {
            if entry.extension_groups.contains_key(&name) {
                return Err(duplicate(&name));
            }
            entry
                .extension_groups
                .insert(name.clone(), KeyValueTable::new());
            Section::Extension(name)
        }
    };
    Ok(state)
}

/// Splits a trimmed line into a validated key and its unquoted value
fn split_key_value(trimmed: &str, line: usize) -> Result<(&str, &str)> {
    let Some((key, value)) = trimmed.split_once('=') else {
        return Err(DesktopEntryError::MissingSeparator {
            line,
            content: trimmed.to_string(),
        });
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(DesktopEntryError::EmptyKey { line });
    }
    if !validate_locale_string(key) {
        return Err(DesktopEntryError::InvalidKeyCharacter {
            line,
            key: key.to_string(),
        });
    }

    Ok((key, strip_quotes(value.trim())))
}

/// Removes one layer of matching single or double quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

fn assign_field(
    entry: &mut DesktopEntry,
    field: FieldKey,
    key: &str,
    value: &str,
    line: usize,
) -> Result<()> {
    let invalid = |source: FieldError| DesktopEntryError::InvalidField {
        line,
        key: key.to_string(),
        source,
    };

    match field {
        FieldKey::Name => entry.name = value.to_string(),
        FieldKey::GenericName => entry.generic_name = value.to_string(),
        FieldKey::Comment => entry.comment = value.to_string(),
        FieldKey::Icon => entry.icon = value.to_string(),
        FieldKey::Path => entry.path = value.to_string(),
        FieldKey::NoDisplay => entry.no_display = parse_bool(value),
        FieldKey::Terminal => entry.terminal = parse_bool(value),
        FieldKey::Exec => {
            // An empty Exec is reported by the Application check at the end
            if !value.is_empty() {
                validate_exec(value).map_err(invalid)?;
            }
            entry.exec = value.to_string();
        }
        FieldKey::Type => {
            validate_type(value).map_err(invalid)?;
            entry.entry_type = value.to_string();
        }
        FieldKey::Categories => entry.categories = decode_list(value).into_vec(),
        FieldKey::MimeTypes => entry.mime_types = decode_list(value).into_vec(),
        FieldKey::Keywords => entry.keywords = decode_list(value).into_vec(),
    }
    Ok(())
}
