//! Error types for desktop entry parsing
//!
//! Every violation aborts the parse and surfaces as a single
//! [`DesktopEntryError`]. Structural errors carry the 1-based line number
//! where they were detected; field validation failures are reported as a
//! [`FieldError`] wrapped together with the offending key.

use thiserror::Error;

/// Main error type for desktop entry parsing operations
#[derive(Debug, Error)]
pub enum DesktopEntryError {
    /// I/O error while reading the source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line is not valid UTF-8
    #[error("Invalid UTF-8 sequence at line {line}")]
    InvalidUtf8 { line: usize },

    /// A logical line exceeded the configured maximum length
    #[error("Line {line} exceeds the maximum length of {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    /// The first meaningful line is not the `[Desktop Entry]` header
    #[error("Expected [Desktop Entry] header at line {line}, found '{found}'")]
    MissingHeader { line: usize, found: String },

    /// The input ended before any `[Desktop Entry]` header was seen
    #[error("Missing required [Desktop Entry] group")]
    MissingDesktopEntryGroup,

    /// A section header is syntactically malformed
    #[error("Malformed group header at line {line}: '{header}' ({reason})")]
    MalformedGroupHeader {
        line: usize,
        header: String,
        reason: &'static str,
    },

    /// An action header does not match `[Desktop Action <id>]`
    #[error("Invalid action group header at line {line}: '{header}'")]
    InvalidActionHeader { line: usize, header: String },

    /// A group (or action identifier) appears more than once
    #[error("Duplicate group at line {line}: [{name}]")]
    DuplicateGroup { line: usize, name: String },

    /// A non-blank, non-comment, non-header line has no `=`
    #[error("Missing '=' separator at line {line}: '{content}'")]
    MissingSeparator { line: usize, content: String },

    /// A key-value line has nothing before its `=`
    #[error("Empty key at line {line}")]
    EmptyKey { line: usize },

    /// A key contains characters outside the locale-key set
    #[error("Invalid character in key '{key}' at line {line}")]
    InvalidKeyCharacter { line: usize, key: String },

    /// A key was repeated within one group while duplicates are rejected
    #[error("Duplicate key '{key}' at line {line}")]
    DuplicateKey { line: usize, key: String },

    /// A recognized field carries an invalid value
    #[error("Invalid value for key '{key}' at line {line}: {source}")]
    InvalidField {
        line: usize,
        key: String,
        #[source]
        source: FieldError,
    },

    /// A required key was never seen
    #[error("Missing required key: {0}")]
    MissingRequiredKey(&'static str),

    /// `Type=Application` without a non-empty `Exec`
    #[error("Type=Application requires a non-empty Exec key")]
    ApplicationWithoutExec,
}

/// Field-level validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// `Exec` value is empty
    #[error("Exec value is empty")]
    EmptyExec,

    /// `%` is the last character of an `Exec` value
    #[error("dangling field code at end of '{value}'")]
    DanglingFieldCode { value: String },

    /// `%` is followed by a letter outside the field-code set
    #[error("unrecognized field code '%{code}' in '{value}'")]
    UnknownFieldCode { code: char, value: String },

    /// `Type` value is outside the fixed enumeration
    #[error("'{value}' is not one of Application, Link, Directory")]
    InvalidType { value: String },
}

impl DesktopEntryError {
    /// Returns the line the error was detected on, if it is tied to one
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidUtf8 { line }
            | Self::LineTooLong { line, .. }
            | Self::MissingHeader { line, .. }
            | Self::MalformedGroupHeader { line, .. }
            | Self::InvalidActionHeader { line, .. }
            | Self::DuplicateGroup { line, .. }
            | Self::MissingSeparator { line, .. }
            | Self::EmptyKey { line }
            | Self::InvalidKeyCharacter { line, .. }
            | Self::DuplicateKey { line, .. }
            | Self::InvalidField { line, .. } => Some(*line),
            Self::Io(_)
            | Self::MissingDesktopEntryGroup
            | Self::MissingRequiredKey(_)
            | Self::ApplicationWithoutExec => None,
        }
    }

    /// Returns true for errors about the file's shape rather than a field's value
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader { .. }
                | Self::MissingDesktopEntryGroup
                | Self::MalformedGroupHeader { .. }
                | Self::InvalidActionHeader { .. }
                | Self::DuplicateGroup { .. }
                | Self::MissingSeparator { .. }
                | Self::EmptyKey { .. }
        )
    }

    /// Returns the wrapped field error, if any
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            Self::InvalidField { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for desktop entry operations
pub type Result<T> = std::result::Result<T, DesktopEntryError>;
