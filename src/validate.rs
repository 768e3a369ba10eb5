//! Field validators
//!
//! Each rule is a fixed lookup table plus a small check, so it can be tested
//! on its own and reused outside the parser.

use crate::entry::EntryType;
use crate::error::FieldError;

/// Values accepted for the `Type` key
pub const VALID_TYPES: [&str; 3] = ["Application", "Link", "Directory"];

/// Letters accepted after `%` in an `Exec` value
pub const EXEC_FIELD_CODES: [u8; 10] = [b'f', b'F', b'u', b'U', b'i', b'c', b'k', b'v', b'm', b'%'];

/// Byte lookup table for key validation
#[derive(Debug, Clone)]
pub struct KeyCharTable([bool; 256]);

impl KeyCharTable {
    /// Builds the table at compile time
    pub const fn new() -> Self {
        let mut table = [false; 256];
        let mut i = 0;

        while i < 256 {
            let ch = i as u8;
            table[i] = matches!(
                ch,
                b'a'..=b'z'
                    | b'A'..=b'Z'
                    | b'0'..=b'9'
                    | b'-'
                    | b'_'
                    | b'@'
                    | b'.'
                    | b'['
                    | b']'
                    | b'='
            );
            i += 1;
        }

        Self(table)
    }

    /// Checks if a byte may appear in a key
    #[inline(always)]
    pub const fn is_key_byte(&self, ch: u8) -> bool {
        self.0[ch as usize]
    }
}

impl Default for KeyCharTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Global key table instance
pub static KEY_CHAR_TABLE: KeyCharTable = KeyCharTable::new();

/// Checks a `Type` value against the fixed enumeration
pub fn validate_type(value: &str) -> Result<EntryType, FieldError> {
    value.parse()
}

/// Checks an `Exec` value: non-empty, and every `%` starts a known field code
pub fn validate_exec(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::EmptyExec);
    }

    let bytes = value.as_bytes();
    let mut i = 0;
    while let Some(offset) = memchr::memchr(b'%', &bytes[i..]) {
        let percent = i + offset;
        let Some(code) = value[percent + 1..].chars().next() else {
            return Err(FieldError::DanglingFieldCode {
                value: value.to_string(),
            });
        };
        if !code.is_ascii() || !EXEC_FIELD_CODES.contains(&(code as u8)) {
            return Err(FieldError::UnknownFieldCode {
                code,
                value: value.to_string(),
            });
        }
        // `%%` is consumed as a unit
        i = percent + 2;
    }

    Ok(())
}

/// Returns true if every byte of `key` is in the locale-key character set
pub fn validate_locale_string(key: &str) -> bool {
    key.bytes().all(|b| KEY_CHAR_TABLE.is_key_byte(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_type() {
        for value in VALID_TYPES {
            assert!(validate_type(value).is_ok(), "{} should be valid", value);
        }
        assert_eq!(validate_type("Application"), Ok(EntryType::Application));
        assert_eq!(
            validate_type("Foo"),
            Err(FieldError::InvalidType {
                value: "Foo".to_string()
            })
        );
        assert!(validate_type("application").is_err());
        assert!(validate_type("").is_err());
    }

    #[test]
    fn test_validate_exec_without_field_codes() {
        assert!(validate_exec("foo").is_ok());
        assert!(validate_exec("/usr/bin/foo --flag").is_ok());
        assert_eq!(validate_exec(""), Err(FieldError::EmptyExec));
    }

    #[test]
    fn test_validate_exec_field_codes() {
        assert!(validate_exec("foo %f %u").is_ok());
        assert!(validate_exec("foo %F %U %i %c %k %v %m").is_ok());
        assert!(validate_exec("printf 100%%").is_ok());
        assert!(validate_exec("%%%f").is_ok());
    }

    #[test]
    fn test_validate_exec_unknown_code() {
        match validate_exec("foo %x") {
            Err(FieldError::UnknownFieldCode { code, value }) => {
                assert_eq!(code, 'x');
                assert_eq!(value, "foo %x");
            }
            other => panic!("Expected UnknownFieldCode, got {:?}", other),
        }
        assert!(matches!(
            validate_exec("foo %\u{e9}"),
            Err(FieldError::UnknownFieldCode { code: '\u{e9}', .. })
        ));
    }

    #[test]
    fn test_validate_exec_dangling_code() {
        assert!(matches!(
            validate_exec("foo %"),
            Err(FieldError::DanglingFieldCode { .. })
        ));
        assert!(matches!(
            validate_exec("foo %%%"),
            Err(FieldError::DanglingFieldCode { .. })
        ));
    }

    #[test]
    fn test_validate_locale_string() {
        assert!(validate_locale_string("Name"));
        assert!(validate_locale_string("X-Vendor_Key2"));
        assert!(validate_locale_string("Name[sr_YU@Latn]"));
        assert!(validate_locale_string("Comment[en_US.UTF-8]"));
        assert!(!validate_locale_string("Bad Key"));
        assert!(!validate_locale_string("Bad!"));
        assert!(!validate_locale_string("Caf\u{e9}"));
    }

    #[test]
    fn test_key_table_bounds() {
        assert!(KEY_CHAR_TABLE.is_key_byte(b'a'));
        assert!(KEY_CHAR_TABLE.is_key_byte(b'='));
        assert!(!KEY_CHAR_TABLE.is_key_byte(b' '));
        assert!(!KEY_CHAR_TABLE.is_key_byte(0));
        assert!(!KEY_CHAR_TABLE.is_key_byte(255));
    }
}
