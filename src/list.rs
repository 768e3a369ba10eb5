//! Decoding of `;`-separated list values
//!
//! List keys such as `Categories` or `MimeType` hold several strings joined
//! by unescaped semicolons. Backslash escapes are resolved while splitting.

use smallvec::SmallVec;

/// Decoded list value; most lists fit inline without a heap allocation
pub type ListValue = SmallVec<[String; 4]>;

/// List element separator
pub const LIST_SEPARATOR: char = ';';

/// Maps the character following a backslash to its unescaped form
#[inline]
const fn unescape(c: char) -> char {
    match c {
        's' => ' ',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        // `;`, `\` and anything else pass through literally
        other => other,
    }
}

/// Decodes a raw list value into its ordered elements.
///
/// Splits on unescaped `;` and resolves `\s`, `\n`, `\r`, `\t`, `\;` and
/// `\\`; any other escaped character is kept with the backslash dropped.
/// When the input ends right after a separator, one empty element is
/// appended. A lone trailing backslash is ignored. Empty input decodes to an
/// empty list.
///
/// ```
/// use desktop_entry::decode_list;
///
/// let values = decode_list("a\\;b;c\\\\;;");
/// assert_eq!(values.as_slice(), ["a;b", "c\\", "", ""]);
/// assert!(decode_list("").is_empty());
/// ```
pub fn decode_list(raw: &str) -> ListValue {
    let mut values = ListValue::new();
    let mut current = String::new();
    let mut escaped = false;
    let mut after_separator = false;

    for c in raw.chars() {
        if escaped {
            current.push(unescape(c));
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == LIST_SEPARATOR {
            values.push(std::mem::take(&mut current));
            after_separator = true;
            continue;
        } else {
            current.push(c);
        }
        after_separator = false;
    }

    if !current.is_empty() {
        values.push(current);
    } else if after_separator {
        values.push(String::new());
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(raw: &str) -> Vec<String> {
        decode_list(raw).into_vec()
    }

    #[test]
    fn test_decode_list_escapes_and_trailing_empty() {
        assert_eq!(decoded("a\\;b;c\\\\;;"), vec!["a;b", "c\\", "", ""]);
    }

    #[test]
    fn test_decode_list_empty_input() {
        assert!(decode_list("").is_empty());
    }

    #[test]
    fn test_decode_list_whitespace_escapes() {
        assert_eq!(decoded("a\\sb\\tc"), vec!["a b\tc"]);
        assert_eq!(decoded("line\\nbreak\\r"), vec!["line\nbreak\r"]);
    }

    #[test]
    fn test_decode_list_unknown_escape_drops_backslash() {
        assert_eq!(decoded("\\x\\y"), vec!["xy"]);
    }

    #[test]
    fn test_decode_list_trailing_backslash_ignored() {
        assert_eq!(decoded("abc\\"), vec!["abc"]);
        assert_eq!(decoded("a;\\"), vec!["a"]);
        assert!(decode_list("\\").is_empty());
    }

    #[test]
    fn test_decode_list_plain_values() {
        assert_eq!(decoded("GNOME;GTK"), vec!["GNOME", "GTK"]);
        assert_eq!(decoded("GNOME;GTK;"), vec!["GNOME", "GTK", ""]);
        assert_eq!(decoded("a;;b"), vec!["a", "", "b"]);
        assert_eq!(decoded(";"), vec!["", ""]);
    }

    #[test]
    fn test_decode_list_unicode() {
        assert_eq!(decoded("caf\u{e9};\u{65e5}\u{672c}"), vec!["caf\u{e9}", "\u{65e5}\u{672c}"]);
    }

    #[test]
    fn test_short_lists_stay_inline() {
        assert!(!decode_list("a;b;c;d").spilled());
        assert!(decode_list("a;b;c;d;e").spilled());
    }
}
