//! Line scanning over fixed-size byte chunks
//!
//! [`find_line_end`] locates the next `\n` inside a buffer window, and
//! [`LineReader`] drives it over a byte source read in fixed-size chunks,
//! stitching lines that straddle a chunk boundary back together.

use crate::error::{DesktopEntryError, Result};
use memchr::memchr;
use std::io::{ErrorKind, Read};

/// Line terminator byte
pub const LINE_TERMINATOR: u8 = b'\n';

/// Default read chunk size in bytes
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Returns the offset of the first `\n` at or after `start` within the
/// first `valid_len` bytes of `buf`, or `valid_len` when there is none.
///
/// `valid_len` is clamped to `buf.len()`, and a `start` at or past the valid
/// region yields `valid_len`.
///
/// ```
/// use desktop_entry::find_line_end;
///
/// let buf = b"Name=X\nType=Link\n";
/// assert_eq!(find_line_end(buf, 0, buf.len()), 6);
/// assert_eq!(find_line_end(buf, 7, buf.len()), 16);
/// assert_eq!(find_line_end(buf, 0, 4), 4);
/// ```
#[inline]
pub fn find_line_end(buf: &[u8], start: usize, valid_len: usize) -> usize {
    let valid_len = valid_len.min(buf.len());
    if start >= valid_len {
        return valid_len;
    }
    match memchr(LINE_TERMINATOR, &buf[start..valid_len]) {
        Some(index) => start + index,
        None => valid_len,
    }
}

/// A logical line without its terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number
    pub number: usize,
    /// Raw line bytes
    pub bytes: &'a [u8],
}

/// Reads logical lines from a byte source in fixed-size chunks
///
/// A line whose terminator lies in a later chunk is carried over and
/// completed on the next read, so line content never depends on where the
/// chunk edges fall. A final line without a terminator is still yielded.
pub struct LineReader<R: Read> {
    /// Underlying byte source
    reader: R,
    /// Fixed-size chunk buffer
    chunk: Box<[u8]>,
    /// Number of valid bytes in `chunk`
    filled: usize,
    /// Read position within `chunk`
    position: usize,
    /// Bytes of the line being assembled
    line: Vec<u8>,
    /// 1-based number of the last line yielded
    line_number: usize,
    /// Longest accepted line in bytes
    max_line_length: usize,
    /// Whether the source is exhausted
    eof_reached: bool,
}

impl<R: Read> LineReader<R> {
    /// Creates a reader with the default chunk size and no line length limit
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// Creates a reader using chunks of `chunk_size` bytes (at least one)
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk: vec![0u8; chunk_size.max(1)].into_boxed_slice(),
            filled: 0,
            position: 0,
            line: Vec::new(),
            line_number: 0,
            max_line_length: usize::MAX,
            eof_reached: false,
        }
    }

    /// Sets the longest logical line accepted before failing
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Returns the 1-based number of the most recently yielded line
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the configured chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk.len()
    }

    /// Returns the next line without its terminator, or `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<Line<'_>>> {
        self.line.clear();

        loop {
            if self.position >= self.filled {
                if self.eof_reached || !self.fill_chunk()? {
                    break;
                }
            }

            let end = find_line_end(&self.chunk, self.position, self.filled);
            self.line.extend_from_slice(&self.chunk[self.position..end]);

            if self.line.len() > self.max_line_length {
                return Err(DesktopEntryError::LineTooLong {
                    line: self.line_number + 1,
                    limit: self.max_line_length,
                });
            }

            if end < self.filled {
                self.position = end + 1;
                self.line_number += 1;
                return Ok(Some(self.current_line()));
            }
            self.position = self.filled;
        }

        // Unterminated trailing fragment
        if !self.line.is_empty() {
            self.line_number += 1;
            return Ok(Some(self.current_line()));
        }
        Ok(None)
    }

    fn current_line(&self) -> Line<'_> {
        Line {
            number: self.line_number,
            bytes: &self.line,
        }
    }

    /// Refills the chunk buffer, returning false once the source is exhausted
    fn fill_chunk(&mut self) -> Result<bool> {
        loop {
            match self.reader.read(&mut self.chunk) {
                Ok(0) => {
                    self.eof_reached = true;
                    return Ok(false);
                }
                Ok(bytes_read) => {
                    self.filled = bytes_read;
                    self.position = 0;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
