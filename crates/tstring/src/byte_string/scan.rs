//! Containment tests, byte search and line scanning.
//!
//! None of these fail: an offset or needle reaching past the end of the
//! view simply stops matching.

use super::ByteString;
use crate::transcoder;
use crate::EncodeError;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

impl ByteString {
    /// Returns `true` if `needle` occurs byte for byte at `offset`.
    ///
    /// An empty needle matches everywhere.
    pub fn contain_bytes(&self, offset: usize, needle: &[u8]) -> bool {
        match self.bytes().get(offset..) {
            Some(rest) => rest.starts_with(needle),
            None => needle.is_empty(),
        }
    }

    /// Encodes `units` and checks whether the result occurs at `offset`.
    ///
    /// Only the encoding can fail; the comparison itself never does.
    pub fn contain_utf16(&self, offset: usize, units: &[u16]) -> Result<bool, EncodeError> {
        let needle = transcoder::encode(units)?;
        Ok(self.contain_bytes(offset, &needle))
    }

    /// Returns `true` if the UTF-8 form of `text` occurs at `offset`.
    pub fn contain_str(&self, offset: usize, text: &str) -> bool {
        self.contain_bytes(offset, text.as_bytes())
    }

    /// Compares each char of `ascii` directly against one byte at `offset`.
    ///
    /// Skips the encoding step, so it agrees with [`contain_str`] only for
    /// ASCII input. A char above `0x7F` never matches a multi-byte sequence.
    ///
    /// [`contain_str`]: Self::contain_str
    pub fn contain_ascii(&self, offset: usize, ascii: &str) -> bool {
        let bytes = self.bytes();
        ascii.chars().enumerate().all(|(i, c)| {
            offset
                .checked_add(i)
                .and_then(|at| bytes.get(at))
                .is_some_and(|&byte| u32::from(byte) == u32::from(c))
        })
    }

    /// Returns the first offset at or after `offset` holding `byte`.
    pub fn find(&self, offset: usize, byte: u8) -> Option<usize> {
        let bytes = self.bytes();
        let rest = bytes.get(offset..)?;
        memchr::memchr(byte, rest).map(|pos| offset + pos)
    }

    /// Counts the bytes from `offset` up to the first CR or LF, or to the
    /// end of the view.
    pub fn count_line(&self, offset: usize) -> usize {
        match self.bytes().get(offset..) {
            Some(rest) => memchr::memchr2(CR, LF, rest).unwrap_or(rest.len()),
            None => 0,
        }
    }

    /// Returns the length of the line delimiter at `offset`.
    ///
    /// CRLF counts 2, a lone CR or LF counts 1, anything else (including
    /// an offset past the end) counts 0.
    pub fn count_line_delimiter(&self, offset: usize) -> usize {
        match self.bytes().get(offset..) {
            Some([CR, LF, ..]) => 2,
            Some([CR | LF, ..]) => 1,
            _ => 0,
        }
    }

    /// Returns the position of the letter at `offset` in the Latin
    /// alphabet (`A`/`a` is 0, `Z`/`z` is 25).
    pub fn alphabet_index(&self, offset: usize) -> Option<u8> {
        match self.at(offset)? {
            byte @ b'A'..=b'Z' => Some(byte - b'A'),
            byte @ b'a'..=b'z' => Some(byte - b'a'),
            _ => None,
        }
    }
}
