//! UTF-8 byte string addressed by byte offset.

use std::cell::Ref;
use std::fmt;

use crate::octets::{Octets, DEFAULT_MAX_OCTETS};
use crate::transcoder;
use crate::{DecodeError, EncodeError, SharedBytes, WriteError};

mod scan;

/// A view over a range of [`SharedBytes`] holding (usually) UTF-8 text.
///
/// Offsets taken by every method are relative to the start of the view.
/// Views produced by [`ByteString::from_shared`] and [`ByteString::slice`]
/// alias their storage: [`set_at`](Self::set_at) through one view is
/// visible through every other view covering the same byte. The length of
/// a view never changes.
///
/// Bytes wrapped with `from_shared` are not validated; malformed UTF-8 is
/// reported only when the view is decoded.
///
/// # Example
///
/// ```
/// use tss_tstring::ByteString;
///
/// let s = ByteString::from("key: value\r\nnext");
/// assert_eq!(s.find(0, b':'), Some(3));
/// assert_eq!(s.count_line(0), 10);
/// assert_eq!(s.count_line_delimiter(10), 2);
///
/// let value = s.slice(5, 10);
/// assert_eq!(value.to_std_string().unwrap(), "value");
/// value.set_at(0, b'V').unwrap();
/// assert_eq!(s.at(5), Some(b'V'));
/// ```
#[derive(Clone)]
pub struct ByteString {
    bytes: SharedBytes,
    start: usize,
    len: usize,
}

impl ByteString {
    /// Encodes UTF-16 `units` into newly allocated storage.
    pub fn from_utf16(units: &[u16]) -> Result<Self, EncodeError> {
        Ok(Self::from(transcoder::encode(units)?))
    }

    /// Wraps `bytes` without copying or validating them.
    pub fn from_shared(bytes: &SharedBytes) -> Self {
        Self {
            bytes: bytes.clone(),
            start: 0,
            len: bytes.len(),
        }
    }

    /// The storage this view refers to.
    pub fn storage(&self) -> &SharedBytes {
        &self.bytes
    }

    /// Borrows the bytes of this view for the duration of one call.
    pub(crate) fn bytes(&self) -> Ref<'_, [u8]> {
        let (start, end) = (self.start, self.start + self.len);
        Ref::map(self.bytes.borrow(), |bytes| &bytes[start..end])
    }

    /// Copies the bytes of this view out.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes().to_vec()
    }

    pub fn byte_length(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the byte at `offset`, or `None` past the end.
    pub fn at(&self, offset: usize) -> Option<u8> {
        if offset >= self.len {
            return None;
        }
        self.bytes.get(self.start + offset)
    }

    /// Overwrites the byte at `offset` in the shared storage.
    pub fn set_at(&self, offset: usize, byte: u8) -> Result<(), WriteError> {
        if offset >= self.len {
            return Err(WriteError::OutOfBounds {
                offset,
                len: self.len,
            });
        }
        self.bytes.set(self.start + offset, byte)
    }

    /// Returns the byte at `offset` as a single UTF-16 unit.
    ///
    /// No decoding takes place: a lead or continuation byte of a multi-byte
    /// sequence comes back as a unit in `0x80..=0xFF`.
    pub fn char_at(&self, offset: usize) -> Option<u16> {
        self.at(offset).map(u16::from)
    }

    /// Returns a view of `[begin, end)` sharing this view's storage.
    ///
    /// Both bounds are clamped to the view length and `end < begin` yields
    /// an empty view.
    pub fn slice(&self, begin: usize, end: usize) -> ByteString {
        let end = end.min(self.len);
        let begin = begin.min(end);
        Self {
            bytes: self.bytes.clone(),
            start: self.start + begin,
            len: end - begin,
        }
    }

    /// Decodes `size` bytes starting at `offset` into UTF-16 units.
    ///
    /// The range is clamped to the view. A sequence cut by the end of the
    /// range is an error, never silently dropped.
    pub fn decode(&self, offset: usize, size: usize) -> Result<Vec<u16>, DecodeError> {
        transcoder::decode(&self.bytes(), offset, size)
    }

    /// Decodes the whole view into UTF-16 units.
    pub fn to_utf16(&self) -> Result<Vec<u16>, DecodeError> {
        self.decode(0, self.len)
    }

    /// Decodes the whole view into a `String`.
    ///
    /// Fails with [`DecodeError::LoneSurrogate`] if the bytes spell a
    /// surrogate directly, as UTF-16 units allow but `String` does not.
    pub fn to_std_string(&self) -> Result<String, DecodeError> {
        let units = self.to_utf16()?;
        let mut out = String::with_capacity(self.len);
        let mut index = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(c) => {
                    out.push(c);
                    index += c.len_utf16();
                }
                Err(err) => {
                    return Err(DecodeError::LoneSurrogate {
                        index,
                        unit: err.unpaired_surrogate(),
                    });
                }
            }
        }
        Ok(out)
    }
}

impl From<&str> for ByteString {
    /// Copies the UTF-8 bytes of `text`; identical to encoding its UTF-16 form.
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from(SharedBytes::from(bytes))
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self::from(SharedBytes::from(bytes))
    }
}

impl From<SharedBytes> for ByteString {
    fn from(bytes: SharedBytes) -> Self {
        Self::from_shared(&bytes)
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        *self.bytes() == *other.bytes()
    }
}

impl Eq for ByteString {}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.bytes();
        write!(
            f,
            "ByteString[{}..{}]({})",
            self.start,
            self.start + self.len,
            Octets::new(&bytes, DEFAULT_MAX_OCTETS)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_from_utf16_owns_new_storage() {
        let units = utf16("A€𐍈");
        let s = ByteString::from_utf16(&units).unwrap();
        assert_eq!(
            s.to_vec(),
            vec![0x41, 0xE2, 0x82, 0xAC, 0xF0, 0x90, 0x8D, 0x88]
        );
        assert_eq!(s.byte_length(), 8);
        assert_eq!(s.to_utf16().unwrap(), units);
    }

    #[test]
    fn test_from_utf16_rejects_lone_surrogate() {
        assert_eq!(
            ByteString::from_utf16(&[0x61, 0xDC00]),
            Err(EncodeError::UnpairedLowSurrogate {
                index: 1,
                unit: 0xDC00
            })
        );
    }

    #[test]
    fn test_from_shared_does_not_copy() {
        let storage = SharedBytes::from(b"abc".to_vec());
        let s = ByteString::from_shared(&storage);
        assert!(s.storage().ptr_eq(&storage));
        storage.set(1, b'X').unwrap();
        assert_eq!(s.at(1), Some(b'X'));
        s.set_at(2, b'Y').unwrap();
        assert_eq!(storage.to_vec(), b"aXY");
    }

    #[test]
    fn test_from_shared_defers_validation() {
        let s = ByteString::from(vec![0x61, 0xFF]);
        assert_eq!(s.byte_length(), 2);
        assert_eq!(s.at(1), Some(0xFF));
        assert_eq!(
            s.to_utf16(),
            Err(DecodeError::InvalidLeadByte {
                offset: 1,
                byte: 0xFF
            })
        );
    }

    #[test]
    fn test_accessors_out_of_range() {
        let s = ByteString::from("ab");
        assert_eq!(s.at(2), None);
        assert_eq!(s.char_at(2), None);
        assert_eq!(
            s.set_at(2, b'c'),
            Err(WriteError::OutOfBounds { offset: 2, len: 2 })
        );
        assert_eq!(s.to_vec(), b"ab");
    }

    #[test]
    fn test_char_at_is_not_decoding() {
        let s = ByteString::from("é");
        assert_eq!(s.char_at(0), Some(0xC3));
        assert_eq!(s.char_at(1), Some(0xA9));
    }

    #[test]
    fn test_slice_is_view() {
        let s = ByteString::from("hello world");
        let word = s.slice(6, 11);
        assert_eq!(word.to_std_string().unwrap(), "world");
        word.set_at(0, b'W').unwrap();
        assert_eq!(s.at(6), Some(b'W'));
        s.set_at(10, b'D').unwrap();
        assert_eq!(word.at(4), Some(b'D'));
        assert!(word.storage().ptr_eq(s.storage()));
    }

    #[test]
    fn test_slice_clamps() {
        let s = ByteString::from("abcdef");
        assert_eq!(s.slice(2, 100).to_vec(), b"cdef");
        assert!(s.slice(4, 2).is_empty());
        assert!(s.slice(10, 20).is_empty());
        let inner = s.slice(1, 5).slice(1, 10);
        assert_eq!(inner.to_vec(), b"cde");
        assert_eq!(inner.at(3), None);
    }

    #[test]
    fn test_slice_write_bounded_by_view() {
        let s = ByteString::from("abcdef");
        let mid = s.slice(2, 4);
        assert_eq!(
            mid.set_at(2, b'z'),
            Err(WriteError::OutOfBounds { offset: 2, len: 2 })
        );
        assert_eq!(s.to_vec(), b"abcdef");
    }

    #[test]
    fn test_decode_range() {
        let s = ByteString::from("a€b");
        assert_eq!(s.decode(1, 3).unwrap(), vec![0x20AC]);
        assert_eq!(s.decode(4, 10).unwrap(), vec![0x62]);
        assert_eq!(
            s.decode(0, 3),
            Err(DecodeError::Truncated {
                offset: 1,
                expected: 3
            })
        );
        // Offsets inside a slice are relative to the slice.
        assert_eq!(
            s.slice(1, 3).to_utf16(),
            Err(DecodeError::Truncated {
                offset: 0,
                expected: 3
            })
        );
    }

    #[test]
    fn test_to_std_string_lone_surrogate() {
        let s = ByteString::from(vec![0x61, 0xED, 0xA0, 0x80]);
        assert_eq!(s.to_utf16().unwrap(), vec![0x61, 0xD800]);
        assert_eq!(
            s.to_std_string(),
            Err(DecodeError::LoneSurrogate {
                index: 1,
                unit: 0xD800
            })
        );
    }

    #[test]
    fn test_slice_write_while_parent_borrowed() {
        let s = ByteString::from("abcdef");
        let tail = s.slice(3, 6);
        let held = s.bytes();
        assert_eq!(tail.set_at(0, b'X'), Err(WriteError::Busy { offset: 3 }));
        drop(held);
        tail.set_at(0, b'X').unwrap();
        assert_eq!(s.to_vec(), b"abcXef");
    }

    #[test]
    fn test_eq_compares_content() {
        let a = ByteString::from("xabcx").slice(1, 4);
        let b = ByteString::from("abc");
        assert_eq!(a, b);
        assert_ne!(a, ByteString::from("abd"));
    }

    #[test]
    fn test_debug() {
        let s = ByteString::from("xHi").slice(1, 3);
        assert_eq!(format!("{s:?}"), "ByteString[1..3](48 69)");
    }
}
