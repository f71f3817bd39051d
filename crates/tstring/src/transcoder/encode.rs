//! UTF-16 to UTF-8 encoding, including the legacy 5- and 6-byte forms.

use std::iter::FusedIterator;

use super::surrogate::{combine_surrogates, is_bmp, is_high_surrogate};
use crate::EncodeError;

/// Upper bound (exclusive) of the code points UTF-8 can carry.
pub const MAX_CODE_POINT: u32 = 0x8000_0000;

/// Returns the number of UTF-8 bytes needed for `code_point`.
///
/// # Example
///
/// ```
/// use tss_tstring::transcoder::utf8_len;
///
/// assert_eq!(utf8_len(0x41), Ok(1));
/// assert_eq!(utf8_len(0x20AC), Ok(3));
/// assert_eq!(utf8_len(0x7FFF_FFFF), Ok(6));
/// assert!(utf8_len(0x8000_0000).is_err());
/// ```
pub fn utf8_len(code_point: u32) -> Result<usize, EncodeError> {
    match code_point {
        0..=0x7F => Ok(1),
        0x80..=0x7FF => Ok(2),
        0x800..=0xFFFF => Ok(3),
        0x1_0000..=0x1F_FFFF => Ok(4),
        0x20_0000..=0x3FF_FFFF => Ok(5),
        code_point if code_point < MAX_CODE_POINT => Ok(6),
        _ => Err(EncodeError::InvalidCodePoint(code_point)),
    }
}

/// Writes `code_point` at the start of `buf` and returns the bytes written.
///
/// # Panics
///
/// Panics if `buf` is shorter than [`utf8_len`] of the code point.
pub fn write_code_point(buf: &mut [u8], code_point: u32) -> Result<usize, EncodeError> {
    let len = utf8_len(code_point)?;
    if len == 1 {
        buf[0] = code_point as u8;
        return Ok(1);
    }
    // Lead byte: `len` one bits, a zero bit, then the top payload bits.
    let marker = !(0xFFu8 >> len);
    let payload_bits = 6 * (len - 1);
    buf[0] = marker | (code_point >> payload_bits) as u8;
    for (i, byte) in buf[1..len].iter_mut().enumerate() {
        let shift = payload_bits - 6 * (i + 1);
        *byte = 0x80 | ((code_point >> shift) & 0x3F) as u8;
    }
    Ok(len)
}

/// Iterator over the code points of a UTF-16 unit sequence.
///
/// Surrogate pairs are joined. Unpaired surrogates yield an error, after
/// which the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    units: &'a [u16],
    index: usize,
}

/// Iterates the code points of `units`.
pub fn code_points(units: &[u16]) -> CodePoints<'_> {
    CodePoints { units, index: 0 }
}

impl Iterator for CodePoints<'_> {
    type Item = Result<u32, EncodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let unit = *self.units.get(index)?;
        self.index += 1;
        if is_bmp(unit) {
            return Some(Ok(u32::from(unit)));
        }
        let result = if !is_high_surrogate(unit) {
            Err(EncodeError::UnpairedLowSurrogate { index, unit })
        } else {
            match self.units.get(self.index) {
                None => Err(EncodeError::UnpairedHighSurrogate { index, unit }),
                Some(&low) => {
                    self.index += 1;
                    combine_surrogates(unit, low).ok_or(EncodeError::InvalidSurrogatePair {
                        index,
                        high: unit,
                        low,
                    })
                }
            }
        };
        if result.is_err() {
            self.index = self.units.len();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.index;
        // An error ends iteration early, so only one item is guaranteed.
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for CodePoints<'_> {}

/// Counts the UTF-8 bytes `units` will occupy once encoded.
pub fn encoded_len(units: &[u16]) -> Result<usize, EncodeError> {
    code_points(units).try_fold(0, |total, code_point| Ok(total + utf8_len(code_point?)?))
}

/// Encodes UTF-16 `units` into a freshly allocated UTF-8 buffer.
///
/// The input is measured first, so an error is reported before any byte
/// is written.
///
/// # Example
///
/// ```
/// use tss_tstring::transcoder::encode;
///
/// let units: Vec<u16> = "A€𐍈".encode_utf16().collect();
/// assert_eq!(
///     encode(&units).unwrap(),
///     vec![0x41, 0xE2, 0x82, 0xAC, 0xF0, 0x90, 0x8D, 0x88]
/// );
/// assert!(encode(&[0xDC00]).is_err());
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(units = units.len()))]
pub fn encode(units: &[u16]) -> Result<Vec<u8>, EncodeError> {
    let len = encoded_len(units).inspect_err(|err| {
        tracing::debug!(%err, "rejected UTF-16 input");
    })?;
    let mut buf = vec![0u8; len];
    let mut x = 0;
    for code_point in code_points(units) {
        x += write_code_point(&mut buf[x..], code_point?)?;
    }
    debug_assert_eq!(x, len);
    Ok(buf)
}
