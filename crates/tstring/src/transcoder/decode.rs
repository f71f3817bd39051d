//! UTF-8 to UTF-16 decoding with strict validation.

use super::surrogate::split_surrogates;
use crate::DecodeError;

/// Returns the length of the sequence introduced by `lead`, or `None` if
/// the byte cannot start a sequence.
///
/// Continuation bytes, the overlong leads `0xC0`/`0xC1` and `0xFE`/`0xFF`
/// are rejected. The legacy leads `0xF8..=0xFD` introduce 5- and 6-byte
/// forms.
pub fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0x80..=0xC1 => None,
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        0xF8..=0xFB => Some(5),
        0xFC..=0xFD => Some(6),
        0xFE..=0xFF => None,
    }
}

fn reject(err: DecodeError) -> DecodeError {
    tracing::debug!(%err, "rejected UTF-8 input");
    err
}

/// Decodes `size` bytes of `bytes` starting at `offset` into UTF-16 units.
///
/// The range is clamped to the end of `bytes`. Decoded values below
/// `0x10000` become one unit each, even inside the surrogate block;
/// supplementary values become a surrogate pair. Error offsets are
/// relative to the start of `bytes`.
///
/// The legacy 5- and 6-byte forms are accepted, but only values below
/// `0x110000` decode; anything larger fails with
/// [`DecodeError::Unrepresentable`].
///
/// # Example
///
/// ```
/// use tss_tstring::transcoder::decode;
/// use tss_tstring::DecodeError;
///
/// let bytes = [0x41, 0xE2, 0x82, 0xAC];
/// assert_eq!(decode(&bytes, 0, 4), Ok(vec![0x41, 0x20AC]));
/// assert_eq!(
///     decode(&bytes, 0, 3),
///     Err(DecodeError::Truncated { offset: 1, expected: 3 })
/// );
/// ```
#[tracing::instrument(level = "trace", skip(bytes), fields(len = bytes.len()))]
pub fn decode(bytes: &[u8], offset: usize, size: usize) -> Result<Vec<u16>, DecodeError> {
    let start = offset.min(bytes.len());
    let end = offset.saturating_add(size).min(bytes.len());
    let mut units = Vec::with_capacity(end.saturating_sub(start));
    let mut x = start;
    while x < end {
        let lead = bytes[x];
        if lead < 0x80 {
            units.push(u16::from(lead));
            x += 1;
            continue;
        }
        let len = sequence_len(lead).ok_or_else(|| {
            reject(DecodeError::InvalidLeadByte {
                offset: x,
                byte: lead,
            })
        })?;
        let mut value = u32::from(lead & (0x7F >> len));
        for at in x + 1..x + len {
            if at >= end {
                return Err(reject(DecodeError::Truncated {
                    offset: x,
                    expected: len,
                }));
            }
            let byte = bytes[at];
            if !(0x80..=0xBF).contains(&byte) {
                return Err(reject(DecodeError::InvalidContinuationByte { offset: at, byte }));
            }
            value = (value << 6) | u32::from(byte & 0x3F);
        }
        if value < 0x1_0000 {
            units.push(value as u16);
        } else {
            let (high, low) = split_surrogates(value)
                .ok_or_else(|| reject(DecodeError::Unrepresentable { offset: x, value }))?;
            units.push(high);
            units.push(low);
        }
        x += len;
    }
    Ok(units)
}

/// Decodes the whole of `bytes`.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<u16>, DecodeError> {
    decode(bytes, 0, bytes.len())
}
