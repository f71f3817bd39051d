//! Error types for transcoding and buffer access.

use thiserror::Error;

/// Error raised while turning UTF-16 code units into UTF-8 bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A high surrogate was the last unit of the input.
    #[error("unpaired high surrogate {unit:#06x} at unit {index}")]
    UnpairedHighSurrogate { index: usize, unit: u16 },
    /// A high surrogate was followed by something other than a low surrogate.
    #[error("invalid surrogate pair ({high:#06x}, {low:#06x}) at unit {index}")]
    InvalidSurrogatePair { index: usize, high: u16, low: u16 },
    /// A low surrogate appeared without a preceding high surrogate.
    #[error("unpaired low surrogate {unit:#06x} at unit {index}")]
    UnpairedLowSurrogate { index: usize, unit: u16 },
    /// Code point outside the 31-bit range UTF-8 can carry.
    #[error("invalid code point {0:#x}")]
    InvalidCodePoint(u32),
}

/// Error raised while turning UTF-8 bytes back into UTF-16 code units.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Byte cannot start a sequence (`0x80..=0xC1` or `0xFE..=0xFF`).
    #[error("invalid UTF-8 lead byte {byte:#04x} at offset {offset}")]
    InvalidLeadByte { offset: usize, byte: u8 },
    /// Byte inside a sequence is not of the form `10xxxxxx`.
    #[error("invalid UTF-8 continuation byte {byte:#04x} at offset {offset}")]
    InvalidContinuationByte { offset: usize, byte: u8 },
    /// The range ended before the sequence starting at `offset` was complete.
    #[error("truncated {expected}-byte UTF-8 sequence at offset {offset}")]
    Truncated { offset: usize, expected: usize },
    /// A legacy 4-6 byte form decoded to a value UTF-16 cannot express.
    #[error("code point {value:#x} at offset {offset} is not representable in UTF-16")]
    Unrepresentable { offset: usize, value: u32 },
    /// Decoded units hold a surrogate outside a pair, so no `String` exists.
    #[error("lone surrogate {unit:#06x} at unit {index}")]
    LoneSurrogate { index: usize, unit: u16 },
}

/// Error raised by a single-byte write into shared storage.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// The offset lies outside the view or storage.
    #[error("offset {offset} out of bounds for length {len}")]
    OutOfBounds { offset: usize, len: usize },
    /// The storage is borrowed for reading, so the write was refused.
    #[error("write at offset {offset} refused while the storage is borrowed")]
    Busy { offset: usize },
}
