//! Stateless conversion between UTF-16 code units and UTF-8 bytes.
//!
//! Encoding accepts any well-paired UTF-16 input and emits UTF-8, using the
//! legacy 5- and 6-byte forms for code points up to `0x7FFF_FFFF`. Decoding
//! accepts the same 1-6 byte forms and fails on the first malformed byte;
//! there is no lossy mode.

mod decode;
mod encode;
mod surrogate;

pub use decode::{decode, decode_all, sequence_len};
pub use encode::{
    code_points, encode, encoded_len, utf8_len, write_code_point, CodePoints, MAX_CODE_POINT,
};
pub use surrogate::{
    combine_surrogates, is_bmp, is_high_surrogate, is_low_surrogate, split_surrogates,
};
