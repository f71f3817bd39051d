//! Binary-safe UTF-8 string with UTF-16 interop.
//!
//! Text is stored as UTF-8 bytes so tokenizers and line scanners can work on
//! byte offsets, while conversion to and from UTF-16 code units happens only
//! at the edges.
//!
//! # Overview
//!
//! - [`transcoder`] - UTF-16 ↔ UTF-8 conversion, including the legacy 5- and
//!   6-byte UTF-8 forms
//! - [`ByteString`] - a view over shared bytes with offset-based inspection
//! - [`SharedBytes`] - the reference-counted storage views alias
//!
//! # Example
//!
//! ```
//! use tss_tstring::ByteString;
//!
//! let units: Vec<u16> = "GET /index\r\n".encode_utf16().collect();
//! let line = ByteString::from_utf16(&units).unwrap();
//!
//! assert!(line.contain_ascii(0, "GET "));
//! let end = line.count_line(0);
//! assert_eq!(line.count_line_delimiter(end), 2);
//! assert_eq!(line.slice(4, end).to_std_string().unwrap(), "/index");
//! ```

mod byte_string;
mod error;
mod octets;
mod shared;

pub mod transcoder;

pub use byte_string::ByteString;
pub use error::{DecodeError, EncodeError, WriteError};
pub use octets::{print_octets, print_octets_default, Octets};
pub use shared::SharedBytes;
