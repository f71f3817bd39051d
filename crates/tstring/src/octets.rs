//! Hex dumps of byte buffers for diagnostics.

use std::fmt::{self, Write};

/// Number of bytes shown by [`print_octets_default`] and `Debug` output.
pub const DEFAULT_MAX_OCTETS: usize = 16;

/// Lazily formatted hex dump of at most `max` bytes.
///
/// Bytes are printed as lowercase pairs separated by spaces. Anything past
/// `max` is summarized as `... (N more)`.
#[derive(Clone, Copy)]
pub struct Octets<'a> {
    bytes: &'a [u8],
    max: usize,
}

impl<'a> Octets<'a> {
    pub fn new(bytes: &'a [u8], max: usize) -> Self {
        Self { bytes, max }
    }
}

impl fmt::Display for Octets<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().take(self.max).enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{byte:02x}")?;
        }
        if self.bytes.len() > self.max {
            write!(f, "... ({} more)", self.bytes.len() - self.max)?;
        }
        Ok(())
    }
}

/// Formats up to `max` bytes of `octets` as a hex string.
///
/// # Example
///
/// ```
/// use tss_tstring::print_octets;
///
/// assert_eq!(print_octets(&[0x48, 0x69, 0x0d, 0x0a], 16), "48 69 0d 0a");
/// assert_eq!(print_octets(&[1, 2, 3], 2), "01 02... (1 more)");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    Octets::new(octets, max).to_string()
}

/// [`print_octets`] with the default limit of 16 bytes.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, DEFAULT_MAX_OCTETS)
}
