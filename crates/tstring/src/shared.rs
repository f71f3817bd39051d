//! Reference-counted byte storage that several views can alias.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::octets::{Octets, DEFAULT_MAX_OCTETS};
use crate::WriteError;

/// Fixed-length byte storage shared by handle.
///
/// Cloning a `SharedBytes` clones the handle, not the bytes: every clone,
/// and every [`ByteString`](crate::ByteString) built over it, observes the
/// same storage. A write through one handle is visible through all of them.
///
/// The storage is single-threaded (`!Send`, `!Sync`). Copy it out with
/// [`to_vec`](Self::to_vec) to hand bytes to another thread.
///
/// # Example
///
/// ```
/// use tss_tstring::SharedBytes;
///
/// let a = SharedBytes::from(b"abc".to_vec());
/// let b = a.clone();
/// b.set(0, b'x').unwrap();
/// assert_eq!(a.to_vec(), b"xbc");
/// ```
#[derive(Clone, Default)]
pub struct SharedBytes {
    cells: Rc<RefCell<Box<[u8]>>>,
}

impl SharedBytes {
    /// Allocates `len` zeroed bytes.
    pub fn zeroed(len: usize) -> Self {
        Self::from(vec![0u8; len])
    }

    /// Storage length in bytes. Never changes after creation.
    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the byte at `offset`.
    pub fn get(&self, offset: usize) -> Option<u8> {
        self.cells.borrow().get(offset).copied()
    }

    /// Overwrites the byte at `offset`.
    ///
    /// Never panics: a write that would conflict with an outstanding read
    /// borrow fails with [`WriteError::Busy`].
    pub fn set(&self, offset: usize, byte: u8) -> Result<(), WriteError> {
        let mut cells = self
            .cells
            .try_borrow_mut()
            .map_err(|_| WriteError::Busy { offset })?;
        let len = cells.len();
        let slot = cells.get_mut(offset).ok_or(WriteError::OutOfBounds { offset, len })?;
        *slot = byte;
        Ok(())
    }

    /// Borrows the bytes for reading.
    ///
    /// Crate-internal: every caller drops the guard before returning, and
    /// writes never hold a borrow, so the read side cannot panic.
    pub(crate) fn borrow(&self) -> Ref<'_, [u8]> {
        Ref::map(self.cells.borrow(), |cells| &**cells)
    }

    /// Copies the bytes out.
    pub fn to_vec(&self) -> Vec<u8> {
        self.borrow().to_vec()
    }

    /// Returns `true` if both handles refer to the same storage.
    pub fn ptr_eq(&self, other: &SharedBytes) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }
}

impl From<Vec<u8>> for SharedBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            cells: Rc::new(RefCell::new(bytes.into_boxed_slice())),
        }
    }
}

impl From<&[u8]> for SharedBytes {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl FromIterator<u8> for SharedBytes {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<u8>>())
    }
}

impl fmt::Debug for SharedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.borrow();
        write!(f, "SharedBytes[{}]({})", bytes.len(), Octets::new(&bytes, DEFAULT_MAX_OCTETS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_aliases_storage() {
        let a = SharedBytes::from(vec![1, 2, 3]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        a.set(2, 9).unwrap();
        assert_eq!(b.get(2), Some(9));
    }

    #[test]
    fn test_from_slice_copies() {
        let source = [1u8, 2, 3];
        let a = SharedBytes::from(&source[..]);
        let b = SharedBytes::from(&source[..]);
        assert!(!a.ptr_eq(&b));
        a.set(0, 7).unwrap();
        assert_eq!(b.get(0), Some(1));
    }

    #[test]
    fn test_out_of_bounds() {
        let a = SharedBytes::zeroed(2);
        assert_eq!(a.get(2), None);
        assert_eq!(a.set(2, 1), Err(WriteError::OutOfBounds { offset: 2, len: 2 }));
        assert_eq!(a.to_vec(), vec![0, 0]);
    }

    #[test]
    fn test_write_during_read_borrow_is_refused() {
        let a = SharedBytes::from(b"abc".to_vec());
        let alias = a.clone();
        let held = a.borrow();
        assert_eq!(alias.set(1, b'X'), Err(WriteError::Busy { offset: 1 }));
        drop(held);
        alias.set(1, b'X').unwrap();
        assert_eq!(a.to_vec(), b"aXc");
    }

    #[test]
    fn test_debug() {
        let a: SharedBytes = b"Hi".iter().copied().collect();
        assert_eq!(format!("{a:?}"), "SharedBytes[2](48 69)");
    }
}
