//! UTF-16 unit classification and surrogate pair arithmetic.

/// Returns `true` if `unit` stands for itself as a code point.
///
/// Only the surrogate block `0xD800..=0xDFFF` is excluded, so units in
/// `0x8000..=0xD7FF` (Hangul syllables among them) are BMP characters.
#[inline]
pub fn is_bmp(unit: u16) -> bool {
    !matches!(unit, 0xD800..=0xDFFF)
}

/// Returns `true` for the first half of a surrogate pair.
#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Returns `true` for the second half of a surrogate pair.
#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Combines a surrogate pair into the code point it encodes.
///
/// Returns `None` unless `high` is a high surrogate and `low` a low one.
///
/// # Example
///
/// ```
/// use tss_tstring::transcoder::combine_surrogates;
///
/// assert_eq!(combine_surrogates(0xD800, 0xDF48), Some(0x10348));
/// assert_eq!(combine_surrogates(0xDF48, 0xD800), None);
/// ```
#[inline]
pub fn combine_surrogates(high: u16, low: u16) -> Option<u32> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return None;
    }
    let (high, low) = (u32::from(high), u32::from(low));
    // The plane lives in bits 6..10 of the high unit, stored minus one.
    let plane = ((high >> 6) & 0xF) + 1;
    let rest = ((high & 0x3F) << 10) | (low & 0x3FF);
    Some((plane << 16) | rest)
}

/// Splits a supplementary code point into its surrogate pair.
///
/// Returns `None` for code points outside `0x10000..=0x10FFFF`.
#[inline]
pub fn split_surrogates(code_point: u32) -> Option<(u16, u16)> {
    if !(0x1_0000..=0x10_FFFF).contains(&code_point) {
        return None;
    }
    let plane = ((code_point >> 16) & 0x1F) - 1;
    let rest = code_point & 0xFFFF;
    let high = 0xD800 + (plane << 6) + (rest >> 10);
    let low = 0xDC00 + (rest & 0x3FF);
    Some((high as u16, low as u16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(is_bmp(0x0041));
        assert!(is_bmp(0x8000));
        assert!(is_bmp(0xAC00));
        assert!(is_bmp(0xD7FF));
        assert!(!is_bmp(0xD800));
        assert!(!is_bmp(0xDFFF));
        assert!(is_bmp(0xE000));
        assert!(is_bmp(0xFFFF));

        assert!(is_high_surrogate(0xD800));
        assert!(is_high_surrogate(0xDBFF));
        assert!(!is_high_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDFFF));
        assert!(!is_low_surrogate(0xDBFF));
    }

    #[test]
    fn test_combine_bounds() {
        assert_eq!(combine_surrogates(0xD800, 0xDC00), Some(0x1_0000));
        assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), Some(0x10_FFFF));
        assert_eq!(combine_surrogates(0xD83D, 0xDE00), Some(0x1_F600));
        assert_eq!(combine_surrogates(0xD800, 0x0041), None);
    }

    #[test]
    fn test_split_bounds() {
        assert_eq!(split_surrogates(0x1_0000), Some((0xD800, 0xDC00)));
        assert_eq!(split_surrogates(0x10_FFFF), Some((0xDBFF, 0xDFFF)));
        assert_eq!(split_surrogates(0x1_0348), Some((0xD800, 0xDF48)));
        assert_eq!(split_surrogates(0xFFFF), None);
        assert_eq!(split_surrogates(0x11_0000), None);
    }
}
