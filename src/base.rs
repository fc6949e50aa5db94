//! Digit decoder and arbitrary-base digit array converter.

/// An error returned when a digit character is not valid in the requested base.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct InvalidDigit;

/// An error returned when the converted value does not fit in the destination buffer.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct DestinationTooSmall;

/// An O(1) map from ASCII code points to Base36 digit values; `0xff` marks invalid characters.
const DECODE_MAP: [u8; 256] = {
    let mut map = [0xffu8; 256];
    let mut i = 0;
    while i < 10 {
        map[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 26 {
        map[b'a' as usize + i] = 10 + i as u8;
        map[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    map
};

/// Converts from a string of digit characters to an array of digit values.
///
/// # Panics
///
/// Panics if `base` is not in `2..=36` or if `src` and `dst` differ in length.
pub(crate) fn decode_digit_chars(
    src: &[u8],
    dst: &mut [u8],
    base: u8,
) -> Result<(), InvalidDigit> {
    assert!((2..=36).contains(&base), "invalid base");
    assert_eq!(src.len(), dst.len(), "invalid length of dst slice");
    for (d, &c) in dst.iter_mut().zip(src) {
        *d = DECODE_MAP[c as usize];
        if *d >= base {
            return Err(InvalidDigit);
        }
    }
    Ok(())
}

/// Converts a digit value array in `src_base` to that in `dst_base`.
///
/// `src` is read as a big-endian number and its value is written right-justified into `dst`,
/// padded with leading zeros.
///
/// # Panics
///
/// Panics if either base is not in `2..=256` or if `src` contains a digit not less than
/// `src_base`.
pub(crate) fn convert_base(
    src: &[u8],
    dst: &mut [u8],
    src_base: usize,
    dst_base: usize,
) -> Result<(), DestinationTooSmall> {
    assert!(
        (2..=256).contains(&src_base) && (2..=256).contains(&dst_base),
        "invalid base"
    );

    // determine the number of `src` digits to read for each outer loop
    let mut word_len = 1;
    let mut word_base = src_base;
    while word_base <= usize::MAX / (src_base * dst_base) {
        word_len += 1;
        word_base *= src_base;
    }

    dst.fill(0);

    if src.is_empty() {
        return Ok(());
    } else if dst.is_empty() {
        return Err(DestinationTooSmall);
    }

    let mut dst_used = dst.len() - 1; // storage to memorize range of `dst` filled

    // read `word_len` digits from `src` for each outer loop; the leading word may be shorter
    for word in src.rchunks(word_len).rev() {
        let mut carry = word.iter().fold(0, |acc, &e| {
            let e = e as usize;
            assert!(e < src_base, "invalid src digit");
            acc * src_base + e
        });

        // fill in `dst` from right to left, while carrying up prior result to left
        for i in (0..dst.len()).rev() {
            carry += dst[i] as usize * word_base;
            dst[i] = (carry % dst_base) as u8;
            carry /= dst_base;

            // break inner loop when `carry` and remaining `dst` digits are all zero
            if carry == 0 && i <= dst_used {
                dst_used = i;
                break;
            }
        }

        if carry > 0 {
            return Err(DestinationTooSmall);
        }
    }
    Ok(())
}
