use smallvec::SmallVec;

/// Converts a `u64` to its unsigned LEB128 digits.
///
/// # Arguments
///
/// * `num: u64` - The integer to be converted.
///
/// # Example
///
/// ```
/// use syrup::util::u64_to_uleb128;
///
/// let digits = u64_to_uleb128(624_485);
///
/// assert_eq!(digits.as_slice(), &[0xE5, 0x8E, 0x26]);
/// ```
pub fn u64_to_uleb128(mut num: u64) -> SmallVec<[u8; 10]> {
    let mut out = SmallVec::new();
    while num >= 0x80 {
        out.push(num as u8 | 0x80);
        num >>= 7;
    }
    out.push(num as u8);
    out
}

/// Converts an `i64` to the shortest big-endian two's-complement byte string
/// that round-trips the value. Zero converts to no bytes at all.
///
/// # Example
///
/// ```
/// use syrup::util::i64_to_signed_digits;
///
/// assert_eq!(i64_to_signed_digits(-34_203).as_slice(), &[0xFF, 0x7A, 0x65]);
/// assert_eq!(i64_to_signed_digits(-128).as_slice(), &[0x80]);
/// assert_eq!(i64_to_signed_digits(128).as_slice(), &[0x00, 0x80]);
/// assert!(i64_to_signed_digits(0).is_empty());
/// ```
pub fn i64_to_signed_digits(i: i64) -> SmallVec<[u8; 8]> {
    if i == 0 {
        return SmallVec::new();
    }
    let bytes = i64::to_be_bytes(i);
    let mut start = 0;
    // a leading byte is redundant when it only repeats the sign of the next one
    while start < 7 {
        let (lead, next) = (bytes[start], bytes[start + 1]);
        if (lead == 0x00 && next < 0x80) || (lead == 0xFF && next >= 0x80) {
            start += 1;
        } else {
            break;
        }
    }
    SmallVec::from_slice(&bytes[start..])
}

/// Writes a `From` impl out of a constructor or closure.
#[macro_export]
macro_rules! from_fn {
    ($to:ty, $from:ty, $via:expr) => {
        impl From<$from> for $to {
            fn from(value: $from) -> $to { $via(value) }
        }
    };
}

/// Writes a `From` impl that widens with `as` before converting.
#[macro_export]
macro_rules! from_as {
    ($to:tt, $from:ty, $as:ty) => {
        impl From<$from> for $to {
            fn from(value: $from) -> $to { <$to>::from(value as $as) }
        }
    };
}

/// Writes a `From` impl that routes through an intermediate type.
#[macro_export]
macro_rules! compose_from {
    ($to:tt, $mid:tt, $from:ty) => {
        impl From<$from> for $to {
            fn from(value: $from) -> Self { Self::from(<$mid>::from(value)) }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uleb128_boundaries() {
        assert_eq!(u64_to_uleb128(0).as_slice(), &[0]);
        assert_eq!(u64_to_uleb128(127).as_slice(), &[0x7F]);
        assert_eq!(u64_to_uleb128(128).as_slice(), &[0x80, 0x01]);
        assert_eq!(u64_to_uleb128(300).as_slice(), &[0xAC, 0x02]);
    }

    #[test]
    fn signed_digits_boundaries() {
        assert_eq!(i64_to_signed_digits(1).as_slice(), &[0x01]);
        assert_eq!(i64_to_signed_digits(-1).as_slice(), &[0xFF]);
        assert_eq!(i64_to_signed_digits(127).as_slice(), &[0x7F]);
        assert_eq!(i64_to_signed_digits(-129).as_slice(), &[0xFF, 0x7F]);
        assert_eq!(
            i64_to_signed_digits(i64::min_value()).as_slice(),
            &[0x80, 0, 0, 0, 0, 0, 0, 0]
        );
    }
}
