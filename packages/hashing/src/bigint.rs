//! Big-endian positional decoding
//!
//! Interprets a sequence of fixed-width unsigned elements as the digits of a
//! single number in base `2^w`, most significant element first:
//! `Σ elements[i] * 2^(w * (n - 1 - i))`.

use num_bigint::BigUint;
use num_traits::Zero;

/// Fixed-width unsigned element usable as a big-endian digit
pub trait BigEndianDigit: Copy {
    /// Element width in bits, the `w` of the positional formula
    const BITS: u32;

    /// Widen the element without loss
    fn widen(self) -> u64;
}

macro_rules! impl_big_endian_digit {
    ($($ty:ty),*) => {
        $(
            impl BigEndianDigit for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn widen(self) -> u64 {
                    u64::from(self)
                }
            }
        )*
    };
}

impl_big_endian_digit!(u8, u16, u32, u64);

/// Decode a typed sequence, inferring `w` from the element type
///
/// Empty input yields zero.
#[must_use]
pub fn decode<T: BigEndianDigit>(digits: &[T]) -> BigUint {
    digits.iter().fold(BigUint::zero(), |acc, digit| {
        (acc << T::BITS) + digit.widen()
    })
}

/// Decode a raw byte buffer (`w = 8`)
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> BigUint {
    decode(bytes)
}

/// Decode with an explicit element width
///
/// Elements are not masked to `width_bits`; an element wider than the
/// declared width carries into the next digit, exactly as the positional
/// sum prescribes.
#[must_use]
pub fn decode_with_width(elements: &[u64], width_bits: u32) -> BigUint {
    elements.iter().fold(BigUint::zero(), |acc, element| {
        (acc << width_bits) + *element
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bytes_big_endian() {
        assert_eq!(decode_bytes(&[0x01, 0x02]), BigUint::from(0x0102u32));
    }

    #[test]
    fn test_empty_is_zero() {
        assert!(decode_bytes(&[]).is_zero());
        assert!(decode::<u32>(&[]).is_zero());
        assert!(decode_with_width(&[], 8).is_zero());
    }

    #[test]
    fn test_leading_zeros_do_not_change_value() {
        assert_eq!(decode_bytes(&[0, 0, 0xff]), BigUint::from(0xffu32));
    }

    #[test]
    fn test_width_inferred_from_element_type() {
        assert_eq!(decode::<u16>(&[0x0102, 0x0304]), BigUint::from(0x0102_0304u32));
        assert_eq!(
            decode::<u32>(&[0xdead_beef, 0x0000_0001]),
            BigUint::from(0xdead_beef_0000_0001u64)
        );
    }

    #[test]
    fn test_explicit_width_matches_typed_decode() {
        let bytes = [0x12u8, 0x34, 0x56, 0x78, 0x9a];
        let widened: Vec<u64> = bytes.iter().map(|b| u64::from(*b)).collect();
        assert_eq!(decode_with_width(&widened, 8), decode_bytes(&bytes));
    }

    #[test]
    fn test_exceeds_machine_words() {
        // 2^256 - 1
        let value = decode_bytes(&[0xff; 32]);
        assert_eq!(value.bits(), 256);
        assert_eq!(value + 1u32, BigUint::from(1u32) << 256u32);
    }

    #[test]
    fn test_matches_num_bigint_from_bytes_be() {
        let bytes: Vec<u8> = (0u8..=200).collect();
        assert_eq!(decode_bytes(&bytes), BigUint::from_bytes_be(&bytes));
    }
}
