use core::fmt;

use num_bigint::BigUint;

use crate::crypto::error::GostError;

/// Largest accepted key, in bits.
pub const KEY_BITS: u64 = 256;
/// Number of 32-bit words the key decomposes into.
pub const KEY_WORDS: usize = 8;

/// A validated key of at most 256 bits.
///
/// Stored as eight 32-bit words, least significant word first, which is
/// exactly the subkey decomposition the cipher needs. A `Key` can only be
/// built from material that fits, so holding one is proof of validity.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Key {
    words: [u32; KEY_WORDS],
}

impl Key {
    /// `words[i]` holds bits `[32 * i, 32 * i + 32)` of the key.
    pub const fn from_words(words: [u32; KEY_WORDS]) -> Self {
        Key { words }
    }

    /// Interprets `bytes` as a big-endian unsigned integer.
    ///
    /// Leading zero bytes do not count towards the length, so a 33-byte
    /// slice starting with `0x00` is still a valid 256-bit key.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, GostError> {
        let first_significant = bytes
            .iter()
            .position(|&byte| byte != 0)
            .unwrap_or(bytes.len());
        let significant = &bytes[first_significant..];

        let bits = match significant.first() {
            None => 0,
            Some(&top) => {
                (significant.len() as u64 - 1) * 8 + u64::from(8 - top.leading_zeros())
            }
        };
        check_bit_length(bits)?;

        let mut words = [0u32; KEY_WORDS];
        for (index, &byte) in significant.iter().rev().enumerate() {
            words[index / 4] |= u32::from(byte) << (8 * (index % 4));
        }
        Ok(Key { words })
    }

    pub fn from_biguint(key: &BigUint) -> Result<Self, GostError> {
        check_bit_length(key.bits())?;

        let mut words = [0u32; KEY_WORDS];
        for (word, digit) in words.iter_mut().zip(key.iter_u32_digits()) {
            *word = digit;
        }
        Ok(Key { words })
    }

    pub fn words(&self) -> &[u32; KEY_WORDS] {
        &self.words
    }

    /// Position of the highest set bit plus one; zero for the zero key.
    pub fn bit_length(&self) -> u64 {
        self.words
            .iter()
            .rposition(|&word| word != 0)
            .map_or(0, |index| {
                32 * index as u64 + u64::from(32 - self.words[index].leading_zeros())
            })
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_slice(&self.words)
    }
}

fn check_bit_length(bits: u64) -> Result<(), GostError> {
    if bits > KEY_BITS {
        log::debug!("rejecting {}-bit key", bits);
        return Err(GostError::InvalidKeyLength { bits });
    }
    Ok(())
}

impl From<[u32; KEY_WORDS]> for Key {
    fn from(words: [u32; KEY_WORDS]) -> Self {
        Key::from_words(words)
    }
}

impl From<u128> for Key {
    fn from(value: u128) -> Self {
        let mut words = [0u32; KEY_WORDS];
        for (index, word) in words.iter_mut().take(4).enumerate() {
            *word = (value >> (32 * index)) as u32;
        }
        Key { words }
    }
}

impl TryFrom<&BigUint> for Key {
    type Error = GostError;

    fn try_from(key: &BigUint) -> Result<Self, Self::Error> {
        Key::from_biguint(key)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = GostError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Key::from_be_bytes(bytes)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key { ... }")
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Key {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.words);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_length_counts_from_highest_word() {
        assert_eq!(Key::default().bit_length(), 0);
        assert_eq!(Key::from(1u128).bit_length(), 1);
        assert_eq!(Key::from(u128::MAX).bit_length(), 128);

        let mut words = [0u32; KEY_WORDS];
        words[7] = 0x8000_0000;
        assert_eq!(Key::from_words(words).bit_length(), 256);
    }

    #[test]
    fn be_bytes_fill_words_from_the_end() {
        let key = Key::from_be_bytes(&[0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();
        assert_eq!(key.words()[0], 0x0203_0405);
        assert_eq!(key.words()[1], 0x0000_0001);
        assert!(key.words()[2..].iter().all(|&w| w == 0));
    }

    #[test]
    fn leading_zero_bytes_are_ignored() {
        let mut bytes = vec![0u8; 40];
        bytes[39] = 0x7F;
        let key = Key::from_be_bytes(&bytes).unwrap();
        assert_eq!(key, Key::from(0x7Fu128));
    }

    #[test]
    fn debug_hides_key_words() {
        let key = Key::from(0xDEAD_BEEFu128);
        assert_eq!(format!("{:?}", key), "Key { ... }");
    }
}
