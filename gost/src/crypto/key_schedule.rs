use core::fmt;

use num_bigint::BigUint;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

use crate::crypto::error::GostError;
use crate::crypto::key::{Key, KEY_WORDS};

pub const ROUNDS: usize = 32;
/// Rounds that cycle the subkeys in natural order before the reversed pass.
pub const FORWARD_ROUNDS: usize = 24;

/// The eight 32-bit subkeys of one key, plus the 32-round encryption order
/// derived from them.
///
/// Never mutated after construction: a key change builds a fresh value.
#[derive(Clone, PartialEq, Eq)]
pub struct Subkeys {
    words: [u32; KEY_WORDS],
    schedule: [u32; ROUNDS],
}

impl Subkeys {
    pub fn words(&self) -> &[u32; KEY_WORDS] {
        &self.words
    }

    /// Round keys in encryption order. Decryption consumes the same slice
    /// back to front.
    pub fn schedule(&self) -> &[u32; ROUNDS] {
        &self.schedule
    }
}

/// `subkeys[i] = (key >> 32 * i) & 0xFFFF_FFFF`.
pub fn expand_key(key: &Key) -> Subkeys {
    let words = *key.words();
    Subkeys {
        words,
        schedule: encryption_schedule(&words),
    }
}

/// Index of the subkey used by encryption round `round`: 0..7 three times,
/// then 7..0 once.
#[inline]
pub const fn encryption_key_index(round: usize) -> usize {
    if round < FORWARD_ROUNDS {
        round % KEY_WORDS
    } else {
        KEY_WORDS - 1 - (round - FORWARD_ROUNDS)
    }
}

/// Index of the subkey used by decryption round `round`: 0..7 once, then
/// 7..0 three times.
#[inline]
pub const fn decryption_key_index(round: usize) -> usize {
    if round < KEY_WORDS {
        round
    } else {
        KEY_WORDS - 1 - (round - KEY_WORDS) % KEY_WORDS
    }
}

fn encryption_schedule(words: &[u32; KEY_WORDS]) -> [u32; ROUNDS] {
    let mut schedule = [0u32; ROUNDS];
    for (round, round_key) in schedule.iter_mut().enumerate() {
        *round_key = words[encryption_key_index(round)];
    }
    schedule
}

impl fmt::Debug for Subkeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subkeys { ... }")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GostKeyExpansion;

impl KeyExpansion for GostKeyExpansion {
    type Key = BigUint;
    type RoundKeys = Subkeys;
    type Error = GostError;

    fn generate_round_keys(&self, key: &BigUint) -> Result<Subkeys, GostError> {
        let key = Key::from_biguint(key)?;
        Ok(expand_key(&key))
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Subkeys {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.words);
        zeroize::Zeroize::zeroize(&mut self.schedule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encryption_order_is_three_forward_passes_then_one_reversed() {
        let order: Vec<usize> = (0..ROUNDS).map(encryption_key_index).collect();
        let mut expected: Vec<usize> = (0..3).flat_map(|_| 0..8).collect();
        expected.extend((0..8).rev());
        assert_eq!(order, expected);
    }

    #[test]
    fn decryption_order_is_encryption_order_reversed() {
        for round in 0..ROUNDS {
            assert_eq!(
                decryption_key_index(round),
                encryption_key_index(ROUNDS - 1 - round),
                "round {}",
                round
            );
        }
    }

    #[test]
    fn schedule_follows_subkey_words() {
        let key = Key::from_words([10, 11, 12, 13, 14, 15, 16, 17]);
        let subkeys = expand_key(&key);
        for (round, &round_key) in subkeys.schedule().iter().enumerate() {
            assert_eq!(round_key, 10 + encryption_key_index(round) as u32);
        }
    }
}
