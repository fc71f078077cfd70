use crate::crypto::encryption_transformation::EncryptionTransformation;

/// Balanced Feistel network over a 64-bit block split into two 32-bit halves.
///
/// Encryption consumes `round_keys` front to back with the step
/// `(L, R) -> (R, L ^ F(R, k))`; decryption walks the same slice back to
/// front with the inverse step `(L, R) -> (R ^ F(L, k), L)`. Neither
/// direction swaps the halves after the last round, so the two are exact
/// inverses for any round function.
pub struct FeistelNetwork<T> {
    num_round: usize,
    transformation: T,
}

impl<T: EncryptionTransformation> FeistelNetwork<T> {
    pub fn new(num_round: usize, transformation: T) -> Self {
        Self {
            num_round,
            transformation,
        }
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    pub fn transformation(&self) -> &T {
        &self.transformation
    }

    pub fn encrypt_with_round_keys(&self, block: u64, round_keys: &[u32]) -> u64 {
        assert_eq!(round_keys.len(), self.num_round, "One round key per round");

        let (mut left, mut right) = split_block(block);

        for &round_key in round_keys {
            let feistel_out = self.transformation.transform(right, round_key);
            let new_right = left ^ feistel_out;
            left = right;
            right = new_right;
        }

        join_halves(left, right)
    }

    pub fn decrypt_with_round_keys(&self, block: u64, round_keys: &[u32]) -> u64 {
        assert_eq!(round_keys.len(), self.num_round, "One round key per round");

        let (mut left, mut right) = split_block(block);

        for &round_key in round_keys.iter().rev() {
            let feistel_out = self.transformation.transform(left, round_key);
            let new_left = right ^ feistel_out;
            right = left;
            left = new_left;
        }

        join_halves(left, right)
    }
}

impl<T: Clone> Clone for FeistelNetwork<T> {
    fn clone(&self) -> Self {
        Self {
            num_round: self.num_round,
            transformation: self.transformation.clone(),
        }
    }
}

/// `(block >> 32, block & 0xFFFF_FFFF)`
#[inline]
pub fn split_block(block: u64) -> (u32, u32) {
    ((block >> 32) as u32, block as u32)
}

#[inline]
pub fn join_halves(left: u32, right: u32) -> u64 {
    ((left as u64) << 32) | right as u64
}
