// src/crypto/f_function.rs

use symmetric_cipher::crypto::encryption_transformation::EncryptionTransformation;

use crate::crypto::sboxes::{SBoxTable, SBOX_ROWS};

/// Left rotation applied after substitution.
pub const ROTATION: u32 = 11;

pub fn round_function(half: u32, round_key: u32, sbox: &SBoxTable) -> u32 {
    let mixed = half ^ round_key;

    let substituted = substitution_layer(mixed, sbox);

    substituted.rotate_left(ROTATION)
}

/// Runs nibble `i` of `value` through S-box row `i`.
pub fn substitution_layer(value: u32, sbox: &SBoxTable) -> u32 {
    let mut acc = 0u32;
    for i in 0..SBOX_ROWS {
        let shift = 4 * i as u32;
        acc |= sbox.lookup(i, value >> shift) << shift;
    }
    acc
}

/// The round function bound to one S-box table, for use in a
/// [`FeistelNetwork`](symmetric_cipher::crypto::feistel_network::FeistelNetwork).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GostTransformation {
    sbox: SBoxTable,
}

impl GostTransformation {
    pub fn new(sbox: SBoxTable) -> Self {
        GostTransformation { sbox }
    }

    pub fn sbox(&self) -> &SBoxTable {
        &self.sbox
    }
}

impl EncryptionTransformation for GostTransformation {
    #[inline]
    fn transform(&self, half: u32, round_key: u32) -> u32 {
        round_function(half, round_key, &self.sbox)
    }
}
