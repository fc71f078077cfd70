// src/crypto/gost.rs

use core::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use num_bigint::BigUint;
use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds,
};
use symmetric_cipher::crypto::feistel_network::FeistelNetwork;
use symmetric_cipher::crypto::key_expansion::KeyExpansion;

use crate::crypto::error::GostError;
use crate::crypto::f_function::GostTransformation;
use crate::crypto::key::Key;
use crate::crypto::key_schedule::{expand_key, GostKeyExpansion, Subkeys, ROUNDS};
use crate::crypto::sboxes::SBoxTable;

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// 64-bit block cipher: 32 Feistel rounds, 256-bit key, eight 4-bit S-boxes.
///
/// The S-box table is fixed at construction. The key can be replaced at any
/// time through a shared reference; the new subkeys are published as one
/// immutable [`Subkeys`] value, so a concurrent `encrypt`/`decrypt` sees
/// either the old key or the new one, never a mix.
pub struct GostCipher {
    feistel_network: FeistelNetwork<GostTransformation>,
    key_expansion: GostKeyExpansion,
    subkeys: RwLock<Arc<Subkeys>>,
}

impl GostCipher {
    /// Fails with [`GostError::InvalidKeyLength`] if `key` is wider than 256 bits.
    pub fn new(key: &BigUint, sbox: SBoxTable) -> Result<Self, GostError> {
        let key_expansion = GostKeyExpansion;
        let subkeys = key_expansion.generate_round_keys(key)?;
        Ok(Self::from_parts(key_expansion, subkeys, sbox))
    }

    /// Builds a cipher from an already validated key.
    pub fn with_key(key: &Key, sbox: SBoxTable) -> Self {
        Self::from_parts(GostKeyExpansion, expand_key(key), sbox)
    }

    fn from_parts(key_expansion: GostKeyExpansion, subkeys: Subkeys, sbox: SBoxTable) -> Self {
        for row in sbox.non_permutation_rows() {
            log::warn!("S-box row {} is not a permutation of 0..16", row);
        }
        log::debug!("GOST cipher initialised, {} rounds", ROUNDS);

        GostCipher {
            feistel_network: FeistelNetwork::new(ROUNDS, GostTransformation::new(sbox)),
            key_expansion,
            subkeys: RwLock::new(Arc::new(subkeys)),
        }
    }

    /// Validates `key` and swaps in its subkeys. On error the current key
    /// stays in effect.
    pub fn set_key(&self, key: &BigUint) -> Result<(), GostError> {
        let subkeys = self.key_expansion.generate_round_keys(key)?;
        self.publish(subkeys);
        Ok(())
    }

    pub fn replace_key(&self, key: &Key) {
        self.publish(expand_key(key));
    }

    fn publish(&self, subkeys: Subkeys) {
        let subkeys = Arc::new(subkeys);
        // A poisoned lock still guards a whole `Arc`: the write below is a
        // single pointer store.
        *self.subkeys.write().unwrap_or_else(PoisonError::into_inner) = subkeys;
        log::debug!("GOST subkeys replaced");
    }

    /// The subkeys in effect right now.
    pub fn subkeys(&self) -> Arc<Subkeys> {
        let guard = self.subkeys.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    pub fn sbox(&self) -> &SBoxTable {
        self.feistel_network.transformation().sbox()
    }

    pub fn encrypt(&self, plaintext: u64) -> u64 {
        let subkeys = self.subkeys();
        self.feistel_network
            .encrypt_with_round_keys(plaintext, subkeys.schedule())
    }

    pub fn decrypt(&self, ciphertext: u64) -> u64 {
        let subkeys = self.subkeys();
        self.feistel_network
            .decrypt_with_round_keys(ciphertext, subkeys.schedule())
    }

    /// Encrypts one block given as big-endian bytes.
    pub fn encrypt_bytes(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        self.encrypt(u64::from_be_bytes(*block)).to_be_bytes()
    }

    pub fn decrypt_bytes(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        self.decrypt(u64::from_be_bytes(*block)).to_be_bytes()
    }
}

impl Clone for GostCipher {
    fn clone(&self) -> Self {
        GostCipher {
            feistel_network: self.feistel_network.clone(),
            key_expansion: self.key_expansion,
            subkeys: RwLock::new(self.subkeys()),
        }
    }
}

impl fmt::Debug for GostCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GostCipher { ... }")
    }
}

impl CipherAlgorithm for GostCipher {
    type Block = u64;

    fn encrypt(&self, block: u64) -> u64 {
        GostCipher::encrypt(self, block)
    }

    fn decrypt(&self, block: u64) -> u64 {
        GostCipher::decrypt(self, block)
    }
}

impl SymmetricCipher for GostCipher {
    type Key = BigUint;
    type Error = GostError;

    fn set_key(&self, key: &BigUint) -> Result<(), GostError> {
        GostCipher::set_key(self, key)
    }
}

impl SymmetricCipherWithRounds for GostCipher {
    fn rounds(&self) -> usize {
        self.feistel_network.num_round()
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn export_round_keys(&self) -> Vec<u32> {
        self.subkeys().schedule().to_vec()
    }
}
