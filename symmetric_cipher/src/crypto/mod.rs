pub mod cipher_traits;
pub mod encryption_transformation;
pub mod feistel_network;
pub mod key_expansion;

use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::key_expansion::KeyExpansion;
use std::sync::Arc;

impl<T: KeyExpansion + ?Sized> KeyExpansion for Arc<T> {
    type Key = T::Key;
    type RoundKeys = T::RoundKeys;
    type Error = T::Error;

    fn generate_round_keys(&self, key: &Self::Key) -> Result<Self::RoundKeys, Self::Error> {
        (**self).generate_round_keys(key)
    }
}

impl<T: EncryptionTransformation + ?Sized> EncryptionTransformation for Arc<T> {
    fn transform(&self, half: u32, round_key: u32) -> u32 {
        (**self).transform(half, round_key)
    }
}
