/// Single-block encryption and decryption.
pub trait CipherAlgorithm {
    type Block: Copy;

    fn encrypt(&self, block: Self::Block) -> Self::Block;
    fn decrypt(&self, block: Self::Block) -> Self::Block;
}

/// A cipher whose key can be replaced after construction.
///
/// Takes `&self` so a shared instance can be re-keyed while other threads
/// keep encrypting; implementors must publish the new round keys as one unit.
pub trait SymmetricCipher: CipherAlgorithm {
    type Key: ?Sized;
    type Error;

    fn set_key(&self, key: &Self::Key) -> Result<(), Self::Error>;
}

pub trait SymmetricCipherWithRounds: SymmetricCipher {
    fn rounds(&self) -> usize;
    /// Block size in bytes.
    fn block_size(&self) -> usize;
    /// Round keys in the order the encryption rounds consume them.
    fn export_round_keys(&self) -> Vec<u32>;
}
