pub mod crypto;
pub use crypto::cipher_traits::*;
pub use crypto::encryption_transformation::EncryptionTransformation;
pub use crypto::feistel_network::FeistelNetwork;
pub use crypto::key_expansion::KeyExpansion;
