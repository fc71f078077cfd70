pub mod crypto;
pub use crypto::error::GostError;
pub use crypto::gost::GostCipher;
pub use crypto::key::Key;
pub use crypto::key_schedule::Subkeys;
pub use crypto::sboxes::{ParamSet, SBoxTable};
pub use symmetric_cipher::crypto as symmetric_crypto;
