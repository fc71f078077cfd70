use thiserror::Error;

use crate::crypto::key::KEY_BITS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GostError {
    #[error("key is {bits} bits long, at most {} bits are allowed", KEY_BITS)]
    InvalidKeyLength { bits: u64 },
}
