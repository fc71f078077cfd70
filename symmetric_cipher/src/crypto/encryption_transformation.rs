/// Keyed round function applied to one 32-bit half of the block.
pub trait EncryptionTransformation {
    fn transform(&self, half: u32, round_key: u32) -> u32;
}
