pub trait KeyExpansion {
    type Key: ?Sized;
    type RoundKeys;
    type Error;

    fn generate_round_keys(&self, key: &Self::Key) -> Result<Self::RoundKeys, Self::Error>;
}
