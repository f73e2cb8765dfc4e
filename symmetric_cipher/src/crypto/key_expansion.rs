pub trait KeyExpansion {
    type Key: ?Sized;
    type RoundKeys;

    fn generate_round_keys(&self, key: &Self::Key) -> Self::RoundKeys;
}
