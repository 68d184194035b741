pub trait TokenReader: Send + Sync {
    /// Identity claim of `token`, read without checking signature or expiry.
    fn identity_unverified(&self, token: &str) -> anyhow::Result<String>;
}
