/// Tamper-evident encoding for values stored in client cookies.
pub trait SessionSigner: Send + Sync {
    fn sign(&self, value: &str) -> anyhow::Result<String>;
    /// The original value when the signature checks out.
    fn verify(&self, signed: &str) -> Option<String>;
}
