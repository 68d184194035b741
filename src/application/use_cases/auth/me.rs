use crate::application::ports::owner_repository::OwnerRepository;
use crate::application::ports::token_reader::TokenReader;
use crate::domain::owner::Owner;

pub struct GetMe<'a, R, T>
where
    R: OwnerRepository + ?Sized,
    T: TokenReader + ?Sized,
{
    pub repo: &'a R,
    pub tokens: &'a T,
}

impl<'a, R, T> GetMe<'a, R, T>
where
    R: OwnerRepository + ?Sized,
    T: TokenReader + ?Sized,
{
    /// Trusts whatever identity the token names; the signature is never checked.
    pub async fn execute(&self, token: &str) -> anyhow::Result<Option<Owner>> {
        let identity = self.tokens.identity_unverified(token.trim())?;
        self.repo.find_by_username(&identity).await
    }
}
