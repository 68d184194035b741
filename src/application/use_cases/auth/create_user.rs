use crate::application::ports::owner_repository::OwnerRepository;
use crate::domain::owner::Owner;

pub struct CreateUser<'a, R: OwnerRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: OwnerRepository + ?Sized> CreateUser<'a, R> {
    pub async fn execute(&self, username: &str, password: &str) -> anyhow::Result<Owner> {
        let username = username.trim();
        if username.is_empty() {
            anyhow::bail!("username must not be empty");
        }
        if self.repo.find_by_username(username).await?.is_some() {
            anyhow::bail!("user {username} already exists");
        }
        self.repo.create_owner(username, password).await
    }
}
