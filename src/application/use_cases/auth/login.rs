use crate::application::ports::owner_repository::OwnerRepository;
use crate::domain::owner::Owner;

pub struct Login<'a, R: OwnerRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R: OwnerRepository + ?Sized> Login<'a, R> {
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<Owner>> {
        let row = match self.repo.find_by_username(&req.username).await? {
            Some(r) => r,
            None => return Ok(None),
        };
        // Plain-text comparison, as stored.
        if row.password == req.password {
            Ok(Some(row))
        } else {
            Ok(None)
        }
    }
}
