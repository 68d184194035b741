use crate::application::ports::paste_repository::PasteRepository;
use crate::domain::paste::Paste;

pub struct ReadAndBurn<'a, R: PasteRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PasteRepository + ?Sized> ReadAndBurn<'a, R> {
    pub async fn execute(&self, id: i64) -> anyhow::Result<Option<Paste>> {
        let Some(paste) = self.repo.find(Some(id), None).await? else {
            return Ok(None);
        };
        if paste.burn {
            self.repo.delete(paste.id).await?;
        }
        Ok(Some(paste))
    }
}
