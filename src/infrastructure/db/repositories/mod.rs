pub mod audit_repository_sqlx;
pub mod owner_repository_sqlx;
pub mod paste_repository_sqlx;
