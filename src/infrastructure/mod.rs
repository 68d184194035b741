pub mod auth;
pub mod crypto;
pub mod db;
pub mod realtime;
