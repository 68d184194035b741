pub mod audit_repository;
pub mod owner_repository;
pub mod paste_event_publisher;
pub mod paste_repository;
pub mod session_signer;
pub mod token_reader;
