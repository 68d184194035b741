pub mod create_paste;
pub mod read_and_burn;
pub mod upload_paste;
