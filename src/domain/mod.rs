pub mod audit;
pub mod difficulty;
pub mod owner;
pub mod paste;
