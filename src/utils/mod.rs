pub mod error;
pub mod flash;
