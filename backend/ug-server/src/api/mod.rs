pub mod error;
pub mod unlink;
