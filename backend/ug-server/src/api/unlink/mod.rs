#[allow(clippy::module_inception)]
pub mod unlink;
pub mod unlink_response;
