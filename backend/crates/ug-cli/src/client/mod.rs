pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, default_server_url};
pub use error::{ClientError, Result as CliClientResult};
