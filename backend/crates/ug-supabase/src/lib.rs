//! Supabase auth (GoTrue) adapter for the unlink guard.
//!
//! Implements `TokenVerifier` and `IdentityStore` over the GoTrue REST API.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod identity_response;
pub(crate) mod user_response;


pub use client::SupabaseAuthClient;
pub use error::{Result as SupabaseResult, SupabaseError, TRANSPORT_FAILURE_MESSAGE};
pub use identity_response::IdentityResponse;
pub use user_response::UserResponse;
