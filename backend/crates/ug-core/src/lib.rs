pub mod error;
pub mod identity_store;
pub mod models;
pub mod token_verifier;
pub mod unlink_guard;
pub mod unlink_outcome;

pub use error::{GuardError, GuardResult, StoreError};
pub use identity_store::IdentityStore;
pub use models::credential::Credential;
pub use models::identity::Identity;
pub use models::user::User;
pub use token_verifier::TokenVerifier;
pub use unlink_guard::{UnlinkGuard, has_non_google_auth, select_google_identity};
pub use unlink_outcome::UnlinkOutcome;

pub use error_location::ErrorLocation;


/// Provider name the guard unlinks
pub const GOOGLE_PROVIDER: &str = "google";

/// Confirmation returned to the caller after a successful unlink
pub const UNLINK_SUCCESS_MESSAGE: &str = "Google account unlinked successfully";
