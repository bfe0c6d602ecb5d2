use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

/// Failure reported by an external collaborator (auth verifier or identity store)
#[derive(Error, Debug)]
#[error("{message} {location}")]
pub struct StoreError {
    pub message: String,
    pub location: ErrorLocation,
}

impl StoreError {
    #[track_caller]
    pub fn new<S: Into<String>>(message: S) -> Self {
        StoreError {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Reasons the unlink guard refuses or fails a request.
///
/// Variants are listed in the order the guard checks them; only the first
/// failing check is ever reported.
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Unauthorized: {reason} {location}")]
    Unauthorized {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Failed to fetch identities for user {user_id}: {source} {location}")]
    IdentityFetchFailed {
        user_id: String,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("User {user_id} has no alternate authentication method {location}")]
    SoleAuthMethod {
        user_id: String,
        location: ErrorLocation,
    },

    #[error("User {user_id} has no linked Google identity {location}")]
    NotLinked {
        user_id: String,
        location: ErrorLocation,
    },

    #[error("Failed to delete identity {identity_id}: {source} {location}")]
    UnlinkFailed {
        identity_id: String,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl GuardError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(reason: S) -> Self {
        GuardError::Unauthorized {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_fetch_failed<S: Into<String>>(user_id: S, source: StoreError) -> Self {
        GuardError::IdentityFetchFailed {
            user_id: user_id.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sole_auth_method<S: Into<String>>(user_id: S) -> Self {
        GuardError::SoleAuthMethod {
            user_id: user_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_linked<S: Into<String>>(user_id: S) -> Self {
        GuardError::NotLinked {
            user_id: user_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unlink_failed<S: Into<String>>(identity_id: S, source: StoreError) -> Self {
        GuardError::UnlinkFailed {
            identity_id: identity_id.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message safe to hand back to the caller (no locations, no user ids)
    pub fn client_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => "Unauthorized".to_string(),
            Self::IdentityFetchFailed { .. } => "Failed to fetch user identities".to_string(),
            Self::SoleAuthMethod { .. } => {
                "Cannot unlink Google account: no alternate authentication method exists"
                    .to_string()
            }
            Self::NotLinked { .. } => "Google account is not linked".to_string(),
            Self::UnlinkFailed { source, .. } => {
                format!("Failed to unlink Google account: {}", source.message)
            }
        }
    }

    /// Stable machine-readable name, used for metrics labels
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "unauthorized",
            Self::IdentityFetchFailed { .. } => "identity_fetch_failed",
            Self::SoleAuthMethod { .. } => "sole_auth_method",
            Self::NotLinked { .. } => "not_linked",
            Self::UnlinkFailed { .. } => "unlink_failed",
        }
    }
}

pub type GuardResult<T> = StdResult<T, GuardError>;
