use ug_core::StoreError;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur talking to the Supabase auth API
#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Supabase API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },
}

/// Caller-visible text for failures that never produced an HTTP response
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Supabase request failed";

/// GoTrue error bodies use several field names depending on version
#[derive(Debug, Deserialize)]
struct GoTrueErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl SupabaseError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        SupabaseError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Build an API error from a non-success status and its raw body.
    ///
    /// Uses the GoTrue message when the body is a recognisable error object,
    /// otherwise only a length/digest summary so raw bodies never reach logs.
    #[track_caller]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<GoTrueErrorBody>(body)
            .ok()
            .and_then(|b| b.msg.or(b.message).or(b.error_description).or(b.error))
            .unwrap_or_else(|| format!("unexpected response ({})", summarize_body(body)));

        SupabaseError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
        }
    }
}

impl From<reqwest::Error> for SupabaseError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SupabaseError::from_reqwest(err)
    }
}

impl From<SupabaseError> for StoreError {
    #[track_caller]
    fn from(err: SupabaseError) -> Self {
        log::debug!("Supabase call failed: {}", err);
        match err {
            SupabaseError::Api { message, .. } => StoreError::new(message),
            // Transport errors embed the upstream URL; keep them in the log only
            SupabaseError::Http { message, .. } => {
                log::warn!("Supabase transport failure: {}", message);
                StoreError::new(TRANSPORT_FAILURE_MESSAGE)
            }
        }
    }
}

pub(crate) fn summarize_body(body: &str) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("len={},digest={:016x}", body.len(), hasher.finish())
}

pub type Result<T> = std::result::Result<T, SupabaseError>;
