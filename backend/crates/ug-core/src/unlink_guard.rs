use crate::{
    Credential, GuardError, GuardResult, Identity, IdentityStore, TokenVerifier,
    UNLINK_SUCCESS_MESSAGE, UnlinkOutcome,
};

use std::sync::Arc;

use log::{debug, error, info, warn};

/// Enforces "keep at least one non-Google sign-in method" before asking the
/// identity store to drop a user's Google identity.
///
/// Stateless: every call runs verify -> list -> delete once, in that order,
/// and nothing is mutated unless every check passes.
#[derive(Clone)]
pub struct UnlinkGuard {
    verifier: Arc<dyn TokenVerifier>,
    store: Arc<dyn IdentityStore>,
}

impl UnlinkGuard {
    pub fn new(verifier: Arc<dyn TokenVerifier>, store: Arc<dyn IdentityStore>) -> Self {
        Self { verifier, store }
    }

    /// Unlink the caller's Google identity
    pub async fn unlink_google_identity(
        &self,
        credential: &Credential,
    ) -> GuardResult<UnlinkOutcome> {
        let user = match self.verifier.resolve(credential).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("Credential did not resolve to a user");
                return Err(GuardError::unauthorized("no user for credential"));
            }
            Err(e) => {
                warn!("Credential verification failed: {}", e);
                return Err(GuardError::unauthorized(e.message));
            }
        };

        debug!("Resolved caller to user {}", user.id);

        let identities = self
            .store
            .list_identities(&user.id)
            .await
            .map_err(|e| {
                error!("Failed to list identities for user {}: {}", user.id, e);
                GuardError::identity_fetch_failed(&user.id, e)
            })?;

        debug!(
            "User {} has {} identities: {:?}",
            user.id,
            identities.len(),
            identities.iter().map(|i| &i.provider).collect::<Vec<_>>()
        );

        let google = select_google_identity(&user.id, &identities)?;

        self.store
            .delete_identity(credential, &google.identity_id)
            .await
            .map_err(|e| {
                error!(
                    "Failed to delete identity {} for user {}: {}",
                    google.identity_id, user.id, e
                );
                GuardError::unlink_failed(&google.identity_id, e)
            })?;

        info!(
            "Unlinked Google identity {} from user {}",
            google.identity_id, user.id
        );

        Ok(UnlinkOutcome {
            user_id: user.id,
            identity_id: google.identity_id.clone(),
            message: UNLINK_SUCCESS_MESSAGE.to_string(),
        })
    }
}

/// True if any identity belongs to a provider other than Google
pub fn has_non_google_auth(identities: &[Identity]) -> bool {
    identities.iter().any(|identity| !identity.is_google())
}

/// Pick the Google identity to delete, or say why none may be deleted.
///
/// The sole-method check only fires for exactly one identity. A user with no
/// identities at all falls through to `NotLinked`.
pub fn select_google_identity<'a>(
    user_id: &str,
    identities: &'a [Identity],
) -> GuardResult<&'a Identity> {
    if !has_non_google_auth(identities) && identities.len() == 1 {
        warn!("Refusing unlink for user {}: Google is the only sign-in method", user_id);
        return Err(GuardError::sole_auth_method(user_id));
    }

    identities
        .iter()
        .find(|identity| identity.is_google())
        .ok_or_else(|| {
            warn!("Refusing unlink for user {}: no Google identity linked", user_id);
            GuardError::not_linked(user_id)
        })
}
