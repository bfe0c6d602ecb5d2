use crate::{SupabaseError, SupabaseResult, UserResponse};

use ug_config::SupabaseConfig;
use ug_core::{Credential, Identity, IdentityStore, StoreError, TokenVerifier, User};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode};

/// HTTP client for the Supabase auth (GoTrue) API
#[derive(Clone)]
pub struct SupabaseAuthClient {
    pub base_url: String,
    anon_key: String,
    service_role_key: String,
    client: ReqwestClient,
}

impl SupabaseAuthClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://xyz.supabase.co")
    /// * `anon_key` - Public API key, sent with end-user requests
    /// * `service_role_key` - Admin API key, sent with identity reads and deletes
    /// * `timeout` - Per-request timeout for every call
    pub fn new(
        base_url: &str,
        anon_key: impl Into<String>,
        service_role_key: impl Into<String>,
        timeout: Duration,
    ) -> SupabaseResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            service_role_key: service_role_key.into(),
            client,
        })
    }

    pub fn from_config(config: &SupabaseConfig) -> SupabaseResult<Self> {
        Self::new(
            config.base_url(),
            config.anon_key.clone(),
            config.service_role_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    /// Build a request carrying an API key and a bearer token
    fn request(
        &self,
        method: Method,
        path: &str,
        api_key: &str,
        bearer: &str,
    ) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.auth_url(path))
            .header("apikey", api_key)
            .header("Authorization", format!("Bearer {}", bearer))
            .header("Accept", "application/json")
    }

    /// Send a request and turn non-success statuses into `SupabaseError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> SupabaseResult<reqwest::Response> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupabaseError::from_response(status.as_u16(), &body));
        }

        Ok(response)
    }

    /// Fetch the user that owns `access_token`.
    ///
    /// Returns `Ok(None)` when GoTrue rejects the token.
    pub async fn get_user(&self, access_token: &str) -> SupabaseResult<Option<UserResponse>> {
        let req = self.request(Method::GET, "/user", &self.anon_key, access_token);

        match self.execute(req).await {
            Ok(response) => Ok(Some(response.json::<UserResponse>().await?)),
            Err(SupabaseError::Api { status, message, .. })
                if status == StatusCode::UNAUTHORIZED.as_u16()
                    || status == StatusCode::FORBIDDEN.as_u16() =>
            {
                debug!("Access token rejected ({}): {}", status, message);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch a user through the admin API (service role)
    pub async fn get_admin_user(&self, user_id: &str) -> SupabaseResult<UserResponse> {
        let req = self.request(
            Method::GET,
            &format!("/admin/users/{}", user_id),
            &self.service_role_key,
            &self.service_role_key,
        );
        let response = self.execute(req).await?;
        Ok(response.json::<UserResponse>().await?)
    }

    /// Delete one of the caller's identities
    pub async fn delete_user_identity(
        &self,
        access_token: &str,
        identity_id: &str,
    ) -> SupabaseResult<()> {
        let req = self.request(
            Method::DELETE,
            &format!("/user/identities/{}", identity_id),
            &self.service_role_key,
            access_token,
        );
        self.execute(req).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenVerifier for SupabaseAuthClient {
    async fn resolve(&self, credential: &Credential) -> Result<Option<User>, StoreError> {
        let user = self.get_user(credential.token()).await?;
        Ok(user.map(User::from))
    }
}

#[async_trait]
impl IdentityStore for SupabaseAuthClient {
    async fn list_identities(&self, user_id: &str) -> Result<Vec<Identity>, StoreError> {
        let user = self.get_admin_user(user_id).await?;
        Ok(user.into_identities())
    }

    async fn delete_identity(
        &self,
        credential: &Credential,
        identity_id: &str,
    ) -> Result<(), StoreError> {
        self.delete_user_identity(credential.token(), identity_id)
            .await?;
        Ok(())
    }
}
