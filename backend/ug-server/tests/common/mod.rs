#![allow(dead_code)]

//! Test infrastructure for ug-server API tests

use ug_core::{Credential, Identity, IdentityStore, StoreError, TokenVerifier, UnlinkGuard, User};
use ug_server::{AppState, build_router};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, header::AUTHORIZATION},
};

pub const VALID_TOKEN: &str = "valid-token";
pub const USER_ID: &str = "user-1";

/// How the fake auth service misbehaves, if at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Failure {
    #[default]
    None,
    Resolve,
    List,
    Delete,
    Panic,
}

/// In-memory auth service: one user, reachable through `VALID_TOKEN`
pub struct FakeAuth {
    users: HashMap<String, User>,
    identities: Mutex<Vec<Identity>>,
    deletions: Mutex<Vec<String>>,
    resolve_calls: Mutex<usize>,
    failure: Failure,
}

impl FakeAuth {
    pub fn with_providers(providers: &[&str]) -> Self {
        let identities = providers
            .iter()
            .enumerate()
            .map(|(i, provider)| Identity::new(format!("{provider}-{i}"), USER_ID, *provider))
            .collect();

        let mut users = HashMap::new();
        users.insert(
            VALID_TOKEN.to_string(),
            User::new(USER_ID).with_email("ada@example.com"),
        );

        Self {
            users,
            identities: Mutex::new(identities),
            deletions: Mutex::new(Vec::new()),
            resolve_calls: Mutex::new(0),
            failure: Failure::None,
        }
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failure = failure;
        self
    }

    pub fn deletions(&self) -> Vec<String> {
        self.deletions.lock().unwrap().clone()
    }

    pub fn resolve_calls(&self) -> usize {
        *self.resolve_calls.lock().unwrap()
    }
}

#[async_trait]
impl TokenVerifier for FakeAuth {
    async fn resolve(&self, credential: &Credential) -> Result<Option<User>, StoreError> {
        *self.resolve_calls.lock().unwrap() += 1;
        match self.failure {
            Failure::Resolve => Err(StoreError::new("auth service unavailable")),
            Failure::Panic => panic!("verifier blew up with internal detail"),
            _ => Ok(self.users.get(credential.token()).cloned()),
        }
    }
}

#[async_trait]
impl IdentityStore for FakeAuth {
    async fn list_identities(&self, user_id: &str) -> Result<Vec<Identity>, StoreError> {
        if self.failure == Failure::List {
            return Err(StoreError::new("admin api unavailable"));
        }
        Ok(self
            .identities
            .lock()
            .unwrap()
            .iter()
            .filter(|identity| identity.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_identity(
        &self,
        _credential: &Credential,
        identity_id: &str,
    ) -> Result<(), StoreError> {
        if self.failure == Failure::Delete {
            return Err(StoreError::new("Identity is locked"));
        }
        self.deletions.lock().unwrap().push(identity_id.to_string());
        self.identities
            .lock()
            .unwrap()
            .retain(|identity| identity.identity_id != identity_id);
        Ok(())
    }
}

/// Build the full router around a fake auth service
pub fn create_test_app(fake: &Arc<FakeAuth>) -> Router {
    let guard = UnlinkGuard::new(fake.clone(), fake.clone());
    build_router(AppState::new(guard))
}

/// POST /unlink-google with an optional Authorization header
pub fn unlink_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/unlink-google");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
