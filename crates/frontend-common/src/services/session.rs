//! Session API service
//!
//! Thin wrapper over the typed client. Operations that run against an
//! established session report Unauthorized failures to the expiry
//! callback, so the store clears and every mounted guard redirects.
//! Operations that establish a session (login, signup, password reset)
//! surface their errors untouched; a 401 there just means bad input.

use crate::auth::expiry;
use portico_http::types::{
    ChangePasswordRequest, LoginRequest, ResetPasswordRequest, SendResetPasswordRequest,
    SignupRequest, UpdateProfileRequest, UserRecord,
};
use portico_http::{ApiClient, ClientError};
use std::rc::Rc;
use yew::prelude::*;

/// Session API service
#[derive(Clone)]
pub struct SessionService {
    client: ApiClient,
}

impl SessionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn observe<T>(&self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if let Err(error) = &result {
            if error.is_unauthorized() {
                expiry::notify_session_expired();
            }
        }
        result
    }

    /// Check whether the browser holds a valid session.
    pub async fn check_auth(&self) -> Result<UserRecord, ClientError> {
        self.client.check_auth().await
    }

    /// Establish a session with email and password.
    pub async fn login(&self, email: String, password: String) -> Result<UserRecord, ClientError> {
        self.client.login(LoginRequest { email, password }).await
    }

    /// Destroy the session. The local store is cleared by the caller
    /// even when the network call fails (fail-closed).
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.client.logout().await
    }

    /// Register an account; the backend signs the new user in.
    pub async fn signup(
        &self,
        email: String,
        username: String,
        password: String,
    ) -> Result<UserRecord, ClientError> {
        self.client
            .signup(SignupRequest {
                email,
                username,
                password,
            })
            .await
    }

    /// Replace the signed-in user's profile.
    pub async fn update_profile(
        &self,
        email: String,
        username: String,
        avatar: Option<String>,
    ) -> Result<UserRecord, ClientError> {
        let result = self
            .client
            .update_profile(UpdateProfileRequest {
                email,
                username,
                avatar,
            })
            .await;
        self.observe(result)
    }

    /// Change the signed-in user's password.
    pub async fn change_password(
        &self,
        old_password: String,
        new_password: String,
    ) -> Result<(), ClientError> {
        let result = self
            .client
            .change_password(ChangePasswordRequest {
                old_password,
                new_password,
            })
            .await;
        self.observe(result)
    }

    /// Ask the backend to email a password reset link.
    pub async fn request_password_reset(&self, email: String) -> Result<(), ClientError> {
        self.client
            .request_password_reset(SendResetPasswordRequest { email })
            .await
    }

    /// Complete a password reset with the emailed uid and token.
    pub async fn reset_password(
        &self,
        uid: String,
        token: String,
        new_password: String,
    ) -> Result<(), ClientError> {
        self.client
            .reset_password(ResetPasswordRequest {
                uid,
                token,
                new_password,
            })
            .await
    }
}

/// Context wrapper handing the provider-owned service down the tree
#[derive(Clone)]
pub struct SessionServiceContext(pub Rc<SessionService>);

impl PartialEq for SessionServiceContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Hook to use the session service
#[hook]
pub fn use_session_service() -> Rc<SessionService> {
    use_context::<SessionServiceContext>()
        .expect("SessionServiceContext not found. Wrap the component tree with SessionProvider")
        .0
}
