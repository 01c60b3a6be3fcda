//! Typed session endpoints
//!
//! Every operation is a single-shot HTTP call; nothing is retried. A
//! failure means the session was not established or the action did not
//! take effect, and the caller decides what to surface.

use super::ApiClient;
use super::error::ClientError;
use crate::types::{
    ChangePasswordRequest, LoginRequest, ResetPasswordRequest, SendResetPasswordRequest,
    SignupRequest, UpdateProfileRequest, UserEnvelope, UserRecord,
};
use reqwest::Method;

impl ApiClient {
    /// Check whether the browser holds a valid backend session.
    ///
    /// Returns the current user on success; any failure means the
    /// session is invalid or expired.
    pub async fn check_auth(&self) -> Result<UserRecord, ClientError> {
        let request = self.request(Method::GET, "/api/user");
        let envelope: UserEnvelope = self.execute(request).await?;
        Ok(envelope.user)
    }

    /// Establish a session with email and password.
    pub async fn login(&self, request: LoginRequest) -> Result<UserRecord, ClientError> {
        let req = self.request(Method::POST, "/api/login").json(&request);
        self.execute(req).await
    }

    /// Destroy the backend session.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/api/logout");
        self.execute_unit(request).await
    }

    /// Register a new account. The backend logs the new user in as part
    /// of registration, so a successful signup establishes a session.
    pub async fn signup(&self, request: SignupRequest) -> Result<UserRecord, ClientError> {
        let req = self.request(Method::POST, "/api/register").json(&request);
        self.execute(req).await
    }

    /// Replace the profile of the signed-in user.
    pub async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<UserRecord, ClientError> {
        let req = self.request(Method::PUT, "/api/update").json(&request);
        self.execute(req).await
    }

    /// Change the signed-in user's password.
    pub async fn change_password(&self, request: ChangePasswordRequest) -> Result<(), ClientError> {
        let req = self
            .request(Method::POST, "/api/change-password")
            .json(&request);
        self.execute_unit(req).await
    }

    /// Ask the backend to email a password reset link.
    pub async fn request_password_reset(
        &self,
        request: SendResetPasswordRequest,
    ) -> Result<(), ClientError> {
        let req = self
            .request(Method::POST, "/api/send-reset-password")
            .json(&request);
        self.execute_unit(req).await
    }

    /// Complete a password reset with the emailed uid and token.
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> Result<(), ClientError> {
        let req = self
            .request(Method::POST, "/api/reset-password")
            .json(&request);
        self.execute_unit(req).await
    }
}
