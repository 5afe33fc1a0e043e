/*
[INPUT]:  Login, registration and password-reset details
[OUTPUT]: Backend auth responses as raw JSON
[POS]:    HTTP layer - auth endpoints (no session cookie)
[UPDATE]: When adding auth endpoints or changing their payloads
*/

use serde_json::Value;

use crate::http::{CineListClient, Operation, Result};
use crate::types::{LoginRequest, RegisterRequest, ResetPasswordRequest};

impl CineListClient {
    /// Authenticate with email and password
    ///
    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<Value> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = self.encode(Operation::Login, &req)?;
        self.send_json(Operation::Login, "auth/login", Some(body)).await
    }

    /// Register a new account
    ///
    /// POST /auth/register
    pub async fn register(&self, req: &RegisterRequest) -> Result<Value> {
        let body = self.encode(Operation::Register, req)?;
        self.send_json(Operation::Register, "auth/register", Some(body))
            .await
    }

    /// Set a new password using a reset token
    ///
    /// POST /auth/reset-password?token={token}
    ///
    /// The token is embedded in the query string as given. The target is
    /// resolved against [`crate::ClientConfig::reset_password_base`].
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<Value> {
        let req = ResetPasswordRequest {
            new_password: new_password.to_string(),
        };
        let body = self.encode(Operation::ResetPassword, &req)?;
        let endpoint = format!("auth/reset-password?token={}", token);
        self.send_json(Operation::ResetPassword, &endpoint, Some(body))
            .await
    }
}
