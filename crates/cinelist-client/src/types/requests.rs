/*
[INPUT]:  Credentials and account details supplied by the caller
[OUTPUT]: Request bodies serialized with the backend's field names
[POS]:    Data layer - auth request payloads
[UPDATE]: When auth endpoint payloads change
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    /// Brazilian taxpayer id (CPF)
    #[serde(rename = "cpf")]
    pub tax_id: String,
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(rename = "newPassword")]
    pub new_password: String,
}
