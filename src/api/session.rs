use serde::Serialize;

use super::client::ApiClient;
use super::error::ApiError;
use crate::data::{Envelope, UserId};

#[derive(Clone, Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Log in and resolve with the user id. The credential strings are free-form,
/// the server alone decides validity; a missing or non-positive payload is
/// the rejection sentinel.
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<UserId, ApiError> {
    let envelope: Envelope<UserId> = client
        .post("/login", &LoginRequest { username, password })
        .await?;

    match envelope.data {
        Some(uid) if uid > 0 => Ok(uid),
        _ => Err(ApiError::InvalidCredentials),
    }
}
