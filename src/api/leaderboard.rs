use super::client::ApiClient;
use super::error::ApiError;
use crate::data::{Envelope, UserSummary};

/// Fetch the leaderboard (`GET /users`). Server order is unspecified;
/// display sorting is the render layer's concern.
pub async fn fetch(client: &ApiClient) -> Result<Vec<UserSummary>, ApiError> {
    let envelope: Envelope<Vec<UserSummary>> = client.get("/users").await?;
    envelope.data.ok_or(ApiError::MissingPayload)
}
