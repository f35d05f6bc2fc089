use super::client::ApiClient;
use super::error::ApiError;
use crate::data::{Envelope, Portfolio, UserId};

/// Fetch the user's portfolio (`GET /users/{id}`).
pub async fn fetch(client: &ApiClient, uid: UserId) -> Result<Portfolio, ApiError> {
    let envelope: Envelope<Portfolio> = client.get(&format!("/users/{uid}")).await?;
    envelope.data.ok_or(ApiError::MissingPayload)
}

#[cfg(test)]
mod tests {
    use super::fetch;
    use crate::api::client::testing::MockExchange;
    use crate::api::ApiError;

    #[tokio::test]
    async fn fetches_portfolio_by_user_id() {
        let server = MockExchange::start(&[(
            "/users/42",
            r#"{"mStatus":"ok","mMessage":null,"mData":{"username":"alice","money":120,"networth":300,"ownerships":[{"tid":5,"name":"Radiant","price":9,"count":2}]}}"#,
        )]);
        let portfolio = fetch(&server.client(), 42).await.expect("portfolio");
        assert_eq!(portfolio.username, "alice");
        assert_eq!(portfolio.money, 120);
        assert_eq!(portfolio.ownerships.len(), 1);
        assert_eq!(portfolio.ownerships[0].tid, 5);
    }

    #[tokio::test]
    async fn missing_payload_is_an_error() {
        let server = MockExchange::start(&[(
            "/users/42",
            r#"{"mStatus":"error","mMessage":"42 not found","mData":null}"#,
        )]);
        let err = fetch(&server.client(), 42).await.expect_err("no payload");
        assert!(matches!(err, ApiError::MissingPayload));
    }
}
