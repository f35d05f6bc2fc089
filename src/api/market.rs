use super::client::ApiClient;
use super::error::ApiError;
use crate::data::{Envelope, Team};

/// Fetch the tradable team list (`GET /teams`).
pub async fn fetch(client: &ApiClient) -> Result<Vec<Team>, ApiError> {
    let envelope: Envelope<Vec<Team>> = client.get("/teams").await?;
    envelope.data.ok_or(ApiError::MissingPayload)
}

#[cfg(test)]
mod tests {
    use super::fetch;
    use crate::api::client::testing::MockExchange;

    #[tokio::test]
    async fn fetches_teams_in_server_order() {
        let server = MockExchange::start(&[(
            "/teams",
            r#"{"mStatus":"ok","mMessage":null,"mData":[
                {"tid":2,"name":"Dire","price":4,"history":[{"price":3},{"price":4}]},
                {"tid":1,"name":"Radiant","price":9}
            ]}"#,
        )]);
        let teams = fetch(&server.client()).await.expect("teams");
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name, "Dire");
        assert_eq!(teams[0].history.len(), 2);
        assert_eq!(teams[1].name, "Radiant");
    }
}
