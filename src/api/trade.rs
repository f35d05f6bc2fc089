use super::client::ApiClient;
use super::error::ApiError;
use crate::data::{Envelope, TradeRequest};

/// Post a trade and return the raw payload number: the share count after a
/// buy, the credited proceeds after a sell. An absent payload decodes to 0,
/// the same no-op sentinel the server uses for rejected trades.
pub async fn place(client: &ApiClient, request: &TradeRequest) -> Result<i64, ApiError> {
    let envelope: Envelope<i64> = client.post("/trade", request).await?;
    Ok(envelope.data.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::place;
    use crate::api::client::testing::MockExchange;
    use crate::data::TradeRequest;

    fn request(is_buy: bool, amount: i64) -> TradeRequest {
        TradeRequest {
            uid: 7,
            tid: 2,
            is_buy,
            amount,
        }
    }

    #[tokio::test]
    async fn returns_the_payload_number() {
        let server = MockExchange::start(&[(
            "/trade",
            r#"{"mStatus":"ok","mMessage":null,"mData":3}"#,
        )]);
        let payload = place(&server.client(), &request(true, 1)).await.expect("placed");
        assert_eq!(payload, 3);
        assert_eq!(server.hits("/trade"), 1);
    }

    #[tokio::test]
    async fn absent_payload_becomes_the_noop_sentinel() {
        let server = MockExchange::start(&[(
            "/trade",
            r#"{"mStatus":"error","mMessage":"error on purchase/sell","mData":null}"#,
        )]);
        let payload = place(&server.client(), &request(false, 5)).await.expect("placed");
        assert_eq!(payload, 0);
    }
}
