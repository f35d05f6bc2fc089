use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type TeamId = i64;

/// Server response envelope (`StructuredResponse` on the wire).
/// The payload always travels under `mData`; a missing or non-positive value
/// for login/trade responses is the failure sentinel.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "mStatus")]
    pub status: Option<String>,
    #[serde(rename = "mMessage")]
    pub message: Option<String>,
    #[serde(rename = "mData")]
    pub data: Option<T>,
}

/// Authenticated user. Immutable once set, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
}

/// One sample of a team's price history, oldest first.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PricePoint {
    pub price: i64,
}

/// A tradable team as returned by `GET /teams`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Team {
    pub tid: TeamId,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub history: Vec<PricePoint>,
}

impl Team {
    /// Chart samples: each history entry paired with its sequential index.
    /// The server owns the values, the client only derives the x axis.
    pub fn history_points(&self) -> Vec<(f64, f64)> {
        self.history
            .iter()
            .enumerate()
            .map(|(index, point)| (index as f64, point.price as f64))
            .collect()
    }
}

/// One ownership record inside a portfolio response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Ownership {
    pub tid: TeamId,
    pub name: String,
    #[serde(default)]
    pub price: i64,
    pub count: i64,
}

/// `GET /users/{id}` payload. Replaced wholesale on every refresh.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Portfolio {
    pub username: String,
    pub money: i64,
    pub networth: i64,
    #[serde(default)]
    pub ownerships: Vec<Ownership>,
}

/// One leaderboard row from `GET /users`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub networth: i64,
}

/// Leaderboard display order: net worth descending. The server does not
/// guarantee any ordering, so the client sorts for display only.
pub fn rank_by_networth(users: &[UserSummary]) -> Vec<UserSummary> {
    users
        .iter()
        .cloned()
        .sorted_by_key(|user| std::cmp::Reverse(user.networth))
        .collect()
}

/// `POST /trade` body. Built per keypress, not retained.
#[derive(Clone, Debug, Serialize)]
pub struct TradeRequest {
    pub uid: UserId,
    pub tid: TeamId,
    #[serde(rename = "isBuy")]
    pub is_buy: bool,
    pub amount: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warn,
}

/// Non-blocking user-visible outcome line, shown in the footer until the
/// next notice replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warn,
            text: text.into(),
        }
    }
}
