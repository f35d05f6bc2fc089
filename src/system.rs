use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, RwLock};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Dataset, GraphType, List, Paragraph, Row, Table,
        TableState,
    },
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::api::{self, ApiClient};
use crate::app::{AppState, Message, RT};
use crate::data::{
    rank_by_networth, Notice, Ownership, Portfolio, Team, TradeRequest, UserId, UserSummary,
};
use crate::render::DirtyFlags;
use crate::ui::{styles, text};

pub const EMPTY_PORTFOLIO_PLACEHOLDER: &str = "Nothing currently owned";

// Data stores, one per UI region. Each refresh replaces its store wholesale;
// overlapping refreshes race and the later write wins.
pub static PORTFOLIO: LazyLock<RwLock<Option<Portfolio>>> = LazyLock::new(Default::default);
pub static MARKET: LazyLock<RwLock<Vec<Team>>> = LazyLock::new(Default::default);
pub static LEADERBOARD: LazyLock<RwLock<Vec<UserSummary>>> = LazyLock::new(Default::default);

// Flag to track whether a trade round-trip is currently pending
static TRADE_IN_FLIGHT: AtomicBool = AtomicBool::new(false);

// RAII guard so the in-flight flag is always cleared
struct TradeGuard;

impl TradeGuard {
    fn try_acquire() -> Option<Self> {
        if TRADE_IN_FLIGHT.swap(true, Ordering::Relaxed) {
            None
        } else {
            Some(TradeGuard)
        }
    }
}

impl Drop for TradeGuard {
    fn drop(&mut self) {
        TRADE_IN_FLIGHT.store(false, Ordering::Relaxed);
    }
}

/// Fetch the portfolio and replace the store. With `reveal` the portfolio tab
/// is brought to the front once the data lands; a trade-triggered refresh
/// repaints in place instead.
pub async fn portfolio_round(
    client: ApiClient,
    tx: UnboundedSender<Message>,
    uid: UserId,
    reveal: bool,
) {
    match api::portfolio::fetch(&client, uid).await {
        Ok(portfolio) => {
            tracing::info!(
                uid,
                owned = portfolio.ownerships.len(),
                money = portfolio.money,
                "portfolio refreshed"
            );
            *PORTFOLIO.write().expect("poison") = Some(portfolio);
            if reveal {
                _ = tx.send(Message::Enter(AppState::Portfolio));
            }
            _ = tx.send(Message::Dirty(DirtyFlags::PORTFOLIO | DirtyFlags::NAVBAR));
        }
        Err(err) => {
            tracing::error!(error = %err, uid, "portfolio refresh failed");
            _ = tx.send(Message::Notice(Notice::warn(format!(
                "Portfolio refresh failed: {err}"
            ))));
        }
    }
}

/// Fetch the team list and replace the store.
pub async fn market_round(client: ApiClient, tx: UnboundedSender<Message>) {
    match api::market::fetch(&client).await {
        Ok(teams) => {
            tracing::info!(teams = teams.len(), "market refreshed");
            *MARKET.write().expect("poison") = teams;
            _ = tx.send(Message::Dirty(DirtyFlags::MARKET));
        }
        Err(err) => {
            tracing::error!(error = %err, "market refresh failed");
            _ = tx.send(Message::Notice(Notice::warn(format!(
                "Market refresh failed: {err}"
            ))));
        }
    }
}

/// Fetch the leaderboard and replace the store.
pub async fn leaderboard_round(client: ApiClient, tx: UnboundedSender<Message>) {
    match api::leaderboard::fetch(&client).await {
        Ok(users) => {
            tracing::info!(users = users.len(), "leaderboard refreshed");
            *LEADERBOARD.write().expect("poison") = users;
            _ = tx.send(Message::Dirty(DirtyFlags::LEADERBOARD));
        }
        Err(err) => {
            tracing::error!(error = %err, "leaderboard refresh failed");
            _ = tx.send(Message::Notice(Notice::warn(format!(
                "Leaderboard refresh failed: {err}"
            ))));
        }
    }
}

/// The post-login load: all three collections at once, no ordering
/// dependency. Each arm repaints only its own region when it resolves.
pub async fn initial_load(client: ApiClient, tx: UnboundedSender<Message>, uid: UserId) {
    tokio::join!(
        portfolio_round(client.clone(), tx.clone(), uid, true),
        market_round(client.clone(), tx.clone()),
        leaderboard_round(client.clone(), tx.clone()),
    );
}

fn trade_notice(is_buy: bool, payload: i64) -> Notice {
    if payload <= 0 {
        Notice::warn("Nothing happened")
    } else if is_buy {
        Notice::info(format!("{payload} now owned"))
    } else {
        Notice::info(format!("+ ${payload}"))
    }
}

/// Post a trade, surface the outcome, then re-fetch the portfolio no matter
/// what came back. Duplicate submissions are dropped while one round-trip is
/// still pending.
pub async fn trade_round(client: ApiClient, tx: UnboundedSender<Message>, request: TradeRequest) {
    let Some(_guard) = TradeGuard::try_acquire() else {
        tracing::warn!(tid = request.tid, "trade dropped, another one is still in flight");
        _ = tx.send(Message::Notice(Notice::warn("Trade already in flight")));
        return;
    };

    match api::trade::place(&client, &request).await {
        Ok(payload) => {
            tracing::info!(
                tid = request.tid,
                is_buy = request.is_buy,
                amount = request.amount,
                payload,
                "trade settled"
            );
            _ = tx.send(Message::Notice(trade_notice(request.is_buy, payload)));
        }
        Err(err) => {
            tracing::error!(error = %err, tid = request.tid, "trade failed");
            _ = tx.send(Message::Notice(Notice::warn(format!("Trade failed: {err}"))));
        }
    }

    portfolio_round(client, tx, request.uid, false).await;
}

fn rt() -> &'static tokio::runtime::Handle {
    RT.get().expect("runtime handle not set")
}

pub fn spawn_initial_load(tx: UnboundedSender<Message>, uid: UserId) {
    let client = api::client::shared().clone();
    rt().spawn(initial_load(client, tx, uid));
}

pub fn spawn_refresh(state: AppState, tx: UnboundedSender<Message>, uid: Option<UserId>) {
    let client = api::client::shared().clone();
    match state {
        AppState::Portfolio => {
            if let Some(uid) = uid {
                rt().spawn(portfolio_round(client, tx, uid, false));
            }
        }
        AppState::Market => {
            rt().spawn(market_round(client, tx));
        }
        AppState::Leaderboard => {
            rt().spawn(leaderboard_round(client, tx));
        }
        AppState::Login => {}
    }
}

pub fn spawn_trade(tx: UnboundedSender<Message>, request: TradeRequest) {
    let client = api::client::shared().clone();
    rt().spawn(trade_round(client, tx, request));
}

/// Row the sell keys act on.
pub fn selected_ownership<'a>(
    portfolio: Option<&'a Portfolio>,
    table: &TableState,
) -> Option<&'a Ownership> {
    portfolio?.ownerships.get(table.selected()?)
}

/// Row the buy keys act on.
pub fn selected_team<'a>(teams: &'a [Team], table: &TableState) -> Option<&'a Team> {
    teams.get(table.selected()?)
}

/// Current price against the most recent history sample, for coloring only.
fn price_trend(team: &Team) -> std::cmp::Ordering {
    team.history
        .last()
        .map_or(std::cmp::Ordering::Equal, |last| team.price.cmp(&last.price))
}

fn clamp_selection(table: &mut TableState, len: usize) {
    match table.selected() {
        Some(idx) if idx >= len => table.select(len.checked_sub(1)),
        None if len > 0 => table.select(Some(0)),
        _ => {}
    }
}

fn loading_paragraph(label: &str) -> Paragraph<'_> {
    Paragraph::new(label)
        .style(styles::gray())
        .alignment(Alignment::Center)
}

pub fn portfolio_view(
    frame: &mut Frame,
    rect: Rect,
    portfolio: Option<&Portfolio>,
    table: &mut TableState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border())
        .title(" Portfolio ");
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let Some(portfolio) = portfolio else {
        frame.render_widget(
            loading_paragraph("Loading portfolio..."),
            crate::ui::rect::centered(0, 1, inner),
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(2),
            height: inner.height,
        });

    let header_lines = List::new(vec![
        ratatui::widgets::ListItem::new(Span::styled(
            portfolio.username.clone(),
            styles::primary(),
        )),
        styles::item(
            "Cash".to_string(),
            format!(
                "{}    Net worth: {}",
                text::money(portfolio.money),
                text::money(portfolio.networth)
            ),
        ),
        ratatui::widgets::ListItem::new(" "),
    ]);
    frame.render_widget(header_lines, chunks[0]);

    if portfolio.ownerships.is_empty() {
        frame.render_widget(
            loading_paragraph(EMPTY_PORTFOLIO_PLACEHOLDER),
            crate::ui::rect::centered(0, 1, chunks[1]),
        );
        return;
    }

    clamp_selection(table, portfolio.ownerships.len());

    const COLUMN_WIDTHS: [usize; 3] = [24, 10, 10];
    let header = Row::new(vec![
        Cell::from("NAME").style(styles::header()),
        Cell::from(text::align_right("PRICE", COLUMN_WIDTHS[1])).style(styles::header()),
        Cell::from(text::align_right("OWNED", COLUMN_WIDTHS[2])).style(styles::header()),
    ]);

    let rows: Vec<Row<'static>> = portfolio
        .ownerships
        .iter()
        .map(|ownership| {
            Row::new(vec![
                Cell::from(ownership.name.clone()),
                Cell::from(text::align_right(
                    &text::money(ownership.price),
                    COLUMN_WIDTHS[1],
                )),
                Cell::from(text::align_right(
                    &ownership.count.to_string(),
                    COLUMN_WIDTHS[2],
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(COLUMN_WIDTHS[0] as u16),
        Constraint::Length(COLUMN_WIDTHS[1] as u16),
        Constraint::Length(COLUMN_WIDTHS[2] as u16),
    ];
    let table_widget = Table::new(rows)
        .header(header)
        .highlight_style(styles::text_selected())
        .widths(&widths)
        .column_spacing(2);
    frame.render_stateful_widget(table_widget, chunks[1], table);
}

pub fn market_view(frame: &mut Frame, rect: Rect, teams: &[Team], table: &mut TableState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(24)])
        .split(rect);

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border())
        .title(" Market ");
    let list_inner = list_block.inner(chunks[0]);
    frame.render_widget(list_block, chunks[0]);

    if teams.is_empty() {
        frame.render_widget(
            loading_paragraph("Loading teams..."),
            crate::ui::rect::centered(0, 1, list_inner),
        );
    } else {
        clamp_selection(table, teams.len());

        const COLUMN_WIDTHS: [usize; 3] = [18, 10, 7];
        let header = Row::new(vec![
            Cell::from("NAME").style(styles::header()),
            Cell::from(text::align_right("PRICE", COLUMN_WIDTHS[1])).style(styles::header()),
            Cell::from(text::align_right("W-L", COLUMN_WIDTHS[2])).style(styles::header()),
        ]);
        let rows: Vec<Row<'static>> = teams
            .iter()
            .map(|team| {
                Row::new(vec![
                    Cell::from(team.name.clone()),
                    Cell::from(text::align_right(
                        &text::money(team.price),
                        COLUMN_WIDTHS[1],
                    ))
                    .style(styles::up(price_trend(team))),
                    Cell::from(text::align_right(
                        &format!("{}-{}", team.wins, team.losses),
                        COLUMN_WIDTHS[2],
                    )),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(COLUMN_WIDTHS[0] as u16),
            Constraint::Length(COLUMN_WIDTHS[1] as u16),
            Constraint::Length(COLUMN_WIDTHS[2] as u16),
        ];
        let table_widget = Table::new(rows)
            .header(header)
            .highlight_style(styles::text_selected())
            .widths(&widths)
            .column_spacing(2);
        frame.render_stateful_widget(
            table_widget,
            Rect {
                x: list_inner.x + 1,
                y: list_inner.y,
                width: list_inner.width.saturating_sub(2),
                height: list_inner.height,
            },
            table,
        );
    }

    team_detail(frame, chunks[1], selected_team(teams, table));
}

/// Right pane of the market tab: price history of the selected team. The
/// chart is an opaque rendering call, this side only supplies the
/// index-augmented series and layout parameters.
fn team_detail(frame: &mut Frame, rect: Rect, team: Option<&Team>) {
    let title = team.map_or_else(
        || " Price history ".to_string(),
        |team| format!(" {}  {} ", team.name, text::money(team.price)),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border())
        .title(Line::from(Span::styled(title, styles::primary())));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let Some(team) = team else {
        return;
    };

    let points = team.history_points();
    if points.len() < 2 {
        frame.render_widget(
            loading_paragraph("No price history"),
            crate::ui::rect::centered(0, 1, inner),
        );
        return;
    }

    let x_max = (points.len() - 1) as f64;
    let y_max = points
        .iter()
        .map(|&(_, price)| price)
        .fold(1.0_f64, f64::max);

    let datasets = vec![Dataset::default()
        .name("price")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(styles::chart_line())
        .data(&points)];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(styles::border())
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(styles::border())
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", styles::label()),
                    Span::styled(text::unit((y_max / 2.0) as i64, 0), styles::label()),
                    Span::styled(text::unit(y_max as i64, 0), styles::label()),
                ]),
        );
    frame.render_widget(chart, inner);
}

pub fn leaderboard_view(frame: &mut Frame, rect: Rect, users: &[UserSummary]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border())
        .title(" Leaderboard ");
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if users.is_empty() {
        frame.render_widget(
            loading_paragraph("Loading leaderboard..."),
            crate::ui::rect::centered(0, 1, inner),
        );
        return;
    }

    const COLUMN_WIDTHS: [usize; 3] = [4, 24, 12];
    let header = Row::new(vec![
        Cell::from("#").style(styles::header()),
        Cell::from("USERNAME").style(styles::header()),
        Cell::from(text::align_right("NET WORTH", COLUMN_WIDTHS[2])).style(styles::header()),
    ]);

    let rows: Vec<Row<'static>> = rank_by_networth(users)
        .into_iter()
        .enumerate()
        .map(|(rank, user)| {
            Row::new(vec![
                Cell::from(format!("{}", rank + 1)).style(styles::gray()),
                Cell::from(user.username),
                Cell::from(text::align_right(
                    &text::money(user.networth),
                    COLUMN_WIDTHS[2],
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(COLUMN_WIDTHS[0] as u16),
        Constraint::Min(COLUMN_WIDTHS[1] as u16),
        Constraint::Length(COLUMN_WIDTHS[2] as u16),
    ];
    let table_widget = Table::new(rows)
        .header(header)
        .widths(&widths)
        .column_spacing(2);
    frame.render_widget(
        table_widget,
        Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(2),
            height: inner.height,
        },
    );
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::widgets::TableState;
    use tokio::sync::mpsc;

    use super::{
        initial_load, leaderboard_view, market_view, portfolio_view, selected_ownership,
        selected_team, trade_notice, trade_round, TradeGuard, EMPTY_PORTFOLIO_PLACEHOLDER,
    };
    use crate::api::client::testing::MockExchange;
    use crate::app::{AppState, Message};
    use crate::data::{Ownership, Portfolio, Team, TradeRequest, UserSummary};

    const PORTFOLIO_BODY: &str = r#"{"mStatus":"ok","mMessage":null,"mData":{"username":"alice","money":90,"networth":120,"ownerships":[]}}"#;

    fn sample_portfolio() -> Portfolio {
        Portfolio {
            username: "alice".into(),
            money: 1234,
            networth: 5678,
            ownerships: vec![
                Ownership {
                    tid: 7,
                    name: "Radiant".into(),
                    price: 12,
                    count: 3,
                },
                Ownership {
                    tid: 9,
                    name: "Dire".into(),
                    price: 4,
                    count: 1,
                },
            ],
        }
    }

    fn buffer_text(terminal: &ratatui::Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(&buffer.get(x, y).symbol);
            }
            out.push('\n');
        }
        out
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<Message>) -> Vec<Message> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    #[test]
    fn price_trend_compares_against_the_latest_sample() {
        use crate::data::PricePoint;
        let mut team = Team {
            tid: 1,
            name: "Alpha".into(),
            price: 12,
            ..Default::default()
        };
        assert_eq!(super::price_trend(&team), std::cmp::Ordering::Equal);

        team.history = vec![PricePoint { price: 10 }, PricePoint { price: 11 }];
        assert_eq!(super::price_trend(&team), std::cmp::Ordering::Greater);

        team.price = 11;
        assert_eq!(super::price_trend(&team), std::cmp::Ordering::Equal);
        team.price = 9;
        assert_eq!(super::price_trend(&team), std::cmp::Ordering::Less);
    }

    #[test]
    fn trade_notices_follow_the_payload_sentinel() {
        assert_eq!(trade_notice(true, 3).text, "3 now owned");
        assert_eq!(trade_notice(false, 40).text, "+ $40");
        assert_eq!(trade_notice(true, 0).text, "Nothing happened");
        assert_eq!(trade_notice(false, -1).text, "Nothing happened");
    }

    #[tokio::test]
    async fn initial_load_fetches_each_collection_once() {
        let server = MockExchange::start(&[
            (
                "/users/42",
                r#"{"mStatus":"ok","mMessage":null,"mData":{"username":"alice","money":10,"networth":10,"ownerships":[]}}"#,
            ),
            (
                "/teams",
                r#"{"mStatus":"ok","mMessage":null,"mData":[{"tid":1,"name":"Alpha","price":5}]}"#,
            ),
            (
                "/users",
                r#"{"mStatus":"ok","mMessage":null,"mData":[{"username":"alice","networth":10}]}"#,
            ),
        ]);
        let (tx, mut rx) = mpsc::unbounded_channel();

        initial_load(server.client(), tx, 42).await;

        assert_eq!(server.hits("/users/42"), 1);
        assert_eq!(server.hits("/teams"), 1);
        assert_eq!(server.hits("/users"), 1);

        // the revealed portfolio brings the tab region to the front
        let messages = drain(&mut rx);
        assert!(messages
            .iter()
            .any(|m| matches!(m, Message::Enter(AppState::Portfolio))));
    }

    #[tokio::test]
    async fn trade_round_notifies_then_refreshes_portfolio_once() {
        // buy with a positive payload
        let server = MockExchange::start(&[
            ("/trade", r#"{"mStatus":"ok","mMessage":null,"mData":3}"#),
            ("/users/7", PORTFOLIO_BODY),
        ]);
        let (tx, mut rx) = mpsc::unbounded_channel();
        trade_round(
            server.client(),
            tx,
            TradeRequest {
                uid: 7,
                tid: 2,
                is_buy: true,
                amount: 1,
            },
        )
        .await;
        assert_eq!(server.hits("/trade"), 1);
        assert_eq!(server.hits("/users/7"), 1);
        let messages = drain(&mut rx);
        assert!(matches!(
            &messages[0],
            Message::Notice(notice) if notice.text == "3 now owned"
        ));

        // sell resolving to the no-op sentinel still refreshes exactly once
        let server = MockExchange::start(&[
            ("/trade", r#"{"mStatus":"ok","mMessage":null,"mData":0}"#),
            ("/users/7", PORTFOLIO_BODY),
        ]);
        let (tx, mut rx) = mpsc::unbounded_channel();
        trade_round(
            server.client(),
            tx,
            TradeRequest {
                uid: 7,
                tid: 2,
                is_buy: false,
                amount: 5,
            },
        )
        .await;
        assert_eq!(server.hits("/trade"), 1);
        assert_eq!(server.hits("/users/7"), 1);
        let messages = drain(&mut rx);
        assert!(matches!(
            &messages[0],
            Message::Notice(notice) if notice.text == "Nothing happened"
        ));

        // a second submission is dropped while one is pending
        let server = MockExchange::start(&[
            ("/trade", r#"{"mStatus":"ok","mMessage":null,"mData":1}"#),
            ("/users/7", PORTFOLIO_BODY),
        ]);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _held = TradeGuard::try_acquire().expect("guard free");
        trade_round(
            server.client(),
            tx,
            TradeRequest {
                uid: 7,
                tid: 2,
                is_buy: true,
                amount: 1,
            },
        )
        .await;
        assert_eq!(server.hits("/trade"), 0);
        assert_eq!(server.hits("/users/7"), 0);
        let messages = drain(&mut rx);
        assert!(matches!(
            &messages[0],
            Message::Notice(notice) if notice.text == "Trade already in flight"
        ));
    }

    #[test]
    fn empty_portfolio_renders_the_placeholder_and_no_rows() {
        let portfolio = Portfolio {
            username: "alice".into(),
            money: 90,
            networth: 120,
            ownerships: vec![],
        };
        let mut terminal =
            ratatui::Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        let mut table = TableState::default();
        terminal
            .draw(|frame| portfolio_view(frame, frame.size(), Some(&portfolio), &mut table))
            .expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains(EMPTY_PORTFOLIO_PLACEHOLDER));
        assert!(text.contains("alice"));
        assert!(!text.contains("OWNED"));
    }

    #[test]
    fn portfolio_rows_preserve_server_order() {
        let portfolio = sample_portfolio();
        let mut terminal =
            ratatui::Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        let mut table = TableState::default();
        terminal
            .draw(|frame| portfolio_view(frame, frame.size(), Some(&portfolio), &mut table))
            .expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains("$ 1,234"));
        let radiant = text.find("Radiant").expect("first row rendered");
        let dire = text.find("Dire").expect("second row rendered");
        assert!(radiant < dire);
    }

    #[test]
    fn sell_actions_bind_to_the_selected_row() {
        let portfolio = sample_portfolio();
        let mut table = TableState::default();

        table.select(Some(0));
        assert_eq!(
            selected_ownership(Some(&portfolio), &table).map(|o| o.tid),
            Some(7)
        );
        table.select(Some(1));
        assert_eq!(
            selected_ownership(Some(&portfolio), &table).map(|o| o.tid),
            Some(9)
        );
        table.select(None);
        assert!(selected_ownership(Some(&portfolio), &table).is_none());
        assert!(selected_ownership(None, &table).is_none());
    }

    #[test]
    fn market_lists_teams_and_charts_the_selection() {
        let teams = vec![
            Team {
                tid: 1,
                name: "Alpha".into(),
                price: 10,
                wins: 3,
                losses: 1,
                history: vec![],
            },
            Team {
                tid: 2,
                name: "Beta".into(),
                price: 4,
                ..Default::default()
            },
        ];
        let mut terminal =
            ratatui::Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        let mut table = TableState::default();
        terminal
            .draw(|frame| market_view(frame, frame.size(), &teams, &mut table))
            .expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains("Alpha"));
        assert!(text.contains("Beta"));
        assert!(text.contains("3-1"));
        // the first row is auto-selected and owns the detail pane
        assert_eq!(selected_team(&teams, &table).map(|t| t.tid), Some(1));
        assert!(text.contains("No price history"));
    }

    #[test]
    fn leaderboard_displays_by_networth_descending() {
        let users = vec![
            UserSummary {
                username: "mid".into(),
                networth: 50,
            },
            UserSummary {
                username: "rich".into(),
                networth: 900,
            },
        ];
        let mut terminal =
            ratatui::Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal
            .draw(|frame| leaderboard_view(frame, frame.size(), &users))
            .expect("draw");

        let text = buffer_text(&terminal);
        let rich = text.find("rich").expect("rich rendered");
        let mid = text.find("mid").expect("mid rendered");
        assert!(rich < mid);
    }
}
