use std::sync::{LazyLock, OnceLock, RwLock};
use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use tokio::sync::mpsc;

use crate::api;
use crate::config::Config;
use crate::data::{Notice, Session, TradeRequest, UserId};
use crate::render::{DirtyFlags, RenderState};
use crate::widgets::{Loading, LoadingWidget, LoginForm, Terminal};
use crate::{helper, system, views};

pub static RT: OnceLock<tokio::runtime::Handle> = OnceLock::new();
pub static SESSION: LazyLock<RwLock<Option<Session>>> = LazyLock::new(Default::default);
pub static NOTICE: LazyLock<RwLock<Option<Notice>>> = LazyLock::new(Default::default);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, strum::EnumIter)]
pub enum AppState {
    #[default]
    Login,
    Portfolio,
    Market,
    Leaderboard,
}

/// Loop messages sent by spawned tasks. The loop is the only writer of UI
/// state, tasks only ever write their own data store.
#[derive(Debug)]
pub enum Message {
    LoggedIn(Session),
    LoginFailed(String),
    Enter(AppState),
    Dirty(DirtyFlags),
    Notice(Notice),
}

fn tabs() -> Vec<AppState> {
    use strum::IntoEnumIterator;
    AppState::iter()
        .filter(|state| *state != AppState::Login)
        .collect()
}

fn next_tab(state: AppState) -> AppState {
    let tabs = tabs();
    let idx = tabs.iter().position(|s| *s == state).unwrap_or(0);
    tabs[(idx + 1) % tabs.len()]
}

fn prev_tab(state: AppState) -> AppState {
    let tabs = tabs();
    let idx = tabs.iter().position(|s| *s == state).unwrap_or(0);
    tabs[(idx + tabs.len() - 1) % tabs.len()]
}

fn session_uid() -> Option<UserId> {
    SESSION
        .read()
        .expect("poison")
        .as_ref()
        .map(|session| session.user_id)
}

pub async fn run(config: Config) {
    let (update_tx, mut update_rx) = mpsc::unbounded_channel::<Message>();
    RT.set(tokio::runtime::Handle::current()).unwrap();

    let mut terminal = Terminal::new();
    let mut state = AppState::Login;
    let mut form = LoginForm::default();
    let loading = Loading::default();
    let mut login_busy = false;
    let mut help_visible = false;
    let mut portfolio_table = TableState::default();
    let mut market_table = TableState::default();

    // credentials from the environment auto-submit once at startup
    if let Some(credentials) = config.credentials.clone() {
        login_busy = true;
        spawn_login(
            update_tx.clone(),
            credentials.username,
            credentials.password,
        );
    }

    // FPS-based rendering, gated by dirty flags
    let render_interval = Duration::from_millis(33);
    let mut render_tick = tokio::time::interval(render_interval);
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut events = crossterm::event::EventStream::new();
    let mut render_state = RenderState::new();
    render_state.mark_all_dirty();

    loop {
        tokio::select! {
            _ = render_tick.tick() => {
                // keep the spinner animating while a login is pending
                if login_busy {
                    render_state.mark_dirty(DirtyFlags::LOGIN);
                }
                if render_state.needs_render() {
                    let spinner = login_busy.then(|| LoadingWidget::from(&loading));
                    draw(
                        &mut terminal,
                        &config,
                        state,
                        &form,
                        spinner,
                        help_visible,
                        &mut portfolio_table,
                        &mut market_table,
                    );
                    render_state.clear();
                } else {
                    render_state.skip();
                }
            }
            Some(message) = update_rx.recv() => {
                apply_message(message, &mut state, &mut login_busy, &update_tx, &mut render_state);
            }
            Some(event) = tokio_stream::StreamExt::next(&mut events) => {
                let event = match event {
                    Ok(crossterm::event::Event::Key(event)) => event,
                    Ok(_) => continue,
                    Err(err) => {
                        tracing::error!("failed to receive terminal events: {err}");
                        continue;
                    }
                };

                if help_visible {
                    if matches!(event, ctrl!('c')) {
                        return;
                    }
                    help_visible = false;
                    render_state.mark_all_dirty();
                    continue;
                }

                if state == AppState::Login {
                    match event {
                        ctrl!('c') | key!(Esc) => return,
                        _ if login_busy => {}
                        _ => {
                            if let Some((username, password)) = form.handle_key(event) {
                                login_busy = true;
                                *NOTICE.write().expect("poison") = None;
                                spawn_login(update_tx.clone(), username, password);
                            }
                            render_state.mark_dirty(DirtyFlags::LOGIN);
                        }
                    }
                    continue;
                }

                if handle_global_keys(
                    event,
                    &mut state,
                    &update_tx,
                    &mut help_visible,
                    &mut portfolio_table,
                    &mut market_table,
                    &mut render_state,
                ) {
                    return;
                }
            }
        }
    }
}

fn apply_message(
    message: Message,
    state: &mut AppState,
    login_busy: &mut bool,
    update_tx: &mpsc::UnboundedSender<Message>,
    render_state: &mut RenderState,
) {
    match message {
        Message::LoggedIn(session) => {
            tracing::info!(uid = session.user_id, "session established");
            let uid = session.user_id;
            *SESSION.write().expect("poison") = Some(session);
            *login_busy = false;
            // one-shot transition: the tab region replaces the login form
            *state = AppState::Portfolio;
            system::spawn_initial_load(update_tx.clone(), uid);
            render_state.mark_all_dirty();
        }
        Message::LoginFailed(text) => {
            *login_busy = false;
            *NOTICE.write().expect("poison") = Some(Notice::warn(text));
            render_state.mark_dirty(DirtyFlags::LOGIN | DirtyFlags::FOOTER);
        }
        Message::Enter(next) => {
            if *state != next {
                *state = next;
                render_state.mark_all_dirty();
            }
        }
        Message::Dirty(flags) => render_state.mark_dirty(flags),
        Message::Notice(notice) => {
            *NOTICE.write().expect("poison") = Some(notice);
            render_state.mark_dirty(DirtyFlags::FOOTER);
        }
    }
}

fn handle_global_keys(
    event: crossterm::event::KeyEvent,
    state: &mut AppState,
    update_tx: &mpsc::UnboundedSender<Message>,
    help_visible: &mut bool,
    portfolio_table: &mut TableState,
    market_table: &mut TableState,
    render_state: &mut RenderState,
) -> bool {
    match event {
        ctrl!('c') | key!('q') => return true,
        key!('1') if *state != AppState::Portfolio => {
            *state = AppState::Portfolio;
            render_state.mark_all_dirty();
        }
        key!('2') if *state != AppState::Market => {
            *state = AppState::Market;
            render_state.mark_all_dirty();
        }
        key!('3') if *state != AppState::Leaderboard => {
            *state = AppState::Leaderboard;
            render_state.mark_all_dirty();
        }
        key!(Tab) => {
            *state = next_tab(*state);
            render_state.mark_all_dirty();
        }
        shift!(BackTab) => {
            *state = prev_tab(*state);
            render_state.mark_all_dirty();
        }
        key!('?') | shift!('?') => {
            *help_visible = true;
            render_state.mark_dirty(DirtyFlags::HELP);
        }
        key!('r') | shift!('R') => {
            system::spawn_refresh(*state, update_tx.clone(), session_uid());
            render_state.mark_all_dirty();
        }
        key!(Up) | key!('k') => {
            move_selection(*state, portfolio_table, market_table, true, render_state);
        }
        key!(Down) | key!('j') => {
            move_selection(*state, portfolio_table, market_table, false, render_state);
        }
        key!('b') if *state == AppState::Market => {
            submit_buy(update_tx, market_table, 1);
        }
        shift!('B') if *state == AppState::Market => {
            submit_buy(update_tx, market_table, 5);
        }
        key!('s') if *state == AppState::Portfolio => {
            submit_sell(update_tx, portfolio_table, 1);
        }
        shift!('S') if *state == AppState::Portfolio => {
            submit_sell(update_tx, portfolio_table, 5);
        }
        _ => (),
    }
    false
}

fn move_selection(
    state: AppState,
    portfolio_table: &mut TableState,
    market_table: &mut TableState,
    up: bool,
    render_state: &mut RenderState,
) {
    let (table, len, flags) = match state {
        AppState::Portfolio => {
            let len = system::PORTFOLIO
                .read()
                .expect("poison")
                .as_ref()
                .map_or(0, |portfolio| portfolio.ownerships.len());
            (portfolio_table, len, DirtyFlags::PORTFOLIO)
        }
        AppState::Market => {
            let len = system::MARKET.read().expect("poison").len();
            (market_table, len, DirtyFlags::MARKET)
        }
        _ => return,
    };

    let idx = if up {
        helper::select_prev(table.selected(), len)
    } else {
        helper::select_next(table.selected(), len)
    };
    table.select(idx);
    render_state.mark_dirty(flags);
}

fn submit_buy(update_tx: &mpsc::UnboundedSender<Message>, market_table: &TableState, amount: i64) {
    let Some(uid) = session_uid() else { return };
    let teams = system::MARKET.read().expect("poison");
    if let Some(team) = system::selected_team(&teams, market_table) {
        system::spawn_trade(
            update_tx.clone(),
            TradeRequest {
                uid,
                tid: team.tid,
                is_buy: true,
                amount,
            },
        );
    }
}

fn submit_sell(
    update_tx: &mpsc::UnboundedSender<Message>,
    portfolio_table: &TableState,
    amount: i64,
) {
    let Some(uid) = session_uid() else { return };
    let portfolio = system::PORTFOLIO.read().expect("poison");
    if let Some(ownership) = system::selected_ownership(portfolio.as_ref(), portfolio_table) {
        system::spawn_trade(
            update_tx.clone(),
            TradeRequest {
                uid,
                tid: ownership.tid,
                is_buy: false,
                amount,
            },
        );
    }
}

fn spawn_login(update_tx: mpsc::UnboundedSender<Message>, username: String, password: String) {
    let client = api::client::shared().clone();
    RT.get().expect("runtime handle not set").spawn(async move {
        match api::session::login(&client, &username, &password).await {
            Ok(uid) => {
                tracing::info!(uid, "login accepted");
                _ = update_tx.send(Message::LoggedIn(Session {
                    user_id: uid,
                    username,
                }));
            }
            Err(err) => {
                tracing::warn!(error = %err, "login rejected");
                _ = update_tx.send(Message::LoginFailed(format!("Login failed: {err}")));
            }
        }
    });
}

#[allow(clippy::too_many_arguments)]
fn draw(
    terminal: &mut Terminal,
    config: &Config,
    state: AppState,
    form: &LoginForm,
    spinner: Option<LoadingWidget>,
    help_visible: bool,
    portfolio_table: &mut TableState,
    market_table: &mut TableState,
) {
    _ = terminal.draw(|frame| {
        let rect = frame.size();

        if state == AppState::Login {
            let notice = NOTICE.read().expect("poison");
            views::login::render(frame, rect, form, spinner, notice.as_ref());
            return;
        }

        let top = Rect { height: 1, ..rect };
        views::navbar::render(frame, top, state);

        let bottom = Rect {
            y: rect.y + rect.height - 1,
            height: 1,
            ..rect
        };
        views::footer::render(frame, bottom, &config.base_url);

        let rect = Rect {
            y: rect.y + 1,
            height: rect.height - 2,
            ..rect
        };
        match state {
            AppState::Portfolio => {
                let portfolio = system::PORTFOLIO.read().expect("poison");
                system::portfolio_view(frame, rect, portfolio.as_ref(), portfolio_table);
            }
            AppState::Market => {
                let teams = system::MARKET.read().expect("poison");
                system::market_view(frame, rect, &teams, market_table);
            }
            AppState::Leaderboard => {
                let users = system::LEADERBOARD.read().expect("poison");
                system::leaderboard_view(frame, rect, &users);
            }
            AppState::Login => {}
        }

        if help_visible {
            views::help::render(frame, rect);
        }
    });
}
